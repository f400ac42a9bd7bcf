use serde_json::json;
use std::rc::Rc;
use web_sys::Element;
use yew::prelude::*;

use super::dom::{drive_on_scroll, element_rect, observe_intersection, viewport_size};
use super::hooks::use_site;
use crate::content::TimelineEntry;
use crate::lifecycle::MountScope;
use crate::logging::{log_event, LogLevel};
use crate::motion::{
    carousel_frame, section_height_vh, timeline_progress, CardPlacement, ScrollProgress,
    ScrollTracker, SectionObservation, SectionState, ViewportClass, VisibilityMachine,
};

#[derive(Properties, PartialEq)]
pub struct CareerTimelineProps {
    pub entries: Rc<Vec<TimelineEntry>>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub title_docked: bool,
    pub viewport: ViewportClass,
}

#[function_component(CareerTimeline)]
pub fn career_timeline(props: &CareerTimelineProps) -> Html {
    let site = use_site();
    let section_ref = use_node_ref();
    let sentinel_ref = use_node_ref();
    let progress = use_state_eq(|| ScrollProgress::START);
    let section_state = use_state_eq(SectionState::default);
    let sentinel_visible = use_state_eq(|| false);
    let machine = use_mut_ref(VisibilityMachine::new);
    let count = props.entries.len();

    {
        let section_ref = section_ref.clone();
        let sentinel_ref = sentinel_ref.clone();
        let progress = progress.clone();
        let section_state = section_state.clone();
        let sentinel_visible = sentinel_visible.clone();
        let machine = machine.clone();
        let epsilon = site.config.motion.progress_epsilon;
        let log_level = site.config.log_level;

        use_effect_with(count, move |count| {
            let scope = MountScope::new();

            if *count > 0 {
                let mut tracker = ScrollTracker::new(epsilon);
                let tick = {
                    let machine = machine.clone();
                    let section_state = section_state.clone();
                    move |_timestamp: f64| {
                        let Some(rect) = element_rect(&section_ref) else {
                            return false;
                        };
                        let (_, viewport_height) = viewport_size();

                        let sample = timeline_progress(rect, viewport_height);
                        if let Some(changed) = tracker.observe(sample) {
                            progress.set(changed);
                        }

                        let observation =
                            SectionObservation::from_rect(rect.top, rect.height, viewport_height);
                        let next = machine.borrow_mut().observe_section(observation);
                        if let Some(next) = next {
                            log_event(
                                log_level,
                                LogLevel::Debug,
                                "timeline_state_changed",
                                json!({ "state": next.as_str(), "trigger": "scroll" }),
                            );
                            section_state.set(next);
                        }

                        false
                    }
                };
                drive_on_scroll(&scope, tick);

                if let Some(sentinel) = sentinel_ref.cast::<Element>() {
                    observe_intersection(&scope, &sentinel, move |entry| {
                        let visible = entry.is_intersecting();
                        sentinel_visible.set(visible);

                        let next = machine.borrow_mut().observe_sentinel(visible);
                        if let Some(next) = next {
                            log_event(
                                log_level,
                                LogLevel::Debug,
                                "timeline_state_changed",
                                json!({ "state": next.as_str(), "trigger": "sentinel" }),
                            );
                            section_state.set(next);
                        }
                    });
                }
            }

            move || scope.teardown()
        });
    }

    {
        let machine = machine.clone();
        let section_state = section_state.clone();
        use_effect_with(props.title_docked, move |docked| {
            let next = machine.borrow_mut().set_title_docked(*docked);
            if let Some(next) = next {
                section_state.set(next);
            }
            || ()
        });
    }

    let Some(frame) = carousel_frame(
        &site.config.motion,
        count,
        *progress,
        props.viewport,
        *sentinel_visible,
    ) else {
        return html! {};
    };

    let section_style = format!("height: {}vh;", section_height_vh(count));
    let counter = format!("{:02} / {:02}", frame.active + 1, count);

    html! {
        <>
            <section
                ref={section_ref}
                class={classes!("timeline", props.class.clone())}
                style={section_style}
                aria-label="Career timeline"
            >
                <div class={classes!("timeline-stage", section_state.class(), props.viewport.as_str())}>
                    <ol class="timeline-track">
                        { for frame.cards.iter().map(|placement| timeline_card(&props.entries[placement.index], placement)) }
                    </ol>
                    <p class="timeline-counter" aria-live="polite">{counter}</p>
                </div>
            </section>
            <div ref={sentinel_ref} class="timeline-sentinel" aria-hidden="true" />
        </>
    }
}

fn timeline_card(entry: &TimelineEntry, placement: &CardPlacement) -> Html {
    let active = placement.is_active();

    html! {
        <li
            key={placement.index}
            class={classes!("timeline-card", entry.color_tag.clone(), active.then_some("is-active"))}
            style={placement.style()}
            aria-current={active.then_some("step")}
        >
            <span class="timeline-date">{entry.date_range.clone()}</span>
            <h3 class="timeline-title">{entry.title.clone()}</h3>
            <p class="timeline-organization">{entry.organization.clone()}</p>
            <p class="timeline-description">{entry.description.clone()}</p>
        </li>
    }
}
