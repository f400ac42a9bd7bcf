use yew::prelude::*;

use super::dom::{drive_on_scroll, element_rect, viewport_size, FrameClock};
use super::hooks::{use_in_view_once, use_site, use_viewport_class};
use super::timeline::CareerTimeline;
use super::SiteLink;
use crate::content::{ContactDetails, SkillCard, SocialLink};
use crate::lifecycle::MountScope;
use crate::motion::sections::HomeFrame;
use crate::motion::tilt::reveal_delay_seconds;
use crate::motion::{region_progress, ScrollOffset, ScrollProgress, Smoothed};

/// A sticky title counts as docked while it sits within this many px of
/// its sticky offset.
const DOCK_TOLERANCE_PX: f64 = 1.0;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let site = use_site();
    let viewport = use_viewport_class(site.config.motion.narrow_breakpoint_px);
    let page_ref = use_node_ref();
    let title_ref = use_node_ref();
    let skills_ref = use_node_ref();
    let skills_seen = use_in_view_once(skills_ref.clone());
    let reduced_motion = site.reduced_motion;
    let frame = use_state_eq(|| HomeFrame::at(ScrollProgress::START, reduced_motion));
    let title_docked = use_state_eq(|| false);
    let timeline = use_memo(site.content.clone(), |content| content.timeline.clone());

    {
        let page_ref = page_ref.clone();
        let title_ref = title_ref.clone();
        let frame = frame.clone();
        let title_docked = title_docked.clone();
        let rate = site.config.motion.smoothing_rate;
        let dock_offset_px = site.config.motion.dock_offset_px;

        use_effect_with((), move |_| {
            let scope = MountScope::new();
            let mut progress = Smoothed::new(0.0, rate);
            let mut measured = false;
            let clock = FrameClock::default();

            drive_on_scroll(&scope, move |timestamp| {
                let (_, viewport_height) = viewport_size();

                if let Some(rect) = element_rect(&page_ref) {
                    let target = region_progress(rect, viewport_height, ScrollOffset::StartToEnd);
                    progress.set_target(target.value());
                    if reduced_motion || !measured {
                        progress.snap();
                        measured = true;
                    }
                }

                if let Some(title) = element_rect(&title_ref) {
                    title_docked.set((title.top - dock_offset_px).abs() <= DOCK_TOLERANCE_PX);
                }

                let value = progress.step(clock.delta_seconds(timestamp));
                frame.set(HomeFrame::at(ScrollProgress::new(value), reduced_motion));

                if progress.is_settled() {
                    clock.reset();
                    false
                } else {
                    true
                }
            });

            move || scope.teardown()
        });
    }

    let hero = &site.content.hero;
    let title_style = format!("top: {:.0}px;", site.config.motion.dock_offset_px);

    html! {
        <div ref={page_ref} class="home">
            <div class="home-grid" style={frame.grid_style()} aria-hidden="true" />

            <section id="hero" class="hero" aria-labelledby="hero-heading">
                <div class="hero-copy" style={frame.hero_text_style()}>
                    <h1 id="hero-heading" class="hero-headline">
                        { for hero.headline.iter().map(|line| html! { <span class="hero-line">{line.clone()}</span> }) }
                    </h1>
                    <p class="hero-tagline">{hero.tagline.clone()}</p>
                    <a class="hero-cta" href="#skills">{hero.cta.clone()}</a>
                </div>
                <div class="hero-media">
                    <img
                        src={hero.image.clone()}
                        alt={site.content.owner.clone()}
                        style={frame.hero_image_style()}
                    />
                </div>
            </section>

            <section
                id="skills"
                ref={skills_ref}
                class={classes!("skills", skills_seen.then_some("is-revealed"))}
                style={frame.skills_style()}
                aria-labelledby="skills-heading"
            >
                <h2 id="skills-heading">{"What I Do"}</h2>
                <ul class="skills-grid">
                    { for site.content.skills.iter().enumerate().map(|(index, skill)| skill_card(index, skill)) }
                </ul>
            </section>

            <section id="career" class="career" aria-labelledby="career-heading">
                <h2
                    id="career-heading"
                    ref={title_ref}
                    class={classes!("career-title", title_docked.then_some("is-docked"))}
                    style={title_style}
                >
                    {"CAREER HIGHLIGHTS"}
                </h2>
                <CareerTimeline entries={timeline} title_docked={*title_docked} viewport={viewport} />
            </section>

            <ContactSection
                details={site.content.contact.clone()}
                socials={site.content.socials.clone()}
                style={frame.contact_style()}
            />
        </div>
    }
}

fn skill_card(index: usize, skill: &SkillCard) -> Html {
    let delay = format!("--reveal-delay: {:.1}s;", reveal_delay_seconds(index));

    html! {
        <li class={classes!("skill-card", skill.color_class.clone())} style={delay}>
            <SiteLink href={skill.link.clone()} class={classes!("skill-link")}>
                <span class="skill-icon" aria-hidden="true">{skill.icon.clone()}</span>
                <h3>{skill.title.clone()}</h3>
                <p class="muted">{skill.description.clone()}</p>
            </SiteLink>
        </li>
    }
}

#[derive(Properties, PartialEq)]
struct ContactSectionProps {
    details: ContactDetails,
    socials: Vec<SocialLink>,
    #[prop_or_default]
    style: AttrValue,
}

#[function_component(ContactSection)]
fn contact_section(props: &ContactSectionProps) -> Html {
    let mailto = format!("mailto:{}", props.details.email);

    html! {
        <section id="contact" class="contact" style={props.style.clone()} aria-labelledby="contact-heading">
            <h2 id="contact-heading">{"Let's Work Together"}</h2>
            <p class="contact-pitch">{props.details.pitch.clone()}</p>
            <dl class="contact-details">
                <dt>{"Email"}</dt>
                <dd><a class="link" href={mailto}>{props.details.email.clone()}</a></dd>
                <dt>{"Location"}</dt>
                <dd>{props.details.location.clone()}</dd>
            </dl>
            <form class="contact-form" onsubmit={Callback::from(|event: SubmitEvent| event.prevent_default())}>
                <label class="sr-only" for="contact-email">{"Your email"}</label>
                <input
                    id="contact-email"
                    type="email"
                    placeholder={props.details.email_placeholder.clone()}
                />
                <button type="submit" aria-label="Send">
                    <span aria-hidden="true">{"➤"}</span>
                </button>
            </form>
            <p class="muted">{props.details.reply_note.clone()}</p>
            <ul class="inline-list">
                { for props.socials.iter().map(|social| html! {
                    <li>
                        <a class="link" href={social.href.clone()} target="_blank" rel="noopener noreferrer">
                            {social.name.clone()}
                            <span class="sr-only">{" (opens in a new tab)"}</span>
                        </a>
                    </li>
                }) }
            </ul>
        </section>
    }
}
