use std::cell::RefCell;
use std::rc::Rc;
use web_sys::Element;
use yew::prelude::*;

use super::dom::{drive_on_scroll, element_rect, viewport_size, FrameClock, FrameScheduler};
use super::hooks::{use_in_view_once, use_site};
use super::video::VideoPlayer;
use super::NotFoundPage;
use crate::content::{CategoryPage, ProjectEntry, TechBadge};
use crate::lifecycle::MountScope;
use crate::motion::sections::page_backdrop_offset;
use crate::motion::tilt::{pointer_offset, reveal_delay_seconds, CardTilt, Tilt};

#[derive(Properties, PartialEq)]
pub struct CategoryViewProps {
    pub slug: String,
}

#[function_component(CategoryView)]
pub fn category_view(props: &CategoryViewProps) -> Html {
    let site = use_site();

    match site.content.page(&props.slug) {
        Some(page) => html! { <CategoryPageView key={page.slug.clone()} page={page.clone()} /> },
        None => html! { <NotFoundPage /> },
    }
}

#[derive(Properties, PartialEq)]
struct CategoryPageViewProps {
    page: CategoryPage,
}

#[function_component(CategoryPageView)]
fn category_page_view(props: &CategoryPageViewProps) -> Html {
    let site = use_site();
    let page_ref = use_node_ref();
    let backdrop_percent = use_state_eq(|| 0.0_f64);
    let playing = use_state(|| None::<ProjectEntry>);

    {
        let page_ref = page_ref.clone();
        let backdrop_percent = backdrop_percent.clone();
        let reduced_motion = site.reduced_motion;

        use_effect_with(props.page.slug.clone(), move |_| {
            let scope = MountScope::new();

            if !reduced_motion {
                drive_on_scroll(&scope, move |_timestamp| {
                    if let Some(rect) = element_rect(&page_ref) {
                        let (_, viewport_height) = viewport_size();
                        backdrop_percent.set(page_backdrop_offset(rect, viewport_height));
                    }
                    false
                });
            }

            move || scope.teardown()
        });
    }

    let on_play = {
        let playing = playing.clone();
        Callback::from(move |project: ProjectEntry| playing.set(Some(project)))
    };

    let on_close = {
        let playing = playing.clone();
        Callback::from(move |_: ()| playing.set(None))
    };

    let page = &props.page;
    let backdrop_style = format!(
        "background-image: url('{}'); transform: translateY({:.2}%);",
        page.backdrop, *backdrop_percent
    );

    html! {
        <div ref={page_ref} class={classes!("category", page.slug.clone())}>
            <div class="page-backdrop" style={backdrop_style} aria-hidden="true" />
            <header class="page-header" aria-labelledby="page-heading">
                <h1 id="page-heading">{page.title.clone()}</h1>
                <p class="page-subtitle">{page.subtitle.clone()}</p>
            </header>

            if !page.tech_stack.is_empty() {
                <ul class="tech-strip" aria-label="Tools">
                    { for page.tech_stack.iter().map(tech_badge) }
                </ul>
            }

            <ProjectsGrid projects={page.projects.clone()} on_play={on_play} />

            if let Some(project) = (*playing).clone() {
                <VideoPlayer project={project} on_close={on_close} />
            }
        </div>
    }
}

fn tech_badge(badge: &TechBadge) -> Html {
    html! {
        <li class="tech-badge">
            <img src={badge.icon.clone()} alt={badge.name.clone()} title={badge.name.clone()} width="40" height="40" />
        </li>
    }
}

#[derive(Properties, PartialEq)]
struct ProjectsGridProps {
    projects: Vec<ProjectEntry>,
    on_play: Callback<ProjectEntry>,
}

#[function_component(ProjectsGrid)]
fn projects_grid(props: &ProjectsGridProps) -> Html {
    if props.projects.is_empty() {
        return html! {
            <p class="muted projects-empty">{"Projects for this category are on their way."}</p>
        };
    }

    html! {
        <ul class="projects-grid">
            { for props.projects.iter().enumerate().map(|(index, project)| html! {
                <ProjectCard
                    key={project.id}
                    project={project.clone()}
                    index={index}
                    on_play={props.on_play.clone()}
                />
            }) }
        </ul>
    }
}

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    project: ProjectEntry,
    index: usize,
    on_play: Callback<ProjectEntry>,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let site = use_site();
    let card_ref = use_node_ref();
    let revealed = use_in_view_once(card_ref.clone());
    let hovered = use_state_eq(|| false);
    let tilt = use_state_eq(Tilt::default);
    let follower = use_mut_ref(|| CardTilt::new(site.config.motion.smoothing_rate));
    let frames = use_mut_ref(|| None::<FrameScheduler>);
    let reduced_motion = site.reduced_motion;

    {
        let follower = follower.clone();
        let frames = frames.clone();
        let tilt = tilt.clone();

        use_effect_with((), move |_| {
            let scope = MountScope::new();
            let clock = FrameClock::default();

            let scheduler = FrameScheduler::new(&scope, move |timestamp| {
                let mut follower = follower.borrow_mut();
                let next = if reduced_motion {
                    follower.snap()
                } else {
                    follower.step(clock.delta_seconds(timestamp))
                };
                tilt.set(next);

                if follower.is_settled() {
                    clock.reset();
                    false
                } else {
                    true
                }
            });
            *frames.borrow_mut() = Some(scheduler);

            move || {
                frames.borrow_mut().take();
                scope.teardown();
            }
        });
    }

    let onmousemove = {
        let card_ref = card_ref.clone();
        let follower = follower.clone();
        let frames = frames.clone();
        let hovered = hovered.clone();
        Callback::from(move |event: MouseEvent| {
            let Some(card) = card_ref.cast::<Element>() else {
                return;
            };
            let rect = card.get_bounding_client_rect();
            let (dx, dy) = pointer_offset(
                f64::from(event.client_x()),
                f64::from(event.client_y()),
                rect.left(),
                rect.top(),
                rect.width(),
                rect.height(),
            );

            hovered.set(true);
            follower.borrow_mut().pointer_moved(dx, dy);
            request_frame(&frames);
        })
    };

    let onmouseleave = {
        let follower = follower.clone();
        let frames = frames.clone();
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| {
            hovered.set(false);
            follower.borrow_mut().pointer_left();
            request_frame(&frames);
        })
    };

    let project = &props.project;
    let card_style = format!(
        "{} --reveal-delay: {:.1}s;",
        tilt.card_style(),
        reveal_delay_seconds(props.index)
    );

    let play_button = project.video_ref.as_ref().map(|_| {
        let on_play = props.on_play.clone();
        let project = project.clone();
        let label = format!("Play {}", project.title);
        html! {
            <button
                class="project-play"
                type="button"
                aria-label={label}
                onclick={Callback::from(move |_: MouseEvent| on_play.emit(project.clone()))}
            >
                <span aria-hidden="true">{"▶"}</span>
            </button>
        }
    });

    html! {
        <li
            ref={card_ref}
            class={classes!("project-card", revealed.then_some("is-revealed"))}
            style={card_style}
            onmousemove={onmousemove}
            onmouseleave={onmouseleave}
        >
            <div class="project-media">
                <img
                    src={project.image_ref.clone()}
                    alt={project.title.clone()}
                    loading="lazy"
                    style={tilt.image_style(*hovered)}
                />
                { for play_button }
            </div>
            <div class="project-copy">
                <span class="project-category">{project.category.clone()}</span>
                <h2 class="project-title">{project.title.clone()}</h2>
                <p class="muted">{project.description.clone()}</p>
                if let Some(url) = project.external_url.clone() {
                    <a class="link" href={url} target="_blank" rel="noopener noreferrer">
                        {"View project"}
                        <span class="external-mark" aria-hidden="true">{"↗"}</span>
                        <span class="sr-only">{" (opens in a new tab)"}</span>
                    </a>
                }
            </div>
        </li>
    }
}

fn request_frame(frames: &Rc<RefCell<Option<FrameScheduler>>>) {
    if let Some(frames) = frames.borrow().as_ref() {
        frames.request();
    }
}
