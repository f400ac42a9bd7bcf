use gloo_events::EventListener;
use serde_json::json;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{window, Element, HtmlInputElement, HtmlVideoElement, KeyboardEvent};
use yew::prelude::*;

use super::hooks::use_site;
use super::SiteContext;
use crate::content::ProjectEntry;
use crate::lifecycle::MountScope;
use crate::logging::LogLevel;
use crate::playback::PlaybackState;

pub enum PlaybackAction {
    TogglePlay,
    ToggleMute,
    PlayRejected,
    MetadataLoaded(f64),
    TimeUpdated { current_time: f64, duration: f64 },
    Seeked(f64),
    FullscreenChanged(bool),
    Close,
}

impl Reducible for PlaybackState {
    type Action = PlaybackAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let state = *self;
        let next = match action {
            PlaybackAction::TogglePlay => state.toggled_play(),
            PlaybackAction::ToggleMute => state.toggled_mute(),
            PlaybackAction::PlayRejected => state.play_rejected(),
            PlaybackAction::MetadataLoaded(duration) => state.metadata_loaded(duration),
            PlaybackAction::TimeUpdated {
                current_time,
                duration,
            } => state.time_updated(current_time, duration),
            PlaybackAction::Seeked(percent) => state.seeked(percent),
            PlaybackAction::FullscreenChanged(fullscreen) => state.fullscreen_changed(fullscreen),
            PlaybackAction::Close => state.closed(),
        };
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
pub struct VideoPlayerProps {
    pub project: ProjectEntry,
    pub on_close: Callback<()>,
}

#[function_component(VideoPlayer)]
pub fn video_player(props: &VideoPlayerProps) -> Html {
    let site = use_site();
    let state = use_reducer_eq(PlaybackState::opened);
    let video_ref = use_node_ref();
    let frame_ref = use_node_ref();

    {
        let video_ref = video_ref.clone();
        let state = state.clone();
        let site = site.clone();
        use_effect_with(state.playing, move |playing| {
            if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                if *playing {
                    start_playback(video, state.dispatcher(), site);
                } else {
                    let _ = video.pause();
                }
            }
            || ()
        });
    }

    {
        let video_ref = video_ref.clone();
        use_effect_with(state.muted, move |muted| {
            if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                video.set_muted(*muted);
            }
            || ()
        });
    }

    let close = {
        let video_ref = video_ref.clone();
        let dispatcher = state.dispatcher();
        let on_close = props.on_close.clone();
        Callback::from(move |_: ()| {
            if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                let _ = video.pause();
            }
            if let Some(document) = window().and_then(|w| w.document()) {
                if document.fullscreen_element().is_some() {
                    document.exit_fullscreen();
                }
            }
            dispatcher.dispatch(PlaybackAction::Close);
            on_close.emit(());
        })
    };

    {
        let dispatcher = state.dispatcher();
        let close = close.clone();
        use_effect_with((), move |_| {
            let scope = MountScope::new();

            if let Some(document) = window().and_then(|w| w.document()) {
                let watched = document.clone();
                scope.hold(EventListener::new(&document, "fullscreenchange", move |_| {
                    dispatcher.dispatch(PlaybackAction::FullscreenChanged(
                        watched.fullscreen_element().is_some(),
                    ));
                }));
            }

            if let Some(win) = window() {
                scope.hold(EventListener::new(&win, "keydown", move |event| {
                    let escape = event
                        .dyn_ref::<KeyboardEvent>()
                        .map(|key| key.key() == "Escape")
                        .unwrap_or(false);
                    if escape {
                        close.emit(());
                    }
                }));
            }

            move || scope.teardown()
        });
    }

    let on_toggle_play = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(PlaybackAction::TogglePlay))
    };

    let on_toggle_mute = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(PlaybackAction::ToggleMute))
    };

    let on_seek = {
        let video_ref = video_ref.clone();
        let state = state.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            let Ok(percent) = input.value().parse::<f64>() else {
                return;
            };
            if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                video.set_current_time(state.seek_time_for_percent(percent));
            }
            state.dispatch(PlaybackAction::Seeked(percent));
        })
    };

    let on_fullscreen = {
        let frame_ref = frame_ref.clone();
        let fullscreen = state.fullscreen;
        let site = site.clone();
        Callback::from(move |_: MouseEvent| {
            if fullscreen {
                if let Some(document) = window().and_then(|w| w.document()) {
                    document.exit_fullscreen();
                }
                return;
            }

            let Some(frame) = frame_ref.cast::<Element>() else {
                return;
            };
            if let Err(err) = frame.request_fullscreen() {
                site.log(
                    LogLevel::Info,
                    "fullscreen_request_failed",
                    json!({ "error": format!("{err:?}") }),
                );
            }
        })
    };

    let on_metadata = {
        let video_ref = video_ref.clone();
        let dispatcher = state.dispatcher();
        Callback::from(move |_: Event| {
            if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                dispatcher.dispatch(PlaybackAction::MetadataLoaded(video.duration()));
            }
        })
    };

    let on_time_update = {
        let video_ref = video_ref.clone();
        let dispatcher = state.dispatcher();
        Callback::from(move |_: Event| {
            if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                dispatcher.dispatch(PlaybackAction::TimeUpdated {
                    current_time: video.current_time(),
                    duration: video.duration(),
                });
            }
        })
    };

    let on_backdrop = {
        let close = close.clone();
        Callback::from(move |_: MouseEvent| close.emit(()))
    };

    let project = &props.project;
    let source = project.video_ref.clone().unwrap_or_default();
    let progress = format!("{:.1}", state.progress_percent());

    html! {
        <div class="video-overlay" role="dialog" aria-modal="true" aria-label={project.title.clone()}>
            <div class="video-backdrop" onclick={on_backdrop} />
            <div ref={frame_ref} class={classes!("video-frame", state.fullscreen.then_some("is-fullscreen"))}>
                <video
                    ref={video_ref}
                    class="video-element"
                    src={source}
                    poster={project.image_ref.clone()}
                    playsinline="true"
                    onclick={on_toggle_play.clone()}
                    onloadedmetadata={on_metadata}
                    ontimeupdate={on_time_update}
                />
                <div class="video-controls">
                    <button
                        class="video-button"
                        type="button"
                        aria-label={if state.playing { "Pause" } else { "Play" }}
                        onclick={on_toggle_play}
                    >
                        <span aria-hidden="true">{if state.playing { "❚❚" } else { "▶" }}</span>
                    </button>
                    <input
                        class="video-seek"
                        type="range"
                        min="0"
                        max="100"
                        step="0.1"
                        value={progress}
                        aria-label="Seek"
                        oninput={on_seek}
                    />
                    <span class="video-time">{state.time_label()}</span>
                    <button
                        class="video-button"
                        type="button"
                        aria-label={if state.muted { "Unmute" } else { "Mute" }}
                        aria-pressed={state.muted.to_string()}
                        onclick={on_toggle_mute}
                    >
                        <span aria-hidden="true">{if state.muted { "🔇" } else { "🔊" }}</span>
                    </button>
                    <button
                        class="video-button"
                        type="button"
                        aria-label={if state.fullscreen { "Exit fullscreen" } else { "Fullscreen" }}
                        onclick={on_fullscreen}
                    >
                        <span aria-hidden="true">{"⛶"}</span>
                    </button>
                    <button
                        class="video-button video-close"
                        type="button"
                        aria-label="Close video"
                        onclick={close.reform(|_: MouseEvent| ())}
                    >
                        <span aria-hidden="true">{"✕"}</span>
                    </button>
                </div>
            </div>
            <div class="video-caption">
                <h2>{project.title.clone()}</h2>
                <p class="muted">{project.description.clone()}</p>
            </div>
        </div>
    }
}

fn start_playback(
    video: HtmlVideoElement,
    dispatcher: UseReducerDispatcher<PlaybackState>,
    site: SiteContext,
) {
    let promise = match video.play() {
        Ok(promise) => promise,
        Err(err) => {
            reject_playback(&dispatcher, &site, &err);
            return;
        }
    };

    spawn_local(async move {
        if let Err(err) = JsFuture::from(promise).await {
            reject_playback(&dispatcher, &site, &err);
        }
    });
}

fn reject_playback(
    dispatcher: &UseReducerDispatcher<PlaybackState>,
    site: &SiteContext,
    err: &JsValue,
) {
    site.log(
        LogLevel::Info,
        "video_play_rejected",
        json!({ "error": format!("{err:?}") }),
    );
    dispatcher.dispatch(PlaybackAction::PlayRejected);
}
