use gloo_events::EventListener;
use gloo_render::{request_animation_frame, AnimationFrame};
use js_sys::Array;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{window, Element, IntersectionObserver, IntersectionObserverEntry};
use yew::NodeRef;

use crate::lifecycle::{FrameGate, LiveFlag, MountScope};
use crate::motion::RegionRect;

pub fn viewport_size() -> (f64, f64) {
    let Some(win) = window() else {
        return (1280.0, 720.0);
    };

    let width = win
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(1280.0);
    let height = win
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(720.0);

    (width, height)
}

pub fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

pub fn element_rect(node: &NodeRef) -> Option<RegionRect> {
    let element = node.cast::<Element>()?;
    let rect = element.get_bounding_client_rect();
    Some(RegionRect::new(rect.top(), rect.height()))
}

pub fn listen_window<F>(scope: &MountScope, event: &'static str, mut handler: F)
where
    F: FnMut() + 'static,
{
    if let Some(win) = window() {
        scope.hold(EventListener::new(&win, event, move |_| handler()));
    }
}

/// Watches `target` and calls `on_change` for every intersection entry until
/// the scope is torn down, which disconnects the observer.
pub fn observe_intersection<F>(scope: &MountScope, target: &Element, mut on_change: F)
where
    F: FnMut(&IntersectionObserverEntry) + 'static,
{
    let live = scope.live_flag();
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, _observer: IntersectionObserver| {
            if !live.is_live() {
                return;
            }
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                    on_change(&entry);
                }
            }
        },
    );

    let Ok(observer) = IntersectionObserver::new(callback.as_ref().unchecked_ref()) else {
        return;
    };
    observer.observe(target);

    scope.on_teardown(move || {
        observer.disconnect();
        drop(callback);
    });
}

struct FrameState {
    gate: Cell<FrameGate>,
    pending: RefCell<Option<AnimationFrame>>,
    tick: RefCell<Box<dyn FnMut(f64) -> bool>>,
    live: LiveFlag,
}

/// Runs `tick` on the next animation frame, however many times `request`
/// was called in between. A tick returning `true` asks for another frame,
/// which is how smoothed values keep easing after scrolling stops.
#[derive(Clone)]
pub struct FrameScheduler {
    state: Rc<FrameState>,
}

impl FrameScheduler {
    pub fn new<F>(scope: &MountScope, tick: F) -> Self
    where
        F: FnMut(f64) -> bool + 'static,
    {
        let state = Rc::new(FrameState {
            gate: Cell::new(FrameGate::default()),
            pending: RefCell::new(None),
            tick: RefCell::new(Box::new(tick)),
            live: scope.live_flag(),
        });

        let cancel = Rc::clone(&state);
        scope.on_teardown(move || {
            cancel.pending.borrow_mut().take();
        });

        Self { state }
    }

    pub fn request(&self) {
        schedule(&self.state);
    }
}

fn schedule(state: &Rc<FrameState>) {
    if !state.live.is_live() {
        return;
    }

    let mut gate = state.gate.get();
    let needs_frame = gate.request();
    state.gate.set(gate);
    if !needs_frame {
        return;
    }

    let frame_state = Rc::clone(state);
    let handle = request_animation_frame(move |timestamp| {
        frame_state.pending.borrow_mut().take();

        let mut gate = frame_state.gate.get();
        gate.begin_frame();
        frame_state.gate.set(gate);

        if !frame_state.live.is_live() {
            return;
        }

        let again = {
            let mut tick = frame_state.tick.borrow_mut();
            (*tick)(timestamp)
        };
        if again {
            schedule(&frame_state);
        }
    });
    *state.pending.borrow_mut() = Some(handle);
}

/// Frame-aligned scroll driver: `tick` runs once after mount and then at
/// most once per frame while the window scrolls or resizes.
pub fn drive_on_scroll<F>(scope: &MountScope, tick: F) -> FrameScheduler
where
    F: FnMut(f64) -> bool + 'static,
{
    let frames = FrameScheduler::new(scope, tick);

    for event in ["scroll", "resize"] {
        let frames = frames.clone();
        listen_window(scope, event, move || frames.request());
    }
    frames.request();

    frames
}

/// Seconds elapsed since the previous tick; the first tick of a burst
/// counts as one 60 Hz frame.
#[derive(Default)]
pub struct FrameClock {
    last: Cell<Option<f64>>,
}

impl FrameClock {
    pub fn delta_seconds(&self, timestamp_ms: f64) -> f64 {
        let delta = match self.last.replace(Some(timestamp_ms)) {
            Some(previous) => (timestamp_ms - previous) / 1_000.0,
            None => 1.0 / 60.0,
        };
        delta.max(0.0)
    }

    pub fn reset(&self) {
        self.last.set(None);
    }
}
