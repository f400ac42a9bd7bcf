//! Acquire-on-mount, release-on-unmount bookkeeping for browser resources.
//!
//! A component creates one `MountScope` in its mount effect, parks every
//! listener, observer and pending animation frame in it, and tears it down
//! from the effect's destructor. Callbacks that may still be queued when the
//! component goes away check a `LiveFlag` first.

use std::any::Any;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Cheap clonable view of whether the owning scope is still mounted.
#[derive(Clone, Debug)]
pub struct LiveFlag(Rc<Cell<bool>>);

impl LiveFlag {
    pub fn is_live(&self) -> bool {
        self.0.get()
    }
}

pub struct MountScope {
    live: Rc<Cell<bool>>,
    held: RefCell<Vec<Box<dyn Any>>>,
    teardowns: RefCell<Vec<Box<dyn FnOnce()>>>,
}

impl MountScope {
    pub fn new() -> Self {
        Self {
            live: Rc::new(Cell::new(true)),
            held: RefCell::new(Vec::new()),
            teardowns: RefCell::new(Vec::new()),
        }
    }

    pub fn live_flag(&self) -> LiveFlag {
        LiveFlag(Rc::clone(&self.live))
    }

    pub fn is_live(&self) -> bool {
        self.live.get()
    }

    /// Keeps a guard alive until teardown; its `Drop` does the release
    /// (`gloo` listeners and animation frames work this way).
    pub fn hold<T: 'static>(&self, guard: T) {
        if !self.is_live() {
            return;
        }
        self.held.borrow_mut().push(Box::new(guard));
    }

    /// Registers an explicit release step, for handles without a `Drop`.
    /// Registering on a scope that is already torn down releases at once.
    pub fn on_teardown<F>(&self, release: F)
    where
        F: FnOnce() + 'static,
    {
        if !self.is_live() {
            release();
            return;
        }
        self.teardowns.borrow_mut().push(Box::new(release));
    }

    pub fn held_count(&self) -> usize {
        self.held.borrow().len() + self.teardowns.borrow().len()
    }

    /// Releases everything in reverse registration order. Safe to call any
    /// number of times.
    pub fn teardown(&self) {
        if !self.live.replace(false) {
            return;
        }

        let teardowns: Vec<_> = self.teardowns.borrow_mut().drain(..).collect();
        for release in teardowns.into_iter().rev() {
            release();
        }

        let held: Vec<_> = self.held.borrow_mut().drain(..).collect();
        for guard in held.into_iter().rev() {
            drop(guard);
        }
    }
}

impl Default for MountScope {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for MountScope {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// Coalesces bursts of scroll/resize events into at most one recompute per
/// animation frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameGate {
    pending: bool,
}

impl FrameGate {
    /// True when the caller should schedule a frame; false when one is
    /// already queued and will pick up the latest measurements.
    pub fn request(&mut self) -> bool {
        !std::mem::replace(&mut self.pending, true)
    }

    /// Called at the top of the frame callback.
    pub fn begin_frame(&mut self) {
        self.pending = false;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}
