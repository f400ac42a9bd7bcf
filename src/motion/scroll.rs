/// Fraction of a tracked region that has been scrolled, always in `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct ScrollProgress(f64);

impl ScrollProgress {
    pub const START: Self = Self(0.0);
    pub const END: Self = Self(1.0);

    /// Clamps overscroll into range; NaN counts as not started.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::START;
        }

        Self(value.clamp(0.0, 1.0))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    fn is_boundary(self) -> bool {
        self.0 == 0.0 || self.0 == 1.0
    }
}

/// Which edges of the region and viewport define progress 0 and 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollOffset {
    /// 0 when the region's top meets the viewport bottom, 1 when its bottom
    /// leaves through the viewport top.
    EnterToExit,
    /// 0 when the region's top meets the viewport top, 1 when its bottom
    /// meets the viewport bottom.
    StartToEnd,
}

/// Bounding box of the tracked region relative to the viewport, in px.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RegionRect {
    pub top: f64,
    pub height: f64,
}

impl RegionRect {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn bottom(self) -> f64 {
        self.top + self.height
    }
}

pub fn region_progress(rect: RegionRect, viewport_height: f64, offset: ScrollOffset) -> ScrollProgress {
    // Zero-sized viewports show up while the document is still laying out.
    if !(viewport_height > 0.0) || !rect.top.is_finite() || !rect.height.is_finite() {
        return ScrollProgress::START;
    }

    let (travelled, span) = match offset {
        ScrollOffset::EnterToExit => (viewport_height - rect.top, rect.height + viewport_height),
        ScrollOffset::StartToEnd => (-rect.top, rect.height - viewport_height),
    };

    if span <= 0.0 {
        return if travelled > 0.0 {
            ScrollProgress::END
        } else {
            ScrollProgress::START
        };
    }

    ScrollProgress::new(travelled / span)
}

/// Filters a stream of progress samples down to perceptible changes.
#[derive(Clone, Debug)]
pub struct ScrollTracker {
    epsilon: f64,
    last: Option<ScrollProgress>,
}

impl ScrollTracker {
    pub fn new(epsilon: f64) -> Self {
        Self {
            epsilon: epsilon.max(0.0),
            last: None,
        }
    }

    pub fn last(&self) -> Option<ScrollProgress> {
        self.last
    }

    /// Returns the sample when it should trigger a recompute. Reaching either
    /// end of the range always reports, so the first and last cards settle
    /// exactly even when the final step is smaller than epsilon.
    pub fn observe(&mut self, sample: ScrollProgress) -> Option<ScrollProgress> {
        let changed = match self.last {
            None => true,
            Some(last) if last == sample => false,
            Some(last) => {
                (sample.value() - last.value()).abs() > self.epsilon || sample.is_boundary()
            }
        };

        if changed {
            self.last = Some(sample);
            Some(sample)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_clamped_and_nan_safe() {
        assert_eq!(ScrollProgress::new(-0.4), ScrollProgress::START);
        assert_eq!(ScrollProgress::new(1.7), ScrollProgress::END);
        assert_eq!(ScrollProgress::new(f64::NAN), ScrollProgress::START);
        assert_eq!(ScrollProgress::new(0.25).value(), 0.25);
    }

    #[test]
    fn start_to_end_spans_the_scrollable_overhang() {
        let viewport = 800.0;
        let height = 2_400.0;

        let before = region_progress(RegionRect::new(100.0, height), viewport, ScrollOffset::StartToEnd);
        let half = region_progress(RegionRect::new(-800.0, height), viewport, ScrollOffset::StartToEnd);
        let past = region_progress(RegionRect::new(-5_000.0, height), viewport, ScrollOffset::StartToEnd);

        assert_eq!(before, ScrollProgress::START);
        assert_eq!(half.value(), 0.5);
        assert_eq!(past, ScrollProgress::END);
    }

    #[test]
    fn enter_to_exit_starts_at_viewport_bottom() {
        let viewport = 1_000.0;
        let rect = RegionRect::new(1_000.0, 1_000.0);
        assert_eq!(region_progress(rect, viewport, ScrollOffset::EnterToExit), ScrollProgress::START);

        let rect = RegionRect::new(0.0, 1_000.0);
        assert_eq!(region_progress(rect, viewport, ScrollOffset::EnterToExit).value(), 0.5);

        let rect = RegionRect::new(-1_000.0, 1_000.0);
        assert_eq!(region_progress(rect, viewport, ScrollOffset::EnterToExit), ScrollProgress::END);
    }

    #[test]
    fn zero_viewport_never_divides() {
        let rect = RegionRect::new(0.0, 0.0);
        assert_eq!(region_progress(rect, 0.0, ScrollOffset::StartToEnd), ScrollProgress::START);
        assert_eq!(region_progress(rect, 0.0, ScrollOffset::EnterToExit), ScrollProgress::START);
    }

    #[test]
    fn region_shorter_than_viewport_snaps_to_an_end() {
        let viewport = 900.0;
        let short = 300.0;
        assert_eq!(
            region_progress(RegionRect::new(50.0, short), viewport, ScrollOffset::StartToEnd),
            ScrollProgress::START
        );
        assert_eq!(
            region_progress(RegionRect::new(-10.0, short), viewport, ScrollOffset::StartToEnd),
            ScrollProgress::END
        );
    }

    #[test]
    fn tracker_ignores_unchanged_and_imperceptible_samples() {
        let mut tracker = ScrollTracker::new(0.01);

        assert!(tracker.observe(ScrollProgress::new(0.2)).is_some());
        assert!(tracker.observe(ScrollProgress::new(0.2)).is_none());
        assert!(tracker.observe(ScrollProgress::new(0.205)).is_none());
        assert_eq!(
            tracker.observe(ScrollProgress::new(0.25)),
            Some(ScrollProgress::new(0.25))
        );
        assert_eq!(tracker.last(), Some(ScrollProgress::new(0.25)));
    }

    #[test]
    fn tracker_always_reports_reaching_the_ends() {
        let mut tracker = ScrollTracker::new(0.01);
        tracker.observe(ScrollProgress::new(0.998));

        assert_eq!(tracker.observe(ScrollProgress::END), Some(ScrollProgress::END));
        assert!(tracker.observe(ScrollProgress::END).is_none());
    }
}
