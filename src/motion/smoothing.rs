const MAX_FRAME_SECONDS: f64 = 0.1;
const SETTLE_DISTANCE: f64 = 1e-4;

/// Critically-damped follower: each frame moves a fixed fraction of the
/// remaining distance toward the target, scaled by elapsed time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Smoothed {
    value: f64,
    target: f64,
    rate: f64,
}

impl Smoothed {
    pub fn new(initial: f64, rate: f64) -> Self {
        Self {
            value: initial,
            target: initial,
            rate: rate.max(0.0),
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn set_target(&mut self, target: f64) {
        if target.is_finite() {
            self.target = target;
        }
    }

    /// Jumps straight to the target (reduced motion, first measurement).
    pub fn snap(&mut self) {
        self.value = self.target;
    }

    pub fn is_settled(&self) -> bool {
        self.value == self.target
    }

    pub fn step(&mut self, dt_seconds: f64) -> f64 {
        // Long gaps (background tab) would otherwise overshoot in one frame.
        let dt = if dt_seconds.is_finite() {
            dt_seconds.clamp(0.0, MAX_FRAME_SECONDS)
        } else {
            0.0
        };

        let alpha = 1.0 - (-self.rate * dt).exp();
        self.value += (self.target - self.value) * alpha;

        if (self.target - self.value).abs() < SETTLE_DISTANCE {
            self.value = self.target;
        }

        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approaches_target_without_overshoot() {
        let mut smoothed = Smoothed::new(0.0, 12.0);
        smoothed.set_target(1.0);

        let mut previous = 0.0;
        for _ in 0..30 {
            let value = smoothed.step(1.0 / 60.0);
            assert!(value >= previous);
            assert!(value <= 1.0);
            previous = value;
        }
    }

    #[test]
    fn settles_exactly_on_the_target() {
        let mut smoothed = Smoothed::new(0.0, 12.0);
        smoothed.set_target(0.5);

        for _ in 0..600 {
            smoothed.step(1.0 / 60.0);
        }

        assert!(smoothed.is_settled());
        assert_eq!(smoothed.value(), 0.5);
    }

    #[test]
    fn long_frames_are_capped() {
        let mut capped = Smoothed::new(0.0, 12.0);
        capped.set_target(1.0);
        let mut reference = capped;

        capped.step(5.0);
        reference.step(MAX_FRAME_SECONDS);
        assert_eq!(capped.value(), reference.value());
    }

    #[test]
    fn non_finite_inputs_are_ignored() {
        let mut smoothed = Smoothed::new(0.25, 12.0);
        smoothed.set_target(f64::NAN);
        assert_eq!(smoothed.target(), 0.25);

        smoothed.set_target(1.0);
        smoothed.step(f64::INFINITY);
        assert_eq!(smoothed.value(), 0.25);

        smoothed.snap();
        assert_eq!(smoothed.value(), 1.0);
    }
}
