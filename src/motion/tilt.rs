use super::keyframes::interpolate;
use super::smoothing::Smoothed;

const POINTER_RANGE_PX: f64 = 100.0;
const MAX_ROTATION_DEG: f64 = 5.0;
const MAX_SHIFT_PX: f64 = 5.0;
const REVEAL_STAGGER_SECONDS: f64 = 0.1;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tilt {
    pub rotate_x_deg: f64,
    pub rotate_y_deg: f64,
    pub shift_x_px: f64,
    pub shift_y_px: f64,
}

impl Tilt {
    /// Pointer offset from the card centre to a tilt. Moving down tips the
    /// top edge away; moving right turns the card toward the pointer.
    pub fn from_offset(dx: f64, dy: f64) -> Self {
        let range = [-POINTER_RANGE_PX, POINTER_RANGE_PX];

        Self {
            rotate_x_deg: interpolate(dy, &range, &[MAX_ROTATION_DEG, -MAX_ROTATION_DEG]),
            rotate_y_deg: interpolate(dx, &range, &[-MAX_ROTATION_DEG, MAX_ROTATION_DEG]),
            shift_x_px: interpolate(dx, &range, &[MAX_SHIFT_PX, -MAX_SHIFT_PX]),
            shift_y_px: interpolate(dy, &range, &[MAX_SHIFT_PX, -MAX_SHIFT_PX]),
        }
    }

    pub fn card_style(&self) -> String {
        format!(
            "transform: perspective(900px) rotateX({:.2}deg) rotateY({:.2}deg);",
            self.rotate_x_deg, self.rotate_y_deg
        )
    }

    pub fn image_style(&self, hovered: bool) -> String {
        let scale = if hovered { 1.05 } else { 1.0 };
        format!(
            "transform: translate({:.2}px, {:.2}px) scale({scale});",
            self.shift_x_px, self.shift_y_px
        )
    }
}

/// Pointer position relative to the centre of a card's bounding box.
pub fn pointer_offset(client_x: f64, client_y: f64, left: f64, top: f64, width: f64, height: f64) -> (f64, f64) {
    (client_x - (left + width / 2.0), client_y - (top + height / 2.0))
}

/// Smoothed pointer follower for one hovered card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardTilt {
    x: Smoothed,
    y: Smoothed,
}

impl CardTilt {
    pub fn new(rate: f64) -> Self {
        Self {
            x: Smoothed::new(0.0, rate),
            y: Smoothed::new(0.0, rate),
        }
    }

    pub fn pointer_moved(&mut self, dx: f64, dy: f64) {
        self.x.set_target(dx);
        self.y.set_target(dy);
    }

    pub fn pointer_left(&mut self) {
        self.pointer_moved(0.0, 0.0);
    }

    pub fn is_settled(&self) -> bool {
        self.x.is_settled() && self.y.is_settled()
    }

    pub fn step(&mut self, dt_seconds: f64) -> Tilt {
        let dx = self.x.step(dt_seconds);
        let dy = self.y.step(dt_seconds);
        Tilt::from_offset(dx, dy)
    }

    pub fn snap(&mut self) -> Tilt {
        self.x.snap();
        self.y.snap();
        Tilt::from_offset(self.x.value(), self.y.value())
    }
}

pub fn reveal_delay_seconds(index: usize) -> f64 {
    index as f64 * REVEAL_STAGGER_SECONDS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centred_pointer_is_flat() {
        assert_eq!(Tilt::from_offset(0.0, 0.0), Tilt::default());
    }

    #[test]
    fn corner_pointer_hits_the_limits() {
        let tilt = Tilt::from_offset(250.0, -250.0);
        assert_eq!(tilt.rotate_x_deg, MAX_ROTATION_DEG);
        assert_eq!(tilt.rotate_y_deg, MAX_ROTATION_DEG);
        assert_eq!(tilt.shift_x_px, -MAX_SHIFT_PX);
        assert_eq!(tilt.shift_y_px, MAX_SHIFT_PX);
    }

    #[test]
    fn offset_is_measured_from_the_centre() {
        assert_eq!(pointer_offset(150.0, 80.0, 100.0, 0.0, 200.0, 100.0), (-50.0, 30.0));
    }

    #[test]
    fn leaving_the_card_eases_back_to_flat() {
        let mut tilt = CardTilt::new(12.0);
        tilt.pointer_moved(100.0, 100.0);
        let tilted = tilt.snap();
        assert_eq!(tilted.rotate_x_deg, -MAX_ROTATION_DEG);

        tilt.pointer_left();
        assert!(!tilt.is_settled());
        for _ in 0..600 {
            tilt.step(1.0 / 60.0);
        }
        assert!(tilt.is_settled());
        assert_eq!(tilt.step(1.0 / 60.0), Tilt::default());
    }

    #[test]
    fn reveal_is_staggered_by_index() {
        assert_eq!(reveal_delay_seconds(0), 0.0);
        assert!((reveal_delay_seconds(3) - 0.3).abs() < 1e-12);
    }
}
