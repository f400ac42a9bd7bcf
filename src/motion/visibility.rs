#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SectionState {
    #[default]
    Hidden,
    Tracking,
    Pinned,
}

impl SectionState {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hidden => "hidden",
            Self::Tracking => "tracking",
            Self::Pinned => "pinned",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::Hidden => "is-hidden",
            Self::Tracking => "is-tracking",
            Self::Pinned => "is-pinned",
        }
    }
}

/// Where the timeline section sits relative to the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SectionObservation {
    pub intersecting: bool,
    pub covers_center: bool,
    pub passed: bool,
}

impl SectionObservation {
    pub fn from_rect(top: f64, height: f64, viewport_height: f64) -> Self {
        if !(viewport_height > 0.0) || !top.is_finite() || !height.is_finite() {
            return Self::default();
        }

        let bottom = top + height;
        let center = viewport_height / 2.0;

        Self {
            intersecting: top < viewport_height && bottom > 0.0,
            covers_center: top <= center && bottom >= center,
            passed: bottom <= 0.0,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VisibilityInputs {
    pub section: SectionObservation,
    pub sentinel_visible: bool,
    pub title_docked: bool,
}

pub fn resolve(inputs: &VisibilityInputs) -> SectionState {
    let section = inputs.section;

    if inputs.sentinel_visible || section.passed || !section.intersecting {
        SectionState::Hidden
    } else if section.covers_center && inputs.title_docked {
        SectionState::Pinned
    } else {
        SectionState::Tracking
    }
}

/// Folds the two observer streams and the docked flag into one state.
/// Every update method returns the new state only when it changed, so
/// callers can forward the result straight into a re-render.
#[derive(Clone, Debug, Default)]
pub struct VisibilityMachine {
    state: SectionState,
    inputs: VisibilityInputs,
}

impl VisibilityMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SectionState {
        self.state
    }

    pub fn inputs(&self) -> VisibilityInputs {
        self.inputs
    }

    pub fn observe_section(&mut self, section: SectionObservation) -> Option<SectionState> {
        if self.inputs.section == section {
            return None;
        }
        self.inputs.section = section;
        self.apply()
    }

    pub fn observe_sentinel(&mut self, visible: bool) -> Option<SectionState> {
        if self.inputs.sentinel_visible == visible {
            return None;
        }
        self.inputs.sentinel_visible = visible;
        self.apply()
    }

    pub fn set_title_docked(&mut self, docked: bool) -> Option<SectionState> {
        if self.inputs.title_docked == docked {
            return None;
        }
        self.inputs.title_docked = docked;
        self.apply()
    }

    fn apply(&mut self) -> Option<SectionState> {
        let next = resolve(&self.inputs);
        if next == self.state {
            return None;
        }

        self.state = next;
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: f64 = 800.0;
    const HEIGHT: f64 = 4_000.0;

    fn section_at(top: f64) -> SectionObservation {
        SectionObservation::from_rect(top, HEIGHT, VIEWPORT)
    }

    #[test]
    fn observation_from_rect() {
        let below = section_at(900.0);
        assert!(!below.intersecting && !below.passed);

        let entering = section_at(700.0);
        assert!(entering.intersecting && !entering.covers_center);

        let centred = section_at(-100.0);
        assert!(centred.intersecting && centred.covers_center);

        let gone = section_at(-HEIGHT - 1.0);
        assert!(gone.passed && !gone.intersecting);

        assert_eq!(SectionObservation::from_rect(0.0, 0.0, 0.0), SectionObservation::default());
    }

    #[test]
    fn walks_hidden_tracking_pinned_and_back() {
        let mut machine = VisibilityMachine::new();
        assert_eq!(machine.state(), SectionState::Hidden);

        assert_eq!(machine.observe_section(section_at(700.0)), Some(SectionState::Tracking));
        assert_eq!(machine.observe_section(section_at(-100.0)), None);
        assert_eq!(machine.set_title_docked(true), Some(SectionState::Pinned));
        assert_eq!(machine.set_title_docked(false), Some(SectionState::Tracking));
        assert_eq!(machine.set_title_docked(true), Some(SectionState::Pinned));
        assert_eq!(machine.observe_section(section_at(-HEIGHT - 1.0)), Some(SectionState::Hidden));
    }

    #[test]
    fn sentinel_hides_a_pinned_section() {
        let mut machine = VisibilityMachine::new();
        machine.observe_section(section_at(-100.0));
        machine.set_title_docked(true);
        assert_eq!(machine.state(), SectionState::Pinned);

        assert_eq!(machine.observe_sentinel(true), Some(SectionState::Hidden));
        assert_eq!(machine.observe_sentinel(false), Some(SectionState::Pinned));
    }

    #[test]
    fn docking_alone_does_not_pin_an_offscreen_section() {
        let mut machine = VisibilityMachine::new();
        assert_eq!(machine.set_title_docked(true), None);
        assert_eq!(machine.state(), SectionState::Hidden);
    }

    #[test]
    fn redundant_callbacks_report_nothing() {
        let mut machine = VisibilityMachine::new();
        machine.observe_section(section_at(700.0));

        for _ in 0..5 {
            assert_eq!(machine.observe_section(section_at(700.0)), None);
            assert_eq!(machine.observe_sentinel(false), None);
            assert_eq!(machine.set_title_docked(false), None);
        }
        assert_eq!(machine.state(), SectionState::Tracking);
    }
}
