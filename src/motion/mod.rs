//! Scroll- and pointer-driven motion, expressed as pure functions of
//! (inputs, viewport, config). The browser glue in `frontend` only feeds
//! measurements in and writes the results out as inline styles.

pub mod keyframes;
pub mod scroll;
pub mod sections;
pub mod smoothing;
pub mod tilt;
pub mod timeline;
pub mod visibility;

pub use scroll::{region_progress, RegionRect, ScrollOffset, ScrollProgress, ScrollTracker};
pub use smoothing::Smoothed;
pub use timeline::{
    active_index, carousel_frame, section_height_vh, timeline_progress, CardPlacement, CarouselFrame,
    ViewportClass,
};
pub use visibility::{SectionObservation, SectionState, VisibilityMachine};
