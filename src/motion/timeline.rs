//! The pinned career carousel.
//!
//! Scroll progress through the timeline section picks one active card; every
//! other card is laid out by its distance from it. Cards further than
//! `max_render_distance` are left out of the frame entirely so the DOM size
//! stays bounded however long the timeline grows.

use crate::config::MotionConfig;

use super::scroll::{region_progress, RegionRect, ScrollOffset, ScrollProgress};

/// Scroll height per card, in `vh`. One extra slot keeps the last card on
/// screen for a full step before the section releases.
const SECTION_VH_PER_CARD: usize = 60;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewportClass {
    Narrow,
    Wide,
}

impl ViewportClass {
    /// A zero width (not laid out yet) reads as narrow.
    pub fn from_width(width: f64, narrow_breakpoint_px: f64) -> Self {
        if width < narrow_breakpoint_px {
            Self::Narrow
        } else {
            Self::Wide
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Narrow => "narrow",
            Self::Wide => "wide",
        }
    }
}

/// `floor(progress * (N + 1))` clamped into `[0, N - 1]`. The extra slot in
/// the divisor makes the last card reachable before progress hits exactly 1.
pub fn active_index(progress: ScrollProgress, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }

    let slot = (progress.value() * (count as f64 + 1.0)).floor();
    let slot = if slot > 0.0 { slot as usize } else { 0 };
    Some(slot.min(count - 1))
}

pub fn section_height_vh(count: usize) -> usize {
    (count + 1) * SECTION_VH_PER_CARD
}

/// Progress through the timeline section: 0 until its top reaches the
/// viewport bottom, 1 once its bottom has left through the viewport top.
pub fn timeline_progress(rect: RegionRect, viewport_height: f64) -> ScrollProgress {
    region_progress(rect, viewport_height, ScrollOffset::EnterToExit)
}

pub fn card_step_vw(config: &MotionConfig, viewport: ViewportClass) -> f64 {
    match viewport {
        ViewportClass::Narrow => config.narrow_step_vw,
        ViewportClass::Wide => config.wide_step_vw,
    }
}

pub fn card_opacity(config: &MotionConfig, distance: usize) -> f64 {
    (1.0 - distance as f64 * config.opacity_falloff).clamp(0.0, 1.0)
}

pub fn card_scale(config: &MotionConfig, distance: usize) -> f64 {
    (1.0 - distance as f64 * config.scale_falloff).max(0.0)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardPlacement {
    pub index: usize,
    pub distance: usize,
    pub offset_vw: f64,
    pub opacity: f64,
    pub scale: f64,
}

impl CardPlacement {
    pub fn is_active(&self) -> bool {
        self.distance == 0
    }

    pub fn style(&self) -> String {
        format!(
            "transform: translateX({:.2}vw) scale({:.3}); opacity: {:.3};",
            self.offset_vw, self.scale, self.opacity
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CarouselFrame {
    pub active: usize,
    pub cards: Vec<CardPlacement>,
}

/// Placements for the cards within render distance of `active`, in index
/// order. Once the trailing sentinel is on screen the last card fades out
/// so it never overlaps the content after the timeline.
pub fn place_cards(
    config: &MotionConfig,
    count: usize,
    active: usize,
    viewport: ViewportClass,
    sentinel_visible: bool,
) -> Vec<CardPlacement> {
    if count == 0 {
        return Vec::new();
    }

    let active = active.min(count - 1);
    let first = active.saturating_sub(config.max_render_distance);
    let last = active.saturating_add(config.max_render_distance).min(count - 1);
    let step = card_step_vw(config, viewport);

    (first..=last)
        .map(|index| {
            let distance = index.abs_diff(active);
            let mut opacity = card_opacity(config, distance);
            if sentinel_visible && index == count - 1 {
                opacity = 0.0;
            }

            CardPlacement {
                index,
                distance,
                offset_vw: (index as f64 - active as f64) * step,
                opacity,
                scale: card_scale(config, distance),
            }
        })
        .collect()
}

pub fn carousel_frame(
    config: &MotionConfig,
    count: usize,
    progress: ScrollProgress,
    viewport: ViewportClass,
    sentinel_visible: bool,
) -> Option<CarouselFrame> {
    let active = active_index(progress, count)?;

    Some(CarouselFrame {
        active,
        cards: place_cards(config, count, active, viewport, sentinel_visible),
    })
}
