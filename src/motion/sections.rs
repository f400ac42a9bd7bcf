use super::keyframes::interpolate;
use super::scroll::{region_progress, RegionRect, ScrollOffset, ScrollProgress};

/// Everything the home page animates from its smoothed scroll progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HomeFrame {
    pub hero_text_y: f64,
    pub hero_image_scale: f64,
    pub grid_opacity: f64,
    pub skills_y: f64,
    pub skills_opacity: f64,
    pub contact_y: f64,
    pub contact_opacity: f64,
}

impl HomeFrame {
    pub fn at(progress: ScrollProgress, reduced_motion: bool) -> Self {
        let p = progress.value();

        let frame = Self {
            hero_text_y: interpolate(p, &[0.0, 0.2], &[0.0, -100.0]),
            hero_image_scale: interpolate(p, &[0.0, 0.2], &[1.0, 1.1]),
            grid_opacity: interpolate(p, &[0.0, 0.3, 0.6, 1.0], &[0.3, 0.15, 0.1, 0.05]),
            skills_y: interpolate(p, &[0.2, 0.4], &[100.0, 0.0]),
            skills_opacity: interpolate(p, &[0.2, 0.3], &[0.0, 1.0]),
            contact_y: interpolate(p, &[0.6, 0.8], &[100.0, 0.0]),
            contact_opacity: interpolate(p, &[0.6, 0.7], &[0.0, 1.0]),
        };

        if reduced_motion {
            frame.without_translation()
        } else {
            frame
        }
    }

    /// Keeps fades, drops movement.
    fn without_translation(self) -> Self {
        Self {
            hero_text_y: 0.0,
            hero_image_scale: 1.0,
            skills_y: 0.0,
            contact_y: 0.0,
            ..self
        }
    }

    pub fn hero_text_style(&self) -> String {
        format!("transform: translateY({:.2}px);", self.hero_text_y)
    }

    pub fn hero_image_style(&self) -> String {
        format!("transform: scale({:.4});", self.hero_image_scale)
    }

    pub fn grid_style(&self) -> String {
        format!("opacity: {:.3};", self.grid_opacity)
    }

    pub fn skills_style(&self) -> String {
        section_style(self.skills_y, self.skills_opacity)
    }

    pub fn contact_style(&self) -> String {
        section_style(self.contact_y, self.contact_opacity)
    }
}

fn section_style(y: f64, opacity: f64) -> String {
    format!("transform: translateY({y:.2}px); opacity: {opacity:.3};")
}

/// Parallax drift of a category page backdrop, in percent of its height.
pub fn backdrop_offset_percent(progress: ScrollProgress) -> f64 {
    interpolate(progress.value(), &[0.0, 1.0], &[0.0, 30.0])
}

/// Backdrop drift for a page whose container is at `page`: still at the
/// top of the page, 30% once its bottom meets the viewport bottom.
pub fn page_backdrop_offset(page: RegionRect, viewport_height: f64) -> f64 {
    backdrop_offset_percent(region_progress(page, viewport_height, ScrollOffset::StartToEnd))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_of_page_shows_hero_and_hides_later_sections() {
        let frame = HomeFrame::at(ScrollProgress::START, false);

        assert_eq!(frame.hero_text_y, 0.0);
        assert_eq!(frame.hero_image_scale, 1.0);
        assert_eq!(frame.grid_opacity, 0.3);
        assert_eq!(frame.skills_opacity, 0.0);
        assert_eq!(frame.skills_y, 100.0);
        assert_eq!(frame.contact_opacity, 0.0);
    }

    #[test]
    fn skills_are_fully_in_by_forty_percent() {
        let frame = HomeFrame::at(ScrollProgress::new(0.4), false);

        assert_eq!(frame.hero_text_y, -100.0);
        assert_eq!(frame.skills_y, 0.0);
        assert_eq!(frame.skills_opacity, 1.0);
        assert_eq!(frame.contact_opacity, 0.0);
    }

    #[test]
    fn end_of_page_shows_contact() {
        let frame = HomeFrame::at(ScrollProgress::END, false);
        assert_eq!(frame.contact_y, 0.0);
        assert_eq!(frame.contact_opacity, 1.0);
        assert_eq!(frame.grid_opacity, 0.05);
    }

    #[test]
    fn reduced_motion_keeps_fades_only() {
        let frame = HomeFrame::at(ScrollProgress::new(0.25), true);
        assert_eq!(frame.skills_y, 0.0);
        assert_eq!(frame.hero_text_y, 0.0);
        assert_eq!(frame.hero_image_scale, 1.0);
        assert!(frame.skills_opacity > 0.0 && frame.skills_opacity < 1.0);
    }

    #[test]
    fn backdrop_drifts_thirty_percent() {
        assert_eq!(backdrop_offset_percent(ScrollProgress::START), 0.0);
        assert_eq!(backdrop_offset_percent(ScrollProgress::END), 30.0);
        assert_eq!(backdrop_offset_percent(ScrollProgress::new(0.5)), 15.0);
    }

    #[test]
    fn backdrop_rests_at_page_load() {
        let viewport_height = 800.0;
        let page_height = 2_400.0;

        assert_eq!(page_backdrop_offset(RegionRect::new(0.0, page_height), viewport_height), 0.0);
        assert_eq!(page_backdrop_offset(RegionRect::new(-800.0, page_height), viewport_height), 15.0);
        assert_eq!(page_backdrop_offset(RegionRect::new(-1_600.0, page_height), viewport_height), 30.0);
    }

    #[test]
    fn styles_render_fixed_precision() {
        let frame = HomeFrame::at(ScrollProgress::START, false);
        assert_eq!(frame.skills_style(), "transform: translateY(100.00px); opacity: 0.000;");
    }
}
