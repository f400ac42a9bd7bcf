use crate::logging::LogLevel;

const DEFAULT_NARROW_BREAKPOINT_PX: f64 = 768.0;
const DEFAULT_NARROW_STEP_VW: f64 = 100.0;
const DEFAULT_WIDE_STEP_VW: f64 = 45.0;
const DEFAULT_OPACITY_FALLOFF: f64 = 0.3;
const DEFAULT_SCALE_FALLOFF: f64 = 0.1;
const DEFAULT_MAX_RENDER_DISTANCE: usize = 3;
const DEFAULT_PROGRESS_EPSILON: f64 = 0.001;
const DEFAULT_SMOOTHING_RATE: f64 = 12.0;
const DEFAULT_DOCK_OFFSET_PX: f64 = 96.0;
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

const NARROW_BREAKPOINT_PX_BOUNDS: (f64, f64) = (320.0, 2_560.0);
const STEP_VW_BOUNDS: (f64, f64) = (10.0, 200.0);
const FALLOFF_BOUNDS: (f64, f64) = (0.0, 1.0);
const MAX_RENDER_DISTANCE_BOUNDS: (usize, usize) = (0, 12);
const PROGRESS_EPSILON_BOUNDS: (f64, f64) = (0.0, 0.05);
const SMOOTHING_RATE_BOUNDS: (f64, f64) = (1.0, 120.0);
const DOCK_OFFSET_PX_BOUNDS: (f64, f64) = (0.0, 400.0);

/// Tuning values for every scroll-driven animation on the site.
#[derive(Clone, Debug, PartialEq)]
pub struct MotionConfig {
    pub narrow_breakpoint_px: f64,
    pub narrow_step_vw: f64,
    pub wide_step_vw: f64,
    pub opacity_falloff: f64,
    pub scale_falloff: f64,
    pub max_render_distance: usize,
    pub progress_epsilon: f64,
    /// Exponential smoothing rate in 1/s; higher settles faster.
    pub smoothing_rate: f64,
    /// Distance from the viewport top at which a section title counts as docked.
    pub dock_offset_px: f64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            narrow_breakpoint_px: DEFAULT_NARROW_BREAKPOINT_PX,
            narrow_step_vw: DEFAULT_NARROW_STEP_VW,
            wide_step_vw: DEFAULT_WIDE_STEP_VW,
            opacity_falloff: DEFAULT_OPACITY_FALLOFF,
            scale_falloff: DEFAULT_SCALE_FALLOFF,
            max_render_distance: DEFAULT_MAX_RENDER_DISTANCE,
            progress_epsilon: DEFAULT_PROGRESS_EPSILON,
            smoothing_rate: DEFAULT_SMOOTHING_RATE,
            dock_offset_px: DEFAULT_DOCK_OFFSET_PX,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub motion: MotionConfig,
    pub log_level: LogLevel,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            motion: MotionConfig::default(),
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl SiteConfig {
    /// Builds the config from a key lookup. In the browser the lookup reads
    /// `data-*` attributes of the mount element; values that fail to parse or
    /// fall outside their bounds keep the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let motion = MotionConfig {
            narrow_breakpoint_px: parse_f64_with_bounds(
                &lookup,
                "narrow-breakpoint-px",
                DEFAULT_NARROW_BREAKPOINT_PX,
                NARROW_BREAKPOINT_PX_BOUNDS,
            ),
            narrow_step_vw: parse_f64_with_bounds(
                &lookup,
                "narrow-step-vw",
                DEFAULT_NARROW_STEP_VW,
                STEP_VW_BOUNDS,
            ),
            wide_step_vw: parse_f64_with_bounds(
                &lookup,
                "wide-step-vw",
                DEFAULT_WIDE_STEP_VW,
                STEP_VW_BOUNDS,
            ),
            opacity_falloff: parse_f64_with_bounds(
                &lookup,
                "opacity-falloff",
                DEFAULT_OPACITY_FALLOFF,
                FALLOFF_BOUNDS,
            ),
            scale_falloff: parse_f64_with_bounds(
                &lookup,
                "scale-falloff",
                DEFAULT_SCALE_FALLOFF,
                FALLOFF_BOUNDS,
            ),
            max_render_distance: parse_usize_with_bounds(
                &lookup,
                "max-render-distance",
                DEFAULT_MAX_RENDER_DISTANCE,
                MAX_RENDER_DISTANCE_BOUNDS,
            ),
            progress_epsilon: parse_f64_with_bounds(
                &lookup,
                "progress-epsilon",
                DEFAULT_PROGRESS_EPSILON,
                PROGRESS_EPSILON_BOUNDS,
            ),
            smoothing_rate: parse_f64_with_bounds(
                &lookup,
                "smoothing-rate",
                DEFAULT_SMOOTHING_RATE,
                SMOOTHING_RATE_BOUNDS,
            ),
            dock_offset_px: parse_f64_with_bounds(
                &lookup,
                "dock-offset-px",
                DEFAULT_DOCK_OFFSET_PX,
                DOCK_OFFSET_PX_BOUNDS,
            ),
        };
        let log_level = parse_log_level(&lookup, "log-level", DEFAULT_LOG_LEVEL);

        Self { motion, log_level }
    }
}

fn parse_non_empty_string<F>(lookup: &F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_f64_with_bounds<F>(lookup: &F, name: &str, default: f64, bounds: (f64, f64)) -> f64
where
    F: Fn(&str) -> Option<String>,
{
    parse_non_empty_string(lookup, name)
        .and_then(|value| value.parse::<f64>().ok())
        .filter(|value| value.is_finite() && (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_usize_with_bounds<F>(lookup: &F, name: &str, default: usize, bounds: (usize, usize)) -> usize
where
    F: Fn(&str) -> Option<String>,
{
    parse_non_empty_string(lookup, name)
        .and_then(|value| value.parse::<usize>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_log_level<F>(lookup: &F, name: &str, default: LogLevel) -> LogLevel
where
    F: Fn(&str) -> Option<String>,
{
    parse_non_empty_string(lookup, name)
        .and_then(|value| LogLevel::from_str(&value.to_ascii_lowercase()))
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn empty_lookup_yields_defaults() {
        let config = SiteConfig::from_lookup(|_| None);
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn values_within_bounds_are_applied() {
        let config = SiteConfig::from_lookup(lookup_from(&[
            ("wide-step-vw", " 60 "),
            ("opacity-falloff", "0.25"),
            ("max-render-distance", "2"),
            ("log-level", "DEBUG"),
        ]));

        assert_eq!(config.motion.wide_step_vw, 60.0);
        assert_eq!(config.motion.opacity_falloff, 0.25);
        assert_eq!(config.motion.max_render_distance, 2);
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn out_of_bounds_or_garbage_values_fall_back() {
        let config = SiteConfig::from_lookup(lookup_from(&[
            ("narrow-step-vw", "5"),
            ("scale-falloff", "abc"),
            ("smoothing-rate", "NaN"),
            ("max-render-distance", "-1"),
            ("log-level", "verbose"),
        ]));

        assert_eq!(config.motion.narrow_step_vw, DEFAULT_NARROW_STEP_VW);
        assert_eq!(config.motion.scale_falloff, DEFAULT_SCALE_FALLOFF);
        assert_eq!(config.motion.smoothing_rate, DEFAULT_SMOOTHING_RATE);
        assert_eq!(config.motion.max_render_distance, DEFAULT_MAX_RENDER_DISTANCE);
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
    }
}
