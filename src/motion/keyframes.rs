/// Piecewise-linear mapping from `stops` (ascending) to `values`, clamped to
/// the first and last value outside the stop range.
///
/// Mismatched or empty slices map to 0.0 rather than panicking.
pub fn interpolate(input: f64, stops: &[f64], values: &[f64]) -> f64 {
    if stops.is_empty() || stops.len() != values.len() {
        return 0.0;
    }

    let last = stops.len() - 1;
    if input.is_nan() || input <= stops[0] {
        return values[0];
    }
    if input >= stops[last] {
        return values[last];
    }

    for segment in 0..last {
        let (from, to) = (stops[segment], stops[segment + 1]);
        if input > to {
            continue;
        }

        let width = to - from;
        if width <= 0.0 {
            return values[segment + 1];
        }

        let t = (input - from) / width;
        return values[segment] + (values[segment + 1] - values[segment]) * t;
    }

    values[last]
}
