//! "Nice number" axis scaling

/// Multipliers an axis maximum may snap to within one decade
const NICE_MAX_STEPS: [f64; 6] = [1.0, 1.5, 2.0, 3.0, 5.0, 10.0];

/// Multipliers a grid step may snap to within one decade
const NICE_GRID_STEPS: [f64; 4] = [1.0, 2.0, 5.0, 10.0];

fn decade(value: f64) -> f64 {
    10f64.powi(value.log10().floor() as i32)
}

/// Smallest value of the form {1, 1.5, 2, 3, 5, 10} × 10^k that is >= `value`
///
/// Non-positive or non-finite input yields 1.
pub fn nice_max(value: f64) -> f64 {
    if !(value.is_finite() && value > 0.0) {
        return 1.0;
    }
    let base = decade(value);
    NICE_MAX_STEPS
        .iter()
        .map(|m| m * base)
        .find(|candidate| *candidate >= value)
        .unwrap_or(10.0 * base)
}

/// Grid step of the form {1, 2, 5} × 10^k giving about `target_steps` steps over `span`
pub fn nice_step(span: f64, target_steps: usize) -> f64 {
    let raw = span / target_steps.max(1) as f64;
    if !(raw.is_finite() && raw > 0.0) {
        return 1.0;
    }
    let base = decade(raw);
    NICE_GRID_STEPS
        .iter()
        .map(|m| m * base)
        .find(|candidate| *candidate >= raw)
        .unwrap_or(10.0 * base)
}

/// Grid values from the first multiple of `step` at or above `min` up to `max`
pub fn grid_values(min: f64, max: f64, step: f64) -> Vec<f64> {
    if !(step > 0.0) || max < min {
        return Vec::new();
    }
    let first = (min / step).ceil() as i64;
    let last = (max / step).floor() as i64;
    (first..=last).map(|i| i as f64 * step).collect()
}

/// Number of vertical divisions for a panel of the given pixel width
pub fn vertical_divisions(panel_width: f64) -> usize {
    ((panel_width / 60.0).floor() as usize).clamp(2, 6)
}

/// Decimal places suitable for labels at the given step
pub fn label_precision(step: f64) -> usize {
    if step >= 1.0 {
        0
    } else if step >= 0.1 {
        1
    } else {
        2
    }
}

/// Compact tick label for an axis value
pub fn format_tick(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude >= 10.0 || magnitude == 0.0 {
        format!("{:.0}", value)
    } else if magnitude >= 1.0 {
        format!("{:.1}", value)
    } else {
        format!("{:.2}", value)
    }
}
