//! Axis tick placement on 1-2-5 steps.

/// Step from {1, 2, 5} x 10^k giving roughly `target` intervals over `span`.
pub fn nice_step(span: f64, target: usize) -> f64 {
    if !(span.is_finite() && span > 0.0) {
        return 1.0;
    }
    let raw = span / target.max(1) as f64;
    let magnitude = 10f64.powf(raw.log10().floor());
    let normalized = raw / magnitude;
    let nice = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Tick positions inside `[min, max]` on a nice step.
pub fn ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    if !(min.is_finite() && max.is_finite() && max > min) {
        return Vec::new();
    }
    let step = nice_step(max - min, target);
    let first = (min / step).ceil() as i64;
    let last = (max / step + 1e-9).floor() as i64;
    (first..=last).map(|k| k as f64 * step).collect()
}

/// Label for a tick value, with as many decimals as the step needs.
pub fn format_tick(value: f64, step: f64) -> String {
    let decimals = if step > 0.0 && step < 1.0 {
        (-step.log10().floor()) as usize
    } else {
        0
    };
    let label = format!("{:.*}", decimals, value);
    // "-0" and "-0.0" read as zero
    if label.trim_start_matches('-').chars().all(|c| c == '0' || c == '.') {
        label.trim_start_matches('-').to_string()
    } else {
        label
    }
}

/// Ticks with their labels.
pub fn labeled_ticks(min: f64, max: f64, target: usize) -> Vec<(f64, String)> {
    let step = nice_step(max - min, target);
    ticks(min, max, target)
        .into_iter()
        .map(|v| (v, format_tick(v, step)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nice_step() {
        assert_eq!(nice_step(48.0, 6), 10.0);
        assert_eq!(nice_step(11.0, 6), 2.0);
        assert_eq!(nice_step(16.0, 6), 5.0);
        assert_eq!(nice_step(360.0, 6), 100.0);
        assert!((nice_step(0.9, 6) - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_map_colorbar_ticks() {
        assert_eq!(ticks(-3.0, 45.0, 6), vec![0.0, 10.0, 20.0, 30.0, 40.0]);
        assert_eq!(ticks(-8.0, 8.0, 6), vec![-5.0, 0.0, 5.0]);
    }

    #[test]
    fn test_ticks_include_endpoints() {
        assert_eq!(ticks(0.0, 10.0, 5), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
    }

    #[test]
    fn test_degenerate_range() {
        assert!(ticks(1.0, 1.0, 5).is_empty());
        assert!(ticks(f64::NAN, 1.0, 5).is_empty());
    }

    #[test]
    fn test_format_tick() {
        assert_eq!(format_tick(10.0, 10.0), "10");
        assert_eq!(format_tick(0.5, 0.5), "0.5");
        assert_eq!(format_tick(-0.0, 0.2), "0.0");
        assert_eq!(format_tick(-150.0, 50.0), "-150");
    }
}
