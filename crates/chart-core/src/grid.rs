// File: crates/chart-core/src/grid.rs
// Summary: Tick layout helpers: round-number ticks and tick labels.

/// Round step (1, 2, 2.5 or 5 times a power of ten) giving about `target` intervals.
pub fn nice_step(min: f64, max: f64, target: usize) -> f64 {
    let span = max - min;
    if !span.is_finite() || span <= 0.0 { return 1.0; }
    let raw = span / target.max(1) as f64;
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let nice = if norm <= 1.0 {
        1.0
    } else if norm <= 2.0 {
        2.0
    } else if norm <= 2.5 {
        2.5
    } else if norm <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * mag
}

/// Multiples of `nice_step` inside `[min, max]`.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    let step = nice_step(min, max, target);
    if !(max - min).is_finite() || max <= min { return vec![min]; }
    let first = (min / step).ceil();
    let mut out = Vec::new();
    let mut i = 0.0;
    loop {
        let v = (first + i) * step;
        if v > max + step * 1e-9 { break; }
        // avoid "-0" labels
        out.push(if v.abs() < step * 1e-9 { 0.0 } else { v });
        i += 1.0;
    }
    out
}

/// Format `v` with just enough decimals to distinguish multiples of `step`.
pub fn format_tick(v: f64, step: f64) -> String {
    let mut decimals = 0usize;
    while decimals < 6 {
        let scaled = step * 10f64.powi(decimals as i32);
        if (scaled - scaled.round()).abs() < 1e-6 { break; }
        decimals += 1;
    }
    format!("{:.*}", decimals, v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nice_ticks_cover_range() {
        assert_eq!(nice_ticks(0.0, 50.0, 5), vec![0.0, 10.0, 20.0, 30.0, 40.0, 50.0]);
        assert_eq!(nice_ticks(0.0, 1.0, 4), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(nice_ticks(3.0, 3.0, 4), vec![3.0]);
        let t = nice_ticks(-7.0, 262.0, 8);
        assert_eq!(t.first(), Some(&0.0));
        assert_eq!(t.last(), Some(&250.0));
    }

    #[test]
    fn tick_labels_use_step_precision() {
        assert_eq!(format_tick(20.0, 10.0), "20");
        assert_eq!(format_tick(0.75, 0.25), "0.75");
        assert_eq!(format_tick(0.5, 0.25), "0.50");
        assert_eq!(format_tick(2.5, 2.5), "2.5");
    }
}
