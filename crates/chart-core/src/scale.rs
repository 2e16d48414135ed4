// File: crates/chart-core/src/scale.rs
// Summary: Linear data-to-pixel transform used for both axes.

/// Maps the value range `[vmin, vmax]` onto the pixel range `[px_from, px_to]`.
/// The Y axis passes `bottom` as `px_from` so larger values sit higher.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    pub vmin: f64,
    pub vmax: f64,
    pub px_from: f32,
    pub px_to: f32,
}

impl LinearScale {
    pub fn new(vmin: f64, vmax: f64, px_from: f32, px_to: f32) -> Self {
        let mut s = Self { vmin, vmax, px_from, px_to };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let t = (v - self.vmin) / (self.vmax - self.vmin);
        self.px_from + t as f32 * (self.px_to - self.px_from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverted_y_maps_max_to_top() {
        let s = LinearScale::new(0.0, 100.0, 500.0, 100.0);
        assert_eq!(s.to_px(0.0), 500.0);
        assert_eq!(s.to_px(100.0), 100.0);
        assert_eq!(s.to_px(50.0), 300.0);
    }

    #[test]
    fn degenerate_range_is_widened() {
        let s = LinearScale::new(3.0, 3.0, 0.0, 10.0);
        assert_eq!(s.vmax, 4.0);
        assert_eq!(s.to_px(3.5), 5.0);
    }
}
