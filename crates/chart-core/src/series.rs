// File: crates/chart-core/src/series.rs
// Summary: Named line and bar series plus free-standing text annotations.

use skia_safe as skia;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesType {
    Line,
    /// Vertical bars from 0.0 up to y, centred on x.
    Bar,
}

#[derive(Clone, Debug)]
pub struct Series {
    pub name: String,
    pub series_type: SeriesType,
    pub data_xy: Vec<(f64, f64)>,
    /// Circle markers at every point (Line only).
    pub markers: bool,
    /// Bar width in x data units (Bar only).
    pub bar_width: f64,
    /// Overrides the theme palette.
    pub color: Option<skia::Color>,
}

impl Series {
    pub fn new(series_type: SeriesType) -> Self {
        Self {
            name: String::new(),
            series_type,
            data_xy: Vec::new(),
            markers: false,
            bar_width: 0.8,
            color: None,
        }
    }

    pub fn with_data(series_type: SeriesType, data: Vec<(f64, f64)>) -> Self {
        Self { data_xy: data, ..Self::new(series_type) }
    }

    pub fn line(name: impl Into<String>, data: Vec<(f64, f64)>) -> Self {
        Self::with_data(SeriesType::Line, data).named(name)
    }

    pub fn bar(name: impl Into<String>, data: Vec<(f64, f64)>, bar_width: f64) -> Self {
        Self { bar_width, ..Self::with_data(SeriesType::Bar, data).named(name) }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_markers(mut self) -> Self {
        self.markers = true;
        self
    }

    pub fn with_color(mut self, color: skia::Color) -> Self {
        self.color = Some(color);
        self
    }
}

/// Text placed at a data coordinate, horizontally centred, sitting just above it.
#[derive(Clone, Debug, PartialEq)]
pub struct Annotation {
    pub x: f64,
    pub y: f64,
    pub text: String,
}

impl Annotation {
    pub fn new(x: f64, y: f64, text: impl Into<String>) -> Self {
        Self { x, y, text: text.into() }
    }
}
