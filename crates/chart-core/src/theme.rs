// File: crates/chart-core/src/theme.rs
// Summary: Light/Dark theming for chart rendering colors and the series palette.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub title: skia::Color,
    pub legend_background: skia::Color,
    pub legend_border: skia::Color,
    pub annotation: skia::Color,
    /// Cycled through for series without an explicit color.
    pub palette: [skia::Color; 6],
}

fn rgb(hex: u32) -> skia::Color {
    skia::Color::new(0xff00_0000 | hex)
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: rgb(0xffffff),
            grid: rgb(0xe6e6eb),
            axis_line: rgb(0x3c3c46),
            axis_label: rgb(0x14141e),
            tick: rgb(0x505060),
            title: rgb(0x000000),
            legend_background: skia::Color::from_argb(220, 255, 255, 255),
            legend_border: rgb(0xcccccc),
            annotation: rgb(0x14141e),
            // tab10
            palette: [
                rgb(0x1f77b4),
                rgb(0xff7f0e),
                rgb(0x2ca02c),
                rgb(0xd62728),
                rgb(0x9467bd),
                rgb(0x8c564b),
            ],
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            title: skia::Color::from_argb(255, 245, 245, 250),
            legend_background: skia::Color::from_argb(220, 28, 28, 32),
            legend_border: skia::Color::from_argb(255, 70, 70, 80),
            annotation: skia::Color::from_argb(255, 235, 235, 245),
            palette: [
                skia::Color::from_argb(255, 64, 160, 255),
                skia::Color::from_argb(255, 255, 160, 64),
                skia::Color::from_argb(255, 40, 200, 120),
                skia::Color::from_argb(255, 220, 80, 80),
                skia::Color::from_argb(255, 180, 130, 240),
                skia::Color::from_argb(255, 200, 170, 120),
            ],
        }
    }

    pub fn solarized_light() -> Self {
        Self {
            name: "solarized-light",
            background: rgb(0xfdf6e3),  // base3
            grid: rgb(0xeee8d5),        // base2
            axis_line: rgb(0x657b83),   // base00
            axis_label: rgb(0x002b36),  // base03
            tick: rgb(0x586e75),        // base01
            title: rgb(0x002b36),
            legend_background: skia::Color::from_argb(220, 0xfd, 0xf6, 0xe3),
            legend_border: rgb(0x93a1a1),
            annotation: rgb(0x073642),
            palette: [
                rgb(0x268bd2), // blue
                rgb(0xcb4b16), // orange
                rgb(0x859900), // green
                rgb(0xdc322f), // red
                rgb(0x6c71c4), // violet
                rgb(0xb58900), // yellow
            ],
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: rgb(0x000000),
            grid: rgb(0x222222),
            axis_line: rgb(0xffffff),
            axis_label: rgb(0xffffff),
            tick: rgb(0xcccccc),
            title: rgb(0xffffff),
            legend_background: rgb(0x000000),
            legend_border: rgb(0xffffff),
            annotation: rgb(0xffff00),
            palette: [
                rgb(0x00ffff),
                rgb(0xffaa00),
                rgb(0x00ff00),
                rgb(0xff3030),
                rgb(0xff66ff),
                rgb(0xffffff),
            ],
        }
    }

    /// Palette color for the `i`-th series.
    pub fn series_color(&self, i: usize) -> skia::Color {
        self.palette[i % self.palette.len()]
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::light()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![
        Theme::light(),
        Theme::dark(),
        Theme::solarized_light(),
        Theme::high_contrast_dark(),
    ]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::light)
}
