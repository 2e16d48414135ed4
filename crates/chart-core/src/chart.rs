// File: crates/chart-core/src/chart.rs
// Summary: Chart struct and headless rendering pipeline (PNG file, PNG bytes, RGBA8) using Skia CPU raster surfaces.

use anyhow::Result;
use skia_safe as skia;
use tracing::debug;

use crate::axis::Axis;
use crate::geometry::RectI32;
use crate::scale::LinearScale;
use crate::series::{Annotation, Series, SeriesType};
use crate::text::{Anchor, TextShaper};
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, LABEL_SIZE, MARKER_RADIUS, TICK_SIZE, TITLE_SIZE, WIDTH};

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Text (title, ticks, legend, annotations). Off gives font-independent output.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::light(),
            draw_labels: true,
        }
    }
}

impl RenderOptions {
    /// Plot area, or an error when the insets leave no room to draw.
    pub fn plot_rect(&self) -> Result<RectI32> {
        let rect = RectI32::inset(self.width, self.height, &self.insets);
        if rect.is_empty() {
            anyhow::bail!(
                "surface {}x{} too small for insets {:?}",
                self.width,
                self.height,
                self.insets
            );
        }
        Ok(rect)
    }
}

#[derive(Clone, Debug)]
pub struct Chart {
    pub title: String,
    pub series: Vec<Series>,
    pub annotations: Vec<Annotation>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub show_legend: bool,
}

impl Default for Chart {
    fn default() -> Self {
        Self::new()
    }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            series: Vec::new(),
            annotations: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
            show_legend: true,
        }
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    pub fn annotate(&mut self, annotation: Annotation) {
        self.annotations.push(annotation);
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        let path = output_png_path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        debug!(path = %path.display(), "wrote chart png");
        Ok(())
    }

    /// Render and encode to PNG in memory.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = self.render_surface(opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render to unpremultiplied RGBA8. Returns `(pixels, width, height, row_stride)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = self.render_surface(opts)?;
        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = opts.width as usize * 4;
        let mut pixels = vec![0u8; stride * opts.height as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("reading back raster pixels failed");
        }
        Ok((pixels, opts.width as u32, opts.height as u32, stride))
    }

    fn render_surface(&self, opts: &RenderOptions) -> Result<skia::Surface> {
        let plot = opts.plot_rect()?;
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        let canvas = surface.canvas();
        let theme = &opts.theme;
        canvas.clear(theme.background);

        let xs = LinearScale::new(self.x_axis.min, self.x_axis.max, plot.left as f32, plot.right as f32);
        let ys = LinearScale::new(self.y_axis.min, self.y_axis.max, plot.bottom as f32, plot.top as f32);

        draw_grid(canvas, &plot, &xs, &ys, &self.x_axis, &self.y_axis, theme);

        for (i, s) in self.series.iter().enumerate() {
            let color = s.color.unwrap_or_else(|| theme.series_color(i));
            match s.series_type {
                SeriesType::Line => draw_line_series(canvas, &xs, &ys, s, color),
                SeriesType::Bar => draw_bar_series(canvas, &xs, &ys, s, color),
            }
        }

        draw_axes(canvas, &plot, theme);

        if opts.draw_labels {
            let shaper = TextShaper::new();
            draw_tick_labels(canvas, &shaper, &plot, &xs, &ys, &self.x_axis, &self.y_axis, theme);
            draw_titles(canvas, &shaper, &plot, opts, self);
            for a in &self.annotations {
                shaper.draw(canvas, &a.text, xs.to_px(a.x), ys.to_px(a.y) - 4.0, TICK_SIZE, theme.annotation, Anchor::Center);
            }
            if self.show_legend {
                draw_legend(canvas, &shaper, &plot, &self.series, theme);
            }
        }

        Ok(surface)
    }
}

// ---- helpers ----------------------------------------------------------------

const X_TICKS: usize = 8;
const Y_TICKS: usize = 6;

fn draw_grid(
    canvas: &skia::Canvas,
    plot: &RectI32,
    xs: &LinearScale,
    ys: &LinearScale,
    x: &Axis,
    y: &Axis,
    theme: &Theme,
) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);
    // categorical axes get no vertical grid
    if x.ticks.is_none() {
        for tick in x.tick_marks(X_TICKS) {
            let px = xs.to_px(tick.value);
            canvas.draw_line((px, t), (px, b), &paint);
        }
    }
    for tick in y.tick_marks(Y_TICKS) {
        let py = ys.to_px(tick.value);
        canvas.draw_line((l, py), (r, py), &paint);
    }
}

fn draw_axes(canvas: &skia::Canvas, plot: &RectI32, theme: &Theme) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_style(skia::paint::Style::Stroke);
    axis_paint.set_stroke_width(1.25);
    canvas.draw_rect(plot.to_skia(), &axis_paint);
}

fn draw_tick_labels(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    plot: &RectI32,
    xs: &LinearScale,
    ys: &LinearScale,
    x: &Axis,
    y: &Axis,
    theme: &Theme,
) {
    let mut tick_paint = skia::Paint::default();
    tick_paint.set_color(theme.axis_line);
    tick_paint.set_stroke_width(1.0);

    let b = plot.bottom as f32;
    for tick in x.tick_marks(X_TICKS) {
        let px = xs.to_px(tick.value);
        canvas.draw_line((px, b), (px, b + 4.0), &tick_paint);
        shaper.draw(canvas, &tick.label, px, b + 18.0, TICK_SIZE, theme.tick, Anchor::Center);
    }
    let l = plot.left as f32;
    for tick in y.tick_marks(Y_TICKS) {
        let py = ys.to_px(tick.value);
        canvas.draw_line((l - 4.0, py), (l, py), &tick_paint);
        shaper.draw(canvas, &tick.label, l - 7.0, py + TICK_SIZE * 0.35, TICK_SIZE, theme.tick, Anchor::Right);
    }
}

fn draw_titles(canvas: &skia::Canvas, shaper: &TextShaper, plot: &RectI32, opts: &RenderOptions, chart: &Chart) {
    let theme = &opts.theme;
    let cx = (plot.left + plot.right) as f32 * 0.5;
    let cy = (plot.top + plot.bottom) as f32 * 0.5;
    if !chart.title.is_empty() {
        shaper.draw(canvas, &chart.title, cx, plot.top as f32 - 14.0, TITLE_SIZE, theme.title, Anchor::Center);
    }
    shaper.draw(canvas, &chart.x_axis.label, cx, opts.height as f32 - 14.0, LABEL_SIZE, theme.axis_label, Anchor::Center);
    shaper.draw_vertical(canvas, &chart.y_axis.label, 18.0, cy, LABEL_SIZE, theme.axis_label);
}

fn draw_legend(canvas: &skia::Canvas, shaper: &TextShaper, plot: &RectI32, series: &[Series], theme: &Theme) {
    let entries: Vec<(usize, &Series)> = series.iter().enumerate().filter(|(_, s)| !s.name.is_empty()).collect();
    if entries.is_empty() {
        return;
    }
    const ROW: f32 = 20.0;
    const SWATCH: f32 = 24.0;
    const PAD: f32 = 8.0;

    let text_w = entries
        .iter()
        .map(|(_, s)| shaper.measure_width(&s.name, TICK_SIZE))
        .fold(0.0f32, f32::max);
    let left = plot.left as f32 + 10.0;
    let top = plot.top as f32 + 10.0;
    let box_rect = skia::Rect::from_xywh(left, top, PAD * 3.0 + SWATCH + text_w, PAD * 2.0 + ROW * entries.len() as f32);

    let mut fill = skia::Paint::default();
    fill.set_color(theme.legend_background);
    canvas.draw_rect(box_rect, &fill);
    let mut border = skia::Paint::default();
    border.set_color(theme.legend_border);
    border.set_style(skia::paint::Style::Stroke);
    border.set_stroke_width(1.0);
    canvas.draw_rect(box_rect, &border);

    for (row, (i, s)) in entries.iter().enumerate() {
        let color = s.color.unwrap_or_else(|| theme.series_color(*i));
        let cy = top + PAD + ROW * (row as f32 + 0.5);
        let sx = left + PAD;
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_color(color);
        match s.series_type {
            SeriesType::Line => {
                paint.set_stroke_width(2.0);
                canvas.draw_line((sx, cy), (sx + SWATCH, cy), &paint);
                if s.markers {
                    canvas.draw_circle((sx + SWATCH * 0.5, cy), MARKER_RADIUS, &paint);
                }
            }
            SeriesType::Bar => {
                canvas.draw_rect(skia::Rect::from_xywh(sx + 4.0, cy - 6.0, SWATCH - 8.0, 12.0), &paint);
            }
        }
        shaper.draw(canvas, &s.name, sx + SWATCH + PAD, cy + TICK_SIZE * 0.35, TICK_SIZE, theme.axis_label, Anchor::Left);
    }
}

fn draw_line_series(canvas: &skia::Canvas, xs: &LinearScale, ys: &LinearScale, series: &Series, color: skia::Color) {
    let pts: Vec<(f32, f32)> = series
        .data_xy
        .iter()
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .map(|&(x, y)| (xs.to_px(x), ys.to_px(y)))
        .collect();
    let Some(&first) = pts.first() else { return };

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(2.0);
    stroke.set_color(color);

    if pts.len() >= 2 {
        let mut path = skia::Path::new();
        path.move_to(first);
        for &p in &pts[1..] {
            path.line_to(p);
        }
        canvas.draw_path(&path, &stroke);
    }

    if series.markers {
        let mut dot = skia::Paint::default();
        dot.set_anti_alias(true);
        dot.set_style(skia::paint::Style::Fill);
        dot.set_color(color);
        for &p in &pts {
            canvas.draw_circle(p, MARKER_RADIUS, &dot);
        }
    }
}

fn draw_bar_series(canvas: &skia::Canvas, xs: &LinearScale, ys: &LinearScale, series: &Series, color: skia::Color) {
    let mut body = skia::Paint::default();
    body.set_anti_alias(true);
    body.set_style(skia::paint::Style::Fill);
    body.set_color(color);

    let half = series.bar_width * 0.5;
    let base = ys.to_px(0.0);
    for &(x, y) in &series.data_xy {
        if !x.is_finite() || !y.is_finite() {
            continue;
        }
        let top = ys.to_px(y);
        let rect = skia::Rect::from_ltrb(xs.to_px(x - half), top.min(base), xs.to_px(x + half), top.max(base));
        canvas.draw_rect(rect, &body);
    }
}
