// File: crates/stats-chart/src/figure.rs
// Summary: Figure of stacked panels sharing one x axis, and the headless
// rendering pipeline on Skia CPU raster surfaces.

use std::path::Path;

use skia_safe as skia;

use crate::axis::Axis;
use crate::error::{ChartError, Result};
use crate::geometry::RectF;
use crate::grid::{format_tick, nice_ticks};
use crate::panel::{merge, Panel};
use crate::scale::LinearScale;
use crate::series::Series;
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{ImageFormat, Insets, HEIGHT, WIDTH};

const TITLE_SIZE: f32 = 24.0;
const PANEL_TITLE_SIZE: f32 = 15.0;
const LABEL_SIZE: f32 = 13.0;
const TICK_SIZE: f32 = 11.0;
const TICK_LEN: f32 = 4.0;
const ROW_GAP: f32 = 14.0;
const X_TICKS: usize = 8;
const Y_TICKS: usize = 4;
/// Fraction of the data span added above and below each panel's y range.
const Y_MARGIN: f64 = 0.05;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Disable to skip all text (deterministic pixels across platforms).
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::default(),
            draw_labels: true,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Figure {
    pub title: String,
    pub x_axis: Axis,
    pub panels: Vec<Panel>,
}

impl Figure {
    pub fn new(title: impl Into<String>, x_label: impl Into<String>) -> Self {
        Self { title: title.into(), x_axis: Axis::labeled(x_label), panels: Vec::new() }
    }

    pub fn add_panel(&mut self, panel: Panel) {
        self.panels.push(panel);
    }

    pub fn with_panel(mut self, panel: Panel) -> Self {
        self.add_panel(panel);
        self
    }

    /// Fit the shared x axis tightly to all data and every panel's y axis to
    /// its own data with a small margin. Panels without data keep their range.
    pub fn autoscale(&mut self) {
        if let Some((lo, hi)) = merge(self.panels.iter().filter_map(Panel::x_range)) {
            self.x_axis.fit(lo, hi, 0.0);
        }
        for panel in &mut self.panels {
            panel.autoscale_y(Y_MARGIN);
        }
    }

    /// Render and encode as PNG.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        self.render_to_bytes(opts, ImageFormat::Png)
    }

    /// Render and encode in the requested format.
    pub fn render_to_bytes(&self, opts: &RenderOptions, format: ImageFormat) -> Result<Vec<u8>> {
        let mut surface = self.render_surface(opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(format.encoded())
            .ok_or(ChartError::Encode(format))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render to `path`; the format follows the file extension. Parent
    /// directories are created as needed.
    pub fn render_to_file(&self, opts: &RenderOptions, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let format = ImageFormat::from_path(path)?;
        let bytes = self.render_to_bytes(opts, format)?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Render into an unpremultiplied RGBA8 buffer.
    /// Returns (pixels, width, height, stride in bytes).
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = self.render_surface(opts)?;
        let (w, h) = (opts.width, opts.height);
        let info = skia::ImageInfo::new(
            (w, h),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(ChartError::ReadPixels);
        }
        Ok((pixels, w as u32, h as u32, stride))
    }

    fn render_surface(&self, opts: &RenderOptions) -> Result<skia::Surface> {
        if self.panels.is_empty() {
            return Err(ChartError::EmptyFigure);
        }
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or(ChartError::Surface { width: opts.width, height: opts.height })?;
        let canvas = surface.canvas();
        let theme = &opts.theme;
        let text = opts.draw_labels.then(TextShaper::new);

        canvas.clear(theme.background);

        let mut area = RectF::from_ltrb(
            opts.insets.left as f32,
            opts.insets.top as f32,
            (opts.width - opts.insets.right as i32) as f32,
            (opts.height - opts.insets.bottom as i32) as f32,
        );

        if let Some(shaper) = &text {
            if !self.title.is_empty() {
                let baseline = area.top + TITLE_SIZE;
                shaper.draw_centered(canvas, &self.title, opts.width as f32 * 0.5, baseline, TITLE_SIZE, theme.title);
                area = area.inset_top(TITLE_SIZE * 1.6);
            }
        }

        let x_ticks = nice_ticks(self.x_axis.min, self.x_axis.max, X_TICKS);
        let x_step = tick_step(&x_ticks);
        let last = self.panels.len() - 1;

        for (i, (panel, row)) in self.panels.iter().zip(area.split_rows(self.panels.len(), ROW_GAP)).enumerate() {
            let plot = if text.is_some() { row.inset_top(PANEL_TITLE_SIZE * 1.6) } else { row };
            let xs = LinearScale::new(plot.left, plot.right, self.x_axis.min, self.x_axis.max);
            let ys = LinearScale::new(plot.bottom, plot.top, panel.y_axis.min, panel.y_axis.max);
            let y_ticks = nice_ticks(panel.y_axis.min, panel.y_axis.max, Y_TICKS);

            draw_plot_background(canvas, &plot, theme);
            draw_grid(canvas, &plot, &xs, &ys, &x_ticks, &y_ticks, theme);

            canvas.save();
            canvas.clip_rect(plot.to_skia(), skia::ClipOp::Intersect, true);
            for series in &panel.series {
                // two points per horizontal pixel is enough for a stroke
                let budget = ((plot.width() as usize) * 2).max(2);
                draw_line_series(canvas, &xs, &ys, &series.downsample_lttb(budget), theme);
            }
            canvas.restore();

            draw_frame(canvas, &plot, &xs, &ys, &x_ticks, &y_ticks, theme);

            if let Some(shaper) = &text {
                let y_step = tick_step(&y_ticks);
                for &v in &y_ticks {
                    let label = format_tick(v, y_step);
                    let y = ys.to_px(v) + TICK_SIZE * 0.35;
                    shaper.draw_right(canvas, &label, plot.left - TICK_LEN - 4.0, y, TICK_SIZE, theme.tick, true);
                }
                let label_x = plot.left - opts.insets.left as f32 * 0.75;
                shaper.draw_vertical(canvas, &panel.y_axis.label, label_x, plot.center_y(), LABEL_SIZE, theme.axis_label);
                if !panel.title.is_empty() {
                    shaper.draw_centered(canvas, &panel.title, plot.center_x(), plot.top - 8.0, PANEL_TITLE_SIZE, theme.title);
                }
                if i == last {
                    for &v in &x_ticks {
                        let label = format_tick(v, x_step);
                        shaper.draw_centered(canvas, &label, xs.to_px(v), plot.bottom + TICK_LEN + TICK_SIZE + 2.0, TICK_SIZE, theme.tick);
                    }
                    let baseline = plot.bottom + TICK_LEN + TICK_SIZE + LABEL_SIZE + 12.0;
                    shaper.draw_centered(canvas, &self.x_axis.label, plot.center_x(), baseline, LABEL_SIZE, theme.axis_label);
                }
            }
        }

        Ok(surface)
    }
}

// ---- helpers ----------------------------------------------------------------

fn tick_step(ticks: &[f64]) -> f64 {
    match ticks {
        [a, b, ..] => b - a,
        _ => 1.0,
    }
}

fn draw_plot_background(canvas: &skia::Canvas, plot: &RectF, theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(theme.plot_background);
    canvas.draw_rect(plot.to_skia(), &paint);
}

fn draw_grid(
    canvas: &skia::Canvas,
    plot: &RectF,
    xs: &LinearScale,
    ys: &LinearScale,
    x_ticks: &[f64],
    y_ticks: &[f64],
    theme: &Theme,
) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    for &v in x_ticks {
        let x = xs.to_px(v);
        canvas.draw_line((x, plot.top), (x, plot.bottom), &paint);
    }
    for &v in y_ticks {
        let y = ys.to_px(v);
        canvas.draw_line((plot.left, y), (plot.right, y), &paint);
    }
}

fn draw_frame(
    canvas: &skia::Canvas,
    plot: &RectF,
    xs: &LinearScale,
    ys: &LinearScale,
    x_ticks: &[f64],
    y_ticks: &[f64],
    theme: &Theme,
) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.axis_line);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(1.0);
    canvas.draw_rect(plot.to_skia(), &paint);

    for &v in x_ticks {
        let x = xs.to_px(v);
        canvas.draw_line((x, plot.bottom), (x, plot.bottom + TICK_LEN), &paint);
    }
    for &v in y_ticks {
        let y = ys.to_px(v);
        canvas.draw_line((plot.left - TICK_LEN, y), (plot.left, y), &paint);
    }
}

fn draw_line_series(
    canvas: &skia::Canvas,
    xs: &LinearScale,
    ys: &LinearScale,
    series: &Series,
    theme: &Theme,
) {
    let color = series.color.unwrap_or(theme.line_stroke);
    let finite: Vec<(f32, f32)> = series
        .data_xy
        .iter()
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .map(|&(x, y)| (xs.to_px(x), ys.to_px(y)))
        .collect();

    if finite.len() == 1 {
        let mut dot = skia::Paint::default();
        dot.set_anti_alias(true);
        dot.set_style(skia::paint::Style::Fill);
        dot.set_color(color);
        canvas.draw_circle(finite[0], 3.0, &dot);
        return;
    }

    // Non-finite values break the line into separate runs.
    let mut path = skia::Path::new();
    let mut pen_down = false;
    for &(x, y) in &series.data_xy {
        if !(x.is_finite() && y.is_finite()) {
            pen_down = false;
            continue;
        }
        let p = (xs.to_px(x), ys.to_px(y));
        if pen_down {
            path.line_to(p);
        } else {
            path.move_to(p);
            pen_down = true;
        }
    }

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(2.0);
    stroke.set_stroke_join(skia::paint::Join::Round);
    stroke.set_color(color);

    canvas.draw_path(&path, &stroke);
}
