//! Renderer boundary and two in-crate renderers.
//!
//! The runners only talk to [`Renderer`]; a windowing backend would
//! implement the same trait. [`AsciiCanvas`] draws into a character grid
//! for terminals and [`RecordingRenderer`] keeps every call for tests.

use std::fmt::Write as _;

use lz_color::Rgb;
use serde::{Deserialize, Serialize};

/// Drawing surface driven by the runners.
pub trait Renderer {
    fn configure_canvas(&mut self, width: u32, height: u32);
    fn set_axis_ranges(&mut self, xmin: f64, xmax: f64, ymin: f64, ymax: f64);
    fn clear(&mut self, background: Rgb);
    fn enable_buffering(&mut self);
    fn set_color(&mut self, color: Rgb);
    fn plot_point(&mut self, a: f64, b: f64);
    /// Show everything drawn since the last call.
    fn present(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRanges {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
}

impl AxisRanges {
    pub const fn new(xmin: f64, xmax: f64, ymin: f64, ymax: f64) -> Self {
        Self {
            xmin,
            xmax,
            ymin,
            ymax,
        }
    }

    /// Symmetric ranges `[-x, x] × [-y, y]`.
    pub const fn symmetric(x: f64, y: f64) -> Self {
        Self::new(-x, x, -y, y)
    }
}

/// Canvas preparation done once before the first point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSetup {
    pub width: u32,
    pub height: u32,
    pub axes: AxisRanges,
    pub background: Rgb,
    pub buffered: bool,
}

impl Default for CanvasSetup {
    fn default() -> Self {
        Self {
            width: 600,
            height: 600,
            axes: AxisRanges::symmetric(50.0, 50.0),
            background: Rgb::BLACK,
            buffered: true,
        }
    }
}

impl CanvasSetup {
    pub fn apply(&self, renderer: &mut dyn Renderer) {
        renderer.configure_canvas(self.width, self.height);
        let a = self.axes;
        renderer.set_axis_ranges(a.xmin, a.xmax, a.ymin, a.ymax);
        renderer.clear(self.background);
        if self.buffered {
            renderer.enable_buffering();
        }
    }
}

/// One recorded renderer call.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderOp {
    ConfigureCanvas { width: u32, height: u32 },
    SetAxisRanges(AxisRanges),
    Clear(Rgb),
    EnableBuffering,
    SetColor(Rgb),
    PlotPoint(f64, f64),
    Present,
}

/// Keeps every call in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    pub ops: Vec<RenderOp>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Plotted points with the color active when each was drawn.
    pub fn plotted(&self) -> Vec<(Rgb, f64, f64)> {
        let mut color = Rgb::BLACK;
        let mut out = Vec::new();
        for op in &self.ops {
            match op {
                RenderOp::SetColor(c) => color = *c,
                RenderOp::PlotPoint(a, b) => out.push((color, *a, *b)),
                _ => {}
            }
        }
        out
    }

    pub fn presents(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, RenderOp::Present))
            .count()
    }
}

impl Renderer for RecordingRenderer {
    fn configure_canvas(&mut self, width: u32, height: u32) {
        self.ops.push(RenderOp::ConfigureCanvas { width, height });
    }

    fn set_axis_ranges(&mut self, xmin: f64, xmax: f64, ymin: f64, ymax: f64) {
        self.ops
            .push(RenderOp::SetAxisRanges(AxisRanges::new(xmin, xmax, ymin, ymax)));
    }

    fn clear(&mut self, background: Rgb) {
        self.ops.push(RenderOp::Clear(background));
    }

    fn enable_buffering(&mut self) {
        self.ops.push(RenderOp::EnableBuffering);
    }

    fn set_color(&mut self, color: Rgb) {
        self.ops.push(RenderOp::SetColor(color));
    }

    fn plot_point(&mut self, a: f64, b: f64) {
        self.ops.push(RenderOp::PlotPoint(a, b));
    }

    fn present(&mut self) {
        self.ops.push(RenderOp::Present);
    }
}

/// Character-grid canvas. The grid size is fixed at construction;
/// `configure_canvas` only records the requested pixel size.
#[derive(Debug, Clone)]
pub struct AsciiCanvas {
    cols: usize,
    rows: usize,
    axes: AxisRanges,
    background: Rgb,
    color: Rgb,
    cells: Vec<Option<Rgb>>,
    pixel_size: (u32, u32),
    frames: u64,
}

impl AsciiCanvas {
    pub fn new(cols: usize, rows: usize) -> Self {
        let setup = CanvasSetup::default();
        Self {
            cols,
            rows,
            axes: setup.axes,
            background: setup.background,
            color: Rgb::WHITE,
            cells: vec![None; cols * rows],
            pixel_size: (setup.width, setup.height),
            frames: 0,
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn pixel_size(&self) -> (u32, u32) {
        self.pixel_size
    }

    pub fn background(&self) -> Rgb {
        self.background
    }

    /// Number of `present` calls so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Color of the last point drawn into a cell; row 0 is the top.
    pub fn cell(&self, col: usize, row: usize) -> Option<Rgb> {
        if col < self.cols && row < self.rows {
            self.cells[row * self.cols + col]
        } else {
            None
        }
    }

    pub fn filled_cells(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    fn cell_index(&self, a: f64, b: f64) -> Option<usize> {
        let AxisRanges {
            xmin,
            xmax,
            ymin,
            ymax,
        } = self.axes;
        if self.cells.is_empty() {
            return None;
        }
        if !(a.is_finite() && b.is_finite()) || xmax <= xmin || ymax <= ymin {
            return None;
        }
        if a < xmin || a > xmax || b < ymin || b > ymax {
            return None;
        }
        let fx = (a - xmin) / (xmax - xmin);
        let fy = (ymax - b) / (ymax - ymin);
        let col = ((fx * self.cols as f64) as usize).min(self.cols - 1);
        let row = ((fy * self.rows as f64) as usize).min(self.rows - 1);
        Some(row * self.cols + col)
    }

    /// Plain text, `*` for drawn cells.
    pub fn render_text(&self) -> String {
        let mut out = String::with_capacity((self.cols + 1) * self.rows);
        for row in self.cells.chunks(self.cols.max(1)) {
            for cell in row {
                out.push(if cell.is_some() { '*' } else { ' ' });
            }
            out.push('\n');
        }
        out
    }

    /// Text with 24-bit ANSI colors on the background color.
    pub fn render_ansi(&self) -> String {
        let bg = self.background;
        let mut out = String::new();
        for row in self.cells.chunks(self.cols.max(1)) {
            let _ = write!(out, "\x1b[48;2;{};{};{}m", bg.r, bg.g, bg.b);
            for cell in row {
                match cell {
                    Some(c) => {
                        let _ = write!(out, "\x1b[38;2;{};{};{}m*", c.r, c.g, c.b);
                    }
                    None => out.push(' '),
                }
            }
            out.push_str("\x1b[0m\n");
        }
        out
    }
}

impl Renderer for AsciiCanvas {
    fn configure_canvas(&mut self, width: u32, height: u32) {
        self.pixel_size = (width, height);
    }

    fn set_axis_ranges(&mut self, xmin: f64, xmax: f64, ymin: f64, ymax: f64) {
        self.axes = AxisRanges::new(xmin, xmax, ymin, ymax);
    }

    fn clear(&mut self, background: Rgb) {
        self.background = background;
        self.cells.fill(None);
    }

    fn enable_buffering(&mut self) {}

    fn set_color(&mut self, color: Rgb) {
        self.color = color;
    }

    fn plot_point(&mut self, a: f64, b: f64) {
        if let Some(idx) = self.cell_index(a, b) {
            self.cells[idx] = Some(self.color);
        }
    }

    fn present(&mut self) {
        self.frames += 1;
    }
}
