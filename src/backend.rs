//! The rendering-backend contract and a recording implementation.
//!
//! The plotting core emits only pixel-space coordinates; everything that
//! touches a display (window management, fonts, rasterization) lives
//! behind [`Surface`]. [`RecordingSurface`] is the in-crate implementation:
//! it captures the ordered command stream so tests (and headless callers)
//! can assert on exactly what would be drawn.

use crate::color::Rgba;
use crate::geometry::Point;

/// Horizontal text alignment relative to the anchor position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    /// Anchor at the left edge of the text.
    Left,
    /// Anchor at the center of the text.
    #[default]
    Center,
    /// Anchor at the right edge of the text.
    Right,
}

/// Drawing contract the plotting core renders through.
///
/// All coordinates are pixel-space. Implementations are free to rasterize,
/// batch, or record; the core never reads pixels back.
pub trait Surface {
    /// Surface width in pixels.
    fn width(&self) -> f64;

    /// Surface height in pixels.
    fn height(&self) -> f64;

    /// Line height of the surface's font in pixels.
    ///
    /// Margins are specified in font-height units, so this feeds directly
    /// into viewport layout.
    fn font_line_height(&self) -> f64;

    /// Draw a line segment.
    fn draw_line(&mut self, from: Point, to: Point, color: Rgba, width: f64);

    /// Draw a circle outline.
    fn draw_circle(&mut self, center: Point, radius: f64, color: Rgba, width: f64);

    /// Draw a filled circle.
    fn draw_filled_circle(&mut self, center: Point, radius: f64, color: Rgba);

    /// Draw a rectangle outline between two opposite corners.
    fn draw_rect(&mut self, p1: Point, p2: Point, color: Rgba, width: f64);

    /// Draw a filled rectangle between two opposite corners.
    fn draw_filled_rect(&mut self, p1: Point, p2: Point, color: Rgba);

    /// Draw a filled polygon as a vertex fan with per-vertex colors.
    ///
    /// `colors` is matched to `vertices` by index; implementations may
    /// interpolate or take the first color if they cannot shade per vertex.
    fn draw_filled_polygon(&mut self, vertices: &[Point], colors: &[Rgba]);

    /// Draw a text string anchored at `position`.
    fn draw_text(&mut self, color: Rgba, position: Point, align: TextAlign, text: &str);

    /// Draw a single pixel.
    fn draw_pixel(&mut self, at: Point, color: Rgba);
}

/// A single recorded drawing command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Line segment.
    Line {
        /// Start point.
        from: Point,
        /// End point.
        to: Point,
        /// Stroke color.
        color: Rgba,
        /// Stroke width.
        width: f64,
    },
    /// Circle outline.
    Circle {
        /// Center.
        center: Point,
        /// Radius in pixels.
        radius: f64,
        /// Stroke color.
        color: Rgba,
        /// Stroke width.
        width: f64,
    },
    /// Filled circle.
    FilledCircle {
        /// Center.
        center: Point,
        /// Radius in pixels.
        radius: f64,
        /// Fill color.
        color: Rgba,
    },
    /// Rectangle outline.
    Rect {
        /// One corner.
        p1: Point,
        /// Opposite corner.
        p2: Point,
        /// Stroke color.
        color: Rgba,
        /// Stroke width.
        width: f64,
    },
    /// Filled rectangle.
    FilledRect {
        /// One corner.
        p1: Point,
        /// Opposite corner.
        p2: Point,
        /// Fill color.
        color: Rgba,
    },
    /// Filled polygon fan.
    FilledPolygon {
        /// Fan vertices.
        vertices: Vec<Point>,
        /// Per-vertex colors.
        colors: Vec<Rgba>,
    },
    /// Text string.
    Text {
        /// Text color.
        color: Rgba,
        /// Anchor position.
        position: Point,
        /// Alignment relative to the anchor.
        align: TextAlign,
        /// The string drawn.
        text: String,
    },
    /// Single pixel.
    Pixel {
        /// Pixel position.
        at: Point,
        /// Pixel color.
        color: Rgba,
    },
}

/// [`Surface`] implementation that records the command stream in memory.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    width: f64,
    height: f64,
    font_px: f64,
    commands: Vec<Command>,
}

impl RecordingSurface {
    /// Create a recording surface with the given dimensions and font height.
    #[must_use]
    pub fn new(width: f64, height: f64, font_px: f64) -> Self {
        Self { width, height, font_px, commands: Vec::new() }
    }

    /// The recorded commands, in issue order.
    #[must_use]
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Drop all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Number of recorded commands matching `pred`.
    pub fn count_matching(&self, pred: impl Fn(&Command) -> bool) -> usize {
        self.commands.iter().filter(|c| pred(c)).count()
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn font_line_height(&self) -> f64 {
        self.font_px
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Rgba, width: f64) {
        self.commands.push(Command::Line { from, to, color, width });
    }

    fn draw_circle(&mut self, center: Point, radius: f64, color: Rgba, width: f64) {
        self.commands.push(Command::Circle { center, radius, color, width });
    }

    fn draw_filled_circle(&mut self, center: Point, radius: f64, color: Rgba) {
        self.commands.push(Command::FilledCircle { center, radius, color });
    }

    fn draw_rect(&mut self, p1: Point, p2: Point, color: Rgba, width: f64) {
        self.commands.push(Command::Rect { p1, p2, color, width });
    }

    fn draw_filled_rect(&mut self, p1: Point, p2: Point, color: Rgba) {
        self.commands.push(Command::FilledRect { p1, p2, color });
    }

    fn draw_filled_polygon(&mut self, vertices: &[Point], colors: &[Rgba]) {
        self.commands.push(Command::FilledPolygon {
            vertices: vertices.to_vec(),
            colors: colors.to_vec(),
        });
    }

    fn draw_text(&mut self, color: Rgba, position: Point, align: TextAlign, text: &str) {
        self.commands.push(Command::Text { color, position, align, text: text.to_string() });
    }

    fn draw_pixel(&mut self, at: Point, color: Rgba) {
        self.commands.push(Command::Pixel { at, color });
    }
}
