//! Drawing surface abstraction
//!
//! The renderer emits primitive drawing operations through [`Surface`]. The
//! bundled [`RenderList`] records them as [`RenderCommand`]s, which a host can
//! replay on a real canvas or serialize with [`RenderList::to_svg`].

use serde::Serialize;

/// Point in surface pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in surface pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x <= self.right() && point.y >= self.y && point.y <= self.bottom()
    }
}

/// Fill color with opacity
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FillStyle {
    pub color: String,
    pub alpha: f64,
}

impl FillStyle {
    pub fn solid(color: &str) -> Self {
        Self::with_alpha(color, 1.0)
    }

    pub fn with_alpha(color: &str, alpha: f64) -> Self {
        Self {
            color: color.to_string(),
            alpha,
        }
    }
}

/// Stroke color and width
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineStyle {
    pub color: String,
    pub width: f64,
    pub dashed: bool,
}

impl LineStyle {
    pub fn new(color: &str, width: f64) -> Self {
        Self {
            color: color.to_string(),
            width,
            dashed: false,
        }
    }

    pub fn dashed(mut self) -> Self {
        self.dashed = true;
        self
    }
}

/// Horizontal text alignment relative to the anchor point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

/// Font settings for a text run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextStyle {
    pub color: String,
    pub size: f64,
    pub anchor: TextAnchor,
    pub bold: bool,
}

impl TextStyle {
    pub fn new(color: &str, size: f64, anchor: TextAnchor) -> Self {
        Self {
            color: color.to_string(),
            size,
            anchor,
            bold: false,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

/// Pixel surface the chart renderer draws on
pub trait Surface {
    /// Current drawable size in pixels
    fn size(&self) -> (f64, f64);

    /// Discard everything drawn so far
    fn clear(&mut self);

    fn fill_rect(&mut self, rect: Rect, style: &FillStyle);
    fn stroke_rect(&mut self, rect: Rect, style: &LineStyle);
    fn line(&mut self, from: Point, to: Point, style: &LineStyle);
    fn polyline(&mut self, points: &[Point], style: &LineStyle);
    fn circle(&mut self, center: Point, radius: f64, style: &FillStyle);
    fn text(&mut self, position: Point, text: &str, style: &TextStyle);

    /// Restrict subsequent drawing to `rect` until the matching `pop_clip`
    fn push_clip(&mut self, rect: Rect);
    fn pop_clip(&mut self);
}

/// One recorded drawing operation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum RenderCommand {
    FillRect { rect: Rect, style: FillStyle },
    StrokeRect { rect: Rect, style: LineStyle },
    Line { from: Point, to: Point, style: LineStyle },
    Polyline { points: Vec<Point>, style: LineStyle },
    Circle { center: Point, radius: f64, style: FillStyle },
    Text { position: Point, text: String, style: TextStyle },
    PushClip { rect: Rect },
    PopClip,
}

/// Surface that records commands for replay or serialization
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RenderList {
    width: f64,
    height: f64,
    pub commands: Vec<RenderCommand>,
}

impl RenderList {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    /// Change the reported size; takes effect on the renderer's next `resize`
    pub fn set_size(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Text runs in drawing order
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                RenderCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RenderList {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        self.commands.clear();
    }

    fn fill_rect(&mut self, rect: Rect, style: &FillStyle) {
        self.commands.push(RenderCommand::FillRect {
            rect,
            style: style.clone(),
        });
    }

    fn stroke_rect(&mut self, rect: Rect, style: &LineStyle) {
        self.commands.push(RenderCommand::StrokeRect {
            rect,
            style: style.clone(),
        });
    }

    fn line(&mut self, from: Point, to: Point, style: &LineStyle) {
        self.commands.push(RenderCommand::Line {
            from,
            to,
            style: style.clone(),
        });
    }

    fn polyline(&mut self, points: &[Point], style: &LineStyle) {
        if points.len() < 2 {
            return;
        }
        self.commands.push(RenderCommand::Polyline {
            points: points.to_vec(),
            style: style.clone(),
        });
    }

    fn circle(&mut self, center: Point, radius: f64, style: &FillStyle) {
        self.commands.push(RenderCommand::Circle {
            center,
            radius,
            style: style.clone(),
        });
    }

    fn text(&mut self, position: Point, text: &str, style: &TextStyle) {
        self.commands.push(RenderCommand::Text {
            position,
            text: text.to_string(),
            style: style.clone(),
        });
    }

    fn push_clip(&mut self, rect: Rect) {
        self.commands.push(RenderCommand::PushClip { rect });
    }

    fn pop_clip(&mut self) {
        self.commands.push(RenderCommand::PopClip);
    }
}
