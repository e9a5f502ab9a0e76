use egui::{Pos2, Rect, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier of a drawn shape
pub type ShapeId = Uuid;

/// The kind of primitive a shape draws. Doubles as the canvas tool selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Line,
    Circle,
    Square,
    Rectangle,
    Text,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 5] = [
        ShapeKind::Line,
        ShapeKind::Circle,
        ShapeKind::Square,
        ShapeKind::Rectangle,
        ShapeKind::Text,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Line => "Line",
            Self::Circle => "Circle",
            Self::Square => "Square",
            Self::Rectangle => "Rectangle",
            Self::Text => "Text",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Line => "╱",
            Self::Circle => "○",
            Self::Square => "□",
            Self::Rectangle => "▭",
            Self::Text => "T",
        }
    }
}

/// Straight RGBA colour with components in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Rgba = Rgba::rgb(1.0, 1.0, 1.0);
    pub const RED: Rgba = Rgba::rgb(1.0, 0.231, 0.188);
    pub const ORANGE: Rgba = Rgba::rgb(1.0, 0.584, 0.0);
    pub const YELLOW: Rgba = Rgba::rgb(1.0, 0.8, 0.0);
    pub const GREEN: Rgba = Rgba::rgb(0.204, 0.78, 0.349);
    pub const BLUE: Rgba = Rgba::rgb(0.0, 0.478, 1.0);
    pub const PURPLE: Rgba = Rgba::rgb(0.686, 0.322, 0.871);
    pub const PINK: Rgba = Rgba::rgb(1.0, 0.176, 0.333);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    pub fn to_color32(self) -> egui::Color32 {
        egui::Rgba::from_rgba_unmultiplied(self.r, self.g, self.b, self.a).into()
    }
}

/// One committed or in-progress drawn primitive.
///
/// `text` is present exactly when `kind` is [`ShapeKind::Text`] and the stroke
/// width is always positive. Both are enforced on construction and on decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ShapeRecord", into = "ShapeRecord")]
pub struct Shape {
    id: ShapeId,
    kind: ShapeKind,
    start_point: Pos2,
    end_point: Pos2,
    color: Rgba,
    stroke_width: f32,
    text: Option<String>,
}

impl Shape {
    /// Start a drag-drawn shape with both points at `point`.
    ///
    /// Text shapes cannot be drawn; use [`Shape::text`].
    pub fn drawn(kind: ShapeKind, point: Pos2, color: Rgba, stroke_width: f32) -> Option<Self> {
        if kind == ShapeKind::Text || !(stroke_width > 0.0) {
            return None;
        }
        Some(Self {
            id: Uuid::new_v4(),
            kind,
            start_point: point,
            end_point: point,
            color,
            stroke_width,
            text: None,
        })
    }

    /// A text shape anchored at `position`
    pub fn text(position: Pos2, text: impl Into<String>, color: Rgba, stroke_width: f32) -> Option<Self> {
        if !(stroke_width > 0.0) {
            return None;
        }
        Some(Self {
            id: Uuid::new_v4(),
            kind: ShapeKind::Text,
            start_point: position,
            end_point: position,
            color,
            stroke_width,
            text: Some(text.into()),
        })
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn start_point(&self) -> Pos2 {
        self.start_point
    }

    pub fn end_point(&self) -> Pos2 {
        self.end_point
    }

    pub fn color(&self) -> Rgba {
        self.color
    }

    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
    }

    pub fn text_content(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub(crate) fn set_end_point(&mut self, point: Pos2) {
        self.end_point = point;
    }

    pub(crate) fn set_points(&mut self, start: Pos2, end: Pos2) {
        self.start_point = start;
        self.end_point = end;
    }

    /// Normalized bounding box of the two points
    pub fn rect(&self) -> Rect {
        Rect::from_two_pos(self.start_point, self.end_point)
    }

    /// Bounding box clamped to its smaller side, anchored at the min corner
    pub fn square_rect(&self) -> Rect {
        let rect = self.rect();
        let side = rect.width().min(rect.height());
        Rect::from_min_size(rect.min, Vec2::splat(side))
    }
}

/// Wire form of a shape inside the persisted snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ShapeRecord {
    id: ShapeId,
    #[serde(rename = "type")]
    kind: ShapeKind,
    start_point: Pos2,
    end_point: Pos2,
    color: Rgba,
    stroke_width: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

impl TryFrom<ShapeRecord> for Shape {
    type Error = String;

    fn try_from(record: ShapeRecord) -> Result<Self, Self::Error> {
        if !(record.stroke_width > 0.0) {
            return Err(format!("shape {} has non-positive stroke width", record.id));
        }
        if (record.kind == ShapeKind::Text) != record.text.is_some() {
            return Err(format!("shape {} has text payload mismatching its type", record.id));
        }
        Ok(Self {
            id: record.id,
            kind: record.kind,
            start_point: record.start_point,
            end_point: record.end_point,
            color: record.color,
            stroke_width: record.stroke_width,
            text: record.text,
        })
    }
}

impl From<Shape> for ShapeRecord {
    fn from(shape: Shape) -> Self {
        Self {
            id: shape.id,
            kind: shape.kind,
            start_point: shape.start_point,
            end_point: shape.end_point,
            color: shape.color,
            stroke_width: shape.stroke_width,
            text: shape.text,
        }
    }
}
