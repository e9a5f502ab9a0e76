use egui::{Pos2, pos2};

use super::EditorState;
use crate::event::{CanvasEvent, EventBus, EventHandler};
use crate::shape::{Rgba, Shape, ShapeKind};

/// Below this size in both dimensions a drag counts as a click
pub const MIN_DRAG_SIZE: f32 = 5.0;

/// Side length used for shapes created by a single click
pub const DEFAULT_SHAPE_SIZE: f32 = 50.0;

pub const DEFAULT_STROKE_WIDTH: f32 = 2.0;

/// Stroke widths offered in the width menu
pub const STROKE_WIDTH_PRESETS: [(f32, &str); 4] = [
    (1.0, "Thin (1pt)"),
    (2.0, "Normal (2pt)"),
    (4.0, "Medium (4pt)"),
    (6.0, "Thick (6pt)"),
];

/// Owner of the drawing canvas: committed shapes, the interaction state and
/// the defaults applied to newly started shapes.
///
/// Every mutating call runs on the UI thread and notifies subscribers after
/// the change is complete. Calls that are not valid in the current state are
/// silently ignored.
#[derive(Debug)]
pub struct CanvasState {
    shapes: Vec<Shape>,
    state: EditorState,
    selected_tool: ShapeKind,
    stroke_color: Rgba,
    stroke_width: f32,
    event_bus: EventBus<CanvasEvent>,
}

impl Default for CanvasState {
    fn default() -> Self {
        Self::new()
    }
}

impl CanvasState {
    pub fn new() -> Self {
        Self {
            shapes: Vec::new(),
            state: EditorState::Idle,
            selected_tool: ShapeKind::Line,
            stroke_color: Rgba::BLACK,
            stroke_width: DEFAULT_STROKE_WIDTH,
            event_bus: EventBus::new(),
        }
    }

    /// Replace the committed shapes with a restored snapshot.
    ///
    /// Does not notify subscribers: the snapshot is already persisted.
    pub fn restore(&mut self, shapes: Vec<Shape>) {
        log::info!("Restored {} canvas shapes", shapes.len());
        self.shapes = shapes;
        self.state = EditorState::Idle;
    }

    pub fn subscribe(&self, handler: impl EventHandler<CanvasEvent> + 'static) {
        self.event_bus.subscribe(handler);
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn current_shape(&self) -> Option<&Shape> {
        self.state.current_shape()
    }

    pub fn is_editing_text(&self) -> bool {
        self.state.is_editing_text()
    }

    pub fn text_input_position(&self) -> Option<Pos2> {
        self.state.text_input_position()
    }

    pub fn current_text(&self) -> Option<&str> {
        self.state.current_text()
    }

    /// The text being typed into the overlay, if it is open
    pub fn text_entry_mut(&mut self) -> Option<&mut String> {
        self.state.current_text_mut()
    }

    pub fn selected_tool(&self) -> ShapeKind {
        self.selected_tool
    }

    pub fn stroke_color(&self) -> Rgba {
        self.stroke_color
    }

    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
    }

    pub fn set_tool(&mut self, tool: ShapeKind) {
        if tool == self.selected_tool {
            return;
        }
        let old = std::mem::replace(&mut self.selected_tool, tool);
        log::debug!("Tool changed from {:?} to {:?}", old, tool);
        self.event_bus.emit(CanvasEvent::ToolChanged { old, new: tool });
    }

    pub fn set_stroke_color(&mut self, color: Rgba) {
        self.stroke_color = color;
    }

    pub fn set_stroke_width(&mut self, width: f32) {
        if width > 0.0 {
            self.stroke_width = width;
        } else {
            log::warn!("Ignoring non-positive stroke width {width}");
        }
    }

    /// Pointer down on the canvas.
    ///
    /// With the text tool this opens the text overlay at `point`; otherwise a
    /// new shape starts at `point`. Ignored unless the canvas is idle.
    pub fn start_shape(&mut self, point: Pos2) {
        if !self.state.is_idle() {
            return;
        }

        if self.selected_tool == ShapeKind::Text {
            self.state = EditorState::TextEntry {
                position: point,
                text: String::new(),
            };
            self.event_bus.emit(CanvasEvent::TextEntryOpened { position: point });
        } else if let Some(shape) = Shape::drawn(self.selected_tool, point, self.stroke_color, self.stroke_width) {
            self.state = EditorState::Drawing { shape };
        }
    }

    /// Pointer moved while held down.
    ///
    /// Follows the shape in progress even if the tool changed mid-drag; the
    /// tool only applies to shapes started afterwards.
    pub fn update_shape(&mut self, point: Pos2) {
        if let Some(shape) = self.state.current_shape_mut() {
            shape.set_end_point(point);
        }
    }

    /// Pointer released: commit the in-progress shape.
    ///
    /// A release that leaves the shape smaller than [`MIN_DRAG_SIZE`] in both
    /// dimensions commits the tool's default-sized shape instead.
    pub fn end_shape(&mut self, point: Pos2) {
        if !self.state.is_drawing() {
            return;
        }
        let EditorState::Drawing { mut shape } = std::mem::take(&mut self.state) else {
            return;
        };

        shape.set_end_point(point);
        apply_click_size(&mut shape, point);

        log::debug!("Committed {:?} shape {}", shape.kind(), shape.id());
        self.shapes.push(shape);
        self.notify_shapes_changed();
    }

    /// Submit the text overlay.
    ///
    /// Empty text closes the overlay without adding anything.
    pub fn add_text(&mut self) {
        let EditorState::TextEntry { position, text } = std::mem::take(&mut self.state) else {
            return;
        };

        if !text.is_empty() {
            if let Some(shape) = Shape::text(position, text, self.stroke_color, self.stroke_width) {
                self.shapes.push(shape);
                self.notify_shapes_changed();
            }
        }
        self.event_bus.emit(CanvasEvent::TextEntryClosed);
    }

    /// Close the text overlay, discarding what was typed
    pub fn cancel_text(&mut self) {
        if self.state.is_editing_text() {
            self.state = EditorState::Idle;
            self.event_bus.emit(CanvasEvent::TextEntryClosed);
        }
    }

    /// Remove the most recently committed shape. There is no redo.
    pub fn undo(&mut self) {
        if self.shapes.pop().is_some() {
            self.notify_shapes_changed();
        }
    }

    /// Remove every shape and reset the interaction state
    pub fn clear_canvas(&mut self) {
        let was_editing = self.state.is_editing_text();
        self.state = EditorState::Idle;
        self.shapes.clear();
        if was_editing {
            self.event_bus.emit(CanvasEvent::TextEntryClosed);
        }
        self.notify_shapes_changed();
    }

    fn notify_shapes_changed(&self) {
        self.event_bus.emit(CanvasEvent::ShapesChanged {
            shapes: self.shapes.clone(),
        });
    }
}

/// Turn a click-sized shape into the tool's default-sized variant
fn apply_click_size(shape: &mut Shape, release: Pos2) {
    let rect = shape.rect();
    if rect.width() >= MIN_DRAG_SIZE || rect.height() >= MIN_DRAG_SIZE {
        return;
    }

    let half = DEFAULT_SHAPE_SIZE / 2.0;
    match shape.kind() {
        ShapeKind::Line => {
            let start = shape.start_point();
            shape.set_end_point(start + egui::Vec2::splat(DEFAULT_SHAPE_SIZE));
        }
        ShapeKind::Circle | ShapeKind::Square => shape.set_points(
            pos2(release.x - half, release.y - half),
            pos2(release.x + half, release.y + half),
        ),
        ShapeKind::Rectangle => shape.set_points(
            pos2(release.x - DEFAULT_SHAPE_SIZE, release.y - half),
            pos2(release.x + DEFAULT_SHAPE_SIZE, release.y + half),
        ),
        ShapeKind::Text => {}
    }
}
