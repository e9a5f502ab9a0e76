use std::time::Instant;
use egui::Pos2;
use crate::shape::{Shape, ShapeKind};
use crate::stats::StatKind;

/// Changes published by the drawing canvas
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasEvent {
    /// The committed shape list changed (commit, text add, undo or clear)
    ShapesChanged {
        shapes: Vec<Shape>,
    },
    ToolChanged {
        old: ShapeKind,
        new: ShapeKind,
    },
    TextEntryOpened {
        position: Pos2,
    },
    TextEntryClosed,
}

/// Changes published by the text document
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentEvent {
    /// `at` is the caller's clock reading for the edit
    TextChanged {
        text: String,
        at: Instant,
    },
    StatSelected {
        kind: StatKind,
    },
}
