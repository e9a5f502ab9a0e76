//! The interaction state of the drawing canvas.
//!
//! An in-progress shape and an open text entry are separate variants, so the
//! two can never be active at the same time.
//!
//! ```text
//!            pointer down (tool != text)          pointer up
//!   ┌──────┐ ───────────────────────────► ┌─────────┐ ─────────┐
//!   │ Idle │                              │ Drawing │          │ commit
//!   └──────┘ ◄─────────────────────────── └─────────┘ ◄────────┘
//!      │  ▲
//!      │  │ submit / cancel
//!      ▼  │
//!   ┌───────────┐
//!   │ TextEntry │  (pointer down with the text tool)
//!   └───────────┘
//! ```

use egui::Pos2;
use crate::shape::Shape;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum EditorState {
    /// No active operation
    #[default]
    Idle,
    /// A shape is following the pointer and is not yet committed
    Drawing {
        shape: Shape,
    },
    /// The text overlay is open at `position`
    TextEntry {
        position: Pos2,
        text: String,
    },
}

impl EditorState {
    /// Returns true if the editor is currently in an idle state
    pub fn is_idle(&self) -> bool {
        matches!(self, EditorState::Idle)
    }

    /// Returns true if a shape is being drawn
    pub fn is_drawing(&self) -> bool {
        matches!(self, EditorState::Drawing { .. })
    }

    /// Returns true if the text overlay is open
    pub fn is_editing_text(&self) -> bool {
        matches!(self, EditorState::TextEntry { .. })
    }

    /// Returns the in-progress shape if drawing
    pub fn current_shape(&self) -> Option<&Shape> {
        match self {
            EditorState::Drawing { shape } => Some(shape),
            _ => None,
        }
    }

    pub fn current_shape_mut(&mut self) -> Option<&mut Shape> {
        match self {
            EditorState::Drawing { shape } => Some(shape),
            _ => None,
        }
    }

    /// Returns where the text overlay was opened
    pub fn text_input_position(&self) -> Option<Pos2> {
        match self {
            EditorState::TextEntry { position, .. } => Some(*position),
            _ => None,
        }
    }

    pub fn current_text(&self) -> Option<&str> {
        match self {
            EditorState::TextEntry { text, .. } => Some(text),
            _ => None,
        }
    }

    pub fn current_text_mut(&mut self) -> Option<&mut String> {
        match self {
            EditorState::TextEntry { text, .. } => Some(text),
            _ => None,
        }
    }
}
