mod canvas;
mod document;
mod editor_state;

pub use canvas::{
    CanvasState,
    DEFAULT_SHAPE_SIZE,
    DEFAULT_STROKE_WIDTH,
    MIN_DRAG_SIZE,
    STROKE_WIDTH_PRESETS,
};
pub use document::{DocumentState, DEFAULT_STATS_DELAY};
pub use editor_state::EditorState;
