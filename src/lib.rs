#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod components;
pub mod config;
pub mod controls;
pub mod debounce;
pub mod error;
pub mod event;
pub mod export;
pub mod markdown;
pub mod panels;
pub mod persistence;
pub mod renderer;
pub mod settings;
pub mod shape;
pub mod state;
pub mod stats;
pub mod util;

pub use app::QuartzApp;
pub use config::Config;
pub use error::{ExportError, PersistenceError};
pub use persistence::{FilePreferences, MemoryPreferences, PreferenceStore};
pub use settings::{FontSize, UiSettings, ViewMode};
pub use shape::{Rgba, Shape, ShapeId, ShapeKind};
pub use state::{CanvasState, DocumentState, EditorState};
pub use stats::StatKind;
