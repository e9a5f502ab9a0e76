use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
    ExtraLarge,
}

impl FontSize {
    pub const ALL: [FontSize; 4] = [FontSize::Small, FontSize::Medium, FontSize::Large, FontSize::ExtraLarge];

    pub fn points(self) -> f32 {
        match self {
            Self::Small => 14.0,
            Self::Medium => 18.0,
            Self::Large => 24.0,
            Self::ExtraLarge => 32.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Small => "Small",
            Self::Medium => "Medium",
            Self::Large => "Large",
            Self::ExtraLarge => "Extra Large",
        }
    }
}

/// How the note is presented
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewMode {
    #[default]
    Editor,
    /// Editor on the left, preview on the right
    Split,
    Preview,
}

/// Presentation preferences restored through eframe's persistence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct UiSettings {
    pub dark_mode: bool,
    pub font_size: FontSize,
    pub view_mode: ViewMode,
    pub show_canvas: bool,
}

impl UiSettings {
    pub fn toggle_theme(&mut self) {
        self.dark_mode = !self.dark_mode;
    }

    /// Split and preview are exclusive; toggling one off returns to the editor
    pub fn toggle_split(&mut self) {
        self.view_mode = match self.view_mode {
            ViewMode::Split => ViewMode::Editor,
            _ => ViewMode::Split,
        };
    }

    pub fn toggle_preview(&mut self) {
        self.view_mode = match self.view_mode {
            ViewMode::Preview => ViewMode::Editor,
            _ => ViewMode::Preview,
        };
    }
}
