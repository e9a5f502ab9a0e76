mod canvas_panel;
mod editor_panel;
mod menu_bar;

pub use canvas_panel::canvas_panel;
pub use editor_panel::editor_panel;
pub use menu_bar::menu_bar;
