use eframe::egui;
use crate::shape::ShapeKind;

const BUTTON_SIZE: f32 = 32.0;

pub struct ToolButton {
    pub tool: ShapeKind,
    pub selected: bool,
}

impl ToolButton {
    pub fn new(tool: ShapeKind, selected: bool) -> Self {
        Self { tool, selected }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let (rect, response) = ui.allocate_exact_size(egui::vec2(BUTTON_SIZE, BUTTON_SIZE), egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let visuals = ui.visuals();
            let bg_color = if self.selected {
                visuals.selection.bg_fill
            } else if response.hovered() {
                visuals.widgets.hovered.weak_bg_fill
            } else {
                visuals.widgets.inactive.weak_bg_fill
            };
            ui.painter().rect_filled(rect, 6.0, bg_color);

            let text_color = if self.selected {
                visuals.selection.stroke.color
            } else {
                visuals.text_color()
            };
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                self.tool.icon(),
                egui::FontId::proportional(20.0),
                text_color,
            );
        }

        response.on_hover_text(self.tool.label())
    }
}
