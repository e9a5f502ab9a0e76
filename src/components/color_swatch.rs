use eframe::egui;
use crate::shape::Rgba;

const SWATCH_SIZE: f32 = 24.0;

/// Round colour chip; the selected one gets a ring
pub struct ColorSwatch {
    pub color: Rgba,
    pub selected: bool,
}

impl ColorSwatch {
    pub fn new(color: Rgba, selected: bool) -> Self {
        Self { color, selected }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let (rect, response) = ui.allocate_exact_size(egui::vec2(SWATCH_SIZE, SWATCH_SIZE), egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let radius = SWATCH_SIZE / 2.0 - 3.0;
            ui.painter().circle_filled(rect.center(), radius, self.color.to_color32());
            // Outline keeps black and white chips visible on either theme
            ui.painter().circle_stroke(rect.center(), radius, ui.visuals().widgets.noninteractive.bg_stroke);

            if self.selected || response.hovered() {
                let ring = if self.selected {
                    ui.visuals().selection.stroke.color
                } else {
                    ui.visuals().weak_text_color()
                };
                ui.painter().circle_stroke(rect.center(), SWATCH_SIZE / 2.0 - 0.5, egui::Stroke::new(2.0, ring));
            }
        }

        response
    }
}
