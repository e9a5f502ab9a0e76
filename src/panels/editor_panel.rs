use std::time::Instant;

use crate::QuartzApp;
use crate::renderer::show_markdown;
use crate::settings::ViewMode;

/// Room left under the text for the floating menu
const BOTTOM_PADDING: f32 = 100.0;

pub fn editor_panel(app: &mut QuartzApp, ctx: &egui::Context) {
    let frame = egui::Frame::central_panel(&ctx.style()).inner_margin(egui::Margin {
        left: 20.0,
        right: 20.0,
        top: 32.0,
        bottom: 0.0,
    });

    egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
        let font_size = app.settings.font_size.points();
        match app.settings.view_mode {
            ViewMode::Editor => text_editor(app, ui, font_size),
            ViewMode::Preview => preview(app, ui, font_size),
            ViewMode::Split => {
                ui.columns(2, |columns| {
                    text_editor(app, &mut columns[0], font_size);
                    preview(app, &mut columns[1], font_size);
                });
            }
        }
    });
}

fn text_editor(app: &mut QuartzApp, ui: &mut egui::Ui, font_size: f32) {
    let mut text = app.document.text().to_owned();
    egui::ScrollArea::vertical()
        .id_salt("editor_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            let response = ui.add_sized(
                ui.available_size(),
                egui::TextEdit::multiline(&mut text)
                    .id(egui::Id::new("quartz_editor"))
                    .font(egui::FontId::proportional(font_size))
                    .frame(false)
                    .lock_focus(true),
            );
            if response.changed() {
                app.document.set_text(text, Instant::now());
            }
            if !ui.ctx().memory(|m| m.has_focus(response.id)) && ui.ctx().memory(|m| m.focused().is_none()) {
                response.request_focus();
            }
        });
}

fn preview(app: &QuartzApp, ui: &mut egui::Ui, font_size: f32) {
    egui::ScrollArea::vertical()
        .id_salt("preview_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            show_markdown(ui, app.document.text(), font_size);
            ui.add_space(BOTTOM_PADDING);
        });
}
