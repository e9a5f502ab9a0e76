use std::time::Instant;
use egui::{Align2, Color32, RichText, vec2};

use crate::QuartzApp;
use crate::settings::{FontSize, ViewMode};
use crate::stats::StatKind;

const ICON_SIZE: f32 = 16.0;
const MENU_BAR_ID: &str = "menu_bar";

/// Floating controls along the bottom edge, faded out while writing
pub fn menu_bar(app: &mut QuartzApp, ctx: &egui::Context) {
    let visible = app.controls.borrow().is_visible();
    let opacity = ctx.animate_bool_with_time(egui::Id::new("controls_opacity"), visible, 0.3);
    if opacity <= 0.0 {
        return;
    }

    // Starts centred above the bottom edge; dragging its border moves it and
    // egui remembers the new position.
    egui::Area::new(egui::Id::new(MENU_BAR_ID))
        .pivot(Align2::CENTER_BOTTOM)
        .default_pos(ctx.screen_rect().center_bottom() - vec2(0.0, 20.0))
        .movable(true)
        .constrain(true)
        .interactable(visible)
        .show(ctx, |ui| {
            ui.set_opacity(opacity);
            egui::Frame::popup(ui.style())
                .rounding(20.0)
                .inner_margin(egui::Margin::symmetric(16.0, 8.0))
                .show(ui, |ui| {
                    ui.horizontal(|ui| menu_items(app, ui));
                });
        });

    egui::Area::new(egui::Id::new("txt_export"))
        .anchor(Align2::RIGHT_BOTTOM, vec2(-20.0, -20.0))
        .interactable(visible)
        .show(ctx, |ui| {
            ui.set_opacity(opacity);
            let response = ui
                .button(RichText::new("TXT").monospace().strong())
                .on_hover_text("Click to save to Desktop, right-click for a temporary copy");
            if response.clicked() {
                app.export_to_desktop();
            }
            response.context_menu(|ui| {
                if ui.button("Save temporary copy").clicked() {
                    app.export_temp_file();
                    ui.close_menu();
                }
            });
        });

    clear_board_dialog(app, ctx);
}

fn menu_items(app: &mut QuartzApp, ui: &mut egui::Ui) {
    let theme_icon = if app.settings.dark_mode { "☀" } else { "🌙" };
    if ui.button(RichText::new(theme_icon).size(ICON_SIZE)).on_hover_text("Toggle Theme").clicked() {
        app.settings.toggle_theme();
    }
    ui.separator();

    ui.menu_button(RichText::new("🗛").size(ICON_SIZE), |ui| {
        for size in FontSize::ALL {
            if ui.selectable_label(app.settings.font_size == size, size.label()).clicked() {
                app.settings.font_size = size;
                ui.close_menu();
            }
        }
    })
    .response
    .on_hover_text("Change Font Size");
    ui.separator();

    let split = app.settings.view_mode == ViewMode::Split;
    if ui.selectable_label(split, RichText::new("◫").size(ICON_SIZE)).on_hover_text("Toggle Split View").clicked() {
        app.settings.toggle_split();
    }
    ui.separator();

    let preview = app.settings.view_mode == ViewMode::Preview;
    if ui.selectable_label(preview, RichText::new("👁").size(ICON_SIZE)).on_hover_text("Toggle Markdown Preview").clicked() {
        app.settings.toggle_preview();
    }
    ui.separator();

    let stat_label = RichText::new(format!("{} ⏷", app.document.stat_text())).monospace().weak();
    ui.menu_button(stat_label, |ui| {
        let selected = app.document.selected_stat();
        for kind in StatKind::ALL {
            if ui.selectable_label(selected == kind, kind.label()).clicked() {
                app.document.select_stat(kind);
                ui.close_menu();
            }
        }
    });
    ui.separator();

    if ui.button(RichText::new("✏").size(ICON_SIZE)).on_hover_text("Open Canvas").clicked() {
        app.settings.show_canvas = true;
    }
    ui.separator();

    let clear = RichText::new("🗑").size(ICON_SIZE).color(Color32::from_rgb(220, 60, 60));
    if ui.button(clear).on_hover_text("Clear Board").clicked() {
        app.confirm_clear_board = true;
    }
}

fn clear_board_dialog(app: &mut QuartzApp, ctx: &egui::Context) {
    if !app.confirm_clear_board {
        return;
    }
    egui::Window::new("Clear Quartz?")
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            ui.label("This action cannot be undone.");
            ui.horizontal(|ui| {
                if ui.button(RichText::new("Clear All").color(Color32::RED)).clicked() {
                    app.document.clear_board(Instant::now());
                    app.confirm_clear_board = false;
                }
                if ui.button("Cancel").clicked() {
                    app.confirm_clear_board = false;
                }
            });
        });
}
