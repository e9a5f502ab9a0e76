use egui::{Align2, Color32, Pos2, Rect, RichText, Sense, vec2};

use crate::QuartzApp;
use crate::components::{ColorSwatch, ToolButton};
use crate::renderer;
use crate::shape::{Rgba, ShapeKind};
use crate::state::STROKE_WIDTH_PRESETS;

/// Swatches offered in the toolbar. The first entry follows the theme so it
/// always contrasts with the canvas background.
pub fn palette(dark_mode: bool) -> [(Rgba, &'static str); 8] {
    let primary = if dark_mode { Rgba::WHITE } else { Rgba::BLACK };
    [
        (primary, "Primary"),
        (Rgba::RED, "Red"),
        (Rgba::ORANGE, "Orange"),
        (Rgba::YELLOW, "Yellow"),
        (Rgba::GREEN, "Green"),
        (Rgba::BLUE, "Blue"),
        (Rgba::PURPLE, "Purple"),
        (Rgba::PINK, "Pink"),
    ]
}

pub fn canvas_panel(app: &mut QuartzApp, ctx: &egui::Context) {
    top_bar(app, ctx);
    toolbar(app, ctx);

    let canvas_rect = egui::CentralPanel::default()
        .frame(egui::Frame::none().fill(ctx.style().visuals.extreme_bg_color))
        .show(ctx, |ui| canvas_area(app, ui))
        .inner;

    text_entry_window(app, ctx, canvas_rect);
    clear_canvas_dialog(app, ctx);
}

fn top_bar(app: &mut QuartzApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("canvas_top_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let has_shapes = !app.canvas.shapes().is_empty();
            if ui.add_enabled(has_shapes, egui::Button::new("↶")).on_hover_text("Undo").clicked() {
                app.canvas.undo();
            }
            if ui.add_enabled(has_shapes, egui::Button::new("🗑")).on_hover_text("Clear Canvas").clicked() {
                app.confirm_clear_canvas = true;
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("✖").on_hover_text("Close Canvas").clicked() {
                    app.settings.show_canvas = false;
                }
                ui.centered_and_justified(|ui| {
                    ui.label(RichText::new("Canvas").strong());
                });
            });
        });
    });
}

fn toolbar(app: &mut QuartzApp, ctx: &egui::Context) {
    egui::TopBottomPanel::bottom("canvas_toolbar").show(ctx, |ui| {
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            let selected_tool = app.canvas.selected_tool();
            for tool in ShapeKind::ALL {
                if ToolButton::new(tool, tool == selected_tool).show(ui).clicked() {
                    app.canvas.set_tool(tool);
                }
            }
            ui.separator();

            let selected_color = app.canvas.stroke_color();
            for (color, name) in palette(app.settings.dark_mode) {
                let response = ColorSwatch::new(color, color == selected_color).show(ui).on_hover_text(name);
                if response.clicked() {
                    app.canvas.set_stroke_color(color);
                }
            }
            ui.separator();

            let width = app.canvas.stroke_width();
            ui.menu_button(format!("{width}pt"), |ui| {
                for (preset, label) in STROKE_WIDTH_PRESETS {
                    if ui.selectable_label(width == preset, label).clicked() {
                        app.canvas.set_stroke_width(preset);
                        ui.close_menu();
                    }
                }
            })
            .response
            .on_hover_text("Stroke Width");
        });
        ui.add_space(4.0);
    });
}

/// Drawing surface. Shapes are stored relative to the top-left corner so
/// they stay put when the window is resized.
fn canvas_area(app: &mut QuartzApp, ui: &mut egui::Ui) -> Rect {
    let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::click_and_drag());
    let origin = response.rect.min;
    let to_canvas = |pos: Pos2| Pos2::ZERO + (pos - origin);

    if response.drag_started() {
        if let Some(pos) = ui.input(|i| i.pointer.press_origin()) {
            app.canvas.start_shape(to_canvas(pos));
        }
    }
    if response.dragged() {
        if let Some(pos) = response.interact_pointer_pos() {
            app.canvas.update_shape(to_canvas(pos));
        }
    }
    if response.drag_stopped() {
        let release = ui
            .input(|i| i.pointer.latest_pos())
            .map(to_canvas)
            .or_else(|| app.canvas.current_shape().map(|shape| shape.end_point()));
        if let Some(pos) = release {
            app.canvas.end_shape(pos);
        }
    }
    if response.clicked() {
        if let Some(pos) = response.interact_pointer_pos() {
            let pos = to_canvas(pos);
            app.canvas.start_shape(pos);
            app.canvas.end_shape(pos);
        }
    }

    let instructions = renderer::project_canvas(app.canvas.shapes(), app.canvas.current_shape());
    renderer::paint(&painter, origin, &instructions);

    if app.canvas.shapes().is_empty() && app.canvas.state().is_idle() {
        painter.text(
            response.rect.center(),
            Align2::CENTER_CENTER,
            "Drag to draw, click for a default shape",
            egui::FontId::proportional(14.0),
            ui.visuals().weak_text_color(),
        );
    }

    response.rect
}

fn text_entry_window(app: &mut QuartzApp, ctx: &egui::Context, canvas_rect: Rect) {
    let Some(position) = app.canvas.text_input_position() else {
        return;
    };

    let mut submit = false;
    let mut cancel = false;
    egui::Window::new("Add Text")
        .collapsible(false)
        .resizable(false)
        .title_bar(false)
        .fixed_pos(canvas_rect.min + position.to_vec2() + vec2(0.0, -8.0))
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                if let Some(text) = app.canvas.text_entry_mut() {
                    let edit = ui.add(
                        egui::TextEdit::singleline(text)
                            .hint_text("Type here...")
                            .desired_width(180.0),
                    );
                    edit.request_focus();
                    if edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                        submit = true;
                    }
                }
                if ui.button("Add").clicked() {
                    submit = true;
                }
                if ui.button("Cancel").clicked() || ui.input(|i| i.key_pressed(egui::Key::Escape)) {
                    cancel = true;
                }
            });
        });

    if submit {
        app.canvas.add_text();
    } else if cancel {
        app.canvas.cancel_text();
    }
}

fn clear_canvas_dialog(app: &mut QuartzApp, ctx: &egui::Context) {
    if !app.confirm_clear_canvas {
        return;
    }
    egui::Window::new("Clear Canvas?")
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            ui.label("Every shape will be removed.");
            ui.horizontal(|ui| {
                if ui.button(RichText::new("Clear").color(Color32::RED)).clicked() {
                    app.canvas.clear_canvas();
                    app.confirm_clear_canvas = false;
                }
                if ui.button("Cancel").clicked() {
                    app.confirm_clear_canvas = false;
                }
            });
        });
}
