use egui::text::LayoutJob;
use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Stroke, TextFormat, Vec2};

use crate::markdown::{Block, inline_spans, parse_blocks};
use crate::shape::{Shape, ShapeKind};

/// Point size of text shapes on the canvas
pub const CANVAS_TEXT_SIZE: f32 = 16.0;

/// One axis-aligned drawing command derived from a shape
#[derive(Debug, Clone, PartialEq)]
pub enum DrawInstruction {
    Segment {
        from: Pos2,
        to: Pos2,
        stroke: Stroke,
    },
    Circle {
        center: Pos2,
        radius: f32,
        stroke: Stroke,
    },
    Rect {
        rect: Rect,
        stroke: Stroke,
    },
    Text {
        anchor: Pos2,
        text: String,
        color: Color32,
        size: f32,
    },
}

/// Map a shape to its drawing instruction.
///
/// Text shapes without a payload draw nothing.
pub fn project(shape: &Shape) -> Option<DrawInstruction> {
    let color = shape.color().to_color32();
    let stroke = Stroke::new(shape.stroke_width(), color);

    let instruction = match shape.kind() {
        ShapeKind::Line => DrawInstruction::Segment {
            from: shape.start_point(),
            to: shape.end_point(),
            stroke,
        },
        ShapeKind::Circle => {
            let rect = shape.rect();
            DrawInstruction::Circle {
                center: rect.center(),
                radius: rect.width().min(rect.height()) / 2.0,
                stroke,
            }
        }
        ShapeKind::Square => DrawInstruction::Rect {
            rect: shape.square_rect(),
            stroke,
        },
        ShapeKind::Rectangle => DrawInstruction::Rect {
            rect: shape.rect(),
            stroke,
        },
        ShapeKind::Text => DrawInstruction::Text {
            anchor: shape.start_point(),
            text: shape.text_content()?.to_owned(),
            color,
            size: CANVAS_TEXT_SIZE,
        },
    };
    Some(instruction)
}

/// Instructions for a whole canvas in paint order: committed shapes in
/// insertion order, then the in-progress shape on top.
pub fn project_canvas(shapes: &[Shape], current: Option<&Shape>) -> Vec<DrawInstruction> {
    shapes.iter().chain(current).filter_map(project).collect()
}

/// Paint instructions whose coordinates are relative to `origin`
pub fn paint(painter: &Painter, origin: Pos2, instructions: &[DrawInstruction]) {
    let offset = origin.to_vec2();
    for instruction in instructions {
        match instruction {
            DrawInstruction::Segment { from, to, stroke } => {
                painter.line_segment([*from + offset, *to + offset], *stroke);
            }
            DrawInstruction::Circle { center, radius, stroke } => {
                painter.circle_stroke(*center + offset, *radius, *stroke);
            }
            DrawInstruction::Rect { rect, stroke } => {
                painter.rect_stroke(rect.translate(offset), 0.0, *stroke);
            }
            DrawInstruction::Text { anchor, text, color, size } => {
                painter.text(*anchor + offset, Align2::LEFT_TOP, text, FontId::proportional(*size), *color);
            }
        }
    }
}

/// Render document text as preview blocks, one line at a time
pub fn show_markdown(ui: &mut egui::Ui, text: &str, font_size: f32) {
    let body_color = ui.visuals().text_color();
    let muted_color = ui.visuals().weak_text_color();

    ui.spacing_mut().item_spacing.y = 8.0;
    for block in parse_blocks(text) {
        match block {
            Block::Heading { level, text } => {
                ui.add_space(font_size * 0.4);
                ui.label(inline_job(ui, text, font_size * level.scale(), body_color, false));
            }
            Block::Blockquote(text) => {
                ui.horizontal_wrapped(|ui| {
                    let (bar, _) = ui.allocate_exact_size(Vec2::new(4.0, font_size * 1.2), egui::Sense::hover());
                    ui.painter().rect_filled(bar, 0.0, Color32::GRAY);
                    ui.label(inline_job(ui, text, font_size, muted_color, true));
                });
            }
            Block::Bullet(text) => {
                ui.horizontal_wrapped(|ui| {
                    ui.label(egui::RichText::new("•").size(font_size).strong());
                    ui.label(inline_job(ui, text, font_size, body_color, false));
                });
            }
            Block::Rule => {
                ui.separator();
            }
            Block::Spacer => {
                ui.add_space(font_size / 2.0);
            }
            Block::Paragraph(text) => {
                ui.label(inline_job(ui, text, font_size, body_color, false));
            }
        }
    }
}

fn inline_job(ui: &egui::Ui, text: &str, size: f32, color: Color32, italic: bool) -> LayoutJob {
    let strong_color = ui.visuals().strong_text_color();
    let code_background = ui.visuals().code_bg_color;

    let mut job = LayoutJob::default();
    for span in inline_spans(text) {
        let format = TextFormat {
            font_id: if span.code { FontId::monospace(size) } else { FontId::proportional(size) },
            color: if span.bold { strong_color } else { color },
            italics: italic || span.italic,
            background: if span.code { code_background } else { Color32::TRANSPARENT },
            ..Default::default()
        };
        job.append(&span.text, 0.0, format);
    }
    job
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::Rgba;
    use egui::pos2;

    fn shape(kind: ShapeKind, from: Pos2, to: Pos2) -> Shape {
        let mut shape = Shape::drawn(kind, from, Rgba::BLUE, 3.0).unwrap();
        shape.set_end_point(to);
        shape
    }

    #[test]
    fn test_circle_is_inscribed_in_smaller_side() {
        let circle = shape(ShapeKind::Circle, pos2(0.0, 0.0), pos2(100.0, 40.0));
        match project(&circle) {
            Some(DrawInstruction::Circle { center, radius, stroke }) => {
                assert_eq!(center, pos2(50.0, 20.0));
                assert_eq!(radius, 20.0);
                assert_eq!(stroke.width, 3.0);
            }
            other => panic!("unexpected projection {other:?}"),
        }
    }

    #[test]
    fn test_square_and_rectangle_rects() {
        let square = shape(ShapeKind::Square, pos2(10.0, 10.0), pos2(0.0, 40.0));
        assert!(matches!(
            project(&square),
            Some(DrawInstruction::Rect { rect, .. }) if rect == Rect::from_min_size(pos2(0.0, 10.0), Vec2::splat(10.0))
        ));

        let rectangle = shape(ShapeKind::Rectangle, pos2(10.0, 10.0), pos2(0.0, 40.0));
        assert!(matches!(
            project(&rectangle),
            Some(DrawInstruction::Rect { rect, .. }) if rect == Rect::from_min_max(pos2(0.0, 10.0), pos2(10.0, 40.0))
        ));
    }

    #[test]
    fn test_text_anchored_at_start_point() {
        let text = Shape::text(pos2(7.0, 9.0), "note", Rgba::BLACK, 2.0).unwrap();
        assert_eq!(
            project(&text),
            Some(DrawInstruction::Text {
                anchor: pos2(7.0, 9.0),
                text: "note".to_owned(),
                color: Color32::BLACK,
                size: CANVAS_TEXT_SIZE,
            })
        );
    }

    #[test]
    fn test_canvas_paints_current_shape_last() {
        let first = shape(ShapeKind::Line, pos2(0.0, 0.0), pos2(1.0, 1.0));
        let second = shape(ShapeKind::Rectangle, pos2(0.0, 0.0), pos2(9.0, 9.0));
        let live = shape(ShapeKind::Line, pos2(5.0, 5.0), pos2(6.0, 6.0));

        let instructions = project_canvas(&[first, second], Some(&live));
        assert_eq!(instructions.len(), 3);
        assert!(matches!(instructions[1], DrawInstruction::Rect { .. }));
        assert!(matches!(
            instructions[2],
            DrawInstruction::Segment { from, .. } if from == pos2(5.0, 5.0)
        ));
    }

    #[test]
    fn test_paint_basics() {
        let ctx = egui::Context::default();
        let rect = Rect::from_min_size(pos2(0.0, 0.0), Vec2::splat(100.0));
        let painter = Painter::new(ctx, egui::LayerId::background(), rect);
        let line = shape(ShapeKind::Line, pos2(0.0, 0.0), pos2(10.0, 10.0));

        paint(&painter, pos2(20.0, 20.0), &project_canvas(&[line], None));
    }
}
