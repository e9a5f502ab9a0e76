use std::cell::RefCell;
use std::rc::Rc;

use egui::pos2;
use quartz::event::CanvasEvent;
use quartz::shape::{Rgba, ShapeKind};
use quartz::state::{CanvasState, DEFAULT_SHAPE_SIZE};

fn recorded_events(canvas: &CanvasState) -> Rc<RefCell<Vec<CanvasEvent>>> {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = events.clone();
    canvas.subscribe(move |event: &CanvasEvent| sink.borrow_mut().push(event.clone()));
    events
}

fn canvas_with_tool(tool: ShapeKind) -> CanvasState {
    let mut canvas = CanvasState::new();
    canvas.set_tool(tool);
    canvas
}

#[test]
fn test_drag_commits_shape_with_current_defaults() {
    let mut canvas = canvas_with_tool(ShapeKind::Rectangle);
    canvas.set_stroke_color(Rgba::BLUE);
    canvas.set_stroke_width(4.0);

    canvas.start_shape(pos2(10.0, 10.0));
    canvas.update_shape(pos2(40.0, 30.0));
    assert!(canvas.state().is_drawing());
    assert_eq!(canvas.current_shape().unwrap().end_point(), pos2(40.0, 30.0));

    canvas.end_shape(pos2(60.0, 70.0));
    assert!(canvas.state().is_idle());
    assert_eq!(canvas.shapes().len(), 1);

    let shape = &canvas.shapes()[0];
    assert_eq!(shape.kind(), ShapeKind::Rectangle);
    assert_eq!(shape.start_point(), pos2(10.0, 10.0));
    assert_eq!(shape.end_point(), pos2(60.0, 70.0));
    assert_eq!(shape.color(), Rgba::BLUE);
    assert_eq!(shape.stroke_width(), 4.0);
}

#[test]
fn test_click_sizes() {
    let click = pos2(100.0, 100.0);

    let mut line = canvas_with_tool(ShapeKind::Line);
    line.start_shape(click);
    line.end_shape(click);
    assert_eq!(line.shapes()[0].start_point(), click);
    assert_eq!(line.shapes()[0].end_point(), pos2(150.0, 150.0));

    for kind in [ShapeKind::Circle, ShapeKind::Square] {
        let mut canvas = canvas_with_tool(kind);
        canvas.start_shape(click);
        canvas.end_shape(pos2(102.0, 101.0));
        let rect = canvas.shapes()[0].rect();
        assert_eq!(rect.width(), DEFAULT_SHAPE_SIZE);
        assert_eq!(rect.height(), DEFAULT_SHAPE_SIZE);
        assert_eq!(rect.center(), pos2(102.0, 101.0));
    }

    let mut rect_canvas = canvas_with_tool(ShapeKind::Rectangle);
    rect_canvas.start_shape(click);
    rect_canvas.end_shape(click);
    let rect = rect_canvas.shapes()[0].rect();
    assert_eq!(rect.width(), 100.0);
    assert_eq!(rect.height(), 50.0);
    assert_eq!(rect.center(), click);
}

#[test]
fn test_drag_past_threshold_keeps_drawn_size() {
    let mut canvas = canvas_with_tool(ShapeKind::Circle);
    canvas.start_shape(pos2(0.0, 0.0));
    canvas.end_shape(pos2(6.0, 1.0));

    let rect = canvas.shapes()[0].rect();
    assert_eq!(rect.width(), 6.0);
    assert_eq!(rect.height(), 1.0);
}

#[test]
fn test_start_ignored_while_busy() {
    let mut canvas = canvas_with_tool(ShapeKind::Line);
    canvas.start_shape(pos2(0.0, 0.0));
    canvas.start_shape(pos2(50.0, 50.0));
    assert_eq!(canvas.current_shape().unwrap().start_point(), pos2(0.0, 0.0));
}

#[test]
fn test_end_without_start_is_ignored() {
    let mut canvas = CanvasState::new();
    let events = recorded_events(&canvas);

    canvas.update_shape(pos2(5.0, 5.0));
    canvas.end_shape(pos2(5.0, 5.0));

    assert!(canvas.shapes().is_empty());
    assert!(events.borrow().is_empty());
}

#[test]
fn test_tool_switch_mid_drag_finishes_started_shape() {
    let mut canvas = canvas_with_tool(ShapeKind::Square);
    canvas.start_shape(pos2(0.0, 0.0));
    canvas.set_tool(ShapeKind::Text);
    canvas.update_shape(pos2(30.0, 30.0));
    canvas.end_shape(pos2(40.0, 40.0));

    assert!(canvas.state().is_idle());
    assert_eq!(canvas.shapes().len(), 1);
    assert_eq!(canvas.shapes()[0].kind(), ShapeKind::Square);
    assert_eq!(canvas.shapes()[0].end_point(), pos2(40.0, 40.0));

    // The next tap uses the newly selected tool
    canvas.start_shape(pos2(10.0, 10.0));
    assert!(canvas.is_editing_text());
    assert_eq!(canvas.text_input_position(), Some(pos2(10.0, 10.0)));
}

#[test]
fn test_text_tool_opens_entry() {
    let mut canvas = canvas_with_tool(ShapeKind::Text);
    let events = recorded_events(&canvas);

    canvas.start_shape(pos2(20.0, 30.0));
    canvas.end_shape(pos2(20.0, 30.0));

    assert!(canvas.is_editing_text());
    assert!(canvas.current_shape().is_none());
    assert_eq!(canvas.text_input_position(), Some(pos2(20.0, 30.0)));
    assert_eq!(canvas.current_text(), Some(""));
    assert_eq!(*events.borrow(), vec![CanvasEvent::TextEntryOpened { position: pos2(20.0, 30.0) }]);
}

#[test]
fn test_add_text_commits_typed_text() {
    let mut canvas = canvas_with_tool(ShapeKind::Text);
    canvas.start_shape(pos2(20.0, 30.0));
    canvas.text_entry_mut().unwrap().push_str("Hello");
    canvas.add_text();

    assert!(!canvas.is_editing_text());
    assert_eq!(canvas.shapes().len(), 1);
    let shape = &canvas.shapes()[0];
    assert_eq!(shape.kind(), ShapeKind::Text);
    assert_eq!(shape.text_content(), Some("Hello"));
    assert_eq!(shape.start_point(), pos2(20.0, 30.0));
    assert_eq!(shape.end_point(), pos2(20.0, 30.0));
}

#[test]
fn test_empty_text_adds_nothing() {
    let mut canvas = canvas_with_tool(ShapeKind::Text);
    canvas.start_shape(pos2(1.0, 1.0));
    let events = recorded_events(&canvas);

    canvas.add_text();

    assert!(canvas.shapes().is_empty());
    assert!(!canvas.is_editing_text());
    assert_eq!(*events.borrow(), vec![CanvasEvent::TextEntryClosed]);
}

#[test]
fn test_cancel_text_discards_entry() {
    let mut canvas = canvas_with_tool(ShapeKind::Text);
    canvas.start_shape(pos2(1.0, 1.0));
    canvas.text_entry_mut().unwrap().push_str("draft");

    canvas.cancel_text();

    assert!(canvas.state().is_idle());
    assert!(canvas.shapes().is_empty());
}

#[test]
fn test_undo_and_clear_notify() {
    let mut canvas = canvas_with_tool(ShapeKind::Line);
    for x in [0.0, 100.0] {
        canvas.start_shape(pos2(x, 0.0));
        canvas.end_shape(pos2(x + 20.0, 20.0));
    }
    let events = recorded_events(&canvas);

    canvas.undo();
    assert_eq!(canvas.shapes().len(), 1);
    assert_eq!(canvas.shapes()[0].start_point(), pos2(0.0, 0.0));

    canvas.clear_canvas();
    assert!(canvas.shapes().is_empty());

    // Nothing left to undo
    canvas.undo();

    let events = events.borrow();
    assert_eq!(events.len(), 2);
    assert!(matches!(&events[0], CanvasEvent::ShapesChanged { shapes } if shapes.len() == 1));
    assert!(matches!(&events[1], CanvasEvent::ShapesChanged { shapes } if shapes.is_empty()));
}

#[test]
fn test_tool_change_event() {
    let mut canvas = CanvasState::new();
    let events = recorded_events(&canvas);

    canvas.set_tool(ShapeKind::Square);
    canvas.set_tool(ShapeKind::Square);

    assert_eq!(
        *events.borrow(),
        vec![CanvasEvent::ToolChanged { old: ShapeKind::Line, new: ShapeKind::Square }]
    );
}

#[test]
fn test_non_positive_width_rejected() {
    let mut canvas = CanvasState::new();
    canvas.set_stroke_width(0.0);
    canvas.set_stroke_width(-3.0);
    assert_eq!(canvas.stroke_width(), 2.0);
}
