use std::sync::Arc;
use std::time::{Duration, Instant};

use egui::pos2;
use quartz::persistence::{PreferenceStore, SHAPES_KEY, TEXT_KEY, load_snapshot};
use quartz::shape::{Rgba, Shape, ShapeKind};
use quartz::{Config, FilePreferences, MemoryPreferences, QuartzApp, UiSettings};

fn app_with(store: &Arc<MemoryPreferences>) -> QuartzApp {
    QuartzApp::with_store(UiSettings::default(), store.clone(), &Config::default(), Instant::now())
}

/// Far enough ahead that every quiet period has elapsed
fn settled() -> Instant {
    Instant::now() + Duration::from_secs(300)
}

fn draw(app: &mut QuartzApp, kind: ShapeKind, from: egui::Pos2, to: egui::Pos2) {
    let canvas = app.canvas_mut();
    canvas.set_tool(kind);
    canvas.start_shape(from);
    canvas.update_shape(to);
    canvas.end_shape(to);
}

#[test]
fn test_every_shape_kind_survives_restart() {
    let store = Arc::new(MemoryPreferences::new());
    let mut app = app_with(&store);

    draw(&mut app, ShapeKind::Line, pos2(0.0, 0.0), pos2(30.0, 40.0));
    draw(&mut app, ShapeKind::Circle, pos2(10.0, 10.0), pos2(60.0, 60.0));
    draw(&mut app, ShapeKind::Square, pos2(5.0, 5.0), pos2(25.0, 45.0));
    app.canvas_mut().set_stroke_color(Rgba::PURPLE);
    draw(&mut app, ShapeKind::Rectangle, pos2(100.0, 100.0), pos2(20.0, 70.0));
    app.canvas_mut().set_tool(ShapeKind::Text);
    app.canvas_mut().start_shape(pos2(7.0, 8.0));
    app.canvas_mut().text_entry_mut().unwrap().push_str("label");
    app.canvas_mut().add_text();
    app.tick(settled());

    let restored = app_with(&store);
    assert_eq!(restored.canvas().shapes(), app.canvas().shapes());
    assert_eq!(restored.canvas().shapes().len(), 5);
    assert_eq!(restored.canvas().shapes()[4].text_content(), Some("label"));
    assert_eq!(restored.canvas().shapes()[3].color(), Rgba::PURPLE);
    assert!(restored.canvas().state().is_idle());
}

#[test]
fn test_text_survives_restart() {
    let store = Arc::new(MemoryPreferences::new());
    let mut app = app_with(&store);

    app.document_mut().set_text("# Notes\nremember".to_owned(), Instant::now());
    app.tick(settled());

    let restored = app_with(&store);
    assert_eq!(restored.document().text(), "# Notes\nremember");
    assert_eq!(restored.document().stat_text(), "3 words");
}

#[test]
fn test_rapid_typing_coalesces_writes() {
    let store = Arc::new(MemoryPreferences::new());
    let config = Config {
        autosave_delay: Duration::from_secs(60),
        ..Config::default()
    };
    let mut app = QuartzApp::with_store(UiSettings::default(), store.clone(), &config, Instant::now());

    let mut text = String::new();
    for c in "hello world".chars() {
        text.push(c);
        app.document_mut().set_text(text.clone(), Instant::now());
        app.tick(Instant::now());
    }
    assert_eq!(store.write_count(), 0);

    app.tick(settled());
    assert_eq!(store.write_count(), 1);
    assert_eq!(store.get_string(TEXT_KEY).as_deref(), Some("hello world"));

    // Same text again is not rewritten
    app.document_mut().set_text("hello".to_owned(), Instant::now());
    app.document_mut().set_text("hello world".to_owned(), Instant::now());
    app.tick(settled());
    assert_eq!(store.write_count(), 1);
}

#[test]
fn test_text_autosave_follows_caller_clock() {
    let store = Arc::new(MemoryPreferences::new());
    let mut app = app_with(&store);
    let delay = Config::default().autosave_delay;
    // Well ahead of wall time, so a wall-clock deadline would already be due
    let edited = Instant::now() + Duration::from_secs(3600);

    app.document_mut().set_text("later".to_owned(), edited);
    app.tick(edited + delay - Duration::from_millis(1));
    assert_eq!(store.write_count(), 0);

    app.tick(edited + delay);
    assert_eq!(store.write_count(), 1);
    assert_eq!(store.get_string(TEXT_KEY).as_deref(), Some("later"));
}

#[test]
fn test_flush_writes_pending_snapshots() {
    let store = Arc::new(MemoryPreferences::new());
    let mut app = app_with(&store);

    app.document_mut().set_text("draft".to_owned(), Instant::now());
    draw(&mut app, ShapeKind::Line, pos2(0.0, 0.0), pos2(10.0, 10.0));
    app.flush_autosave();

    assert_eq!(store.get_string(TEXT_KEY).as_deref(), Some("draft"));
    let shapes: Vec<Shape> = load_snapshot(&*store, SHAPES_KEY).unwrap();
    assert_eq!(shapes.len(), 1);
}

#[test]
fn test_corrupt_shapes_start_empty() {
    let store = Arc::new(MemoryPreferences::new());
    store.set_string(SHAPES_KEY, "{not json").unwrap();
    store.set_string(TEXT_KEY, "kept").unwrap();

    let app = app_with(&store);
    assert!(app.canvas().shapes().is_empty());
    assert_eq!(app.document().text(), "kept");
}

#[test]
fn test_invalid_shape_rejects_snapshot() {
    let store = Arc::new(MemoryPreferences::new());
    let json = r#"[{
        "id": "6f1c1d2e-8f55-4a51-9a4f-0c1f2a3b4c5d",
        "type": "Square",
        "startPoint": {"x": 0.0, "y": 0.0},
        "endPoint": {"x": 10.0, "y": 10.0},
        "color": {"r": 0.0, "g": 0.0, "b": 0.0, "a": 1.0},
        "strokeWidth": 0.0
    }]"#;
    store.set_string(SHAPES_KEY, json).unwrap();

    assert!(load_snapshot::<Vec<Shape>>(&*store, SHAPES_KEY).is_none());
    assert!(app_with(&store).canvas().shapes().is_empty());
}

#[test]
fn test_unknown_fields_are_ignored() {
    let store = Arc::new(MemoryPreferences::new());
    let json = r#"[{
        "id": "6f1c1d2e-8f55-4a51-9a4f-0c1f2a3b4c5d",
        "type": "Text",
        "startPoint": {"x": 3.0, "y": 4.0},
        "endPoint": {"x": 3.0, "y": 4.0},
        "color": {"r": 1.0, "g": 0.0, "b": 0.0, "a": 1.0},
        "strokeWidth": 2.0,
        "text": "hi",
        "fontName": "Helvetica"
    }]"#;
    store.set_string(SHAPES_KEY, json).unwrap();

    let shapes: Vec<Shape> = load_snapshot(&*store, SHAPES_KEY).unwrap();
    assert_eq!(shapes[0].kind(), ShapeKind::Text);
    assert_eq!(shapes[0].text_content(), Some("hi"));
}

#[test]
fn test_file_store_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    {
        let prefs = FilePreferences::open(dir.path()).unwrap();
        prefs.set_string(TEXT_KEY, "on disk").unwrap();
    }

    let reopened = FilePreferences::open(dir.path()).unwrap();
    assert_eq!(reopened.get_string(TEXT_KEY).as_deref(), Some("on disk"));
}
