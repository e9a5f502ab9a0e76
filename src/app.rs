use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::controls::ControlsVisibility;
use crate::event::{CanvasEvent, DocumentEvent};
use crate::export;
use crate::panels;
use crate::persistence::{
    AutosaveChannel, FilePreferences, MemoryPreferences, PreferenceStore, SHAPES_KEY, TEXT_KEY,
};
use crate::settings::UiSettings;
use crate::shape::Shape;
use crate::state::{CanvasState, DocumentState};

/// The note editor with its drawing canvas overlay.
///
/// Document text and canvas shapes are snapshotted into the preference store
/// through debounced autosave channels; presentation settings go through
/// eframe's own persistence.
pub struct QuartzApp {
    pub(crate) settings: UiSettings,
    pub(crate) document: DocumentState,
    pub(crate) canvas: CanvasState,
    pub(crate) controls: Rc<RefCell<ControlsVisibility>>,
    pub(crate) confirm_clear_board: bool,
    pub(crate) confirm_clear_canvas: bool,
    text_autosave: Rc<RefCell<AutosaveChannel<String>>>,
    shapes_autosave: Rc<RefCell<AutosaveChannel<Vec<Shape>>>>,
}

impl QuartzApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: Config) -> Self {
        let settings = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();

        Self::with_store(settings, open_store(&config), &config, Instant::now())
    }

    /// Build the app around an injected preference store, restoring the last
    /// snapshots it holds.
    pub fn with_store(settings: UiSettings, store: Arc<dyn PreferenceStore>, config: &Config, now: Instant) -> Self {
        let mut text_autosave = AutosaveChannel::new(store.clone(), TEXT_KEY, config.autosave_delay);
        let mut shapes_autosave = AutosaveChannel::new(store, SHAPES_KEY, config.autosave_delay);

        let mut document = DocumentState::new(config.stats_delay);
        if let Some(text) = text_autosave.load() {
            document.restore(text);
        }
        let mut canvas = CanvasState::new();
        if let Some(shapes) = shapes_autosave.load() {
            canvas.restore(shapes);
        }

        let text_autosave = Rc::new(RefCell::new(text_autosave));
        let shapes_autosave = Rc::new(RefCell::new(shapes_autosave));
        let controls = Rc::new(RefCell::new(ControlsVisibility::new(
            now,
            config.inactivity_timeout,
            config.pointer_throttle,
        )));

        {
            let text_autosave = text_autosave.clone();
            let controls = controls.clone();
            document.subscribe(move |event: &DocumentEvent| {
                if let DocumentEvent::TextChanged { text, at } = event {
                    text_autosave.borrow_mut().schedule(text.clone(), *at);
                    controls.borrow_mut().on_typing(*at);
                }
            });
        }
        {
            let shapes_autosave = shapes_autosave.clone();
            // Canvas edits come straight from pointer events, which carry no
            // clock of their own, so the quiet period starts at wall time.
            canvas.subscribe(move |event: &CanvasEvent| {
                if let CanvasEvent::ShapesChanged { shapes } = event {
                    shapes_autosave.borrow_mut().schedule(shapes.clone(), Instant::now());
                }
            });
        }

        Self {
            settings,
            document,
            canvas,
            controls,
            confirm_clear_board: false,
            confirm_clear_canvas: false,
            text_autosave,
            shapes_autosave,
        }
    }

    pub fn settings(&self) -> &UiSettings {
        &self.settings
    }

    pub fn document(&self) -> &DocumentState {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut DocumentState {
        &mut self.document
    }

    pub fn canvas(&self) -> &CanvasState {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut CanvasState {
        &mut self.canvas
    }

    /// Write snapshots whose quiet period elapsed. Failures are logged.
    pub fn poll_autosave(&mut self, now: Instant) {
        if let Err(err) = self.text_autosave.borrow_mut().poll(now) {
            log::error!("Failed to save document text: {err}");
        }
        if let Err(err) = self.shapes_autosave.borrow_mut().poll(now) {
            log::error!("Failed to save canvas shapes: {err}");
        }
    }

    /// Write every pending snapshot immediately
    pub fn flush_autosave(&mut self) {
        if let Err(err) = self.text_autosave.borrow_mut().flush() {
            log::error!("Failed to save document text: {err}");
        }
        if let Err(err) = self.shapes_autosave.borrow_mut().flush() {
            log::error!("Failed to save canvas shapes: {err}");
        }
    }

    /// Advance every timer-driven piece of state to `now`
    pub fn tick(&mut self, now: Instant) {
        self.document.tick(now);
        self.controls.borrow_mut().tick(now);
        self.poll_autosave(now);
    }

    /// Earliest moment a timer needs another frame
    pub fn next_wakeup(&self, now: Instant) -> Option<Duration> {
        [
            self.text_autosave.borrow().time_until_due(now),
            self.shapes_autosave.borrow().time_until_due(now),
            self.document.time_until_stats_due(now),
            self.controls.borrow().time_until_hide(now),
        ]
        .into_iter()
        .flatten()
        .min()
    }

    pub fn export_to_desktop(&self) {
        if let Err(err) = export::export_to_desktop(self.document.text(), &chrono::Local::now()) {
            log::error!("Error exporting to Desktop: {err}");
        }
    }

    pub fn export_temp_file(&self) {
        if let Err(err) = export::create_temp_file(self.document.text(), &chrono::Local::now()) {
            log::error!("Error creating temp file: {err}");
        }
    }
}

/// Open the file-backed store, falling back to memory so the app stays usable
fn open_store(config: &Config) -> Arc<dyn PreferenceStore> {
    let dir = match &config.data_dir {
        Some(dir) => Ok(dir.clone()),
        None => FilePreferences::default_dir(),
    };
    match dir.and_then(|dir| FilePreferences::open(&dir)) {
        Ok(store) => Arc::new(store),
        Err(err) => {
            log::error!("Preferences unavailable, changes will not be kept: {err}");
            Arc::new(MemoryPreferences::new())
        }
    }
}

impl eframe::App for QuartzApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.settings);
        self.flush_autosave();
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        ctx.set_visuals(if self.settings.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });

        if ctx.input(|i| i.pointer.delta() != egui::Vec2::ZERO) {
            self.controls.borrow_mut().on_pointer_moved(now);
        }

        if self.settings.show_canvas {
            panels::canvas_panel(self, ctx);
        } else {
            panels::editor_panel(self, ctx);
            panels::menu_bar(self, ctx);
        }

        self.tick(now);
        if let Some(wakeup) = self.next_wakeup(now) {
            ctx.request_repaint_after(wakeup);
        }
    }
}
