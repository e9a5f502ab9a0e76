use std::time::{Duration, Instant};

use crate::debounce::Debouncer;
use crate::event::{DocumentEvent, EventBus, EventHandler};
use crate::stats::{StatKind, format_stat};

/// Default quiet period before the cached statistic is refreshed
pub const DEFAULT_STATS_DELAY: Duration = Duration::from_millis(300);

/// The note being edited plus its cached statistic
#[derive(Debug)]
pub struct DocumentState {
    text: String,
    selected_stat: StatKind,
    stat_text: String,
    stats_refresh: Debouncer<()>,
    event_bus: EventBus<DocumentEvent>,
}

impl Default for DocumentState {
    fn default() -> Self {
        Self::new(DEFAULT_STATS_DELAY)
    }
}

impl DocumentState {
    pub fn new(stats_delay: Duration) -> Self {
        let selected_stat = StatKind::default();
        Self {
            text: String::new(),
            selected_stat,
            stat_text: format_stat(selected_stat, ""),
            stats_refresh: Debouncer::new(stats_delay),
            event_bus: EventBus::new(),
        }
    }

    /// Apply restored text without notifying subscribers
    pub fn restore(&mut self, text: String) {
        log::info!("Restored document ({} bytes)", text.len());
        self.text = text;
        self.refresh_stats();
    }

    pub fn subscribe(&self, handler: impl EventHandler<DocumentEvent> + 'static) {
        self.event_bus.subscribe(handler);
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn selected_stat(&self) -> StatKind {
        self.selected_stat
    }

    /// The cached statistic, refreshed after typing settles
    pub fn stat_text(&self) -> &str {
        &self.stat_text
    }

    /// Replace the document text and arm the stats refresh
    pub fn set_text(&mut self, text: String, now: Instant) {
        if text == self.text {
            return;
        }
        self.text = text;
        self.stats_refresh.schedule((), now);
        self.event_bus.emit(DocumentEvent::TextChanged {
            text: self.text.clone(),
            at: now,
        });
    }

    pub fn clear_board(&mut self, now: Instant) {
        self.set_text(String::new(), now);
    }

    /// Switch statistic; recomputes immediately
    pub fn select_stat(&mut self, kind: StatKind) {
        self.selected_stat = kind;
        self.refresh_stats();
        self.event_bus.emit(DocumentEvent::StatSelected { kind });
    }

    /// Recompute the cached statistic if typing has settled.
    ///
    /// Returns true when the cache was refreshed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.stats_refresh.poll(now).is_some() {
            self.stat_text = format_stat(self.selected_stat, &self.text);
            true
        } else {
            false
        }
    }

    pub fn time_until_stats_due(&self, now: Instant) -> Option<Duration> {
        self.stats_refresh.time_until_due(now)
    }

    fn refresh_stats(&mut self) {
        self.stats_refresh.cancel();
        self.stat_text = format_stat(self.selected_stat, &self.text);
    }
}
