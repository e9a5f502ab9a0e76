//! Inactivity-based fading of the floating controls.

use std::time::{Duration, Instant};

/// Controls hide after this long without pointer activity
pub const DEFAULT_INACTIVITY_TIMEOUT: Duration = Duration::from_secs(5);

/// Pointer movement is only considered this often
pub const DEFAULT_POINTER_THROTTLE: Duration = Duration::from_millis(100);

/// Tracks whether the floating controls should be shown.
///
/// Typing hides them at once, pointer movement brings them back, and they fade
/// out on their own after a period without activity.
#[derive(Debug, Clone)]
pub struct ControlsVisibility {
    visible: bool,
    hide_at: Option<Instant>,
    last_pointer_event: Option<Instant>,
    timeout: Duration,
    throttle: Duration,
}

impl ControlsVisibility {
    pub fn new(now: Instant, timeout: Duration, throttle: Duration) -> Self {
        Self {
            visible: true,
            hide_at: Some(now + timeout),
            last_pointer_event: None,
            timeout,
            throttle,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Pointer moved anywhere in the window
    pub fn on_pointer_moved(&mut self, now: Instant) {
        let throttled = self
            .last_pointer_event
            .is_some_and(|last| now.saturating_duration_since(last) <= self.throttle);
        if throttled {
            return;
        }
        self.last_pointer_event = Some(now);
        self.visible = true;
        self.hide_at = Some(now + self.timeout);
    }

    /// The document text changed
    pub fn on_typing(&mut self, now: Instant) {
        self.visible = false;
        self.hide_at = Some(now + self.timeout);
    }

    /// Apply the inactivity timeout
    pub fn tick(&mut self, now: Instant) {
        if self.hide_at.is_some_and(|deadline| now >= deadline) {
            self.visible = false;
            self.hide_at = None;
        }
    }

    pub fn time_until_hide(&self, now: Instant) -> Option<Duration> {
        self.hide_at.map(|deadline| deadline.saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controls(now: Instant) -> ControlsVisibility {
        ControlsVisibility::new(now, DEFAULT_INACTIVITY_TIMEOUT, DEFAULT_POINTER_THROTTLE)
    }

    #[test]
    fn test_hides_after_inactivity() {
        let start = Instant::now();
        let mut controls = controls(start);

        controls.tick(start + Duration::from_secs(4));
        assert!(controls.is_visible());
        controls.tick(start + DEFAULT_INACTIVITY_TIMEOUT);
        assert!(!controls.is_visible());
    }

    #[test]
    fn test_typing_hides_and_pointer_reveals() {
        let start = Instant::now();
        let mut controls = controls(start);

        controls.on_typing(start);
        assert!(!controls.is_visible());

        controls.on_pointer_moved(start + Duration::from_millis(10));
        assert!(controls.is_visible());
    }

    #[test]
    fn test_pointer_events_are_throttled() {
        let start = Instant::now();
        let mut controls = controls(start);

        controls.on_pointer_moved(start);
        controls.on_typing(start + Duration::from_millis(20));
        controls.on_pointer_moved(start + Duration::from_millis(50));
        assert!(!controls.is_visible());

        controls.on_pointer_moved(start + Duration::from_millis(150));
        assert!(controls.is_visible());
    }

    #[test]
    fn test_pointer_rearms_timeout() {
        let start = Instant::now();
        let mut controls = controls(start);

        controls.on_pointer_moved(start + Duration::from_secs(4));
        controls.tick(start + Duration::from_secs(6));
        assert!(controls.is_visible());
        controls.tick(start + Duration::from_secs(9));
        assert!(!controls.is_visible());
    }
}
