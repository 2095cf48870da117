//! Audit trail of palette mutations.
//!
//! Every state change made through a palette is recorded as an [`Event`] in
//! an [`EventLog`]. The log is a cheap-to-clone handle onto shared storage:
//! palettes hold a handle and append to it as they mutate. A process-wide
//! instance is available through [`EventLog::shared`]; tests inject a fresh
//! log per case instead.

use std::fmt;
use std::sync::{Arc, LazyLock, Mutex, MutexGuard};

use chrono::{DateTime, Utc};

/// Description recorded when the log itself is cleared.
const CLEAR_NOTICE: &str = "Event log cleared.";

/// A single logged palette event.
///
/// Events are immutable and only ever created by an [`EventLog`].
#[derive(Debug, Clone)]
pub struct Event {
    description: String,
    timestamp: DateTime<Utc>,
}

impl Event {
    fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            timestamp: Utc::now(),
        }
    }

    /// Human-readable description of what happened.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// When the event was logged.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.description
        )
    }
}

/// Append-only log of palette events.
///
/// Cloning an `EventLog` clones the handle, not the storage: all clones
/// append to and read from the same underlying list. Appends, clears, and
/// reads are serialized by a mutex, so the insertion-order guarantee holds
/// even when handles are used from multiple threads.
#[derive(Debug, Clone)]
pub struct EventLog {
    events: Arc<Mutex<Vec<Event>>>,
}

static SHARED: LazyLock<EventLog> = LazyLock::new(EventLog::new);

impl EventLog {
    /// Create a new, empty log.
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Handle to the process-wide log.
    ///
    /// The instance is created lazily on first access and lives for the
    /// rest of the process.
    pub fn shared() -> Self {
        SHARED.clone()
    }

    /// Record an event with the current time.
    pub fn log_event(&self, description: impl Into<String>) {
        self.lock().push(Event::new(description));
    }

    /// Empty the log, then record a single event noting the clear.
    ///
    /// Immediately after this call the log contains exactly one entry.
    pub fn clear(&self) {
        let mut events = self.lock();
        events.clear();
        events.push(Event::new(CLEAR_NOTICE));
    }

    /// Snapshot of all events, oldest first.
    pub fn events(&self) -> Vec<Event> {
        self.lock().clone()
    }

    /// Number of logged events.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Check if the log has no events.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Event>> {
        // A panic while holding the lock cannot corrupt a Vec of events;
        // recover the guard rather than poisoning every later caller.
        self.events.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptions(log: &EventLog) -> Vec<String> {
        log.events()
            .iter()
            .map(|e| e.description().to_string())
            .collect()
    }

    #[test]
    fn test_log_event_appends_in_order() {
        let log = EventLog::new();
        log.log_event("first");
        log.log_event("second");

        assert_eq!(descriptions(&log), vec!["first", "second"]);
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_new_log_is_empty() {
        let log = EventLog::new();
        assert!(log.is_empty());
        assert!(log.events().is_empty());
    }

    #[test]
    fn test_clear_leaves_single_notice() {
        let log = EventLog::new();
        log.log_event("first");
        log.log_event("second");
        log.clear();

        assert_eq!(descriptions(&log), vec!["Event log cleared."]);
    }

    #[test]
    fn test_clear_empty_log_still_logs_notice() {
        let log = EventLog::new();
        log.clear();

        assert_eq!(log.len(), 1);
        assert_eq!(log.events()[0].description(), "Event log cleared.");
    }

    #[test]
    fn test_events_returns_snapshot() {
        let log = EventLog::new();
        log.log_event("first");

        let snapshot = log.events();
        log.log_event("second");

        assert_eq!(snapshot.len(), 1);
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_clone_shares_storage() {
        let log = EventLog::new();
        let handle = log.clone();
        handle.log_event("via clone");

        assert_eq!(descriptions(&log), vec!["via clone"]);
    }

    #[test]
    fn test_shared_handles_see_same_log() {
        // The shared log is process-wide and other tests may append to it
        // concurrently, so only check that our entry shows up.
        let marker = "shared handle probe";
        EventLog::shared().log_event(marker);

        let seen = EventLog::shared()
            .events()
            .iter()
            .any(|e| e.description() == marker);
        assert!(seen);
    }

    #[test]
    fn test_timestamps_do_not_go_backwards() {
        let log = EventLog::new();
        log.log_event("first");
        log.log_event("second");

        let events = log.events();
        assert!(events[0].timestamp() <= events[1].timestamp());
    }

    #[test]
    fn test_display_includes_description() {
        let log = EventLog::new();
        log.log_event("Added colour Red to palette: Sunset Colours");

        let rendered = log.events()[0].to_string();
        assert!(rendered.ends_with("Added colour Red to palette: Sunset Colours"));
    }
}
