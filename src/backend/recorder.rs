use super::TimingBackend;

use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// One call received by a [`Recorder`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TimingEvent {
    Mark(String),
    Measure {
        name: String,
        start_mark: String,
        end_mark: String,
    },
}

impl TimingEvent {
    /// The name the event was recorded under.
    pub fn name(&self) -> &str {
        match self {
            TimingEvent::Mark(name) => name,
            TimingEvent::Measure { name, .. } => name,
        }
    }
}

impl fmt::Display for TimingEvent {
    /// Renders the event the way it was called, e.g. `mark(a)` or
    /// `measure(m, a, b)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimingEvent::Mark(name) => write!(f, "mark({name})"),
            TimingEvent::Measure {
                name,
                start_mark,
                end_mark,
            } => write!(f, "measure({name}, {start_mark}, {end_mark})"),
        }
    }
}

/// A backend that records every call in order, without timestamps.
///
/// Useful to check which marks and measures a producer emitted and in
/// which order. Share it through a reference or an `Arc`.
#[derive(Debug, Default)]
pub struct Recorder {
    events: Mutex<Vec<TimingEvent>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A snapshot of all recorded events, oldest first.
    pub fn events(&self) -> Vec<TimingEvent> {
        self.lock().clone()
    }

    /// All recorded events rendered with their [`Display`](fmt::Display)
    /// form.
    pub fn lines(&self) -> Vec<String> {
        self.lock().iter().map(ToString::to_string).collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Forgets every recorded event.
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, Vec<TimingEvent>> {
        // The vector is never left half-updated, so a poisoned lock is
        // still usable.
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl TimingBackend for Recorder {
    fn mark(&self, name: &str) {
        self.lock().push(TimingEvent::Mark(name.to_owned()));
    }

    fn measure(&self, name: &str, start_mark: &str, end_mark: &str) {
        self.lock().push(TimingEvent::Measure {
            name: name.to_owned(),
            start_mark: start_mark.to_owned(),
            end_mark: end_mark.to_owned(),
        });
    }
}
