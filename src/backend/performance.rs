use super::TimingBackend;
use crate::error::PerformanceError;

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

/// The kind of a [`PerformanceEntry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum EntryKind {
    Mark,
    Measure,
}

/// A timing entry recorded by [`Performance`].
///
/// Times are offsets from the backend's time origin. A mark has a zero
/// duration.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PerformanceEntry {
    pub name: String,
    pub kind: EntryKind,
    pub start_time: Duration,
    pub duration: Duration,
}

#[derive(Default)]
struct Timeline {
    /// Latest timestamp for each mark name.
    marks: HashMap<String, Duration>,

    /// Every entry in recording order.
    entries: Vec<PerformanceEntry>,
}

/// A clock-backed timing backend.
///
/// Marks are stamped with the time elapsed since the backend was
/// created. A measure looks up its start and end marks by name (the
/// most recent mark of that name wins) and records the time between
/// them.
///
/// # Examples
///
/// ```rust,ignore
/// let performance = Performance::new();
/// performance.mark("a");
/// performance.mark("b");
/// let elapsed = performance.try_measure("a to b", "a", "b")?;
/// ```
pub struct Performance {
    /// Instant every recorded time is relative to.
    origin: Instant,

    timeline: Mutex<Timeline>,
}

impl Performance {
    /// Creates a backend whose time origin is now.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            timeline: Mutex::new(Timeline::default()),
        }
    }

    /// Time elapsed since the time origin.
    pub fn now(&self) -> Duration {
        self.origin.elapsed()
    }

    /// Records the duration between two existing marks and returns it.
    ///
    /// If the end mark precedes the start mark, the duration is zero.
    ///
    /// # Errors
    ///
    /// Returns [`PerformanceError::UnknownMark`] if either mark has not
    /// been recorded. Nothing is recorded in that case.
    pub fn try_measure(
        &self,
        name: &str,
        start_mark: &str,
        end_mark: &str,
    ) -> Result<Duration, PerformanceError> {
        let mut timeline = self.lock();

        let start = lookup(&timeline.marks, start_mark)?;
        let end = lookup(&timeline.marks, end_mark)?;
        let duration = end.saturating_sub(start);

        timeline.entries.push(PerformanceEntry {
            name: name.to_owned(),
            kind: EntryKind::Measure,
            start_time: start,
            duration,
        });

        Ok(duration)
    }

    /// A snapshot of every entry, in recording order.
    pub fn entries(&self) -> Vec<PerformanceEntry> {
        self.lock().entries.clone()
    }

    pub fn entries_by_name(&self, name: &str) -> Vec<PerformanceEntry> {
        self.lock()
            .entries
            .iter()
            .filter(|entry| entry.name == name)
            .cloned()
            .collect()
    }

    /// A snapshot of the measure entries, in recording order.
    pub fn measures(&self) -> Vec<PerformanceEntry> {
        self.lock()
            .entries
            .iter()
            .filter(|entry| entry.kind == EntryKind::Measure)
            .cloned()
            .collect()
    }

    /// Duration of the most recent measure named `name`.
    pub fn duration(&self, name: &str) -> Option<Duration> {
        self.lock()
            .entries
            .iter()
            .rev()
            .find(|entry| entry.kind == EntryKind::Measure && entry.name == name)
            .map(|entry| entry.duration)
    }

    /// Removes every mark. Measures referencing them stay recorded.
    pub fn clear_marks(&self) {
        let mut timeline = self.lock();
        timeline.marks.clear();
        timeline.entries.retain(|entry| entry.kind != EntryKind::Mark);
    }

    pub fn clear_measures(&self) {
        self.lock()
            .entries
            .retain(|entry| entry.kind != EntryKind::Measure);
    }

    fn lock(&self) -> MutexGuard<'_, Timeline> {
        self.timeline.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Performance {
    fn default() -> Self {
        Self::new()
    }
}

impl TimingBackend for Performance {
    fn mark(&self, name: &str) {
        let now = self.now();
        let mut timeline = self.lock();

        timeline.marks.insert(name.to_owned(), now);
        timeline.entries.push(PerformanceEntry {
            name: name.to_owned(),
            kind: EntryKind::Mark,
            start_time: now,
            duration: Duration::ZERO,
        });
    }

    fn measure(&self, name: &str, start_mark: &str, end_mark: &str) {
        if let Err(err) = self.try_measure(name, start_mark, end_mark) {
            tracing::warn!("Skipping measure {}: {}", name, err);
        }
    }
}

fn lookup(marks: &HashMap<String, Duration>, name: &str) -> Result<Duration, PerformanceError> {
    marks
        .get(name)
        .copied()
        .ok_or_else(|| PerformanceError::UnknownMark {
            name: name.to_owned(),
        })
}
