//! Timing backends.
//!
//! A backend receives the marks and measures emitted while profiled
//! producers run. The profiler only relies on the two operations of
//! [`TimingBackend`]; storing, aggregating, and reporting the data is
//! entirely up to the backend.
//!
//! Provided backends:
//! - [`NoopBackend`] discards everything,
//! - [`Recorder`] keeps the ordered stream of calls,
//! - [`Performance`] timestamps marks and computes measure durations.

mod performance;
mod recorder;

#[doc(inline)]
pub use performance::{EntryKind, Performance, PerformanceEntry};

#[doc(inline)]
pub use recorder::{Recorder, TimingEvent};

use std::rc::Rc;
use std::sync::Arc;

/// The capability a profiler needs from a timing backend.
///
/// Both operations are expected to succeed. A backend that cannot honour
/// a call should deal with it internally (for example by logging it);
/// a panic propagates to whoever is driving the producer.
pub trait TimingBackend {
    /// Records a timestamped point named `name`.
    fn mark(&self, name: &str);

    /// Records the duration between the marks `start_mark` and
    /// `end_mark`, under `name`.
    fn measure(&self, name: &str, start_mark: &str, end_mark: &str);
}

/// A backend that ignores every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopBackend;

impl TimingBackend for NoopBackend {
    fn mark(&self, _name: &str) {}

    fn measure(&self, _name: &str, _start_mark: &str, _end_mark: &str) {}
}

impl<T: TimingBackend + ?Sized> TimingBackend for &T {
    fn mark(&self, name: &str) {
        (**self).mark(name)
    }

    fn measure(&self, name: &str, start_mark: &str, end_mark: &str) {
        (**self).measure(name, start_mark, end_mark)
    }
}

impl<T: TimingBackend + ?Sized> TimingBackend for Box<T> {
    fn mark(&self, name: &str) {
        (**self).mark(name)
    }

    fn measure(&self, name: &str, start_mark: &str, end_mark: &str) {
        (**self).measure(name, start_mark, end_mark)
    }
}

impl<T: TimingBackend + ?Sized> TimingBackend for Rc<T> {
    fn mark(&self, name: &str) {
        (**self).mark(name)
    }

    fn measure(&self, name: &str, start_mark: &str, end_mark: &str) {
        (**self).measure(name, start_mark, end_mark)
    }
}

impl<T: TimingBackend + ?Sized> TimingBackend for Arc<T> {
    fn mark(&self, name: &str) {
        (**self).mark(name)
    }

    fn measure(&self, name: &str, start_mark: &str, end_mark: &str) {
        (**self).measure(name, start_mark, end_mark)
    }
}
