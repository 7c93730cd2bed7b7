use super::names::Names;
use crate::backend::TimingBackend;

/// Closes a step's timing window when dropped.
///
/// Dropping happens on every way out of the delegated step: a returned
/// value, an error, or a panic unwinding through it.
pub(crate) struct StepSpan<'a, B: TimingBackend> {
    backend: &'a B,
    names: &'a Names,
    step: u64,
}

impl<'a, B: TimingBackend> StepSpan<'a, B> {
    /// Opens the guard. The step's start mark must already be recorded.
    pub(crate) fn new(backend: &'a B, names: &'a Names, step: u64) -> Self {
        Self {
            backend,
            names,
            step,
        }
    }
}

impl<B: TimingBackend> Drop for StepSpan<'_, B> {
    fn drop(&mut self) {
        let start = self.names.step_start(self.step);
        let end = self.names.step_end(self.step);

        self.backend.mark(&end);
        self.backend
            .measure(&self.names.step_measure(self.step), &start, &end);
    }
}

/// Closes an instance's end-to-end timing window when dropped, unless
/// it was disarmed first.
///
/// A step that suspends the producer disarms it; completion, failure and
/// panics all close the window.
pub(crate) struct RunSpan<'a, B: TimingBackend> {
    backend: &'a B,
    names: &'a Names,
    armed: bool,
}

impl<'a, B: TimingBackend> RunSpan<'a, B> {
    pub(crate) fn new(backend: &'a B, names: &'a Names) -> Self {
        Self {
            backend,
            names,
            armed: true,
        }
    }

    /// Leaves the window open.
    pub(crate) fn disarm(mut self) {
        self.armed = false;
    }
}

impl<B: TimingBackend> Drop for RunSpan<'_, B> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }

        let end = self.names.run_end();

        self.backend.mark(&end);
        self.backend
            .measure(self.names.run_measure(), self.names.run_start(), &end);
    }
}
