/// The outcome of a single [`advance`](super::Producer::advance) call.
///
/// A step either suspends the producer (`done == false`), optionally
/// handing a value back to the caller, or completes it (`done == true`).
/// Once a producer has completed, every further step reports
/// [`StepResult::finished`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StepResult<T> {
    /// The value handed back by this step, if any.
    pub value: Option<T>,

    /// Whether the producer has reached its terminal state.
    pub done: bool,
}

impl<T> StepResult<T> {
    /// A non-terminal step carrying `value`.
    pub fn yielded(value: T) -> Self {
        Self {
            value: Some(value),
            done: false,
        }
    }

    /// A non-terminal step that hands no value back.
    pub fn suspended() -> Self {
        Self {
            value: None,
            done: false,
        }
    }

    /// A terminal step carrying a completion value.
    pub fn returned(value: T) -> Self {
        Self {
            value: Some(value),
            done: true,
        }
    }

    /// A terminal step without a value.
    ///
    /// This is also what a producer reports for every call made after
    /// it has completed.
    pub fn finished() -> Self {
        Self {
            value: None,
            done: true,
        }
    }

    pub fn is_done(&self) -> bool {
        self.done
    }
}
