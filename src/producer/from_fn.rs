use super::{Producer, StepResult};

use std::marker::PhantomData;

/// Creates a producer whose steps are computed by `step`.
///
/// `step` receives the input of each [`advance`](Producer::advance)
/// call and keeps whatever state it needs in its captures. Once it
/// reports `done`, it is never called again.
///
/// # Examples
///
/// ```rust,ignore
/// let mut total = 0;
/// let mut sum = from_fn(move |input: Option<i32>| {
///     total += input.unwrap_or(0);
///     Ok::<_, Infallible>(StepResult::yielded(total))
/// });
/// ```
pub fn from_fn<F, I, O, E>(step: F) -> FromFn<F, I>
where
    F: FnMut(Option<I>) -> Result<StepResult<O>, E>,
{
    FromFn {
        step,
        done: false,
        _input: PhantomData,
    }
}

/// A producer driven by a closure. See [`from_fn`].
pub struct FromFn<F, I> {
    step: F,
    done: bool,
    _input: PhantomData<fn(I)>,
}

impl<F, I, O, E> Producer for FromFn<F, I>
where
    F: FnMut(Option<I>) -> Result<StepResult<O>, E>,
{
    type Input = I;
    type Output = O;
    type Error = E;

    fn advance(&mut self, input: Option<I>) -> Result<StepResult<O>, E> {
        if self.done {
            return Ok(StepResult::finished());
        }

        let result = (self.step)(input);

        // A failed step ends the computation just like a completed one.
        if !matches!(result, Ok(StepResult { done: false, .. })) {
            self.done = true;
        }

        result
    }
}
