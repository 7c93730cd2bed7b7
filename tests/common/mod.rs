#![allow(dead_code)]

use stepwatch::producer::{Producer, StepResult, from_fn};

use std::convert::Infallible;
use std::sync::{Mutex, MutexGuard, PoisonError};

static COUNTER_LOCK: Mutex<()> = Mutex::new(());

/// Serializes tests that depend on instance ids and resets the counter.
///
/// Hold the returned guard for the whole test.
pub fn isolated() -> MutexGuard<'static, ()> {
    let guard = COUNTER_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
    stepwatch::reset_instance_counter();
    guard
}

/// Advances `producer` once per entry of `inputs` and collects every
/// result.
pub fn drive<P: Producer>(
    producer: &mut P,
    inputs: impl IntoIterator<Item = Option<P::Input>>,
) -> Vec<Result<StepResult<P::Output>, P::Error>> {
    inputs
        .into_iter()
        .map(|input| producer.advance(input))
        .collect()
}

/// Suspends once without a value, yields `first + 1` and then
/// `first + second`, where `first` and `second` are the inputs of the
/// second and third steps.
pub fn sum_of_inputs() -> impl Producer<Input = i32, Output = i32, Error = Infallible> {
    let mut stage = 0;
    let mut first = 0;

    from_fn(move |input: Option<i32>| {
        stage += 1;
        Ok::<_, Infallible>(match stage {
            1 => StepResult::suspended(),
            2 => {
                first = input.unwrap_or_default();
                StepResult::yielded(first + 1)
            }
            3 => StepResult::yielded(first + input.unwrap_or_default()),
            _ => StepResult::finished(),
        })
    })
}

/// Yields `"foo"` and `"bar"`, then the doubled sum of the two inputs
/// received after them.
pub fn doubled_words() -> impl Producer<Input = i32, Output = String, Error = Infallible> {
    let mut stage = 0;
    let mut first = 0;

    from_fn(move |input: Option<i32>| {
        stage += 1;
        Ok::<_, Infallible>(match stage {
            1 => StepResult::yielded("foo".to_owned()),
            2 => {
                first = input.unwrap_or_default() * 2;
                StepResult::yielded("bar".to_owned())
            }
            3 => {
                let second = input.unwrap_or_default() * 2;
                StepResult::yielded((first + second).to_string())
            }
            _ => StepResult::finished(),
        })
    })
}

/// Yields `values` in order, ignoring inputs.
pub fn counting(values: Vec<i32>) -> impl Producer<Input = i32, Output = i32, Error = Infallible> {
    let mut values = values.into_iter();

    from_fn(move |_input: Option<i32>| {
        Ok::<_, Infallible>(match values.next() {
            Some(value) => StepResult::yielded(value),
            None => StepResult::finished(),
        })
    })
}
