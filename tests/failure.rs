//! Timing windows are closed on every way out of a step.

mod common;

use common::isolated;
use stepwatch::backend::Recorder;
use stepwatch::producer::{Producer, StepResult, factory, from_fn};
use stepwatch::profile;

use std::panic::{AssertUnwindSafe, catch_unwind};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Exhausted(u32);

/// Yields `1..=yields`, then fails.
fn failing_after(yields: u32) -> impl Producer<Input = (), Output = u32, Error = Exhausted> {
    let mut count = 0;

    from_fn(move |_input: Option<()>| {
        if count == yields {
            return Err(Exhausted(count));
        }

        count += 1;
        Ok(StepResult::yielded(count))
    })
}

#[test]
fn test_error_is_returned_unchanged() {
    let _guard = isolated();

    let recorder = Recorder::new();
    let failing = profile(factory("failing", failing_after), &recorder);

    let mut producer = failing.create(2);

    assert_eq!(producer.advance(None), Ok(StepResult::yielded(1)));
    assert_eq!(producer.advance(None), Ok(StepResult::yielded(2)));
    assert_eq!(producer.advance(None), Err(Exhausted(2)));
}

#[test]
fn test_error_closes_both_windows() {
    let _guard = isolated();

    let recorder = Recorder::new();
    let failing = profile(factory("failing", failing_after), &recorder);

    let mut producer = failing.create(1);
    producer.advance(None).unwrap();
    assert!(producer.advance(None).is_err());

    assert_eq!(
        recorder.lines(),
        vec![
            "mark(gen0-start)",
            "mark(gen0-next0-start)",
            "mark(gen0-next0-end)",
            "measure(failing(#0).next(#0), gen0-next0-start, gen0-next0-end)",
            "mark(gen0-next1-start)",
            "mark(gen0-next1-end)",
            "measure(failing(#0).next(#1), gen0-next1-start, gen0-next1-end)",
            "mark(gen0-end)",
            "measure(failing(#0), gen0-start, gen0-end)",
        ]
    );
}

#[test]
fn test_error_on_first_step() {
    let _guard = isolated();

    let recorder = Recorder::new();
    let failing = profile(factory("failing", failing_after), &recorder);

    let mut producer = failing.create(0);
    assert_eq!(producer.advance(None), Err(Exhausted(0)));

    assert_eq!(
        recorder.lines(),
        vec![
            "mark(gen0-start)",
            "mark(gen0-next0-start)",
            "mark(gen0-next0-end)",
            "measure(failing(#0).next(#0), gen0-next0-start, gen0-next0-end)",
            "mark(gen0-end)",
            "measure(failing(#0), gen0-start, gen0-end)",
        ]
    );
}

#[test]
fn test_failed_producer_is_finished() {
    let _guard = isolated();

    let recorder = Recorder::new();
    let failing = profile(factory("failing", failing_after), &recorder);

    let mut producer = failing.create(0);
    assert!(producer.advance(None).is_err());
    assert!(producer.is_finished());

    let recorded = recorder.len();
    assert_eq!(producer.advance(None), Ok(StepResult::finished()));
    assert_eq!(recorder.len(), recorded, "A failed producer must not record anything");
}

#[test]
fn test_panic_closes_both_windows() {
    let _guard = isolated();

    let recorder = Recorder::new();
    let panicking = profile(
        factory("panicking", |()| {
            let mut stage = 0;
            from_fn(move |_input: Option<()>| {
                stage += 1;
                if stage == 2 {
                    panic!("producer panicked");
                }
                Ok::<_, Exhausted>(StepResult::yielded(stage))
            })
        }),
        &recorder,
    );

    let mut producer = panicking.create(());
    producer.advance(None).unwrap();

    let outcome = catch_unwind(AssertUnwindSafe(|| producer.advance(None)));
    assert!(outcome.is_err(), "The panic should keep unwinding");

    assert_eq!(
        recorder.lines()[5..],
        [
            "mark(gen0-next1-end)",
            "measure(panicking(#0).next(#1), gen0-next1-start, gen0-next1-end)",
            "mark(gen0-end)",
            "measure(panicking(#0), gen0-start, gen0-end)",
        ]
    );

    assert!(producer.is_finished());
    assert_eq!(producer.advance(None), Ok(StepResult::finished()));
    assert_eq!(recorder.len(), 9);
}

#[test]
fn test_abandoned_producer_leaves_window_open() {
    let _guard = isolated();

    let recorder = Recorder::new();
    let failing = profile(factory("failing", failing_after), &recorder);

    {
        let mut producer = failing.create(5);
        producer.advance(None).unwrap();
        producer.advance(None).unwrap();
    }

    let lines = recorder.lines();
    assert_eq!(lines.last().map(String::as_str), Some("mark(gen0-next2-start)"));
    assert!(!lines.iter().any(|line| line.contains("gen0-end")));
}
