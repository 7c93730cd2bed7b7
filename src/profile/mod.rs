//! Per-step profiling of stepwise producers.
//!
//! [`profile`] wraps a producer [`Factory`] so that every producer it
//! builds reports timing marks to a [`TimingBackend`] while behaving
//! exactly like the unwrapped producer: same values, same completion,
//! same inputs delivered.
//!
//! Two kinds of timing windows are recorded for each profiled instance:
//! - one per step, from the end of the previous step (or the start of
//!   the instance) to the end of the current step, so the caller's idle
//!   time between two `advance` calls counts towards the later step,
//! - one end-to-end window, from the first `advance` call to completion.
//!
//! Marks are only recorded once the instance is advanced for the first
//! time; creating an instance costs nothing. Instances are numbered in
//! the order they are first advanced, process-wide; see
//! [`reset_instance_counter`].

mod counter;
mod names;
mod span;

#[doc(inline)]
pub use counter::reset_instance_counter;

use crate::backend::TimingBackend;
use crate::producer::{Factory, Producer, StepResult};
use names::Names;
use span::{RunSpan, StepSpan};

use std::borrow::Cow;
use std::mem;
use std::sync::Arc;

/// Wraps `factory` so that the producers it builds are profiled into
/// `backend`.
///
/// The backend is shared by every instance created from the returned
/// [`Profiled`]; pass a reference, an `Rc` or an `Arc` to share it with
/// other code as well.
///
/// # Examples
///
/// ```rust,ignore
/// let recorder = Recorder::new();
/// let numbers = profile(factory("numbers", |()| from_iter([1, 2, 3])), &recorder);
///
/// let mut producer = numbers.create(());
/// while !producer.advance(None)?.done {}
///
/// println!("{:#?}", recorder.lines());
/// ```
pub fn profile<F, B>(factory: F, backend: B) -> Profiled<F, B>
where
    B: TimingBackend,
{
    Profiled {
        shared: Arc::new(Shared { factory, backend }),
        name: None,
    }
}

struct Shared<F, B> {
    factory: F,
    backend: B,
}

/// A factory of profiled producers. See [`profile`].
///
/// Cloning is cheap: clones share the wrapped factory and the backend.
pub struct Profiled<F, B> {
    shared: Arc<Shared<F, B>>,

    /// Overrides the factory's declared name in measure names.
    name: Option<Cow<'static, str>>,
}

impl<F, B> Profiled<F, B> {
    /// Sets the name used in measure names instead of the factory's
    /// declared name.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let parse = profile(factory("p", parser), &recorder).with_name("parse");
    /// ```
    pub fn with_name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The backend marks are recorded into.
    pub fn backend(&self) -> &B {
        &self.shared.backend
    }

    /// Creates a profiled producer.
    ///
    /// Nothing is recorded and the underlying producer is not built until
    /// the first [`advance`](Producer::advance) call.
    pub fn create<Args>(&self, args: Args) -> ProfiledProducer<F, B, Args>
    where
        F: Factory<Args>,
        B: TimingBackend,
    {
        ProfiledProducer {
            shared: Arc::clone(&self.shared),
            name: self.name.clone(),
            state: State::Pending(args),
        }
    }
}

impl<F, B> Clone for Profiled<F, B> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
            name: self.name.clone(),
        }
    }
}

impl<F, B, Args> Factory<Args> for Profiled<F, B>
where
    F: Factory<Args>,
    B: TimingBackend,
{
    type Producer = ProfiledProducer<F, B, Args>;

    fn name(&self) -> &str {
        self.name
            .as_deref()
            .unwrap_or_else(|| self.shared.factory.name())
    }

    fn create(&self, args: Args) -> Self::Producer {
        Profiled::create(self, args)
    }
}

enum State<Args, P> {
    /// Not advanced yet; holds the construction arguments.
    Pending(Args),

    Running(Running<P>),

    /// Completed, failed, or panicked. Nothing is recorded anymore.
    Finished,
}

struct Running<P> {
    producer: P,
    names: Names,

    /// Index of the step in progress. Its start mark is already recorded.
    step: u64,
}

/// A producer whose steps are timed. See [`profile`].
///
/// Dropping it before it completes leaves its end-to-end window open.
pub struct ProfiledProducer<F, B, Args>
where
    F: Factory<Args>,
{
    shared: Arc<Shared<F, B>>,
    name: Option<Cow<'static, str>>,
    state: State<Args, F::Producer>,
}

impl<F, B, Args> ProfiledProducer<F, B, Args>
where
    F: Factory<Args>,
    B: TimingBackend,
{
    /// The instance id, while the producer is running.
    pub fn id(&self) -> Option<u64> {
        match &self.state {
            State::Running(running) => Some(running.names.id()),
            _ => None,
        }
    }

    /// Whether the producer has completed, failed, or panicked.
    pub fn is_finished(&self) -> bool {
        matches!(self.state, State::Finished)
    }

    /// Opens the end-to-end window, builds the underlying producer and
    /// opens the first step's window.
    fn start(&self, args: Args) -> Running<F::Producer> {
        let backend = &self.shared.backend;
        let factory = &self.shared.factory;

        let name = self.name.as_deref().unwrap_or_else(|| factory.name());
        let names = Names::new(counter::allocate(), name);

        tracing::debug!("Starting profiled producer {}", names.run_measure());

        backend.mark(names.run_start());
        let producer = factory.create(args);
        backend.mark(&names.step_start(0));

        Running {
            producer,
            names,
            step: 0,
        }
    }
}

impl<F, B, Args> Producer for ProfiledProducer<F, B, Args>
where
    F: Factory<Args>,
    B: TimingBackend,
{
    type Input = <F::Producer as Producer>::Input;
    type Output = <F::Producer as Producer>::Output;
    type Error = <F::Producer as Producer>::Error;

    /// Advances the underlying producer by one step, recording the
    /// step's end mark and measure on every exit path.
    ///
    /// When the step suspends the producer, the next step's start mark
    /// is recorded right away, before control returns to the caller.
    /// When the step completes, fails, or panics, the end-to-end window
    /// is closed as well and the producer becomes finished.
    fn advance(
        &mut self,
        input: Option<Self::Input>,
    ) -> Result<StepResult<Self::Output>, Self::Error> {
        // Left as `Finished` unless the step suspends the producer again,
        // so a panicking step also ends the instance.
        let (mut running, input) = match mem::replace(&mut self.state, State::Finished) {
            State::Pending(args) => (self.start(args), None),
            State::Running(running) => (running, input),
            State::Finished => return Ok(StepResult::finished()),
        };

        let backend = &self.shared.backend;
        let run = RunSpan::new(backend, &running.names);

        let result = {
            let _step = StepSpan::new(backend, &running.names, running.step);
            running.producer.advance(input)
        };

        match result {
            Ok(step) if !step.done => {
                run.disarm();

                tracing::trace!(
                    "Profiled producer {} suspended after step {}",
                    running.names.run_measure(),
                    running.step
                );

                running.step += 1;
                backend.mark(&running.names.step_start(running.step));

                self.state = State::Running(running);
                Ok(step)
            }
            result => {
                drop(run);

                tracing::debug!(
                    "Profiled producer {} finished after {} steps (failed: {})",
                    running.names.run_measure(),
                    running.step + 1,
                    result.is_err()
                );

                result
            }
        }
    }
}
