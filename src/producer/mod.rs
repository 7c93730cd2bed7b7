//! The stepwise-producer protocol.
//!
//! A producer is a resumable computation driven by repeated
//! [`Producer::advance`] calls. Each call may hand an input to the
//! computation and gets back a [`StepResult`] carrying an optional value
//! and a completion flag.
//!
//! This module provides:
//! - the [`Producer`] and [`Factory`] traits,
//! - [`from_fn`] and [`from_iter`] adapters for building producers,
//! - [`factory`] and the [`factory!`](crate::factory!) macro for naming
//!   producer factories.
//!
//! Two contracts hold for every producer:
//! - the input passed to the very first `advance` call is meaningless
//!   and may be ignored,
//! - once a step reported `done`, later calls return
//!   [`StepResult::finished`] without doing any work.

mod factory;
mod from_fn;
mod from_iter;
mod step;

#[doc(inline)]
pub use factory::{Factory, NamedFactory, factory};

#[doc(inline)]
pub use from_fn::{FromFn, from_fn};

#[doc(inline)]
pub use from_iter::{FromIter, from_iter};

#[doc(inline)]
pub use step::StepResult;

/// A resumable computation advanced one step at a time.
pub trait Producer {
    /// The value a caller may hand to the computation when resuming it.
    type Input;

    /// The value handed back by each step.
    type Output;

    /// The failure a step may report.
    type Error;

    /// Resumes the computation until its next suspension point or its
    /// completion.
    ///
    /// `input` is delivered to the computation at the point where it last
    /// suspended. On the first call there is no such point, so the input
    /// is discarded.
    fn advance(
        &mut self,
        input: Option<Self::Input>,
    ) -> Result<StepResult<Self::Output>, Self::Error>;
}

impl<P: Producer + ?Sized> Producer for &mut P {
    type Input = P::Input;
    type Output = P::Output;
    type Error = P::Error;

    fn advance(
        &mut self,
        input: Option<Self::Input>,
    ) -> Result<StepResult<Self::Output>, Self::Error> {
        (**self).advance(input)
    }
}

impl<P: Producer + ?Sized> Producer for Box<P> {
    type Input = P::Input;
    type Output = P::Output;
    type Error = P::Error;

    fn advance(
        &mut self,
        input: Option<Self::Input>,
    ) -> Result<StepResult<Self::Output>, Self::Error> {
        (**self).advance(input)
    }
}
