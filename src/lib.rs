//! # stepwatch
//!
//! **stepwatch** times every step of a resumable, stepwise producer
//! without changing what the producer does.
//!
//! A stepwise producer is a computation that is driven by repeated
//! `advance` calls. Each call may hand an input to the computation and
//! gets back an optional value together with a completion flag. Wrapping
//! a producer factory with [`profile()`] yields a factory whose producers
//! behave identically while reporting timing marks to a
//! [`TimingBackend`](backend::TimingBackend):
//!
//! - one measure per step, covering the time since the previous step
//!   ended (caller idle time included),
//! - one end-to-end measure, from the first step to completion.
//!
//! Marks are recorded on every way out of a step, including failures and
//! panics.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use stepwatch::backend::Performance;
//! use stepwatch::producer::{Producer, factory, from_iter};
//! use stepwatch::profile;
//!
//! let performance = Performance::new();
//! let numbers = profile(factory("numbers", |()| from_iter([1, 2, 3])), &performance);
//!
//! let mut producer = numbers.create(());
//! while let Ok(step) = producer.advance(None) {
//!     if step.done {
//!         break;
//!     }
//! }
//!
//! for entry in performance.measures() {
//!     println!("{} took {:?}", entry.name, entry.duration);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`producer`] — The stepwise-producer protocol and adapters
//! - [`backend`] — Timing backends
//! - [`profile`](mod@profile) — Per-step profiling of producers

pub mod backend;
pub mod error;
pub mod producer;
pub mod profile;

pub use error::PerformanceError;
pub use profile::{Profiled, ProfiledProducer, profile, reset_instance_counter};
