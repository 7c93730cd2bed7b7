use super::{Producer, StepResult};

use std::convert::Infallible;

/// Creates a producer that yields every item of `iter`, then completes.
///
/// The producer takes no meaningful input.
pub fn from_iter<I>(iter: I) -> FromIter<I::IntoIter>
where
    I: IntoIterator,
{
    FromIter {
        iter: Some(iter.into_iter()),
    }
}

/// A producer backed by an iterator. See [`from_iter`].
pub struct FromIter<I> {
    /// `None` once the iterator has been exhausted.
    iter: Option<I>,
}

impl<I: Iterator> Producer for FromIter<I> {
    type Input = ();
    type Output = I::Item;
    type Error = Infallible;

    fn advance(&mut self, _input: Option<()>) -> Result<StepResult<I::Item>, Infallible> {
        let Some(iter) = self.iter.as_mut() else {
            return Ok(StepResult::finished());
        };

        match iter.next() {
            Some(item) => Ok(StepResult::yielded(item)),
            None => {
                self.iter = None;
                Ok(StepResult::finished())
            }
        }
    }
}
