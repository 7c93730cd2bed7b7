use super::Producer;

use std::borrow::Cow;
use std::fmt;

/// Something that builds producers from construction arguments.
///
/// `Args` is the full argument list of one construction; use a tuple
/// for several arguments and `()` for none.
pub trait Factory<Args> {
    /// The producer built by this factory.
    type Producer: Producer;

    /// The declared name of the factory.
    ///
    /// Profiling uses it to label measures.
    fn name(&self) -> &str;

    /// Builds a fresh producer.
    fn create(&self, args: Args) -> Self::Producer;
}

/// A closure paired with the name it is known by.
///
/// Built with [`factory`] or the [`factory!`](crate::factory!) macro.
#[derive(Clone)]
pub struct NamedFactory<F> {
    name: Cow<'static, str>,
    build: F,
}

/// Names a closure so it can be used as a [`Factory`].
///
/// # Examples
///
/// ```rust,ignore
/// let counter = factory("counter", |limit: u32| from_iter(0..limit));
/// let producer = counter.create(3);
/// ```
pub fn factory<F>(name: impl Into<Cow<'static, str>>, build: F) -> NamedFactory<F> {
    NamedFactory {
        name: name.into(),
        build,
    }
}

impl<F, Args, P> Factory<Args> for NamedFactory<F>
where
    F: Fn(Args) -> P,
    P: Producer,
{
    type Producer = P;

    fn name(&self) -> &str {
        &self.name
    }

    fn create(&self, args: Args) -> P {
        (self.build)(args)
    }
}

impl<F> fmt::Debug for NamedFactory<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NamedFactory")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Builds a [`NamedFactory`] from a function, named after the function.
///
/// The function must take exactly one argument (the construction
/// arguments, usually a tuple).
///
/// # Examples
///
/// ```rust,ignore
/// fn countdown(from: u32) -> FromIter<std::iter::Rev<std::ops::Range<u32>>> {
///     from_iter((0..from).rev())
/// }
///
/// let f = stepwatch::factory!(countdown);
/// assert_eq!(f.name(), "countdown");
/// ```
#[macro_export]
macro_rules! factory {
    ($($segment:ident)::+) => {
        $crate::producer::factory(
            $crate::__last_segment!($($segment)::+),
            $($segment)::+,
        )
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __last_segment {
    ($last:ident) => {
        stringify!($last)
    };
    ($head:ident :: $($tail:ident)::+) => {
        $crate::__last_segment!($($tail)::+)
    };
}
