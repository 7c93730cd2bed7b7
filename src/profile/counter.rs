use std::sync::atomic::{AtomicU64, Ordering};

/// Number of profiled producers started in this process.
///
/// Only [`allocate`] and [`reset_instance_counter`] touch it.
static STARTED: AtomicU64 = AtomicU64::new(0);

/// Hands out the next instance id.
pub(crate) fn allocate() -> u64 {
    STARTED.fetch_add(1, Ordering::Relaxed)
}

/// Resets the process-wide instance counter back to zero.
///
/// Instance ids are allocated when a profiled producer is advanced for
/// the first time, starting from zero. Resetting the counter makes the
/// generated mark names predictable again, which is what tests need.
///
/// Intended for tests only: resetting while other threads start
/// profiled producers lets two live instances share an id, and their
/// marks collide.
pub fn reset_instance_counter() {
    STARTED.store(0, Ordering::Relaxed);
}
