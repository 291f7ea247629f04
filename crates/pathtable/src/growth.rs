//! Fail-fast allocation helpers shared by the stream buffer and the record
//! store.
//!
//! Neither structure can keep its invariants across a failed reallocation
//! (the buffer must end in a delimiter, the store must stay within its
//! capacity), so a failed growth step terminates the process instead of
//! returning a half-grown value.

/// Report allocation failure and abort the process.
#[cold]
pub(crate) fn memory_exhausted() -> ! {
    tracing::error!("memory exhausted");
    std::process::abort()
}

/// Grow `vec` so that its capacity is at least `capacity`, aborting on
/// allocation failure.
pub(crate) fn reserve_total<T>(vec: &mut Vec<T>, capacity: usize) {
    let additional = capacity.saturating_sub(vec.len());
    if vec.try_reserve_exact(additional).is_err() {
        memory_exhausted();
    }
}
