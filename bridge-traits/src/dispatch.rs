//! Callback Delivery Context
//!
//! The core computes results on worker threads but must hand them back on one
//! fixed host context (the main looper on mobile hosts), so callers can
//! assume single-threaded callback semantics. [`HostDispatcher`] is that
//! hand-off point.

/// A unit of work posted to the host callback context.
pub type DispatchTask = Box<dyn FnOnce() + Send + 'static>;

/// Serialized execution on one fixed host context.
///
/// Implementations must run every posted task on the same logical context and
/// never concurrently. Posting never blocks the caller; tasks run in the
/// order they were posted.
///
/// # Example
///
/// ```ignore
/// use bridge_traits::dispatch::HostDispatcher;
///
/// fn deliver(dispatcher: &dyn HostDispatcher, message: String) {
///     dispatcher.post(Box::new(move || println!("{message}")));
/// }
/// ```
pub trait HostDispatcher: Send + Sync {
    /// Post a task for execution on the host callback context.
    fn post(&self, task: DispatchTask);
}

/// Dispatcher that runs tasks immediately on the posting thread.
///
/// Only suitable for tests and single-threaded harnesses; it provides the
/// exactly-once delivery the core needs but not the fixed-context guarantee.
#[derive(Debug, Clone, Default)]
pub struct InlineDispatcher;

impl HostDispatcher for InlineDispatcher {
    fn post(&self, task: DispatchTask) {
        task();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_inline_dispatcher_runs_task() {
        let counter = Arc::new(AtomicUsize::new(0));
        let dispatcher = InlineDispatcher;

        let c = Arc::clone(&counter);
        dispatcher.post(Box::new(move || {
            c.fetch_add(1, Ordering::SeqCst);
        }));

        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }
}
