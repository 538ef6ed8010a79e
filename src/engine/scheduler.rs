//! Deferred step scheduling

/// A callback to run once the delay has elapsed
pub type Task = Box<dyn FnOnce()>;

/// "Run this callback after N milliseconds"
///
/// `schedule` must not run the task before it returns; the session holds its
/// own state borrowed while scheduling the next step.
pub trait Scheduler {
    /// Token that can invalidate a scheduled task before it fires
    type Handle;

    fn schedule(&mut self, delay_ms: u32, task: Task) -> Self::Handle;

    /// Prevent a pending task from firing; cancelling one that already ran is harmless
    fn cancel(&mut self, handle: Self::Handle);
}
