//! One-shot job scheduling on top of tokio.
//!
//! [`Scheduler`] is the seam between timer policy and the executor; production code
//! uses [`TokioScheduler`], tests can substitute their own.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use tokio::task::JoinHandle;

/// Boxed future run when a scheduled delay elapses.
pub type Job = Pin<Box<dyn Future<Output = ()> + Send + 'static>>;

/// Handle to a scheduled one-shot job. Cancelling aborts the job at its next await
/// point; a job that already claimed its slot still completes its send.
pub struct JobHandle {
    handle: JoinHandle<()>,
}

impl JobHandle {
    pub fn new(handle: JoinHandle<()>) -> Self {
        Self { handle }
    }

    /// Cancels the job if it has not run yet.
    pub fn cancel(&self) {
        self.handle.abort();
    }
}

/// Registers callbacks that fire once after a delay, with handle-based cancellation.
pub trait Scheduler: Send + Sync {
    /// Schedules `job` to run once after `delay`. Dropping the handle does not cancel.
    fn schedule_once(&self, delay: Duration, job: Job) -> JobHandle;
}

/// Tokio-backed scheduler: each job is a spawned task that sleeps, then runs the job.
pub struct TokioScheduler;

impl Scheduler for TokioScheduler {
    fn schedule_once(&self, delay: Duration, job: Job) -> JobHandle {
        JobHandle::new(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            job.await;
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tokio::time::sleep;

    /// **Test: a scheduled job runs once after its delay.**
    #[tokio::test]
    async fn test_schedule_once_fires() {
        let fired = Arc::new(AtomicUsize::new(0));
        let fired_in_job = fired.clone();

        let _handle = TokioScheduler.schedule_once(
            Duration::from_millis(20),
            Box::pin(async move {
                fired_in_job.fetch_add(1, Ordering::SeqCst);
            }),
        );

        assert_eq!(fired.load(Ordering::SeqCst), 0);
        sleep(Duration::from_millis(80)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    /// **Test: cancel before the delay elapses prevents the job from running.**
    #[tokio::test]
    async fn test_cancel_prevents_fire() {
        let fired = Arc::new(AtomicUsize::new(0));
        let fired_in_job = fired.clone();

        let handle = TokioScheduler.schedule_once(
            Duration::from_millis(40),
            Box::pin(async move {
                fired_in_job.fetch_add(1, Ordering::SeqCst);
            }),
        );
        handle.cancel();

        sleep(Duration::from_millis(100)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }
}
