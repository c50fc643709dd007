//! Background job runner service
//!
//! Runs one blocking call on a spawned thread and hands its result back
//! to the UI thread, which polls on every tick.

use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

/// State of the runner after a poll
#[derive(Debug, PartialEq)]
pub enum JobPoll<T> {
    /// No job was running
    Idle,
    /// The job is still running
    Pending,
    /// The job finished with this value
    Finished(T),
    /// The worker thread went away without reporting (it panicked)
    Lost,
}

/// A job whose result has not been collected yet
struct BackgroundJob<T> {
    receiver: Receiver<T>,
    start_instant: Instant,
}

/// Job runner holding at most one in-flight job
pub struct JobRunner<T> {
    job: Option<BackgroundJob<T>>,
}

impl<T> Default for JobRunner<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> JobRunner<T> {
    pub fn new() -> Self {
        Self { job: None }
    }

    /// Whether a job is running and its result not yet collected
    pub fn is_pending(&self) -> bool {
        self.job.is_some()
    }

    /// How long the current job has been running
    pub fn elapsed(&self) -> Option<Duration> {
        self.job.as_ref().map(|j| j.start_instant.elapsed())
    }

    /// Collect the job's result if it is ready
    ///
    /// `Finished` and `Lost` both end the job, so `is_pending` is false
    /// afterwards on every exit path.
    pub fn poll(&mut self) -> JobPoll<T> {
        let Some(ref job) = self.job else {
            return JobPoll::Idle;
        };

        match job.receiver.try_recv() {
            Ok(value) => {
                self.job = None;
                JobPoll::Finished(value)
            }
            Err(TryRecvError::Empty) => JobPoll::Pending,
            Err(TryRecvError::Disconnected) => {
                self.job = None;
                JobPoll::Lost
            }
        }
    }
}

impl<T: Send + 'static> JobRunner<T> {
    /// Spawn a new background job
    ///
    /// Returns false, and runs nothing, if a job is already in flight.
    pub fn spawn<F>(&mut self, work: F) -> bool
    where
        F: FnOnce() -> T + Send + 'static,
    {
        if self.job.is_some() {
            return false;
        }

        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let _ = tx.send(work());
        });

        self.job = Some(BackgroundJob {
            receiver: rx,
            start_instant: Instant::now(),
        });
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc::channel;

    fn wait_for<T>(runner: &mut JobRunner<T>) -> JobPoll<T> {
        for _ in 0..500 {
            match runner.poll() {
                JobPoll::Pending => thread::sleep(Duration::from_millis(2)),
                other => return other,
            }
        }
        panic!("job did not finish");
    }

    #[test]
    fn test_idle_runner() {
        let mut runner: JobRunner<u32> = JobRunner::new();
        assert!(!runner.is_pending());
        assert_eq!(runner.poll(), JobPoll::Idle);
        assert_eq!(runner.elapsed(), None);
    }

    #[test]
    fn test_job_result_is_delivered_once() {
        let mut runner = JobRunner::new();
        assert!(runner.spawn(|| 42));
        assert!(runner.is_pending());

        assert_eq!(wait_for(&mut runner), JobPoll::Finished(42));
        assert!(!runner.is_pending());
        assert_eq!(runner.poll(), JobPoll::Idle);
    }

    #[test]
    fn test_second_spawn_rejected_while_pending() {
        let (release_tx, release_rx) = channel::<()>();
        let mut runner = JobRunner::new();

        assert!(runner.spawn(move || {
            let _ = release_rx.recv();
            1
        }));
        assert!(!runner.spawn(|| 2));
        assert_eq!(runner.poll(), JobPoll::Pending);

        release_tx.send(()).unwrap();
        assert_eq!(wait_for(&mut runner), JobPoll::Finished(1));
    }

    #[test]
    fn test_panicking_job_is_lost() {
        let mut runner: JobRunner<u32> = JobRunner::new();
        runner.spawn(|| panic!("worker died"));

        assert_eq!(wait_for(&mut runner), JobPoll::Lost);
        assert!(!runner.is_pending());
    }
}
