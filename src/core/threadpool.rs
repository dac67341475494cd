use std::error::Error;
use std::fmt;
use std::num::NonZeroUsize;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::mpsc::{Receiver, Sender, channel};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

type Job = Box<dyn FnOnce() + Send + 'static>;

/// The job backing this handle died before producing a result.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct JobFailed;

impl fmt::Display for JobFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "worker job failed before completing")
    }
}

impl Error for JobFailed {}

/// Completion handle for one enqueued job.
///
/// `join` blocks until the job has run. A job that panics reports
/// [`JobFailed`] here, at join time, without disturbing any other job.
#[derive(Debug)]
pub struct JobHandle<T> {
    result: Receiver<T>,
}

impl<T> JobHandle<T> {
    pub fn join(self) -> Result<T, JobFailed> {
        self.result.recv().map_err(|_| JobFailed)
    }
}

/// Fixed-size worker pool with render-scoped lifetime.
///
/// Workers pull jobs off a shared channel and run each to completion; there
/// is no priority, cancellation or timeout. Dropping the pool closes the
/// channel and joins every worker, so all enqueued jobs finish before the
/// pool is gone.
#[derive(Debug)]
pub struct ThreadPool {
    workers: Vec<JoinHandle<()>>,
    sender: Option<Sender<Job>>,
}

impl ThreadPool {
    #[must_use]
    pub fn new(worker_count: NonZeroUsize) -> Self {
        let (sender, receiver) = channel::<Job>();
        let receiver = Arc::new(Mutex::new(receiver));

        let workers = (0..worker_count.get())
            .map(|_| {
                let receiver = Arc::clone(&receiver);
                std::thread::spawn(move || {
                    loop {
                        let job = {
                            let Ok(guard) = receiver.lock() else {
                                // Jobs run outside the lock, so the mutex
                                // cannot be poisoned; bail out regardless
                                // rather than spin.
                                return;
                            };
                            guard.recv()
                        };

                        match job {
                            Ok(job) => {
                                // A panicking job must not take the worker
                                // with it; the job's handle reports the
                                // failure at join time.
                                let _ = catch_unwind(AssertUnwindSafe(job));
                            }
                            // Channel closed: pool is shutting down
                            Err(_) => return,
                        }
                    }
                })
            })
            .collect();

        Self {
            workers,
            sender: Some(sender),
        }
    }

    #[must_use]
    pub fn worker_count(&self) -> usize {
        self.workers.len()
    }

    /// Submits a job and returns its completion handle.
    pub fn enqueue<T, F>(&self, job: F) -> JobHandle<T>
    where
        T: Send + 'static,
        F: FnOnce() -> T + Send + 'static,
    {
        let (result_sender, result_receiver) = channel();

        let boxed: Job = Box::new(move || {
            let output = job();
            // The handle may have been dropped; the job still ran to
            // completion either way.
            let _ = result_sender.send(output);
        });

        if let Some(sender) = &self.sender {
            let _ = sender.send(boxed);
        }

        JobHandle {
            result: result_receiver,
        }
    }
}

impl Drop for ThreadPool {
    fn drop(&mut self) {
        // Closing the channel lets each worker drain remaining jobs and exit.
        drop(self.sender.take());

        for worker in self.workers.drain(..) {
            let _ = worker.join();
        }
    }
}
