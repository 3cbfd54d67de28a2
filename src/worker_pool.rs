//! A fixed pool of worker threads, each owning one long-lived pathfinder,
//! pulling from a single shared FIFO queue. See §5.

use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crossbeam_channel::{bounded, unbounded, Receiver, Sender};

enum Message<P> {
    Task(Box<dyn FnOnce(&mut P) + Send>),
    Shutdown,
}

/// Owns `worker_count` threads and a shared FIFO queue of submitted jobs.
/// Every job runs against the submitting worker's own `P`, so `P` should be
/// whatever carries mutable pathfinder scratch state (a [`crate::pathfinding::Dijkstra`]
/// and friends are not `Sync`, hence one owned instance per worker rather than
/// one shared instance).
///
/// Ordering: FIFO across the shared queue; no ordering between workers once
/// dequeued. Dropping the pool enqueues one shutdown sentinel per worker and
/// blocks until every worker thread has exited.
pub struct WorkerPool<P> {
    sender: Sender<Message<P>>,
    handles: Vec<JoinHandle<()>>,
}

impl<P: Send + 'static> WorkerPool<P> {
    /// `make_pathfinder` runs once per worker, on that worker's own thread.
    pub fn new<F>(worker_count: usize, make_pathfinder: F) -> Self
    where
        F: Fn() -> P + Send + Sync + 'static,
    {
        let worker_count = worker_count.max(1);
        let (sender, receiver) = unbounded::<Message<P>>();
        let make_pathfinder = Arc::new(make_pathfinder);
        let mut handles = Vec::with_capacity(worker_count);

        for _ in 0..worker_count {
            let receiver = receiver.clone();
            let make_pathfinder = Arc::clone(&make_pathfinder);
            handles.push(thread::spawn(move || {
                let mut pathfinder = make_pathfinder();
                while let Ok(message) = receiver.recv() {
                    match message {
                        Message::Task(task) => task(&mut pathfinder),
                        Message::Shutdown => break,
                    }
                }
            }));
        }

        Self { sender, handles }
    }

    /// Enqueue one job; the result arrives on the returned channel once some
    /// worker dequeues and runs it against its owned `P`.
    pub fn submit<R, J>(&self, job: J) -> Receiver<R>
    where
        R: Send + 'static,
        J: FnOnce(&mut P) -> R + Send + 'static,
    {
        let (result_tx, result_rx) = bounded(1);
        let task: Box<dyn FnOnce(&mut P) + Send> = Box::new(move |pathfinder| {
            let _ = result_tx.send(job(pathfinder));
        });
        self.sender.send(Message::Task(task)).expect("worker pool outlives its submissions");
        result_rx
    }

    #[inline]
    #[must_use]
    pub fn worker_count(&self) -> usize {
        self.handles.len()
    }
}

impl<P> Drop for WorkerPool<P> {
    fn drop(&mut self) {
        for _ in &self.handles {
            let _ = self.sender.send(Message::Shutdown);
        }
        for handle in self.handles.drain(..) {
            let _ = handle.join();
        }
    }
}
