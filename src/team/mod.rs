use {
    flume::{Receiver, Sender},
    std::{
        sync::Arc,
        thread::{self, JoinHandle},
    },
};

mod affinity;
mod num_cpus;

pub use num_cpus::NUM_CPUS;

type Job = Arc<dyn Fn(usize) + Send + Sync>;

struct Worker {
    jobs: Sender<Job>,
    handle: JoinHandle<()>,
}

/// A fixed team of worker threads.
///
/// All workers are spawned once, up front, and every [`run`](Self::run) call
/// executes on those same threads. Thread startup and teardown therefore
/// never overlaps a timed region, and consecutive runs see identical
/// placement.
pub struct Team {
    workers: Vec<Worker>,
    done: Receiver<()>,
}

fn worker(index: usize, pin: bool, jobs: Receiver<Job>, done: Sender<()>) {
    if pin {
        affinity::pin_to_cpu(index % *NUM_CPUS);
    }
    while let Ok(job) = jobs.recv() {
        job(index);
        // NOTE: Once `run` has seen every ack, no worker may still hold the
        // job's captures.
        drop(job);
        let _ = done.send(());
    }
}

impl Team {
    /// Spawns `size` workers. With `pin` set, worker `i` is restricted to
    /// CPU `i mod NUM_CPUS`.
    pub fn new(size: usize, pin: bool) -> Self {
        assert!(size >= 1, "a team needs at least one worker");
        let (done_tx, done) = flume::unbounded();
        let workers = (0..size)
            .map(|index| {
                let (tx, rx) = flume::unbounded();
                let done = done_tx.clone();
                let handle = thread::Builder::new()
                    .name(format!("locked-counter worker {}", index))
                    .spawn(move || worker(index, pin, rx, done))
                    .expect("Could not spawn thread");
                Worker { jobs: tx, handle }
            })
            .collect();
        Self { workers, done }
    }

    pub fn size(&self) -> usize {
        self.workers.len()
    }

    /// Runs `f` once on every worker, passing the worker index, and returns
    /// once every worker has finished its call.
    pub fn run<F>(&self, f: F)
    where
        F: Fn(usize) + Send + Sync + 'static,
    {
        let job: Job = Arc::new(f);
        for worker in &self.workers {
            worker.jobs.send(job.clone()).expect("worker thread is gone");
        }
        drop(job);
        for _ in 0..self.workers.len() {
            self.done.recv().expect("worker thread is gone");
        }
    }
}

impl Drop for Team {
    fn drop(&mut self) {
        for worker in self.workers.drain(..) {
            drop(worker.jobs);
            let _ = worker.handle.join();
        }
    }
}
