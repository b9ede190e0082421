use {
    crate::config::BenchConfig,
    parking_lot::Mutex,
    std::{
        io::{self, Write},
        time::Duration,
    },
};

/// Serializes access to the output stream.
///
/// Every worker prints its own measurements after the closing barrier, so a
/// phase produces one report block per worker. Holding the mutex is the
/// critical section; a block is never interleaved with another worker's.
///
/// Write errors are discarded. The benchmark has no failure path and always
/// exits 0.
pub struct Reporter<W> {
    out: Mutex<W>,
}

impl Reporter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }

    /// Prints the run header once, before the first phase.
    pub fn header(&self, config: &BenchConfig) {
        let mut out = self.out.lock();
        let _ = writeln!(out, "thread counter benchmark");
        let _ = writeln!(out, "num threads  = {}", config.threads);
        let _ = writeln!(out, "iterations   = {}", config.iterations);
        let _ = writeln!(out, "memory model = {}", config.model);
    }

    /// Prints one worker's measurements: elapsed seconds, seconds per
    /// iteration, the shared counter, and, when present, the worker's last
    /// fetch-and-add return value.
    pub fn thread_report(
        &self,
        elapsed: Duration,
        iterations: u64,
        counter: i64,
        output: Option<i64>,
    ) {
        let secs = elapsed.as_secs_f64();
        let mut out = self.out.lock();
        let _ = writeln!(out, "total time elapsed = {}", secs);
        let _ = writeln!(out, "time per iteration = {}", secs / iterations as f64);
        let _ = writeln!(out, "{}", counter);
        if let Some(output) = output {
            let _ = writeln!(out, "{}", output);
        }
    }
}
