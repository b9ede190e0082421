use std::sync::atomic::{AtomicI64, Ordering};

/// The shared counter every worker increments.
///
/// The counter is cache-line aligned so that neighbouring allocations never
/// share its line. The contention being measured is the contention on the
/// counter itself, not false sharing with whatever happens to sit next to it.
///
/// All mutation goes through [`add`](Self::add) and
/// [`fetch_add`](Self::fetch_add); both are single atomic read-modify-write
/// operations, so no increment can be lost regardless of how the workers are
/// scheduled. [`peek`](Self::peek) is only meaningful once all workers have
/// passed the barrier that closes the timed loop.
#[cfg_attr(any(target_arch = "x86_64"), repr(C, align(64)))]
#[derive(Default)]
pub struct Counter {
    cell: AtomicI64,
}

impl Counter {
    pub const fn new() -> Self {
        Self {
            cell: AtomicI64::new(0),
        }
    }

    /// Atomically adds `value` to the counter.
    ///
    /// Returns the value that was added, not the counter total. The fetched
    /// total is discarded so the compiler is free to lower this to the plain
    /// lock-prefixed add form instead of an exchanging one.
    #[inline]
    pub fn add(&self, value: i64, order: Ordering) -> i64 {
        self.cell.fetch_add(value, order);
        value
    }

    /// Atomically adds `value` to the counter and returns the value stored
    /// immediately before the addition.
    #[inline]
    pub fn fetch_add(&self, value: i64, order: Ordering) -> i64 {
        self.cell.fetch_add(value, order)
    }

    /// Stores 0. Only called by the driver between phases, while no worker
    /// is inside a timed loop.
    pub fn reset(&self) {
        self.cell.store(0, Ordering::SeqCst);
    }

    /// Relaxed load of the current value.
    #[inline]
    pub fn peek(&self) -> i64 {
        self.cell.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use {
        super::Counter,
        rand::Rng,
        std::sync::atomic::Ordering::{Relaxed, SeqCst},
    };

    #[test]
    fn add_returns_the_addend() {
        let counter = Counter::new();
        assert_eq!(counter.add(1, SeqCst), 1);
        assert_eq!(counter.add(41, Relaxed), 41);
        assert_eq!(counter.peek(), 42);
    }

    #[test]
    fn fetch_add_returns_the_previous_value() {
        let counter = Counter::new();
        assert_eq!(counter.fetch_add(1, SeqCst), 0);
        assert_eq!(counter.fetch_add(1, SeqCst), 1);
        assert_eq!(counter.fetch_add(5, Relaxed), 2);
        assert_eq!(counter.peek(), 7);
    }

    #[test]
    fn reset_clears_the_counter() {
        let counter = Counter::new();
        counter.add(123, SeqCst);
        counter.reset();
        assert_eq!(counter.peek(), 0);
        assert_eq!(counter.fetch_add(1, SeqCst), 0);
    }

    #[test]
    fn no_increment_is_lost_under_contention() {
        let counter = Counter::new();
        let mut rng = rand::thread_rng();
        let addends: Vec<Vec<i64>> = (0..4)
            .map(|_| (0..10_000).map(|_| rng.gen_range(1..=9)).collect())
            .collect();
        let expected: i64 = addends.iter().flatten().sum();
        let counter_ref = &counter;
        crossbeam::thread::scope(|s| {
            for addends in &addends {
                s.spawn(move |_| {
                    for &value in addends {
                        counter_ref.add(value, Relaxed);
                    }
                });
            }
        })
        .unwrap();
        assert_eq!(counter.peek(), expected);
    }
}
