use {
    crate::{config::BenchConfig, counter::Counter, report::Reporter, team::Team},
    std::{
        io::Write,
        sync::{Arc, Barrier},
        time::Instant,
    },
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PhaseKind {
    /// Add-only increment; the return value of the instruction is discarded.
    Add,
    /// Fetch-and-add; each worker keeps the last pre-increment value it saw.
    FetchAdd,
}

/// Runs the full benchmark: header, add phase, counter reset, fetch-and-add
/// phase. The counter lives here and is handed to the workers by `Arc`; it
/// is never ambient state.
pub fn run<W>(config: BenchConfig, team: &Team, reporter: &Arc<Reporter<W>>)
where
    W: Write + Send + 'static,
{
    assert_eq!(
        config.threads,
        team.size(),
        "team size does not match the configuration"
    );
    let counter = Arc::new(Counter::new());
    reporter.header(&config);
    run_phase(PhaseKind::Add, config, team, &counter, reporter);
    counter.reset();
    run_phase(PhaseKind::FetchAdd, config, team, &counter, reporter);
}

/// One timed phase. Every worker executes
/// `fence, barrier, clock, increment loop, barrier, clock, fence, report`.
///
/// The barriers bound the timed region on both sides, so the measured
/// interval covers only the increment loop. Each worker takes its own
/// timestamps; the barriers keep the skew between workers down to scheduling
/// noise.
fn run_phase<W>(
    kind: PhaseKind,
    config: BenchConfig,
    team: &Team,
    counter: &Arc<Counter>,
    reporter: &Arc<Reporter<W>>,
) where
    W: Write + Send + 'static,
{
    let barrier = Arc::new(Barrier::new(team.size()));
    let counter = counter.clone();
    let reporter = reporter.clone();
    let ordering = config.model.update_ordering();
    team.run(move |_index| {
        let mut output = -1i64;

        config.model.fence();

        barrier.wait();
        let t0 = Instant::now();

        match kind {
            PhaseKind::Add => {
                for _ in 0..config.iterations {
                    counter.add(1, ordering);
                }
            }
            PhaseKind::FetchAdd => {
                for _ in 0..config.iterations {
                    output = counter.fetch_add(1, ordering);
                }
            }
        }

        barrier.wait();
        let t1 = Instant::now();

        config.model.fence();

        let output = (kind == PhaseKind::FetchAdd).then_some(output);
        reporter.thread_report(t1 - t0, config.iterations, counter.peek(), output);
    });
}
