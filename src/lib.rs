//! Throughput benchmark for contended atomic counter increments.
//!
//! A fixed team of worker threads hammers one shared counter in two phases:
//! first with an add-only atomic increment, then with fetch-and-add. Barriers
//! bracket each timed loop so the measurement covers only the increments, and
//! every worker reports its own timing afterwards inside a mutually exclusive
//! section. The memory ordering discipline around the loop (`seq_cst` or
//! `relaxed`) is selected before the run and printed with the results.

pub use {
    bench::run,
    config::{BenchConfig, DEFAULT_ITERATIONS},
    counter::Counter,
    model::MemoryModel,
    report::Reporter,
    team::Team,
};

mod bench;
mod config;
mod counter;
mod model;
mod report;
mod team;
