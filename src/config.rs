use {
    crate::{model::MemoryModel, team::NUM_CPUS},
    std::env,
};

pub const DEFAULT_ITERATIONS: u64 = 10_000_000;

/// Environment variable overriding the team size. When unset or not a
/// positive integer, one worker per online CPU is used.
pub const THREADS_VAR: &str = "LOCKED_COUNTER_THREADS";
/// Environment variable selecting the memory ordering discipline. Accepts
/// the labels `seq_cst` and `relaxed`; anything else keeps the default.
pub const MODEL_VAR: &str = "LOCKED_COUNTER_MODEL";
/// Environment variable enabling per-worker CPU pinning when set to `1`.
pub const PIN_VAR: &str = "LOCKED_COUNTER_PIN";

#[derive(Clone, Copy, Debug)]
pub struct BenchConfig {
    /// Increments performed by each worker, per phase.
    pub iterations: u64,
    pub threads: usize,
    pub model: MemoryModel,
    pub pin: bool,
}

impl BenchConfig {
    /// Builds the configuration from the command line and the environment.
    ///
    /// `args` are the arguments after the program name. The first one, if
    /// present and parseable, is the per-thread iteration count; a malformed
    /// value silently falls back to [`DEFAULT_ITERATIONS`]. There is no
    /// other command line surface; everything else comes from the
    /// environment.
    pub fn from_env(mut args: impl Iterator<Item = String>) -> Self {
        let iterations = args
            .next()
            .and_then(|arg| arg.parse().ok())
            .unwrap_or(DEFAULT_ITERATIONS);
        let threads = env::var(THREADS_VAR)
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|&threads| threads >= 1)
            .unwrap_or_else(|| *NUM_CPUS);
        let model = env::var(MODEL_VAR)
            .ok()
            .and_then(|v| MemoryModel::parse(&v))
            .unwrap_or_default();
        let pin = env::var(PIN_VAR).map(|v| v == "1").unwrap_or(false);
        Self {
            iterations,
            threads,
            model,
            pin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{BenchConfig, DEFAULT_ITERATIONS};

    fn args(args: &[&str]) -> impl Iterator<Item = String> {
        args.iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .into_iter()
    }

    #[test]
    fn no_arguments_uses_the_default_iteration_count() {
        let config = BenchConfig::from_env(args(&[]));
        assert_eq!(config.iterations, DEFAULT_ITERATIONS);
        assert!(config.threads >= 1);
    }

    #[test]
    fn explicit_iteration_count_is_honored() {
        let config = BenchConfig::from_env(args(&["500"]));
        assert_eq!(config.iterations, 500);
    }

    #[test]
    fn malformed_iteration_count_degrades_to_the_default() {
        for bad in ["ten", "", "-5", "1e6"] {
            let config = BenchConfig::from_env(args(&[bad]));
            assert_eq!(config.iterations, DEFAULT_ITERATIONS, "arg {:?}", bad);
        }
    }

    #[test]
    fn extra_arguments_are_ignored() {
        let config = BenchConfig::from_env(args(&["7", "unused"]));
        assert_eq!(config.iterations, 7);
    }
}
