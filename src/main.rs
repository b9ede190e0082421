use {
    locked_counter::{run, BenchConfig, Reporter, Team},
    std::{env, sync::Arc},
};

fn main() {
    let config = BenchConfig::from_env(env::args().skip(1));
    let team = Team::new(config.threads, config.pin);
    let reporter = Arc::new(Reporter::stdout());
    run(config, &team, &reporter);
}
