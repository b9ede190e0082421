use {cfg_if::cfg_if, once_cell::sync::Lazy};

cfg_if! {
    if #[cfg(target_os = "linux")] {
        use std::str::FromStr;

        const PATH: &str = "/sys/devices/system/cpu/online";

        /// Number of CPUs currently online, computed from the last entry of
        /// the kernel's online-cpu list.
        ///
        /// This is the natural team size for a contention benchmark: one
        /// worker per CPU that can actually run one.
        pub static NUM_CPUS: Lazy<usize> = Lazy::new(|| {
            let online = match std::fs::read_to_string(PATH) {
                Ok(o) => o,
                Err(e) => panic!("Could not read {}: {}", PATH, e),
            };
            let online = online.trim();
            let last = online.rsplit(',').next().unwrap();
            let last = last.rsplit('-').next().unwrap();
            match usize::from_str(last) {
                Ok(l) => l + 1,
                Err(e) => panic!("Could not parse {}: {}", last, e),
            }
        });
    } else {
        /// Number of CPUs available to this process.
        pub static NUM_CPUS: Lazy<usize> = Lazy::new(|| {
            std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1)
        });
    }
}
