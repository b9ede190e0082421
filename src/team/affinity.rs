use cfg_if::cfg_if;

cfg_if! {
    if #[cfg(target_os = "linux")] {
        use std::mem;

        const BITS_PER_USIZE: usize = mem::size_of::<usize>() * 8;

        fn sched_setaffinity(pid: libc::pid_t, mask: &[usize]) {
            unsafe {
                let res = libc::syscall(
                    libc::SYS_sched_setaffinity,
                    pid as usize,
                    mem::size_of_val(mask) as usize,
                    mask.as_ptr() as usize,
                );
                if res == -1 {
                    panic!(
                        "Could not set affinity: {}",
                        std::io::Error::last_os_error()
                    );
                }
            }
        }

        /// Restricts the calling thread to CPU `cpu`.
        pub fn pin_to_cpu(cpu: usize) {
            let idx = cpu / BITS_PER_USIZE;
            let offset = cpu % BITS_PER_USIZE;
            let mut mask = vec![0; idx + 1];
            mask[idx] = 1 << offset;
            sched_setaffinity(0, &mask);
        }
    } else {
        /// Affinity is only wired up on Linux. Elsewhere the scheduler
        /// places the workers.
        pub fn pin_to_cpu(_cpu: usize) {}
    }
}
