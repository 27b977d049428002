/// Run `op` inside a dedicated rayon thread pool.
///
/// # Arguments
///
/// * `num_threads` - Number of threads to use (0 for all available cores)
/// * `op` - The closure to run inside the pool
///
/// # Panics
///
/// Panics if the thread pool cannot be built.
pub fn run_with_threads<T: Send>(num_threads: usize, op: impl FnOnce() -> T + Send) -> T {
    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build()
        .unwrap()
        .install(op)
}
