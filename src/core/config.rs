#[derive(Debug, Clone)]
pub struct Config {
    pub initial_capacity: usize,

    pub build_batch_size: usize, // documents per work unit in bulk index builds
    pub build_threads: Option<usize>, // None: rayon default pool
}

impl Default for Config {
    fn default() -> Self {
        Config {
            initial_capacity: 1024,
            build_batch_size: 1000,
            build_threads: None,
        }
    }
}
