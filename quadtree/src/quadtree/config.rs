#[derive(Debug, Clone)]
pub struct Config {
    /// Number of subdivision levels below the root.
    pub depth: usize,
    /// Capacity reserved in every bucket when the bucket array is allocated.
    pub bucket_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            depth: 6,
            bucket_capacity: 0,
        }
    }
}
