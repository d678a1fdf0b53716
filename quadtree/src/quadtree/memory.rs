use super::*;
use std::mem::size_of;

impl QuadTree {
    /// Approximate heap and inline footprint in bytes. Bucket capacity is
    /// kept across populations, so the estimate only grows until the next
    /// [`QuadTree::reconfigure`].
    pub fn estimate_memory_usage(&self) -> usize {
        let headers = self.nodes.capacity() * size_of::<Bucket>();
        let contents: usize = self
            .nodes
            .iter()
            .map(|node| node.capacity() * size_of::<usize>())
            .sum();
        size_of::<Self>() + headers + contents
    }
}
