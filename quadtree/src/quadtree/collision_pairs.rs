use super::*;

/// Read-only view over one populated [`QuadTree`] and the elements its
/// buckets point into. Holding it keeps the tree borrowed, so the buckets
/// cannot be rebuilt while pairs are being enumerated.
pub struct Accessor<'a, T> {
    tree: &'a QuadTree,
    elements: &'a [T],
}

impl<'a, T> Clone for Accessor<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for Accessor<'a, T> {}

impl<'a, T> Accessor<'a, T> {
    pub(super) fn new(tree: &'a QuadTree, elements: &'a [T]) -> Self {
        Self { tree, elements }
    }

    pub fn tree(&self) -> &'a QuadTree {
        self.tree
    }

    pub fn elements(&self) -> &'a [T] {
        self.elements
    }

    /// Calls `f` once for every candidate pair of elements: pairs sharing a
    /// bucket, and pairs whose buckets are in an ancestor/descendant relation.
    pub fn for_each_pair<F>(&self, mut f: F)
    where
        F: FnMut(&'a T, &'a T),
    {
        let elements = self.elements;
        self.for_each_index_pair(|a, b| f(&elements[a], &elements[b]));
    }

    /// Same traversal as [`Accessor::for_each_pair`], reporting indices into
    /// the populated slice.
    pub fn for_each_index_pair<F>(&self, mut f: F)
    where
        F: FnMut(usize, usize),
    {
        let tree = self.tree;
        let mut emitted = 0usize;
        for level in 0..=tree.depth {
            for (m, node) in tree.level_buckets(level).iter().enumerate() {
                if node.is_empty() {
                    continue;
                }

                for (i, &a) in node.iter().enumerate() {
                    for &b in &node[i + 1..] {
                        f(a, b);
                    }
                }
                emitted += node.len() * (node.len() - 1) / 2;

                let mut ancestor = m;
                for ancestor_level in (0..level).rev() {
                    ancestor >>= 2;
                    let other = &tree.nodes[begin_offset(ancestor_level) + ancestor];
                    if other.is_empty() {
                        continue;
                    }
                    for &a in node {
                        for &b in other {
                            f(a, b);
                        }
                    }
                    emitted += node.len() * other.len();
                }
            }
        }
        trace!("enumerated {} candidate pairs", emitted);
    }

    /// Candidate pairs as `(min, max)` index tuples, sorted ascending.
    pub fn collect_pairs(&self) -> Vec<(usize, usize)> {
        let mut pairs = Vec::with_capacity(self.candidate_count());
        self.for_each_index_pair(|a, b| pairs.push(if a < b { (a, b) } else { (b, a) }));
        pairs.sort_unstable();
        pairs
    }

    /// Number of pairs the traversal emits, derived from bucket sizes alone.
    pub fn candidate_count(&self) -> usize {
        let tree = self.tree;
        let mut count = 0usize;
        for level in 0..=tree.depth {
            for (m, node) in tree.level_buckets(level).iter().enumerate() {
                let n = node.len();
                if n == 0 {
                    continue;
                }
                count += n * (n - 1) / 2;
                let mut ancestor = m;
                for ancestor_level in (0..level).rev() {
                    ancestor >>= 2;
                    count += n * tree.nodes[begin_offset(ancestor_level) + ancestor].len();
                }
            }
        }
        count
    }
}

impl<'a, T: Bounded> Accessor<'a, T> {
    /// Candidate pairs narrowed down to those whose bounding rectangles
    /// actually intersect.
    pub fn for_each_overlapping_pair<F>(&self, mut f: F)
    where
        F: FnMut(&'a T, &'a T),
    {
        self.for_each_pair(|a, b| {
            if a.bounding_rect().intersects(&b.bounding_rect()) {
                f(a, b);
            }
        });
    }
}
