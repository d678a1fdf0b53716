use super::*;

impl QuadTree {
    pub fn new(region: Rect) -> QuadtreeResult<Self> {
        Self::new_with_config(region, Config::default())
    }

    pub fn with_depth(depth: usize, region: Rect) -> QuadtreeResult<Self> {
        Self::new_with_config(
            region,
            Config {
                depth,
                ..Config::default()
            },
        )
    }

    pub fn new_with_config(region: Rect, config: Config) -> QuadtreeResult<Self> {
        match region.checked_size() {
            Some(size) if size.x > 0 && size.y > 0 => {}
            _ => {
                return Err(QuadtreeError::InvalidRegion {
                    width: region.width(),
                    height: region.height(),
                })
            }
        }
        validate_depth(config.depth)?;
        let mut qt = QuadTree {
            region,
            depth: config.depth,
            section_size: Point::ONE,
            bucket_capacity: config.bucket_capacity,
            nodes: Vec::new(),
            len: 0,
        };
        qt.allocate(config.depth);
        Ok(qt)
    }

    /// Changes the subdivision depth. Bucket contents are dropped, not
    /// migrated, so the tree must be populated again afterwards.
    pub fn reconfigure(&mut self, depth: usize) -> QuadtreeResult<()> {
        validate_depth(depth)?;
        self.allocate(depth);
        Ok(())
    }

    fn allocate(&mut self, depth: usize) {
        let size = self.region.size();
        self.depth = depth;
        self.section_size = Point::new((size.x >> depth).max(1), (size.y >> depth).max(1));
        let bucket_count = begin_offset(depth + 1);
        let bucket_capacity = self.bucket_capacity;
        self.nodes = Vec::with_capacity(bucket_count);
        self.nodes
            .resize_with(bucket_count, || Vec::with_capacity(bucket_capacity));
        self.len = 0;
        debug!(
            "allocated linear quadtree: depth {}, {} buckets, section {}x{}",
            depth, bucket_count, self.section_size.x, self.section_size.y
        );
    }

    /// Rebuilds every bucket from `elements` and returns a view for pair
    /// enumeration. Buckets hold indices into `elements`.
    pub fn populate<'a, T: Bounded>(&'a mut self, elements: &'a [T]) -> Accessor<'a, T> {
        self.clear();
        for (value, element) in elements.iter().enumerate() {
            let index = self.locate(&element.bounding_rect());
            self.nodes[index].push(value);
        }
        self.len = elements.len();
        trace!("populated linear quadtree with {} elements", elements.len());
        Accessor::new(self, elements)
    }

    /// A fresh view over the current buckets. `elements` must be the slice
    /// passed to the last [`QuadTree::populate`].
    pub fn accessor<'a, T>(&'a self, elements: &'a [T]) -> Accessor<'a, T> {
        assert_eq!(
            elements.len(),
            self.len,
            "accessor slice does not match the populated elements"
        );
        Accessor::new(self, elements)
    }

    /// Empties every bucket, keeping their capacity.
    pub fn clear(&mut self) {
        for node in self.nodes.iter_mut() {
            node.clear();
        }
        self.len = 0;
    }

    pub fn region(&self) -> Rect {
        self.region
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn section_size(&self) -> Point {
        self.section_size
    }

    pub fn bucket_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn bucket(&self, index: usize) -> &[usize] {
        &self.nodes[index]
    }

    /// Buckets of one level, in Morton order.
    pub fn level_buckets(&self, level: usize) -> &[Bucket] {
        &self.nodes[begin_offset(level)..begin_offset(level + 1)]
    }

    /// Number of elements stored by the last population.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

fn validate_depth(depth: usize) -> QuadtreeResult<()> {
    if depth > MAX_DEPTH {
        return Err(QuadtreeError::DepthTooLarge {
            depth,
            max_depth: MAX_DEPTH,
        });
    }
    Ok(())
}
