use super::*;
use crate::morton;

/// Number of buckets in all levels shallower than `level`, i.e. `(4^level - 1) / 3`.
#[inline(always)]
pub const fn begin_offset(level: usize) -> usize {
    ((1usize << (2 * level)) - 1) / 3
}

/// Level of the deepest quadrant shared by two finest-level Morton codes,
/// given their xor. A zero xor keeps `finest_level`.
#[inline(always)]
pub fn common_ancestor_level(finest_level: usize, morton_xor: u32) -> usize {
    // One significance bit per 2-bit quadrant group.
    let folded = (morton_xor | (morton_xor >> 1)) & 0x5555_5555;
    let bits = (u32::BITS - folded.leading_zeros()) as usize;
    finest_level.saturating_sub((bits + 1) / 2)
}

impl QuadTree {
    #[inline(always)]
    fn point_code(&self, point: Point) -> u32 {
        morton::encode_point(&self.region, self.section_size, point, self.depth)
    }

    /// Flat index of the smallest quadrant fully containing `rect`.
    #[inline]
    pub fn locate(&self, rect: &Rect) -> usize {
        let top_left = self.point_code(rect.top_left());
        let bottom_right = self.point_code(rect.last_point());
        let level = common_ancestor_level(self.depth, top_left ^ bottom_right);
        let shift = 2 * (self.depth - level);
        begin_offset(level) + (bottom_right >> shift) as usize
    }

    /// Level that the flat `index` belongs to.
    pub fn bucket_level(&self, index: usize) -> usize {
        debug_assert!(index < self.nodes.len());
        let mut level = 0;
        while level < self.depth && begin_offset(level + 1) <= index {
            level += 1;
        }
        level
    }

    /// Region-space rectangle covered by the bucket at `index`. Cells on the
    /// far edges absorb any remainder of the region extent.
    pub fn bucket_bounds(&self, index: usize) -> Rect {
        let level = self.bucket_level(index);
        let (cx, cy) = morton::decode((index - begin_offset(level)) as u32);
        let scale = self.depth - level;
        let cell = Point::new(self.section_size.x << scale, self.section_size.y << scale);
        let last = (1i32 << level) - 1;

        let top_left = self
            .region
            .top_left()
            .saturating_add(Point::new(i32::from(cx) * cell.x, i32::from(cy) * cell.y));
        let mut bottom_right = top_left.saturating_add(cell);
        if i32::from(cx) == last {
            bottom_right.x = bottom_right.x.max(self.region.right);
        }
        if i32::from(cy) == last {
            bottom_right.y = bottom_right.y.max(self.region.bottom);
        }
        Rect::from_corners(top_left, bottom_right)
    }

    /// Bounds of every bucket, shallowest level first.
    pub fn all_node_bounding_boxes(&self, bounding_boxes: &mut Vec<Rect>) {
        bounding_boxes.reserve(self.nodes.len());
        for index in 0..self.nodes.len() {
            bounding_boxes.push(self.bucket_bounds(index));
        }
    }
}
