use crate::error::{QuadtreeError, QuadtreeResult};
use common::shapes::{Bounded, Point, Rect};
use log::{debug, trace};

mod collision_pairs;
mod config;
mod core;
mod index;
mod memory;

pub use collision_pairs::Accessor;
pub use config::Config;
pub use index::{begin_offset, common_ancestor_level};

/// Deepest supported subdivision. Morton codes would allow 16 levels, but the
/// bucket array grows by 4x per level.
pub const MAX_DEPTH: usize = 12;

/// Element handles stored per bucket, as indices into the populated slice.
pub type Bucket = Vec<usize>;

/// Linear quadtree: every bucket of every level lives in one flat array,
/// level `l` starting at [`begin_offset`]`(l)`.
#[derive(Debug, Clone)]
pub struct QuadTree {
    region: Rect,
    depth: usize,
    section_size: Point,
    bucket_capacity: usize,
    nodes: Vec<Bucket>,
    len: usize,
}
