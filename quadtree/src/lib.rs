//! Broad-phase collision candidates for 2D axis-aligned rectangles, backed by a
//! linear (pointerless) quadtree addressed with Morton codes.
//!
//! ```
//! use linear_quadtree::quadtree::QuadTree;
//! use linear_quadtree::shapes::Rect;
//!
//! let mut qt = QuadTree::with_depth(1, Rect::new(0, 0, 4, 4)).unwrap();
//! let elements = [
//!     Rect::new(0, 0, 2, 2),
//!     Rect::new(2, 0, 2, 2),
//!     Rect::new(0, 0, 4, 4),
//! ];
//! let pairs = qt.populate(&elements).collect_pairs();
//! assert_eq!(pairs, vec![(0, 2), (1, 2)]);
//! ```

pub mod error;
pub mod morton;
pub mod quadtree;

pub use common::shapes;
pub use error::{QuadtreeError, QuadtreeResult};
