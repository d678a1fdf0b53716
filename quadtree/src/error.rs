use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuadtreeError {
    DepthTooLarge { depth: usize, max_depth: usize },
    InvalidRegion { width: i32, height: i32 },
}

pub type QuadtreeResult<T> = Result<T, QuadtreeError>;

impl fmt::Display for QuadtreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuadtreeError::DepthTooLarge { depth, max_depth } => {
                write!(
                    f,
                    "quadtree depth must not exceed {} (depth: {})",
                    max_depth, depth
                )
            }
            QuadtreeError::InvalidRegion { width, height } => {
                write!(
                    f,
                    "quadtree region must have a positive width and height (width: {}, height: {})",
                    width, height
                )
            }
        }
    }
}

impl std::error::Error for QuadtreeError {}
