//! Shortest-path queries over triangulated 2D polygon maps.
//!
//! A [`NavPolygonMap`] describes navigable space as simple polygons with
//! optional holes, each pre-triangulated. [`NavMesh`] wraps the map with a
//! triangle adjacency graph and answers two questions: whether a point lies
//! in navigable space, and what piecewise-linear path connects two points.
//! Paths are found with A* over triangle centroids and straightened with
//! funnel string-pulling over the corridor's shared edges.

pub mod nav_funnel;
pub mod nav_mesh;
pub mod nav_polygon;
pub mod nav_vec2;

pub use crate::{nav_funnel::*, nav_mesh::*, nav_polygon::*, nav_vec2::*};

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use thiserror::Error;

/// Scalar type of all coordinates and distances.
pub type Scalar = f64;

/// Tolerance for degenerate denominators and orientation gates.
pub const ZERO_TRESHOLD: Scalar = 1e-10;
/// Tolerance for point equality and on-segment collinearity.
pub const SAME_TRESHOLD: Scalar = 1e-9;
/// Tolerance below which segment directions count as parallel.
pub const PARALLEL_TRESHOLD: Scalar = 1e-8;

/// Error type.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum Error {
    /// Triangle index, vertice index in triangle, vertice index.
    #[error("triangle {0} vertice {1} holds index {2} that is out of bounds")]
    TriangleVerticeIndexOutOfBounds(u32, u32, u32),
    /// Number of points in the ring.
    #[error("polygon ring needs at least 3 points but got {0}")]
    RingTooSmall(usize),
}

/// Result type with crate error.
pub type NavResult<T> = Result<T, Error>;

/// Undirected pair of indices. Used to key triangle edges and triangle
/// connections, so `NavConnection(a, b)` equals `NavConnection(b, a)`.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, Eq, Serialize, Deserialize)]
pub struct NavConnection(pub u32, pub u32);

impl Hash for NavConnection {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.min(self.1).hash(state);
        self.0.max(self.1).hash(state);
    }
}

impl PartialEq for NavConnection {
    fn eq(&self, other: &Self) -> bool {
        (self.0.min(self.1), self.0.max(self.1))
            == (other.0.min(other.1), other.0.max(other.1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn connection_ignores_order() {
        assert_eq!(NavConnection(1, 2), NavConnection(2, 1));
        let mut map = HashMap::new();
        map.insert(NavConnection(3, 7), "edge");
        assert_eq!(map.get(&NavConnection(7, 3)), Some(&"edge"));
    }
}
