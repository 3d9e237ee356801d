use crate::{point_in_triangle, signed_area2, Error, NavConnection, NavResult, NavVec2, Scalar};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Polygon triangle description - lists used vertices indices.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, Serialize, Deserialize)]
pub struct NavTriangle {
    pub first: u32,
    pub second: u32,
    pub third: u32,
}

impl From<(u32, u32, u32)> for NavTriangle {
    fn from(value: (u32, u32, u32)) -> Self {
        Self {
            first: value.0,
            second: value.1,
            third: value.2,
        }
    }
}

impl From<[u32; 3]> for NavTriangle {
    fn from(value: [u32; 3]) -> Self {
        Self {
            first: value[0],
            second: value[1],
            third: value[2],
        }
    }
}

/// Baked triangle descriptor. Holds everything queries need about one
/// triangle: resolved corner points, precomputed centroid and the indices of
/// triangles sharing an edge with it.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct NavArea {
    /// Triangle index in the owning collection.
    pub triangle: u32,
    /// Resolved corner points.
    pub vertices: [NavVec2; 3],
    /// Arithmetic mean of the corner points.
    pub centroid: NavVec2,
    /// Area size (triangle area value).
    pub size: Scalar,
    /// Traverse cost factor. Big values tells that this area is hard to
    /// traverse, smaller tells the opposite.
    pub cost: Scalar,
    /// Triangles sharing exactly two vertices with this one.
    pub neighbors: Vec<u32>,
}

impl NavArea {
    /// Calculate triangle area value.
    ///
    /// # Arguments
    /// * `a` - first vertice point.
    /// * `b` - second vertice point.
    /// * `c` - third vertice point.
    #[inline]
    pub fn calculate_area(a: NavVec2, b: NavVec2, c: NavVec2) -> Scalar {
        signed_area2(a, b, c).abs() * 0.5
    }

    /// Calculate triangle center point.
    ///
    /// # Arguments
    /// * `a` - first vertice point.
    /// * `b` - second vertice point.
    /// * `c` - third vertice point.
    #[inline]
    pub fn calculate_center(a: NavVec2, b: NavVec2, c: NavVec2) -> NavVec2 {
        let v = a + b + c;
        NavVec2::new(v.x / 3.0, v.y / 3.0)
    }

    /// Tells if the point lies inside or on the boundary of this triangle.
    #[inline]
    pub fn contains(&self, point: NavVec2) -> bool {
        point_in_triangle(point, &self.vertices)
    }
}

/// Closed ring of points. The last point implicitly connects back to the
/// first one.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct NavRing {
    points: Vec<NavVec2>,
}

impl NavRing {
    /// Create new ring from points.
    ///
    /// # Returns
    /// `Ok` with ring or `Err` with `Error::RingTooSmall` for less than 3
    /// points.
    pub fn new(points: Vec<NavVec2>) -> NavResult<Self> {
        if points.len() < 3 {
            return Err(Error::RingTooSmall(points.len()));
        }
        Ok(Self { points })
    }

    /// Reference to list of ring points.
    #[inline]
    pub fn points(&self) -> &[NavVec2] {
        &self.points
    }

    /// Iterator over consecutive ring edges, including the closing one.
    pub fn edges(&self) -> impl Iterator<Item = (NavVec2, NavVec2)> + '_ {
        let count = self.points.len();
        (0..count).map(move |index| (self.points[index], self.points[(index + 1) % count]))
    }
}

/// Simple polygon with optional holes, pre-triangulated by the map producer.
///
/// The outer ring is counter-clockwise and hole rings clockwise by
/// convention. Triangles cover the polygon interior minus its holes and form
/// one connected patch.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct NavPolygon {
    outer: NavRing,
    holes: Vec<NavRing>,
    areas: Vec<NavArea>,
}

impl NavPolygon {
    /// Create new polygon from boundary rings and its triangulation.
    ///
    /// # Arguments
    /// * `outer` - outer ring points.
    /// * `holes` - hole ring points, one list per hole.
    /// * `vertices` - list of triangulation vertices points.
    /// * `triangles` - list of vertices indices that produces triangles.
    ///
    /// # Returns
    /// `Ok` with polygon or `Err` when a ring has less than 3 points or a
    /// triangle references a vertex out of bounds.
    ///
    /// # Example
    /// ```
    /// use polynav::*;
    ///
    /// let square = vec![
    ///     (0.0, 0.0).into(),
    ///     (1.0, 0.0).into(),
    ///     (1.0, 1.0).into(),
    ///     (0.0, 1.0).into(),
    /// ];
    /// let polygon = NavPolygon::new(
    ///     square.clone(),
    ///     vec![],
    ///     square,
    ///     vec![(0, 1, 2).into(), (0, 2, 3).into()],
    /// )
    /// .unwrap();
    /// assert_eq!(polygon.areas().len(), 2);
    /// assert_eq!(polygon.areas()[0].neighbors, vec![1]);
    /// assert_eq!(polygon.areas()[1].neighbors, vec![0]);
    /// ```
    pub fn new(
        outer: Vec<NavVec2>,
        holes: Vec<Vec<NavVec2>>,
        vertices: Vec<NavVec2>,
        triangles: Vec<NavTriangle>,
    ) -> NavResult<Self> {
        let outer = NavRing::new(outer)?;
        let holes = holes
            .into_iter()
            .map(NavRing::new)
            .collect::<NavResult<Vec<_>>>()?;
        let areas = Self::bake_areas(&vertices, &triangles)?;
        Ok(Self {
            outer,
            holes,
            areas,
        })
    }

    fn bake_areas(vertices: &[NavVec2], triangles: &[NavTriangle]) -> NavResult<Vec<NavArea>> {
        let mut areas = triangles
            .iter()
            .enumerate()
            .map(|(index, triangle)| {
                if triangle.first >= vertices.len() as u32 {
                    return Err(Error::TriangleVerticeIndexOutOfBounds(
                        index as u32,
                        0,
                        triangle.first,
                    ));
                }
                if triangle.second >= vertices.len() as u32 {
                    return Err(Error::TriangleVerticeIndexOutOfBounds(
                        index as u32,
                        1,
                        triangle.second,
                    ));
                }
                if triangle.third >= vertices.len() as u32 {
                    return Err(Error::TriangleVerticeIndexOutOfBounds(
                        index as u32,
                        2,
                        triangle.third,
                    ));
                }
                let first = vertices[triangle.first as usize];
                let second = vertices[triangle.second as usize];
                let third = vertices[triangle.third as usize];
                Ok(NavArea {
                    triangle: index as u32,
                    vertices: [first, second, third],
                    centroid: NavArea::calculate_center(first, second, third),
                    size: NavArea::calculate_area(first, second, third),
                    cost: 1.0,
                    neighbors: vec![],
                })
            })
            .collect::<NavResult<Vec<_>>>()?;

        // {edge: [triangle index]}
        let mut edges = HashMap::<NavConnection, Vec<usize>>::with_capacity(triangles.len() * 3);
        for (index, triangle) in triangles.iter().enumerate() {
            let edge_a = NavConnection(triangle.first, triangle.second);
            let edge_b = NavConnection(triangle.second, triangle.third);
            let edge_c = NavConnection(triangle.third, triangle.first);
            for edge in [edge_a, edge_b, edge_c] {
                if let Some(tris) = edges.get_mut(&edge) {
                    tris.push(index);
                } else {
                    edges.insert(edge, vec![index]);
                }
            }
        }
        for tris in edges.values() {
            for a in tris {
                for b in tris {
                    if a != b && !areas[*a].neighbors.contains(&(*b as u32)) {
                        areas[*a].neighbors.push(*b as u32);
                    }
                }
            }
        }
        for area in &mut areas {
            area.neighbors.sort_unstable();
        }
        Ok(areas)
    }

    /// Outer boundary ring.
    #[inline]
    pub fn outer(&self) -> &NavRing {
        &self.outer
    }

    /// Hole rings.
    #[inline]
    pub fn holes(&self) -> &[NavRing] {
        &self.holes
    }

    /// Baked triangles of this polygon.
    #[inline]
    pub fn areas(&self) -> &[NavArea] {
        &self.areas
    }
}

/// Ordered collection of polygons forming the navigable region.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct NavPolygonMap {
    polygons: Vec<NavPolygon>,
}

impl NavPolygonMap {
    /// Create new polygon map.
    pub fn new(polygons: Vec<NavPolygon>) -> Self {
        Self { polygons }
    }

    /// Reference to list of map polygons.
    #[inline]
    pub fn polygons(&self) -> &[NavPolygon] {
        &self.polygons
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_points() -> Vec<NavVec2> {
        vec![
            NavVec2::new(0.0, 0.0),
            NavVec2::new(1.0, 0.0),
            NavVec2::new(1.0, 1.0),
            NavVec2::new(0.0, 1.0),
        ]
    }

    #[test]
    fn bakes_centroid_size_and_neighbors() {
        let polygon = NavPolygon::new(
            square_points(),
            vec![],
            square_points(),
            vec![(0, 1, 2).into(), (0, 2, 3).into()],
        )
        .unwrap();
        let areas = polygon.areas();
        assert_eq!(areas.len(), 2);
        assert!((areas[0].size - 0.5).abs() < 1e-12);
        assert!(areas[0]
            .centroid
            .same_as(NavVec2::new(2.0 / 3.0, 1.0 / 3.0)));
        assert_eq!(areas[0].neighbors, vec![1]);
        assert_eq!(areas[1].neighbors, vec![0]);
        assert_eq!(areas[1].triangle, 1);
    }

    #[test]
    fn rejects_out_of_bounds_vertice_index() {
        let result = NavPolygon::new(
            square_points(),
            vec![],
            square_points(),
            vec![(0, 1, 9).into()],
        );
        assert_eq!(
            result.err(),
            Some(Error::TriangleVerticeIndexOutOfBounds(0, 2, 9))
        );
    }

    #[test]
    fn rejects_short_rings() {
        let result = NavPolygon::new(
            vec![NavVec2::new(0.0, 0.0), NavVec2::new(1.0, 0.0)],
            vec![],
            vec![],
            vec![],
        );
        assert_eq!(result.err(), Some(Error::RingTooSmall(2)));
    }

    #[test]
    fn ring_edges_close_the_loop() {
        let ring = NavRing::new(square_points()).unwrap();
        let edges: Vec<_> = ring.edges().collect();
        assert_eq!(edges.len(), 4);
        assert_eq!(edges[3], (NavVec2::new(0.0, 1.0), NavVec2::new(0.0, 0.0)));
    }
}
