use crate::{
    closest_point_on_segment, point_in_triangle, segment_intersection, signed_area2, string_pull,
    NavArea, NavConnection, NavPolygon, NavPolygonMap, NavPortal, NavVec2, Scalar,
};
use petgraph::{algo::astar, graph::NodeIndex, visit::EdgeRef, Graph, Undirected};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use spade::{rtree::RTree, BoundingRect, SpatialObject};
use std::cmp::Ordering;
use std::collections::HashMap;
use tracing::{debug, trace};
use typid::ID;

#[cfg(feature = "parallel")]
macro_rules! iter {
    ($v:expr) => {
        $v.par_iter()
    };
}
#[cfg(not(feature = "parallel"))]
macro_rules! iter {
    ($v:expr) => {
        $v.iter()
    };
}
#[cfg(feature = "parallel")]
macro_rules! into_iter {
    ($v:expr) => {
        $v.into_par_iter()
    };
}
#[cfg(not(feature = "parallel"))]
macro_rules! into_iter {
    ($v:expr) => {
        $v.into_iter()
    };
}

// `serde_json` maps require string keys, but several of this module's
// `HashMap`s are keyed by non-string types (`NavConnection`, `NodeIndex`).
// Serialize those as a flat list of pairs instead of a map so every format
// stays round-trippable.
mod hashmap_as_pairs {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::collections::HashMap;
    use std::hash::Hash;

    pub fn serialize<S, K, V>(map: &HashMap<K, V>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        K: Serialize,
        V: Serialize,
    {
        map.iter().collect::<Vec<_>>().serialize(serializer)
    }

    pub fn deserialize<'de, D, K, V>(deserializer: D) -> Result<HashMap<K, V>, D::Error>
    where
        D: Deserializer<'de>,
        K: Deserialize<'de> + Eq + Hash,
        V: Deserialize<'de>,
    {
        Ok(Vec::<(K, V)>::deserialize(deserializer)?
            .into_iter()
            .collect())
    }
}

/// Nav mesh identifier.
pub type NavMeshID = ID<NavMesh>;

/// Triangle stored in the spatial index, with closest-point support.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavSpatialObject {
    pub index: usize,
    pub a: NavVec2,
    pub b: NavVec2,
    pub c: NavVec2,
}

impl NavSpatialObject {
    pub fn new(index: usize, a: NavVec2, b: NavVec2, c: NavVec2) -> Self {
        Self { index, a, b, c }
    }

    /// Point of this triangle closest to the query point.
    pub fn closest_point(&self, point: NavVec2) -> NavVec2 {
        if point_in_triangle(point, &[self.a, self.b, self.c]) {
            return point;
        }
        let pab = closest_point_on_segment(point, self.a, self.b);
        let pbc = closest_point_on_segment(point, self.b, self.c);
        let pca = closest_point_on_segment(point, self.c, self.a);
        let dab = point.sqr_distance(pab);
        let dbc = point.sqr_distance(pbc);
        let dca = point.sqr_distance(pca);
        if dab <= dbc && dab <= dca {
            pab
        } else if dbc <= dca {
            pbc
        } else {
            pca
        }
    }
}

impl SpatialObject for NavSpatialObject {
    type Point = NavVec2;

    fn mbr(&self) -> BoundingRect<Self::Point> {
        let min = NavVec2::new(
            self.a.x.min(self.b.x).min(self.c.x),
            self.a.y.min(self.b.y).min(self.c.y),
        );
        let max = NavVec2::new(
            self.a.x.max(self.b.x).max(self.c.x),
            self.a.y.max(self.b.y).max(self.c.y),
        );
        BoundingRect::from_corners(&min, &max)
    }

    fn distance2(&self, point: &Self::Point) -> Scalar {
        (*point - self.closest_point(*point)).sqr_magnitude()
    }
}

/// Quality of querying a point on nav mesh.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum NavQuery {
    /// Best quality, totally accurate.
    Accuracy,
    /// Medium quality, finds point in closest triangle.
    Closest,
    /// Low quality, finds first triangle in range of query.
    ClosestFirst,
}

/// How to replace a goal point that lies outside the mesh.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavGoalProjection {
    /// Move the goal to the boundary point of the start polygon closest to
    /// it, considering outer ring vertices, outer ring edges and hole ring
    /// edges in that order.
    #[default]
    ClosestBoundary,
    /// Clip the start-to-goal segment against the start polygon boundary and
    /// move the goal to the intersection closest to it. Falls back to
    /// `ClosestBoundary` when the segment crosses no boundary edge.
    RayClip,
}

/// Nav mesh object used to find shortest path between two points.
///
/// Built once over an immutable [`NavPolygonMap`] and queried any number of
/// times. Queries never mutate the mesh, so shared references can be used
/// from many threads at once.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct NavMesh {
    id: NavMeshID,
    map: NavPolygonMap,
    // Flat list of all polygon triangles, preserving polygon order.
    areas: Vec<NavArea>,
    // {flat triangle index: owning polygon index}
    owners: Vec<u32>,
    // {triangle connection: distance between centroids}
    #[serde(with = "hashmap_as_pairs")]
    connections: HashMap<NavConnection, Scalar>,
    graph: Graph<(), Scalar, Undirected>,
    nodes: Vec<NodeIndex>,
    #[serde(with = "hashmap_as_pairs")]
    nodes_map: HashMap<NodeIndex, usize>,
    rtree: RTree<NavSpatialObject>,
    spatials: Vec<NavSpatialObject>,
}

impl NavMesh {
    /// Create new nav mesh object from a polygon map.
    ///
    /// # Arguments
    /// * `map` - polygon map with pre-triangulated polygons.
    ///
    /// # Example
    /// ```
    /// use polynav::*;
    ///
    /// let square = vec![
    ///     (0.0, 0.0).into(), // 0
    ///     (1.0, 0.0).into(), // 1
    ///     (1.0, 1.0).into(), // 2
    ///     (0.0, 1.0).into(), // 3
    /// ];
    /// let polygon = NavPolygon::new(
    ///     square.clone(),
    ///     vec![],
    ///     square,
    ///     vec![(0, 1, 2).into(), (0, 2, 3).into()],
    /// )
    /// .unwrap();
    /// let mesh = NavMesh::new(NavPolygonMap::new(vec![polygon]));
    /// assert_eq!(mesh.areas().len(), 2);
    /// ```
    pub fn new(map: NavPolygonMap) -> Self {
        let count = map
            .polygons()
            .iter()
            .map(|polygon| polygon.areas().len())
            .sum();
        let mut areas: Vec<NavArea> = Vec::with_capacity(count);
        let mut owners = Vec::with_capacity(count);
        let mut offset = 0;
        for (polygon_index, polygon) in map.polygons().iter().enumerate() {
            for area in polygon.areas() {
                let mut area = area.clone();
                area.triangle += offset;
                for neighbor in &mut area.neighbors {
                    *neighbor += offset;
                }
                areas.push(area);
                owners.push(polygon_index as u32);
            }
            offset += polygon.areas().len() as u32;
        }

        let mut connections = HashMap::with_capacity(areas.len() * 2);
        for area in &areas {
            for neighbor in &area.neighbors {
                let connection = NavConnection(area.triangle, *neighbor);
                if !connections.contains_key(&connection) {
                    let weight = area.centroid.distance(areas[*neighbor as usize].centroid);
                    connections.insert(connection, weight);
                }
            }
        }

        let mut graph = Graph::<(), Scalar, Undirected>::new_undirected();
        let nodes = (0..areas.len())
            .map(|_| graph.add_node(()))
            .collect::<Vec<_>>();
        graph.extend_with_edges(
            iter!(connections)
                .map(|(conn, weight)| (nodes[conn.0 as usize], nodes[conn.1 as usize], *weight))
                .collect::<Vec<_>>(),
        );
        let nodes_map = iter!(nodes)
            .enumerate()
            .map(|(index, node)| (*node, index))
            .collect::<HashMap<_, _>>();

        let spatials = iter!(areas)
            .map(|area| {
                NavSpatialObject::new(
                    area.triangle as usize,
                    area.vertices[0],
                    area.vertices[1],
                    area.vertices[2],
                )
            })
            .collect::<Vec<_>>();
        let mut rtree = RTree::new();
        for spatial in &spatials {
            rtree.insert(spatial.clone());
        }

        debug!(
            polygons = map.polygons().len(),
            triangles = areas.len(),
            edges = connections.len(),
            "baked nav mesh"
        );
        Self {
            id: ID::new(),
            map,
            areas,
            owners,
            connections,
            graph,
            nodes,
            nodes_map,
            rtree,
            spatials,
        }
    }

    /// Nav mesh identifier.
    #[inline]
    pub fn id(&self) -> NavMeshID {
        self.id
    }

    /// Reference to the underlying polygon map.
    #[inline]
    pub fn map(&self) -> &NavPolygonMap {
        &self.map
    }

    /// Reference to the flat list of baked triangles, concatenated over all
    /// polygons in polygon order.
    #[inline]
    pub fn areas(&self) -> &[NavArea] {
        &self.areas
    }

    /// Index of the polygon owning given flat triangle index.
    #[inline]
    pub fn polygon_index(&self, triangle: usize) -> Option<usize> {
        self.owners.get(triangle).map(|index| *index as usize)
    }

    /// Set area cost by flat triangle index.
    ///
    /// Cost factors multiply into corridor edge costs. Factors below 1 make
    /// the centroid-distance heuristic overestimate, trading corridor
    /// optimality for area preference.
    ///
    /// # Arguments
    /// * `index` - triangle index.
    /// * `cost` - cost factor.
    ///
    /// # Returns
    /// Old area cost value.
    #[inline]
    pub fn set_area_cost(&mut self, index: usize, cost: Scalar) -> Scalar {
        let area = &mut self.areas[index];
        let old = area.cost;
        area.cost = cost.max(0.0);
        old
    }

    /// Find triangle containing given point.
    ///
    /// Scans the flat triangle list in order and returns the first triangle
    /// whose interior or boundary contains the point, so a point on a shared
    /// edge resolves to the earliest of the touching triangles.
    pub fn find_triangle_containing(&self, point: NavVec2) -> Option<usize> {
        self.areas.iter().position(|area| area.contains(point))
    }

    /// Tells if the point lies in navigable space.
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
    /// let mesh = NavMesh::new(NavPolygonMap::new(vec![polygon]));
    /// assert!(mesh.is_point_in_nav_mesh((0.5, 0.5).into()));
    /// assert!(!mesh.is_point_in_nav_mesh((1.5, 0.5).into()));
    /// ```
    #[inline]
    pub fn is_point_in_nav_mesh(&self, point: NavVec2) -> bool {
        self.find_triangle_containing(point).is_some()
    }

    /// Find triangle on nav mesh closest to given point.
    ///
    /// # Arguments
    /// * `point` - query point.
    /// * `query` - query quality.
    ///
    /// # Returns
    /// `Some` with flat triangle index if found or `None` otherwise.
    pub fn find_closest_triangle(&self, point: NavVec2, query: NavQuery) -> Option<usize> {
        match query {
            NavQuery::Accuracy => self.rtree.nearest_neighbor(&point).map(|t| t.index),
            NavQuery::ClosestFirst => self.rtree.close_neighbor(&point).map(|t| t.index),
            NavQuery::Closest => self
                .rtree
                .nearest_neighbors(&point)
                .into_iter()
                .min_by(|a, b| {
                    let da = a.distance2(&point);
                    let db = b.distance2(&point);
                    da.partial_cmp(&db).unwrap_or(Ordering::Equal)
                })
                .map(|t| t.index),
        }
    }

    /// Find closest point on nav mesh.
    ///
    /// # Arguments
    /// * `point` - query point.
    /// * `query` - query quality.
    ///
    /// # Returns
    /// `Some` with point on nav mesh if found or `None` otherwise.
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
    /// let mesh = NavMesh::new(NavPolygonMap::new(vec![polygon]));
    /// let point = mesh
    ///     .closest_point((2.0, 0.5).into(), NavQuery::Accuracy)
    ///     .unwrap();
    /// assert!(point.same_as((1.0, 0.5).into()));
    /// ```
    pub fn closest_point(&self, point: NavVec2, query: NavQuery) -> Option<NavVec2> {
        self.find_closest_triangle(point, query)
            .map(|triangle| self.spatials[triangle].closest_point(point))
    }

    /// Find shortest path on nav mesh between two points.
    ///
    /// The start must lie inside the mesh. A goal outside the mesh is
    /// replaced by a boundary point of the start polygon picked by the
    /// `projection` mode. The corridor of triangles found by the graph
    /// search is straightened with funnel string-pulling.
    ///
    /// # Arguments
    /// * `from` - query point from.
    /// * `to` - query point to.
    /// * `projection` - out-of-mesh goal handling.
    ///
    /// # Returns
    /// Path points from `from` to the effective goal, or an empty list when
    /// the start is outside the mesh, the goal cannot be projected, or no
    /// corridor connects the two triangles.
    ///
    /// # Example
    /// ```
    /// use polynav::*;
    ///
    /// let square = vec![
    ///     (0.0, 0.0).into(), // 0
    ///     (1.0, 0.0).into(), // 1
    ///     (1.0, 1.0).into(), // 2
    ///     (0.0, 1.0).into(), // 3
    /// ];
    /// let polygon = NavPolygon::new(
    ///     square.clone(),
    ///     vec![],
    ///     square,
    ///     vec![(0, 1, 2).into(), (0, 2, 3).into()],
    /// )
    /// .unwrap();
    /// let mesh = NavMesh::new(NavPolygonMap::new(vec![polygon]));
    /// let path = mesh.find_path(
    ///     (0.5, 0.25).into(),
    ///     (0.25, 0.75).into(),
    ///     NavGoalProjection::ClosestBoundary,
    /// );
    /// assert_eq!(path, vec![(0.5, 0.25).into(), (0.25, 0.75).into()]);
    /// ```
    pub fn find_path(
        &self,
        from: NavVec2,
        to: NavVec2,
        projection: NavGoalProjection,
    ) -> Vec<NavVec2> {
        self.find_path_custom(from, to, projection, |_, _, _| true)
    }

    /// Find shortest path on nav mesh between two points, providing custom
    /// filtering function.
    ///
    /// # Arguments
    /// * `from` - query point from.
    /// * `to` - query point to.
    /// * `projection` - out-of-mesh goal handling.
    /// * `filter` - closure that gives you a connection distance, first
    ///   triangle index and second triangle index; connections it rejects
    ///   are not traversed.
    pub fn find_path_custom<F>(
        &self,
        from: NavVec2,
        to: NavVec2,
        projection: NavGoalProjection,
        filter: F,
    ) -> Vec<NavVec2>
    where
        F: FnMut(Scalar, usize, usize) -> bool,
    {
        let start = match self.find_triangle_containing(from) {
            Some(triangle) => triangle,
            None => {
                trace!("path query rejected: start point lies outside the mesh");
                return vec![];
            }
        };
        let (goal, goal_triangle) = match self.find_triangle_containing(to) {
            Some(triangle) => (to, triangle),
            None => {
                let polygon = &self.map.polygons()[self.owners[start] as usize];
                let goal = match projection {
                    NavGoalProjection::ClosestBoundary => Self::closest_boundary_point(polygon, to),
                    NavGoalProjection::RayClip => Self::clip_boundary_point(polygon, from, to),
                };
                match self.find_triangle_containing(goal) {
                    Some(triangle) => (goal, triangle),
                    None => {
                        trace!("path query rejected: projected goal locates to no triangle");
                        return vec![];
                    }
                }
            }
        };
        if start == goal_triangle {
            return vec![from, goal];
        }
        let corridor = match self.find_path_triangles_custom(start, goal_triangle, filter) {
            Some((triangles, _)) if !triangles.is_empty() => triangles,
            _ => {
                // Direct neighbors still get a straight connection even when
                // the search comes back empty.
                let connection = NavConnection(start as u32, goal_triangle as u32);
                return if self.connections.contains_key(&connection) {
                    vec![from, goal]
                } else {
                    trace!("path query rejected: no corridor between triangles");
                    vec![]
                };
            }
        };
        let portals = self.portals(&corridor);
        if portals.is_empty() {
            return vec![from, goal];
        }
        let pulled = string_pull(from, goal, &portals);
        let mut path: Vec<NavVec2> = Vec::with_capacity(pulled.len());
        for point in pulled {
            if path.last().map(|last| !last.same_as(point)).unwrap_or(true) {
                path.push(point);
            }
        }
        let reached = path.last().map(|last| last.same_as(goal)).unwrap_or_default();
        if reached {
            if let Some(last) = path.last_mut() {
                *last = goal;
            }
        } else {
            path.push(goal);
        }
        debug!(waypoints = path.len(), "path query resolved");
        path
    }

    /// Find shortest corridor of triangles between two flat triangle
    /// indices.
    ///
    /// # Returns
    /// `Some` with corridor triangle indices (start and goal included) and
    /// corridor cost if found or `None` otherwise.
    #[inline]
    pub fn find_path_triangles(&self, from: usize, to: usize) -> Option<(Vec<usize>, Scalar)> {
        self.find_path_triangles_custom(from, to, |_, _, _| true)
    }

    /// Find shortest corridor of triangles between two flat triangle
    /// indices, providing custom filtering function.
    ///
    /// Edge costs are Euclidean distances between triangle centroids scaled
    /// by both area cost factors; the heuristic is the Euclidean distance to
    /// the goal centroid.
    ///
    /// # Arguments
    /// * `from` - start triangle index.
    /// * `to` - goal triangle index.
    /// * `filter` - closure that gives you a connection distance, first
    ///   triangle index and second triangle index.
    pub fn find_path_triangles_custom<F>(
        &self,
        from: usize,
        to: usize,
        mut filter: F,
    ) -> Option<(Vec<usize>, Scalar)>
    where
        F: FnMut(Scalar, usize, usize) -> bool,
    {
        if from >= self.areas.len() || to >= self.areas.len() {
            return None;
        }
        let goal = self.nodes[to];
        let goal_centroid = self.areas[to].centroid;
        astar(
            &self.graph,
            self.nodes[from],
            |node| node == goal,
            |edge| {
                let a = self.nodes_map[&edge.source()];
                let b = self.nodes_map[&edge.target()];
                let weight = *edge.weight();
                if filter(weight, a, b) {
                    weight * self.areas[a].cost * self.areas[b].cost
                } else {
                    Scalar::MAX
                }
            },
            |node| {
                self.areas[self.nodes_map[&node]]
                    .centroid
                    .distance(goal_centroid)
            },
        )
        .map(|(cost, nodes)| {
            let triangles = into_iter!(nodes)
                .map(|node| self.nodes_map[&node])
                .collect::<Vec<_>>();
            (triangles, cost)
        })
    }

    /// Oriented portals along a corridor of flat triangle indices.
    ///
    /// Shared vertices are matched by point equality rather than by index,
    /// as neighboring triangles may not share vertex storage. Pairs without
    /// exactly two shared vertices are dropped.
    fn portals(&self, corridor: &[usize]) -> Vec<NavPortal> {
        let mut portals = Vec::with_capacity(corridor.len().saturating_sub(1));
        for window in corridor.windows(2) {
            let current = &self.areas[window[0]];
            let next = &self.areas[window[1]];
            let mut shared = Vec::with_capacity(2);
            for vertex in &current.vertices {
                if next.vertices.iter().any(|other| vertex.same_as(*other)) {
                    shared.push(*vertex);
                }
            }
            if shared.len() != 2 {
                continue;
            }
            if signed_area2(current.centroid, shared[0], shared[1]) > 0.0 {
                portals.push(NavPortal::new(shared[0], shared[1]));
            } else {
                portals.push(NavPortal::new(shared[1], shared[0]));
            }
        }
        portals
    }

    fn closest_boundary_point(polygon: &NavPolygon, point: NavVec2) -> NavVec2 {
        let mut best = point;
        let mut best_distance = Scalar::MAX;
        for vertex in polygon.outer().points() {
            let distance = point.sqr_distance(*vertex);
            if distance < best_distance {
                best_distance = distance;
                best = *vertex;
            }
        }
        for (a, b) in polygon.outer().edges() {
            let candidate = closest_point_on_segment(point, a, b);
            let distance = point.sqr_distance(candidate);
            if distance < best_distance {
                best_distance = distance;
                best = candidate;
            }
        }
        for hole in polygon.holes() {
            for (a, b) in hole.edges() {
                let candidate = closest_point_on_segment(point, a, b);
                let distance = point.sqr_distance(candidate);
                if distance < best_distance {
                    best_distance = distance;
                    best = candidate;
                }
            }
        }
        best
    }

    fn clip_boundary_point(polygon: &NavPolygon, from: NavVec2, to: NavVec2) -> NavVec2 {
        let mut best: Option<NavVec2> = None;
        let mut best_distance = Scalar::MAX;
        let hole_edges = polygon.holes().iter().flat_map(|hole| hole.edges());
        for (a, b) in polygon.outer().edges().chain(hole_edges) {
            if let Some(hit) = segment_intersection(from, to, a, b) {
                let distance = to.sqr_distance(hit);
                if distance < best_distance {
                    best_distance = distance;
                    best = Some(hit);
                }
            }
        }
        match best {
            Some(hit) => hit,
            None => Self::closest_boundary_point(polygon, to),
        }
    }

    /// Find target point on nav mesh path.
    ///
    /// Projects `point` onto the path, advances it by `offset` along the
    /// path, and returns the resulting point together with its distance from
    /// the path start. Both are clamped to the path's span, so a follower
    /// fed a point behind the start or an offset past the end receives the
    /// nearest path endpoint instead of an extrapolation.
    ///
    /// # Arguments
    /// * `path` - path points.
    /// * `point` - source point.
    /// * `offset` - target point offset from the source on path.
    ///
    /// # Returns
    /// `Some` with point and distance from path start point, or `None` for
    /// paths shorter than two points.
    pub fn path_target_point(
        path: &[NavVec2],
        point: NavVec2,
        offset: Scalar,
    ) -> Option<(NavVec2, Scalar)> {
        let s = Self::project_on_path(path, point, offset);
        Some((Self::point_on_path(path, s)?, s))
    }

    /// Project point on nav mesh path.
    ///
    /// # Arguments
    /// * `path` - path points.
    /// * `point` - source point.
    /// * `offset` - distance added along the path after projecting.
    ///
    /// # Returns
    /// Distance from path start point, clamped to `[0, path length]`.
    pub fn project_on_path(path: &[NavVec2], point: NavVec2, offset: Scalar) -> Scalar {
        let mut traveled = 0.0;
        let mut best_distance = Scalar::MAX;
        let mut best_s = 0.0;
        for pair in path.windows(2) {
            let length = pair[0].distance(pair[1]);
            let t = point.project(pair[0], pair[1]).clamp(0.0, 1.0);
            let closest = NavVec2::unproject(pair[0], pair[1], t);
            let distance = point.sqr_distance(closest);
            if distance < best_distance {
                best_distance = distance;
                best_s = traveled + t * length;
            }
            traveled += length;
        }
        (best_s + offset).clamp(0.0, traveled)
    }

    /// Find point on nav mesh path at given distance from its start.
    ///
    /// Distances past the end yield the final path point.
    ///
    /// # Arguments
    /// * `path` - path points.
    /// * `s` - distance from path start point.
    ///
    /// # Returns
    /// `Some` with point on path, or `None` for paths shorter than two
    /// points.
    pub fn point_on_path(path: &[NavVec2], mut s: Scalar) -> Option<NavVec2> {
        if path.len() < 2 {
            return None;
        }
        for pair in path.windows(2) {
            let length = pair[0].distance(pair[1]);
            if s <= length {
                let t = if length > 0.0 { s / length } else { 0.0 };
                return Some(NavVec2::unproject(pair[0], pair[1], t));
            }
            s -= length;
        }
        path.last().copied()
    }

    /// Calculate path length.
    ///
    /// # Arguments
    /// * `path` - path points.
    ///
    /// # Returns
    /// Path length.
    pub fn path_length(path: &[NavVec2]) -> Scalar {
        path.windows(2)
            .fold(0.0, |total, pair| total + pair[0].distance(pair[1]))
    }
}
