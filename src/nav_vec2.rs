use crate::{Scalar, PARALLEL_TRESHOLD, SAME_TRESHOLD, ZERO_TRESHOLD};
use approx::{AbsDiffEq, RelativeEq};
use serde::{Deserialize, Serialize};
use spade::{PointN, TwoDimensional};
use std::ops::{Add, Div, Mul, Neg, Sub};

/// 2D point / vector in map space.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavVec2 {
    pub x: Scalar,
    pub y: Scalar,
}

impl NavVec2 {
    #[inline]
    pub fn new(x: Scalar, y: Scalar) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn sqr_magnitude(self) -> Scalar {
        self.x * self.x + self.y * self.y
    }

    #[inline]
    pub fn magnitude(self) -> Scalar {
        self.sqr_magnitude().sqrt()
    }

    #[inline]
    pub fn distance(self, other: Self) -> Scalar {
        (other - self).magnitude()
    }

    #[inline]
    pub fn sqr_distance(self, other: Self) -> Scalar {
        (other - self).sqr_magnitude()
    }

    #[inline]
    pub fn dot(self, other: Self) -> Scalar {
        self.x * other.x + self.y * other.y
    }

    /// Z component of the 3D cross product of the two vectors.
    #[inline]
    pub fn cross(self, other: Self) -> Scalar {
        self.x * other.y - self.y * other.x
    }

    pub fn normalize(self) -> Self {
        let len = self.magnitude();
        if len < ZERO_TRESHOLD {
            Self::new(0.0, 0.0)
        } else {
            Self::new(self.x / len, self.y / len)
        }
    }

    /// Tells if two points are equal within [`SAME_TRESHOLD`] per coordinate.
    #[inline]
    pub fn same_as(self, other: Self) -> bool {
        (self.x - other.x).abs() < SAME_TRESHOLD && (self.y - other.y).abs() < SAME_TRESHOLD
    }

    /// Unclamped parametric position of this point projected onto line `from` -> `to`.
    pub fn project(self, from: Self, to: Self) -> Scalar {
        let diff = to - from;
        let denom = diff.sqr_magnitude();
        if denom < ZERO_TRESHOLD {
            0.0
        } else {
            (self - from).dot(diff) / denom
        }
    }

    /// Point at parametric position `t` on line `from` -> `to`.
    #[inline]
    pub fn unproject(from: Self, to: Self, t: Scalar) -> Self {
        from + (to - from) * t
    }
}

impl Add for NavVec2 {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for NavVec2 {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<Scalar> for NavVec2 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Scalar) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<Scalar> for NavVec2 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Scalar) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl Neg for NavVec2 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl From<(Scalar, Scalar)> for NavVec2 {
    fn from(value: (Scalar, Scalar)) -> Self {
        Self::new(value.0, value.1)
    }
}

impl From<[Scalar; 2]> for NavVec2 {
    fn from(value: [Scalar; 2]) -> Self {
        Self::new(value[0], value[1])
    }
}

impl From<NavVec2> for (Scalar, Scalar) {
    fn from(value: NavVec2) -> Self {
        (value.x, value.y)
    }
}

impl PointN for NavVec2 {
    type Scalar = Scalar;

    fn dimensions() -> usize {
        2
    }

    fn from_value(value: Scalar) -> Self {
        Self::new(value, value)
    }

    fn nth(&self, index: usize) -> &Scalar {
        match index {
            0 => &self.x,
            _ => &self.y,
        }
    }

    fn nth_mut(&mut self, index: usize) -> &mut Scalar {
        match index {
            0 => &mut self.x,
            _ => &mut self.y,
        }
    }
}

impl TwoDimensional for NavVec2 {}

impl AbsDiffEq for NavVec2 {
    type Epsilon = Scalar;

    fn default_epsilon() -> Scalar {
        Scalar::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Scalar) -> bool {
        Scalar::abs_diff_eq(&self.x, &other.x, epsilon)
            && Scalar::abs_diff_eq(&self.y, &other.y, epsilon)
    }
}

impl RelativeEq for NavVec2 {
    fn default_max_relative() -> Scalar {
        Scalar::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: Scalar, max_relative: Scalar) -> bool {
        Scalar::relative_eq(&self.x, &other.x, epsilon, max_relative)
            && Scalar::relative_eq(&self.y, &other.y, epsilon, max_relative)
    }
}

#[cfg(feature = "convert")]
impl From<mint::Point2<Scalar>> for NavVec2 {
    fn from(value: mint::Point2<Scalar>) -> Self {
        Self::new(value.x, value.y)
    }
}

#[cfg(feature = "convert")]
impl From<NavVec2> for mint::Point2<Scalar> {
    fn from(value: NavVec2) -> Self {
        Self {
            x: value.x,
            y: value.y,
        }
    }
}

#[cfg(feature = "convert")]
impl From<mint::Vector2<Scalar>> for NavVec2 {
    fn from(value: mint::Vector2<Scalar>) -> Self {
        Self::new(value.x, value.y)
    }
}

#[cfg(feature = "convert")]
impl From<NavVec2> for mint::Vector2<Scalar> {
    fn from(value: NavVec2) -> Self {
        Self {
            x: value.x,
            y: value.y,
        }
    }
}

/// Twice the signed area of triangle `abc`.
///
/// Positive means `c` lies to the left of directed segment `a` -> `b`,
/// negative to the right, near-zero means collinear.
#[inline]
pub fn signed_area2(a: NavVec2, b: NavVec2, c: NavVec2) -> Scalar {
    (b.x - a.x) * (c.y - a.y) - (c.x - a.x) * (b.y - a.y)
}

/// Tells if `p` lies on segment `a` -> `b`.
pub fn point_on_segment(p: NavVec2, a: NavVec2, b: NavVec2) -> bool {
    if signed_area2(a, b, p).abs() >= SAME_TRESHOLD {
        return false;
    }
    let ab = b - a;
    let t = (p - a).dot(ab);
    t >= 0.0 && t <= ab.sqr_magnitude()
}

/// Point on segment `a` -> `b` closest to `p`.
pub fn closest_point_on_segment(p: NavVec2, a: NavVec2, b: NavVec2) -> NavVec2 {
    let ab = b - a;
    let denom = ab.sqr_magnitude();
    if denom < ZERO_TRESHOLD {
        return a;
    }
    let t = ((p - a).dot(ab) / denom).clamp(0.0, 1.0);
    a + ab * t
}

/// Intersection point of segments `p1` -> `q1` and `p2` -> `q2`.
///
/// Parallel and collinear segments report no intersection.
pub fn segment_intersection(
    p1: NavVec2,
    q1: NavVec2,
    p2: NavVec2,
    q2: NavVec2,
) -> Option<NavVec2> {
    let r = q1 - p1;
    let s = q2 - p2;
    let rxs = r.cross(s);
    if rxs.abs() < PARALLEL_TRESHOLD {
        return None;
    }
    let qp = p2 - p1;
    let t = qp.cross(s) / rxs;
    let u = qp.cross(r) / rxs;
    if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
        Some(p1 + r * t)
    } else {
        None
    }
}

/// Barycentric containment test of `p` against a triangle.
///
/// Degenerate triangles (denominator below [`ZERO_TRESHOLD`]) contain
/// nothing. Points on edges and vertices are contained.
pub fn point_in_triangle(p: NavVec2, vertices: &[NavVec2; 3]) -> bool {
    let [v0, v1, v2] = *vertices;
    let denom = (v1.y - v2.y) * (v0.x - v2.x) + (v2.x - v1.x) * (v0.y - v2.y);
    if denom.abs() < ZERO_TRESHOLD {
        return false;
    }
    let a = ((v1.y - v2.y) * (p.x - v2.x) + (v2.x - v1.x) * (p.y - v2.y)) / denom;
    let b = ((v2.y - v0.y) * (p.x - v2.x) + (v0.x - v2.x) * (p.y - v2.y)) / denom;
    let c = 1.0 - a - b;
    a >= -ZERO_TRESHOLD && b >= -ZERO_TRESHOLD && c >= -ZERO_TRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRIANGLE: [NavVec2; 3] = [
        NavVec2 { x: 0.0, y: 0.0 },
        NavVec2 { x: 4.0, y: 0.0 },
        NavVec2 { x: 0.0, y: 4.0 },
    ];

    #[test]
    fn signed_area_orientation() {
        let a = NavVec2::new(0.0, 0.0);
        let b = NavVec2::new(2.0, 0.0);
        assert!(signed_area2(a, b, NavVec2::new(1.0, 1.0)) > 0.0);
        assert!(signed_area2(a, b, NavVec2::new(1.0, -1.0)) < 0.0);
        assert_eq!(signed_area2(a, b, NavVec2::new(3.0, 0.0)), 0.0);
    }

    #[test]
    fn triangle_contains_interior_edges_and_vertices() {
        assert!(point_in_triangle(NavVec2::new(1.0, 1.0), &TRIANGLE));
        assert!(point_in_triangle(NavVec2::new(2.0, 0.0), &TRIANGLE));
        assert!(point_in_triangle(NavVec2::new(2.0, 2.0), &TRIANGLE));
        assert!(point_in_triangle(NavVec2::new(0.0, 4.0), &TRIANGLE));
        assert!(!point_in_triangle(NavVec2::new(3.0, 3.0), &TRIANGLE));
        assert!(!point_in_triangle(NavVec2::new(-0.1, 1.0), &TRIANGLE));
    }

    #[test]
    fn degenerate_triangle_contains_nothing() {
        let line = [
            NavVec2::new(0.0, 0.0),
            NavVec2::new(1.0, 1.0),
            NavVec2::new(2.0, 2.0),
        ];
        assert!(!point_in_triangle(NavVec2::new(1.0, 1.0), &line));
    }

    #[test]
    fn triangle_contains_barycentric_samples() {
        let [v0, v1, v2] = TRIANGLE;
        let steps = 10;
        for i in 1..steps {
            for j in 1..(steps - i) {
                let a = i as Scalar / steps as Scalar;
                let b = j as Scalar / steps as Scalar;
                let c = 1.0 - a - b;
                let p = v0 * a + v1 * b + v2 * c;
                assert!(point_in_triangle(p, &TRIANGLE), "sample {:?}", p);
            }
        }
    }

    #[test]
    fn on_segment_accepts_collinear_in_range() {
        let a = NavVec2::new(0.0, 0.0);
        let b = NavVec2::new(4.0, 4.0);
        assert!(point_on_segment(NavVec2::new(2.0, 2.0), a, b));
        assert!(point_on_segment(a, a, b));
        assert!(point_on_segment(b, a, b));
        assert!(!point_on_segment(NavVec2::new(5.0, 5.0), a, b));
        assert!(!point_on_segment(NavVec2::new(2.0, 2.5), a, b));
    }

    #[test]
    fn closest_point_clamps_to_segment() {
        let a = NavVec2::new(0.0, 0.0);
        let b = NavVec2::new(4.0, 0.0);
        assert_eq!(
            closest_point_on_segment(NavVec2::new(2.0, 3.0), a, b),
            NavVec2::new(2.0, 0.0)
        );
        assert_eq!(closest_point_on_segment(NavVec2::new(-2.0, 3.0), a, b), a);
        assert_eq!(closest_point_on_segment(NavVec2::new(9.0, -1.0), a, b), b);
    }

    #[test]
    fn segment_intersection_crossing_and_parallel() {
        let hit = segment_intersection(
            NavVec2::new(0.0, 0.0),
            NavVec2::new(2.0, 2.0),
            NavVec2::new(0.0, 2.0),
            NavVec2::new(2.0, 0.0),
        )
        .unwrap();
        assert!(hit.same_as(NavVec2::new(1.0, 1.0)));
        assert!(segment_intersection(
            NavVec2::new(0.0, 0.0),
            NavVec2::new(2.0, 0.0),
            NavVec2::new(0.0, 1.0),
            NavVec2::new(2.0, 1.0),
        )
        .is_none());
        assert!(segment_intersection(
            NavVec2::new(0.0, 0.0),
            NavVec2::new(1.0, 0.0),
            NavVec2::new(3.0, -1.0),
            NavVec2::new(3.0, 1.0),
        )
        .is_none());
    }

    #[test]
    fn same_as_uses_point_treshold() {
        let p = NavVec2::new(1.0, 2.0);
        assert!(p.same_as(NavVec2::new(1.0 + 1e-10, 2.0 - 1e-10)));
        assert!(!p.same_as(NavVec2::new(1.0 + 1e-8, 2.0)));
    }
}
