use crate::{signed_area2, NavVec2};
use serde::{Deserialize, Serialize};

/// Edge shared by two consecutive corridor triangles.
///
/// The pair is oriented so that `signed_area2(centroid, left, right)` is
/// positive for the centroid of the earlier triangle of the pair. The funnel
/// side tests below are written against the same convention.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavPortal {
    pub left: NavVec2,
    pub right: NavVec2,
}

impl NavPortal {
    #[inline]
    pub fn new(left: NavVec2, right: NavVec2) -> Self {
        Self { left, right }
    }
}

/// Simple Stupid Funnel string-pulling.
///
/// Walks the portal sequence keeping a funnel cone (apex, left bound, right
/// bound). A portal vertex that narrows the cone tightens its side; one that
/// would cross the opposite bound emits that bound as the next path corner
/// and restarts the scan right after the portal the corner came from. The
/// goal is processed as a zero-width sentinel portal.
///
/// Returns the shortest polyline from `start` to `goal` inside the corridor.
/// An empty portal list yields the straight `[start, goal]` segment.
pub fn string_pull(start: NavVec2, goal: NavVec2, portals: &[NavPortal]) -> Vec<NavVec2> {
    if portals.is_empty() {
        return vec![start, goal];
    }
    let mut path = Vec::with_capacity(portals.len() + 2);
    path.push(start);

    let mut apex = start;
    let mut left = portals[0].left;
    let mut right = portals[0].right;
    let mut left_index = 0;
    let mut right_index = 0;

    let mut i = 1;
    while i <= portals.len() {
        let (portal_left, portal_right) = if i < portals.len() {
            (portals[i].left, portals[i].right)
        } else {
            (goal, goal)
        };

        if signed_area2(apex, right, portal_right) <= 0.0 {
            if apex.same_as(right) || signed_area2(apex, left, portal_right) > 0.0 {
                right = portal_right;
                right_index = i;
            } else {
                // Right bound crossed the left one: the left bound becomes
                // the next corner and the new apex.
                path.push(left);
                apex = left;
                right = apex;
                i = left_index + 1;
                right_index = left_index;
                continue;
            }
        }

        if signed_area2(apex, left, portal_left) >= 0.0 {
            if apex.same_as(left) || signed_area2(apex, right, portal_left) < 0.0 {
                left = portal_left;
                left_index = i;
            } else {
                path.push(right);
                apex = right;
                left = apex;
                i = right_index + 1;
                left_index = right_index;
                continue;
            }
        }

        i += 1;
    }

    if !path
        .last()
        .map(|point| point.same_as(goal))
        .unwrap_or_default()
    {
        path.push(goal);
    }
    path
}
