use std::cmp::Ordering;
use std::collections::HashSet;
use std::f32::consts::TAU;

use glam::Vec2;

use crate::segment::{ccw_delta, PolarSegment};

/// True when `point` lies on the far side of the infinite line through
/// `line_a` -> `line_b` as seen from the origin (the light). Canonical
/// segment ordering puts the origin on the non-positive side of its own
/// chord, so a positive cross product means "behind".
pub fn is_behind(line_a: Vec2, line_b: Vec2, point: Vec2) -> bool {
    (point - line_a).perp_dot(line_b - line_a) > 0.0
}

/// Whether `inner`'s arc lies entirely within `outer`'s arc
/// Both of inner's bounds are normalized relative to outer's start; a stop
/// that normalizes below its start wrapped past the full turn and is
/// unwrapped before the comparison
fn arc_contains(outer: &PolarSegment, inner: &PolarSegment) -> bool {
    let span = outer.span();
    let inner_start = ccw_delta(outer.start_angle, inner.start_angle);
    let mut inner_stop = ccw_delta(outer.start_angle, inner.stop_angle);
    if inner_stop < inner_start {
        inner_stop += TAU;
    }
    inner_start <= span && inner_stop <= span
}

/// Remove every segment that a nearer segment fully hides
///
/// Segments are sorted by their distance estimate (stable, so equal
/// estimates keep insertion order) and scanned nearest-first. A later
/// segment is hidden when its arc fits inside the nearer one's arc AND both
/// of its endpoints lie behind the nearer one's chord. A segment marked
/// hidden drops out of the scan entirely: it is not reconsidered and it
/// never serves as an occluder itself. Zero-span segments cannot hide
/// anything but may themselves be hidden.
pub fn cull_hidden(mut segments: Vec<PolarSegment>) -> Vec<PolarSegment> {
    segments.sort_by(|a, b| {
        a.approx_distance
            .partial_cmp(&b.approx_distance)
            .unwrap_or(Ordering::Equal)
    });

    let mut hidden: HashSet<u32> = HashSet::new();
    for i in 0..segments.len() {
        let occluder = &segments[i];
        if hidden.contains(&occluder.id) {
            continue;
        }
        if occluder.span() == 0.0 {
            continue;
        }
        for candidate in segments.iter().skip(i + 1) {
            if hidden.contains(&candidate.id) {
                continue;
            }
            if arc_contains(occluder, candidate)
                && is_behind(occluder.start_point, occluder.stop_point, candidate.start_point)
                && is_behind(occluder.start_point, occluder.stop_point, candidate.stop_point)
            {
                hidden.insert(candidate.id);
            }
        }
    }

    segments.retain(|segment| !hidden.contains(&segment.id));
    segments
}
