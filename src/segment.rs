use glam::Vec2;
use std::f32::consts::{PI, TAU};

/// Counter-clockwise sweep from `from` to `to`, normalized into [0, 2*PI)
/// For inputs a hair below a full turn f32 rounding can land rem_euclid on
/// TAU itself; that case wraps back to 0 so span tests stay in range
pub fn ccw_delta(from: f32, to: f32) -> f32 {
    let delta = (to - from).rem_euclid(TAU);
    if delta >= TAU {
        0.0
    } else {
        delta
    }
}

/// Difference `to - from` normalized into (-PI, PI]
pub fn signed_delta(from: f32, to: f32) -> f32 {
    let delta = (to - from).rem_euclid(TAU);
    if delta > PI {
        delta - TAU
    } else {
        delta
    }
}

/// One obstacle's silhouette as an arc of the angular range around a light
///
/// Sweeping counter-clockwise from `start_angle` to `stop_angle` (wrapping
/// at PI) traverses the shorter arc, so the segment covers the near face of
/// the obstacle and never the wraparound back side. Cartesian endpoints are
/// light-relative and stored alongside the angles so occlusion and sampling
/// never re-run trig on them.
#[derive(Debug, Clone, PartialEq)]
pub struct PolarSegment {
    /// Id of the obstacle that produced this segment
    pub id: u32,
    /// Polar angle of the first endpoint, in (-PI, PI]
    pub start_angle: f32,
    /// Light-relative endpoint at `start_angle`
    pub start_point: Vec2,
    /// Polar angle of the second endpoint, in (-PI, PI]
    pub stop_angle: f32,
    /// Light-relative endpoint at `stop_angle`
    pub stop_point: Vec2,
    /// Upper-bound distance estimate, orders occlusion tests nearest-first
    pub approx_distance: f32,
}

impl PolarSegment {
    /// Build the canonical segment for a pair of silhouette rays.
    /// Whichever endpoint ordering gives the smaller counter-clockwise
    /// sweep becomes start -> stop; a tie at exactly PI keeps `ray_a` first.
    pub fn from_rays(id: u32, ray_a: Vec2, ray_b: Vec2, approx_distance: f32) -> Self {
        let angle_a = ray_a.y.atan2(ray_a.x);
        let angle_b = ray_b.y.atan2(ray_b.x);
        if ccw_delta(angle_a, angle_b) <= ccw_delta(angle_b, angle_a) {
            PolarSegment {
                id,
                start_angle: angle_a,
                start_point: ray_a,
                stop_angle: angle_b,
                stop_point: ray_b,
                approx_distance,
            }
        } else {
            PolarSegment {
                id,
                start_angle: angle_b,
                start_point: ray_b,
                stop_angle: angle_a,
                stop_point: ray_a,
                approx_distance,
            }
        }
    }

    /// Counter-clockwise angular extent, in [0, PI]
    pub fn span(&self) -> f32 {
        ccw_delta(self.start_angle, self.stop_angle)
    }

    /// Whether `angle` falls inside this segment's arc, endpoints included
    pub fn contains_angle(&self, angle: f32) -> bool {
        ccw_delta(self.start_angle, angle) <= self.span()
    }
}
