use std::f32::consts::{PI, TAU};

use glam::Vec2;

use crate::light::Light;
use crate::segment::{signed_delta, PolarSegment};

/// Distance written for buckets no segment blocks, effectively "unbounded"
pub const NO_OCCLUDER: f32 = 1.0e6;

/// Rays closer to parallel than this (by 2D cross product) never intersect
const PARALLEL_EPS: f32 = 1.0e-6;

/// Per-bucket sine/cosine table for one angular resolution
/// Bucket `i` covers the angle -PI + i * (2*PI / resolution)
#[derive(Debug, Clone)]
struct TrigTable {
    resolution: usize,
    sin: Vec<f32>,
    cos: Vec<f32>,
}

impl TrigTable {
    fn new(resolution: usize) -> Self {
        let step = TAU / resolution as f32;
        let mut sin = Vec::with_capacity(resolution);
        let mut cos = Vec::with_capacity(resolution);
        for bucket in 0..resolution {
            let angle = -PI + bucket as f32 * step;
            sin.push(angle.sin());
            cos.push(angle.cos());
        }
        TrigTable {
            resolution,
            sin,
            cos,
        }
    }

    fn bucket_angle(&self, bucket: usize) -> f32 {
        -PI + bucket as f32 * (TAU / self.resolution as f32)
    }
}

/// Casts one ray per angular bucket and records the distance to the nearest
/// blocking segment. Owns its trig table; the table is rebuilt only when
/// the resolution actually changes.
#[derive(Debug, Clone)]
pub struct RadialSampler {
    trig: TrigTable,
}

impl RadialSampler {
    /// Create a sampler with `resolution` buckets over the full circle.
    /// Resolution must be at least 1.
    pub fn new(resolution: usize) -> Self {
        RadialSampler {
            trig: TrigTable::new(resolution),
        }
    }

    pub fn resolution(&self) -> usize {
        self.trig.resolution
    }

    /// Switch to a new resolution; keeps the current table when unchanged
    pub fn set_resolution(&mut self, resolution: usize) {
        if resolution != self.trig.resolution {
            self.trig = TrigTable::new(resolution);
        }
    }

    /// Fill `out` with the nearest occluder distance per bucket
    ///
    /// Buckets outside a cone light's angular window read 0.0 (dark).
    /// Buckets no segment blocks read NO_OCCLUDER. `out` must hold exactly
    /// `resolution()` samples; the engine validates that before calling.
    pub fn sample_into(&self, light: &Light, segments: &[PolarSegment], out: &mut [f32]) {
        debug_assert_eq!(out.len(), self.trig.resolution);
        let cone = light.cone_bounds();
        for bucket in 0..self.trig.resolution {
            let angle = self.trig.bucket_angle(bucket);
            if let Some((facing, width)) = cone {
                if signed_delta(facing, angle).abs() > width * 0.5 {
                    out[bucket] = 0.0;
                    continue;
                }
            }
            let dir = Vec2::new(self.trig.cos[bucket], self.trig.sin[bucket]);
            let mut nearest = NO_OCCLUDER;
            for segment in segments {
                if !segment.contains_angle(angle) {
                    continue;
                }
                if let Some(distance) =
                    ray_line_intersection(dir, segment.start_point, segment.stop_point)
                {
                    if distance < nearest {
                        nearest = distance;
                    }
                }
            }
            out[bucket] = nearest;
        }
    }
}

/// Distance along the unit ray `dir` from the origin to the infinite line
/// through `line_a` -> `line_b`. None when the ray runs parallel to the
/// line or the hit lies at or behind the origin. Callers bound the hit to
/// the chord itself by checking the segment's angular span first.
pub fn ray_line_intersection(dir: Vec2, line_a: Vec2, line_b: Vec2) -> Option<f32> {
    let edge = line_b - line_a;
    let denom = dir.perp_dot(edge);
    if denom.abs() < PARALLEL_EPS {
        return None;
    }
    let t = line_a.perp_dot(edge) / denom;
    if t > 0.0 {
        Some(t)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ray_line_intersection_head_on() {
        let hit = ray_line_intersection(
            Vec2::new(1.0, 0.0),
            Vec2::new(5.0, -10.0),
            Vec2::new(5.0, 10.0),
        );
        assert_eq!(hit, Some(5.0));
    }

    #[test]
    fn test_ray_line_intersection_parallel_misses() {
        // ray along +x, line also running along x at y = 3
        let hit = ray_line_intersection(
            Vec2::new(1.0, 0.0),
            Vec2::new(0.0, 3.0),
            Vec2::new(10.0, 3.0),
        );
        assert_eq!(hit, None);
    }

    #[test]
    fn test_ray_line_intersection_ignores_hits_behind_origin() {
        let hit = ray_line_intersection(
            Vec2::new(1.0, 0.0),
            Vec2::new(-5.0, -10.0),
            Vec2::new(-5.0, 10.0),
        );
        assert_eq!(hit, None);
    }

    #[test]
    fn test_bucket_angles_cover_half_open_circle() {
        let trig = TrigTable::new(8);
        assert_relative_eq!(trig.bucket_angle(0), -PI, epsilon = 1e-6);
        assert_relative_eq!(trig.bucket_angle(4), 0.0, epsilon = 1e-6);
        // the last bucket stops short of +PI, so the seam is counted once
        assert!(trig.bucket_angle(7) < PI);
    }

    #[test]
    fn test_sample_writes_sentinel_when_nothing_blocks() {
        let sampler = RadialSampler::new(16);
        let light = Light::point(100.0, [1.0, 1.0, 1.0]);
        let mut out = vec![0.0; 16];
        sampler.sample_into(&light, &[], &mut out);
        assert!(out.iter().all(|&d| d == NO_OCCLUDER));
    }

    #[test]
    fn test_sample_nearest_of_two_walls() {
        // two vertical walls straight ahead: bucket at angle 0 reads the near one
        let near = PolarSegment::from_rays(0, Vec2::new(4.0, -2.0), Vec2::new(4.0, 2.0), 6.0);
        let far = PolarSegment::from_rays(1, Vec2::new(9.0, -2.0), Vec2::new(9.0, 2.0), 11.0);
        let sampler = RadialSampler::new(8);
        let light = Light::point(1000.0, [1.0, 1.0, 1.0]);
        let mut out = vec![0.0; 8];
        sampler.sample_into(&light, &[far, near], &mut out);
        // bucket 4 points along angle 0
        assert_relative_eq!(out[4], 4.0, epsilon = 1e-4);
    }

    #[test]
    fn test_cone_light_darkens_buckets_outside_window() {
        // cone facing +x, a quarter turn wide: buckets behind and to the
        // sides go dark, the bucket straight ahead keeps its distance
        let light = Light::cone(100.0, [1.0, 1.0, 1.0], 0.0, PI / 2.0);
        let sampler = RadialSampler::new(8);
        let mut out = vec![7.0; 8];
        sampler.sample_into(&light, &[], &mut out);
        assert_eq!(out[4], NO_OCCLUDER); // angle 0, straight ahead
        assert_eq!(out[0], 0.0); // angle -PI, straight behind
        assert_eq!(out[2], 0.0); // angle -PI/2
        assert_eq!(out[6], 0.0); // angle +PI/2
    }

    #[test]
    fn test_set_resolution_rebuilds_only_on_change() {
        let mut sampler = RadialSampler::new(8);
        sampler.set_resolution(8);
        assert_eq!(sampler.resolution(), 8);
        sampler.set_resolution(32);
        assert_eq!(sampler.resolution(), 32);
        assert_eq!(sampler.trig.sin.len(), 32);
    }
}
