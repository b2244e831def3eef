use glam::Vec2;
use log::{debug, trace};
use thiserror::Error;

use crate::cache::LightCache;
use crate::culling::cull_hidden;
use crate::light::Light;
use crate::obstacle::Obstacle;
use crate::sampler::RadialSampler;
use crate::segment::PolarSegment;
use crate::silhouette;

/// Hard, caller-visible failures of the visibility pipeline
/// Degenerate geometry is not an error, it just contributes nothing
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("angular resolution must be at least 1, got {resolution}")]
    InvalidResolution { resolution: usize },
    #[error("output buffer holds {actual} samples but the resolution is {expected}")]
    BufferLength { expected: usize, actual: usize },
}

/// Owns the radial sampler and the per-light cache and runs the pipeline:
/// distance pre-filter, silhouette projection, segment construction,
/// occlusion culling, radial sampling into a caller-owned strip.
pub struct LightEngine {
    sampler: RadialSampler,
    cache: LightCache,
}

impl LightEngine {
    /// Create an engine producing strips of `resolution` samples
    pub fn new(resolution: usize) -> Result<Self, EngineError> {
        if resolution == 0 {
            return Err(EngineError::InvalidResolution { resolution });
        }
        Ok(LightEngine {
            sampler: RadialSampler::new(resolution),
            cache: LightCache::new(),
        })
    }

    pub fn resolution(&self) -> usize {
        self.sampler.resolution()
    }

    /// Change the strip resolution. Rebuilds the trig table and clears the
    /// cache: strips delivered at the old resolution have the wrong length,
    /// so every light must recompute.
    pub fn set_resolution(&mut self, resolution: usize) -> Result<(), EngineError> {
        if resolution == 0 {
            return Err(EngineError::InvalidResolution { resolution });
        }
        if resolution != self.sampler.resolution() {
            self.sampler.set_resolution(resolution);
            self.cache.clear();
        }
        Ok(())
    }

    /// Recompute `light`'s strip into `out` unless its parameters match the
    /// cached ones. Ok(true) means the strip was rebuilt; Ok(false) means
    /// the cache hit and `out` was left untouched, so the previously
    /// delivered strip is still valid.
    pub fn refresh_light(
        &mut self,
        light_id: u32,
        origin: Vec2,
        light: &Light,
        obstacles: &[Obstacle],
        out: &mut [f32],
    ) -> Result<bool, EngineError> {
        self.check_buffer(out)?;
        if !self
            .cache
            .should_recompute(light_id, origin, light.angle, light.angular_width)
        {
            trace!("light {} unchanged, strip reused", light_id);
            return Ok(false);
        }
        self.compute_into(origin, light, obstacles, out)?;
        self.cache
            .record(light_id, origin, light.angle, light.angular_width);
        Ok(true)
    }

    /// Run the pipeline unconditionally, bypassing the cache
    pub fn compute_into(
        &self,
        origin: Vec2,
        light: &Light,
        obstacles: &[Obstacle],
        out: &mut [f32],
    ) -> Result<(), EngineError> {
        self.check_buffer(out)?;
        let segments = visible_segments(origin, light, obstacles);
        debug!(
            "sampling {} segments from {} obstacles",
            segments.len(),
            obstacles.len()
        );
        self.sampler.sample_into(light, &segments, out);
        Ok(())
    }

    /// Number of lights with a recorded cache entry
    pub fn cached_lights(&self) -> usize {
        self.cache.len()
    }

    fn check_buffer(&self, out: &[f32]) -> Result<(), EngineError> {
        let expected = self.sampler.resolution();
        if out.len() != expected {
            return Err(EngineError::BufferLength {
                expected,
                actual: out.len(),
            });
        }
        Ok(())
    }
}

/// Project every in-range obstacle and cull the segments nearer ones fully
/// hide. Out-of-range and degenerate obstacles contribute nothing.
fn visible_segments(origin: Vec2, light: &Light, obstacles: &[Obstacle]) -> Vec<PolarSegment> {
    let range = light.effective_radius();
    let mut segments = Vec::new();
    for obstacle in obstacles {
        if !obstacle.within_range(origin, range) {
            continue;
        }
        if let Some((ray_a, ray_b)) = silhouette::project(origin, obstacle) {
            segments.push(PolarSegment::from_rays(
                obstacle.id,
                ray_a,
                ray_b,
                obstacle.approx_distance(origin),
            ));
        }
    }
    cull_hidden(segments)
}
