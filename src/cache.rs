use std::collections::HashMap;

use glam::Vec2;

/// Parameters a light's strip was last computed for
#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry {
    pub position: Vec2,
    pub angle: Option<f32>,
    pub angular_width: Option<f32>,
}

/// Per-light memo deciding whether a strip must be rebuilt
///
/// Comparison is exact float equality: any movement at all recomputes, and
/// a light whose parameters jitter every frame simply never hits the cache.
/// Entries are overwritten in place and never evicted.
#[derive(Debug, Default)]
pub struct LightCache {
    entries: HashMap<u32, CacheEntry>,
}

impl LightCache {
    pub fn new() -> Self {
        LightCache {
            entries: HashMap::new(),
        }
    }

    /// True when `light_id` is unseen or any parameter differs from the
    /// recorded entry. A true answer obliges the caller to `record` the
    /// same values once the strip is rebuilt.
    pub fn should_recompute(
        &self,
        light_id: u32,
        position: Vec2,
        angle: Option<f32>,
        angular_width: Option<f32>,
    ) -> bool {
        match self.entries.get(&light_id) {
            Some(entry) => {
                entry.position != position
                    || entry.angle != angle
                    || entry.angular_width != angular_width
            }
            None => true,
        }
    }

    /// Store the parameters a light's strip was just computed for
    pub fn record(
        &mut self,
        light_id: u32,
        position: Vec2,
        angle: Option<f32>,
        angular_width: Option<f32>,
    ) {
        self.entries.insert(
            light_id,
            CacheEntry {
                position,
                angle,
                angular_width,
            },
        );
    }

    /// Drop every entry, forcing each light's next check to recompute
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
