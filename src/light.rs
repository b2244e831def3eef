/// Intensity fraction below which a light's contribution is treated as zero
pub const FALLOFF_CUTOFF: f32 = 0.001;

/// Parameters of a single light source
/// The origin is passed alongside per computation rather than stored here,
/// so moving a light never mutates shared state
#[derive(Debug, Clone, PartialEq)]
pub struct Light {
    /// Brightness; falloff is quadratic with distance
    pub intensity: f32,
    /// RGB tint carried through for renderers (the visibility pass ignores it)
    pub color: [f32; 3],
    /// Facing angle in radians, set for cone lights only
    pub angle: Option<f32>,
    /// Full angular width in radians, set for cone lights only
    pub angular_width: Option<f32>,
}

impl Light {
    /// Create an omni-directional light
    pub fn point(intensity: f32, color: [f32; 3]) -> Self {
        Light {
            intensity,
            color,
            angle: None,
            angular_width: None,
        }
    }

    /// Create a cone light facing `angle` and spanning `angular_width`
    pub fn cone(intensity: f32, color: [f32; 3], angle: f32, angular_width: f32) -> Self {
        Light {
            intensity,
            color,
            angle: Some(angle),
            angular_width: Some(angular_width),
        }
    }

    /// Distance at which intensity falls below FALLOFF_CUTOFF
    /// Obstacles beyond this radius cannot cast a visible shadow
    pub fn effective_radius(&self) -> f32 {
        (self.intensity.max(0.0) / FALLOFF_CUTOFF).sqrt()
    }

    /// Facing angle and full width for cone lights, None for omni lights
    /// A light with only one of the two fields set behaves as omni
    pub fn cone_bounds(&self) -> Option<(f32, f32)> {
        match (self.angle, self.angular_width) {
            (Some(angle), Some(width)) => Some((angle, width)),
            _ => None,
        }
    }
}
