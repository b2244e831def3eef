use std::fs;
use std::path::Path;

use glam::Vec2;
use log::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::light::Light;
use crate::obstacle::{Obstacle, Shape};

/// Failures while loading a scene snapshot
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("unsupported shape kind \"{kind}\"")]
    UnsupportedShapeKind { kind: String },
    #[error("failed to read scene file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse scene snapshot: {0}")]
    Json(#[from] serde_json::Error),
}

/// On-disk form of a shape: an open string tag plus whichever dimension
/// fields that kind uses. Unknown kinds are reported and skipped at load
/// time, so the engine itself only ever sees the closed Shape enum.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawShape {
    pub kind: String,
    #[serde(default)]
    pub width: f32,
    #[serde(default)]
    pub height: f32,
    #[serde(default)]
    pub radius: f32,
}

impl TryFrom<&RawShape> for Shape {
    type Error = SceneError;

    fn try_from(raw: &RawShape) -> Result<Self, Self::Error> {
        match raw.kind.as_str() {
            "rectangle" => Ok(Shape::Rectangle {
                width: raw.width,
                height: raw.height,
            }),
            "circle" => Ok(Shape::Circle { radius: raw.radius }),
            _ => Err(SceneError::UnsupportedShapeKind {
                kind: raw.kind.clone(),
            }),
        }
    }
}

/// On-disk form of an obstacle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawObstacle {
    pub id: u32,
    pub position: Vec2,
    pub shape: RawShape,
}

/// On-disk form of a placed light
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawLight {
    pub id: u32,
    pub position: Vec2,
    pub intensity: f32,
    #[serde(default = "default_color")]
    pub color: [f32; 3],
    #[serde(default)]
    pub angle: Option<f32>,
    #[serde(default)]
    pub angular_width: Option<f32>,
}

fn default_color() -> [f32; 3] {
    [1.0, 1.0, 1.0]
}

/// On-disk form of a whole scene
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawScene {
    #[serde(default)]
    pub obstacles: Vec<RawObstacle>,
    #[serde(default)]
    pub lights: Vec<RawLight>,
}

/// A light instance placed in a scene
#[derive(Debug, Clone, PartialEq)]
pub struct SceneLight {
    pub id: u32,
    pub position: Vec2,
    pub light: Light,
}

/// Typed scene: every obstacle carries a supported shape
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub obstacles: Vec<Obstacle>,
    pub lights: Vec<SceneLight>,
}

impl Scene {
    /// Convert a raw snapshot, skipping obstacles whose shape kind is not
    /// supported. Each skip is logged; the rest of the scene stays intact.
    pub fn from_raw(raw: RawScene) -> Self {
        let mut obstacles = Vec::with_capacity(raw.obstacles.len());
        for raw_obstacle in &raw.obstacles {
            match Shape::try_from(&raw_obstacle.shape) {
                Ok(shape) => {
                    obstacles.push(Obstacle::new(raw_obstacle.id, raw_obstacle.position, shape))
                }
                Err(error) => warn!("skipping obstacle {}: {}", raw_obstacle.id, error),
            }
        }

        let lights = raw
            .lights
            .iter()
            .map(|raw_light| SceneLight {
                id: raw_light.id,
                position: raw_light.position,
                light: Light {
                    intensity: raw_light.intensity,
                    color: raw_light.color,
                    angle: raw_light.angle,
                    angular_width: raw_light.angular_width,
                },
            })
            .collect();

        Scene { obstacles, lights }
    }

    /// Parse a snapshot from JSON text
    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        let raw: RawScene = serde_json::from_str(json)?;
        Ok(Scene::from_raw(raw))
    }
}

/// Load a scene snapshot from a JSON file
pub fn load_scene<P: AsRef<Path>>(path: P) -> Result<Scene, SceneError> {
    let json = fs::read_to_string(path)?;
    Scene::from_json(&json)
}
