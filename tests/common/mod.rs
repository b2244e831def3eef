use std::error::Error;
use std::path::{Path, PathBuf};

use glam::Vec2;
use lightcast::scene::SceneLight;
use lightcast::{load_scene, LightEngine, Obstacle, Scene};

/// Locate a fixture under test_data/scenes
pub fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("test_data")
        .join("scenes")
        .join(name)
}

/// Load a scene fixture by file name
pub fn load_fixture(name: &str) -> Result<Scene, Box<dyn Error>> {
    Ok(load_scene(fixture_path(name))?)
}

/// Compute one light's strip for a scene at the given resolution
pub fn strip_for(scene: &Scene, light_index: usize, resolution: usize) -> Vec<f32> {
    let engine = LightEngine::new(resolution).expect("valid resolution");
    let placed = &scene.lights[light_index];
    let mut out = vec![0.0; resolution];
    engine
        .compute_into(placed.position, &placed.light, &scene.obstacles, &mut out)
        .expect("buffer sized to resolution");
    out
}

/// Mirror a scene across the x axis (y -> -y), lights included.
/// The mirrored scene must produce mirrored strips.
pub fn mirror_scene(scene: &Scene) -> Scene {
    let obstacles = scene
        .obstacles
        .iter()
        .map(|obstacle| {
            Obstacle::new(
                obstacle.id,
                Vec2::new(obstacle.position.x, -obstacle.position.y),
                obstacle.shape,
            )
        })
        .collect();

    let lights = scene
        .lights
        .iter()
        .map(|placed| {
            let mut light = placed.light.clone();
            light.angle = light.angle.map(|facing| -facing);
            SceneLight {
                id: placed.id,
                position: Vec2::new(placed.position.x, -placed.position.y),
                light,
            }
        })
        .collect();

    Scene { obstacles, lights }
}

/// Index of the bucket whose angle is the mirror of `bucket`'s angle.
/// Bucket 0 sits on the seam at -PI and is its own mirror.
pub fn mirror_bucket(bucket: usize, resolution: usize) -> usize {
    (resolution - bucket) % resolution
}
