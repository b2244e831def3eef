pub mod cache;
pub mod config;
pub mod culling;
pub mod engine;
pub mod light;
pub mod obstacle;
pub mod sampler;
pub mod scene;
pub mod segment;
pub mod silhouette;

pub use cache::LightCache;
pub use engine::{EngineError, LightEngine};
pub use light::Light;
pub use obstacle::{Obstacle, Shape};
pub use sampler::{RadialSampler, NO_OCCLUDER};
pub use scene::{load_scene, Scene, SceneError, SceneLight};
pub use segment::PolarSegment;
