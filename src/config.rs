use log::{info, warn};
use serde::Deserialize;
use std::fs;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub scene: SceneConfig,
    #[serde(default)]
    pub run: RunConfig,
}

#[derive(Debug, Deserialize)]
pub struct EngineConfig {
    #[serde(default = "default_resolution")]
    pub resolution: usize,
}

#[derive(Debug, Deserialize)]
pub struct SceneConfig {
    #[serde(default = "default_scene_path")]
    pub path: String,
}

#[derive(Debug, Deserialize)]
pub struct RunConfig {
    #[serde(default = "default_frames")]
    pub frames: u32,
    #[serde(default = "default_strip_preview")]
    pub strip_preview: bool,
    #[serde(default = "default_preview_width")]
    pub preview_width: usize,
}

// Default values
fn default_resolution() -> usize { 1024 }
fn default_scene_path() -> String { "scenes/dungeon_floor.json".to_string() }
fn default_frames() -> u32 { 2 }
fn default_strip_preview() -> bool { true }
fn default_preview_width() -> usize { 64 }

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            resolution: default_resolution(),
        }
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            path: default_scene_path(),
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            frames: default_frames(),
            strip_preview: default_strip_preview(),
            preview_width: default_preview_width(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            engine: EngineConfig::default(),
            scene: SceneConfig::default(),
            run: RunConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file, or use defaults if the file is
    /// missing or does not parse
    pub fn load(path: &str) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => {
                    info!("loaded configuration from {}", path);
                    config
                }
                Err(e) => {
                    warn!("failed to parse {}: {}", path, e);
                    warn!("using default configuration");
                    Config::default()
                }
            },
            Err(_) => {
                info!("no {} found, using default configuration", path);
                Config::default()
            }
        }
    }
}
