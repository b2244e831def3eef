use anyhow::Context;
use clap::Parser;
use log::{info, LevelFilter};
use simplelog::{ColorChoice, TermLogger, TerminalMode};

use lightcast::config::Config;
use lightcast::{load_scene, LightEngine, NO_OCCLUDER};

/// Compute per-light visibility strips for a 2D scene snapshot
#[derive(Parser)]
#[command(name = "lightcast", version, about)]
struct Args {
    /// Path to the TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: String,

    /// Scene snapshot to load, overriding the configured path
    #[arg(long)]
    scene: Option<String>,

    /// Number of simulated frames, overriding the configured count
    #[arg(long)]
    frames: Option<u32>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    TermLogger::init(
        level,
        simplelog::Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;

    let config = Config::load(&args.config);
    let scene_path = args.scene.unwrap_or_else(|| config.scene.path.clone());
    let scene =
        load_scene(&scene_path).with_context(|| format!("loading scene {}", scene_path))?;
    info!(
        "scene {}: {} obstacles, {} lights",
        scene_path,
        scene.obstacles.len(),
        scene.lights.len()
    );

    let mut engine = LightEngine::new(config.engine.resolution)?;
    let resolution = engine.resolution();
    let frames = args.frames.unwrap_or(config.run.frames);

    let mut strips: Vec<Vec<f32>> = scene
        .lights
        .iter()
        .map(|_| vec![0.0; resolution])
        .collect();

    for frame in 0..frames {
        let mut recomputed = 0;
        for (slot, placed) in scene.lights.iter().enumerate() {
            // cone lights sweep slowly, so later frames exercise both the
            // recompute path and the cached reuse path
            let mut light = placed.light.clone();
            if let Some(facing) = light.angle {
                light.angle = Some(facing + frame as f32 * 0.02);
            }
            let rebuilt = engine.refresh_light(
                placed.id,
                placed.position,
                &light,
                &scene.obstacles,
                &mut strips[slot],
            )?;
            if rebuilt {
                recomputed += 1;
            }
        }
        info!(
            "frame {}: {} of {} lights recomputed",
            frame,
            recomputed,
            scene.lights.len()
        );
    }

    for (slot, placed) in scene.lights.iter().enumerate() {
        summarize(placed.id, &strips[slot]);
        if config.run.strip_preview {
            println!(
                "light {:>3} |{}|",
                placed.id,
                preview(&strips[slot], config.run.preview_width)
            );
        }
    }

    Ok(())
}

/// Log how much of a strip is blocked, open, or outside the cone
fn summarize(light_id: u32, strip: &[f32]) {
    let mut dark = 0usize;
    let mut open = 0usize;
    let mut hits = 0usize;
    let mut nearest = f32::MAX;
    for &distance in strip {
        if distance == 0.0 {
            dark += 1;
        } else if distance >= NO_OCCLUDER {
            open += 1;
        } else {
            hits += 1;
            if distance < nearest {
                nearest = distance;
            }
        }
    }
    if hits > 0 {
        info!(
            "light {}: {} blocked / {} open / {} dark buckets, nearest wall at {:.2}",
            light_id, hits, open, dark, nearest
        );
    } else {
        info!(
            "light {}: {} open / {} dark buckets, nothing blocks it",
            light_id, open, dark
        );
    }
}

/// Render a strip as one text row: '#' where a wall blocks the ray,
/// '.' where the ray escapes, ' ' outside a cone light's window
fn preview(strip: &[f32], width: usize) -> String {
    let width = width.min(strip.len()).max(1);
    (0..width)
        .map(|col| {
            let sample = strip[col * strip.len() / width];
            if sample == 0.0 {
                ' '
            } else if sample >= NO_OCCLUDER {
                '.'
            } else {
                '#'
            }
        })
        .collect()
}
