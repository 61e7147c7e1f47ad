//! Bones CLI
//!
//! Resolve skeleton configurations into bone trees without a renderer.

use anyhow::Result;
use bones_core::Size;
use bones_layout::prelude::*;
use bones_layout::tree::node_count;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;

#[derive(Parser)]
#[command(name = "bones")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Bones skeleton placeholder CLI", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a skeleton at a single progress value and print it as JSON
    Render {
        /// Skeleton config file (.toml or .json)
        config: PathBuf,

        /// Container width
        #[arg(long, default_value = "375")]
        width: f32,

        /// Container height
        #[arg(long, default_value = "667")]
        height: f32,

        /// Animation progress in [0, 1]
        #[arg(short, long, default_value = "0")]
        progress: f32,

        /// Pretty-print the output
        #[arg(long)]
        pretty: bool,
    },

    /// Run the animation clock and print one JSON line per frame
    Frames {
        /// Skeleton config file (.toml or .json)
        config: PathBuf,

        /// Container width
        #[arg(long, default_value = "375")]
        width: f32,

        /// Container height
        #[arg(long, default_value = "667")]
        height: f32,

        /// Frames per second
        #[arg(long, default_value = "60")]
        fps: u32,

        /// Number of frames to emit
        #[arg(short, long, default_value = "60")]
        count: u32,
    },

    /// Validate a skeleton config and summarize its layout
    Check {
        /// Skeleton config file (.toml or .json)
        config: PathBuf,

        /// Container width used to resolve fill dimensions
        #[arg(long, default_value = "375")]
        width: f32,

        /// Container height used to resolve fill dimensions
        #[arg(long, default_value = "667")]
        height: f32,
    },
}

#[derive(Serialize)]
struct Frame<'a> {
    frame: u32,
    progress: f32,
    bones: &'a [ResolvedBone],
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging (stderr keeps stdout clean for JSON)
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match cli.command {
        Commands::Render {
            config,
            width,
            height,
            progress,
            pretty,
        } => cmd_render(&config, Size::new(width, height), progress, pretty),

        Commands::Frames {
            config,
            width,
            height,
            fps,
            count,
        } => cmd_frames(&config, Size::new(width, height), fps, count),

        Commands::Check {
            config,
            width,
            height,
        } => cmd_check(&config, Size::new(width, height)),
    }
}

fn skeleton_from(path: &Path, container: Size) -> Result<Skeleton> {
    let config = config::load(path)?;
    let mut skeleton = Skeleton::new(config);
    skeleton.set_container_size(container);
    Ok(skeleton)
}

fn cmd_render(path: &Path, container: Size, progress: f32, pretty: bool) -> Result<()> {
    if !(0.0..=1.0).contains(&progress) {
        warn!("Progress {} outside [0, 1], clamping", progress);
    }

    let skeleton = skeleton_from(path, container)?;
    let bones = skeleton.resolve_at(progress);

    let output = if pretty {
        serde_json::to_string_pretty(&bones)?
    } else {
        serde_json::to_string(&bones)?
    };
    println!("{}", output);

    Ok(())
}

fn cmd_frames(path: &Path, container: Size, fps: u32, count: u32) -> Result<()> {
    if fps == 0 {
        anyhow::bail!("--fps must be greater than zero");
    }

    let mut skeleton = skeleton_from(path, container)?;
    if !skeleton.is_loading() {
        warn!("Config has isLoading = false; no bones will be emitted");
        return Ok(());
    }

    let dt_ms = 1000.0 / fps as f32;
    info!(
        "Emitting {} frames at {} fps ({} ms cycle)",
        count,
        fps,
        skeleton.driver().duration_ms()
    );

    for frame in 0..count {
        if frame > 0 {
            skeleton.tick(dt_ms);
        }
        let progress = skeleton.progress();
        let bones = skeleton.bones().unwrap_or(&[]);
        println!(
            "{}",
            serde_json::to_string(&Frame {
                frame,
                progress,
                bones,
            })?
        );
    }

    Ok(())
}

fn cmd_check(path: &Path, container: Size) -> Result<()> {
    let skeleton = skeleton_from(path, container)?;
    let config = skeleton.config();

    info!("Checking skeleton: {}", path.display());
    println!("Animation: {:?} {:?}", config.animation_type, config.animation_direction);
    println!("Duration:  {} ms", config.duration);
    println!(
        "Colors:    bone {} / highlight {}",
        config.bone_color, config.highlight_color
    );

    let bones = skeleton.resolve_at(0.0);
    if config.layout().is_none() {
        warn!("No explicit layout; bones would be inferred from rendered children");
    }

    let leaves: Vec<&ResolvedBone> = bones.iter().flat_map(|b| b.leaves()).collect();
    let depth = bones.iter().map(|b| b.depth()).max().unwrap_or(0);
    println!(
        "Bones:     {} nodes, {} leaves, depth {}",
        node_count(&bones),
        leaves.len(),
        depth
    );

    let empty: Vec<String> = leaves
        .iter()
        .filter(|b| b.size.width <= 0.0 || b.size.height <= 0.0)
        .map(|b| b.key.to_string())
        .collect();
    if empty.is_empty() {
        println!("All bones have a visible area");
    } else {
        warn!("{} bone(s) resolve to zero area: {}", empty.len(), empty.join(", "));
    }

    Ok(())
}
