use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use fairmap::{logging, render, MapConfig, MapConfigLoader, MapGenerator};

#[derive(Debug, Parser)]
#[command(author, version, about = "Symmetric two-player payout map generator")]
struct Cli {
    /// Path to a map config YAML file (built-in defaults when omitted)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Override map width in cells
    #[arg(long)]
    width: Option<u32>,

    /// Override map height in cells
    #[arg(long)]
    height: Option<u32>,

    /// Override the number of mirrored hill pairs
    #[arg(long)]
    hills: Option<u32>,

    /// Override the hill spread scale
    #[arg(long)]
    hill_size: Option<f64>,

    /// Override pixels per cell in the rendered image
    #[arg(long)]
    cell_size: Option<u32>,

    /// Override the PNG output path (defaults to `<name>.png`)
    #[arg(long)]
    output: Option<PathBuf>,
}

impl Cli {
    fn apply(&self, config: &mut MapConfig) {
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(hills) = self.hills {
            config.num_hills = hills;
        }
        if let Some(hill_size) = self.hill_size {
            config.hill_size = hill_size;
        }
        if let Some(cell_size) = self.cell_size {
            config.render.cell_size = cell_size;
        }
        if let Some(output) = &self.output {
            config.render.output = Some(output.clone());
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => MapConfigLoader::new(".").load(path)?,
        None => MapConfig::new("default", 7),
    };
    cli.apply(&mut config);
    logging::init(&config.logging.level);

    let generator = MapGenerator::from_config(&config)
        .with_context(|| format!("Invalid map config '{}'", config.name))?;
    let map = generator.generate_seeded(config.seed)?;
    let output = config.output_path();
    render::save_png(&map, config.render.cell_size, &output)?;

    let p1 = map.p1_spawn();
    let p2 = map.p2_spawn();
    println!(
        "Map '{}' ({}x{}, seed {}): spawns ({}, {}) / ({}, {}), max payout {:.4}, written to {}",
        config.name,
        map.width(),
        map.height(),
        config.seed,
        p1.x,
        p1.y,
        p2.x,
        p2.y,
        map.payout_rates().max_value(),
        output.display()
    );
    Ok(())
}
