mod config;

use anyhow::{Context, Result};
use config::Config;
use itertools::Itertools;
use log::{debug, info};
use pixelstruct_common::{serialize_with, Block, BlockMapper, ColorMap};
use std::io::BufReader;
use std::path::Path;

fn load_color_map(path: Option<&Path>) -> Result<ColorMap> {
    match path {
        Some(path) => {
            let f = std::fs::File::open(path)
                .with_context(|| format!("Failed to open colour map {:?} for reading", path))?;
            ColorMap::from_reader(BufReader::new(f))
                .with_context(|| format!("Failed to load colour map {:?}", path))
        }
        None => Ok(ColorMap::builtin()),
    }
}

fn load_token_grid(path: &Path) -> Result<Vec<Vec<String>>> {
    let f = std::fs::File::open(path)
        .with_context(|| format!("Failed to open input grid {:?} for reading", path))?;
    serde_json::from_reader(BufReader::new(f))
        .with_context(|| format!("Failed to parse input grid {:?}", path))
}

fn log_block_usage(blocks: &[Vec<Block>]) {
    let counts = blocks.iter().flatten().counts();
    for (block, count) in counts
        .into_iter()
        .sorted_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.name().cmp(b.0.name())))
    {
        debug!("{:>8} x {}", count, block);
    }
}

fn convert(config: &Config) -> Result<Vec<u8>> {
    let color_map = load_color_map(config.io.color_map_file.as_deref())?;
    info!("Using colour map with {} entries", color_map.len());

    let tokens = load_token_grid(&config.io.input_file)?;
    let mapper = BlockMapper::with_filler(color_map, config.filler.clone());
    let blocks = mapper
        .map(&tokens)
        .context("Error while mapping colours to blocks")?;
    info!(
        "Mapped {}x{} grid",
        blocks.first().map(|row| row.len()).unwrap_or(0),
        blocks.len()
    );
    log_block_usage(&blocks);

    serialize_with(&blocks, &config.structure).context("Error while serializing structure")
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let config = Config::from_args(&config::build_app().get_matches())?;

    let bytes = convert(&config)?;
    std::fs::write(&config.io.output_file, &bytes)
        .with_context(|| format!("Failed to write structure to {:?}", config.io.output_file))?;
    info!("Wrote {} bytes to {:?}", bytes.len(), config.io.output_file);

    Ok(())
}
