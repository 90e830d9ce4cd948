//! Command line configuration for the converter.
//!

use anyhow::{anyhow, ensure, Context, Result};
use clap::{App, Arg};
use pixelstruct_common::block_mapper::DEFAULT_FILLER_BLOCK;
use pixelstruct_common::structure::DEFAULT_DATA_VERSION;
use pixelstruct_common::{Block, StructureOptions};
use std::path::PathBuf;

/// Configuration variables related to input/output operations
#[derive(Clone, Debug)]
pub struct IOConfig {
    /// Input file name (a JSON array of rows of colour tokens)
    pub input_file: PathBuf,
    /// Output file name (a gzipped structure file)
    pub output_file: PathBuf,
    /// Colour table to use instead of the builtin one
    pub color_map_file: Option<PathBuf>,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub io: IOConfig,
    /// Block placed for tokens with no colour table entry
    pub filler: Block,
    pub structure: StructureOptions,
}

pub fn build_app() -> App<'static> {
    App::new("pixelstruct-convert")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert a grid of colours into a Minecraft structure file")
        .arg(
            Arg::with_name("COLOR_MAP")
                .long("color-map")
                .value_name("COLOR_MAP")
                .allow_invalid_utf8(true)
                .help("JSON colour table mapping #RRGGBB keys to block states"),
        )
        .arg(
            Arg::with_name("FILLER")
                .long("filler")
                .value_name("BLOCK")
                .default_value(DEFAULT_FILLER_BLOCK)
                .help("Block used for colours missing from the colour table"),
        )
        .arg(
            Arg::with_name("DATA_VERSION")
                .long("data-version")
                .value_name("DATA_VERSION")
                .help("DataVersion stamped into the structure file"),
        )
        .arg(
            Arg::with_name("INPUT")
                .allow_invalid_utf8(true)
                .help("Input grid, as a JSON array of rows of #RRGGBB strings")
                .index(1)
                .required(true),
        )
        .arg(
            Arg::with_name("OUTPUT")
                .allow_invalid_utf8(true)
                .help("Output structure file location")
                .index(2)
                .required(true),
        )
}

impl Config {
    /// Construct a configuration from the clap argument matches
    pub fn from_args(matches: &clap::ArgMatches) -> Result<Self> {
        let input_file = matches
            .value_of_os("INPUT")
            .ok_or_else(|| anyhow!("Missing INPUT argument"))?;
        let output_file = matches
            .value_of_os("OUTPUT")
            .ok_or_else(|| anyhow!("Missing OUTPUT argument"))?;

        let filler = Block::new(matches.value_of("FILLER").unwrap_or(DEFAULT_FILLER_BLOCK));
        ensure!(
            filler.has_namespaced_name(),
            "Filler block {:?} is not a namespaced identifier",
            filler.name()
        );

        let data_version = match matches.value_of("DATA_VERSION") {
            Some(v) => v
                .parse()
                .with_context(|| anyhow!("Parsing data version {:?}", v))?,
            None => DEFAULT_DATA_VERSION,
        };

        Ok(Config {
            io: IOConfig {
                input_file: PathBuf::from(input_file),
                output_file: PathBuf::from(output_file),
                color_map_file: matches.value_of_os("COLOR_MAP").map(PathBuf::from),
            },
            filler,
            structure: StructureOptions { data_version },
        })
    }
}
