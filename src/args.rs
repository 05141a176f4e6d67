use clap::{crate_version, Parser};
use std::path::PathBuf;

use crate::config::DEFAULT_INPUT_PATH;

#[derive(Parser, Debug)]
#[command(name = "tmj-flagfix")]
#[command(version = crate_version!())]
#[command(about = "Clear tile flip flags from a tiled json map", long_about = None)]
pub struct FixerArgs {
    /// debug to console
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// path to the map that should be fixed (default: rrmap.tmj)
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// path the fixed map is written to (default: rrmap_fixed.tmj)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// path to a json fixer config, arguments take precedence
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
#[command(name = "inspect")]
#[command(version = crate_version!())]
#[command(about = "Report tile flip flags of a tiled json map without changing it", long_about = None)]
pub struct InspectArgs {
    /// path to the map
    #[arg(default_value = DEFAULT_INPUT_PATH)]
    pub map: PathBuf,

    /// max amount of flagged cell positions listed per layer
    #[arg(short = 'n', long, default_value_t = 10)]
    pub max_positions: usize,

    /// debug to console
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}
