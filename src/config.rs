use serde::{Deserialize, Serialize};
use std::{
    error::Error,
    fs,
    path::{Path, PathBuf},
};

use crate::args::FixerArgs;

pub const DEFAULT_INPUT_PATH: &str = "rrmap.tmj";
pub const DEFAULT_OUTPUT_PATH: &str = "rrmap_fixed.tmj";

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
#[serde(default)]
pub struct FixerConfig {
    /// map that is read, relative paths are resolved against the working directory
    pub input_path: PathBuf,

    /// destination of the fixed map
    pub output_path: PathBuf,
}

impl Default for FixerConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

impl FixerConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<FixerConfig, Box<dyn Error>> {
        let data = fs::read_to_string(path)?;

        Ok(serde_json::from_str(&data)?)
    }

    /// config file (or defaults) with command line overrides applied
    pub fn from_args(args: &FixerArgs) -> Result<FixerConfig, Box<dyn Error>> {
        let mut config = match &args.config {
            Some(path) => FixerConfig::load(path)?,
            None => FixerConfig::default(),
        };

        if let Some(input) = &args.input {
            config.input_path = input.clone();
        }

        if let Some(output) = &args.output {
            config.output_path = output.clone();
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn defaults_to_fixed_paths() {
        let args = FixerArgs::parse_from(["tmj-flagfix"]);
        let config = FixerConfig::from_args(&args).unwrap();

        assert_eq!(config.input_path, PathBuf::from("rrmap.tmj"));
        assert_eq!(config.output_path, PathBuf::from("rrmap_fixed.tmj"));
    }

    #[test]
    fn arguments_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("fixer.json");
        fs::write(&config_path, r#"{"input_path": "maps/kitchen.tmj"}"#).unwrap();

        let args = FixerArgs::parse_from([
            "tmj-flagfix",
            "--config",
            config_path.to_str().unwrap(),
            "--output",
            "out.tmj",
        ]);
        let config = FixerConfig::from_args(&args).unwrap();

        assert_eq!(config.input_path, PathBuf::from("maps/kitchen.tmj"));
        assert_eq!(config.output_path, PathBuf::from("out.tmj"));
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let args = FixerArgs::parse_from(["tmj-flagfix", "--config", "does/not/exist.json"]);
        assert!(FixerConfig::from_args(&args).is_err());
    }
}
