use flagfix_core::{cleaner::clean, error::MapError, map::MapDocument, report::FlagReport};
use log::{debug, info};

use crate::config::FixerConfig;

/// reads the configured map, clears all flip flags and writes the result
///
/// Nothing is written if loading fails. Returns the flag report of the input map.
pub fn run(config: &FixerConfig) -> Result<FlagReport, MapError> {
    info!("Reading {}...", config.input_path.display());
    let document = MapDocument::load(&config.input_path)?;

    let report = FlagReport::scan(&document, 0);
    debug!(
        "found {} flagged of {} tiles in {} tile layers",
        report.total_flagged(),
        report.total_tiles(),
        report.layers.len()
    );

    info!("Clearing flip flags...");
    let cleaned = clean(&document);

    info!("Writing to {}...", config.output_path.display());
    cleaned.save(&config.output_path)?;

    info!("Done! Fixed map saved as {}", config.output_path.display());
    info!(
        "Review the file, then rename it back to {} if it looks correct.",
        config.input_path.display()
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flagfix_core::error::ErrorKind;
    use serde_json::{json, Value};
    use std::fs;

    fn config_in(dir: &std::path::Path) -> FixerConfig {
        FixerConfig {
            input_path: dir.join("rrmap.tmj"),
            output_path: dir.join("rrmap_fixed.tmj"),
        }
    }

    #[test]
    fn writes_cleaned_copy() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        let input = json!({
            "layers": [
                {"data": [0x8000_0001u32, 0x4000_0002u32, 0xA000_0003u32], "name": "floor"},
                {"name": "objects"}
            ],
            "width": 3
        });
        fs::write(&config.input_path, input.to_string()).unwrap();

        let report = run(&config).unwrap();
        assert_eq!(report.total_flagged(), 3);

        let written: Value = serde_json::from_str(&fs::read_to_string(&config.output_path).unwrap()).unwrap();
        assert_eq!(
            written,
            json!({"layers": [{"data": [1, 2, 3], "name": "floor"}, {"name": "objects"}], "width": 3})
        );

        // input stays as it was
        let original: Value = serde_json::from_str(&fs::read_to_string(&config.input_path).unwrap()).unwrap();
        assert_eq!(original, input);
    }

    #[test]
    fn parse_error_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        fs::write(&config.input_path, r#"{"width": 10}"#).unwrap();

        let error = run(&config).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Parse);
        assert!(!config.output_path.exists());
    }

    #[test]
    fn missing_input_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());

        let error = run(&config).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Io);
        assert!(!config.output_path.exists());
    }
}
