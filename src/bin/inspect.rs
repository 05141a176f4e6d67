use std::process::ExitCode;

use clap::Parser;
use flagfix_core::{map::MapDocument, report::FlagReport};
use itertools::Itertools;
use log::{error, info, LevelFilter};
use simple_logger::SimpleLogger;
use tmj_flagfix::args::InspectArgs;

fn main() -> ExitCode {
    let args = InspectArgs::parse();

    let level = match args.verbose {
        true => LevelFilter::Debug,
        false => LevelFilter::Info,
    };

    if let Err(err) = SimpleLogger::new().with_level(level).init() {
        eprintln!("Error: failed to initialize logger: {}", err);
        return ExitCode::FAILURE;
    }

    let document = match MapDocument::load(&args.map) {
        Ok(document) => document,
        Err(err) => {
            error!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    let report = FlagReport::scan(&document, args.max_positions);

    if report.is_clean() {
        info!("no flip flags found in {}", args.map.display());
    } else {
        let flagged_layers = report
            .layers
            .iter()
            .filter(|layer| layer.flagged_tiles > 0)
            .map(|layer| match &layer.name {
                Some(name) => format!("{} ({})", name, layer.flagged_tiles),
                None => format!("#{} ({})", layer.layer, layer.flagged_tiles),
            })
            .join(", ");

        info!(
            "{} of {} tiles carry flip flags: {}",
            report.total_flagged(),
            report.total_tiles(),
            flagged_layers
        );
    }

    match serde_json::to_string_pretty(&report) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("failed to serialize report: {}", err);
            ExitCode::FAILURE
        }
    }
}
