use std::process::ExitCode;

use clap::Parser;
use log::{error, LevelFilter};
use simple_logger::SimpleLogger;
use tmj_flagfix::{args::FixerArgs, config::FixerConfig, fixer};

fn main() -> ExitCode {
    let args = FixerArgs::parse();

    let level = match args.verbose {
        true => LevelFilter::Debug,
        false => LevelFilter::Info,
    };

    if let Err(err) = SimpleLogger::new().with_level(level).init() {
        eprintln!("Error: failed to initialize logger: {}", err);
        return ExitCode::FAILURE;
    }

    let config = match FixerConfig::from_args(&args) {
        Ok(config) => config,
        Err(err) => {
            error!("failed to load fixer config: {}", err);
            return ExitCode::FAILURE;
        }
    };

    match fixer::run(&config) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
