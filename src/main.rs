mod cli;
mod logging;

use std::process::ExitCode;

use clap::Parser;

use tilemap_editor::config::{self, AppConfig};
use tilemap_editor::paths;

fn main() -> ExitCode {
    let args = cli::CliArgs::parse();

    let log_file = args
        .log_file
        .clone()
        .or_else(|| if args.log { paths::default_log_file() } else { None });
    // Flushes the file log on drop
    let _log_guard = logging::init(args.verbose, log_file.as_deref());

    let mut config = if args.no_config {
        AppConfig::default()
    } else {
        let loaded = match &args.config {
            Some(path) => config::load_config_from(path),
            None => config::load_config(),
        };
        if let Some(reason) = &loaded.reset_reason {
            eprintln!("warning: {}; using default settings", reason);
        }
        loaded.config
    };

    cli::run(args, &mut config)
}
