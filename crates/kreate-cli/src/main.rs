//! Kreate CLI entry point.

use std::process;

use clap::Parser;
use log::{debug, info};

use kreate_cli::{Args, error_adapter::to_reportables};

fn main() {
    miette::set_panic_hook();

    let args = Args::parse();

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(args.log_level)
        .init();

    debug!(args:?; "Parsed arguments");

    if let Err(err) = kreate_cli::run(&args) {
        let reporter = miette::GraphicalReportHandler::new();

        // Reports go to stderr whatever the log level
        for reportable in to_reportables(&err) {
            let mut report = String::new();
            if reporter.render_report(&mut report, reportable.as_ref()).is_err() {
                report = reportable.to_string();
            }
            eprintln!("{report}");
        }

        process::exit(1);
    }

    info!("Completed successfully");
}
