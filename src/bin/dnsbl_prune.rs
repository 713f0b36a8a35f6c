// Binary entry point. Grounded on original_source/src/main.c's top-level
// flow and the env_logger::init() + process::exit pattern used by the
// faradayio-scrubcsv CLI in the wider example pack.

use std::io::Write;

use clap::Parser;
use dnsbl_prune::cli::Cli;
use dnsbl_prune::pipeline;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref(), cli.quiet);

    let config = match cli.into_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("ERROR: {}", err);
            std::process::exit(1);
        }
    };

    match pipeline::run(&config) {
        Ok(report) => {
            if !config.silent {
                log::info!(
                    "processed {} file(s); {} malformed line(s), {} rejected domain(s)",
                    report.files_processed,
                    report.malformed_lines,
                    report.rejected_domains
                );
            }
        }
        Err(err) => {
            eprintln!("ERROR: {}", err);
            std::process::exit(1);
        }
    }
}

fn init_logging(log_file: Option<&std::path::Path>, quiet: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if quiet {
        builder.filter_level(log::LevelFilter::Warn);
    }
    if let Some(path) = log_file {
        if let Ok(file) = std::fs::OpenOptions::new().create(true).append(true).open(path) {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        } else {
            eprintln!("WARNING: could not open log file {}; logging to stderr", path.display());
        }
    }
    let _ = builder.try_init();
    let _ = std::io::stderr().flush();
}
