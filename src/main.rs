use clap::Parser;
use clap::error::ErrorKind;
use std::env;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use ts3scan::args::Args;
use ts3scan::config::Config;
use ts3scan::error::Ts3ScanError;
use ts3scan::options::ScanOptions;
use ts3scan::query::ServerQueryClient;
use ts3scan::report::{format_banner, format_report};
use ts3scan::scan::scan_server;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            let _ = e.print();
            return ExitCode::FAILURE;
        }
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Ts3ScanError> {
    let config = resolve_config(args)?;
    let options = ScanOptions::resolve(args, &config)?;

    print!("{}", format_banner(&options));

    let uri = options.uri()?;
    let mut session = ServerQueryClient::connect(&uri, options.timeout)?;
    let result = scan_server(&mut session)?;

    print!("{}", format_report(&result));
    Ok(())
}

fn resolve_config(args: &Args) -> Result<Config, Ts3ScanError> {
    if args.no_config {
        return Ok(Config::default());
    }

    let path = match &args.config {
        Some(path) => Some(path.clone()),
        None => Config::discover(env::current_dir()),
    };

    match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            Ok(Config::load(&path)?)
        }
        None => Ok(Config::default()),
    }
}
