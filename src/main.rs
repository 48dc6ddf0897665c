use anyhow::Error;
use clap::{CommandFactory, Parser};
use clap::error::ErrorKind;
use std::process;

use pgnfetch_cli::archive::{ArchiveRequest, FetchError};
use pgnfetch_cli::cli::Args;
use pgnfetch_cli::cli::commands::fetch::{self, FetchOptions};
use pgnfetch_cli::output::{self, OutputConfig};
use pgnfetch_cli::ui::Style;

/// Exit status for missing or malformed arguments.
const USAGE_EXIT_CODE: i32 = 2;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = parse_args();

    output::init(OutputConfig::from_flags(args.quiet, args.no_color));

    let options = FetchOptions {
        request: ArchiveRequest::new(args.player, args.year, args.month),
        api_base: args.api_base,
        body: args.body,
    };

    if let Err(err) = fetch::run_fetch(options).await {
        print_error(&err);
        process::exit(exit_code(&err));
    }
}

/// Parses arguments, sending usage errors to stdout with exit status 2.
fn parse_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            _ => {
                let rendered = err.render().to_string();
                print!("{rendered}");
                // clap leaves the usage line off value errors
                if !rendered.contains("Usage:") {
                    println!("\n{}", Args::command().render_usage());
                }
                process::exit(USAGE_EXIT_CODE);
            }
        },
    }
}

fn exit_code(err: &Error) -> i32 {
    if let Some(fetch_err) = err.downcast_ref::<FetchError>() {
        fetch_err.exit_code()
    } else if err.downcast_ref::<std::io::Error>().is_some() {
        exitcode::IOERR
    } else {
        exitcode::SOFTWARE
    }
}

fn print_error(err: &Error) {
    eprintln!("{} {err:#}", Style::error("Error:"));

    if let Some(hint) = err.downcast_ref::<FetchError>().and_then(FetchError::hint) {
        pgnfetch_cli::info!("{}", Style::hint(hint));
    }
}
