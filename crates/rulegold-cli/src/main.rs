mod cli;
mod cmd;
mod error;
mod format;
mod io;

use clap::Parser;

use crate::cli::{Cli, Command};
use crate::error::CliError;

fn main() {
    let cli = Cli::parse();
    if let Err(err) = dispatch(cli) {
        eprintln!("{}", err.message());
        std::process::exit(err.exit_code());
    }
}

/// Routes the parsed CLI onto the matching command implementation.
fn dispatch(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Run {
            manifest,
            fixture_root,
            locale,
        } => {
            let content = io::read_input(&manifest, cli.max_file_size)?;
            cmd::run::run(
                &content,
                fixture_root,
                &locale,
                &cli.format,
                cli.quiet,
                cli.no_color,
                cli.max_file_size,
            )
        }
        Command::List { manifest } => {
            let content = io::read_input(&manifest, cli.max_file_size)?;
            cmd::list::run(&content, &cli.format)
        }
        Command::Version => {
            println!("{}", rulegold_core::version());
            Ok(())
        }
    }
}
