use clap::Parser;

mod cli;
mod cmd;
mod document;
mod error;
mod io;
mod logging;

pub use cli::{Cli, Command, OutputFormat, PathOrStdin};
use error::CliError;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.quiet, cli.verbose);

    if let Err(e) = run(&cli) {
        tracing::debug!(exit_code = e.exit_code(), "command failed");
        eprintln!("{}", e.message());
        std::process::exit(e.exit_code());
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let format = cli.format;
    match &cli.command {
        Command::Basis { file } => {
            let content = io::read_input(file, cli.max_file_size)?;
            cmd::basis::run(&content, &io::label(file), format)
        }
        Command::Candidates { file, limit } => {
            let content = io::read_input(file, cli.max_file_size)?;
            cmd::candidates::run(&content, &io::label(file), *limit, format)
        }
        Command::Inspect { file } => {
            let content = io::read_input(file, cli.max_file_size)?;
            cmd::inspect::run(&content, &io::label(file), format)
        }
    }
}
