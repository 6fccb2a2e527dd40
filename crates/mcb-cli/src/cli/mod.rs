//! Clap CLI definition: root struct, subcommands, and shared argument types.
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// A CLI argument that is either a filesystem path or the stdin sentinel `"-"`.
///
/// Parsing `"-"` yields [`PathOrStdin::Stdin`]; anything else yields
/// [`PathOrStdin::Path`].
#[derive(Clone, Debug)]
pub enum PathOrStdin {
    /// Read from standard input.
    Stdin,
    /// Read from the given filesystem path.
    Path(PathBuf),
}

impl std::str::FromStr for PathOrStdin {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            Ok(PathOrStdin::Stdin)
        } else {
            Ok(PathOrStdin::Path(PathBuf::from(s)))
        }
    }
}

/// Output format for CLI commands.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Plain text, one record per line (default).
    Human,
    /// A single JSON document on stdout.
    Json,
}

/// All top-level subcommands exposed by the `mcb` binary.
#[derive(Subcommand)]
pub enum Command {
    /// Compute the minimum cycle basis of a graph.
    Basis {
        /// Path to a graph document, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
    },

    /// List the Horton candidate cycles in the order they are examined.
    Candidates {
        /// Path to a graph document, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
        /// Print at most this many candidates.
        #[arg(long, value_name = "N")]
        limit: Option<usize>,
    },

    /// Print vertex, edge and component counts and the cyclomatic number.
    Inspect {
        /// Path to a graph document, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
    },
}

/// Root CLI struct for the `mcb` binary.
///
/// Global flags are marked `global = true` so that clap propagates them to
/// every subcommand.
#[derive(Parser)]
#[command(
    name = "mcb",
    version,
    about = "Minimum cycle basis calculator",
    long_about = "Computes the minimum cycle basis (smallest set of smallest rings)\n\
                  of an undirected graph read from a JSON graph document."
)]
pub struct Cli {
    /// Active subcommand.
    #[command(subcommand)]
    pub command: Command,

    /// Output format: human (default) or json.
    #[arg(long, short = 'f', default_value = "human", global = true)]
    pub format: OutputFormat,

    /// Only log errors to stderr (incompatible with `--verbose`).
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log basis construction progress to stderr (incompatible with `--quiet`).
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Maximum input file size in bytes.
    ///
    /// Can also be set via the `MCB_MAX_FILE_SIZE` environment variable.
    /// The CLI flag takes precedence over the environment variable.
    /// Default: 67108864 (64 MB).
    #[arg(
        long,
        global = true,
        env = "MCB_MAX_FILE_SIZE",
        default_value = "67108864"
    )]
    pub max_file_size: u64,
}
