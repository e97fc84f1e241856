//! Clap CLI definition: root struct, subcommands, and shared argument types.
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[cfg(test)]
mod tests;

/// A CLI argument that is either a filesystem path or the stdin sentinel `"-"`.
///
/// Parsing `"-"` yields [`PathOrStdin::Stdin`]; anything else yields
/// [`PathOrStdin::Path`].  This avoids stringly-typed handling of the stdin
/// sentinel throughout the codebase.
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
///
/// `Human` emits optionally colored per-case lines. `Json` emits structured
/// NDJSON: one object per case, then a summary object.
#[derive(Clone, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable, optionally colored output (default).
    Human,
    /// Structured NDJSON output.
    Json,
}

/// All top-level subcommands exposed by the `rulegold` binary.
#[derive(Subcommand)]
pub enum Command {
    /// Run every fixture case in a corpus manifest.
    Run {
        /// Path to the manifest JSON, or `-` for stdin.
        #[arg(value_name = "MANIFEST")]
        manifest: PathOrStdin,

        /// Fixture-root directory; overrides the manifest's own setting.
        #[arg(long, value_name = "DIR")]
        fixture_root: Option<PathBuf>,

        /// Locale diagnostics resolve in (e.g. "en" or "de-AT").
        #[arg(long, default_value = "en")]
        locale: String,
    },

    /// List the cases in a corpus manifest, grouped by origin.
    List {
        /// Path to the manifest JSON, or `-` for stdin.
        #[arg(value_name = "MANIFEST")]
        manifest: PathOrStdin,
    },

    /// Print the rulegold-core library version.
    Version,
}

/// The `rulegold` command-line interface.
#[derive(Parser)]
#[command(
    name = "rulegold",
    about = "Golden-fixture verification harness for configurable source-code checks"
)]
pub struct Cli {
    /// Output format for reports.
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress per-case lines for passing cases.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Disable ANSI colors in human output.
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Maximum manifest/catalog size in bytes.
    #[arg(long, global = true, value_name = "BYTES", default_value_t = 10 * 1024 * 1024)]
    pub max_file_size: u64,

    #[command(subcommand)]
    pub command: Command,
}
