//! CLI command definitions for the `roster` binary.
//!
//! Uses clap derive macros for argument parsing. Every command except
//! `completions` runs against the loaded dataset.

pub mod character;
pub mod status;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Browse the Futurama character roster or serve it over HTTP.
#[derive(Parser)]
#[command(name = "roster", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Only log errors and hide the server banner.
    #[arg(long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Load characters from this JSON file instead of the bundled dataset.
    #[arg(long, global = true, env = "ROSTER_DATASET")]
    pub dataset: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the REST API server.
    Serve {
        /// Port to listen on (defaults to the configured port).
        #[arg(long, short)]
        port: Option<u16>,

        /// Host to bind to (defaults to the configured host).
        #[arg(long)]
        host: Option<String>,
    },

    /// List every character.
    #[command(alias = "ls")]
    List,

    /// Show one character with sampled quotes.
    Show {
        /// Character slug, e.g. `philip-fry`.
        slug: String,
    },

    /// Print the placeholder avatar SVG for a slug.
    Avatar {
        /// Character slug (need not exist in the dataset).
        slug: String,

        /// Background color as six hex digits.
        #[arg(long)]
        color: Option<String>,
    },

    /// Show dataset and configuration status.
    Status,

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_serve_overrides() {
        let cli = Cli::parse_from(["roster", "serve", "--port", "8080", "--host", "0.0.0.0"]);
        match cli.command {
            Commands::Serve { port, host } => {
                assert_eq!(port, Some(8080));
                assert_eq!(host.as_deref(), Some("0.0.0.0"));
            }
            _ => panic!("expected serve"),
        }
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let err = Cli::try_parse_from(["roster", "list", "--quiet", "-v"])
            .err()
            .unwrap();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn quiet_alone_is_accepted() {
        let cli = Cli::try_parse_from(["roster", "status", "--quiet"]).unwrap();
        assert!(cli.quiet);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn global_flags_follow_subcommand() {
        let cli = Cli::parse_from(["roster", "show", "bender-rodriguez", "--json", "-vv"]);
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Commands::Show { ref slug } if slug == "bender-rodriguez"));
    }
}
