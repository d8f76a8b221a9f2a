//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::net::IpAddr;
use std::path::PathBuf;

/// Redirect table for renamed documentation pages
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: redirects.toml, searched upward from cwd)
    #[arg(short = 'C', long, global = true, default_value = "redirects.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Look up the new location of one or more old paths
    #[command(visible_alias = "l")]
    Lookup {
        /// Old paths to look up. Use `-` to read paths from stdin.
        #[arg(required = true, value_name = "PATH")]
        paths: Vec<String>,

        /// Treat inputs as raw request URLs (strip query, decode, trim trailing slash)
        #[arg(short, long)]
        request: bool,

        /// Exit with an error if any path has no redirect
        #[arg(short, long)]
        strict: bool,
    },

    /// Print every redirect in authored order
    #[command(visible_alias = "ls")]
    List {
        /// Output JSON instead of `old -> new` lines
        #[arg(short, long)]
        json: bool,

        /// Pretty-print JSON output
        #[arg(short, long, requires = "json")]
        pretty: bool,
    },

    /// Audit the table for duplicates, self-redirects, cycles and chains
    #[command(visible_alias = "c")]
    Check {
        /// Treat warnings (redirect chains) as errors
        #[arg(short = 'W', long)]
        deny_warnings: bool,
    },

    /// Write redirect pages and a `_redirects` file
    #[command(visible_alias = "b")]
    Build {
        /// Output directory path (relative to the config file)
        #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
        output: Option<PathBuf>,

        /// Clean output directory completely before building
        #[arg(short, long)]
        clean: bool,
    },

    /// Start a development server that answers old paths with redirects
    #[command(visible_alias = "s")]
    Serve {
        /// Network interface to bind (e.g., 127.0.0.1, 0.0.0.0)
        #[arg(short, long)]
        interface: Option<IpAddr>,

        /// Port number to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },
}
