//! site-redirects - old documentation paths to their new homes.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use site_redirects::cli::{self, Cli, Commands};
use site_redirects::config::SiteConfig;
use site_redirects::logger;

fn main() -> Result<()> {
    // Setup global Ctrl+C handler (before any blocking operations)
    site_redirects::core::setup_shutdown_handler()?;

    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = SiteConfig::load(&cli)?;

    match &cli.command {
        Commands::Lookup {
            paths,
            request,
            strict,
        } => cli::lookup::run_lookup(&config, paths, *request, *strict),
        Commands::List { json, pretty } => cli::list::run_list(&config, *json, *pretty),
        Commands::Check { deny_warnings } => cli::check::run_check(&config, *deny_warnings),
        Commands::Build { clean, .. } => cli::build::run_build(&config, *clean),
        Commands::Serve { .. } => cli::serve::run_serve(&config),
    }
}
