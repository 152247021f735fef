//! Docpress - configuration core for a documentation-focused static site generator.

#![allow(dead_code)]

mod cli;
mod config;
mod head;
mod logger;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::{SiteConfig, init_config};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = init_config(SiteConfig::load(&cli)?);

    match &cli.command {
        Commands::Init { .. } => cli::init::new_site(&config),
        Commands::Check { .. } => cli::check::run_check(&config),
        Commands::Query { args } => cli::query::run_query(args, &config),
    }
}
