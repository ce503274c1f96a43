//! Diamond - a static site generator for annotated markdown vaults.

mod build;
mod cli;
mod config;
mod content;
mod error;
mod logger;
mod output;
mod render;
mod site;
mod utils;

use anyhow::Result;
use build::build_site;
use clap::Parser;
use cli::{Cli, Commands};
use config::SiteConfig;
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let root = cli.root.as_deref().unwrap_or(Path::new("./"));

    match cli.command {
        Commands::Build => {
            // Config is validated before any output directory mutation.
            let config = SiteConfig::load(root)?;
            build_site(&config, root)
        }
    }
}
