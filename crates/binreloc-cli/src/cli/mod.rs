//! CLI for the BinReloc relocation library.

mod commands;

use anyhow::Result;
use binreloc_core::config::{self, RelocConfig};
use binreloc_core::{BinReloc, InstallDir};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::{run_dir, run_origin, run_show};

/// Top-level CLI for BinReloc.
#[derive(Debug, Parser)]
#[command(name = "binreloc")]
#[command(about = "BinReloc: find installation directories relative to a program", long_about = None)]
pub struct Cli {
    /// Origin to use instead of this executable: an absolute path or a URI.
    #[arg(long, global = true, value_name = "PATH|URI")]
    pub origin: Option<String>,

    /// Read configuration from FILE instead of ~/.config/binreloc/config.toml.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the origin, startup directory and every installation directory.
    Show,

    /// Print one installation directory.
    Dir {
        /// One of prefix, bin, sbin, data, locale, lib, libexec, etc.
        name: InstallDir,

        /// Print the location as a URL instead of a filesystem path.
        #[arg(long)]
        url: bool,
    },

    /// Print where the code was loaded from, or why it cannot be told.
    Origin,
}

fn load_config(cli: &Cli) -> Result<RelocConfig> {
    let mut cfg = match &cli.config {
        Some(path) => config::load_from(path)?,
        None => config::load_or_init()?,
    };
    if let Some(origin) = &cli.origin {
        cfg.origin = Some(origin.clone());
    }
    Ok(cfg)
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = load_config(&cli)?;
        tracing::debug!("loaded config: {:?}", cfg);
        let reloc = BinReloc::new(cfg.provider()?);

        match cli.command {
            CliCommand::Show => run_show(&reloc),
            CliCommand::Dir { name, url } => run_dir(&reloc, &cfg.fallbacks, name, url)?,
            CliCommand::Origin => run_origin(&reloc)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
