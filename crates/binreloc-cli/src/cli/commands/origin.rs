//! `binreloc origin` – the located origin, or the platform error.

use anyhow::{Context, Result};
use binreloc_core::{BinReloc, OriginProvider};

pub fn run_origin<P: OriginProvider>(reloc: &BinReloc<P>) -> Result<()> {
    let origin = reloc
        .provider()
        .locate()
        .context("cannot locate origin")?;
    println!("{}", origin);
    if let Ok(path) = origin.url().to_file_path() {
        println!("{}", path.display());
    }
    Ok(())
}
