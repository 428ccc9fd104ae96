//! `binreloc dir <NAME>` – one installation directory.

use anyhow::{bail, Result};
use binreloc_core::config::Fallbacks;
use binreloc_core::{BinReloc, InstallDir, OriginProvider};

/// Derived location of `dir`, falling back to the configured path.
pub(super) fn resolve<P: OriginProvider>(
    reloc: &BinReloc<P>,
    fallbacks: &Fallbacks,
    dir: InstallDir,
    as_url: bool,
) -> Option<String> {
    if as_url {
        if let Some(url) = reloc.dir_url(dir) {
            return Some(url.into());
        }
        // A fallback is a plain path; show it as one even in URL mode.
        return fallbacks.get(dir).map(|p| p.display().to_string());
    }
    reloc
        .dir_file_with(dir, fallbacks)
        .map(|p| p.display().to_string())
}

pub fn run_dir<P: OriginProvider>(
    reloc: &BinReloc<P>,
    fallbacks: &Fallbacks,
    dir: InstallDir,
    as_url: bool,
) -> Result<()> {
    match resolve(reloc, fallbacks, dir, as_url) {
        Some(location) => {
            println!("{}", location);
            Ok(())
        }
        None => bail!("{} directory cannot be determined and has no fallback", dir),
    }
}
