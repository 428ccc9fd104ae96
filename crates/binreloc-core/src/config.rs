use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::dirs::InstallDir;
use crate::origin::{ExecutableOrigin, FixedOrigin, Origin, OriginProvider};

/// Paths to use when a directory cannot be derived (optional `[fallbacks]` table).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fallbacks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bin: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sbin: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lib: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub libexec: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub etc: Option<PathBuf>,
}

impl Fallbacks {
    pub fn get(&self, dir: InstallDir) -> Option<&PathBuf> {
        match dir {
            InstallDir::Prefix => self.prefix.as_ref(),
            InstallDir::Bin => self.bin.as_ref(),
            InstallDir::Sbin => self.sbin.as_ref(),
            InstallDir::Data => self.data.as_ref(),
            InstallDir::Locale => self.locale.as_ref(),
            InstallDir::Lib => self.lib.as_ref(),
            InstallDir::LibExec => self.libexec.as_ref(),
            InstallDir::Etc => self.etc.as_ref(),
        }
    }
}

/// Global configuration loaded from `~/.config/binreloc/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelocConfig {
    /// Origin to use instead of the running executable: an absolute path or a URI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    /// Per-directory defaults for when derivation yields nothing.
    #[serde(default)]
    pub fallbacks: Fallbacks,
}

impl RelocConfig {
    /// Provider honoring the `origin` override, else the running executable.
    pub fn provider(&self) -> Result<Box<dyn OriginProvider>> {
        match &self.origin {
            Some(text) => {
                let origin: Origin = text
                    .parse()
                    .with_context(|| format!("invalid origin override {:?}", text))?;
                Ok(Box::new(FixedOrigin::new(origin)))
            }
            None => Ok(Box::new(ExecutableOrigin)),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("binreloc")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<RelocConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = RelocConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit file.
pub fn load_from(path: &Path) -> Result<RelocConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: RelocConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
