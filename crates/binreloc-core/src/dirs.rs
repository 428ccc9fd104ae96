//! Well-known installation directories relative to the origin.
//!
//! [`BinReloc`] asks its [`OriginProvider`] for the origin on every call and
//! derives the requested directory from it. Nothing is cached, so two calls
//! with the same provider always agree.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use url::Url;

use crate::config::Fallbacks;
use crate::origin::{ExecutableOrigin, ModuleOrigin, Origin, OriginProvider};
use crate::reloc;

/// A standard subdirectory of the installation prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InstallDir {
    Prefix,
    Bin,
    Sbin,
    Data,
    Locale,
    Lib,
    LibExec,
    Etc,
}

impl InstallDir {
    pub const ALL: [InstallDir; 8] = [
        InstallDir::Prefix,
        InstallDir::Bin,
        InstallDir::Sbin,
        InstallDir::Data,
        InstallDir::Locale,
        InstallDir::Lib,
        InstallDir::LibExec,
        InstallDir::Etc,
    ];

    /// Path relative to the prefix.
    pub fn suffix(self) -> &'static str {
        match self {
            InstallDir::Prefix => "",
            InstallDir::Bin => "bin",
            InstallDir::Sbin => "sbin",
            InstallDir::Data => "share",
            InstallDir::Locale => "share/locale",
            InstallDir::Lib => "lib",
            InstallDir::LibExec => "libexec",
            InstallDir::Etc => "etc",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            InstallDir::Prefix => "prefix",
            InstallDir::Bin => "bin",
            InstallDir::Sbin => "sbin",
            InstallDir::Data => "data",
            InstallDir::Locale => "locale",
            InstallDir::Lib => "lib",
            InstallDir::LibExec => "libexec",
            InstallDir::Etc => "etc",
        }
    }
}

impl fmt::Display for InstallDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for an unknown directory name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown directory {0:?}; expected one of prefix, bin, sbin, data, locale, lib, libexec, etc")]
pub struct UnknownInstallDir(pub String);

impl FromStr for InstallDir {
    type Err = UnknownInstallDir;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InstallDir::ALL
            .into_iter()
            .find(|dir| dir.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownInstallDir(s.to_string()))
    }
}

/// Locates installation directories relative to where the code was loaded.
///
/// For a program at `/usr/bin/app`, the prefix is `/usr/`, the data dir is
/// `/usr/share` and so on. Every accessor returns `None` when the origin is
/// unavailable or too short to hold a `prefix/bin/program` layout.
#[derive(Debug, Clone)]
pub struct BinReloc<P = ExecutableOrigin> {
    provider: P,
}

impl BinReloc<ExecutableOrigin> {
    /// Relative to the running executable.
    pub fn for_executable() -> Self {
        Self::new(ExecutableOrigin)
    }
}

impl BinReloc<ModuleOrigin> {
    /// Relative to the shared object holding the code of `f`.
    pub fn for_module(f: *const ()) -> Self {
        Self::new(ModuleOrigin::of_fn(f))
    }
}

impl<P: OriginProvider> BinReloc<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Where the code was loaded from, or `None` when the platform cannot say.
    pub fn origin(&self) -> Option<Origin> {
        self.provider.current()
    }

    pub fn startup_dir_url(&self) -> Option<Url> {
        reloc::startup_dir_url(&self.origin()?)
    }

    pub fn startup_dir_file(&self) -> Option<PathBuf> {
        reloc::startup_dir_file(&self.origin()?)
    }

    pub fn dir_url(&self, dir: InstallDir) -> Option<Url> {
        reloc::resolve_subpath(&self.origin()?, dir.suffix())
    }

    pub fn dir_file(&self, dir: InstallDir) -> Option<PathBuf> {
        reloc::resolve_subpath_file(&self.origin()?, dir.suffix())
    }

    /// Derived path, or `default` when it cannot be derived.
    pub fn dir_file_or(&self, dir: InstallDir, default: impl Into<PathBuf>) -> PathBuf {
        self.dir_file(dir).unwrap_or_else(|| default.into())
    }

    /// Derived path, or the configured fallback for `dir`.
    pub fn dir_file_with(&self, dir: InstallDir, fallbacks: &Fallbacks) -> Option<PathBuf> {
        self.dir_file(dir).or_else(|| fallbacks.get(dir).cloned())
    }

    /// Installation prefix, `/usr/` for `/usr/bin/app`.
    pub fn prefix_url(&self) -> Option<Url> {
        self.dir_url(InstallDir::Prefix)
    }

    pub fn prefix_file(&self) -> Option<PathBuf> {
        self.dir_file(InstallDir::Prefix)
    }

    pub fn bin_dir_url(&self) -> Option<Url> {
        self.dir_url(InstallDir::Bin)
    }

    pub fn bin_dir_file(&self) -> Option<PathBuf> {
        self.dir_file(InstallDir::Bin)
    }

    pub fn sbin_dir_url(&self) -> Option<Url> {
        self.dir_url(InstallDir::Sbin)
    }

    pub fn sbin_dir_file(&self) -> Option<PathBuf> {
        self.dir_file(InstallDir::Sbin)
    }

    /// `prefix/share`.
    pub fn data_dir_url(&self) -> Option<Url> {
        self.dir_url(InstallDir::Data)
    }

    pub fn data_dir_file(&self) -> Option<PathBuf> {
        self.dir_file(InstallDir::Data)
    }

    /// `prefix/share/locale`, where translation catalogs live.
    pub fn locale_dir_url(&self) -> Option<Url> {
        self.dir_url(InstallDir::Locale)
    }

    pub fn locale_dir_file(&self) -> Option<PathBuf> {
        self.dir_file(InstallDir::Locale)
    }

    pub fn lib_dir_url(&self) -> Option<Url> {
        self.dir_url(InstallDir::Lib)
    }

    pub fn lib_dir_file(&self) -> Option<PathBuf> {
        self.dir_file(InstallDir::Lib)
    }

    pub fn libexec_dir_url(&self) -> Option<Url> {
        self.dir_url(InstallDir::LibExec)
    }

    pub fn libexec_dir_file(&self) -> Option<PathBuf> {
        self.dir_file(InstallDir::LibExec)
    }

    pub fn etc_dir_url(&self) -> Option<Url> {
        self.dir_url(InstallDir::Etc)
    }

    pub fn etc_dir_file(&self) -> Option<PathBuf> {
        self.dir_file(InstallDir::Etc)
    }
}
