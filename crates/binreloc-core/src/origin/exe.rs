//! Origin of the running executable.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::{Origin, OriginProvider};
use crate::error::LocateError;

/// Upper bound on chained symlinks, matching the kernel's own limit.
const MAX_LINK_HOPS: usize = 40;

/// Locates the executable file of the current process.
///
/// On Linux this follows `/proc/self/exe` to its final target and falls back
/// to the first line of `/proc/self/maps` (useful under tools like Valgrind
/// that break the symlink). Elsewhere it defers to [`std::env::current_exe`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ExecutableOrigin;

impl OriginProvider for ExecutableOrigin {
    fn locate(&self) -> Result<Origin, LocateError> {
        let path = find_exe()?;
        tracing::trace!(path = %path.display(), "located executable");
        check_link_count(&path)?;
        Origin::from_file_path(&path)
    }
}

#[cfg(target_os = "linux")]
fn find_exe() -> Result<PathBuf, LocateError> {
    match resolve_link_chain(Path::new("/proc/self/exe")) {
        Ok(path) => Ok(path),
        Err(err) => {
            tracing::debug!(error = %err, "/proc/self/exe unusable, trying /proc/self/maps");
            let maps = super::module::read_proc_maps()?;
            let path = super::maps::exe_from_maps(&maps)?;
            Ok(PathBuf::from(path))
        }
    }
}

#[cfg(target_os = "freebsd")]
fn find_exe() -> Result<PathBuf, LocateError> {
    match resolve_link_chain(Path::new("/proc/curproc/file")) {
        Ok(path) => Ok(path),
        Err(err) => {
            tracing::debug!(error = %err, "procfs unavailable, using current_exe");
            std::env::current_exe().map_err(LocateError::CurrentExe)
        }
    }
}

#[cfg(not(any(target_os = "linux", target_os = "freebsd")))]
fn find_exe() -> Result<PathBuf, LocateError> {
    std::env::current_exe().map_err(LocateError::CurrentExe)
}

/// Refuses hard-linked executables when running with elevated privileges.
#[cfg(unix)]
fn check_link_count(path: &Path) -> Result<(), LocateError> {
    use std::os::unix::fs::MetadataExt;

    // SAFETY: getuid/geteuid cannot fail and touch no memory.
    let privileged = unsafe { libc::getuid() != libc::geteuid() };
    if !privileged {
        return Ok(());
    }
    let links = fs::metadata(path).map(|meta| meta.nlink()).ok();
    if trusts_link_count(privileged, links) {
        Ok(())
    } else {
        Err(LocateError::InsecureHardLink(path.to_path_buf()))
    }
}

#[cfg(not(unix))]
fn check_link_count(_path: &Path) -> Result<(), LocateError> {
    Ok(())
}

/// A privileged executable is trusted only with a known link count of one.
#[cfg_attr(not(unix), allow(dead_code))]
fn trusts_link_count(privileged: bool, links: Option<u64>) -> bool {
    !privileged || links == Some(1)
}

/// Reads `link` and keeps following while the target is itself a symlink.
///
/// Relative targets are resolved against the directory of the link that
/// named them.
#[cfg_attr(not(any(target_os = "linux", target_os = "freebsd")), allow(dead_code))]
pub(crate) fn resolve_link_chain(link: &Path) -> Result<PathBuf, LocateError> {
    let mut current = read_link_absolute(link)?;
    for _ in 0..MAX_LINK_HOPS {
        let meta = fs::symlink_metadata(&current).map_err(LocateError::ReadLink)?;
        if !meta.file_type().is_symlink() {
            return Ok(current);
        }
        current = read_link_absolute(&current)?;
    }
    Err(LocateError::ReadLink(io::Error::new(
        io::ErrorKind::Other,
        "too many levels of symbolic links",
    )))
}

fn read_link_absolute(link: &Path) -> Result<PathBuf, LocateError> {
    let target = fs::read_link(link).map_err(LocateError::ReadLink)?;
    if target.is_absolute() {
        return Ok(target);
    }
    match link.parent() {
        Some(dir) => Ok(dir.join(target)),
        None => Err(LocateError::NotAbsolute(target)),
    }
}
