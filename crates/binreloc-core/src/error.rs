//! Errors raised while asking the platform where the running code lives.
//!
//! Callers of the directory accessors never see these: they collapse to
//! `None`. They are surfaced only through [`crate::origin::OriginProvider::locate`].

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum LocateError {
    /// The executable symlink (`/proc/self/exe`) could not be read.
    #[error("cannot read executable link: {0}")]
    ReadLink(#[source] io::Error),
    /// The standard library could not name the current executable.
    #[error("cannot determine current executable: {0}")]
    CurrentExe(#[source] io::Error),
    /// `/proc/self/maps` could not be opened.
    #[error("cannot open /proc/self/maps: {0}")]
    OpenMaps(#[source] io::Error),
    /// `/proc/self/maps` could not be read.
    #[error("cannot read /proc/self/maps: {0}")]
    ReadMaps(#[source] io::Error),
    /// `/proc/self/maps` did not have the expected format.
    #[error("/proc/self/maps has an unexpected format")]
    InvalidMaps,
    /// No executable mapping contains the requested address.
    #[error("address {0:#x} is not inside any executable mapping")]
    NotMapped(usize),
    /// The platform reported a relative path.
    #[error("origin path is not absolute: {}", .0.display())]
    NotAbsolute(PathBuf),
    /// A set-user-ID executable with extra hard links could be made to
    /// trust a prefix chosen by whoever created the link.
    #[error("refusing to relocate hard-linked set-user-ID executable {}", .0.display())]
    InsecureHardLink(PathBuf),
    /// An origin given as text is not a valid URI.
    #[error("invalid origin URI: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// This platform has no way to answer the query.
    #[error("origin lookup is not supported on this platform")]
    Unsupported,
}
