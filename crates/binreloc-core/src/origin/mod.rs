//! Where the running code was loaded from.
//!
//! An [`Origin`] is an absolute location kept as a URL so that scheme, host,
//! port, query and fragment survive path rewriting. The platform lookup sits
//! behind [`OriginProvider`] so tests can substitute a fixed value.

mod exe;
pub mod maps;
mod module;

pub use exe::ExecutableOrigin;
pub use module::ModuleOrigin;

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use url::Url;

use crate::error::LocateError;

/// Resolved location of an executable, shared object or code directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Origin {
    url: Url,
}

impl Origin {
    pub fn from_url(url: Url) -> Self {
        Self { url }
    }

    /// Parses URI text such as `file:///usr/bin/tool` or
    /// `https://host/usr/bin/app.jar`.
    pub fn parse(text: &str) -> Result<Self, LocateError> {
        Ok(Self::from_url(Url::parse(text)?))
    }

    /// Builds a `file://` origin from an absolute filesystem path.
    ///
    /// A path ending in a separator, or naming an existing directory, becomes a
    /// directory origin whose URL path ends in `/`.
    pub fn from_file_path(path: &Path) -> Result<Self, LocateError> {
        if !path.is_absolute() {
            return Err(LocateError::NotAbsolute(path.to_path_buf()));
        }
        let url = if ends_with_separator(path) || path.is_dir() {
            Url::from_directory_path(path)
        } else {
            Url::from_file_path(path)
        };
        url.map(Self::from_url)
            .map_err(|()| LocateError::NotAbsolute(path.to_path_buf()))
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Percent-encoded path component of the origin URL.
    pub fn path(&self) -> &str {
        self.url.path()
    }
}

impl FromStr for Origin {
    type Err = LocateError;

    /// Accepts either an absolute filesystem path or URI text.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let path = Path::new(s);
        if path.is_absolute() {
            Self::from_file_path(path)
        } else {
            Self::parse(s)
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.url.as_str())
    }
}

fn ends_with_separator(path: &Path) -> bool {
    path.as_os_str()
        .to_string_lossy()
        .ends_with(std::path::is_separator)
}

/// Source of the ambient program identity.
pub trait OriginProvider {
    /// Asks the platform for the origin, reporting why it could not answer.
    fn locate(&self) -> Result<Origin, LocateError>;

    /// Like [`OriginProvider::locate`], but any failure is plain absence.
    fn current(&self) -> Option<Origin> {
        match self.locate() {
            Ok(origin) => Some(origin),
            Err(err) => {
                tracing::debug!(error = %err, "origin unavailable");
                None
            }
        }
    }
}

impl<P: OriginProvider + ?Sized> OriginProvider for &P {
    fn locate(&self) -> Result<Origin, LocateError> {
        (**self).locate()
    }
}

impl<P: OriginProvider + ?Sized> OriginProvider for Box<P> {
    fn locate(&self) -> Result<Origin, LocateError> {
        (**self).locate()
    }
}

/// Provider that always answers with the same origin.
#[derive(Debug, Clone)]
pub struct FixedOrigin(Origin);

impl FixedOrigin {
    pub fn new(origin: Origin) -> Self {
        Self(origin)
    }
}

impl OriginProvider for FixedOrigin {
    fn locate(&self) -> Result<Origin, LocateError> {
        Ok(self.0.clone())
    }
}

/// Provider that never knows the origin, for sandboxed or stripped setups.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOrigin;

impl OriginProvider for NoOrigin {
    fn locate(&self) -> Result<Origin, LocateError> {
        Err(LocateError::Unsupported)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_keeps_uri_fields() {
        let origin = Origin::parse("https://host:9/usr/bin/file.jar?q=1#f").unwrap();
        assert_eq!(origin.path(), "/usr/bin/file.jar");
        assert_eq!(origin.url().port(), Some(9));
        assert_eq!(origin.url().query(), Some("q=1"));
        assert_eq!(origin.url().fragment(), Some("f"));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!(
            Origin::parse("not a uri"),
            Err(LocateError::InvalidUrl(_))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn file_path_becomes_file_url() {
        let origin = Origin::from_file_path(Path::new("/no/such/prefix/bin/tool")).unwrap();
        assert_eq!(origin.url().scheme(), "file");
        assert_eq!(origin.path(), "/no/such/prefix/bin/tool");
    }

    #[cfg(unix)]
    #[test]
    fn trailing_separator_makes_directory_origin() {
        let origin = Origin::from_file_path(Path::new("/no/such/prefix/bin/")).unwrap();
        assert_eq!(origin.path(), "/no/such/prefix/bin/");
    }

    #[test]
    fn relative_path_is_rejected() {
        assert!(matches!(
            Origin::from_file_path(Path::new("bin/tool")),
            Err(LocateError::NotAbsolute(_))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn from_str_accepts_path_or_uri() {
        let from_path: Origin = "/opt/app/bin/app".parse().unwrap();
        let from_uri: Origin = "file:///opt/app/bin/app".parse().unwrap();
        assert_eq!(from_path, from_uri);
    }

    #[test]
    fn fixed_and_absent_providers() {
        let origin = Origin::parse("file:///usr/bin/tool").unwrap();
        let fixed = FixedOrigin::new(origin.clone());
        assert_eq!(fixed.current(), Some(origin));
        assert_eq!(NoOrigin.current(), None);
        assert!(matches!(NoOrigin.locate(), Err(LocateError::Unsupported)));
    }
}
