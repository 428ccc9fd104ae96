//! Rebuild locations relative to an origin, as URLs or as native paths.
//!
//! Both forms share one path rewrite: only the path component of the origin
//! changes, while scheme, user info, host, port, query and fragment are carried
//! over verbatim. A location that cannot be rebuilt is `None`, never an error.

use std::path::PathBuf;

use url::Url;

use crate::locate::{join_suffix, prefix_path_of, startup_dir_of};
use crate::origin::Origin;

/// Prefix of `origin` with `suffix` appended, as a URL.
///
/// `resolve_subpath(origin, "")` is the prefix itself.
pub fn resolve_subpath(origin: &Origin, suffix: &str) -> Option<Url> {
    let prefix = prefix_path_of(origin.path())?;
    with_path(origin.url(), &join_suffix(prefix, suffix))
}

/// Same as [`resolve_subpath`], as a native filesystem path.
pub fn resolve_subpath_file(origin: &Origin, suffix: &str) -> Option<PathBuf> {
    resolve_subpath(origin, suffix).and_then(|url| to_local_path(&url))
}

/// Directory holding the origin, with a trailing `/`.
pub fn startup_dir_url(origin: &Origin) -> Option<Url> {
    let dir = startup_dir_of(origin.path())?;
    with_path(origin.url(), dir)
}

pub fn startup_dir_file(origin: &Origin) -> Option<PathBuf> {
    startup_dir_url(origin).and_then(|url| to_local_path(&url))
}

/// Copy of `base` with its path replaced.
///
/// Opaque URLs (`mailto:`, `jar:file:...!/`) have no hierarchical path to
/// rewrite and are rejected.
fn with_path(base: &Url, path: &str) -> Option<Url> {
    if base.cannot_be_a_base() {
        return None;
    }
    let mut url = base.clone();
    url.set_path(path);
    tracing::trace!(%url, "rebuilt location");
    Some(url)
}

/// Native path for a local `file:` URL.
///
/// Query, fragment or a remote host make the location non-local.
fn to_local_path(url: &Url) -> Option<PathBuf> {
    if url.scheme() != "file" || url.query().is_some() || url.fragment().is_some() {
        return None;
    }
    url.to_file_path().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn origin(text: &str) -> Origin {
        Origin::parse(text).unwrap()
    }

    #[test]
    fn prefix_and_subdir_urls() {
        let o = origin("file:///usr/bin/file.jar");
        assert_eq!(resolve_subpath(&o, "").unwrap().as_str(), "file:///usr/");
        assert_eq!(
            resolve_subpath(&o, "share/locale").unwrap().as_str(),
            "file:///usr/share/locale"
        );
    }

    #[test]
    fn only_the_path_changes() {
        let o = origin("https://host:9/usr/bin/file.jar?q=1#f");
        let lib = resolve_subpath(&o, "lib").unwrap();
        assert_eq!(lib.scheme(), "https");
        assert_eq!(lib.host_str(), Some("host"));
        assert_eq!(lib.port(), Some(9));
        assert_eq!(lib.path(), "/usr/lib");
        assert_eq!(lib.query(), Some("q=1"));
        assert_eq!(lib.fragment(), Some("f"));
    }

    #[test]
    fn user_info_is_preserved() {
        let o = origin("ftp://user:pw@mirror.example/pub/app/bin/app");
        assert_eq!(
            resolve_subpath(&o, "share").unwrap().as_str(),
            "ftp://user:pw@mirror.example/pub/app/share"
        );
    }

    #[test]
    fn opaque_origin_is_rejected() {
        assert_eq!(resolve_subpath(&origin("mailto:a/b/c"), "lib"), None);
        assert_eq!(startup_dir_url(&origin("mailto:a/b/c")), None);
        assert_eq!(
            resolve_subpath(&origin("jar:file:/usr/bin/app.jar!/"), "lib"),
            None
        );
    }

    #[test]
    fn single_segment_origin_has_no_prefix() {
        let o = origin("file:///file.jar");
        assert_eq!(resolve_subpath(&o, ""), None);
        assert_eq!(resolve_subpath_file(&o, "bin"), None);
        assert_eq!(startup_dir_url(&o).unwrap().as_str(), "file:///");
    }

    #[test]
    fn startup_dir_forms() {
        let o = origin("file:///usr/bin/file.jar");
        assert_eq!(startup_dir_url(&o).unwrap().as_str(), "file:///usr/bin/");
        #[cfg(unix)]
        assert_eq!(startup_dir_file(&o), Some(PathBuf::from("/usr/bin/")));
    }

    #[test]
    fn remote_location_has_no_file_form() {
        let o = origin("https://host/usr/bin/file.jar");
        assert!(resolve_subpath(&o, "lib").is_some());
        assert_eq!(resolve_subpath_file(&o, "lib"), None);
        assert_eq!(startup_dir_file(&o), None);
    }

    #[test]
    fn query_or_fragment_blocks_file_form() {
        assert_eq!(
            resolve_subpath_file(&origin("file:///usr/bin/tool?x=1"), "lib"),
            None
        );
        assert_eq!(
            resolve_subpath_file(&origin("file:///usr/bin/tool#frag"), "lib"),
            None
        );
    }

    #[cfg(unix)]
    #[test]
    fn encoded_characters_decode_in_file_form() {
        let o = origin("file:///opt/My%20App/bin/app");
        assert_eq!(
            resolve_subpath(&o, "lib").unwrap().as_str(),
            "file:///opt/My%20App/lib"
        );
        assert_eq!(
            resolve_subpath_file(&o, "lib"),
            Some(PathBuf::from("/opt/My App/lib"))
        );
    }
}
