//! Syntactic prefix derivation over `/`-delimited path text.
//!
//! Nothing here touches the filesystem: no symlink resolution, no existence
//! checks. The prefix is assumed to sit two segments above the origin, as in
//! `prefix/bin/program`. Programs installed directly in the prefix root get a
//! wrong (but deterministic) answer.

/// Returns the path up to and including its second-to-last `/`.
///
/// Drops the final two segments, typically the file name and the `bin`
/// directory holding it. Returns `None` when the path has fewer than two `/`.
///
/// # Examples
///
/// - `prefix_path_of("/usr/bin/file.jar")` → `Some("/usr/")`
/// - `prefix_path_of("/usr/bin/")` → `Some("/usr/")`
/// - `prefix_path_of("/file.jar")` → `None`
pub fn prefix_path_of(path: &str) -> Option<&str> {
    let last_slash = path.rfind('/')?;
    let second_last_slash = path[..last_slash].rfind('/')?;
    Some(&path[..=second_last_slash])
}

/// Returns the path up to and including its last `/`, dropping the file name.
pub fn startup_dir_of(path: &str) -> Option<&str> {
    let last_slash = path.rfind('/')?;
    Some(&path[..=last_slash])
}

/// Appends a relative suffix to a prefix path that already ends in `/`.
pub fn join_suffix(prefix: &str, suffix: &str) -> String {
    let mut out = String::with_capacity(prefix.len() + suffix.len());
    out.push_str(prefix);
    out.push_str(suffix);
    out
}
