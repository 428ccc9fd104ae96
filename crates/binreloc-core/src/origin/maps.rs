//! Parse `/proc/self/maps` text.
//!
//! Each line looks like
//! `00400000-0040b000 r-xp 00000000 08:02 173521   /usr/bin/dbus-daemon`.

use crate::error::LocateError;

const EXEC_PERMS: &str = "r-xp";
const DELETED_SUFFIX: &str = " (deleted)";

/// One file-backed mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapsEntry<'a> {
    pub start: usize,
    pub end: usize,
    pub perms: &'a str,
    pub path: &'a str,
}

impl MapsEntry<'_> {
    pub fn is_executable(&self) -> bool {
        self.perms == EXEC_PERMS
    }

    pub fn contains(&self, address: usize) -> bool {
        self.start <= address && address < self.end
    }
}

/// Parses one line. Anonymous mappings (no absolute path) yield `None`.
pub fn parse_line(line: &str) -> Option<MapsEntry<'_>> {
    let line = line.trim_end_matches(['\n', '\r']);
    let mut fields = line.split_whitespace();
    let range = fields.next()?;
    let perms = fields.next()?;

    let (start, end) = range.split_once('-')?;
    // Both bounds are printed with the same width.
    if start.len() != end.len() {
        return None;
    }
    let start = usize::from_str_radix(start, 16).ok()?;
    let end = usize::from_str_radix(end, 16).ok()?;

    let path_at = line.find('/')?;
    if path_at <= range.len() {
        return None;
    }
    let path = &line[path_at..];
    let path = path.strip_suffix(DELETED_SUFFIX).unwrap_or(path);

    Some(MapsEntry {
        start,
        end,
        perms,
        path,
    })
}

/// Executable path from the first line of the maps file.
///
/// The kernel lists the main program's mappings first. With separate-code
/// linking that first mapping is the read-only ELF header (`r--p`), so any
/// file-backed first line is accepted as long as the same file also has an
/// executable mapping.
pub fn exe_from_maps(maps: &str) -> Result<&str, LocateError> {
    let first = maps.lines().next().ok_or(LocateError::InvalidMaps)?;
    let path = parse_line(first)
        .map(|entry| entry.path)
        .ok_or(LocateError::InvalidMaps)?;
    let has_code = maps
        .lines()
        .filter_map(parse_line)
        .any(|entry| entry.is_executable() && entry.path == path);
    if has_code {
        Ok(path)
    } else {
        Err(LocateError::InvalidMaps)
    }
}

/// Path of the executable mapping that contains `address`.
pub fn module_containing(maps: &str, address: usize) -> Option<&str> {
    maps.lines()
        .filter_map(parse_line)
        .find(|entry| entry.is_executable() && entry.contains(address))
        .map(|entry| entry.path)
}
