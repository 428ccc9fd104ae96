//! Origin of the shared object holding a given piece of code.

use super::{Origin, OriginProvider};
use crate::error::LocateError;

/// Locates the library (or executable) whose code mapping contains an address.
///
/// Pass the address of any function defined in the library:
///
/// ```no_run
/// use binreloc_core::origin::{ModuleOrigin, OriginProvider};
///
/// fn anchor() {}
///
/// let origin = ModuleOrigin::of_fn(anchor as *const ()).current();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleOrigin {
    address: usize,
}

impl ModuleOrigin {
    pub fn containing(address: usize) -> Self {
        Self { address }
    }

    /// Module holding the code of `f`, e.g. `ModuleOrigin::of_fn(anchor as *const ())`.
    pub fn of_fn(f: *const ()) -> Self {
        Self::containing(f as usize)
    }

    pub fn address(&self) -> usize {
        self.address
    }
}

impl OriginProvider for ModuleOrigin {
    #[cfg(target_os = "linux")]
    fn locate(&self) -> Result<Origin, LocateError> {
        let maps = read_proc_maps()?;
        let path = super::maps::module_containing(&maps, self.address)
            .ok_or(LocateError::NotMapped(self.address))?;
        tracing::trace!(address = self.address, path, "located module");
        Origin::from_file_path(std::path::Path::new(path))
    }

    #[cfg(not(target_os = "linux"))]
    fn locate(&self) -> Result<Origin, LocateError> {
        Err(LocateError::Unsupported)
    }
}

#[cfg(target_os = "linux")]
pub(super) fn read_proc_maps() -> Result<String, LocateError> {
    use std::io::Read;

    let mut file = std::fs::File::open("/proc/self/maps").map_err(LocateError::OpenMaps)?;
    let mut maps = String::new();
    file.read_to_string(&mut maps)
        .map_err(LocateError::ReadMaps)?;
    Ok(maps)
}
