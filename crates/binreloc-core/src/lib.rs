//! Locate a program's installation prefix at runtime.
//!
//! Relocatable packages cannot bake their install prefix in at build time.
//! Instead, the program finds where its own code was loaded from (the
//! *origin*), strips `bin/program` off the end to get the prefix, and looks
//! up `share`, `lib`, `share/locale` and friends relative to that.
//!
//! ```no_run
//! use binreloc_core::BinReloc;
//!
//! let reloc = BinReloc::for_executable();
//! let data = reloc.data_dir_file().unwrap_or_else(|| "/usr/share".into());
//! ```

pub mod config;
pub mod dirs;
pub mod error;
pub mod locate;
pub mod logging;
pub mod origin;
pub mod reloc;

pub use dirs::{BinReloc, InstallDir};
pub use error::LocateError;
pub use origin::{Origin, OriginProvider};
