//! End-to-end checks of the public API with injected origins.
//!
//! No test depends on where the test binary itself lives, except the one
//! that asks for the real executable and only checks consistency.

use binreloc_core::config::{self, Fallbacks, RelocConfig};
use binreloc_core::locate::{prefix_path_of, startup_dir_of};
use binreloc_core::origin::{FixedOrigin, NoOrigin};
use binreloc_core::{reloc, BinReloc, InstallDir, Origin, OriginProvider};
use std::path::PathBuf;
use tempfile::tempdir;

fn fixed(text: &str) -> BinReloc<FixedOrigin> {
    BinReloc::new(FixedOrigin::new(Origin::parse(text).unwrap()))
}

#[test]
fn jar_in_usr_bin() {
    assert_eq!(prefix_path_of("/usr/bin/file.jar"), Some("/usr/"));
    assert_eq!(startup_dir_of("/usr/bin/file.jar"), Some("/usr/bin/"));
}

#[test]
fn classes_directory_origin() {
    let r = fixed("file:///usr/bin/");
    assert_eq!(r.prefix_url().unwrap().path(), "/usr/");
    assert_eq!(r.bin_dir_url().unwrap().path(), "/usr/bin");
}

#[test]
fn single_segment_origin_yields_nothing() {
    assert_eq!(prefix_path_of("/file.jar"), None);
    let r = fixed("file:///file.jar");
    assert_eq!(r.prefix_url(), None);
    assert_eq!(r.bin_dir_url(), None);
    assert_eq!(r.data_dir_url(), None);
    assert_eq!(r.lib_dir_url(), None);
    assert_eq!(r.libexec_dir_url(), None);
    assert_eq!(r.locale_dir_url(), None);
    assert_eq!(r.sbin_dir_url(), None);
    assert_eq!(r.prefix_file(), None);
    assert_eq!(r.locale_dir_file(), None);
}

#[test]
fn remote_origin_keeps_addressing_fields() {
    let r = fixed("https://host:9/usr/bin/file.jar?q=1#f");
    let lib = r.lib_dir_url().unwrap();
    assert_eq!(lib.host_str(), Some("host"));
    assert_eq!(lib.port(), Some(9));
    assert_eq!(lib.path(), "/usr/lib");
    assert_eq!(lib.query(), Some("q=1"));
    assert_eq!(lib.fragment(), Some("f"));
    assert_eq!(lib.as_str(), "https://host:9/usr/lib?q=1#f");
    // Not a local file, so there is no native path form.
    assert_eq!(r.lib_dir_file(), None);
}

#[test]
fn repeated_calls_agree() {
    let r = fixed("file:///opt/tool/bin/tool");
    for dir in InstallDir::ALL {
        assert_eq!(r.dir_url(dir), r.dir_url(dir));
        assert_eq!(r.dir_file(dir), r.dir_file(dir));
    }
}

#[test]
fn prefix_reproduces_from_synthetic_bin_origin() {
    let origin = Origin::parse("file:///opt/tool/bin/tool").unwrap();
    let prefix = reloc::resolve_subpath(&origin, "").unwrap();
    assert_eq!(prefix.path(), "/opt/tool/");

    let synthetic = Origin::from_url(prefix.join("bin/anything").unwrap());
    assert_eq!(synthetic.path(), "/opt/tool/bin/anything");
    assert_eq!(prefix_path_of(synthetic.path()), Some(prefix.path()));
    assert_eq!(
        reloc::startup_dir_url(&synthetic).unwrap().path(),
        "/opt/tool/bin/"
    );
    assert_eq!(reloc::resolve_subpath(&synthetic, "").unwrap(), prefix);
}

#[cfg(unix)]
#[test]
fn existing_directory_becomes_directory_origin() {
    let dir = tempdir().unwrap();
    let bin = dir.path().join("bin");
    std::fs::create_dir(&bin).unwrap();

    let origin = Origin::from_file_path(&bin).unwrap();
    assert!(origin.path().ends_with("/bin/"));

    let r = BinReloc::new(FixedOrigin::new(origin));
    assert_eq!(r.prefix_file(), Some(dir.path().to_path_buf()));
    assert_eq!(r.data_dir_file(), Some(dir.path().join("share")));
}

#[cfg(unix)]
#[test]
fn fallbacks_fill_gaps_only() {
    let mut fallbacks = Fallbacks::default();
    fallbacks.locale = Some(PathBuf::from("/usr/share/locale"));

    let absent = BinReloc::new(NoOrigin);
    assert_eq!(
        absent.dir_file_with(InstallDir::Locale, &fallbacks),
        Some(PathBuf::from("/usr/share/locale"))
    );

    let present = fixed("file:///opt/tool/bin/tool");
    assert_eq!(
        present.dir_file_with(InstallDir::Locale, &fallbacks),
        Some(PathBuf::from("/opt/tool/share/locale"))
    );
}

#[test]
fn config_file_override_and_fallbacks() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
            origin = "file:///srv/app/bin/app"

            [fallbacks]
            etc = "/etc/app"
        "#,
    )
    .unwrap();

    let cfg: RelocConfig = config::load_from(&path).unwrap();
    let r = BinReloc::new(cfg.provider().unwrap());
    assert_eq!(r.etc_dir_url().unwrap().as_str(), "file:///srv/app/etc");
    assert_eq!(
        cfg.fallbacks.get(InstallDir::Etc),
        Some(&PathBuf::from("/etc/app"))
    );
}

#[test]
fn missing_config_file_is_an_error() {
    let dir = tempdir().unwrap();
    assert!(config::load_from(&dir.path().join("absent.toml")).is_err());
}

#[test]
fn running_executable_is_consistent() {
    let r = BinReloc::for_executable();
    match r.provider().locate() {
        Ok(origin) => {
            let startup = reloc::startup_dir_url(&origin).unwrap();
            assert!(origin.url().as_str().starts_with(startup.as_str()));
            assert_eq!(r.origin(), Some(origin));
        }
        Err(_) => assert_eq!(r.origin(), None),
    }
}
