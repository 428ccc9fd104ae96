//! `binreloc show` – every derived location in URL and path form.

use binreloc_core::{BinReloc, InstallDir, OriginProvider};
use std::path::PathBuf;
use url::Url;

use super::ABSENT;

fn url_or_dash(url: Option<Url>) -> String {
    url.map(String::from).unwrap_or_else(|| ABSENT.to_string())
}

fn path_or_dash(path: Option<PathBuf>) -> String {
    path.map(|p| p.display().to_string())
        .unwrap_or_else(|| ABSENT.to_string())
}

/// One `(label, url, path)` row per location.
pub(super) fn rows<P: OriginProvider>(reloc: &BinReloc<P>) -> Vec<(String, String, String)> {
    let origin = reloc.origin();
    let mut rows = vec![
        (
            "origin".to_string(),
            url_or_dash(origin.as_ref().map(|o| o.url().clone())),
            path_or_dash(origin.and_then(|o| o.url().to_file_path().ok())),
        ),
        (
            "startup".to_string(),
            url_or_dash(reloc.startup_dir_url()),
            path_or_dash(reloc.startup_dir_file()),
        ),
    ];
    for dir in InstallDir::ALL {
        rows.push((
            dir.name().to_string(),
            url_or_dash(reloc.dir_url(dir)),
            path_or_dash(reloc.dir_file(dir)),
        ));
    }
    rows
}

pub fn run_show<P: OriginProvider>(reloc: &BinReloc<P>) {
    println!("{:<8} {:<40} {}", "NAME", "URL", "PATH");
    for (name, url, path) in rows(reloc) {
        println!("{:<8} {:<40} {}", name, url, path);
    }
}
