//! Static assets the pages reference but do not define.
//!
//! `styles/` and `images/` are copied from the site root into the output
//! tree. Anything a page links to that is still absent afterwards is
//! reported; the build carries on, since a server answers 404 for it.

use std::{
    fs,
    path::{Path, PathBuf},
};

use color_eyre::{Section, eyre::eyre};
use itertools::{Either, Itertools};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::{
    config::ASSET_DIRS,
    css::build_css,
    pages::Page,
    types::{Href, RelPath},
};

/// A page reference that resolves to nothing in the output tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MissingAsset {
    pub page: Page,
    pub href: Href,
}

/// Copy the asset directories under `root` into `output_dir`.
///
/// Returns the written paths relative to `output_dir`, sorted. Absent
/// asset directories are skipped.
pub fn copy_assets(
    root: &Path,
    output_dir: &Path,
    minify_css: bool,
) -> color_eyre::Result<Vec<PathBuf>> {
    let mut copied = Vec::new();

    for dir in ASSET_DIRS {
        let src_dir = root.join(dir);
        if !src_dir.is_dir() {
            debug!(dir = %src_dir.display(), "asset directory absent, skipping");
            continue;
        }

        let (files, errors): (Vec<PathBuf>, Vec<walkdir::Error>) = WalkDir::new(&src_dir)
            .sort_by_file_name()
            .into_iter()
            .filter(|r| r.as_ref().map_or(true, |e| e.file_type().is_file()))
            .partition_map(|r| match r {
                Ok(entry) => Either::Left(entry.into_path()),
                Err(e) => Either::Right(e),
            });

        if !errors.is_empty() {
            return Err(eyre!("Failed to open some asset entries: {errors:?}"));
        }

        for src in files {
            let rel = src
                .strip_prefix(root)
                .map(Path::to_path_buf)
                .map_err(|_| eyre!("Asset outside site root: {}", src.display()))?;
            let dest = output_dir.join(&rel);
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)?;
            }

            if minify_css && src.extension().is_some_and(|ext| ext == "css") {
                let css = build_css(&src)?;
                fs::write(&dest, css).with_note(|| format!("While writing {}", dest.display()))?;
            } else {
                fs::copy(&src, &dest)
                    .with_note(|| format!("While copying {}", src.display()))?;
            }
            copied.push(rel);
        }
    }

    copied.sort();
    Ok(copied)
}

/// Asset references of `pages` that do not exist under `output_dir`.
pub fn missing_assets(output_dir: &Path, pages: &[Page]) -> Vec<MissingAsset> {
    let mut missing = Vec::new();
    for &page in pages {
        for href in page.document().assets() {
            if href.is_external() {
                continue;
            }
            let present = RelPath::from_href(&href)
                .is_some_and(|rel| output_dir.join(rel.as_path()).is_file());
            if !present {
                warn!(page = %page, asset = %href, "referenced asset is missing");
                missing.push(MissingAsset { page, href });
            }
        }
    }
    missing
}
