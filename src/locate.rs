//! Asset discovery in the frontend build output.
//!
//! The upstream build emits content-hashed filenames (`index-CKx91a_z.css`,
//! `vendor-Dm93qKWz.js`), so the packager cannot hard-code names. Instead each
//! required asset is located by a prefix + suffix pattern inside the assets
//! directory:
//!
//! | Category | Prefix | Suffix |
//! |----------|--------|--------|
//! | stylesheet | `index-` | `.css` |
//! | main script | `index-` | `.js` |
//! | vendor script | `vendor-` | `.js` |
//!
//! Zero matches for any category is fatal — the build output is incomplete
//! and the operator has to rerun the upstream build. More than one match is
//! ambiguous (stale hashed bundles left behind); the locator keeps the
//! lexicographically first and warns about the rest rather than silently
//! depending on directory order.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LocateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("no {category} matching {prefix}*{suffix} in {dir}")]
    MissingAsset {
        category: &'static str,
        prefix: &'static str,
        suffix: &'static str,
        dir: PathBuf,
    },
}

/// One required asset category, described by its filename pattern.
#[derive(Debug, Clone, Copy)]
pub struct AssetPattern {
    pub category: &'static str,
    pub prefix: &'static str,
    pub suffix: &'static str,
}

pub const STYLESHEET: AssetPattern = AssetPattern {
    category: "stylesheet",
    prefix: "index-",
    suffix: ".css",
};

pub const MAIN_SCRIPT: AssetPattern = AssetPattern {
    category: "main script",
    prefix: "index-",
    suffix: ".js",
};

pub const VENDOR_SCRIPT: AssetPattern = AssetPattern {
    category: "vendor script",
    prefix: "vendor-",
    suffix: ".js",
};

/// The three pattern-matched bundles the packager consumes.
#[derive(Debug)]
pub struct LocatedAssets {
    pub stylesheet: PathBuf,
    pub main_script: PathBuf,
    pub vendor_script: PathBuf,
    /// Candidates skipped because a category matched more than once.
    pub ambiguous: Vec<String>,
}

impl LocatedAssets {
    /// Filename of the vendor bundle — the import rewrite needs it verbatim.
    pub fn vendor_filename(&self) -> String {
        self.vendor_script
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default()
    }
}

/// Locate all required assets in `assets_dir`.
pub fn locate(assets_dir: &Path) -> Result<LocatedAssets, LocateError> {
    let names = list_filenames(assets_dir)?;
    let mut ambiguous = Vec::new();

    let stylesheet = find_one(assets_dir, &names, STYLESHEET, &mut ambiguous)?;
    let main_script = find_one(assets_dir, &names, MAIN_SCRIPT, &mut ambiguous)?;
    let vendor_script = find_one(assets_dir, &names, VENDOR_SCRIPT, &mut ambiguous)?;

    Ok(LocatedAssets {
        stylesheet,
        main_script,
        vendor_script,
        ambiguous,
    })
}

/// Sorted filenames (files only) in the assets directory.
fn list_filenames(dir: &Path) -> Result<Vec<String>, LocateError> {
    let mut names: Vec<String> = fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file())
        .map(|e| e.file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    Ok(names)
}

fn find_one(
    dir: &Path,
    names: &[String],
    pattern: AssetPattern,
    ambiguous: &mut Vec<String>,
) -> Result<PathBuf, LocateError> {
    let mut matches = names
        .iter()
        .filter(|n| n.starts_with(pattern.prefix) && n.ends_with(pattern.suffix));

    let first = matches.next().ok_or(LocateError::MissingAsset {
        category: pattern.category,
        prefix: pattern.prefix,
        suffix: pattern.suffix,
        dir: dir.to_path_buf(),
    })?;

    for skipped in matches {
        ambiguous.push(format!(
            "{}: using {}, ignoring {}",
            pattern.category, first, skipped
        ));
    }

    Ok(dir.join(first))
}
