//! Pipeline orchestration: one invocation, one document.
//!
//! Runs the stages in their only valid order — locate, read, inline,
//! process, assemble, write — printing a progress line as each stage
//! finishes. Every stage is a blocking, single-threaded pass over local
//! files; any failure aborts the build, since a broken input is a
//! build-environment problem the operator fixes and reruns.

use crate::{assemble, css, data, inline, locate, output, script};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PackageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Locate(#[from] locate::LocateError),
    #[error(transparent)]
    Inline(#[from] inline::InlineError),
    #[error(transparent)]
    Data(#[from] data::DataError),
    #[error(transparent)]
    Script(#[from] script::ScriptError),
    #[error(transparent)]
    Assemble(#[from] assemble::AssembleError),
}

/// Input/output paths for one build.
#[derive(Debug, Clone)]
pub struct Options {
    /// Frontend build output — holds `vite.svg` and `assets/`.
    pub dist: PathBuf,
    /// Backend data directory with the three JSON payloads.
    pub data: PathBuf,
    /// Where the assembled document is written.
    pub output: PathBuf,
}

/// What a successful build produced.
#[derive(Debug)]
pub struct Report {
    pub output: PathBuf,
    pub bytes: usize,
}

/// Name of the favicon file in the dist root.
const ICON_FILE: &str = "vite.svg";

/// Subdirectory of `assets/` holding the inlinable images.
const IMAGES_SUBDIR: &str = "services";

/// Run the whole pipeline and write the document.
pub fn package(opts: &Options) -> Result<Report, PackageError> {
    let assets_dir = opts.dist.join("assets");

    let assets = locate::locate(&assets_dir)?;
    output::print_lines(&output::format_ambiguity_warnings(&assets.ambiguous));
    println!(
        "{}",
        output::format_assets_found(
            &filename(&assets.stylesheet),
            &filename(&assets.main_script),
            &filename(&assets.vendor_script),
        )
    );

    let stylesheet = fs::read_to_string(&assets.stylesheet)?;
    let main_js = fs::read_to_string(&assets.main_script)?;
    let vendor_js = fs::read_to_string(&assets.vendor_script)?;
    let icon_svg = fs::read_to_string(opts.dist.join(ICON_FILE))?;

    let static_data = data::load(&opts.data)?;
    let (services, portfolio, industries) = static_data.counts();
    println!(
        "{}",
        output::format_data_counts(services, portfolio, industries)
    );

    let images = inline::build_image_map(&assets_dir.join(IMAGES_SUBDIR))?;
    println!("{}", output::format_image_count(images.len()));

    let processed_css = css::process(&stylesheet, &images);

    let main_js = script::substitute_images(&main_js, &images);
    let main_js = script::rewrite_vendor_import(&main_js, &assets.vendor_filename())?;
    let main_js = script::escape_template_literal(&main_js);
    let vendor_js = script::escape_template_literal(&vendor_js);

    let document = assemble::assemble(
        &processed_css,
        &icon_svg,
        &static_data,
        &vendor_js,
        &main_js,
    )?;

    fs::write(&opts.output, &document)?;

    Ok(Report {
        output: opts.output.clone(),
        bytes: document.len(),
    })
}

fn filename(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default()
}
