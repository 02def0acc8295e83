//! Image inlining: raster files become base64 data URIs.
//!
//! The frontend references service illustrations by absolute web path
//! (`/assets/services/cloud.png`). A single-file document has no server to
//! resolve those, so every PNG in the images directory is read once,
//! base64-encoded, and recorded in a map from web path to data URI. The CSS
//! and script processors later substitute the paths wherever they occur.
//!
//! A missing images directory (or one with no PNGs) is not an error — the
//! map is simply empty and the substitution steps become no-ops.

use base64::{Engine as _, engine::general_purpose};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InlineError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Web path prefix under which the frontend requests these images.
const WEB_PREFIX: &str = "/assets/services";

const IMAGE_EXTENSION: &str = "png";
const MIME_TYPE: &str = "image/png";

/// Map from web path (`/assets/services/<file>`) to `data:` URI.
///
/// BTreeMap so substitution order is deterministic run to run.
pub type ImageMap = BTreeMap<String, String>;

/// Build the image map from every PNG in `images_dir`.
pub fn build_image_map(images_dir: &Path) -> Result<ImageMap, InlineError> {
    let mut map = ImageMap::new();

    if !images_dir.is_dir() {
        return Ok(map);
    }

    let mut files: Vec<_> = fs::read_dir(images_dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| {
            p.is_file()
                && p.extension()
                    .map(|e| e.eq_ignore_ascii_case(IMAGE_EXTENSION))
                    .unwrap_or(false)
        })
        .collect();
    files.sort();

    for path in files {
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let bytes = fs::read(&path)?;
        map.insert(format!("{WEB_PREFIX}/{filename}"), data_uri(&bytes));
    }

    Ok(map)
}

/// Encode raw image bytes as a PNG data URI.
fn data_uri(bytes: &[u8]) -> String {
    let b64 = general_purpose::STANDARD.encode(bytes);
    format!("data:{MIME_TYPE};base64,{b64}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn map_keys_use_web_prefix() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("cloud.png"), b"fake png").unwrap();

        let map = build_image_map(tmp.path()).unwrap();
        assert_eq!(map.len(), 1);
        assert!(map.contains_key("/assets/services/cloud.png"));
    }

    #[test]
    fn data_uri_round_trips_bytes() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("icon.png"), b"\x89PNG\r\n\x1a\n").unwrap();

        let map = build_image_map(tmp.path()).unwrap();
        let uri = &map["/assets/services/icon.png"];

        let b64 = uri.strip_prefix("data:image/png;base64,").unwrap();
        let decoded = general_purpose::STANDARD.decode(b64).unwrap();
        assert_eq!(decoded, b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn non_png_files_are_skipped() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("photo.png"), b"png").unwrap();
        fs::write(tmp.path().join("photo.jpg"), b"jpg").unwrap();
        fs::write(tmp.path().join("notes.txt"), b"txt").unwrap();

        let map = build_image_map(tmp.path()).unwrap();
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn missing_directory_yields_empty_map() {
        let tmp = TempDir::new().unwrap();
        let map = build_image_map(&tmp.path().join("does-not-exist")).unwrap();
        assert!(map.is_empty());
    }

    #[test]
    fn empty_directory_yields_empty_map() {
        let tmp = TempDir::new().unwrap();
        let map = build_image_map(tmp.path()).unwrap();
        assert!(map.is_empty());
    }

    #[test]
    fn keys_are_sorted() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("b.png"), b"b").unwrap();
        fs::write(tmp.path().join("a.png"), b"a").unwrap();
        fs::write(tmp.path().join("c.png"), b"c").unwrap();

        let map = build_image_map(tmp.path()).unwrap();
        let keys: Vec<&str> = map.keys().map(|k| k.as_str()).collect();
        assert_eq!(
            keys,
            vec![
                "/assets/services/a.png",
                "/assets/services/b.png",
                "/assets/services/c.png"
            ]
        );
    }
}
