//! Script processing: image substitution, import rewrite, and escaping.
//!
//! The main bundle references images by web path and imports the vendor
//! bundle by its hashed filename. Both references break inside a single
//! document, so before embedding:
//!
//! 1. Image-map paths in the main script are replaced by data URIs (same
//!    exact-literal semantics as the CSS pass; the vendor script is never
//!    substituted).
//! 2. The vendor import clause (`from "./vendor-<hash>.js"`, either quote
//!    style, any whitespace after `from`) is rewritten to a placeholder
//!    token. At load time the bootstrap script swaps the token for a blob
//!    URL it has just created — the only point where a concrete URL exists.
//! 3. Both script texts are escaped for embedding inside a backtick-delimited
//!    template literal.
//!
//! Order is load-bearing: the rewrite must run before escaping (escaping
//! would mangle the text the pattern matches), and within escaping the
//! backslash pass must come first so the escapes it inserts are not
//! themselves re-escaped.

use crate::inline::ImageMap;
use regex::Regex;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("invalid vendor import pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Sentinel the bootstrap script resolves to the vendor blob URL.
pub const VENDOR_URL_TOKEN: &str = "__VENDOR_URL__";

/// Replace every literal occurrence of each image path with its data URI.
pub fn substitute_images(script: &str, images: &ImageMap) -> String {
    let mut out = script.to_string();
    for (path, uri) in images {
        out = out.replace(path.as_str(), uri);
    }
    out
}

/// Rewrite the vendor import clause to the placeholder token.
///
/// The filename is regex-escaped so hashed names containing metacharacters
/// (dots, at minimum) match literally.
pub fn rewrite_vendor_import(script: &str, vendor_filename: &str) -> Result<String, ScriptError> {
    let pattern = format!(
        r#"from\s*["']\./{}["']"#,
        regex::escape(vendor_filename)
    );
    let re = Regex::new(&pattern)?;
    Ok(re
        .replace_all(script, format!(r#"from "{VENDOR_URL_TOKEN}""#))
        .into_owned())
}

/// Escape text for embedding inside a backtick template literal.
///
/// Backslashes first, then backticks, then `${` — the interpolation opener.
pub fn escape_template_literal(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('`', "\\`")
        .replace("${", "\\${")
}
