//! Stylesheet processing: image substitution and duplicate-rule removal.
//!
//! Two passes over the stylesheet text:
//!
//! 1. **Substitution** — every image-map path occurring literally in the CSS
//!    (inside `url(...)` values) is replaced by its data URI. Matching is
//!    exact-string, never pattern-based; paths not present in the map are
//!    left untouched.
//! 2. **Deduplication** — upstream builds concatenate component stylesheets
//!    and frequently repeat whole rule blocks. Blocks are reconstructed by
//!    accumulating lines while tracking brace depth; a block is complete
//!    when depth returns to zero. The first occurrence of each block (keyed
//!    by its trimmed text) is kept in document order; byte-identical repeats
//!    are dropped.
//!
//! This is lexical deduplication, not semantic: two rules that differ only
//! in internal whitespace are distinct blocks and both survive.

use crate::inline::ImageMap;

/// Run both passes: substitution first, then deduplication.
pub fn process(css: &str, images: &ImageMap) -> String {
    dedup_rules(&substitute_images(css, images))
}

/// Replace every literal occurrence of each image path with its data URI.
pub fn substitute_images(css: &str, images: &ImageMap) -> String {
    let mut out = css.to_string();
    for (path, uri) in images {
        out = out.replace(path.as_str(), uri);
    }
    out
}

/// Drop exact-duplicate rule blocks, keeping first occurrences in order.
///
/// Lines accumulate into a buffer while a brace counter tracks nesting
/// (`{` increments, `}` decrements). When the counter returns to zero and
/// the trimmed buffer is non-empty, the buffer is one complete block; its
/// trimmed text is the identity checked against previously seen blocks.
/// A trailing buffer whose braces never balance is discarded.
pub fn dedup_rules(css: &str) -> String {
    let mut seen = std::collections::HashSet::new();
    let mut kept = String::with_capacity(css.len());
    let mut block = String::new();
    let mut depth: i64 = 0;

    for line in css.split('\n') {
        block.push_str(line);
        block.push('\n');
        depth += line.matches('{').count() as i64;
        depth -= line.matches('}').count() as i64;

        // Blank-only buffers keep accumulating: separator lines attach to
        // the block that follows them, and share its fate.
        if depth == 0 && !block.trim().is_empty() {
            if seen.insert(block.trim().to_string()) {
                kept.push_str(&block);
            }
            block.clear();
        }
    }

    kept
}
