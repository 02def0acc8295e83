//! # pagefuse
//!
//! Packages a previously built web frontend — compiled CSS/JS bundles, PNG
//! images, and JSON data files — into a single self-contained HTML document
//! suitable for offline distribution.
//!
//! # Architecture: Single-Pass Pipeline
//!
//! One invocation runs one deterministic pass over fixed local inputs and
//! writes one file:
//!
//! ```text
//! 1. Locate     dist/assets/        →  stylesheet, main script, vendor script
//! 2. Inline     assets/services/    →  { web path → data URI }
//! 3. Process    CSS + main script   →  substituted, deduplicated, escaped
//! 4. Assemble   everything          →  one HTML document
//! ```
//!
//! There is no persistent state and no incremental mode: each run fully
//! regenerates the output. The interesting runtime behavior (the fetch shim
//! and the blob-URL bootstrap) lives *inside* the generated document and
//! executes in the browser, not here.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`locate`] | prefix/suffix discovery of the three required bundles |
//! | [`inline`] | base64 data-URI map for the PNG images |
//! | [`css`] | image substitution + brace-balanced duplicate-rule removal |
//! | [`script`] | image substitution, vendor-import rewrite, template-literal escaping |
//! | [`data`] | the three JSON payloads (services, portfolio, industries) |
//! | [`assemble`] | final document: shell, inline CSS, static data, fetch shim, bootstrap |
//! | [`package`] | orchestration — runs the stages in order and writes the file |
//! | [`output`] | progress and summary formatting for the CLI |
//!
//! # Design Decisions
//!
//! ## Why blob URLs instead of inlining the module graph
//!
//! The main bundle imports the vendor bundle by filename. A single document
//! has no filenames to import, so the bootstrap script recreates both
//! bundles as same-origin blob URLs at load time and rewrites the import
//! target through a placeholder token. The link-fixup happens once, in the
//! browser, because the vendor blob URL does not exist before then.
//!
//! ## Lexical CSS deduplication
//!
//! Upstream builds concatenate component stylesheets, repeating whole rule
//! blocks verbatim. Dropping byte-identical blocks (first occurrence wins)
//! recovers most of that waste without parsing CSS. It is deliberately not
//! semantic: rules differing in whitespace are kept, and correctness never
//! depends on the pass — it only shrinks the output.

pub mod assemble;
pub mod css;
pub mod data;
pub mod inline;
pub mod locate;
pub mod output;
pub mod package;
pub mod script;
