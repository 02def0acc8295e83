use clap::Parser;
use pagefuse::{output, package};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "pagefuse")]
#[command(about = "Package a built web frontend into one self-contained HTML file")]
#[command(long_about = "\
Package a built web frontend into one self-contained HTML file

Reads the upstream build output and emits a single HTML document with all
CSS and JavaScript inlined, images embedded as base64 data URIs, and API
calls answered offline by an embedded fetch shim.

Expected input layout (relative to the working directory):

  frontend/dist/
  ├── vite.svg                     # Favicon, inlined as an SVG data URI
  └── assets/
      ├── index-<hash>.css         # Stylesheet (located by pattern)
      ├── index-<hash>.js          # Main script (located by pattern)
      ├── vendor-<hash>.js         # Vendor script (located by pattern)
      └── services/*.png           # Images, inlined as PNG data URIs
  backend/data/
  ├── services.json                # Embedded static data, served by the
  ├── portfolio.json               # fetch shim at runtime
  └── industries.json

Running with no arguments builds with these defaults. All three required
bundles must exist; a missing bundle aborts the build with exit code 1.")]
#[command(version = version_string())]
struct Cli {
    /// Frontend build output directory
    #[arg(long, default_value = "frontend/dist")]
    dist: PathBuf,

    /// Backend data directory holding the three JSON payloads
    #[arg(long, default_value = "backend/data")]
    data: PathBuf,

    /// Path of the generated HTML file
    #[arg(long, default_value = "techflow-single.html")]
    output: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    println!("{}", output::format_header());

    let report = package::package(&package::Options {
        dist: cli.dist,
        data: cli.data,
        output: cli.output,
    })?;

    output::print_summary(&report);
    Ok(())
}
