//! CLI output formatting.
//!
//! Each piece of progress output has a pure `format_*` function (returns a
//! `String` or `Vec<String>`) so tests can assert on the text without
//! capturing stdout, and a thin `print_*` wrapper that writes it. No other
//! module calls `println!` directly.

use crate::package::Report;

pub fn format_header() -> String {
    "Building single HTML file...\n".to_string()
}

/// One line naming the three bundles the locator picked.
pub fn format_assets_found(stylesheet: &str, main_script: &str, vendor_script: &str) -> String {
    format!("Found assets: {stylesheet}, {main_script}, {vendor_script}")
}

/// Ambiguity warnings from the locator, one line each.
pub fn format_ambiguity_warnings(ambiguous: &[String]) -> Vec<String> {
    ambiguous
        .iter()
        .map(|detail| format!("warning: multiple matches for {detail}"))
        .collect()
}

pub fn format_data_counts(services: usize, portfolio: usize, industries: usize) -> String {
    format!("Loaded {services} services, {portfolio} portfolio items, {industries} industries")
}

pub fn format_image_count(count: usize) -> String {
    format!("Converted {count} images to base64")
}

/// Closing summary: success line, output path, size, features, limitations.
pub fn format_summary(report: &Report) -> Vec<String> {
    let size_mb = report.bytes as f64 / 1024.0 / 1024.0;
    vec![
        String::new(),
        "✓ Single HTML file created successfully!".to_string(),
        format!("Output: {}", report.output.display()),
        format!("Size: {size_mb:.2} MB"),
        String::new(),
        "Features:".to_string(),
        "- All CSS and JavaScript inlined".to_string(),
        "- All images embedded as base64".to_string(),
        "- Static data for services, portfolio, industries".to_string(),
        "- API calls mocked for offline use".to_string(),
        String::new(),
        "Limitations:".to_string(),
        "- Login/Auth features disabled".to_string(),
        "- Contact form simulated".to_string(),
        String::new(),
        "Optimization tip: Enable gzip on your server for ~70% size reduction".to_string(),
    ]
}

pub fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}

pub fn print_summary(report: &Report) {
    print_lines(&format_summary(report));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn assets_line_names_all_three() {
        let line = format_assets_found("index-a.css", "index-a.js", "vendor-b.js");
        assert_eq!(line, "Found assets: index-a.css, index-a.js, vendor-b.js");
    }

    #[test]
    fn warnings_prefixed() {
        let lines =
            format_ambiguity_warnings(&["stylesheet: using a.css, ignoring b.css".to_string()]);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("warning: "));
        assert!(lines[0].contains("b.css"));
    }

    #[test]
    fn no_warnings_when_unambiguous() {
        assert!(format_ambiguity_warnings(&[]).is_empty());
    }

    #[test]
    fn summary_reports_size_in_mb() {
        let report = Report {
            output: PathBuf::from("techflow-single.html"),
            bytes: 3 * 1024 * 1024 + 512 * 1024,
        };
        let lines = format_summary(&report);
        assert!(lines.iter().any(|l| l == "Size: 3.50 MB"));
        assert!(lines.iter().any(|l| l.contains("techflow-single.html")));
    }

    #[test]
    fn summary_mentions_limitations() {
        let report = Report {
            output: PathBuf::from("out.html"),
            bytes: 10,
        };
        let lines = format_summary(&report);
        assert!(
            lines
                .iter()
                .any(|l| l.contains("Login/Auth features disabled"))
        );
        assert!(lines.iter().any(|l| l.contains("Contact form simulated")));
    }
}
