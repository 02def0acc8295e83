//! Final document assembly.
//!
//! Emits the single HTML artifact using [maud](https://maud.lambda.xyz/),
//! the same compile-time templating the rest of the output surface uses.
//! The document carries, in order:
//!
//! - a fixed head: charset, base64 SVG favicon, viewport, description /
//!   keywords / theme-color metas, title, and the processed stylesheet
//!   inline in a `<style>` block;
//! - a script assigning the three payloads to `window.__STATIC_DATA__` and
//!   installing the fetch shim over `window.fetch`;
//! - a bootstrap IIFE that turns the vendor script text into a blob URL,
//!   resolves the `__VENDOR_URL__` placeholder inside the main script text
//!   to that URL, turns the result into a second blob URL, and appends a
//!   `type="module"` script element referencing it.
//!
//! The two-stage blob indirection exists because the main bundle's import
//! must point at a concrete URL that only exists once the vendor blob has
//! been created — a link-fixup that can only happen at document load time.
//!
//! Processed CSS and the escaped script texts enter the template through
//! [`PreEscaped`]; everything else goes through maud's default escaping.

use crate::data::StaticData;
use crate::script::VENDOR_URL_TOKEN;
use base64::{Engine as _, engine::general_purpose};
use maud::{DOCTYPE, PreEscaped, html};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssembleError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

const DESCRIPTION: &str = "TechFlow - Professional IT services including cloud solutions, \
     cybersecurity, IT consulting, and software development. Transform your business with \
     innovative technology solutions.";

const KEYWORDS: &str = "IT services, cloud solutions, cybersecurity, IT consulting, \
     software development, managed IT services";

const TITLE: &str = "TechFlow - IT Services & Technology Solutions";

const THEME_COLOR: &str = "#3b82f6";

/// Fetch shim installed over `window.fetch`.
///
/// Runtime behavior, not build-time: each known API path resolves
/// immediately with a synthetic `{ ok, status, json }` response built from
/// the embedded static data. Anything unrecognized falls through to the
/// saved original fetch so external resources still load when online.
const FETCH_SHIM: &str = r#"const originalFetch = window.fetch;
window.fetch = function(url, options) {
  const urlStr = url.toString();

  if (urlStr.includes('/api/services')) {
    return Promise.resolve({
      ok: true,
      status: 200,
      json: () => Promise.resolve(window.__STATIC_DATA__.services)
    });
  }

  if (urlStr.includes('/api/portfolio')) {
    let data = [...window.__STATIC_DATA__.portfolio];
    const categoryMatch = urlStr.match(/category=([^&]+)/);
    if (categoryMatch && categoryMatch[1]) {
      const category = decodeURIComponent(categoryMatch[1]);
      data = data.filter(item => item.category === category);
    }
    return Promise.resolve({
      ok: true,
      status: 200,
      json: () => Promise.resolve(data)
    });
  }

  if (urlStr.includes('/api/industries')) {
    return Promise.resolve({
      ok: true,
      status: 200,
      json: () => Promise.resolve(window.__STATIC_DATA__.industries)
    });
  }

  if (urlStr.includes('/api/auth/verify')) {
    return Promise.resolve({
      ok: false,
      status: 401,
      json: () => Promise.resolve({ message: 'Static site - auth not available' })
    });
  }

  if (urlStr.includes('/api/auth/login') || urlStr.includes('/api/auth/register')) {
    return Promise.resolve({
      ok: false,
      status: 503,
      json: () => Promise.resolve({ message: 'Authentication not available in static mode' })
    });
  }

  if (urlStr.includes('/api/contact')) {
    return Promise.resolve({
      ok: true,
      status: 200,
      json: () => Promise.resolve({ message: 'Thank you for your interest! Please contact us directly at info@techflow.com' })
    });
  }

  if (urlStr.includes('/api/tickets')) {
    return Promise.resolve({
      ok: true,
      status: 200,
      json: () => Promise.resolve([])
    });
  }

  return originalFetch.apply(this, arguments);
};"#;

/// Assemble the complete document.
///
/// `css` is the processed stylesheet; `vendor_js` and `main_js` are the
/// escaped script texts (substitution, rewrite, and escaping already done);
/// `icon_svg` is the raw SVG favicon source.
pub fn assemble(
    css: &str,
    icon_svg: &str,
    data: &StaticData,
    vendor_js: &str,
    main_js: &str,
) -> Result<String, AssembleError> {
    let icon_b64 = general_purpose::STANDARD.encode(icon_svg.as_bytes());
    let data_script = format!(
        "window.__STATIC_DATA__ = {};\n\n{}",
        serde_json::to_string(data)?,
        FETCH_SHIM
    );
    let bootstrap = bootstrap_script(vendor_js, main_js);

    let markup = html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                link rel="icon" href=(format!("data:image/svg+xml;base64,{icon_b64}"));
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta name="description" content=(DESCRIPTION);
                meta name="keywords" content=(KEYWORDS);
                meta name="theme-color" content=(THEME_COLOR);
                title { (TITLE) }
                style { (PreEscaped(css)) }
            }
            body {
                div id="root" {}
                script { (PreEscaped(&data_script)) }
                script { (PreEscaped(&bootstrap)) }
            }
        }
    };

    Ok(markup.into_string())
}

/// Build the bootstrap IIFE around the two escaped script texts.
fn bootstrap_script(vendor_js: &str, main_js: &str) -> String {
    format!(
        r#"(function() {{
  const vendorCode = `{vendor_js}`;
  const vendorBlob = new Blob([vendorCode], {{ type: 'text/javascript' }});
  const vendorUrl = URL.createObjectURL(vendorBlob);

  const mainCode = `{main_js}`.replace(/{VENDOR_URL_TOKEN}/g, vendorUrl);
  const mainBlob = new Blob([mainCode], {{ type: 'text/javascript' }});
  const mainUrl = URL.createObjectURL(mainBlob);

  const script = document.createElement('script');
  script.type = 'module';
  script.src = mainUrl;
  document.head.appendChild(script);
}})();"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_data() -> StaticData {
        StaticData {
            services: json!([{"id": 1, "title": "Cloud"}]),
            portfolio: json!([{"id": 1, "category": "Web"}]),
            industries: json!([]),
        }
    }

    #[test]
    fn document_has_shell_and_metadata() {
        let doc = assemble(".a{}", "<svg/>", &sample_data(), "v", "m").unwrap();

        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains(r#"<html lang="en">"#));
        assert!(doc.contains(r#"meta charset="UTF-8""#));
        assert!(doc.contains(r##"name="theme-color" content="#3b82f6""##));
        assert!(doc.contains("TechFlow"));
        assert!(doc.contains(r#"<div id="root">"#));
    }

    #[test]
    fn favicon_is_base64_svg_data_uri() {
        let doc = assemble("", "<svg/>", &sample_data(), "", "").unwrap();
        let b64 = general_purpose::STANDARD.encode("<svg/>");
        assert!(doc.contains(&format!("data:image/svg+xml;base64,{b64}")));
    }

    #[test]
    fn css_embedded_unescaped_in_style_block() {
        let css = ".hero > a { color: red; }";
        let doc = assemble(css, "", &sample_data(), "", "").unwrap();
        assert!(doc.contains(css));
    }

    #[test]
    fn static_data_embedded_with_all_collections() {
        let doc = assemble("", "", &sample_data(), "", "").unwrap();
        assert!(doc.contains("window.__STATIC_DATA__ = {\"services\":"));
        assert!(doc.contains("\"portfolio\":[{\"id\":1,\"category\":\"Web\"}]"));
        assert!(doc.contains("\"industries\":[]"));
    }

    #[test]
    fn fetch_shim_covers_every_endpoint() {
        let doc = assemble("", "", &sample_data(), "", "").unwrap();
        for endpoint in [
            "/api/services",
            "/api/portfolio",
            "/api/industries",
            "/api/auth/verify",
            "/api/auth/login",
            "/api/auth/register",
            "/api/contact",
            "/api/tickets",
        ] {
            assert!(doc.contains(endpoint), "shim missing {endpoint}");
        }
        assert!(doc.contains("originalFetch.apply(this, arguments)"));
        assert!(doc.contains("status: 401"));
        assert!(doc.contains("status: 503"));
    }

    #[test]
    fn portfolio_filter_matches_category_query() {
        let doc = assemble("", "", &sample_data(), "", "").unwrap();
        assert!(doc.contains("category=([^&]+)"));
        assert!(doc.contains("decodeURIComponent"));
        assert!(doc.contains("item.category === category"));
    }

    #[test]
    fn bootstrap_embeds_scripts_between_backticks() {
        let doc = assemble("", "", &sample_data(), "VENDOR_TEXT", "MAIN_TEXT").unwrap();
        assert!(doc.contains("`VENDOR_TEXT`"));
        assert!(doc.contains("`MAIN_TEXT`"));
    }

    #[test]
    fn bootstrap_resolves_placeholder_before_main_blob() {
        let doc = assemble("", "", &sample_data(), "", "").unwrap();
        let resolve = doc.find(".replace(/__VENDOR_URL__/g, vendorUrl)").unwrap();
        let main_blob = doc.find("new Blob([mainCode]").unwrap();
        assert!(resolve < main_blob);
        assert!(doc.contains("script.type = 'module'"));
    }

    #[test]
    fn placeholder_appears_only_inside_bootstrap_resolution() {
        // The token may occur in the escaped main-script literal and in the
        // replace call that resolves it, never anywhere else.
        let doc = assemble("", "", &sample_data(), "", "").unwrap();
        assert_eq!(doc.matches(VENDOR_URL_TOKEN).count(), 1);
        assert!(doc.contains(&format!(".replace(/{VENDOR_URL_TOKEN}/g, vendorUrl)")));
    }
}
