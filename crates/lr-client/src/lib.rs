//! Browser client scripts for SSE-driven live reload.
//!
//! Generates the JavaScript that connects a page to a reload-notification
//! endpoint, in two flavors:
//!
//! - [`client_script`]: an ES-module script for current browsers
//! - [`legacy_client_script`]: an ES5 script for browsers without module
//!   support, intended to be loaded with the `async` attribute
//!
//! Both listen on an `EventSource` and compare each message against the
//! reload signals exported here. Hosts push [`DOCUMENT_RELOAD_SIGNAL`] to
//! reload the whole document and [`CSS_RELOAD_SIGNAL`] to re-fetch
//! stylesheets in place.

/// Signal instructing the client to reload the whole document.
pub const DOCUMENT_RELOAD_SIGNAL: &str = "reload:document";

/// Signal instructing the client to re-fetch stylesheets without a reload.
pub const CSS_RELOAD_SIGNAL: &str = "reload:css";

/// ES-module client template.
const CLIENT_TEMPLATE: &str = include_str!("../assets/reload-client.js");

/// ES5 client template for legacy browsers.
const LEGACY_CLIENT_TEMPLATE: &str = include_str!("../assets/reload-client-legacy.js");

/// Generate the ES-module client script listening on `url`.
///
/// The returned source is meant to be served as `application/javascript`
/// and loaded with `type="module"`.
#[must_use]
pub fn client_script(url: &str) -> String {
    render(CLIENT_TEMPLATE, url)
}

/// Generate the ES5 client script listening on `url`.
///
/// Same behavior as [`client_script`], compiled down for browsers without
/// module support. Load it with the `async` attribute.
#[must_use]
pub fn legacy_client_script(url: &str) -> String {
    render(LEGACY_CLIENT_TEMPLATE, url)
}

/// Fill a template's quoted placeholders with JS string literals.
fn render(template: &str, url: &str) -> String {
    template
        .replace("\"__EVENT_SOURCE_URL__\"", &js_string(url))
        .replace(
            "\"__DOCUMENT_RELOAD_SIGNAL__\"",
            &js_string(DOCUMENT_RELOAD_SIGNAL),
        )
        .replace("\"__CSS_RELOAD_SIGNAL__\"", &js_string(CSS_RELOAD_SIGNAL))
}

/// Encode a value as a JS string literal so it cannot break out of the
/// surrounding script source.
fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_client_script_embeds_url() {
        let script = client_script("/sse");

        assert!(script.contains("new EventSource(\"/sse\")"));
    }

    #[test]
    fn test_client_script_embeds_signals() {
        let script = client_script("/sse");

        assert!(script.contains(DOCUMENT_RELOAD_SIGNAL));
        assert!(script.contains(CSS_RELOAD_SIGNAL));
        assert!(!script.contains("__EVENT_SOURCE_URL__"));
        assert!(!script.contains("__DOCUMENT_RELOAD_SIGNAL__"));
        assert!(!script.contains("__CSS_RELOAD_SIGNAL__"));
    }

    #[test]
    fn test_client_script_escapes_url() {
        let script = client_script("/sse\\path");

        assert!(script.contains("new EventSource(\"/sse\\\\path\")"));
    }

    #[test]
    fn test_variants_differ() {
        assert_ne!(client_script("/sse"), legacy_client_script("/sse"));
    }

    #[test]
    fn test_legacy_script_is_es5() {
        let script = legacy_client_script("/sse");

        assert!(!script.contains("=>"));
        assert!(!script.contains("const "));
        assert!(script.contains("var "));
    }

    #[test]
    fn test_scripts_are_deterministic() {
        assert_eq!(client_script("/sse"), client_script("/sse"));
        assert_eq!(legacy_client_script("/sse"), legacy_client_script("/sse"));
    }

    #[test]
    fn test_signals_are_distinct_and_sse_safe() {
        assert_ne!(DOCUMENT_RELOAD_SIGNAL, CSS_RELOAD_SIGNAL);
        // SSE `data:` frames are line-oriented
        assert!(!DOCUMENT_RELOAD_SIGNAL.contains('\n'));
        assert!(!CSS_RELOAD_SIGNAL.contains('\n'));
    }
}
