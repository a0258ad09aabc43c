//! Client configuration for the header chrome.
//!
//! Values are embedded at compile time from `config/client.json` so that web
//! builds need no runtime file access. A malformed file is reported and the
//! defaults below are used instead.

use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::header::SortOrder;

const CLIENT_CONFIG_JSON: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/config/client.json"
));

static CLIENT_CONFIG: Lazy<HeaderConfig> = Lazy::new(|| {
    HeaderConfig::from_json(CLIENT_CONFIG_JSON).unwrap_or_else(|err| {
        tracing::warn!(%err, "invalid embedded client config; using defaults");
        HeaderConfig::default()
    })
});

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeaderConfig {
    /// Product name shown next to the logo and appended to document titles.
    pub app_name: String,
    /// Icon identifier used for the logo mark.
    pub app_icon: String,
    /// Small badge rendered after the product name (empty hides it).
    pub beta_label: String,
    /// Listing the logo and breadcrumbs fall back to before any listing was visited.
    pub default_sort: SortOrder,
    /// Whether the 24h / 30d trending toggle is rendered.
    pub show_trending_toggle: bool,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            app_name: "Golos".to_string(),
            app_icon: "golos".to_string(),
            beta_label: "alpha".to_string(),
            default_sort: SortOrder::Hot,
            show_trending_toggle: false,
        }
    }
}

impl HeaderConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// The process-wide configuration embedded in this build.
    pub fn client() -> &'static HeaderConfig {
        &CLIENT_CONFIG
    }

    /// `"{title} — {app_name}"`
    pub fn document_title(&self, title: &str) -> String {
        format!("{title} — {}", self.app_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_parses() {
        let parsed = HeaderConfig::from_json(CLIENT_CONFIG_JSON).unwrap();
        assert_eq!(parsed.default_sort, SortOrder::Hot);
        assert!(!parsed.show_trending_toggle);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let parsed = HeaderConfig::from_json(r#"{ "app_name": "Feedline" }"#).unwrap();
        assert_eq!(parsed.app_name, "Feedline");
        assert_eq!(parsed.default_sort, SortOrder::Hot);
        assert_eq!(parsed.beta_label, "alpha");
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(HeaderConfig::from_json(r#"{ "app_nmae": "typo" }"#).is_err());
    }

    #[test]
    fn document_title_appends_app_name() {
        let config = HeaderConfig::default();
        assert_eq!(config.document_title("cats/hot"), "cats/hot — Golos");
    }
}
