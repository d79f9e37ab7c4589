//! Contact routing and system-info labels.
//!
//! The built-in values can be overridden per deployment with a JSON block in
//! the page (see `platform::browser::load_config`). Field names follow the
//! camelCase JSON layout, and anything left out keeps its default.

use crate::error::PortalError;
use serde::{Deserialize, Serialize};

/// Phone number value that means "not configured yet".
pub const WHATSAPP_NUMBER_PLACEHOLDER: &str = "YOUR_WHATSAPP_NUMBER_HERE";
/// Docs URL value that means "not configured yet".
pub const DOCS_URL_PLACEHOLDER: &str = "https://github.com/YOUR_GITHUB_USERNAME/YOUR_REPO";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PortalConfig {
    pub whatsapp: WhatsAppConfig,
    pub perplexity: PerplexityConfig,
    pub docs_url: String,
    pub system: SystemInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WhatsAppConfig {
    /// Country code and number, digits only.
    pub phone_number: String,
    pub default_message: String,
    /// Open WhatsApp Web instead of the native app link.
    pub use_web: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PerplexityConfig {
    pub base_url: String,
    pub default_query: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemInfo {
    pub device: String,
    pub os: String,
    pub build: String,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            whatsapp: WhatsAppConfig::default(),
            perplexity: PerplexityConfig::default(),
            docs_url: DOCS_URL_PLACEHOLDER.to_string(),
            system: SystemInfo::default(),
        }
    }
}

impl Default for WhatsAppConfig {
    fn default() -> Self {
        Self {
            // +1 (833) 436-3285
            phone_number: "18334363285".to_string(),
            default_message: "Hi! I need support with my NuNa system.".to_string(),
            use_web: false,
        }
    }
}

impl Default for PerplexityConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.perplexity.ai/search".to_string(),
            default_query: "NuNa Windows automation support".to_string(),
        }
    }
}

impl Default for SystemInfo {
    fn default() -> Self {
        Self {
            device: "NuNa".to_string(),
            os: "Windows 11 Home".to_string(),
            build: "26220.7344".to_string(),
        }
    }
}

impl PortalConfig {
    pub fn from_json(json: &str) -> Result<Self, PortalError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn docs_configured(&self) -> bool {
        let url = self.docs_url.trim();
        !url.is_empty() && url != DOCS_URL_PLACEHOLDER
    }
}

impl WhatsAppConfig {
    pub fn is_configured(&self) -> bool {
        let phone = self.phone_number.trim();
        !phone.is_empty() && phone != WHATSAPP_NUMBER_PLACEHOLDER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_route_to_the_support_line() {
        let config = PortalConfig::default();
        assert!(config.whatsapp.is_configured());
        assert!(!config.whatsapp.use_web);
        assert_eq!(config.system.build, "26220.7344");
        // Docs ship unconfigured.
        assert!(!config.docs_configured());
    }

    #[test]
    fn placeholders_and_blanks_count_as_unconfigured() {
        let mut whatsapp = WhatsAppConfig::default();
        whatsapp.phone_number = WHATSAPP_NUMBER_PLACEHOLDER.to_string();
        assert!(!whatsapp.is_configured());
        whatsapp.phone_number = "   ".to_string();
        assert!(!whatsapp.is_configured());

        let config = PortalConfig {
            docs_url: String::new(),
            ..PortalConfig::default()
        };
        assert!(!config.docs_configured());
    }

    #[test]
    fn partial_json_overrides_keep_defaults_for_missing_fields() {
        let config = PortalConfig::from_json(
            r#"{"whatsapp": {"useWeb": true}, "docsUrl": "https://docs.example.com/nuna"}"#,
        )
        .unwrap();
        assert!(config.whatsapp.use_web);
        assert_eq!(config.whatsapp.phone_number, "18334363285");
        assert!(config.docs_configured());
        assert_eq!(config.perplexity, PerplexityConfig::default());
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = PortalConfig::from_json("{ whatsapp: ").unwrap_err();
        assert!(matches!(err, PortalError::Config(_)));
    }
}
