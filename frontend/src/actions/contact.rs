use crate::config::{PerplexityConfig, PortalConfig, WhatsAppConfig};
use crate::error::PortalError;
use crate::notifications::{Notifier, Severity};
use crate::platform::LinkOpener;
use std::rc::Rc;
use urlencoding::encode;

pub fn whatsapp_url(whatsapp: &WhatsAppConfig) -> Result<String, PortalError> {
    if !whatsapp.is_configured() {
        return Err(PortalError::Unconfigured("whatsapp.phoneNumber"));
    }
    let phone = whatsapp.phone_number.trim();
    let message = encode(&whatsapp.default_message);
    Ok(if whatsapp.use_web {
        format!("https://web.whatsapp.com/send?phone={}&text={}", phone, message)
    } else {
        format!("https://wa.me/{}?text={}", phone, message)
    })
}

pub fn perplexity_url(perplexity: &PerplexityConfig) -> String {
    format!(
        "{}?q={}",
        perplexity.base_url,
        encode(&perplexity.default_query)
    )
}

pub fn docs_url(config: &PortalConfig) -> Result<String, PortalError> {
    if config.docs_configured() {
        Ok(config.docs_url.trim().to_string())
    } else {
        Err(PortalError::Unconfigured("docsUrl"))
    }
}

/// Click handlers for the three support options.
#[derive(Clone)]
pub struct ContactActions {
    config: Rc<PortalConfig>,
    opener: Rc<dyn LinkOpener>,
    notifier: Rc<dyn Notifier>,
}

impl ContactActions {
    pub fn new(
        config: Rc<PortalConfig>,
        opener: Rc<dyn LinkOpener>,
        notifier: Rc<dyn Notifier>,
    ) -> Self {
        Self {
            config,
            opener,
            notifier,
        }
    }

    pub fn open_whatsapp(&self) {
        match whatsapp_url(&self.config.whatsapp) {
            Ok(url) => {
                if self.open("WhatsApp", &url) {
                    log::info!("📱 Opening WhatsApp chat...");
                }
            }
            Err(e) => {
                log::info!("WhatsApp link skipped: {}", e);
                self.notifier.notify(
                    "⚠️ Please configure your WhatsApp number before opening a chat",
                    e.severity(),
                );
            }
        }
    }

    pub fn open_perplexity(&self) {
        let url = perplexity_url(&self.config.perplexity);
        if self.open("Perplexity AI", &url) {
            log::info!("🤖 Opening Perplexity AI...");
        }
    }

    pub fn open_docs(&self) {
        match docs_url(&self.config) {
            Ok(url) => {
                self.open("the documentation", &url);
            }
            Err(e) => {
                log::info!("Docs link skipped: {}", e);
                self.notifier
                    .notify("📚 Documentation URL is not configured yet", e.severity());
            }
        }
    }

    fn open(&self, target: &str, url: &str) -> bool {
        match self.opener.open_new_tab(url) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("Failed to open {}: {}", url, e);
                self.notifier
                    .notify(&format!("❌ Could not open {}: {}", target, e), Severity::Error);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WHATSAPP_NUMBER_PLACEHOLDER;
    use crate::notifications::MockNotifier;
    use crate::platform::MockLinkOpener;

    fn actions(config: PortalConfig, opener: MockLinkOpener, notifier: MockNotifier) -> ContactActions {
        ContactActions::new(Rc::new(config), Rc::new(opener), Rc::new(notifier))
    }

    #[test]
    fn whatsapp_app_link_targets_wa_me() {
        let url = whatsapp_url(&WhatsAppConfig::default()).unwrap();
        assert!(url.contains("wa.me/18334363285"));
        assert!(url.contains("?text=Hi%21%20I%20need%20support"));
    }

    #[test]
    fn whatsapp_web_link_uses_send_endpoint() {
        let whatsapp = WhatsAppConfig {
            use_web: true,
            ..WhatsAppConfig::default()
        };
        let url = whatsapp_url(&whatsapp).unwrap();
        assert!(url.starts_with("https://web.whatsapp.com/send?phone=18334363285&text="));
    }

    #[test]
    fn perplexity_query_is_encoded() {
        assert_eq!(
            perplexity_url(&PerplexityConfig::default()),
            "https://www.perplexity.ai/search?q=NuNa%20Windows%20automation%20support"
        );
    }

    #[test]
    fn placeholder_number_warns_once_and_never_navigates() {
        let mut config = PortalConfig::default();
        config.whatsapp.phone_number = WHATSAPP_NUMBER_PLACEHOLDER.to_string();

        let mut opener = MockLinkOpener::new();
        opener.expect_open_new_tab().never();
        let mut notifier = MockNotifier::new();
        notifier
            .expect_notify()
            .withf(|_, severity| *severity == Severity::Warning)
            .times(1)
            .return_const(());

        actions(config, opener, notifier).open_whatsapp();
    }

    #[test]
    fn configured_number_opens_chat_without_notifying() {
        let mut opener = MockLinkOpener::new();
        opener
            .expect_open_new_tab()
            .withf(|url| url.contains("wa.me/18334363285"))
            .times(1)
            .returning(|_| Ok(()));
        let mut notifier = MockNotifier::new();
        notifier.expect_notify().never();

        actions(PortalConfig::default(), opener, notifier).open_whatsapp();
    }

    #[test]
    fn unconfigured_docs_warn_instead_of_opening() {
        let mut opener = MockLinkOpener::new();
        opener.expect_open_new_tab().never();
        let mut notifier = MockNotifier::new();
        notifier
            .expect_notify()
            .withf(|message, severity| {
                message == "📚 Documentation URL is not configured yet"
                    && *severity == Severity::Warning
            })
            .times(1)
            .return_const(());

        actions(PortalConfig::default(), opener, notifier).open_docs();
    }

    #[test]
    fn blocked_popup_is_reported_as_error() {
        let mut opener = MockLinkOpener::new();
        opener
            .expect_open_new_tab()
            .times(1)
            .returning(|_| Err(PortalError::Navigation("popup blocked".to_string())));
        let mut notifier = MockNotifier::new();
        notifier
            .expect_notify()
            .withf(|message, severity| {
                message.contains("Perplexity AI") && *severity == Severity::Error
            })
            .times(1)
            .return_const(());

        actions(PortalConfig::default(), opener, notifier).open_perplexity();
    }
}
