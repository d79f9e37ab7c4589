//! Support option routing against injected configuration.
mod common;

use common::Recorder;
use nuna_portal::actions::contact::{perplexity_url, whatsapp_url};
use nuna_portal::actions::ContactActions;
use nuna_portal::config::{PortalConfig, WHATSAPP_NUMBER_PLACEHOLDER};
use nuna_portal::error::PortalError;
use nuna_portal::notifications::Severity;
use nuna_portal::platform::memory::LinkLog;
use nuna_portal::platform::LinkOpener;
use std::rc::Rc;

fn contact(config: PortalConfig) -> (ContactActions, Rc<LinkLog>, Rc<Recorder>) {
    let links = Rc::new(LinkLog::new());
    let recorder = Rc::new(Recorder::default());
    let actions = ContactActions::new(Rc::new(config), links.clone(), recorder.clone());
    (actions, links, recorder)
}

#[test]
fn placeholder_number_warns_once_and_opens_nothing() {
    let mut config = PortalConfig::default();
    config.whatsapp.phone_number = WHATSAPP_NUMBER_PLACEHOLDER.to_string();
    let (actions, links, recorder) = contact(config);

    actions.open_whatsapp();

    assert!(links.opened().is_empty());
    assert_eq!(recorder.severities(), vec![Severity::Warning]);
}

#[test]
fn app_link_uses_wa_me_with_encoded_message() {
    let (actions, links, recorder) = contact(PortalConfig::default());
    actions.open_whatsapp();

    let opened = links.opened();
    assert_eq!(opened.len(), 1);
    assert!(opened[0].contains("wa.me/18334363285"));
    assert!(opened[0].ends_with("?text=Hi%21%20I%20need%20support%20with%20my%20NuNa%20system."));
    assert!(recorder.seen().is_empty());
}

#[test]
fn web_override_keeps_the_default_number() {
    let config = PortalConfig::from_json(r#"{ "whatsapp": { "useWeb": true } }"#).unwrap();
    let url = whatsapp_url(&config.whatsapp).unwrap();
    assert!(url.starts_with("https://web.whatsapp.com/send?phone=18334363285&text="));
}

#[test]
fn perplexity_opens_search_with_default_query() {
    let (actions, links, _recorder) = contact(PortalConfig::default());
    actions.open_perplexity();
    assert_eq!(
        links.opened(),
        vec![perplexity_url(&PortalConfig::default().perplexity)]
    );
    assert_eq!(
        links.opened()[0],
        "https://www.perplexity.ai/search?q=NuNa%20Windows%20automation%20support"
    );
}

#[test]
fn unconfigured_docs_warn_and_configured_docs_open() {
    let (actions, links, recorder) = contact(PortalConfig::default());
    actions.open_docs();
    assert!(links.opened().is_empty());
    assert_eq!(recorder.severities(), vec![Severity::Warning]);

    let config = PortalConfig {
        docs_url: "https://docs.example.com/nuna".to_string(),
        ..PortalConfig::default()
    };
    let (actions, links, recorder) = contact(config);
    actions.open_docs();
    assert_eq!(links.opened(), vec!["https://docs.example.com/nuna".to_string()]);
    assert!(recorder.seen().is_empty());
}

struct BlockedPopups;

impl LinkOpener for BlockedPopups {
    fn open_new_tab(&self, _url: &str) -> Result<(), PortalError> {
        Err(PortalError::Navigation("the browser blocked the new tab".to_string()))
    }
}

#[test]
fn blocked_popup_is_reported_as_an_error() {
    let recorder = Rc::new(Recorder::default());
    let actions = ContactActions::new(
        Rc::new(PortalConfig::default()),
        Rc::new(BlockedPopups),
        recorder.clone(),
    );
    actions.open_perplexity();

    let seen = recorder.seen();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].1, Severity::Error);
    assert!(seen[0].0.starts_with("❌ Could not open Perplexity AI"));
}
