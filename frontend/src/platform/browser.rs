use super::{
    Clock, Coordinates, GeoErrorKind, Geolocator, KeyValueStore, LinkOpener, PositionCallback,
    PositionOptions, Scheduler,
};
use crate::config::PortalConfig;
use crate::error::PortalError;
use chrono::{DateTime, Utc};
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{js_sys, window, ScrollBehavior, ScrollIntoViewOptions};

/// Id of the optional `<script type="application/json">` block that overrides
/// the built-in configuration.
pub const CONFIG_ELEMENT_ID: &str = "nuna-config";

/// Best-effort text of a thrown JS value.
pub fn js_error_message(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}

pub fn load_config() -> PortalConfig {
    let Some(raw) = window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content())
    else {
        return PortalConfig::default();
    };

    match PortalConfig::from_json(&raw) {
        Ok(config) => {
            log::info!("Loaded portal configuration from #{}", CONFIG_ELEMENT_ID);
            config
        }
        Err(e) => {
            log::warn!("Ignoring #{}: {}", CONFIG_ELEMENT_ID, e);
            PortalConfig::default()
        }
    }
}

pub fn scroll_to_section(section_id: &str) {
    if let Some(section) = window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.get_element_by_id(section_id))
    {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        section.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// Uniform integer in `0..upper`.
pub fn random_below(upper: u32) -> u32 {
    (js_sys::Math::random() * f64::from(upper)).floor() as u32
}

#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserLinkOpener;

impl LinkOpener for BrowserLinkOpener {
    fn open_new_tab(&self, url: &str) -> Result<(), PortalError> {
        let window = window().ok_or_else(|| PortalError::Navigation("no window".to_string()))?;
        match window.open_with_url_and_target(url, "_blank") {
            Ok(Some(_)) => Ok(()),
            Ok(None) => Err(PortalError::Navigation(
                "the browser blocked the new tab".to_string(),
            )),
            Err(e) => Err(PortalError::Navigation(js_error_message(&e))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageArea {
    Local,
    Session,
}

/// Web Storage adapter. The storage object is looked up on every call so a
/// `SecurityError` (storage disabled) surfaces as an operation failure.
#[derive(Debug, Clone, Copy)]
pub struct BrowserStorage {
    area: StorageArea,
}

impl BrowserStorage {
    pub fn local() -> Self {
        Self {
            area: StorageArea::Local,
        }
    }

    pub fn session() -> Self {
        Self {
            area: StorageArea::Session,
        }
    }

    fn storage(&self) -> Result<web_sys::Storage, PortalError> {
        let window = window().ok_or_else(|| PortalError::Storage("no window".to_string()))?;
        let storage = match self.area {
            StorageArea::Local => window.local_storage(),
            StorageArea::Session => window.session_storage(),
        }
        .map_err(|e| PortalError::Storage(js_error_message(&e)))?;
        storage.ok_or_else(|| PortalError::Storage(format!("{:?} storage is unavailable", self.area)))
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, PortalError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| PortalError::Storage(js_error_message(&e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PortalError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| PortalError::Storage(js_error_message(&e)))
    }

    fn remove(&self, key: &str) -> Result<(), PortalError> {
        self.storage()?
            .remove_item(key)
            .map_err(|e| PortalError::Storage(js_error_message(&e)))
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn set_timeout(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        Timeout::new(delay_ms, task).forget();
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserGeolocator;

fn read_number(object: &JsValue, name: &str) -> Option<f64> {
    js_sys::Reflect::get(object, &JsValue::from_str(name))
        .ok()
        .and_then(|value| value.as_f64())
}

fn read_coordinates(position: &JsValue) -> Option<Coordinates> {
    let coords = js_sys::Reflect::get(position, &JsValue::from_str("coords")).ok()?;
    Some(Coordinates {
        latitude: read_number(&coords, "latitude")?,
        longitude: read_number(&coords, "longitude")?,
        accuracy: read_number(&coords, "accuracy")?,
    })
}

impl Geolocator for BrowserGeolocator {
    fn is_supported(&self) -> bool {
        window()
            .map(|w| js_sys::Reflect::has(&w.navigator(), &JsValue::from_str("geolocation")).unwrap_or(false))
            .unwrap_or(false)
    }

    fn current_position(&self, options: PositionOptions, done: PositionCallback) {
        // Only one of the two callbacks ever runs.
        let done = Rc::new(RefCell::new(Some(done)));
        let finish = move |outcome: Result<Coordinates, GeoErrorKind>| {
            let callback = done.borrow_mut().take();
            if let Some(callback) = callback {
                callback(outcome);
            }
        };

        let geolocation = match window().map(|w| w.navigator().geolocation()) {
            Some(Ok(geolocation)) => geolocation,
            Some(Err(e)) => {
                log::error!("Geolocation unavailable: {}", js_error_message(&e));
                finish(Err(GeoErrorKind::Unknown));
                return;
            }
            None => {
                finish(Err(GeoErrorKind::Unknown));
                return;
            }
        };

        let finish = Rc::new(finish);
        let on_success = {
            let finish = finish.clone();
            Closure::once_into_js(move |position: JsValue| {
                finish(read_coordinates(&position).ok_or(GeoErrorKind::Unknown));
            })
        };
        let on_error = {
            let finish = finish.clone();
            Closure::once_into_js(move |error: JsValue| {
                let code = read_number(&error, "code").unwrap_or(0.0) as u16;
                finish(Err(GeoErrorKind::from_code(code)));
            })
        };

        let web_options = web_sys::PositionOptions::new();
        web_options.set_enable_high_accuracy(options.enable_high_accuracy);
        web_options.set_timeout(options.timeout_ms);
        web_options.set_maximum_age(options.maximum_age_ms);

        if let Err(e) = geolocation.get_current_position_with_error_callback_and_options(
            on_success.unchecked_ref(),
            Some(on_error.unchecked_ref()),
            &web_options,
        ) {
            log::error!("getCurrentPosition threw: {}", js_error_message(&e));
            finish(Err(GeoErrorKind::Unknown));
        }
    }
}
