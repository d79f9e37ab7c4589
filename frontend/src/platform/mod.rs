//! Capabilities the portal needs from its host.
//!
//! Handlers only talk to these traits. `browser` implements them on top of
//! `web-sys`, `memory` implements them without a browser.

pub mod browser;
pub mod memory;

use crate::error::PortalError;
use chrono::{DateTime, Utc};

/// Opens external links.
#[cfg_attr(test, mockall::automock)]
pub trait LinkOpener {
    fn open_new_tab(&self, url: &str) -> Result<(), PortalError>;
}

/// String key-value storage with the semantics of Web Storage.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, PortalError>;
    fn set(&self, key: &str, value: &str) -> Result<(), PortalError>;
    fn remove(&self, key: &str) -> Result<(), PortalError>;
}

/// Fire-and-forget timers on the event loop.
pub trait Scheduler {
    fn set_timeout(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
}

pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
    /// Meters.
    pub accuracy: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionOptions {
    pub enable_high_accuracy: bool,
    pub timeout_ms: u32,
    pub maximum_age_ms: u32,
}

impl Default for PositionOptions {
    fn default() -> Self {
        Self {
            enable_high_accuracy: true,
            timeout_ms: 5_000,
            maximum_age_ms: 0,
        }
    }
}

/// Failure reasons reported by the Geolocation API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeoErrorKind {
    PermissionDenied,
    PositionUnavailable,
    Timeout,
    Unknown,
}

impl GeoErrorKind {
    /// Maps a `GeolocationPositionError.code` value.
    pub fn from_code(code: u16) -> Self {
        match code {
            1 => GeoErrorKind::PermissionDenied,
            2 => GeoErrorKind::PositionUnavailable,
            3 => GeoErrorKind::Timeout,
            _ => GeoErrorKind::Unknown,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            GeoErrorKind::PermissionDenied => "❌ User denied the request for Geolocation",
            GeoErrorKind::PositionUnavailable => "❌ Location information is unavailable",
            GeoErrorKind::Timeout => "❌ The request to get user location timed out",
            GeoErrorKind::Unknown => "❌ An unknown error occurred",
        }
    }
}

pub type PositionCallback = Box<dyn FnOnce(Result<Coordinates, GeoErrorKind>)>;

pub trait Geolocator {
    fn is_supported(&self) -> bool;

    /// Resolves `done` exactly once, asynchronously in the browser.
    fn current_position(&self, options: PositionOptions, done: PositionCallback);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geo_codes_map_to_fixed_kinds() {
        assert_eq!(GeoErrorKind::from_code(1), GeoErrorKind::PermissionDenied);
        assert_eq!(GeoErrorKind::from_code(2), GeoErrorKind::PositionUnavailable);
        assert_eq!(GeoErrorKind::from_code(3), GeoErrorKind::Timeout);
        assert_eq!(GeoErrorKind::from_code(0), GeoErrorKind::Unknown);
        assert_eq!(GeoErrorKind::from_code(42), GeoErrorKind::Unknown);
    }

    #[test]
    fn default_position_options_match_demo_request() {
        let options = PositionOptions::default();
        assert!(options.enable_high_accuracy);
        assert_eq!(options.timeout_ms, 5_000);
        assert_eq!(options.maximum_age_ms, 0);
    }
}
