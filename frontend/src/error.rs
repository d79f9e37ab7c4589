use crate::platform::GeoErrorKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortalError {
    #[error("{0} is not configured")]
    Unconfigured(&'static str),
    #[error("Geolocation is not supported by this browser")]
    GeolocationUnsupported,
    #[error("{}", .0.message())]
    Geolocation(GeoErrorKind),
    #[error("{0}")]
    Storage(String),
    #[error("Failed to open link: {0}")]
    Navigation(String),
    #[error("DOM error: {0}")]
    Dom(String),
    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl PortalError {
    /// Severity the user should see this error reported with.
    pub fn severity(&self) -> crate::notifications::Severity {
        match self {
            PortalError::Unconfigured(_) => crate::notifications::Severity::Warning,
            _ => crate::notifications::Severity::Error,
        }
    }
}
