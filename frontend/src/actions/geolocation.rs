use crate::error::PortalError;
use crate::notifications::{Notifier, Severity};
use crate::platform::{Coordinates, Geolocator, PositionOptions};
use std::rc::Rc;
use yew::Callback;

pub const UNSUPPORTED_OUTPUT: &str = "❌ Geolocation is not supported by your browser";
pub const PENDING_OUTPUT: &str = "📍 Getting your location...";

pub fn format_position(coords: &Coordinates) -> String {
    format!(
        "✅ Latitude: {:.6}, Longitude: {:.6}\nAccuracy: {:.0} meters",
        coords.latitude, coords.longitude, coords.accuracy
    )
}

#[derive(Clone)]
pub struct GeolocationDemo {
    geolocator: Rc<dyn Geolocator>,
    notifier: Rc<dyn Notifier>,
}

impl GeolocationDemo {
    pub fn new(geolocator: Rc<dyn Geolocator>, notifier: Rc<dyn Notifier>) -> Self {
        Self {
            geolocator,
            notifier,
        }
    }

    /// Asks for the current position. `output` receives the text for the
    /// location panel: first a pending line, then the result.
    pub fn request(&self, output: Callback<String>) {
        if !self.geolocator.is_supported() {
            let error = PortalError::GeolocationUnsupported;
            log::warn!("{}", error);
            output.emit(UNSUPPORTED_OUTPUT.to_string());
            self.notifier
                .notify("❌ Geolocation not supported", error.severity());
            return;
        }

        output.emit(PENDING_OUTPUT.to_string());
        self.notifier
            .notify("📍 Requesting location access...", Severity::Info);

        let notifier = self.notifier.clone();
        self.geolocator.current_position(
            PositionOptions::default(),
            Box::new(move |outcome| match outcome {
                Ok(coords) => {
                    output.emit(format_position(&coords));
                    notifier.notify("✅ Location retrieved successfully", Severity::Success);
                }
                Err(kind) => {
                    let error = PortalError::Geolocation(kind);
                    log::warn!("Geolocation failed ({:?}): {}", kind, error);
                    output.emit(error.to_string());
                    notifier.notify(&error.to_string(), error.severity());
                }
            }),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_uses_fixed_precision() {
        let text = format_position(&Coordinates {
            latitude: 60.169_856_123,
            longitude: 24.938_379_9,
            accuracy: 17.6,
        });
        assert_eq!(
            text,
            "✅ Latitude: 60.169856, Longitude: 24.938380\nAccuracy: 18 meters"
        );
    }
}
