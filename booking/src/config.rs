//! Client configuration.
//!
//! Configuration values are provided by the embedding application (or read
//! from the environment at startup), not hardcoded in reducers.

use crate::availability::AvailabilityWindow;
use crate::error::BookingError;

/// Checkout theme color passed to the payment widget.
const DEFAULT_THEME_COLOR: &str = "#082B12";

/// Client configuration shared by the reducers.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Payment-widget key id (publishable key).
    pub checkout_key_id: String,

    /// Display name shown in the checkout widget.
    ///
    /// Default: "Wellspring"
    pub display_name: String,

    /// Brand color passed to the checkout widget theme.
    pub theme_color: String,

    /// Window shape for availability lookups.
    ///
    /// Default: 30 days
    pub availability_window: AvailabilityWindow,
}

impl ClientConfig {
    /// Create a configuration with the given checkout key.
    #[must_use]
    pub fn new(checkout_key_id: String) -> Self {
        Self {
            checkout_key_id,
            display_name: "Wellspring".to_string(),
            theme_color: DEFAULT_THEME_COLOR.to_string(),
            availability_window: AvailabilityWindow::default(),
        }
    }

    /// Set the checkout display name.
    #[must_use]
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = name.into();
        self
    }

    /// Set the availability window shape.
    #[must_use]
    pub const fn with_availability_window(mut self, window: AvailabilityWindow) -> Self {
        self.availability_window = window;
        self
    }

    /// Read the configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::MissingContext`] if
    /// `WELLSPRING_CHECKOUT_KEY_ID` is not set.
    pub fn from_env() -> Result<Self, BookingError> {
        let checkout_key_id = std::env::var("WELLSPRING_CHECKOUT_KEY_ID")
            .map_err(|_| BookingError::MissingContext)?;
        Ok(Self::new(checkout_key_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_overrides_defaults() {
        let config = ClientConfig::new("rzp_test_key".to_string())
            .with_display_name("Palash App")
            .with_availability_window(AvailabilityWindow::CalendarMonth);

        assert_eq!(config.checkout_key_id, "rzp_test_key");
        assert_eq!(config.display_name, "Palash App");
        assert_eq!(config.availability_window, AvailabilityWindow::CalendarMonth);
        assert_eq!(config.theme_color, "#082B12");
    }
}
