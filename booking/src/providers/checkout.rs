//! Checkout surface provider.
//!
//! The third-party payment widget is an opaque collaborator: the client
//! hands it a configuration and suspends until it posts exactly one of two
//! message shapes back. The surface trait models that handoff; the message
//! enum closes the untyped-callback gap by making any other shape
//! unrepresentable.

use crate::error::BookingError;
use serde::{Deserialize, Serialize};
use std::future::Future;

/// Contact details pre-filled into the checkout form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutPrefill {
    /// User's display name.
    pub name: String,
    /// User's email.
    pub email: String,
    /// User's contact number (or email, when that is the account key).
    pub contact: String,
}

/// Brand theme passed to the widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutTheme {
    /// Accent color, as a hex string.
    pub color: String,
}

/// Configuration handed to the checkout widget.
///
/// Field names follow the widget's own option keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutOptions {
    /// Publishable widget key.
    pub key: String,
    /// Amount in minor currency units.
    pub amount: u64,
    /// ISO currency code.
    pub currency: String,
    /// App display name.
    pub name: String,
    /// Payment description line.
    pub description: String,
    /// Provider order id being paid.
    pub order_id: String,
    /// Pre-filled contact details.
    pub prefill: CheckoutPrefill,
    /// Brand theme.
    pub theme: CheckoutTheme,
}

/// The widget's callback message: exactly two shapes.
///
/// On the wire this is `{type: "payment_success", orderId, paymentId,
/// signature}` or `{type: "payment_error"}`; dismissal maps to the error
/// shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CheckoutMessage {
    /// Payment authorized by the widget; carries the ids and signature the
    /// backend verifies.
    #[serde(rename = "payment_success", rename_all = "camelCase")]
    Success {
        /// Order id echoed by the widget.
        order_id: String,
        /// Provider-side payment id.
        payment_id: String,
        /// Signature over order and payment ids.
        signature: String,
    },

    /// The user dismissed the checkout, or the widget failed.
    #[serde(rename = "payment_error")]
    Error,
}

/// The embedded surface that renders the checkout widget.
///
/// `present` is a cooperative handoff: it resolves only when the widget
/// posts its message back. The surface signals the render itself through
/// the `CheckoutOpened` action emitted alongside the message future.
pub trait CheckoutSurface: Send + Sync {
    /// Present the checkout and resolve with the widget's message.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::CheckoutUnavailable`] if the surface could
    /// not be presented at all.
    fn present(
        &self,
        options: CheckoutOptions,
    ) -> impl Future<Output = Result<CheckoutMessage, BookingError>> + Send;
}
