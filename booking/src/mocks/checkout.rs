//! Scripted checkout surface for testing.

use crate::error::BookingError;
use crate::providers::checkout::{CheckoutMessage, CheckoutOptions, CheckoutSurface};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
enum Script {
    /// Approve with the presented order id and fixed payment credentials.
    Approve {
        payment_id: String,
        signature: String,
    },
    /// Reply with exactly this message.
    Message(CheckoutMessage),
    /// The user dismisses the widget.
    Dismiss,
    /// The surface cannot be presented at all.
    Unavailable,
}

/// Scripted checkout surface.
///
/// Records every presented configuration; clones share the recorder.
#[derive(Debug, Clone)]
pub struct ScriptedCheckout {
    script: Script,
    presented: Arc<Mutex<Vec<CheckoutOptions>>>,
}

impl ScriptedCheckout {
    /// A surface whose widget approves the payment, echoing the presented
    /// order id with fixed payment credentials.
    #[must_use]
    pub fn approving() -> Self {
        Self {
            script: Script::Approve {
                payment_id: "pay_1".to_string(),
                signature: "sig_1".to_string(),
            },
            presented: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A surface whose widget the user dismisses.
    #[must_use]
    pub fn dismissing() -> Self {
        Self {
            script: Script::Dismiss,
            presented: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A surface whose widget posts exactly the given message.
    #[must_use]
    pub fn with_message(message: CheckoutMessage) -> Self {
        Self {
            script: Script::Message(message),
            presented: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A surface that cannot be presented.
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            script: Script::Unavailable,
            presented: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Every configuration presented so far.
    #[must_use]
    pub fn presented(&self) -> Vec<CheckoutOptions> {
        self.presented
            .lock()
            .map(|presented| presented.clone())
            .unwrap_or_default()
    }
}

impl CheckoutSurface for ScriptedCheckout {
    async fn present(&self, options: CheckoutOptions) -> Result<CheckoutMessage, BookingError> {
        if let Ok(mut presented) = self.presented.lock() {
            presented.push(options.clone());
        }

        match &self.script {
            Script::Approve {
                payment_id,
                signature,
            } => Ok(CheckoutMessage::Success {
                order_id: options.order_id,
                payment_id: payment_id.clone(),
                signature: signature.clone(),
            }),
            Script::Message(message) => Ok(message.clone()),
            Script::Dismiss => Ok(CheckoutMessage::Error),
            Script::Unavailable => Err(BookingError::CheckoutUnavailable),
        }
    }
}
