//! Error types for booking, review, and session operations.

use thiserror::Error;

/// Result type alias for booking operations.
pub type Result<T> = std::result::Result<T, BookingError>;

/// Error taxonomy for the client's flows.
///
/// Every variant maps to a user-visible message and a recoverable state;
/// nothing here is fatal to the process.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BookingError {
    // ═══════════════════════════════════════════════════════════
    // Validation Errors (block submission, no network call made)
    // ═══════════════════════════════════════════════════════════
    /// Email address failed the client-side shape check.
    #[error("Please enter a valid email address")]
    InvalidEmail,

    /// OTP contained non-digit characters or was empty.
    #[error("OTP must contain only digits")]
    InvalidOtp,

    /// Review rating outside 1–5 or comment blank.
    #[error("A rating and a comment are required")]
    InvalidReview,

    /// Session is missing the user or service context a flow needs.
    #[error("User ID or Service ID is missing")]
    MissingContext,

    // ═══════════════════════════════════════════════════════════
    // Payment-domain Errors
    // ═══════════════════════════════════════════════════════════
    /// Order creation was rejected or unreachable.
    #[error("Failed to create order")]
    OrderCreationFailed,

    /// The checkout surface could not be presented.
    #[error("Payment initialization failed. Please try again.")]
    CheckoutUnavailable,

    /// The user dismissed the checkout, or the widget reported an error.
    #[error(
        "Payment failed. If you have already paid, please wait for the admin to confirm your booking."
    )]
    PaymentFailed,

    /// The backend rejected the payment signature.
    #[error("Payment verification failed")]
    VerificationFailed,

    /// Payment was captured but the booking write failed; the backend
    /// reconciles this window.
    #[error(
        "Payment was captured but the booking could not be confirmed. If you have been charged, the booking will be confirmed or refunded by the admin."
    )]
    PersistenceFailed,

    // ═══════════════════════════════════════════════════════════
    // Authorization / Ownership
    // ═══════════════════════════════════════════════════════════
    /// The acting user does not own the review being mutated.
    #[error("You can only edit your own review")]
    NotReviewAuthor,

    // ═══════════════════════════════════════════════════════════
    // System Errors
    // ═══════════════════════════════════════════════════════════
    /// A network call failed; the transient message shown to the user.
    #[error("{0}")]
    Network(String),

    /// The token vault could not be read or written.
    #[error("Secure storage failed: {0}")]
    Vault(String),
}

impl BookingError {
    /// Returns `true` if this error is recoverable by editing input
    /// in place, without restarting a flow.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidEmail | Self::InvalidOtp | Self::InvalidReview | Self::MissingContext
        )
    }

    /// Returns `true` if this error belongs to the payment domain.
    #[must_use]
    pub const fn is_payment(&self) -> bool {
        matches!(
            self,
            Self::OrderCreationFailed
                | Self::CheckoutUnavailable
                | Self::PaymentFailed
                | Self::VerificationFailed
                | Self::PersistenceFailed
        )
    }
}
