//! Session state types.
//!
//! This module defines the client-owned, process-lifetime state: auth
//! credentials, the in-flight booking attempt, reviews, and availability.
//! All types are `Clone` to support the functional architecture pattern.
//! Only the auth tokens (and the cached user record) are ever persisted,
//! through the token vault; everything else lives and dies with the process.

use serde::{Deserialize, Serialize};
use wellspring_api::availability::{DayAvailability, TimeSlot};
use wellspring_api::bookings::Booking;
use wellspring_api::payments::PaymentOrder;
use wellspring_api::profile::UserProfile;
use wellspring_api::reviews::Review;
use wellspring_api::services::Service;

// ═══════════════════════════════════════════════════════════════════════
// Auth State
// ═══════════════════════════════════════════════════════════════════════

/// Authentication slice of the session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthState {
    /// Bearer token for protected endpoints.
    pub access_token: Option<String>,

    /// Token used to mint a new access token.
    pub refresh_token: Option<String>,

    /// The authenticated user.
    pub user: Option<UserProfile>,

    /// Transient sign-up/sign-in input, kept while the OTP round-trips.
    pub phone_or_email: Option<String>,
}

impl AuthState {
    /// The signed-in user's id, when a session exists.
    #[must_use]
    pub fn user_id(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.id.as_str())
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Booking Flow
// ═══════════════════════════════════════════════════════════════════════

/// The user's slot selection, captured by the booking modal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingDraft {
    /// Service being booked.
    pub service_id: String,

    /// Service display name (used for the checkout description).
    pub service_name: String,

    /// Selected date (`YYYY-MM-DD`).
    pub date: String,

    /// Selected slot. Must have been AVAILABLE at fetch time.
    pub slot: TimeSlot,
}

/// Everything a booking attempt carries once an order exists.
///
/// Built when order creation succeeds; threaded through checkout,
/// verification, and persistence unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingAttempt {
    /// Acting user.
    pub user_id: String,

    /// Invoice email captured by the confirmation step.
    pub email: String,

    /// Service being booked.
    pub service_id: String,

    /// Service display name.
    pub service_name: String,

    /// Booking date as an ISO datetime (midnight of the selected day).
    pub date: String,

    /// Formatted slot start time ("9:00 AM").
    pub time_slot: String,

    /// The payment-provider order for this attempt.
    pub order: PaymentOrder,
}

/// Signed payment confirmation posted back by the checkout widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentConfirmation {
    /// Order id echoed by the widget.
    pub order_id: String,

    /// Provider-side payment id.
    pub payment_id: String,

    /// Cryptographic signature over order and payment ids.
    pub signature: String,
}

/// Booking orchestration state machine, scoped to one attempt.
///
/// ```text
/// Idle → SlotSelected → OrderCreated → AwaitingPaymentCallback
///      → Verifying → Persisting → Completed
/// ```
///
/// `Failed` is terminal per attempt; retry restarts from `Idle`. There is
/// no resumable in-flight state across process restarts.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum BookingFlow {
    /// No attempt in progress.
    #[default]
    Idle,

    /// A date and an AVAILABLE slot are selected; the confirmation step
    /// captures the invoice email and submits.
    SlotSelected {
        /// The selection.
        draft: BookingDraft,
        /// Set while order creation is in flight; a second confirm while
        /// this is `Some` is ignored.
        confirm: Option<PendingConfirm>,
    },

    /// The backend returned a payment order; the checkout surface is being
    /// presented.
    OrderCreated {
        /// Attempt context.
        attempt: BookingAttempt,
    },

    /// The checkout surface rendered; control belongs to the widget until
    /// it posts its message back.
    AwaitingPaymentCallback {
        /// Attempt context.
        attempt: BookingAttempt,
    },

    /// The widget reported success; server-side verification in flight.
    /// No client-initiated cancellation from here on.
    Verifying {
        /// Attempt context.
        attempt: BookingAttempt,
        /// The widget's signed confirmation.
        payment: PaymentConfirmation,
    },

    /// Verification succeeded; booking creation in flight.
    Persisting {
        /// Attempt context.
        attempt: BookingAttempt,
        /// The verified confirmation.
        payment: PaymentConfirmation,
    },

    /// The booking exists on the backend and is mirrored in the session.
    Completed {
        /// The persisted booking.
        booking: Booking,
    },

    /// Terminal failure for this attempt.
    Failed {
        /// User-visible reason.
        reason: String,
    },
}

/// Confirmation details held while order creation is in flight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingConfirm {
    /// Acting user.
    pub user_id: String,

    /// Invoice email.
    pub email: String,

    /// Client-generated idempotency key for order creation.
    pub idempotency_key: String,
}

impl BookingFlow {
    /// Whether the attempt reached a terminal state (completed or failed).
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed { .. } | Self::Failed { .. })
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Session State
// ═══════════════════════════════════════════════════════════════════════

/// Root session state.
///
/// The only shared mutable resource in the client; written exclusively
/// through dispatched actions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    /// Authentication slice.
    pub auth: AuthState,

    /// OTP verification pending for this flow, when one is in flight.
    pub otp_pending: Option<crate::actions::OtpContext>,

    /// Booking orchestration state for the current attempt.
    pub flow: BookingFlow,

    /// The most recently created booking, mirrored after persistence.
    pub current_booking: Option<Booking>,

    /// Reviews for the service currently in view.
    pub reviews: Vec<Review>,

    /// Availability matrix for the service currently in view, sorted by
    /// date ascending. Not cached beyond the screen's lifetime.
    pub availability: Vec<DayAvailability>,

    /// Service detail, re-fetched after review mutations to pick up the
    /// updated aggregate rating.
    pub service: Option<Service>,

    /// A network call unrelated to payment is in flight.
    pub is_loading: bool,

    /// A booking attempt is between confirmation and a terminal state.
    pub is_processing: bool,

    /// User-visible error from the most recent failure.
    pub error: Option<String>,
}

impl SessionState {
    /// Selectable slots for a given date: AVAILABLE slots of a bookable
    /// day, in backend order.
    #[must_use]
    pub fn selectable_slots(&self, date: &str) -> Vec<&TimeSlot> {
        self.availability
            .iter()
            .find(|day| day.date == date)
            .map(DayAvailability::selectable_slots)
            .unwrap_or_default()
    }

    /// Whether the signed-in user may edit or delete the given review.
    ///
    /// Drives the UI affordance only; the server re-checks authorship.
    #[must_use]
    pub fn can_edit_review(&self, review: &Review) -> bool {
        self.auth
            .user_id()
            .is_some_and(|user_id| review.is_authored_by(user_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wellspring_api::availability::SlotStatus;

    fn slot(id: &str, status: SlotStatus) -> TimeSlot {
        TimeSlot {
            id: id.to_string(),
            start_time: "2025-06-02T09:00:00Z".to_string(),
            end_time: "2025-06-02T10:00:00Z".to_string(),
            status,
        }
    }

    #[test]
    fn selectable_slots_only_offers_available() {
        let state = SessionState {
            availability: vec![DayAvailability {
                date: "2025-06-02".to_string(),
                is_bookable: true,
                time_slots: vec![slot("s1", SlotStatus::Available), slot("s2", SlotStatus::Booked)],
            }],
            ..SessionState::default()
        };

        let ids: Vec<&str> = state
            .selectable_slots("2025-06-02")
            .iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(ids, vec!["s1"]);
        assert!(state.selectable_slots("2025-06-03").is_empty());
    }

    #[test]
    fn review_affordance_requires_matching_author() {
        let review = Review {
            id: "r1".to_string(),
            user_id: "u1".to_string(),
            user_name: None,
            rating: 5,
            comment: "Great".to_string(),
            created_at: None,
            updated_at: None,
        };

        let mut state = SessionState::default();
        assert!(!state.can_edit_review(&review));

        state.auth.user = Some(UserProfile {
            id: "u1".to_string(),
            name: "Asha".to_string(),
            username: None,
            phone_or_email: "asha@example.com".to_string(),
            date_of_birth: None,
            avatar: None,
            role: "USER".to_string(),
            is_verified: true,
            is_agreed_to_terms: true,
            created_at: None,
            updated_at: None,
        });
        assert!(state.can_edit_review(&review));

        let foreign = Review {
            user_id: "u2".to_string(),
            ..review
        };
        assert!(!state.can_edit_review(&foreign));
    }
}
