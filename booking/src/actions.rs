//! Client actions.
//!
//! This module defines all possible inputs to the session reducers.
//! Actions follow the command/event split: **commands** are dispatched by
//! the embedding (a tap, a submit), **events** are produced by effects
//! (a response arrived, the checkout posted its message).

use crate::providers::checkout::CheckoutMessage;
use serde::{Deserialize, Serialize};
use wellspring_api::auth::AuthTokens;
use wellspring_api::availability::{DayAvailability, TimeSlot};
use wellspring_api::bookings::Booking;
use wellspring_api::payments::PaymentOrder;
use wellspring_api::reviews::Review;
use wellspring_api::services::Service;

/// Which OTP flow a verification belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OtpContext {
    /// Verifying a sign-up OTP.
    SignUp,
    /// Verifying a sign-in OTP.
    SignIn,
}

/// Client action.
///
/// The only way to communicate with the session store. Reducers are pure:
/// `(State, Action, Env) → (State, Effects)`.
#[derive(Debug, Clone)]
pub enum ClientAction {
    // ═══════════════════════════════════════════════════════════════════════
    // Session / Auth
    // ═══════════════════════════════════════════════════════════════════════
    /// Command: register a new account (backend dispatches an OTP).
    SignUp {
        /// Display name.
        name: String,
        /// Phone number or email address.
        phone_or_email: String,
    },

    /// Command: start a sign-in (backend dispatches an OTP).
    SignIn {
        /// Phone number or email address.
        phone_or_email: String,
    },

    /// Event: the backend accepted the request and sent an OTP.
    AuthOtpSent {
        /// Which flow the OTP belongs to.
        context: OtpContext,
    },

    /// Command: verify the OTP the user typed.
    ///
    /// Rejected client-side unless the code is non-empty and digits only.
    VerifyOtp {
        /// The one-time password.
        code: String,
    },

    /// Event: OTP verification (or token refresh) returned session tokens.
    SessionEstablished {
        /// Fresh tokens plus the authenticated user.
        tokens: AuthTokens,
    },

    /// Event: tokens and user were written to the vault.
    SessionPersisted,

    /// Command: rotate tokens through the refresh endpoint.
    RefreshSession,

    /// Command: sign out and clear the vault.
    SignOut,

    /// Event: the vault was cleared.
    SignedOut,

    /// Event: an auth call failed.
    AuthFailed {
        /// User-visible reason.
        reason: String,
    },

    /// Command: dismiss the current error message.
    ClearError,

    // ═══════════════════════════════════════════════════════════════════════
    // Availability
    // ═══════════════════════════════════════════════════════════════════════
    /// Command: fetch the availability matrix for a service.
    LoadAvailability {
        /// Service to look up.
        service_id: String,
    },

    /// Event: the availability matrix arrived.
    AvailabilityLoaded {
        /// Days in backend order; the reducer sorts before storing.
        days: Vec<DayAvailability>,
    },

    /// Event: the availability lookup failed. The matrix is cleared so the
    /// booking modal shows no selectable dates.
    AvailabilityFailed {
        /// User-visible reason.
        reason: String,
    },

    // ═══════════════════════════════════════════════════════════════════════
    // Booking Orchestration
    // ═══════════════════════════════════════════════════════════════════════
    /// Command: the user picked a date and a time slot in the booking
    /// modal. The slot must have been AVAILABLE at fetch time.
    SelectSlot {
        /// Service being booked.
        service_id: String,
        /// Service display name (for the checkout description).
        service_name: String,
        /// Selected date (`YYYY-MM-DD`).
        date: String,
        /// Selected slot.
        slot: TimeSlot,
    },

    /// Command: the confirmation modal submitted with an invoice email.
    ///
    /// Starts order creation. A second confirm while one is in flight is
    /// ignored; the order-creation call carries a client-generated
    /// idempotency key.
    ConfirmBooking {
        /// Invoice email.
        email: String,
    },

    /// Event: the backend returned a payment order.
    OrderCreated {
        /// The provider order for this attempt.
        order: PaymentOrder,
    },

    /// Event: order creation failed. No booking record exists.
    OrderFailed {
        /// User-visible reason.
        reason: String,
    },

    /// Event: the checkout surface rendered; control now belongs to the
    /// widget's own event loop.
    CheckoutOpened,

    /// Event: the checkout surface could not be presented.
    CheckoutFailed {
        /// User-visible reason.
        reason: String,
    },

    /// Event: the widget posted its message back.
    CheckoutMessageReceived {
        /// One of exactly two shapes: success with ids and signature, or
        /// error (which also covers user dismissal).
        message: CheckoutMessage,
    },

    /// Event: server-side verification accepted the payment signature.
    PaymentVerified,

    /// Event: server-side verification rejected the payment.
    VerificationFailed {
        /// User-visible reason.
        reason: String,
    },

    /// Event: the booking was written and is mirrored into the session.
    BookingPersisted {
        /// The persisted booking.
        booking: Booking,
    },

    /// Event: payment succeeded but the booking write failed. The user is
    /// told the admin will confirm or refund; the backend reconciles.
    BookingPersistenceFailed {
        /// User-visible reason.
        reason: String,
    },

    /// Command: restart from `Idle` after a terminal state.
    ResetBookingFlow,

    // ═══════════════════════════════════════════════════════════════════════
    // Reviews
    // ═══════════════════════════════════════════════════════════════════════
    /// Command: fetch the reviews for a service.
    LoadReviews {
        /// Service whose reviews to fetch.
        service_id: String,
    },

    /// Event: reviews arrived.
    ReviewsLoaded {
        /// The service's reviews.
        reviews: Vec<Review>,
    },

    /// Command: create a review tied to a completed booking.
    ///
    /// Rejected client-side unless rating is 1–5 and the comment is
    /// non-blank; no network call is made otherwise.
    CreateReview {
        /// Reviewed service.
        service_id: String,
        /// Booking the review is tied to.
        booking_id: String,
        /// Star rating, 1–5.
        rating: u8,
        /// Review text.
        comment: String,
    },

    /// Event: the review was created.
    ReviewCreated {
        /// The created review.
        review: Review,
        /// Service to re-fetch for the updated aggregate rating.
        service_id: String,
    },

    /// Command: update an owned review.
    UpdateReview {
        /// Review to update.
        review_id: String,
        /// Service the review belongs to (for the detail re-fetch).
        service_id: String,
        /// New star rating, 1–5.
        rating: u8,
        /// New review text.
        comment: String,
    },

    /// Event: the review was updated.
    ReviewUpdated {
        /// The updated review.
        review: Review,
        /// Service to re-fetch for the updated aggregate rating.
        service_id: String,
    },

    /// Command: delete an owned review. The local list is untouched until
    /// the server confirms.
    DeleteReview {
        /// Review to delete.
        review_id: String,
        /// Service the review belongs to (for the detail re-fetch).
        service_id: String,
    },

    /// Event: the server confirmed the deletion.
    ReviewDeleted {
        /// The deleted review's id.
        review_id: String,
        /// Service to re-fetch for the updated aggregate rating.
        service_id: String,
    },

    /// Event: a review operation failed. Prior state is untouched.
    ReviewFailed {
        /// User-visible reason.
        reason: String,
    },

    /// Event: the service detail was re-fetched after a review mutation.
    ServiceRefreshed {
        /// The refreshed service record.
        service: Box<Service>,
    },
}
