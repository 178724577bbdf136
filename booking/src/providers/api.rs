//! Backend API provider trait.
//!
//! The subset of backend operations the reducers call, abstracted so the
//! flows run at memory speed in tests. The production implementation
//! ([`super::HttpBookingApi`]) delegates to the typed HTTP client.

use crate::actions::OtpContext;
use std::future::Future;
use wellspring_api::ApiError;
use wellspring_api::auth::{
    AuthAck, AuthTokens, RefreshTokenRequest, SignInRequest, SignUpRequest, VerifyOtpRequest,
};
use wellspring_api::availability::DayAvailability;
use wellspring_api::bookings::{Booking, CreateBookingRequest};
use wellspring_api::payments::{CreateOrderRequest, PaymentOrder, VerifyPaymentRequest};
use wellspring_api::reviews::{CreateReviewRequest, Review, UpdateReviewRequest};
use wellspring_api::services::Service;

/// Backend operations consumed by the reducers.
///
/// Methods take owned requests so effect futures can be `'static`.
pub trait BookingApi: Send + Sync {
    /// Create a payment order for a booking attempt.
    fn create_order(
        &self,
        request: CreateOrderRequest,
    ) -> impl Future<Output = Result<PaymentOrder, ApiError>> + Send;

    /// Verify a payment's signature server-side.
    fn verify_payment(
        &self,
        request: VerifyPaymentRequest,
    ) -> impl Future<Output = Result<(), ApiError>> + Send;

    /// Persist a booking after verification.
    fn create_booking(
        &self,
        request: CreateBookingRequest,
    ) -> impl Future<Output = Result<Booking, ApiError>> + Send;

    /// Fetch a service's availability matrix for the given window.
    fn fetch_availability(
        &self,
        service_id: String,
        start_date: String,
        end_date: String,
    ) -> impl Future<Output = Result<Vec<DayAvailability>, ApiError>> + Send;

    /// Fetch one service's detail record.
    fn fetch_service(
        &self,
        service_id: String,
    ) -> impl Future<Output = Result<Service, ApiError>> + Send;

    /// Fetch a service's reviews.
    fn fetch_reviews(
        &self,
        service_id: String,
    ) -> impl Future<Output = Result<Vec<Review>, ApiError>> + Send;

    /// Create a review.
    fn create_review(
        &self,
        request: CreateReviewRequest,
    ) -> impl Future<Output = Result<Review, ApiError>> + Send;

    /// Update a review.
    fn update_review(
        &self,
        review_id: String,
        request: UpdateReviewRequest,
    ) -> impl Future<Output = Result<Review, ApiError>> + Send;

    /// Delete a review.
    fn delete_review(
        &self,
        review_id: String,
    ) -> impl Future<Output = Result<(), ApiError>> + Send;

    /// Register a new account.
    fn sign_up(
        &self,
        request: SignUpRequest,
    ) -> impl Future<Output = Result<AuthAck, ApiError>> + Send;

    /// Start a sign-in.
    fn sign_in(
        &self,
        request: SignInRequest,
    ) -> impl Future<Output = Result<AuthAck, ApiError>> + Send;

    /// Verify an OTP for the given flow.
    fn verify_otp(
        &self,
        context: OtpContext,
        request: VerifyOtpRequest,
    ) -> impl Future<Output = Result<AuthTokens, ApiError>> + Send;

    /// Exchange a refresh token for fresh session tokens.
    fn refresh_token(
        &self,
        request: RefreshTokenRequest,
    ) -> impl Future<Output = Result<AuthTokens, ApiError>> + Send;
}
