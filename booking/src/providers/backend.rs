//! Production backend provider over the typed HTTP client.

use crate::actions::OtpContext;
use crate::providers::api::BookingApi;
use wellspring_api::ApiClient;
use wellspring_api::ApiError;
use wellspring_api::auth::{
    AuthAck, AuthTokens, RefreshTokenRequest, SignInRequest, SignUpRequest, VerifyOtpRequest,
};
use wellspring_api::availability::DayAvailability;
use wellspring_api::bookings::{Booking, CreateBookingRequest};
use wellspring_api::payments::{CreateOrderRequest, PaymentOrder, VerifyPaymentRequest};
use wellspring_api::reviews::{CreateReviewRequest, Review, UpdateReviewRequest};
use wellspring_api::services::Service;

/// [`BookingApi`] implementation backed by [`ApiClient`].
#[derive(Debug, Clone)]
pub struct HttpBookingApi {
    client: ApiClient,
}

impl HttpBookingApi {
    /// Wrap a configured API client.
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

impl BookingApi for HttpBookingApi {
    async fn create_order(&self, request: CreateOrderRequest) -> Result<PaymentOrder, ApiError> {
        self.client.create_order(&request).await
    }

    async fn verify_payment(&self, request: VerifyPaymentRequest) -> Result<(), ApiError> {
        self.client.verify_payment(&request).await.map(|_| ())
    }

    async fn create_booking(&self, request: CreateBookingRequest) -> Result<Booking, ApiError> {
        self.client.create_booking(&request).await
    }

    async fn fetch_availability(
        &self,
        service_id: String,
        start_date: String,
        end_date: String,
    ) -> Result<Vec<DayAvailability>, ApiError> {
        self.client
            .fetch_availability(&service_id, &start_date, &end_date)
            .await
    }

    async fn fetch_service(&self, service_id: String) -> Result<Service, ApiError> {
        self.client
            .fetch_service_by_id(&service_id)
            .await
            .map(|response| response.service)
    }

    async fn fetch_reviews(&self, service_id: String) -> Result<Vec<Review>, ApiError> {
        self.client.fetch_reviews_for_service(&service_id).await
    }

    async fn create_review(&self, request: CreateReviewRequest) -> Result<Review, ApiError> {
        self.client.create_review(&request).await
    }

    async fn update_review(
        &self,
        review_id: String,
        request: UpdateReviewRequest,
    ) -> Result<Review, ApiError> {
        self.client.update_review(&review_id, &request).await
    }

    async fn delete_review(&self, review_id: String) -> Result<(), ApiError> {
        self.client.delete_review(&review_id).await.map(|_| ())
    }

    async fn sign_up(&self, request: SignUpRequest) -> Result<AuthAck, ApiError> {
        self.client.sign_up(&request).await
    }

    async fn sign_in(&self, request: SignInRequest) -> Result<AuthAck, ApiError> {
        self.client.sign_in(&request).await
    }

    async fn verify_otp(
        &self,
        context: OtpContext,
        request: VerifyOtpRequest,
    ) -> Result<AuthTokens, ApiError> {
        match context {
            OtpContext::SignUp => self.client.verify_signup_otp(&request).await,
            OtpContext::SignIn => self.client.verify_signin_otp(&request).await,
        }
    }

    async fn refresh_token(&self, request: RefreshTokenRequest) -> Result<AuthTokens, ApiError> {
        self.client.refresh_token(&request).await
    }
}
