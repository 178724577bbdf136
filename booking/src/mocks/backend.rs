//! Scripted backend for testing.
//!
//! Records every call in dispatch order (so tests can assert the
//! order → verify → persist sequencing invariant) and serves scripted
//! responses.

use crate::actions::OtpContext;
use crate::providers::BookingApi;
use std::sync::{Arc, Mutex};
use wellspring_api::ApiError;
use wellspring_api::auth::{
    AuthAck, AuthTokens, RefreshTokenRequest, SignInRequest, SignUpRequest, VerifyOtpRequest,
};
use wellspring_api::availability::DayAvailability;
use wellspring_api::bookings::{Booking, BookingStatus, CreateBookingRequest, PaymentStatus};
use wellspring_api::payments::{CreateOrderRequest, OrderNotes, PaymentOrder, VerifyPaymentRequest};
use wellspring_api::reviews::{CreateReviewRequest, Review, UpdateReviewRequest};
use wellspring_api::services::Service;

/// One recorded backend call, with the parameters assertions care about.
#[derive(Debug, Clone, PartialEq)]
pub enum BackendCall {
    /// `POST /payment/create-order`
    CreateOrder {
        /// Acting user.
        user_id: String,
        /// Service being booked.
        service_id: String,
        /// Client-generated idempotency key.
        idempotency_key: String,
    },
    /// `POST /payment/verify-payment`
    VerifyPayment {
        /// Order id.
        order_id: String,
        /// Payment id.
        payment_id: String,
        /// Signature.
        signature: String,
        /// Acting user.
        user_id: String,
        /// Service being booked.
        service_id: String,
        /// Booking date.
        date: String,
        /// Formatted slot time.
        time_slot: String,
        /// Invoice email.
        email: String,
    },
    /// `POST /booking/create-booking`
    CreateBooking {
        /// Acting user.
        user_id: String,
        /// Service being booked.
        service_id: String,
        /// Verified payment id.
        payment_id: String,
        /// Invoice email.
        email: String,
    },
    /// `POST /booking/availability/{serviceId}`
    FetchAvailability {
        /// Service looked up.
        service_id: String,
        /// Window start.
        start_date: String,
        /// Window end.
        end_date: String,
    },
    /// Service detail fetch.
    FetchService {
        /// Service looked up.
        service_id: String,
    },
    /// Reviews fetch.
    FetchReviews {
        /// Service looked up.
        service_id: String,
    },
    /// Review creation.
    CreateReview {
        /// Reviewed service.
        service_id: String,
        /// Rating submitted.
        rating: u8,
        /// Comment submitted.
        comment: String,
    },
    /// Review update.
    UpdateReview {
        /// Review updated.
        review_id: String,
        /// Rating submitted.
        rating: u8,
        /// Comment submitted.
        comment: String,
    },
    /// Review deletion.
    DeleteReview {
        /// Review deleted.
        review_id: String,
    },
    /// Sign-up.
    SignUp {
        /// Account key.
        phone_or_email: String,
    },
    /// Sign-in.
    SignIn {
        /// Account key.
        phone_or_email: String,
    },
    /// OTP verification.
    VerifyOtp {
        /// Flow the OTP belongs to.
        context: OtpContext,
        /// Submitted code.
        otp: String,
    },
    /// Token refresh.
    RefreshToken,
}

impl BackendCall {
    /// Short name for order-of-calls assertions.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::CreateOrder { .. } => "create_order",
            Self::VerifyPayment { .. } => "verify_payment",
            Self::CreateBooking { .. } => "create_booking",
            Self::FetchAvailability { .. } => "fetch_availability",
            Self::FetchService { .. } => "fetch_service",
            Self::FetchReviews { .. } => "fetch_reviews",
            Self::CreateReview { .. } => "create_review",
            Self::UpdateReview { .. } => "update_review",
            Self::DeleteReview { .. } => "delete_review",
            Self::SignUp { .. } => "sign_up",
            Self::SignIn { .. } => "sign_in",
            Self::VerifyOtp { .. } => "verify_otp",
            Self::RefreshToken => "refresh_token",
        }
    }
}

fn scripted_error(message: &str) -> ApiError {
    ApiError::Api {
        status: 500,
        body: message.to_string(),
    }
}

/// Scripted backend.
///
/// Clones share the call recorder, so the copy moved into the environment
/// and the copy held by the test observe the same sequence.
#[derive(Debug, Clone)]
pub struct ScriptedBackend {
    calls: Arc<Mutex<Vec<BackendCall>>>,
    update_count: Arc<Mutex<u32>>,
    order_error: Option<String>,
    verify_error: Option<String>,
    booking_error: Option<String>,
    availability: Vec<DayAvailability>,
    availability_error: Option<String>,
    service: Option<Service>,
    reviews: Vec<Review>,
    review_error: Option<String>,
    review_author: String,
    auth_error: Option<String>,
}

impl ScriptedBackend {
    /// A backend where every call succeeds with sample data.
    #[must_use]
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            update_count: Arc::new(Mutex::new(0)),
            order_error: None,
            verify_error: None,
            booking_error: None,
            availability: Vec::new(),
            availability_error: None,
            service: None,
            reviews: Vec::new(),
            review_error: None,
            review_author: "u1".to_string(),
            auth_error: None,
        }
    }

    /// Fail order creation with the given message.
    #[must_use]
    pub fn with_order_error(mut self, message: impl Into<String>) -> Self {
        self.order_error = Some(message.into());
        self
    }

    /// Fail payment verification with the given message.
    #[must_use]
    pub fn with_verify_error(mut self, message: impl Into<String>) -> Self {
        self.verify_error = Some(message.into());
        self
    }

    /// Fail booking creation with the given message.
    #[must_use]
    pub fn with_booking_error(mut self, message: impl Into<String>) -> Self {
        self.booking_error = Some(message.into());
        self
    }

    /// Serve the given availability matrix.
    #[must_use]
    pub fn with_availability(mut self, days: Vec<DayAvailability>) -> Self {
        self.availability = days;
        self
    }

    /// Fail availability lookups with the given message.
    #[must_use]
    pub fn with_availability_error(mut self, message: impl Into<String>) -> Self {
        self.availability_error = Some(message.into());
        self
    }

    /// Serve the given service detail record.
    #[must_use]
    pub fn with_service(mut self, service: Service) -> Self {
        self.service = Some(service);
        self
    }

    /// Serve the given reviews.
    #[must_use]
    pub fn with_reviews(mut self, reviews: Vec<Review>) -> Self {
        self.reviews = reviews;
        self
    }

    /// Fail review mutations with the given message.
    #[must_use]
    pub fn with_review_error(mut self, message: impl Into<String>) -> Self {
        self.review_error = Some(message.into());
        self
    }

    /// Author id stamped on synthesized reviews.
    #[must_use]
    pub fn with_review_author(mut self, user_id: impl Into<String>) -> Self {
        self.review_author = user_id.into();
        self
    }

    /// Fail auth calls with the given message.
    #[must_use]
    pub fn with_auth_error(mut self, message: impl Into<String>) -> Self {
        self.auth_error = Some(message.into());
        self
    }

    /// Every recorded call, in dispatch order.
    #[must_use]
    pub fn calls(&self) -> Vec<BackendCall> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    /// Recorded call names, in dispatch order.
    #[must_use]
    pub fn call_names(&self) -> Vec<&'static str> {
        self.calls().iter().map(BackendCall::name).collect()
    }

    fn record(&self, call: BackendCall) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
    }

    fn sample_tokens(&self) -> AuthTokens {
        AuthTokens {
            access_token: "tok_access".to_string(),
            refresh_token: "tok_refresh".to_string(),
            user: crate::mocks::sample_user(&self.review_author),
        }
    }
}

impl Default for ScriptedBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl BookingApi for ScriptedBackend {
    async fn create_order(&self, request: CreateOrderRequest) -> Result<PaymentOrder, ApiError> {
        self.record(BackendCall::CreateOrder {
            user_id: request.user_id,
            service_id: request.service_id.clone(),
            idempotency_key: request.idempotency_key,
        });

        match &self.order_error {
            Some(message) => Err(scripted_error(message)),
            None => Ok(PaymentOrder {
                id: "order_1".to_string(),
                amount: 10_000,
                currency: "INR".to_string(),
                notes: Some(OrderNotes {
                    description: Some("Payment for Morning Yoga".to_string()),
                }),
            }),
        }
    }

    async fn verify_payment(&self, request: VerifyPaymentRequest) -> Result<(), ApiError> {
        self.record(BackendCall::VerifyPayment {
            order_id: request.order_id,
            payment_id: request.payment_id,
            signature: request.signature,
            user_id: request.user_id,
            service_id: request.service_id,
            date: request.date,
            time_slot: request.time_slot,
            email: request.email,
        });

        match &self.verify_error {
            Some(message) => Err(scripted_error(message)),
            None => Ok(()),
        }
    }

    async fn create_booking(&self, request: CreateBookingRequest) -> Result<Booking, ApiError> {
        self.record(BackendCall::CreateBooking {
            user_id: request.user_id.clone(),
            service_id: request.service_id.clone(),
            payment_id: request.payment_id,
            email: request.email,
        });

        match &self.booking_error {
            Some(message) => Err(scripted_error(message)),
            None => Ok(Booking {
                id: "bk_1".to_string(),
                user_id: request.user_id,
                service_id: request.service_id,
                date: request.date,
                time_slot: request.time_slot,
                status: BookingStatus::Confirmed,
                payment_status: PaymentStatus::Paid,
                total_amount: 10_000,
                created_at: Some("2025-06-01T00:00:00Z".to_string()),
                updated_at: Some("2025-06-01T00:00:00Z".to_string()),
                service: None,
            }),
        }
    }

    async fn fetch_availability(
        &self,
        service_id: String,
        start_date: String,
        end_date: String,
    ) -> Result<Vec<DayAvailability>, ApiError> {
        self.record(BackendCall::FetchAvailability {
            service_id,
            start_date,
            end_date,
        });

        match &self.availability_error {
            Some(message) => Err(scripted_error(message)),
            None => Ok(self.availability.clone()),
        }
    }

    async fn fetch_service(&self, service_id: String) -> Result<Service, ApiError> {
        self.record(BackendCall::FetchService {
            service_id: service_id.clone(),
        });

        self.service
            .clone()
            .ok_or_else(|| scripted_error("no scripted service"))
    }

    async fn fetch_reviews(&self, service_id: String) -> Result<Vec<Review>, ApiError> {
        self.record(BackendCall::FetchReviews { service_id });
        Ok(self.reviews.clone())
    }

    async fn create_review(&self, request: CreateReviewRequest) -> Result<Review, ApiError> {
        self.record(BackendCall::CreateReview {
            service_id: request.service_id,
            rating: request.rating,
            comment: request.comment.clone(),
        });

        match &self.review_error {
            Some(message) => Err(scripted_error(message)),
            None => Ok(Review {
                id: "review_1".to_string(),
                user_id: self.review_author.clone(),
                user_name: Some("Asha".to_string()),
                rating: request.rating,
                comment: request.comment,
                created_at: Some("2025-06-01T00:00:00Z".to_string()),
                updated_at: Some("2025-06-01T00:00:00Z".to_string()),
            }),
        }
    }

    async fn update_review(
        &self,
        review_id: String,
        request: UpdateReviewRequest,
    ) -> Result<Review, ApiError> {
        self.record(BackendCall::UpdateReview {
            review_id: review_id.clone(),
            rating: request.rating,
            comment: request.comment.clone(),
        });

        if let Some(message) = &self.review_error {
            return Err(scripted_error(message));
        }

        // Each update gets a fresh updated_at, like a real backend.
        let count = self
            .update_count
            .lock()
            .map(|mut count| {
                *count += 1;
                *count
            })
            .unwrap_or(0);

        Ok(Review {
            id: review_id,
            user_id: self.review_author.clone(),
            user_name: Some("Asha".to_string()),
            rating: request.rating,
            comment: request.comment,
            created_at: Some("2025-06-01T00:00:00Z".to_string()),
            updated_at: Some(format!("2025-06-01T00:00:{count:02}Z")),
        })
    }

    async fn delete_review(&self, review_id: String) -> Result<(), ApiError> {
        self.record(BackendCall::DeleteReview { review_id });

        match &self.review_error {
            Some(message) => Err(scripted_error(message)),
            None => Ok(()),
        }
    }

    async fn sign_up(&self, request: SignUpRequest) -> Result<AuthAck, ApiError> {
        self.record(BackendCall::SignUp {
            phone_or_email: request.phone_or_email,
        });

        match &self.auth_error {
            Some(message) => Err(scripted_error(message)),
            None => Ok(AuthAck {
                message: Some("OTP sent".to_string()),
            }),
        }
    }

    async fn sign_in(&self, request: SignInRequest) -> Result<AuthAck, ApiError> {
        self.record(BackendCall::SignIn {
            phone_or_email: request.phone_or_email,
        });

        match &self.auth_error {
            Some(message) => Err(scripted_error(message)),
            None => Ok(AuthAck {
                message: Some("OTP sent".to_string()),
            }),
        }
    }

    async fn verify_otp(
        &self,
        context: OtpContext,
        request: VerifyOtpRequest,
    ) -> Result<AuthTokens, ApiError> {
        self.record(BackendCall::VerifyOtp {
            context,
            otp: request.otp,
        });

        match &self.auth_error {
            Some(message) => Err(scripted_error(message)),
            None => Ok(self.sample_tokens()),
        }
    }

    async fn refresh_token(&self, _request: RefreshTokenRequest) -> Result<AuthTokens, ApiError> {
        self.record(BackendCall::RefreshToken);

        match &self.auth_error {
            Some(message) => Err(scripted_error(message)),
            None => Ok(self.sample_tokens()),
        }
    }
}
