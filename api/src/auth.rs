//! Unauthenticated auth endpoints: sign-up, sign-in, OTP verification,
//! token refresh.
//!
//! These are the only endpoints the client calls without a bearer token.

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::profile::UserProfile;
use serde::{Deserialize, Serialize};

/// Request body for sign-up
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    /// Display name
    pub name: String,
    /// Phone number or email address
    pub phone_or_email: String,
}

/// Request body for sign-in
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInRequest {
    /// Phone number or email address
    pub phone_or_email: String,
}

/// Request body for OTP verification (both sign-up and sign-in variants)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyOtpRequest {
    /// Phone number or email the OTP was sent to
    pub phone_or_email: String,
    /// One-time password, digits only
    pub otp: String,
}

/// Request body for token refresh
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenRequest {
    /// Current refresh token
    pub refresh_token: String,
}

/// Acknowledgement for sign-up / sign-in (OTP dispatched)
#[derive(Debug, Clone, Deserialize)]
pub struct AuthAck {
    /// Backend status message
    #[serde(default)]
    pub message: Option<String>,
}

/// Session credentials returned by OTP verification and token refresh
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthTokens {
    /// Bearer token for protected endpoints
    pub access_token: String,
    /// Token used to mint a new access token
    pub refresh_token: String,
    /// The authenticated user
    pub user: UserProfile,
}

impl ApiClient {
    /// Register a new account; the backend responds by dispatching an OTP.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport failures, rejected requests, or
    /// undecodable responses.
    pub async fn sign_up(&self, request: &SignUpRequest) -> Result<AuthAck, ApiError> {
        self.post_json("/users/auth/sign-up", request).await
    }

    /// Start a sign-in; the backend responds by dispatching an OTP.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport failures, rejected requests, or
    /// undecodable responses.
    pub async fn sign_in(&self, request: &SignInRequest) -> Result<AuthAck, ApiError> {
        self.post_json("/users/auth/sign-in", request).await
    }

    /// Verify a sign-up OTP and receive session tokens.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport failures, rejected requests, or
    /// undecodable responses.
    pub async fn verify_signup_otp(
        &self,
        request: &VerifyOtpRequest,
    ) -> Result<AuthTokens, ApiError> {
        self.post_json("/users/auth/verify-signup-otp", request).await
    }

    /// Verify a sign-in OTP and receive session tokens.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport failures, rejected requests, or
    /// undecodable responses.
    pub async fn verify_signin_otp(
        &self,
        request: &VerifyOtpRequest,
    ) -> Result<AuthTokens, ApiError> {
        self.post_json("/users/auth/verify-signin-otp", request).await
    }

    /// Exchange a refresh token for fresh session tokens.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport failures, rejected requests, or
    /// undecodable responses.
    pub async fn refresh_token(
        &self,
        request: &RefreshTokenRequest,
    ) -> Result<AuthTokens, ApiError> {
        self.post_json("/users/auth/refresh-token", request).await
    }
}
