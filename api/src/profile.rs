//! Profile retrieval endpoint

use crate::client::ApiClient;
use crate::error::ApiError;
use serde::{Deserialize, Serialize};

/// The authenticated user's profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// User identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Optional handle
    #[serde(default)]
    pub username: Option<String>,
    /// Phone number or email the account is keyed on
    pub phone_or_email: String,
    /// Date of birth, when provided
    #[serde(default)]
    pub date_of_birth: Option<String>,
    /// Avatar URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Account role
    pub role: String,
    /// Whether the account completed OTP verification
    pub is_verified: bool,
    /// Whether the user accepted the terms
    pub is_agreed_to_terms: bool,
    /// Creation timestamp
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
    /// Last update timestamp
    #[serde(rename = "updatedAt", default)]
    pub updated_at: Option<String>,
}

impl ApiClient {
    /// Fetch the acting user's profile.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport failures, rejected requests, or
    /// undecodable responses.
    pub async fn fetch_profile(&self) -> Result<UserProfile, ApiError> {
        self.get_json("/users/profile/me").await
    }
}
