//! Review CRUD endpoints

use crate::client::ApiClient;
use crate::error::ApiError;
use serde::{Deserialize, Serialize};

/// A user's review of a service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    /// Review identifier
    pub id: String,
    /// Author's user id
    pub user_id: String,
    /// Author's display name
    #[serde(default)]
    pub user_name: Option<String>,
    /// Star rating, 1–5
    pub rating: u8,
    /// Review text
    pub comment: String,
    /// Creation timestamp
    #[serde(default)]
    pub created_at: Option<String>,
    /// Last update timestamp
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Review {
    /// Whether the given user authored this review.
    ///
    /// Drives the edit/delete affordance only; the server re-checks
    /// authorship on every mutation.
    #[must_use]
    pub fn is_authored_by(&self, user_id: &str) -> bool {
        self.user_id == user_id
    }
}

/// Request body for review creation
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewRequest {
    /// Reviewed service
    pub service_id: String,
    /// Booking the review is tied to
    pub booking_id: String,
    /// Star rating, 1–5
    pub rating: u8,
    /// Review text
    pub comment: String,
}

/// Request body for review update
#[derive(Debug, Clone, Serialize)]
pub struct UpdateReviewRequest {
    /// New star rating, 1–5
    pub rating: u8,
    /// New review text
    pub comment: String,
}

/// Deletion acknowledgement
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteReviewResponse {
    /// Backend status message
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiClient {
    /// Fetch all reviews for a service.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport failures, rejected requests, or
    /// undecodable responses.
    pub async fn fetch_reviews_for_service(
        &self,
        service_id: &str,
    ) -> Result<Vec<Review>, ApiError> {
        self.get_json(&format!("/reviews/service/{service_id}")).await
    }

    /// Fetch the acting user's reviews.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport failures, rejected requests, or
    /// undecodable responses.
    pub async fn fetch_reviews_for_me(&self) -> Result<Vec<Review>, ApiError> {
        self.get_json("/reviews/user/me").await
    }

    /// Create a review.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport failures, rejected requests, or
    /// undecodable responses.
    pub async fn create_review(&self, request: &CreateReviewRequest) -> Result<Review, ApiError> {
        self.post_json("/reviews/create-review", request).await
    }

    /// Update a review.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport failures, rejected requests, or
    /// undecodable responses.
    pub async fn update_review(
        &self,
        review_id: &str,
        request: &UpdateReviewRequest,
    ) -> Result<Review, ApiError> {
        self.patch_json(&format!("/reviews/{review_id}"), request).await
    }

    /// Delete a review.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport failures, rejected requests, or
    /// undecodable responses.
    pub async fn delete_review(&self, review_id: &str) -> Result<DeleteReviewResponse, ApiError> {
        self.delete_json(&format!("/reviews/{review_id}")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authorship_check_compares_user_ids() {
        let review = Review {
            id: "r1".to_string(),
            user_id: "u1".to_string(),
            user_name: Some("Asha".to_string()),
            rating: 5,
            comment: "Wonderful session".to_string(),
            created_at: None,
            updated_at: None,
        };

        assert!(review.is_authored_by("u1"));
        assert!(!review.is_authored_by("u2"));
    }
}
