//! Booking creation and retrieval endpoints

use crate::client::ApiClient;
use crate::error::ApiError;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    /// Created, awaiting provider confirmation
    Pending,
    /// Confirmed by the provider
    Confirmed,
    /// Cancelled
    Cancelled,
}

/// Settlement status of a booking's payment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    /// Payment captured
    Paid,
    /// Payment outstanding
    Unpaid,
}

/// Service summary embedded in a booking record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookedService {
    /// Service name
    pub name: String,
    /// Service description
    #[serde(default)]
    pub description: Option<String>,
    /// Media URLs
    #[serde(default)]
    pub media: Vec<String>,
    /// Instructor display name
    #[serde(default)]
    pub instructor_name: Option<String>,
}

/// A booking record, owned by the backend and mirrored client-side
/// after a successful attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    /// Booking identifier
    pub id: String,
    /// Owning user
    pub user_id: String,
    /// Booked service
    pub service_id: String,
    /// Booking date (ISO datetime)
    pub date: String,
    /// Formatted slot start time
    pub time_slot: String,
    /// Lifecycle status
    pub status: BookingStatus,
    /// Payment settlement status
    pub payment_status: PaymentStatus,
    /// Total charged amount in minor units
    pub total_amount: u64,
    /// Creation timestamp
    #[serde(default)]
    pub created_at: Option<String>,
    /// Last update timestamp
    #[serde(default)]
    pub updated_at: Option<String>,
    /// Embedded service summary
    #[serde(default)]
    pub service: Option<BookedService>,
}

/// Request body for booking creation.
///
/// Sent only after server-side payment verification has succeeded.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    /// Acting user
    pub user_id: String,
    /// Service being booked
    pub service_id: String,
    /// Booking date (ISO datetime)
    pub date: String,
    /// Formatted slot start time
    pub time_slot: String,
    /// Verified payment id
    pub payment_id: String,
    /// Invoice email
    pub email: String,
}

impl ApiClient {
    /// Persist a booking after payment verification.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport failures, rejected requests, or
    /// undecodable responses.
    pub async fn create_booking(
        &self,
        request: &CreateBookingRequest,
    ) -> Result<Booking, ApiError> {
        self.post_json("/booking/create-booking", request).await
    }

    /// Fetch all of a user's bookings as a flat list.
    ///
    /// One versioned contract: active and cancelled bookings are
    /// distinguished by [`Booking::status`], not by response shape.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport failures, rejected requests, or
    /// undecodable responses.
    pub async fn fetch_bookings_by_user(&self, user_id: &str) -> Result<Vec<Booking>, ApiError> {
        self.get_json(&format!("/booking/user/{user_id}")).await
    }

    /// Fetch one booking by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport failures, rejected requests, or
    /// undecodable responses.
    pub async fn fetch_booking_by_id(&self, booking_id: &str) -> Result<Booking, ApiError> {
        self.get_json(&format!("/booking/{booking_id}")).await
    }

    /// Cancel a booking.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport failures, rejected requests, or
    /// undecodable responses.
    pub async fn cancel_booking(&self, booking_id: &str) -> Result<Booking, ApiError> {
        self.patch_empty(&format!("/booking/{booking_id}/cancel")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booking_decodes_snake_case_record() {
        let json = r#"{
            "id": "bk_1",
            "user_id": "u1",
            "service_id": "s1",
            "date": "2025-06-02T00:00:00Z",
            "time_slot": "9:00 AM",
            "status": "CONFIRMED",
            "payment_status": "PAID",
            "total_amount": 10000,
            "service": {"name": "Morning Yoga", "instructorName": "Asha"}
        }"#;

        let booking: Result<Booking, _> = serde_json::from_str(json);
        assert!(matches!(booking, Ok(ref b)
            if b.status == BookingStatus::Confirmed
                && b.payment_status == PaymentStatus::Paid
                && b.service.as_ref().map(|s| s.name.as_str()) == Some("Morning Yoga")));
    }
}
