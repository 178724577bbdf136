//! Services listing and detail endpoints

use crate::client::ApiClient;
use crate::error::ApiError;
use serde::{Deserialize, Serialize};

/// Geographic location of an in-person service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceLocation {
    /// Street address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// City
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// State / region
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Country
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Postal code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
}

/// Join details for a virtual service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualMeetingDetails {
    /// Meeting platform (Zoom, Google Meet, …)
    pub platform: String,
    /// Join link, when published
    #[serde(skip_serializing_if = "Option::is_none")]
    pub join_link: Option<String>,
}

/// A bookable wellness service, as served by the backend.
///
/// Read-only from the client's perspective.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    /// Service identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Ordered description points
    pub description: Vec<String>,
    /// Brief summary for cards/listings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    /// Aggregate rating across reviews
    #[serde(rename = "average_rating", skip_serializing_if = "Option::is_none")]
    pub average_rating: Option<f64>,
    /// Number of reviews behind the aggregate
    #[serde(rename = "total_reviews", skip_serializing_if = "Option::is_none")]
    pub total_reviews: Option<u32>,
    /// Ordered media URLs
    pub media: Vec<String>,
    /// Main category (e.g. "Yoga", "Meditation")
    pub category: String,
    /// Base price as a decimal string
    pub price: String,
    /// Price currency
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Optional sale price
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_price: Option<String>,
    /// Session length in minutes
    pub duration: u32,
    /// Instructor identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructor_id: Option<String>,
    /// Instructor display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructor_name: Option<String>,
    /// Instructor biography
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructor_bio: Option<String>,
    /// Cancellation policy text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancellation_policy: Option<String>,
    /// Highlighted in listings
    pub featured: bool,
    /// Accepting bookings
    pub is_active: bool,
    /// Virtual vs in-person
    pub is_online: bool,
    /// Location for in-person services
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<ServiceLocation>,
    /// Join details for online services
    #[serde(skip_serializing_if = "Option::is_none")]
    pub virtual_meeting_details: Option<VirtualMeetingDetails>,
}

/// Pagination envelope shared by listing endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Current page (1-based)
    pub current_page: u32,
    /// Total pages
    pub total_pages: u32,
    /// Whether a next page exists
    pub has_next_page: bool,
    /// Whether a previous page exists
    pub has_prev_page: bool,
}

/// Inner payload of the services listing response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServicesPage {
    /// Pagination metadata
    pub pagination: Pagination,
    /// Services on this page
    pub services: Vec<Service>,
}

/// Services listing response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicesResponse {
    /// Backend status message
    pub message: String,
    /// Paged services payload
    pub create_response: ServicesPage,
}

/// Service detail response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceDetailResponse {
    /// Backend status message
    pub message: String,
    /// The requested service
    pub service: Service,
}

impl ApiClient {
    /// Fetch a page of the services listing.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport failures, rejected requests, or
    /// undecodable responses.
    pub async fn fetch_services(
        &self,
        page: u32,
        limit: u32,
    ) -> Result<ServicesResponse, ApiError> {
        self.get_json(&format!(
            "/services/services-listing/fetch-services?page={page}&limit={limit}"
        ))
        .await
    }

    /// Fetch one service by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport failures, rejected requests, or
    /// undecodable responses.
    pub async fn fetch_service_by_id(
        &self,
        service_id: &str,
    ) -> Result<ServiceDetailResponse, ApiError> {
        self.get_json(&format!(
            "/services/services-listing/fetch-services-by-serviceId/{service_id}"
        ))
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_decodes_mixed_field_casing() {
        let json = r#"{
            "id": "svc_1",
            "name": "Morning Yoga",
            "description": ["Vinyasa flow", "All levels"],
            "average_rating": 4.6,
            "total_reviews": 12,
            "media": ["https://cdn.example.com/yoga.jpg"],
            "category": "Yoga",
            "price": "1500.00",
            "duration": 60,
            "instructorName": "Asha",
            "featured": true,
            "isActive": true,
            "isOnline": false,
            "location": {"city": "Pune"}
        }"#;

        let service: Result<Service, _> = serde_json::from_str(json);
        assert!(matches!(service, Ok(ref s)
            if s.average_rating == Some(4.6)
                && s.instructor_name.as_deref() == Some("Asha")
                && s.is_active
                && !s.is_online));
    }
}
