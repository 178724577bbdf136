//! Notification endpoints
//!
//! List rendering is an embedding concern; the typed API surface (fetch,
//! read, delete, unread count) lives here.

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::services::Pagination;
use serde::{Deserialize, Serialize};

/// Category of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationKind {
    /// A booking was created
    BookingCreated,
    /// A booking was confirmed
    BookingConfirmed,
    /// A booking was cancelled
    BookingCancelled,
    /// A payment succeeded
    PaymentSuccess,
    /// A payment failed
    PaymentFailed,
    /// A review was created
    ReviewCreated,
    /// A service was updated
    ServiceUpdated,
    /// A service was created
    ServiceCreated,
    /// Announcement from the admin
    AdminAnnouncement,
    /// System-generated notice
    SystemNotification,
}

/// Read state of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationStatus {
    /// Not yet read
    Unread,
    /// Read
    Read,
    /// Archived
    Archived,
}

/// A notification record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    /// Notification identifier
    pub id: String,
    /// Title line
    pub title: String,
    /// Body text
    pub message: String,
    /// Category
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    /// Read state
    pub status: NotificationStatus,
    /// Structured payload, when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    /// Creation timestamp
    pub created_at: String,
    /// Last update timestamp
    pub updated_at: String,
}

/// Notifications listing response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationsResponse {
    /// Backend status message
    pub message: String,
    /// Notifications on this page
    pub notifications: Vec<Notification>,
    /// Pagination metadata
    pub pagination: Pagination,
}

/// Unread-count response
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct UnreadCountResponse {
    /// Number of unread notifications
    pub count: u32,
}

/// Mutation acknowledgement
#[derive(Debug, Clone, Deserialize)]
pub struct NotificationAck {
    /// Backend status message
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiClient {
    /// Fetch a page of the user's notifications.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport failures, rejected requests, or
    /// undecodable responses.
    pub async fn fetch_notifications(
        &self,
        page: u32,
        limit: u32,
    ) -> Result<NotificationsResponse, ApiError> {
        self.get_json(&format!("/notifications?page={page}&limit={limit}"))
            .await
    }

    /// Mark one notification as read.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport failures, rejected requests, or
    /// undecodable responses.
    pub async fn mark_notification_read(
        &self,
        notification_id: &str,
    ) -> Result<NotificationAck, ApiError> {
        self.patch_empty(&format!("/notifications/{notification_id}/read"))
            .await
    }

    /// Mark all notifications as read.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport failures, rejected requests, or
    /// undecodable responses.
    pub async fn mark_all_notifications_read(&self) -> Result<NotificationAck, ApiError> {
        self.patch_empty("/notifications/mark-all-read").await
    }

    /// Delete a notification.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport failures, rejected requests, or
    /// undecodable responses.
    pub async fn delete_notification(
        &self,
        notification_id: &str,
    ) -> Result<NotificationAck, ApiError> {
        self.delete_json(&format!("/notifications/{notification_id}"))
            .await
    }

    /// Fetch the unread notification count.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport failures, rejected requests, or
    /// undecodable responses.
    pub async fn fetch_unread_count(&self) -> Result<UnreadCountResponse, ApiError> {
        self.get_json("/notifications/unread-count").await
    }
}
