//! Membership plan and subscription endpoints

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::payments::PaymentOrder;
use serde::{Deserialize, Serialize};

/// A purchasable membership plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipPlan {
    /// Plan identifier
    pub id: String,
    /// Plan name
    pub name: String,
    /// Membership length in years
    pub duration_years: u32,
    /// Maximum linked members
    pub max_members: u32,
    /// Renewal period in years
    pub renewal_period_years: u32,
    /// Discount on club activities, percent
    pub discount_club_activities: u32,
    /// Discount on dining, percent
    pub discount_dining: u32,
    /// Discount on accommodations, percent
    pub discount_accommodations: u32,
    /// Discount on spa activities, percent
    pub discount_spa_activities: u32,
    /// Discount on medical wellness, percent
    pub discount_medical_wellness: u32,
    /// Guest discount, percent
    pub guest_discount: u32,
    /// Whether yoga guidance is included
    pub includes_yoga_guidance: bool,
    /// Whether doctor consultation is included
    pub includes_doctor_consultation: bool,
    /// Plan cost in minor units
    pub cost: u64,
    /// Creation timestamp
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Compact owner record embedded in a membership row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MembershipOwner {
    /// User identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Phone number or email
    pub phone_or_email: String,
}

/// A user's membership row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserMembership {
    /// Membership identifier
    pub id: String,
    /// Owning user id
    pub user_id: String,
    /// Plan id
    pub plan_id: String,
    /// Membership start (ISO date)
    pub start_date: String,
    /// Membership end (ISO date)
    pub end_date: String,
    /// Whether this is the primary membership of a family group
    pub is_primary: bool,
    /// Whether the membership is active
    pub is_active: bool,
    /// Parent membership for linked members
    #[serde(default)]
    pub parent_membership_id: Option<String>,
    /// The underlying plan
    pub plan: MembershipPlan,
    /// Owner record
    pub user: MembershipOwner,
}

/// User memberships response envelope (active/inactive split)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserMembershipsResponse {
    /// Backend status message
    pub message: String,
    /// Currently active memberships
    pub active_memberships: Vec<UserMembership>,
    /// Expired or cancelled memberships
    pub inactive_memberships: Vec<UserMembership>,
}

/// Request body for a membership purchase order
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipOrderRequest {
    /// Acting user
    pub user_id: String,
    /// Plan to purchase
    pub plan_id: String,
}

/// Request body for membership subscription after payment
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscribeMembershipRequest {
    /// Acting user
    pub user_id: String,
    /// Plan purchased
    pub plan_id: String,
    /// Verified payment id
    pub payment_id: String,
}

/// Mutation acknowledgement
#[derive(Debug, Clone, Deserialize)]
pub struct MembershipAck {
    /// Backend status message
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiClient {
    /// Fetch the purchasable membership plans.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport failures, rejected requests, or
    /// undecodable responses.
    pub async fn fetch_membership_plans(&self) -> Result<Vec<MembershipPlan>, ApiError> {
        self.get_json("/membership/plans").await
    }

    /// Fetch the acting user's memberships.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport failures, rejected requests, or
    /// undecodable responses.
    pub async fn fetch_user_memberships(&self) -> Result<UserMembershipsResponse, ApiError> {
        self.get_json("/membership/user/me").await
    }

    /// Create a payment order for a membership purchase.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport failures, rejected requests, or
    /// undecodable responses.
    pub async fn create_membership_order(
        &self,
        request: &MembershipOrderRequest,
    ) -> Result<PaymentOrder, ApiError> {
        self.post_json("/membership/create-order", request).await
    }

    /// Activate a membership after payment.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport failures, rejected requests, or
    /// undecodable responses.
    pub async fn subscribe_membership(
        &self,
        request: &SubscribeMembershipRequest,
    ) -> Result<UserMembership, ApiError> {
        self.post_json("/membership/subscribe", request).await
    }

    /// Cancel a membership.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport failures, rejected requests, or
    /// undecodable responses.
    pub async fn cancel_membership(&self, membership_id: &str) -> Result<MembershipAck, ApiError> {
        self.post_json(&format!("/membership/{membership_id}/cancel"), &())
            .await
    }
}
