//! Payment order creation and verification endpoints

use crate::client::ApiClient;
use crate::error::ApiError;
use serde::{Deserialize, Serialize};

/// Request body for order creation
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    /// Acting user
    pub user_id: String,
    /// Service being booked
    pub service_id: String,
    /// Client-generated key so a double-submit cannot create two orders
    pub idempotency_key: String,
}

/// Free-form notes attached to an order by the backend
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderNotes {
    /// Human-readable payment description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Payment-provider order, as returned by order creation.
///
/// Ephemeral: lives only within one booking attempt, referenced by id
/// during checkout and verification, never persisted client-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentOrder {
    /// Provider-side order id
    pub id: String,
    /// Amount in minor currency units
    pub amount: u64,
    /// ISO currency code
    pub currency: String,
    /// Optional notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<OrderNotes>,
}

/// Request body for server-side payment verification
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyPaymentRequest {
    /// Order id returned by order creation
    pub order_id: String,
    /// Payment id from the checkout widget
    pub payment_id: String,
    /// Cryptographic signature from the checkout widget
    pub signature: String,
    /// Acting user
    pub user_id: String,
    /// Service being booked
    pub service_id: String,
    /// Booking date (ISO datetime)
    pub date: String,
    /// Formatted slot start time
    pub time_slot: String,
    /// Invoice email
    pub email: String,
}

/// Verification acknowledgement
#[derive(Debug, Clone, Deserialize)]
pub struct VerifyPaymentResponse {
    /// Backend status message
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiClient {
    /// Create a payment order for a booking attempt.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport failures, rejected requests, or
    /// undecodable responses.
    pub async fn create_order(
        &self,
        request: &CreateOrderRequest,
    ) -> Result<PaymentOrder, ApiError> {
        self.post_json("/payment/create-order", request).await
    }

    /// Verify a payment's signature server-side.
    ///
    /// Booking creation is only permitted after this call succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport failures, rejected requests, or
    /// undecodable responses.
    pub async fn verify_payment(
        &self,
        request: &VerifyPaymentRequest,
    ) -> Result<VerifyPaymentResponse, ApiError> {
        self.post_json("/payment/verify-payment", request).await
    }

    /// Fetch a user's payment history.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport failures, rejected requests, or
    /// undecodable responses.
    pub async fn fetch_payment_details(
        &self,
        user_id: &str,
    ) -> Result<serde_json::Value, ApiError> {
        self.get_json(&format!("/payment/fetch-payment-details/{user_id}"))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_decodes_with_and_without_notes() {
        let with_notes: Result<PaymentOrder, _> = serde_json::from_str(
            r#"{"id":"order_1","amount":10000,"currency":"INR","notes":{"description":"Payment for Morning Yoga"}}"#,
        );
        assert!(matches!(with_notes, Ok(ref o)
            if o.notes.as_ref().and_then(|n| n.description.as_deref())
                == Some("Payment for Morning Yoga")));

        let bare: Result<PaymentOrder, _> =
            serde_json::from_str(r#"{"id":"order_2","amount":500,"currency":"INR"}"#);
        assert!(matches!(bare, Ok(ref o) if o.notes.is_none() && o.amount == 500));
    }

    #[test]
    fn verify_request_serializes_camel_case() {
        let request = VerifyPaymentRequest {
            order_id: "order_1".to_string(),
            payment_id: "pay_1".to_string(),
            signature: "sig_1".to_string(),
            user_id: "u1".to_string(),
            service_id: "s1".to_string(),
            date: "2025-06-02T00:00:00Z".to_string(),
            time_slot: "9:00 AM".to_string(),
            email: "guest@example.com".to_string(),
        };

        let value = serde_json::to_value(&request).unwrap_or_default();
        assert_eq!(value["orderId"], "order_1");
        assert_eq!(value["paymentId"], "pay_1");
        assert_eq!(value["timeSlot"], "9:00 AM");
    }
}
