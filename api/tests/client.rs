//! HTTP-level tests for the API client against a mock backend.

use std::sync::Arc;
use std::time::Duration;
use wellspring_api::payments::CreateOrderRequest;
use wellspring_api::vault::MemoryTokenVault;
use wellspring_api::{ApiClient, ApiConfig, ApiError};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer, vault: MemoryTokenVault) -> ApiClient {
    match ApiClient::new(ApiConfig::new(server.uri()), Arc::new(vault)) {
        Ok(client) => client,
        Err(e) => unreachable!("client construction should not fail: {e}"),
    }
}

#[tokio::test]
async fn protected_endpoint_carries_bearer_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/users/profile/me"))
        .and(header("authorization", "Bearer tok_123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "u1",
            "name": "Asha",
            "phone_or_email": "asha@example.com",
            "role": "USER",
            "is_verified": true,
            "is_agreed_to_terms": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, MemoryTokenVault::with_access_token("tok_123"));
    let profile = client.fetch_profile().await;

    assert!(matches!(profile, Ok(ref p) if p.id == "u1" && p.is_verified));
}

#[tokio::test]
async fn auth_endpoint_carries_no_bearer_token() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/users/auth/sign-in"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"message": "OTP sent"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    // A token is present in the vault, but must not be attached here.
    let client = client_for(&server, MemoryTokenVault::with_access_token("tok_123"));
    let ack = client
        .sign_in(&wellspring_api::auth::SignInRequest {
            phone_or_email: "asha@example.com".to_string(),
        })
        .await;
    assert!(ack.is_ok());

    let requests = server.received_requests().await.unwrap_or_default();
    assert_eq!(requests.len(), 1);
    assert!(
        !requests[0].headers.contains_key("authorization"),
        "auth endpoints must not carry a bearer token"
    );
}

#[tokio::test]
async fn availability_posts_the_requested_window() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/booking/availability/svc_1"))
        .and(body_json(serde_json::json!({
            "startDate": "2025-06-01",
            "endDate": "2025-07-01"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {
                "date": "2025-06-02",
                "isBookable": true,
                "timeSlots": [{
                    "id": "slot_1",
                    "startTime": "2025-06-02T09:00:00Z",
                    "endTime": "2025-06-02T10:00:00Z",
                    "status": "AVAILABLE"
                }]
            }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, MemoryTokenVault::with_access_token("tok_123"));
    let days = client
        .fetch_availability("svc_1", "2025-06-01", "2025-07-01")
        .await;

    assert!(matches!(days, Ok(ref days)
        if days.len() == 1 && days[0].time_slots[0].id == "slot_1"));
}

#[tokio::test]
async fn create_order_decodes_the_provider_order() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/payment/create-order"))
        .and(body_json(serde_json::json!({
            "userId": "u1",
            "serviceId": "s1",
            "idempotencyKey": "key_1"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "order_1",
            "amount": 10000,
            "currency": "INR",
            "notes": {"description": "Payment for Morning Yoga"}
        })))
        .mount(&server)
        .await;

    let client = client_for(&server, MemoryTokenVault::with_access_token("tok_123"));
    let order = client
        .create_order(&CreateOrderRequest {
            user_id: "u1".to_string(),
            service_id: "s1".to_string(),
            idempotency_key: "key_1".to_string(),
        })
        .await;

    assert!(matches!(order, Ok(ref o)
        if o.id == "order_1" && o.amount == 10_000 && o.currency == "INR"));
}

#[tokio::test]
async fn services_listing_passes_pagination_params() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/services/services-listing/fetch-services"))
        .and(query_param("page", "2"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": "ok",
            "createResponse": {
                "pagination": {
                    "currentPage": 2,
                    "totalPages": 3,
                    "hasNextPage": true,
                    "hasPrevPage": true
                },
                "services": []
            }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server, MemoryTokenVault::with_access_token("tok_123"));
    let listing = client.fetch_services(2, 10).await;

    assert!(matches!(listing, Ok(ref l) if l.create_response.pagination.current_page == 2));
}

#[tokio::test]
async fn bookings_by_user_decode_as_a_flat_list() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/booking/user/u1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {
                "id": "bk_1",
                "user_id": "u1",
                "service_id": "s1",
                "date": "2025-06-02T00:00:00Z",
                "time_slot": "9:00 AM",
                "status": "CONFIRMED",
                "payment_status": "PAID",
                "total_amount": 10000
            },
            {
                "id": "bk_2",
                "user_id": "u1",
                "service_id": "s2",
                "date": "2025-05-20T00:00:00Z",
                "time_slot": "2:30 PM",
                "status": "CANCELLED",
                "payment_status": "PAID",
                "total_amount": 5000
            }
        ])))
        .mount(&server)
        .await;

    let client = client_for(&server, MemoryTokenVault::with_access_token("tok_123"));
    let bookings = client.fetch_bookings_by_user("u1").await;

    // One versioned contract: active and cancelled rows share the list and
    // are distinguished by status.
    assert!(matches!(bookings, Ok(ref list)
        if list.len() == 2
            && list[0].status == wellspring_api::bookings::BookingStatus::Confirmed
            && list[1].status == wellspring_api::bookings::BookingStatus::Cancelled));
}

#[tokio::test]
async fn unread_count_round_trips() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/notifications/unread-count"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"count": 3})))
        .mount(&server)
        .await;

    let client = client_for(&server, MemoryTokenVault::with_access_token("tok_123"));
    let unread = client.fetch_unread_count().await;

    assert!(matches!(unread, Ok(ref u) if u.count == 3));
}

#[tokio::test]
async fn unauthorized_maps_to_dedicated_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/users/profile/me"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let client = client_for(&server, MemoryTokenVault::new());
    let profile = client.fetch_profile().await;

    assert!(matches!(profile, Err(ApiError::Unauthorized)));
}

#[tokio::test]
async fn backend_rejection_surfaces_status_and_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/payment/create-order"))
        .respond_with(ResponseTemplate::new(422).set_body_string("slot no longer available"))
        .mount(&server)
        .await;

    let client = client_for(&server, MemoryTokenVault::with_access_token("tok_123"));
    let order = client
        .create_order(&CreateOrderRequest {
            user_id: "u1".to_string(),
            service_id: "s1".to_string(),
            idempotency_key: "key_1".to_string(),
        })
        .await;

    assert!(matches!(order, Err(ApiError::Api { status: 422, ref body })
        if body == "slot no longer available"));
}

#[tokio::test]
async fn hung_request_fails_at_the_configured_timeout() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/users/profile/me"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;

    let config = ApiConfig::new(server.uri()).with_timeout(Duration::from_millis(100));
    let client = match ApiClient::new(
        config,
        Arc::new(MemoryTokenVault::with_access_token("tok_123")),
    ) {
        Ok(client) => client,
        Err(e) => unreachable!("client construction should not fail: {e}"),
    };

    let profile = client.fetch_profile().await;
    assert!(matches!(profile, Err(ref e) if e.is_transport()));
}
