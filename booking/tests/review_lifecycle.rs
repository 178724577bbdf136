//! Review lifecycle tests: create, update, delete, and the service-detail
//! re-sync after each mutation.

use std::time::Duration;
use wellspring_api::reviews::Review;
use wellspring_api::services::Service;
use wellspring_booking::mocks::{
    ScriptedBackend, ScriptedCheckout, signed_in_state, test_environment,
};
use wellspring_booking::reducers::ClientReducer;
use wellspring_booking::{ClientAction, ClientEnvironment, SessionState};
use wellspring_runtime::Store;
use wellspring_testing::mocks::{FixedClock, SequentialIds};

type TestEnv = ClientEnvironment<ScriptedBackend, ScriptedCheckout, FixedClock, SequentialIds>;
type TestStore = Store<
    SessionState,
    ClientAction,
    TestEnv,
    ClientReducer<ScriptedBackend, ScriptedCheckout, FixedClock, SequentialIds>,
>;

fn store_with(state: SessionState, backend: ScriptedBackend) -> TestStore {
    Store::new(
        state,
        ClientReducer::new(),
        test_environment(backend, ScriptedCheckout::approving()),
    )
}

fn sample_service(rating: f64) -> Service {
    Service {
        id: "s1".to_string(),
        name: "Morning Yoga".to_string(),
        description: vec!["Vinyasa flow".to_string()],
        short_description: None,
        average_rating: Some(rating),
        total_reviews: Some(1),
        media: vec![],
        category: "Yoga".to_string(),
        price: "1500.00".to_string(),
        currency: Some("INR".to_string()),
        discount_price: None,
        duration: 60,
        instructor_id: None,
        instructor_name: Some("Asha".to_string()),
        instructor_bio: None,
        cancellation_policy: None,
        featured: false,
        is_active: true,
        is_online: false,
        location: None,
        virtual_meeting_details: None,
    }
}

fn own_review(id: &str) -> Review {
    Review {
        id: id.to_string(),
        user_id: "u1".to_string(),
        user_name: Some("Asha".to_string()),
        rating: 4,
        comment: "Lovely class".to_string(),
        created_at: Some("2025-05-01T00:00:00Z".to_string()),
        updated_at: Some("2025-05-01T00:00:00Z".to_string()),
    }
}

async fn wait_until<F>(store: &TestStore, pred: F) -> bool
where
    F: Fn(&SessionState) -> bool,
{
    for _ in 0..200 {
        if store.state(|s| pred(s)).await {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    false
}

#[tokio::test]
async fn create_review_appends_and_refreshes_the_service() {
    let backend = ScriptedBackend::new().with_service(sample_service(4.8));
    let store = store_with(signed_in_state("u1"), backend.clone());

    let _ = store
        .send(ClientAction::CreateReview {
            service_id: "s1".to_string(),
            booking_id: "bk_1".to_string(),
            rating: 5,
            comment: "Wonderful session".to_string(),
        })
        .await;

    assert!(wait_until(&store, |s| s.service.is_some()).await);

    assert_eq!(backend.call_names(), vec!["create_review", "fetch_service"]);

    let (reviews, service) = store.state(|s| (s.reviews.clone(), s.service.clone())).await;
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0].rating, 5);
    assert!(matches!(service, Some(ref svc) if svc.average_rating == Some(4.8)));
}

#[tokio::test]
async fn zero_rating_or_blank_comment_never_reaches_the_backend() {
    let backend = ScriptedBackend::new();
    let store = store_with(signed_in_state("u1"), backend.clone());

    let _ = store
        .send(ClientAction::CreateReview {
            service_id: "s1".to_string(),
            booking_id: "bk_1".to_string(),
            rating: 0,
            comment: "Decent".to_string(),
        })
        .await;
    let _ = store
        .send(ClientAction::CreateReview {
            service_id: "s1".to_string(),
            booking_id: "bk_1".to_string(),
            rating: 4,
            comment: "   ".to_string(),
        })
        .await;

    tokio::time::sleep(Duration::from_millis(50)).await;

    assert!(backend.calls().is_empty());
    let error = store.state(|s| s.error.clone()).await;
    assert!(matches!(error, Some(ref e) if e == "A rating and a comment are required"));
}

#[tokio::test]
async fn repeated_update_differs_only_in_updated_at() {
    let backend = ScriptedBackend::new().with_service(sample_service(4.8));
    let mut state = signed_in_state("u1");
    state.reviews = vec![own_review("r1")];
    let store = store_with(state, backend.clone());

    let update = ClientAction::UpdateReview {
        review_id: "r1".to_string(),
        service_id: "s1".to_string(),
        rating: 3,
        comment: "Changed my mind".to_string(),
    };

    let _ = store.send(update.clone()).await;
    assert!(wait_until(&store, |s| s.reviews[0].comment == "Changed my mind").await);
    let first = store.state(|s| s.reviews[0].clone()).await;

    let _ = store.send(update).await;
    assert!(
        wait_until(&store, |s| s.reviews[0].updated_at != first.updated_at).await,
        "second update should bump updated_at"
    );
    let second = store.state(|s| s.reviews[0].clone()).await;

    // Idempotent payload: every field equal except the server timestamp.
    assert_eq!(first.id, second.id);
    assert_eq!(first.user_id, second.user_id);
    assert_eq!(first.rating, second.rating);
    assert_eq!(first.comment, second.comment);
    assert_eq!(first.created_at, second.created_at);
    assert_ne!(first.updated_at, second.updated_at);
}

#[tokio::test]
async fn foreign_review_cannot_be_updated_or_deleted() {
    let backend = ScriptedBackend::new();
    let mut state = signed_in_state("u1");
    state.reviews = vec![Review {
        user_id: "u2".to_string(),
        ..own_review("r1")
    }];
    let store = store_with(state, backend.clone());

    let _ = store
        .send(ClientAction::UpdateReview {
            review_id: "r1".to_string(),
            service_id: "s1".to_string(),
            rating: 1,
            comment: "Hijacked".to_string(),
        })
        .await;
    let _ = store
        .send(ClientAction::DeleteReview {
            review_id: "r1".to_string(),
            service_id: "s1".to_string(),
        })
        .await;

    tokio::time::sleep(Duration::from_millis(50)).await;

    assert!(backend.calls().is_empty());
    let (reviews, error) = store.state(|s| (s.reviews.clone(), s.error.clone())).await;
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0].comment, "Lovely class");
    assert!(matches!(error, Some(ref e) if e == "You can only edit your own review"));
}

#[tokio::test]
async fn delete_removes_locally_only_after_server_confirmation() {
    // Failure first: the local list must stay intact.
    let failing = ScriptedBackend::new().with_review_error("backend down");
    let mut state = signed_in_state("u1");
    state.reviews = vec![own_review("r1")];
    let store = store_with(state.clone(), failing.clone());

    let _ = store
        .send(ClientAction::DeleteReview {
            review_id: "r1".to_string(),
            service_id: "s1".to_string(),
        })
        .await;

    assert!(wait_until(&store, |s| s.error.is_some()).await);
    assert_eq!(store.state(|s| s.reviews.len()).await, 1);
    assert_eq!(failing.call_names(), vec!["delete_review"]);

    // Success: the review disappears and the service detail re-syncs.
    let backend = ScriptedBackend::new().with_service(sample_service(0.0));
    let store = store_with(state, backend.clone());

    let _ = store
        .send(ClientAction::DeleteReview {
            review_id: "r1".to_string(),
            service_id: "s1".to_string(),
        })
        .await;

    assert!(wait_until(&store, |s| s.reviews.is_empty()).await);
    assert!(wait_until(&store, |s| s.service.is_some()).await);
    assert_eq!(backend.call_names(), vec!["delete_review", "fetch_service"]);
}

#[tokio::test]
async fn load_reviews_replaces_the_session_list() {
    let backend = ScriptedBackend::new().with_reviews(vec![own_review("r1"), own_review("r2")]);
    let store = store_with(signed_in_state("u1"), backend);

    let _ = store
        .send(ClientAction::LoadReviews {
            service_id: "s1".to_string(),
        })
        .await;

    assert!(wait_until(&store, |s| s.reviews.len() == 2).await);
    assert!(!store.state(|s| s.is_loading).await);
}
