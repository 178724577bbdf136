//! Review lifecycle reducer.
//!
//! Create, update, and delete a review tied to a completed booking, with
//! a service-detail re-fetch after each mutation so the aggregate rating
//! stays in sync. Validation happens before any network call; failures
//! leave prior state untouched.

use crate::actions::ClientAction;
use crate::environment::ClientEnvironment;
use crate::error::BookingError;
use crate::providers::{BookingApi, CheckoutSurface, IdSource};
use crate::state::SessionState;
use wellspring_api::reviews::{CreateReviewRequest, UpdateReviewRequest};
use wellspring_core::environment::Clock;
use wellspring_core::{effect::Effect, reducer::Reducer};

/// Review lifecycle reducer.
#[derive(Debug, Clone)]
pub struct ReviewReducer<A, C, K, I> {
    /// Phantom data to hold type parameters.
    _phantom: std::marker::PhantomData<(A, C, K, I)>,
}

impl<A, C, K, I> ReviewReducer<A, C, K, I> {
    /// Create a new review reducer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<A, C, K, I> Default for ReviewReducer<A, C, K, I> {
    fn default() -> Self {
        Self::new()
    }
}

/// Rating must be 1–5 and the comment non-blank before a call is issued.
fn is_valid_review(rating: u8, comment: &str) -> bool {
    (1..=5).contains(&rating) && !comment.trim().is_empty()
}

/// Re-fetch the service detail so the aggregate rating reflects the mutation.
fn refresh_service_effect<A>(api: A, service_id: String) -> Effect<ClientAction>
where
    A: BookingApi + Clone + 'static,
{
    Effect::future(async move {
        match api.fetch_service(service_id).await {
            Ok(service) => Some(ClientAction::ServiceRefreshed {
                service: Box::new(service),
            }),
            Err(e) => {
                tracing::warn!(error = %e, "Service refresh after review mutation failed");
                None
            },
        }
    })
}

impl<A, C, K, I> Reducer for ReviewReducer<A, C, K, I>
where
    A: BookingApi + Clone + 'static,
    C: CheckoutSurface + Clone + 'static,
    K: Clock + Clone + 'static,
    I: IdSource + Clone + 'static,
{
    type State = SessionState;
    type Action = ClientAction;
    type Environment = ClientEnvironment<A, C, K, I>;

    #[allow(clippy::too_many_lines)] // One arm per lifecycle operation
    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> Vec<Effect<Self::Action>> {
        match action {
            // ═══════════════════════════════════════════════════════════════
            // Load
            // ═══════════════════════════════════════════════════════════════
            ClientAction::LoadReviews { service_id } => {
                state.is_loading = true;
                state.error = None;

                let api = env.api.clone();
                vec![Effect::future(async move {
                    match api.fetch_reviews(service_id).await {
                        Ok(reviews) => Some(ClientAction::ReviewsLoaded { reviews }),
                        Err(e) => {
                            tracing::warn!(error = %e, "Review fetch failed");
                            Some(ClientAction::ReviewFailed {
                                reason: "Failed to load reviews".to_string(),
                            })
                        },
                    }
                })]
            },

            ClientAction::ReviewsLoaded { reviews } => {
                state.reviews = reviews;
                state.is_loading = false;
                vec![Effect::None]
            },

            // ═══════════════════════════════════════════════════════════════
            // Create
            // ═══════════════════════════════════════════════════════════════
            ClientAction::CreateReview {
                service_id,
                booking_id,
                rating,
                comment,
            } => {
                if !is_valid_review(rating, &comment) {
                    state.error = Some(BookingError::InvalidReview.to_string());
                    return vec![Effect::None];
                }

                state.is_loading = true;
                state.error = None;

                let api = env.api.clone();
                let request = CreateReviewRequest {
                    service_id: service_id.clone(),
                    booking_id,
                    rating,
                    comment: comment.trim().to_string(),
                };
                vec![Effect::future(async move {
                    match api.create_review(request).await {
                        Ok(review) => Some(ClientAction::ReviewCreated { review, service_id }),
                        Err(e) => {
                            tracing::warn!(error = %e, "Review creation failed");
                            Some(ClientAction::ReviewFailed {
                                reason: "Failed to submit review".to_string(),
                            })
                        },
                    }
                })]
            },

            ClientAction::ReviewCreated { review, service_id } => {
                state.reviews.push(review);
                state.is_loading = false;
                vec![refresh_service_effect(env.api.clone(), service_id)]
            },

            // ═══════════════════════════════════════════════════════════════
            // Update (author-only; the server re-checks authorship)
            // ═══════════════════════════════════════════════════════════════
            ClientAction::UpdateReview {
                review_id,
                service_id,
                rating,
                comment,
            } => {
                if !is_valid_review(rating, &comment) {
                    state.error = Some(BookingError::InvalidReview.to_string());
                    return vec![Effect::None];
                }

                let Some(review) = state.reviews.iter().find(|r| r.id == review_id) else {
                    tracing::warn!(review = %review_id, "Update requested for an unknown review");
                    state.error = Some(BookingError::MissingContext.to_string());
                    return vec![Effect::None];
                };
                if !state.can_edit_review(review) {
                    tracing::warn!(review = %review_id, "Update requested for a foreign review");
                    state.error = Some(BookingError::NotReviewAuthor.to_string());
                    return vec![Effect::None];
                }

                state.is_loading = true;
                state.error = None;

                let api = env.api.clone();
                let request = UpdateReviewRequest {
                    rating,
                    comment: comment.trim().to_string(),
                };
                vec![Effect::future(async move {
                    match api.update_review(review_id, request).await {
                        Ok(review) => Some(ClientAction::ReviewUpdated { review, service_id }),
                        Err(e) => {
                            tracing::warn!(error = %e, "Review update failed");
                            Some(ClientAction::ReviewFailed {
                                reason: "Failed to update review".to_string(),
                            })
                        },
                    }
                })]
            },

            ClientAction::ReviewUpdated { review, service_id } => {
                if let Some(existing) = state.reviews.iter_mut().find(|r| r.id == review.id) {
                    *existing = review;
                }
                state.is_loading = false;
                vec![refresh_service_effect(env.api.clone(), service_id)]
            },

            // ═══════════════════════════════════════════════════════════════
            // Delete (removed locally only after server confirmation)
            // ═══════════════════════════════════════════════════════════════
            ClientAction::DeleteReview {
                review_id,
                service_id,
            } => {
                let Some(review) = state.reviews.iter().find(|r| r.id == review_id) else {
                    tracing::warn!(review = %review_id, "Delete requested for an unknown review");
                    state.error = Some(BookingError::MissingContext.to_string());
                    return vec![Effect::None];
                };
                if !state.can_edit_review(review) {
                    tracing::warn!(review = %review_id, "Delete requested for a foreign review");
                    state.error = Some(BookingError::NotReviewAuthor.to_string());
                    return vec![Effect::None];
                }

                state.is_loading = true;
                state.error = None;

                let api = env.api.clone();
                vec![Effect::future(async move {
                    match api.delete_review(review_id.clone()).await {
                        Ok(()) => Some(ClientAction::ReviewDeleted {
                            review_id,
                            service_id,
                        }),
                        Err(e) => {
                            tracing::warn!(error = %e, "Review deletion failed");
                            Some(ClientAction::ReviewFailed {
                                reason: "Failed to delete review".to_string(),
                            })
                        },
                    }
                })]
            },

            ClientAction::ReviewDeleted {
                review_id,
                service_id,
            } => {
                state.reviews.retain(|r| r.id != review_id);
                state.is_loading = false;
                vec![refresh_service_effect(env.api.clone(), service_id)]
            },

            // ═══════════════════════════════════════════════════════════════
            // Failures and refresh
            // ═══════════════════════════════════════════════════════════════
            ClientAction::ReviewFailed { reason } => {
                state.is_loading = false;
                state.error = Some(reason);
                vec![Effect::None]
            },

            ClientAction::ServiceRefreshed { service } => {
                state.service = Some(*service);
                vec![Effect::None]
            },

            // Other actions are not handled by this reducer
            _ => vec![Effect::None],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn review_validation_bounds() {
        assert!(is_valid_review(1, "Good"));
        assert!(is_valid_review(5, "Great"));
        assert!(!is_valid_review(0, "Good"));
        assert!(!is_valid_review(6, "Good"));
        assert!(!is_valid_review(4, ""));
        assert!(!is_valid_review(4, "   "));
    }
}
