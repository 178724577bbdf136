//! Session reducers.
//!
//! This module contains pure reducer functions for the client's flows.
//!
//! Reducers are pure functions: `(State, Action, Environment) → (State, Effects)`.

pub mod availability;
pub mod booking;
pub mod review;
pub mod session;

use crate::actions::ClientAction;
use crate::environment::ClientEnvironment;
use crate::providers::{BookingApi, CheckoutSurface, IdSource};
use crate::state::SessionState;
use wellspring_core::environment::Clock;
use wellspring_core::{effect::Effect, reducer::Reducer};

// Re-export
pub use availability::AvailabilityReducer;
pub use booking::BookingReducer;
pub use review::ReviewReducer;
pub use session::SessionReducer;

/// Unified client reducer.
///
/// Combines the session/auth, availability, booking orchestration, and
/// review flows into a single reducer. Routes actions to the appropriate
/// sub-reducer based on action type.
#[derive(Debug, Clone)]
pub struct ClientReducer<A, C, K, I>
where
    A: BookingApi + Clone + 'static,
    C: CheckoutSurface + Clone + 'static,
    K: Clock + Clone + 'static,
    I: IdSource + Clone + 'static,
{
    session: SessionReducer<A, C, K, I>,
    availability: AvailabilityReducer<A, C, K, I>,
    booking: BookingReducer<A, C, K, I>,
    review: ReviewReducer<A, C, K, I>,
}

impl<A, C, K, I> ClientReducer<A, C, K, I>
where
    A: BookingApi + Clone + 'static,
    C: CheckoutSurface + Clone + 'static,
    K: Clock + Clone + 'static,
    I: IdSource + Clone + 'static,
{
    /// Create a new unified client reducer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            session: SessionReducer::new(),
            availability: AvailabilityReducer::new(),
            booking: BookingReducer::new(),
            review: ReviewReducer::new(),
        }
    }
}

impl<A, C, K, I> Default for ClientReducer<A, C, K, I>
where
    A: BookingApi + Clone + 'static,
    C: CheckoutSurface + Clone + 'static,
    K: Clock + Clone + 'static,
    I: IdSource + Clone + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<A, C, K, I> Reducer for ClientReducer<A, C, K, I>
where
    A: BookingApi + Clone + 'static,
    C: CheckoutSurface + Clone + 'static,
    K: Clock + Clone + 'static,
    I: IdSource + Clone + 'static,
{
    type State = SessionState;
    type Action = ClientAction;
    type Environment = ClientEnvironment<A, C, K, I>;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> Vec<Effect<Self::Action>> {
        match &action {
            ClientAction::SignUp { .. }
            | ClientAction::SignIn { .. }
            | ClientAction::AuthOtpSent { .. }
            | ClientAction::VerifyOtp { .. }
            | ClientAction::SessionEstablished { .. }
            | ClientAction::SessionPersisted
            | ClientAction::RefreshSession
            | ClientAction::SignOut
            | ClientAction::SignedOut
            | ClientAction::AuthFailed { .. }
            | ClientAction::ClearError => self.session.reduce(state, action, env),

            ClientAction::LoadAvailability { .. }
            | ClientAction::AvailabilityLoaded { .. }
            | ClientAction::AvailabilityFailed { .. } => {
                self.availability.reduce(state, action, env)
            },

            ClientAction::SelectSlot { .. }
            | ClientAction::ConfirmBooking { .. }
            | ClientAction::OrderCreated { .. }
            | ClientAction::OrderFailed { .. }
            | ClientAction::CheckoutOpened
            | ClientAction::CheckoutFailed { .. }
            | ClientAction::CheckoutMessageReceived { .. }
            | ClientAction::PaymentVerified
            | ClientAction::VerificationFailed { .. }
            | ClientAction::BookingPersisted { .. }
            | ClientAction::BookingPersistenceFailed { .. }
            | ClientAction::ResetBookingFlow => self.booking.reduce(state, action, env),

            ClientAction::LoadReviews { .. }
            | ClientAction::ReviewsLoaded { .. }
            | ClientAction::CreateReview { .. }
            | ClientAction::ReviewCreated { .. }
            | ClientAction::UpdateReview { .. }
            | ClientAction::ReviewUpdated { .. }
            | ClientAction::DeleteReview { .. }
            | ClientAction::ReviewDeleted { .. }
            | ClientAction::ReviewFailed { .. }
            | ClientAction::ServiceRefreshed { .. } => self.review.reduce(state, action, env),
        }
    }
}
