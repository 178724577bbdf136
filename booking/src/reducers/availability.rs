//! Availability resolution reducer.
//!
//! Fetches a service's bookable date/slot matrix for the configured rolling
//! window. The backend's ordering is not trusted: days are sorted by date
//! ascending before they reach state. A failed lookup clears the matrix,
//! which leaves the booking modal with no selectable dates.

use crate::actions::ClientAction;
use crate::environment::ClientEnvironment;
use crate::providers::{BookingApi, CheckoutSurface, IdSource};
use crate::state::SessionState;
use wellspring_core::environment::Clock;
use wellspring_core::{effect::Effect, reducer::Reducer};

/// Availability resolution reducer.
#[derive(Debug, Clone)]
pub struct AvailabilityReducer<A, C, K, I> {
    /// Phantom data to hold type parameters.
    _phantom: std::marker::PhantomData<(A, C, K, I)>,
}

impl<A, C, K, I> AvailabilityReducer<A, C, K, I> {
    /// Create a new availability reducer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<A, C, K, I> Default for AvailabilityReducer<A, C, K, I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A, C, K, I> Reducer for AvailabilityReducer<A, C, K, I>
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
        match action {
            ClientAction::LoadAvailability { service_id } => {
                state.is_loading = true;
                state.error = None;

                let (start_date, end_date) =
                    env.config.availability_window.range(env.clock.now());

                let api = env.api.clone();
                vec![Effect::future(async move {
                    match api.fetch_availability(service_id, start_date, end_date).await {
                        Ok(days) => Some(ClientAction::AvailabilityLoaded { days }),
                        Err(e) => {
                            tracing::warn!(error = %e, "Availability lookup failed");
                            Some(ClientAction::AvailabilityFailed {
                                reason: "Failed to load availability".to_string(),
                            })
                        },
                    }
                })]
            },

            ClientAction::AvailabilityLoaded { mut days } => {
                days.sort_by(|a, b| a.date.cmp(&b.date));
                state.availability = days;
                state.is_loading = false;
                vec![Effect::None]
            },

            ClientAction::AvailabilityFailed { reason } => {
                state.availability.clear();
                state.is_loading = false;
                state.error = Some(reason);
                vec![Effect::None]
            },

            // Other actions are not handled by this reducer
            _ => vec![Effect::None],
        }
    }
}
