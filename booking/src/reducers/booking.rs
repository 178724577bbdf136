//! Booking orchestration reducer.
//!
//! Drives one booking attempt through the machine:
//!
//! ```text
//! Idle → SlotSelected → OrderCreated → AwaitingPaymentCallback
//!      → Verifying → Persisting → Completed
//! ```
//!
//! `Failed` is terminal per attempt and reachable from order creation, the
//! checkout handoff, verification, and persistence. The sequence is strict:
//! the verify call only exists in the transition out of the checkout
//! message, and the create-booking call only exists in the transition out
//! of `PaymentVerified`, so a booking can never be written before its
//! payment is verified.
//!
//! Dismissing the checkout is the only defined cancellation point; once
//! `Verifying` is entered the in-flight calls run to completion or failure.

use crate::actions::ClientAction;
use crate::environment::ClientEnvironment;
use crate::error::BookingError;
use crate::providers::checkout::{CheckoutMessage, CheckoutOptions, CheckoutPrefill, CheckoutTheme};
use crate::providers::{BookingApi, CheckoutSurface, IdSource};
use crate::state::{
    AuthState, BookingAttempt, BookingDraft, BookingFlow, PaymentConfirmation, PendingConfirm,
    SessionState,
};
use crate::utils::{format_slot_time, is_valid_email};
use crate::config::ClientConfig;
use wellspring_api::bookings::CreateBookingRequest;
use wellspring_api::payments::{CreateOrderRequest, VerifyPaymentRequest};
use wellspring_core::environment::Clock;
use wellspring_core::{effect::Effect, reducer::Reducer};

/// Booking orchestration reducer.
#[derive(Debug, Clone)]
pub struct BookingReducer<A, C, K, I> {
    /// Phantom data to hold type parameters.
    _phantom: std::marker::PhantomData<(A, C, K, I)>,
}

impl<A, C, K, I> BookingReducer<A, C, K, I> {
    /// Create a new booking reducer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<A, C, K, I> Default for BookingReducer<A, C, K, I> {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the configuration handed to the checkout widget for an attempt.
fn checkout_options(
    config: &ClientConfig,
    auth: &AuthState,
    attempt: &BookingAttempt,
) -> CheckoutOptions {
    let description = attempt
        .order
        .notes
        .as_ref()
        .and_then(|notes| notes.description.clone())
        .unwrap_or_else(|| format!("Payment for {}", attempt.service_name));

    let (name, contact) = auth
        .user
        .as_ref()
        .map(|user| (user.name.clone(), user.phone_or_email.clone()))
        .unwrap_or_default();

    CheckoutOptions {
        key: config.checkout_key_id.clone(),
        amount: attempt.order.amount,
        currency: attempt.order.currency.clone(),
        name: config.display_name.clone(),
        description,
        order_id: attempt.order.id.clone(),
        prefill: CheckoutPrefill {
            name,
            email: contact.clone(),
            contact,
        },
        theme: CheckoutTheme {
            color: config.theme_color.clone(),
        },
    }
}

impl<A, C, K, I> Reducer for BookingReducer<A, C, K, I>
where
    A: BookingApi + Clone + 'static,
    C: CheckoutSurface + Clone + 'static,
    K: Clock + Clone + 'static,
    I: IdSource + Clone + 'static,
{
    type State = SessionState;
    type Action = ClientAction;
    type Environment = ClientEnvironment<A, C, K, I>;

    #[allow(clippy::too_many_lines)] // One arm per state transition
    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> Vec<Effect<Self::Action>> {
        match (state.flow.clone(), action) {
            // ═══════════════════════════════════════════════════════════════
            // SelectSlot: Idle → SlotSelected (reselection allowed)
            // ═══════════════════════════════════════════════════════════════
            (
                BookingFlow::Idle | BookingFlow::SlotSelected { confirm: None, .. },
                ClientAction::SelectSlot {
                    service_id,
                    service_name,
                    date,
                    slot,
                },
            ) => {
                if !slot.is_selectable() {
                    tracing::warn!(slot = %slot.id, "Ignoring selection of a non-available slot");
                    return vec![Effect::None];
                }

                state.flow = BookingFlow::SlotSelected {
                    draft: BookingDraft {
                        service_id,
                        service_name,
                        date,
                        slot,
                    },
                    confirm: None,
                };
                state.error = None;
                vec![Effect::None]
            },

            // ═══════════════════════════════════════════════════════════════
            // ConfirmBooking: capture the invoice email, create the order
            // ═══════════════════════════════════════════════════════════════
            (
                BookingFlow::SlotSelected {
                    draft,
                    confirm: None,
                },
                ClientAction::ConfirmBooking { email },
            ) => {
                if !is_valid_email(&email) {
                    state.error = Some(BookingError::InvalidEmail.to_string());
                    return vec![Effect::None];
                }

                let Some(user_id) = state.auth.user_id().map(ToString::to_string) else {
                    state.error = Some(BookingError::MissingContext.to_string());
                    return vec![Effect::None];
                };

                let idempotency_key = env.ids.generate();
                let request = CreateOrderRequest {
                    user_id: user_id.clone(),
                    service_id: draft.service_id.clone(),
                    idempotency_key: idempotency_key.clone(),
                };

                state.flow = BookingFlow::SlotSelected {
                    draft,
                    confirm: Some(PendingConfirm {
                        user_id,
                        email: email.trim().to_string(),
                        idempotency_key,
                    }),
                };
                state.is_processing = true;
                state.error = None;

                let api = env.api.clone();
                vec![Effect::future(async move {
                    match api.create_order(request).await {
                        Ok(order) => Some(ClientAction::OrderCreated { order }),
                        Err(e) => {
                            tracing::warn!(error = %e, "Order creation failed");
                            Some(ClientAction::OrderFailed {
                                reason: BookingError::OrderCreationFailed.to_string(),
                            })
                        },
                    }
                })]
            },

            // A second confirm while order creation is in flight is ignored.
            (
                BookingFlow::SlotSelected {
                    confirm: Some(_), ..
                },
                ClientAction::ConfirmBooking { .. },
            ) => {
                tracing::debug!("Ignoring duplicate confirm while order creation is in flight");
                vec![Effect::None]
            },

            // ═══════════════════════════════════════════════════════════════
            // OrderCreated: build checkout options, present the widget
            // ═══════════════════════════════════════════════════════════════
            (
                BookingFlow::SlotSelected {
                    draft,
                    confirm: Some(confirm),
                },
                ClientAction::OrderCreated { order },
            ) => {
                let attempt = BookingAttempt {
                    user_id: confirm.user_id,
                    email: confirm.email,
                    service_id: draft.service_id.clone(),
                    service_name: draft.service_name.clone(),
                    date: format!("{}T00:00:00Z", draft.date),
                    time_slot: format_slot_time(&draft.slot.start_time),
                    order,
                };
                let options = checkout_options(&env.config, &state.auth, &attempt);
                state.flow = BookingFlow::OrderCreated { attempt };

                let checkout = env.checkout.clone();
                vec![
                    Effect::future(async move { Some(ClientAction::CheckoutOpened) }),
                    Effect::future(async move {
                        match checkout.present(options).await {
                            Ok(message) => {
                                Some(ClientAction::CheckoutMessageReceived { message })
                            },
                            Err(e) => {
                                tracing::warn!(error = %e, "Checkout surface failed to present");
                                Some(ClientAction::CheckoutFailed {
                                    reason: BookingError::CheckoutUnavailable.to_string(),
                                })
                            },
                        }
                    }),
                ]
            },

            (
                BookingFlow::SlotSelected {
                    confirm: Some(_), ..
                },
                ClientAction::OrderFailed { reason },
            ) => {
                state.flow = BookingFlow::Failed {
                    reason: reason.clone(),
                };
                state.error = Some(reason);
                state.is_processing = false;
                vec![Effect::None]
            },

            // ═══════════════════════════════════════════════════════════════
            // CheckoutOpened: the widget rendered, control is handed off
            // ═══════════════════════════════════════════════════════════════
            (BookingFlow::OrderCreated { attempt }, ClientAction::CheckoutOpened) => {
                state.flow = BookingFlow::AwaitingPaymentCallback { attempt };
                vec![Effect::None]
            },

            (
                BookingFlow::OrderCreated { .. } | BookingFlow::AwaitingPaymentCallback { .. },
                ClientAction::CheckoutFailed { reason },
            ) => {
                state.flow = BookingFlow::Failed {
                    reason: reason.clone(),
                };
                state.error = Some(reason);
                state.is_processing = false;
                vec![Effect::None]
            },

            // ═══════════════════════════════════════════════════════════════
            // Checkout message: success → verify, error → terminal failure
            // ═══════════════════════════════════════════════════════════════
            (
                BookingFlow::OrderCreated { attempt }
                | BookingFlow::AwaitingPaymentCallback { attempt },
                ClientAction::CheckoutMessageReceived { message },
            ) => match message {
                CheckoutMessage::Success {
                    order_id,
                    payment_id,
                    signature,
                } if order_id == attempt.order.id => {
                    let payment = PaymentConfirmation {
                        order_id,
                        payment_id,
                        signature,
                    };
                    let request = VerifyPaymentRequest {
                        order_id: payment.order_id.clone(),
                        payment_id: payment.payment_id.clone(),
                        signature: payment.signature.clone(),
                        user_id: attempt.user_id.clone(),
                        service_id: attempt.service_id.clone(),
                        date: attempt.date.clone(),
                        time_slot: attempt.time_slot.clone(),
                        email: attempt.email.clone(),
                    };
                    state.flow = BookingFlow::Verifying { attempt, payment };

                    let api = env.api.clone();
                    vec![Effect::future(async move {
                        match api.verify_payment(request).await {
                            Ok(()) => Some(ClientAction::PaymentVerified),
                            Err(e) => {
                                tracing::warn!(error = %e, "Payment verification rejected");
                                Some(ClientAction::VerificationFailed {
                                    reason: BookingError::VerificationFailed.to_string(),
                                })
                            },
                        }
                    })]
                },

                CheckoutMessage::Success { order_id, .. } => {
                    // A message for some other order cannot advance this attempt.
                    tracing::warn!(
                        received = %order_id,
                        expected = %attempt.order.id,
                        "Ignoring checkout message with mismatched order id"
                    );
                    vec![Effect::None]
                },

                CheckoutMessage::Error => {
                    let reason = BookingError::PaymentFailed.to_string();
                    state.flow = BookingFlow::Failed {
                        reason: reason.clone(),
                    };
                    state.error = Some(reason);
                    state.is_processing = false;
                    vec![Effect::None]
                },
            },

            // ═══════════════════════════════════════════════════════════════
            // Verification outcome
            // ═══════════════════════════════════════════════════════════════
            (BookingFlow::Verifying { attempt, payment }, ClientAction::PaymentVerified) => {
                let request = CreateBookingRequest {
                    user_id: attempt.user_id.clone(),
                    service_id: attempt.service_id.clone(),
                    date: attempt.date.clone(),
                    time_slot: attempt.time_slot.clone(),
                    payment_id: payment.payment_id.clone(),
                    email: attempt.email.clone(),
                };
                state.flow = BookingFlow::Persisting { attempt, payment };

                let api = env.api.clone();
                vec![Effect::future(async move {
                    match api.create_booking(request).await {
                        Ok(booking) => Some(ClientAction::BookingPersisted { booking }),
                        Err(e) => {
                            tracing::error!(error = %e, "Booking write failed after captured payment");
                            Some(ClientAction::BookingPersistenceFailed {
                                reason: BookingError::PersistenceFailed.to_string(),
                            })
                        },
                    }
                })]
            },

            (BookingFlow::Verifying { .. }, ClientAction::VerificationFailed { reason }) => {
                state.flow = BookingFlow::Failed {
                    reason: reason.clone(),
                };
                state.error = Some(reason);
                state.is_processing = false;
                vec![Effect::None]
            },

            // ═══════════════════════════════════════════════════════════════
            // Persistence outcome
            // ═══════════════════════════════════════════════════════════════
            (BookingFlow::Persisting { .. }, ClientAction::BookingPersisted { booking }) => {
                state.current_booking = Some(booking.clone());
                state.flow = BookingFlow::Completed { booking };
                state.is_processing = false;
                state.error = None;
                vec![Effect::None]
            },

            (
                BookingFlow::Persisting { .. },
                ClientAction::BookingPersistenceFailed { reason },
            ) => {
                state.flow = BookingFlow::Failed {
                    reason: reason.clone(),
                };
                state.error = Some(reason);
                state.is_processing = false;
                vec![Effect::None]
            },

            // ═══════════════════════════════════════════════════════════════
            // Reset: retry restarts the whole attempt from Idle
            // ═══════════════════════════════════════════════════════════════
            (flow, ClientAction::ResetBookingFlow) => {
                if !flow.is_terminal() && !matches!(flow, BookingFlow::Idle) {
                    tracing::warn!("Resetting a booking attempt that was still in flight");
                }
                state.flow = BookingFlow::Idle;
                state.is_processing = false;
                vec![Effect::None]
            },

            // Invalid transitions
            (flow, action) => {
                tracing::trace!(?flow, ?action, "Ignoring action in current flow state");
                vec![Effect::None]
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkout_description_prefers_order_notes() {
        use wellspring_api::payments::{OrderNotes, PaymentOrder};

        let config = ClientConfig::new("rzp_test".to_string());
        let auth = AuthState::default();
        let mut attempt = BookingAttempt {
            user_id: "u1".to_string(),
            email: "guest@example.com".to_string(),
            service_id: "s1".to_string(),
            service_name: "Morning Yoga".to_string(),
            date: "2025-06-02T00:00:00Z".to_string(),
            time_slot: "9:00 AM".to_string(),
            order: PaymentOrder {
                id: "order_1".to_string(),
                amount: 10_000,
                currency: "INR".to_string(),
                notes: Some(OrderNotes {
                    description: Some("Session payment".to_string()),
                }),
            },
        };

        let options = checkout_options(&config, &auth, &attempt);
        assert_eq!(options.description, "Session payment");
        assert_eq!(options.order_id, "order_1");
        assert_eq!(options.amount, 10_000);

        attempt.order.notes = None;
        let options = checkout_options(&config, &auth, &attempt);
        assert_eq!(options.description, "Payment for Morning Yoga");
    }
}
