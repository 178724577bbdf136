//! Session and authentication reducer.
//!
//! Sign-up and sign-in round-trip an OTP; verification returns session
//! tokens which are mirrored into state and persisted to the token vault
//! (the only state that survives the process). Sign-out clears both.

use crate::actions::{ClientAction, OtpContext};
use crate::environment::ClientEnvironment;
use crate::error::BookingError;
use crate::providers::{BookingApi, CheckoutSurface, IdSource};
use crate::state::{AuthState, BookingFlow, SessionState};
use crate::utils::is_valid_otp;
use wellspring_api::auth::{RefreshTokenRequest, SignInRequest, SignUpRequest, VerifyOtpRequest};
use wellspring_api::vault::{ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, USER_KEY};
use wellspring_core::environment::Clock;
use wellspring_core::{effect::Effect, reducer::Reducer};

/// Session and authentication reducer.
#[derive(Debug, Clone)]
pub struct SessionReducer<A, C, K, I> {
    /// Phantom data to hold type parameters.
    _phantom: std::marker::PhantomData<(A, C, K, I)>,
}

impl<A, C, K, I> SessionReducer<A, C, K, I> {
    /// Create a new session reducer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<A, C, K, I> Default for SessionReducer<A, C, K, I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A, C, K, I> Reducer for SessionReducer<A, C, K, I>
where
    A: BookingApi + Clone + 'static,
    C: CheckoutSurface + Clone + 'static,
    K: Clock + Clone + 'static,
    I: IdSource + Clone + 'static,
{
    type State = SessionState;
    type Action = ClientAction;
    type Environment = ClientEnvironment<A, C, K, I>;

    #[allow(clippy::too_many_lines)] // One arm per session transition
    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> Vec<Effect<Self::Action>> {
        match action {
            // ═══════════════════════════════════════════════════════════════
            // Sign-up / sign-in: backend dispatches an OTP
            // ═══════════════════════════════════════════════════════════════
            ClientAction::SignUp {
                name,
                phone_or_email,
            } => {
                state.is_loading = true;
                state.error = None;
                state.auth.phone_or_email = Some(phone_or_email.clone());

                let api = env.api.clone();
                vec![Effect::future(async move {
                    match api
                        .sign_up(SignUpRequest {
                            name,
                            phone_or_email,
                        })
                        .await
                    {
                        Ok(_) => Some(ClientAction::AuthOtpSent {
                            context: OtpContext::SignUp,
                        }),
                        Err(e) => {
                            tracing::warn!(error = %e, "Sign-up failed");
                            Some(ClientAction::AuthFailed {
                                reason: "Something went wrong during sign up.".to_string(),
                            })
                        },
                    }
                })]
            },

            ClientAction::SignIn { phone_or_email } => {
                state.is_loading = true;
                state.error = None;
                state.auth.phone_or_email = Some(phone_or_email.clone());

                let api = env.api.clone();
                vec![Effect::future(async move {
                    match api.sign_in(SignInRequest { phone_or_email }).await {
                        Ok(_) => Some(ClientAction::AuthOtpSent {
                            context: OtpContext::SignIn,
                        }),
                        Err(e) => {
                            tracing::warn!(error = %e, "Sign-in failed");
                            Some(ClientAction::AuthFailed {
                                reason: "Something went wrong during sign in.".to_string(),
                            })
                        },
                    }
                })]
            },

            ClientAction::AuthOtpSent { context } => {
                state.is_loading = false;
                state.otp_pending = Some(context);
                vec![Effect::None]
            },

            // ═══════════════════════════════════════════════════════════════
            // OTP verification → session tokens
            // ═══════════════════════════════════════════════════════════════
            ClientAction::VerifyOtp { code } => {
                if !is_valid_otp(&code) {
                    state.error = Some(BookingError::InvalidOtp.to_string());
                    return vec![Effect::None];
                }

                let (Some(context), Some(phone_or_email)) =
                    (state.otp_pending, state.auth.phone_or_email.clone())
                else {
                    tracing::warn!("VerifyOtp without a pending OTP flow");
                    state.error = Some(BookingError::MissingContext.to_string());
                    return vec![Effect::None];
                };

                state.is_loading = true;
                state.error = None;

                let api = env.api.clone();
                vec![Effect::future(async move {
                    match api
                        .verify_otp(
                            context,
                            VerifyOtpRequest {
                                phone_or_email,
                                otp: code,
                            },
                        )
                        .await
                    {
                        Ok(tokens) => Some(ClientAction::SessionEstablished { tokens }),
                        Err(e) => {
                            tracing::warn!(error = %e, "OTP verification failed");
                            Some(ClientAction::AuthFailed {
                                reason: "OTP verification failed".to_string(),
                            })
                        },
                    }
                })]
            },

            ClientAction::SessionEstablished { tokens } => {
                state.auth.access_token = Some(tokens.access_token.clone());
                state.auth.refresh_token = Some(tokens.refresh_token.clone());
                state.auth.user = Some(tokens.user.clone());
                state.otp_pending = None;
                state.is_loading = false;
                state.error = None;

                // Tokens (and the user record) are the only persisted state.
                let vault = env.vault.clone();
                vec![Effect::future(async move {
                    let user_json = serde_json::to_string(&tokens.user).ok();

                    let result = async {
                        vault.set(ACCESS_TOKEN_KEY, tokens.access_token).await?;
                        vault.set(REFRESH_TOKEN_KEY, tokens.refresh_token).await?;
                        if let Some(user_json) = user_json {
                            vault.set(USER_KEY, user_json).await?;
                        }
                        Ok::<(), wellspring_api::ApiError>(())
                    }
                    .await;

                    match result {
                        Ok(()) => Some(ClientAction::SessionPersisted),
                        Err(e) => {
                            // Session stays usable in memory; persistence is
                            // retried on the next token rotation.
                            tracing::warn!(error = %e, "Failed to persist session tokens");
                            None
                        },
                    }
                })]
            },

            ClientAction::SessionPersisted => {
                // Confirmation event
                vec![Effect::None]
            },

            // ═══════════════════════════════════════════════════════════════
            // Refresh / sign-out
            // ═══════════════════════════════════════════════════════════════
            ClientAction::RefreshSession => {
                let Some(refresh_token) = state.auth.refresh_token.clone() else {
                    state.error = Some(BookingError::MissingContext.to_string());
                    return vec![Effect::None];
                };

                let api = env.api.clone();
                vec![Effect::future(async move {
                    match api.refresh_token(RefreshTokenRequest { refresh_token }).await {
                        Ok(tokens) => Some(ClientAction::SessionEstablished { tokens }),
                        Err(e) => {
                            tracing::warn!(error = %e, "Session refresh failed");
                            Some(ClientAction::AuthFailed {
                                reason: "Session refresh failed".to_string(),
                            })
                        },
                    }
                })]
            },

            ClientAction::SignOut => {
                let vault = env.vault.clone();
                vec![Effect::future(async move {
                    for key in [ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, USER_KEY] {
                        if let Err(e) = vault.remove(key).await {
                            tracing::warn!(error = %e, key, "Failed to clear vault entry");
                        }
                    }
                    Some(ClientAction::SignedOut)
                })]
            },

            ClientAction::SignedOut => {
                state.auth = AuthState::default();
                state.otp_pending = None;
                state.flow = BookingFlow::Idle;
                state.current_booking = None;
                state.reviews.clear();
                state.is_loading = false;
                state.is_processing = false;
                vec![Effect::None]
            },

            ClientAction::AuthFailed { reason } => {
                state.is_loading = false;
                state.error = Some(reason);
                vec![Effect::None]
            },

            ClientAction::ClearError => {
                state.error = None;
                vec![Effect::None]
            },

            // Other actions are not handled by this reducer
            _ => vec![Effect::None],
        }
    }
}
