//! Client environment.
//!
//! This module defines the environment type for dependency injection in
//! the session reducers. Session state is explicit and injected, never
//! ambient: the reducers receive everything they touch through this type,
//! which keeps the booking state machine testable in isolation.

use crate::config::ClientConfig;
use crate::providers::{BookingApi, CheckoutSurface, IdSource};
use std::sync::Arc;
use wellspring_api::vault::TokenVault;
use wellspring_core::environment::Clock;

/// Client environment.
///
/// Contains all external dependencies needed by the session reducers.
///
/// # Type Parameters
///
/// - `A`: backend API provider
/// - `C`: checkout surface
/// - `K`: clock
/// - `I`: id source
#[derive(Clone)]
pub struct ClientEnvironment<A, C, K, I>
where
    A: BookingApi + Clone,
    C: CheckoutSurface + Clone,
    K: Clock + Clone,
    I: IdSource + Clone,
{
    /// Backend API provider.
    pub api: A,

    /// Checkout surface (the embedded payment widget).
    pub checkout: C,

    /// Clock for window computation.
    pub clock: K,

    /// Id source for idempotency keys.
    pub ids: I,

    /// Secure token storage.
    pub vault: Arc<dyn TokenVault>,

    /// Client configuration.
    pub config: ClientConfig,
}

impl<A, C, K, I> ClientEnvironment<A, C, K, I>
where
    A: BookingApi + Clone,
    C: CheckoutSurface + Clone,
    K: Clock + Clone,
    I: IdSource + Clone,
{
    /// Create a new client environment.
    #[must_use]
    pub fn new(
        api: A,
        checkout: C,
        clock: K,
        ids: I,
        vault: Arc<dyn TokenVault>,
        config: ClientConfig,
    ) -> Self {
        Self {
            api,
            checkout,
            clock,
            ids,
            vault,
            config,
        }
    }
}
