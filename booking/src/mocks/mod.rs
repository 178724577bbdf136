//! Mock provider implementations for testing.
//!
//! This module provides simple, in-memory implementations of the provider
//! traits for use in unit and integration tests: a scripted backend that
//! records every call in order, and a scripted checkout surface.

pub mod backend;
pub mod checkout;

pub use backend::{BackendCall, ScriptedBackend};
pub use checkout::ScriptedCheckout;

use crate::config::ClientConfig;
use crate::environment::ClientEnvironment;
use crate::providers::IdSource;
use crate::state::SessionState;
use std::sync::Arc;
use wellspring_api::profile::UserProfile;
use wellspring_api::vault::MemoryTokenVault;
use wellspring_testing::mocks::{FixedClock, SequentialIds, test_clock};

impl IdSource for SequentialIds {
    fn generate(&self) -> String {
        self.next_id()
    }
}

/// A signed-in user for tests.
#[must_use]
pub fn sample_user(user_id: &str) -> UserProfile {
    UserProfile {
        id: user_id.to_string(),
        name: "Asha".to_string(),
        username: None,
        phone_or_email: "asha@example.com".to_string(),
        date_of_birth: None,
        avatar: None,
        role: "USER".to_string(),
        is_verified: true,
        is_agreed_to_terms: true,
        created_at: None,
        updated_at: None,
    }
}

/// A session state with the given user signed in.
#[must_use]
pub fn signed_in_state(user_id: &str) -> SessionState {
    let mut state = SessionState::default();
    state.auth.access_token = Some("tok_access".to_string());
    state.auth.refresh_token = Some("tok_refresh".to_string());
    state.auth.user = Some(sample_user(user_id));
    state
}

/// A client environment wired to the scripted providers, a fixed clock,
/// sequential ids, and an in-memory vault.
#[must_use]
pub fn test_environment(
    backend: ScriptedBackend,
    checkout: ScriptedCheckout,
) -> ClientEnvironment<ScriptedBackend, ScriptedCheckout, FixedClock, SequentialIds> {
    ClientEnvironment::new(
        backend,
        checkout,
        test_clock(),
        SequentialIds::new("key"),
        Arc::new(MemoryTokenVault::new()),
        ClientConfig::new("rzp_test_key".to_string()),
    )
}
