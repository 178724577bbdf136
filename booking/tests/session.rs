//! Session and auth flow tests: OTP round-trip, token persistence into
//! the vault, refresh, and sign-out.

use std::sync::Arc;
use std::time::Duration;
use wellspring_api::vault::{ACCESS_TOKEN_KEY, MemoryTokenVault, REFRESH_TOKEN_KEY, TokenVault, USER_KEY};
use wellspring_booking::mocks::{BackendCall, ScriptedBackend, ScriptedCheckout, signed_in_state};
use wellspring_booking::reducers::ClientReducer;
use wellspring_booking::{
    ClientAction, ClientConfig, ClientEnvironment, OtpContext, SessionState,
};
use wellspring_runtime::Store;
use wellspring_testing::mocks::{FixedClock, SequentialIds, test_clock};

type TestEnv = ClientEnvironment<ScriptedBackend, ScriptedCheckout, FixedClock, SequentialIds>;
type TestStore = Store<
    SessionState,
    ClientAction,
    TestEnv,
    ClientReducer<ScriptedBackend, ScriptedCheckout, FixedClock, SequentialIds>,
>;

fn store_with_vault(
    state: SessionState,
    backend: ScriptedBackend,
    vault: MemoryTokenVault,
) -> TestStore {
    let env = ClientEnvironment::new(
        backend,
        ScriptedCheckout::approving(),
        test_clock(),
        SequentialIds::new("key"),
        Arc::new(vault),
        ClientConfig::new("rzp_test_key".to_string()),
    );
    Store::new(state, ClientReducer::new(), env)
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
async fn sign_in_and_otp_establish_and_persist_the_session() {
    let backend = ScriptedBackend::new();
    let vault = MemoryTokenVault::new();
    let store = store_with_vault(SessionState::default(), backend.clone(), vault.clone());

    let _ = store
        .send(ClientAction::SignIn {
            phone_or_email: "asha@example.com".to_string(),
        })
        .await;
    assert!(wait_until(&store, |s| s.otp_pending == Some(OtpContext::SignIn)).await);

    let _ = store
        .send(ClientAction::VerifyOtp {
            code: "123456".to_string(),
        })
        .await;
    assert!(wait_until(&store, |s| s.auth.user.is_some()).await);

    assert_eq!(
        backend.call_names(),
        vec!["sign_in", "verify_otp"]
    );
    assert!(matches!(
        &backend.calls()[1],
        BackendCall::VerifyOtp { context: OtpContext::SignIn, otp } if otp == "123456"
    ));

    // Tokens (and the user record) are the only persisted state; wait for
    // the persistence effect to land in the vault.
    let mut access = None;
    for _ in 0..200 {
        access = vault.get(ACCESS_TOKEN_KEY).await.ok().flatten();
        if access.is_some() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    assert_eq!(access.as_deref(), Some("tok_access"));

    let refresh = vault.get(REFRESH_TOKEN_KEY).await.ok().flatten();
    assert_eq!(refresh.as_deref(), Some("tok_refresh"));

    let user_json = vault.get(USER_KEY).await.ok().flatten();
    assert!(matches!(user_json, Some(ref json) if json.contains("asha@example.com")));
}

#[tokio::test]
async fn non_digit_otp_blocks_submission() {
    let backend = ScriptedBackend::new();
    let vault = MemoryTokenVault::new();
    let store = store_with_vault(SessionState::default(), backend.clone(), vault);

    let _ = store
        .send(ClientAction::SignIn {
            phone_or_email: "asha@example.com".to_string(),
        })
        .await;
    assert!(wait_until(&store, |s| s.otp_pending.is_some()).await);

    let _ = store
        .send(ClientAction::VerifyOtp {
            code: "12a456".to_string(),
        })
        .await;

    tokio::time::sleep(Duration::from_millis(50)).await;

    assert_eq!(backend.call_names(), vec!["sign_in"]);
    let error = store.state(|s| s.error.clone()).await;
    assert!(matches!(error, Some(ref e) if e == "OTP must contain only digits"));
}

#[tokio::test]
async fn otp_without_a_pending_flow_is_rejected() {
    let backend = ScriptedBackend::new();
    let store = store_with_vault(
        SessionState::default(),
        backend.clone(),
        MemoryTokenVault::new(),
    );

    let _ = store
        .send(ClientAction::VerifyOtp {
            code: "123456".to_string(),
        })
        .await;

    tokio::time::sleep(Duration::from_millis(50)).await;

    assert!(backend.calls().is_empty());
    assert!(store.state(|s| s.error.is_some()).await);
}

#[tokio::test]
async fn sign_out_clears_session_and_vault() {
    let backend = ScriptedBackend::new();
    let vault = MemoryTokenVault::with_access_token("tok_access");
    let store = store_with_vault(signed_in_state("u1"), backend, vault.clone());

    let _ = store.send(ClientAction::SignOut).await;
    assert!(wait_until(&store, |s| s.auth.user.is_none()).await);

    let (auth, reviews) = store.state(|s| (s.auth.clone(), s.reviews.clone())).await;
    assert!(auth.access_token.is_none());
    assert!(auth.refresh_token.is_none());
    assert!(reviews.is_empty());

    assert!(matches!(vault.get(ACCESS_TOKEN_KEY).await, Ok(None)));
}

#[tokio::test]
async fn refresh_rotates_tokens() {
    let backend = ScriptedBackend::new();
    let vault = MemoryTokenVault::new();
    let mut state = signed_in_state("u1");
    state.auth.access_token = Some("tok_stale".to_string());
    let store = store_with_vault(state, backend.clone(), vault);

    let _ = store.send(ClientAction::RefreshSession).await;
    assert!(
        wait_until(&store, |s| s.auth.access_token.as_deref() == Some("tok_access")).await
    );

    assert_eq!(backend.call_names(), vec!["refresh_token"]);
}

#[tokio::test]
async fn auth_failure_surfaces_and_clears_loading() {
    let backend = ScriptedBackend::new().with_auth_error("account not found");
    let store = store_with_vault(
        SessionState::default(),
        backend,
        MemoryTokenVault::new(),
    );

    let _ = store
        .send(ClientAction::SignIn {
            phone_or_email: "asha@example.com".to_string(),
        })
        .await;

    assert!(wait_until(&store, |s| s.error.is_some()).await);
    assert!(!store.state(|s| s.is_loading).await);

    let _ = store.send(ClientAction::ClearError).await;
    assert!(store.state(|s| s.error.is_none()).await);
}
