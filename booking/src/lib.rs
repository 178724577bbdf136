//! # Wellspring Booking
//!
//! Session state, booking orchestration, and review lifecycle for the
//! Wellspring client.
//!
//! ## Architecture
//!
//! All flows are implemented as reducers and effects:
//!
//! ```text
//! Action → Reducer → (State, Effects) → Effect Execution → More Actions
//! ```
//!
//! The booking orchestrator is a state machine per attempt:
//!
//! ```text
//! Idle → SlotSelected → OrderCreated → AwaitingPaymentCallback
//!      → Verifying → Persisting → Completed
//! ```
//!
//! with a terminal `Failed` reachable from order creation, the checkout
//! handoff, verification, and persistence. The checkout widget's callback is
//! a typed two-variant message awaited by an effect; order → verify →
//! persist is a strict sequence enforced by the machine.
//!
//! ## Example: driving a booking attempt
//!
//! ```rust,ignore
//! use wellspring_booking::*;
//! use wellspring_runtime::Store;
//!
//! let store = Store::new(SessionState::default(), reducer, environment);
//!
//! store.send(ClientAction::SelectSlot { .. }).await?;
//! store.send(ClientAction::ConfirmBooking { email }).await?;
//! // effects run: order creation → checkout → verification → persistence
//! ```

// Public modules
pub mod actions;
pub mod availability;
pub mod config;
pub mod environment;
pub mod error;
pub mod providers;
pub mod reducers;
pub mod state;
pub mod utils;

#[cfg(feature = "test-utils")]
pub mod mocks;

// Re-export main types for convenience
pub use actions::{ClientAction, OtpContext};
pub use availability::AvailabilityWindow;
pub use config::ClientConfig;
pub use environment::ClientEnvironment;
pub use error::BookingError;
pub use reducers::ClientReducer;
pub use state::{AuthState, BookingAttempt, BookingDraft, BookingFlow, SessionState};
