//! # Wellspring Testing
//!
//! Testing utilities and helpers for the Wellspring client architecture.
//!
//! This crate provides:
//! - Deterministic time (`FixedClock`)
//! - Predictable id generation (`SequentialIds`)
//!
//! Domain-specific mocks (scripted backend, scripted checkout surface,
//! in-memory token vault) live in `wellspring-booking::mocks` behind its
//! `test-utils` feature, next to the traits they implement.
//!
//! ## Example
//!
//! ```ignore
//! use wellspring_testing::test_clock;
//! use wellspring_runtime::Store;
//!
//! #[tokio::test]
//! async fn test_booking_flow() {
//!     let env = test_environment();
//!     let store = Store::new(SessionState::default(), ClientReducer::default(), env);
//!
//!     store.send(ClientAction::SelectSlot { .. }).await?;
//!
//!     let flow = store.state(|s| s.flow.clone()).await;
//!     assert!(matches!(flow, BookingFlow::SlotSelected { .. }));
//! }
//! ```

use chrono::{DateTime, Utc};
use wellspring_core::environment::Clock;

/// Mock implementations of environment traits.
pub mod mocks {
    use super::{Clock, DateTime, Utc};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU64, Ordering};

    /// Fixed clock for deterministic tests
    ///
    /// Always returns the same time, making tests reproducible.
    ///
    /// # Example
    ///
    /// ```
    /// use wellspring_testing::mocks::FixedClock;
    /// use wellspring_core::environment::Clock;
    /// use chrono::Utc;
    ///
    /// let clock = FixedClock::new(Utc::now());
    /// let time1 = clock.now();
    /// let time2 = clock.now();
    /// assert_eq!(time1, time2); // Always the same!
    /// ```
    #[derive(Debug, Clone)]
    pub struct FixedClock {
        time: DateTime<Utc>,
    }

    impl FixedClock {
        /// Create a new fixed clock with the given time
        #[must_use]
        pub const fn new(time: DateTime<Utc>) -> Self {
            Self { time }
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.time
        }
    }

    /// Create a default fixed clock for tests (2025-06-01 00:00:00 UTC)
    ///
    /// # Panics
    ///
    /// This function will panic if the hardcoded timestamp fails to parse,
    /// which should never happen in practice.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn test_clock() -> FixedClock {
        FixedClock::new(
            DateTime::parse_from_rfc3339("2025-06-01T00:00:00Z")
                .expect("hardcoded timestamp should always parse")
                .with_timezone(&Utc),
        )
    }

    /// Sequential id generator for predictable ids in tests
    ///
    /// Produces `"{prefix}-1"`, `"{prefix}-2"`, … across clones, so code
    /// under test and assertions observe the same sequence.
    #[derive(Debug, Clone)]
    pub struct SequentialIds {
        prefix: String,
        next: Arc<AtomicU64>,
    }

    impl SequentialIds {
        /// Create a generator with the given prefix
        #[must_use]
        pub fn new(prefix: impl Into<String>) -> Self {
            Self {
                prefix: prefix.into(),
                next: Arc::new(AtomicU64::new(1)),
            }
        }

        /// Produce the next id in the sequence
        #[must_use]
        pub fn next_id(&self) -> String {
            let n = self.next.fetch_add(1, Ordering::SeqCst);
            format!("{}-{n}", self.prefix)
        }
    }

    impl Default for SequentialIds {
        fn default() -> Self {
            Self::new("id")
        }
    }
}

// Re-export commonly used items
pub use mocks::{FixedClock, SequentialIds, test_clock};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock() {
        let clock = test_clock();
        let time1 = clock.now();
        let time2 = clock.now();
        assert_eq!(time1, time2);
    }

    #[test]
    fn test_sequential_ids_shared_across_clones() {
        let ids = SequentialIds::new("order");
        let ids2 = ids.clone();

        assert_eq!(ids.next_id(), "order-1");
        assert_eq!(ids2.next_id(), "order-2");
        assert_eq!(ids.next_id(), "order-3");
    }
}
