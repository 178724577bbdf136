//! Provider traits and production implementations.
//!
//! All external dependencies of the reducers are abstracted behind traits
//! and injected via the environment: the backend API, the checkout surface,
//! the token vault, and id generation.

pub mod api;
pub mod backend;
pub mod checkout;
pub mod ids;

pub use api::BookingApi;
pub use backend::HttpBookingApi;
pub use checkout::{CheckoutMessage, CheckoutOptions, CheckoutPrefill, CheckoutSurface, CheckoutTheme};
pub use ids::{IdSource, UuidIds};
