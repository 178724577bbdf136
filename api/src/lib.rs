//! # Wellspring API
//!
//! Typed HTTP client for the Wellspring booking backend.
//!
//! A single configured [`ApiClient`] wraps all outbound calls: services,
//! availability, payments, bookings, reviews, memberships, notifications,
//! profile, and the unauthenticated auth endpoints. A bearer token is read
//! from the injected [`vault::TokenVault`] and attached to every request
//! except the enumerated auth endpoints.
//!
//! ## Example
//!
//! ```ignore
//! use wellspring_api::{ApiClient, ApiConfig, vault::MemoryTokenVault};
//! use std::sync::Arc;
//!
//! let client = ApiClient::new(
//!     ApiConfig::new("https://backend.example.com".into()),
//!     Arc::new(MemoryTokenVault::new()),
//! )?;
//!
//! let availability = client.fetch_availability("svc_1", "2025-06-01", "2025-07-01").await?;
//! ```

pub mod auth;
pub mod availability;
pub mod bookings;
pub mod client;
pub mod error;
pub mod memberships;
pub mod notifications;
pub mod payments;
pub mod profile;
pub mod reviews;
pub mod services;
pub mod vault;

pub use client::{ApiClient, ApiConfig};
pub use error::ApiError;
