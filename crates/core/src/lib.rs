//! Herowear Core - Shared types library.
//!
//! This crate provides common types used across the Herowear components:
//! - `storefront` - Public-facing storefront and commerce API client
//! - `integration-tests` - End-to-end tests of the storefront router
//!
//! # Architecture
//!
//! The core crate contains only types and pure computations - no I/O, no
//! HTTP clients, no rendering. This keeps it lightweight and allows it to be
//! used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for identifiers and amounts
//! - [`progress`] - Scroll geometry and clamped progress values

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod progress;
pub mod types;

pub use progress::{Progress, ScrollGeometry};
pub use types::*;
