//! Core types for the Herowear storefront.
//!
//! This module provides type-safe wrappers for values exchanged with the
//! commerce API.

pub mod amount;
pub mod id;

pub use amount::Amount;
pub use id::*;
