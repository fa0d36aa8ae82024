// BidiMap - bidimap-error
// Module: Error Handling
//
// Copyright (c) 2026 The BidiMap Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Error handling library for the bidimap crates.
//!
//! This library provides the typed error system shared by the bidimap
//! containers: error categories, numeric error codes, the [`Error`] struct,
//! and helper constructors.
//!
//! # Error Categories
//!
//! Errors are organized into categories, each with its own range of error
//! codes:
//!
//! ## Validation Errors (1000-1099)
//! - Duplicate keys supplied at construction
//!
//! ## Capacity Errors (1100-1199)
//! - Zero-capacity construction
//!
//! # Usage
//!
//! ```
//! use bidimap_error::{codes, Error, ErrorCategory};
//!
//! let error = Error::new(
//!     ErrorCategory::Validation,
//!     codes::DUPLICATE_KEY,
//!     "duplicate key supplied at construction",
//! );
//! assert!(error.is_validation_error());
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]

#[cfg(any(feature = "std", test))]
extern crate std;

/// Error codes for bidimap
pub mod codes;
/// Error and error handling types
pub mod errors;
/// Helper constructors for common errors
pub mod helpers;
/// Unified import surface
pub mod prelude;

pub use errors::{Error, ErrorCategory, ErrorSource};
pub use helpers::*;

/// A specialized `Result` type for bidimap operations.
///
/// This type alias uses [`Error`] as the error type and is suitable for
/// `no_std` environments.
pub type Result<T> = core::result::Result<T, Error>;
