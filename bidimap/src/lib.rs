//! Fixed-capacity immutable bi-directional map.
//!
//! This crate provides [`FixedBiMap`], a fixed-capacity associative container
//! built for small, statically-known key/value sets (lookup tables built once
//! at startup). The container is sorted by key at construction, validated for
//! key uniqueness, and fully immutable afterwards. It supports two
//! configurations:
//! - `std`: Full standard library support
//! - Default: Pure `no_std` without allocation
//!
//! # Lookup Characteristics
//!
//! - Forward lookup (key → value): exponential probe plus bounded binary
//!   search, O(log i) where i is the key's rank in sorted order.
//! - Reverse lookup (value → key): linear scan, O(n), resolving ties by
//!   original construction order.
//!
//! # Feature Flags
//!
//! - `std`: Enables standard library support
//! - `kani`: Enables formal verification harnesses

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

// BidiMap - bidimap
//
// Copyright (c) 2026 The BidiMap Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

extern crate core;

#[cfg(any(feature = "std", test))]
extern crate std;

/// Fixed-capacity bi-directional map
pub mod bimap;
/// Prelude module for consistent imports across std and no_std environments
pub mod prelude;

pub use bimap::FixedBiMap;
// Re-export error related types for convenience
pub use bidimap_error::{codes, Error, ErrorCategory, Result};
