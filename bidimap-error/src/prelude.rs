// BidiMap - bidimap-error
// Module: Error Prelude
//
// Copyright (c) 2026 The BidiMap Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Prelude module for bidimap-error
//!
//! Provides a unified set of imports for both std and `no_std` environments,
//! re-exporting the commonly used types and helper constructors.

pub use core::{
    cmp::{Eq, Ord, PartialEq, PartialOrd},
    fmt,
    fmt::{Debug, Display},
};

pub use crate::{
    codes,
    helpers::{duplicate_key_error, zero_capacity_error},
    Error, ErrorCategory, ErrorSource, Result,
};
