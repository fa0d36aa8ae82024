// BidiMap - bidimap-error
// Module: Error Helpers
//
// Copyright (c) 2026 The BidiMap Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Helper functions for common error patterns.

use crate::{codes, Error, ErrorCategory};

/// Create a duplicate key construction error
#[must_use]
pub const fn duplicate_key_error(message: &'static str) -> Error {
    Error::new(ErrorCategory::Validation, codes::DUPLICATE_KEY, message)
}

/// Create a zero capacity construction error
#[must_use]
pub const fn zero_capacity_error(message: &'static str) -> Error {
    Error::new(ErrorCategory::Capacity, codes::ZERO_CAPACITY, message)
}
