// BidiMap - bidimap-error
// Module: Error Codes
//
// Copyright (c) 2026 The BidiMap Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Error codes for bidimap

// Validation error codes (1000-1099)

/// Duplicate key supplied at construction
pub const DUPLICATE_KEY: u16 = 1000;

// Capacity error codes (1100-1199)

/// Container constructed with zero capacity
pub const ZERO_CAPACITY: u16 = 1100;
