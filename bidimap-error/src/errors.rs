// BidiMap - bidimap-error
// Module: Error Types
//
// Copyright (c) 2026 The BidiMap Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Unified error types for the bidimap crates.
//!
//! Provides categorized errors with numeric codes and static messages. The
//! type is `Copy` and allocation-free so it can be created and propagated in
//! `no_std` builds.

use core::fmt;

/// `Error` categories for bidimap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorCategory {
    /// Validation errors (construction contract violations)
    Validation = 1,
    /// Capacity errors (size constraints)
    Capacity = 2,
}

/// Base trait for all error types
pub trait ErrorSource: fmt::Debug + Send + Sync {
    /// Get the error code
    fn code(&self) -> u16;

    /// Get the error message
    fn message(&self) -> &'static str;

    /// Get the error category
    fn category(&self) -> ErrorCategory;
}

/// BidiMap `Error` type
///
/// The main error type for the bidimap containers. It provides categorized
/// errors with error codes and static messages.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Error {
    /// `Error` category
    pub category: ErrorCategory,
    /// `Error` code
    pub code: u16,
    /// `Error` message
    pub message: &'static str,
}

impl Error {
    /// Create a new error.
    #[must_use]
    pub const fn new(category: ErrorCategory, code: u16, message: &'static str) -> Self {
        Self {
            category,
            code,
            message,
        }
    }

    /// Get the error category
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        self.category
    }

    /// Get the error code
    #[must_use]
    pub const fn code(&self) -> u16 {
        self.code
    }

    /// Get the error message
    #[must_use]
    pub const fn message(&self) -> &'static str {
        self.message
    }

    /// Check if this is a validation error
    #[must_use]
    pub fn is_validation_error(&self) -> bool {
        matches!(self.category, ErrorCategory::Validation)
    }

    /// Check if this is a capacity error
    #[must_use]
    pub fn is_capacity_error(&self) -> bool {
        matches!(self.category, ErrorCategory::Capacity)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:?}][E{:04X}] {}",
            self.category, self.code, self.message
        )
    }
}

impl ErrorSource for Error {
    fn code(&self) -> u16 {
        self.code
    }

    fn message(&self) -> &'static str {
        self.message
    }

    fn category(&self) -> ErrorCategory {
        self.category
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
