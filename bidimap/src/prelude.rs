// BidiMap - bidimap
// Module: Prelude
//
// Copyright (c) 2026 The BidiMap Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Prelude module for bidimap
//!
//! Provides a unified set of imports for both std and `no_std` environments,
//! re-exporting the public container surface together with the error crate's
//! types.

pub use core::{
    cmp::{Eq, Ord, Ordering, PartialEq, PartialOrd},
    convert::{TryFrom, TryInto},
    fmt,
    fmt::{Debug, Display},
};

pub use bidimap_error::{
    codes, duplicate_key_error, zero_capacity_error, Error, ErrorCategory, ErrorSource, Result,
};

pub use crate::bimap::{FixedBiMap, Iter};
