// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Failure modes for a password-hashing invocation.
///
/// All three are terminal. This type is used internally by the parameter
/// validation, allocation, and threading layers; [`crate::api`]'s public
/// entry points collapse any `Err` here to a `false` return and leave the
/// caller's output buffer untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PhfError {
    /// A parameter bound from the data model was violated.
    #[error("invalid parameter: {0}")]
    InvalidParameter(&'static str),

    /// The aligned memory array, checkpoint table, or per-worker context
    /// table could not be allocated.
    #[error("allocation failure")]
    Allocation,

    /// A worker or pacer thread could not be spawned, or a spawned thread
    /// panicked before finishing its work.
    #[error("thread creation or execution failure")]
    Thread,
}
