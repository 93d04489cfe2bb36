// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Core zeroization primitives: guards, sentinels, and RAII wrappers.
//!
//! This crate is the foundation `redoubt-zero` re-exports. It has no opinion
//! on derive macros -- see `redoubt-zero-derive` for `#[derive(RedoubtZero)]`.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod assert;
pub mod collections;
mod primitives;
pub mod traits;
pub mod zeroize_on_drop_sentinel;
pub mod zeroizing_guard;

#[cfg(test)]
mod tests;

pub use assert::assert_zeroize_on_drop;
pub use traits::{
    AssertZeroizeOnDrop, FastZeroize, FastZeroizable, MutGuarded, StaticFastZeroizable,
    ZeroizationProbe, ZeroizeMetadata,
};
pub use zeroize_on_drop_sentinel::ZeroizeOnDropSentinel;
pub use zeroizing_guard::ZeroizingGuard;
