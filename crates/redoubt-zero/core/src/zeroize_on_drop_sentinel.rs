// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Shared marker verifying that a value's `zeroize()` path actually ran.

use alloc::sync::Arc;
use core::sync::atomic::{AtomicBool, Ordering};

use super::traits::{FastZeroizable, ZeroizationProbe};

/// Shared "was this zeroized" flag, clonable and independent of the struct it lives in.
///
/// `#[derive(RedoubtZero)]` places one of these behind an `__sentinel` field. The
/// derive's generated `fast_zeroize()` marks it once all other fields are wiped;
/// tests clone the sentinel beforehand and check it after the value is dropped.
///
/// Clones share state via `Arc<AtomicBool>` -- zeroizing any clone marks them all.
/// The sentinel itself is never zeroized by its own `Drop`; only an explicit
/// `fast_zeroize()` call flips the flag, so an un-zeroized struct stays caught.
#[derive(Clone)]
pub struct ZeroizeOnDropSentinel {
    zeroized: Arc<AtomicBool>,
}

impl Default for ZeroizeOnDropSentinel {
    fn default() -> Self {
        Self {
            zeroized: Arc::new(AtomicBool::new(false)),
        }
    }
}

impl ZeroizeOnDropSentinel {
    /// Resets the sentinel (and all its clones) back to "not zeroized".
    pub fn reset(&mut self) {
        self.zeroized.store(false, Ordering::SeqCst);
    }
}

impl FastZeroizable for ZeroizeOnDropSentinel {
    fn fast_zeroize(&mut self) {
        self.zeroized.store(true, Ordering::SeqCst);
    }
}

impl ZeroizationProbe for ZeroizeOnDropSentinel {
    fn is_zeroized(&self) -> bool {
        self.zeroized.load(Ordering::SeqCst)
    }
}

impl PartialEq for ZeroizeOnDropSentinel {
    fn eq(&self, other: &Self) -> bool {
        self.is_zeroized() == other.is_zeroized()
    }
}

impl Eq for ZeroizeOnDropSentinel {}
