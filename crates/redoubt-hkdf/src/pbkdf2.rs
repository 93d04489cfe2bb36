// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! PBKDF2-HMAC-SHA256 implementation per RFC 8018 Section 5.2
//!
//! Built on [`crate::hmac_sha256`], so it works unchanged across the
//! assembly-backed and pure-Rust SHA-256 backends.

use alloc::vec::Vec;
use redoubt_zero::FastZeroizable;

const HASH_LEN: usize = 32;

/// Derive `out.len()` bytes via PBKDF2-HMAC-SHA256(password, salt, iterations).
///
/// `iterations == 0` is treated as `1` (a single HMAC application), which lets
/// callers use PBKDF2 purely as a salted hash rather than a stretching
/// function -- the role it plays when deriving an initial state ahead of a
/// separately memory-hard KDF.
pub fn pbkdf2_hmac_sha256(password: &[u8], salt: &[u8], iterations: u32, out: &mut [u8]) {
    let iterations = iterations.max(1);
    let n = out.len().div_ceil(HASH_LEN);
    let mut offset = 0;
    let mut salt_block: Vec<u8> = Vec::with_capacity(salt.len() + 4);

    for block_index in 1..=n as u32 {
        // U_1 = HMAC(password, salt || INT(block_index))
        salt_block.clear();
        salt_block.extend_from_slice(salt);
        salt_block.extend_from_slice(&block_index.to_be_bytes());

        let mut u_prev = crate::hmac_sha256(password, &salt_block);
        let mut t = u_prev;

        for _ in 1..iterations {
            let u_curr = crate::hmac_sha256(password, &u_prev);
            for i in 0..HASH_LEN {
                t[i] ^= u_curr[i];
            }
            u_prev = u_curr;
        }

        let copy_len = core::cmp::min(HASH_LEN, out.len() - offset);
        out[offset..offset + copy_len].copy_from_slice(&t[..copy_len]);
        offset += copy_len;

        t.fast_zeroize();
        u_prev.fast_zeroize();
    }

    salt_block.fast_zeroize();
}
