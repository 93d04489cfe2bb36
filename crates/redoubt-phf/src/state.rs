// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! State primitives: deriving new 8-word states from old ones via the
//! hash collaborator, and zeroizing scratch buffers when done with them.
//!
//! The hash collaborator `H(out, outlen, in, inlen, salt, saltlen)` is a
//! single-iteration PBKDF2-HMAC-SHA256 application (RFC 8018), which is
//! exactly `redoubt_hkdf::pbkdf2_hmac_sha256(input, salt, 1, out)`.

use crate::codec::{be32_decode_vec, be32_encode_vec};

/// Invokes the hash collaborator `H(out, out.len(), input, input.len(),
/// salt, salt.len())`. This is the one place `redoubt-phf` touches the
/// hash collaborator directly; everything else in the crate goes through
/// [`hash_with_salt`] or [`project_to_state`].
pub fn derive(out: &mut [u8], input: &[u8], salt: &[u8]) {
    redoubt_hkdf::pbkdf2_hmac_sha256(input, salt, 1, out);
}

/// Derives a new 8-word state from `input`, tweaked by a 32-bit `salt`.
/// Used to fold a value into the running state and to seed per-worker
/// state at the start of a pass.
pub fn hash_with_salt(out: &mut [u32; 8], input: &[u32; 8], salt: u32) {
    let mut in_bytes = [0u8; 32];
    be32_encode_vec(&mut in_bytes, input);
    let salt_bytes = salt.to_be_bytes();

    let mut out_bytes = [0u8; 32];
    derive(&mut out_bytes, &in_bytes, &salt_bytes);
    be32_decode_vec(out, &out_bytes);

    in_bytes.fill(0);
}

/// Projects an arbitrary-length byte string (the running `hash` buffer, or
/// a 32-byte state) down to a canonical 8-word state via an unsalted
/// application of the hash collaborator. Used both to seed per-worker
/// state from the garlic-level `hash` and by the pacer to fold its
/// multiplication-chain checkpoint.
pub fn project_to_state(out: &mut [u32; 8], input: &[u8]) {
    let mut out_bytes = [0u8; 32];
    derive(&mut out_bytes, input, &[]);
    be32_decode_vec(out, &out_bytes);
}

/// Derives an 8-word state from an arbitrary-length `input` tweaked by
/// `salt` (used to seed a worker's state from `H(key, 32, hash, hashSize,
/// be32(parallelism), 4)`). Unlike [`hash_with_salt`], `input` is a byte
/// string rather than a canonical state, and `salt` is already-encoded
/// bytes rather than a 32-bit scalar.
pub fn derive_state(out: &mut [u32; 8], input: &[u8], salt: &[u8]) {
    let mut out_bytes = [0u8; 32];
    derive(&mut out_bytes, input, salt);
    be32_decode_vec(out, &out_bytes);
    out_bytes.fill(0);
}

/// Re-derives `state` from itself with no salt.
pub fn hash_state(state: &mut [u32; 8]) {
    let mut bytes = [0u8; 32];
    be32_encode_vec(&mut bytes, state);
    project_to_state(state, &bytes);
    bytes.fill(0);
}

/// Zeroizes a buffer of sensitive data.
pub fn secure_zero(buf: &mut [u32]) {
    redoubt_util::fast_zeroize_slice(buf);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_with_salt_is_deterministic_and_salt_dependent() {
        let input = [1u32, 2, 3, 4, 5, 6, 7, 8];
        let mut a = [0u32; 8];
        let mut b = [0u32; 8];
        hash_with_salt(&mut a, &input, 42);
        hash_with_salt(&mut b, &input, 42);
        assert_eq!(a, b);

        let mut c = [0u32; 8];
        hash_with_salt(&mut c, &input, 43);
        assert_ne!(a, c);
    }

    #[test]
    fn hash_state_changes_the_state() {
        let mut state = [1u32; 8];
        let before = state;
        hash_state(&mut state);
        assert_ne!(state, before);
    }
}
