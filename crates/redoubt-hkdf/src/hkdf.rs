// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HKDF-SHA256 key derivation per RFC 5869.

use crate::error::HkdfError;
use crate::rust::hkdf::HkdfSha256State;

/// HKDF-SHA256(salt, ikm, info) -> okm, per RFC 5869 Section 2.
pub fn hkdf(salt: &[u8], ikm: &[u8], info: &[u8], okm: &mut [u8]) -> Result<(), HkdfError> {
    // RFC 5869: okm_len must not exceed 255 * HashLen (255 * 32 = 8160 for SHA-256)
    const MAX_OUTPUT_LEN: usize = 255 * 32;
    if okm.len() > MAX_OUTPUT_LEN {
        return Err(HkdfError::OutputTooLong);
    }

    if okm.is_empty() {
        return Ok(());
    }

    let mut state = HkdfSha256State::new();
    state.derive(ikm, salt, info, okm);
    Ok(())
}
