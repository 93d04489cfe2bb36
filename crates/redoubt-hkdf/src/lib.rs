// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HKDF-SHA256 / HMAC-SHA256 / PBKDF2-SHA256 implementation with secure memory handling
//!
//! Implementation per RFC 5869 (HKDF), RFC 6234 (SHA-256, HMAC), and
//! RFC 8018 (PBKDF2). Zero external dependencies. All intermediate values
//! are zeroized.
//!
//! References:
//! - RFC 5869: HMAC-based Extract-and-Expand Key Derivation Function (HKDF)
//!   <https://datatracker.ietf.org/doc/html/rfc5869>
//! - RFC 6234: US Secure Hash Algorithms (SHA and SHA-based HMAC and HKDF)
//!   <https://datatracker.ietf.org/doc/html/rfc6234>
//! - RFC 8018: PKCS #5: Password-Based Cryptography Specification (PBKDF2)
//!   <https://datatracker.ietf.org/doc/html/rfc8018>

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod error;
mod hkdf;
mod pbkdf2;
mod rust;

pub use error::HkdfError;
pub use hkdf::hkdf;
pub use pbkdf2::pbkdf2_hmac_sha256;

use rust::{hmac_sha256 as backend_hmac_sha256, sha256 as backend_sha256};

/// One-shot SHA-256 over a complete message.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut out = [0u8; 32];
    backend_sha256(data, &mut out);
    out
}

/// One-shot HMAC-SHA256(key, data) per RFC 2104.
pub fn hmac_sha256(key: &[u8], data: &[u8]) -> [u8; 32] {
    let mut out = [0u8; 32];
    backend_hmac_sha256(key, data, &mut out);
    out
}
