// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HMAC-SHA256 test vectors per RFC 4231 Section 4.

use crate::hmac_sha256;

fn hex(bytes: &[u8]) -> alloc::string::String {
    use alloc::string::String;
    use core::fmt::Write;
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        write!(s, "{b:02x}").unwrap();
    }
    s
}

#[test]
fn rfc4231_test_case_1() {
    let key = [0x0bu8; 20];
    let mac = hmac_sha256(&key, b"Hi There");
    assert_eq!(
        hex(&mac),
        "b0344c61d8db38535ca8afceaf0bf12b881dc200c9833da726e9376c2e32cff7"
    );
}

#[test]
fn rfc4231_test_case_2_key_equals_data() {
    let mac = hmac_sha256(b"Jefe", b"what do ya want for nothing?");
    assert_eq!(
        hex(&mac),
        "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
    );
}

#[test]
fn key_longer_than_block_is_hashed_first() {
    // RFC 2104: keys longer than the block size are hashed down to HASH_LEN first.
    let key = [0xaau8; 131];
    let mac_long_key = hmac_sha256(&key, b"data");
    let hashed_key = crate::sha256(&key);
    let mac_hashed_key = hmac_sha256(&hashed_key, b"data");
    assert_eq!(mac_long_key, mac_hashed_key);
}
