// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! End-to-end scenarios at scaled-down garlic levels: the garlic-chain
//! law (incremental upgrade equals a direct run to the same level) and
//! the client/server split law.

use redoubt_phf::{client_hash_password, hash_password_extended, server_hash_password, update_password};

const MULTIPLIES: u8 = 2;
const PARALLELISM: u8 = 2;
const BLOCK_SIZE: u32 = 32;
const SUB_BLOCK_SIZE: u32 = 32;

#[test]
fn garlic_chain_law_holds_for_a_small_run() {
    let mut direct = [0u8; 32];
    let mut password_direct = b"password".to_vec();
    assert!(hash_password_extended(
        &mut direct,
        &mut password_direct,
        b"salt",
        &mut [],
        0,
        3,
        0,
        MULTIPLIES,
        PARALLELISM,
        BLOCK_SIZE,
        SUB_BLOCK_SIZE,
        false,
        false,
    ));

    let mut incremental = [0u8; 32];
    let mut password_incremental = b"password".to_vec();
    assert!(hash_password_extended(
        &mut incremental,
        &mut password_incremental,
        b"salt",
        &mut [],
        0,
        0,
        0,
        MULTIPLIES,
        PARALLELISM,
        BLOCK_SIZE,
        SUB_BLOCK_SIZE,
        false,
        false,
    ));

    for new_mem_cost in 1..=3u8 {
        assert!(update_password(
            &mut incremental,
            new_mem_cost - 1,
            new_mem_cost,
            0,
            MULTIPLIES,
            PARALLELISM,
            BLOCK_SIZE,
            SUB_BLOCK_SIZE,
        ));
    }

    assert_eq!(direct, incremental);
}

#[test]
fn client_server_split_law_holds() {
    let mut direct = [0u8; 32];
    let mut password_direct = b"password".to_vec();
    assert!(hash_password_extended(
        &mut direct,
        &mut password_direct,
        b"salt",
        b"data".to_vec().as_mut_slice(),
        0,
        2,
        0,
        MULTIPLIES,
        PARALLELISM,
        BLOCK_SIZE,
        SUB_BLOCK_SIZE,
        false,
        false,
    ));

    let mut split = [0u8; 32];
    let mut password_split = b"password".to_vec();
    assert!(client_hash_password(
        &mut split,
        &mut password_split,
        b"salt",
        b"data".to_vec().as_mut_slice(),
        0,
        2,
        0,
        MULTIPLIES,
        PARALLELISM,
        BLOCK_SIZE,
        SUB_BLOCK_SIZE,
        false,
        false,
    ));
    assert!(server_hash_password(&mut split));

    assert_eq!(direct, split);
}

#[test]
fn parallelism_one_and_four_disagree() {
    let mut a = [0u8; 32];
    let mut password_a = b"password".to_vec();
    assert!(hash_password_extended(
        &mut a,
        &mut password_a,
        b"salt",
        &mut [],
        0,
        1,
        0,
        MULTIPLIES,
        1,
        BLOCK_SIZE,
        SUB_BLOCK_SIZE,
        false,
        false,
    ));

    let mut b = [0u8; 32];
    let mut password_b = b"password".to_vec();
    assert!(hash_password_extended(
        &mut b,
        &mut password_b,
        b"salt",
        &mut [],
        0,
        1,
        0,
        MULTIPLIES,
        4,
        BLOCK_SIZE,
        SUB_BLOCK_SIZE,
        false,
        false,
    ));

    assert_ne!(a, b);
}
