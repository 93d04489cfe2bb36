// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Public entry points: fixed-default, full, and extended password
//! hashing, incremental cost upgrade, the client/server split, and the
//! competition-standard `PHS` entry point.
//!
//! Every function here returns a plain `bool`: `true` on success, `false`
//! on allocation failure, thread-creation failure, or a parameter out of
//! range, leaving `hash` untouched. Internally, [`hash_password_extended_inner`]
//! and the modules it calls use `Result` the way the rest of this crate
//! does; this is the one place that error type is collapsed to the
//! boolean shape callers see.

use crate::error::PhfError;
use crate::garlic;
use crate::params::{self, PhfParams};
use crate::state::derive;

/// Derives the initial `hash` from `password`, `salt`, and optional
/// associated `data`: a single PBKDF2 application over
/// `password‖passwordSize‖data‖dataSize`, salted with `salt‖saltSize`.
pub(crate) fn initial_hash(password: &[u8], salt: &[u8], data: &[u8], out: &mut [u8]) {
    let mut input = Vec::with_capacity(password.len() + data.len() + 8);
    input.extend_from_slice(password);
    input.extend_from_slice(&(password.len() as u32).to_be_bytes());
    input.extend_from_slice(data);
    input.extend_from_slice(&(data.len() as u32).to_be_bytes());

    let mut salt_buf = Vec::with_capacity(salt.len() + 4);
    salt_buf.extend_from_slice(salt);
    salt_buf.extend_from_slice(&(salt.len() as u32).to_be_bytes());

    derive(out, &input, &salt_buf);
    redoubt_util::fast_zeroize_slice(&mut input);
    redoubt_util::fast_zeroize_slice(&mut salt_buf);
}

fn maybe_clear(buf: &mut [u8], clear: bool) {
    if clear {
        redoubt_util::fast_zeroize_slice(buf);
    }
}

/// Fixed 32-byte output, defaults for everything but `memCost`.
pub fn hash_password(
    hash: &mut [u8; 32],
    password: &mut [u8],
    salt: &[u8],
    mem_cost: u8,
    clear_password: bool,
) -> bool {
    hash_password_full(
        hash,
        password,
        salt,
        mem_cost,
        params::DEFAULT_TIME_COST,
        params::DEFAULT_PARALLELISM,
        clear_password,
    )
}

/// Caller-chosen output size, memory/time cost, and parallelism; block and
/// sub-block sizes default.
pub fn hash_password_full(
    hash: &mut [u8],
    password: &mut [u8],
    salt: &[u8],
    mem_cost: u8,
    time_cost: u8,
    parallelism: u8,
    clear_password: bool,
) -> bool {
    hash_password_extended_inner(
        hash,
        password,
        salt,
        &mut [],
        mem_cost,
        mem_cost,
        time_cost,
        None,
        parallelism,
        params::DEFAULT_BLOCK_SIZE,
        params::DEFAULT_SUB_BLOCK_SIZE,
        clear_password,
        false,
        false,
    )
    .is_ok()
}

/// Every axis exposed independently. `multiplies` is taken directly and
/// only the repetition count is derived from `time_cost`.
#[allow(clippy::too_many_arguments)]
pub fn hash_password_extended(
    hash: &mut [u8],
    password: &mut [u8],
    salt: &[u8],
    data: &mut [u8],
    start_mem_cost: u8,
    stop_mem_cost: u8,
    time_cost: u8,
    multiplies: u8,
    parallelism: u8,
    block_size: u32,
    sub_block_size: u32,
    clear_password: bool,
    clear_data: bool,
) -> bool {
    hash_password_extended_inner(
        hash,
        password,
        salt,
        data,
        start_mem_cost,
        stop_mem_cost,
        time_cost,
        Some(multiplies),
        parallelism,
        block_size,
        sub_block_size,
        clear_password,
        clear_data,
        false,
    )
    .is_ok()
}

/// As [`hash_password_extended`], but skips the final `H` application so a
/// server can finish the work.
#[allow(clippy::too_many_arguments)]
pub fn client_hash_password(
    hash: &mut [u8],
    password: &mut [u8],
    salt: &[u8],
    data: &mut [u8],
    start_mem_cost: u8,
    stop_mem_cost: u8,
    time_cost: u8,
    multiplies: u8,
    parallelism: u8,
    block_size: u32,
    sub_block_size: u32,
    clear_password: bool,
    clear_data: bool,
) -> bool {
    hash_password_extended_inner(
        hash,
        password,
        salt,
        data,
        start_mem_cost,
        stop_mem_cost,
        time_cost,
        Some(multiplies),
        parallelism,
        block_size,
        sub_block_size,
        clear_password,
        clear_data,
        true,
    )
    .is_ok()
}

/// Finishes a client-relieved hash with the single `H` application the
/// client skipped.
pub fn server_hash_password(hash: &mut [u8]) -> bool {
    let input = hash.to_vec();
    derive(hash, &input, &[]);
    true
}

#[allow(clippy::too_many_arguments)]
fn hash_password_extended_inner(
    hash: &mut [u8],
    password: &mut [u8],
    salt: &[u8],
    data: &mut [u8],
    start_mem_cost: u8,
    stop_mem_cost: u8,
    time_cost: u8,
    multiplies: Option<u8>,
    parallelism: u8,
    block_size: u32,
    sub_block_size: u32,
    clear_password: bool,
    clear_data: bool,
    skip_last_hash: bool,
) -> Result<(), PhfError> {
    let params = match multiplies {
        Some(multiplies) => {
            let (_, repetitions) = params::expand_time_cost(time_cost);
            PhfParams::extended(
                hash.len() as u32,
                start_mem_cost,
                stop_mem_cost,
                multiplies,
                repetitions,
                parallelism,
                block_size,
                sub_block_size,
            )?
        }
        None => PhfParams::from_time_cost(
            hash.len() as u32,
            start_mem_cost,
            stop_mem_cost,
            time_cost,
            parallelism,
            block_size,
            sub_block_size,
        )?,
    };

    initial_hash(password, salt, data, hash);
    maybe_clear(password, clear_password);
    maybe_clear(data, clear_data);

    garlic::run(&params, hash, skip_last_hash)
}

/// Incremental cost upgrade: continues the garlic chain from
/// `old_mem_cost + 1` to `new_mem_cost`, reusing `hash` as input. No
/// password or salt is needed.
#[allow(clippy::too_many_arguments)]
pub fn update_password(
    hash: &mut [u8],
    old_mem_cost: u8,
    new_mem_cost: u8,
    time_cost: u8,
    multiplies: u8,
    parallelism: u8,
    block_size: u32,
    sub_block_size: u32,
) -> bool {
    update_password_inner(
        hash,
        old_mem_cost,
        new_mem_cost,
        time_cost,
        multiplies,
        parallelism,
        block_size,
        sub_block_size,
    )
    .is_ok()
}

#[allow(clippy::too_many_arguments)]
fn update_password_inner(
    hash: &mut [u8],
    old_mem_cost: u8,
    new_mem_cost: u8,
    time_cost: u8,
    multiplies: u8,
    parallelism: u8,
    block_size: u32,
    sub_block_size: u32,
) -> Result<(), PhfError> {
    let (_, repetitions) = params::expand_time_cost(time_cost);
    let params = PhfParams::extended(
        hash.len() as u32,
        old_mem_cost
            .checked_add(1)
            .ok_or(PhfError::InvalidParameter("old_mem_cost would overflow"))?,
        new_mem_cost,
        multiplies,
        repetitions,
        parallelism,
        block_size,
        sub_block_size,
    )?;
    garlic::run(&params, hash, false)
}

/// Competition-standard `PHS` entry point: `t_cost`/`m_cost` map directly
/// onto this crate's `time_cost`/`mem_cost` axes, with default
/// parallelism, block, and sub-block sizes, and a nonzero default
/// multiplication depth for a sane out-of-the-box security margin.
///
/// Returns `0` on success and nonzero on failure, matching the PHC
/// reference `PHS` signature's `int` return rather than this crate's
/// otherwise-`bool` convention.
pub fn phs(out: &mut [u8], input: &mut [u8], salt: &[u8], t_cost: u8, m_cost: u8) -> i32 {
    let ok = hash_password_extended(
        out,
        input,
        salt,
        &mut [],
        m_cost,
        m_cost,
        t_cost,
        params::DEFAULT_MULTIPLIES,
        params::DEFAULT_PARALLELISM,
        params::DEFAULT_BLOCK_SIZE,
        params::DEFAULT_SUB_BLOCK_SIZE,
        true,
        false,
    );
    if ok {
        0
    } else {
        1
    }
}
