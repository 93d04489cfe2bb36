// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! The reference (non-parallel) variant: a single-threaded implementation
//! path that inlines 4 resistant slices followed by 4 unpredictable
//! slices, folding each slice's tail into a running 256-bit state and
//! finishing with one PBKDF2 application.
//!
//! This is a **semantically distinct function** from [`crate::api`]'s
//! parallel entry points — it produces different output for the same
//! inputs, since it fills a single combined region per worker slice by
//! slice rather than running the resistant and unpredictable passes as
//! two separate full region fills. It is not reachable from the primary
//! API; it exists as an alternative implementation for callers who have
//! decided the single-threaded function is their deployment's canonical
//! one.
//!
//! Unlike the original reference implementation this is grounded on, the
//! unpredictable slice below never lets its cubic-distance computation
//! address before the start of the worker's own region: it wraps modulo
//! the worker's block count instead of relying on unsigned-integer
//! underflow to land in bounds.

use crate::api::initial_hash;
use crate::codec::bit_reverse;
use crate::error::PhfError;
use crate::memory::AlignedMemory;
use crate::mixer::mix_block;
use crate::params;
use crate::state::{self, derive};

const SLICES_PER_PASS: u64 = 4;

/// Runs the single-threaded reference variant end to end, returning the
/// `hash_size`-byte digest.
#[allow(clippy::too_many_arguments)]
pub fn hash_password_reference(
    hash_size: u32,
    password: &mut [u8],
    salt: &[u8],
    data: &mut [u8],
    mem_cost: u8,
    time_cost: u8,
    parallelism: u8,
    block_size: u32,
    sub_block_size: u32,
) -> Result<Vec<u8>, PhfError> {
    if hash_size == 0 || hash_size % 4 != 0 || hash_size > 8160.min(block_size) {
        return Err(PhfError::InvalidParameter(
            "hash_size must be a nonzero multiple of 4 not exceeding min(8160, block_size)",
        ));
    }
    if parallelism == 0 {
        return Err(PhfError::InvalidParameter("parallelism must be at least 1"));
    }
    if !block_size.is_power_of_two() || !sub_block_size.is_power_of_two() || sub_block_size > block_size
    {
        return Err(PhfError::InvalidParameter(
            "block_size/sub_block_size must be powers of two with sub_block_size <= block_size",
        ));
    }

    let blocklen = block_size / 4;
    let sub_blocklen = sub_block_size / 4;
    let (multiplies, repetitions) = params::expand_time_cost(time_cost);

    let blocks_per_thread = 8 * ((1u64 << mem_cost) / (8 * parallelism as u64)).max(1);
    let mem = AlignedMemory::new((blocklen as u64 * blocks_per_thread * parallelism as u64) as usize)?;

    let mut hash = vec![0u8; hash_size as usize];
    initial_hash(password, salt, data, &mut hash);
    redoubt_util::fast_zeroize_slice(password);
    redoubt_util::fast_zeroize_slice(data);

    let mut hash256 = [0u32; 8];
    state::project_to_state(&mut hash256, &hash);
    redoubt_util::fast_zeroize_slice(&mut hash);

    let mut states: Vec<[u32; 8]> = (0..parallelism)
        .map(|p| {
            let mut s = [0u32; 8];
            state::hash_with_salt(&mut s, &hash256, p as u32);
            s
        })
        .collect();

    for p in 0..parallelism as usize {
        init_block0(&mem, p as u64 * blocks_per_thread * blocklen as u64, blocklen, &states[p]);
    }

    let half = blocks_per_thread / 2;
    let slice_len = half / SLICES_PER_PASS;

    for slice in 0..SLICES_PER_PASS {
        let range_start = 1.max(slice * slice_len);
        let range_end = (slice + 1) * slice_len;
        for p in 0..parallelism as usize {
            let region_start = p as u64 * blocks_per_thread * blocklen as u64;
            resistant_slice(
                &mem,
                region_start,
                blocklen,
                &mut states[p],
                range_start,
                range_end,
                multiplies,
                repetitions,
            );
            fold_slice_tail(&mut hash256, &mem, region_start + range_end * blocklen as u64 - 8);
        }
    }

    for slice in 0..SLICES_PER_PASS {
        let range_start = half + slice * slice_len;
        let range_end = half + (slice + 1) * slice_len;
        for p in 0..parallelism as usize {
            let region_start = p as u64 * blocks_per_thread * blocklen as u64;
            unpredictable_slice(
                &mem,
                region_start,
                blocklen,
                sub_blocklen,
                blocks_per_thread,
                &mut states[p],
                range_start,
                range_end,
                multiplies,
                repetitions,
            );
            fold_slice_tail(&mut hash256, &mem, region_start + range_end * blocklen as u64 - 8);
        }
    }

    let mut buf = [0u8; 32];
    crate::codec::be32_encode_vec(&mut buf, &hash256);
    let mut out = vec![0u8; hash_size as usize];
    derive(&mut out, &buf, &[]);
    Ok(out)
}

fn init_block0(mem: &AlignedMemory, region_start: u64, blocklen: u32, state: &[u32; 8]) {
    let chunks = blocklen / 8;
    for i in 0..chunks {
        let mut out = [0u32; 8];
        state::hash_with_salt(&mut out, state, i);
        // SAFETY: `region_start + i*8 .. +8` is within this worker's own,
        // exclusively-owned region, written once per `i`.
        let w = unsafe { mem.window_mut((region_start + i as u64 * 8) as usize, 8) };
        w.copy_from_slice(&out);
    }
}

#[allow(clippy::too_many_arguments)]
fn resistant_slice(
    mem: &AlignedMemory,
    region_start: u64,
    blocklen: u32,
    state: &mut [u32; 8],
    range_start: u64,
    range_end: u64,
    multiplies: u8,
    repetitions: u32,
) {
    for i in range_start..range_end {
        let num_bits = i.ilog2();
        let mask = 1u64 << num_bits;
        let mut reverse_pos = bit_reverse(i as u32, num_bits) as u64;
        if reverse_pos + mask < i {
            reverse_pos += mask;
        }
        let from_addr = region_start + reverse_pos * blocklen as u64;
        let to_addr = region_start + i * blocklen as u64;

        // SAFETY: `from_addr` names a strictly earlier block in this same,
        // exclusively-owned region; `to_addr - blocklen` is either the
        // prior iteration's block or (for `i == 1`) block 0, initialized
        // above.
        unsafe {
            mix_block(
                mem,
                to_addr,
                to_addr - blocklen as u64,
                from_addr,
                state,
                blocklen,
                blocklen,
                8,
                multiplies,
                repetitions,
            );
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn unpredictable_slice(
    mem: &AlignedMemory,
    region_start: u64,
    blocklen: u32,
    sub_blocklen: u32,
    blocks_per_thread: u64,
    state: &mut [u32; 8],
    range_start: u64,
    range_end: u64,
    multiplies: u8,
    repetitions: u32,
) {
    for i in range_start..range_end {
        let v = state[0] as u64;
        let v2 = (v * v) >> 32;
        let v3 = (v * v2) >> 32;
        let distance = (((i + blocks_per_thread - 1) as u128 * v3 as u128) >> 32) as u64;

        let from_block = if distance < i {
            i - 1 - distance
        } else {
            (blocks_per_thread + i - 1 - (distance % blocks_per_thread)) % blocks_per_thread
        };
        let from_addr = region_start + from_block * blocklen as u64;
        let to_addr = region_start + i * blocklen as u64;

        // SAFETY: `from_block` is always in `[0, blocks_per_thread)`, the
        // range of blocks already written earlier in this same,
        // exclusively-owned region; `to_addr - blocklen` is this slice's
        // (or the resistant pass's) immediately preceding block.
        unsafe {
            mix_block(
                mem,
                to_addr,
                to_addr - blocklen as u64,
                from_addr,
                state,
                blocklen,
                sub_blocklen,
                8,
                multiplies,
                repetitions,
            );
        }
    }
}

fn fold_slice_tail(hash256: &mut [u32; 8], mem: &AlignedMemory, tail_start: u64) {
    // SAFETY: called strictly after the slice that wrote this tail has
    // returned; no other window is live over it.
    let tail = unsafe { mem.window(tail_start as usize, 8) };
    for k in 0..8 {
        hash256[k] = hash256[k].wrapping_add(tail[k]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn produces_the_requested_output_size_and_is_deterministic() {
        let mut password_a = b"password".to_vec();
        let mut password_b = b"password".to_vec();
        let a = hash_password_reference(32, &mut password_a, b"salt", &mut [], 6, 0, 1, 32, 32).unwrap();
        let b = hash_password_reference(32, &mut password_b, b"salt", &mut [], 6, 0, 1, 32, 32).unwrap();
        assert_eq!(a.len(), 32);
        assert_eq!(a, b);
    }

    #[test]
    fn is_sensitive_to_the_password() {
        let mut password_a = b"password".to_vec();
        let mut password_b = b"passworD".to_vec();
        let a = hash_password_reference(32, &mut password_a, b"salt", &mut [], 6, 0, 1, 32, 32).unwrap();
        let b = hash_password_reference(32, &mut password_b, b"salt", &mut [], 6, 0, 1, 32, 32).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn clears_password_and_data_buffers() {
        let mut password = b"password".to_vec();
        let mut data = b"associated".to_vec();
        hash_password_reference(32, &mut password, b"salt", &mut data, 6, 0, 1, 32, 32).unwrap();
        assert!(password.iter().all(|&b| b == 0));
        assert!(data.iter().all(|&b| b == 0));
    }

    #[test]
    fn rejects_hash_size_not_a_multiple_of_four() {
        let mut password = b"password".to_vec();
        assert!(hash_password_reference(30, &mut password, b"salt", &mut [], 6, 0, 1, 32, 32).is_err());
    }

    #[test]
    fn rejects_zero_parallelism() {
        let mut password = b"password".to_vec();
        assert!(hash_password_reference(32, &mut password, b"salt", &mut [], 6, 0, 0, 32, 32).is_err());
    }

    #[test]
    fn differs_from_the_parallel_variant() {
        let mut password_ref = b"password".to_vec();
        let mut password_ext = b"password".to_vec();
        let reference = hash_password_reference(32, &mut password_ref, b"salt", &mut [], 6, 0, 1, 32, 32).unwrap();

        let mut extended = vec![0u8; 32];
        assert!(crate::api::hash_password_extended(
            &mut extended,
            &mut password_ext,
            b"salt",
            &mut [],
            6,
            6,
            0,
            3,
            1,
            32,
            32,
            false,
            false,
        ));

        assert_ne!(reference, extended);
    }
}
