// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! The resistant pass: cache-timing-resistant memory fill using
//! bit-reversal / sliding-power-of-two block addressing, with no
//! password-dependent reads.

use crate::codec::{bit_reverse, be32_decode_vec};
use crate::memory::AlignedMemory;
use crate::mixer::mix_block;
use crate::pacer::Pacer;
use crate::params::PhfParams;
use crate::state::derive;

/// Fills worker `p`'s first-half region: words
/// `[2*p*numblocks*blocklen, (2*p+1)*numblocks*blocklen)`.
///
/// # Safety
///
/// The caller must ensure no other thread holds a conflicting window over
/// this worker's region for the duration of the call, and that `mem` was
/// sized for at least `(2*p+2)*numblocks*blocklen` words.
pub unsafe fn run(mem: &AlignedMemory, params: &PhfParams, hash: &[u8], p: u8, numblocks: u64, pacer: &Pacer) {
    let blocklen = params.blocklen() as u64;
    let region_start = 2 * p as u64 * numblocks * blocklen;

    let mut thread_key = vec![0u8; params.block_size() as usize];
    derive(&mut thread_key, hash, &(p as u32).to_be_bytes());
    // SAFETY: forwarded from this function's own safety contract; block 0
    // of this worker's region is written once, here, before any other
    // access.
    let block0 = unsafe { mem.window_mut(region_start as usize, blocklen as usize) };
    be32_decode_vec(block0, &thread_key);
    thread_key.fill(0);

    let mut state = [1u32; 8];
    let mut mask: u64 = 1;
    let mut num_bits: u32 = 0;
    let mut to_addr = region_start + blocklen;

    for i in 1..numblocks {
        if (mask << 1) <= i {
            mask <<= 1;
            num_bits += 1;
        }
        let mut reverse_pos = bit_reverse(i as u32, num_bits) as u64;
        if reverse_pos + mask < i {
            reverse_pos += mask;
        }
        let from_addr = region_start + reverse_pos * blocklen;

        // SAFETY: `from_addr` names a strictly earlier, already-written
        // block in this same region (the sliding-power-of-two invariant
        // guarantees `reverse_pos < i`); `to_addr - blocklen` is the block
        // this loop wrote on its previous iteration (or block 0, written
        // above). Neither overlaps `to_addr`.
        unsafe {
            mix_block(
                mem,
                to_addr,
                to_addr - blocklen,
                from_addr,
                &mut state,
                params.blocklen(),
                params.blocklen(),
                7,
                params.multiplies,
                params.repetitions,
            );
        }
        pacer.fold_checkpoint(i, &mut state);
        to_addr += blocklen;
    }
}

/// Test instrumentation: re-runs the same loop as [`run`], but records the
/// region-relative `reversePos` fed to each `mix_block` call instead of
/// (only) writing memory, so the no-dependency property (the resistant
/// pass's addressing is a pure function of `(i, numblocks)`, never of
/// `hash`) can be checked against the real address-derivation code path
/// rather than a hand-copied formula.
///
/// # Safety
///
/// Same contract as [`run`].
#[cfg(test)]
pub(crate) unsafe fn run_recording(
    mem: &AlignedMemory,
    params: &PhfParams,
    hash: &[u8],
    p: u8,
    numblocks: u64,
    pacer: &Pacer,
    addresses: &mut Vec<u64>,
) {
    let blocklen = params.blocklen() as u64;
    let region_start = 2 * p as u64 * numblocks * blocklen;

    let mut thread_key = vec![0u8; params.block_size() as usize];
    derive(&mut thread_key, hash, &(p as u32).to_be_bytes());
    let block0 = unsafe { mem.window_mut(region_start as usize, blocklen as usize) };
    be32_decode_vec(block0, &thread_key);
    thread_key.fill(0);

    let mut state = [1u32; 8];
    let mut mask: u64 = 1;
    let mut num_bits: u32 = 0;
    let mut to_addr = region_start + blocklen;

    for i in 1..numblocks {
        if (mask << 1) <= i {
            mask <<= 1;
            num_bits += 1;
        }
        let mut reverse_pos = bit_reverse(i as u32, num_bits) as u64;
        if reverse_pos + mask < i {
            reverse_pos += mask;
        }
        addresses.push(reverse_pos);
        let from_addr = region_start + reverse_pos * blocklen;

        unsafe {
            mix_block(
                mem,
                to_addr,
                to_addr - blocklen,
                from_addr,
                &mut state,
                params.blocklen(),
                params.blocklen(),
                7,
                params.multiplies,
                params.repetitions,
            );
        }
        pacer.fold_checkpoint(i, &mut state);
        to_addr += blocklen;
    }
}
