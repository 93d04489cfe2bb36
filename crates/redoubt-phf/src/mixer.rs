// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! The SIMD-friendly block mixer.
//!
//! One call writes `blocklen` words at `to_addr`, folding in a password-
//! independent previous block, a (possibly password-dependent) source
//! block, and a parallel scalar multiplication chain whose depth and
//! repetition count are tunable cost knobs.

use crate::memory::AlignedMemory;
use crate::state::hash_with_salt;

/// Mixes `prev_addr`'s block (already written, password-independent
/// position) and `from_addr`'s block (source, may be password-dependent)
/// into `to_addr`, `repetitions` times, updating `state` in place and
/// running a `multiplies`-deep scalar multiplication chain alongside.
///
/// `rotation` is the left-rotate amount applied to each mixed lane: the
/// parallel passes use 7, the single-threaded reference variant uses 8,
/// matching their respective original implementations.
///
/// # Safety
///
/// The caller must guarantee that `[to_addr, to_addr+blocklen)`,
/// `[from_addr, from_addr+blocklen)`, and `[prev_addr, prev_addr+blocklen)`
/// are pairwise disjoint (true by construction: `from_addr`/`prev_addr`
/// always reference strictly earlier, already-completed blocks) and that
/// no other thread is concurrently writing any of the three.
#[allow(clippy::too_many_arguments)]
pub unsafe fn mix_block(
    mem: &AlignedMemory,
    to_addr: u64,
    prev_addr: u64,
    from_addr: u64,
    state: &mut [u32; 8],
    blocklen: u32,
    sub_blocklen: u32,
    rotation: u32,
    multiplies: u8,
    repetitions: u32,
) {
    let blocklen = blocklen as usize;
    let sub_blocklen = sub_blocklen as usize;
    let num_sub_blocks = blocklen / sub_blocklen;
    let sub_block_mask = (num_sub_blocks - 1) as u32;
    let orig_state = *state;
    let mut v: u32 = 1;

    // SAFETY: disjointness of these three windows from one another, and
    // from any window concurrently live on another thread, is this
    // function's own safety contract, upheld by the resistant/unpredictable
    // pass callers.
    let from_view = unsafe { mem.window(from_addr as usize, blocklen) };
    let prev_view = unsafe { mem.window(prev_addr as usize, blocklen) };
    let dest = unsafe { mem.window_mut(to_addr as usize, blocklen) };

    for _ in 0..repetitions {
        let mut f = 0usize;
        let mut t = 0usize;
        for _ in 0..num_sub_blocks {
            let rand_val = from_view[f];
            let mut p = sub_blocklen * ((rand_val & sub_block_mask) as usize);
            for _ in 0..(sub_blocklen / 8) {
                for k in 0..multiplies as usize {
                    v = v.wrapping_mul(rand_val | 1);
                    v ^= orig_state[k];
                }
                for k in 0..8 {
                    let mixed = state[k].wrapping_add(prev_view[p]) ^ from_view[f];
                    state[k] = mixed.rotate_left(rotation);
                    dest[t] = state[k];
                    p += 1;
                    f += 1;
                    t += 1;
                }
            }
        }
    }

    let current = *state;
    hash_with_salt(state, &current, v);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::AlignedMemory;

    fn seed_block(mem: &AlignedMemory, start: usize, blocklen: usize, seed: u32) {
        let w = unsafe { mem.window_mut(start, blocklen) };
        for (i, word) in w.iter_mut().enumerate() {
            *word = seed.wrapping_add(i as u32);
        }
    }

    #[test]
    fn deterministic_given_same_inputs() {
        let blocklen = 32u32;
        let mem = AlignedMemory::new(3 * blocklen as usize).unwrap();
        seed_block(&mem, 0, blocklen as usize, 1); // prev
        seed_block(&mem, blocklen as usize, blocklen as usize, 100); // from

        let mut state_a = [1u32; 8];
        let mut state_b = [1u32; 8];
        unsafe {
            mix_block(
                &mem,
                2 * blocklen as u64,
                0,
                blocklen as u64,
                &mut state_a,
                blocklen,
                blocklen,
                7,
                3,
                1,
            );
        }
        // Re-seed prev/from (dest overlapped neither, so they're untouched,
        // but re-run into a second mem to prove pure determinism)
        let mem2 = AlignedMemory::new(3 * blocklen as usize).unwrap();
        seed_block(&mem2, 0, blocklen as usize, 1);
        seed_block(&mem2, blocklen as usize, blocklen as usize, 100);
        unsafe {
            mix_block(
                &mem2,
                2 * blocklen as u64,
                0,
                blocklen as u64,
                &mut state_b,
                blocklen,
                blocklen,
                7,
                3,
                1,
            );
        }

        assert_eq!(state_a, state_b);
        let dest_a = unsafe { mem.window(2 * blocklen as usize, blocklen as usize) };
        let dest_b = unsafe { mem2.window(2 * blocklen as usize, blocklen as usize) };
        assert_eq!(dest_a, dest_b);
    }

    #[test]
    fn sub_blocklen_affects_output() {
        let blocklen = 64u32;
        let mem = AlignedMemory::new(3 * blocklen as usize).unwrap();
        seed_block(&mem, 0, blocklen as usize, 7);
        seed_block(&mem, blocklen as usize, blocklen as usize, 900);

        let mut state_full = [2u32; 8];
        unsafe {
            mix_block(
                &mem,
                2 * blocklen as u64,
                0,
                blocklen as u64,
                &mut state_full,
                blocklen,
                blocklen,
                7,
                2,
                1,
            );
        }

        let mem2 = AlignedMemory::new(3 * blocklen as usize).unwrap();
        seed_block(&mem2, 0, blocklen as usize, 7);
        seed_block(&mem2, blocklen as usize, blocklen as usize, 900);
        let mut state_sub = [2u32; 8];
        unsafe {
            mix_block(
                &mem2,
                2 * blocklen as u64,
                0,
                blocklen as u64,
                &mut state_sub,
                blocklen,
                32,
                7,
                2,
                1,
            );
        }

        assert_ne!(state_full, state_sub);
    }

    #[test]
    fn rotation_amount_affects_output() {
        let blocklen = 32u32;

        let run_with = |rotation: u32| {
            let mem = AlignedMemory::new(3 * blocklen as usize).unwrap();
            seed_block(&mem, 0, blocklen as usize, 1);
            seed_block(&mem, blocklen as usize, blocklen as usize, 100);
            let mut state = [1u32; 8];
            unsafe {
                mix_block(
                    &mem,
                    2 * blocklen as u64,
                    0,
                    blocklen as u64,
                    &mut state,
                    blocklen,
                    blocklen,
                    rotation,
                    3,
                    1,
                );
            }
            state
        };

        assert_ne!(run_with(7), run_with(8));
    }
}
