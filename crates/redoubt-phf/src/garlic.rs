// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! The garlic controller: iterates the two memory passes over doubling
//! garlic levels from `start_mem_cost` to `stop_mem_cost`, combining
//! worker results into the running `hash` with the hash collaborator
//! between levels.

use crate::codec::be32_encode_vec;
use crate::error::PhfError;
use crate::memory::AlignedMemory;
use crate::pacer::Pacer;
use crate::params::PhfParams;
use crate::pass::{resistant, unpredictable};
use crate::state::derive;

/// Runs the full garlic chain in place over `hash` (already the
/// length-`hash_size` initial derivation).
///
/// `skip_last_hash` implements the client/server split: when `true`, the
/// final `H` application at the top garlic level is omitted, leaving the
/// result for [`crate::api::server_hash_password`] to finish.
pub fn run(params: &PhfParams, hash: &mut [u8], skip_last_hash: bool) -> Result<(), PhfError> {
    let mem = AlignedMemory::new(params.total_memlen() as usize)?;

    for g in params.start_mem_cost()..=params.stop_mem_cost() {
        let numblocks = params.numblocks_at(g);
        run_level(params, &mem, hash, numblocks)?;
        combine(&mem, hash, params, numblocks);

        if g < params.stop_mem_cost() || !skip_last_hash {
            fold_garlic_level(hash, g);
        }
    }

    Ok(())
}

fn run_level(
    params: &PhfParams,
    mem: &AlignedMemory,
    hash: &[u8],
    numblocks: u64,
) -> Result<(), PhfError> {
    let total_checkpoints = 2 * numblocks;
    let pacer = Pacer::new(total_checkpoints, params.multiplies_per_block(), params.repetitions);

    std::thread::scope(|scope| -> Result<(), PhfError> {
        let pacer_ref = &pacer;
        let pacer_handle = std::thread::Builder::new()
            .spawn_scoped(scope, move || pacer_ref.run(hash, params.parallelism()))
            .map_err(|_| PhfError::Thread)?;

        let mut resistant_handles = Vec::with_capacity(params.parallelism() as usize);
        for p in 0..params.parallelism() {
            let handle = std::thread::Builder::new()
                .spawn_scoped(scope, move || {
                    // SAFETY: each worker `p` owns a disjoint first-half
                    // region; no other thread touches it.
                    unsafe { resistant::run(mem, params, hash, p, numblocks, pacer_ref) }
                })
                .map_err(|_| PhfError::Thread)?;
            resistant_handles.push(handle);
        }
        for handle in resistant_handles {
            handle.join().map_err(|_| PhfError::Thread)?;
        }

        let mut unpredictable_handles = Vec::with_capacity(params.parallelism() as usize);
        for p in 0..params.parallelism() {
            let handle = std::thread::Builder::new()
                .spawn_scoped(scope, move || {
                    // SAFETY: all resistant passes have joined above, so every
                    // worker's first-half region is fully written; worker `p`
                    // owns a disjoint second-half region.
                    unsafe { unpredictable::run(mem, params, p, numblocks, pacer_ref) }
                })
                .map_err(|_| PhfError::Thread)?;
            unpredictable_handles.push(handle);
        }
        for handle in unpredictable_handles {
            handle.join().map_err(|_| PhfError::Thread)?;
        }

        pacer_handle.join().map_err(|_| PhfError::Thread)?;
        Ok(())
    })
}

/// Combine step: fold each worker's region tail into `hash`, byte-wise
/// mod 256, then re-hash.
fn combine(mem: &AlignedMemory, hash: &mut [u8], params: &PhfParams, numblocks: u64) {
    let blocklen = params.blocklen() as u64;
    let tail_words = hash.len() / 4;
    let mut tail_bytes = vec![0u8; hash.len()];

    for p in 0..params.parallelism() as u64 {
        let pos = 2 * (p + 1) * numblocks * blocklen - tail_words as u64;
        // SAFETY: called after `run_level`'s scope has joined every
        // worker; no thread holds a live window into `mem`.
        let window = unsafe { mem.window(pos as usize, tail_words) };
        be32_encode_vec(&mut tail_bytes, window);
        for (h, d) in hash.iter_mut().zip(tail_bytes.iter()) {
            *h = h.wrapping_add(*d);
        }
    }

    let input = hash.to_vec();
    derive(hash, &input, &[]);
}

/// Folds the garlic level index into `hash` as a single-byte salt.
fn fold_garlic_level(hash: &mut [u8], garlic: u8) {
    let input = hash.to_vec();
    derive(hash, &input, &[garlic]);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny_params() -> PhfParams {
        PhfParams::extended(32, 0, 1, 2, 1, 2, 32, 32).unwrap()
    }

    #[test]
    fn run_is_deterministic() {
        let params = tiny_params();
        let mut hash_a = [1u8; 32];
        let mut hash_b = [1u8; 32];
        run(&params, &mut hash_a, false).unwrap();
        run(&params, &mut hash_b, false).unwrap();
        assert_eq!(hash_a, hash_b);
    }

    #[test]
    fn skip_last_hash_changes_the_final_state() {
        let params = tiny_params();
        let mut with_final = [1u8; 32];
        let mut skipped = [1u8; 32];
        run(&params, &mut with_final, false).unwrap();
        run(&params, &mut skipped, true).unwrap();
        assert_ne!(with_final, skipped);
    }

    #[test]
    fn different_starting_hash_produces_different_output() {
        let params = tiny_params();
        let mut a = [1u8; 32];
        let mut b = [2u8; 32];
        run(&params, &mut a, false).unwrap();
        run(&params, &mut b, false).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn fold_garlic_level_is_sensitive_to_the_level() {
        let base = [7u8; 32];
        let mut a = base;
        let mut b = base;
        fold_garlic_level(&mut a, 1);
        fold_garlic_level(&mut b, 2);
        assert_ne!(a, b);
    }

    #[test]
    fn pacer_performs_nonzero_multiply_rounds_below_eight_multiplies() {
        // DEFAULT_MULTIPLIES (3) and every other value below 8 used to
        // starve the pacer's multiply loop entirely (rounds == 0).
        let params = PhfParams::extended(32, 0, 1, crate::params::DEFAULT_MULTIPLIES, 1, 2, 32, 32)
            .unwrap();
        let pacer = Pacer::new(4, params.multiplies_per_block(), params.repetitions);
        assert!(pacer.rounds() > 0);
    }
}
