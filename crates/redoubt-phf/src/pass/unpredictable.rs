// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! The unpredictable pass: TMTO-resistant memory fill using
//! state-dependent block addressing with a cubic distance distribution,
//! including cross-worker reads into other workers' (already-completed)
//! resistant-pass regions.

use crate::memory::AlignedMemory;
use crate::mixer::mix_block;
use crate::pacer::Pacer;
use crate::params::PhfParams;

/// Fills worker `p`'s second-half region: words
/// `[(2*p+1)*numblocks*blocklen, 2*(p+1)*numblocks*blocklen)`.
///
/// # Safety
///
/// All workers' resistant passes must have completed before this is
/// called (join barrier), since `from_addr` may reach into
/// another worker's first-half region. The caller must also ensure no
/// other thread holds a conflicting window over this worker's own
/// second-half region.
pub unsafe fn run(mem: &AlignedMemory, params: &PhfParams, p: u8, numblocks: u64, pacer: &Pacer) {
    let blocklen = params.blocklen() as u64;
    let start = (2 * p as u64 + 1) * numblocks * blocklen;
    let parallelism = params.parallelism() as u64;

    let mut state = [1u32; 8];
    let mut to_addr = start;

    for i in 0..numblocks {
        let v = state[0] as u64;
        let v2 = (v * v) >> 32;
        let v3 = (v * v2) >> 32;
        // Widened to u128 so `numblocks` isn't bound to 32 bits the way
        // the original fixed-width C implementation is; the formula
        // itself is unchanged.
        let distance = (((i + numblocks - 1) as u128 * v3 as u128) >> 32) as u64;

        let from_addr = if distance < i {
            start + (i - 1 - distance) * blocklen
        } else {
            let q = (p as u64 + i) % parallelism;
            let b = numblocks - 1 - (distance - i);
            (2 * numblocks * q + b) * blocklen
        };

        // SAFETY: `from_addr` names either an earlier block in this
        // worker's own second-half region or a block in another worker's
        // first-half (resistant-pass) region, both fully written before
        // this pass starts; `to_addr - blocklen` is this loop's own
        // previous iteration (or the resistant pass's last block, for
        // `i == 0`). None of these overlap `to_addr`.
        unsafe {
            mix_block(
                mem,
                to_addr,
                to_addr - blocklen,
                from_addr,
                &mut state,
                params.blocklen(),
                params.sub_blocklen(),
                7,
                params.multiplies,
                params.repetitions,
            );
        }
        pacer.fold_checkpoint(i, &mut state);
        to_addr += blocklen;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::resistant;

    fn tiny_params() -> PhfParams {
        PhfParams::extended(32, 0, 0, 2, 1, 2, 32, 32).unwrap()
    }

    /// Runs both workers' resistant passes to completion (the join barrier
    /// the unpredictable pass's cross-worker reads depend on), then returns
    /// the fully-seeded memory array.
    fn seeded_memory(params: &PhfParams, numblocks: u64) -> (AlignedMemory, Pacer) {
        let blocklen = params.blocklen() as usize;
        let mem = AlignedMemory::new(2 * params.parallelism() as usize * numblocks as usize * blocklen).unwrap();
        let resistant_pacer = Pacer::new(numblocks, params.multiplies_per_block(), params.repetitions);
        std::thread::scope(|scope| {
            let pacer_ref = &resistant_pacer;
            scope.spawn(|| pacer_ref.run(b"hash", params.parallelism()));
            for p in 0..params.parallelism() {
                unsafe { resistant::run(&mem, params, b"hash", p, numblocks, pacer_ref) };
            }
        });
        let unpredictable_pacer = Pacer::new(numblocks, params.multiplies_per_block(), params.repetitions);
        (mem, unpredictable_pacer)
    }

    #[test]
    fn fills_the_second_half_deterministically() {
        let params = tiny_params();
        let numblocks = 8u64;

        let run_once = || {
            let (mem, pacer) = seeded_memory(&params, numblocks);
            std::thread::scope(|scope| {
                let pacer_ref = &pacer;
                scope.spawn(|| pacer_ref.run(b"hash", params.parallelism()));
                for p in 0..params.parallelism() {
                    unsafe { run(&mem, &params, p, numblocks, pacer_ref) };
                }
            });
            mem.as_slice().to_vec()
        };

        let a = run_once();
        let b = run_once();
        assert_eq!(a, b);

        let blocklen = params.blocklen() as usize;
        let second_half_start = numblocks as usize * blocklen;
        assert!(a[second_half_start..].iter().any(|&w| w != 0));
    }
}
