// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! The multiplication pacer: a dedicated thread running a latency-bound
//! scalar multiplication chain in parallel with the bandwidth-bound
//! memory passes, publishing periodic 8-word checkpoints the passes fold
//! into their own state.
//!
//! A single writer publishes via a release store on an atomic counter;
//! readers spin on an acquire load until their slot is visible.

use std::cell::UnsafeCell;
use std::sync::atomic::{AtomicU64, Ordering};
use std::thread;
use std::time::Duration;

use crate::state;

const SPIN_SLEEP: Duration = Duration::from_micros(100);

/// Shared pacer state for one garlic level. Exactly one thread calls
/// [`Pacer::run`]; any number of worker threads call [`Pacer::fold_checkpoint`]
/// concurrently, each reading every slot it needs exactly once.
pub struct Pacer {
    completed: AtomicU64,
    checkpoints: UnsafeCell<Box<[[u32; 8]]>>,
    total: u64,
    multiplies_per_block: u32,
    repetitions: u32,
}

// SAFETY: `checkpoints` is written only by the single thread running
// `run`, one slot at a time, strictly in order; `completed`'s release
// store is the only way a slot's write becomes visible to readers, who
// only ever read slots at or below the acquired value.
unsafe impl Sync for Pacer {}

impl Pacer {
    /// `total` is the number of checkpoints this garlic level will produce
    /// (`2 * numblocks`).
    pub fn new(total: u64, multiplies_per_block: u32, repetitions: u32) -> Self {
        let checkpoints = vec![[0u32; 8]; total as usize].into_boxed_slice();
        Self {
            completed: AtomicU64::new(0),
            checkpoints: UnsafeCell::new(checkpoints),
            total,
            multiplies_per_block,
            repetitions,
        }
    }

    /// Runs the multiplication chain to completion, seeding from `hash`
    /// tweaked by `parallelism`.
    pub fn run(&self, hash: &[u8], parallelism: u8) {
        let mut state = [0u32; 8];
        state::derive_state(&mut state, hash, &(parallelism as u32).to_be_bytes());

        let rounds = (self.multiplies_per_block * self.repetitions) / 8;

        for i in 0..self.total {
            for _ in 0..rounds {
                for k in 0..8 {
                    let a = state[(k + 1) % 8] | 1;
                    let b = state[(k + 2) % 8] >> 1;
                    state[k] = state[k].wrapping_mul(a) ^ b;
                }
            }
            state::hash_state(&mut state);

            // SAFETY: `i` ranges only over `0..self.total`, the exact
            // bound `checkpoints` was allocated with, and this is the
            // sole writer.
            unsafe {
                (*self.checkpoints.get())[i as usize] = state;
            }
            self.completed.store(i + 1, Ordering::Release);
        }
    }

    /// Blocks until checkpoint `i` is published, then XORs it into `state`
    /// and re-hashes.
    pub fn fold_checkpoint(&self, i: u64, state: &mut [u32; 8]) {
        while self.completed.load(Ordering::Acquire) <= i {
            thread::sleep(SPIN_SLEEP);
        }
        // SAFETY: the acquire load observing `completed > i` happens-after
        // the pacer's release store for slot `i`, so slot `i`'s write is
        // visible here.
        let checkpoint = unsafe { (*self.checkpoints.get())[i as usize] };
        for k in 0..8 {
            state[k] ^= checkpoint[k];
        }
        state::hash_state(state);
    }

    /// The number of 8-way multiply rounds [`Pacer::run`] performs per
    /// checkpoint. Exposed for tests that construct a `Pacer` the way
    /// [`crate::garlic`] does, to check the normalization callers apply to
    /// `multiplies_per_block` actually yields real work.
    #[cfg(test)]
    pub(crate) fn rounds(&self) -> u32 {
        (self.multiplies_per_block * self.repetitions) / 8
    }
}
