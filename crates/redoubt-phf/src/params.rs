// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Validated, immutable-once-built parameter set for a single PHF invocation.
//!
//! Validate once at construction, trust the fields after: every bound on
//! the parameter set is checked exactly once, by [`PhfParams::extended`],
//! and every other constructor narrows down to it.

use crate::error::PhfError;

const MAX_GARLIC: u8 = 30;
const MAX_TIME_COST: u8 = 30;
const MAX_MULTIPLIES: u8 = 8;
const MAX_HASH_SIZE: u32 = 8160;
const MIN_BLOCK_SIZE: u32 = 32;
const MAX_BLOCK_SIZE: u32 = 1 << 20;

/// The default output size, in bytes, used by [`crate::api::hash_password`].
pub const DEFAULT_HASH_SIZE: u32 = 32;
/// The default worker count used by [`crate::api::hash_password_full`].
pub const DEFAULT_PARALLELISM: u8 = 2;
/// The default block size, in bytes, used by the Full/Fixed entry points.
pub const DEFAULT_BLOCK_SIZE: u32 = 16384;
/// The default sub-block size, in bytes, used by the Full/Fixed entry points.
pub const DEFAULT_SUB_BLOCK_SIZE: u32 = 64;
/// The default time cost used by the Full/Fixed entry points.
pub const DEFAULT_TIME_COST: u8 = 0;
/// The default multiplication depth used by the Full/Fixed entry points.
pub const DEFAULT_MULTIPLIES: u8 = 3;

/// Bounds-checked, fully-resolved parameters for one garlic run.
///
/// Every field here is already validated; constructing one is the only way
/// to obtain values the rest of the crate trusts without re-checking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhfParams {
    pub(crate) hash_size: u32,
    pub(crate) start_mem_cost: u8,
    pub(crate) stop_mem_cost: u8,
    pub(crate) multiplies: u8,
    pub(crate) repetitions: u32,
    pub(crate) parallelism: u8,
    pub(crate) block_size: u32,
    pub(crate) sub_block_size: u32,
}

impl PhfParams {
    /// Validates and constructs the full parameter set. `multiplies` and
    /// `repetitions` are taken independently here, as the Extended API
    /// allows.
    #[allow(clippy::too_many_arguments)]
    pub fn extended(
        hash_size: u32,
        start_mem_cost: u8,
        stop_mem_cost: u8,
        multiplies: u8,
        repetitions: u32,
        parallelism: u8,
        block_size: u32,
        sub_block_size: u32,
    ) -> Result<Self, PhfError> {
        if hash_size == 0 || hash_size % 4 != 0 {
            return Err(PhfError::InvalidParameter(
                "hash_size must be a nonzero multiple of 4",
            ));
        }
        if hash_size > MAX_HASH_SIZE.min(block_size) {
            return Err(PhfError::InvalidParameter(
                "hash_size exceeds min(8160, block_size)",
            ));
        }
        if start_mem_cost > MAX_GARLIC || stop_mem_cost > MAX_GARLIC {
            return Err(PhfError::InvalidParameter("mem_cost exceeds 30"));
        }
        if start_mem_cost > stop_mem_cost {
            return Err(PhfError::InvalidParameter(
                "start_mem_cost must not exceed stop_mem_cost",
            ));
        }
        if multiplies > MAX_MULTIPLIES {
            return Err(PhfError::InvalidParameter("multiplies exceeds 8"));
        }
        if parallelism == 0 {
            return Err(PhfError::InvalidParameter("parallelism must be at least 1"));
        }
        if !(MIN_BLOCK_SIZE..=MAX_BLOCK_SIZE).contains(&block_size) || !block_size.is_power_of_two()
        {
            return Err(PhfError::InvalidParameter(
                "block_size must be a power of two in [32, 2^20]",
            ));
        }
        if !(MIN_BLOCK_SIZE..=MAX_BLOCK_SIZE).contains(&sub_block_size)
            || !sub_block_size.is_power_of_two()
        {
            return Err(PhfError::InvalidParameter(
                "sub_block_size must be a power of two in [32, 2^20]",
            ));
        }
        if sub_block_size > block_size {
            return Err(PhfError::InvalidParameter(
                "sub_block_size must not exceed block_size",
            ));
        }

        let candidate = Self {
            hash_size,
            start_mem_cost,
            stop_mem_cost,
            multiplies,
            repetitions: repetitions.max(1),
            parallelism,
            block_size,
            sub_block_size,
        };

        // numblocks_at is non-decreasing in the garlic level, so checking
        // the smallest level in range catches every level the run will
        // reach. A zero here would give every worker the same region
        // start in the resistant pass (aliased `&mut` windows) and
        // underflow the combine step's tail offset.
        if candidate.numblocks_at(start_mem_cost) == 0 {
            return Err(PhfError::InvalidParameter(
                "mem_cost/parallelism/block_size combination yields zero blocks per worker",
            ));
        }

        Ok(candidate)
    }

    /// Validates and constructs parameters from a single `time_cost` axis:
    /// `time_cost < 8` minimizes bandwidth per repetition, `time_cost >= 8`
    /// fixes `multiplies = 8` and scales `repetitions`.
    #[allow(clippy::too_many_arguments)]
    pub fn from_time_cost(
        hash_size: u32,
        start_mem_cost: u8,
        stop_mem_cost: u8,
        time_cost: u8,
        parallelism: u8,
        block_size: u32,
        sub_block_size: u32,
    ) -> Result<Self, PhfError> {
        if time_cost > MAX_TIME_COST {
            return Err(PhfError::InvalidParameter("time_cost exceeds 30"));
        }
        let (multiplies, repetitions) = expand_time_cost(time_cost);
        Self::extended(
            hash_size,
            start_mem_cost,
            stop_mem_cost,
            multiplies,
            repetitions,
            parallelism,
            block_size,
            sub_block_size,
        )
    }

    /// Output size in bytes.
    pub fn hash_size(&self) -> u32 {
        self.hash_size
    }

    /// Garlic level the run starts at.
    pub fn start_mem_cost(&self) -> u8 {
        self.start_mem_cost
    }

    /// Garlic level the run stops at; memory hashed at that level is
    /// `2^stop_mem_cost` KiB.
    pub fn stop_mem_cost(&self) -> u8 {
        self.stop_mem_cost
    }

    /// Worker thread count.
    pub fn parallelism(&self) -> u8 {
        self.parallelism
    }

    /// Block size in bytes.
    pub fn block_size(&self) -> u32 {
        self.block_size
    }

    /// Sub-block size in bytes.
    pub fn sub_block_size(&self) -> u32 {
        self.sub_block_size
    }

    /// Block length in 32-bit words.
    pub(crate) fn blocklen(&self) -> u32 {
        self.block_size / 4
    }

    /// Sub-block length in 32-bit words.
    pub(crate) fn sub_blocklen(&self) -> u32 {
        self.sub_block_size / 4
    }

    /// Number of blocks per half-region (per worker, per pass) at garlic
    /// level `garlic`. Doubles with each garlic level.
    pub(crate) fn numblocks_at(&self, garlic: u8) -> u64 {
        let mem_words = (1u64 << garlic) * 256;
        mem_words / (2 * self.parallelism as u64 * self.blocklen() as u64)
    }

    /// Total word length of the memory array sized for `stop_mem_cost`.
    pub(crate) fn total_memlen(&self) -> u64 {
        2 * self.parallelism as u64 * self.numblocks_at(self.stop_mem_cost) * self.blocklen() as u64
    }

    /// Normalizes `multiplies` into the pacer's own work unit: rounded down
    /// to a multiple of 8, floored at 8 so the pacer thread always performs
    /// real multiply rounds, never degenerating into a bare rehash loop for
    /// any `multiplies` value this type accepts.
    pub(crate) fn multiplies_per_block(&self) -> u32 {
        let m = 8 * (self.multiplies as u32 / 8);
        if m == 0 {
            8
        } else {
            m
        }
    }
}

/// Expands a single `time_cost` into `(multiplies, repetitions)`: below 8,
/// `time_cost` directly sets the multiplication depth at one repetition
/// each; at and above 8, depth saturates at 8 and `repetitions` absorbs
/// the remaining cost as a power of two.
pub fn expand_time_cost(time_cost: u8) -> (u8, u32) {
    if time_cost < 8 {
        (time_cost, 1)
    } else {
        (8, 1u32 << (time_cost - 8))
    }
}
