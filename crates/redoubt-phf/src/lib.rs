// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! A memory-hard password hashing function of the TigerKDF/TwoCats
//! family: a keyed, salted key-derivation primitive whose cost is tunable
//! along memory footprint, wall-time repetitions, and per-block
//! multiplication depth, hardened against cache-timing side channels,
//! time-memory trade-offs, and GPU/ASIC attackers.
//!
//! The core is a memory-filling engine (a cache-timing-resistant
//! "resistant" pass followed by a TMTO-resistant "unpredictable" pass)
//! run in parallel with a latency-bound scalar multiplication chain (the
//! "pacer"), iterated over doubling "garlic levels". See [`api`] for the
//! entry points most callers want.

mod codec;
mod error;
mod garlic;
mod memory;
mod mixer;
mod pacer;
mod params;
mod pass;
mod state;

pub mod api;
pub mod reference;

pub use api::{
    client_hash_password, hash_password, hash_password_extended, hash_password_full, phs,
    server_hash_password, update_password,
};
pub use error::PhfError;
pub use params::{
    DEFAULT_BLOCK_SIZE, DEFAULT_HASH_SIZE, DEFAULT_MULTIPLIES, DEFAULT_PARALLELISM,
    DEFAULT_SUB_BLOCK_SIZE, DEFAULT_TIME_COST, PhfParams,
};
pub use reference::hash_password_reference;
