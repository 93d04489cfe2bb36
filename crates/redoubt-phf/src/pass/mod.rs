// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! The two memory-filling passes, run one worker thread per `parallelism`
//! unit, per garlic level.

pub mod resistant;
pub mod unpredictable;
