// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Memory utilities for secure byte conversions and verification.
//!
//! All conversion functions zeroize source data after reading to prevent
//! sensitive data from lingering on the stack.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

use alloc::vec::Vec;

#[cfg(test)]
mod tests;

/// Fills a byte slice with a repeating pattern byte.
#[inline]
pub fn fill_bytes_with_pattern(slice: &mut [u8], pattern: u8) {
    for byte in slice.iter_mut() {
        *byte = pattern;
    }
}

/// Constant-time equality comparison for byte slices.
///
/// Returns `true` if slices are equal, `false` otherwise. The comparison time
/// is constant regardless of where differences occur, preventing timing
/// side-channel attacks.
#[inline]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    a.iter()
        .zip(b.iter())
        .fold(0u8, |acc, (x, y)| acc | (x ^ y))
        == 0
}

/// Parses a hexadecimal string into bytes.
///
/// # Panics
///
/// Panics if the string contains invalid hex characters or has odd length.
#[inline]
pub fn hex_to_bytes(hex: &str) -> Vec<u8> {
    (0..hex.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).unwrap())
        .collect()
}

/// Generates `{type}_from_be` and `{type}_to_be` functions for integer types.
macro_rules! impl_be_conversions {
    ($type:ty, $size:expr, $fn_from:ident, $fn_to:ident) => {
        #[doc = concat!("Converts ", stringify!($size), " big-endian bytes to a `", stringify!($type), "`, zeroizing the source bytes.")]
        ///
        /// This function avoids creating temporary byte arrays that could
        /// leak sensitive data on the stack. Instead, it builds the integer
        /// using bit shifts and zeroizes each source byte after reading.
        #[inline(always)]
        pub fn $fn_from(dst: &mut $type, bytes: &mut [u8; $size]) {
            *dst = 0;
            for byte in bytes.iter_mut() {
                *dst = (*dst << 8) | (*byte as $type);
                *byte = 0;
            }
        }

        #[doc = concat!("Converts a `", stringify!($type), "` to big-endian bytes, zeroizing the source.")]
        ///
        /// This function avoids creating temporary byte arrays that could
        /// leak sensitive data on the stack. Instead, it extracts bytes using
        /// bit shifts and zeroizes the source integer after writing.
        #[inline(always)]
        pub fn $fn_to(src: &mut $type, bytes: &mut [u8; $size]) {
            for (i, byte) in bytes.iter_mut().rev().enumerate() {
                *byte = (*src >> (8 * i)) as u8;
            }
            *src = 0;
        }
    };
}

impl_be_conversions!(u16, 2, u16_from_be, u16_to_be);
impl_be_conversions!(u32, 4, u32_from_be, u32_to_be);
impl_be_conversions!(u64, 8, u64_from_be, u64_to_be);

/// Verifies that a slice is zeroized.
#[inline(always)]
pub fn is_slice_zeroized(slice: &[u8]) -> bool {
    slice.iter().all(|&b| b == 0)
}

/// Verifies that a `Vec<u8>` is fully zeroized, including spare capacity.
///
/// This checks **the entire allocation** (from index 0 to capacity), not just
/// the active elements (0 to len), to catch leaks left in spare capacity by
/// operations like `truncate()`.
///
/// # Safety
///
/// Sound because `Vec` guarantees the allocation is valid for `capacity`
/// bytes and this only reads, never writes, within that bound.
#[inline(never)]
pub fn is_vec_fully_zeroized(vec: &Vec<u8>) -> bool {
    let cap = vec.capacity();
    let base = vec.as_ptr();

    for i in 0..cap {
        unsafe {
            if *base.add(i) != 0 {
                return false;
            }
        }
    }

    true
}

/// Zeroizes a single primitive value using a volatile write.
#[inline(always)]
pub fn zeroize_primitive<T>(val: &mut T) {
    unsafe {
        core::ptr::write_volatile(val, core::mem::zeroed());
    }
}

/// Fast bulk zeroization that can be vectorized.
///
/// Uses `write_bytes` (memset) + a volatile read to prevent the optimizer
/// from eliding the zeroization. Works with any type `T` by treating the
/// slice as raw bytes.
#[inline(always)]
pub fn fast_zeroize_slice<T>(slice: &mut [T]) {
    if slice.is_empty() {
        return;
    }

    let byte_len = core::mem::size_of_val(slice);
    unsafe {
        core::ptr::write_bytes(slice.as_mut_ptr() as *mut u8, 0, byte_len);
        core::ptr::read_volatile(slice.as_ptr() as *const u8);
    }
}

/// Fast bulk zeroization of a `Vec` including spare capacity.
#[inline(always)]
pub fn fast_zeroize_vec<T>(vec: &mut Vec<T>) {
    if vec.capacity() == 0 {
        return;
    }

    let byte_len = vec.capacity() * core::mem::size_of::<T>();
    unsafe {
        core::ptr::write_bytes(vec.as_mut_ptr() as *mut u8, 0, byte_len);
        core::ptr::read_volatile(vec.as_ptr() as *const u8);
    }
}

/// Zeroizes only the spare capacity of a `Vec`, leaving active elements untouched.
#[inline(always)]
pub fn zeroize_spare_capacity<T>(vec: &mut Vec<T>) {
    let spare = vec.capacity() - vec.len();
    if spare == 0 {
        return;
    }

    let byte_len = spare * core::mem::size_of::<T>();
    unsafe {
        let spare_ptr = vec.as_mut_ptr().add(vec.len()) as *mut u8;
        core::ptr::write_bytes(spare_ptr, 0, byte_len);
        core::ptr::read_volatile(spare_ptr);
    }
}

/// Checks if the spare capacity of a `Vec<T>` is fully zeroized.
#[inline(never)]
pub fn is_spare_capacity_zeroized<T>(vec: &Vec<T>) -> bool {
    let len = vec.len();
    let cap = vec.capacity();

    if cap == len {
        return true;
    }

    let len_bytes = len * core::mem::size_of::<T>();
    let cap_bytes = cap * core::mem::size_of::<T>();

    unsafe {
        let spare_ptr = vec.as_ptr().cast::<u8>().add(len_bytes);
        let spare_len = cap_bytes - len_bytes;
        core::slice::from_raw_parts(spare_ptr, spare_len)
            .iter()
            .all(|&b| b == 0)
    }
}

/// Attempts to split a mutable slice at the given index.
///
/// Returns `None` if `mid > slice.len()`, otherwise the fallible version of
/// [`slice::split_at_mut`], which panics out of bounds instead.
#[inline(always)]
pub fn try_split_at_mut<T>(slice: &mut [T], mid: usize) -> Option<(&mut [T], &mut [T])> {
    if mid <= slice.len() {
        Some(slice.split_at_mut(mid))
    } else {
        None
    }
}

/// Attempts to split a mutable slice from the end at the given size.
#[inline(always)]
pub fn try_split_at_mut_from_end<T>(
    slice: &mut [T],
    end_size: usize,
) -> Option<(&mut [T], &mut [T])> {
    if end_size <= slice.len() {
        let split_point = slice.len() - end_size;
        Some(slice.split_at_mut(split_point))
    } else {
        None
    }
}
