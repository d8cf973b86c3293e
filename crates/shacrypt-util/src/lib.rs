// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Memory hygiene helpers for password hashing intermediates.
//!
//! Every buffer that ever held secret-derived bytes (digests, repeated
//! password material, random salt seeds) is wiped through these helpers
//! before it is released.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

use alloc::vec::Vec;

/// Overwrites a digest, seed or scratch buffer with zeros.
///
/// The wipe is a single `write_bytes` over the whole slice. A volatile read
/// of the first byte afterwards keeps the store alive even when the buffer
/// is dead right after the call.
///
/// # Example
///
/// ```
/// use shacrypt_util::fast_zeroize_slice;
///
/// let mut digest = [0xA5u8; 64];
/// fast_zeroize_slice(&mut digest);
/// assert!(digest.iter().all(|&b| b == 0));
/// ```
#[inline(always)]
pub fn fast_zeroize_slice<T: Copy>(slice: &mut [T]) {
    if slice.is_empty() {
        return;
    }

    let byte_len = core::mem::size_of_val(slice);
    unsafe {
        core::ptr::write_bytes(slice.as_mut_ptr() as *mut u8, 0, byte_len);
        // Observed, so the store above cannot be elided
        core::ptr::read_volatile(slice.as_ptr() as *const u8);
    }
}

/// Fast bulk zeroization of a `Vec<u8>` including spare capacity.
///
/// The length is left untouched; only the bytes are cleared. Buffers that
/// grew while being filled may have left earlier contents in spare capacity,
/// so the whole allocation is wiped.
///
/// ```
/// use shacrypt_util::{fast_zeroize_vec, is_vec_fully_zeroized};
///
/// let mut p = vec![0xFFu8; 100];
/// p.truncate(10);
///
/// fast_zeroize_vec(&mut p);
/// assert!(is_vec_fully_zeroized(&p));
/// ```
#[inline(always)]
pub fn fast_zeroize_vec(vec: &mut Vec<u8>) {
    let cap = vec.capacity();
    if cap == 0 {
        return;
    }

    unsafe {
        core::ptr::write_bytes(vec.as_mut_ptr(), 0, cap);
        core::ptr::read_volatile(vec.as_ptr());
    }
}

/// Returns `true` if every byte of `slice` is zero.
pub fn is_slice_zeroized(slice: &[u8]) -> bool {
    slice.iter().all(|&b| b == 0)
}

/// Returns `true` if the whole allocation behind `vec` is zero.
///
/// Checks up to `capacity()`, so password bytes dropped by `truncate` or
/// `pop` (a stripped line terminator, say) still count. Only meaningful on a
/// vector whose spare capacity has been written, e.g. by
/// [`fast_zeroize_vec`].
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

/// Parses a hexadecimal string into bytes.
///
/// Used by test suites to spell out digest vectors.
///
/// # Panics
///
/// Panics if the string contains invalid hex characters or has odd length.
#[cfg(feature = "test-utils")]
pub fn hex_to_bytes(hex: &str) -> Vec<u8> {
    assert!(hex.len() % 2 == 0, "odd-length hex string");

    (0..hex.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).expect("invalid hex digit"))
        .collect()
}
