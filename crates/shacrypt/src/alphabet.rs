// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// The crypt alphabet: `.`, `/`, `0-9`, `A-Z`, `a-z`, in that order.
///
/// Index `i` encodes the 6-bit value `i`. Used for both salt text and the
/// digest encoding.
pub const ALPHABET: &[u8; 64] = b"./0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Returns `true` if `byte` belongs to [`ALPHABET`].
#[inline]
pub const fn is_alphabet_byte(byte: u8) -> bool {
    matches!(byte, b'.' | b'/' | b'0'..=b'9' | b'A'..=b'Z' | b'a'..=b'z')
}

/// Maps the low 6 bits of `value` to its alphabet character.
#[inline(always)]
pub(crate) const fn sextet(value: u32) -> u8 {
    ALPHABET[(value & 0x3f) as usize]
}
