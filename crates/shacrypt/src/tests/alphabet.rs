// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::alphabet::{ALPHABET, is_alphabet_byte, sextet};

#[test]
fn test_alphabet_order() {
    assert_eq!(ALPHABET[0], b'.');
    assert_eq!(ALPHABET[1], b'/');
    assert_eq!(ALPHABET[2], b'0');
    assert_eq!(ALPHABET[11], b'9');
    assert_eq!(ALPHABET[12], b'A');
    assert_eq!(ALPHABET[37], b'Z');
    assert_eq!(ALPHABET[38], b'a');
    assert_eq!(ALPHABET[63], b'z');
}

#[test]
fn test_is_alphabet_byte_matches_table() {
    for byte in 0..=u8::MAX {
        assert_eq!(
            is_alphabet_byte(byte),
            ALPHABET.contains(&byte),
            "mismatch for byte {byte:#04x}"
        );
    }
}

#[test]
fn test_sextet_uses_low_six_bits_only() {
    assert_eq!(sextet(0), b'.');
    assert_eq!(sextet(63), b'z');
    assert_eq!(sextet(64), b'.');
    assert_eq!(sextet(0xFFFF_FFC1), b'/');
}
