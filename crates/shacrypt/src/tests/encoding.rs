// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::encoding::{
    DigestIndex, ENCODED_DIGEST_LEN, PERMUTATION, RAW_ENCODED_LEN, encode_digest, encode_into,
};

#[test]
fn test_permutation_covers_every_digest_byte_once() {
    let mut seen = [0usize; 64];

    for slot in PERMUTATION.iter().flatten() {
        if let DigestIndex::Byte(i) = slot {
            seen[*i as usize] += 1;
        }
    }

    assert!(seen.iter().all(|&count| count == 1));
}

#[test]
fn test_permutation_final_triplet_is_zero_padded() {
    assert_eq!(
        PERMUTATION[21],
        [DigestIndex::Zero, DigestIndex::Zero, DigestIndex::Byte(63)]
    );
    assert_eq!(RAW_ENCODED_LEN, 88);
}

#[test]
fn test_encode_digest_counting_bytes() {
    let digest: [u8; 64] = core::array::from_fn(|i| i as u8);

    assert_eq!(
        encode_digest(&digest),
        "eI/./gW3L6.9hUl.2sG4OIk9kgV/5215RUUAnsF08En5UgEBq201BQX6Xs.CtEm1EcH7a2lCwQW2Ho18dEVDz."
    );
}

#[test]
fn test_encode_digest_all_zero() {
    let encoded = encode_digest(&[0u8; 64]);

    assert_eq!(encoded.len(), ENCODED_DIGEST_LEN);
    assert!(encoded.bytes().all(|c| c == b'.'));
}

#[test]
fn test_encode_digest_all_ones() {
    let encoded = encode_digest(&[0xFFu8; 64]);

    // Last byte alone fills only 8 bits: 63 then 3
    assert_eq!(&encoded[..85], "z".repeat(85));
    assert_eq!(&encoded[85..], "1");
}

#[test]
fn test_encode_emits_low_sextet_first() {
    let mut digest = [0u8; 64];
    digest[0] = 1;

    // bits = 1 << 16: sextets 0, 0, 16, 0
    assert_eq!(&encode_digest(&digest)[..4], "..E.");
}

#[test]
fn test_encode_middle_byte_of_triplet() {
    let mut digest = [0u8; 64];
    digest[21] = 1;

    // bits = 1 << 8: sextets 0, 4, 0, 0
    assert_eq!(&encode_digest(&digest)[..4], ".2..");
}

#[test]
fn test_encode_last_byte_lands_in_final_two_chars() {
    let mut digest = [0u8; 64];
    digest[63] = 0xFF;

    let encoded = encode_digest(&digest);
    assert_eq!(&encoded[82..], "..z1");
}

#[test]
fn test_encode_into_padding_chars() {
    let mut digest = [0u8; 64];
    digest[63] = 0xFF;

    let mut raw = [0u8; RAW_ENCODED_LEN];
    encode_into(&digest, &mut raw);

    // Two zero slots produce the dropped trailing characters
    assert_eq!(&raw[84..], b"z1..");
}
