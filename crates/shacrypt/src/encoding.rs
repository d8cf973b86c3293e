// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Permuted base64 rendering of a SHA-512 digest.
//!
//! This is not RFC 4648 base64: digest bytes are regrouped into 22 triplets
//! by a fixed permutation, each triplet is packed big-end first into 24 bits,
//! and the 24 bits are emitted least significant sextet first. The final
//! triplet carries a single real byte; its two trailing characters are
//! dropped, leaving 86 characters.

use alloc::string::String;

use shacrypt_sha512::HASH_LEN;
use shacrypt_util::fast_zeroize_slice;

use crate::alphabet::sextet;

/// Length of the encoded digest segment of a `$6$` hash.
pub const ENCODED_DIGEST_LEN: usize = 86;

/// Characters produced before the trailing two are dropped.
pub(crate) const RAW_ENCODED_LEN: usize = 4 * PERMUTATION.len();

/// A slot of the permutation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DigestIndex {
    /// Take the digest byte at this position.
    Byte(u8),
    /// Contribute zero bits.
    Zero,
}

use DigestIndex::{Byte, Zero};

/// Byte order of the SHA-512 crypt encoding, one triplet per 4 characters.
pub(crate) const PERMUTATION: [[DigestIndex; 3]; 22] = [
    [Byte(0), Byte(21), Byte(42)],
    [Byte(22), Byte(43), Byte(1)],
    [Byte(44), Byte(2), Byte(23)],
    [Byte(3), Byte(24), Byte(45)],
    [Byte(25), Byte(46), Byte(4)],
    [Byte(47), Byte(5), Byte(26)],
    [Byte(6), Byte(27), Byte(48)],
    [Byte(28), Byte(49), Byte(7)],
    [Byte(50), Byte(8), Byte(29)],
    [Byte(9), Byte(30), Byte(51)],
    [Byte(31), Byte(52), Byte(10)],
    [Byte(53), Byte(11), Byte(32)],
    [Byte(12), Byte(33), Byte(54)],
    [Byte(34), Byte(55), Byte(13)],
    [Byte(56), Byte(14), Byte(35)],
    [Byte(15), Byte(36), Byte(57)],
    [Byte(37), Byte(58), Byte(16)],
    [Byte(59), Byte(17), Byte(38)],
    [Byte(18), Byte(39), Byte(60)],
    [Byte(40), Byte(61), Byte(19)],
    [Byte(62), Byte(20), Byte(41)],
    [Zero, Zero, Byte(63)],
];

impl DigestIndex {
    #[inline(always)]
    fn resolve(self, digest: &[u8; HASH_LEN]) -> u32 {
        match self {
            Byte(i) => u32::from(digest[i as usize]),
            Zero => 0,
        }
    }
}

/// Encodes all 22 triplets into `out`, including the two padding characters.
pub(crate) fn encode_into(digest: &[u8; HASH_LEN], out: &mut [u8; RAW_ENCODED_LEN]) {
    for (triplet, chars) in PERMUTATION.iter().zip(out.chunks_exact_mut(4)) {
        let mut bits = (triplet[0].resolve(digest) << 16)
            | (triplet[1].resolve(digest) << 8)
            | triplet[2].resolve(digest);

        for c in chars.iter_mut() {
            *c = sextet(bits);
            bits >>= 6;
        }
    }
}

/// Encodes a 64-byte digest into the 86-character `$6$` hash segment.
///
/// # Example
///
/// ```rust
/// use shacrypt::{ENCODED_DIGEST_LEN, encode_digest};
///
/// let encoded = encode_digest(&[0u8; 64]);
/// assert_eq!(encoded.len(), ENCODED_DIGEST_LEN);
/// assert!(encoded.bytes().all(|c| c == b'.'));
/// ```
pub fn encode_digest(digest: &[u8; HASH_LEN]) -> String {
    let mut raw = [0u8; RAW_ENCODED_LEN];
    encode_into(digest, &mut raw);

    let encoded = raw[..ENCODED_DIGEST_LEN]
        .iter()
        .map(|&c| char::from(c))
        .collect();

    fast_zeroize_slice(&mut raw);

    encoded
}
