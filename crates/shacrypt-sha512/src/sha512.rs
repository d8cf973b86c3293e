// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-512 implementation per RFC 6234 Section 6.4

use shacrypt_util::fast_zeroize_slice;

use crate::consts::{BLOCK_LEN, HASH_LEN, LENGTH_FIELD_LEN};

/// SHA-512 constants K per RFC 6234 Section 5.2
/// First 64 bits of fractional parts of cube roots of first 80 primes
const K: [u64; 80] = [
    0x428a2f98d728ae22, 0x7137449123ef65cd, 0xb5c0fbcfec4d3b2f, 0xe9b5dba58189dbbc,
    0x3956c25bf348b538, 0x59f111f1b605d019, 0x923f82a4af194f9b, 0xab1c5ed5da6d8118,
    0xd807aa98a3030242, 0x12835b0145706fbe, 0x243185be4ee4b28c, 0x550c7dc3d5ffb4e2,
    0x72be5d74f27b896f, 0x80deb1fe3b1696b1, 0x9bdc06a725c71235, 0xc19bf174cf692694,
    0xe49b69c19ef14ad2, 0xefbe4786384f25e3, 0x0fc19dc68b8cd5b5, 0x240ca1cc77ac9c65,
    0x2de92c6f592b0275, 0x4a7484aa6ea6e483, 0x5cb0a9dcbd41fbd4, 0x76f988da831153b5,
    0x983e5152ee66dfab, 0xa831c66d2db43210, 0xb00327c898fb213f, 0xbf597fc7beef0ee4,
    0xc6e00bf33da88fc2, 0xd5a79147930aa725, 0x06ca6351e003826f, 0x142929670a0e6e70,
    0x27b70a8546d22ffc, 0x2e1b21385c26c926, 0x4d2c6dfc5ac42aed, 0x53380d139d95b3df,
    0x650a73548baf63de, 0x766a0abb3c77b2a8, 0x81c2c92e47edaee6, 0x92722c851482353b,
    0xa2bfe8a14cf10364, 0xa81a664bbc423001, 0xc24b8b70d0f89791, 0xc76c51a30654be30,
    0xd192e819d6ef5218, 0xd69906245565a910, 0xf40e35855771202a, 0x106aa07032bbd1b8,
    0x19a4c116b8d2d0c8, 0x1e376c085141ab53, 0x2748774cdf8eeb99, 0x34b0bcb5e19b48a8,
    0x391c0cb3c5c95a63, 0x4ed8aa4ae3418acb, 0x5b9cca4f7763e373, 0x682e6ff3d6b2b8a3,
    0x748f82ee5defb2fc, 0x78a5636f43172f60, 0x84c87814a1f0ab72, 0x8cc702081a6439ec,
    0x90befffa23631e28, 0xa4506cebde82bde9, 0xbef9a3f7b2c67915, 0xc67178f2e372532b,
    0xca273eceea26619c, 0xd186b8c721c0c207, 0xeada7dd6cde0eb1e, 0xf57d4f7fee6ed178,
    0x06f067aa72176fba, 0x0a637dc5a2c898a6, 0x113f9804bef90dae, 0x1b710b35131c471b,
    0x28db77f523047d84, 0x32caab7b40c72493, 0x3c9ebe0a15c9bebc, 0x431d67c49c100d4c,
    0x4cc5d4becb3e42b6, 0x597f299cfc657e2a, 0x5fcb6fab3ad6faec, 0x6c44198c4a475817,
];

/// Initial hash values H(0) per RFC 6234 Section 6.3
/// First 64 bits of fractional parts of square roots of first 8 primes
const H0: [u64; 8] = [
    0x6a09e667f3bcc908,
    0xbb67ae8584caa73b,
    0x3c6ef372fe94f82b,
    0xa54ff53a5f1d36f1,
    0x510e527fade682d1,
    0x9b05688c2b3e6c1f,
    0x1f83d9abfb41bd6b,
    0x5be0cd19137e2179,
];

#[inline(always)]
const fn ch(x: u64, y: u64, z: u64) -> u64 {
    (x & y) ^ (!x & z)
}

#[inline(always)]
const fn maj(x: u64, y: u64, z: u64) -> u64 {
    (x & y) ^ (x & z) ^ (y & z)
}

#[inline(always)]
const fn bsig0(x: u64) -> u64 {
    x.rotate_right(28) ^ x.rotate_right(34) ^ x.rotate_right(39)
}

#[inline(always)]
const fn bsig1(x: u64) -> u64 {
    x.rotate_right(14) ^ x.rotate_right(18) ^ x.rotate_right(41)
}

#[inline(always)]
const fn ssig0(x: u64) -> u64 {
    x.rotate_right(1) ^ x.rotate_right(8) ^ (x >> 7)
}

#[inline(always)]
const fn ssig1(x: u64) -> u64 {
    x.rotate_right(19) ^ x.rotate_right(61) ^ (x >> 6)
}

/// Compress one 128-byte block into the chaining words `h`.
///
/// The message schedule and working variables are wiped before returning.
fn compress(h: &mut [u64; 8], block: &[u8; BLOCK_LEN]) {
    let mut w = [0u64; 80];

    for (t, chunk) in block.chunks_exact(8).enumerate() {
        let mut word = [0u8; 8];
        word.copy_from_slice(chunk);
        w[t] = u64::from_be_bytes(word);
        fast_zeroize_slice(&mut word);
    }
    for t in 16..80 {
        w[t] = ssig1(w[t - 2])
            .wrapping_add(w[t - 7])
            .wrapping_add(ssig0(w[t - 15]))
            .wrapping_add(w[t - 16]);
    }

    let mut v = *h;

    for t in 0..80 {
        let t1 = v[7]
            .wrapping_add(bsig1(v[4]))
            .wrapping_add(ch(v[4], v[5], v[6]))
            .wrapping_add(K[t])
            .wrapping_add(w[t]);
        let t2 = bsig0(v[0]).wrapping_add(maj(v[0], v[1], v[2]));

        v[7] = v[6];
        v[6] = v[5];
        v[5] = v[4];
        v[4] = v[3].wrapping_add(t1);
        v[3] = v[2];
        v[2] = v[1];
        v[1] = v[0];
        v[0] = t1.wrapping_add(t2);
    }

    for (word, working) in h.iter_mut().zip(v.iter()) {
        *word = word.wrapping_add(*working);
    }

    fast_zeroize_slice(&mut v);
    fast_zeroize_slice(&mut w);
}

/// SHA-512 streaming state.
///
/// Feed any number of slices with [`update`](Self::update); the digest is the
/// hash of their concatenation. Chaining words, the partial-block buffer and
/// the length counters are zeroized by [`finalize`](Self::finalize) and again
/// on drop.
pub struct Sha512State {
    h: [u64; 8],
    buffer: [u8; BLOCK_LEN],
    buffer_len: usize,
    total_len: u128,
}

impl Default for Sha512State {
    fn default() -> Self {
        Self::new()
    }
}

impl Sha512State {
    /// Create new SHA-512 state initialized with H(0)
    pub fn new() -> Self {
        Self {
            h: H0,
            buffer: [0u8; BLOCK_LEN],
            buffer_len: 0,
            total_len: 0,
        }
    }

    /// Update state with data
    pub fn update(&mut self, data: &[u8]) {
        let mut data = data;
        self.total_len += data.len() as u128;

        // Top up a partially filled buffer first
        if self.buffer_len > 0 {
            let space = BLOCK_LEN - self.buffer_len;
            let copy_len = core::cmp::min(space, data.len());

            self.buffer[self.buffer_len..self.buffer_len + copy_len]
                .copy_from_slice(&data[..copy_len]);
            self.buffer_len += copy_len;
            data = &data[copy_len..];

            if self.buffer_len < BLOCK_LEN {
                return;
            }

            compress(&mut self.h, &self.buffer);
            self.buffer_len = 0;
        }

        // Full blocks straight from the input
        let mut blocks = data.chunks_exact(BLOCK_LEN);
        for chunk in &mut blocks {
            self.buffer.copy_from_slice(chunk);
            compress(&mut self.h, &self.buffer);
        }
        fast_zeroize_slice(&mut self.buffer);

        // Buffer remaining
        let remaining = blocks.remainder();
        self.buffer[..remaining.len()].copy_from_slice(remaining);
        self.buffer_len = remaining.len();
    }

    /// Finalize and output hash
    pub fn finalize(mut self, out: &mut [u8; HASH_LEN]) {
        // Padding per RFC 6234 Section 4.2
        let bit_len = self.total_len.wrapping_mul(8);

        self.buffer[self.buffer_len] = 0x80;
        self.buffer_len += 1;

        // Not enough room for the 128-bit length: pad out and compress
        if self.buffer_len > BLOCK_LEN - LENGTH_FIELD_LEN {
            fast_zeroize_slice(&mut self.buffer[self.buffer_len..]);
            compress(&mut self.h, &self.buffer);
            self.buffer_len = 0;
        }

        fast_zeroize_slice(
            &mut self.buffer[self.buffer_len..BLOCK_LEN - LENGTH_FIELD_LEN],
        );
        self.buffer[BLOCK_LEN - LENGTH_FIELD_LEN..].copy_from_slice(&bit_len.to_be_bytes());

        compress(&mut self.h, &self.buffer);

        for (chunk, word) in out.chunks_exact_mut(8).zip(self.h.iter()) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        // Drop zeroizes the state
    }

    fn zeroize(&mut self) {
        fast_zeroize_slice(&mut self.h);
        fast_zeroize_slice(&mut self.buffer);
        self.buffer_len = 0;
        self.total_len = 0;
    }

    #[cfg(test)]
    pub(crate) fn is_zeroized(&self) -> bool {
        self.h.iter().all(|&w| w == 0)
            && shacrypt_util::is_slice_zeroized(&self.buffer)
            && self.buffer_len == 0
            && self.total_len == 0
    }

    #[cfg(test)]
    pub(crate) fn zeroize_for_test(&mut self) {
        self.zeroize();
    }

    #[cfg(test)]
    pub(crate) fn buffered_len(&self) -> usize {
        self.buffer_len
    }
}

impl Drop for Sha512State {
    fn drop(&mut self) {
        self.zeroize();
    }
}

/// One-shot SHA-512
pub fn sha512(data: &[u8], out: &mut [u8; HASH_LEN]) {
    let mut state = Sha512State::new();
    state.update(data);
    state.finalize(out);
}

