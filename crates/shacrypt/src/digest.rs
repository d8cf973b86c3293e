// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! The SHA-512 crypt digest iterator.
//!
//! Reference: Ulrich Drepper, "Unix crypt using SHA-256 and SHA-512"
//! <https://akkadia.org/drepper/SHA-crypt.txt>, steps 1-21.
//!
//! Every message is streamed into [`Sha512State`] piece by piece; the bytes
//! hashed are exactly the concatenations the scheme defines.

use alloc::vec::Vec;

use shacrypt_sha512::{HASH_LEN, Sha512State};
use shacrypt_util::{fast_zeroize_slice, fast_zeroize_vec};

use crate::rounds::Rounds;
use crate::salt::Salt;

/// Feeds the first `len` bytes of `block` repeated end to end.
fn update_repeated(state: &mut Sha512State, block: &[u8; HASH_LEN], len: usize) {
    for _ in 0..len / HASH_LEN {
        state.update(block);
    }
    state.update(&block[..len % HASH_LEN]);
}

/// Materialises `block` repeated to exactly `len` bytes.
fn repeat_to_length(block: &[u8; HASH_LEN], len: usize) -> Vec<u8> {
    block.iter().copied().cycle().take(len).collect()
}

/// Runs the digest iterator and returns the final 64-byte digest.
///
/// Cost is linear in `rounds` with no shortcut. All intermediate digests and
/// the derived `P`/`S` byte sequences are wiped before returning.
///
/// # Example
///
/// ```rust
/// use shacrypt::{Rounds, Salt, encode_digest, iterate};
///
/// let salt = Salt::new(b"saltstring").unwrap();
/// let digest = iterate(b"Hello world!", &salt, Rounds::DEFAULT);
///
/// assert!(encode_digest(&digest).starts_with("svn8UoSVapNtMuq1ukKS4tPQ"));
/// ```
pub fn iterate(secret: &[u8], salt: &Salt, rounds: Rounds) -> [u8; HASH_LEN] {
    let salt = salt.as_bytes();
    let secret_len = secret.len();

    // B = SHA512(secret || salt || secret)
    let mut b = [0u8; HASH_LEN];
    let mut state = Sha512State::new();
    state.update(secret);
    state.update(salt);
    state.update(secret);
    state.finalize(&mut b);

    // A = SHA512(secret || salt || B* || bits of len(secret) as B/secret)
    let mut a = [0u8; HASH_LEN];
    let mut state = Sha512State::new();
    state.update(secret);
    state.update(salt);
    update_repeated(&mut state, &b, secret_len);

    let mut v = secret_len;
    while v > 0 {
        if v & 1 == 1 {
            state.update(&b);
        } else {
            state.update(secret);
        }
        v >>= 1;
    }
    state.finalize(&mut a);
    fast_zeroize_slice(&mut b);

    // DP = SHA512(secret repeated len(secret) times)
    let mut dp = [0u8; HASH_LEN];
    let mut state = Sha512State::new();
    for _ in 0..secret_len {
        state.update(secret);
    }
    state.finalize(&mut dp);
    let mut p = repeat_to_length(&dp, secret_len);
    fast_zeroize_slice(&mut dp);

    // DS = SHA512(salt repeated 16 + A[0] times)
    let mut ds = [0u8; HASH_LEN];
    let mut state = Sha512State::new();
    for _ in 0..16 + usize::from(a[0]) {
        state.update(salt);
    }
    state.finalize(&mut ds);
    let mut s = repeat_to_length(&ds, salt.len());
    fast_zeroize_slice(&mut ds);

    let mut c = a;
    fast_zeroize_slice(&mut a);

    for round in 0..rounds.get() {
        let odd = round & 1 == 1;
        let mut state = Sha512State::new();

        state.update(if odd { &p[..] } else { &c[..] });
        if round % 3 != 0 {
            state.update(&s);
        }
        if round % 7 != 0 {
            state.update(&p);
        }
        state.update(if odd { &c[..] } else { &p[..] });

        state.finalize(&mut c);
    }

    fast_zeroize_vec(&mut p);
    fast_zeroize_vec(&mut s);

    c
}
