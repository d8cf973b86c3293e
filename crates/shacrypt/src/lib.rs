// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # shacrypt
//!
//! SHA-512 based `crypt` password hashing, the `$6$` scheme found in
//! `/etc/shadow` and understood by glibc's `crypt(3)`, `usermod -p` and
//! `chpasswd -e`.
//!
//! The computation is a pure function of (secret, salt, rounds). The only
//! side effect is drawing entropy when no salt is supplied, and that failure
//! is always surfaced to the caller.
//!
//! ## Pipeline
//!
//! 1. [`Salt`]: caller-supplied (truncated to 16 bytes) or generated from
//!    64 random bytes pushed through the scheme encoder.
//! 2. [`iterate`]: the digest iterator, `rounds` SHA-512 invocations over a
//!    round-dependent mix of the password, salt and previous digest.
//! 3. [`encode_digest`]: the scheme's permuted base64 rendering of the
//!    final 64-byte digest (86 characters).
//! 4. [`EncodedHash`]: assembly into `$6$[rounds=N$]<salt>$<hash>`.
//!
//! ## Example
//!
//! ```rust
//! use shacrypt::{DEFAULT_ROUNDS, hash_password};
//!
//! let hash = hash_password(b"Hello world!", Some(b"saltstring"), DEFAULT_ROUNDS)
//!     .expect("Failed to hash password");
//!
//! assert_eq!(
//!     hash,
//!     "$6$saltstring$svn8UoSVapNtMuq1ukKS4tPQd8iKwSMHWjl/O817G3uBnIFNjnQJuesI68u4OTLiBFdcbYEdFCoEOfaS35inz1"
//! );
//! ```
//!
//! ## What this crate does not do
//!
//! No verification, no other crypt schemes, no account or credential
//! storage.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod alphabet;
mod crypt;
mod digest;
mod encoding;
mod error;
mod hash;
mod params;
mod rounds;
mod salt;

pub use alphabet::{ALPHABET, is_alphabet_byte};
pub use crypt::{hash_password, hash_password_with};
pub use digest::iterate;
pub use encoding::{ENCODED_DIGEST_LEN, encode_digest};
pub use error::ShaCryptError;
pub use hash::{EncodedHash, ROUNDS_PARAM, SCHEME_PREFIX};
pub use params::ShaCryptParams;
pub use rounds::{DEFAULT_ROUNDS, MAX_ROUNDS, MIN_ROUNDS, Rounds, RoundsPolicy};
pub use salt::{SALT_MAX_LEN, Salt, provision_salt};

pub use shacrypt_rand::{EntropyError, EntropySource, SystemEntropySource};
pub use shacrypt_sha512::HASH_LEN;
