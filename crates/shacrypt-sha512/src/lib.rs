// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-512 with secure memory handling
//!
//! Implementation per FIPS 180-4 and RFC 6234. The streaming state lets
//! callers hash a message assembled from many slices without first
//! concatenating them, and wipes its chaining words and buffer once the
//! digest has been produced.
//!
//! References:
//! - RFC 6234: US Secure Hash Algorithms (SHA and SHA-based HMAC and HKDF)
//!   <https://datatracker.ietf.org/doc/html/rfc6234>
//! - FIPS 180-4: Secure Hash Standard (SHS)
//!   <https://nvlpubs.nist.gov/nistpubs/fips/nist.fips.180-4.pdf>

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod consts;
mod sha512;

pub use consts::{BLOCK_LEN, HASH_LEN};
pub use sha512::{Sha512State, sha512};
