// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Salt provisioning: explicit salts are truncated, missing salts are drawn
//! from a secure entropy source and rendered in the crypt alphabet.

use core::fmt;

use shacrypt_rand::EntropySource;
use shacrypt_sha512::HASH_LEN;
use shacrypt_util::fast_zeroize_slice;

use crate::alphabet::is_alphabet_byte;
use crate::encoding::{RAW_ENCODED_LEN, encode_into};
use crate::error::ShaCryptError;

/// Maximum salt length in bytes. Longer input is truncated, never rejected.
pub const SALT_MAX_LEN: usize = 16;

/// A `$6$` salt: at most 16 ASCII bytes.
///
/// Bytes are not checked against the crypt alphabet; use
/// [`is_alphabet_conformant`](Self::is_alphabet_conformant) when a caller
/// wants to enforce it.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Salt {
    bytes: [u8; SALT_MAX_LEN],
    len: usize,
}

impl Salt {
    /// Builds a salt from caller input, keeping at most the first 16 bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ShaCryptError::NonAsciiSalt`] if the kept bytes are not ASCII.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shacrypt::Salt;
    ///
    /// let salt = Salt::new(b"saltstringsaltstring").expect("ASCII salt");
    /// assert_eq!(salt.as_str(), "saltstringsaltst");
    /// ```
    pub fn new(input: &[u8]) -> Result<Self, ShaCryptError> {
        let kept = &input[..input.len().min(SALT_MAX_LEN)];

        if !kept.is_ascii() {
            return Err(ShaCryptError::NonAsciiSalt);
        }

        let mut bytes = [0u8; SALT_MAX_LEN];
        bytes[..kept.len()].copy_from_slice(kept);

        Ok(Self {
            bytes,
            len: kept.len(),
        })
    }

    /// Generates a fresh 16-character salt.
    ///
    /// Draws 64 bytes from `entropy`, encodes them with the digest encoder
    /// and keeps the first 16 characters. The random bytes and the scratch
    /// encoding are wiped before returning.
    ///
    /// # Errors
    ///
    /// Returns [`ShaCryptError::EntropySourceUnavailable`] if `entropy` fails.
    pub fn generate(entropy: &dyn EntropySource) -> Result<Self, ShaCryptError> {
        let mut seed = [0u8; HASH_LEN];
        let filled = entropy.fill_bytes(&mut seed);

        if let Err(err) = filled {
            fast_zeroize_slice(&mut seed);
            log::debug!("salt generation failed: {err}");
            return Err(err.into());
        }

        let mut encoded = [0u8; RAW_ENCODED_LEN];
        encode_into(&seed, &mut encoded);

        let mut bytes = [0u8; SALT_MAX_LEN];
        bytes.copy_from_slice(&encoded[..SALT_MAX_LEN]);

        fast_zeroize_slice(&mut seed);
        fast_zeroize_slice(&mut encoded);

        Ok(Self {
            bytes,
            len: SALT_MAX_LEN,
        })
    }

    /// The salt bytes mixed into the digest.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// The salt as it appears in the hash text.
    #[inline]
    pub fn as_str(&self) -> &str {
        // Construction only admits ASCII, which is always valid UTF-8.
        core::str::from_utf8(self.as_bytes()).unwrap_or_default()
    }

    /// Length in bytes, `0..=16`.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` for the empty salt.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if every byte belongs to the crypt alphabet.
    pub fn is_alphabet_conformant(&self) -> bool {
        self.as_bytes().iter().all(|&b| is_alphabet_byte(b))
    }
}

impl fmt::Display for Salt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Salt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Salt").field(&self.as_str()).finish()
    }
}

/// Returns the explicit salt (truncated to 16 bytes) or generates one.
///
/// Entropy is only consumed when `explicit` is `None`.
///
/// # Errors
///
/// - [`ShaCryptError::NonAsciiSalt`] for a non-ASCII explicit salt.
/// - [`ShaCryptError::EntropySourceUnavailable`] if generation fails.
pub fn provision_salt(
    explicit: Option<&[u8]>,
    entropy: &dyn EntropySource,
) -> Result<Salt, ShaCryptError> {
    match explicit {
        Some(input) => {
            log::trace!("using caller salt ({} bytes)", input.len());
            Salt::new(input)
        }
        None => {
            log::trace!("generating salt");
            Salt::generate(entropy)
        }
    }
}
