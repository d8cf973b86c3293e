// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::string::{String, ToString};

use shacrypt_rand::{EntropySource, SystemEntropySource};
use shacrypt_util::fast_zeroize_slice;

use crate::digest::iterate;
use crate::encoding::encode_digest;
use crate::error::ShaCryptError;
use crate::hash::EncodedHash;
use crate::params::ShaCryptParams;
use crate::rounds::Rounds;
use crate::salt::provision_salt;

/// Hashes `secret` into a `$6$` string.
///
/// `salt` is truncated to 16 bytes; `None` generates one from the OS CSPRNG.
/// The secret is raw bytes; apply any text encoding (e.g. UTF-8) first.
///
/// # Errors
///
/// - [`ShaCryptError::InvalidRoundCount`] when `rounds` is zero.
/// - [`ShaCryptError::NonAsciiSalt`] for a non-ASCII explicit salt.
/// - [`ShaCryptError::EntropySourceUnavailable`] when salt generation fails.
///
/// # Example
///
/// ```rust
/// use shacrypt::hash_password;
///
/// let hash = hash_password(b"Hello world!", None, 10_000).expect("Failed to hash password");
/// assert!(hash.starts_with("$6$rounds=10000$"));
/// ```
pub fn hash_password(
    secret: &[u8],
    salt: Option<&[u8]>,
    rounds: u32,
) -> Result<String, ShaCryptError> {
    let params = ShaCryptParams::new().with_rounds(Rounds::new(rounds)?);
    let hash = hash_password_with(secret, salt, &params, &SystemEntropySource {})?;

    Ok(hash.to_string())
}

/// Hashes `secret` with explicit parameters and entropy source.
///
/// # Errors
///
/// - [`ShaCryptError::NonAsciiSalt`] for a non-ASCII explicit salt.
/// - [`ShaCryptError::EntropySourceUnavailable`] when salt generation fails.
pub fn hash_password_with(
    secret: &[u8],
    salt: Option<&[u8]>,
    params: &ShaCryptParams,
    entropy: &dyn EntropySource,
) -> Result<EncodedHash, ShaCryptError> {
    let salt = provision_salt(salt, entropy)?;
    let rounds = params.effective_rounds();

    if rounds != params.rounds {
        log::debug!("round count {} clamped to {}", params.rounds, rounds);
    }
    log::debug!(
        "computing $6$ hash: {} rounds, {}-byte salt",
        rounds,
        salt.len()
    );

    let mut digest = iterate(secret, &salt, rounds);
    let checksum = encode_digest(&digest);
    fast_zeroize_slice(&mut digest);

    Ok(EncodedHash::new(rounds, salt, checksum))
}
