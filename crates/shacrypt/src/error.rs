// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use shacrypt_rand::EntropyError;
use thiserror::Error;

/// Errors surfaced by `$6$` hash generation.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ShaCryptError {
    /// The secure random source could not supply bytes for a generated salt.
    #[error("entropy source unavailable while generating salt")]
    EntropySourceUnavailable(#[from] EntropyError),

    /// The round count is not a positive integer.
    #[error("invalid round count {rounds}: must be at least 1")]
    InvalidRoundCount {
        /// The rejected value
        rounds: u32,
    },

    /// The salt holds bytes outside ASCII and cannot appear in the hash text.
    #[error("salt contains non-ASCII bytes")]
    NonAsciiSalt,
}
