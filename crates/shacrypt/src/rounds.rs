// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;

use crate::error::ShaCryptError;

/// Round count implied when a `$6$` string carries no `rounds=` clause.
pub const DEFAULT_ROUNDS: u32 = 5000;

/// Lower bound documented for the scheme (applied only by [`RoundsPolicy::Clamped`]).
pub const MIN_ROUNDS: u32 = 1000;

/// Upper bound documented for the scheme (applied only by [`RoundsPolicy::Clamped`]).
pub const MAX_ROUNDS: u32 = 999_999_999;

/// How a requested round count is mapped onto the count actually used.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RoundsPolicy {
    /// Use the requested count verbatim, however small or large.
    #[default]
    AsGiven,
    /// Clamp into `MIN_ROUNDS..=MAX_ROUNDS`, as glibc `crypt(3)` does.
    Clamped,
}

/// Number of mixing iterations of the digest iterator. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rounds(u32);

impl Rounds {
    /// The scheme default, 5000.
    pub const DEFAULT: Rounds = Rounds(DEFAULT_ROUNDS);

    /// Creates a round count.
    ///
    /// # Errors
    ///
    /// Returns [`ShaCryptError::InvalidRoundCount`] for zero.
    pub const fn new(rounds: u32) -> Result<Self, ShaCryptError> {
        if rounds == 0 {
            return Err(ShaCryptError::InvalidRoundCount { rounds });
        }

        Ok(Self(rounds))
    }

    /// Returns the count as an integer.
    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Returns `true` when the count equals [`DEFAULT_ROUNDS`], i.e. the
    /// `rounds=` clause is omitted from the hash text.
    #[inline]
    pub const fn is_default(self) -> bool {
        self.0 == DEFAULT_ROUNDS
    }

    /// Applies `policy` to this count.
    pub fn with_policy(self, policy: RoundsPolicy) -> Self {
        match policy {
            RoundsPolicy::AsGiven => self,
            RoundsPolicy::Clamped => Self(self.0.clamp(MIN_ROUNDS, MAX_ROUNDS)),
        }
    }
}

impl Default for Rounds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u32> for Rounds {
    type Error = ShaCryptError;

    fn try_from(rounds: u32) -> Result<Self, Self::Error> {
        Self::new(rounds)
    }
}

impl fmt::Display for Rounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
