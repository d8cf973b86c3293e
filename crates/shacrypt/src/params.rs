// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::rounds::{Rounds, RoundsPolicy};

/// Call-level knobs for [`hash_password_with`](crate::hash_password_with).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShaCryptParams {
    /// Requested round count (default 5000).
    pub rounds: Rounds,
    /// How the requested count maps to the count used (default as given).
    pub rounds_policy: RoundsPolicy,
}

impl ShaCryptParams {
    /// Default parameters: 5000 rounds, used as given.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the requested round count.
    pub fn with_rounds(mut self, rounds: Rounds) -> Self {
        self.rounds = rounds;
        self
    }

    /// Sets the round-count policy.
    pub fn with_rounds_policy(mut self, policy: RoundsPolicy) -> Self {
        self.rounds_policy = policy;
        self
    }

    /// The round count the digest iterator will run.
    pub fn effective_rounds(&self) -> Rounds {
        self.rounds.with_policy(self.rounds_policy)
    }
}
