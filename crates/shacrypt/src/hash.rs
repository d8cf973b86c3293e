// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::string::String;
use core::fmt;

use crate::alphabet::is_alphabet_byte;
use crate::encoding::ENCODED_DIGEST_LEN;
use crate::rounds::Rounds;
use crate::salt::Salt;

/// Scheme identifier opening every SHA-512 crypt string.
pub const SCHEME_PREFIX: &str = "$6$";

/// Parameter name of the optional round-count clause.
pub const ROUNDS_PARAM: &str = "rounds=";

/// An assembled `$6$` hash.
///
/// Renders as `$6$<salt>$<hash>` when the round count is exactly 5000 and as
/// `$6$rounds=<N>$<salt>$<hash>` otherwise. The clause is omitted only at
/// exactly the default; verifiers parse the literal text.
///
/// Values come only from [`hash_password_with`](crate::hash_password_with),
/// so the checksum is always a well-formed encoded digest:
///
/// ```rust,compile_fail
/// use shacrypt::{EncodedHash, Rounds, Salt};
///
/// let salt = Salt::new(b"saltstring").unwrap();
/// let _ = EncodedHash::new(Rounds::DEFAULT, salt, "not-a-digest".into());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedHash {
    rounds: Rounds,
    salt: Salt,
    checksum: String,
}

impl EncodedHash {
    /// Assembles a hash from its parts. `checksum` must be the output of
    /// [`encode_digest`](crate::encode_digest).
    pub(crate) fn new(rounds: Rounds, salt: Salt, checksum: String) -> Self {
        debug_assert_eq!(checksum.len(), ENCODED_DIGEST_LEN);
        debug_assert!(checksum.bytes().all(is_alphabet_byte));

        Self {
            rounds,
            salt,
            checksum,
        }
    }

    /// Round count used to compute the digest.
    pub fn rounds(&self) -> Rounds {
        self.rounds
    }

    /// Salt mixed into the digest.
    pub fn salt(&self) -> &Salt {
        &self.salt
    }

    /// Encoded digest segment.
    pub fn checksum(&self) -> &str {
        &self.checksum
    }
}

impl fmt::Display for EncodedHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(SCHEME_PREFIX)?;
        if !self.rounds.is_default() {
            write!(f, "{ROUNDS_PARAM}{}$", self.rounds)?;
        }
        write!(f, "{}${}", self.salt, self.checksum)
    }
}
