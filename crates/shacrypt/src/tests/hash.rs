// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use shacrypt_rand::test_utils::{MockEntropySource, MockEntropySourceBehaviour};

use crate::alphabet::is_alphabet_byte;
use crate::crypt::hash_password_with;
use crate::encoding::ENCODED_DIGEST_LEN;
use crate::hash::EncodedHash;
use crate::params::ShaCryptParams;
use crate::rounds::Rounds;
use crate::salt::Salt;

const CHECKSUM: &str =
    "svn8UoSVapNtMuq1ukKS4tPQd8iKwSMHWjl/O817G3uBnIFNjnQJuesI68u4OTLiBFdcbYEdFCoEOfaS35inz1";

#[test]
fn test_encoded_hash_default_rounds_omits_clause() {
    let hash = EncodedHash::new(
        Rounds::DEFAULT,
        Salt::new(b"saltstring").unwrap(),
        CHECKSUM.into(),
    );

    assert_eq!(hash.to_string(), format!("$6$saltstring${CHECKSUM}"));
}

#[test]
fn test_encoded_hash_explicit_rounds_clause() {
    for rounds in [1, 4999, 5001, 999_999_999] {
        let hash = EncodedHash::new(
            Rounds::new(rounds).unwrap(),
            Salt::new(b"saltstring").unwrap(),
            CHECKSUM.into(),
        );

        assert_eq!(
            hash.to_string(),
            format!("$6$rounds={rounds}$saltstring${CHECKSUM}")
        );
    }
}

#[test]
fn test_encoded_hash_empty_salt() {
    let hash = EncodedHash::new(Rounds::DEFAULT, Salt::new(b"").unwrap(), CHECKSUM.into());

    assert!(hash.to_string().starts_with("$6$$"));
}

#[test]
fn test_encoded_hash_accessors() {
    let salt = Salt::new(b"short").unwrap();
    let hash = EncodedHash::new(Rounds::new(77_777).unwrap(), salt, CHECKSUM.into());

    assert_eq!(hash.rounds().get(), 77_777);
    assert_eq!(hash.salt(), &salt);
    assert_eq!(hash.checksum(), CHECKSUM);
}

#[test]
fn test_encoded_hash_from_hashing_is_well_formed() {
    let mock = MockEntropySource::new(MockEntropySourceBehaviour::FailAlways);
    let hash = hash_password_with(b"gamer", Some(b"short"), &ShaCryptParams::new(), &mock)
        .expect("Failed to hash password");

    assert_eq!(hash.checksum().len(), ENCODED_DIGEST_LEN);
    assert!(hash.checksum().bytes().all(is_alphabet_byte));
}

#[test]
#[cfg(debug_assertions)]
#[should_panic]
fn test_encoded_hash_rejects_malformed_checksum() {
    let _ = EncodedHash::new(
        Rounds::DEFAULT,
        Salt::new(b"saltstring").unwrap(),
        "not-a-digest".into(),
    );
}
