// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use proptest::prelude::*;

use crate::error::EntropyError;
use crate::support::test_utils::{MockEntropySource, MockEntropySourceBehaviour};
use crate::traits::EntropySource;

#[test]
fn test_mock_system_behaviour_succeeds() {
    let mock = MockEntropySource::new(MockEntropySourceBehaviour::System);
    let mut seed = [0u8; 64];

    assert!(mock.fill_bytes(&mut seed).is_ok());
    // 2^-512 chance of a false failure
    assert!(seed.iter().any(|&b| b != 0));
}

#[test]
fn test_mock_fail_always() {
    let mock = MockEntropySource::new(MockEntropySourceBehaviour::FailAlways);
    let mut seed = [0u8; 64];

    assert_eq!(
        mock.fill_bytes(&mut seed),
        Err(EntropyError::EntropyNotAvailable)
    );
    assert_eq!(
        mock.fill_bytes(&mut seed),
        Err(EntropyError::EntropyNotAvailable)
    );
    assert_eq!(mock.call_count(), 2);
}

#[test]
fn test_mock_fail_at_nth_only_fails_that_call() {
    let mock = MockEntropySource::new(MockEntropySourceBehaviour::FailAtNthFillBytes(2));
    let mut seed = [0u8; 64];

    assert!(mock.fill_bytes(&mut seed).is_ok());
    assert_eq!(
        mock.fill_bytes(&mut seed),
        Err(EntropyError::EntropyNotAvailable)
    );
    assert!(mock.fill_bytes(&mut seed).is_ok());
}

#[test]
fn test_mock_counts_calls_and_bytes() {
    let mock = MockEntropySource::new(MockEntropySourceBehaviour::Fixed(7));

    assert_eq!(mock.call_count(), 0);
    assert_eq!(mock.bytes_requested(), 0);

    mock.fill_bytes(&mut [0u8; 64]).unwrap();
    mock.fill_bytes(&mut [0u8; 16]).unwrap();

    assert_eq!(mock.call_count(), 2);
    assert_eq!(mock.bytes_requested(), 80);
}

#[test]
fn test_mock_counts_failed_calls() {
    let mock = MockEntropySource::new(MockEntropySourceBehaviour::FailAlways);

    let _ = mock.fill_bytes(&mut [0u8; 64]);

    assert_eq!(mock.call_count(), 1);
    assert_eq!(mock.bytes_requested(), 64);
}

proptest! {
    #[test]
    fn prop_mock_fixed_fills_every_byte(byte in any::<u8>(), len in 0usize..256) {
        let mock = MockEntropySource::new(MockEntropySourceBehaviour::Fixed(byte));
        let mut buf = vec![!byte; len];

        prop_assert!(mock.fill_bytes(&mut buf).is_ok());
        prop_assert!(buf.iter().all(|&b| b == byte));
    }
}
