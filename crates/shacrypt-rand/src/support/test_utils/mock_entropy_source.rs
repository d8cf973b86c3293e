// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::cell::Cell;

use crate::error::EntropyError;
use crate::system::SystemEntropySource;
use crate::traits::EntropySource;

/// What a [`MockEntropySource`] does on each `fill_bytes` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockEntropySourceBehaviour {
    /// Delegate to the OS CSPRNG.
    System,
    /// Every call fails.
    FailAlways,
    /// Only the Nth call fails (1-indexed).
    FailAtNthFillBytes(usize),
    /// Fill with a constant byte, for reproducible generated salts.
    Fixed(u8),
}

/// Entropy source double for salt-generation tests.
///
/// Records how many calls were made and how many bytes were requested in
/// total, so tests can assert that an explicit salt never touches entropy
/// and that a generated one draws exactly 64 bytes.
#[derive(Debug)]
pub struct MockEntropySource {
    behaviour: MockEntropySourceBehaviour,
    calls: Cell<usize>,
    bytes_requested: Cell<usize>,
}

impl MockEntropySource {
    /// Creates a mock with the given behaviour and zeroed counters.
    pub fn new(behaviour: MockEntropySourceBehaviour) -> Self {
        Self {
            behaviour,
            calls: Cell::new(0),
            bytes_requested: Cell::new(0),
        }
    }

    /// Number of `fill_bytes` calls so far, failed ones included.
    pub fn call_count(&self) -> usize {
        self.calls.get()
    }

    /// Sum of destination lengths over all calls.
    pub fn bytes_requested(&self) -> usize {
        self.bytes_requested.get()
    }
}

impl EntropySource for MockEntropySource {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        let call = self.calls.get() + 1;
        self.calls.set(call);
        self.bytes_requested.set(self.bytes_requested.get() + dest.len());

        match self.behaviour {
            MockEntropySourceBehaviour::System => SystemEntropySource {}.fill_bytes(dest),
            MockEntropySourceBehaviour::FailAlways => Err(EntropyError::EntropyNotAvailable),
            MockEntropySourceBehaviour::FailAtNthFillBytes(n) if call == n => {
                Err(EntropyError::EntropyNotAvailable)
            }
            MockEntropySourceBehaviour::FailAtNthFillBytes(_) => {
                SystemEntropySource {}.fill_bytes(dest)
            }
            MockEntropySourceBehaviour::Fixed(byte) => {
                dest.fill(byte);
                Ok(())
            }
        }
    }
}
