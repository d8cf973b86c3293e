// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// SHA-512 output size in bytes
pub const HASH_LEN: usize = 64;

/// SHA-512 block size in bytes
pub const BLOCK_LEN: usize = 128;

/// Size of the big-endian bit-length trailer appended during padding
pub(crate) const LENGTH_FIELD_LEN: usize = 16;
