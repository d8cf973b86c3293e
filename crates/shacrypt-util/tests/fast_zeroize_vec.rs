// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
mod fast_zeroize_vec_tests {
    use shacrypt_util::{fast_zeroize_vec, is_vec_fully_zeroized};

    #[test]
    fn test_fast_zeroize_vec_clears_spare_capacity() {
        let mut vec = vec![0xFFu8; 100];
        vec.truncate(10);

        assert!(!is_vec_fully_zeroized(&vec));

        fast_zeroize_vec(&mut vec);

        assert_eq!(vec.len(), 10);
        assert!(is_vec_fully_zeroized(&vec));
    }

    #[test]
    fn test_fast_zeroize_vec_empty_no_alloc() {
        let mut vec: Vec<u8> = Vec::new();
        fast_zeroize_vec(&mut vec);
        assert!(is_vec_fully_zeroized(&vec));
    }

    #[test]
    fn test_fast_zeroize_vec_keeps_length() {
        let mut vec = b"repeated password material".to_vec();
        let len = vec.len();

        fast_zeroize_vec(&mut vec);

        assert_eq!(vec.len(), len);
        assert!(vec.iter().all(|&b| b == 0));
    }
}
