// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::search::memmem;

// =============================================================================
// Degenerate inputs
// =============================================================================

#[test]
fn test_memmem_empty_haystack() {
    assert_eq!(memmem(&[], &[0x13]), None);
}

#[test]
fn test_memmem_empty_needle() {
    assert_eq!(memmem(&[0x11, 0x12, 0x13, 0x14], &[]), None);
}

#[test]
fn test_memmem_needle_longer_than_haystack() {
    assert_eq!(memmem(b"abc", b"abcd"), None);
}

// =============================================================================
// Single-byte needle
// =============================================================================

#[test]
fn test_memmem_single_byte_match() {
    let haystack = [0x11u8, 0x12, 0x13, 0x14];

    assert_eq!(memmem(&haystack, &[0x13]), Some(2));
    assert_eq!(memmem(&haystack, &[0x11]), Some(0));
    assert_eq!(memmem(&haystack, &[0x14]), Some(3));
}

#[test]
fn test_memmem_single_byte_first_occurrence() {
    assert_eq!(memmem(b"xaxax", b"a"), Some(1));
}

#[test]
fn test_memmem_respects_truncated_length() {
    let alphabet = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

    assert_eq!(memmem(&alphabet[..10], b"U"), None);
    assert_eq!(memmem(alphabet, b"U"), Some(20));
}

// =============================================================================
// Multi-byte needle
// =============================================================================

#[test]
fn test_memmem_multi_byte_match() {
    assert_eq!(memmem(b"hello world", b"world"), Some(6));
    assert_eq!(memmem(b"hello world", b"hello"), Some(0));
}

#[test]
fn test_memmem_needle_equals_haystack() {
    assert_eq!(memmem(b"abcd", b"abcd"), Some(0));
}

#[test]
fn test_memmem_returns_lowest_offset() {
    assert_eq!(memmem(b"abababab", b"bab"), Some(1));
}

#[test]
fn test_memmem_first_byte_matches_but_rest_differs() {
    assert_eq!(memmem(b"aXaYaZab", b"ab"), Some(6));
}

#[test]
fn test_memmem_match_straddling_truncation_is_not_found() {
    let data = b"0123456789";

    assert_eq!(memmem(&data[..5], b"45"), None);
    assert_eq!(memmem(&data[..6], b"45"), Some(4));
}

#[test]
fn test_memmem_absent() {
    assert_eq!(memmem(b"hello world", b"worlds"), None);
    assert_eq!(memmem(b"hello world", b"xyz"), None);
}
