// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Byte-pattern search over raw memory.

/// Returns the offset of the first occurrence of `needle` in `haystack`.
///
/// Returns `None` when either slice is empty or when `needle` is longer than
/// `haystack`. A single-byte needle degenerates into a byte scan. Longer needles
/// are checked at every start offset from `0` to `haystack.len() - needle.len()`,
/// rejecting on the first byte before comparing the whole window.
///
/// To search only a prefix of a region, pass the truncated slice: a match that
/// starts inside the prefix but ends past it is not reported.
///
/// # Example
///
/// ```rust
/// use fixbuf::memmem;
///
/// let haystack = [0x11, 0x12, 0x13, 0x14];
/// assert_eq!(memmem(&haystack, &[0x13]), Some(2));
/// assert_eq!(memmem(&haystack, &[0x12, 0x13]), Some(1));
/// assert_eq!(memmem(&haystack, &[]), None);
///
/// let alphabet = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// assert_eq!(memmem(&alphabet[..10], b"U"), None);
/// ```
pub fn memmem(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    let (&first, _) = needle.split_first()?;

    if haystack.is_empty() || needle.len() > haystack.len() {
        return None;
    }

    if needle.len() == 1 {
        return haystack.iter().position(|&byte| byte == first);
    }

    let last = haystack.len() - needle.len();

    (0..=last).find(|&start| {
        haystack[start] == first && &haystack[start..start + needle.len()] == needle
    })
}
