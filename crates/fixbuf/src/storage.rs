// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! PoolStorage - compile-time sized backing storage for a buffer pool.

/// `N` contiguous chunks of `SIZE` bytes, zero-filled on creation.
///
/// Declare it wherever the storage must live (a `static`, the stack, an arena)
/// and hand it to [`BufferPool::with_storage`](crate::BufferPool::with_storage)
/// together with `[Buffer::UNINIT; N]` control blocks.
///
/// # Example
///
/// ```rust
/// use fixbuf::PoolStorage;
///
/// let mut storage = PoolStorage::<4, 16>::new();
/// assert_eq!(storage.len(), 4);
/// assert_eq!(storage.chunk_size(), 16);
/// assert_eq!(storage.as_mut_bytes().len(), 64);
/// ```
pub struct PoolStorage<const N: usize, const SIZE: usize> {
    chunks: [[u8; SIZE]; N],
}

impl<const N: usize, const SIZE: usize> PoolStorage<N, SIZE> {
    /// Creates zero-filled storage.
    pub const fn new() -> Self {
        Self {
            chunks: [[0; SIZE]; N],
        }
    }

    /// Returns the number of chunks.
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    /// Returns `true` if there are no chunks.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Returns the size of each chunk in bytes.
    #[inline]
    pub const fn chunk_size(&self) -> usize {
        SIZE
    }

    /// Returns chunk `index`, or `None` if out of range.
    pub fn chunk(&self, index: usize) -> Option<&[u8]> {
        self.chunks.get(index).map(|chunk| chunk.as_slice())
    }

    /// Returns all chunks as one contiguous region.
    pub fn as_bytes(&self) -> &[u8] {
        self.chunks.as_flattened()
    }

    /// Returns all chunks as one contiguous mutable region.
    pub fn as_mut_bytes(&mut self) -> &mut [u8] {
        self.chunks.as_flattened_mut()
    }

    pub(crate) fn chunks_mut(&mut self) -> &mut [[u8; SIZE]; N] {
        &mut self.chunks
    }
}

impl<const N: usize, const SIZE: usize> Default for PoolStorage<N, SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize, const SIZE: usize> core::fmt::Debug for PoolStorage<N, SIZE> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PoolStorage")
            .field("chunks", &N)
            .field("chunk_size", &SIZE)
            .finish_non_exhaustive()
    }
}
