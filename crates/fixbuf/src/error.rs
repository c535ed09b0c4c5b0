// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for fixbuf.

use thiserror::Error;

/// Errors that can occur when working with buffers.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum BufferError {
    /// The destination does not have enough free bytes for the copy.
    #[error("insufficient space: {needed} bytes needed, {available} available")]
    InsufficientSpace {
        /// Bytes the operation has to write.
        needed: usize,
        /// Bytes still free in the destination.
        available: usize,
    },

    /// The underlying copy moved zero bytes for a non-empty request.
    #[error("copy failed: no bytes were written")]
    CopyFailed,

    /// The storage region cannot hold every requested chunk.
    #[error("storage too small: {required} bytes required, {available} available")]
    StorageTooSmall {
        /// `element_count * element_size`.
        required: usize,
        /// Length of the supplied region.
        available: usize,
    },

    /// Integer overflow when computing the partitioned storage length.
    ///
    /// Only reachable with element counts and sizes whose product exceeds
    /// `usize::MAX`; no real region can be that large.
    #[error("integer overflow: element_count * element_size exceeds usize::MAX")]
    Overflow,
}

/// Errors that can occur when working with buffer pools.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum PoolError {
    /// Fewer control blocks were supplied than pool slots requested.
    #[error("block count mismatch: {list_n} slots requested, {blocks} control blocks supplied")]
    BlockCountMismatch {
        /// Requested slot count.
        list_n: usize,
        /// Length of the supplied control-block array.
        blocks: usize,
    },

    /// A buffer operation failed.
    #[error("BufferError: {0}")]
    Buffer(#[from] BufferError),

    /// The handle was not issued by this pool.
    #[error("handle does not belong to this pool")]
    UnknownHandle,

    /// The same slot was given as source and destination.
    #[error("source and destination handles name the same slot")]
    AliasedHandles,
}
