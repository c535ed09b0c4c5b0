// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! BufferPool - bounded checkout/return over caller-owned buffers.
//!
//! The pool borrows both the control blocks and the storage they point into.
//! Checkout is a linear scan for the lowest free slot; there is no locking, so
//! sharing a pool between threads requires external mutual exclusion.

use core::sync::atomic::{AtomicUsize, Ordering};

use tracing::{debug, trace};

use crate::buffer::Buffer;
use crate::error::PoolError;
use crate::storage::PoolStorage;

/// Pool ids are never reused: a handle only matches the pool instance that issued it,
/// even after the blocks are rebound by a new pool.
static NEXT_POOL_ID: AtomicUsize = AtomicUsize::new(1);

/// Exclusive token for one checked-out pool slot.
///
/// Handles are neither `Clone` nor `Copy`: holding one is holding the slot. Give
/// it back with [`BufferPool::list_return`], which clears it.
#[derive(Debug, PartialEq, Eq)]
pub struct BufferHandle {
    pool: usize,
    slot: usize,
}

impl BufferHandle {
    /// Returns the index of the slot this handle names.
    #[inline]
    pub fn slot(&self) -> usize {
        self.slot
    }
}

/// A bounded pool of buffers, each bound to its own equal-sized chunk of storage.
///
/// # Example
///
/// ```rust
/// use fixbuf::{Buffer, BufferPool, PoolError};
///
/// fn example() -> Result<(), PoolError> {
///     let mut data = [0u8; 32];
///     let mut blocks = [Buffer::UNINIT; 2];
///     let mut pool = BufferPool::list_init(2, &mut blocks, &mut data, 16)?;
///
///     let first = pool.list_get();
///     let second = pool.list_get();
///     assert_eq!(first.as_ref().map(|h| h.slot()), Some(0));
///     assert_eq!(second.as_ref().map(|h| h.slot()), Some(1));
///
///     // Exhausted
///     assert!(pool.list_get().is_none());
///     Ok(())
/// }
/// # example().unwrap();
/// ```
pub struct BufferPool<'p, 'd> {
    id: usize,
    buffers: &'p mut [Buffer<'d>],
}

impl<'p, 'd> BufferPool<'p, 'd> {
    /// Binds the first `list_n` control blocks of `blocks` to consecutive
    /// `data_n`-byte chunks of `data`. All slots start free.
    ///
    /// # Errors
    ///
    /// - [`PoolError::BlockCountMismatch`] if `blocks` has fewer than `list_n` entries.
    /// - [`PoolError::Buffer`] if `data` cannot hold `list_n * data_n` bytes.
    pub fn list_init(
        list_n: usize,
        blocks: &'p mut [Buffer<'d>],
        data: &'d mut [u8],
        data_n: usize,
    ) -> Result<Self, PoolError> {
        if blocks.len() < list_n {
            return Err(PoolError::BlockCountMismatch {
                list_n,
                blocks: blocks.len(),
            });
        }

        let (buffers, _) = blocks.split_at_mut(list_n);
        Buffer::init_array(buffers, data, data_n)?;

        let id = next_pool_id();
        debug!(pool = id, slots = list_n, chunk_size = data_n, "buffer pool initialized");

        Ok(Self { id, buffers })
    }

    /// Binds `N` control blocks to the `N` chunks of `storage`.
    ///
    /// Infallible: the const generics guarantee the sizes line up.
    pub fn with_storage<const N: usize, const SIZE: usize>(
        blocks: &'p mut [Buffer<'d>; N],
        storage: &'d mut PoolStorage<N, SIZE>,
    ) -> Self {
        for (buffer, chunk) in blocks.iter_mut().zip(storage.chunks_mut().iter_mut()) {
            buffer.init(chunk);
        }

        let id = next_pool_id();
        debug!(pool = id, slots = N, chunk_size = SIZE, "buffer pool initialized");

        Self {
            id,
            buffers: blocks,
        }
    }

    fn owns(&self, handle: &BufferHandle) -> bool {
        handle.pool == self.id && handle.slot < self.buffers.len()
    }

    /// Checks out the lowest-index free slot.
    ///
    /// The buffer is reset (cursor back to 0, storage untouched) before the handle
    /// is returned. Returns `None` when every slot is checked out.
    pub fn list_get(&mut self) -> Option<BufferHandle> {
        let pool = self.id;
        let slots = self.buffers.len();

        let Some((slot, buffer)) = self
            .buffers
            .iter_mut()
            .enumerate()
            .find(|(_, buffer)| !buffer.is_checked_out())
        else {
            debug!(slots, "buffer pool exhausted");
            return None;
        };

        buffer.set_checked_out(true);
        buffer.reset();

        trace!(slot, "buffer checked out");

        Some(BufferHandle { pool, slot })
    }

    /// Returns a checked-out slot to the pool and clears `handle`.
    ///
    /// No-op if `handle` is `None`. A handle issued by another pool is ignored and
    /// left as it is.
    pub fn list_return(&mut self, handle: &mut Option<BufferHandle>) {
        let Some(h) = handle.as_ref() else {
            return;
        };

        if !self.owns(h) {
            trace!(slot = h.slot, "ignoring handle from another pool");
            return;
        }

        let slot = h.slot;
        let buffer = &mut self.buffers[slot];
        *handle = None;

        if !buffer.is_checked_out() {
            trace!(slot, "returned slot was already free");
            return;
        }

        buffer.set_checked_out(false);

        trace!(slot, "buffer returned");
    }

    /// Returns the buffer a handle names, if the handle belongs to this pool.
    pub fn get(&self, handle: &BufferHandle) -> Option<&Buffer<'d>> {
        if !self.owns(handle) {
            return None;
        }

        self.buffers.get(handle.slot)
    }

    /// Returns the buffer a handle names mutably, if the handle belongs to this pool.
    pub fn get_mut(&mut self, handle: &BufferHandle) -> Option<&mut Buffer<'d>> {
        if !self.owns(handle) {
            return None;
        }

        self.buffers.get_mut(handle.slot)
    }

    /// Appends the used bytes of the `src` slot to the `dst` slot.
    ///
    /// # Errors
    ///
    /// - [`PoolError::UnknownHandle`] if either handle belongs to another pool.
    /// - [`PoolError::AliasedHandles`] if both handles name the same slot.
    /// - [`PoolError::Buffer`] if [`Buffer::append`] fails; `dst` is unchanged.
    pub fn append(&mut self, dst: &BufferHandle, src: &BufferHandle) -> Result<(), PoolError> {
        if !self.owns(dst) || !self.owns(src) {
            return Err(PoolError::UnknownHandle);
        }

        if dst.slot == src.slot {
            return Err(PoolError::AliasedHandles);
        }

        if dst.slot < src.slot {
            let (low, high) = self.buffers.split_at_mut(src.slot);
            low[dst.slot].append(&high[0])?;
        } else {
            let (low, high) = self.buffers.split_at_mut(dst.slot);
            high[0].append(&low[src.slot])?;
        }

        Ok(())
    }

    /// Returns the number of slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.buffers.len()
    }

    /// Returns `true` if the pool has no slots.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffers.is_empty()
    }

    /// Returns the number of slots not checked out.
    pub fn available(&self) -> usize {
        self.buffers
            .iter()
            .filter(|buffer| !buffer.is_checked_out())
            .count()
    }
}

fn next_pool_id() -> usize {
    NEXT_POOL_ID.fetch_add(1, Ordering::Relaxed)
}

impl core::fmt::Debug for BufferPool<'_, '_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BufferPool")
            .field("len", &self.len())
            .field("available", &self.available())
            .finish_non_exhaustive()
    }
}
