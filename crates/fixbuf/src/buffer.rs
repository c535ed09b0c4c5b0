// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Buffer - control block over caller-owned fixed storage.
//!
//! The control block borrows its storage and only tracks how much of it has been
//! written. It never grows, shrinks or reallocates.

use tracing::debug;
use zeroize::Zeroize;

#[cfg(any(test, feature = "test-utils"))]
use crate::behaviour::BufferBehaviour;
use crate::error::BufferError;

/// Bound storage plus the count of bytes written into it.
///
/// Invariant: `used <= data.len()`. The cursor is `used` itself.
struct Region<'d> {
    data: &'d mut [u8],
    used: usize,
}

/// A fixed-capacity byte buffer over borrowed storage.
///
/// A `Buffer` is either bound to a region (after [`init`](Buffer::init)) or
/// uninitialized (initially as [`Buffer::UNINIT`], and after
/// [`destroy`](Buffer::destroy)). Every operation on an uninitialized buffer is
/// a no-op that reports failure or zero.
///
/// # Capacity
///
/// A buffer of `size` bytes accepts at most `size - 1` sequential writes: the last
/// byte is kept free so a terminator always fits. [`memcpy_at`](Buffer::memcpy_at)
/// and [`append`](Buffer::append) are not bound by that reserve.
///
/// # Example
///
/// ```rust
/// use fixbuf::Buffer;
///
/// let mut storage = [0u8; 4];
/// let mut buffer = Buffer::new(&mut storage);
///
/// assert!(buffer.write_u8(b'a'));
/// assert!(buffer.write_u8(b'b'));
/// assert!(buffer.write_u8(b'c'));
/// assert!(!buffer.write_u8(b'd'));
///
/// assert_eq!(buffer.as_slice(), b"abc");
/// assert!(buffer.is_full());
/// ```
pub struct Buffer<'d> {
    region: Option<Region<'d>>,
    checked_out: bool,
    #[cfg(any(test, feature = "test-utils"))]
    behaviour: BufferBehaviour,
}

impl<'d> Buffer<'d> {
    /// An uninitialized control block.
    ///
    /// Usable in array repeat expressions to reserve control-block storage:
    /// `[Buffer::UNINIT; N]`.
    pub const UNINIT: Self = Self {
        region: None,
        checked_out: false,
        #[cfg(any(test, feature = "test-utils"))]
        behaviour: BufferBehaviour::None,
    };

    /// Creates a buffer bound to `storage`.
    ///
    /// Equivalent to [`Buffer::UNINIT`] followed by [`init`](Buffer::init).
    pub fn new(storage: &'d mut [u8]) -> Self {
        let mut buffer = Self::UNINIT;
        buffer.init(storage);
        buffer
    }

    /// Binds the control block to `storage`.
    ///
    /// The capacity is `storage.len()`, zero included. The storage is not cleared;
    /// call [`flush`](Buffer::flush) if it must start zeroed. Any previous binding
    /// is dropped and the checked-out flag is cleared.
    pub fn init(&mut self, storage: &'d mut [u8]) {
        *self = Self::UNINIT;
        self.region = Some(Region {
            data: storage,
            used: 0,
        });
    }

    /// Partitions `storage` into `buffers.len()` chunks of `element_size` bytes and
    /// binds each buffer to its own chunk, in order.
    ///
    /// Bytes past `buffers.len() * element_size` are left unused.
    ///
    /// # Errors
    ///
    /// - [`BufferError::Overflow`] if `buffers.len() * element_size` overflows.
    /// - [`BufferError::StorageTooSmall`] if `storage` is shorter than that product.
    ///
    /// No buffer is touched when an error is returned.
    pub fn init_array(
        buffers: &mut [Buffer<'d>],
        storage: &'d mut [u8],
        element_size: usize,
    ) -> Result<(), BufferError> {
        let required = buffers
            .len()
            .checked_mul(element_size)
            .ok_or(BufferError::Overflow)?;

        if storage.len() < required {
            return Err(BufferError::StorageTooSmall {
                required,
                available: storage.len(),
            });
        }

        let mut rest = storage;
        for buffer in buffers.iter_mut() {
            let (chunk, tail) = core::mem::take(&mut rest).split_at_mut(element_size);
            buffer.init(chunk);
            rest = tail;
        }

        Ok(())
    }

    /// Returns the control block to the uninitialized state.
    ///
    /// The storage reference, capacity, used count and checked-out flag are all
    /// cleared. The storage itself is left as it is. Idempotent.
    pub fn destroy(&mut self) {
        *self = Self::UNINIT;
    }

    /// Rewinds the cursor to the start of the storage.
    ///
    /// Previously written bytes stay in storage and remain readable through
    /// [`storage`](Buffer::storage).
    pub fn reset(&mut self) {
        if let Some(region) = self.region.as_mut() {
            region.used = 0;
        }
    }

    /// Zeroizes the whole storage, then rewinds the cursor.
    ///
    /// No-op on an uninitialized buffer.
    pub fn flush(&mut self) {
        if let Some(region) = self.region.as_mut() {
            region.data.zeroize();
            region.used = 0;
        }
    }

    /// Moves the cursor forward by one byte.
    ///
    /// Fails without mutating anything when the buffer is uninitialized, when the
    /// used count cannot be incremented without wrapping, or when the buffer
    /// [is full](Buffer::is_full).
    pub fn advance(&mut self) -> bool {
        #[cfg(any(test, feature = "test-utils"))]
        if matches!(self.behaviour, BufferBehaviour::FailAtAdvance) {
            return false;
        }

        let full = self.is_full();

        let Some(region) = self.region.as_mut() else {
            return false;
        };

        if region.used == usize::MAX || full {
            return false;
        }

        region.used += 1;
        true
    }

    /// Returns `true` once only the reserved trailing byte is left.
    ///
    /// Zero-capacity and uninitialized buffers are always full.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.size_inuse() >= self.size().saturating_sub(1)
    }

    /// Writes `byte` at the cursor and advances it.
    ///
    /// Returns `false` and leaves the storage untouched when the cursor cannot advance.
    pub fn write_u8(&mut self, byte: u8) -> bool {
        if !self.advance() {
            return false;
        }

        if let Some(region) = self.region.as_mut() {
            // advance() keeps used <= len - 1, so used - 1 is in bounds.
            region.data[region.used - 1] = byte;
        }

        true
    }

    /// Writes `bytes` one at a time until all are written or a write fails.
    ///
    /// Returns the number of bytes actually written, which is less than
    /// `bytes.len()` when the buffer fills up.
    pub fn write_data(&mut self, bytes: &[u8]) -> usize {
        let mut written = 0;

        for &byte in bytes {
            if !self.write_u8(byte) {
                break;
            }
            written += 1;
        }

        written
    }

    /// Returns the number of bytes written or advanced over.
    #[inline]
    pub fn size_inuse(&self) -> usize {
        self.region.as_ref().map_or(0, |region| region.used)
    }

    /// Returns the number of bytes between the cursor and the end of the storage.
    ///
    /// `size_inuse() + size_free() == size()` always holds.
    #[inline]
    pub fn size_free(&self) -> usize {
        self.size().saturating_sub(self.size_inuse())
    }

    /// Copies `bytes` into the storage at `offset`, ignoring the cursor.
    ///
    /// Copies everything and returns `bytes.len()` when `offset + bytes.len()`
    /// fits within [`size`](Buffer::size); otherwise copies nothing and returns 0.
    /// The used count and cursor are never updated.
    pub fn memcpy_at(&mut self, offset: usize, bytes: &[u8]) -> usize {
        #[cfg(any(test, feature = "test-utils"))]
        if matches!(self.behaviour, BufferBehaviour::FailAtMemcpy) {
            return 0;
        }

        let Some(region) = self.region.as_mut() else {
            return 0;
        };

        let Some(end) = offset.checked_add(bytes.len()) else {
            return 0;
        };

        if end > region.data.len() {
            return 0;
        }

        region.data[offset..end].copy_from_slice(bytes);
        bytes.len()
    }

    /// Copies every used byte of `src` to the cursor of `self`, then advances the
    /// cursor past them.
    ///
    /// Appending an empty `src` succeeds without touching `self`.
    ///
    /// # Errors
    ///
    /// - [`BufferError::InsufficientSpace`] if `self` has fewer free bytes than
    ///   `src` has used ones.
    /// - [`BufferError::CopyFailed`] if the copy reported zero bytes moved.
    ///
    /// `self` is left unchanged on error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fixbuf::{Buffer, BufferError};
    ///
    /// fn example() -> Result<(), BufferError> {
    ///     let mut dst_storage = [0u8; 16];
    ///     let mut src_storage = [0u8; 8];
    ///     let mut dst = Buffer::new(&mut dst_storage);
    ///     let mut src = Buffer::new(&mut src_storage);
    ///
    ///     dst.write_data(b"head:");
    ///     src.write_data(b"tail");
    ///     dst.append(&src)?;
    ///
    ///     assert_eq!(dst.as_slice(), b"head:tail");
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn append(&mut self, src: &Buffer<'_>) -> Result<(), BufferError> {
        let needed = src.size_inuse();
        if needed == 0 {
            return Ok(());
        }

        let available = self.size_free();
        if available < needed {
            debug!(needed, available, "append refused: destination too small");
            return Err(BufferError::InsufficientSpace { needed, available });
        }

        if self.memcpy_at(self.size_inuse(), src.as_slice()) == 0 {
            debug!(needed, "append refused: copy moved no bytes");
            return Err(BufferError::CopyFailed);
        }

        if let Some(region) = self.region.as_mut() {
            region.used += needed;
        }

        Ok(())
    }

    /// Returns the capacity in bytes, 0 when uninitialized.
    #[inline]
    pub fn size(&self) -> usize {
        self.region.as_ref().map_or(0, |region| region.data.len())
    }

    /// Returns the offset of the next writable byte.
    ///
    /// Always equal to [`size_inuse`](Buffer::size_inuse).
    #[inline]
    pub fn cursor(&self) -> usize {
        self.size_inuse()
    }

    /// Returns `true` if the control block is bound to storage.
    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.region.is_some()
    }

    /// Returns `true` while a pool has handed this buffer out.
    #[inline]
    pub fn is_checked_out(&self) -> bool {
        self.checked_out
    }

    /// Returns the used bytes, from the start of the storage up to the cursor.
    pub fn as_slice(&self) -> &[u8] {
        match self.region.as_ref() {
            Some(region) => &region.data[..region.used],
            None => &[],
        }
    }

    /// Returns the whole bound storage, regardless of the cursor.
    ///
    /// Empty when uninitialized.
    pub fn storage(&self) -> &[u8] {
        match self.region.as_ref() {
            Some(region) => &*region.data,
            None => &[],
        }
    }

    /// Returns the whole bound storage mutably, regardless of the cursor.
    ///
    /// Writes through this slice do not move the cursor. Empty when uninitialized.
    pub fn storage_mut(&mut self) -> &mut [u8] {
        match self.region.as_mut() {
            Some(region) => &mut *region.data,
            None => &mut [],
        }
    }

    pub(crate) fn set_checked_out(&mut self, checked_out: bool) {
        self.checked_out = checked_out;
    }

    /// Changes the test behaviour for this buffer.
    ///
    /// This is only available with the `test-utils` feature and allows injecting
    /// failures for testing error handling paths.
    #[cfg(any(test, feature = "test-utils"))]
    pub fn change_behaviour(&mut self, behaviour: BufferBehaviour) {
        self.behaviour = behaviour;
    }

    #[cfg(test)]
    pub(crate) fn __unsafe_expose_used_for_tests<F>(&mut self, f: F)
    where
        F: FnOnce(&mut usize),
    {
        if let Some(region) = self.region.as_mut() {
            f(&mut region.used);
        }
    }
}

impl Default for Buffer<'_> {
    fn default() -> Self {
        Self::UNINIT
    }
}

impl core::fmt::Debug for Buffer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Buffer")
            .field("initialized", &self.is_initialized())
            .field("size", &self.size())
            .field("used", &self.size_inuse())
            .field("checked_out", &self.checked_out)
            .finish_non_exhaustive()
    }
}
