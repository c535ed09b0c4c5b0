// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Fixed-capacity byte buffers and buffer pools over caller-owned storage.
//!
//! This crate never allocates. Every byte it touches belongs to a region the caller
//! provides (a `static`, a stack array, an arena slice), and it only keeps the
//! bookkeeping needed to fill that region safely.
//!
//! # Components
//!
//! ## Buffer
//!
//! A control block over a borrowed `&mut [u8]`:
//! - Sequential, bounds-checked writes through a cursor (`write_u8`, `write_data`)
//! - Random-access, all-or-nothing writes (`memcpy_at`)
//! - One byte of every buffer is kept in reserve, so a trailing zero always fits
//! - `reset` rewinds the cursor, `flush` also zeroizes the storage
//! - `destroy` returns the control block to the uninitialized state, where every
//!   mutating operation is a no-op that reports failure
//!
//! ## BufferPool
//!
//! A bounded set of buffers over one contiguous region, partitioned into equal chunks:
//! - `list_get` checks out the lowest free slot and hands back an exclusive handle
//! - `list_return` releases the slot and invalidates the caller's handle
//! - No locking: concurrent use needs external mutual exclusion
//!
//! ## memmem
//!
//! First-occurrence search of a byte pattern inside a byte region.
//!
//! # Example: Buffer
//!
//! ```rust
//! use fixbuf::Buffer;
//!
//! let mut storage = [0u8; 8];
//! let mut buffer = Buffer::new(&mut storage);
//!
//! // One byte is always reserved: only 7 of 8 bytes can be written.
//! assert_eq!(buffer.write_data(&[1, 2, 3, 4, 5, 6, 7, 8]), 7);
//! assert_eq!(buffer.size_inuse(), 7);
//! assert_eq!(buffer.size_free(), 1);
//! assert!(!buffer.write_u8(9));
//!
//! buffer.reset();
//! assert_eq!(buffer.size_inuse(), 0);
//! assert_eq!(buffer.storage()[..7], [1, 2, 3, 4, 5, 6, 7]);
//! ```
//!
//! # Example: BufferPool
//!
//! ```rust
//! use fixbuf::{Buffer, BufferPool, PoolStorage};
//!
//! let mut storage = PoolStorage::<4, 16>::new();
//! let mut blocks = [Buffer::UNINIT; 4];
//! let mut pool = BufferPool::with_storage(&mut blocks, &mut storage);
//!
//! let mut handle = pool.list_get();
//! if let Some(h) = handle.as_ref() {
//!     if let Some(buffer) = pool.get_mut(h) {
//!         buffer.write_data(b"ping");
//!     }
//! }
//!
//! pool.list_return(&mut handle);
//! assert!(handle.is_none());
//! assert_eq!(pool.available(), 4);
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
mod tests;

#[cfg(any(test, feature = "test-utils"))]
mod behaviour;

mod buffer;
mod error;
mod pool;
mod search;
mod storage;

#[cfg(any(test, feature = "test-utils"))]
pub use behaviour::BufferBehaviour;

pub use buffer::Buffer;
pub use error::{BufferError, PoolError};
pub use pool::{BufferHandle, BufferPool};
pub use search::memmem;
pub use storage::PoolStorage;
