// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Test behaviour for injecting failures in `Buffer` operations.
///
/// This is only available with the `test-utils` feature and allows users
/// to test the buffer-full paths of their code without filling real storage.
///
/// The behaviour is sticky - once set, it remains active until changed.
/// `reset()` and `flush()` keep it; `destroy()` and `init()` clear it.
///
/// # Example
///
/// ```rust
/// // test-utils feature required in dev-dependencies
/// use fixbuf::{Buffer, BufferBehaviour};
///
/// let mut storage = [0u8; 16];
/// let mut buffer = Buffer::new(&mut storage);
///
/// buffer.change_behaviour(BufferBehaviour::FailAtAdvance);
/// assert!(!buffer.write_u8(1));
///
/// buffer.change_behaviour(BufferBehaviour::None);
/// assert!(buffer.write_u8(1));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BufferBehaviour {
    /// Normal behaviour - no injected failures.
    #[default]
    None,
    /// Every `advance()` call fails as if the buffer were full.
    FailAtAdvance,
    /// Every `memcpy_at()` call copies nothing and returns 0.
    FailAtMemcpy,
}
