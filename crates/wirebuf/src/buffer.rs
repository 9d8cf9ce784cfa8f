use alloc::vec::Vec;
use core::fmt;

use bstr::BStr;

use crate::{BufferError, Width};

/// Owned byte sequence with a forward-only read cursor.
///
/// The stored bytes split into a consumed prefix `[0, position)` and a
/// remaining suffix `[position, size)`. Reads advance the cursor and never
/// touch the bytes; writes append and never touch the cursor. Only
/// [`ByteBuffer::compact`] moves the cursor back, by dropping the prefix.
#[derive(Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawBuffer")
)]
pub struct ByteBuffer {
    data: Vec<u8>,
    position: usize,
}

impl ByteBuffer {
    /// Wraps `data` with the cursor at the start.
    #[must_use]
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self {
            data: data.into(),
            position: 0,
        }
    }

    /// Wraps `data` with the cursor already at `position`, e.g. to resume a
    /// partial parse.
    ///
    /// # Errors
    ///
    /// [`BufferError::PositionPastEnd`] if `position` is past the end of
    /// `data`.
    pub fn with_position(data: impl Into<Vec<u8>>, position: usize) -> Result<Self, BufferError> {
        let data = data.into();
        if position > data.len() {
            return Err(BufferError::PositionPastEnd {
                position,
                size: data.len(),
            });
        }
        Ok(Self { data, position })
    }

    /// Total number of stored bytes, consumed or not.
    #[must_use]
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Same as [`ByteBuffer::size`].
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether no bytes are stored at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Index of the next byte to be read.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Bytes left between the cursor and the end.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.position
    }

    /// The unread suffix.
    #[must_use]
    pub fn remaining_bytes(&self) -> &[u8] {
        &self.data[self.position..]
    }

    /// Everything stored, including the consumed prefix.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consumes the buffer, returning everything stored.
    #[must_use]
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    /// Reads exactly `count` bytes and advances the cursor past them.
    ///
    /// # Errors
    ///
    /// [`BufferError::OutOfRange`] if fewer than `count` bytes remain. The
    /// cursor does not move in that case.
    pub fn read_bytes(&mut self, count: usize) -> Result<&[u8], BufferError> {
        let remaining = self.remaining();
        if count > remaining {
            return Err(BufferError::OutOfRange {
                remaining,
                requested: count,
            });
        }
        let start = self.position;
        self.position += count;
        Ok(&self.data[start..self.position])
    }

    /// Owned variant of [`ByteBuffer::read_bytes`].
    ///
    /// # Errors
    ///
    /// Same as [`ByteBuffer::read_bytes`].
    pub fn read_vec(&mut self, count: usize) -> Result<Vec<u8>, BufferError> {
        self.read_bytes(count).map(<[u8]>::to_vec)
    }

    /// Reads one unsigned byte.
    ///
    /// # Errors
    ///
    /// [`BufferError::OutOfRange`] if the buffer is drained.
    pub fn read_byte(&mut self) -> Result<u8, BufferError> {
        Ok(self.read_bytes(1)?[0])
    }

    /// Reads a big-endian `u16`.
    ///
    /// # Errors
    ///
    /// [`BufferError::OutOfRange`] if fewer than two bytes remain. Bytes are
    /// consumed one at a time, so a short read still consumes whatever was
    /// available before failing.
    #[allow(clippy::cast_possible_truncation)]
    pub fn read_unsigned_short(&mut self) -> Result<u16, BufferError> {
        // two bytes, always fits
        self.read_be(Width::Short).map(|v| v as u16)
    }

    /// Reads a big-endian `u32`.
    ///
    /// # Errors
    ///
    /// [`BufferError::OutOfRange`] if fewer than four bytes remain, with the
    /// same partial consumption as [`ByteBuffer::read_unsigned_short`].
    pub fn read_unsigned_int(&mut self) -> Result<u32, BufferError> {
        self.read_be(Width::Int)
    }

    fn read_be(&mut self, width: Width) -> Result<u32, BufferError> {
        let mut value = 0u32;
        for _ in 0..width.byte_len() {
            value = (value << 8) | u32::from(self.read_byte()?);
        }
        Ok(value)
    }

    /// Appends `value` to the end. The cursor is untouched.
    pub fn write_bytes(&mut self, value: &[u8]) {
        self.data.extend_from_slice(value);
    }

    /// Appends a single byte.
    ///
    /// Values above 255 are rejected rather than truncated.
    ///
    /// # Errors
    ///
    /// [`BufferError::InvalidArgument`] if `value > 255`; nothing is written.
    pub fn write_byte(&mut self, value: u64) -> Result<(), BufferError> {
        self.write_be(Width::Byte, value)
    }

    /// Appends `value` as a big-endian `u16`.
    ///
    /// # Errors
    ///
    /// [`BufferError::InvalidArgument`] if `value > 65535`; nothing is
    /// written.
    pub fn write_unsigned_short(&mut self, value: u64) -> Result<(), BufferError> {
        self.write_be(Width::Short, value)
    }

    /// Appends `value` as a big-endian `u32`.
    ///
    /// # Errors
    ///
    /// [`BufferError::InvalidArgument`] if `value > 4294967295`; nothing is
    /// written.
    pub fn write_unsigned_int(&mut self, value: u64) -> Result<(), BufferError> {
        self.write_be(Width::Int, value)
    }

    fn write_be(&mut self, width: Width, value: u64) -> Result<(), BufferError> {
        let encoded = width
            .encode(value)
            .ok_or_else(|| BufferError::invalid_argument(width, value))?;
        self.write_bytes(&encoded[..width.byte_len()]);
        Ok(())
    }

    /// Appends a byte.
    pub fn put_u8(&mut self, value: u8) {
        self.data.push(value);
    }

    /// Appends a big-endian `u16`.
    pub fn put_u16(&mut self, value: u16) {
        self.write_bytes(&value.to_be_bytes());
    }

    /// Appends a big-endian `u32`.
    pub fn put_u32(&mut self, value: u32) {
        self.write_bytes(&value.to_be_bytes());
    }

    /// Drops the consumed prefix and moves the cursor back to 0.
    ///
    /// A no-op when nothing has been read since the last compaction.
    pub fn compact(&mut self) {
        if self.position == 0 {
            return;
        }
        self.data.drain(..self.position);
        self.position = 0;
    }

    /// Panics if the cursor is past the end of the stored bytes.
    #[cfg(any(test, feature = "fuzzing"))]
    pub fn check_invariants(&self) {
        assert!(
            self.position <= self.data.len(),
            "cursor {} past end {}",
            self.position,
            self.data.len()
        );
    }
}

impl fmt::Debug for ByteBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByteBuffer")
            .field("data", &BStr::new(&self.data))
            .field("position", &self.position)
            .finish()
    }
}

/// Renders the stored bytes as text, replacing invalid UTF-8.
impl fmt::Display for ByteBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(BStr::new(&self.data), f)
    }
}

impl AsRef<[u8]> for ByteBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl From<Vec<u8>> for ByteBuffer {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}

impl From<&[u8]> for ByteBuffer {
    fn from(data: &[u8]) -> Self {
        Self::new(data)
    }
}

impl From<ByteBuffer> for Vec<u8> {
    fn from(buf: ByteBuffer) -> Self {
        buf.data
    }
}

impl Extend<u8> for ByteBuffer {
    fn extend<I: IntoIterator<Item = u8>>(&mut self, iter: I) {
        self.data.extend(iter);
    }
}

impl<'a> Extend<&'a u8> for ByteBuffer {
    fn extend<I: IntoIterator<Item = &'a u8>>(&mut self, iter: I) {
        self.data.extend(iter);
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawBuffer {
    data: Vec<u8>,
    position: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<RawBuffer> for ByteBuffer {
    type Error = BufferError;

    fn try_from(raw: RawBuffer) -> Result<Self, Self::Error> {
        ByteBuffer::with_position(raw.data, raw.position)
    }
}
