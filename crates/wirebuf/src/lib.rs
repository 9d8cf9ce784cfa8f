//! A growable byte buffer with a read cursor, for building and taking apart
//! binary wire messages.
//!
//! Reads consume from the cursor and fail with [`BufferError::OutOfRange`]
//! when not enough bytes are left; writes append to the end. Every
//! multi-byte integer is big-endian (network byte order).
//!
//! ```rust
//! use wirebuf::ByteBuffer;
//!
//! let mut buf = ByteBuffer::default();
//! buf.write_unsigned_short(0x1234).unwrap();
//! buf.write_bytes(b"hi");
//! assert_eq!(buf.as_bytes(), b"\x12\x34hi");
//!
//! assert_eq!(buf.read_unsigned_short().unwrap(), 0x1234);
//! assert_eq!(buf.remaining(), 2);
//! buf.compact();
//! assert_eq!(buf.as_bytes(), b"hi");
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod buffer;
mod error;
mod width;

#[cfg(test)]
mod tests;

pub use buffer::ByteBuffer;
pub use error::BufferError;
pub use width::Width;
