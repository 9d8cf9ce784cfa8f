use thiserror::Error;

use crate::Width;

/// Failure of a buffer read or a range-checked write.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferError {
    /// A read asked for more bytes than are left after the cursor.
    #[error("buffer has only {remaining} bytes remaining but trying to read {requested} bytes")]
    OutOfRange {
        /// Bytes left between the cursor and the end of the buffer.
        remaining: usize,
        /// Bytes the read needed.
        requested: usize,
    },
    /// A buffer was constructed with its cursor beyond the stored bytes.
    #[error("cursor position {position} is past the end of {size} stored bytes")]
    PositionPastEnd {
        /// The requested cursor position.
        position: usize,
        /// Number of bytes actually stored.
        size: usize,
    },
    /// A write was handed a value that does not fit the target width.
    #[error("{width} max value is {max}, but {value} given")]
    InvalidArgument {
        /// Width the value was meant to be encoded in.
        width: Width,
        /// Largest value the width can hold.
        max: u64,
        /// The rejected value.
        value: u64,
    },
}

impl BufferError {
    /// Whether this is a short read, i.e. the caller may retry once more
    /// bytes have been written.
    #[must_use]
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, BufferError::OutOfRange { .. })
    }

    pub(crate) fn invalid_argument(width: Width, value: u64) -> Self {
        BufferError::InvalidArgument {
            width,
            max: width.max(),
            value,
        }
    }
}
