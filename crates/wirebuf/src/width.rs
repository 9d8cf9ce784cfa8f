use core::fmt;

/// Fixed integer widths the buffer knows how to encode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Width {
    /// One byte, `0..=255`.
    Byte,
    /// Two bytes, `0..=65535`.
    Short,
    /// Four bytes, `0..=4294967295`.
    Int,
}

impl Width {
    /// Number of bytes a value of this width occupies on the wire.
    #[must_use]
    pub const fn byte_len(self) -> usize {
        match self {
            Width::Byte => 1,
            Width::Short => 2,
            Width::Int => 4,
        }
    }

    /// Largest unsigned value representable in this width.
    #[must_use]
    pub const fn max(self) -> u64 {
        match self {
            Width::Byte => u8::MAX as u64,
            Width::Short => u16::MAX as u64,
            Width::Int => u32::MAX as u64,
        }
    }

    /// Big-endian encoding of `value`, or `None` if it does not fit.
    ///
    /// Only the first [`Width::byte_len`] bytes of the returned array are
    /// meaningful.
    pub(crate) fn encode(self, value: u64) -> Option<[u8; 4]> {
        if value > self.max() {
            return None;
        }
        let be = value.to_be_bytes();
        let mut out = [0u8; 4];
        out[..self.byte_len()].copy_from_slice(&be[be.len() - self.byte_len()..]);
        Some(out)
    }
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Width::Byte => "UBYTE",
            Width::Short => "USHORT",
            Width::Int => "UINT",
        })
    }
}
