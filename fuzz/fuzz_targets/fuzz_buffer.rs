#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use wirebuf::{BufferError, ByteBuffer};

#[derive(Debug, Arbitrary)]
enum Op {
    ReadBytes(u8),
    ReadByte,
    ReadShort,
    ReadInt,
    WriteBytes(Vec<u8>),
    WriteByte(u64),
    WriteShort(u64),
    WriteInt(u64),
    Compact,
}

#[derive(Debug, Arbitrary)]
struct Input {
    initial: Vec<u8>,
    position: usize,
    ops: Vec<Op>,
}

/// Mirror of the buffer as a plain vector and cursor.
struct Model {
    data: Vec<u8>,
    position: usize,
}

impl Model {
    fn read(&mut self, n: usize) -> Result<Vec<u8>, BufferError> {
        let remaining = self.data.len() - self.position;
        if n > remaining {
            return Err(BufferError::OutOfRange {
                remaining,
                requested: n,
            });
        }
        let out = self.data[self.position..self.position + n].to_vec();
        self.position += n;
        Ok(out)
    }

    /// Byte-at-a-time, so short reads consume what was there.
    fn read_be(&mut self, n: usize) -> Result<u64, BufferError> {
        let mut value = 0u64;
        for _ in 0..n {
            value = (value << 8) | u64::from(self.read(1)?[0]);
        }
        Ok(value)
    }

    fn write_be(&mut self, n: usize, value: u64) -> Result<(), BufferError> {
        let max = (1u64 << (8 * n)) - 1;
        if value > max {
            return Err(BufferError::InvalidArgument {
                width: match n {
                    1 => wirebuf::Width::Byte,
                    2 => wirebuf::Width::Short,
                    _ => wirebuf::Width::Int,
                },
                max,
                value,
            });
        }
        self.data.extend_from_slice(&value.to_be_bytes()[8 - n..]);
        Ok(())
    }
}

fn run(input: Input) {
    let position = input.position % (input.initial.len() + 1);
    let mut buf = ByteBuffer::with_position(input.initial.clone(), position).unwrap();
    let mut model = Model {
        data: input.initial,
        position,
    };

    for op in input.ops {
        match op {
            Op::ReadBytes(n) => {
                let n = usize::from(n);
                assert_eq!(buf.read_vec(n), model.read(n));
            }
            Op::ReadByte => {
                assert_eq!(buf.read_byte().map(u64::from), model.read_be(1));
            }
            Op::ReadShort => {
                assert_eq!(buf.read_unsigned_short().map(u64::from), model.read_be(2));
            }
            Op::ReadInt => {
                assert_eq!(buf.read_unsigned_int().map(u64::from), model.read_be(4));
            }
            Op::WriteBytes(bytes) => {
                buf.write_bytes(&bytes);
                model.data.extend_from_slice(&bytes);
            }
            Op::WriteByte(v) => assert_eq!(buf.write_byte(v), model.write_be(1, v)),
            Op::WriteShort(v) => assert_eq!(buf.write_unsigned_short(v), model.write_be(2, v)),
            Op::WriteInt(v) => assert_eq!(buf.write_unsigned_int(v), model.write_be(4, v)),
            Op::Compact => {
                buf.compact();
                model.data.drain(..model.position);
                model.position = 0;
            }
        }

        buf.check_invariants();
        assert_eq!(buf.as_bytes(), model.data.as_slice());
        assert_eq!(buf.position(), model.position);
        assert_eq!(buf.remaining(), model.data.len() - model.position);
    }
}

fuzz_target!(|input: Input| run(input));
