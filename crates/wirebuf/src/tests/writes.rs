use alloc::vec::Vec;

use rstest::rstest;

use crate::{BufferError, ByteBuffer, Width};

#[test]
fn write_bytes_appends_without_moving_cursor() {
    let mut buf = ByteBuffer::with_position(b"ab".as_slice(), 1).unwrap();
    buf.write_bytes(b"cd");
    buf.write_bytes(b"");
    assert_eq!(buf.as_bytes(), b"abcd");
    assert_eq!(buf.position(), 1);
    assert_eq!(buf.remaining(), 3);
}

#[rstest]
#[case(0x1234, &[0x12, 0x34])]
#[case(0, &[0, 0])]
#[case(0xFF, &[0x00, 0xFF])]
#[case(65_535, &[0xFF, 0xFF])]
fn write_unsigned_short_encodes_big_endian(#[case] value: u64, #[case] expected: &[u8]) {
    let mut buf = ByteBuffer::default();
    buf.write_unsigned_short(value).unwrap();
    assert_eq!(buf.as_bytes(), expected);
}

#[rstest]
#[case(0x0102_0304, &[0x01, 0x02, 0x03, 0x04])]
#[case(0, &[0, 0, 0, 0])]
#[case(4_294_967_295, &[0xFF, 0xFF, 0xFF, 0xFF])]
fn write_unsigned_int_encodes_big_endian(#[case] value: u64, #[case] expected: &[u8]) {
    let mut buf = ByteBuffer::default();
    buf.write_unsigned_int(value).unwrap();
    assert_eq!(buf.as_bytes(), expected);
}

#[rstest]
#[case(Width::Byte, 256)]
#[case(Width::Short, 65_536)]
#[case(Width::Int, 4_294_967_296)]
#[case(Width::Int, u64::MAX)]
fn out_of_range_write_is_rejected_and_writes_nothing(#[case] width: Width, #[case] value: u64) {
    let mut buf = ByteBuffer::new(b"x".as_slice());
    let result = match width {
        Width::Byte => buf.write_byte(value),
        Width::Short => buf.write_unsigned_short(value),
        Width::Int => buf.write_unsigned_int(value),
    };
    assert_eq!(
        result,
        Err(BufferError::InvalidArgument {
            width,
            max: width.max(),
            value
        })
    );
    assert_eq!(buf.as_bytes(), b"x");
}

#[test]
fn put_helpers_match_checked_writers() {
    let mut checked = ByteBuffer::default();
    checked.write_byte(0xAB).unwrap();
    checked.write_unsigned_short(0xBEEF).unwrap();
    checked.write_unsigned_int(0xDEAD_BEEF).unwrap();

    let mut typed = ByteBuffer::default();
    typed.put_u8(0xAB);
    typed.put_u16(0xBEEF);
    typed.put_u32(0xDEAD_BEEF);

    assert_eq!(checked, typed);
}

#[test]
fn extend_appends_like_write_bytes() {
    let mut buf = ByteBuffer::default();
    buf.extend([1u8, 2]);
    buf.extend(&[3u8, 4]);
    assert_eq!(Vec::from(buf), [1, 2, 3, 4]);
}
