use alloc::{format, string::ToString, vec};

use insta::assert_snapshot;

use crate::ByteBuffer;

#[test]
fn out_of_range_message_reports_both_counts() {
    let mut buf = ByteBuffer::new(vec![1, 2, 3]);
    let err = buf.read_bytes(5).unwrap_err();
    assert_snapshot!(err.to_string(), @"buffer has only 3 bytes remaining but trying to read 5 bytes");
}

#[test]
fn invalid_argument_messages_name_the_width() {
    let mut buf = ByteBuffer::default();
    assert_snapshot!(
        buf.write_byte(300).unwrap_err().to_string(),
        @"UBYTE max value is 255, but 300 given"
    );
    assert_snapshot!(
        buf.write_unsigned_short(65_536).unwrap_err().to_string(),
        @"USHORT max value is 65535, but 65536 given"
    );
    assert_snapshot!(
        buf.write_unsigned_int(4_294_967_296).unwrap_err().to_string(),
        @"UINT max value is 4294967295, but 4294967296 given"
    );
}

#[test]
fn position_past_end_message_names_position_and_size() {
    let err = ByteBuffer::with_position(vec![1, 2], 3).unwrap_err();
    assert_snapshot!(err.to_string(), @"cursor position 3 is past the end of 2 stored bytes");
}

#[test]
fn invalid_argument_is_not_out_of_range() {
    let err = ByteBuffer::default().write_byte(256).unwrap_err();
    assert!(!err.is_out_of_range());
}

#[test]
fn debug_escapes_binary_data() {
    let mut buf = ByteBuffer::new(b"hi\x00\xFF".as_slice());
    buf.read_byte().unwrap();
    assert_snapshot!(format!("{buf:?}"), @r#"ByteBuffer { data: "hi\0\xff", position: 1 }"#);
}

#[test]
fn display_renders_whole_buffer_as_text() {
    let mut buf = ByteBuffer::new(b"PING".as_slice());
    buf.read_bytes(2).unwrap();
    assert_eq!(buf.to_string(), "PING");
}
