use crate::sink::BinarySink;

fn uleb(value: u64) -> Vec<u8> {
    let mut sink = BinarySink::new();
    sink.write_uleb128(value);
    sink.into_bytes()
}

fn sleb(value: i64) -> Vec<u8> {
    let mut sink = BinarySink::new();
    sink.write_sleb128(value);
    sink.into_bytes()
}

#[test]
fn unsigned_leb128_edges() {
    assert_eq!(uleb(0), vec![0x00]);
    assert_eq!(uleb(127), vec![0x7f]);
    assert_eq!(uleb(128), vec![0x80, 0x01]);
    assert_eq!(uleb(624485), vec![0xe5, 0x8e, 0x26]);
    assert_eq!(uleb(u64::from(u32::MAX)), vec![0xff, 0xff, 0xff, 0xff, 0x0f]);
}

#[test]
fn signed_leb128_edges() {
    assert_eq!(sleb(0), vec![0x00]);
    assert_eq!(sleb(63), vec![0x3f]);
    // 64 needs a continuation byte, or the sign bit would read back negative
    assert_eq!(sleb(64), vec![0xc0, 0x00]);
    assert_eq!(sleb(-1), vec![0x7f]);
    assert_eq!(sleb(-64), vec![0x40]);
    assert_eq!(sleb(-65), vec![0xbf, 0x7f]);
    assert_eq!(sleb(-123456), vec![0xc0, 0xbb, 0x78]);
}

#[test]
fn var_bytes_are_length_prefixed() {
    let mut sink = BinarySink::new();
    sink.write_var_bytes(&[0xaa, 0xbb]);
    assert_eq!(sink.bytes(), &[0x02, 0xaa, 0xbb]);
}

#[test]
fn strings_encode_as_utf8_blobs() {
    let mut sink = BinarySink::new();
    sink.write_str("hi");
    assert_eq!(sink.bytes(), &[0x02, b'h', b'i']);
}

#[test]
fn float_bits_are_little_endian() {
    let mut sink = BinarySink::new();
    sink.write_f32_bits(1.0f32.to_bits());
    assert_eq!(sink.bytes(), &[0x00, 0x00, 0x80, 0x3f]);

    sink.reset();
    sink.write_f64_bits(1.0f64.to_bits());
    assert_eq!(sink.bytes(), &[0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xf0, 0x3f]);
}

#[test]
fn reset_clears_the_buffer() {
    let mut sink = BinarySink::new();
    sink.write_byte(0x01);
    assert!(!sink.is_empty());
    sink.reset();
    assert!(sink.is_empty());
    assert_eq!(sink.len(), 0);
}
