//! Append-only byte buffer used by every encoder in the pipeline.
//!
//! Writers never seek backward; length prefixes are produced by encoding a
//! sub-region into a fresh sink and copying its completed bytes into the
//! parent with [`BinarySink::write_var_bytes`].

/// Growable binary sink with WASM-format write primitives.
#[derive(Debug, Default, Clone)]
pub struct BinarySink {
    buf: Vec<u8>,
}

impl BinarySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    pub fn write_byte(&mut self, byte: u8) {
        self.buf.push(byte);
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Write a 32-bit value as an unsigned LEB128 varint.
    pub fn write_u32(&mut self, value: u32) {
        self.write_uleb128(u64::from(value));
    }

    pub fn write_uleb128(&mut self, mut value: u64) {
        loop {
            let mut byte = (value & 0x7f) as u8;
            value >>= 7;
            if value != 0 {
                byte |= 0x80;
            }
            self.buf.push(byte);
            if byte & 0x80 == 0 {
                break;
            }
        }
    }

    pub fn write_sleb128(&mut self, mut value: i64) {
        loop {
            let mut byte = (value & 0x7f) as u8;
            let sign = byte & 0x40;
            value >>= 7;
            let done = (value == 0 && sign == 0) || (value == -1 && sign != 0);
            if !done {
                byte |= 0x80;
            }
            self.buf.push(byte);
            if done {
                break;
            }
        }
    }

    /// Write a length-prefixed byte blob.
    pub fn write_var_bytes(&mut self, bytes: &[u8]) {
        self.write_u32(bytes.len() as u32);
        self.write_bytes(bytes);
    }

    /// Write a length-prefixed UTF-8 string.
    pub fn write_str(&mut self, s: &str) {
        self.write_var_bytes(s.as_bytes());
    }

    /// Write a 32-bit IEEE float bit pattern, little-endian.
    pub fn write_f32_bits(&mut self, bits: u32) {
        self.write_bytes(&bits.to_le_bytes());
    }

    /// Write a 64-bit IEEE float bit pattern, little-endian.
    pub fn write_f64_bits(&mut self, bits: u64) {
        self.write_bytes(&bits.to_le_bytes());
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    pub fn reset(&mut self) {
        self.buf.clear();
    }
}
