//! Growable big-endian byte writer.

/// An append-only binary writer backed by a `Vec<u8>`.
///
/// Multi-byte integers are written big-endian, floats as their IEEE754 bit
/// patterns. The combined `u8u*` methods write a tag byte followed by its
/// payload in a single call.
///
/// # Example
///
/// ```
/// use msgpack_value_buffers::Writer;
///
/// let mut writer = Writer::new();
/// writer.u8(0x01);
/// writer.u16(0x0203);
/// let data = writer.flush();
/// assert_eq!(data, [0x01, 0x02, 0x03]);
/// ```
#[derive(Debug, Default, Clone)]
pub struct Writer {
    uint8: Vec<u8>,
}

impl Writer {
    /// Creates an empty writer.
    pub fn new() -> Self {
        Self { uint8: Vec::new() }
    }

    /// Creates an empty writer with room for `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            uint8: Vec::with_capacity(capacity),
        }
    }

    /// Number of bytes written since the last flush.
    pub fn len(&self) -> usize {
        self.uint8.len()
    }

    pub fn is_empty(&self) -> bool {
        self.uint8.is_empty()
    }

    /// Reserves room for at least `additional` more bytes.
    pub fn ensure_capacity(&mut self, additional: usize) {
        self.uint8.reserve(additional);
    }

    /// Discards everything written since the last flush.
    pub fn reset(&mut self) {
        self.uint8.clear();
    }

    /// Returns the written bytes and leaves the writer empty.
    pub fn flush(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.uint8)
    }

    /// Borrows the written bytes.
    pub fn as_slice(&self) -> &[u8] {
        &self.uint8
    }

    #[inline]
    pub fn u8(&mut self, val: u8) {
        self.uint8.push(val);
    }

    #[inline]
    pub fn i8(&mut self, val: i8) {
        self.uint8.push(val as u8);
    }

    /// Writes an unsigned 16-bit integer (big-endian).
    #[inline]
    pub fn u16(&mut self, val: u16) {
        self.uint8.extend_from_slice(&val.to_be_bytes());
    }

    /// Writes an unsigned 32-bit integer (big-endian).
    #[inline]
    pub fn u32(&mut self, val: u32) {
        self.uint8.extend_from_slice(&val.to_be_bytes());
    }

    /// Writes an unsigned 64-bit integer (big-endian).
    #[inline]
    pub fn u64(&mut self, val: u64) {
        self.uint8.extend_from_slice(&val.to_be_bytes());
    }

    /// Writes a u8 followed by another u8.
    pub fn u8u8(&mut self, u8_val: u8, val: u8) {
        self.uint8.extend_from_slice(&[u8_val, val]);
    }

    /// Writes a u8 followed by a u16 (big-endian).
    pub fn u8u16(&mut self, u8_val: u8, u16_val: u16) {
        self.ensure_capacity(3);
        self.u8(u8_val);
        self.u16(u16_val);
    }

    /// Writes a u8 followed by a u32 (big-endian).
    pub fn u8u32(&mut self, u8_val: u8, u32_val: u32) {
        self.ensure_capacity(5);
        self.u8(u8_val);
        self.u32(u32_val);
    }

    /// Writes a u8 followed by a u64 (big-endian).
    pub fn u8u64(&mut self, u8_val: u8, u64_val: u64) {
        self.ensure_capacity(9);
        self.u8(u8_val);
        self.u64(u64_val);
    }

    /// Writes a u8 followed by the bit pattern of a f32 (big-endian).
    pub fn u8f32(&mut self, u8_val: u8, f32_val: f32) {
        self.u8u32(u8_val, f32_val.to_bits());
    }

    /// Writes a u8 followed by the bit pattern of a f64 (big-endian).
    pub fn u8f64(&mut self, u8_val: u8, f64_val: f64) {
        self.u8u64(u8_val, f64_val.to_bits());
    }

    /// Writes a byte slice.
    pub fn buf(&mut self, buf: &[u8]) {
        self.uint8.extend_from_slice(buf);
    }

    /// Writes the UTF-8 bytes of a string. Returns the number of bytes written.
    pub fn utf8(&mut self, s: &str) -> usize {
        self.buf(s.as_bytes());
        s.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u8() {
        let mut writer = Writer::new();
        writer.u8(0x01);
        writer.u8(0x02);
        assert_eq!(writer.flush(), [0x01, 0x02]);
    }

    #[test]
    fn test_u16() {
        let mut writer = Writer::new();
        writer.u16(0x0102);
        assert_eq!(writer.flush(), [0x01, 0x02]);
    }

    #[test]
    fn test_u32() {
        let mut writer = Writer::new();
        writer.u32(0x01020304);
        assert_eq!(writer.flush(), [0x01, 0x02, 0x03, 0x04]);
    }

    #[test]
    fn test_i8_negative() {
        let mut writer = Writer::new();
        writer.i8(-2);
        assert_eq!(writer.flush(), [0xfe]);
    }

    #[test]
    fn test_tagged_writes() {
        let mut writer = Writer::new();
        writer.u8u8(0xcc, 0xff);
        writer.u8u16(0xcd, 0x1234);
        writer.u8u32(0xce, 0xdeadbeef);
        assert_eq!(
            writer.flush(),
            [0xcc, 0xff, 0xcd, 0x12, 0x34, 0xce, 0xde, 0xad, 0xbe, 0xef]
        );
    }

    #[test]
    fn test_u8u64() {
        let mut writer = Writer::new();
        writer.u8u64(0xcf, u64::MAX);
        let data = writer.flush();
        assert_eq!(data[0], 0xcf);
        assert_eq!(&data[1..], &[0xff; 8]);
    }

    #[test]
    fn test_float_bit_patterns() {
        let mut writer = Writer::new();
        writer.u8f32(0xca, 1.0);
        writer.u8f64(0xcb, 1.0);
        assert_eq!(
            writer.flush(),
            [0xca, 0x3f, 0x80, 0x00, 0x00, 0xcb, 0x3f, 0xf0, 0, 0, 0, 0, 0, 0]
        );
    }

    #[test]
    fn test_utf8() {
        let mut writer = Writer::new();
        assert_eq!(writer.utf8("café"), 5);
        assert_eq!(writer.flush(), "café".as_bytes());
    }

    #[test]
    fn test_flush_multiple() {
        let mut writer = Writer::new();
        writer.u8(0x01);
        assert_eq!(writer.flush(), [0x01]);
        assert!(writer.is_empty());
        writer.u8(0x02);
        assert_eq!(writer.flush(), [0x02]);
    }

    #[test]
    fn test_reset_discards() {
        let mut writer = Writer::with_capacity(4);
        writer.u32(7);
        writer.reset();
        writer.u8(9);
        assert_eq!(writer.as_slice(), &[9]);
        assert_eq!(writer.len(), 1);
    }
}
