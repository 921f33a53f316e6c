//! Bounds-checked binary reader with cursor tracking.

use crate::BufferError;

/// A binary reader over a borrowed byte slice.
///
/// Every read checks the remaining length first and fails with
/// [`BufferError::UnexpectedEof`] instead of panicking, so the reader is safe
/// to drive over untrusted input.
///
/// # Example
///
/// ```
/// use msgpack_value_buffers::Reader;
///
/// let data = [0x01, 0x02, 0x03, 0x04];
/// let mut reader = Reader::new(&data);
///
/// assert_eq!(reader.u8(), Ok(0x01));
/// assert_eq!(reader.u16(), Ok(0x0203));
/// assert_eq!(reader.remainder(), &[0x04]);
/// ```
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    /// The underlying byte slice.
    uint8: &'a [u8],
    /// Current cursor position.
    pub x: usize,
}

impl<'a> Reader<'a> {
    /// Creates a new reader positioned at the start of `uint8`.
    pub fn new(uint8: &'a [u8]) -> Self {
        Self { uint8, x: 0 }
    }

    /// Returns the number of unread bytes.
    #[inline]
    pub fn size(&self) -> usize {
        self.uint8.len() - self.x
    }

    /// Returns `true` when every byte has been consumed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Returns the unread suffix of the input without advancing.
    #[inline]
    pub fn remainder(&self) -> &'a [u8] {
        &self.uint8[self.x..]
    }

    #[inline]
    fn check(&self, needed: usize) -> Result<(), BufferError> {
        let remaining = self.size();
        if needed > remaining {
            Err(BufferError::UnexpectedEof { needed, remaining })
        } else {
            Ok(())
        }
    }

    /// Returns the next `N` bytes as an array and advances the cursor.
    #[inline]
    fn array<const N: usize>(&mut self) -> Result<[u8; N], BufferError> {
        self.check(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(&self.uint8[self.x..self.x + N]);
        self.x += N;
        Ok(out)
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Result<u8, BufferError> {
        self.check(1)?;
        Ok(self.uint8[self.x])
    }

    /// Reads an unsigned 8-bit integer.
    #[inline]
    pub fn u8(&mut self) -> Result<u8, BufferError> {
        self.check(1)?;
        let val = self.uint8[self.x];
        self.x += 1;
        Ok(val)
    }

    /// Reads a signed 8-bit integer.
    #[inline]
    pub fn i8(&mut self) -> Result<i8, BufferError> {
        self.u8().map(|b| b as i8)
    }

    /// Reads an unsigned 16-bit integer (big-endian).
    #[inline]
    pub fn u16(&mut self) -> Result<u16, BufferError> {
        self.array().map(u16::from_be_bytes)
    }

    /// Reads a signed 16-bit integer (big-endian).
    #[inline]
    pub fn i16(&mut self) -> Result<i16, BufferError> {
        self.array().map(i16::from_be_bytes)
    }

    /// Reads an unsigned 32-bit integer (big-endian).
    #[inline]
    pub fn u32(&mut self) -> Result<u32, BufferError> {
        self.array().map(u32::from_be_bytes)
    }

    /// Reads a signed 32-bit integer (big-endian).
    #[inline]
    pub fn i32(&mut self) -> Result<i32, BufferError> {
        self.array().map(i32::from_be_bytes)
    }

    /// Reads an unsigned 64-bit integer (big-endian).
    #[inline]
    pub fn u64(&mut self) -> Result<u64, BufferError> {
        self.array().map(u64::from_be_bytes)
    }

    /// Reads a signed 64-bit integer (big-endian).
    #[inline]
    pub fn i64(&mut self) -> Result<i64, BufferError> {
        self.array().map(i64::from_be_bytes)
    }

    /// Reads a 32-bit IEEE754 float (big-endian bit pattern).
    #[inline]
    pub fn f32(&mut self) -> Result<f32, BufferError> {
        self.u32().map(f32::from_bits)
    }

    /// Reads a 64-bit IEEE754 float (big-endian bit pattern).
    #[inline]
    pub fn f64(&mut self) -> Result<f64, BufferError> {
        self.u64().map(f64::from_bits)
    }

    /// Joins `width` big-endian bytes into an unsigned integer.
    ///
    /// `width` must be in `1..=8`; anything else is a caller bug.
    pub fn uint_be(&mut self, width: usize) -> Result<u64, BufferError> {
        debug_assert!(
            (1..=8).contains(&width),
            "integer width must be 1..=8 bytes, got {width}"
        );
        let bytes = self.buf(width)?;
        Ok(bytes.iter().fold(0u64, |acc, &b| (acc << 8) | b as u64))
    }

    /// Returns the next `size` bytes as a subslice and advances the cursor.
    pub fn buf(&mut self, size: usize) -> Result<&'a [u8], BufferError> {
        self.check(size)?;
        let start = self.x;
        self.x += size;
        Ok(&self.uint8[start..self.x])
    }

    /// Advances the cursor by `length` bytes.
    pub fn skip(&mut self, length: usize) -> Result<(), BufferError> {
        self.check(length)?;
        self.x += length;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_big_endian_integers() {
        let data = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];
        let mut reader = Reader::new(&data);
        assert_eq!(reader.u16(), Ok(0x0102));
        assert_eq!(reader.u16(), Ok(0x0304));
        assert_eq!(reader.u32(), Ok(0x05060708));
        assert!(reader.is_empty());
    }

    #[test]
    fn reads_signed_integers() {
        let data = [0xff, 0xff, 0xfe, 0xff, 0xff, 0xff, 0xfd];
        let mut reader = Reader::new(&data);
        assert_eq!(reader.i8(), Ok(-1));
        assert_eq!(reader.i16(), Ok(-2));
        assert_eq!(reader.i32(), Ok(-3));
    }

    #[test]
    fn reads_floats_from_bit_patterns() {
        let mut data = Vec::new();
        data.extend_from_slice(&1.5f32.to_bits().to_be_bytes());
        data.extend_from_slice(&(-2.25f64).to_bits().to_be_bytes());
        let mut reader = Reader::new(&data);
        assert_eq!(reader.f32(), Ok(1.5));
        assert_eq!(reader.f64(), Ok(-2.25));
    }

    #[test]
    fn uint_be_joins_arbitrary_widths() {
        let data = [0x12, 0x34, 0x56];
        let mut reader = Reader::new(&data);
        assert_eq!(reader.uint_be(3), Ok(0x123456));

        let data = [0xff; 8];
        let mut reader = Reader::new(&data);
        assert_eq!(reader.uint_be(8), Ok(u64::MAX));
    }

    #[test]
    fn short_reads_fail_without_advancing() {
        let data = [0x01, 0x02, 0x03];
        let mut reader = Reader::new(&data);
        assert_eq!(
            reader.u32(),
            Err(BufferError::UnexpectedEof {
                needed: 4,
                remaining: 3
            })
        );
        assert_eq!(reader.x, 0);
        assert_eq!(reader.buf(3), Ok(&data[..]));
        assert_eq!(
            reader.u8(),
            Err(BufferError::UnexpectedEof {
                needed: 1,
                remaining: 0
            })
        );
    }

    #[test]
    fn huge_lengths_do_not_overflow() {
        let data = [0x00];
        let mut reader = Reader::new(&data);
        reader.skip(1).unwrap();
        assert!(reader.buf(usize::MAX).is_err());
    }

    #[test]
    fn remainder_tracks_cursor() {
        let data = [0xaa, 0xbb, 0xcc];
        let mut reader = Reader::new(&data);
        assert_eq!(reader.peek(), Ok(0xaa));
        assert_eq!(reader.remainder(), &[0xaa, 0xbb, 0xcc]);
        reader.skip(2).unwrap();
        assert_eq!(reader.remainder(), &[0xcc]);
    }
}
