#![doc = r#"
Bounds-checked sequential reads over an in-memory chart buffer

The original chart tooling walks the buffer with a library reader that
faults on overrun. Here every read checks the remaining length first and
returns [`DecodeErrorKind::TruncatedBuffer`](crate::reader::DecodeErrorKind)
as an ordinary error value instead, so a corrupt or cut-off file can never
panic the caller.
"#]

mod error;
pub use error::*;

use alloc::string::String;

/// A sequential cursor over a borrowed byte slice.
///
/// The cursor only ever moves forward, and only on a successful read. The
/// reader borrows its input; everything it returns is either copied out or
/// borrowed with the same lifetime as the input slice.
#[derive(Debug, Clone)]
pub struct Reader<'slc> {
    bytes: &'slc [u8],
    position: usize,
}

impl<'slc> Reader<'slc> {
    /// Create a reader over a byte slice, positioned at the start.
    pub const fn from_byte_slice(bytes: &'slc [u8]) -> Self {
        Self { bytes, position: 0 }
    }

    /// The current offset into the buffer.
    pub const fn buffer_position(&self) -> usize {
        self.position
    }

    /// The number of bytes left to read.
    pub const fn remaining(&self) -> usize {
        self.bytes.len() - self.position
    }

    /// Borrow the next `len` bytes and advance past them.
    ///
    /// A `len` of zero is a real read that trivially succeeds with an
    /// empty slice.
    pub fn read_bytes(&mut self, len: usize) -> ReadResult<&'slc [u8]> {
        if self.remaining() < len {
            return Err(DecodeError::truncated(self.position));
        }
        let bytes = &self.bytes[self.position..self.position + len];
        self.position += len;
        Ok(bytes)
    }

    /// Read the next `N` bytes into a fixed-size array.
    pub fn read_exact_size<const N: usize>(&mut self) -> ReadResult<[u8; N]> {
        let mut out = [0; N];
        out.copy_from_slice(self.read_bytes(N)?);
        Ok(out)
    }

    /// Read a single byte.
    pub fn read_u8(&mut self) -> ReadResult<u8> {
        Ok(self.read_exact_size::<1>()?[0])
    }

    /// Read a little-endian signed 32-bit integer.
    pub fn read_i32_le(&mut self) -> ReadResult<i32> {
        Ok(i32::from_le_bytes(self.read_exact_size()?))
    }

    /// Read a little-endian unsigned 32-bit integer.
    pub fn read_u32_le(&mut self) -> ReadResult<u32> {
        Ok(u32::from_le_bytes(self.read_exact_size()?))
    }

    /// Read a little-endian IEEE-754 32-bit float.
    pub fn read_f32_le(&mut self) -> ReadResult<f32> {
        Ok(f32::from_le_bytes(self.read_exact_size()?))
    }

    /// Read a blob size: a little-endian signed 32-bit integer that must
    /// not be negative.
    ///
    /// The returned error points at the size field, not past it.
    pub fn read_blob_size(&mut self) -> ReadResult<usize> {
        let at = self.position;
        let size = self.read_i32_le()?;
        if size < 0 {
            return Err(DecodeError::malformed_size(at, size));
        }
        Ok(size as usize)
    }

    /// Read a string prefixed by a single length byte (0-255).
    ///
    /// A length byte of zero produces an empty string.
    pub fn read_short_string(&mut self) -> ReadResult<String> {
        let len = self.read_u8()? as usize;
        let at = self.position;
        let bytes = self.read_bytes(len)?;
        let text = core::str::from_utf8(bytes).map_err(|e| DecodeError::new(at, e.into()))?;
        Ok(String::from(text))
    }
}

#[test]
fn reads_advance_the_cursor() {
    use pretty_assertions::assert_eq;
    let mut reader = Reader::from_byte_slice(&[0x62, 0x01, 0x00, 0x00, 0x00, 0xFF]);

    assert_eq!(reader.read_u8().unwrap(), 0x62);
    assert_eq!(reader.buffer_position(), 1);
    assert_eq!(reader.read_i32_le().unwrap(), 1);
    assert_eq!(reader.buffer_position(), 5);
    assert_eq!(reader.remaining(), 1);
}

#[test]
fn failed_reads_do_not_advance() {
    use pretty_assertions::assert_eq;
    let mut reader = Reader::from_byte_slice(&[0x01, 0x02]);

    let err = reader.read_i32_le().unwrap_err();
    assert!(err.is_truncated());
    assert_eq!(err.position(), 0);
    assert_eq!(reader.buffer_position(), 0);

    // the two bytes that are present can still be read afterwards
    assert_eq!(reader.read_u8().unwrap(), 0x01);
    assert_eq!(reader.read_u8().unwrap(), 0x02);
}

#[test]
fn zero_length_read_succeeds_at_the_end() {
    let mut reader = Reader::from_byte_slice(&[]);
    assert_eq!(reader.read_bytes(0).unwrap(), &[]);
    assert!(reader.read_bytes(1).unwrap_err().is_truncated());
}

#[test]
fn little_endian_scalars() {
    use pretty_assertions::assert_eq;
    let mut reader = Reader::from_byte_slice(&[0x01, 0x00, 0x00, 0x00]);
    // 01 00 00 00 is one, not 16777216
    assert_eq!(reader.read_u32_le().unwrap(), 1);

    let bytes = 0.5f32.to_le_bytes();
    let mut reader = Reader::from_byte_slice(&bytes);
    assert_eq!(reader.read_f32_le().unwrap(), 0.5);
}

#[test]
fn blob_size_rejects_negative_values() {
    use crate::reader::DecodeErrorKind;
    use pretty_assertions::assert_eq;

    let bytes = (-44100i32).to_le_bytes();
    let mut reader = Reader::from_byte_slice(&bytes);
    let err = reader.read_blob_size().unwrap_err();
    assert!(matches!(
        err.error_kind(),
        DecodeErrorKind::MalformedSize(-44100)
    ));
    assert_eq!(err.position(), 0);
}

#[test]
fn short_string_reads() {
    use pretty_assertions::assert_eq;

    let mut reader = Reader::from_byte_slice(&[0x00, 0x03, b'a', b'b', b'c']);
    assert_eq!(reader.read_short_string().unwrap(), "");
    assert_eq!(reader.read_short_string().unwrap(), "abc");
}

#[test]
fn short_string_rejects_invalid_utf8() {
    use crate::reader::DecodeErrorKind;

    let mut reader = Reader::from_byte_slice(&[0x02, 0xFF, 0xFE]);
    let err = reader.read_short_string().unwrap_err();
    assert!(matches!(
        err.error_kind(),
        DecodeErrorKind::TextDecoding(_)
    ));
    assert_eq!(err.position(), 1);
}
