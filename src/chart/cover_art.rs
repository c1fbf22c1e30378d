use crate::reader::{ReadResult, Reader};
use alloc::vec::Vec;

#[doc = r#"
The cover art bundled in a chart file

Pixels are stored raw; the texture format tag says how they are laid out,
and interpreting it belongs to whatever converts the pixels for display.
The decoder carries the tag through untouched and never checks the blob
against `width * height`.
"#]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverArt {
    texture_format: i32,
    width: i32,
    height: i32,
    data: Vec<u8>,
}

impl CoverArt {
    /// Create cover art from a texture format tag, dimensions, and raw
    /// pixel bytes.
    pub fn new(texture_format: i32, width: i32, height: i32, data: Vec<u8>) -> Self {
        Self {
            texture_format,
            width,
            height,
            data,
        }
    }

    /// Reads the cover art group: blob size, texture format, width,
    /// height, then the pixel bytes.
    ///
    /// A blob size of zero is still a read; it succeeds with empty pixel
    /// data rather than being skipped.
    pub(crate) fn read(reader: &mut Reader) -> ReadResult<Self> {
        let blob_size = reader.read_blob_size()?;
        let texture_format = reader.read_i32_le()?;
        let width = reader.read_i32_le()?;
        let height = reader.read_i32_le()?;
        let data = reader.read_bytes(blob_size)?.to_vec();

        Ok(Self {
            texture_format,
            width,
            height,
            data,
        })
    }

    /// The opaque tag naming the pixel layout of [`data`](Self::data).
    pub const fn texture_format(&self) -> i32 {
        self.texture_format
    }

    /// Width in pixels.
    pub const fn width(&self) -> i32 {
        self.width
    }

    /// Height in pixels.
    pub const fn height(&self) -> i32 {
        self.height
    }

    /// The raw pixel bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// True if the chart carries no cover pixels.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Consume the cover art, handing the pixel bytes to the caller.
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }
}

#[test]
fn zero_size_blob_is_read_not_skipped() {
    use pretty_assertions::assert_eq;

    // size 0, format 7, width 4, height 2, no pixel bytes, one trailing byte
    let mut bytes = Vec::new();
    for field in [0i32, 7, 4, 2] {
        bytes.extend_from_slice(&field.to_le_bytes());
    }
    bytes.push(0xAB);

    let mut reader = Reader::from_byte_slice(&bytes);
    let cover = CoverArt::read(&mut reader).unwrap();

    assert!(cover.is_empty());
    assert_eq!(cover.texture_format(), 7);
    assert_eq!(cover.width(), 4);
    assert_eq!(cover.height(), 2);
    // the cursor sits right after the (empty) blob
    assert_eq!(reader.buffer_position(), 16);
}
