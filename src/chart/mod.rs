#![doc = r#"
Rusty representation of a [`ChartFile`]

# Overview

A chart file is a single binary container bundling everything one song
needs: an audio blob, raw cover art pixels, and length-prefixed song
metadata. The layout is fixed and sequential; every multi-byte number is
little-endian.

```text
[Magic byte: 0x62]
[version: i32]
[audio blob size: i32][audio bytes, omitted when size = 0]
[cover blob size: i32][texture format: i32][width: i32][height: i32]
[cover pixel bytes]
[id length: u8][id][title length: u8][title][artist length: u8][artist]
[total length in seconds: f32]
[audio start offset: u32]
```

The audio blob is the only conditional element: a size of zero means the
bytes are absent from the stream entirely. A zero-size cover blob, by
contrast, is an ordinary zero-length read.
"#]

mod cover_art;
pub use cover_art::*;

mod song_details;
pub use song_details::*;

use crate::reader::{DecodeError, DecodeErrorKind, ReadResult, Reader};
use alloc::vec::Vec;

/// The byte every chart file starts with.
pub const CHART_MAGIC: u8 = 0x62;

#[doc = r#"
A fully decoded chart file

Owns every byte it carries; the input buffer may be dropped or reused as
soon as [`parse`](ChartFile::parse) returns.
"#]
#[derive(Debug, Clone, PartialEq)]
pub struct ChartFile {
    version: i32,
    audio: Vec<u8>,
    cover_art: CoverArt,
    song_details: SongDetails,
}

impl ChartFile {
    /// Parse a set of bytes into a chart file.
    ///
    /// Decoding is all-or-nothing: either every field decodes and a
    /// populated [`ChartFile`] comes back, or the first failure is
    /// returned and no partial record ever escapes. A buffer that does
    /// not begin with [`CHART_MAGIC`] fails with
    /// [`DecodeErrorKind::NotAChartFile`] before anything else is read.
    pub fn parse(bytes: &[u8]) -> ReadResult<Self> {
        let mut reader = Reader::from_byte_slice(bytes);

        if reader.read_u8().ok() != Some(CHART_MAGIC) {
            return Err(DecodeError::new(0, DecodeErrorKind::NotAChartFile));
        }

        let version = reader.read_i32_le()?;

        let audio_blob_size = reader.read_blob_size()?;
        let audio = if audio_blob_size != 0 {
            reader.read_bytes(audio_blob_size)?.to_vec()
        } else {
            Vec::new()
        };

        let cover_art = CoverArt::read(&mut reader)?;
        let song_details = SongDetails::read(&mut reader)?;

        Ok(Self {
            version,
            audio,
            cover_art,
            song_details,
        })
    }

    /// The container version. Read and carried through, but no released
    /// chart uses it to change the layout yet.
    pub const fn version(&self) -> i32 {
        self.version
    }

    /// The audio blob, empty when the chart carries no audio.
    pub fn audio(&self) -> &[u8] {
        &self.audio
    }

    /// True if the chart carries an audio blob.
    pub fn has_audio(&self) -> bool {
        !self.audio.is_empty()
    }

    /// The bundled cover art.
    pub const fn cover_art(&self) -> &CoverArt {
        &self.cover_art
    }

    /// The bundled song metadata.
    pub const fn song_details(&self) -> &SongDetails {
        &self.song_details
    }

    /// Split the chart into its owned parts, for handing the audio and
    /// artwork to whatever displays or transfers them.
    pub fn into_parts(self) -> (Vec<u8>, CoverArt, SongDetails) {
        (self.audio, self.cover_art, self.song_details)
    }
}
