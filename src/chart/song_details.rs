use crate::reader::{ReadResult, Reader};
use alloc::string::String;

#[doc = r#"
The song metadata bundled in a chart file

The three text fields are each prefixed by a single length byte, so none
of them can exceed 255 bytes. An empty field is a length byte of zero.
"#]
#[derive(Debug, Clone, PartialEq)]
pub struct SongDetails {
    id: String,
    song_title: String,
    artist: String,
    total_length_in_seconds: f32,
    audio_start_offset: u32,
}

impl SongDetails {
    pub(crate) fn read(reader: &mut Reader) -> ReadResult<Self> {
        let id = reader.read_short_string()?;
        let song_title = reader.read_short_string()?;
        let artist = reader.read_short_string()?;
        let total_length_in_seconds = reader.read_f32_le()?;
        let audio_start_offset = reader.read_u32_le()?;

        Ok(Self {
            id,
            song_title,
            artist,
            total_length_in_seconds,
            audio_start_offset,
        })
    }

    /// The chart's identifier string.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The song title.
    pub fn song_title(&self) -> &str {
        &self.song_title
    }

    /// The artist name.
    pub fn artist(&self) -> &str {
        &self.artist
    }

    /// Total song length in seconds, possibly fractional.
    pub const fn total_length_in_seconds(&self) -> f32 {
        self.total_length_in_seconds
    }

    /// Offset into the audio blob at which playback starts.
    ///
    /// Whether this counts bytes or samples is up to the consumer of the
    /// audio, the same as the texture format tag on the cover art.
    pub const fn audio_start_offset(&self) -> u32 {
        self.audio_start_offset
    }
}
