use thiserror::Error;

#[doc = r#"
A set of errors that can occur while decoding a chart file
"#]
#[derive(Debug, Error)]
#[error("Decoding at position {position}, {kind}")]
pub struct DecodeError {
    position: usize,
    pub(crate) kind: DecodeErrorKind,
}

/// A kind of error that the decoder can produce
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DecodeErrorKind {
    /// The leading magic byte is missing or is not [`CHART_MAGIC`](crate::chart::CHART_MAGIC).
    #[error("Not a chart file")]
    NotAChartFile,
    /// A blob size field is negative.
    #[error("Malformed blob size ({0})")]
    MalformedSize(i32),
    /// A read would pass the end of the buffer.
    #[error("Truncated buffer")]
    TruncatedBuffer,
    /// A text field holds bytes that are not valid UTF-8.
    #[error("Invalid text: {0}")]
    TextDecoding(#[from] core::str::Utf8Error),
}

impl DecodeError {
    /// Create a decode error from a position and kind
    pub const fn new(position: usize, kind: DecodeErrorKind) -> Self {
        Self { position, kind }
    }

    /// True if a read would have passed the end of the buffer
    pub const fn is_truncated(&self) -> bool {
        matches!(self.kind, DecodeErrorKind::TruncatedBuffer)
    }

    /// True if the buffer does not start with the chart magic byte
    pub const fn is_not_a_chart_file(&self) -> bool {
        matches!(self.kind, DecodeErrorKind::NotAChartFile)
    }

    /// Returns the error kind of the decoder.
    pub fn error_kind(&self) -> &DecodeErrorKind {
        &self.kind
    }

    /// Returns the position where the decode error occurred.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Create a new truncated buffer error
    pub const fn truncated(position: usize) -> Self {
        Self {
            position,
            kind: DecodeErrorKind::TruncatedBuffer,
        }
    }

    /// Create a new malformed size error
    pub const fn malformed_size(position: usize, size: i32) -> Self {
        Self {
            position,
            kind: DecodeErrorKind::MalformedSize(size),
        }
    }
}

/// The Decode Result type (see [`DecodeError`])
pub type ReadResult<T> = Result<T, DecodeError>;
