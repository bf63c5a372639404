use thiserror::Error;

/// A specialized `Result` type for toolbox operations.
pub type ToolboxResult<T> = Result<T, ToolboxError>;

/// The error type for all toolbox operations.
#[derive(Debug, Error)]
pub enum ToolboxError {
    #[error("Terminator must not be empty")]
    EmptyTerminator,

    #[error("Identifier buffer must be exactly 16 bytes, got {len}")]
    IdentifierLength { len: usize },

    #[error("Palette must contain at least one colour")]
    EmptyPalette,

    #[error("Palette {channel} {value} is outside [0, 1]")]
    PaletteChannelOutOfRange { channel: &'static str, value: f32 },

    #[error("Base64 payload is malformed: {source}")]
    Base64Decode {
        #[from]
        source: base64::DecodeError,
    },

    #[error("Image data could not be decoded: {source}")]
    ImageDecode { source: image::ImageError },

    #[error("Image format '{format}' is not supported for encoding")]
    UnsupportedFormat { format: String },

    #[error("Failed to encode image as {format}: {source}")]
    ImageEncode {
        format: String,
        source: image::ImageError,
    },

    #[error("Stream copy failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl ToolboxError {
    /// Check if this error was caused by a malformed argument rather than by
    /// payload data or I/O.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            ToolboxError::EmptyTerminator
                | ToolboxError::IdentifierLength { .. }
                | ToolboxError::EmptyPalette
                | ToolboxError::PaletteChannelOutOfRange { .. }
        )
    }

    /// Check if this error was caused by a malformed payload.
    pub fn is_decode(&self) -> bool {
        matches!(
            self,
            ToolboxError::Base64Decode { .. } | ToolboxError::ImageDecode { .. }
        )
    }
}
