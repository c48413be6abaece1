//! types.rs
//! Container formats and the unified codec error.

use std::collections::TryReserveError;
use std::fmt;
use std::str::FromStr;

/// Container framing written around the deflate payload when compressing.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Format {
    Zlib,
    Gzip,
    Raw,
}

/// Container framing accepted when decompressing. `Auto` resolves zlib vs
/// gzip from the stream header.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InputFormat {
    Zlib,
    Gzip,
    Raw,
    Auto,
}

impl FromStr for Format {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, CodecError> {
        match s {
            "zlib" => Ok(Format::Zlib),
            "gzip" => Ok(Format::Gzip),
            "raw" => Ok(Format::Raw),
            other => Err(CodecError::InvalidFormat(other.to_string())),
        }
    }
}

impl FromStr for InputFormat {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, CodecError> {
        match s {
            "zlib" => Ok(InputFormat::Zlib),
            "gzip" => Ok(InputFormat::Gzip),
            "raw" => Ok(InputFormat::Raw),
            "auto" => Ok(InputFormat::Auto),
            other => Err(CodecError::InvalidFormat(other.to_string())),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Zlib => write!(f, "zlib"),
            Format::Gzip => write!(f, "gzip"),
            Format::Raw => write!(f, "raw"),
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputFormat::Zlib => write!(f, "zlib"),
            InputFormat::Gzip => write!(f, "gzip"),
            InputFormat::Raw => write!(f, "raw"),
            InputFormat::Auto => write!(f, "auto"),
        }
    }
}

/// Unified error for the driver and its entry points.
/// - Argument errors are raised before any session or buffer exists.
/// - Codec errors carry the codec's own message text.
#[derive(Debug)]
pub enum CodecError {
    /// Unknown container format name.
    InvalidFormat(String),
    /// Deflate level outside 0..=9.
    InvalidLevel(u32),
    /// The codec reported a failure mid-stream.
    Codec { msg: String },
    /// Output buffer growth could not be satisfied by the allocator.
    OutOfMemory,
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::InvalidFormat(name) =>
                write!(f, "unknown format: {:?}", name),
            CodecError::InvalidLevel(level) =>
                write!(f, "invalid compression level: {}", level),
            CodecError::Codec { msg } =>
                write!(f, "{}", msg),
            CodecError::OutOfMemory =>
                write!(f, "out of memory"),
        }
    }
}

impl std::error::Error for CodecError {}

impl From<TryReserveError> for CodecError {
    fn from(_: TryReserveError) -> Self {
        CodecError::OutOfMemory
    }
}
