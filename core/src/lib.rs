//! deflate-core
//!
//! One-shot zlib/gzip/raw DEFLATE compression and decompression over a
//! growable output buffer, with container sniffing and CRC-32/Adler-32
//! checksums. Pure Rust, no FFI.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;

// Shared and top level module
pub mod checksum;
pub mod sniff;

// Stream layers
pub mod stream;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::checksum::{adler32, adler32_from, crc32, crc32_from};
    pub use crate::sniff::{classify, StreamKind};
    pub use crate::stream::{deflate, inflate};
    pub use crate::types::{CodecError, Format, InputFormat};
}
