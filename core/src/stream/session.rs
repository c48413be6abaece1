//! stream/session.rs
//! One codec session per operation, wrapping the library's raw streams.

use flate2::{Compress, Compression, Decompress, FlushCompress, FlushDecompress, Status};

use crate::constants::WINDOW_BITS;
use crate::sniff::{classify, StreamKind};
use crate::types::{CodecError, Format, InputFormat};

/// Direction-specific codec state. Built for exactly one operation and
/// dropped when that operation returns, on every exit path.
pub(crate) enum Session {
    Deflate(Compress),
    Inflate(Decompress),
}

/// Compressor session for `format` at an already-validated `level`.
///
/// The codec's constructors treat bad parameters as programmer error, so
/// argument validation happens before this point and construction cannot
/// fail.
pub(crate) fn create_compressor(format: Format, level: u32) -> Session {
    let level = Compression::new(level);
    Session::Deflate(match format {
        Format::Zlib => Compress::new(level, true),
        Format::Raw => Compress::new(level, false),
        Format::Gzip => Compress::new_gzip(level, WINDOW_BITS),
    })
}

/// Decompressor session for `format`. `Auto` resolves zlib vs gzip from the
/// header bytes and falls back to zlib when neither is recognized.
pub(crate) fn create_decompressor(format: InputFormat, header: &[u8]) -> Session {
    Session::Inflate(match format {
        InputFormat::Zlib => Decompress::new(true),
        InputFormat::Raw => Decompress::new(false),
        InputFormat::Gzip => Decompress::new_gzip(WINDOW_BITS),
        InputFormat::Auto => match classify(header) {
            Some(StreamKind::Gzip) => Decompress::new_gzip(WINDOW_BITS),
            _ => Decompress::new(true),
        },
    })
}

impl Session {
    /// One processing step over the given input and output windows.
    ///
    /// Returns `(consumed, produced, status)`; consumed and produced are
    /// derived from the codec's cumulative counters. Codec failures carry
    /// the codec's own message text.
    pub(crate) fn step(
        &mut self,
        input: &[u8],
        output: &mut [u8],
        finish: bool,
    ) -> Result<(usize, usize, Status), CodecError> {
        match self {
            Session::Deflate(c) => {
                let (before_in, before_out) = (c.total_in(), c.total_out());
                let flush = if finish {
                    FlushCompress::Finish
                } else {
                    FlushCompress::None
                };
                let status = c
                    .compress(input, output, flush)
                    .map_err(|e| CodecError::Codec { msg: e.to_string() })?;
                Ok((
                    (c.total_in() - before_in) as usize,
                    (c.total_out() - before_out) as usize,
                    status,
                ))
            }
            Session::Inflate(d) => {
                let (before_in, before_out) = (d.total_in(), d.total_out());
                let flush = if finish {
                    FlushDecompress::Finish
                } else {
                    FlushDecompress::None
                };
                let status = d
                    .decompress(input, output, flush)
                    .map_err(|e| CodecError::Codec { msg: e.to_string() })?;
                Ok((
                    (d.total_in() - before_in) as usize,
                    (d.total_out() - before_out) as usize,
                    status,
                ))
            }
        }
    }
}
