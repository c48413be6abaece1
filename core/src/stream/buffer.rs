//! stream/buffer.rs
//! Owned growable output region for the codec driver.

use crate::types::CodecError;

/// Byte region with a capacity and a produced length.
///
/// Grows by reallocation, preserving already-written bytes; never shrinks
/// while a stream is live; trimmed to the produced length on success. The
/// whole region is dropped on any failure path.
#[derive(Debug, Default)]
pub(crate) struct GrowBuf {
    buf: Vec<u8>,
    produced: usize,
}

impl GrowBuf {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Extend capacity by `extra` zeroed bytes. Allocator refusal surfaces
    /// as an error instead of aborting the process.
    pub(crate) fn grow_by(&mut self, extra: usize) -> Result<(), CodecError> {
        self.buf.try_reserve_exact(extra)?;
        let new_len = self.buf.len() + extra;
        self.buf.resize(new_len, 0);
        Ok(())
    }

    /// Unwritten tail of the region. Recomputed from the current base every
    /// call, so a relocation during growth never leaves a stale window.
    pub(crate) fn spare(&mut self) -> &mut [u8] {
        &mut self.buf[self.produced..]
    }

    pub(crate) fn spare_len(&self) -> usize {
        self.buf.len() - self.produced
    }

    /// Mark `n` spare bytes as produced.
    pub(crate) fn commit(&mut self, n: usize) {
        debug_assert!(n <= self.spare_len());
        self.produced += n;
    }

    /// Trim to the produced length and hand the bytes out.
    pub(crate) fn into_bytes(mut self) -> Vec<u8> {
        self.buf.truncate(self.produced);
        self.buf
    }
}
