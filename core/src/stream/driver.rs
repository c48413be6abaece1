//! stream/driver.rs
//! Grow-and-feed loop driving one codec session to completion.

use flate2::Status;

use crate::constants::{COUNTER_MAX, DEFAULT_LEVEL, INITIAL_CHUNK_SIZE, MAX_LEVEL};
use crate::stream::buffer::GrowBuf;
use crate::stream::session::{create_compressor, create_decompressor, Session};
use crate::types::{CodecError, Format, InputFormat};

/// Output chunk sizes requested per growth step: starts at
/// `INITIAL_CHUNK_SIZE`, doubles after every step, each individual request
/// capped by the codec's counter width.
struct ChunkSchedule {
    next: usize,
    cap: usize,
}

impl ChunkSchedule {
    fn new(cap: usize) -> Self {
        Self {
            next: INITIAL_CHUNK_SIZE,
            cap,
        }
    }

    fn take(&mut self) -> usize {
        let chunk = self.next.min(self.cap);
        self.next = self.next.saturating_mul(2);
        chunk
    }
}

/// Counters collected while one stream is driven. Used by tests to observe
/// chunked input feeding and output growth.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub(crate) struct DriveStats {
    pub(crate) bytes_in: u64,
    pub(crate) bytes_out: u64,
    pub(crate) input_feeds: u64,
    pub(crate) growth_steps: u64,
}

/// Compress `input` into a `format` container. `level` is 0..=9; `None`
/// selects the balanced default.
pub fn deflate(input: &[u8], format: Format, level: Option<u32>) -> Result<Vec<u8>, CodecError> {
    let level = level.unwrap_or(DEFAULT_LEVEL);
    if level > MAX_LEVEL {
        return Err(CodecError::InvalidLevel(level));
    }
    let session = create_compressor(format, level);
    run(session, input, COUNTER_MAX).map(|(bytes, _)| bytes)
}

/// Decompress a `format`-framed `input`. An empty input decompresses to an
/// empty output for every format.
pub fn inflate(input: &[u8], format: InputFormat) -> Result<Vec<u8>, CodecError> {
    if input.is_empty() {
        return Ok(Vec::new());
    }
    let session = create_decompressor(format, input);
    run(session, input, COUNTER_MAX).map(|(bytes, _)| bytes)
}

/// Drive `session` over all of `input`, growing the output buffer on demand,
/// until the codec signals logical end of stream.
///
/// Input feeds and output requests are clamped to `counter_max`, so streams
/// longer than the codec's counters are fed in several chunks. Per
/// iteration: refill the input window if the session drained it, grow the
/// output region if the session filled it (both may happen), then one codec
/// step, with finish semantics once the last input chunk has been fed.
pub(crate) fn run(
    mut session: Session,
    input: &[u8],
    counter_max: usize,
) -> Result<(Vec<u8>, DriveStats), CodecError> {
    let mut out = GrowBuf::new();
    let mut schedule = ChunkSchedule::new(counter_max);
    let mut stats = DriveStats::default();
    // input[consumed..fed] is the window currently handed to the session.
    let mut consumed = 0usize;
    let mut fed = 0usize;

    loop {
        if consumed == fed && fed < input.len() {
            fed += (input.len() - fed).min(counter_max);
            stats.input_feeds += 1;
        }
        if out.spare_len() == 0 {
            out.grow_by(schedule.take())?;
            stats.growth_steps += 1;
        }

        let finish = fed == input.len();
        let (took, made, status) = session.step(&input[consumed..fed], out.spare(), finish)?;
        consumed += took;
        out.commit(made);
        stats.bytes_in += took as u64;
        stats.bytes_out += made as u64;

        match status {
            Status::StreamEnd => break,
            Status::Ok => {}
            // Output-space exhaustion is absorbed by the growth step above;
            // no progress with spare space left means the stream can never
            // complete.
            Status::BufError => {
                if took == 0 && made == 0 && out.spare_len() > 0 {
                    return Err(CodecError::Codec {
                        msg: "buffer error".into(),
                    });
                }
            }
        }
    }

    Ok((out.into_bytes(), stats))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(len: usize) -> Vec<u8> {
        b"chunked feeding exercises the counter cap "
            .iter()
            .cycle()
            .take(len)
            .copied()
            .collect()
    }

    #[test]
    fn schedule_starts_small_and_doubles() {
        let mut schedule = ChunkSchedule::new(COUNTER_MAX);
        assert_eq!(schedule.take(), 100);
        assert_eq!(schedule.take(), 200);
        assert_eq!(schedule.take(), 400);
    }

    #[test]
    fn schedule_caps_each_request_at_counter_max() {
        let mut schedule = ChunkSchedule::new(300);
        assert_eq!(schedule.take(), 100);
        assert_eq!(schedule.take(), 200);
        assert_eq!(schedule.take(), 300, "scheduled 400 must clamp to the cap");
        assert_eq!(schedule.take(), 300, "stays clamped once past the cap");
    }

    #[test]
    fn tiny_counter_cap_forces_multiple_input_feeds() {
        let input = sample(4096);
        let session = create_compressor(Format::Zlib, 6);
        let (compressed, stats) = run(session, &input, 256).expect("compression should succeed");

        assert!(
            stats.input_feeds > 1,
            "4096 bytes through a 256-byte cap needs several feeds, got {}",
            stats.input_feeds
        );
        assert_eq!(stats.bytes_in, input.len() as u64);
        assert_eq!(stats.bytes_out, compressed.len() as u64);

        let session = create_decompressor(InputFormat::Zlib, &compressed);
        let (restored, stats) = run(session, &compressed, 256).expect("decompression should succeed");
        assert_eq!(restored, input);
        assert!(
            stats.growth_steps > 1,
            "restoring 4096 bytes through capped chunks needs several growth steps"
        );
    }

    #[test]
    fn output_growth_follows_the_schedule() {
        // Incompressible input so the compressed stream outgrows the first
        // 100-byte chunk.
        let input: Vec<u8> = (0..4096u32).map(|i| (i * 17 + 31) as u8).collect();
        let session = create_compressor(Format::Raw, 9);
        let (compressed, stats) = run(session, &input, COUNTER_MAX).expect("compression should succeed");
        assert!(compressed.len() > INITIAL_CHUNK_SIZE);
        assert!(stats.growth_steps > 1);
    }

    #[test]
    fn empty_input_compresses_without_input_feeds() {
        let session = create_compressor(Format::Zlib, 6);
        let (compressed, stats) = run(session, &[], COUNTER_MAX).expect("empty input is valid");
        assert!(!compressed.is_empty(), "an empty zlib container still has bytes");
        assert_eq!(stats.input_feeds, 0);
        assert_eq!(stats.growth_steps, 1);
    }

    #[test]
    fn truncated_stream_is_a_terminal_codec_error() {
        let input = sample(2048);
        let session = create_compressor(Format::Zlib, 6);
        let (compressed, _) = run(session, &input, COUNTER_MAX).unwrap();

        let cut = &compressed[..compressed.len() - 4];
        let session = create_decompressor(InputFormat::Zlib, cut);
        let err = run(session, cut, COUNTER_MAX).unwrap_err();
        assert!(matches!(err, CodecError::Codec { .. }), "got {err:?}");
    }
}
