/// First output chunk requested from the growth schedule.
pub const INITIAL_CHUNK_SIZE: usize = 100;

/// Deflate level used when the caller does not pick one (balanced).
pub const DEFAULT_LEVEL: u32 = 6;

/// Highest deflate level accepted.
pub const MAX_LEVEL: u32 = 9;

/// Largest single input feed or output request the codec's 32-bit counters
/// can express.
pub const COUNTER_MAX: usize = u32::MAX as usize;

/// Window size handed to every session; selects the full 32 KiB dictionary.
pub const WINDOW_BITS: u8 = 15;
