//! checksum.rs
//! CRC-32 and Adler-32 passthrough over the external checksum primitives.

use adler32::RollingAdler32;
use crc32fast::Hasher;

/// CRC-32 initial value.
pub const CRC32_SEED: u32 = 0;

/// Adler-32 initial value.
pub const ADLER32_SEED: u32 = 1;

/// CRC-32 of `data` from the standard seed. `crc32(b"") == 0`.
pub fn crc32(data: &[u8]) -> u32 {
    crc32_from(CRC32_SEED, data)
}

/// Continue a CRC-32 from a previously returned value.
pub fn crc32_from(seed: u32, data: &[u8]) -> u32 {
    let mut hasher = Hasher::new_with_initial(seed);
    hasher.update(data);
    hasher.finalize()
}

/// Adler-32 of `data` from the standard seed. `adler32(b"") == 1`.
pub fn adler32(data: &[u8]) -> u32 {
    adler32_from(ADLER32_SEED, data)
}

/// Continue an Adler-32 from a previously returned value.
pub fn adler32_from(seed: u32, data: &[u8]) -> u32 {
    let mut hasher = RollingAdler32::from_value(seed);
    hasher.update_buffer(data);
    hasher.hash()
}
