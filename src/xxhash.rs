//! Thin wrapper around the `xxhash-rust` crate providing the XXH64 one-shot
//! hash used as the secondary (checksum-and-bucket-selecting) hash of the
//! long-distance matcher.

/// One-shot XXH64 hash of a byte slice, used to hash each split's
/// `minMatchLength`-byte window.
#[inline]
pub fn xxh64_oneshot(data: &[u8], seed: u64) -> u64 {
    xxhash_rust::xxh64::xxh64(data, seed)
}
