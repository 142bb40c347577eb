//! Bucketed hash index.
//!
//! Bucket selection and round-robin cursor management follow a flat
//! preallocated-`Vec` table layout sized once at construction, with no
//! resizing afterward.

use crate::xxhash::xxh64_oneshot;

/// One slot of the hash index: the absolute offset a candidate match begins
/// at, and a short checksum used to cheaply reject false-positive bucket
/// hits before doing the expensive byte-by-byte comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Entry {
    pub offset: u32,
    pub checksum: u32,
}

/// Fixed-size bucketed hash index mapping a `minMatchLength`-byte hash to a
/// small set of candidate offsets.
///
/// Never resizes after construction; `reduce` rewrites offsets in place, it
/// does not grow or shrink the table.
#[derive(Debug, Clone)]
pub struct HashIndex {
    /// log2 of the number of buckets, i.e. `hashLog - bucketSizeLog`.
    bucket_log: u32,
    bucket_size_log: u32,
    table: Vec<Entry>,
    /// Round-robin insertion cursor per bucket. One byte per bucket bounds
    /// `bucketSizeLog` at 8 (config::BUCKET_SIZE_LOG_MAX).
    cursors: Vec<u8>,
}

impl HashIndex {
    /// Allocate a zeroed index of `2^hashLog` total entries, grouped into
    /// `2^(hashLog - bucketSizeLog)` buckets of `2^bucketSizeLog` entries
    /// each.
    pub fn new(hash_log: u32, bucket_size_log: u32) -> Self {
        debug_assert!(hash_log >= bucket_size_log);
        let bucket_log = hash_log - bucket_size_log;
        let num_buckets = 1usize << bucket_log;
        let bucket_size = 1usize << bucket_size_log;
        HashIndex {
            bucket_log,
            bucket_size_log,
            table: vec![Entry::default(); num_buckets * bucket_size],
            cursors: vec![0u8; num_buckets],
        }
    }

    fn bucket_size(&self) -> usize {
        1usize << self.bucket_size_log
    }

    /// Secondary hash of a `minMatchLength`-byte window, split into a bucket
    /// selector (`hashLog - bucketSizeLog` bits) and a checksum (next 32 bits
    /// up), both derived from one XXH64 call.
    pub fn hash(&self, window: &[u8]) -> (u32, u32) {
        let h = xxh64_oneshot(window, 0);
        let small_hash = (h & ((1u64 << self.bucket_log) - 1)) as u32;
        let checksum = ((h >> 32) & 0xFFFF_FFFF) as u32;
        (small_hash, checksum)
    }

    /// Number of bits a bucket selector occupies, `hashLog - bucketSizeLog`.
    /// Exposed for the secondary (multiplicative) rolling hash used by the
    /// tag-gated intermediate fill, which shares this crate's bucket layout
    /// but is driven by a different hash value than [`HashIndex::hash`].
    pub fn bucket_log(&self) -> u32 {
        self.bucket_log
    }

    /// Bucket selector from a raw 64-bit hash value, taking the *top*
    /// `bucket_log` bits rather than the low bits `hash` uses for the
    /// primary (XXH64) candidate hash.
    pub fn small_hash_from_u64(&self, h: u64) -> u32 {
        (h >> (64 - self.bucket_log)) as u32
    }

    /// Checksum from a raw 64-bit hash value: its low 32 bits.
    pub fn checksum_from_u64(&self, h: u64) -> u32 {
        (h & 0xFFFF_FFFF) as u32
    }

    /// Mask selecting the `hashRateLog` bits immediately below the top
    /// `bucket_log` bits of a raw 64-bit hash value. The tag-gated
    /// intermediate fill inserts only when all of these bits are set,
    /// Bernoulli-sampling roughly one in `2^hashRateLog` positions.
    pub fn tag_mask(&self, hash_rate_log: u32) -> u64 {
        if hash_rate_log == 0 || self.bucket_log + hash_rate_log > 64 {
            return 0;
        }
        let shift = 64 - self.bucket_log - hash_rate_log;
        ((1u64 << hash_rate_log) - 1) << shift
    }

    /// Return the slice of entries making up the bucket `small_hash` selects.
    pub fn bucket(&self, small_hash: u32) -> &[Entry] {
        let size = self.bucket_size();
        let start = small_hash as usize * size;
        &self.table[start..start + size]
    }

    /// Insert `entry` into the bucket `small_hash` selects, overwriting the
    /// slot the bucket's round-robin cursor currently points at and
    /// advancing the cursor.
    pub fn insert(&mut self, small_hash: u32, entry: Entry) {
        let size = self.bucket_size();
        let start = small_hash as usize * size;
        let cursor = &mut self.cursors[small_hash as usize];
        self.table[start + *cursor as usize] = entry;
        // Mask rather than `%`: at `bucket_size_log == 8`, `size as u8`
        // truncates to 0, which would both divide-by-zero on `%` and
        // overflow `*cursor + 1` at 255. Masking wraps correctly at 256.
        let mask = (size - 1) as u8;
        *cursor = cursor.wrapping_add(1) & mask;
    }

    /// Subtract `correction` from every entry's offset, clamping at zero, so
    /// that offsets remain meaningful after the window's absolute base has
    /// been shifted down by `correction` (see `window::Window::correct_overflow`).
    pub fn reduce(&mut self, correction: u32) {
        for entry in &mut self.table {
            entry.offset = entry.offset.saturating_sub(correction);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_bucket_round_trip() {
        let mut idx = HashIndex::new(4, 2); // 16 buckets, 4 entries each
        let (small_hash, checksum) = idx.hash(b"0123456789abcdef");
        idx.insert(
            small_hash,
            Entry {
                offset: 42,
                checksum,
            },
        );
        let bucket = idx.bucket(small_hash);
        assert!(bucket.iter().any(|e| e.offset == 42 && e.checksum == checksum));
    }

    #[test]
    fn insertion_is_round_robin_within_bucket() {
        let mut idx = HashIndex::new(2, 2); // 4 buckets, 4 entries each
        let small_hash = 0u32;
        for i in 0..6u32 {
            idx.insert(
                small_hash,
                Entry {
                    offset: i,
                    checksum: 0,
                },
            );
        }
        // After 6 inserts into a 4-slot bucket, slots hold offsets 4,5,2,3
        // in round-robin order (0,1 overwritten by 4,5).
        let bucket = idx.bucket(small_hash);
        let offsets: Vec<u32> = bucket.iter().map(|e| e.offset).collect();
        assert_eq!(offsets, vec![4, 5, 2, 3]);
    }

    #[test]
    fn reduce_shifts_all_offsets_down() {
        let mut idx = HashIndex::new(2, 1);
        idx.insert(
            0,
            Entry {
                offset: 1000,
                checksum: 7,
            },
        );
        idx.reduce(400);
        assert_eq!(idx.bucket(0)[0].offset, 600);
        assert_eq!(idx.bucket(0)[0].checksum, 7);
    }

    #[test]
    fn reduce_saturates_at_zero() {
        let mut idx = HashIndex::new(1, 1);
        idx.insert(
            0,
            Entry {
                offset: 10,
                checksum: 1,
            },
        );
        idx.reduce(1000);
        assert_eq!(idx.bucket(0)[0].offset, 0);
    }

    #[test]
    fn hash_is_deterministic_and_bucket_bounded() {
        let idx = HashIndex::new(6, 3);
        let (h1, c1) = idx.hash(b"abcdefgh");
        let (h2, c2) = idx.hash(b"abcdefgh");
        assert_eq!((h1, c1), (h2, c2));
        assert!(h1 < (1u32 << (6 - 3)));
    }

    #[test]
    fn small_hash_from_u64_uses_top_bits() {
        let idx = HashIndex::new(6, 3); // bucket_log = 3
        let h = 0b111u64 << 61; // top 3 bits set
        assert_eq!(idx.small_hash_from_u64(h), 0b111);
    }

    #[test]
    fn checksum_from_u64_is_low_32_bits() {
        let idx = HashIndex::new(6, 3);
        let h = 0xDEAD_BEEF_u64 | (0xFFu64 << 56);
        assert_eq!(idx.checksum_from_u64(h), 0xDEAD_BEEF);
    }

    #[test]
    fn tag_mask_selects_bits_below_bucket_selector() {
        let idx = HashIndex::new(6, 3); // bucket_log = 3
        let mask = idx.tag_mask(4); // hashRateLog = 4
        assert_eq!(mask, 0b1111u64 << (64 - 3 - 4));
        assert_eq!(idx.tag_mask(0), 0);
    }
}
