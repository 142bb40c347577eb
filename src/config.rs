// config.rs — Compile-time configuration constants for the long-distance
// matcher: component defaults, fixed implementation choices, and the
// tuning-parameter bounds enforced at context construction.

/// Default bucket size (log2 of entries per bucket).
pub const LDM_BUCKET_SIZE_LOG_DEFAULT: u32 = 3;

/// Default minimum match length in bytes.
pub const LDM_MIN_MATCH_LENGTH_DEFAULT: u32 = 64;

/// Default hash-rate log (bits below `hashLog` sampled for insertion) when
/// unset and derivable from `windowLog`/`hashLog`.
pub const LDM_HASH_RLOG_DEFAULT: u32 = 7;

/// Maximum number of content-defined split offsets produced by one call to
/// the gear hash's `feed`.
pub const LDM_LOOKAHEAD_SPLITS: usize = 64;

/// Number of bytes read at a time by the forward-extension fast loop and
/// used to compute `ilimit` in the sequence generator: one 64-bit word.
pub const HASH_READ_SIZE: usize = 8;

/// Size of each chunk the sequence generator processes at a time, and the
/// granularity at which window overflow correction and `maxDist`
/// enforcement run.
pub const CHUNK_SIZE: usize = 1 << 20;

// ─────────────────────────────────────────────────────────────────────────────
// Tuning parameter bounds (bit-exact, compatibility-critical)
// ─────────────────────────────────────────────────────────────────────────────

pub const WINDOWLOG_MIN: u32 = 10;
pub const WINDOWLOG_MAX: u32 = 31;

pub const HASHLOG_MIN: u32 = 6;
pub const HASHLOG_MAX: u32 = 26;

pub const BUCKET_SIZE_LOG_MIN: u32 = 1;
/// Bucket cursors are stored as a single byte per bucket, which bounds
/// `bucketSizeLog` at 8 regardless of what a caller requests.
pub const BUCKET_SIZE_LOG_MAX: u32 = 8;

pub const MIN_MATCH_LENGTH_MIN: u32 = 4;
pub const MIN_MATCH_LENGTH_MAX: u32 = 4096;
