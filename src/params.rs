//! Tuning parameters for the long-distance matcher, and the defaulting and
//! validation rules applied when a context is constructed.

use crate::config::{
    BUCKET_SIZE_LOG_MAX, BUCKET_SIZE_LOG_MIN, HASHLOG_MAX, HASHLOG_MIN,
    LDM_BUCKET_SIZE_LOG_DEFAULT, LDM_HASH_RLOG_DEFAULT, LDM_MIN_MATCH_LENGTH_DEFAULT,
    MIN_MATCH_LENGTH_MAX, MIN_MATCH_LENGTH_MIN, WINDOWLOG_MAX, WINDOWLOG_MIN,
};
use crate::error::LdmError;

/// User-facing tuning parameters for a long-distance matcher context.
///
/// A value of `0` in any field other than `windowLog` requests the default
/// for that field, derived (where applicable) from `windowLog`. `windowLog`
/// itself has no default: it must always be supplied explicitly, since it
/// fixes the memory budget of the whole context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LdmParams {
    /// log2 of the maximum distance a match offset may reference.
    pub window_log: u32,
    /// log2 of the total number of entries in the hash index (grouped into
    /// `2^(hashLog - bucketSizeLog)` buckets). `0` requests the default,
    /// `max(HASHLOG_MIN, windowLog - 7)`.
    pub hash_log: u32,
    /// log2 of the number of entries per bucket. `0` requests
    /// [`LDM_BUCKET_SIZE_LOG_DEFAULT`].
    pub bucket_size_log: u32,
    /// Minimum length, in bytes, of a match the generator will emit. `0`
    /// requests [`LDM_MIN_MATCH_LENGTH_DEFAULT`].
    pub min_match_length: u32,
    /// log2 of the fraction of split positions that are inserted into the
    /// index (every `2^hashRateLog`th one). `0` requests a value derived from
    /// `windowLog` and `hashLog`, floored at 0: `max(windowLog - hashLog, 0)`
    /// when `windowLog > hashLog`, else [`LDM_HASH_RLOG_DEFAULT`].
    pub hash_rate_log: u32,
}

impl LdmParams {
    /// Apply the zero-value defaulting rules and validate the result
    /// against the documented bounds, returning the adjusted, ready-to-use
    /// parameter set.
    pub fn adjust(mut self) -> Result<Self, LdmError> {
        if self.hash_log == 0 {
            self.hash_log = self.window_log.saturating_sub(7).max(HASHLOG_MIN);
        }
        if self.bucket_size_log == 0 {
            self.bucket_size_log = LDM_BUCKET_SIZE_LOG_DEFAULT;
        }
        if self.min_match_length == 0 {
            self.min_match_length = LDM_MIN_MATCH_LENGTH_DEFAULT;
        }
        if self.hash_rate_log == 0 {
            self.hash_rate_log = if self.window_log > self.hash_log {
                self.window_log - self.hash_log
            } else {
                LDM_HASH_RLOG_DEFAULT
            };
        }

        // §3: `bucketSizeLog <- min(bucketSizeLog, hashLog)`. A clamp, not a
        // bounds violation: a caller asking for more entries per bucket than
        // there are buckets' worth of hash bits just gets capped.
        self.bucket_size_log = self.bucket_size_log.min(self.hash_log);

        self.validate()
    }

    fn validate(self) -> Result<Self, LdmError> {
        check("windowLog", self.window_log, WINDOWLOG_MIN, WINDOWLOG_MAX)?;
        check("hashLog", self.hash_log, HASHLOG_MIN, HASHLOG_MAX)?;
        check(
            "bucketSizeLog",
            self.bucket_size_log,
            BUCKET_SIZE_LOG_MIN,
            BUCKET_SIZE_LOG_MAX,
        )?;
        check(
            "minMatchLength",
            self.min_match_length,
            MIN_MATCH_LENGTH_MIN,
            MIN_MATCH_LENGTH_MAX,
        )?;
        // hashRateLog has no independent bound beyond fitting in a rolling
        // hash stop mask, which RollingHashState::new clamps at 64 bits.
        Ok(self)
    }

    /// Number of buckets in the hash index, `2^(hashLog - bucketSizeLog)`.
    pub fn num_buckets(&self) -> usize {
        1usize << (self.hash_log - self.bucket_size_log)
    }

    /// Number of entries per bucket, `2^bucketSizeLog`.
    pub fn bucket_size(&self) -> usize {
        1usize << self.bucket_size_log
    }
}

fn check(field: &'static str, value: u32, min: u32, max: u32) -> Result<(), LdmError> {
    if value < min || value > max {
        Err(LdmError::ParameterOutOfBounds { field, value })
    } else {
        Ok(())
    }
}
