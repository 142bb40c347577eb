//! Gear rolling hash — content-defined chunking.
//!
//! A scalar shift-and-add rolling hash over a fixed 256-entry mixing table,
//! used to pick deterministic split points in the input stream. Only the
//! scalar variant is implemented; a lane-parallel variant is possible but
//! adds complexity this crate doesn't need.

use crate::config::LDM_LOOKAHEAD_SPLITS;
use crate::gear_table::GEAR_TAB;

/// Rolling-hash state for content-defined chunking.
///
/// Carries only the 64-bit accumulator and the precomputed stop mask, so it
/// is cheap to pass by mutable reference across chunk boundaries — the same
/// byte stream fed through arbitrary chunk splits produces identical split
/// positions.
#[derive(Clone, Copy, Debug)]
pub struct RollingHashState {
    rolling: u64,
    stop_mask: u64,
}

impl RollingHashState {
    /// Initialise a fresh rolling-hash state for the given `minMatchLength`
    /// and `hashRateLog`.
    ///
    /// The stop mask is derived as `maxBits = min(minMatchLength, 64)`,
    /// `minBits = hashRateLog`.
    pub fn new(min_match_length: u32, hash_rate_log: u32) -> Self {
        let max_bits_in_mask = min_match_length.min(64);
        let min_bits_in_mask = hash_rate_log;

        let stop_mask = if min_bits_in_mask > 0 && min_bits_in_mask <= max_bits_in_mask {
            (((1u64) << min_bits_in_mask) - 1) << (max_bits_in_mask - min_bits_in_mask)
        } else {
            // Degenerate case: honor the hash rate directly.
            (1u64 << min_bits_in_mask) - 1
        };

        RollingHashState {
            rolling: !(0u32) as u64,
            stop_mask,
        }
    }

    /// Consume bytes of `data` left to right, updating the rolling hash and
    /// appending a split offset (1-based into `data`, i.e. the position
    /// *after* the byte that triggered the stop predicate) each time
    /// `(rolling & stopMask) == 0`.
    ///
    /// Stops after appending [`LDM_LOOKAHEAD_SPLITS`] splits or after
    /// consuming all of `data`, whichever happens first. Returns the number
    /// of bytes actually consumed.
    pub fn feed(&mut self, data: &[u8], splits: &mut Vec<usize>) -> usize {
        let mut hash = self.rolling;
        let mask = self.stop_mask;
        let mut n = 0usize;

        splits.clear();

        'outer: while n < data.len() {
            hash = (hash << 1).wrapping_add(GEAR_TAB[data[n] as usize]);
            n += 1;
            if (hash & mask) == 0 {
                splits.push(n);
                if splits.len() == LDM_LOOKAHEAD_SPLITS {
                    break 'outer;
                }
            }
        }

        self.rolling = hash;
        n
    }
}
