//! Long-distance matcher (LDM) — a content-defined pre-pass that scans an
//! input stream with a window far larger than a typical block compressor's
//! and emits back-reference sequences for long repeated substrings, for a
//! downstream block compressor to consume.
//!
//! This crate implements only the matcher itself (components C1–C7): the
//! gear rolling hash, the bucketed hash index, the sliding window, the
//! match extender, the sequence generator, and the sequence
//! consumer/splitter. The downstream block compressor, entropy coder,
//! frame format, CLI, and multithreading glue are external collaborators
//! represented in [`collab`] only as trait contracts — never implemented
//! here.

pub mod collab;
pub mod config;
pub mod error;
pub mod extend;
pub mod gear;
mod gear_table;
pub mod generate;
pub mod index;
pub mod params;
pub mod seqstore;
pub mod state;
pub mod window;
pub mod xxhash;

pub use error::LdmError;
pub use generate::generate_sequences;
pub use params::LdmParams;
pub use seqstore::{RawSeq, RawSeqStore};
pub use state::{LdmOutput, LdmState};
pub use window::Window;

/// Construct a ready-to-use long-distance matcher context from tuning
/// parameters, applying zero-value defaulting rules and bounds checks.
pub fn create(params: LdmParams) -> Result<LdmState, LdmError> {
    Ok(LdmState::new(params.adjust()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_rejects_bad_params() {
        let params = LdmParams {
            window_log: 3, // below WINDOWLOG_MIN
            hash_log: 0,
            bucket_size_log: 0,
            min_match_length: 0,
            hash_rate_log: 0,
        };
        assert!(create(params).is_err());
    }

    #[test]
    fn create_then_generate_round_trips() {
        let params = LdmParams {
            window_log: 20,
            hash_log: 0,
            bucket_size_log: 0,
            min_match_length: 16,
            hash_rate_log: 0,
        };
        let mut state = create(params).unwrap();
        let mut output = LdmOutput::new();
        let half: Vec<u8> = (0..8192u32).map(|i| (i.wrapping_mul(2654435761)) as u8).collect();
        let mut data = half.clone();
        data.extend_from_slice(&half);
        generate_sequences(&mut state, &mut output, &data).unwrap();
        assert!(!output.seq_store.is_empty());
    }
}
