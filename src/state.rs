//! Top-level long-distance matcher context: owns the window, the hash index,
//! and the derived parameters they were built from.

use crate::index::HashIndex;
use crate::params::LdmParams;
use crate::seqstore::RawSeqStore;
use crate::window::Window;

/// Owns every piece of state the long-distance matcher needs across calls:
/// the sliding window, the hash index, and the boundary marking how much of
/// a loaded dictionary has already been folded into the index.
///
/// The gear rolling-hash state is deliberately *not* kept here: a fresh one
/// is constructed for every chunk, rather than persisted across the whole
/// stream, by [`crate::generate::generate_sequences`].
#[derive(Debug, Clone)]
pub struct LdmState {
    pub(crate) params: LdmParams,
    pub(crate) window: Window,
    pub(crate) index: HashIndex,
    /// Absolute position up to which the external dictionary (if any) has
    /// already been inserted into the index.
    pub(crate) loaded_dict_end: u32,
}

impl LdmState {
    /// Build a fresh context from already-validated parameters (see
    /// [`LdmParams::adjust`]).
    pub fn new(params: LdmParams) -> Self {
        LdmState {
            index: HashIndex::new(params.hash_log, params.bucket_size_log),
            window: Window::new(),
            loaded_dict_end: 0,
            params,
        }
    }

    /// Load an external dictionary's raw content into the window before any
    /// input is processed. Does not index the dictionary's content itself;
    /// that happens lazily as [`crate::generate::generate_sequences`] scans
    /// forward past `loadedDictEnd`, exactly as it does for ordinary input.
    pub fn load_dictionary(&mut self, dict: &[u8]) {
        self.window.load_dictionary(dict);
    }

    /// Reset the context to its just-constructed state, discarding all
    /// window content and index entries but keeping `params`.
    pub fn reset(&mut self) {
        let params = self.params;
        *self = LdmState::new(params);
    }

    pub fn params(&self) -> &LdmParams {
        &self.params
    }

    pub fn window(&self) -> &Window {
        &self.window
    }
}

/// Scratch buffers owned by a caller across repeated
/// [`crate::generate::generate_sequences`] calls: the raw sequence store
/// output slot and the leftover-literal carry between chunks.
///
/// Kept separate from [`LdmState`] because a caller may want independent
/// sequence-store buffers per block while sharing one window/index across an
/// entire stream.
#[derive(Debug, Clone)]
pub struct LdmOutput {
    pub seq_store: RawSeqStore,
    /// Unconsumed literal byte count carried across chunk (and call)
    /// boundaries, prepended to the `litLength` of the next sequence a
    /// chunk produces.
    pub leftover_literals: u32,
}

impl Default for LdmOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl LdmOutput {
    /// An unbounded `seq_store` (`RawSeqStore::new()`'s `capacity::MAX`), not
    /// the derived `Default` a bare `#[derive(Default)]` would give it — that
    /// would leave `capacity == 0`, making the very first `push` report the
    /// store full.
    pub fn new() -> Self {
        LdmOutput {
            seq_store: RawSeqStore::new(),
            leftover_literals: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> LdmParams {
        LdmParams {
            window_log: 20,
            hash_log: 0,
            bucket_size_log: 0,
            min_match_length: 0,
            hash_rate_log: 0,
        }
        .adjust()
        .unwrap()
    }

    #[test]
    fn new_state_starts_empty() {
        let st = LdmState::new(params());
        assert_eq!(st.window().current_absolute_end(), 0);
        assert_eq!(st.loaded_dict_end, 0);
    }

    #[test]
    fn reset_clears_window_but_keeps_params() {
        let mut st = LdmState::new(params());
        st.window.advance(b"hello world");
        let p_before = *st.params();
        st.reset();
        assert_eq!(st.window().current_absolute_end(), 0);
        assert_eq!(*st.params(), p_before);
    }

    #[test]
    fn load_dictionary_extends_window() {
        let mut st = LdmState::new(params());
        st.load_dictionary(b"0123456789");
        assert_eq!(st.window().dict_limit(), 10);
    }
}
