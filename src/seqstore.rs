//! Raw sequence store: the output of the generator and the input to a
//! downstream block compressor.

/// One emitted sequence: `litLength` bytes of literals, immediately followed
/// by a match of `matchLength` bytes at `offset` bytes back from the current
/// position. `offset == 0` is the sentinel for "no match here, literals
/// only" used by [`RawSeqStore::split_at`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RawSeq {
    pub lit_length: u32,
    pub match_length: u32,
    pub offset: u32,
}

/// An ordered, capacity-bounded list of [`RawSeq`] records together with a
/// read cursor, used to hand sequences to a downstream block compressor
/// incrementally.
///
/// All allocation happens up front: a context is constructed with room for
/// `chunkSize / minMatchLength` sequences (the maximum a single chunk could
/// ever produce), and [`RawSeqStore::push`] reports back pressure instead
/// of growing past it.
#[derive(Debug, Clone, Default)]
pub struct RawSeqStore {
    seq: Vec<RawSeq>,
    capacity: usize,
    /// Index into `seq` of the next sequence to be consumed.
    pos: usize,
    /// Byte offset already consumed from `seq[pos]` (may fall inside its
    /// `litLength` span or, once that's exhausted, its `matchLength` span).
    /// Only advanced by [`RawSeqStore::skip_raw_seq_store_bytes`]; the
    /// `split_at`/`skip` pair instead truncates fields of `seq[pos]` itself.
    pos_in_sequence: u32,
}

impl RawSeqStore {
    /// An unbounded store (capacity `usize::MAX`), for tests and contexts
    /// that don't care about back pressure.
    pub fn new() -> Self {
        RawSeqStore {
            seq: Vec::new(),
            capacity: usize::MAX,
            pos: 0,
            pos_in_sequence: 0,
        }
    }

    /// A store bounded to `capacity` sequences, matching the
    /// `chunkSize / minMatchLength` maximum-sequences-per-chunk sizing.
    pub fn with_capacity(capacity: usize) -> Self {
        RawSeqStore {
            seq: Vec::with_capacity(capacity),
            capacity,
            pos: 0,
            pos_in_sequence: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Total number of sequences ever pushed (including already-consumed
    /// ones).
    pub fn size(&self) -> usize {
        self.seq.len()
    }

    pub fn is_full(&self) -> bool {
        self.seq.len() >= self.capacity
    }

    /// Append a freshly generated sequence. Called by the generator; never
    /// by a downstream consumer. Returns `false` (and does not store the
    /// sequence) if the store is already at capacity — the caller surfaces
    /// `LdmError::DstSizeTooSmall` in that case.
    #[must_use]
    pub fn push(&mut self, seq: RawSeq) -> bool {
        if self.is_full() {
            return false;
        }
        self.seq.push(seq);
        true
    }

    /// Borrow every sequence still wholly or partially unconsumed, in
    /// delivery order. Useful for inspecting or verifying the store's
    /// content without driving it through the consumer-side `split_at`/`skip`
    /// API.
    pub fn remaining_sequences(&self) -> &[RawSeq] {
        &self.seq[self.pos..]
    }

    /// Number of sequences still wholly or partially unconsumed.
    pub fn remaining(&self) -> usize {
        self.seq.len().saturating_sub(self.pos)
    }

    /// Whether every sequence has been fully consumed.
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Clear all sequences and reset the cursor, for reuse across chunks.
    pub fn clear(&mut self) {
        self.seq.clear();
        self.pos = 0;
        self.pos_in_sequence = 0;
    }

    /// The sequence the cursor currently points into, if any remain.
    pub fn current(&self) -> Option<RawSeq> {
        self.seq.get(self.pos).copied()
    }

    /// Deliver the next sequence, splitting it if it does not fit entirely
    /// within `remaining` bytes of block space, and enforcing the
    /// downstream compressor's own `min_match` after any split. Returns
    /// `None` if nothing remains.
    ///
    /// Outcomes:
    /// - fits whole: delivered unchanged, cursor advances one sequence.
    /// - `remaining <= litLength`: delivers a pure-literal terminator
    ///   `{litLength: remaining, matchLength: 0, offset: 0}`; the stored
    ///   sequence's `litLength` is decremented by `remaining` (via `skip`)
    ///   so the rest of it is still available to a later block.
    /// - otherwise: delivers `{litLength, matchLength': remaining - litLength,
    ///   offset}`, clearing `offset` to 0 if `matchLength' < min_match`
    ///   (too short a fragment for the downstream compressor to use). The
    ///   undelivered tail of the match is folded into the following
    ///   sequence's `litLength` if it too falls below `min_match`, or kept
    ///   as a standalone sequence for the next block otherwise (via `skip`).
    pub fn split_at(&mut self, remaining: u32, min_match: u32) -> Option<RawSeq> {
        if self.is_empty() {
            return None;
        }
        let mut seq = self.seq[self.pos];
        let span = seq.lit_length + seq.match_length;
        if remaining >= span {
            self.pos += 1;
            self.pos_in_sequence = 0;
            return Some(seq);
        }
        if remaining <= seq.lit_length {
            seq.lit_length = remaining;
            seq.match_length = 0;
            seq.offset = 0;
        } else {
            seq.match_length = remaining - seq.lit_length;
            if seq.match_length < min_match {
                seq.offset = 0;
            }
        }
        self.skip(remaining, min_match);
        Some(seq)
    }

    /// Advance the cursor by `remaining` bytes' worth of a downstream
    /// compressor's own output, enforcing `min_match` on whatever partial
    /// match is left dangling at the cut: a remainder shorter than
    /// `min_match` is dropped and folded into the following sequence's
    /// `litLength`; a remainder at least `min_match` long is kept in place
    /// for a later call to consume.
    pub fn skip(&mut self, mut remaining: u32, min_match: u32) {
        while remaining > 0 && !self.is_empty() {
            let idx = self.pos;
            if remaining <= self.seq[idx].lit_length {
                self.seq[idx].lit_length -= remaining;
                return;
            }
            remaining -= self.seq[idx].lit_length;
            self.seq[idx].lit_length = 0;

            if remaining < self.seq[idx].match_length {
                self.seq[idx].match_length -= remaining;
                if self.seq[idx].match_length < min_match {
                    let carried = self.seq[idx].match_length;
                    if idx + 1 < self.seq.len() {
                        self.seq[idx + 1].lit_length += carried;
                    }
                    self.pos += 1;
                    self.pos_in_sequence = 0;
                }
                return;
            }
            remaining -= self.seq[idx].match_length;
            self.seq[idx].match_length = 0;
            self.pos += 1;
            self.pos_in_sequence = 0;
        }
    }

    /// Advance the cursor by `bytes` bytes of a downstream compressor's own
    /// output, consuming literal and match spans of whole or partial
    /// sequences in order, without ever emitting anything — used by the
    /// opt-parser path (`btopt` and above) that treats the raw-seq store as
    /// mere hints rather than sequences it must honor.
    pub fn skip_raw_seq_store_bytes(&mut self, mut bytes: u32) {
        while bytes > 0 && !self.is_empty() {
            let seq = self.seq[self.pos];
            let span = seq.lit_length + seq.match_length;
            let remaining_in_seq = span - self.pos_in_sequence;

            if bytes < remaining_in_seq {
                self.pos_in_sequence += bytes;
                bytes = 0;
            } else {
                bytes -= remaining_in_seq;
                self.pos += 1;
                self.pos_in_sequence = 0;
            }
        }
    }
}
