//! Sequence generator: drives the gear hash, the index, and the match
//! extender over an input chunk, producing raw sequences. On a winning
//! candidate, emits the sequence, advances past the match, and fills
//! intermediate positions with a tag-gated secondary hash.

use crate::config::{CHUNK_SIZE, HASH_READ_SIZE};
use crate::error::LdmError;
use crate::extend::{extend_backward, extend_forward};
use crate::gear::RollingHashState;
use crate::index::{Entry, HashIndex};
use crate::params::LdmParams;
use crate::seqstore::RawSeq;
use crate::state::{LdmOutput, LdmState};
use crate::window::Window;

/// Base for the secondary (multiplicative) rolling hash used by the
/// tag-gated intermediate fill: a large odd 64-bit constant (the same one
/// XXH64 uses as `PRIME64_1`), chosen for its mixing properties. See
/// DESIGN.md for why this specific constant.
const PRIME_BASE: u64 = 0x9E37_79B1_85EB_CA87;

/// Process all of `src` as the next slice of an ongoing stream: extend the
/// window, run overflow correction and `maxDist` enforcement per chunk of
/// up to [`CHUNK_SIZE`] bytes, and generate raw sequences into
/// `output.seq_store`, carrying leftover literal bytes across chunks (and
/// across calls) in `output.leftover_literals`.
///
/// If the sequence store fills up partway through, processing stops
/// immediately and `LdmError::DstSizeTooSmall` is returned; every sequence
/// already pushed remains valid, but no sequence is produced for the
/// unprocessed remainder of `src` (it is not retried — a downstream
/// compressor is expected to fall back to its own short-range matching for
/// that span).
pub fn generate_sequences(
    state: &mut LdmState,
    output: &mut LdmOutput,
    src: &[u8],
) -> Result<(), LdmError> {
    let max_dist = 1u32 << state.params().window_log;
    let mut remaining = src;

    while !remaining.is_empty() {
        let chunk_len = remaining.len().min(CHUNK_SIZE);
        let (chunk, rest) = remaining.split_at(chunk_len);
        remaining = rest;

        if state.window.needs_overflow_correction(chunk_len, max_dist) {
            let correction = state.window.correct_overflow();
            if correction > 0 {
                state.index.reduce(correction);
                state.loaded_dict_end = 0;
            }
        }

        let chunk_start = state.window.advance(chunk);
        let chunk_end = chunk_start + chunk_len as u32;

        if chunk_end > max_dist {
            let new_low_limit = chunk_end - max_dist;
            if new_low_limit > state.window.low_limit() {
                state.window.release_below(new_low_limit);
                if state.loaded_dict_end != 0 && state.loaded_dict_end < new_low_limit {
                    state.loaded_dict_end = 0;
                }
            }
        }

        let params = *state.params();
        let window = &state.window;
        let index = &mut state.index;
        generate_sequences_internal(window, index, output, &params, chunk_start, chunk_end)?;
    }

    Ok(())
}

/// Generate sequences for one already-windowed chunk `[chunk_start, chunk_end)`.
fn generate_sequences_internal(
    window: &Window,
    index: &mut HashIndex,
    output: &mut LdmOutput,
    params: &LdmParams,
    chunk_start: u32,
    chunk_end: u32,
) -> Result<(), LdmError> {
    let min_match = params.min_match_length as usize;
    let chunk_len = (chunk_end - chunk_start) as usize;

    // Too small to prime the rolling hash and still leave room for a
    // candidate window before `ilimit`; the whole chunk is leftover.
    if chunk_len <= min_match + HASH_READ_SIZE {
        output.leftover_literals += chunk_len as u32;
        return Ok(());
    }

    // The whole chunk lives in one contiguous segment of the window: it was
    // just appended to the prefix buffer by `Window::advance`, so this never
    // crosses the dict/prefix boundary.
    let chunk = window.slice(chunk_start, chunk_end);

    let ilimit = chunk_end - HASH_READ_SIZE as u32;
    let mut ip = chunk_start + min_match as u32;
    let mut anchor = chunk_start;

    let mut gear = RollingHashState::new(params.min_match_length, params.hash_rate_log);
    prime_gear(&mut gear, chunk, min_match);

    let lowest_index = if window.has_ext_dict() {
        window.low_limit()
    } else {
        window.dict_limit()
    };

    let mut splits = Vec::new();
    while ip < ilimit {
        let feed_start = (ip - chunk_start) as usize;
        let feed_end = (ilimit - chunk_start) as usize;
        let consumed = gear.feed(&chunk[feed_start..feed_end], &mut splits);
        let batch_base = ip;

        for &s in &splits {
            let split_ptr = batch_base + s as u32 - min_match as u32;
            if split_ptr < ip {
                // A match found earlier in this same batch already advanced
                // `ip` past this split; it is stale.
                continue;
            }
            if split_ptr + min_match as u32 > chunk_end {
                continue;
            }

            let window_bytes = &chunk[(split_ptr - chunk_start) as usize
                ..(split_ptr - chunk_start) as usize + min_match];
            let (small_hash, checksum) = index.hash(window_bytes);

            let mut best: Option<(u32, u32, u32)> = None; // (match_pos, forward, backward)
            for entry in index.bucket(small_hash) {
                if entry.offset == 0 || entry.offset <= lowest_index || entry.checksum != checksum
                {
                    continue;
                }
                let match_pos = entry.offset;
                let forward = extend_forward(window, split_ptr, match_pos, chunk_end);
                if forward < params.min_match_length {
                    continue;
                }
                let backward = extend_backward(window, split_ptr, match_pos, anchor, lowest_index);
                let total = forward + backward;
                let keep = match best {
                    None => true,
                    Some((_, bf, bb)) => total > bf + bb,
                };
                if keep {
                    best = Some((match_pos, forward, backward));
                }
            }

            match best {
                None => {
                    index.insert(small_hash, Entry { offset: split_ptr, checksum });
                }
                Some((match_pos, forward, backward)) => {
                    let match_start = split_ptr - backward;
                    let lit_length = output.leftover_literals + (match_start - anchor);
                    output.leftover_literals = 0;

                    let seq = RawSeq {
                        lit_length,
                        match_length: forward + backward,
                        offset: split_ptr - match_pos,
                    };
                    if !output.seq_store.push(seq) {
                        return Err(LdmError::DstSizeTooSmall);
                    }

                    // Insert after extension so the winning candidate isn't
                    // clobbered mid-scan.
                    index.insert(small_hash, Entry { offset: split_ptr, checksum });

                    let new_ip = split_ptr + forward;
                    fill_intermediate(index, params, chunk, chunk_start, split_ptr + 1, new_ip);

                    ip = new_ip;
                    anchor = ip;
                }
            }
        }

        if consumed == 0 {
            break;
        }
        ip = ip.max(batch_base + consumed as u32);
    }

    output.leftover_literals += chunk_end - anchor;
    Ok(())
}

/// Feed the first `min_match` bytes of `chunk` into `gear`, discarding any
/// splits produced along the way, so the rolling hash is warmed up before
/// the first real candidate lookup.
fn prime_gear(gear: &mut RollingHashState, chunk: &[u8], min_match: usize) {
    let mut primed = 0usize;
    let mut discard = Vec::new();
    while primed < min_match {
        let n = gear.feed(&chunk[primed..min_match], &mut discard);
        if n == 0 {
            break;
        }
        primed += n;
    }
}

/// Classic Rabin-Karp rolling hash used only by [`fill_intermediate`], with
/// precomputed `hash_power = PRIME_BASE^(minMatchLength-1)` so the leading
/// byte's contribution can be subtracted in O(1) as the window slides.
struct SecondaryHash {
    hash: u64,
    hash_power: u64,
}

impl SecondaryHash {
    fn new(window: &[u8]) -> Self {
        let mut hash = 0u64;
        for &b in window {
            hash = hash.wrapping_mul(PRIME_BASE).wrapping_add(b as u64);
        }
        let hash_power = PRIME_BASE.wrapping_pow((window.len().saturating_sub(1)) as u32);
        SecondaryHash { hash, hash_power }
    }

    fn roll(&mut self, old_byte: u8, new_byte: u8) {
        self.hash = self
            .hash
            .wrapping_sub((old_byte as u64).wrapping_mul(self.hash_power))
            .wrapping_mul(PRIME_BASE)
            .wrapping_add(new_byte as u64);
    }
}

/// Fill the hash index at every position in `[from, to)` whose
/// `minMatchLength`-byte window passes the tag predicate, using the
/// secondary rolling hash rather than re-running XXH64 at each position.
fn fill_intermediate(
    index: &mut HashIndex,
    params: &LdmParams,
    chunk: &[u8],
    chunk_start: u32,
    from: u32,
    to: u32,
) {
    if from >= to {
        return;
    }
    let min_match = params.min_match_length as usize;
    let chunk_end = chunk_start + chunk.len() as u32;
    if from + min_match as u32 > chunk_end {
        return;
    }

    let start_idx = (from - chunk_start) as usize;
    let mut sh = SecondaryHash::new(&chunk[start_idx..start_idx + min_match]);
    let tag_mask = index.tag_mask(params.hash_rate_log);

    let mut pos = from;
    loop {
        if tag_mask != 0 && (sh.hash & tag_mask) == tag_mask {
            let small_hash = index.small_hash_from_u64(sh.hash);
            let checksum = index.checksum_from_u64(sh.hash);
            index.insert(small_hash, Entry { offset: pos, checksum });
        }
        if pos + 1 >= to {
            break;
        }
        let idx = (pos - chunk_start) as usize;
        if idx + min_match >= chunk.len() {
            break;
        }
        sh.roll(chunk[idx], chunk[idx + min_match]);
        pos += 1;
    }
}
