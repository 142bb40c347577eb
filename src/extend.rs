//! Match extension: growing a candidate match forward and backward as far as
//! the bytes agree, including across the prefix/external-dictionary
//! boundary.

use crate::window::{Segment, Window};

/// Count how many leading bytes of `a` and `b` agree.
#[inline]
fn common_prefix_len(a: &[u8], b: &[u8]) -> usize {
    let n = a.len().min(b.len());
    for i in 0..n {
        if a[i] != b[i] {
            return i;
        }
    }
    n
}

/// Count how many trailing bytes of `a` and `b` agree.
#[inline]
fn common_suffix_len(a: &[u8], b: &[u8]) -> usize {
    let n = a.len().min(b.len());
    for i in 0..n {
        if a[a.len() - 1 - i] != b[b.len() - 1 - i] {
            return i;
        }
    }
    n
}

/// Extend a candidate match forward from `ip`/`match_pos` (absolute
/// positions) up to `ilimit` (exclusive, absolute), stopping early if the
/// match's source (`match_pos`'s segment) and the input being matched
/// (`ip`'s segment) diverge at a byte.
///
/// Forward extension only ever reads within a single segment on the input
/// side (it always reads from the current prefix, since `ip` is always at
/// or ahead of `dictLimit`); the match side can still cross from the
/// external dictionary into the prefix partway through, which is handled
/// below.
pub fn extend_forward(window: &Window, ip: u32, match_pos: u32, ilimit: u32) -> u32 {
    debug_assert!(window.segment_of(ip) == Segment::Prefix);
    let max_len = (ilimit - ip) as usize;

    match window.segment_of(match_pos) {
        Segment::Prefix => {
            let input = window.slice(ip, ip + max_len as u32);
            let source = window.slice(match_pos, window.current_absolute_end());
            common_prefix_len(input, source) as u32
        }
        Segment::ExternalDict => {
            let dict_end = window.dict_limit();
            let dict_avail = (dict_end - match_pos) as usize;
            let first_len = dict_avail.min(max_len);
            let input_head = window.slice(ip, ip + first_len as u32);
            let dict_tail = window.slice(match_pos, dict_end);
            let matched_in_dict = common_prefix_len(input_head, dict_tail);
            if matched_in_dict < first_len || first_len == max_len {
                return matched_in_dict as u32;
            }
            // The match ran to the end of the dictionary segment and there is
            // still input left to compare: continue into the prefix segment,
            // matching against the prefix from its own start (dictLimit).
            let remaining = max_len - first_len;
            let input_rest = window.slice(ip + first_len as u32, ip + max_len as u32);
            let prefix_start = window.slice(dict_end, window.current_absolute_end());
            let extra = common_prefix_len(
                input_rest,
                &prefix_start[..remaining.min(prefix_start.len())],
            );
            (matched_in_dict + extra) as u32
        }
        Segment::OutOfWindow => 0,
    }
}

/// Extend a candidate match backward from `ip`/`match_pos` (absolute,
/// exclusive end positions — i.e. one past the last byte already known to
/// match), stopping at `lowest_ip` on the input side or `lowest_match` on
/// the match side (both absolute, inclusive lower bounds), whichever is
/// reached first, or at a mismatching byte.
///
/// Handles both the single-segment case and the case where the match
/// source crosses from the prefix back into the external dictionary.
pub fn extend_backward(
    window: &Window,
    ip: u32,
    match_pos: u32,
    lowest_ip: u32,
    lowest_match: u32,
) -> u32 {
    let max_len = (ip - lowest_ip).min(match_pos - lowest_match) as usize;
    if max_len == 0 {
        return 0;
    }

    let stays_within_prefix = window.segment_of(match_pos - 1) == Segment::Prefix
        && match_pos - max_len as u32 >= window.dict_limit();

    if stays_within_prefix {
        let input = window.slice(ip - max_len as u32, ip);
        let source = window.slice(match_pos - max_len as u32, match_pos);
        common_suffix_len(input, source) as u32
    } else {
        extend_backward_2segments(window, ip, match_pos, max_len)
    }
}

/// Backward extension when the match source may cross from the prefix back
/// into the external dictionary segment partway through.
fn extend_backward_2segments(window: &Window, ip: u32, match_pos: u32, max_len: usize) -> u32 {
    let dict_limit = window.dict_limit();

    // Bytes available in the prefix portion of the match source, above dict_limit.
    let prefix_avail = (match_pos.saturating_sub(dict_limit)) as usize;
    let first_len = prefix_avail.min(max_len);

    let input_tail = window.slice(ip - first_len as u32, ip);
    let source_tail = window.slice(match_pos - first_len as u32, match_pos);
    let matched_in_prefix = common_suffix_len(input_tail, source_tail);

    if matched_in_prefix < first_len || first_len == max_len {
        return matched_in_prefix as u32;
    }

    // Matched all the way back to dict_limit on the source side with more
    // budget left: continue comparing into the external dictionary segment,
    // against the corresponding earlier bytes of the input.
    let remaining = max_len - first_len;
    let input_head_end = ip - first_len as u32;
    let input_head_start = input_head_end - remaining as u32;
    let input_head = window.slice(input_head_start, input_head_end);
    let dict_tail = window.slice(dict_limit - remaining as u32, dict_limit);
    let extra = common_suffix_len(input_head, dict_tail);

    (matched_in_prefix + extra) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_extension_within_prefix() {
        let mut w = Window::new();
        w.advance(b"abcabcabcXXXX");
        let matched = extend_forward(&w, 3, 0, 13);
        // input = data[3..13] = "abcabcXXXX", source = data[0..13]; first 6 bytes
        // agree ("abcabc" vs "abcabc"), then 'X' != 'a'.
        assert_eq!(matched, 6);
    }

    #[test]
    fn forward_extension_stops_at_mismatch() {
        let mut w = Window::new();
        w.advance(b"aaaaZbbbb");
        let matched = extend_forward(&w, 5, 0, 9);
        assert_eq!(matched, 0); // 'b' vs 'a' mismatch immediately
    }

    #[test]
    fn backward_extension_within_prefix() {
        let mut w = Window::new();
        w.advance(b"XXXXabcdeabcde");
        let matched = extend_backward(&w, 14, 9, 0, 0);
        // input tail = data[5..14] = "bcdeabcde", source = data[0..9] = "XXXXabcde";
        // the trailing "abcde" of each agrees (5 bytes), then 'e' != 'X'.
        assert_eq!(matched, 5);
    }

    #[test]
    fn backward_extension_crosses_dict_boundary() {
        let mut w = Window::new();
        w.load_dictionary(b"0123456789"); // dict_limit = 10
        w.advance(b"abcdefgh"); // prefix occupies absolute [10, 18)
        let matched = extend_backward(&w, 18, 13, 0, 0);
        // Source tail (3 bytes before absolute 13, inside the prefix) is "abc";
        // input tail (3 bytes before absolute 18) is "fgh". They disagree on the
        // very last byte ('h' vs 'c'), so extension stops at 0 before ever
        // reaching the dictionary segment.
        assert_eq!(matched, 0);
    }
}
