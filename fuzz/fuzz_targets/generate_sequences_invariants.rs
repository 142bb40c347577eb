#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Small, fixed parameters so even tiny fuzzer-sized inputs can produce a
    // match, and the window never needs more than a few KiB of backing
    // storage.
    let params = ldm::LdmParams {
        window_log: 16,
        hash_log: 10,
        bucket_size_log: 2,
        min_match_length: 8,
        hash_rate_log: 2,
    };
    let Ok(mut state) = ldm::create(params) else {
        return;
    };
    let mut output = ldm::LdmOutput::new();
    if ldm::generate_sequences(&mut state, &mut output, data).is_err() {
        return;
    }

    // Every sequence respects the minimum match length and offset bound,
    // and tiles the input with no gap, no overlap, and byte-identical
    // match content.
    let max_dist = 1u32 << params.window_log;
    let mut pos = 0u32;
    for seq in output.seq_store.remaining_sequences() {
        pos += seq.lit_length;
        if seq.offset > 0 {
            assert!(seq.match_length >= params.min_match_length);
            assert!(seq.offset > 0 && seq.offset <= max_dist);
            let match_pos = pos - seq.offset;
            let a = &data[match_pos as usize..(match_pos + seq.match_length) as usize];
            let b = &data[pos as usize..(pos + seq.match_length) as usize];
            assert_eq!(a, b, "match bytes diverge from source");
        }
        pos += seq.match_length;
    }
    assert_eq!(pos + output.leftover_literals, data.len() as u32);
});
