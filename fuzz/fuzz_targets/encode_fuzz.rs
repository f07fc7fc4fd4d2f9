#![no_main]
use std::num::NonZeroU32;

use libfuzzer_sys::fuzz_target;
use runlength::{EncoderConfig, LengthEncoding, RunLengthEncoder};

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    // First byte picks the run limit so the split path is reached on small inputs.
    let limit = NonZeroU32::new(u32::from(data[0]) + 1).unwrap();
    let text = String::from_utf8_lossy(&data[1..]);
    let chars: Vec<char> = text.chars().collect();

    let enc = RunLengthEncoder::new(EncoderConfig::default().with_max_run_length(limit));
    let (from_str, stats) = enc.encode_str_with_stats(Some(text.as_ref())).unwrap();
    let from_chars = enc.encode_chars(Some(chars.as_slice())).unwrap();

    assert_eq!(from_str, from_chars);
    assert_eq!(stats.input_chars, chars.len() as u64);
    assert_eq!(stats.output_bytes, from_str.len());
    assert_eq!(from_str.is_empty(), chars.is_empty());
});
