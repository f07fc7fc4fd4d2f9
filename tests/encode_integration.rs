use std::num::NonZeroU32;
use std::sync::Arc;
use std::thread;

use runlength::rle::config::MAX_RUN_LENGTH;
use runlength::rle::encoder::NULL_INPUT_MESSAGE;
use runlength::{
    EncodeError, EncoderConfig, LengthEncoding, Run, RunLengthEncoder, Runs, encode_chars,
    encode_str,
};

fn both(input: &str) -> (String, String) {
    let chars: Vec<char> = input.chars().collect();
    (
        encode_str(Some(input)).unwrap(),
        encode_chars(Some(chars.as_slice())).unwrap(),
    )
}

#[test]
fn literal_scenarios() {
    let cases = [
        ("aaabbbccc", "a3b3c3"),
        ("x", "x1"),
        ("abcde", "a1b1c1d1e1"),
        ("", ""),
        ("aa bb cc", "a2 1b2 1c2"),
        ("AaAa", "A1a1A1a1"),
    ];
    for (input, expected) in cases {
        let (s, c) = both(input);
        assert_eq!(s, expected, "string form of {input:?}");
        assert_eq!(c, expected, "char form of {input:?}");
    }
}

#[test]
fn absent_input_fails_identically() {
    let from_str = encode_str(None).unwrap_err();
    let from_chars = encode_chars(None).unwrap_err();
    assert_eq!(from_str, from_chars);
    assert_eq!(from_str, EncodeError::InvalidInput(NULL_INPUT_MESSAGE));
    assert_eq!(from_str.to_string(), "Input must not be null");
}

#[test]
fn entry_points_agree_on_mixed_inputs() {
    for input in [
        "aaabbbcccddd",
        "abcdefghijklmnopqrstuvwxyz",
        "aabbccddeeffgghhiijjkkllmmnnooppqqrrssttuuvvwwxxyyzz",
        "1234567890",
        "!@#$%^&*()",
        "   \t\n\r",
        "MixedCase123!@#",
        "user@example.com",
        "Dockerfile",
    ] {
        let (s, c) = both(input);
        assert_eq!(s, c, "input {input:?}");
        assert!(!s.is_empty());
    }
}

#[test]
fn deterministic_output() {
    let enc = RunLengthEncoder::default();
    let a = enc.encode_str(Some("hello world")).unwrap();
    let b = enc.encode_str(Some("hello world")).unwrap();
    assert_eq!(a, b);
    assert_eq!(a, "h1e1l2o1 1w1o1r1l1d1");
}

#[test]
fn character_order_preserved() {
    let out = encode_str(Some("aaabbbcccaaabbbccc")).unwrap();
    assert_eq!(out, "a3b3c3a3b3c3");
    assert!(out.find('a') < out.find('b'));
    assert!(out.find('b') < out.find('c'));
}

#[test]
fn printable_ascii_grows_output() {
    let input: String = (32u8..=126).map(char::from).collect();
    let (s, c) = both(&input);
    assert_eq!(s, c);
    assert!(s.len() > input.len());
}

#[test]
fn long_runs_across_entry_points() {
    let input = format!("{}{}{}", "a".repeat(1000), "b".repeat(1000), "c".repeat(1000));
    let (s, c) = both(&input);
    assert_eq!(s, "a1000b1000c1000");
    assert_eq!(s, c);
}

#[test]
fn run_one_past_limit_splits_into_two_pairs() {
    let limit = 16u32;
    let enc = RunLengthEncoder::new(
        EncoderConfig::default().with_max_run_length(NonZeroU32::new(limit).unwrap()),
    );
    let input = "q".repeat(limit as usize + 1);
    assert_eq!(enc.encode_str(Some(input.as_str())).unwrap(), "q16q1");
    let chars: Vec<char> = input.chars().collect();
    assert_eq!(enc.encode_chars(Some(chars.as_slice())).unwrap(), "q16q1");
}

#[test]
fn concurrent_calls_share_one_encoder() {
    let enc = Arc::new(RunLengthEncoder::default());
    let handles: Vec<_> = (0..10)
        .map(|i| {
            let enc = Arc::clone(&enc);
            thread::spawn(move || {
                let input = format!("concurrent_test_string_{i}{i}");
                let expected = encode_str(Some(input.as_str())).unwrap();
                for _ in 0..100 {
                    assert_eq!(enc.encode_str(Some(input.as_str())).unwrap(), expected);
                }
            })
        })
        .collect();
    for h in handles {
        h.join().expect("worker thread panicked");
    }
}

#[test]
#[ignore = "scans 2^31 characters; run explicitly in release mode"]
fn default_limit_splits_without_losing_characters() {
    let len = MAX_RUN_LENGTH as usize + 1;
    let mut runs = Runs::new(std::iter::repeat_n('x', len).chain(std::iter::once('y')));
    let got: Vec<Run> = runs.by_ref().collect();
    assert_eq!(
        got,
        vec![
            Run {
                character: 'x',
                length: MAX_RUN_LENGTH
            },
            Run {
                character: 'x',
                length: 1
            },
            Run {
                character: 'y',
                length: 1
            },
        ]
    );
    assert_eq!(runs.split_runs(), 1);
}
