//! Runlength: run-length encoding of character sequences.
//!
//! Each maximal run of identical consecutive characters becomes the character
//! followed by its run length in decimal, e.g. `"aaabbc"` becomes `"a3b2c1"`.
//!
//! The crate provides:
//! - The encoder and its run scanner (`rle`)
//! - An optional CLI (`cli` feature)
//!
//! # Quick Start
//!
//! ```
//! use runlength::{encode_chars, encode_str};
//!
//! assert_eq!(encode_str(Some("aa bb cc")).unwrap(), "a2 1b2 1c2");
//! let chars: Vec<char> = "AaAa".chars().collect();
//! assert_eq!(encode_chars(Some(chars.as_slice())).unwrap(), "A1a1A1a1");
//! assert_eq!(
//!     encode_str(None).unwrap_err().to_string(),
//!     "Input must not be null"
//! );
//! ```

pub mod rle;

#[cfg(feature = "cli")]
pub mod cli;

pub use rle::{
    EncodeError, EncodeStats, EncoderConfig, LengthEncoding, Run, RunLengthEncoder, Runs,
    encode_chars, encode_str, runs,
};
