// Run-length encoder.
//
// Two entry points (string slice and char slice) validate their input and
// then feed the same `Runs` scan, so equivalent content always produces the
// same output. The encoder holds only its immutable configuration; every
// buffer is local to a call.

use thiserror::Error;

use super::config::EncoderConfig;
use super::run::Runs;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Message carried by [`EncodeError::InvalidInput`] for absent input.
pub const NULL_INPUT_MESSAGE: &str = "Input must not be null";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// The input was rejected before any output was produced.
    #[error("{0}")]
    InvalidInput(&'static str),
}

impl EncodeError {
    fn null_input() -> Self {
        Self::InvalidInput(NULL_INPUT_MESSAGE)
    }
}

fn validate<T>(input: Option<T>) -> Result<T, EncodeError> {
    input.ok_or_else(EncodeError::null_input)
}

// ---------------------------------------------------------------------------
// Stats
// ---------------------------------------------------------------------------

/// Statistics for a single encode call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncodeStats {
    /// Characters consumed (sum of all emitted counts).
    pub input_chars: u64,
    /// Pairs emitted.
    pub runs: u64,
    /// Pairs emitted because a run hit the length limit.
    pub split_runs: u64,
    /// Size of the encoded string in bytes.
    pub output_bytes: usize,
}

// ---------------------------------------------------------------------------
// LengthEncoding
// ---------------------------------------------------------------------------

/// The two encoding entry points.
///
/// Implementations must return identical results (output or error) for a
/// string and a char slice holding the same characters.
pub trait LengthEncoding {
    /// Encode an ordered character sequence.
    fn encode_chars(&self, input: Option<&[char]>) -> Result<String, EncodeError>;

    /// Encode a string.
    fn encode_str(&self, input: Option<&str>) -> Result<String, EncodeError>;
}

// ---------------------------------------------------------------------------
// RunLengthEncoder
// ---------------------------------------------------------------------------

/// Run-length encoder producing `<char><count>` pairs.
///
/// # Example
/// ```
/// use runlength::{LengthEncoding, RunLengthEncoder};
///
/// let encoder = RunLengthEncoder::default();
/// assert_eq!(encoder.encode_str(Some("aaabbbccc")).unwrap(), "a3b3c3");
/// assert_eq!(encoder.encode_chars(Some(&['x'][..])).unwrap(), "x1");
/// assert!(encoder.encode_str(None).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunLengthEncoder {
    config: EncoderConfig,
}

impl RunLengthEncoder {
    pub const fn new(config: EncoderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Encode a char slice and report what the scan did.
    pub fn encode_chars_with_stats(
        &self,
        input: Option<&[char]>,
    ) -> Result<(String, EncodeStats), EncodeError> {
        let chars = validate(input)?;
        Ok(self.encode_iter(chars.iter().copied(), chars.len()))
    }

    /// Encode a string and report what the scan did.
    pub fn encode_str_with_stats(
        &self,
        input: Option<&str>,
    ) -> Result<(String, EncodeStats), EncodeError> {
        let text = validate(input)?;
        Ok(self.encode_iter(text.chars(), text.len()))
    }

    /// Shared scan. `len` is zero exactly when `chars` is empty.
    fn encode_iter<I>(&self, chars: I, len: usize) -> (String, EncodeStats)
    where
        I: Iterator<Item = char>,
    {
        if len == 0 {
            return (String::new(), EncodeStats::default());
        }

        let mut out = String::with_capacity(self.config.output_capacity(len));
        let mut stats = EncodeStats::default();
        let mut runs = Runs::with_max_run_length(chars, self.config.max_run_length);

        for run in runs.by_ref() {
            run.write_to(&mut out);
            stats.input_chars += u64::from(run.length);
            stats.runs += 1;
        }

        stats.split_runs = runs.split_runs();
        stats.output_bytes = out.len();
        log::debug!(
            "encoded {} chars into {} runs ({} split, {} bytes)",
            stats.input_chars,
            stats.runs,
            stats.split_runs,
            stats.output_bytes
        );
        (out, stats)
    }

    /// Encode independent inputs in parallel, preserving their order.
    ///
    /// Each input is validated on its own; a `None` entry yields an error in
    /// its slot without affecting the others.
    #[cfg(feature = "parallel")]
    pub fn encode_batch(&self, inputs: &[Option<&str>]) -> Vec<Result<String, EncodeError>> {
        inputs
            .par_iter()
            .map(|input| self.encode_str(*input))
            .collect()
    }
}

impl LengthEncoding for RunLengthEncoder {
    fn encode_chars(&self, input: Option<&[char]>) -> Result<String, EncodeError> {
        self.encode_chars_with_stats(input).map(|(out, _)| out)
    }

    fn encode_str(&self, input: Option<&str>) -> Result<String, EncodeError> {
        self.encode_str_with_stats(input).map(|(out, _)| out)
    }
}

// ---------------------------------------------------------------------------
// Convenience functions
// ---------------------------------------------------------------------------

/// Encode a string with the default configuration.
pub fn encode_str(input: Option<&str>) -> Result<String, EncodeError> {
    RunLengthEncoder::default().encode_str(input)
}

/// Encode a char slice with the default configuration.
pub fn encode_chars(input: Option<&[char]>) -> Result<String, EncodeError> {
    RunLengthEncoder::default().encode_chars(input)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
