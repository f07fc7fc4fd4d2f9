// Encoder tuning constants.
//
// Both values are plain data: the capacity multiplier only sizes the output
// buffer, the run limit decides where an over-long run is split.

use std::num::NonZeroU32;

/// Output buffer pre-sizing factor (one character plus one digit per input
/// character is the common case).
pub const CAPACITY_MULTIPLIER: usize = 2;

/// Largest count emitted for a single pair.
///
/// This is the largest positive value of a signed 32-bit counter. A longer run
/// is emitted as several pairs for the same character.
pub const MAX_RUN_LENGTH: u32 = i32::MAX as u32;

const DEFAULT_MAX_RUN_LENGTH: NonZeroU32 = match NonZeroU32::new(MAX_RUN_LENGTH) {
    Some(n) => n,
    None => panic!("MAX_RUN_LENGTH must be non-zero"),
};

/// Encoder configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncoderConfig {
    /// Multiplier applied to the input length when reserving output capacity.
    pub capacity_multiplier: usize,
    /// Run length at which the current pair is flushed and a new one begins.
    pub max_run_length: NonZeroU32,
}

impl EncoderConfig {
    pub const DEFAULT: EncoderConfig = EncoderConfig {
        capacity_multiplier: CAPACITY_MULTIPLIER,
        max_run_length: DEFAULT_MAX_RUN_LENGTH,
    };

    /// Same configuration with a different run limit.
    pub fn with_max_run_length(self, max_run_length: NonZeroU32) -> Self {
        Self {
            max_run_length,
            ..self
        }
    }

    /// Output capacity to reserve for an input of `input_len` units.
    pub fn output_capacity(&self, input_len: usize) -> usize {
        input_len.saturating_mul(self.capacity_multiplier)
    }
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
