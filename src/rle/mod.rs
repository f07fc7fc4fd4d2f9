// Run-length encoding.
//
// - `config`  — Output sizing and run-length limit
// - `run`     — Run value and the lazy run scanner (with overflow splitting)
// - `encoder` — RunLengthEncoder: validated string / char-slice entry points

pub mod config;
pub mod encoder;
pub mod run;

pub use config::{CAPACITY_MULTIPLIER, EncoderConfig, MAX_RUN_LENGTH};
pub use encoder::{
    EncodeError, EncodeStats, LengthEncoding, NULL_INPUT_MESSAGE, RunLengthEncoder, encode_chars,
    encode_str,
};
pub use run::{Run, Runs, runs};
