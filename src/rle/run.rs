// Run detection.
//
// `Runs` performs the single left-to-right scan over a character stream and
// yields one maximal run at a time. Nothing is buffered beyond the one
// look-ahead character that ended the previous run.

use std::fmt;
use std::iter::FusedIterator;
use std::num::NonZeroU32;
use std::str::Chars;

use super::config::EncoderConfig;

// ---------------------------------------------------------------------------
// Run
// ---------------------------------------------------------------------------

/// A run of identical consecutive characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub character: char,
    /// Always at least 1.
    pub length: u32,
}

impl Run {
    /// Append the serialized pair (character, then decimal length) to `out`.
    pub fn write_to(&self, out: &mut String) {
        out.push(self.character);
        push_decimal(out, self.length);
    }
}

impl fmt::Display for Run {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.character, self.length)
    }
}

/// Append `n` in decimal without going through the formatting machinery.
fn push_decimal(out: &mut String, mut n: u32) {
    // u32::MAX has 10 digits.
    let mut buf = [0u8; 10];
    let mut pos = buf.len();
    loop {
        pos -= 1;
        buf[pos] = b'0' + (n % 10) as u8;
        n /= 10;
        if n == 0 {
            break;
        }
    }
    out.extend(buf[pos..].iter().map(|&d| d as char));
}

// ---------------------------------------------------------------------------
// Runs iterator
// ---------------------------------------------------------------------------

/// Iterator over the runs of a character stream.
///
/// A run that reaches `max_run_length` and is followed by the same character
/// is yielded early; the following character starts a new run of the same
/// character. No character is ever dropped.
#[derive(Debug, Clone)]
pub struct Runs<I> {
    chars: I,
    /// Character read past the end of the previous run.
    pending: Option<char>,
    max_run_length: u32,
    split_runs: u64,
}

impl<I: Iterator<Item = char>> Runs<I> {
    /// Scan `chars` with the default run limit.
    pub fn new(chars: I) -> Self {
        Self::with_max_run_length(chars, EncoderConfig::DEFAULT.max_run_length)
    }

    pub fn with_max_run_length(chars: I, max_run_length: NonZeroU32) -> Self {
        Self {
            chars,
            pending: None,
            max_run_length: max_run_length.get(),
            split_runs: 0,
        }
    }

    /// Number of times a run was cut at the length limit so far.
    pub fn split_runs(&self) -> u64 {
        self.split_runs
    }
}

impl<I: Iterator<Item = char>> Iterator for Runs<I> {
    type Item = Run;

    fn next(&mut self) -> Option<Run> {
        let character = match self.pending.take() {
            Some(c) => c,
            None => self.chars.next()?,
        };
        let mut length = 1u32;

        for next in self.chars.by_ref() {
            if next != character {
                self.pending = Some(next);
                return Some(Run { character, length });
            }
            if length == self.max_run_length {
                self.pending = Some(next);
                self.split_runs += 1;
                log::debug!(
                    "run of {character:?} reached limit {length}, starting a new pair"
                );
                return Some(Run { character, length });
            }
            length += 1;
        }

        Some(Run { character, length })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lo, hi) = self.chars.size_hint();
        let extra = usize::from(self.pending.is_some());
        let lo = usize::from(lo > 0 || extra > 0);
        (lo, hi.and_then(|h| h.checked_add(extra)))
    }
}

impl<I: FusedIterator<Item = char>> FusedIterator for Runs<I> {}

/// Runs of a string slice, with the default run limit.
pub fn runs(text: &str) -> Runs<Chars<'_>> {
    Runs::new(text.chars())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn run(character: char, length: u32) -> Run {
        Run { character, length }
    }

    fn limit(n: u32) -> NonZeroU32 {
        NonZeroU32::new(n).unwrap()
    }

    #[test]
    fn empty_input_has_no_runs() {
        assert_eq!(runs("").next(), None);
    }

    #[test]
    fn maximal_runs_in_order() {
        let got: Vec<Run> = runs("aaabccdddd").collect();
        assert_eq!(
            got,
            vec![run('a', 3), run('b', 1), run('c', 2), run('d', 4)]
        );
    }

    #[test]
    fn same_character_after_break_is_new_run() {
        let got: Vec<Run> = runs("aabaa").collect();
        assert_eq!(got, vec![run('a', 2), run('b', 1), run('a', 2)]);
    }

    #[test]
    fn split_at_limit() {
        let mut it = Runs::with_max_run_length("aaaaaaab".chars(), limit(3));
        let got: Vec<Run> = it.by_ref().collect();
        assert_eq!(
            got,
            vec![run('a', 3), run('a', 3), run('a', 1), run('b', 1)]
        );
        assert_eq!(it.split_runs(), 2);
    }

    #[test]
    fn exact_limit_does_not_split() {
        let mut it = Runs::with_max_run_length("aaab".chars(), limit(3));
        let got: Vec<Run> = it.by_ref().collect();
        assert_eq!(got, vec![run('a', 3), run('b', 1)]);
        assert_eq!(it.split_runs(), 0);
    }

    #[test]
    fn limit_of_one_emits_every_character() {
        let got: Vec<Run> = Runs::with_max_run_length("xxx".chars(), limit(1)).collect();
        assert_eq!(got, vec![run('x', 1); 3]);
    }

    #[test]
    fn multibyte_and_control_characters() {
        let got: Vec<Run> = runs("ññ\t\t\t😀").collect();
        assert_eq!(got, vec![run('ñ', 2), run('\t', 3), run('😀', 1)]);
    }

    #[test]
    fn display_and_write_to_agree() {
        for r in [run('a', 1), run('7', 10), run('é', 4_000_000_000)] {
            let mut s = String::new();
            r.write_to(&mut s);
            assert_eq!(s, r.to_string());
        }
    }

    #[test]
    fn push_decimal_boundaries() {
        for n in [0u32, 1, 9, 10, 99, 100, 2_147_483_647, u32::MAX] {
            let mut s = String::new();
            push_decimal(&mut s, n);
            assert_eq!(s, n.to_string());
        }
    }

    #[test]
    fn fused_after_exhaustion() {
        let mut it = runs("a");
        assert_eq!(it.next(), Some(run('a', 1)));
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }
}
