//! Sentence validation.
//!
//! A body is valid when it is, in its entirety, an uppercase-initial word,
//! the literal ` is `, one or more ASCII digits and the literal ` years`.
//! Nothing may precede or follow it, not even a newline.

use lazy_static::lazy_static;
use regex::{Regex, RegexBuilder};
use std::process::ExitCode;

/// The fixed sentence pattern.
pub const SENTENCE_PATTERN: &str = r"^[A-Z][a-z]+ is \d+ years$";

lazy_static! {
    // ASCII-only classes: `\d` must not accept digits from other scripts
    static ref SENTENCE_REGEX: Regex = RegexBuilder::new(SENTENCE_PATTERN)
        .unicode(false)
        .build()
        .expect("sentence pattern compiles");
}

/// Returns true when `text` matches the sentence pattern from start to end.
pub fn is_valid_sentence(text: &str) -> bool {
    SENTENCE_REGEX.is_match(text)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Valid,
    Invalid,
}

impl Verdict {
    pub fn of(text: &str) -> Self {
        if is_valid_sentence(text) {
            Verdict::Valid
        } else {
            Verdict::Invalid
        }
    }

    pub fn is_valid(self) -> bool {
        self == Verdict::Valid
    }

    pub fn exit_code(self) -> u8 {
        match self {
            Verdict::Valid => 0,
            Verdict::Invalid => 1,
        }
    }
}

impl From<Verdict> for ExitCode {
    fn from(verdict: Verdict) -> Self {
        ExitCode::from(verdict.exit_code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_sentences() {
        for s in ["Alice is 30 years", "Bob is 5 years", "Zed is 0 years", "Methuselah is 969 years"] {
            assert!(is_valid_sentence(s), "{s:?} should be valid");
        }
    }

    #[test]
    fn rejects_malformed_sentences() {
        for s in [
            "alice is 30 years",
            "Alice is thirty years",
            "Bob is five years",
            "Alice is 30 years ",
            "Alice is 30 years\n",
            " Alice is 30 years",
            "ALice is 30 years",
            "A is 30 years",
            "Alice is 30 year",
            "Alice  is 30 years",
            "Alice is -30 years",
            "My name: Alice is 30 years",
        ] {
            assert!(!is_valid_sentence(s), "{s:?} should be invalid");
        }
    }

    #[test]
    fn empty_text_never_matches() {
        assert!(!is_valid_sentence(""));
        assert_eq!(Verdict::of(""), Verdict::Invalid);
    }

    #[test]
    fn digits_and_letters_are_ascii_only() {
        assert!(!is_valid_sentence("Bob is \u{FF15} years"));
        assert!(!is_valid_sentence("Bob is \u{0665} years"));
        assert!(!is_valid_sentence("\u{00C9}mile is 5 years"));
        assert!(!is_valid_sentence("Bob\u{FFFD} is 5 years"));
    }

    #[test]
    fn matching_is_idempotent() {
        let text = "Bob is 5 years";
        let first = Verdict::of(text);
        assert_eq!(Verdict::of(text), first);
        assert_eq!(Verdict::of(text), first);

        let bad = "Bob is five years";
        assert_eq!(Verdict::of(bad), Verdict::of(bad));
    }

    #[test]
    fn verdict_exit_codes() {
        assert_eq!(Verdict::Valid.exit_code(), 0);
        assert_eq!(Verdict::Invalid.exit_code(), 1);
        assert!(Verdict::Valid.is_valid());
        assert!(!Verdict::Invalid.is_valid());
    }
}
