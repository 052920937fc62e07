// src/core/text.rs
//! Fixed character classes used to gate the fallback stages.
use once_cell::sync::Lazy;
use regex::Regex;

static PUNCTUATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[.,:;!?]$").unwrap());
static WORD_CHAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w").unwrap());
static SWEDISH_DIACRITIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ÅÄÖåäö]").unwrap());
static LOWERCASE_LATIN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-z]").unwrap());
static SWEDISH_UPPERCASE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-ZÅÄÖ]+$").unwrap());

/// A lone punctuation mark, which has no pronunciation of its own.
pub fn is_punctuation(token: &str) -> bool {
    PUNCTUATION.is_match(token)
}

/// True if the word contains at least one letter, digit or underscore.
pub fn has_word_char(word: &str) -> bool {
    WORD_CHAR.is_match(word)
}

/// True if the word contains one of å, ä, ö in either case.
pub fn has_swedish_diacritic(word: &str) -> bool {
    SWEDISH_DIACRITIC.is_match(word)
}

pub fn has_lowercase_latin(word: &str) -> bool {
    LOWERCASE_LATIN.is_match(word)
}

/// True if every character is an uppercase Swedish letter.
pub fn is_swedish_uppercase(word: &str) -> bool {
    SWEDISH_UPPERCASE.is_match(word)
}

/// Renders a letter sequence ("SVT") as hyphen-separated parts ("S-V-T").
pub fn spell_out(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    for c in text.chars() {
        if !out.is_empty() {
            out.push('-');
        }
        out.push(c);
    }
    out
}
