//! ISBN-10 / ISBN-13 input cleaning and checksum validation.
//!
//! Validation never fails with an error: every check returns a plain
//! `bool` (or `Option`) and callers decide how to present invalid input.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The two ISBN formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IsbnKind {
    /// 10 characters, mod-11 checksum, `X` allowed as check value.
    Isbn10,
    /// 13 digits, alternating 1/3 weights, mod-10 checksum.
    Isbn13,
}

impl fmt::Display for IsbnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Isbn10 => write!(f, "ISBN-10"),
            Self::Isbn13 => write!(f, "ISBN-13"),
        }
    }
}

/// Reduce free-form user input to ISBN characters.
///
/// Uppercases, keeps only digits and `X`. A result longer than 10 characters
/// is treated as an ISBN-13 candidate and loses every `X`; an `X` anywhere
/// but the final position also removes every `X`.
pub fn clean_isbn_input(raw: &str) -> String {
    let mut cleaned: String = raw
        .chars()
        .map(|c| c.to_ascii_uppercase())
        .filter(|c| c.is_ascii_digit() || *c == 'X')
        .collect();

    if cleaned.len() > 10 {
        cleaned.retain(|c| c != 'X');
    }

    let last = cleaned.len().saturating_sub(1);
    if cleaned.char_indices().any(|(i, c)| c == 'X' && i != last) {
        cleaned.retain(|c| c != 'X');
    }

    cleaned
}

/// Alias of [`clean_isbn_input`].
pub fn normalize_isbn(raw: &str) -> String {
    clean_isbn_input(raw)
}

/// Validate an already-clean ISBN-10: nine digits followed by a digit or `X`,
/// with `Σ digit[i] * (10 - i) + check ≡ 0 (mod 11)`.
pub fn validate_isbn10(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.len() != 10 {
        return false;
    }
    if !bytes[..9].iter().all(u8::is_ascii_digit) {
        return false;
    }

    let check = match bytes[9] {
        b'X' => 10,
        b if b.is_ascii_digit() => u32::from(b - b'0'),
        _ => return false,
    };

    let sum: u32 = bytes[..9]
        .iter()
        .enumerate()
        .map(|(i, b)| u32::from(b - b'0') * (10 - i as u32))
        .sum();

    (sum + check) % 11 == 0
}

/// Validate an already-clean ISBN-13: thirteen digits whose last digit equals
/// `(10 - Σ digit[i] * (1|3) % 10) % 10` over the first twelve.
pub fn validate_isbn13(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.len() != 13 || !bytes.iter().all(u8::is_ascii_digit) {
        return false;
    }

    let digits: Vec<u32> = bytes.iter().map(|b| u32::from(b - b'0')).collect();
    isbn13_check_digit(&digits[..12]) == digits[12]
}

/// Clean `raw`, then validate by the cleaned length. Anything that does not
/// reduce to 10 or 13 characters is invalid.
pub fn validate_isbn(raw: &str) -> bool {
    detect_kind(raw).is_some()
}

/// The format of `raw` when it is a valid ISBN after cleaning.
pub fn detect_kind(raw: &str) -> Option<IsbnKind> {
    let cleaned = clean_isbn_input(raw);
    match cleaned.len() {
        10 if validate_isbn10(&cleaned) => Some(IsbnKind::Isbn10),
        13 if validate_isbn13(&cleaned) => Some(IsbnKind::Isbn13),
        _ => None,
    }
}

/// Convert a valid ISBN-10 into its `978`-prefixed ISBN-13.
pub fn isbn10_to_isbn13(raw: &str) -> Option<String> {
    let cleaned = clean_isbn_input(raw);
    if cleaned.len() != 10 || !validate_isbn10(&cleaned) {
        return None;
    }

    let mut digits: Vec<u32> = vec![9, 7, 8];
    digits.extend(cleaned[..9].bytes().map(|b| u32::from(b - b'0')));
    let check = isbn13_check_digit(&digits);

    let mut out: String = digits
        .iter()
        .filter_map(|d| char::from_digit(*d, 10))
        .collect();
    out.push(char::from_digit(check, 10)?);
    Some(out)
}

fn isbn13_check_digit(first_twelve: &[u32]) -> u32 {
    let sum: u32 = first_twelve
        .iter()
        .enumerate()
        .map(|(i, d)| if i % 2 == 0 { *d } else { d * 3 })
        .sum();
    (10 - sum % 10) % 10
}
