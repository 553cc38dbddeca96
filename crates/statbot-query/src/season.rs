//! `ccYY-ZW` season range tokens.

use std::fmt;

/// A validated season range such as `2018-20`.
///
/// The token is exactly 7 ASCII characters:
/// - `cc`: century, `19` or `20`
/// - `YY`: two-digit start year
/// - `-` at index 4
/// - `ZW`: two-digit end year, strictly greater than `YY`
///
/// Because both halves are two digits, a range spanning a century boundary
/// (`1999-00`) is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SeasonRange(String);

impl SeasonRange {
    /// Token length in bytes.
    pub const LEN: usize = 7;

    /// Parse a token, returning `None` for anything that is not a valid range.
    pub fn parse(token: &str) -> Option<Self> {
        let bytes = token.as_bytes();
        if bytes.len() != Self::LEN || bytes[4] != b'-' {
            return None;
        }

        let century = two_digits(&bytes[0..2])?;
        let start = two_digits(&bytes[2..4])?;
        let end = two_digits(&bytes[5..7])?;

        if (century == 19 || century == 20) && end > start {
            Some(Self(token.to_string()))
        } else {
            None
        }
    }

    /// The token as written.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn century(&self) -> u16 {
        u16::from(two_digits(&self.0.as_bytes()[0..2]).unwrap_or(0))
    }

    /// Four-digit starting year (`2018` for `2018-20`).
    pub fn start_year(&self) -> u16 {
        self.century() * 100 + u16::from(two_digits(&self.0.as_bytes()[2..4]).unwrap_or(0))
    }

    /// Four-digit ending year (`2020` for `2018-20`).
    pub fn end_year(&self) -> u16 {
        self.century() * 100 + u16::from(two_digits(&self.0.as_bytes()[5..7]).unwrap_or(0))
    }

    /// Season labels covered by the range, oldest first.
    ///
    /// `2018-20` covers `2018-19` and `2019-20`.
    pub fn season_labels(&self) -> Vec<String> {
        (self.start_year()..self.end_year())
            .map(|year| format!("{}-{:02}", year, (year + 1) % 100))
            .collect()
    }
}

impl fmt::Display for SeasonRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SeasonRange {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

fn two_digits(pair: &[u8]) -> Option<u8> {
    match pair {
        [a, b] if a.is_ascii_digit() && b.is_ascii_digit() => Some((a - b'0') * 10 + (b - b'0')),
        _ => None,
    }
}
