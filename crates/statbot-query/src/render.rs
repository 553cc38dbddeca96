//! Plain-text report rendering.
//!
//! Reports are markdown-friendly pipe tables, one per competition phase:
//!
//! ```text
//! Lebron James's stats for 2018-20:
//!
//! Regular Season:
//!
//! Season|PTS|AST
//! -|-|-|
//! 2018-19|27.4|8.3
//! 2019-20|25.3|10.2
//! ```

use std::fmt;

use crate::query::{Mode, SeasonType};

/// One table cell: a count, an average or free text.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum StatValue {
    /// Integral value (games, totals).
    Int(i64),
    /// Fractional value (averages, percentages).
    Float(f64),
    /// Anything else, including the `-` placeholder.
    Text(String),
}

impl StatValue {
    /// Placeholder for a missing cell.
    pub fn missing() -> Self {
        Self::Text("-".to_string())
    }
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{}", v),
            // Whole floats keep one decimal so averages never look like totals.
            Self::Float(v) if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e16 => {
                write!(f, "{:.1}", v)
            }
            Self::Float(v) => write!(f, "{}", v),
            Self::Text(v) => f.write_str(v),
        }
    }
}

impl From<i64> for StatValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for StatValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for StatValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

/// Everything needed to render one reply.
///
/// `playoffs` and `regular` hold one value tuple per season label, aligned
/// positionally with `seasons` and with `stat_codes`. Sides not covered by
/// `mode` are ignored.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    /// Player name; title-cased in the header.
    pub player_name: &'a str,
    /// Season range as requested.
    pub season_range: &'a str,
    /// Which sections to emit.
    pub mode: Mode,
    /// Column codes, in requested order.
    pub stat_codes: &'a [String],
    /// Season labels, oldest first.
    pub seasons: &'a [String],
    /// Playoff rows.
    pub playoffs: &'a [Vec<StatValue>],
    /// Regular season rows.
    pub regular: &'a [Vec<StatValue>],
}

impl Report<'_> {
    fn rows(&self, side: SeasonType) -> &[Vec<StatValue>] {
        match side {
            SeasonType::Playoffs => self.playoffs,
            SeasonType::Regular => self.regular,
        }
    }
}

/// Render a report.
///
/// The header and each section label are followed by a blank line so the
/// tables render as markdown. A side with no rows is left out entirely.
pub fn render(report: &Report<'_>) -> String {
    let mut lines = vec![format!(
        "{}'s stats for {}:\n",
        title_case(report.player_name),
        report.season_range
    )];

    let header = std::iter::once("Season".to_string())
        .chain(report.stat_codes.iter().map(|code| code.to_uppercase()))
        .collect::<Vec<_>>()
        .join("|");
    let separator = "-|".repeat(report.stat_codes.len() + 1);

    for &side in report.mode.sides() {
        let rows = report.rows(side);
        if rows.is_empty() {
            continue;
        }

        lines.push(format!("{}\n", side.label()));
        lines.push(header.clone());
        lines.push(separator.clone());
        for (season, values) in report.seasons.iter().zip(rows) {
            let mut row = season.clone();
            for value in values {
                row.push('|');
                row.push_str(&value.to_string());
            }
            lines.push(row);
        }
    }

    lines.join("\n")
}

/// Capitalize each word: letters after a non-letter are uppercased, the rest
/// lowercased (`"shaquille o'neal"` becomes `"Shaquille O'Neal"`).
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}
