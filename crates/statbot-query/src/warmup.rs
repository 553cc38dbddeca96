//! Roster selection for provider cache warm-up.

use std::collections::HashSet;

use crate::vocabulary::Vocabulary;

/// Roster names mentioned in a batch of titles.
///
/// A name is relevant when both its first and second words appear among the
/// lowercased title words, in any title and any position. Single-word names
/// are skipped.
pub fn relevant_players<I, S>(titles: I, vocab: &Vocabulary) -> HashSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let words: HashSet<String> = titles
        .into_iter()
        .flat_map(|title| {
            title
                .as_ref()
                .split(' ')
                .map(str::to_lowercase)
                .collect::<Vec<_>>()
        })
        .collect();

    vocab
        .names()
        .filter(|name| {
            let mut parts = name.split(' ');
            match (parts.next(), parts.next()) {
                (Some(first), Some(last)) => words.contains(first) && words.contains(last),
                _ => false,
            }
        })
        .map(str::to_string)
        .collect()
}
