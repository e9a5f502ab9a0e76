//! Text statistics shown in the status menu.

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

/// Words per minute used for the reading time estimate
pub const READING_WORDS_PER_MINUTE: usize = 200;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatKind {
    #[default]
    Words,
    CharactersWithSpaces,
    CharactersNoSpaces,
    Lines,
    ReadingTime,
}

impl StatKind {
    pub const ALL: [StatKind; 5] = [
        StatKind::Words,
        StatKind::CharactersWithSpaces,
        StatKind::CharactersNoSpaces,
        StatKind::Lines,
        StatKind::ReadingTime,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Words => "Words",
            Self::CharactersWithSpaces => "Chars (with spaces)",
            Self::CharactersNoSpaces => "Chars (no spaces)",
            Self::Lines => "Lines",
            Self::ReadingTime => "Reading Time",
        }
    }
}

/// Maximal runs of non-whitespace
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// User-perceived characters (extended grapheme clusters)
pub fn char_count(text: &str) -> usize {
    text.graphemes(true).count()
}

pub fn char_count_no_whitespace(text: &str) -> usize {
    text.graphemes(true)
        .filter(|g| !g.chars().all(char::is_whitespace))
        .count()
}

/// Newline-delimited segments; empty text has no lines
pub fn line_count(text: &str) -> usize {
    if text.is_empty() {
        return 0;
    }
    text.replace("\r\n", "\n")
        .split(['\n', '\r', '\u{2028}', '\u{2029}', '\u{85}'])
        .count()
}

/// Whole minutes of reading time, rounded down
pub fn reading_minutes(text: &str) -> usize {
    word_count(text) / READING_WORDS_PER_MINUTE
}

/// Render the selected statistic for display
pub fn format_stat(kind: StatKind, text: &str) -> String {
    match kind {
        StatKind::Words => format!("{} words", word_count(text)),
        StatKind::CharactersWithSpaces => format!("{} chars", char_count(text)),
        StatKind::CharactersNoSpaces => format!("{} chars", char_count_no_whitespace(text)),
        StatKind::Lines => format!("{} lines", line_count(text)),
        StatKind::ReadingTime => match reading_minutes(text) {
            0 => "< 1 min read".to_owned(),
            minutes => format!("{minutes} min read"),
        },
    }
}
