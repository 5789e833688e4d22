//! Text clean-up applied before summarization and classification.

use std::str::FromStr;

use anyhow::bail;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

static URL_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"http\S+").expect("valid regex"));
static NON_ASCII_ALPHA: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-Z\s]").expect("valid regex"));

/// Character policy used by the pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Normalization {
    /// Keep ASCII letters only.
    Ascii,
    /// Keep letters from any script.
    #[default]
    Multilingual,
}

impl Normalization {
    pub fn apply(self, text: &str) -> String {
        match self {
            Self::Ascii => normalize(text),
            Self::Multilingual => normalize_multilingual(text),
        }
    }
}

impl FromStr for Normalization {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ascii" => Ok(Self::Ascii),
            "multilingual" | "unicode" => Ok(Self::Multilingual),
            other => bail!("unknown normalization `{other}` (expected ascii or multilingual)"),
        }
    }
}

/// Strip URLs and everything but ASCII letters and whitespace, then lowercase and trim.
///
/// A second URL pass runs after stripping because removing punctuation can glue
/// a URL back together (`"HTTP!x"` becomes `"httpx"`); without it the function
/// would not be idempotent.
pub fn normalize(text: &str) -> String {
    let without_urls = URL_PATTERN.replace_all(text, "");
    let letters = NON_ASCII_ALPHA.replace_all(&without_urls, "");
    let lowered = letters.to_ascii_lowercase();
    URL_PATTERN.replace_all(&lowered, "").trim().to_string()
}

/// Same as [`normalize`] but keeps alphabetic characters of every script.
pub fn normalize_multilingual(text: &str) -> String {
    let without_urls = URL_PATTERN.replace_all(text, "");
    // Lowercase first: case mapping may emit combining marks that the filter drops.
    let letters: String = without_urls
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphabetic() || c.is_whitespace())
        .collect();
    URL_PATTERN.replace_all(&letters, "").trim().to_string()
}

/// Whitespace-delimited token count used for all length bounds.
pub fn token_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Keep at most `limit` whitespace tokens, rejoined with single spaces.
pub fn truncate_tokens(text: &str, limit: usize) -> String {
    text.split_whitespace()
        .take(limit)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multilingual_keeps_other_scripts() {
        assert_eq!(
            normalize_multilingual("Привет, МИР! https://t.co/x Grüße"),
            "привет мир  grüße"
        );
    }

    #[test]
    fn ascii_drops_other_scripts() {
        assert_eq!(normalize("Привет Hello"), "hello");
    }

    #[test]
    fn reglued_url_is_removed() {
        assert_eq!(normalize("see HTTP!x now"), "see  now");
    }

    #[test]
    fn truncate_rejoins_with_single_spaces() {
        assert_eq!(truncate_tokens("a  b\tc d", 3), "a b c");
        assert_eq!(token_count("  a  b\tc "), 3);
    }
}
