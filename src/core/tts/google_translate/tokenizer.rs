//! Text preparation for the Google Translate speech endpoint.
//!
//! The endpoint refuses inputs longer than [`MAX_CHUNK_CHARS`] characters, so
//! narration is cleaned up and cut into chunks that are synthesized one by one.
//! Short inputs are sent whole. Longer inputs are split after sentence and
//! clause punctuation first, and any piece still over the limit is split at the
//! last word boundary that fits.

use once_cell::sync::Lazy;
use regex::Regex;

/// Maximum number of characters the endpoint accepts per request.
pub const MAX_CHUNK_CHARS: usize = 100;

/// Words hyphenated across a line break ("hyphen-\nated")
static HYPHEN_LINE_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"-\r?\n\s*").expect("valid hyphen pattern"));

/// Periods after common abbreviations would otherwise end a sentence
static ABBREVIATION_PERIOD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(dr|jr|mr|mrs|ms|msgr|prof|sr|st)\.").expect("valid abbreviation pattern")
});

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));

/// Normalize raw narration before tokenizing.
pub fn preprocess(text: &str) -> String {
    let text = HYPHEN_LINE_BREAK.replace_all(text, "");
    let text = ABBREVIATION_PERIOD.replace_all(&text, "$1");
    WHITESPACE_RUN.replace_all(&text, " ").trim().to_string()
}

/// Split narration into speakable chunks of at most [`MAX_CHUNK_CHARS`] characters.
///
/// Returns an empty vector when the text contains nothing speakable.
pub fn tokenize(text: &str) -> Vec<String> {
    let text = preprocess(text);

    if text.chars().count() <= MAX_CHUNK_CHARS {
        return clean_tokens(vec![text]);
    }

    clean_tokens(split_on_punctuation(&text))
        .iter()
        .flat_map(|token| minimize(token, MAX_CHUNK_CHARS))
        .filter(|token| !token.is_empty())
        .collect()
}

fn split_on_punctuation(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut tokens = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        current.push(c);
        let next = chars.get(i + 1).copied();

        let split_here = match c {
            // Tone marks always end a chunk and stay attached to it
            '?' | '!' | '？' | '！' => true,
            '.' | ',' => next.is_none_or(char::is_whitespace) && !is_abbreviation_dot(&chars, i),
            // Keep clock times like 10:30 together
            ':' => !next.is_some_and(|n| n.is_ascii_digit()),
            ';' | '…' | '‥' | '—' | '。' | '，' | '、' | '：' | '؛' | '،' => true,
            _ => false,
        };

        if split_here {
            tokens.push(std::mem::take(&mut current));
        }
    }

    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

/// A dot closing a dotted lowercase abbreviation such as "e.g." or "i.e."
fn is_abbreviation_dot(chars: &[char], i: usize) -> bool {
    chars[i] == '.' && i >= 2 && chars[i - 1].is_lowercase() && chars[i - 2] == '.'
}

/// Cut `token` at word boundaries until every piece fits in `max_chars`.
///
/// A single word longer than the limit is hard-split.
fn minimize(token: &str, max_chars: usize) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut rest = token.trim();

    while rest.chars().count() > max_chars {
        let limit = rest
            .char_indices()
            .nth(max_chars)
            .map(|(idx, _)| idx)
            .unwrap_or(rest.len());

        let split_at = match rest[..limit].rfind(' ') {
            Some(idx) if idx > 0 => idx,
            _ => limit,
        };

        pieces.push(rest[..split_at].trim_end().to_string());
        rest = rest[split_at..].trim_start();
    }

    if !rest.is_empty() {
        pieces.push(rest.to_string());
    }
    pieces
}

/// Trim tokens and drop the ones with nothing to pronounce.
fn clean_tokens(tokens: Vec<String>) -> Vec<String> {
    tokens
        .into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| t.chars().any(char::is_alphanumeric))
        .collect()
}
