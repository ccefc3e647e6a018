// src/normalize.rs

/// Maximum length of a normalized word, in characters.
pub const WORD_LIMIT: usize = 10;

/// Applies the normalization pipeline to a raw word.
///
/// Returns `None` when the input is empty or consists solely of
/// whitespace/control characters; such inputs carry no word and are
/// dropped without error. Otherwise the word is lower-cased with the
/// locale-independent Unicode fold (`str::to_lowercase`, so `Б` folds to
/// `б`, not just ASCII) and cut down to its first [`WORD_LIMIT`]
/// characters.
///
/// Whitespace is never trimmed: ten leading spaces followed by text
/// normalize to ten spaces, and interior spaces count as ordinary
/// characters.
pub fn normalize(raw: &str) -> Option<String> {
    if raw.chars().all(|c| c.is_whitespace() || c.is_control()) {
        return None;
    }

    let folded = raw.to_lowercase();
    match folded.char_indices().nth(WORD_LIMIT) {
        Some((cut, _)) => Some(folded[..cut].to_owned()),
        None => Some(folded),
    }
}
