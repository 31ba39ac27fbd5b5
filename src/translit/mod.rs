//! Transliteration of polytonic Ancient Greek into Latin letters

mod diacritics;
mod glyphs;
mod rules;

use unicode_normalization::UnicodeNormalization;

/// Transliterates Ancient Greek `text` into Latin letters.
///
/// Rough breathing becomes `H`, iota subscript becomes a trailing `I`,
/// eta and omega carry a macron, and every other diacritic is dropped.
/// Anything that is not Greek is uppercased and otherwise left alone.
///
/// ```text
/// μῆνιν      -> MĒNIN
/// ἑλώρια     -> HELŌRIA
/// ῥίγος      -> RHIGOS
/// ```
pub fn ag2latin(text: &str) -> String {
    let decomposed = decompose(text);
    let resolved = diacritics::resolve(&decomposed);
    let upper = uppercase(&resolved);
    let mapped = glyphs::map_glyphs(&upper);

    rules::apply(&mapped)
}

/// Canonical decomposition (NFD), base letters followed by their combining marks.
fn decompose(text: &str) -> Vec<char> {
    text.nfd().collect()
}

fn uppercase(chars: &[char]) -> String {
    chars.iter().flat_map(|c| c.to_uppercase()).collect()
}
