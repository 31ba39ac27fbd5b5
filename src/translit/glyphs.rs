use std::collections::HashMap;
use std::sync::LazyLock;

use crate::util::greek::is_greek_char;

const GLYPHS: [(char, &str); 35] = [
    ('Α', "A"),
    ('Β', "B"),
    ('Γ', "G"),
    ('Δ', "D"),
    ('Ε', "E"),
    ('Ζ', "Z"),
    ('Η', "Ē"),
    ('Θ', "TH"),
    ('Ι', "I"),
    ('Ϊ', "I"),
    ('Κ', "K"),
    ('Λ', "L"),
    ('Μ', "M"),
    ('Ν', "N"),
    ('Ξ', "X"),
    ('Ο', "O"),
    ('Π', "P"),
    ('Ρ', "R"),
    ('Σ', "S"),
    ('Τ', "T"),
    ('Υ', "Y"),
    ('Ϋ', "Y"),
    ('Φ', "PH"),
    ('Χ', "CH"),
    ('Ψ', "PS"),
    ('Ω', "Ō"),
    // precomposed capitals with inherent length
    ('ᾼ', "Ā"),
    ('Ί', "Ī"),
    ('Ῡ', "Ū"),
    ('Ή', "Ē"),
    ('ῌ', "ĒI"),
    ('ῼ', "ŌI"),
    ('Ὼ', "Ō"),
    ('Ώ', "Ō"),
    ('Ὴ', "Ē"),
];

static GLYPH_MAP: LazyLock<HashMap<char, &'static str>> =
    LazyLock::new(|| GLYPHS.iter().copied().collect());

pub fn lookup(c: char) -> Option<&'static str> {
    if !is_greek_char(c) {
        return None;
    }

    GLYPH_MAP.get(&c).copied()
}

/// Substitutes every mapped Greek capital, leaving all other characters in place.
pub fn map_glyphs(text: &str) -> String {
    let mut result = String::with_capacity(text.len() * 2);

    for c in text.chars() {
        match lookup(c) {
            Some(latin) => result.push_str(latin),
            None => result.push(c),
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_keys_are_unique() {
        assert_eq!(GLYPH_MAP.len(), GLYPHS.len());
    }

    #[test]
    fn test_every_key_is_greek() {
        for (c, _) in GLYPHS {
            assert!(is_greek_char(c), "{:?}", c);
        }
    }

    #[test]
    fn test_alphabet() {
        assert_eq!(
            map_glyphs("ΑΒΓΔΕΖΗΘΙΚΛΜΝΞΟΠΡΣΤΥΦΧΨΩ"),
            "ABGDEZĒTHIKLMNXOPRSTYPHCHPSŌ"
        );
    }

    #[test]
    fn test_precomposed_forms() {
        assert_eq!(lookup('ῌ'), Some("ĒI"));
        assert_eq!(lookup('ῼ'), Some("ŌI"));
        assert_eq!(lookup('ᾼ'), Some("Ā"));
        assert_eq!(lookup('Ί'), Some("Ī"));
        assert_eq!(lookup('Ῡ'), Some("Ū"));
        assert_eq!(lookup('Ϊ'), Some("I"));
        assert_eq!(lookup('Ϋ'), Some("Y"));
    }

    #[test]
    fn test_unmapped() {
        assert_eq!(lookup('A'), None);
        assert_eq!(lookup('α'), None);
        assert_eq!(lookup('ς'), None);
        assert_eq!(lookup(' '), None);
        assert_eq!(map_glyphs("H ΜA, x!"), "H MA, x!");
        assert_eq!(map_glyphs(""), "");
    }
}
