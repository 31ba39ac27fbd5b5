use std::sync::LazyLock;

use regex::Regex;

/// Literal rewrites, applied in order over the whole string.
const REWRITES: [(&str, &str); 5] = [
    // gamma before a velar is a nasal
    ("GG", "NG"),
    ("GK", "NK"),
    ("GCH", "NCH"),
    ("GX", "NX"),
    // ῤῥ reads RRH, not RHR
    ("RHR", "RRH"),
];

// word boundaries include the C0 information separators U+001C..U+001F
static WORD_INITIAL_HR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("(^|[\\s\\x1C-\\x1F])HR").unwrap()
});

pub fn apply(text: &str) -> String {
    let mut result = text.to_string();

    for (from, to) in REWRITES {
        if result.contains(from) {
            result = result.replace(from, to);
        }
    }

    WORD_INITIAL_HR_REGEX
        .replace_all(&result, "${1}RH")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gamma_nasal() {
        assert_eq!(apply("AGGELOS"), "ANGELOS");
        assert_eq!(apply("AGKYRA"), "ANKYRA");
        assert_eq!(apply("AGCHŌ"), "ANCHŌ");
        assert_eq!(apply("SPHIGX"), "SPHINX");
        assert_eq!(apply("GGG"), "NGG");
    }

    #[test]
    fn test_double_rho() {
        assert_eq!(apply("PYRHROS"), "PYRRHOS");
    }

    #[test]
    fn test_word_initial_rho() {
        assert_eq!(apply("HRIGOS"), "RHIGOS");
        assert_eq!(apply("KAI HRIGOS"), "KAI RHIGOS");
        assert_eq!(apply("A\tHRA\nHRA"), "A\tRHA\nRHA");
        assert_eq!(apply("HR HR"), "RH RH");
    }

    #[test]
    fn test_word_initial_rho_after_separators() {
        assert_eq!(apply("\u{1c}HRA"), "\u{1c}RHA");
        assert_eq!(apply("\u{1d}HRA\u{1e}HRA"), "\u{1d}RHA\u{1e}RHA");
        assert_eq!(apply("\u{1f}HRA"), "\u{1f}RHA");
        assert_eq!(apply("\u{1b}HRA"), "\u{1b}HRA");
        assert_eq!(apply("A\u{2003}HRA"), "A\u{2003}RHA");
    }

    #[test]
    fn test_mid_word_hr_is_kept() {
        assert_eq!(apply("AHRA"), "AHRA");
        assert_eq!(apply(",HRA"), ",HRA");
    }

    #[test]
    fn test_order() {
        // double rho repair runs before the word-initial fix
        assert_eq!(apply("HRHR"), "RHRH");
    }

    #[test]
    fn test_passthrough() {
        assert_eq!(apply(""), "");
        assert_eq!(apply("MĒNIN"), "MĒNIN");
    }
}
