use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};

pub const ROUGH_BREATHING: char = '\u{0314}';
pub const SMOOTH_BREATHING: char = '\u{0313}';
pub const IOTA_SUBSCRIPT: char = '\u{0345}';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    RoughBreathing,
    IotaSubscript,
    Discardable,
    None,
}

pub fn classify(c: char) -> Mark {
    match c {
        ROUGH_BREATHING => Mark::RoughBreathing,
        IOTA_SUBSCRIPT => Mark::IotaSubscript,
        SMOOTH_BREATHING => Mark::Discardable,
        _ if c.general_category() == GeneralCategory::NonspacingMark => Mark::Discardable,
        _ => Mark::None,
    }
}

/// Replaces combining marks of a decomposed sequence with the letters they stand for.
///
/// A rough breathing follows its letter after decomposition, so the letter
/// already emitted is popped and re-pushed behind an `H`.
pub fn resolve(decomposed: &[char]) -> Vec<char> {
    let mut result = Vec::with_capacity(decomposed.len());

    for &c in decomposed {
        match classify(c) {
            Mark::RoughBreathing => match result.pop() {
                Some(preceding) => {
                    result.push('H');
                    result.push(preceding);
                }
                None => result.push('H'),
            },
            Mark::IotaSubscript => result.push('I'),
            Mark::Discardable => {}
            Mark::None => result.push(c),
        }
    }

    result
}
