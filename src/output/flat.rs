//! Plain-text pairs, one transliteration per line

use crate::output::ResultsFormatter;

pub const ARROW_FORMATTER: JoinedPair = JoinedPair { joiner: " -> " };

pub const TABS_FORMATTER: JoinedPair = JoinedPair { joiner: "\t" };

/// Writes the Greek input and its Latin output joined by `joiner`.
pub struct JoinedPair {
    joiner: &'static str,
}

impl ResultsFormatter for JoinedPair {
    fn header(&mut self) -> Option<String> {
        None
    }

    fn row_started(&mut self) -> Option<String> {
        None
    }

    fn format_element(&mut self, _: &str, record: &str, is_last: bool) -> Option<String> {
        let mut element = record.to_string();
        if !is_last {
            element.push_str(self.joiner);
        }

        Some(element)
    }

    fn row_ended(&mut self) -> Option<String> {
        Some(String::from("\n"))
    }

    fn footer(&mut self) -> Option<String> {
        None
    }
}
