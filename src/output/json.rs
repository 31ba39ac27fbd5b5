//! JSON array of `{"greek": …, "latin": …}` objects

use std::mem;

use crate::output::ResultsFormatter;

#[derive(Serialize, Default)]
struct Transliteration {
    greek: String,
    latin: String,
}

#[derive(Default)]
pub struct JsonFormatter {
    current: Transliteration,
}

impl ResultsFormatter for JsonFormatter {
    fn header(&mut self) -> Option<String> {
        Some(String::from("["))
    }

    fn row_started(&mut self) -> Option<String> {
        None
    }

    fn format_element(&mut self, name: &str, record: &str, _is_last: bool) -> Option<String> {
        match name {
            "greek" => self.current.greek = record.to_owned(),
            "latin" => self.current.latin = record.to_owned(),
            _ => {}
        }

        None
    }

    fn row_ended(&mut self) -> Option<String> {
        serde_json::to_string(&mem::take(&mut self.current)).ok()
    }

    fn footer(&mut self) -> Option<String> {
        Some(String::from("]\n"))
    }

    fn row_separator(&self) -> Option<String> {
        Some(String::from(","))
    }
}
