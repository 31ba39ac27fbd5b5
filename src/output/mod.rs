use std::io::Write;

use crate::output::flat::{ARROW_FORMATTER, TABS_FORMATTER};
use crate::output::json::JsonFormatter;

mod flat;
mod json;

macro_rules! output_format {
    (
        $(#[$enum_attrs:meta])*
        $vis:vis enum $enum_name:ident {
            $(
                @text = $text:literal
                @description = $description:literal
                $(#[$variant_attrs:meta])*
                $variant:ident$(,)?
            )*
        }
    ) => {
        $(#[$enum_attrs])*
        $vis enum $enum_name {
            $(
                $(#[$variant_attrs])*
                $variant,
            )*
        }

        impl $enum_name {
            pub fn from(s: &str) -> Option<$enum_name> {
                let s = s.to_lowercase();
                match s.as_str() {
                    $(
                        $text => Some($enum_name::$variant),
                    )*
                    _ => None,
                }
            }

            pub fn get_names_and_descriptions() -> Vec<(&'static str, &'static str)> {
                vec![
                    $(
                        ($text, $description),
                    )*
                ]
            }
        }
    };
}

output_format! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub enum OutputFormat {
        @text = "arrow"
        @description = "Greek and Latin joined with an arrow (default)"
        #[default]
        Arrow,

        @text = "tabs"
        @description = "Tab-separated values"
        Tabs,

        @text = "json"
        @description = "JSON format"
        Json,
    }
}

pub trait ResultsFormatter {
    fn header(&mut self) -> Option<String>;
    fn row_started(&mut self) -> Option<String>;
    fn format_element(&mut self, name: &str, record: &str, is_last: bool) -> Option<String>;
    fn row_ended(&mut self) -> Option<String>;
    fn footer(&mut self) -> Option<String>;

    fn row_separator(&self) -> Option<String> {
        None
    }
}

pub struct ResultsWriter {
    formatter: Box<dyn ResultsFormatter>,
    rows_written: usize,
}

impl ResultsWriter {
    pub fn new(format: &OutputFormat) -> ResultsWriter {
        ResultsWriter {
            formatter: select_formatter(format),
            rows_written: 0,
        }
    }

    pub fn write_header(&mut self, writer: &mut dyn Write) -> std::io::Result<()> {
        self.formatter.header()
            .map_or(Ok(()), |value| write!(writer, "{}", value))
    }

    /// Writes one transliteration, the Greek input and its Latin output.
    pub fn write_pair(&mut self, writer: &mut dyn Write, greek: &str, latin: &str) -> std::io::Result<()> {
        self.write_row(writer, &[("greek", greek), ("latin", latin)])
    }

    pub fn write_row(&mut self, writer: &mut dyn Write, values: &[(&str, &str)]) -> std::io::Result<()> {
        if self.rows_written > 0 {
            self.write_row_separator(writer)?;
        }

        self.write_row_start(writer)?;
        for (idx, (name, value)) in values.iter().enumerate() {
            self.write_row_item(writer, name, value, idx == values.len() - 1)?;
        }
        self.write_row_end(writer)?;

        self.rows_written += 1;

        Ok(())
    }

    pub fn write_footer(&mut self, writer: &mut dyn Write) -> std::io::Result<()> {
        self.formatter.footer()
            .map_or(Ok(()), |value| write!(writer, "{}", value))
    }

    fn write_row_separator(&mut self, writer: &mut dyn Write) -> std::io::Result<()> {
        self.formatter.row_separator()
            .map_or(Ok(()), |value| write!(writer, "{}", value))
    }

    fn write_row_start(&mut self, writer: &mut dyn Write) -> std::io::Result<()> {
        self.formatter.row_started()
            .map_or(Ok(()), |value| write!(writer, "{}", value))
    }

    fn write_row_item(&mut self, writer: &mut dyn Write, name: &str, value: &str, is_last: bool) -> std::io::Result<()> {
        self.formatter.format_element(name, value, is_last)
            .map_or(Ok(()), |value| write!(writer, "{}", value))
    }

    fn write_row_end(&mut self, writer: &mut dyn Write) -> std::io::Result<()> {
        self.formatter.row_ended()
            .map_or(Ok(()), |value| write!(writer, "{}", value))
    }
}

fn select_formatter(format: &OutputFormat) -> Box<dyn ResultsFormatter> {
    match format {
        OutputFormat::Arrow => Box::new(ARROW_FORMATTER),
        OutputFormat::Tabs => Box::new(TABS_FORMATTER),
        OutputFormat::Json => Box::new(JsonFormatter::default()),
    }
}
