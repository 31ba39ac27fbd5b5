//! Handles command-line arguments

use crate::output::OutputFormat;

#[derive(Debug, Default, PartialEq)]
pub struct Args {
    pub text: Option<String>,
    pub output: Option<OutputFormat>,
    pub interactive: bool,
    pub no_color: bool,
    pub help: bool,
    pub version: bool,
}

impl Args {
    pub fn parse<I: IntoIterator<Item = String>>(args: I) -> Result<Args, String> {
        let mut result = Args::default();
        let mut words: Vec<String> = vec![];
        let mut only_words = false;

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            if only_words || !arg.starts_with('-') || arg == "-" {
                if !arg.is_empty() {
                    words.push(arg);
                }
                continue;
            }

            match arg.as_str() {
                "--" => only_words = true,
                "-i" | "--interactive" => result.interactive = true,
                "--nocolor" | "--no-color" => result.no_color = true,
                "-h" | "--help" => result.help = true,
                "-V" | "--version" => result.version = true,
                "-o" | "--output" => {
                    let value = args.next()
                        .ok_or_else(|| format!("Missing value for {}", arg))?;
                    result.output = Some(parse_output_format(&value)?);
                }
                _ => match arg.strip_prefix("--output=") {
                    Some(value) => result.output = Some(parse_output_format(value)?),
                    None => return Err(format!("Unknown option: {}", arg)),
                },
            }
        }

        if !words.is_empty() {
            result.text = Some(words.join(" "));
        }

        Ok(result)
    }
}

pub fn parse_output_format(value: &str) -> Result<OutputFormat, String> {
    OutputFormat::from(value).ok_or_else(|| format!("Unknown output format: {}", value))
}
