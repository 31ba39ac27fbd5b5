//! ag2latin: transliterate Ancient Greek text to Latin letters.

#[macro_use]
extern crate serde_derive;

use std::env;
use std::io;
use std::io::Write;

use nu_ansi_term::Color::{LightCyan, Yellow};

mod cli;
mod config;
#[cfg(feature = "interactive")]
mod interactive;
mod output;
mod translit;
mod util;

use crate::cli::{parse_output_format, Args};
use crate::config::Config;
use crate::output::{OutputFormat, ResultsWriter};
use crate::translit::ag2latin;
use crate::util::{color_enabled, error_exit, error_message, set_color_enabled};

const EXAMPLES: [&str; 7] = [
    "μῆνιν",
    "θεὰ",
    "Αχιλῆος",
    "ἄειδε",
    "ἑλώρια",
    "Πηληϊάδεω",
    "ῥίγος",
];

fn main() {
    let config = Config::new().unwrap_or_else(|err| {
        error_message("config", &err);
        Config::default()
    });

    if config.no_color.unwrap_or(false) || env::var_os("NO_COLOR").is_some() {
        set_color_enabled(false);
    }

    let args = match Args::parse(env::args().skip(1)) {
        Ok(args) => args,
        Err(err) => error_exit("ag2latin", &err),
    };

    if args.no_color {
        set_color_enabled(false);
    }

    if args.help {
        usage_info();
        return;
    }

    if args.version {
        println!("ag2latin {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    let format = select_output_format(&args, &config);

    if args.interactive {
        run_interactive(&format);
    } else {
        let inputs = match args.text {
            Some(text) => vec![text],
            None => default_examples(),
        };

        if let Err(err) = print_transliterations(&format, &inputs) {
            if err.kind() != io::ErrorKind::BrokenPipe {
                error_message("stdout", &err.to_string());
            }
        }
    }
}

fn default_examples() -> Vec<String> {
    EXAMPLES.iter().map(|s| s.to_string()).collect()
}

fn select_output_format(args: &Args, config: &Config) -> OutputFormat {
    if let Some(format) = args.output {
        return format;
    }

    match config.default_output {
        Some(ref name) => parse_output_format(name).unwrap_or_else(|err| {
            error_message("config", &err);
            OutputFormat::default()
        }),
        None => OutputFormat::default(),
    }
}

/// Transliterates every input and writes the pairs to stdout in the given format.
pub(crate) fn print_transliterations(format: &OutputFormat, inputs: &[String]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    write_transliterations(format, inputs, &mut out)?;
    out.flush()
}

fn write_transliterations(format: &OutputFormat, inputs: &[String], out: &mut dyn Write) -> io::Result<()> {
    let mut writer = ResultsWriter::new(format);

    writer.write_header(out)?;
    for input in inputs {
        writer.write_pair(out, input, &ag2latin(input))?;
    }
    writer.write_footer(out)
}

#[cfg(feature = "interactive")]
fn run_interactive(format: &OutputFormat) {
    if let Err(err) = interactive::run(format) {
        error_exit("interactive", &err);
    }
}

#[cfg(not(feature = "interactive"))]
fn run_interactive(_format: &OutputFormat) {
    error_exit("interactive", "this build of ag2latin has no interactive mode");
}

fn usage_info() {
    let name = format!("ag2latin {}", env!("CARGO_PKG_VERSION"));
    let usage = "Usage: ag2latin [OPTIONS] [TEXT...]";

    match color_enabled() {
        true => {
            println!("{}", Yellow.bold().paint(name));
            println!("Transliterate Ancient Greek text to Latin letters.");
            println!();
            println!("{}", LightCyan.paint(usage));
        }
        false => {
            println!("{}", name);
            println!("Transliterate Ancient Greek text to Latin letters.");
            println!();
            println!("{}", usage);
        }
    }

    println!(
        "
Without TEXT a list of examples from Homer is transliterated.

Options:
    -o, --output FORMAT   Output format (see below)
    -i, --interactive     Read lines from the terminal and transliterate each
        --nocolor         Disable colors
    -h, --help            Show this help
    -V, --version         Show version

Output formats:"
    );

    for (name, description) in OutputFormat::get_names_and_descriptions() {
        println!("    {:<8}{}", name, description);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_all(format: OutputFormat, inputs: &[&str]) -> String {
        let inputs: Vec<String> = inputs.iter().map(|s| s.to_string()).collect();
        let mut buf = Vec::new();
        write_transliterations(&format, &inputs, &mut buf).unwrap();

        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_examples() {
        let inputs: Vec<&str> = EXAMPLES.to_vec();

        assert_eq!(
            write_all(OutputFormat::Arrow, &inputs),
            "μῆνιν -> MĒNIN
θεὰ -> THEA
Αχιλῆος -> ACHILĒOS
ἄειδε -> AEIDE
ἑλώρια -> HELŌRIA
Πηληϊάδεω -> PĒLĒIADEŌ
ῥίγος -> RHIGOS
"
        );
    }

    #[test]
    fn test_single_input() {
        assert_eq!(write_all(OutputFormat::Arrow, &["Πύῤῥος"]), "Πύῤῥος -> PYRRHOS\n");
        assert_eq!(write_all(OutputFormat::Tabs, &["θεὰ"]), "θεὰ\tTHEA\n");
        assert_eq!(
            write_all(OutputFormat::Json, &["καὶ ῥίγος"]),
            "[{\"greek\":\"καὶ ῥίγος\",\"latin\":\"KAI RHIGOS\"}]\n"
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(write_all(OutputFormat::Arrow, &[""]), " -> \n");
    }

    #[test]
    fn test_output_selection() {
        let args = Args { output: Some(OutputFormat::Tabs), ..Args::default() };
        let config = Config { default_output: Some(String::from("json")), ..Config::default() };

        assert_eq!(select_output_format(&args, &config), OutputFormat::Tabs);
        assert_eq!(select_output_format(&Args::default(), &config), OutputFormat::Json);
        assert_eq!(select_output_format(&Args::default(), &Config::default()), OutputFormat::Arrow);
    }

    #[test]
    fn test_default_examples() {
        assert_eq!(default_examples().len(), EXAMPLES.len());
        assert_eq!(default_examples()[6], "ῥίγος");
    }
}
