//! Interactive mode: transliterate line by line
//!
//! History lives only for the session; nothing is written to disk.

use nu_ansi_term::Style;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::output::OutputFormat;
use crate::util::greek::contains_greek;
use crate::util::{color_enabled, error_message};

const PROMPT: &str = "ag2latin> ";

pub fn run(format: &OutputFormat) -> Result<(), String> {
    let mut rl = DefaultEditor::new().map_err(|e| e.to_string())?;

    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                if is_exit_command(line) {
                    break;
                }

                let _ = rl.add_history_entry(line);

                if let Err(e) = crate::print_transliterations(format, &[line.to_string()]) {
                    error_message("stdout", &e.to_string());
                    break;
                }

                if !contains_greek(line) {
                    print_note("no Greek letters found");
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => {
                error_message("readline", &err.to_string());
                break;
            }
        }
    }

    Ok(())
}

fn is_exit_command(line: &str) -> bool {
    matches!(line.to_lowercase().as_str(), "quit" | "exit" | "\\q")
}

fn print_note(note: &str) {
    match color_enabled() {
        true => eprintln!("{}", Style::new().dimmed().paint(note)),
        false => eprintln!("{}", note),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_commands() {
        assert!(is_exit_command("quit"));
        assert!(is_exit_command("EXIT"));
        assert!(is_exit_command("\\q"));
        assert!(!is_exit_command("ἔξω"));
        assert!(!is_exit_command("quit now"));
    }
}
