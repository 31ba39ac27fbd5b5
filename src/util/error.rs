use std::sync::atomic::{AtomicBool, Ordering};

use nu_ansi_term::Color;

static USE_COLOR: AtomicBool = AtomicBool::new(true);

pub fn set_color_enabled(enabled: bool) {
    USE_COLOR.store(enabled, Ordering::Relaxed);
}

pub fn color_enabled() -> bool {
    USE_COLOR.load(Ordering::Relaxed)
}

pub fn error_message(source: &str, description: &str) {
    eprintln!("{}", format_error_message(source, description, color_enabled()));
}

pub fn error_exit(source: &str, description: &str) -> ! {
    error_message(source, description);
    std::process::exit(2);
}

fn format_error_message(source: &str, description: &str, colored: bool) -> String {
    match colored {
        true => format!("{}: {}", Color::Yellow.paint(source), Color::Red.paint(description)),
        false => format!("{}: {}", source, description),
    }
}
