/// User interface and status output utilities
///
/// This module handles:
/// - Serialized console output
/// - Colored terminal text
/// - Status message formatting

use lazy_static::lazy_static;
use std::io::{self, IsTerminal, Write};
use std::sync::Mutex;
use term::Terminal;

/// Execute a function with exclusive access to console output
fn status_lock<F>(f: F)
where
    F: FnOnce(),
{
    lazy_static! {
        static ref LOCK: Mutex<()> = Mutex::new(());
    }
    let _guard = LOCK.lock();
    f();
}

/// Print the "report: " prefix for status messages
fn print_status_header() {
    print!("report: ");
}

/// Print colored text to terminal, with fallback to plain text
fn print_color(s: &str, fg: term::color::Color) {
    print!("{}", label(s, fg, io::stdout().is_terminal()));
}

/// Render a label, colored when `color` is set and terminfo is available.
/// The escape codes are rendered into a buffer so they go through `print!`.
fn label(s: &str, fg: term::color::Color, color: bool) -> String {
    if color {
        if let Some(colored) = really_color(s, fg) {
            return colored;
        }
    }
    s.to_string()
}

fn really_color(s: &str, fg: term::color::Color) -> Option<String> {
    let mut t = term::TerminfoTerminal::new(Vec::new())?;
    t.fg(fg).ok()?;
    let _ = t.attr(term::Attr::Bold);
    write!(t, "{}", s).ok()?;
    let _ = t.reset();
    String::from_utf8(t.into_inner()).ok()
}

/// Print a status message with "report: " prefix
pub fn status(s: &str) {
    status_lock(|| {
        print_status_header();
        println!("{}", s);
    });
}

/// Print a warning with colored "warning" prefix
pub fn print_warning(msg: &str) {
    status_lock(|| {
        print_color("warning", term::color::BRIGHT_YELLOW);
        println!(": {}", msg);
    });
}

/// Print an error message with colored "error" prefix
pub fn print_error(msg: &str) {
    status_lock(|| {
        println!();
        print_color("error", term::color::BRIGHT_RED);
        println!(": {}", msg);
        println!();
    });
}
