//! Terminal output helpers.
//!
//! Results go to stdout unstyled so they can be piped; errors go to
//! stderr.

use console::style;

use crate::config::Settings;

/// Apply the color preference from settings.
pub fn configure(settings: &Settings) {
    if !settings.color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }
}

/// Print "Encrypted: {blob}".
pub fn encrypted(blob: &str) {
    println!("Encrypted: {blob}");
}

/// Print "Decrypted: {text}".
pub fn decrypted(text: &str) {
    println!("Decrypted: {text}");
}

/// Print a red "Error: {msg}" on stderr.
pub fn error(msg: &str) {
    eprintln!("{} {}", style("Error:").for_stderr().red().bold(), msg);
}
