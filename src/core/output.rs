//! Message printing for the command line.
//!
//! These stand in for the toast notifications of a graphical front end:
//! every command reports success, information or failure through them so the
//! spacing and colors stay the same across commands.

use colored::*;

/// Prints an error message
///
/// # Format
/// ```text
///
/// ✕ Error: <message>
///
/// ```
pub fn print_error(message: &str) {
    eprintln!("\n{} {}\n", "✕ Error:".red(), message.white());
}

/// Prints a success message, e.g. after adding an item or saving an outfit
pub fn print_success(message: &str) {
    println!("\n{} {}", "✓".green(), message.white());
}

/// Prints a neutral notice
pub fn print_info(message: &str) {
    println!("\n{}\n", message.white());
}

pub fn print_section_header(header: &str) {
    println!("\n{}:\n", header.white().bold());
}

/// Prints a hint about what the user can do next
pub fn print_hint(message: &str) {
    println!("{} {}", "›".bright_black(), message.bright_black());
}
