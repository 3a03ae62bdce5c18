//! Diagnostic output for the prompt binary.
//!
//! Standard output carries nothing but the prompt string, so every human-facing
//! message goes to standard error.

use colored::*;

/// Formats and prints an error message with consistent styling
///
/// # Format
/// ```text
/// ✕ Error: <message>
/// ```
///
/// # Colors
/// - "✕ Error:" in red
/// - Message in white
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✕ Error:".red(), message.white());
}
