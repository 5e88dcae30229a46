//! Colored output helpers for CLI
//!
//! Status lines go to stderr. Stdout carries only search results, and the
//! MCP stream when serving over stdio.

use owo_colors::OwoColorize;

/// Output style configuration
pub struct Output {
    /// Whether to use colored output
    pub colored: bool,
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}

impl Output {
    /// Create a new output helper with colors enabled
    pub fn new() -> Self {
        Self { colored: true }
    }

    /// Create a new output helper with colors disabled
    pub fn no_color() -> Self {
        Self { colored: false }
    }

    /// Print the startup banner
    pub fn banner(&self) {
        if self.colored {
            eprintln!(
                "\n   {} {}\n",
                "Brave Search MCP".bright_cyan().bold(),
                format!("v{}", env!("CARGO_PKG_VERSION")).dimmed()
            );
        } else {
            eprintln!("\n   Brave Search MCP v{}\n", env!("CARGO_PKG_VERSION"));
        }
    }

    /// Print a success message with a checkmark
    pub fn success(&self, message: &str) {
        if self.colored {
            eprintln!("  {} {}", "✓".green().bold(), message.green());
        } else {
            eprintln!("  [OK] {}", message);
        }
    }

    /// Print an error message
    pub fn error(&self, message: &str) {
        if self.colored {
            eprintln!("  {} {}", "✗".red().bold(), message.red());
        } else {
            eprintln!("  [ERROR] {}", message);
        }
    }

    /// Print a key-value pair
    pub fn kv(&self, key: &str, value: &str) {
        if self.colored {
            eprintln!("    {}: {}", key.dimmed(), value.bright_white());
        } else {
            eprintln!("    {}: {}", key, value);
        }
    }

    /// Print rendered search results to stdout, uncolored.
    pub fn results(&self, text: &str) {
        println!("{}", text);
    }
}
