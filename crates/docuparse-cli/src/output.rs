//! Output formatting for docuparse-cli

use colored::Colorize;
use serde::Serialize;

/// Context for output rendering
#[allow(dead_code)]
pub struct OutputContext {
    pub no_color: bool,
    pub quiet: bool,
}

impl OutputContext {
    pub fn new(no_color: bool, quiet: bool) -> Self {
        if no_color {
            colored::control::set_override(false);
        }
        Self { no_color, quiet }
    }

    /// Print a success message (unless in quiet mode)
    pub fn success(&self, msg: &str) {
        if !self.quiet {
            println!("{}", msg.green());
        }
    }

    /// Print an info message (unless in quiet mode)
    #[allow(dead_code)]
    pub fn info(&self, msg: &str) {
        if !self.quiet {
            println!("{}", msg);
        }
    }

    /// Print an error message
    #[allow(dead_code)]
    pub fn error(&self, msg: &str) {
        eprintln!("{}", msg.red());
    }

    /// Pretty-print a response body as JSON
    pub fn print_json<T: Serialize>(&self, data: &T) {
        println!(
            "{}",
            serde_json::to_string_pretty(data).unwrap_or_else(|_| "{}".to_string())
        );
    }

    /// Print key-value pairs
    pub fn print_kv(&self, pairs: &[(&str, String)]) {
        for (key, value) in pairs {
            println!("{}: {}", key.bold(), value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_context_keeps_flags() {
        let ctx = OutputContext::new(true, true);
        assert!(ctx.no_color);
        assert!(ctx.quiet);
    }

    #[test]
    fn test_print_json_handles_values() {
        let ctx = OutputContext::new(true, false);
        // Smoke test: must not panic on arbitrary JSON
        ctx.print_json(&serde_json::json!({"file_id": "file_abc", "pages": [1, 2]}));
    }
}
