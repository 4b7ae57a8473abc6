// ABOUTME: User-facing messages for run failures and completion
// ABOUTME: Prints error chains with optional help text, colored when stderr is a terminal

use anyhow::Error;
use gqlbind::GenerateError;
use owo_colors::OwoColorize;
use std::io::IsTerminal;

pub struct CliOutput {
    use_color: bool,
}

impl CliOutput {
    /// Create new CLI output utility with TTY detection
    pub fn new() -> Self {
        Self {
            use_color: std::io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none(),
        }
    }

    pub fn with_color(use_color: bool) -> Self {
        Self { use_color }
    }

    pub fn use_color(&self) -> bool {
        self.use_color
    }

    /// Error line, its causes, and help text when a generation error is in the chain
    pub fn format_error(&self, err: &Error) -> String {
        let mut lines = Vec::new();
        if self.use_color {
            lines.push(format!("{} {}", "error:".red().bold(), err));
        } else {
            lines.push(format!("error: {}", err));
        }

        for cause in err.chain().skip(1) {
            lines.push(format!("  caused by: {}", cause));
        }

        let help = err
            .chain()
            .find_map(|cause| cause.downcast_ref::<GenerateError>())
            .and_then(GenerateError::help_text);
        if let Some(help) = help {
            if self.use_color {
                lines.push(format!("{} {}", "help:".cyan().bold(), help));
            } else {
                lines.push(format!("help: {}", help));
            }
        }

        lines.join("\n")
    }

    pub fn error(&self, err: &Error) {
        eprintln!("{}", self.format_error(err));
    }

    pub fn success(&self, message: &str) {
        if self.use_color {
            eprintln!("{} {}", "success:".green().bold(), message);
        } else {
            eprintln!("success: {}", message);
        }
    }
}

impl Default for CliOutput {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_plain_error_chain() {
        let cli = CliOutput::with_color(false);
        let err = std::fs::read_to_string("/definitely/missing/gqlbind.yml")
            .context("Failed to read config file")
            .unwrap_err();

        let output = cli.format_error(&err);
        assert!(output.starts_with("error: Failed to read config file"));
        assert!(output.contains("caused by:"));
        assert!(!output.contains("help:"));
    }

    #[test]
    fn test_generation_error_help() {
        let cli = CliOutput::with_color(false);
        let err: Result<(), GenerateError> =
            Err(GenerateError::MutationNotFound("cloudUnlinkAccount".to_string()));
        let err = err.context("Failed to generate package cloud").unwrap_err();

        let output = cli.format_error(&err);
        assert!(output.contains("caused by: Mutation cloudUnlinkAccount not found"));
        assert!(output.contains("help: Mutation names are matched exactly"));
    }

    #[test]
    fn test_color_setting() {
        assert!(CliOutput::with_color(true).use_color());
        assert!(!CliOutput::with_color(false).use_color());
    }
}
