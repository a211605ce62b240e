//! Output formatting for CLI commands
//!
//! Results go to stdout, either as text or as one JSON value per command.
//! `--verbose` diagnostics go to stderr.

use serde::Serialize;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Printed under a section heading that has no rows
const EMPTY_SECTION: &str = "No tasks";

pub struct Output {
    format: OutputFormat,
    verbose: bool,
}

impl Output {
    pub fn new(format: OutputFormat, verbose: bool) -> Self {
        Self { format, verbose }
    }

    /// Returns true if using JSON format
    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    /// Prints a one-line confirmation, wrapped in `{"success": true, ...}` for JSON
    pub fn success(&self, message: &str) {
        if self.is_json() {
            self.data(&serde_json::json!({ "success": true, "message": message }));
        } else {
            println!("{}", message);
        }
    }

    /// Prints a value as a single line of JSON
    pub fn data<T: Serialize>(&self, data: &T) {
        if let Ok(json) = serde_json::to_string(data) {
            println!("{}", json);
        }
    }

    /// Prints an aggregate: `data` as JSON, or a titled block of `rows` as text
    pub fn section<T, I>(&self, title: &str, data: &T, rows: I)
    where
        T: Serialize,
        I: IntoIterator<Item = String>,
    {
        if self.is_json() {
            self.data(data);
        } else {
            print!("{}", render_section(title, rows));
        }
    }

    /// Prints a verbose debug message (only when --verbose is set)
    pub fn verbose(&self, message: &str) {
        self.log("[verbose]", message);
    }

    /// Prints a verbose debug message tagged with a context
    pub fn verbose_ctx(&self, context: &str, message: &str) {
        self.log(&format!("[verbose:{}]", context), message);
    }

    fn log(&self, tag: &str, message: &str) {
        if self.verbose {
            eprintln!("{} {}", tag, message);
        }
    }
}

/// Title line followed by one line per row, or a placeholder when empty
fn render_section<I: IntoIterator<Item = String>>(title: &str, rows: I) -> String {
    let mut out = format!("{}\n", title);
    let mut any = false;
    for row in rows {
        any = true;
        out.push_str(&row);
        out.push('\n');
    }
    if !any {
        out.push_str(EMPTY_SECTION);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_lists_each_row_under_the_title() {
        let rendered = render_section(
            "Productivity Report",
            vec!["PENDING   : 2".to_string(), "COMPLETED : 1".to_string()],
        );

        assert_eq!(rendered, "Productivity Report\nPENDING   : 2\nCOMPLETED : 1\n");
    }

    #[test]
    fn empty_section_prints_placeholder() {
        assert_eq!(
            render_section("User Task Summary", Vec::new()),
            "User Task Summary\nNo tasks\n"
        );
    }
}
