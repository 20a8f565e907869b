//! [`Reporter`] that speaks GitHub Actions workflow commands.

use std::io::Write;

use labeler::Reporter;

/// Writes progress to stdout: info lines verbatim, warnings and errors as
/// `::warning::` / `::error::` commands the runner turns into annotations.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActionsReporter;

impl ActionsReporter {
    /// Reports the terminal failure of the run.
    pub fn error(&self, message: &str) {
        emit(&format!("::error::{}", escape_data(message)));
    }
}

impl Reporter for ActionsReporter {
    fn info(&self, message: &str) {
        emit(message);
    }

    fn warning(&self, message: &str) {
        emit(&format!("::warning::{}", escape_data(message)));
    }
}

fn emit(line: &str) {
    // A closed stdout must not abort the run; the outcome still maps to the exit code.
    let _ = writeln!(std::io::stdout().lock(), "{line}");
}

/// Escapes command data so multi-line messages stay one command.
fn escape_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}
