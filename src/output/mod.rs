//! Result rendering.
//!
//! Turns a [`QueryResult`] into either colored text or a JSON document. Both
//! modes consume the same value, so success, no-record and error cases are
//! shaped identically regardless of mode.
//!
//! | Result          | Text (stdout / stderr)          | JSON (stdout)            |
//! |-----------------|---------------------------------|--------------------------|
//! | records         | labeled lines per record        | `{"records": [...]}`     |
//! | no record       | `There is no such DNS record`   | `{"records": []}`        |
//! | error           | stderr: `error: <message>`      | `{"error": "<message>"}` |

mod json;
mod text;

use std::io::{self, Write};

use crate::query::{QueryOutcome, QueryResult};

// Re-export public API
pub use json::to_json;
pub use text::NO_RECORD_MESSAGE;

/// Output mode selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Colored, line-oriented text
    #[default]
    Text,
    /// A single JSON document
    Json,
}

impl OutputFormat {
    /// Maps the `--json` flag to an output format.
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Renders `result` to `out`, or to `err` for text-mode errors.
///
/// In JSON mode errors are written to `out` as `{"error": ...}` and nothing is
/// written to `err`.
///
/// # Errors
///
/// Returns an I/O error if writing fails or the JSON document cannot be serialized.
pub fn render<O: Write, E: Write>(
    result: &QueryResult,
    format: OutputFormat,
    out: &mut O,
    err: &mut E,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => {
            let document = to_json(result).map_err(io::Error::other)?;
            writeln!(out, "{document}")
        }
        OutputFormat::Text => match result {
            Ok(QueryOutcome::Records(records)) => text::write_records(out, records),
            Ok(QueryOutcome::NoRecord) => text::write_no_record(out),
            Err(e) => text::write_error(err, e),
        },
    }
}

/// Process exit code for a rendered result.
///
/// A JSON error document is a handled outcome, so only a text-mode error
/// (written to the error stream) yields 1.
pub fn exit_code(result: &QueryResult, format: OutputFormat) -> i32 {
    match (result, format) {
        (Err(_), OutputFormat::Text) => 1,
        _ => 0,
    }
}
