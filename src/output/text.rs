//! Colored, line-oriented rendering.

use std::io::{self, Write};

use colored::*;

use crate::error_handling::QueryError;
use crate::query::EnrichedRecord;

/// Line printed when the provider returned no answer section.
pub const NO_RECORD_MESSAGE: &str = "There is no such DNS record";

/// Writes four labeled lines per record, plus a `whois` line when present.
pub(crate) fn write_records<W: Write>(out: &mut W, records: &[EnrichedRecord]) -> io::Result<()> {
    for record in records {
        write_field(out, "name", &record.name)?;
        write_field(out, "type", &record.rr_type.to_string())?;
        write_field(out, "ttl", &record.ttl.to_string())?;
        write_field(out, "data", &record.data)?;
        if let Some(whois) = &record.whois {
            write_field(out, "whois", whois)?;
        }
    }
    Ok(())
}

pub(crate) fn write_no_record<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{NO_RECORD_MESSAGE}")
}

pub(crate) fn write_error<W: Write>(err: &mut W, error: &QueryError) -> io::Result<()> {
    writeln!(err, "error: {error}")
}

fn write_field<W: Write>(out: &mut W, label: &str, value: &str) -> io::Result<()> {
    writeln!(out, "{}: {}", label.blue(), value.green())
}
