//! Human-readable report of a bound record.
//!
//! A [`Report`] lists every field with its declared type, lookup key,
//! required flag, and current value. It does no conversion or validation of
//! its own: it re-reads the same tags the binder uses and renders the values
//! already stored in the record.
//!
//! ```text
//! FIELD NAME:   TYPE:        ENV:          REQUIRED:  VALUE:
//! database_url  String       DATABASE_URL  true       postgres://localhost/app
//! port          u16          PORT          false      8080
//! timeout       Duration     TIMEOUT       false      2h 30m
//! ```
//!
//! Output goes to whatever sink the caller passes; [`print_report`] uses
//! stdout.

use std::fmt;
use std::io::{self, Write};

use serde::Serialize;

use crate::error::EnvstructError;
use crate::record::Envstruct;
use crate::tag::Directive;
use crate::types::ReportFormat;

const HEADER: [&str; 5] = ["FIELD NAME:", "TYPE:", "ENV:", "REQUIRED:", "VALUE:"];
const PADDING: usize = 2;
const REDACTED: &str = "<redacted>";

/// One report line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub field: String,
    #[serde(rename = "type")]
    pub type_name: String,
    pub env: String,
    pub required: bool,
    pub value: String,
}

/// Rows for every field of a record, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Report {
    pub rows: Vec<ReportRow>,
}

impl Report {
    /// Snapshot the current field values of `record`.
    ///
    /// Fields tagged `noreport` show `<redacted>` instead of their value.
    pub fn of<T: Envstruct>(record: &T) -> Self {
        let rows = T::FIELDS
            .iter()
            .enumerate()
            .map(|(index, field)| {
                let directive = Directive::parse(field.tag);
                let value = if directive.no_report {
                    REDACTED.to_string()
                } else {
                    record.render_field(index)
                };
                ReportRow {
                    field: field.name.to_string(),
                    type_name: field.type_name.to_string(),
                    env: directive.lookup_key,
                    required: directive.required,
                    value,
                }
            })
            .collect();
        Report { rows }
    }

    /// Write the report to `sink` in the given format.
    pub fn write_to<W: Write>(&self, format: ReportFormat, mut sink: W) -> Result<(), EnvstructError> {
        match format {
            ReportFormat::Table => writeln!(sink, "{self}")?,
            ReportFormat::Json => {
                serde_json::to_writer_pretty(&mut sink, self)?;
                writeln!(sink)?;
            }
        }
        sink.flush()?;
        Ok(())
    }

    fn cells(&self) -> Vec<[String; 5]> {
        let header = HEADER.map(String::from);
        let body = self.rows.iter().map(|row| {
            [
                row.field.clone(),
                row.type_name.clone(),
                row.env.clone(),
                row.required.to_string(),
                row.value.clone(),
            ]
        });
        std::iter::once(header).chain(body).collect()
    }
}

/// Aligned table. Every column but the last is padded to its widest cell plus
/// two spaces; the last column is written as is.
impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines = self.cells();
        let mut widths = [0usize; 5];
        for line in &lines {
            for (width, cell) in widths.iter_mut().zip(line) {
                *width = (*width).max(cell.chars().count());
            }
        }

        for (i, line) in lines.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let [leading @ .., last] = line;
            for (cell, width) in leading.iter().zip(widths) {
                write!(f, "{cell:<w$}", w = width + PADDING)?;
            }
            write!(f, "{last}")?;
        }
        Ok(())
    }
}

/// Write a table report of `record` to `sink`.
pub fn write_report<T: Envstruct, W: Write>(record: &T, sink: W) -> Result<(), EnvstructError> {
    Report::of(record).write_to(ReportFormat::Table, sink)
}

/// Write a table report of `record` to stdout.
pub fn print_report<T: Envstruct>(record: &T) -> Result<(), EnvstructError> {
    write_report(record, io::stdout().lock())
}
