//! Shared fetch-and-parse routine for delimited-text sources.
//!
//! The CSV-by-URL and Google Docs importers are deliberately
//! response-compatible: same validation rules, same messages, same record
//! shape. Only the upstream URL they hit differs.

use std::collections::HashSet;
use std::io::Cursor;

use serde_json::{Map, Value};
use tracing::debug;

use super::TaskStream;
use crate::domain::TaskRecord;
use crate::infrastructure::http::Transport;
use crate::shared::errors::{BulkImportError, ImportResult};

const MSG_FORBIDDEN: &str = "Oops! It looks like you don't have permission to access that file";
const MSG_WRONG_TYPE: &str = "Oops! That file doesn't look like the right file.";
const MSG_DUP_HEADER: &str = "The file you uploaded has two headers with the same name.";

/// Task-level fields the platform recognizes. A column with one of these
/// headers becomes a top-level task field instead of task info.
const RESERVED_FIELDS: [&str; 5] = ["state", "quorum", "calibration", "priority_0", "n_answers"];

/// GET `url` and turn the response into a lazy record stream.
///
/// Fails before yielding anything on a 403, a non-CSV content type or a
/// repeated header name; a fresh request is issued on every call.
pub(super) async fn fetch(transport: &dyn Transport, url: &str) -> ImportResult<TaskStream> {
    let response = transport.get(url, &[]).await?;

    if response.status == 403 {
        return Err(BulkImportError::PermissionDenied(MSG_FORBIDDEN.to_string()));
    }
    match response.mime_type() {
        Some("text/plain") | Some("text/csv") => {}
        _ => {
            return Err(BulkImportError::WrongContentType(
                MSG_WRONG_TYPE.to_string(),
            ))
        }
    }

    parse(response.body)
}

/// Count records by consuming the stream without exposing it.
pub(super) async fn count(transport: &dyn Transport, url: &str) -> ImportResult<usize> {
    let mut total = 0;
    for record in fetch(transport, url).await? {
        record?;
        total += 1;
    }
    Ok(total)
}

fn parse(body: String) -> ImportResult<TaskStream> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(Cursor::new(body));

    let headers: Vec<String> = reader
        .headers()
        .map_err(BulkImportError::from)?
        .iter()
        .map(str::to_string)
        .collect();

    // A repeated header makes rows ambiguous as mappings.
    let mut seen = HashSet::new();
    for header in &headers {
        if !seen.insert(header.as_str()) {
            return Err(BulkImportError::MalformedSource(MSG_DUP_HEADER.to_string()));
        }
    }
    debug!("Tabular source declared {} columns", headers.len());

    let records = reader
        .into_records()
        .map(move |row| -> ImportResult<TaskRecord> {
            let row = row.map_err(BulkImportError::from)?;
            Ok(row_to_record(&headers, &row))
        });

    Ok(Box::new(records))
}

fn row_to_record(headers: &[String], row: &csv::StringRecord) -> TaskRecord {
    let mut info = Map::new();
    let mut extra = Map::new();

    for (header, field) in headers.iter().zip(row.iter()) {
        let value = Value::String(field.to_string());
        if RESERVED_FIELDS.contains(&header.as_str()) {
            extra.insert(header.clone(), value);
        } else {
            info.insert(header.clone(), value);
        }
    }

    TaskRecord::with_extra(info, extra)
}
