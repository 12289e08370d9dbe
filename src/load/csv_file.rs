// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::io::Read;

use csv::ReaderBuilder;

use super::LoadError;
use crate::types::Document;

/// Read a CSV article export. The first row is the header.
///
/// Rows may be shorter or longer than the header: missing cells are simply
/// absent, cells past the last header are dropped. Blank lines are skipped.
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<Document>, LoadError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = reader.headers()?.clone();

    reader
        .records()
        .map(|record| -> Result<Document, LoadError> {
            let record = record?;
            Ok(Document::from_columns(headers.iter().zip(record.iter())))
        })
        .collect()
}
