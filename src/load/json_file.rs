// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::io::Read;

use serde_json::{Map, Value};

use super::LoadError;
use crate::types::Document;

/// Read a JSON array of article objects.
///
/// Scalar values are stringified (`"id": 42` becomes `"42"`), nulls are
/// treated as missing, nested arrays and objects are kept as compact JSON
/// text in `extra`.
pub fn read_json<R: Read>(reader: R) -> Result<Vec<Document>, LoadError> {
    let rows: Vec<Map<String, Value>> = serde_json::from_reader(reader)?;

    Ok(rows
        .into_iter()
        .map(|row| {
            Document::from_columns(
                row.into_iter()
                    .filter_map(|(key, value)| value_to_string(value).map(|v| (key, v))),
            )
        })
        .collect())
}

fn value_to_string(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}
