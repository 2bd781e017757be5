// ABOUTME: Reads batches of raw native records from JSON documents
// ABOUTME: Accepts a bare array of records or an envelope naming the device id
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use health_bridge_core::RawRecord;
use serde::Deserialize;
use serde_json::Value;
use std::io::{self, Read};
use thiserror::Error;

/// Errors reading an input document
///
/// These abort the whole run, unlike per-record assembly failures.
#[derive(Debug, Error)]
pub enum InputError {
    /// The document could not be read
    #[error("Failed to read input: {0}")]
    Io(#[from] io::Error),

    /// The document is not valid JSON or not one of the accepted shapes
    #[error("Invalid input JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// An element of the record array is not a mapping
    #[error("Input element {index} is not a record object")]
    NotARecord {
        /// Position of the element in the array
        index: usize,
    },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum InputDocument {
    Records(Vec<Value>),
    Envelope {
        device_id: Option<String>,
        records: Vec<Value>,
    },
}

/// A batch of raw records read from a document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordBatch {
    /// Device id named by the document, if any
    pub device_id: Option<String>,
    /// Raw records in document order
    pub records: Vec<RawRecord>,
}

impl RecordBatch {
    /// Parse a batch from a JSON string
    ///
    /// # Errors
    /// `Json` when the text is not an array of records or an
    /// `{ "device_id", "records" }` envelope; `NotARecord` when an array
    /// element is not an object
    pub fn from_json(text: &str) -> Result<Self, InputError> {
        let (device_id, values) = match serde_json::from_str(text)? {
            InputDocument::Records(records) => (None, records),
            InputDocument::Envelope { device_id, records } => (device_id, records),
        };

        let records = values
            .into_iter()
            .enumerate()
            .map(|(index, value)| match value {
                Value::Object(record) => Ok(record),
                _ => Err(InputError::NotARecord { index }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { device_id, records })
    }

    /// Read and parse a batch
    ///
    /// # Errors
    /// `Io` when reading fails, otherwise as [`from_json`](Self::from_json)
    pub fn read_from(mut reader: impl Read) -> Result<Self, InputError> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Self::from_json(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_bare_array_and_envelope() {
        let bare = RecordBatch::from_json(r#"[{"date_from": 1}]"#).unwrap();
        assert_eq!(bare.device_id, None);
        assert_eq!(bare.records.len(), 1);

        let envelope =
            RecordBatch::from_json(r#"{"device_id": "watch", "records": [{}, {}]}"#).unwrap();
        assert_eq!(envelope.device_id.as_deref(), Some("watch"));
        assert_eq!(envelope.records.len(), 2);
    }

    #[test]
    fn rejects_non_record_elements() {
        let err = RecordBatch::from_json(r#"[{}, 3]"#).unwrap_err();
        assert!(matches!(err, InputError::NotARecord { index: 1 }));
        assert!(matches!(
            RecordBatch::from_json("{\"nope\": 1}"),
            Err(InputError::Json(_))
        ));
    }
}
