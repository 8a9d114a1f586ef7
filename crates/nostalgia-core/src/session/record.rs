//! Stored record codec.
//!
//! A record is `label[NTS2]{json}`. Records are joined into one growing blob,
//! each one preceded by `[NOSTALGIATOKSPLIT]`:
//!
//! ```text
//! null[NOSTALGIATOKSPLIT]summer[NTS2]{"year":"1999",...}[NOSTALGIATOKSPLIT][NTS2]{...}
//! ```
//!
//! The leading segment is empty for a fresh store, or the literal `null`
//! left behind by an uninitialized key-value slot; both are dropped.

use super::model::Session;
use crate::error::StoreError;
use tracing::warn;

/// Separates a record's label from its JSON body.
pub const SESSION_SEPARATOR: &str = "[NTS2]";
/// Precedes every record in the blob.
pub const RECORD_SEPARATOR: &str = "[NOSTALGIATOKSPLIT]";

/// Placeholder written by a key-value slot that was read before first use.
const NULL_SEGMENT: &str = "null";

/// JSON escape for `[`, which starts both separators.
const ESCAPED_BRACKET: &str = "\\u005b";

/// Removes separators until none remain. A single pass is not enough:
/// `[NT[NTS2]S2]` collapses into `[NTS2]`.
fn strip_separators(mut label: String) -> String {
    while label.contains(RECORD_SEPARATOR) || label.contains(SESSION_SEPARATOR) {
        label = label
            .replace(RECORD_SEPARATOR, "")
            .replace(SESSION_SEPARATOR, "");
    }
    label
}

/// A labelled session as held by a record store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredRecord {
    pub label: String,
    pub session: Session,
}

impl StoredRecord {
    /// Creates a record. Separator tokens are removed from the label so the
    /// record cannot split itself.
    pub fn new(label: impl Into<String>, session: Session) -> Self {
        Self {
            label: strip_separators(label.into()),
            session,
        }
    }

    /// Encodes as `label[NTS2]json`.
    ///
    /// Every `[` in the JSON is written as `\u005b`. Session fields are
    /// plain strings, so this only touches string content and no separator
    /// can appear in the body.
    pub fn encode(&self) -> Result<String, StoreError> {
        let json = serde_json::to_string(&self.session)
            .map_err(|e| StoreError::corrupt(format!("failed to encode session: {}", e)))?;
        Ok(format!(
            "{}{}{}",
            self.label,
            SESSION_SEPARATOR,
            json.replace('[', ESCAPED_BRACKET)
        ))
    }

    /// Decodes one `label[NTS2]json` segment.
    pub fn decode(segment: &str) -> Result<Self, StoreError> {
        let (label, json) = segment
            .split_once(SESSION_SEPARATOR)
            .ok_or_else(|| StoreError::corrupt("missing session separator"))?;
        let session: Session = serde_json::from_str(json)
            .map_err(|e| StoreError::corrupt(format!("invalid session JSON: {}", e)))?;
        Ok(Self {
            label: label.to_string(),
            session,
        })
    }
}

#[derive(Debug, Clone)]
enum Segment {
    Valid { raw: String, record: StoredRecord },
    Corrupt(String),
}

/// The parsed form of a stored blob.
///
/// Keeps every segment's original text so that rewriting after a delete
/// reproduces untouched records, corrupt ones included, byte for byte.
#[derive(Debug, Clone, Default)]
pub struct RecordBlob {
    segments: Vec<Segment>,
}

impl RecordBlob {
    /// Parses a blob. Corrupt segments are kept but reported with a warning.
    pub fn parse(blob: &str) -> Self {
        let segments = blob
            .split(RECORD_SEPARATOR)
            .filter(|segment| !segment.is_empty() && *segment != NULL_SEGMENT)
            .map(|segment| match StoredRecord::decode(segment) {
                Ok(record) => Segment::Valid {
                    raw: segment.to_string(),
                    record,
                },
                Err(e) => {
                    warn!("Skipping stored record: {}", e);
                    Segment::Corrupt(segment.to_string())
                }
            })
            .collect();
        Self { segments }
    }

    /// Well-formed records in append order.
    pub fn records(&self) -> Vec<StoredRecord> {
        self.segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Valid { record, .. } => Some(record.clone()),
                Segment::Corrupt(_) => None,
            })
            .collect()
    }

    /// Number of well-formed records.
    pub fn len(&self) -> usize {
        self.segments
            .iter()
            .filter(|segment| matches!(segment, Segment::Valid { .. }))
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appends a record at the end.
    pub fn push(&mut self, record: StoredRecord) -> Result<(), StoreError> {
        let raw = record.encode()?;
        self.segments.push(Segment::Valid { raw, record });
        Ok(())
    }

    /// Removes the well-formed record at `index % len()`.
    ///
    /// Returns `None` when there are no well-formed records.
    pub fn remove(&mut self, index: usize) -> Option<StoredRecord> {
        let count = self.len();
        if count == 0 {
            return None;
        }
        let target = index % count;

        let position = self
            .segments
            .iter()
            .enumerate()
            .filter(|(_, segment)| matches!(segment, Segment::Valid { .. }))
            .nth(target)
            .map(|(position, _)| position)?;

        match self.segments.remove(position) {
            Segment::Valid { record, .. } => Some(record),
            Segment::Corrupt(_) => None,
        }
    }

    /// Serializes back into blob form, each segment preceded by the record separator.
    pub fn to_blob(&self) -> String {
        self.segments
            .iter()
            .map(|segment| match segment {
                Segment::Valid { raw, .. } => raw.as_str(),
                Segment::Corrupt(raw) => raw.as_str(),
            })
            .fold(String::new(), |mut blob, raw| {
                blob.push_str(RECORD_SEPARATOR);
                blob.push_str(raw);
                blob
            })
    }

    /// Appends an encoded record to an existing blob without re-parsing it.
    pub fn append_encoded(blob: &str, record: &StoredRecord) -> Result<String, StoreError> {
        Ok(format!("{}{}{}", blob, RECORD_SEPARATOR, record.encode()?))
    }
}
