//! Initial dataset loaded into the store before anything else runs.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::feedback::model::{FeedbackRecord, Field};

const BUILTIN_SEED: &str = include_str!("../../data/seed.json");

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to read seed file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse seed data: {source}")]
    ParseError {
        #[source]
        source: serde_json::Error,
    },

    #[error("Seed record {id}: {field} = {value} is outside {min}..={max}")]
    OutOfBounds {
        id: u64,
        field: Field,
        value: u8,
        min: u8,
        max: u8,
    },

    #[error("Seed record id {id} appears more than once")]
    DuplicateId { id: u64 },
}

/// The dataset bundled with the binary.
pub fn builtin() -> Result<Vec<FeedbackRecord>, SeedError> {
    parse(BUILTIN_SEED)
}

/// Load a seed file, or the bundled dataset when `path` is `None`.
pub fn load(path: Option<&Path>) -> Result<Vec<FeedbackRecord>, SeedError> {
    let Some(path) = path else {
        return builtin();
    };
    let content = fs::read_to_string(path).map_err(|e| SeedError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    let records = parse(&content)?;
    tracing::info!(path = %path.display(), count = records.len(), "Seed dataset loaded");
    Ok(records)
}

/// Parse a JSON array of records and check the store invariants hold.
pub fn parse(content: &str) -> Result<Vec<FeedbackRecord>, SeedError> {
    let records: Vec<FeedbackRecord> =
        serde_json::from_str(content).map_err(|e| SeedError::ParseError { source: e })?;

    let mut seen = HashSet::new();
    for record in &records {
        if !seen.insert(record.id) {
            return Err(SeedError::DuplicateId { id: record.id });
        }
        for field in Field::ALL {
            let value = record.rating(field);
            if !field.contains(i64::from(value)) {
                let (min, max) = field.bounds();
                return Err(SeedError::OutOfBounds {
                    id: record.id,
                    field,
                    value,
                    min,
                    max,
                });
            }
        }
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_seed_is_valid() {
        let records = builtin().unwrap();
        assert!(!records.is_empty());
    }

    #[test]
    fn rejects_out_of_bounds_ratings() {
        let content = r#"[{"Id":1,"satisfaction":6,"easeOfUse":3,"nps":5,
            "timestamp":"2024-01-01T00:00:00Z","sessionId":"a"}]"#;
        let err = parse(content).unwrap_err();
        assert!(matches!(
            err,
            SeedError::OutOfBounds {
                id: 1,
                field: Field::Satisfaction,
                value: 6,
                ..
            }
        ));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let content = r#"[
            {"Id":1,"satisfaction":3,"easeOfUse":3,"nps":5,"timestamp":"2024-01-01T00:00:00Z","sessionId":"a"},
            {"Id":1,"satisfaction":4,"easeOfUse":4,"nps":9,"timestamp":"2024-01-02T00:00:00Z","sessionId":"b"}
        ]"#;
        assert!(matches!(parse(content), Err(SeedError::DuplicateId { id: 1 })));
    }

    #[test]
    fn empty_array_is_allowed() {
        assert!(parse("[]").unwrap().is_empty());
    }
}
