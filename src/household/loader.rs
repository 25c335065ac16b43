//! Versioned JSON snapshot import/export for [`HouseholdConfig`]
//!
//! The engine never inspects the serialized form; it only accepts a decoded
//! snapshot after the version check passes.

use super::HouseholdConfig;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use thiserror::Error;

/// Current snapshot document version
pub const SNAPSHOT_VERSION: u32 = 1;

/// Errors surfaced by snapshot load/save
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed snapshot document: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("unsupported snapshot version {found} (expected {SNAPSHOT_VERSION})")]
    UnsupportedVersion { found: u32 },
}

/// On-disk document: version field alongside the flattened config
#[derive(Serialize, Deserialize)]
struct SnapshotDocument {
    version: u32,

    #[serde(flatten)]
    household: HouseholdConfig,
}

/// Load a household snapshot from a JSON file
pub fn load_snapshot<P: AsRef<Path>>(path: P) -> Result<HouseholdConfig, SnapshotError> {
    let file = File::open(path)?;
    load_snapshot_from_reader(BufReader::new(file))
}

/// Load a household snapshot from any reader
pub fn load_snapshot_from_reader<R: Read>(reader: R) -> Result<HouseholdConfig, SnapshotError> {
    let doc: SnapshotDocument = serde_json::from_reader(reader)?;
    if doc.version != SNAPSHOT_VERSION {
        return Err(SnapshotError::UnsupportedVersion { found: doc.version });
    }
    log::debug!("loaded household snapshot (version {})", doc.version);
    Ok(doc.household)
}

/// Write a household snapshot to a JSON file
pub fn save_snapshot<P: AsRef<Path>>(
    path: P,
    household: &HouseholdConfig,
) -> Result<(), SnapshotError> {
    let file = File::create(path)?;
    save_snapshot_to_writer(BufWriter::new(file), household)
}

/// Write a household snapshot to any writer
pub fn save_snapshot_to_writer<W: Write>(
    writer: W,
    household: &HouseholdConfig,
) -> Result<(), SnapshotError> {
    let doc = SnapshotDocument {
        version: SNAPSHOT_VERSION,
        household: household.clone(),
    };
    serde_json::to_writer_pretty(writer, &doc)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_round_trip() {
        let original = HouseholdConfig::example();

        let mut buf = Vec::new();
        save_snapshot_to_writer(&mut buf, &original).expect("save failed");
        let restored = load_snapshot_from_reader(buf.as_slice()).expect("load failed");

        assert_eq!(restored.loan.total, original.loan.total);
        assert_eq!(restored.loan.rates, original.loan.rates);
        assert_eq!(restored.main.monthly_salary, original.main.monthly_salary);
        assert_eq!(restored.children.len(), original.children.len());
        assert_eq!(
            restored.assets.investments.len(),
            original.assets.investments.len()
        );
    }

    #[test]
    fn test_unsupported_version_rejected() {
        let mut buf = Vec::new();
        save_snapshot_to_writer(&mut buf, &HouseholdConfig::example()).expect("save failed");

        let mut doc: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        doc["version"] = serde_json::json!(99);
        let tampered = serde_json::to_vec(&doc).unwrap();

        match load_snapshot_from_reader(tampered.as_slice()) {
            Err(SnapshotError::UnsupportedVersion { found: 99 }) => {}
            other => panic!("expected version error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_malformed_document_rejected() {
        let result = load_snapshot_from_reader(b"{ not json".as_slice());
        assert!(matches!(result, Err(SnapshotError::Malformed(_))));
    }
}
