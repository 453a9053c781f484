//! JSON file donation repository using `std::fs` + `serde_json`.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::{debug, instrument};
use vaquinha_core::{
    application::{
        ApplicationError,
        ports::{DonationRecord, DonationRepository},
    },
    error::{VaquinhaError, VaquinhaResult},
};

/// Stores donations as a pretty-printed JSON array in a single file.
///
/// A missing file reads as an empty campaign. Writes go to a sibling temp
/// file that is then renamed over the original.
#[derive(Debug)]
pub struct JsonFileDonationRepository {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process.
    write_lock: Mutex<()>,
}

impl JsonFileDonationRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> VaquinhaResult<Vec<DonationRecord>> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(map_io_error(&self.path, e, "read donations")),
        };

        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&raw).map_err(|e| {
            ApplicationError::CorruptData {
                reason: format!("{}: {}", self.path.display(), e),
            }
            .into()
        })
    }

    fn write_all(&self, records: &[DonationRecord]) -> VaquinhaResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| map_io_error(parent, e, "create directory"))?;
            }
        }

        let json = serde_json::to_string_pretty(records).map_err(|e| VaquinhaError::Internal {
            message: format!("Failed to serialise donations: {e}"),
        })?;

        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, json).map_err(|e| map_io_error(&tmp, e, "write file"))?;
        std::fs::rename(&tmp, &self.path).map_err(|e| map_io_error(&self.path, e, "replace file"))
    }
}

impl DonationRepository for JsonFileDonationRepository {
    #[instrument(skip_all, fields(id = %record.id, path = %self.path.display()))]
    fn save(&self, record: DonationRecord) -> VaquinhaResult<()> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| ApplicationError::RepositoryLockError)?;

        let mut records = self.read_all()?;
        records.push(record);
        self.write_all(&records)?;

        debug!(total = records.len(), "Donation written to file");
        Ok(())
    }

    fn list(&self) -> VaquinhaResult<Vec<DonationRecord>> {
        self.read_all()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> VaquinhaError {
    ApplicationError::RepositoryError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use tempfile::TempDir;
    use vaquinha_core::domain::Donation;

    fn record(name: &str) -> DonationRecord {
        DonationRecord::from_donation(&Donation::new(name, "x@example.com", dec!(12.34), false))
    }

    #[test]
    fn missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let repo = JsonFileDonationRepository::new(dir.path().join("donations.json"));
        assert!(repo.list().unwrap().is_empty());
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn save_round_trips_through_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/donations.json");
        let repo = JsonFileDonationRepository::new(&path);

        let first = record("Ana");
        repo.save(first.clone()).unwrap();
        repo.save(record("Bruno")).unwrap();

        let reopened = JsonFileDonationRepository::new(&path);
        let all = reopened.list().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0], first);
        assert_eq!(all[1].display_name, "Bruno");
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn corrupt_file_is_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("donations.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = JsonFileDonationRepository::new(&path).list().unwrap_err();
        assert!(matches!(
            err,
            VaquinhaError::Application(ApplicationError::CorruptData { .. })
        ));
    }
}
