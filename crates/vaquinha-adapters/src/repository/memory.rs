//! In-memory donation repository.

use std::sync::{Arc, RwLock};

use tracing::debug;
use vaquinha_core::{
    application::{
        ApplicationError,
        ports::{DonationRecord, DonationRepository},
    },
    error::VaquinhaResult,
};

/// Thread-safe in-memory donation store.
///
/// Clones share the same underlying storage.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDonationRepository {
    inner: Arc<RwLock<Vec<DonationRecord>>>,
}

impl InMemoryDonationRepository {
    /// Create a new empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-loaded with `records`.
    pub fn with_records(records: impl IntoIterator<Item = DonationRecord>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(records.into_iter().collect())),
        }
    }

    /// Remove every stored donation.
    pub fn clear(&self) -> VaquinhaResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::RepositoryLockError)?;
        inner.clear();
        Ok(())
    }
}

impl DonationRepository for InMemoryDonationRepository {
    fn save(&self, record: DonationRecord) -> VaquinhaResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::RepositoryLockError)?;

        debug!(id = %record.id, "Storing donation in memory");
        inner.push(record);
        Ok(())
    }

    fn list(&self) -> VaquinhaResult<Vec<DonationRecord>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::RepositoryLockError)?;

        Ok(inner.clone())
    }

    fn count(&self) -> VaquinhaResult<usize> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::RepositoryLockError)?;

        Ok(inner.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use vaquinha_core::domain::Donation;

    fn record(amount: rust_decimal::Decimal) -> DonationRecord {
        DonationRecord::from_donation(&Donation::new("Ana", "ana@example.com", amount, false))
    }

    #[test]
    fn save_then_list_preserves_order() {
        let repo = InMemoryDonationRepository::new();
        repo.save(record(dec!(10))).unwrap();
        repo.save(record(dec!(20))).unwrap();

        let all = repo.list().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].amount, dec!(10));
        assert_eq!(all[1].amount, dec!(20));
        assert_eq!(repo.count().unwrap(), 2);
    }

    #[test]
    fn clones_share_storage() {
        let repo = InMemoryDonationRepository::new();
        let handle = repo.clone();
        handle.save(record(dec!(5))).unwrap();
        assert_eq!(repo.count().unwrap(), 1);

        repo.clear().unwrap();
        assert_eq!(handle.count().unwrap(), 0);
    }

    #[test]
    fn preloaded_records_are_listed() {
        let repo = InMemoryDonationRepository::with_records([record(dec!(7))]);
        assert_eq!(repo.list().unwrap()[0].amount, dec!(7));
    }
}
