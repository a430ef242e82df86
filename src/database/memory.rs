use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;

use super::repository::{Mutation, Record, RecordPredicate, Repository, RepositoryError};

/// Process-lifetime collection held in insertion order.
///
/// The lock is `parking_lot` and never held across an `.await`, so every
/// operation completes synchronously: one writer or many readers per collection.
#[derive(Debug)]
pub struct MemoryRepository<T> {
    records: Arc<RwLock<Vec<T>>>,
}

impl<T> Clone for MemoryRepository<T> {
    fn clone(&self) -> Self {
        Self {
            records: Arc::clone(&self.records),
        }
    }
}

impl<T: Record> MemoryRepository<T> {
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    pub fn with_records(records: Vec<T>) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
        }
    }
}

impl<T: Record> Default for MemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Record> Repository<T> for MemoryRepository<T> {
    async fn all(&self) -> Result<Vec<T>, RepositoryError> {
        Ok(self.records.read().clone())
    }

    async fn find(&self, id: &str) -> Result<Option<T>, RepositoryError> {
        Ok(self.records.read().iter().find(|r| r.id() == id).cloned())
    }

    async fn find_by(&self, predicate: RecordPredicate<'_, T>) -> Result<Option<T>, RepositoryError> {
        Ok(self.records.read().iter().find(|r| predicate(r)).cloned())
    }

    async fn filter(&self, predicate: RecordPredicate<'_, T>) -> Result<Vec<T>, RepositoryError> {
        Ok(self.records.read().iter().filter(|r| predicate(r)).cloned().collect())
    }

    async fn insert(&self, record: T) -> Result<T, RepositoryError> {
        self.insert_unique(record, &|_: &T| false).await
    }

    async fn insert_unique(&self, record: T, duplicate: RecordPredicate<'_, T>) -> Result<T, RepositoryError> {
        let mut guard = self.records.write();
        if guard.iter().any(|r| r.id() == record.id() || duplicate(r)) {
            return Err(RepositoryError::Conflict(record.id().to_string()));
        }
        guard.push(record.clone());
        Ok(record)
    }

    async fn update(&self, id: &str, mutation: Mutation<'_, T>) -> Result<T, RepositoryError> {
        let mut guard = self.records.write();
        let entry = guard
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| RepositoryError::NotFound(id.to_string()))?;
        mutation(entry);
        Ok(entry.clone())
    }

    async fn count(&self) -> Result<usize, RepositoryError> {
        Ok(self.records.read().len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: String,
        label: String,
    }

    impl Record for Item {
        fn id(&self) -> &str {
            &self.id
        }
    }

    fn item(id: &str, label: &str) -> Item {
        Item { id: id.to_string(), label: label.to_string() }
    }

    #[tokio::test]
    async fn preserves_insertion_order() {
        let repo = MemoryRepository::new();
        repo.insert(item("b", "second")).await.unwrap();
        repo.insert(item("a", "first")).await.unwrap();

        let ids: Vec<String> = repo.all().await.unwrap().into_iter().map(|i| i.id).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[tokio::test]
    async fn insert_rejects_duplicate_id() {
        let repo = MemoryRepository::with_records(vec![item("a", "x")]);
        let err = repo.insert(item("a", "y")).await.unwrap_err();
        assert!(matches!(err, RepositoryError::Conflict(_)));
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn insert_unique_checks_predicate() {
        let repo = MemoryRepository::with_records(vec![item("a", "taken")]);
        let err = repo
            .insert_unique(item("b", "taken"), &|r: &Item| r.label == "taken")
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::Conflict(_)));

        repo.insert_unique(item("c", "free"), &|r: &Item| r.label == "free")
            .await
            .unwrap();
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn update_mutates_in_place() {
        let repo = MemoryRepository::with_records(vec![item("a", "old")]);
        let updated = repo
            .update("a", Box::new(|r: &mut Item| r.label = "new".to_string()))
            .await
            .unwrap();
        assert_eq!(updated.label, "new");
        assert_eq!(repo.find("a").await.unwrap().unwrap().label, "new");
    }

    #[tokio::test]
    async fn update_and_find_404_report_missing_records() {
        let repo: MemoryRepository<Item> = MemoryRepository::new();
        assert!(matches!(
            repo.update("zz", Box::new(|_: &mut Item| {})).await,
            Err(RepositoryError::NotFound(_))
        ));
        assert!(matches!(repo.find_404("zz").await, Err(RepositoryError::NotFound(_))));
    }
}
