use async_trait::async_trait;
use thiserror::Error;

/// Borrowed predicate evaluated against each stored record.
pub type RecordPredicate<'a, T> = &'a (dyn Fn(&T) -> bool + Send + Sync);

/// In-place mutation applied under the collection's write lock.
pub type Mutation<'a, T> = Box<dyn FnOnce(&mut T) + Send + 'a>;

#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Duplicate record: {0}")]
    Conflict(String),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// A storable record with a stable string id, unique within its collection.
pub trait Record: Clone + Send + Sync + 'static {
    fn id(&self) -> &str;
}

/// Collection access used by handlers. Implementations decide where records live;
/// callers only rely on insertion order being preserved by `all` and `filter`.
#[async_trait]
pub trait Repository<T: Record>: Send + Sync {
    async fn all(&self) -> Result<Vec<T>, RepositoryError>;

    async fn find(&self, id: &str) -> Result<Option<T>, RepositoryError>;

    async fn find_by(&self, predicate: RecordPredicate<'_, T>) -> Result<Option<T>, RepositoryError>;

    async fn filter(&self, predicate: RecordPredicate<'_, T>) -> Result<Vec<T>, RepositoryError>;

    /// Append a record. Fails with `Conflict` if the id is taken.
    async fn insert(&self, record: T) -> Result<T, RepositoryError>;

    /// Append a record unless any existing record satisfies `duplicate`.
    /// The check and the append happen under one write.
    async fn insert_unique(&self, record: T, duplicate: RecordPredicate<'_, T>) -> Result<T, RepositoryError>;

    /// Apply `mutation` to the record with `id` and return the updated copy.
    async fn update(&self, id: &str, mutation: Mutation<'_, T>) -> Result<T, RepositoryError>;

    async fn count(&self) -> Result<usize, RepositoryError>;

    async fn find_404(&self, id: &str) -> Result<T, RepositoryError> {
        self.find(id)
            .await?
            .ok_or_else(|| RepositoryError::NotFound(id.to_string()))
    }
}
