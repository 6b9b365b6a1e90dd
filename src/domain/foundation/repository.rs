//! Base repository trait for persistence operations.
//!
//! This module provides the generic `Repository<T, ID>` trait that defines
//! the standard CRUD interface for all aggregate repositories. Aggregate
//! specific ports extend it with their own finders:
//!
//! ```ignore
//! #[async_trait]
//! pub trait EventRepository: Repository<Event, EventId> {
//!     async fn find_by_puppy_id(&self, puppy_id: &PuppyId) -> Result<Vec<Event>, DomainError>;
//! }
//! ```

use async_trait::async_trait;

use super::DomainError;

/// Base trait for aggregate repositories.
///
/// # Type Parameters
///
/// - `T`: The aggregate root type being persisted
/// - `ID`: The identifier type for the aggregate (e.g., `PuppyId`, `EventId`)
///
/// # Error Handling
///
/// All methods return `Result<_, DomainError>`. Implementations convert
/// adapter-specific errors (e.g., database errors) into `INTERNAL_ERROR`.
///
/// # Concurrency
///
/// No compare-and-swap is implied: two writers updating the same aggregate
/// race and the last `update` wins.
#[async_trait]
pub trait Repository<T, ID>: Send + Sync
where
    T: Send + Sync,
    ID: Send + Sync,
{
    /// Finds an aggregate by its unique identifier.
    ///
    /// Returns `Ok(None)` if the aggregate doesn't exist.
    /// Returns `Err` only for infrastructure failures.
    async fn find_by_id(&self, id: &ID) -> Result<Option<T>, DomainError>;

    /// Persists a new aggregate and returns the stored copy.
    ///
    /// # Errors
    ///
    /// - `CONFLICT` if the aggregate already exists (duplicate ID)
    /// - `INTERNAL_ERROR` on infrastructure failure
    async fn save(&self, entity: &T) -> Result<T, DomainError>;

    /// Replaces an existing aggregate and returns the stored copy.
    ///
    /// # Errors
    ///
    /// - `NOT_FOUND` if the aggregate doesn't exist
    /// - `INTERNAL_ERROR` on infrastructure failure
    async fn update(&self, entity: &T) -> Result<T, DomainError>;

    /// Deletes an aggregate by its identifier.
    ///
    /// # Errors
    ///
    /// - `NOT_FOUND` if the aggregate doesn't exist
    /// - `INTERNAL_ERROR` on infrastructure failure
    async fn delete(&self, id: &ID) -> Result<(), DomainError>;

    /// Checks if an aggregate with the given ID exists.
    ///
    /// Default implementation uses `find_by_id`.
    async fn exists(&self, id: &ID) -> Result<bool, DomainError> {
        Ok(self.find_by_id(id).await?.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct TestEntity {
        id: u32,
        name: String,
    }

    struct InMemoryTestRepo {
        data: Mutex<HashMap<u32, TestEntity>>,
    }

    impl InMemoryTestRepo {
        fn new() -> Self {
            Self {
                data: Mutex::new(HashMap::new()),
            }
        }
    }

    #[async_trait]
    impl Repository<TestEntity, u32> for InMemoryTestRepo {
        async fn find_by_id(&self, id: &u32) -> Result<Option<TestEntity>, DomainError> {
            Ok(self.data.lock().unwrap().get(id).cloned())
        }

        async fn save(&self, entity: &TestEntity) -> Result<TestEntity, DomainError> {
            self.data.lock().unwrap().insert(entity.id, entity.clone());
            Ok(entity.clone())
        }

        async fn update(&self, entity: &TestEntity) -> Result<TestEntity, DomainError> {
            self.save(entity).await
        }

        async fn delete(&self, id: &u32) -> Result<(), DomainError> {
            self.data
                .lock()
                .unwrap()
                .remove(id)
                .map(|_| ())
                .ok_or_else(|| DomainError::not_found("TestEntity", id))
        }
    }

    #[tokio::test]
    async fn exists_default_uses_find_by_id() {
        let repo = InMemoryTestRepo::new();
        repo.save(&TestEntity {
            id: 1,
            name: "Biscuit".to_string(),
        })
        .await
        .unwrap();

        assert!(repo.exists(&1).await.unwrap());
        assert!(!repo.exists(&2).await.unwrap());
    }

    #[tokio::test]
    async fn delete_of_missing_entity_is_not_found() {
        let repo = InMemoryTestRepo::new();
        let err = repo.delete(&9).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn Repository<TestEntity, u32>) {}
    }
}
