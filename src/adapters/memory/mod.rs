//! In-memory repository adapters.
//!
//! Keyed maps behind `tokio::sync::RwLock`. Used by tests and by the
//! `memory` storage backend. Nothing is persisted across restarts.

/// Implements `Repository<$entity, $id>` over a `MemoryStore` field named
/// `store`, plus the `new`/`Default`/`len`/`clear` helpers.
macro_rules! memory_repository {
    ($name:ident, $entity:ty, $id:ty, $resource:literal) => {
        #[derive(Debug, Clone)]
        pub struct $name {
            store: $crate::adapters::memory::MemoryStore<$id, $entity>,
        }

        impl $name {
            pub fn new() -> Self {
                Self {
                    store: $crate::adapters::memory::MemoryStore::new($resource),
                }
            }

            /// Number of stored records.
            pub async fn len(&self) -> usize {
                self.store.len().await
            }

            pub async fn is_empty(&self) -> bool {
                self.store.is_empty().await
            }

            /// Drop every record (useful for tests).
            pub async fn clear(&self) {
                self.store.clear().await
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        #[async_trait::async_trait]
        impl $crate::domain::foundation::Repository<$entity, $id> for $name {
            async fn find_by_id(
                &self,
                id: &$id,
            ) -> Result<Option<$entity>, $crate::domain::foundation::DomainError> {
                Ok(self.store.get(id).await)
            }

            async fn save(
                &self,
                entity: &$entity,
            ) -> Result<$entity, $crate::domain::foundation::DomainError> {
                self.store.insert(entity.id().clone(), entity.clone()).await
            }

            async fn update(
                &self,
                entity: &$entity,
            ) -> Result<$entity, $crate::domain::foundation::DomainError> {
                self.store.replace(entity.id(), entity.clone()).await
            }

            async fn delete(&self, id: &$id) -> Result<(), $crate::domain::foundation::DomainError> {
                self.store.remove(id).await
            }

            async fn exists(&self, id: &$id) -> Result<bool, $crate::domain::foundation::DomainError> {
                Ok(self.store.contains(id).await)
            }
        }
    };
}

mod analytics_event_repository;
mod event_repository;
mod puppy_repository;
mod recommendation_repository;
mod store;
mod training_session_repository;
mod user_repository;

pub use analytics_event_repository::InMemoryAnalyticsEventRepository;
pub use event_repository::InMemoryEventRepository;
pub use puppy_repository::InMemoryPuppyRepository;
pub use recommendation_repository::InMemoryRecommendationRepository;
pub use store::MemoryStore;
pub use training_session_repository::InMemoryTrainingSessionRepository;
pub use user_repository::InMemoryUserRepository;
