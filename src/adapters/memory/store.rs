//! Keyed map shared by the in-memory repositories.

use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::DomainError;

#[derive(Debug)]
struct Entries<ID, T> {
    next_seq: u64,
    rows: HashMap<ID, (u64, T)>,
}

/// Map from id to entity that remembers insertion order.
///
/// Updates keep the original insertion slot, so listings stay stable when an
/// entity is edited.
#[derive(Debug)]
pub struct MemoryStore<ID, T> {
    resource: &'static str,
    entries: Arc<RwLock<Entries<ID, T>>>,
}

impl<ID, T> Clone for MemoryStore<ID, T> {
    fn clone(&self) -> Self {
        Self {
            resource: self.resource,
            entries: Arc::clone(&self.entries),
        }
    }
}

impl<ID, T> MemoryStore<ID, T>
where
    ID: Eq + Hash + Clone + Display,
    T: Clone,
{
    pub fn new(resource: &'static str) -> Self {
        Self {
            resource,
            entries: Arc::new(RwLock::new(Entries {
                next_seq: 0,
                rows: HashMap::new(),
            })),
        }
    }

    pub async fn get(&self, id: &ID) -> Option<T> {
        let entries = self.entries.read().await;
        entries.rows.get(id).map(|(_, entity)| entity.clone())
    }

    pub async fn contains(&self, id: &ID) -> bool {
        self.entries.read().await.rows.contains_key(id)
    }

    /// Adds a new entity; `CONFLICT` if the id is taken.
    pub async fn insert(&self, id: ID, entity: T) -> Result<T, DomainError> {
        let mut entries = self.entries.write().await;
        if entries.rows.contains_key(&id) {
            return Err(
                DomainError::conflict(format!("{} with id {} already exists", self.resource, id))
                    .with_detail("resource", self.resource)
                    .with_detail("id", id.to_string()),
            );
        }
        let seq = entries.next_seq;
        entries.next_seq += 1;
        tracing::debug!(resource = self.resource, id = %id, "Inserted into memory store");
        entries.rows.insert(id, (seq, entity.clone()));
        Ok(entity)
    }

    /// Replaces an existing entity; `NOT_FOUND` if the id is unknown.
    pub async fn replace(&self, id: &ID, entity: T) -> Result<T, DomainError> {
        let mut entries = self.entries.write().await;
        match entries.rows.get_mut(id) {
            Some((_, slot)) => {
                *slot = entity.clone();
                Ok(entity)
            }
            None => Err(DomainError::not_found(self.resource, id)),
        }
    }

    /// Removes an entity; `NOT_FOUND` if the id is unknown.
    pub async fn remove(&self, id: &ID) -> Result<(), DomainError> {
        let mut entries = self.entries.write().await;
        entries
            .rows
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| DomainError::not_found(self.resource, id))
    }

    /// Entities matching `predicate`, in insertion order.
    pub async fn filter<F>(&self, predicate: F) -> Vec<T>
    where
        F: Fn(&T) -> bool,
    {
        let entries = self.entries.read().await;
        let mut matched: Vec<&(u64, T)> = entries
            .rows
            .values()
            .filter(|(_, entity)| predicate(entity))
            .collect();
        matched.sort_by_key(|(seq, _)| *seq);
        matched.into_iter().map(|(_, entity)| entity.clone()).collect()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.rows.is_empty()
    }

    pub async fn clear(&self) {
        let mut entries = self.entries.write().await;
        entries.rows.clear();
        entries.next_seq = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;

    fn store() -> MemoryStore<String, &'static str> {
        MemoryStore::new("Thing")
    }

    #[tokio::test]
    async fn insert_then_get() {
        let store = store();
        store.insert("a".to_string(), "alpha").await.unwrap();

        assert_eq!(store.get(&"a".to_string()).await, Some("alpha"));
        assert!(store.contains(&"a".to_string()).await);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn insert_duplicate_is_conflict() {
        let store = store();
        store.insert("a".to_string(), "alpha").await.unwrap();

        let err = store.insert("a".to_string(), "again").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::Conflict);
        assert_eq!(err.message, "Thing with id a already exists");
        assert_eq!(store.get(&"a".to_string()).await, Some("alpha"));
    }

    #[tokio::test]
    async fn replace_missing_is_not_found() {
        let err = store().replace(&"x".to_string(), "x").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Thing with id x not found");
    }

    #[tokio::test]
    async fn remove_missing_is_not_found() {
        let err = store().remove(&"x".to_string()).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn filter_keeps_insertion_order_across_replace() {
        let store = store();
        for (id, value) in [("c", "one"), ("a", "two"), ("b", "three")] {
            store.insert(id.to_string(), value).await.unwrap();
        }
        store.replace(&"c".to_string(), "one-edited").await.unwrap();

        assert_eq!(store.filter(|_| true).await, vec!["one-edited", "two", "three"]);
    }

    #[tokio::test]
    async fn clones_share_state() {
        let store = store();
        let other = store.clone();
        store.insert("a".to_string(), "alpha").await.unwrap();

        assert_eq!(other.len().await, 1);
        other.clear().await;
        assert_eq!(store.len().await, 0);
    }
}
