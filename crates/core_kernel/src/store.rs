//! Generic identity-keyed entity store
//!
//! One `EntityStore` instance exists per entity kind; every entity is owned
//! exclusively by its store once added. The store performs no validation and
//! no cascade deletes - foreign references between kinds are plain ids.
//!
//! # Concurrency
//!
//! The store is not synchronized. The system assumes a single writer; wrap
//! the store in a mutex if that ever changes.

use std::collections::HashMap;
use std::hash::Hash;

/// Capability for entities that carry a unique identifier
///
/// Every stored kind implements this explicitly, which lets the store extract
/// keys uniformly without any per-kind special casing.
pub trait Identified {
    type Id: Eq + Hash + Clone;

    fn id(&self) -> &Self::Id;
}

/// In-memory, identity-keyed collection of entities of one kind
#[derive(Debug, Clone)]
pub struct EntityStore<T: Identified> {
    entities: HashMap<T::Id, T>,
}

impl<T: Identified + Clone> EntityStore<T> {
    /// Creates an empty store
    pub fn new() -> Self {
        Self {
            entities: HashMap::new(),
        }
    }

    /// Inserts the entity, overwriting any existing entity with the same id
    ///
    /// Last write wins; duplicate ids are not an error.
    pub fn add(&mut self, entity: T) {
        self.entities.insert(entity.id().clone(), entity);
    }

    /// Returns the stored entity for `id`, if any
    pub fn get_by_id(&self, id: &T::Id) -> Option<&T> {
        self.entities.get(id)
    }

    /// Returns a snapshot of all stored entities
    ///
    /// The returned vector is an independent copy in unspecified order;
    /// mutating it does not affect the store.
    pub fn get_all(&self) -> Vec<T> {
        self.entities.values().cloned().collect()
    }

    /// Replaces the stored entity with the same id
    ///
    /// If no entity with that id exists this is a silent no-op, not an
    /// error. Callers must not rely on an error to detect stale updates.
    pub fn update(&mut self, entity: T) {
        let id = entity.id().clone();
        if self.entities.contains_key(&id) {
            self.entities.insert(id, entity);
        }
    }

    /// Removes the entity with `id`; absent ids are a no-op
    pub fn delete(&mut self, id: &T::Id) {
        self.entities.remove(id);
    }

    /// Returns true if an entity with `id` is stored
    pub fn exists(&self, id: &T::Id) -> bool {
        self.entities.contains_key(id)
    }

    /// Number of stored entities
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Returns true if the store holds no entities
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl<T: Identified + Clone> Default for EntityStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Widget {
        id: String,
        label: String,
    }

    impl Widget {
        fn new(id: &str, label: &str) -> Self {
            Self {
                id: id.to_string(),
                label: label.to_string(),
            }
        }
    }

    impl Identified for Widget {
        type Id = String;

        fn id(&self) -> &String {
            &self.id
        }
    }

    #[test]
    fn test_add_then_get_by_id() {
        let mut store = EntityStore::new();
        let widget = Widget::new("W1", "first");
        store.add(widget.clone());

        assert_eq!(store.get_by_id(&"W1".to_string()), Some(&widget));
        assert_eq!(store.len(), 1);
        assert!(store.exists(&"W1".to_string()));
    }

    #[test]
    fn test_add_overwrites_existing_id() {
        let mut store = EntityStore::new();
        store.add(Widget::new("W1", "first"));
        store.add(Widget::new("W1", "second"));

        assert_eq!(store.len(), 1);
        assert_eq!(store.get_by_id(&"W1".to_string()).unwrap().label, "second");
    }

    #[test]
    fn test_get_by_id_absent_returns_none() {
        let store: EntityStore<Widget> = EntityStore::new();
        assert_eq!(store.get_by_id(&"missing".to_string()), None);
    }

    #[test]
    fn test_update_replaces_only_existing() {
        let mut store = EntityStore::new();
        store.add(Widget::new("W1", "first"));

        store.update(Widget::new("W1", "renamed"));
        assert_eq!(store.get_by_id(&"W1".to_string()).unwrap().label, "renamed");

        // Stale update: absent id leaves the store unchanged
        store.update(Widget::new("W2", "ghost"));
        assert_eq!(store.len(), 1);
        assert!(!store.exists(&"W2".to_string()));
    }

    #[test]
    fn test_delete_absent_is_noop() {
        let mut store = EntityStore::new();
        store.add(Widget::new("W1", "first"));

        store.delete(&"missing".to_string());
        assert_eq!(store.len(), 1);

        store.delete(&"W1".to_string());
        assert!(store.is_empty());
    }

    #[test]
    fn test_get_all_is_a_snapshot() {
        let mut store = EntityStore::new();
        store.add(Widget::new("W1", "first"));
        store.add(Widget::new("W2", "second"));

        let mut snapshot = store.get_all();
        snapshot.clear();

        assert_eq!(store.len(), 2);
    }
}
