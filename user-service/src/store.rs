// User Store
// Ordered record storage injected into the service layer

use crate::models::User;

/// Trait for user record storage.
///
/// Records keep insertion order. Ids are not checked for uniqueness; every
/// id-based operation acts on the first matching record.
pub trait UserStore: Send {
    /// All records in insertion order
    fn all(&self) -> Vec<User>;

    /// First record with the given id
    fn find(&self, id: u64) -> Option<User>;

    /// Append a record at the end
    fn append(&mut self, user: User);

    /// Overwrite name and email of the first match in place.
    /// Returns `false` when no record has the id.
    fn replace(&mut self, id: u64, name: String, email: String) -> bool;

    /// Remove and return the first match
    fn remove(&mut self, id: u64) -> Option<User>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Vec-backed store living for the lifetime of its owner
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserStore {
    users: Vec<User>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `users`, in the given order
    pub fn from_users(users: Vec<User>) -> Self {
        Self { users }
    }

    fn position(&self, id: u64) -> Option<usize> {
        self.users.iter().position(|u| u.id == id)
    }
}

impl UserStore for InMemoryUserStore {
    fn all(&self) -> Vec<User> {
        self.users.clone()
    }

    fn find(&self, id: u64) -> Option<User> {
        self.users.iter().find(|u| u.id == id).cloned()
    }

    fn append(&mut self, user: User) {
        self.users.push(user);
    }

    fn replace(&mut self, id: u64, name: String, email: String) -> bool {
        match self.users.iter_mut().find(|u| u.id == id) {
            Some(existing) => {
                existing.name = name;
                existing.email = email;
                true
            }
            None => false,
        }
    }

    fn remove(&mut self, id: u64) -> Option<User> {
        self.position(id).map(|index| self.users.remove(index))
    }

    fn len(&self) -> usize {
        self.users.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_store() -> InMemoryUserStore {
        InMemoryUserStore::from_users(vec![
            User::new(1, "John Doe", "john@example.com"),
            User::new(2, "Jane Doe", "jane@example.com"),
        ])
    }

    #[test]
    fn test_all_keeps_insertion_order() {
        let mut store = sample_store();
        store.append(User::new(0, "Zed", "zed@example.com"));

        let names: Vec<_> = store.all().into_iter().map(|u| u.name).collect();
        assert_eq!(names, vec!["John Doe", "Jane Doe", "Zed"]);
    }

    #[test]
    fn test_find_missing() {
        assert!(sample_store().find(3).is_none());
        assert!(InMemoryUserStore::new().find(1).is_none());
    }

    #[test]
    fn test_replace_keeps_id_and_position() {
        let mut store = sample_store();
        assert!(store.replace(1, "John Smith".into(), "johnsmith@example.com".into()));

        let first = &store.all()[0];
        assert_eq!(first.id, 1);
        assert_eq!(first.name, "John Smith");
        assert_eq!(first.email, "johnsmith@example.com");
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_replace_missing_is_noop() {
        let mut store = sample_store();
        assert!(!store.replace(9, "Nobody".into(), String::new()));
        assert_eq!(store.all(), sample_store().all());
    }

    #[test]
    fn test_duplicate_ids_resolve_to_first() {
        let mut store = InMemoryUserStore::from_users(vec![
            User::new(5, "First", ""),
            User::new(5, "Second", ""),
        ]);

        assert_eq!(store.find(5).unwrap().name, "First");
        assert_eq!(store.remove(5).unwrap().name, "First");
        assert_eq!(store.find(5).unwrap().name, "Second");
    }

    #[test]
    fn test_remove_decrements_len() {
        let mut store = sample_store();
        let removed = store.remove(2).unwrap();
        assert_eq!(removed.name, "Jane Doe");
        assert_eq!(store.len(), 1);
        assert!(store.remove(2).is_none());
        assert_eq!(store.len(), 1);
    }
}
