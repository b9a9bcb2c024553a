use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::Utc;

pub mod message;
pub mod validate;

pub use message::{ContactMessage, NewContactMessage};
pub use validate::{validate, FieldError};

/// In-memory store of contact messages, retained for the process lifetime.
///
/// All access goes through one mutex; ids are assigned sequentially starting
/// at 1 and are never reused, even after a delete.
pub struct ContactStore {
    inner: Mutex<Inner>,
}

struct Inner {
    messages: Vec<ContactMessage>,
    next_id: i64,
}

impl ContactStore {
    pub fn new() -> Self {
        Self { inner: Mutex::new(Inner { messages: Vec::new(), next_id: 1 }) }
    }

    // A poisoned lock only means a panic mid-push; the Vec is still intact.
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Store an accepted candidate, assigning the next id and stamping
    /// `created_at` with the current UTC time. Returns the stored record.
    ///
    /// Callers are expected to [`validate`] first; the store does not.
    pub fn add(&self, candidate: NewContactMessage) -> ContactMessage {
        let mut inner = self.lock();
        let id = inner.next_id;
        inner.next_id += 1;

        let message = ContactMessage {
            id,
            name: candidate.name,
            email: candidate.email,
            subject: candidate.subject,
            message: candidate.message,
            created_at: Utc::now(),
        };
        inner.messages.push(message.clone());
        message
    }

    /// All stored messages in insertion order, as a snapshot independent of
    /// later mutation.
    pub fn all(&self) -> Vec<ContactMessage> {
        self.lock().messages.clone()
    }

    /// Look up a message by id.
    pub fn get(&self, id: i64) -> Option<ContactMessage> {
        self.lock().messages.iter().find(|m| m.id == id).cloned()
    }

    /// Remove a message by id. Returns whether anything was removed.
    pub fn delete(&self, id: i64) -> bool {
        let mut inner = self.lock();
        let before = inner.messages.len();
        inner.messages.retain(|m| m.id != id);
        inner.messages.len() != before
    }
}

impl Default for ContactStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    fn candidate(n: usize) -> NewContactMessage {
        NewContactMessage {
            name: format!("User {n}"),
            email: format!("user{n}@example.com"),
            subject: format!("Subject {n}"),
            message: format!("Message body number {n}"),
        }
    }

    #[test]
    fn add_assigns_sequential_ids_starting_at_one() {
        let store = ContactStore::new();
        assert_eq!(store.add(candidate(1)).id, 1);
        assert_eq!(store.add(candidate(2)).id, 2);
        assert_eq!(store.add(candidate(3)).id, 3);
    }

    #[test]
    fn add_stamps_created_at_with_insertion_time() {
        let store = ContactStore::new();
        let before = Utc::now();
        let stored = store.add(candidate(1));
        let after = Utc::now();

        assert!(stored.created_at >= before);
        assert!(stored.created_at <= after);
    }

    #[test]
    fn get_returns_the_stored_content() {
        let store = ContactStore::new();
        let stored = store.add(candidate(7));

        let found = store.get(stored.id).unwrap();
        assert_eq!(found.id, stored.id);
        assert_eq!(found.name, "User 7");
        assert_eq!(found.email, "user7@example.com");
        assert_eq!(found.subject, "Subject 7");
        assert_eq!(found.message, "Message body number 7");
        assert_eq!(found.created_at, stored.created_at);
    }

    #[test]
    fn get_reports_absence_for_unknown_ids() {
        let store = ContactStore::new();
        store.add(candidate(1));
        store.add(candidate(2));

        assert!(store.get(999).is_none());
        assert!(store.get(0).is_none());
        assert!(store.get(-1).is_none());
    }

    #[test]
    fn all_returns_messages_in_insertion_order() {
        let store = ContactStore::new();
        store.add(candidate(1));
        store.add(candidate(2));

        let all = store.all();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].name, "User 1");
        assert_eq!(all[1].name, "User 2");
    }

    #[test]
    fn all_is_a_snapshot() {
        let store = ContactStore::new();
        store.add(candidate(1));

        let snapshot = store.all();
        store.add(candidate(2));
        store.delete(1);

        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].name, "User 1");
    }

    #[test]
    fn delete_removes_once() {
        let store = ContactStore::new();
        let stored = store.add(candidate(1));

        assert!(store.delete(stored.id));
        assert!(store.all().is_empty());
        assert!(!store.delete(stored.id));
    }

    #[test]
    fn delete_of_unknown_id_reports_false() {
        let store = ContactStore::new();
        assert!(!store.delete(999));
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let store = ContactStore::new();
        store.add(candidate(1));
        let second = store.add(candidate(2));
        store.delete(second.id);

        assert_eq!(store.add(candidate(3)).id, 3);
    }

    #[test]
    fn concurrent_adds_assign_unique_ids() {
        let store = Arc::new(ContactStore::new());

        let handles: Vec<_> = (0..8)
            .map(|t| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    for i in 0..25 {
                        store.add(candidate(t * 25 + i));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let mut ids: Vec<i64> = store.all().iter().map(|m| m.id).collect();
        ids.sort_unstable();
        assert_eq!(ids, (1..=200).collect::<Vec<i64>>());
    }
}
