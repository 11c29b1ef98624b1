use crate::domain::User;

/// Ordered, append-only collection of users.
///
/// No deduplication and no indexing: duplicate ids or emails are stored as
/// separate entries.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: Vec<User>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of all users in insertion order.
    pub fn get_all(&self) -> Vec<User> {
        self.users.clone()
    }

    pub fn add(&mut self, user: User) {
        self.users.push(user);
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }
}
