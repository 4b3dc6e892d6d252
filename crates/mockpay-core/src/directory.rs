//! # User Directory
//!
//! In-memory directory of user names. Lookups ignore case, listings keep
//! insertion order, and creation always succeeds, duplicates included.

use std::sync::{Arc, PoisonError, RwLock};

/// Names present in every freshly seeded directory
pub const SEED_USERS: [&str; 2] = ["Alice", "Bob"];

/// Shared, thread-safe directory of user names.
///
/// Cheap to clone; all clones share the same backing list.
#[derive(Clone)]
pub struct UserDirectory {
    users: Arc<RwLock<Vec<String>>>,
}

impl UserDirectory {
    /// Create a directory seeded with [`SEED_USERS`]
    pub fn new() -> Self {
        Self::with_names(SEED_USERS)
    }

    /// Create a directory holding no names
    pub fn empty() -> Self {
        Self::with_names(std::iter::empty::<String>())
    }

    /// Create a directory holding the given names, in order
    pub fn with_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            users: Arc::new(RwLock::new(names.into_iter().map(Into::into).collect())),
        }
    }

    /// All names in insertion order
    pub fn list(&self) -> Vec<String> {
        self.users
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Find a name, ignoring case. Returns the stored spelling.
    pub fn find(&self, name: &str) -> Option<String> {
        let wanted = name.to_lowercase();
        self.users
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|stored| stored.to_lowercase() == wanted)
            .cloned()
    }

    /// Append a name and report the outcome.
    ///
    /// Every call appends, so repeated names produce repeated entries.
    pub fn create(&self, name: &str) -> String {
        self.users
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(name.to_owned());
        format!("User {name} created")
    }

    /// Number of stored names
    pub fn len(&self) -> usize {
        self.users
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Check if the directory holds no names
    pub fn is_empty(&self) -> bool {
        self.users
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }
}

impl Default for UserDirectory {
    fn default() -> Self {
        Self::new()
    }
}
