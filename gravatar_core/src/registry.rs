use std::collections::HashMap;

use crate::{network::NetworkId, user::User};

pub trait UserRegistry {
    fn user(&self, network: NetworkId, nick: &str) -> Option<&User>;
    fn user_mut(&mut self, network: NetworkId, nick: &str) -> Option<&mut User>;
}

#[derive(Debug, Default)]
pub struct MemoryRegistry {
    // nick keys are folded to lowercase, lookups are case-insensitive
    users: HashMap<(NetworkId, String), User>,
}

impl MemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, network: NetworkId, user: User) {
        let key = (network, user.nick().to_lowercase());
        if let Some(old) = self.users.insert(key, user) {
            log::warn!("replaced user {} on network {network}", old.nick());
        }
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl UserRegistry for MemoryRegistry {
    fn user(&self, network: NetworkId, nick: &str) -> Option<&User> {
        self.users.get(&(network, nick.to_lowercase()))
    }

    fn user_mut(&mut self, network: NetworkId, nick: &str) -> Option<&mut User> {
        self.users.get_mut(&(network, nick.to_lowercase()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookups_ignore_nick_case() {
        let mut registry = MemoryRegistry::new();
        registry.insert(NetworkId(1), User::new("Alice"));

        assert!(registry.user(NetworkId(1), "alice").is_some());
        assert!(registry.user(NetworkId(1), "ALICE").is_some());
        assert!(registry.user(NetworkId(2), "alice").is_none());

        // the canonical spelling is preserved
        let user = registry.user(NetworkId(1), "alice").unwrap();
        assert_eq!(user.nick(), "Alice");
    }

    #[test]
    fn insert_replaces_same_nick() {
        let mut registry = MemoryRegistry::new();
        registry.insert(NetworkId(1), User::new("bob"));
        registry.insert(NetworkId(1), User::with_account("bob", "bob42"));

        assert_eq!(registry.len(), 1);
        let user = registry.user(NetworkId(1), "bob").unwrap();
        assert_eq!(user.account(), Some("bob42"));
    }
}
