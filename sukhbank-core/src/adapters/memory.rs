//! In-memory key-value store

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::domain::result::Result;
use crate::ports::KeyValueStore;

/// HashMap-backed store
///
/// Clones share the same underlying map, which lets a test re-open a second
/// store over the same entries and exercise rehydration without touching
/// disk.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Direct read of a raw entry, for assertions in tests
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_entries() {
        let store = MemoryStore::new();
        let mut handle = store.clone();

        handle.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().unwrap(), "v");

        handle.remove("k").unwrap();
        assert!(store.get("k").unwrap().is_none());
    }
}
