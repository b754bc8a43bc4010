use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use zerog_common::Intent;

/// Physical key code names (`"KeyW"`, `"ArrowUp"`, `"Space"`, ...) mapped to
/// intents. Codes with no binding are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyBindings {
    map: BTreeMap<String, Intent>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let map = [
            ("KeyW", Intent::Forward),
            ("ArrowUp", Intent::Forward),
            ("KeyS", Intent::Backward),
            ("ArrowDown", Intent::Backward),
            ("KeyA", Intent::Left),
            ("ArrowLeft", Intent::Left),
            ("KeyD", Intent::Right),
            ("ArrowRight", Intent::Right),
            ("Space", Intent::Up),
            ("ShiftLeft", Intent::Down),
        ]
        .into_iter()
        .map(|(code, intent)| (code.to_string(), intent))
        .collect();
        Self { map }
    }
}

impl KeyBindings {
    /// Bindings with nothing bound.
    pub fn empty() -> Self {
        Self {
            map: BTreeMap::new(),
        }
    }

    pub fn bind(&mut self, code: impl Into<String>, intent: Intent) {
        self.map.insert(code.into(), intent);
    }

    pub fn unbind(&mut self, code: &str) -> Option<Intent> {
        self.map.remove(code)
    }

    pub fn resolve(&self, code: &str) -> Option<Intent> {
        self.map.get(code).copied()
    }

    /// Key codes bound to `intent`, sorted.
    pub fn codes_for(&self, intent: Intent) -> Vec<&str> {
        self.map
            .iter()
            .filter(|(_, i)| **i == intent)
            .map(|(c, _)| c.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
