//! Per-turn memoization of tonnage modifiers

use super::calculation::{cache_key, modifier};
use crate::config::TonnageConfig;
use crate::types::Combatant;
use std::collections::HashMap;

/// Modifier cache keyed by attacker/target pairing
///
/// Tonnage can change between turns (ratio tags, squad losses), so the host
/// clears the cache at the start of each turn.
///
/// Only pairings of two present combatants are cached, since the key is built
/// from both ids. Attacks with an absent side go through [`modifier`] directly.
#[derive(Debug, Clone, Default)]
pub struct ModifierCache {
    entries: HashMap<String, i32>,
}

impl ModifierCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached modifier for the pairing, calculating it on first use
    pub fn get_or_compute(
        &mut self,
        attacker: &Combatant,
        target: &Combatant,
        config: &TonnageConfig,
    ) -> i32 {
        let key = cache_key(attacker, target);
        if let Some(&cached) = self.entries.get(&key) {
            return cached;
        }

        let value = modifier(Some(attacker), Some(target), config);
        tracing::debug!("Caching tonnage modifier {} for {}", value, key);
        self.entries.insert(key, value);
        value
    }

    pub fn get(&self, attacker: &Combatant, target: &Combatant) -> Option<i32> {
        self.entries.get(&cache_key(attacker, target)).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
