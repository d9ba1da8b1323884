use crate::{Bonus, CardId, WonderId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PriceKey {
    Card(CardId),
    Wonder(WonderId),
}

/// Per-player memo of computed coin prices.
///
/// Prices depend on the payer's resources, trade discounts, chains and
/// wildcard tokens, and on the opponent's resources; any ledger change in
/// those ranges must drop the affected player's half of the cache.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PriceCache {
    players: [HashMap<PriceKey, i64>; 2],
}

impl PriceCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, player_index: usize, key: PriceKey) -> Option<i64> {
        self.players[player_index].get(&key).copied()
    }

    pub fn insert(&mut self, player_index: usize, key: PriceKey, price: i64) {
        self.players[player_index].insert(key, price);
    }

    pub fn invalidate(&mut self, owner: usize, bonuses: &[(Bonus, u32)]) {
        if bonuses.iter().any(|(bonus, _)| bonus.affects_own_price()) {
            self.players[owner].clear();
        }
        if bonuses
            .iter()
            .any(|(bonus, _)| bonus.affects_opponent_price())
        {
            self.players[1 - owner].clear();
        }
    }

    pub fn len(&self, player_index: usize) -> usize {
        self.players[player_index].len()
    }

    pub fn is_empty(&self, player_index: usize) -> bool {
        self.players[player_index].is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> PriceCache {
        let mut cache = PriceCache::new();
        cache.insert(0, PriceKey::Card(3), 5);
        cache.insert(1, PriceKey::Wonder(2), 7);
        cache
    }

    #[test]
    fn resource_change_clears_both_sides() {
        let mut cache = seeded();
        cache.invalidate(0, &[(Bonus::Wood, 1)]);
        assert!(cache.is_empty(0));
        assert!(cache.is_empty(1));
    }

    #[test]
    fn chain_change_clears_owner_only() {
        let mut cache = seeded();
        cache.invalidate(0, &[(Bonus::Mask, 1)]);
        assert!(cache.is_empty(0));
        assert!(!cache.is_empty(1));
    }

    #[test]
    fn point_change_clears_nothing() {
        let mut cache = seeded();
        cache.invalidate(0, &[(Bonus::Points, 3), (Bonus::Blue, 1)]);
        assert!(!cache.is_empty(0));
        assert!(!cache.is_empty(1));
    }

    #[test]
    fn wildcard_token_clears_owner() {
        let mut cache = seeded();
        cache.invalidate(1, &[(Bonus::Masonry, 1), (Bonus::TokenMarker, 1)]);
        assert!(cache.is_empty(1));
        assert!(!cache.is_empty(0));
    }
}
