use crate::{Bonus, BonusLedger, CardColor, CardDef, Price, CHAIN_RANGE};

/// Coins refunded (not charged) when a chain purchase is made while
/// holding the urbanism progress token.
pub const CHAIN_REFUND: i64 = 4;

const CHAIN_COUNT: usize = CHAIN_RANGE.end - CHAIN_RANGE.start;

const POOLS: [[usize; 3]; 5] = [[0, 5, 7], [1, 5, 7], [2, 5, 7], [3, 6, 7], [4, 6, 7]];

/// Snapshot of everything a single pricing query needs. Built fresh per
/// query; `coins_for_price` never mutates it, so pricing can run
/// speculatively while legal actions are enumerated.
#[derive(Debug, Clone)]
pub struct Assets {
    pub coins: i64,
    pub resources: [u32; 8],
    pub resource_costs: [i64; 5],
    chains: [u32; CHAIN_COUNT],
    pub urbanism: bool,
}

impl Assets {
    pub fn for_player(
        ledger: &BonusLedger,
        coins: i64,
        opponent: &BonusLedger,
        card: Option<&CardDef>,
    ) -> Assets {
        let mut resources = [0u32; 8];
        for index in 0..5 {
            resources[index] = ledger.get(Bonus::resource(index));
        }
        resources[5] = ledger.get(Bonus::Materials);
        resources[6] = ledger.get(Bonus::Goods);
        resources[7] = match card {
            Some(card) if ledger.has(Bonus::Masonry) && card.color == CardColor::Blue => 2,
            Some(_) => 0,
            None if ledger.has(Bonus::Architecture) => 2,
            None => 0,
        };

        let mut resource_costs = [0i64; 5];
        for index in 0..5 {
            resource_costs[index] = if ledger.has(Bonus::trade(index)) {
                1
            } else {
                opponent.get(Bonus::resource(index)) as i64 + 2
            };
        }

        let mut chains = [0u32; CHAIN_COUNT];
        for (offset, slot) in chains.iter_mut().enumerate() {
            *slot = ledger.get(crate::ALL_BONUSES[CHAIN_RANGE.start + offset]);
        }

        Assets {
            coins,
            resources,
            resource_costs,
            chains,
            urbanism: ledger.has(Bonus::Urbanism),
        }
    }

    pub fn has_chain(&self, symbol: Bonus) -> bool {
        debug_assert!(symbol.is_chain_symbol());
        self.chains[symbol.index() - CHAIN_RANGE.start] > 0
    }

    /// Extra coins needed on top of what the payer's tableau produces.
    ///
    /// A matching chain symbol short-circuits the whole price: free, or a
    /// negative cost (a refund) under urbanism. Otherwise shortfalls are
    /// covered greedily, most expensive resource first (ties to the lower
    /// index), consuming pools narrowest-first, and whatever remains is
    /// bought at its per-unit trade cost.
    pub fn coins_for_price(&self, price: &Price) -> i64 {
        if let Some(chain) = price.chain {
            if self.has_chain(chain) {
                return if self.urbanism { -CHAIN_REFUND } else { 0 };
            }
        }

        let mut shortfall = price.resources;
        let mut pool = self.resources;

        let probe_depth = if pool[7] > 0 {
            3
        } else if pool[5] > 0 || pool[6] > 0 {
            2
        } else {
            1
        };

        let mut order = [0usize, 1, 2, 3, 4];
        order.sort_by(|&a, &b| {
            self.resource_costs[b]
                .cmp(&self.resource_costs[a])
                .then(a.cmp(&b))
        });

        for &index in &order {
            for source in POOLS[index].iter().take(probe_depth) {
                let amount = shortfall[index].min(pool[*source]);
                shortfall[index] -= amount;
                pool[*source] -= amount;
                if shortfall[index] == 0 {
                    break;
                }
            }
        }

        let traded: i64 = shortfall
            .iter()
            .zip(&self.resource_costs)
            .map(|(&missing, &cost)| missing as i64 * cost)
            .sum();
        price.coins + traded
    }
}
