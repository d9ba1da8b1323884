use crate::{
    Assets, Bonus, BonusLedger, CardColor, CardDef, CardId, TokenDef, TokenId, WonderDef,
    WonderId, SCIENCE_RANGE,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WonderSlot {
    pub wonder: WonderId,
    pub built_with: Option<CardId>,
}

impl WonderSlot {
    pub fn is_built(&self) -> bool {
        self.built_with.is_some()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerState {
    pub index: usize,
    pub coins: i64,
    pub cards: Vec<CardId>,
    pub wonders: Vec<WonderSlot>,
    pub progress_tokens: Vec<TokenId>,
    pub ledger: BonusLedger,
}

impl PlayerState {
    pub fn new(index: usize, coins: i64) -> Self {
        Self {
            index,
            coins,
            cards: Vec::new(),
            wonders: Vec::new(),
            progress_tokens: Vec::new(),
            ledger: BonusLedger::new(),
        }
    }

    pub fn add_card(&mut self, card: &CardDef) {
        debug_assert!(!self.cards.contains(&card.id));
        self.cards.push(card.id);
        self.ledger.add_all(&card.bonuses);
    }

    pub fn destroy_card(&mut self, card: &CardDef) {
        self.cards.retain(|&id| id != card.id);
        self.ledger.remove_all(&card.bonuses);
    }

    pub fn add_wonder(&mut self, wonder: WonderId) {
        self.wonders.push(WonderSlot {
            wonder,
            built_with: None,
        });
    }

    pub fn wonder_slot(&self, wonder: WonderId) -> Option<&WonderSlot> {
        self.wonders.iter().find(|slot| slot.wonder == wonder)
    }

    pub fn build_wonder(&mut self, wonder: &WonderDef, card: CardId) {
        let slot = self
            .wonders
            .iter_mut()
            .find(|slot| slot.wonder == wonder.id)
            .expect("building a wonder that was never drafted");
        slot.built_with = Some(card);
        self.ledger.add_all(&wonder.bonuses);
    }

    pub fn built_wonders(&self) -> usize {
        self.wonders.iter().filter(|slot| slot.is_built()).count()
    }

    pub fn remove_unbuilt_wonders(&mut self) {
        self.wonders.retain(|slot| slot.is_built());
    }

    pub fn add_progress_token(&mut self, token: &TokenDef) {
        self.progress_tokens.push(token.id);
        self.ledger.add_all(&token.bonuses);
    }

    pub fn color_count(&self, color: CardColor) -> u32 {
        self.ledger.get(color.bonus())
    }

    pub fn science_distinct(&self) -> usize {
        self.ledger.distinct_in_range(SCIENCE_RANGE)
    }

    /// Symbol kinds held exactly twice; completing one grants a
    /// progress-token pick.
    pub fn science_doubles(&self) -> usize {
        self.ledger.doubles_in_range(SCIENCE_RANGE)
    }

    pub fn has_architecture(&self) -> bool {
        self.ledger.has(Bonus::Architecture)
    }

    pub fn has_economy(&self) -> bool {
        self.ledger.has(Bonus::Economy)
    }

    pub fn has_masonry(&self) -> bool {
        self.ledger.has(Bonus::Masonry)
    }

    pub fn has_strategy(&self) -> bool {
        self.ledger.has(Bonus::Strategy)
    }

    pub fn has_theology(&self) -> bool {
        self.ledger.has(Bonus::Theology)
    }

    pub fn has_urbanism(&self) -> bool {
        self.ledger.has(Bonus::Urbanism)
    }

    pub fn discard_bonus(&self, base: i64) -> i64 {
        base + self.ledger.get(Bonus::Yellow) as i64
    }

    pub fn assets(&self, opponent: &BonusLedger, card: Option<&CardDef>) -> Assets {
        Assets::for_player(&self.ledger, self.coins, opponent, card)
    }

    pub fn card_price(&self, card: &CardDef, opponent: &BonusLedger) -> i64 {
        self.assets(opponent, Some(card)).coins_for_price(&card.price)
    }

    pub fn wonder_price(&self, wonder: &WonderDef, opponent: &BonusLedger) -> i64 {
        self.assets(opponent, None).coins_for_price(&wonder.price)
    }
}
