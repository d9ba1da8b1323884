use crate::{Bonus, InstantEffect};
use serde::{Deserialize, Serialize};

pub type CardId = u16;
pub type WonderId = u16;
pub type TokenId = u16;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CardColor {
    Brown,
    Gray,
    Blue,
    Green,
    Yellow,
    Red,
    Purple,
}

pub const ALL_CARD_COLORS: [CardColor; 7] = [
    CardColor::Brown,
    CardColor::Gray,
    CardColor::Blue,
    CardColor::Green,
    CardColor::Yellow,
    CardColor::Red,
    CardColor::Purple,
];

impl CardColor {
    pub fn bonus(self) -> Bonus {
        match self {
            CardColor::Brown => Bonus::Brown,
            CardColor::Gray => Bonus::Gray,
            CardColor::Blue => Bonus::Blue,
            CardColor::Green => Bonus::Green,
            CardColor::Yellow => Bonus::Yellow,
            CardColor::Red => Bonus::Red,
            CardColor::Purple => Bonus::Purple,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CardColor::Brown => "brown",
            CardColor::Gray => "gray",
            CardColor::Blue => "blue",
            CardColor::Green => "green",
            CardColor::Yellow => "yellow",
            CardColor::Red => "red",
            CardColor::Purple => "purple",
        }
    }

    pub fn from_name(name: &str) -> Option<CardColor> {
        ALL_CARD_COLORS
            .iter()
            .copied()
            .find(|color| color.name() == name)
    }
}

/// What acquiring an entity costs: a flat coin amount, a per-resource
/// requirement, and an optional chain symbol that makes the whole price
/// free when the payer produces it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Price {
    pub coins: i64,
    pub resources: [u32; 5],
    #[serde(default)]
    pub chain: Option<Bonus>,
}

impl Price {
    pub fn free() -> Self {
        Self {
            coins: 0,
            resources: [0; 5],
            chain: None,
        }
    }

    pub fn is_free(&self) -> bool {
        self.coins == 0 && self.resources.iter().all(|&need| need == 0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CardDef {
    pub id: CardId,
    pub name: String,
    pub age: u8,
    pub color: CardColor,
    pub price: Price,
    pub bonuses: Vec<(Bonus, u32)>,
    pub instants: Vec<(InstantEffect, i64)>,
}

impl CardDef {
    pub fn points(&self) -> i64 {
        bonus_value(&self.bonuses, Bonus::Points)
    }

    pub fn is_guild(&self) -> bool {
        self.color == CardColor::Purple
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WonderDef {
    pub id: WonderId,
    pub name: String,
    pub price: Price,
    pub bonuses: Vec<(Bonus, u32)>,
    pub instants: Vec<(InstantEffect, i64)>,
}

impl WonderDef {
    pub fn points(&self) -> i64 {
        bonus_value(&self.bonuses, Bonus::Points)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TokenDef {
    pub id: TokenId,
    pub name: String,
    pub bonuses: Vec<(Bonus, u32)>,
    pub instants: Vec<(InstantEffect, i64)>,
}

fn bonus_value(bonuses: &[(Bonus, u32)], wanted: Bonus) -> i64 {
    bonuses
        .iter()
        .find(|(bonus, _)| *bonus == wanted)
        .map(|(_, value)| *value as i64)
        .unwrap_or(0)
}

/// Immutable lookup of every card, wonder and progress-token definition.
///
/// Constructed once by the data loader and passed into the engine by the
/// caller; ids are contiguous indices into the vectors, which the loader
/// validates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub cards: Vec<CardDef>,
    pub wonders: Vec<WonderDef>,
    pub tokens: Vec<TokenDef>,
}

impl Catalog {
    pub fn card(&self, id: CardId) -> &CardDef {
        &self.cards[id as usize]
    }

    pub fn wonder(&self, id: WonderId) -> &WonderDef {
        &self.wonders[id as usize]
    }

    pub fn token(&self, id: TokenId) -> &TokenDef {
        &self.tokens[id as usize]
    }

    pub fn token_by_name(&self, name: &str) -> Option<&TokenDef> {
        self.tokens.iter().find(|token| token.name == name)
    }

    pub fn cards_count(&self) -> usize {
        self.cards.len()
    }

    pub fn wonders_count(&self) -> usize {
        self.wonders.len()
    }

    pub fn tokens_count(&self) -> usize {
        self.tokens.len()
    }

    pub fn age_deck(&self, age: u8) -> Vec<CardId> {
        self.cards
            .iter()
            .filter(|card| card.age == age && !card.is_guild())
            .map(|card| card.id)
            .collect()
    }

    pub fn guild_deck(&self) -> Vec<CardId> {
        self.cards
            .iter()
            .filter(|card| card.is_guild())
            .map(|card| card.id)
            .collect()
    }
}
