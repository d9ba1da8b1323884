use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::ops::Range;

/// Accumulating effect granted by an owned card, wonder or progress token.
///
/// The discriminants are stable indices into a fixed table; the table is
/// laid out in contiguous groups so that range checks (science counting,
/// price-cache invalidation) are cheap.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Bonus {
    // resources
    Wood = 0,
    Clay = 1,
    Stone = 2,
    Glass = 3,
    Papyrus = 4,
    // general resources: Materials covers wood/clay/stone, Goods covers glass/papyrus
    Materials = 5,
    Goods = 6,
    // trade discounts, one per resource
    WoodTrade = 7,
    ClayTrade = 8,
    StoneTrade = 9,
    GlassTrade = 10,
    PapyrusTrade = 11,
    // chain symbols
    Horseshoe = 12,
    Sword = 13,
    Tower = 14,
    Target = 15,
    Helmet = 16,
    Book = 17,
    Gear = 18,
    Harp = 19,
    Teapot = 20,
    Mask = 21,
    Column = 22,
    Moon = 23,
    Sun = 24,
    Drop = 25,
    Temple = 26,
    Vase = 27,
    Barrel = 28,
    // scientific symbols
    ArmillarySphere = 29,
    Wheel = 30,
    Sundial = 31,
    Mortar = 32,
    Plumb = 33,
    Quill = 34,
    Law = 35,
    // victory points
    Points = 36,
    // guild scoring multipliers, resolved at final scoring
    BlueMaxPoints = 37,
    BrownGrayMaxPoints = 38,
    CoinsMaxPoints = 39,
    GreenMaxPoints = 40,
    RedMaxPoints = 41,
    WonderMaxPoints = 42,
    YellowMaxPoints = 43,
    ProgressTokenPoints = 44,
    // card colors
    Brown = 45,
    Gray = 46,
    Blue = 47,
    Green = 48,
    Yellow = 49,
    Red = 50,
    Purple = 51,
    // progress tokens
    Architecture = 52,
    Economy = 53,
    Masonry = 54,
    Strategy = 55,
    Theology = 56,
    Urbanism = 57,
    TokenMarker = 58,
}

pub const BONUS_COUNT: usize = 59;

pub const RESOURCE_RANGE: Range<usize> = 0..5;
pub const GENERAL_RESOURCE_RANGE: Range<usize> = 5..7;
pub const TRADE_RANGE: Range<usize> = 7..12;
pub const CHAIN_RANGE: Range<usize> = 12..29;
pub const SCIENCE_RANGE: Range<usize> = 29..36;
pub const POINTS_RANGE: Range<usize> = 36..37;
pub const GUILD_POINTS_RANGE: Range<usize> = 37..45;
pub const COLOR_RANGE: Range<usize> = 45..52;
pub const PROGRESS_RANGE: Range<usize> = 52..59;

pub const ALL_BONUSES: [Bonus; BONUS_COUNT] = [
    Bonus::Wood,
    Bonus::Clay,
    Bonus::Stone,
    Bonus::Glass,
    Bonus::Papyrus,
    Bonus::Materials,
    Bonus::Goods,
    Bonus::WoodTrade,
    Bonus::ClayTrade,
    Bonus::StoneTrade,
    Bonus::GlassTrade,
    Bonus::PapyrusTrade,
    Bonus::Horseshoe,
    Bonus::Sword,
    Bonus::Tower,
    Bonus::Target,
    Bonus::Helmet,
    Bonus::Book,
    Bonus::Gear,
    Bonus::Harp,
    Bonus::Teapot,
    Bonus::Mask,
    Bonus::Column,
    Bonus::Moon,
    Bonus::Sun,
    Bonus::Drop,
    Bonus::Temple,
    Bonus::Vase,
    Bonus::Barrel,
    Bonus::ArmillarySphere,
    Bonus::Wheel,
    Bonus::Sundial,
    Bonus::Mortar,
    Bonus::Plumb,
    Bonus::Quill,
    Bonus::Law,
    Bonus::Points,
    Bonus::BlueMaxPoints,
    Bonus::BrownGrayMaxPoints,
    Bonus::CoinsMaxPoints,
    Bonus::GreenMaxPoints,
    Bonus::RedMaxPoints,
    Bonus::WonderMaxPoints,
    Bonus::YellowMaxPoints,
    Bonus::ProgressTokenPoints,
    Bonus::Brown,
    Bonus::Gray,
    Bonus::Blue,
    Bonus::Green,
    Bonus::Yellow,
    Bonus::Red,
    Bonus::Purple,
    Bonus::Architecture,
    Bonus::Economy,
    Bonus::Masonry,
    Bonus::Strategy,
    Bonus::Theology,
    Bonus::Urbanism,
    Bonus::TokenMarker,
];

impl Bonus {
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Bonus> {
        ALL_BONUSES.get(index).copied()
    }

    pub fn resource(index: usize) -> Bonus {
        ALL_BONUSES[RESOURCE_RANGE.start + index]
    }

    pub fn trade(index: usize) -> Bonus {
        ALL_BONUSES[TRADE_RANGE.start + index]
    }

    pub fn is_chain_symbol(self) -> bool {
        CHAIN_RANGE.contains(&self.index())
    }

    pub fn affects_own_price(self) -> bool {
        let index = self.index();
        RESOURCE_RANGE.contains(&index)
            || GENERAL_RESOURCE_RANGE.contains(&index)
            || TRADE_RANGE.contains(&index)
            || CHAIN_RANGE.contains(&index)
            || matches!(self, Bonus::Architecture | Bonus::Masonry | Bonus::Urbanism)
    }

    pub fn affects_opponent_price(self) -> bool {
        RESOURCE_RANGE.contains(&self.index())
    }

    pub fn name(self) -> &'static str {
        match self {
            Bonus::Wood => "wood",
            Bonus::Clay => "clay",
            Bonus::Stone => "stone",
            Bonus::Glass => "glass",
            Bonus::Papyrus => "papyrus",
            Bonus::Materials => "materials",
            Bonus::Goods => "goods",
            Bonus::WoodTrade => "wood_trade",
            Bonus::ClayTrade => "clay_trade",
            Bonus::StoneTrade => "stone_trade",
            Bonus::GlassTrade => "glass_trade",
            Bonus::PapyrusTrade => "papyrus_trade",
            Bonus::Horseshoe => "horseshoe",
            Bonus::Sword => "sword",
            Bonus::Tower => "tower",
            Bonus::Target => "target",
            Bonus::Helmet => "helmet",
            Bonus::Book => "book",
            Bonus::Gear => "gear",
            Bonus::Harp => "harp",
            Bonus::Teapot => "teapot",
            Bonus::Mask => "mask",
            Bonus::Column => "column",
            Bonus::Moon => "moon",
            Bonus::Sun => "sun",
            Bonus::Drop => "drop",
            Bonus::Temple => "temple",
            Bonus::Vase => "vase",
            Bonus::Barrel => "barrel",
            Bonus::ArmillarySphere => "armillary_sphere",
            Bonus::Wheel => "wheel",
            Bonus::Sundial => "sundial",
            Bonus::Mortar => "mortar",
            Bonus::Plumb => "plumb",
            Bonus::Quill => "quill",
            Bonus::Law => "law",
            Bonus::Points => "points",
            Bonus::BlueMaxPoints => "blue_max_points",
            Bonus::BrownGrayMaxPoints => "brown_gray_max_points",
            Bonus::CoinsMaxPoints => "coins_max_points",
            Bonus::GreenMaxPoints => "green_max_points",
            Bonus::RedMaxPoints => "red_max_points",
            Bonus::WonderMaxPoints => "wonder_max_points",
            Bonus::YellowMaxPoints => "yellow_max_points",
            Bonus::ProgressTokenPoints => "progress_tokens_points",
            Bonus::Brown => "brown",
            Bonus::Gray => "gray",
            Bonus::Blue => "blue",
            Bonus::Green => "green",
            Bonus::Yellow => "yellow",
            Bonus::Red => "red",
            Bonus::Purple => "purple",
            Bonus::Architecture => "architecture",
            Bonus::Economy => "economy",
            Bonus::Masonry => "masonry",
            Bonus::Strategy => "strategy",
            Bonus::Theology => "theology",
            Bonus::Urbanism => "urbanism",
            Bonus::TokenMarker => "progress_token",
        }
    }

    pub fn from_name(name: &str) -> Option<Bonus> {
        ALL_BONUSES.iter().copied().find(|bonus| bonus.name() == name)
    }
}

/// Sparse per-player tally of accumulated bonuses.
///
/// Never stores a zero count; removing more than is held is a programmer
/// error and panics.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BonusLedger {
    counts: HashMap<Bonus, u32>,
}

impl BonusLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, bonus: Bonus, amount: u32) {
        if amount == 0 {
            return;
        }
        *self.counts.entry(bonus).or_insert(0) += amount;
    }

    pub fn add_all(&mut self, bonuses: &[(Bonus, u32)]) {
        for &(bonus, amount) in bonuses {
            self.add(bonus, amount);
        }
    }

    pub fn remove(&mut self, bonus: Bonus, amount: u32) {
        if amount == 0 {
            return;
        }
        let held = self.counts.get(&bonus).copied().unwrap_or(0);
        assert!(
            held >= amount,
            "removing {amount} of {bonus:?} but only {held} held"
        );
        if held == amount {
            self.counts.remove(&bonus);
        } else {
            self.counts.insert(bonus, held - amount);
        }
    }

    pub fn remove_all(&mut self, bonuses: &[(Bonus, u32)]) {
        for &(bonus, amount) in bonuses {
            self.remove(bonus, amount);
        }
    }

    pub fn has(&self, bonus: Bonus) -> bool {
        self.counts.contains_key(&bonus)
    }

    pub fn get(&self, bonus: Bonus) -> u32 {
        self.counts.get(&bonus).copied().unwrap_or(0)
    }

    pub fn count_in_range(&self, range: Range<usize>) -> u32 {
        self.counts
            .iter()
            .filter(|(bonus, _)| range.contains(&bonus.index()))
            .map(|(_, count)| *count)
            .sum()
    }

    pub fn distinct_in_range(&self, range: Range<usize>) -> usize {
        self.counts
            .keys()
            .filter(|bonus| range.contains(&bonus.index()))
            .count()
    }

    pub fn doubles_in_range(&self, range: Range<usize>) -> usize {
        self.counts
            .iter()
            .filter(|(bonus, count)| range.contains(&bonus.index()) && **count == 2)
            .count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Bonus, u32)> + '_ {
        self.counts.iter().map(|(bonus, count)| (*bonus, *count))
    }
}
