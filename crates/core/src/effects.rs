use serde::{Deserialize, Serialize};

/// One-shot effect resolved exactly once when a card, wonder or progress
/// token is acquired. Unlike [`crate::Bonus`] these are never stored on
/// the player.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum InstantEffect {
    Coins,
    Shield,
    BrownCoins,
    GrayCoins,
    RedCoins,
    YellowCoins,
    WonderCoins,
    BlueMaxCoins,
    BrownGrayMaxCoins,
    GreenMaxCoins,
    RedMaxCoins,
    YellowMaxCoins,
    OpponentCoins,
    DoubleTurn,
    DestroyBrown,
    DestroyGray,
    SelectProgressToken,
    SelectDiscarded,
}

pub const ALL_INSTANT_EFFECTS: [InstantEffect; 18] = [
    InstantEffect::Coins,
    InstantEffect::Shield,
    InstantEffect::BrownCoins,
    InstantEffect::GrayCoins,
    InstantEffect::RedCoins,
    InstantEffect::YellowCoins,
    InstantEffect::WonderCoins,
    InstantEffect::BlueMaxCoins,
    InstantEffect::BrownGrayMaxCoins,
    InstantEffect::GreenMaxCoins,
    InstantEffect::RedMaxCoins,
    InstantEffect::YellowMaxCoins,
    InstantEffect::OpponentCoins,
    InstantEffect::DoubleTurn,
    InstantEffect::DestroyBrown,
    InstantEffect::DestroyGray,
    InstantEffect::SelectProgressToken,
    InstantEffect::SelectDiscarded,
];

impl InstantEffect {
    pub fn name(self) -> &'static str {
        match self {
            InstantEffect::Coins => "coins",
            InstantEffect::Shield => "shield",
            InstantEffect::BrownCoins => "brown_coins",
            InstantEffect::GrayCoins => "gray_coins",
            InstantEffect::RedCoins => "red_coins",
            InstantEffect::YellowCoins => "yellow_coins",
            InstantEffect::WonderCoins => "wonder_coins",
            InstantEffect::BlueMaxCoins => "blue_max_coins",
            InstantEffect::BrownGrayMaxCoins => "brown_gray_max_coins",
            InstantEffect::GreenMaxCoins => "green_max_coins",
            InstantEffect::RedMaxCoins => "red_max_coins",
            InstantEffect::YellowMaxCoins => "yellow_max_coins",
            InstantEffect::OpponentCoins => "opponent_coins",
            InstantEffect::DoubleTurn => "double_turn",
            InstantEffect::DestroyBrown => "destroy_brown",
            InstantEffect::DestroyGray => "destroy_gray",
            InstantEffect::SelectProgressToken => "select_progress_token",
            InstantEffect::SelectDiscarded => "select_discarded",
        }
    }

    pub fn from_name(name: &str) -> Option<InstantEffect> {
        ALL_INSTANT_EFFECTS
            .iter()
            .copied()
            .find(|effect| effect.name() == name)
    }
}
