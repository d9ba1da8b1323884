use crate::{Bonus, CardColor, Catalog, MilitaryTrack, PlayerState};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub civic: i64,
    pub treasury: i64,
    pub military: i64,
    pub guilds: i64,
}

impl ScoreBreakdown {
    pub fn total(&self) -> i64 {
        self.civic + self.treasury + self.military + self.guilds
    }
}

pub fn score_breakdown(
    players: &[PlayerState; 2],
    military: &MilitaryTrack,
    player_index: usize,
) -> ScoreBreakdown {
    let player = &players[player_index];
    ScoreBreakdown {
        civic: player.ledger.get(Bonus::Points) as i64,
        treasury: player.coins / 3,
        military: military.points(player_index),
        guilds: guild_points(players, player_index),
    }
}

/// Guild card scoring: each multiplier in the player's ledger references
/// a quantity taken from whichever player has more of it (except the
/// progress-token guild, which counts the owner's tokens). Coins convert
/// at one point per three, dividing after the max is taken.
pub fn guild_points(players: &[PlayerState; 2], player_index: usize) -> i64 {
    let player = &players[player_index];
    let max_color =
        |color: CardColor| players.iter().map(|p| p.color_count(color)).max().unwrap_or(0) as i64;

    let mut points = 0;
    for (bonus, value) in player.ledger.iter() {
        let value = value as i64;
        points += match bonus {
            Bonus::BlueMaxPoints => value * max_color(CardColor::Blue),
            Bonus::BrownGrayMaxPoints => {
                value
                    * players
                        .iter()
                        .map(|p| p.color_count(CardColor::Brown) + p.color_count(CardColor::Gray))
                        .max()
                        .unwrap_or(0) as i64
            }
            Bonus::CoinsMaxPoints => {
                value * (players.iter().map(|p| p.coins).max().unwrap_or(0) / 3)
            }
            Bonus::GreenMaxPoints => value * max_color(CardColor::Green),
            Bonus::RedMaxPoints => value * max_color(CardColor::Red),
            Bonus::YellowMaxPoints => value * max_color(CardColor::Yellow),
            Bonus::WonderMaxPoints => {
                value
                    * players
                        .iter()
                        .map(|p| p.built_wonders())
                        .max()
                        .unwrap_or(0) as i64
            }
            Bonus::ProgressTokenPoints => value * player.ledger.get(Bonus::TokenMarker) as i64,
            _ => 0,
        };
    }
    points
}

pub fn blue_points(catalog: &Catalog, player: &PlayerState) -> i64 {
    player
        .cards
        .iter()
        .map(|&id| catalog.card(id))
        .filter(|card| card.color == CardColor::Blue)
        .map(|card| card.points())
        .sum()
}
