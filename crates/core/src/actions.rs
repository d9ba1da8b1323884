use crate::{BoardPos, CardId, TokenId, WonderId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Action {
    BuyCard { card: CardId, pos: BoardPos },
    DiscardCard { card: CardId, pos: BoardPos },
    DestroyCard { card: CardId },
    PickWonder { wonder: WonderId },
    BuildWonder { wonder: WonderId, card: CardId, pos: BoardPos },
    PickStartPlayer { player: usize },
    PickProgressToken { token: TokenId },
    PickDiscardedCard { card: CardId },
}

impl Action {
    pub fn stable_key(&self) -> String {
        match self {
            Self::BuyCard { card, pos } => format!("buy:{card}:{}:{}", pos.0, pos.1),
            Self::DiscardCard { card, pos } => format!("discard:{card}:{}:{}", pos.0, pos.1),
            Self::DestroyCard { card } => format!("destroy:{card}"),
            Self::PickWonder { wonder } => format!("pick_wonder:{wonder}"),
            Self::BuildWonder { wonder, card, pos } => {
                format!("build_wonder:{wonder}:{card}:{}:{}", pos.0, pos.1)
            }
            Self::PickStartPlayer { player } => format!("pick_start_player:{player}"),
            Self::PickProgressToken { token } => format!("pick_token:{token}"),
            Self::PickDiscardedCard { card } => format!("pick_discarded:{card}"),
        }
    }

    pub fn short_label(&self) -> String {
        match self {
            Self::BuyCard { card, .. } => format!("buy card {card}"),
            Self::DiscardCard { card, .. } => format!("discard card {card}"),
            Self::DestroyCard { card } => format!("destroy card {card}"),
            Self::PickWonder { wonder } => format!("pick wonder {wonder}"),
            Self::BuildWonder { wonder, card, .. } => {
                format!("build wonder {wonder} with card {card}")
            }
            Self::PickStartPlayer { player } => format!("second player {player}"),
            Self::PickProgressToken { token } => format!("pick token {token}"),
            Self::PickDiscardedCard { card } => format!("take discarded card {card}"),
        }
    }
}
