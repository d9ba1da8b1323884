use crate::{CardId, TokenId, Winner, WonderId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Event {
    WonderDrafted {
        player: usize,
        wonder: WonderId,
    },
    AgeStarted {
        age: u8,
    },
    CardBought {
        player: usize,
        card: CardId,
        price: i64,
    },
    CardDiscarded {
        player: usize,
        card: CardId,
        coins: i64,
    },
    WonderBuilt {
        player: usize,
        wonder: WonderId,
        card: CardId,
        price: i64,
    },
    CardDestroyed {
        player: usize,
        card: CardId,
    },
    ProgressTokenPicked {
        player: usize,
        token: TokenId,
    },
    DiscardedCardTaken {
        player: usize,
        card: CardId,
    },
    ConflictPawnMoved {
        position: i32,
    },
    MilitaryTokenLost {
        player: usize,
        coins: i64,
    },
    StartPlayerPicked {
        second: usize,
    },
    GameFinished {
        winner: Winner,
    },
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<Event>,
}

impl EventBus {
    pub fn push(&mut self, event: Event) {
        self.queue.push(event);
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }
}
