use crate::{CardId, RngState};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("card {0} is not on the board")]
    CardNotOnBoard(CardId),
    #[error("card {0} occupies more than one slot")]
    DuplicateCard(CardId),
}

pub type BoardPos = (usize, usize);

const AGE_LAYOUTS: [[[u8; 6]; 7]; 3] = [
    [
        [2, 2, 0, 0, 0, 0],
        [1, 1, 1, 0, 0, 0],
        [2, 2, 2, 2, 0, 0],
        [1, 1, 1, 1, 1, 0],
        [2, 2, 2, 2, 2, 2],
        [0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0],
    ],
    [
        [2, 2, 2, 2, 2, 2],
        [0, 1, 1, 1, 1, 1],
        [0, 0, 2, 2, 2, 2],
        [0, 0, 0, 1, 1, 1],
        [0, 0, 0, 0, 2, 2],
        [0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0],
    ],
    [
        [2, 2, 0, 0, 0, 0],
        [1, 1, 1, 0, 0, 0],
        [2, 2, 2, 2, 0, 0],
        [0, 1, 0, 1, 0, 0],
        [0, 2, 2, 2, 2, 0],
        [0, 0, 1, 1, 1, 0],
        [0, 0, 0, 2, 2, 0],
    ],
];

const GUILD_BACKED_SLOTS: usize = 3;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SlotFace {
    Empty,
    FaceDown,
    Revealed(CardId),
}

/// One position in the pyramid. Parent/child links are indices into the
/// board's slot arena; the relation is wired once at generation and only
/// ever shrinks as parents are taken.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slot {
    pub row: usize,
    pub col: usize,
    pub face: SlotFace,
    pub guild_back: bool,
    pub parents: Vec<usize>,
    pub children: Vec<usize>,
}

impl Slot {
    pub fn pos(&self) -> BoardPos {
        (self.row, self.col)
    }

    pub fn is_takeable(&self) -> bool {
        matches!(self.face, SlotFace::Revealed(_)) && self.parents.is_empty()
    }
}

pub type AgePreset = HashMap<BoardPos, CardId>;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CardBoard {
    pub age: u8,
    slots: Vec<Slot>,
    deck: Vec<CardId>,
    guild_deck: Vec<CardId>,
    preset: Option<AgePreset>,
}

impl CardBoard {
    pub fn generate_age(
        &mut self,
        age: u8,
        mut deck: Vec<CardId>,
        mut guild_deck: Vec<CardId>,
        preset: Option<AgePreset>,
        rng: &mut RngState,
    ) {
        let mask = &AGE_LAYOUTS[age as usize];
        self.age = age;
        self.slots.clear();

        let mut grid = [[usize::MAX; 6]; 7];
        for (row, cols) in mask.iter().enumerate() {
            for (col, &cell) in cols.iter().enumerate() {
                if cell > 0 {
                    grid[row][col] = self.slots.len();
                    self.slots.push(Slot {
                        row,
                        col,
                        face: SlotFace::FaceDown,
                        guild_back: false,
                        parents: Vec::new(),
                        children: Vec::new(),
                    });
                }
            }
        }

        for index in 0..self.slots.len() {
            let (row, col) = self.slots[index].pos();
            for parent_col in [col, col + 1] {
                if row + 1 < 7 && parent_col < 6 {
                    let parent = grid[row + 1][parent_col];
                    if parent != usize::MAX {
                        self.slots[index].parents.push(parent);
                        self.slots[parent].children.push(index);
                    }
                }
            }
        }

        if age == 2 {
            for index in rng.sample_indices(self.slots.len(), GUILD_BACKED_SLOTS) {
                self.slots[index].guild_back = true;
            }
        }

        rng.shuffle(&mut deck);
        rng.shuffle(&mut guild_deck);
        self.deck = deck;
        self.guild_deck = guild_deck;
        self.preset = preset;

        if let Some(preset) = &self.preset {
            let guild_ids: Vec<CardId> = self.guild_deck.clone();
            for slot in &mut self.slots {
                if let Some(card) = preset.get(&slot.pos()) {
                    slot.guild_back = guild_ids.contains(card);
                }
            }
        }

        for index in 0..self.slots.len() {
            let (row, col) = self.slots[index].pos();
            if mask[row][col] == 2 {
                self.reveal(index);
            }
        }
    }

    fn reveal(&mut self, index: usize) {
        let slot = &self.slots[index];
        let card = if let Some(preset) = &self.preset {
            *preset
                .get(&slot.pos())
                .unwrap_or_else(|| panic!("preset is missing slot {:?}", slot.pos()))
        } else if slot.guild_back {
            self.guild_deck.pop().expect("guild draw pool exhausted")
        } else {
            self.deck.pop().expect("draw pool exhausted")
        };
        self.slots[index].face = SlotFace::Revealed(card);
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn available_cards(&self) -> Vec<(CardId, BoardPos)> {
        self.slots
            .iter()
            .filter(|slot| slot.parents.is_empty())
            .filter_map(|slot| match slot.face {
                SlotFace::Revealed(card) => Some((card, slot.pos())),
                _ => None,
            })
            .collect()
    }

    /// Remove `card` from the board and reveal any slot this uncovers.
    /// Reveals cascade exactly one level: a slot's own cover edges are the
    /// only ones inspected.
    pub fn take_card(&mut self, card: CardId) -> Result<BoardPos, BoardError> {
        let matches: Vec<usize> = self
            .slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.face == SlotFace::Revealed(card))
            .map(|(index, _)| index)
            .collect();
        let index = match matches.as_slice() {
            [index] => *index,
            [] => return Err(BoardError::CardNotOnBoard(card)),
            _ => return Err(BoardError::DuplicateCard(card)),
        };

        self.slots[index].face = SlotFace::Empty;
        let children = self.slots[index].children.clone();
        for child in children {
            self.slots[child].parents.retain(|&parent| parent != index);
            if self.slots[child].parents.is_empty() && self.slots[child].face == SlotFace::FaceDown
            {
                self.reveal(child);
            }
        }
        Ok(self.slots[index].pos())
    }

    pub fn row_widths(age: u8) -> Vec<usize> {
        AGE_LAYOUTS[age as usize]
            .iter()
            .map(|row| row.iter().filter(|&&cell| cell > 0).count())
            .filter(|&width| width > 0)
            .collect()
    }
}
