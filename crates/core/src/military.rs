use serde::{Deserialize, Serialize};

pub const MILITARY_TOKEN_COUNT: usize = 4;

pub const PAWN_LIMIT: i32 = 9;

/// The single-axis conflict meter. Player 0's shields push the pawn
/// positive, player 1's negative. Each of the four tokens fires its coin
/// penalty at most once; the deduction itself is reported through a
/// callback so the track never touches player state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MilitaryTrack {
    pub conflict_pawn: i32,
    pub tokens: [bool; MILITARY_TOKEN_COUNT],
}

impl Default for MilitaryTrack {
    fn default() -> Self {
        Self {
            conflict_pawn: 0,
            tokens: [true; MILITARY_TOKEN_COUNT],
        }
    }
}

impl MilitaryTrack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply_shields(
        &mut self,
        player_index: usize,
        shields: i32,
        mut on_token_loss: impl FnMut(usize, i64),
    ) {
        let delta = if player_index == 1 { -shields } else { shields };
        self.conflict_pawn = (self.conflict_pawn + delta).clamp(-PAWN_LIMIT, PAWN_LIMIT);

        if self.conflict_pawn >= 3 && self.tokens[2] {
            self.tokens[2] = false;
            on_token_loss(1, -2);
        }
        if self.conflict_pawn >= 6 && self.tokens[3] {
            self.tokens[3] = false;
            on_token_loss(1, -5);
        }
        if self.conflict_pawn <= -3 && self.tokens[1] {
            self.tokens[1] = false;
            on_token_loss(0, -2);
        }
        if self.conflict_pawn <= -6 && self.tokens[0] {
            self.tokens[0] = false;
            on_token_loss(0, -5);
        }
    }

    pub fn supremacist(&self) -> Option<usize> {
        if self.conflict_pawn == PAWN_LIMIT {
            Some(0)
        } else if self.conflict_pawn == -PAWN_LIMIT {
            Some(1)
        } else {
            None
        }
    }

    pub fn weaker_player(&self) -> Option<usize> {
        if self.conflict_pawn > 0 {
            Some(1)
        } else if self.conflict_pawn < 0 {
            Some(0)
        } else {
            None
        }
    }

    pub fn points(&self, player_index: usize) -> i64 {
        if self.supremacist().is_some() {
            return 0;
        }
        if (player_index == 0 && self.conflict_pawn <= 0)
            || (player_index == 1 && self.conflict_pawn >= 0)
        {
            return 0;
        }
        [2, 5, 10][(self.conflict_pawn.unsigned_abs() as usize) / 3]
    }
}
