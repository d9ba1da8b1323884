use crate::{
    scoring, Action, AgePreset, BoardError, CardBoard, CardColor, CardId, Catalog, Event,
    EventBus, GameConfig, InstantEffect, MilitaryTrack, PlayerState, PriceCache, PriceKey,
    RngState, TokenId, WonderId,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("game is already finished")]
    Finished,
    #[error("action is not legal in the current phase")]
    IllegalAction,
    #[error("price {price} exceeds available coins {coins}")]
    CannotAfford { price: i64, coins: i64 },
    #[error("board error: {0}")]
    Board(#[from] BoardError),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Phase {
    PickWonder,
    NormalTurn,
    PickProgressToken,
    PickRestProgressToken,
    PickStartPlayer,
    DestroyBrown,
    DestroyGray,
    SelectDiscarded,
    Finished,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Winner {
    Player(usize),
    Draw,
}

const WONDER_DRAFT_ORDER: [usize; 8] = [0, 1, 1, 0, 1, 0, 0, 1];

const WONDER_DRAFT_SIZE: usize = 8;

const WONDER_BUILD_CAP: usize = 7;

pub type GamePreset = [AgePreset; 3];

/// The whole game: both players, the board, the military track, the
/// drafted token pools and the phase machine. Created once and mutated in
/// place; every action validates before it mutates.
#[derive(Debug)]
pub struct Game {
    pub catalog: Catalog,
    pub config: GameConfig,
    pub rng: RngState,
    pub age: u8,
    pub current_player: usize,
    pub progress_tokens: Vec<TokenId>,
    pub rest_progress_tokens: Vec<TokenId>,
    pub discard_pile: Vec<CardId>,
    pub double_turn: bool,
    pub wonder_pool: Vec<WonderId>,
    pub players: [PlayerState; 2],
    pub military: MilitaryTrack,
    pub board: CardBoard,
    pub phase: Phase,
    pub winner: Option<Winner>,
    pub price_cache: Option<PriceCache>,
    pub preset: Option<GamePreset>,
}

impl Game {
    pub fn new(catalog: Catalog, config: GameConfig, seed: u64) -> Self {
        let mut rng = RngState::from_seed(seed);

        let mut tokens: Vec<TokenId> = (0..catalog.tokens_count() as TokenId).collect();
        rng.shuffle(&mut tokens);
        let rest_progress_tokens = tokens.split_off(config.drafted_tokens);

        let mut wonders: Vec<WonderId> = (0..catalog.wonders_count() as WonderId).collect();
        rng.shuffle(&mut wonders);
        wonders.truncate(WONDER_DRAFT_SIZE);

        let players = [
            PlayerState::new(0, config.starting_coins),
            PlayerState::new(1, config.starting_coins),
        ];

        Self {
            catalog,
            config,
            rng,
            age: 0,
            current_player: 0,
            progress_tokens: tokens,
            rest_progress_tokens,
            discard_pile: Vec::new(),
            double_turn: false,
            wonder_pool: wonders,
            players,
            military: MilitaryTrack::new(),
            board: CardBoard::default(),
            phase: Phase::PickWonder,
            winner: None,
            price_cache: None,
            preset: None,
        }
    }

    pub fn with_preset(mut self, preset: GamePreset) -> Self {
        self.preset = Some(preset);
        self
    }

    pub fn enable_price_cache(&mut self) {
        if self.price_cache.is_none() {
            self.price_cache = Some(PriceCache::new());
        }
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    pub fn opponent_index(&self) -> usize {
        1 - self.current_player
    }

    pub fn card_price(&mut self, card: CardId) -> i64 {
        let player = self.current_player;
        let key = PriceKey::Card(card);
        if let Some(cache) = &self.price_cache {
            if let Some(price) = cache.get(player, key) {
                return price;
            }
        }
        let def = self.catalog.card(card);
        let price = self.players[player].card_price(def, &self.players[1 - player].ledger);
        if let Some(cache) = &mut self.price_cache {
            cache.insert(player, key, price);
        }
        price
    }

    pub fn wonder_price(&mut self, wonder: WonderId) -> i64 {
        let player = self.current_player;
        let key = PriceKey::Wonder(wonder);
        if let Some(cache) = &self.price_cache {
            if let Some(price) = cache.get(player, key) {
                return price;
            }
        }
        let def = self.catalog.wonder(wonder);
        let price = self.players[player].wonder_price(def, &self.players[1 - player].ledger);
        if let Some(cache) = &mut self.price_cache {
            cache.insert(player, key, price);
        }
        price
    }

    pub fn offered_wonders(&self) -> &[WonderId] {
        if self.wonder_pool.len() > 4 {
            &self.wonder_pool[..self.wonder_pool.len() - 4]
        } else {
            &self.wonder_pool
        }
    }

    pub fn legal_actions(&mut self) -> Vec<Action> {
        match self.phase {
            Phase::PickWonder => self
                .offered_wonders()
                .iter()
                .map(|&wonder| Action::PickWonder { wonder })
                .collect(),
            Phase::NormalTurn => self.normal_actions(),
            Phase::PickStartPlayer => (0..2)
                .map(|player| Action::PickStartPlayer { player })
                .collect(),
            Phase::PickProgressToken => self
                .progress_tokens
                .iter()
                .map(|&token| Action::PickProgressToken { token })
                .collect(),
            Phase::PickRestProgressToken => {
                let offered = self
                    .config
                    .offered_rest_tokens
                    .min(self.rest_progress_tokens.len());
                self.rest_progress_tokens[..offered]
                    .iter()
                    .map(|&token| Action::PickProgressToken { token })
                    .collect()
            }
            Phase::DestroyBrown => self.destroy_actions(CardColor::Brown),
            Phase::DestroyGray => self.destroy_actions(CardColor::Gray),
            Phase::SelectDiscarded => self
                .discard_pile
                .iter()
                .map(|&card| Action::PickDiscardedCard { card })
                .collect(),
            Phase::Finished => Vec::new(),
        }
    }

    fn destroy_actions(&self, color: CardColor) -> Vec<Action> {
        self.players[self.opponent_index()]
            .cards
            .iter()
            .filter(|&&card| self.catalog.card(card).color == color)
            .map(|&card| Action::DestroyCard { card })
            .collect()
    }

    fn normal_actions(&mut self) -> Vec<Action> {
        let available = self.board.available_cards();
        let coins = self.players[self.current_player].coins;

        let mut actions: Vec<Action> = available
            .iter()
            .map(|&(card, pos)| Action::DiscardCard { card, pos })
            .collect();

        for &(card, pos) in &available {
            if self.card_price(card) < coins {
                actions.push(Action::BuyCard { card, pos });
            }
        }

        let unbuilt: Vec<WonderId> = self.players[self.current_player]
            .wonders
            .iter()
            .filter(|slot| !slot.is_built())
            .map(|slot| slot.wonder)
            .collect();
        for &(card, pos) in &available {
            for &wonder in &unbuilt {
                if self.wonder_price(wonder) < coins {
                    actions.push(Action::BuildWonder { wonder, card, pos });
                }
            }
        }

        actions
    }

    /// Validate `action` against the current legal set, apply it, resolve
    /// its cascading effects, and advance the phase machine.
    pub fn apply_action(&mut self, action: &Action, events: &mut EventBus) -> Result<(), GameError> {
        if self.phase == Phase::Finished {
            return Err(GameError::Finished);
        }
        if !self.legal_actions().contains(action) {
            return Err(GameError::IllegalAction);
        }

        match *action {
            Action::BuyCard { card, .. } => {
                self.board.take_card(card)?;
                self.buy_card(card, events)?;
            }
            Action::DiscardCard { card, .. } => {
                let player = self.current_player;
                self.board.take_card(card)?;
                self.discard_pile.push(card);
                let coins = self.players[player].discard_bonus(self.config.discard_base_coins);
                self.players[player].coins += coins;
                events.push(Event::CardDiscarded { player, card, coins });
            }
            Action::DestroyCard { card } => {
                let opponent = self.opponent_index();
                let def = self.catalog.card(card).clone();
                self.players[opponent].destroy_card(&def);
                self.discard_pile.push(card);
                self.invalidate_cache(opponent, &def.bonuses);
                self.phase = Phase::NormalTurn;
                events.push(Event::CardDestroyed {
                    player: opponent,
                    card,
                });
            }
            Action::PickWonder { wonder } => {
                let player = self.current_player;
                self.players[player].add_wonder(wonder);
                self.wonder_pool.retain(|&id| id != wonder);
                events.push(Event::WonderDrafted { player, wonder });
                if self.wonder_pool.is_empty() {
                    self.phase = Phase::NormalTurn;
                    self.current_player = 0;
                } else {
                    let picks_made = WONDER_DRAFT_SIZE - self.wonder_pool.len();
                    self.current_player = WONDER_DRAFT_ORDER[picks_made];
                }
            }
            Action::BuildWonder { wonder, card, .. } => {
                self.board.take_card(card)?;
                if self.players[self.current_player].has_theology() {
                    self.double_turn = true;
                }
                self.build_wonder(wonder, card, events)?;
            }
            Action::PickStartPlayer { player } => {
                // The picked index is the player who will move second.
                self.current_player = 1 - player;
                self.phase = Phase::NormalTurn;
                events.push(Event::StartPlayerPicked { second: player });
            }
            Action::PickProgressToken { token } => {
                let player = self.current_player;
                let def = self.catalog.token(token).clone();
                self.players[player].add_progress_token(&def);
                self.apply_instants(player, &def.instants, false, events);
                self.progress_tokens.retain(|&t| t != token);
                self.rest_progress_tokens.retain(|&t| t != token);
                self.invalidate_cache(player, &def.bonuses);
                self.phase = Phase::NormalTurn;
                events.push(Event::ProgressTokenPicked { player, token });
            }
            Action::PickDiscardedCard { card } => {
                let player = self.current_player;
                if let Some(index) = self.discard_pile.iter().position(|&c| c == card) {
                    self.discard_pile.remove(index);
                }
                self.add_card_to(player, card, events);
                if self.phase == Phase::SelectDiscarded {
                    self.phase = Phase::NormalTurn;
                }
                events.push(Event::DiscardedCardTaken { player, card });
            }
        }

        self.finish_turn(events);
        Ok(())
    }

    fn buy_card(&mut self, card: CardId, events: &mut EventBus) -> Result<(), GameError> {
        let player = self.current_player;
        let price = self.card_price(card);
        let coins = self.players[player].coins;
        if price > coins {
            return Err(GameError::CannotAfford { price, coins });
        }
        self.players[player].coins -= price;

        let base = self.catalog.card(card).price.coins;
        let opponent = 1 - player;
        if self.players[opponent].has_economy() && price > 0 {
            self.players[opponent].coins += price - base;
        }

        self.add_card_to(player, card, events);
        events.push(Event::CardBought {
            player,
            card,
            price,
        });
        Ok(())
    }

    fn add_card_to(&mut self, player: usize, card: CardId, events: &mut EventBus) {
        let doubles_before = self.players[player].science_doubles();
        let def = self.catalog.card(card).clone();
        self.players[player].add_card(&def);
        self.apply_instants(player, &def.instants, true, events);
        if doubles_before != self.players[player].science_doubles()
            && !self.progress_tokens.is_empty()
        {
            self.phase = Phase::PickProgressToken;
        }
        self.invalidate_cache(player, &def.bonuses);
    }

    fn build_wonder(
        &mut self,
        wonder: WonderId,
        card: CardId,
        events: &mut EventBus,
    ) -> Result<(), GameError> {
        let player = self.current_player;
        let price = self.wonder_price(wonder);
        let coins = self.players[player].coins;
        if price > coins {
            return Err(GameError::CannotAfford { price, coins });
        }
        self.players[player].coins -= price;

        let def = self.catalog.wonder(wonder).clone();
        let opponent = 1 - player;
        if self.players[opponent].has_economy() {
            self.players[opponent].coins += price - def.price.coins;
        }

        self.players[player].build_wonder(&def, card);
        self.apply_instants(player, &def.instants, false, events);

        if self.players[0].built_wonders() + self.players[1].built_wonders() == WONDER_BUILD_CAP {
            self.players[0].remove_unbuilt_wonders();
            self.players[1].remove_unbuilt_wonders();
        }

        self.invalidate_cache(player, &def.bonuses);
        events.push(Event::WonderBuilt {
            player,
            wonder,
            card,
            price,
        });
        Ok(())
    }

    fn apply_instants(
        &mut self,
        player: usize,
        instants: &[(InstantEffect, i64)],
        is_card: bool,
        events: &mut EventBus,
    ) {
        let opponent = 1 - player;
        for &(effect, value) in instants {
            if value == 0 {
                continue;
            }
            match effect {
                InstantEffect::Coins => self.players[player].coins += value,
                InstantEffect::Shield => {
                    let mut shields = value as i32;
                    if is_card && self.players[player].has_strategy() {
                        shields += 1;
                    }
                    let players = &mut self.players;
                    let mut lost = Vec::new();
                    self.military.apply_shields(player, shields, |loser, coins| {
                        players[loser].coins = (players[loser].coins + coins).max(0);
                        lost.push((loser, coins));
                    });
                    events.push(Event::ConflictPawnMoved {
                        position: self.military.conflict_pawn,
                    });
                    for (loser, coins) in lost {
                        events.push(Event::MilitaryTokenLost {
                            player: loser,
                            coins,
                        });
                    }
                }
                InstantEffect::BrownCoins => {
                    self.players[player].coins +=
                        value * self.players[player].color_count(CardColor::Brown) as i64;
                }
                InstantEffect::GrayCoins => {
                    self.players[player].coins +=
                        value * self.players[player].color_count(CardColor::Gray) as i64;
                }
                InstantEffect::RedCoins => {
                    self.players[player].coins +=
                        value * self.players[player].color_count(CardColor::Red) as i64;
                }
                InstantEffect::YellowCoins => {
                    self.players[player].coins +=
                        value * self.players[player].color_count(CardColor::Yellow) as i64;
                }
                InstantEffect::WonderCoins => {
                    self.players[player].coins +=
                        value * self.players[player].built_wonders() as i64;
                }
                InstantEffect::BlueMaxCoins => {
                    self.players[player].coins += value * self.max_color(CardColor::Blue);
                }
                InstantEffect::BrownGrayMaxCoins => {
                    let most = self
                        .players
                        .iter()
                        .map(|p| {
                            p.color_count(CardColor::Brown) + p.color_count(CardColor::Gray)
                        })
                        .max()
                        .unwrap_or(0) as i64;
                    self.players[player].coins += value * most;
                }
                InstantEffect::GreenMaxCoins => {
                    self.players[player].coins += value * self.max_color(CardColor::Green);
                }
                InstantEffect::RedMaxCoins => {
                    self.players[player].coins += value * self.max_color(CardColor::Red);
                }
                InstantEffect::YellowMaxCoins => {
                    self.players[player].coins += value * self.max_color(CardColor::Yellow);
                }
                InstantEffect::OpponentCoins => {
                    self.players[opponent].coins =
                        (self.players[opponent].coins + value).max(0);
                }
                InstantEffect::DoubleTurn => self.double_turn = true,
                InstantEffect::DestroyBrown => {
                    if self.players[opponent].color_count(CardColor::Brown) > 0 {
                        self.phase = Phase::DestroyBrown;
                    }
                }
                InstantEffect::DestroyGray => {
                    if self.players[opponent].color_count(CardColor::Gray) > 0 {
                        self.phase = Phase::DestroyGray;
                    }
                }
                InstantEffect::SelectProgressToken => {
                    self.rng.shuffle(&mut self.rest_progress_tokens);
                    self.phase = Phase::PickRestProgressToken;
                }
                InstantEffect::SelectDiscarded => {
                    if !self.discard_pile.is_empty() {
                        self.phase = Phase::SelectDiscarded;
                    }
                }
            }
        }
    }

    fn max_color(&self, color: CardColor) -> i64 {
        self.players
            .iter()
            .map(|p| p.color_count(color))
            .max()
            .unwrap_or(0) as i64
    }

    fn invalidate_cache(&mut self, owner: usize, bonuses: &[(crate::Bonus, u32)]) {
        if let Some(cache) = &mut self.price_cache {
            cache.invalidate(owner, bonuses);
        }
    }

    /// End-of-action bookkeeping: win detection, then age/turn advance.
    fn finish_turn(&mut self, events: &mut EventBus) {
        self.winner = self.check_end_game();
        if let Some(winner) = self.winner {
            self.phase = Phase::Finished;
            events.push(Event::GameFinished { winner });
            return;
        }

        if self.phase == Phase::NormalTurn {
            if self.board.slot_count() == 0 {
                self.age = 0;
                self.current_player = 0;
                self.start_age(events);
            } else if self.board.available_cards().is_empty() {
                self.age += 1;
                self.start_age(events);
                self.double_turn = false;
                if let Some(weaker) = self.military.weaker_player() {
                    self.current_player = weaker;
                    self.phase = Phase::PickStartPlayer;
                }
            } else {
                if !self.double_turn {
                    self.current_player = 1 - self.current_player;
                }
                self.double_turn = false;
            }
        }
    }

    fn start_age(&mut self, events: &mut EventBus) {
        let deck = self.catalog.age_deck(self.age);
        let guild_deck = if self.age == 2 {
            self.catalog.guild_deck()
        } else {
            Vec::new()
        };
        let preset = self
            .preset
            .as_ref()
            .map(|preset| preset[self.age as usize].clone());
        self.board
            .generate_age(self.age, deck, guild_deck, preset, &mut self.rng);
        events.push(Event::AgeStarted { age: self.age });
    }

    fn check_end_game(&self) -> Option<Winner> {
        if !matches!(self.phase, Phase::NormalTurn | Phase::Finished) {
            return None;
        }

        for (index, player) in self.players.iter().enumerate() {
            if player.science_distinct() >= self.config.science_goal {
                return Some(Winner::Player(index));
            }
        }

        if let Some(player) = self.military.supremacist() {
            return Some(Winner::Player(player));
        }

        if self.age == 2 && self.board.available_cards().is_empty() {
            let totals: Vec<i64> = (0..2).map(|index| self.score(index).total()).collect();
            if totals[0] != totals[1] {
                return Some(Winner::Player(if totals[0] > totals[1] { 0 } else { 1 }));
            }
            let blues: Vec<i64> = self
                .players
                .iter()
                .map(|player| scoring::blue_points(&self.catalog, player))
                .collect();
            if blues[0] != blues[1] {
                return Some(Winner::Player(if blues[0] > blues[1] { 0 } else { 1 }));
            }
            return Some(Winner::Draw);
        }

        None
    }

    pub fn score(&self, player_index: usize) -> crate::ScoreBreakdown {
        scoring::score_breakdown(&self.players, &self.military, player_index)
    }

    pub fn scores(&self) -> [crate::ScoreBreakdown; 2] {
        [self.score(0), self.score(1)]
    }
}
