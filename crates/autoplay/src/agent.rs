use duelis_core::{Action, Game, RngState};
use std::collections::VecDeque;

/// One decision per turn: pick an action from the legal set. The engine
/// blocks on this call; it is the only place an external wait may occur.
pub trait Agent {
    fn choose_action(&mut self, game: &Game, legal: &[Action]) -> Option<Action>;

    fn on_action_applied(&mut self, _action: &Action, _game: &Game) {}
}

#[derive(Debug)]
pub struct RandomAgent {
    rng: RngState,
}

impl RandomAgent {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: RngState::from_seed(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn choose_action(&mut self, _game: &Game, legal: &[Action]) -> Option<Action> {
        if legal.is_empty() {
            return None;
        }
        legal.get(self.rng.gen_range(legal.len())).cloned()
    }
}

#[derive(Debug)]
pub struct ScriptedAgent {
    actions: VecDeque<Action>,
}

impl ScriptedAgent {
    pub fn new(actions: Vec<Action>) -> Self {
        Self {
            actions: actions.into(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.actions.len()
    }
}

impl Agent for ScriptedAgent {
    fn choose_action(&mut self, _game: &Game, legal: &[Action]) -> Option<Action> {
        let recorded = self.actions.pop_front()?;
        let key = recorded.stable_key();
        legal.iter().find(|action| action.stable_key() == key).cloned()
    }
}
