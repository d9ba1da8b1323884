use crate::{Agent, AutoplayError, RunReport, RunStatus, RunTrace, StepRecord};
use duelis_core::{EventBus, Game};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Applied,
    Finished,
    NoLegalAction,
}

pub struct GameRunner {
    pub game: Game,
    pub events: EventBus,
    agents: [Box<dyn Agent>; 2],
    pub trace: RunTrace,
    steps: u32,
}

impl GameRunner {
    pub fn new(game: Game, agents: [Box<dyn Agent>; 2]) -> Self {
        let seed = game.rng.seed();
        Self {
            game,
            events: EventBus::default(),
            agents,
            trace: RunTrace::new(seed),
            steps: 0,
        }
    }

    pub fn step(&mut self) -> Result<StepOutcome, AutoplayError> {
        if self.game.is_finished() {
            return Ok(StepOutcome::Finished);
        }
        let legal = self.game.legal_actions();
        if legal.is_empty() {
            return Ok(StepOutcome::NoLegalAction);
        }

        let player = self.game.current_player;
        let phase_before = self.game.phase;
        let events_before = self.events.len();
        let action = self.agents[player]
            .choose_action(&self.game, &legal)
            .ok_or(AutoplayError::NoAction)?;
        self.game.apply_action(&action, &mut self.events)?;
        self.agents[player].on_action_applied(&action, &self.game);

        self.steps += 1;
        self.trace.steps.push(StepRecord {
            step: self.steps,
            player,
            phase_before,
            action,
            phase_after: self.game.phase,
            event_count: self.events.len() - events_before,
        });
        Ok(StepOutcome::Applied)
    }

    pub fn run(&mut self, max_steps: u32) -> Result<RunReport, AutoplayError> {
        let status = loop {
            if self.steps >= max_steps {
                break RunStatus::MaxSteps;
            }
            match self.step()? {
                StepOutcome::Applied => continue,
                StepOutcome::Finished => break RunStatus::Finished,
                StepOutcome::NoLegalAction => break RunStatus::NoLegalAction,
            }
        };
        Ok(RunReport {
            status,
            steps: self.steps,
            winner: self.game.winner,
            scores: self.game.scores(),
        })
    }
}
