use crate::AutoplayError;
use duelis_core::{Action, Phase, ScoreBreakdown, Winner};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RunStatus {
    Finished,
    MaxSteps,
    NoLegalAction,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StepRecord {
    pub step: u32,
    pub player: usize,
    pub phase_before: Phase,
    pub action: Action,
    pub phase_after: Phase,
    pub event_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunTrace {
    pub seed: u64,
    pub steps: Vec<StepRecord>,
}

impl RunTrace {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            steps: Vec::new(),
        }
    }

    pub fn actions(&self) -> Vec<Action> {
        self.steps.iter().map(|step| step.action.clone()).collect()
    }

    pub fn save(&self, path: &Path) -> Result<(), AutoplayError> {
        let raw = serde_json::to_string_pretty(self)?;
        fs::write(path, raw)?;
        Ok(())
    }

    pub fn load(path: &Path) -> Result<RunTrace, AutoplayError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub status: RunStatus,
    pub steps: u32,
    pub winner: Option<Winner>,
    pub scores: [ScoreBreakdown; 2],
}
