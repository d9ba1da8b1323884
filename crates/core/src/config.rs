use serde::{Deserialize, Serialize};

/// Tunable rule values. Structural rules (layouts, the wonder draft
/// hand-off, military thresholds) are code, not configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    #[serde(default = "default_starting_coins")]
    pub starting_coins: i64,
    #[serde(default = "default_drafted_tokens")]
    pub drafted_tokens: usize,
    #[serde(default = "default_offered_rest_tokens")]
    pub offered_rest_tokens: usize,
    #[serde(default = "default_discard_base_coins")]
    pub discard_base_coins: i64,
    #[serde(default = "default_science_goal")]
    pub science_goal: usize,
}

fn default_starting_coins() -> i64 {
    7
}

fn default_drafted_tokens() -> usize {
    5
}

fn default_offered_rest_tokens() -> usize {
    3
}

fn default_discard_base_coins() -> i64 {
    2
}

fn default_science_goal() -> usize {
    6
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_coins: default_starting_coins(),
            drafted_tokens: default_drafted_tokens(),
            offered_rest_tokens: default_offered_rest_tokens(),
            discard_base_coins: default_discard_base_coins(),
            science_goal: default_science_goal(),
        }
    }
}
