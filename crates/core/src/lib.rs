//! Core game logic. Keep this crate free of IO and platform concerns.

pub mod actions;
pub mod assets;
pub mod board;
pub mod bonus;
pub mod cache;
pub mod config;
pub mod content;
pub mod effects;
pub mod events;
pub mod game;
pub mod military;
pub mod player;
pub mod rng;
pub mod scoring;

pub use actions::*;
pub use assets::*;
pub use board::*;
pub use bonus::*;
pub use cache::*;
pub use config::*;
pub use content::*;
pub use effects::*;
pub use events::*;
pub use game::*;
pub use military::*;
pub use player::*;
pub use rng::*;
pub use scoring::*;
