//! Core engine for a turn-based deckbuilding roguelike: card battles
//! against scripted enemy intents, a branching act map, shops, events,
//! and the run state machine that ties them together.
//!
//! The crate is headless. A frontend drives it by calling operations
//! on [`crate::core::RunState`] and rendering whatever state results; all
//! randomness comes in through `rand::Rng` parameters so runs can be
//! replayed from a seed.

pub mod battle;
pub mod content;
pub mod core;
pub mod map;
pub mod shop;
