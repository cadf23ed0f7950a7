//! Static content tables (cards, monsters, relics, potions, events).
//!
//! Pure lookup, no game-logic state: the core consumes these through
//! by-id, by-filter, and random-pick contracts only.

pub mod cards;
pub mod events;
pub mod monsters;
pub mod potions;
pub mod relics;
