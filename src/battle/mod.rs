//! Turn-based battle engine and its combatant, card, and intent types.

pub mod logic;
pub mod types;

pub use logic::Battle;
pub use types::{BattleStatus, Card, Enemy, IntentPreview, PlayResult, PlayerCombatant};
