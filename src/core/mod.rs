//! Run-level state: tuning constants, reward bundles, and the run
//! state machine.

pub mod constants;
pub mod game_state;
pub mod rewards;

pub use game_state::{GameStatus, RunState, Screen};
pub use rewards::BattleReward;
