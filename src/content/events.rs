//! Event definitions: each event offers options with a closed effect
//! enum, resolved by the run state while the event screen is active.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::constants::{CLERIC_FULL_HEAL_COST, CLERIC_HEAL_FRACTION};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EventEffect {
    /// Heal a fraction of max hp, free.
    HealFraction(f64),
    /// Full heal for a gold price; fails without the gold.
    FullHealForGold(u32),
    GainGold(u32),
    /// Gain gold at the cost of hp (hp loss cannot go below 1).
    GainGoldLoseHp { gold: u32, hp: u32 },
    GainRandomRelic,
    UpgradeRandomCard,
    Leave,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventOption {
    pub text: String,
    pub effect: EventEffect,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub name: String,
    pub description: String,
    pub options: Vec<EventOption>,
}

fn option(text: &str, effect: EventEffect) -> EventOption {
    EventOption {
        text: text.to_string(),
        effect,
    }
}

pub fn all_events() -> Vec<Event> {
    vec![
        Event {
            id: "cleric".to_string(),
            name: "The Cleric".to_string(),
            description: "A friendly cleric offers healing.".to_string(),
            options: vec![
                option(
                    "Heal 25% of your max HP (free)",
                    EventEffect::HealFraction(CLERIC_HEAL_FRACTION),
                ),
                option(
                    "Heal to full (35 gold)",
                    EventEffect::FullHealForGold(CLERIC_FULL_HEAL_COST),
                ),
                option("Leave", EventEffect::Leave),
            ],
        },
        Event {
            id: "golden_idol".to_string(),
            name: "Golden Idol".to_string(),
            description: "A gleaming idol rests on a trapped pedestal.".to_string(),
            options: vec![
                option(
                    "Take it (gain 75 gold, lose 10 HP)",
                    EventEffect::GainGoldLoseHp { gold: 75, hp: 10 },
                ),
                option("Leave", EventEffect::Leave),
            ],
        },
        Event {
            id: "the_shrine".to_string(),
            name: "The Shrine".to_string(),
            description: "An ancient shrine hums with power.".to_string(),
            options: vec![
                option("Pray (upgrade a random card)", EventEffect::UpgradeRandomCard),
                option("Desecrate (gain a random relic)", EventEffect::GainRandomRelic),
                option("Leave", EventEffect::Leave),
            ],
        },
    ]
}

pub fn event_by_id(id: &str) -> Option<Event> {
    all_events().into_iter().find(|e| e.id == id)
}

pub fn random_event(rng: &mut impl Rng) -> Option<Event> {
    all_events().choose(rng).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_event_has_a_leave_option() {
        for event in all_events() {
            assert!(
                event
                    .options
                    .iter()
                    .any(|o| o.effect == EventEffect::Leave),
                "event {} has no leave option",
                event.id
            );
        }
    }
}
