//! Relic definitions, lookups, and the relic capability table.
//!
//! Relic passives are resolved once into `RelicHooks` (a fold over
//! owned relic ids into typed hook values) instead of scattering id
//! membership checks through battle and reward code.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::battle::types::Character;
use crate::core::constants::{
    ANCHOR_BLOCK, BAG_OF_MARBLES_VULNERABLE, BATTLE_START_DRAW_RELIC_CARDS, BURNING_BLOOD_HEAL,
    LANTERN_ENERGY,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RelicRarity {
    Common,
    Uncommon,
    Rare,
    Boss,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relic {
    pub id: String,
    pub name: String,
    pub rarity: RelicRarity,
    pub description: String,
}

fn relic(id: &str, name: &str, rarity: RelicRarity, description: &str) -> Relic {
    Relic {
        id: id.to_string(),
        name: name.to_string(),
        rarity,
        description: description.to_string(),
    }
}

pub fn all_relics() -> Vec<Relic> {
    vec![
        relic(
            "burning_blood",
            "Burning Blood",
            RelicRarity::Boss,
            "At the end of each battle, heal 6 HP.",
        ),
        relic(
            "ring_of_the_snake",
            "Ring of the Snake",
            RelicRarity::Boss,
            "At the start of each battle, draw 2 additional cards.",
        ),
        relic(
            "cracked_core",
            "Cracked Core",
            RelicRarity::Boss,
            "At the start of each battle, channel 1 orb slot.",
        ),
        relic(
            "pure_water",
            "Pure Water",
            RelicRarity::Boss,
            "At the start of each battle, add a Miracle to your hand.",
        ),
        relic(
            "lantern",
            "Lantern",
            RelicRarity::Common,
            "Gain 1 additional energy at the start of each turn.",
        ),
        relic(
            "anchor",
            "Anchor",
            RelicRarity::Common,
            "Start each battle with 10 Block.",
        ),
        relic(
            "bag_of_marbles",
            "Bag of Marbles",
            RelicRarity::Common,
            "At the start of each battle, apply 1 Vulnerable to all enemies.",
        ),
        relic(
            "bag_of_preparation",
            "Bag of Preparation",
            RelicRarity::Common,
            "At the start of each battle, draw 2 additional cards.",
        ),
        relic(
            "bloody_idol",
            "Bloody Idol",
            RelicRarity::Common,
            "Whenever you gain gold, heal 5 HP.",
        ),
        relic(
            "bronze_scales",
            "Bronze Scales",
            RelicRarity::Common,
            "Whenever you take attack damage, deal 3 damage back.",
        ),
        relic(
            "barricade",
            "Barricade",
            RelicRarity::Uncommon,
            "Block is not removed at the start of your turn.",
        ),
        relic(
            "centennial_puzzle",
            "Centennial Puzzle",
            RelicRarity::Common,
            "The first time you lose HP each battle, draw 3 cards.",
        ),
    ]
}

pub fn relic_by_id(id: &str) -> Option<Relic> {
    all_relics().into_iter().find(|r| r.id == id)
}

pub fn starting_relic(character: Character) -> Relic {
    let id = match character {
        Character::Ironclad => "burning_blood",
        Character::Silent => "ring_of_the_snake",
        Character::Defect => "cracked_core",
        Character::Watcher => "pure_water",
    };
    relic_by_id(id).unwrap_or_else(|| {
        relic(
            "burning_blood",
            "Burning Blood",
            RelicRarity::Boss,
            "At the end of each battle, heal 6 HP.",
        )
    })
}

pub fn random_relic(rarity: RelicRarity, rng: &mut impl Rng) -> Option<Relic> {
    let pool: Vec<Relic> = all_relics()
        .into_iter()
        .filter(|r| r.rarity == rarity)
        .collect();
    pool.choose(rng).cloned()
}

/// A relic not in the boss tier, for elite rewards and treasure nodes.
pub fn random_non_boss_relic(rng: &mut impl Rng) -> Option<Relic> {
    let pool: Vec<Relic> = all_relics()
        .into_iter()
        .filter(|r| r.rarity != RelicRarity::Boss)
        .collect();
    pool.choose(rng).cloned()
}

/// Typed hook values resolved from an owned relic set. Duplicate relics
/// stack their numeric hooks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RelicHooks {
    pub battle_start_draw: u32,
    pub battle_start_block: u32,
    pub battle_start_enemy_vulnerable: u32,
    pub turn_start_energy: u32,
    pub preserve_block: bool,
    pub reward_heal: u32,
}

impl RelicHooks {
    pub fn from_relics(relics: &[Relic]) -> Self {
        let mut hooks = Self::default();
        for relic in relics {
            match relic.id.as_str() {
                "burning_blood" => hooks.reward_heal += BURNING_BLOOD_HEAL,
                "lantern" => hooks.turn_start_energy += LANTERN_ENERGY,
                "anchor" => hooks.battle_start_block += ANCHOR_BLOCK,
                "bag_of_marbles" => {
                    hooks.battle_start_enemy_vulnerable += BAG_OF_MARBLES_VULNERABLE
                }
                "ring_of_the_snake" | "bag_of_preparation" => {
                    hooks.battle_start_draw += BATTLE_START_DRAW_RELIC_CARDS
                }
                "barricade" => hooks.preserve_block = true,
                _ => {}
            }
        }
        hooks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_relic_ironclad() {
        let relic = starting_relic(Character::Ironclad);
        assert_eq!(relic.id, "burning_blood");
        assert_eq!(relic.rarity, RelicRarity::Boss);
    }

    #[test]
    fn test_hooks_fold() {
        let relics = vec![
            relic_by_id("burning_blood").unwrap(),
            relic_by_id("lantern").unwrap(),
            relic_by_id("anchor").unwrap(),
            relic_by_id("barricade").unwrap(),
        ];
        let hooks = RelicHooks::from_relics(&relics);
        assert_eq!(hooks.reward_heal, 6);
        assert_eq!(hooks.turn_start_energy, 1);
        assert_eq!(hooks.battle_start_block, 10);
        assert!(hooks.preserve_block);
        assert_eq!(hooks.battle_start_draw, 0);
    }

    #[test]
    fn test_hooks_stack_duplicates() {
        let relics = vec![
            relic_by_id("lantern").unwrap(),
            relic_by_id("lantern").unwrap(),
        ];
        let hooks = RelicHooks::from_relics(&relics);
        assert_eq!(hooks.turn_start_energy, 2);
    }

    #[test]
    fn test_unhooked_relic_is_inert() {
        let relics = vec![relic_by_id("bronze_scales").unwrap()];
        assert_eq!(RelicHooks::from_relics(&relics), RelicHooks::default());
    }
}
