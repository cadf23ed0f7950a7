//! Potion definitions: consumables with a closed effect enum, applied
//! by the run state (battle-only effects refuse outside battle).

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PotionEffect {
    GainStrength(i32),
    GainBlock(u32),
    Heal(u32),
    GainEnergy(u32),
    DamageTarget(u32),
    DamageAll(u32),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Potion {
    pub id: String,
    pub name: String,
    pub description: String,
    pub effect: PotionEffect,
}

fn potion(id: &str, name: &str, description: &str, effect: PotionEffect) -> Potion {
    Potion {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        effect,
    }
}

pub fn all_potions() -> Vec<Potion> {
    vec![
        potion(
            "strength_potion",
            "Strength Potion",
            "Gain 2 Strength.",
            PotionEffect::GainStrength(2),
        ),
        potion(
            "block_potion",
            "Block Potion",
            "Gain 12 Block.",
            PotionEffect::GainBlock(12),
        ),
        potion(
            "heal_potion",
            "Healing Potion",
            "Heal 10 HP.",
            PotionEffect::Heal(10),
        ),
        potion(
            "energy_potion",
            "Energy Potion",
            "Gain 2 energy.",
            PotionEffect::GainEnergy(2),
        ),
        potion(
            "fire_potion",
            "Fire Potion",
            "Deal 20 damage to an enemy.",
            PotionEffect::DamageTarget(20),
        ),
        potion(
            "explosive_potion",
            "Explosive Potion",
            "Deal 10 damage to all enemies.",
            PotionEffect::DamageAll(10),
        ),
    ]
}

pub fn potion_by_id(id: &str) -> Option<Potion> {
    all_potions().into_iter().find(|p| p.id == id)
}

pub fn random_potion(rng: &mut impl Rng) -> Option<Potion> {
    all_potions().choose(rng).cloned()
}
