//! Post-battle reward bundles.
//!
//! A reward is rolled once at victory and then accepted piecewise; the
//! run state applies whatever the player takes.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::battle::types::{Card, Character};
use crate::content::cards::random_card_choices;
use crate::content::potions::{random_potion, Potion};
use crate::content::relics::{random_non_boss_relic, random_relic, Relic, RelicRarity};
use crate::core::constants::{
    REWARD_CARD_CHOICES, REWARD_GOLD_BOSS_BONUS, REWARD_GOLD_ELITE_BONUS, REWARD_GOLD_MIN,
    REWARD_GOLD_SPREAD, REWARD_POTION_CHANCE,
};
use crate::map::types::NodeKind;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleReward {
    pub gold: u32,
    /// Distinct card offers; the player takes at most one.
    pub card_choices: Vec<Card>,
    /// Present only for elite and boss victories.
    pub relic: Option<Relic>,
    pub potion: Option<Potion>,
}

/// Rolls the reward bundle for a won battle at the given node tier.
pub fn generate_battle_reward(
    node_kind: NodeKind,
    character: Character,
    rng: &mut impl Rng,
) -> BattleReward {
    let mut gold = REWARD_GOLD_MIN + rng.gen_range(0..REWARD_GOLD_SPREAD);
    match node_kind {
        NodeKind::Elite => gold += REWARD_GOLD_ELITE_BONUS,
        NodeKind::Boss => gold += REWARD_GOLD_BOSS_BONUS,
        _ => {}
    }

    let card_choices = random_card_choices(character, REWARD_CARD_CHOICES, rng);

    let relic = match node_kind {
        NodeKind::Elite => random_non_boss_relic(rng),
        NodeKind::Boss => random_relic(RelicRarity::Boss, rng),
        _ => None,
    };

    let potion = if rng.gen_bool(REWARD_POTION_CHANCE) {
        random_potion(rng)
    } else {
        None
    };

    BattleReward {
        gold,
        card_choices,
        relic,
        potion,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_normal_reward_has_no_relic() {
        for seed in 0..10u64 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let reward = generate_battle_reward(NodeKind::Monster, Character::Ironclad, &mut rng);
            assert!(reward.relic.is_none());
            assert!(reward.gold >= REWARD_GOLD_MIN);
            assert!(reward.gold < REWARD_GOLD_MIN + REWARD_GOLD_SPREAD);
            assert_eq!(reward.card_choices.len(), REWARD_CARD_CHOICES);
        }
    }

    #[test]
    fn test_card_choices_are_distinct() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let reward = generate_battle_reward(NodeKind::Monster, Character::Ironclad, &mut rng);
        let mut ids: Vec<&str> = reward.card_choices.iter().map(|c| c.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), reward.card_choices.len());
    }

    #[test]
    fn test_elite_reward_has_bonus_gold_and_relic() {
        for seed in 0..10u64 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let reward = generate_battle_reward(NodeKind::Elite, Character::Ironclad, &mut rng);
            assert!(reward.gold >= REWARD_GOLD_MIN + REWARD_GOLD_ELITE_BONUS);
            let relic = reward.relic.expect("elite reward must carry a relic");
            assert_ne!(relic.rarity, RelicRarity::Boss);
        }
    }

    #[test]
    fn test_boss_reward_has_boss_relic() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let reward = generate_battle_reward(NodeKind::Boss, Character::Ironclad, &mut rng);
        assert!(reward.gold >= REWARD_GOLD_MIN + REWARD_GOLD_BOSS_BONUS);
        let relic = reward.relic.expect("boss reward must carry a relic");
        assert_eq!(relic.rarity, RelicRarity::Boss);
    }

    #[test]
    fn test_potion_appears_sometimes() {
        let mut with = 0;
        let mut without = 0;
        for seed in 0..40u64 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let reward = generate_battle_reward(NodeKind::Monster, Character::Ironclad, &mut rng);
            if reward.potion.is_some() {
                with += 1;
            } else {
                without += 1;
            }
        }
        assert!(with > 0);
        assert!(without > 0);
    }
}
