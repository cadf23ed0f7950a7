//! Card definitions and lookup contracts.
//!
//! Pure data feed: the battle engine never reaches in here, it only
//! consumes `Card` values handed to it by the run state.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::battle::types::{Card, CardCost, CardKind, CardRarity, Character};
use crate::core::constants::BURN_DAMAGE;

fn card(id: &str, name: &str, kind: CardKind, rarity: CardRarity, cost: u32) -> Card {
    Card {
        id: id.to_string(),
        name: name.to_string(),
        kind,
        rarity,
        character: Character::Ironclad,
        cost: CardCost::Fixed(cost),
        damage: 0,
        block: 0,
        vulnerable: 0,
        weak: 0,
        strength: 0,
        draw: 0,
        hits: 0,
        aoe: false,
        exhaust: false,
        ethereal: false,
        end_turn_damage: 0,
        upgraded: false,
    }
}

/// The full card table. Rebuilt on each call; callers clone what they
/// keep, so the table itself stays immutable.
pub fn all_cards() -> Vec<Card> {
    let mut cards = Vec::new();

    // Basics
    let mut strike = card("strike", "Strike", CardKind::Attack, CardRarity::Basic, 1);
    strike.damage = 6;
    cards.push(strike);

    let mut defend = card("defend", "Defend", CardKind::Skill, CardRarity::Basic, 1);
    defend.block = 5;
    cards.push(defend);

    let mut bash = card("bash", "Bash", CardKind::Attack, CardRarity::Basic, 2);
    bash.damage = 8;
    bash.vulnerable = 2;
    cards.push(bash);

    // Commons
    let mut cleave = card("cleave", "Cleave", CardKind::Attack, CardRarity::Common, 1);
    cleave.damage = 8;
    cleave.aoe = true;
    cards.push(cleave);

    let mut twin_strike = card(
        "twin_strike",
        "Twin Strike",
        CardKind::Attack,
        CardRarity::Common,
        1,
    );
    twin_strike.damage = 5;
    twin_strike.hits = 2;
    cards.push(twin_strike);

    let mut pommel_strike = card(
        "pommel_strike",
        "Pommel Strike",
        CardKind::Attack,
        CardRarity::Common,
        1,
    );
    pommel_strike.damage = 9;
    pommel_strike.draw = 1;
    cards.push(pommel_strike);

    let mut shrug_it_off = card(
        "shrug_it_off",
        "Shrug It Off",
        CardKind::Skill,
        CardRarity::Common,
        1,
    );
    shrug_it_off.block = 8;
    shrug_it_off.draw = 1;
    cards.push(shrug_it_off);

    let mut iron_wave = card(
        "iron_wave",
        "Iron Wave",
        CardKind::Attack,
        CardRarity::Common,
        1,
    );
    iron_wave.damage = 5;
    iron_wave.block = 5;
    cards.push(iron_wave);

    let mut clothesline = card(
        "clothesline",
        "Clothesline",
        CardKind::Attack,
        CardRarity::Common,
        2,
    );
    clothesline.damage = 12;
    clothesline.weak = 2;
    cards.push(clothesline);

    let mut warcry = card("warcry", "Warcry", CardKind::Skill, CardRarity::Common, 0);
    warcry.draw = 2;
    warcry.exhaust = true;
    cards.push(warcry);

    // Uncommons
    let mut inflame = card(
        "inflame",
        "Inflame",
        CardKind::Power,
        CardRarity::Uncommon,
        1,
    );
    inflame.strength = 2;
    cards.push(inflame);

    let mut whirlwind = card(
        "whirlwind",
        "Whirlwind",
        CardKind::Attack,
        CardRarity::Uncommon,
        0,
    );
    whirlwind.cost = CardCost::Variable;
    whirlwind.damage = 5;
    whirlwind.aoe = true;
    cards.push(whirlwind);

    let mut uppercut = card(
        "uppercut",
        "Uppercut",
        CardKind::Attack,
        CardRarity::Uncommon,
        2,
    );
    uppercut.damage = 13;
    uppercut.weak = 1;
    uppercut.vulnerable = 1;
    cards.push(uppercut);

    // Rares
    let mut bludgeon = card(
        "bludgeon",
        "Bludgeon",
        CardKind::Attack,
        CardRarity::Rare,
        3,
    );
    bludgeon.damage = 32;
    cards.push(bludgeon);

    let mut impervious = card(
        "impervious",
        "Impervious",
        CardKind::Skill,
        CardRarity::Rare,
        2,
    );
    impervious.block = 30;
    impervious.exhaust = true;
    cards.push(impervious);

    // Statuses
    let mut burn = card("burn", "Burn", CardKind::Status, CardRarity::Special, 1);
    burn.ethereal = true;
    burn.end_turn_damage = BURN_DAMAGE;
    cards.push(burn);

    cards
}

pub fn card_by_id(id: &str) -> Option<Card> {
    all_cards().into_iter().find(|c| c.id == id)
}

pub fn cards_by_character(character: Character) -> Vec<Card> {
    all_cards()
        .into_iter()
        .filter(|c| c.character == character)
        .collect()
}

pub fn cards_by_rarity(rarity: CardRarity) -> Vec<Card> {
    all_cards()
        .into_iter()
        .filter(|c| c.rarity == rarity)
        .collect()
}

/// Cards that may appear as rewards or shop stock: the character's
/// pool minus basics, statuses, and curses.
pub fn reward_pool(character: Character) -> Vec<Card> {
    cards_by_character(character)
        .into_iter()
        .filter(|c| {
            c.rarity != CardRarity::Basic
                && c.rarity != CardRarity::Special
                && c.kind != CardKind::Status
                && c.kind != CardKind::Curse
        })
        .collect()
}

pub fn random_card(character: Character, rng: &mut impl Rng) -> Option<Card> {
    let pool = reward_pool(character);
    pool.choose(rng).cloned()
}

/// Draws `count` distinct cards from the character's reward pool.
/// Returns fewer when the pool is smaller than `count`.
pub fn random_card_choices(character: Character, count: usize, rng: &mut impl Rng) -> Vec<Card> {
    let pool = reward_pool(character);
    pool.choose_multiple(rng, count).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_card_by_id() {
        let strike = card_by_id("strike").unwrap();
        assert_eq!(strike.damage, 6);
        assert_eq!(strike.resolved_cost(), 1);
        assert!(card_by_id("nonexistent").is_none());
    }

    #[test]
    fn test_bash_applies_vulnerable() {
        let bash = card_by_id("bash").unwrap();
        assert_eq!(bash.damage, 8);
        assert_eq!(bash.vulnerable, 2);
        assert_eq!(bash.resolved_cost(), 2);
    }

    #[test]
    fn test_reward_pool_excludes_basics_and_statuses() {
        let pool = reward_pool(Character::Ironclad);
        assert!(!pool.is_empty());
        assert!(pool.iter().all(|c| c.rarity != CardRarity::Basic));
        assert!(pool.iter().all(|c| c.kind != CardKind::Status));
    }

    #[test]
    fn test_random_card_choices_distinct() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let choices = random_card_choices(Character::Ironclad, 3, &mut rng);
        assert_eq!(choices.len(), 3);
        for i in 0..choices.len() {
            for j in (i + 1)..choices.len() {
                assert_ne!(choices[i].id, choices[j].id);
            }
        }
    }

    #[test]
    fn test_burn_is_ethereal_status() {
        let burn = card_by_id("burn").unwrap();
        assert!(burn.ethereal);
        assert_eq!(burn.kind, CardKind::Status);
        assert_eq!(burn.end_turn_damage, 2);
    }
}
