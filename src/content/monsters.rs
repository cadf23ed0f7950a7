//! Monster definitions and lookup contracts.
//!
//! Intents are authored as string tags and parsed into the closed
//! `IntentKind` enum here, so a bad content tag degrades to `Unknown`
//! (logged and skipped in battle) instead of failing.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::battle::types::{Enemy, Intent, IntentKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MonsterKind {
    Normal,
    Elite,
    Boss,
}

/// Static monster record. `spawn` turns it into a live battle enemy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Monster {
    pub id: String,
    pub name: String,
    pub kind: MonsterKind,
    pub act: u32,
    pub max_hp: u32,
    pub intents: Vec<Intent>,
    pub turn_pattern: Vec<usize>,
}

impl Monster {
    pub fn spawn(&self) -> Enemy {
        Enemy {
            id: self.id.clone(),
            name: self.name.clone(),
            hp: self.max_hp,
            max_hp: self.max_hp,
            block: 0,
            strength: 0,
            weak: 0,
            vulnerable: 0,
            intents: self.intents.clone(),
            turn_pattern: self.turn_pattern.clone(),
        }
    }
}

/// Maps an authored intent tag to engine behavior. Attack flavors all
/// resolve to `Attack`; anything unrecognized is preserved as-is.
pub fn intent_from_tag(tag: &str, value: u32) -> Intent {
    let kind = match tag {
        "attack" | "stab" | "chomp" | "thrash" | "rush" | "tackle" | "bite" | "flame_tackle"
        | "bolt" | "sear" | "rake" => IntentKind::Attack,
        "ritual" | "bellow" | "grow" => IntentKind::Buff,
        "weak" | "lick" | "spit_web" | "beam" => IntentKind::ApplyWeak,
        "vulnerable" => IntentKind::ApplyVulnerable,
        "entangle" => IntentKind::Entangle,
        "charge_up" | "defensive_mode" => IntentKind::Defend,
        "sleep" => IntentKind::Sleep,
        "activate" => IntentKind::Activate,
        "siphon_soul" => IntentKind::SiphonSoul,
        "split" => IntentKind::Split,
        "inferno" => IntentKind::Inferno,
        "skull_bash" => IntentKind::SkullBash,
        other => IntentKind::Unknown(other.to_string()),
    };
    Intent::new(kind, value)
}

fn monster(
    id: &str,
    name: &str,
    kind: MonsterKind,
    act: u32,
    max_hp: u32,
    intents: &[(&str, u32)],
    turn_pattern: &[usize],
) -> Monster {
    Monster {
        id: id.to_string(),
        name: name.to_string(),
        kind,
        act,
        max_hp,
        intents: intents
            .iter()
            .map(|&(tag, value)| intent_from_tag(tag, value))
            .collect(),
        turn_pattern: turn_pattern.to_vec(),
    }
}

pub fn all_monsters() -> Vec<Monster> {
    vec![
        // Act 1 normals
        monster(
            "cultist",
            "Cultist",
            MonsterKind::Normal,
            1,
            48,
            &[("ritual", 3), ("attack", 6), ("attack", 6)],
            &[0, 1, 2],
        ),
        monster(
            "jaw_worm",
            "Jaw Worm",
            MonsterKind::Normal,
            1,
            40,
            &[("chomp", 11), ("bellow", 0), ("thrash", 7)],
            &[0, 1, 2],
        ),
        monster(
            "red_slaver",
            "Red Slaver",
            MonsterKind::Normal,
            1,
            46,
            &[("stab", 12), ("entangle", 0)],
            &[0, 1],
        ),
        monster(
            "blue_slaver",
            "Blue Slaver",
            MonsterKind::Normal,
            1,
            46,
            &[("stab", 12), ("rake", 7)],
            &[0, 1],
        ),
        monster(
            "louse_red",
            "Red Louse",
            MonsterKind::Normal,
            1,
            10,
            &[("bite", 6), ("grow", 0)],
            &[0, 1],
        ),
        monster(
            "louse_green",
            "Green Louse",
            MonsterKind::Normal,
            1,
            11,
            &[("spit_web", 0), ("bite", 5)],
            &[0, 1],
        ),
        monster(
            "acid_slime_s",
            "Acid Slime (S)",
            MonsterKind::Normal,
            1,
            8,
            &[("lick", 0), ("tackle", 3)],
            &[0, 1],
        ),
        monster(
            "acid_slime_m",
            "Acid Slime (M)",
            MonsterKind::Normal,
            1,
            28,
            &[("tackle", 10), ("lick", 0)],
            &[0, 1],
        ),
        // Act 1 elites
        monster(
            "gremlin_nob",
            "Gremlin Nob",
            MonsterKind::Elite,
            1,
            82,
            &[("bellow", 0), ("skull_bash", 6), ("rush", 14)],
            &[0, 1, 2],
        ),
        monster(
            "lagavulin",
            "Lagavulin",
            MonsterKind::Elite,
            1,
            109,
            &[("sleep", 0), ("attack", 18), ("siphon_soul", 0)],
            &[0, 0, 0, 1, 1, 2],
        ),
        monster(
            "sentry",
            "Sentry",
            MonsterKind::Elite,
            1,
            38,
            &[("beam", 0), ("bolt", 9)],
            &[0, 1],
        ),
        // Act 1 bosses
        monster(
            "slime_boss",
            "Slime Boss",
            MonsterKind::Boss,
            1,
            140,
            &[("tackle", 16), ("split", 0)],
            &[0, 0, 1],
        ),
        monster(
            "hexaghost",
            "Hexaghost",
            MonsterKind::Boss,
            1,
            250,
            &[("activate", 0), ("inferno", 0), ("sear", 6)],
            &[0, 2, 2, 1, 2, 2],
        ),
        // Act 2
        monster(
            "byrd",
            "Byrd",
            MonsterKind::Normal,
            2,
            26,
            &[("attack", 5), ("grow", 0)],
            &[0, 0, 1],
        ),
        monster(
            "chosen",
            "Chosen",
            MonsterKind::Normal,
            2,
            95,
            &[("beam", 0), ("attack", 18)],
            &[0, 1],
        ),
        monster(
            "book_of_stabbing",
            "Book of Stabbing",
            MonsterKind::Elite,
            2,
            160,
            &[("stab", 21), ("stab", 33)],
            &[0, 0, 1],
        ),
        monster(
            "the_champ",
            "The Champ",
            MonsterKind::Boss,
            2,
            420,
            &[("attack", 16), ("defensive_mode", 15), ("bellow", 0)],
            &[0, 1, 0, 2],
        ),
        // Act 3
        monster(
            "darkling",
            "Darkling",
            MonsterKind::Normal,
            3,
            56,
            &[("chomp", 9), ("grow", 0)],
            &[0, 1],
        ),
        monster(
            "giant_head",
            "Giant Head",
            MonsterKind::Elite,
            3,
            500,
            &[("attack", 13), ("grow", 0)],
            &[0, 0, 1],
        ),
        monster(
            "awakened_one",
            "Awakened One",
            MonsterKind::Boss,
            3,
            300,
            &[("attack", 20), ("grow", 0)],
            &[0, 0, 1],
        ),
    ]
}

pub fn monster_by_id(id: &str) -> Option<Monster> {
    all_monsters().into_iter().find(|m| m.id == id)
}

/// Monsters of a kind for an act, falling back to the whole kind pool
/// when the act has no entry of that kind.
pub fn monsters_by_kind(kind: MonsterKind, act: u32) -> Vec<Monster> {
    let for_act: Vec<Monster> = all_monsters()
        .into_iter()
        .filter(|m| m.kind == kind && m.act == act)
        .collect();
    if !for_act.is_empty() {
        return for_act;
    }
    all_monsters().into_iter().filter(|m| m.kind == kind).collect()
}

pub fn random_monster(kind: MonsterKind, act: u32, rng: &mut impl Rng) -> Option<Monster> {
    monsters_by_kind(kind, act).choose(rng).cloned()
}
