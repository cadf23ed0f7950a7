//! Battle data structures: cards, combatants, enemy intents, and the
//! report values handed back to the presentation layer.

use serde::{Deserialize, Serialize};

use crate::core::constants::{UPGRADE_BLOCK_BONUS, UPGRADE_DAMAGE_BONUS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Character {
    Ironclad,
    Silent,
    Defect,
    Watcher,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardKind {
    Attack,
    Skill,
    Power,
    Curse,
    Status,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardRarity {
    Basic,
    Common,
    Uncommon,
    Rare,
    Special,
}

/// Energy cost of a card. `Variable` is the X-cost sentinel, resolved
/// to 0 at play time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardCost {
    Fixed(u32),
    Variable,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub name: String,
    pub kind: CardKind,
    pub rarity: CardRarity,
    pub character: Character,
    pub cost: CardCost,
    #[serde(default)]
    pub damage: u32,
    #[serde(default)]
    pub block: u32,
    #[serde(default)]
    pub vulnerable: u32,
    #[serde(default)]
    pub weak: u32,
    #[serde(default)]
    pub strength: i32,
    #[serde(default)]
    pub draw: u32,
    /// Number of hits for multi-hit attacks; 0 or 1 means a single hit.
    #[serde(default)]
    pub hits: u32,
    #[serde(default)]
    pub aoe: bool,
    #[serde(default)]
    pub exhaust: bool,
    #[serde(default)]
    pub ethereal: bool,
    /// Direct damage dealt if this card is still in hand at end of turn.
    #[serde(default)]
    pub end_turn_damage: u32,
    #[serde(default)]
    pub upgraded: bool,
}

impl Card {
    /// Energy cost as played: upgraded cards cost one less, floored at
    /// zero; a zero-cost card stays zero after upgrade.
    pub fn resolved_cost(&self) -> u32 {
        match self.cost {
            CardCost::Variable => 0,
            CardCost::Fixed(base) => {
                if self.upgraded {
                    base.saturating_sub(1)
                } else {
                    base
                }
            }
        }
    }

    /// Upgrades the card once. Upgrading is irreversible and a second
    /// upgrade is a no-op returning false.
    pub fn upgrade(&mut self) -> bool {
        if self.upgraded {
            return false;
        }
        self.upgraded = true;
        if self.damage > 0 {
            self.damage += UPGRADE_DAMAGE_BONUS;
        }
        if self.block > 0 {
            self.block += UPGRADE_BLOCK_BONUS;
        }
        true
    }
}

/// The player as seen inside a battle. Copied from the run state when
/// the encounter starts; hp is synced back when it ends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerCombatant {
    pub hp: u32,
    pub max_hp: u32,
    pub strength: i32,
    pub weak: u32,
    pub vulnerable: u32,
    pub poison: u32,
    pub entangled: u32,
}

impl PlayerCombatant {
    pub fn new(hp: u32, max_hp: u32) -> Self {
        Self {
            hp,
            max_hp,
            strength: 0,
            weak: 0,
            vulnerable: 0,
            poison: 0,
            entangled: 0,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.hp = self.hp.saturating_sub(amount);
    }
}

/// A single enemy combatant in a battle. Grouped encounters are
/// independent `Enemy` values, never shared state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: String,
    pub name: String,
    pub hp: u32,
    pub max_hp: u32,
    #[serde(default)]
    pub block: u32,
    #[serde(default)]
    pub strength: i32,
    #[serde(default)]
    pub weak: u32,
    #[serde(default)]
    pub vulnerable: u32,
    pub intents: Vec<Intent>,
    /// Indices into `intents`, cycled per enemy turn. Empty means cycle
    /// `intents` directly.
    #[serde(default)]
    pub turn_pattern: Vec<usize>,
}

impl Enemy {
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.hp = self.hp.saturating_sub(amount);
    }

    /// The intent this enemy acts on during its n-th turn (1-based).
    /// Pure; the same rule drives both execution and preview.
    pub fn intent_for_turn(&self, enemy_turn: u32) -> Option<&Intent> {
        if self.intents.is_empty() || enemy_turn == 0 {
            return None;
        }
        let step = (enemy_turn - 1) as usize;
        let intent_index = if self.turn_pattern.is_empty() {
            step % self.intents.len()
        } else {
            self.turn_pattern[step % self.turn_pattern.len()]
        };
        self.intents.get(intent_index)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Intent {
    pub kind: IntentKind,
    #[serde(default)]
    pub value: u32,
}

impl Intent {
    pub fn new(kind: IntentKind, value: u32) -> Self {
        Self { kind, value }
    }
}

/// Closed enumeration of enemy intent behaviors. Content entries with a
/// tag the engine does not recognize parse to `Unknown`, which is
/// logged and skipped at execution time rather than failing the run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum IntentKind {
    /// Deals `value + strength` damage to the player.
    Attack,
    /// Gains `value` strength (3 if the entry gives none).
    Buff,
    /// Applies `value` weak to the player (minimum 1).
    ApplyWeak,
    /// Applies `value` vulnerable to the player (minimum 1).
    ApplyVulnerable,
    /// Raises the player's entangled counter.
    Entangle,
    /// Gains `value` block (15 if the entry gives none).
    Defend,
    /// Does nothing this turn.
    Sleep,
    /// Does nothing this turn (first-turn wind-up).
    Activate,
    /// Drains 2 of the player's strength, floored at 0.
    SiphonSoul,
    /// Heals 50 hp once below half health.
    Split,
    /// Attacks for floor(player max hp / 12).
    Inferno,
    /// Attacks for `value` (6 if none) and applies 1 vulnerable.
    SkullBash,
    /// Unrecognized content tag, preserved for the warning log.
    Unknown(String),
}

/// Per-hit damage accounting, reported for presentation only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HitReport {
    /// Post-vulnerable/weak, pre-block damage.
    pub displayed: u32,
    /// Damage actually removed from hp.
    pub actual: u32,
    /// min(original block, displayed damage).
    pub blocked: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DamageReport {
    Single { target: usize, hit: HitReport },
    MultiHit { target: usize, hits: Vec<HitReport> },
    Area { hits: Vec<(usize, HitReport)> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleStatus {
    Continue,
    Victory,
    Defeat,
}

/// Outcome of a successful card play.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayResult {
    pub status: BattleStatus,
    pub damage: Option<DamageReport>,
}

/// Display-oriented projection of an enemy's next action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntentPreview {
    /// Strength-adjusted damage the attack would announce.
    Attack { damage: u32 },
    Buff { amount: i32 },
    Debuff,
    Block { amount: u32 },
    Special { label: &'static str },
    Unknown,
}
