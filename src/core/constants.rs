// Starting resources per run
pub const STARTING_GOLD: u32 = 99;
pub const IRONCLAD_STARTING_HP: u32 = 80;
pub const SILENT_STARTING_HP: u32 = 70;
pub const DEFECT_STARTING_HP: u32 = 75;
pub const WATCHER_STARTING_HP: u32 = 72;

// Starting deck composition (Ironclad)
pub const STARTING_STRIKES: usize = 5;
pub const STARTING_DEFENDS: usize = 4;

// Battle pacing
pub const BASE_MAX_ENERGY: u32 = 3;
pub const OPENING_HAND_SIZE: u32 = 5;
pub const TURN_START_DRAW: u32 = 5;

// Status multipliers (floored after multiplication)
pub const VULNERABLE_MULTIPLIER: f64 = 1.5;
pub const WEAK_MULTIPLIER: f64 = 0.75;

// End-of-turn burn card damage
pub const BURN_DAMAGE: u32 = 2;

// Intent magnitude defaults when the content entry omits a value
pub const DEFAULT_BUFF_STRENGTH: i32 = 3;
pub const DEFAULT_DEFEND_BLOCK: u32 = 15;
pub const DEFAULT_SKULL_BASH_DAMAGE: u32 = 6;
pub const SIPHON_SOUL_STRENGTH_DRAIN: i32 = 2;
pub const SPLIT_HEAL: u32 = 50;
// Inferno hits for floor(player_max_hp / this)
pub const INFERNO_MAX_HP_DIVISOR: u32 = 12;

// Battle rewards
pub const REWARD_GOLD_MIN: u32 = 10;
pub const REWARD_GOLD_SPREAD: u32 = 10;
pub const REWARD_GOLD_ELITE_BONUS: u32 = 20;
pub const REWARD_GOLD_BOSS_BONUS: u32 = 50;
pub const REWARD_CARD_CHOICES: usize = 3;
pub const REWARD_POTION_CHANCE: f64 = 0.4;

// Relic hook magnitudes
pub const BURNING_BLOOD_HEAL: u32 = 6;
pub const LANTERN_ENERGY: u32 = 1;
pub const ANCHOR_BLOCK: u32 = 10;
pub const BATTLE_START_DRAW_RELIC_CARDS: u32 = 2;
pub const BAG_OF_MARBLES_VULNERABLE: u32 = 1;

// Shop pricing
pub const SHOP_CARD_PRICE_RARE: u32 = 150;
pub const SHOP_CARD_PRICE_UNCOMMON: u32 = 75;
pub const SHOP_CARD_PRICE_COMMON: u32 = 50;
pub const SHOP_RELIC_PRICE: u32 = 150;
pub const SHOP_POTION_PRICE: u32 = 50;
pub const SHOP_CARD_REMOVE_PRICE: u32 = 75;
pub const SHOP_CARD_COUNT_MIN: usize = 3;
pub const SHOP_CARD_COUNT_SPREAD: usize = 3;

// Card upgrade deltas
pub const UPGRADE_DAMAGE_BONUS: u32 = 2;
pub const UPGRADE_BLOCK_BONUS: u32 = 2;

// Map shape
pub const MAP_FLOORS: u32 = 15;
pub const MAP_START_NODES: usize = 4;
pub const MAP_MAX_INBOUND_LINKS: usize = 3;
// Elite encounters only appear above this floor
pub const MAP_ELITE_MIN_FLOOR: u32 = 3;

// Cumulative node-type thresholds for interior floors
pub const MAP_ELITE_THRESHOLD: f64 = 0.10;
pub const MAP_SHOP_THRESHOLD: f64 = 0.15;
pub const MAP_TREASURE_THRESHOLD: f64 = 0.20;
pub const MAP_EVENT_THRESHOLD: f64 = 0.25;

// Final act; clearing its boss wins the run
pub const FINAL_ACT: u32 = 3;

// Event tuning
pub const CLERIC_HEAL_FRACTION: f64 = 0.25;
pub const CLERIC_FULL_HEAL_COST: u32 = 35;
