//! The turn-based battle engine: piles, energy, card resolution, enemy
//! intent execution, and terminal-state detection.
//!
//! Every public operation is synchronous and atomic; the host drives
//! `play_card` / `end_turn` and re-reads state afterwards. Invalid
//! operations are no-ops returning `None` or `Continue`, never errors.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::battle::types::{
    BattleStatus, Card, DamageReport, Enemy, HitReport, IntentKind, IntentPreview, PlayResult,
    PlayerCombatant,
};
use crate::content::relics::RelicHooks;
use crate::core::constants::{
    BASE_MAX_ENERGY, DEFAULT_BUFF_STRENGTH, DEFAULT_DEFEND_BLOCK, DEFAULT_SKULL_BASH_DAMAGE,
    INFERNO_MAX_HP_DIVISOR, OPENING_HAND_SIZE, SIPHON_SOUL_STRENGTH_DRAIN, SPLIT_HEAL,
    TURN_START_DRAW, VULNERABLE_MULTIPLIER, WEAK_MULTIPLIER,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Battle {
    pub player: PlayerCombatant,
    pub enemies: Vec<Enemy>,
    pub hand: Vec<Card>,
    /// Top of the pile is the last element.
    pub draw_pile: Vec<Card>,
    pub discard_pile: Vec<Card>,
    pub exhaust_pile: Vec<Card>,
    pub energy: u32,
    pub max_energy: u32,
    pub block: u32,
    /// Completed player turns; also the number of the enemy turn
    /// currently resolving once the player turn has ended.
    pub turn: u32,
    pub player_turn: bool,
    pub hooks: RelicHooks,
}

impl Battle {
    pub fn new(player: PlayerCombatant, enemies: Vec<Enemy>, hooks: RelicHooks) -> Self {
        Self {
            player,
            enemies,
            hand: Vec::new(),
            draw_pile: Vec::new(),
            discard_pile: Vec::new(),
            exhaust_pile: Vec::new(),
            energy: BASE_MAX_ENERGY,
            max_energy: BASE_MAX_ENERGY,
            block: 0,
            turn: 0,
            player_turn: true,
            hooks,
        }
    }

    /// Sets up the encounter: copies the run deck into a shuffled draw
    /// pile, draws the opening hand, and runs battle-start relic hooks.
    pub fn init(&mut self, deck: &[Card], rng: &mut impl Rng) {
        self.turn = 0;
        self.player_turn = true;
        self.energy = self.max_energy;
        self.block = 0;
        self.hand.clear();
        self.discard_pile.clear();
        self.exhaust_pile.clear();
        self.draw_pile = deck.to_vec();
        self.draw_pile.shuffle(rng);

        self.draw_cards(OPENING_HAND_SIZE, rng);

        let extra_draw = self.hooks.battle_start_draw;
        if extra_draw > 0 {
            self.draw_cards(extra_draw, rng);
        }
        self.block += self.hooks.battle_start_block;
        if self.hooks.battle_start_enemy_vulnerable > 0 {
            for enemy in &mut self.enemies {
                enemy.vulnerable += self.hooks.battle_start_enemy_vulnerable;
            }
        }
    }

    /// Draws up to `count` cards, reshuffling the discard pile into the
    /// draw pile whenever the draw pile runs out mid-draw. Stops short
    /// without error when both piles are empty.
    pub fn draw_cards(&mut self, count: u32, rng: &mut impl Rng) {
        for _ in 0..count {
            if self.draw_pile.is_empty() {
                self.reshuffle_discard_into_draw(rng);
                if self.draw_pile.is_empty() {
                    break;
                }
            }
            if let Some(card) = self.draw_pile.pop() {
                self.hand.push(card);
            }
        }
    }

    fn reshuffle_discard_into_draw(&mut self, rng: &mut impl Rng) {
        self.draw_pile.append(&mut self.discard_pile);
        self.draw_pile.shuffle(rng);
    }

    /// Plays the card at `hand_index` against `target_index`.
    ///
    /// Returns `None` without mutating anything when the index is out
    /// of range, energy is insufficient, or the target is invalid.
    pub fn play_card(
        &mut self,
        hand_index: usize,
        target_index: usize,
        rng: &mut impl Rng,
    ) -> Option<PlayResult> {
        if hand_index >= self.hand.len() {
            return None;
        }
        let cost = self.hand[hand_index].resolved_cost();
        if self.energy < cost {
            return None;
        }
        // Area cards need no target; everything else does.
        if !self.hand[hand_index].aoe && target_index >= self.enemies.len() {
            return None;
        }

        self.energy -= cost;
        let card = self.hand.remove(hand_index);
        let damage = self.apply_card_effect(&card, target_index, rng);

        if card.exhaust {
            self.exhaust_pile.push(card);
        } else if card.ethereal {
            // Played ethereal cards leave the battle entirely; only
            // copies still in hand at end of turn reach the exhaust
            // pile.
        } else {
            self.discard_pile.push(card);
        }

        Some(PlayResult {
            status: self.check_state(),
            damage,
        })
    }

    /// Applies a card's effects in order: damage, block, statuses,
    /// strength, draw.
    fn apply_card_effect(
        &mut self,
        card: &Card,
        target_index: usize,
        rng: &mut impl Rng,
    ) -> Option<DamageReport> {
        let attacker_weak = self.player.weak > 0;
        let mut report = None;

        if card.damage > 0 {
            let raw = card.damage as i32 + self.player.strength;
            if card.aoe {
                let mut hits = Vec::new();
                for (index, enemy) in self.enemies.iter_mut().enumerate() {
                    hits.push((index, Self::hit_enemy(enemy, raw, attacker_weak)));
                }
                report = Some(DamageReport::Area { hits });
            } else if card.hits > 1 {
                let mut hits = Vec::new();
                for _ in 0..card.hits {
                    hits.push(Self::hit_enemy(
                        &mut self.enemies[target_index],
                        raw,
                        attacker_weak,
                    ));
                }
                report = Some(DamageReport::MultiHit {
                    target: target_index,
                    hits,
                });
            } else {
                let hit = Self::hit_enemy(&mut self.enemies[target_index], raw, attacker_weak);
                report = Some(DamageReport::Single {
                    target: target_index,
                    hit,
                });
            }
        }

        if card.block > 0 {
            self.block += card.block;
        }
        if card.vulnerable > 0 {
            if let Some(enemy) = self.enemies.get_mut(target_index) {
                enemy.vulnerable += card.vulnerable;
            }
        }
        if card.weak > 0 {
            if let Some(enemy) = self.enemies.get_mut(target_index) {
                enemy.weak += card.weak;
            }
        }
        if card.strength != 0 {
            self.player.strength += card.strength;
        }
        if card.draw > 0 {
            self.draw_cards(card.draw, rng);
        }

        report
    }

    /// The single-hit damage pipeline: vulnerable then weak adjustment
    /// (each floored), block absorption, hp reduction, block reduction
    /// by the pre-absorption amount.
    fn hit_enemy(enemy: &mut Enemy, raw: i32, attacker_weak: bool) -> HitReport {
        let mut damage = raw;
        if enemy.vulnerable > 0 {
            damage = ((damage as f64) * VULNERABLE_MULTIPLIER).floor() as i32;
        }
        if attacker_weak {
            damage = ((damage as f64) * WEAK_MULTIPLIER).floor() as i32;
        }
        let damage = damage.max(0) as u32;

        let original_block = enemy.block;
        let actual = damage.saturating_sub(original_block);
        enemy.take_damage(actual);
        enemy.block = enemy.block.saturating_sub(damage);

        HitReport {
            displayed: damage,
            actual,
            blocked: original_block.min(damage),
        }
    }

    /// Ends the player turn and resolves the enemy turn. A no-op
    /// returning `Continue` when it is not the player's turn, so a
    /// double-submitted end-turn is harmless.
    pub fn end_turn(&mut self, rng: &mut impl Rng) -> BattleStatus {
        if !self.player_turn {
            return BattleStatus::Continue;
        }

        self.run_end_of_turn_effects();

        for card in self.hand.drain(..) {
            if card.ethereal {
                self.exhaust_pile.push(card);
            } else {
                self.discard_pile.push(card);
            }
        }

        self.player_turn = false;
        self.turn += 1;
        self.enemy_turn(rng)
    }

    fn run_end_of_turn_effects(&mut self) {
        if !self.hooks.preserve_block {
            self.block = 0;
        }
        if self.player.poison > 0 {
            let poison = self.player.poison;
            self.player.take_damage(poison);
            self.player.poison -= 1;
        }
        if self.player.weak > 0 {
            self.player.weak -= 1;
        }
        let lingering: u32 = self.hand.iter().map(|c| c.end_turn_damage).sum();
        if lingering > 0 {
            self.player.take_damage(lingering);
        }
        for enemy in &mut self.enemies {
            if enemy.vulnerable > 0 {
                enemy.vulnerable -= 1;
            }
            if enemy.weak > 0 {
                enemy.weak -= 1;
            }
        }
    }

    fn enemy_turn(&mut self, rng: &mut impl Rng) -> BattleStatus {
        for index in 0..self.enemies.len() {
            if self.enemies[index].is_alive() {
                self.enemy_action(index);
            }
        }

        let status = self.check_state();
        if status != BattleStatus::Continue {
            return status;
        }

        self.start_player_turn(rng);
        BattleStatus::Continue
    }

    fn enemy_action(&mut self, index: usize) {
        let intent = match self.enemies[index].intent_for_turn(self.turn) {
            Some(intent) => intent.clone(),
            None => return,
        };

        match intent.kind {
            IntentKind::Attack => {
                let raw = intent.value as i32 + self.enemies[index].strength;
                self.attack_player(index, raw);
            }
            IntentKind::Buff => {
                let gain = if intent.value > 0 {
                    intent.value as i32
                } else {
                    DEFAULT_BUFF_STRENGTH
                };
                self.enemies[index].strength += gain;
            }
            IntentKind::ApplyWeak => {
                self.player.weak += intent.value.max(1);
            }
            IntentKind::ApplyVulnerable => {
                self.player.vulnerable += intent.value.max(1);
            }
            IntentKind::Entangle => {
                self.player.entangled += 1;
            }
            IntentKind::Defend => {
                let amount = if intent.value > 0 {
                    intent.value
                } else {
                    DEFAULT_DEFEND_BLOCK
                };
                self.enemies[index].block += amount;
            }
            IntentKind::Sleep | IntentKind::Activate => {}
            IntentKind::SiphonSoul => {
                self.player.strength =
                    (self.player.strength - SIPHON_SOUL_STRENGTH_DRAIN).max(0);
            }
            IntentKind::Split => {
                let enemy = &mut self.enemies[index];
                if enemy.hp <= enemy.max_hp / 2 {
                    enemy.hp = (enemy.hp + SPLIT_HEAL).min(enemy.max_hp);
                }
            }
            IntentKind::Inferno => {
                let raw = (self.player.max_hp / INFERNO_MAX_HP_DIVISOR) as i32;
                self.attack_player(index, raw);
            }
            IntentKind::SkullBash => {
                let raw = if intent.value > 0 {
                    intent.value
                } else {
                    DEFAULT_SKULL_BASH_DAMAGE
                } as i32;
                self.attack_player(index, raw);
                self.player.vulnerable += 1;
            }
            IntentKind::Unknown(tag) => {
                log::warn!(
                    "unknown intent type '{}' on enemy '{}', skipping",
                    tag,
                    self.enemies[index].id
                );
            }
        }
    }

    /// Enemy-to-player hit: the attacker's weak reduces the damage,
    /// the player's block absorbs it. The player's vulnerable counter
    /// is not read on this path.
    fn attack_player(&mut self, attacker: usize, raw: i32) {
        let mut damage = raw;
        if self.enemies[attacker].weak > 0 {
            damage = ((damage as f64) * WEAK_MULTIPLIER).floor() as i32;
        }
        let damage = damage.max(0) as u32;

        let actual = damage.saturating_sub(self.block);
        self.player.take_damage(actual);
        self.block = self.block.saturating_sub(damage);
    }

    fn start_player_turn(&mut self, rng: &mut impl Rng) {
        self.player_turn = true;
        self.energy = self.max_energy + self.hooks.turn_start_energy;
        self.draw_cards(TURN_START_DRAW, rng);
    }

    /// Pure terminal-state query. Defeat is checked before victory, so
    /// a mutual wipe is a defeat.
    pub fn check_state(&self) -> BattleStatus {
        if self.player.hp == 0 {
            return BattleStatus::Defeat;
        }
        if self.enemies.iter().all(|e| e.hp == 0) {
            return BattleStatus::Victory;
        }
        BattleStatus::Continue
    }

    /// Projects the intent the given enemy will act on during the next
    /// enemy turn. Pure with respect to battle state.
    pub fn upcoming_intent(&self, enemy_index: usize) -> Option<IntentPreview> {
        let enemy = self.enemies.get(enemy_index)?;
        let enemy_turn = if self.player_turn {
            self.turn + 1
        } else {
            self.turn
        };
        preview_intent(enemy, enemy_turn, self.player.max_hp)
    }
}

/// Formats the intent an enemy will act on during its `enemy_turn`-th
/// turn (1-based), generically by category. Side-effect free.
pub fn preview_intent(enemy: &Enemy, enemy_turn: u32, player_max_hp: u32) -> Option<IntentPreview> {
    let intent = enemy.intent_for_turn(enemy_turn)?;
    Some(match &intent.kind {
        IntentKind::Attack => IntentPreview::Attack {
            damage: (intent.value as i32 + enemy.strength).max(0) as u32,
        },
        IntentKind::Buff => IntentPreview::Buff {
            amount: if intent.value > 0 {
                intent.value as i32
            } else {
                DEFAULT_BUFF_STRENGTH
            },
        },
        IntentKind::ApplyWeak | IntentKind::ApplyVulnerable | IntentKind::Entangle => {
            IntentPreview::Debuff
        }
        IntentKind::Defend => IntentPreview::Block {
            amount: if intent.value > 0 {
                intent.value
            } else {
                DEFAULT_DEFEND_BLOCK
            },
        },
        IntentKind::Sleep => IntentPreview::Special { label: "sleeping" },
        IntentKind::Activate => IntentPreview::Special { label: "charging" },
        IntentKind::SiphonSoul => IntentPreview::Special {
            label: "siphon soul",
        },
        IntentKind::Split => IntentPreview::Special { label: "split" },
        IntentKind::Inferno => IntentPreview::Attack {
            damage: player_max_hp / INFERNO_MAX_HP_DIVISOR,
        },
        IntentKind::SkullBash => IntentPreview::Attack {
            damage: if intent.value > 0 {
                intent.value
            } else {
                DEFAULT_SKULL_BASH_DAMAGE
            },
        },
        IntentKind::Unknown(_) => IntentPreview::Unknown,
    })
}
