//! The run state machine: one value owns the whole run and every
//! transition is a method on it.
//!
//! Screens gate which operations apply; invalid operations are no-ops
//! returning `false`, never panics. Battle state lives in its own
//! value while a battle is active and hp is synced back when it ends.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::battle::logic::Battle;
use crate::battle::types::{Card, Character, Enemy, PlayerCombatant};
use crate::content::cards::card_by_id;
use crate::content::events::{random_event, Event, EventEffect};
use crate::content::potions::{Potion, PotionEffect};
use crate::content::relics::{random_non_boss_relic, starting_relic, Relic, RelicHooks};
use crate::core::constants::{
    DEFECT_STARTING_HP, FINAL_ACT, IRONCLAD_STARTING_HP, SHOP_CARD_REMOVE_PRICE,
    SILENT_STARTING_HP, STARTING_DEFENDS, STARTING_GOLD, STARTING_STRIKES, WATCHER_STARTING_HP,
};
use crate::core::rewards::{generate_battle_reward, BattleReward};
use crate::map::generation::generate_map;
use crate::map::types::{Map, NodeKind, NodePayload};
use crate::shop::Shop;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    Map,
    Battle,
    Shop,
    Rest,
    Event,
    Reward,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Playing,
    Victory,
    Defeat,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunState {
    pub character: Character,
    pub act: u32,
    pub hp: u32,
    pub max_hp: u32,
    pub gold: u32,
    pub deck: Vec<Card>,
    pub relics: Vec<Relic>,
    pub potions: Vec<Potion>,
    pub map: Map,
    pub battle: Option<Battle>,
    pub shop: Option<Shop>,
    pub reward: Option<BattleReward>,
    pub active_event: Option<Event>,
    pub screen: Screen,
    pub status: GameStatus,
}

fn starting_hp(character: Character) -> u32 {
    match character {
        Character::Ironclad => IRONCLAD_STARTING_HP,
        Character::Silent => SILENT_STARTING_HP,
        Character::Defect => DEFECT_STARTING_HP,
        Character::Watcher => WATCHER_STARTING_HP,
    }
}

fn starting_deck() -> Vec<Card> {
    let mut deck = Vec::new();
    for _ in 0..STARTING_STRIKES {
        if let Some(card) = card_by_id("strike") {
            deck.push(card);
        }
    }
    for _ in 0..STARTING_DEFENDS {
        if let Some(card) = card_by_id("defend") {
            deck.push(card);
        }
    }
    if let Some(card) = card_by_id("bash") {
        deck.push(card);
    }
    deck
}

impl RunState {
    pub fn new(character: Character, rng: &mut impl Rng) -> Self {
        let hp = starting_hp(character);
        Self {
            character,
            act: 1,
            hp,
            max_hp: hp,
            gold: STARTING_GOLD,
            deck: starting_deck(),
            relics: vec![starting_relic(character)],
            potions: Vec::new(),
            map: generate_map(1, rng),
            battle: None,
            shop: None,
            reward: None,
            active_event: None,
            screen: Screen::Map,
            status: GameStatus::Playing,
        }
    }

    fn heal(&mut self, amount: u32) {
        self.hp = (self.hp + amount).min(self.max_hp);
    }

    fn current_node_kind(&self) -> NodeKind {
        self.map
            .current_node()
            .map(|n| n.kind)
            .unwrap_or(NodeKind::Monster)
    }

    fn visit_current_node(&mut self) {
        if let Some(id) = self.map.current_node_id {
            self.map.visit_node(id);
        }
    }

    // =========================================================================
    // Map navigation
    // =========================================================================

    /// Moves onto a map node and opens whatever it holds. Fails when
    /// the run is over, another screen is active, or the node is not
    /// reachable from the current position.
    pub fn enter_node(&mut self, node_id: u32, rng: &mut impl Rng) -> bool {
        if self.status != GameStatus::Playing || self.screen != Screen::Map {
            return false;
        }
        let payload = match self.map.move_to_node(node_id) {
            Some(node) => node.payload.clone(),
            None => return false,
        };
        // Nodes count as visited the moment they are entered, not when
        // their screen is left.
        self.map.visit_node(node_id);
        match payload {
            NodePayload::Encounter(monster) => {
                self.start_battle(vec![monster.spawn()], rng);
            }
            NodePayload::Rest => {
                self.enter_rest();
            }
            NodePayload::Shop => {
                self.enter_shop(rng);
            }
            NodePayload::Treasure(relic) => {
                self.relics.push(relic);
            }
            NodePayload::Event => {
                self.enter_event(rng);
            }
        }
        true
    }

    // =========================================================================
    // Battle lifecycle
    // =========================================================================

    /// Opens a battle against the given enemies with the current deck
    /// and relic hooks.
    pub fn start_battle(&mut self, enemies: Vec<Enemy>, rng: &mut impl Rng) {
        let player = PlayerCombatant::new(self.hp, self.max_hp);
        let hooks = RelicHooks::from_relics(&self.relics);
        let mut battle = Battle::new(player, enemies, hooks);
        battle.init(&self.deck, rng);
        self.battle = Some(battle);
        self.screen = Screen::Battle;
    }

    /// Closes the active battle, syncing hp back to the run. On a win
    /// the reward bundle is rolled and the reward screen opens; on a
    /// loss the run ends.
    pub fn end_battle(&mut self, victory: bool, rng: &mut impl Rng) {
        let Some(battle) = &self.battle else {
            return;
        };
        self.hp = battle.player.hp;

        if victory {
            self.reward = Some(generate_battle_reward(
                self.current_node_kind(),
                self.character,
                rng,
            ));
            self.screen = Screen::Reward;
        } else {
            self.battle = None;
            self.screen = Screen::Map;
        }
        self.check_game_state();
    }

    /// Banks the reward bundle: gold always, the chosen card and the
    /// relic and potion only when accepted. Clears the battle, marks
    /// the node visited, and advances the act after a boss.
    pub fn accept_battle_reward(
        &mut self,
        card_choice: Option<usize>,
        accept_relic: bool,
        accept_potion: bool,
        rng: &mut impl Rng,
    ) -> bool {
        if self.screen != Screen::Reward {
            return false;
        }
        let Some(reward) = self.reward.take() else {
            return false;
        };
        if let Some(index) = card_choice {
            if index >= reward.card_choices.len() {
                self.reward = Some(reward);
                return false;
            }
        }

        self.gold += reward.gold;
        if let Some(index) = card_choice {
            self.deck.push(reward.card_choices[index].clone());
        }
        if accept_relic {
            if let Some(relic) = reward.relic {
                self.relics.push(relic);
            }
        }
        if accept_potion {
            if let Some(potion) = reward.potion {
                self.potions.push(potion);
            }
        }

        let hooks = RelicHooks::from_relics(&self.relics);
        if hooks.reward_heal > 0 {
            self.heal(hooks.reward_heal);
        }

        let node_kind = self.current_node_kind();
        self.visit_current_node();
        self.battle = None;
        self.screen = Screen::Map;

        if node_kind == NodeKind::Boss && self.act < FINAL_ACT {
            self.act += 1;
            self.map = generate_map(self.act, rng);
        }

        self.check_game_state();
        true
    }

    // =========================================================================
    // Shop
    // =========================================================================

    pub fn enter_shop(&mut self, rng: &mut impl Rng) {
        self.shop = Some(Shop::generate(self.character, rng));
        self.screen = Screen::Shop;
    }

    pub fn leave_shop(&mut self) {
        self.shop = None;
        self.screen = Screen::Map;
    }

    pub fn buy_shop_card(&mut self, index: usize) -> bool {
        let Some(shop) = self.shop.as_mut() else {
            return false;
        };
        if index >= shop.cards.len() || self.gold < shop.cards[index].price {
            return false;
        }
        let entry = shop.cards.remove(index);
        self.gold -= entry.price;
        self.deck.push(entry.card);
        true
    }

    pub fn buy_shop_relic(&mut self, index: usize) -> bool {
        let Some(shop) = self.shop.as_mut() else {
            return false;
        };
        if index >= shop.relics.len() || self.gold < shop.relics[index].price {
            return false;
        }
        let entry = shop.relics.remove(index);
        self.gold -= entry.price;
        self.relics.push(entry.relic);
        true
    }

    pub fn buy_shop_potion(&mut self, index: usize) -> bool {
        let Some(shop) = self.shop.as_mut() else {
            return false;
        };
        if index >= shop.potions.len() || self.gold < shop.potions[index].price {
            return false;
        }
        let entry = shop.potions.remove(index);
        self.gold -= entry.price;
        self.potions.push(entry.potion);
        true
    }

    /// Pays the shop's removal fee to take a card out of the deck.
    pub fn shop_remove_card(&mut self, deck_index: usize) -> bool {
        if self.shop.is_none() {
            return false;
        }
        if deck_index >= self.deck.len() || self.gold < SHOP_CARD_REMOVE_PRICE {
            return false;
        }
        self.gold -= SHOP_CARD_REMOVE_PRICE;
        self.deck.remove(deck_index);
        true
    }

    // =========================================================================
    // Rest
    // =========================================================================

    pub fn enter_rest(&mut self) {
        self.screen = Screen::Rest;
    }

    /// Rests at a campfire, restoring hp to full.
    pub fn rest(&mut self) -> bool {
        if self.screen != Screen::Rest {
            return false;
        }
        self.hp = self.max_hp;
        self.screen = Screen::Map;
        true
    }

    pub fn leave_rest(&mut self) {
        if self.screen != Screen::Rest {
            return;
        }
        self.screen = Screen::Map;
    }

    // =========================================================================
    // Events
    // =========================================================================

    pub fn enter_event(&mut self, rng: &mut impl Rng) {
        match random_event(rng) {
            Some(event) => {
                self.active_event = Some(event);
                self.screen = Screen::Event;
            }
            None => {
                self.screen = Screen::Map;
            }
        }
    }

    /// Applies the chosen option of the active event and returns to
    /// the map. Fails without mutation on a bad index or when a priced
    /// option cannot be afforded.
    pub fn resolve_event_option(&mut self, option_index: usize, rng: &mut impl Rng) -> bool {
        let Some(event) = &self.active_event else {
            return false;
        };
        let Some(option) = event.options.get(option_index) else {
            return false;
        };

        match option.effect.clone() {
            EventEffect::HealFraction(fraction) => {
                let amount = (self.max_hp as f64 * fraction).floor() as u32;
                self.heal(amount);
            }
            EventEffect::FullHealForGold(cost) => {
                if self.gold < cost {
                    return false;
                }
                self.gold -= cost;
                self.hp = self.max_hp;
            }
            EventEffect::GainGold(amount) => {
                self.gold += amount;
            }
            EventEffect::GainGoldLoseHp { gold, hp } => {
                self.gold += gold;
                self.hp = self.hp.saturating_sub(hp).max(1);
            }
            EventEffect::GainRandomRelic => {
                if let Some(relic) = random_non_boss_relic(rng) {
                    self.relics.push(relic);
                }
            }
            EventEffect::UpgradeRandomCard => {
                let candidates: Vec<usize> = self
                    .deck
                    .iter()
                    .enumerate()
                    .filter(|(_, c)| !c.upgraded)
                    .map(|(i, _)| i)
                    .collect();
                if !candidates.is_empty() {
                    let pick = candidates[rng.gen_range(0..candidates.len())];
                    self.deck[pick].upgrade();
                }
            }
            EventEffect::Leave => {}
        }

        self.active_event = None;
        self.screen = Screen::Map;
        self.check_game_state();
        true
    }

    pub fn leave_event(&mut self) {
        if self.active_event.is_none() {
            return;
        }
        self.active_event = None;
        self.screen = Screen::Map;
    }

    // =========================================================================
    // Deck and potions
    // =========================================================================

    /// Upgrades the card at `deck_index`. Fails on a bad index or an
    /// already-upgraded card.
    pub fn upgrade_card(&mut self, deck_index: usize) -> bool {
        match self.deck.get_mut(deck_index) {
            Some(card) => card.upgrade(),
            None => false,
        }
    }

    /// Drinks the potion at `index`. Battle-only effects fail outside
    /// battle without consuming the potion; `target` picks the enemy
    /// for targeted effects. Damage from a potion can leave the battle
    /// in a terminal state for the host to observe.
    pub fn use_potion(&mut self, index: usize, target: usize) -> bool {
        let Some(potion) = self.potions.get(index) else {
            return false;
        };
        let effect = potion.effect;

        let applied = match effect {
            PotionEffect::Heal(amount) => {
                match self.battle.as_mut() {
                    Some(battle) => {
                        battle.player.hp = (battle.player.hp + amount).min(battle.player.max_hp);
                    }
                    None => self.heal(amount),
                }
                true
            }
            PotionEffect::GainStrength(amount) => match self.battle.as_mut() {
                Some(battle) => {
                    battle.player.strength += amount;
                    true
                }
                None => false,
            },
            PotionEffect::GainBlock(amount) => match self.battle.as_mut() {
                Some(battle) => {
                    battle.block += amount;
                    true
                }
                None => false,
            },
            PotionEffect::GainEnergy(amount) => match self.battle.as_mut() {
                Some(battle) => {
                    battle.energy += amount;
                    true
                }
                None => false,
            },
            PotionEffect::DamageTarget(amount) => match self.battle.as_mut() {
                Some(battle) => match battle.enemies.get_mut(target) {
                    Some(enemy) => {
                        enemy.take_damage(amount);
                        true
                    }
                    None => false,
                },
                None => false,
            },
            PotionEffect::DamageAll(amount) => match self.battle.as_mut() {
                Some(battle) => {
                    for enemy in &mut battle.enemies {
                        enemy.take_damage(amount);
                    }
                    true
                }
                None => false,
            },
        };

        if applied {
            self.potions.remove(index);
        }
        applied
    }

    // =========================================================================
    // Terminal states
    // =========================================================================

    /// Re-derives the run outcome: dead means defeat; standing on the
    /// visited boss node of the final map, back on the map screen,
    /// means the run is won.
    pub fn check_game_state(&mut self) -> GameStatus {
        if self.hp == 0 {
            self.status = GameStatus::Defeat;
        } else if self.screen == Screen::Map {
            if let Some(node) = self.map.current_node() {
                if node.kind == NodeKind::Boss && node.visited {
                    self.status = GameStatus::Victory;
                }
            }
        }
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::types::BattleStatus;
    use crate::content::monsters::monster_by_id;
    use crate::content::potions::potion_by_id;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    fn new_run() -> RunState {
        RunState::new(Character::Ironclad, &mut rng())
    }

    fn run_in_battle() -> RunState {
        let mut run = new_run();
        let cultist = monster_by_id("cultist").unwrap();
        run.start_battle(vec![cultist.spawn()], &mut rng());
        run
    }

    #[test]
    fn test_new_ironclad_run() {
        let run = new_run();
        assert_eq!(run.hp, 80);
        assert_eq!(run.max_hp, 80);
        assert_eq!(run.gold, 99);
        assert_eq!(run.deck.len(), 10);
        assert_eq!(run.relics.len(), 1);
        assert_eq!(run.relics[0].id, "burning_blood");
        assert_eq!(run.act, 1);
        assert_eq!(run.screen, Screen::Map);
        assert_eq!(run.status, GameStatus::Playing);
        assert!(run.potions.is_empty());
    }

    #[test]
    fn test_starting_deck_composition() {
        let run = new_run();
        let strikes = run.deck.iter().filter(|c| c.id == "strike").count();
        let defends = run.deck.iter().filter(|c| c.id == "defend").count();
        let bashes = run.deck.iter().filter(|c| c.id == "bash").count();
        assert_eq!(strikes, 5);
        assert_eq!(defends, 4);
        assert_eq!(bashes, 1);
    }

    #[test]
    fn test_enter_start_node_opens_battle() {
        let mut run = new_run();
        let start = run.map.nodes_by_floor(0)[0].id;
        assert!(run.enter_node(start, &mut rng()));
        assert_eq!(run.screen, Screen::Battle);
        let battle = run.battle.as_ref().unwrap();
        assert_eq!(battle.hand.len(), 5);
        assert_eq!(battle.draw_pile.len(), 5);
        assert_eq!(battle.player.hp, 80);
    }

    #[test]
    fn test_enter_unreachable_node_fails() {
        let mut run = new_run();
        let boss = run
            .map
            .nodes
            .iter()
            .find(|n| n.kind == NodeKind::Boss)
            .unwrap()
            .id;
        assert!(!run.enter_node(boss, &mut rng()));
        assert_eq!(run.screen, Screen::Map);
    }

    #[test]
    fn test_enter_node_blocked_off_map_screen() {
        let mut run = run_in_battle();
        let start = run.map.nodes_by_floor(0)[0].id;
        assert!(!run.enter_node(start, &mut rng()));
    }

    #[test]
    fn test_victory_opens_reward_and_keeps_gold_pending() {
        let mut run = run_in_battle();
        let gold_before = run.gold;
        run.battle.as_mut().unwrap().enemies[0].hp = 0;
        run.end_battle(true, &mut rng());
        assert_eq!(run.screen, Screen::Reward);
        assert!(run.reward.is_some());
        assert_eq!(run.gold, gold_before);
    }

    #[test]
    fn test_accept_reward_banks_gold_and_card() {
        let mut run = run_in_battle();
        run.battle.as_mut().unwrap().enemies[0].hp = 0;
        run.end_battle(true, &mut rng());
        let reward = run.reward.clone().unwrap();
        let deck_before = run.deck.len();

        assert!(run.accept_battle_reward(Some(0), true, true, &mut rng()));
        assert_eq!(run.gold, 99 + reward.gold);
        assert_eq!(run.deck.len(), deck_before + 1);
        assert_eq!(run.deck.last().unwrap().id, reward.card_choices[0].id);
        assert_eq!(run.screen, Screen::Map);
        assert!(run.battle.is_none());
        assert!(run.reward.is_none());
    }

    #[test]
    fn test_skip_reward_card() {
        let mut run = run_in_battle();
        run.battle.as_mut().unwrap().enemies[0].hp = 0;
        run.end_battle(true, &mut rng());
        let deck_before = run.deck.len();
        assert!(run.accept_battle_reward(None, false, false, &mut rng()));
        assert_eq!(run.deck.len(), deck_before);
    }

    #[test]
    fn test_reward_bad_card_index_fails_whole_accept() {
        let mut run = run_in_battle();
        run.battle.as_mut().unwrap().enemies[0].hp = 0;
        run.end_battle(true, &mut rng());
        let gold_before = run.gold;
        assert!(!run.accept_battle_reward(Some(99), false, false, &mut rng()));
        assert_eq!(run.gold, gold_before);
        assert!(run.reward.is_some());
        assert_eq!(run.screen, Screen::Reward);
    }

    #[test]
    fn test_burning_blood_heals_on_reward() {
        let mut run = run_in_battle();
        {
            let battle = run.battle.as_mut().unwrap();
            battle.enemies[0].hp = 0;
            battle.player.hp = 60;
        }
        run.end_battle(true, &mut rng());
        assert!(run.accept_battle_reward(None, false, false, &mut rng()));
        assert_eq!(run.hp, 66);
    }

    #[test]
    fn test_defeat_ends_run() {
        let mut run = run_in_battle();
        run.battle.as_mut().unwrap().player.hp = 0;
        run.end_battle(false, &mut rng());
        assert_eq!(run.hp, 0);
        assert_eq!(run.status, GameStatus::Defeat);
        assert!(run.battle.is_none());
    }

    #[test]
    fn test_boss_victory_advances_act_with_fresh_map() {
        let mut run = new_run();
        // Walk the map to the boss so the current node is the boss node.
        let start = run.map.nodes_by_floor(0)[0].id;
        run.map.move_to_node(start);
        loop {
            let next = run.map.available_next_nodes()[0].id;
            run.map.move_to_node(next);
            if run.map.current_node().unwrap().kind == NodeKind::Boss {
                break;
            }
        }
        let boss = monster_by_id("slime_boss").unwrap();
        run.start_battle(vec![boss.spawn()], &mut rng());
        run.battle.as_mut().unwrap().enemies[0].hp = 0;
        run.end_battle(true, &mut rng());
        assert!(run.accept_battle_reward(None, true, false, &mut rng()));

        assert_eq!(run.act, 2);
        assert!(run.map.current_node_id.is_none());
        assert!(run.map.nodes.iter().all(|n| !n.visited));
        assert_eq!(run.status, GameStatus::Playing);
    }

    #[test]
    fn test_final_boss_victory_wins_run() {
        let mut run = new_run();
        run.act = FINAL_ACT;
        run.map = generate_map(FINAL_ACT, &mut rng());
        let start = run.map.nodes_by_floor(0)[0].id;
        run.map.move_to_node(start);
        loop {
            let next = run.map.available_next_nodes()[0].id;
            run.map.move_to_node(next);
            if run.map.current_node().unwrap().kind == NodeKind::Boss {
                break;
            }
        }
        let boss = monster_by_id("awakened_one").unwrap();
        run.start_battle(vec![boss.spawn()], &mut rng());
        run.battle.as_mut().unwrap().enemies[0].hp = 0;
        run.end_battle(true, &mut rng());
        assert!(run.accept_battle_reward(None, false, false, &mut rng()));
        assert_eq!(run.status, GameStatus::Victory);
    }

    #[test]
    fn test_shop_purchases_and_gold_gating() {
        let mut run = new_run();
        run.enter_shop(&mut rng());
        assert_eq!(run.screen, Screen::Shop);

        // The relic costs 150 and the run starts with 99 gold.
        let gold_before = run.gold;
        let deck_before = run.deck.len();
        assert!(!run.buy_shop_relic(0));
        assert_eq!(run.gold, gold_before);
        assert_eq!(run.relics.len(), 1);

        // The potion costs 50, affordable.
        assert!(run.buy_shop_potion(0));
        assert_eq!(run.gold, gold_before - 50);
        assert_eq!(run.potions.len(), 1);
        assert!(run.shop.as_ref().unwrap().potions.is_empty());

        assert!(!run.buy_shop_card(99));
        assert_eq!(run.deck.len(), deck_before);

        run.leave_shop();
        assert!(run.shop.is_none());
        assert_eq!(run.screen, Screen::Map);
    }

    #[test]
    fn test_shop_card_removal() {
        let mut run = new_run();
        run.enter_shop(&mut rng());
        let gold_before = run.gold;
        assert!(run.shop_remove_card(0));
        assert_eq!(run.deck.len(), 9);
        assert_eq!(run.gold, gold_before - SHOP_CARD_REMOVE_PRICE);

        // 24 gold left, second removal is unaffordable.
        assert!(!run.shop_remove_card(0));
        assert_eq!(run.deck.len(), 9);
    }

    #[test]
    fn test_shop_removal_requires_shop_screen() {
        let mut run = new_run();
        assert!(!run.shop_remove_card(0));
    }

    #[test]
    fn test_rest_heals_to_full() {
        let mut run = new_run();
        run.hp = 30;
        run.screen = Screen::Rest;
        assert!(run.rest());
        assert_eq!(run.hp, 80);
        assert_eq!(run.screen, Screen::Map);
    }

    #[test]
    fn test_event_gold_idol_trade() {
        let mut run = new_run();
        run.active_event = Some(crate::content::events::event_by_id("golden_idol").unwrap());
        run.screen = Screen::Event;
        assert!(run.resolve_event_option(0, &mut rng()));
        assert_eq!(run.gold, 99 + 75);
        assert_eq!(run.hp, 70);
        assert!(run.active_event.is_none());
        assert_eq!(run.screen, Screen::Map);
    }

    #[test]
    fn test_event_paid_heal_gold_gated() {
        let mut run = new_run();
        run.hp = 10;
        run.gold = 5;
        run.active_event = Some(crate::content::events::event_by_id("cleric").unwrap());
        run.screen = Screen::Event;
        // Option 1 is the 35-gold full heal.
        assert!(!run.resolve_event_option(1, &mut rng()));
        assert_eq!(run.hp, 10);
        assert_eq!(run.gold, 5);
        assert!(run.active_event.is_some());
    }

    #[test]
    fn test_event_free_heal_fraction() {
        let mut run = new_run();
        run.hp = 40;
        run.active_event = Some(crate::content::events::event_by_id("cleric").unwrap());
        run.screen = Screen::Event;
        assert!(run.resolve_event_option(0, &mut rng()));
        assert_eq!(run.hp, 60); // 25% of 80
    }

    #[test]
    fn test_upgrade_card_once_only() {
        let mut run = new_run();
        assert!(run.upgrade_card(0));
        assert!(run.deck[0].upgraded);
        assert!(!run.upgrade_card(0));
        assert!(!run.upgrade_card(99));
    }

    #[test]
    fn test_heal_potion_outside_battle() {
        let mut run = new_run();
        run.hp = 50;
        run.potions.push(potion_by_id("heal_potion").unwrap());
        assert!(run.use_potion(0, 0));
        assert_eq!(run.hp, 60);
        assert!(run.potions.is_empty());
    }

    #[test]
    fn test_battle_potion_refused_outside_battle() {
        let mut run = new_run();
        run.potions.push(potion_by_id("fire_potion").unwrap());
        assert!(!run.use_potion(0, 0));
        assert_eq!(run.potions.len(), 1);
    }

    #[test]
    fn test_fire_potion_in_battle() {
        let mut run = run_in_battle();
        run.potions.push(potion_by_id("fire_potion").unwrap());
        let hp_before = run.battle.as_ref().unwrap().enemies[0].hp;
        assert!(run.use_potion(0, 0));
        assert_eq!(
            run.battle.as_ref().unwrap().enemies[0].hp,
            hp_before - 20
        );
        assert!(run.potions.is_empty());
    }

    #[test]
    fn test_fire_potion_can_finish_battle() {
        let mut run = run_in_battle();
        run.potions.push(potion_by_id("fire_potion").unwrap());
        run.battle.as_mut().unwrap().enemies[0].hp = 15;
        assert!(run.use_potion(0, 0));
        assert_eq!(
            run.battle.as_ref().unwrap().check_state(),
            BattleStatus::Victory
        );
    }

    #[test]
    fn test_potion_bad_target_fails_unconsumed() {
        let mut run = run_in_battle();
        run.potions.push(potion_by_id("fire_potion").unwrap());
        assert!(!run.use_potion(0, 9));
        assert_eq!(run.potions.len(), 1);
    }

    #[test]
    fn test_strength_potion_in_battle() {
        let mut run = run_in_battle();
        run.potions.push(potion_by_id("strength_potion").unwrap());
        assert!(run.use_potion(0, 0));
        assert_eq!(run.battle.as_ref().unwrap().player.strength, 2);
    }
}
