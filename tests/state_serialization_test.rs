//! Integration test: State serialization
//!
//! The whole run state, including an active battle, must survive a
//! serde round trip so hosts can save and restore mid-run.

use cardspire::battle::types::Character;
use cardspire::core::game_state::RunState;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[test]
fn test_fresh_run_round_trips() {
    let mut rng = ChaCha8Rng::seed_from_u64(17);
    let run = RunState::new(Character::Ironclad, &mut rng);

    let json = serde_json::to_string(&run).expect("run state should serialize");
    let restored: RunState = serde_json::from_str(&json).expect("run state should deserialize");

    assert_eq!(restored.character, run.character);
    assert_eq!(restored.hp, run.hp);
    assert_eq!(restored.gold, run.gold);
    assert_eq!(restored.deck, run.deck);
    assert_eq!(restored.relics, run.relics);
    assert_eq!(restored.map, run.map);
    assert_eq!(restored.screen, run.screen);
    assert_eq!(restored.status, run.status);
}

#[test]
fn test_mid_battle_state_round_trips() {
    let mut rng = ChaCha8Rng::seed_from_u64(23);
    let mut run = RunState::new(Character::Ironclad, &mut rng);
    let cultist = cardspire::content::monsters::monster_by_id("cultist").unwrap();
    run.start_battle(vec![cultist.spawn()], &mut rng);
    run.battle.as_mut().unwrap().end_turn(&mut rng);

    let json = serde_json::to_string(&run).expect("mid-battle state should serialize");
    let restored: RunState = serde_json::from_str(&json).expect("mid-battle state should restore");

    let before = run.battle.as_ref().unwrap();
    let after = restored.battle.as_ref().unwrap();
    assert_eq!(after.turn, before.turn);
    assert_eq!(after.energy, before.energy);
    assert_eq!(after.hand, before.hand);
    assert_eq!(after.draw_pile, before.draw_pile);
    assert_eq!(after.discard_pile, before.discard_pile);
    assert_eq!(after.player.hp, before.player.hp);
    assert_eq!(after.enemies[0].hp, before.enemies[0].hp);
    assert_eq!(after.enemies[0].strength, before.enemies[0].strength);

    // The restored battle keeps projecting the same upcoming intent.
    assert_eq!(after.upcoming_intent(0), before.upcoming_intent(0));
}
