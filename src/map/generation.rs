//! Procedural act map generation.
//!
//! Layout is fixed per act: a row of start encounters, weighted middle
//! floors, a rest floor, then the boss. Node payloads (encounters,
//! treasure relics) are rolled here so a generated map is a complete
//! itinerary.

use rand::Rng;

use crate::content::monsters::{random_monster, MonsterKind};
use crate::content::relics::random_non_boss_relic;
use crate::core::constants::{
    MAP_ELITE_MIN_FLOOR, MAP_ELITE_THRESHOLD, MAP_EVENT_THRESHOLD, MAP_FLOORS,
    MAP_MAX_INBOUND_LINKS, MAP_SHOP_THRESHOLD, MAP_START_NODES, MAP_TREASURE_THRESHOLD,
};
use crate::map::types::{Connection, Map, Node, NodeKind, NodePayload};

/// Generates the full map for an act. Every path from a start node
/// reaches the boss.
pub fn generate_map(act: u32, rng: &mut impl Rng) -> Map {
    let max_floor = MAP_FLOORS - 1;
    let rest_floor = max_floor - 1;
    let mut nodes: Vec<Node> = Vec::new();
    let mut connections: Vec<Connection> = Vec::new();
    let mut next_id: u32 = 0;

    let mut push_node = |nodes: &mut Vec<Node>, floor: u32, kind: NodeKind, payload: NodePayload| {
        let id = next_id;
        next_id += 1;
        nodes.push(Node {
            id,
            floor,
            kind,
            visited: false,
            payload,
        });
        id
    };

    // Start row: plain encounters only.
    for _ in 0..MAP_START_NODES {
        let (kind, payload) = encounter_or_event(MonsterKind::Normal, act, rng);
        push_node(&mut nodes, 0, kind, payload);
    }

    // Middle floors.
    for floor in 1..rest_floor {
        let count = if floor == 1 {
            MAP_START_NODES
        } else if floor <= 6 {
            4
        } else {
            3
        };
        for _ in 0..count {
            let (kind, payload) = roll_node(floor, act, rng);
            push_node(&mut nodes, floor, kind, payload);
        }
    }

    // Rest before the boss, then the boss itself.
    push_node(&mut nodes, rest_floor, NodeKind::Rest, NodePayload::Rest);
    let (boss_kind, boss_payload) = encounter_or_event(MonsterKind::Boss, act, rng);
    push_node(&mut nodes, max_floor, boss_kind, boss_payload);

    // Wire adjacent floors.
    for floor in 1..=max_floor {
        let prev: Vec<u32> = ids_on_floor(&nodes, floor - 1);
        let here: Vec<u32> = ids_on_floor(&nodes, floor);

        if floor == 1 {
            // One-to-one lanes out of the start row.
            for (from, to) in prev.iter().zip(here.iter()) {
                connections.push(Connection {
                    from: *from,
                    to: *to,
                });
            }
        } else if here.len() == 1 {
            // Rest and boss floors funnel everything.
            for from in &prev {
                connections.push(Connection {
                    from: *from,
                    to: here[0],
                });
            }
        } else {
            for to in &here {
                let links = rng.gen_range(1..=MAP_MAX_INBOUND_LINKS);
                for _ in 0..links {
                    let from = prev[rng.gen_range(0..prev.len())];
                    let edge = Connection { from, to: *to };
                    if !connections.contains(&edge) {
                        connections.push(edge);
                    }
                }
            }
            // No dead ends: every previous-floor node keeps a way forward.
            for from in &prev {
                if !connections.iter().any(|c| c.from == *from) {
                    let to = here[rng.gen_range(0..here.len())];
                    connections.push(Connection { from: *from, to });
                }
            }
        }
    }

    Map {
        act,
        max_floor,
        nodes,
        connections,
        current_node_id: None,
    }
}

fn ids_on_floor(nodes: &[Node], floor: u32) -> Vec<u32> {
    nodes
        .iter()
        .filter(|n| n.floor == floor)
        .map(|n| n.id)
        .collect()
}

/// Weighted node typing for middle floors. Elites stay out of the
/// early floors.
fn roll_node(floor: u32, act: u32, rng: &mut impl Rng) -> (NodeKind, NodePayload) {
    let roll: f64 = rng.gen();
    if roll < MAP_ELITE_THRESHOLD && floor > MAP_ELITE_MIN_FLOOR {
        encounter_or_event(MonsterKind::Elite, act, rng)
    } else if roll < MAP_SHOP_THRESHOLD {
        (NodeKind::Shop, NodePayload::Shop)
    } else if roll < MAP_TREASURE_THRESHOLD {
        match random_non_boss_relic(rng) {
            Some(relic) => (NodeKind::Treasure, NodePayload::Treasure(relic)),
            None => (NodeKind::Event, NodePayload::Event),
        }
    } else if roll < MAP_EVENT_THRESHOLD {
        (NodeKind::Event, NodePayload::Event)
    } else {
        encounter_or_event(MonsterKind::Normal, act, rng)
    }
}

/// Rolls an encounter of the given tier, degrading to an event node if
/// the monster pool is somehow empty.
fn encounter_or_event(
    kind: MonsterKind,
    act: u32,
    rng: &mut impl Rng,
) -> (NodeKind, NodePayload) {
    match random_monster(kind, act, rng) {
        Some(monster) => {
            let node_kind = match kind {
                MonsterKind::Normal => NodeKind::Monster,
                MonsterKind::Elite => NodeKind::Elite,
                MonsterKind::Boss => NodeKind::Boss,
            };
            (node_kind, NodePayload::Encounter(monster))
        }
        None => (NodeKind::Event, NodePayload::Event),
    }
}
