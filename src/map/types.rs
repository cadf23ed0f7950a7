//! Act map structures and navigation rules.
//!
//! A map is a layered directed graph: nodes grouped by floor, edges
//! only between adjacent floors. Navigation is by node id; a move is
//! legal only along an edge from the current node (or onto floor 0
//! when no node has been entered yet).

use serde::{Deserialize, Serialize};

use crate::content::monsters::Monster;
use crate::content::relics::Relic;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    Monster,
    Elite,
    Boss,
    Rest,
    Shop,
    Treasure,
    Event,
}

/// What entering the node resolves to. Encounters and treasure are
/// rolled at generation time so the map is fully deterministic once
/// built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NodePayload {
    Encounter(Monster),
    Rest,
    Shop,
    Treasure(Relic),
    Event,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: u32,
    pub floor: u32,
    pub kind: NodeKind,
    pub visited: bool,
    pub payload: NodePayload,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    pub from: u32,
    pub to: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Map {
    pub act: u32,
    /// Highest floor index (the boss floor).
    pub max_floor: u32,
    pub nodes: Vec<Node>,
    pub connections: Vec<Connection>,
    pub current_node_id: Option<u32>,
}

impl Map {
    pub fn node(&self, id: u32) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    fn node_mut(&mut self, id: u32) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    pub fn current_node(&self) -> Option<&Node> {
        self.current_node_id.and_then(|id| self.node(id))
    }

    pub fn nodes_by_floor(&self, floor: u32) -> Vec<&Node> {
        self.nodes.iter().filter(|n| n.floor == floor).collect()
    }

    /// A node is accessible when it is on floor 0 and no node has been
    /// entered yet, when it is the current node, or when an edge leads
    /// to it from the current node.
    pub fn is_node_accessible(&self, id: u32) -> bool {
        let Some(node) = self.node(id) else {
            return false;
        };
        match self.current_node_id {
            None => node.floor == 0,
            Some(current) => {
                id == current
                    || self
                        .connections
                        .iter()
                        .any(|c| c.from == current && c.to == id)
            }
        }
    }

    /// Moves onto the node, returning it. `None` leaves the position
    /// unchanged when the move is not legal.
    pub fn move_to_node(&mut self, id: u32) -> Option<&Node> {
        if !self.is_node_accessible(id) {
            return None;
        }
        self.current_node_id = Some(id);
        self.node(id)
    }

    /// Marks a node visited. Idempotent; unknown ids are ignored.
    pub fn visit_node(&mut self, id: u32) {
        if let Some(node) = self.node_mut(id) {
            node.visited = true;
        }
    }

    /// The nodes the player may move to next: floor 0 before the first
    /// move, otherwise the unvisited targets of edges from the current
    /// node.
    pub fn available_next_nodes(&self) -> Vec<&Node> {
        match self.current_node_id {
            None => self.nodes_by_floor(0),
            Some(current) => self
                .connections
                .iter()
                .filter(|c| c.from == current)
                .filter_map(|c| self.node(c.to))
                .filter(|n| !n.visited)
                .collect(),
        }
    }
}
