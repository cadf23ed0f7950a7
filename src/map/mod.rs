//! Act map: layered node graph, generation, and navigation.

pub mod generation;
pub mod types;

pub use generation::generate_map;
pub use types::{Connection, Map, Node, NodeKind, NodePayload};
