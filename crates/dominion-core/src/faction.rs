//! Factions and their resource stockpiles.

use serde::{Deserialize, Serialize};

use crate::id::FactionId;

/// The closed set of resource kinds factions can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    /// Raw minerals, collected by mining districts.
    Minerals,
    /// Refined metals, converted from minerals by foundry districts.
    RefinedMetals,
}

impl ResourceKind {
    /// Number of resource kinds known to the system.
    pub const COUNT: usize = 2;

    /// All kinds, in enum order.
    pub const ALL: [ResourceKind; Self::COUNT] =
        [ResourceKind::Minerals, ResourceKind::RefinedMetals];

    pub fn index(self) -> usize {
        self as usize
    }
}

/// A fixed-size mapping from resource kind to quantity: one slot for
/// every [`ResourceKind`], always present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Stockpile {
    amounts: [i64; ResourceKind::COUNT],
}

impl Stockpile {
    pub fn get(&self, kind: ResourceKind) -> i64 {
        self.amounts[kind.index()]
    }

    pub fn set(&mut self, kind: ResourceKind, amount: i64) {
        self.amounts[kind.index()] = amount;
    }

    pub fn add(&mut self, kind: ResourceKind, delta: i64) {
        self.amounts[kind.index()] += delta;
    }
}

/// An entity that can own game objects and issue orders. Created at game
/// start or rebuilt from a snapshot; never deleted mid-game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Faction {
    /// Allocator-assigned id, never reused.
    pub id: FactionId,
    /// Display name.
    pub name: String,
    /// Current resource holdings.
    pub stockpile: Stockpile,
}

impl Faction {
    pub fn new(id: FactionId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            stockpile: Stockpile::default(),
        }
    }
}
