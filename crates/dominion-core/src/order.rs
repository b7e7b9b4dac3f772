//! Orders: per-turn instructions submitted from outside the engine.
//!
//! Orders are transient -- they arrive with an `end_turn` call, are
//! collated into an [`OrderSheet`], and survive only as the
//! `current_order` copied onto the object they were delivered to.
//! Delivery matches on the bare object id. Combined with the per-class
//! id spaces, an order addressed to id N reaches every object whose id
//! is N regardless of class; that coupling is intentional and relies on
//! ids being unique per class across all factions.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::id::{FactionId, ObjectId};

/// The closed set of actions an order can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderKind {
    /// Explore an unexplored system.
    Explore,
    /// Expand to an explored, unowned system.
    Expand,
    /// Build a new district on an owned system.
    Build,
    /// Attack an explored enemy system.
    Attack,
    /// Defend an owned system.
    Defend,
}

/// One instruction for a game object, executed during turn advancement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Whether the order reissues itself at the start of the next turn.
    pub repeating: bool,
    /// Faction owning the order's target.
    pub target_faction: FactionId,
    /// The action to take.
    pub kind: OrderKind,
}

/// An order addressed to a specific object: the per-turn submission unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuedOrder {
    /// The object the order is addressed to, by id.
    pub object: ObjectId,
    /// The order itself.
    pub order: Order,
}

/// Submitted orders collated by object id, ready for dispatch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderSheet {
    by_object: BTreeMap<ObjectId, Order>,
}

impl OrderSheet {
    /// Fold a submission batch into a per-object sheet. When several
    /// orders address the same object, the last one in submission order
    /// silently wins.
    pub fn collate(issued: &[IssuedOrder]) -> Self {
        let mut by_object = BTreeMap::new();
        for entry in issued {
            by_object.insert(entry.object, entry.order);
        }
        Self { by_object }
    }

    /// The order addressed to `object`, if one was submitted.
    pub fn get(&self, object: ObjectId) -> Option<&Order> {
        self.by_object.get(&object)
    }

    /// Number of distinct objects with an order this turn.
    pub fn len(&self) -> usize {
        self.by_object.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_object.is_empty()
    }
}
