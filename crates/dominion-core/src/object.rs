//! Game objects: the ownable, orderable entities of the simulation.
//!
//! Closed polymorphism over the object classes is modeled as an enum
//! payload ([`ObjectKind`]) whose discriminant is the [`ObjectClass`]
//! tag. The per-turn transition is uniform at this layer: apply the
//! incoming order, then hand off to the class payload, which is where
//! per-class effects (construction, combat, movement) will attach.

use serde::{Deserialize, Serialize};

use crate::id::{FactionId, ObjectId};
use crate::order::Order;

/// The closed set of object classes. Object ids are unique per class,
/// across all factions.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum ObjectClass {
    /// An owned star system.
    Colony,
    /// An owned fleet.
    Fleet,
}

impl ObjectClass {
    /// Number of object classes.
    pub const COUNT: usize = 2;

    /// All classes, in enumeration (and partition) order.
    pub const ALL: [ObjectClass; Self::COUNT] = [ObjectClass::Colony, ObjectClass::Fleet];

    pub fn index(self) -> usize {
        self as usize
    }
}

/// The closed set of district types a colony can build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DistrictType {
    /// Collects minerals.
    Mining,
    /// Converts minerals to refined metals.
    Foundry,
}

/// Colony payload: a faction's hold on a system.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Colony {
    /// Completed districts in build order. Duplicates are legal; a
    /// colony may run several districts of the same type.
    pub districts: Vec<DistrictType>,
}

impl Colony {
    /// Record a completed district.
    pub fn build_district(&mut self, kind: DistrictType) {
        self.districts.push(kind);
    }

    fn advance(&mut self) -> TurnOutcome {
        // District yields and construction effects attach here.
        TurnOutcome::Idle
    }
}

/// Class-specific payload of a game object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ObjectKind {
    Colony(Colony),
    Fleet,
}

impl ObjectKind {
    /// The class tag for this payload.
    pub fn class(&self) -> ObjectClass {
        match self {
            ObjectKind::Colony(_) => ObjectClass::Colony,
            ObjectKind::Fleet => ObjectClass::Fleet,
        }
    }
}

/// Result of one object's per-turn transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum TurnOutcome {
    /// Nothing beyond order bookkeeping happened.
    Idle,
}

/// An ownable, orderable simulation entity. The registry owns every
/// object; `owner` is a non-owning integer back-reference to a faction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameObject {
    /// Unique within this object's class, across all factions.
    pub id: ObjectId,
    /// Owning faction, by id.
    pub owner: FactionId,
    /// Class payload.
    pub kind: ObjectKind,
    /// The order this object is currently carrying out, if any.
    pub current_order: Option<Order>,
}

impl GameObject {
    pub fn new(id: ObjectId, owner: FactionId, kind: ObjectKind) -> Self {
        Self {
            id,
            owner,
            kind,
            current_order: None,
        }
    }

    /// The class tag for this object.
    pub fn class(&self) -> ObjectClass {
        self.kind.class()
    }

    /// Rewrite the owner back-reference. This does NOT move the object
    /// between registry partitions; the caller re-registers it under the
    /// new faction.
    pub fn change_owner(&mut self, new_owner: FactionId) {
        self.owner = new_owner;
    }

    /// Apply a newly delivered order, if any, and run this object's
    /// state forward one turn.
    pub fn end_turn(&mut self, new_order: Option<Order>) -> TurnOutcome {
        if let Some(order) = new_order {
            self.current_order = Some(order);
        }
        match &mut self.kind {
            ObjectKind::Colony(colony) => colony.advance(),
            ObjectKind::Fleet => TurnOutcome::Idle,
        }
    }
}
