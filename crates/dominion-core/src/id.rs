//! Identifier newtypes and the per-category allocator.
//!
//! Faction ids live in one sequence; object ids live in one independent
//! sequence per [`ObjectClass`]. An object id is therefore unique among
//! all objects of its class -- across every faction -- but two objects of
//! different classes may share a numeric id.

use serde::{Deserialize, Serialize};

use crate::object::ObjectClass;

/// Identifies a faction. Dense: a valid game always has ids `0..N-1`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct FactionId(pub u32);

/// Identifies a game object within its class. Cheap to copy and compare.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ObjectId(pub u32);

/// Monotonic id issuance for factions and for each object class.
///
/// Counters only ever move forward within one game; removal does not
/// recycle ids. The whole allocator is rebuilt from observed state on
/// every snapshot load, so nothing here persists across the boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdAllocator {
    next_faction: u32,
    next_object: [u32; ObjectClass::COUNT],
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next faction id, starting at 0.
    pub fn next_faction_id(&mut self) -> FactionId {
        let id = self.next_faction;
        self.next_faction += 1;
        FactionId(id)
    }

    /// Issue the next object id for `class`, starting at 0. Sequences
    /// for different classes do not affect each other.
    pub fn next_object_id(&mut self, class: ObjectClass) -> ObjectId {
        let slot = &mut self.next_object[class.index()];
        let id = *slot;
        *slot += 1;
        ObjectId(id)
    }

    /// Return all counters to zero (fresh-game state).
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Continue faction issuance from `next` (one past the highest
    /// loaded id).
    pub fn resume_faction_ids(&mut self, next: u32) {
        self.next_faction = next;
    }

    /// Continue object issuance for `class` from `next`.
    pub fn resume_object_ids(&mut self, class: ObjectClass, next: u32) {
        self.next_object[class.index()] = next;
    }
}
