//! The snapshot: the complete externalizable state of one game instant.
//!
//! A snapshot is the only artifact that crosses the engine boundary. It
//! is a plain data aggregate -- the host decides how to encode and store
//! it; every field derives `serde` so any encoding works. Faction and
//! object lists are unsorted on input; exports write them in registry
//! enumeration order, which is what makes round-trips byte-stable.

use serde::{Deserialize, Serialize};

use dominion_starmap::Sector;

use crate::faction::Faction;
use crate::object::{GameObject, ObjectKind};

/// Everything needed to reconstruct the engine's observable state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// The turn to be calculated next.
    pub turn: u64,
    /// The star map, unchanged by turn advancement.
    pub sector: Sector,
    /// All factions. Unsorted as input; enumeration order on export.
    pub factions: Vec<Faction>,
    /// All game objects. Unsorted as input; enumeration order on export.
    pub objects: Vec<GameObject>,
}

impl Snapshot {
    /// Deterministic FNV-1a digest over the canonical field order.
    ///
    /// Two snapshots with equal digests carry the same observable state;
    /// round-trip tests compare digests instead of walking both trees.
    pub fn digest(&self) -> u64 {
        let mut hash = StateHash::new();
        hash.write_u64(self.turn);

        hash.write_u32(self.sector.size);
        hash.write_u64(self.sector.systems.len() as u64);
        for system in &self.sector.systems {
            hash.write(system.name.as_bytes());
            hash.write_u32(system.class as u32);
            hash.write_u32(system.size);
            hash.write_u32(system.minerals);
            hash.write_f32(system.position.x);
            hash.write_f32(system.position.y);
        }

        hash.write_u64(self.factions.len() as u64);
        for faction in &self.factions {
            hash.write_u32(faction.id.0);
            hash.write(faction.name.as_bytes());
            for kind in crate::faction::ResourceKind::ALL {
                hash.write_u64(faction.stockpile.get(kind) as u64);
            }
        }

        hash.write_u64(self.objects.len() as u64);
        for object in &self.objects {
            hash.write_u32(object.id.0);
            hash.write_u32(object.owner.0);
            hash.write_u32(object.class() as u32);
            match &object.kind {
                ObjectKind::Colony(colony) => {
                    hash.write_u64(colony.districts.len() as u64);
                    for district in &colony.districts {
                        hash.write_u32(*district as u32);
                    }
                }
                ObjectKind::Fleet => {}
            }
            match &object.current_order {
                Some(order) => {
                    hash.write_u32(1);
                    hash.write_u32(u32::from(order.repeating));
                    hash.write_u32(order.target_faction.0);
                    hash.write_u32(order.kind as u32);
                }
                None => hash.write_u32(0),
            }
        }

        hash.finish()
    }
}

// ---------------------------------------------------------------------------
// State hash
// ---------------------------------------------------------------------------

/// A simple deterministic hash of simulation state for round-trip and
/// desync checks.
///
/// Uses FNV-1a (64-bit) for speed and simplicity. Not cryptographic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateHash(pub u64);

impl StateHash {
    const FNV_OFFSET: u64 = 0xcbf29ce484222325;
    const FNV_PRIME: u64 = 0x100000001b3;

    /// Start a new hash.
    pub fn new() -> Self {
        Self(Self::FNV_OFFSET)
    }

    /// Feed bytes into the hash.
    pub fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.0 ^= u64::from(b);
            self.0 = self.0.wrapping_mul(Self::FNV_PRIME);
        }
    }

    /// Feed a u64 into the hash.
    pub fn write_u64(&mut self, v: u64) {
        self.write(&v.to_le_bytes());
    }

    /// Feed a u32 into the hash.
    pub fn write_u32(&mut self, v: u32) {
        self.write(&v.to_le_bytes());
    }

    /// Feed an f32 into the hash, by bit pattern.
    pub fn write_f32(&mut self, v: f32) {
        self.write(&v.to_bits().to_le_bytes());
    }

    /// Finalize and return the hash value.
    pub fn finish(self) -> u64 {
        self.0
    }
}

impl Default for StateHash {
    fn default() -> Self {
        Self::new()
    }
}
