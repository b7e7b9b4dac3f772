//! Shared test helpers for unit tests, integration tests, and benchmarks.
//!
//! Gated behind `#[cfg(any(test, feature = "test-utils"))]` so these
//! helpers are available everywhere the crate is tested or benchmarked.

use dominion_starmap::{Position, Sector, SectorConfig, StarSystem, StellarClass};

use crate::faction::Faction;
use crate::id::{FactionId, ObjectId};
use crate::object::{Colony, DistrictType, GameObject, ObjectKind};
use crate::order::{IssuedOrder, Order, OrderKind};
use crate::snapshot::Snapshot;

// ===========================================================================
// Factions and objects
// ===========================================================================

pub fn faction(id: u32, name: &str) -> Faction {
    Faction::new(FactionId(id), name)
}

pub fn colony(id: u32, owner: u32) -> GameObject {
    GameObject::new(
        ObjectId(id),
        FactionId(owner),
        ObjectKind::Colony(Colony::default()),
    )
}

pub fn colony_with_districts(id: u32, owner: u32, districts: Vec<DistrictType>) -> GameObject {
    GameObject::new(
        ObjectId(id),
        FactionId(owner),
        ObjectKind::Colony(Colony { districts }),
    )
}

pub fn fleet(id: u32, owner: u32) -> GameObject {
    GameObject::new(ObjectId(id), FactionId(owner), ObjectKind::Fleet)
}

// ===========================================================================
// Orders
// ===========================================================================

pub fn order(kind: OrderKind, target_faction: u32, repeating: bool) -> Order {
    Order {
        repeating,
        target_faction: FactionId(target_faction),
        kind,
    }
}

pub fn issued(object: u32, order: Order) -> IssuedOrder {
    IssuedOrder {
        object: ObjectId(object),
        order,
    }
}

// ===========================================================================
// Sectors and snapshots
// ===========================================================================

/// A hand-built two-system sector, so fixtures never pay for generation.
pub fn tiny_sector() -> Sector {
    Sector {
        size: 10,
        systems: vec![
            StarSystem {
                name: "Alpha".to_string(),
                class: StellarClass::G,
                size: 5,
                minerals: 3,
                position: Position::new(2.0, 3.0),
            },
            StarSystem {
                name: "Beta".to_string(),
                class: StellarClass::M,
                size: 2,
                minerals: 1,
                position: Position::new(7.5, 6.25),
            },
        ],
    }
}

/// A snapshot over [`tiny_sector`] with the given lists.
pub fn snapshot(turn: u64, factions: Vec<Faction>, objects: Vec<GameObject>) -> Snapshot {
    Snapshot {
        turn,
        sector: tiny_sector(),
        factions,
        objects,
    }
}

/// A generation config small enough for tests that need a real sector.
pub fn small_sector_config() -> SectorConfig {
    SectorConfig {
        sector_size: 20,
        num_systems: 6,
        precision: 4,
        noise_scale: 10.0,
        max_system_size: 10,
    }
}
