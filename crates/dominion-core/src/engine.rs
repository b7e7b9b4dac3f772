//! The simulation engine: owns the registry, the sector, and the turn
//! counter, and orchestrates turn advancement.
//!
//! # Lifecycle
//!
//! The engine is an explicit state struct, initialized empty and fully
//! rebuilt from a snapshot on every `end_turn` call. Two phases exist:
//! **Idle** (between calls) and **Advancing** (inside one). Calls are
//! synchronous and non-reentrant; `&mut self` receivers make concurrent
//! turns unrepresentable in-process. A host exposing the engine as a
//! service must serialize callers itself (mutex or actor boundary).
//!
//! # Turn contract
//!
//! `end_turn` is all-or-nothing with respect to validation: a rejected
//! snapshot changes nothing -- no turn-counter bump, no export, and the
//! registry keeps its previous contents. Once dispatch begins, per-object
//! transitions are applied in enumeration order without rollback.

use dominion_starmap::{NamePool, NamePoolExhausted, Sector, SectorConfig, SimRng};

use crate::id::{FactionId, ObjectId};
use crate::object::ObjectKind;
use crate::order::{IssuedOrder, OrderSheet};
use crate::registry::{LoadError, Registry, RegistryError};
use crate::snapshot::Snapshot;

// ---------------------------------------------------------------------------
// Errors and phases
// ---------------------------------------------------------------------------

/// Errors from one `end_turn` call. All abort the turn before any state
/// mutation or export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TurnError {
    /// The snapshot's sector has zero size or zero systems.
    #[error("sector is invalid (zero size or zero systems)")]
    InvalidSector,
    /// Registry validation rejected the snapshot.
    #[error(transparent)]
    Load(#[from] LoadError),
}

/// Where the engine is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No turn in progress.
    #[default]
    Idle,
    /// Between load and export of a single turn.
    Advancing,
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// Owns the authoritative world state and advances it turn by turn.
#[derive(Debug)]
pub struct Engine {
    registry: Registry,
    sector: Sector,
    turn: u64,
    phase: Phase,
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            registry: Registry::new(),
            sector: Sector::empty(0),
            turn: 0,
            phase: Phase::Idle,
        }
    }
}

impl Engine {
    /// An empty engine: no factions, no objects, no sector, turn 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// The turn to be calculated next.
    pub fn turn(&self) -> u64 {
        self.turn
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The current star map.
    pub fn sector(&self) -> &Sector {
        &self.sector
    }

    /// Read access to the registry, for hosts inspecting state between
    /// turns.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    // -----------------------------------------------------------------------
    // Game setup
    // -----------------------------------------------------------------------

    /// Start a fresh game: generate a sector from `config`, reset all
    /// registries, set the turn counter to 1, and export the initial
    /// snapshot. Fails without touching engine state if the name pool
    /// cannot cover the requested system count.
    pub fn new_game(
        &mut self,
        config: &SectorConfig,
        rng: &mut SimRng,
        names: &mut NamePool,
    ) -> Result<Snapshot, NamePoolExhausted> {
        let sector = Sector::generate(config, rng, names)?;
        self.registry.reset();
        self.sector = sector;
        self.turn = 1;
        Ok(self.export())
    }

    /// Create a faction with the next available id.
    pub fn spawn_faction(&mut self, name: impl Into<String>) -> FactionId {
        self.registry.insert_faction(name)
    }

    /// Create a game object owned by `owner`, with an allocator-assigned
    /// id.
    pub fn spawn_object(
        &mut self,
        owner: FactionId,
        kind: ObjectKind,
    ) -> Result<ObjectId, RegistryError> {
        self.registry.spawn(owner, kind)
    }

    // -----------------------------------------------------------------------
    // Turn advancement
    // -----------------------------------------------------------------------

    /// Advance `snapshot` by one turn, delivering `orders` to their
    /// objects, and export the resulting snapshot.
    ///
    /// On any validation failure the call aborts: the turn counter does
    /// not move and nothing is exported.
    pub fn end_turn(
        &mut self,
        snapshot: Snapshot,
        orders: &[IssuedOrder],
    ) -> Result<Snapshot, TurnError> {
        self.phase = Phase::Advancing;
        let result = self.advance(snapshot, orders);
        self.phase = Phase::Idle;
        result
    }

    fn advance(
        &mut self,
        snapshot: Snapshot,
        orders: &[IssuedOrder],
    ) -> Result<Snapshot, TurnError> {
        let Snapshot {
            turn,
            sector,
            factions,
            objects,
        } = snapshot;

        if sector.size == 0 || sector.systems.is_empty() {
            return Err(TurnError::InvalidSector);
        }
        self.registry.load(factions, objects)?;
        self.sector = sector;

        // Delivery matches on object id alone; the later of two orders
        // for the same id wins.
        let sheet = OrderSheet::collate(orders);
        for object in self.registry.objects_mut() {
            let order = sheet.get(object.id).copied();
            let _outcome = object.end_turn(order);
        }

        self.turn = turn + 1;
        Ok(self.export())
    }

    // -----------------------------------------------------------------------
    // Export
    // -----------------------------------------------------------------------

    /// Capture the current engine state as a snapshot, with factions and
    /// objects in registry enumeration order.
    pub fn export(&self) -> Snapshot {
        Snapshot {
            turn: self.turn,
            sector: self.sector.clone(),
            factions: self.registry.factions().cloned().collect(),
            objects: self.registry.objects().cloned().collect(),
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
