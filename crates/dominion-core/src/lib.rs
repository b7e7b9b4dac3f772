//! Dominion Core -- the turn-based simulation engine for 4X strategy
//! games.
//!
//! This crate owns the authoritative world state (factions, ownable game
//! objects, the star map) and advances it one discrete turn at a time.
//! The only artifact crossing the boundary is the [`snapshot::Snapshot`]:
//! the engine rebuilds its registries from a snapshot on every turn and
//! exports a new one when the turn completes.
//!
//! # Turn Pipeline
//!
//! Each call to [`engine::Engine::end_turn`] runs:
//!
//! 1. **Load** -- rebuild the registry from the incoming snapshot,
//!    validating faction-id density, per-class object-id uniqueness, and
//!    owner back-references. Any violation aborts the turn before any
//!    state changes.
//! 2. **Collate** -- fold the submitted orders into a per-object sheet;
//!    when two orders target the same object id, the later submission
//!    wins.
//! 3. **Dispatch** -- walk every object in registry enumeration order
//!    (faction id, then class, then object id) and run its per-turn
//!    transition with the matched order, if any.
//! 4. **Export** -- increment the turn counter and emit a new snapshot
//!    with the sector unchanged and factions/objects in enumeration
//!    order.
//!
//! # Key Types
//!
//! - [`engine::Engine`] -- lifecycle owner and turn orchestrator.
//! - [`registry::Registry`] -- faction/object partitions with stable
//!   enumeration and load-time validation.
//! - [`id::IdAllocator`] -- monotonic per-category id issuance, rebuilt
//!   as max-observed + 1 on every load.
//! - [`object::GameObject`] -- an ownable, orderable entity; class
//!   payloads live in [`object::ObjectKind`].
//! - [`order::OrderSheet`] -- last-write-wins collation of submitted
//!   orders.
//! - [`snapshot::Snapshot`] -- the externalizable state of one game
//!   instant, plus an FNV-1a digest for round-trip checks.

pub mod engine;
pub mod faction;
pub mod id;
pub mod object;
pub mod order;
pub mod registry;
pub mod snapshot;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
