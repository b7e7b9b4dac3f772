//! The object/faction registry: ownership partitions, stable
//! enumeration, and load-time consistency validation.
//!
//! Objects are partitioned by owning faction, then by class, then keyed
//! by id. All three levels are ordered maps, so full enumeration yields
//! faction-id ascending, class ascending, object-id ascending -- the
//! order every snapshot export uses. Round-trip tests depend on that
//! order being reproducible.
//!
//! `load` rebuilds the registry from snapshot lists and is atomic: the
//! candidate state is assembled on the side and committed only once all
//! validation passes, so a rejected snapshot leaves the registry exactly
//! as it was.

use std::collections::{BTreeMap, BTreeSet};

use crate::faction::Faction;
use crate::id::{FactionId, IdAllocator, ObjectId};
use crate::object::{GameObject, ObjectClass, ObjectKind};

/// One faction's objects, partitioned by class.
type ClassPartitions = [BTreeMap<ObjectId, GameObject>; ObjectClass::COUNT];

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors from registering a single object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("object {id:?} already registered under faction {owner:?} in class {class:?}")]
    DuplicateObject {
        owner: FactionId,
        class: ObjectClass,
        id: ObjectId,
    },
    #[error("owner faction {0:?} is not registered")]
    UnknownOwner(FactionId),
}

/// Errors from rebuilding the registry out of a snapshot. All are fatal
/// to the load; the snapshot must be treated as corrupt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    /// Faction ids are not a dense `0..N-1` range (gap or duplicate).
    #[error("faction id {0:?} is duplicated or leaves a gap in the 0..N id range")]
    FactionInconsistency(FactionId),
    /// Two objects of the same class share an id, across any factions.
    #[error("object id {id:?} appears more than once in class {class:?}")]
    ObjectIdCollision { class: ObjectClass, id: ObjectId },
    /// An object's owner back-reference points at no loaded faction.
    #[error("object {id:?} references unknown owner faction {owner:?}")]
    UnknownOwner { id: ObjectId, owner: FactionId },
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// Owns every faction and game object in the running simulation.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    allocator: IdAllocator,
    factions: BTreeMap<FactionId, Faction>,
    objects: BTreeMap<FactionId, ClassPartitions>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all state and return the allocator to fresh-game zero.
    pub fn reset(&mut self) {
        self.allocator.reset();
        self.factions.clear();
        self.objects.clear();
    }

    // -----------------------------------------------------------------------
    // Factions
    // -----------------------------------------------------------------------

    /// Create a faction with the next available id and empty partitions.
    pub fn insert_faction(&mut self, name: impl Into<String>) -> FactionId {
        let id = self.allocator.next_faction_id();
        self.factions.insert(id, Faction::new(id, name));
        self.objects.insert(id, ClassPartitions::default());
        id
    }

    pub fn faction_count(&self) -> usize {
        self.factions.len()
    }

    pub fn get_faction(&self, id: FactionId) -> Option<&Faction> {
        self.factions.get(&id)
    }

    pub fn get_faction_mut(&mut self, id: FactionId) -> Option<&mut Faction> {
        self.factions.get_mut(&id)
    }

    /// All factions, id ascending.
    pub fn factions(&self) -> impl Iterator<Item = &Faction> + '_ {
        self.factions.values()
    }

    // -----------------------------------------------------------------------
    // Objects
    // -----------------------------------------------------------------------

    /// Allocate an id for `kind`'s class and register the new object
    /// under `owner`. The owner is checked before an id is issued, so a
    /// failed spawn never burns one.
    pub fn spawn(&mut self, owner: FactionId, kind: ObjectKind) -> Result<ObjectId, RegistryError> {
        if !self.factions.contains_key(&owner) {
            return Err(RegistryError::UnknownOwner(owner));
        }
        let id = self.allocator.next_object_id(kind.class());
        self.register(GameObject::new(id, owner, kind))?;
        Ok(id)
    }

    /// Insert an already-built object into its (owner, class, id) slot.
    /// Fails if the slot is taken or the owner is unknown. This checks
    /// only the target partition; cross-faction id uniqueness is a
    /// load-time validation.
    pub fn register(&mut self, object: GameObject) -> Result<(), RegistryError> {
        let class = object.class();
        let partitions = self
            .objects
            .get_mut(&object.owner)
            .ok_or(RegistryError::UnknownOwner(object.owner))?;
        let slot = &mut partitions[class.index()];
        if slot.contains_key(&object.id) {
            return Err(RegistryError::DuplicateObject {
                owner: object.owner,
                class,
                id: object.id,
            });
        }
        slot.insert(object.id, object);
        Ok(())
    }

    pub fn get_object(
        &self,
        owner: FactionId,
        class: ObjectClass,
        id: ObjectId,
    ) -> Option<&GameObject> {
        self.objects
            .get(&owner)
            .and_then(|partitions| partitions[class.index()].get(&id))
    }

    pub fn object_count(&self) -> usize {
        self.objects
            .values()
            .map(|partitions| partitions.iter().map(BTreeMap::len).sum::<usize>())
            .sum()
    }

    /// Every object: faction id ascending, then class, then object id.
    /// This is the export order.
    pub fn objects(&self) -> impl Iterator<Item = &GameObject> + '_ {
        self.objects
            .values()
            .flat_map(|partitions| partitions.iter().flat_map(|class_map| class_map.values()))
    }

    /// Same order as [`Registry::objects`], mutable -- the turn loop's
    /// traversal.
    pub fn objects_mut(&mut self) -> impl Iterator<Item = &mut GameObject> + '_ {
        self.objects.values_mut().flat_map(|partitions| {
            partitions
                .iter_mut()
                .flat_map(|class_map| class_map.values_mut())
        })
    }

    // -----------------------------------------------------------------------
    // Load
    // -----------------------------------------------------------------------

    /// Rebuild the registry from snapshot lists.
    ///
    /// Validation, in order:
    /// 1. faction ids dense `0..N-1`, no duplicates;
    /// 2. no (class, id) pair repeated across any factions;
    /// 3. every owner back-reference resolves.
    ///
    /// On success the allocator resumes one past the highest observed id
    /// in each category. On failure the registry is left untouched.
    pub fn load(
        &mut self,
        factions: Vec<Faction>,
        objects: Vec<GameObject>,
    ) -> Result<(), LoadError> {
        let mut new_factions = BTreeMap::new();
        for faction in factions {
            let id = faction.id;
            if new_factions.insert(id, faction).is_some() {
                return Err(LoadError::FactionInconsistency(id));
            }
        }
        for i in 0..new_factions.len() {
            let expected = FactionId(i as u32);
            if !new_factions.contains_key(&expected) {
                return Err(LoadError::FactionInconsistency(expected));
            }
        }

        let mut new_objects: BTreeMap<FactionId, ClassPartitions> = new_factions
            .keys()
            .map(|&id| (id, ClassPartitions::default()))
            .collect();
        let mut seen: [BTreeSet<ObjectId>; ObjectClass::COUNT] = Default::default();
        let mut max_ids: [Option<u32>; ObjectClass::COUNT] = [None; ObjectClass::COUNT];

        for object in objects {
            let class = object.class();
            if !seen[class.index()].insert(object.id) {
                return Err(LoadError::ObjectIdCollision {
                    class,
                    id: object.id,
                });
            }
            let partitions = new_objects.get_mut(&object.owner).ok_or(LoadError::UnknownOwner {
                id: object.id,
                owner: object.owner,
            })?;
            let slot = max_ids[class.index()].get_or_insert(object.id.0);
            *slot = (*slot).max(object.id.0);
            partitions[class.index()].insert(object.id, object);
        }

        // Everything validated; commit.
        self.factions = new_factions;
        self.objects = new_objects;
        self.allocator.reset();
        self.allocator.resume_faction_ids(self.factions.len() as u32);
        for class in ObjectClass::ALL {
            let next = max_ids[class.index()].map_or(0, |max| max + 1);
            self.allocator.resume_object_ids(class, next);
        }
        Ok(())
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::Colony;

    fn faction(id: u32) -> Faction {
        Faction::new(FactionId(id), format!("Faction {id}"))
    }

    fn colony(id: u32, owner: u32) -> GameObject {
        GameObject::new(
            ObjectId(id),
            FactionId(owner),
            ObjectKind::Colony(Colony::default()),
        )
    }

    fn fleet(id: u32, owner: u32) -> GameObject {
        GameObject::new(ObjectId(id), FactionId(owner), ObjectKind::Fleet)
    }

    // -----------------------------------------------------------------------
    // Registration and enumeration
    // -----------------------------------------------------------------------

    #[test]
    fn spawn_assigns_sequential_ids_per_class() {
        let mut registry = Registry::new();
        let gaia = registry.insert_faction("Gaia");
        let rivals = registry.insert_faction("Rivals");

        assert_eq!(gaia, FactionId(0));
        assert_eq!(rivals, FactionId(1));

        let c0 = registry.spawn(gaia, ObjectKind::Colony(Colony::default())).unwrap();
        let f0 = registry.spawn(gaia, ObjectKind::Fleet).unwrap();
        // The colony sequence is global: a rival colony continues it.
        let c1 = registry
            .spawn(rivals, ObjectKind::Colony(Colony::default()))
            .unwrap();

        assert_eq!(c0, ObjectId(0));
        assert_eq!(f0, ObjectId(0));
        assert_eq!(c1, ObjectId(1));
        assert_eq!(registry.object_count(), 3);
    }

    #[test]
    fn spawn_for_unknown_owner_fails() {
        let mut registry = Registry::new();
        let err = registry.spawn(FactionId(5), ObjectKind::Fleet).unwrap_err();
        assert_eq!(err, RegistryError::UnknownOwner(FactionId(5)));
    }

    #[test]
    fn register_rejects_occupied_slot() {
        let mut registry = Registry::new();
        let gaia = registry.insert_faction("Gaia");
        registry.register(colony(4, 0)).unwrap();
        let err = registry.register(colony(4, 0)).unwrap_err();
        assert_eq!(
            err,
            RegistryError::DuplicateObject {
                owner: gaia,
                class: ObjectClass::Colony,
                id: ObjectId(4),
            }
        );
    }

    #[test]
    fn enumeration_is_faction_then_class_then_id() {
        let mut registry = Registry::new();
        registry.insert_faction("A");
        registry.insert_faction("B");

        // Insert deliberately out of order.
        registry.register(fleet(1, 1)).unwrap();
        registry.register(colony(2, 0)).unwrap();
        registry.register(fleet(0, 0)).unwrap();
        registry.register(colony(1, 1)).unwrap();
        registry.register(colony(0, 0)).unwrap();

        let order: Vec<(u32, ObjectClass, u32)> = registry
            .objects()
            .map(|o| (o.owner.0, o.class(), o.id.0))
            .collect();
        assert_eq!(
            order,
            vec![
                (0, ObjectClass::Colony, 0),
                (0, ObjectClass::Colony, 2),
                (0, ObjectClass::Fleet, 0),
                (1, ObjectClass::Colony, 1),
                (1, ObjectClass::Fleet, 1),
            ]
        );
    }

    // -----------------------------------------------------------------------
    // Load validation
    // -----------------------------------------------------------------------

    #[test]
    fn load_accepts_dense_factions() {
        let mut registry = Registry::new();
        registry
            .load(vec![faction(1), faction(0), faction(2)], Vec::new())
            .unwrap();
        assert_eq!(registry.faction_count(), 3);
    }

    #[test]
    fn load_rejects_duplicate_faction_id() {
        let mut registry = Registry::new();
        let err = registry
            .load(vec![faction(0), faction(0)], Vec::new())
            .unwrap_err();
        assert_eq!(err, LoadError::FactionInconsistency(FactionId(0)));
    }

    #[test]
    fn load_rejects_faction_id_gap() {
        let mut registry = Registry::new();
        let err = registry
            .load(vec![faction(0), faction(2)], Vec::new())
            .unwrap_err();
        assert_eq!(err, LoadError::FactionInconsistency(FactionId(1)));
    }

    #[test]
    fn load_rejects_cross_faction_collision_in_same_class() {
        let mut registry = Registry::new();
        let err = registry
            .load(
                vec![faction(0), faction(1)],
                vec![colony(4, 0), colony(4, 1)],
            )
            .unwrap_err();
        assert_eq!(
            err,
            LoadError::ObjectIdCollision {
                class: ObjectClass::Colony,
                id: ObjectId(4),
            }
        );
    }

    #[test]
    fn load_allows_same_id_across_classes() {
        let mut registry = Registry::new();
        registry
            .load(
                vec![faction(0), faction(1)],
                vec![colony(4, 0), fleet(4, 1)],
            )
            .unwrap();
        assert_eq!(registry.object_count(), 2);
    }

    #[test]
    fn load_rejects_unknown_owner() {
        let mut registry = Registry::new();
        let err = registry
            .load(vec![faction(0)], vec![colony(0, 3)])
            .unwrap_err();
        assert_eq!(
            err,
            LoadError::UnknownOwner {
                id: ObjectId(0),
                owner: FactionId(3),
            }
        );
    }

    #[test]
    fn failed_load_leaves_registry_untouched() {
        let mut registry = Registry::new();
        registry.insert_faction("Gaia");
        registry.register(colony(7, 0)).unwrap();

        let err = registry
            .load(
                vec![faction(0), faction(1)],
                vec![colony(4, 0), colony(4, 1)],
            )
            .unwrap_err();
        assert!(matches!(err, LoadError::ObjectIdCollision { .. }));

        // Prior state survives the rejected load.
        assert_eq!(registry.faction_count(), 1);
        assert_eq!(registry.object_count(), 1);
        assert!(
            registry
                .get_object(FactionId(0), ObjectClass::Colony, ObjectId(7))
                .is_some()
        );
    }

    // -----------------------------------------------------------------------
    // Allocator recomputation
    // -----------------------------------------------------------------------

    #[test]
    fn allocator_resumes_past_highest_loaded_id() {
        let mut registry = Registry::new();
        registry
            .load(
                vec![faction(0), faction(1)],
                vec![colony(0, 0), colony(3, 1), colony(5, 0)],
            )
            .unwrap();

        // Next colony id continues past the observed maximum.
        let next = registry
            .spawn(FactionId(0), ObjectKind::Colony(Colony::default()))
            .unwrap();
        assert_eq!(next, ObjectId(6));

        // The fleet class saw no objects, so it restarts at zero.
        let first_fleet = registry.spawn(FactionId(0), ObjectKind::Fleet).unwrap();
        assert_eq!(first_fleet, ObjectId(0));

        // Faction issuance continues past the loaded count.
        let next_faction = registry.insert_faction("Newcomers");
        assert_eq!(next_faction, FactionId(2));
    }

    #[test]
    fn reset_clears_everything() {
        let mut registry = Registry::new();
        registry.insert_faction("Gaia");
        registry
            .spawn(FactionId(0), ObjectKind::Colony(Colony::default()))
            .unwrap();
        registry.reset();

        assert_eq!(registry.faction_count(), 0);
        assert_eq!(registry.object_count(), 0);
        assert_eq!(registry.insert_faction("Again"), FactionId(0));
    }
}
