//! Property-based tests for the Dominion core.
//!
//! Uses proptest to generate random valid (and selectively corrupted)
//! snapshots, then verify the registry and turn-loop invariants hold.

use dominion_core::engine::Engine;
use dominion_core::id::ObjectId;
use dominion_core::object::ObjectClass;
use dominion_core::registry::LoadError;
use dominion_core::snapshot::Snapshot;
use dominion_core::test_utils::*;
use proptest::prelude::*;

// ===========================================================================
// Generators
// ===========================================================================

/// Generate a valid snapshot: dense faction ids, per-class unique object
/// ids, owners drawn from the loaded factions.
fn arb_snapshot() -> impl Strategy<Value = Snapshot> {
    (1..=5u32).prop_flat_map(|n_factions| {
        (
            Just(n_factions),
            proptest::collection::btree_set(0..60u32, 0..12),
            proptest::collection::btree_set(0..60u32, 0..12),
            any::<u64>(),
            1..200u64,
        )
            .prop_map(|(n, colony_ids, fleet_ids, owner_seed, turn)| {
                let factions = (0..n).map(|i| faction(i, &format!("Faction {i}"))).collect();

                // Owners are an arbitrary but deterministic function of
                // the seed; uniqueness only matters for the ids.
                let mut objects = Vec::new();
                for (k, id) in colony_ids.iter().enumerate() {
                    let owner = (owner_seed.rotate_left(k as u32) as u32 ^ id) % n;
                    objects.push(colony(*id, owner));
                }
                for (k, id) in fleet_ids.iter().enumerate() {
                    let owner = (owner_seed.rotate_right(k as u32) as u32).wrapping_add(*id) % n;
                    objects.push(fleet(*id, owner));
                }

                snapshot(turn, factions, objects)
            })
    })
}

// ===========================================================================
// Properties
// ===========================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Any valid snapshot loads, and the export comes back in strict
    /// (faction, class, id) enumeration order.
    #[test]
    fn valid_snapshots_load_and_export_sorted(start in arb_snapshot()) {
        let mut engine = Engine::new();
        let exported = engine.end_turn(start, &[]).unwrap();

        let faction_ids: Vec<u32> = exported.factions.iter().map(|f| f.id.0).collect();
        let expected: Vec<u32> = (0..faction_ids.len() as u32).collect();
        prop_assert_eq!(faction_ids, expected);

        let keys: Vec<(u32, usize, u32)> = exported
            .objects
            .iter()
            .map(|o| (o.owner.0, o.class().index(), o.id.0))
            .collect();
        let mut sorted = keys.clone();
        sorted.sort_unstable();
        prop_assert_eq!(&keys, &sorted);

        // Per-class id uniqueness survives the trip.
        for class in ObjectClass::ALL {
            let mut ids: Vec<u32> = exported
                .objects
                .iter()
                .filter(|o| o.class() == class)
                .map(|o| o.id.0)
                .collect();
            let before = ids.len();
            ids.sort_unstable();
            ids.dedup();
            prop_assert_eq!(ids.len(), before);
        }
    }

    /// Input list order is irrelevant: a reversed snapshot exports the
    /// same state as the original.
    #[test]
    fn export_is_input_order_independent(start in arb_snapshot()) {
        let mut reversed = start.clone();
        reversed.factions.reverse();
        reversed.objects.reverse();

        let mut engine_a = Engine::new();
        let mut engine_b = Engine::new();
        let out_a = engine_a.end_turn(start, &[]).unwrap();
        let out_b = engine_b.end_turn(reversed, &[]).unwrap();

        prop_assert_eq!(out_a.digest(), out_b.digest());
        prop_assert_eq!(out_a, out_b);
    }

    /// `end_turn` always advances the counter by exactly one, and a
    /// second pass over the export reproduces the same state.
    #[test]
    fn turn_advances_by_one_and_stabilizes(start in arb_snapshot()) {
        let start_turn = start.turn;
        let mut engine = Engine::new();

        let once = engine.end_turn(start, &[]).unwrap();
        prop_assert_eq!(once.turn, start_turn + 1);

        let twice = engine.end_turn(once.clone(), &[]).unwrap();
        prop_assert_eq!(twice.turn, once.turn + 1);
        prop_assert_eq!(&once.factions, &twice.factions);
        prop_assert_eq!(&once.objects, &twice.objects);
        prop_assert_eq!(&once.sector, &twice.sector);
    }

    /// Duplicating any object id within its class corrupts the snapshot,
    /// and the engine refuses to advance it.
    #[test]
    fn duplicated_object_id_is_rejected(start in arb_snapshot()) {
        prop_assume!(!start.objects.is_empty());

        let mut corrupted = start;
        let mut double = corrupted.objects[0].clone();
        // Same class, same id, different owner where possible.
        let n = corrupted.factions.len() as u32;
        double.owner = dominion_core::id::FactionId((double.owner.0 + 1) % n);
        let class = double.class();
        let id = double.id;
        corrupted.objects.push(double);

        let mut engine = Engine::new();
        let before_turn = engine.turn();
        let result = engine.end_turn(corrupted, &[]);
        prop_assert_eq!(
            result.unwrap_err(),
            dominion_core::engine::TurnError::Load(LoadError::ObjectIdCollision { class, id })
        );
        prop_assert_eq!(engine.turn(), before_turn);
    }

    /// After a load, freshly spawned ids in each class land one past the
    /// highest loaded id (or zero for an empty class).
    #[test]
    fn spawned_ids_continue_each_class(start in arb_snapshot()) {
        let expected_colony = start
            .objects
            .iter()
            .filter(|o| o.class() == ObjectClass::Colony)
            .map(|o| o.id.0)
            .max()
            .map_or(0, |m| m + 1);
        let expected_fleet = start
            .objects
            .iter()
            .filter(|o| o.class() == ObjectClass::Fleet)
            .map(|o| o.id.0)
            .max()
            .map_or(0, |m| m + 1);

        let mut engine = Engine::new();
        engine.end_turn(start, &[]).unwrap();

        let owner = dominion_core::id::FactionId(0);
        let colony_id = engine
            .spawn_object(owner, dominion_core::object::ObjectKind::Colony(Default::default()))
            .unwrap();
        let fleet_id = engine
            .spawn_object(owner, dominion_core::object::ObjectKind::Fleet)
            .unwrap();
        prop_assert_eq!(colony_id, ObjectId(expected_colony));
        prop_assert_eq!(fleet_id, ObjectId(expected_fleet));
    }
}
