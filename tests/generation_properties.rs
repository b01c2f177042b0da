//! Integration tests for world generation: every invariant the engine
//! promises about a freshly built dungeon, checked across many seeds.

use gloomway::{Cell, Dungeon, DungeonConfig, GloomwayError, GloomwayResult, SeededRandom};
use proptest::prelude::*;

fn build(config: &DungeonConfig, seed: u64) -> GloomwayResult<Dungeon> {
    Dungeon::new(config, Box::new(SeededRandom::new(seed)))
}

fn degree_sum(dungeon: &Dungeon) -> usize {
    dungeon.cells().iter().map(|cell| cell.exits().len()).sum()
}

fn monster_cells(dungeon: &Dungeon) -> Vec<&Cell> {
    dungeon
        .cells()
        .iter()
        .filter(|cell| cell.monster().is_some())
        .collect()
}

#[test]
fn edge_count_is_spanning_tree_plus_interconnectivity() {
    for seed in 0..20 {
        let config = DungeonConfig::new(8, 8, 4, false, 0.0, "A", 1);
        let dungeon = build(&config, seed).unwrap();
        let expected_edges = config.rows * config.cols - 1 + config.interconnectivity;
        assert_eq!(degree_sum(&dungeon), 2 * expected_edges);
    }
}

#[test]
fn every_cell_is_reachable_from_every_other() {
    for seed in 0..10 {
        let config = DungeonConfig::new(7, 5, 2, false, 0.0, "A", 1);
        let dungeon = build(&config, seed).unwrap();
        for cell in dungeon.cells() {
            assert!(dungeon.distance_between(0, cell.id()).is_some());
        }
    }
}

#[test]
fn degrees_stay_in_range_and_define_tunnels() {
    for seed in 0..10 {
        let config = DungeonConfig::new(8, 8, 3, false, 0.0, "A", 1);
        let dungeon = build(&config, seed).unwrap();
        for cell in dungeon.cells() {
            let degree = cell.exits().len();
            assert!((1..=4).contains(&degree), "cell {} has degree {}", cell.id(), degree);
            assert_eq!(cell.is_tunnel(), degree == 2);
        }
    }
}

#[test]
fn start_and_destination_are_distant_caves_and_the_destination_is_guarded() {
    for seed in 0..20 {
        let config = DungeonConfig::new(8, 8, 2, false, 0.0, "A", 1);
        let dungeon = build(&config, seed).unwrap();

        let start = dungeon.start_cell();
        let end = dungeon.destination_cell();
        assert!(!start.is_tunnel());
        assert!(!end.is_tunnel());
        assert!(dungeon.distance_between(start.id(), end.id()).unwrap() >= 5);

        let guard = end.monster().unwrap();
        assert_eq!(guard.health(), 100);
        assert!(start.monster().is_none());
    }
}

#[test]
fn monsters_land_only_in_caves_and_match_the_requested_count() {
    for seed in 0..10 {
        let config = DungeonConfig::new(8, 8, 3, false, 0.0, "A", 4);
        let dungeon = build(&config, seed).unwrap();

        let lairs = monster_cells(&dungeon);
        assert_eq!(lairs.len(), config.monster_count);
        for lair in &lairs {
            assert!(!lair.is_tunnel());
            assert_ne!(lair.id(), dungeon.start_cell().id());
        }
    }
}

#[test]
fn treasure_and_arrow_stocking_follow_the_percentage() {
    for seed in 0..10 {
        let config = DungeonConfig::new(8, 8, 2, false, 40.0, "A", 1);
        let dungeon = build(&config, seed).unwrap();

        let caves = dungeon
            .cells()
            .iter()
            .filter(|cell| !cell.is_tunnel())
            .count();
        let stocked_caves = dungeon
            .cells()
            .iter()
            .filter(|cell| !cell.treasures().is_empty())
            .count();
        assert_eq!(stocked_caves, caves * 40 / 100);

        let stocked_cells = dungeon
            .cells()
            .iter()
            .filter(|cell| cell.arrows() > 0)
            .count();
        assert_eq!(stocked_cells, dungeon.cells().len() * 40 / 100);

        for cell in dungeon.cells() {
            if !cell.treasures().is_empty() {
                assert!(!cell.is_tunnel(), "treasure in a tunnel");
                assert!((1..=3).contains(&cell.treasures().len()));
            }
            assert!(cell.arrows() <= 3);
        }
    }
}

#[test]
fn scent_surrounds_every_monster() {
    for seed in 0..10 {
        let config = DungeonConfig::new(8, 8, 2, false, 0.0, "A", 3);
        let dungeon = build(&config, seed).unwrap();

        for lair in monster_cells(&dungeon) {
            assert!(lair.scent() >= 2);
            for &neighbor in lair.exits().values() {
                let near = dungeon.cell(neighbor).unwrap();
                assert!(near.scent() >= 2, "weak scent next to a monster");
                for &two_away in near.exits().values() {
                    assert!(dungeon.cell(two_away).unwrap().scent() >= 1);
                }
            }
        }
    }
}

#[test]
fn exits_always_agree_with_grid_geometry() {
    for wrapping in [false, true] {
        let config = DungeonConfig::new(6, 6, 3, wrapping, 0.0, "A", 1);
        let dungeon = build(&config, 42).unwrap();
        let grid = dungeon.grid();

        for cell in dungeon.cells() {
            for (&direction, &neighbor_id) in cell.exits() {
                let expected = grid
                    .neighbor(cell.coordinate(), direction)
                    .map(|coord| grid.id_of(coord));
                assert_eq!(expected, Some(neighbor_id));
                // the connection is two-way
                let neighbor = dungeon.cell(neighbor_id).unwrap();
                assert_eq!(neighbor.exits().get(&direction.opposite()), Some(&cell.id()));
            }
        }
    }
}

#[test]
fn same_seed_reproduces_the_same_world() {
    let config = DungeonConfig::new(8, 8, 3, false, 30.0, "A", 2);
    let first = build(&config, 7).unwrap();
    let second = build(&config, 7).unwrap();

    assert_eq!(first.to_string(), second.to_string());
    assert_eq!(first.start_cell().id(), second.start_cell().id());
    assert_eq!(first.destination_cell().id(), second.destination_cell().id());
    assert_eq!(first.cells(), second.cells());
}

#[test]
fn constructor_rejects_bad_configurations() {
    let seed = 1;

    let too_small = DungeonConfig::new(2, 2, 0, false, 10.0, "A", 1);
    assert!(matches!(
        build(&too_small, seed),
        Err(GloomwayError::InvalidConfig(_))
    ));

    let bad_percentage = DungeonConfig::new(8, 8, 2, false, 130.0, "A", 1);
    assert!(matches!(
        build(&bad_percentage, seed),
        Err(GloomwayError::InvalidConfig(_))
    ));

    let nameless = DungeonConfig::new(8, 8, 2, false, 10.0, "", 1);
    assert!(matches!(
        build(&nameless, seed),
        Err(GloomwayError::InvalidConfig(_))
    ));

    let no_monsters = DungeonConfig::new(8, 8, 2, false, 10.0, "A", 0);
    assert!(matches!(
        build(&no_monsters, seed),
        Err(GloomwayError::InvalidConfig(_))
    ));

    let monster_horde = DungeonConfig::new(8, 8, 2, false, 10.0, "A", 64);
    assert!(matches!(
        build(&monster_horde, seed),
        Err(GloomwayError::InvalidConfig(_))
    ));

    // a 8x8 non-wrapping grid offers 2*64 - 16 = 112 potential edges,
    // so at most 112 - 63 = 49 extra ones
    let over_connected = DungeonConfig::new(8, 8, 50, false, 10.0, "A", 1);
    assert!(matches!(
        build(&over_connected, seed),
        Err(GloomwayError::InvalidConfig(_))
    ));
    assert!(build(&DungeonConfig::new(8, 8, 49, false, 10.0, "A", 1), seed).is_ok());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn generated_worlds_hold_their_invariants(seed in 0u64..10_000) {
        let config = DungeonConfig::new(8, 6, 3, false, 30.0, "Prop", 2);
        let dungeon = build(&config, seed).unwrap();

        let expected_edges = config.rows * config.cols - 1 + config.interconnectivity;
        prop_assert_eq!(degree_sum(&dungeon), 2 * expected_edges);

        for cell in dungeon.cells() {
            prop_assert!((1..=4).contains(&cell.exits().len()));
            prop_assert!(dungeon.distance_between(dungeon.start_cell().id(), cell.id()).is_some());
        }

        let start = dungeon.start_cell().id();
        let end = dungeon.destination_cell().id();
        prop_assert!(dungeon.distance_between(start, end).unwrap() >= 5);
        prop_assert!(dungeon.destination_cell().monster().is_some());
        prop_assert_eq!(monster_cells(&dungeon).len(), config.monster_count);
    }

    #[test]
    fn wrapping_worlds_hold_their_invariants(seed in 0u64..10_000) {
        let config = DungeonConfig::new(6, 6, 4, true, 20.0, "Prop", 1);
        let dungeon = build(&config, seed).unwrap();

        let expected_edges = config.rows * config.cols - 1 + config.interconnectivity;
        prop_assert_eq!(degree_sum(&dungeon), 2 * expected_edges);

        let grid = dungeon.grid();
        for cell in dungeon.cells() {
            for (&direction, &neighbor_id) in cell.exits() {
                let expected = grid
                    .neighbor(cell.coordinate(), direction)
                    .map(|coord| grid.id_of(coord));
                prop_assert_eq!(expected, Some(neighbor_id));
            }
        }
    }
}

#[test]
fn directions_are_reported_in_a_stable_order() {
    let config = DungeonConfig::new(8, 8, 10, false, 0.0, "A", 1);
    let dungeon = build(&config, 3).unwrap();
    for cell in dungeon.cells() {
        let moves = cell.possible_moves();
        let mut sorted = moves.clone();
        sorted.sort();
        assert_eq!(moves, sorted);
    }
}
