//! Unit and scenario tests for sg-sim.

use sg_core::{Cell, Grid, Position, SimRng};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-12
}

/// Random `rows × cols` grid with roughly equal shares of X, O, and empty.
fn random_grid(rows: usize, cols: usize, seed: u64) -> Grid {
    let mut rng = SimRng::new(seed);
    let cells = (0..rows)
        .map(|_| {
            (0..cols)
                .map(|_| match rng.gen_range(0..3u8) {
                    0 => Cell::TypeA,
                    1 => Cell::TypeB,
                    _ => Cell::Empty,
                })
                .collect()
        })
        .collect();
    Grid::new(cells)
}

// ── Satisfaction ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod satisfaction_tests {
    use super::*;
    use crate::{NeighborCounts, is_satisfied, neighbor_counts, unsatisfied_positions};

    #[test]
    fn empty_cell_always_satisfied() {
        let grid = Grid::from_lines(["XO", " O"]);
        for threshold in [0.0, 0.5, 1.0, 2.0] {
            assert!(is_satisfied(&grid, 1, 0, threshold));
        }
    }

    #[test]
    fn isolated_agent_always_satisfied() {
        let grid = Grid::from_lines(["   ", " X ", "   "]);
        for threshold in [0.0, 1.0, 2.0] {
            assert!(is_satisfied(&grid, 1, 1, threshold));
        }
    }

    #[test]
    fn single_cell_grid_is_satisfied() {
        let grid = Grid::from_lines(["X"]);
        assert!(is_satisfied(&grid, 0, 0, 1.0));
    }

    #[test]
    fn tie_at_threshold_is_satisfied() {
        // Center X: 4 X neighbors, 4 O neighbors.
        let grid = Grid::from_lines(["XXO", "XXO", "XOO"]);
        assert_eq!(
            neighbor_counts(&grid, Position::new(1, 1)),
            NeighborCounts { same: 4, different: 4 }
        );
        assert!(is_satisfied(&grid, 1, 1, 0.5));
        assert!(!is_satisfied(&grid, 1, 1, 0.51));
    }

    #[test]
    fn empty_neighbors_are_excluded() {
        let grid = Grid::from_lines(["X O", " X ", "   "]);
        let counts = neighbor_counts(&grid, Position::new(1, 1));
        assert_eq!(counts, NeighborCounts { same: 1, different: 1 });
        assert_eq!(counts.same_fraction(), Some(0.5));
        assert!(is_satisfied(&grid, 1, 1, 0.5));
        assert!(!is_satisfied(&grid, 1, 1, 0.6));
    }

    #[test]
    fn unknown_symbols_count_as_different() {
        let grid = Grid::from_lines(["X#", "##"]);
        assert_eq!(
            neighbor_counts(&grid, Position::new(0, 0)),
            NeighborCounts { same: 0, different: 3 }
        );
        assert!(!is_satisfied(&grid, 0, 0, 0.1));
        assert!(is_satisfied(&grid, 0, 0, 0.0));
    }

    #[test]
    fn unknown_symbol_occupant_is_judged_like_an_agent() {
        let grid = Grid::from_lines(["X#", "##"]);
        assert_eq!(
            neighbor_counts(&grid, Position::new(0, 1)),
            NeighborCounts { same: 2, different: 1 }
        );
        assert!(is_satisfied(&grid, 0, 1, 0.6));
        assert!(!is_satisfied(&grid, 0, 1, 0.7));
    }

    #[test]
    fn outside_grid_is_satisfied() {
        let grid = Grid::from_lines(["XO"]);
        assert!(is_satisfied(&grid, 4, 4, 1.0));
    }

    #[test]
    fn unsatisfied_positions_row_major() {
        let grid = Grid::from_lines(["XO", "OX"]);
        // Each agent: 1 same, 2 different → 1/3.
        assert_eq!(
            unsatisfied_positions(&grid, 0.5),
            vec![
                Position::new(0, 0),
                Position::new(0, 1),
                Position::new(1, 0),
                Position::new(1, 1),
            ]
        );
        assert!(unsatisfied_positions(&grid, 0.3).is_empty());
    }

    #[test]
    fn no_neighbors_fraction_is_none() {
        assert_eq!(NeighborCounts::default().same_fraction(), None);
    }
}

// ── Relocation ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod relocation_tests {
    use super::*;
    use sg_core::ScriptedChooser;

    use crate::{move_to_empty, relocate};

    #[test]
    fn full_grid_leaves_agent_in_place() {
        let mut grid = Grid::from_lines(["XO", "OX"]);
        let before = grid.clone();
        let mut chooser = ScriptedChooser::first();
        assert!(!move_to_empty(&mut grid, 0, 0, &mut chooser));
        assert_eq!(grid, before);
        assert_eq!(chooser.calls(), 0);
    }

    #[test]
    fn moves_into_only_empty_cell() {
        let mut grid = Grid::from_lines(["X ", "OO"]);
        assert!(move_to_empty(&mut grid, 0, 0, &mut SimRng::new(1)));
        assert_eq!(grid, Grid::from_lines([" X", "OO"]));
    }

    #[test]
    fn chooser_picks_among_row_major_candidates() {
        let mut grid = Grid::from_lines(["X  ", "O O"]);
        // Candidates: (0,1), (0,2), (1,1).
        let mut chooser = ScriptedChooser::new(vec![2]);
        let to = relocate(&mut grid, Position::new(0, 0), &mut chooser);
        assert_eq!(to, Some(Position::new(1, 1)));
        assert_eq!(grid, Grid::from_lines(["   ", "OXO"]));
    }

    #[test]
    fn source_outside_grid_is_ignored() {
        let mut grid = Grid::from_lines(["X "]);
        let before = grid.clone();
        assert!(!move_to_empty(&mut grid, 3, 3, &mut ScriptedChooser::first()));
        assert_eq!(grid, before);
    }

    #[test]
    fn random_destination_is_always_previously_empty() {
        for seed in 0..20 {
            let mut grid = Grid::from_lines(["XO  ", " O X", "  OX"]);
            let empties = grid.empty_positions();
            let to = relocate(&mut grid, Position::new(0, 0), &mut SimRng::new(seed))
                .expect("grid has empty cells");
            assert!(empties.contains(&to));
            assert_eq!(grid.get(to), Some(Cell::TypeA));
            assert_eq!(grid.get(Position::new(0, 0)), Some(Cell::Empty));
        }
    }
}

// ── Metric ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod metric_tests {
    use super::*;
    use crate::index_of_dissimilarity;

    #[test]
    fn checkerboard_rows_score_zero() {
        let grid = Grid::from_lines(["XO", "OX"]);
        assert!(approx(index_of_dissimilarity(&grid), 0.0));
    }

    #[test]
    fn segregated_rows_score_one() {
        let grid = Grid::from_lines(["XX", "OO"]);
        assert!(approx(index_of_dissimilarity(&grid), 1.0));
    }

    #[test]
    fn identical_row_proportions_score_zero() {
        let grid = Grid::from_lines(["XO ", " XO", "O X"]);
        assert!(approx(index_of_dissimilarity(&grid), 0.0));
    }

    #[test]
    fn partial_segregation() {
        // Row 0: 2/3 vs 1/3; row 1: 1/3 vs 2/3.
        let grid = Grid::from_lines(["XXO", "OOX"]);
        assert!(approx(index_of_dissimilarity(&grid), 1.0 / 3.0));
    }

    #[test]
    fn symmetric_under_type_swap() {
        for seed in 0..10 {
            let grid = random_grid(5, 7, seed);
            let d = index_of_dissimilarity(&grid);
            let swapped = index_of_dissimilarity(&grid.swapped_types());
            assert!(approx(d, swapped), "seed {seed}: {d} vs {swapped}");
        }
    }

    #[test]
    fn stays_in_unit_interval() {
        for seed in 0..10 {
            let d = index_of_dissimilarity(&random_grid(6, 4, seed));
            assert!((0.0..=1.0).contains(&d), "seed {seed}: {d}");
        }
    }

    #[test]
    fn single_type_grid_is_well_defined() {
        // B total is zero, so every B proportion is 0.
        let grid = Grid::from_lines(["XX", "X "]);
        assert!(approx(index_of_dissimilarity(&grid), 0.5));
    }

    #[test]
    fn empty_inputs_score_zero() {
        assert!(approx(index_of_dissimilarity(&Grid::default()), 0.0));
        assert!(approx(index_of_dissimilarity(&Grid::from_lines(["  ", "  "])), 0.0));
    }

    #[test]
    fn unknown_symbols_are_not_counted() {
        let grid = Grid::from_lines(["X?", "O?"]);
        assert!(approx(index_of_dissimilarity(&grid), 1.0));
    }

    #[test]
    fn rows_are_the_unit_of_aggregation() {
        let grid = Grid::from_lines(["XX", "OO"]);
        assert!(approx(index_of_dissimilarity(&grid.transposed()), 0.0));
    }
}

// ── Driver ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod driver_tests {
    use super::*;
    use sg_core::ScriptedChooser;

    use crate::{Termination, simulate, unsatisfied_positions};

    #[test]
    fn single_agent_converges_immediately() {
        let mut grid = Grid::from_lines(["X"]);
        let outcome = simulate(&mut grid, 0.5, &mut ScriptedChooser::first());
        assert_eq!(outcome.termination, Termination::Converged);
        assert_eq!(outcome.relocation_passes, 0);
        assert_eq!(outcome.moves, 0);
        assert_eq!(grid, Grid::from_lines(["X"]));
    }

    #[test]
    fn degenerate_grids_are_trivially_converged() {
        for mut grid in [Grid::default(), Grid::from_lines([""])] {
            let outcome = simulate(&mut grid, 0.5, &mut SimRng::new(0));
            assert!(outcome.converged());
            assert_eq!(outcome.relocation_passes, 0);
        }
    }

    #[test]
    fn satisfied_grid_is_left_untouched() {
        let mut grid = Grid::from_lines(["XX  ", "XX  ", "  OO"]);
        let before = grid.clone();
        let mut chooser = ScriptedChooser::first();
        let outcome = simulate(&mut grid, 0.5, &mut chooser);
        assert!(outcome.converged());
        assert_eq!(outcome.relocation_passes, 0);
        assert_eq!(grid, before);
        assert_eq!(chooser.calls(), 0);
    }

    #[test]
    fn full_grid_exhausts_the_cap() {
        let mut grid = Grid::from_lines(["XO", "OX"]);
        let outcome = simulate(&mut grid, 0.5, &mut SimRng::new(3));
        assert_eq!(outcome.termination, Termination::Exhausted);
        assert_eq!(outcome.relocation_passes, 4);
        assert_eq!(outcome.moves, 0);
        assert_eq!(outcome.stalled_moves, 16);
        assert_eq!(grid, Grid::from_lines(["XO", "OX"]));
    }

    #[test]
    fn relocations_apply_to_the_live_grid() {
        // Pass 0 snapshot: [(0,0), (0,1)].  X takes the only empty cell (0,2);
        // O then takes the cell X just vacated.
        let mut grid = Grid::from_lines(["XO "]);
        let outcome = simulate(&mut grid, 0.5, &mut ScriptedChooser::first());
        assert_eq!(grid, Grid::from_lines(["O X"]));
        assert!(outcome.converged());
        assert_eq!(outcome.relocation_passes, 1);
        assert_eq!(outcome.moves, 2);
    }

    #[test]
    fn terminates_within_cap_and_conserves_agents() {
        for seed in 0..20 {
            let mut grid = random_grid(6, 6, seed);
            let a = grid.count(Cell::TypeA);
            let b = grid.count(Cell::TypeB);

            let outcome = simulate(&mut grid, 0.6, &mut SimRng::new(seed));

            assert!(outcome.relocation_passes <= 36);
            match outcome.termination {
                Termination::Converged => assert!(unsatisfied_positions(&grid, 0.6).is_empty()),
                Termination::Exhausted => assert_eq!(outcome.relocation_passes, 36),
            }
            assert_eq!(grid.count(Cell::TypeA), a);
            assert_eq!(grid.count(Cell::TypeB), b);
        }
    }

    #[test]
    fn same_seed_same_result() {
        let run = |seed| {
            let mut grid = random_grid(8, 8, 99);
            let outcome = simulate(&mut grid, 0.7, &mut SimRng::new(seed));
            (grid, outcome)
        };
        assert_eq!(run(5), run(5));
    }

    #[test]
    fn ragged_grid_does_not_panic() {
        let mut grid = Grid::from_lines(["XO ", "O", "XX?O"]);
        let outcome = simulate(&mut grid, 0.9, &mut SimRng::new(1));
        assert!(outcome.relocation_passes <= 9);
    }
}

// ── Sim / builder / observer ──────────────────────────────────────────────────

#[cfg(test)]
mod sim_tests {
    use super::*;
    use sg_core::{GridError, ScriptedChooser, SimConfig};

    use crate::{IterationStats, NoopObserver, SimBuilder, SimError, SimObserver, SimOutcome};

    #[derive(Default)]
    struct Recorder {
        starts:  Vec<u64>,
        moves:   Vec<(u64, Position, Option<Position>)>,
        ends:    Vec<IterationStats>,
        outcome: Option<SimOutcome>,
    }

    impl SimObserver for Recorder {
        fn on_iteration_start(&mut self, iteration: u64) {
            self.starts.push(iteration);
        }
        fn on_move(&mut self, iteration: u64, from: Position, to: Option<Position>) {
            self.moves.push((iteration, from, to));
        }
        fn on_iteration_end(&mut self, stats: &IterationStats, _grid: &Grid) {
            self.ends.push(*stats);
        }
        fn on_sim_end(&mut self, outcome: &SimOutcome, _grid: &Grid) {
            self.outcome = Some(*outcome);
        }
    }

    #[test]
    fn builds_with_defaults() {
        let sim = SimBuilder::new(SimConfig::new(0.5, 1), Grid::from_lines(["XO"]))
            .build()
            .unwrap();
        assert_eq!(sim.grid.dimensions(), (1, 2));
    }

    #[test]
    fn permissive_by_default() {
        let grid = Grid::from_lines(["XO", "X", "#O"]);
        assert!(SimBuilder::new(SimConfig::new(3.0, 1), grid).build().is_ok());
    }

    #[test]
    fn strict_rejects_ragged_grid() {
        let result = SimBuilder::new(SimConfig::new(0.5, 1), Grid::from_lines(["XO", "X"]))
            .strict(true)
            .build();
        assert!(matches!(
            result,
            Err(SimError::Validation(GridError::Ragged { row: 1, .. }))
        ));
    }

    #[test]
    fn strict_rejects_bad_threshold() {
        let result = SimBuilder::new(SimConfig::new(1.5, 1), Grid::from_lines(["XO"]))
            .strict(true)
            .build();
        assert!(matches!(result, Err(SimError::Validation(GridError::Config(_)))));
    }

    #[test]
    fn observer_sees_every_iteration_and_move() {
        let mut sim = SimBuilder::new(SimConfig::new(0.5, 1), Grid::from_lines(["XO "]))
            .chooser(ScriptedChooser::first())
            .build()
            .unwrap();
        let mut rec = Recorder::default();
        let outcome = sim.run(&mut rec);

        assert_eq!(rec.starts, vec![0, 1]);
        assert_eq!(
            rec.moves,
            vec![
                (0, Position::new(0, 0), Some(Position::new(0, 2))),
                (0, Position::new(0, 1), Some(Position::new(0, 0))),
            ]
        );
        assert_eq!(rec.ends.len(), 2);
        assert_eq!(rec.ends[0].moved, 2);
        assert_eq!(rec.ends[1].unsatisfied, 0);
        assert_eq!(rec.outcome, Some(outcome));
    }

    #[test]
    fn max_iterations_overrides_cap() {
        let mut config = SimConfig::new(0.5, 1);
        config.max_iterations = Some(1);
        let mut sim = SimBuilder::new(config, Grid::from_lines(["XO", "OX"]))
            .build()
            .unwrap();
        let outcome = sim.run(&mut NoopObserver);
        assert!(!outcome.converged());
        assert_eq!(outcome.relocation_passes, 1);
    }

    #[test]
    fn metric_before_and_after_on_same_grid() {
        let grid = Grid::from_lines(["XOXO ", "OXOX ", "XOXO ", "OXOX "]);
        let mut sim = SimBuilder::new(SimConfig::new(0.5, 11), grid).build().unwrap();
        assert!(approx(sim.dissimilarity(), 0.0));
        let outcome = sim.run(&mut NoopObserver);
        if outcome.converged() {
            assert!(sim.unsatisfied().is_empty());
        }
        let d = sim.dissimilarity();
        assert!((0.0..=1.0).contains(&d));
        assert_eq!(sim.into_grid().count(Cell::TypeA), 8);
    }
}
