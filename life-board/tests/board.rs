use std::collections::HashSet;

use life_board::{Board, BoardError};

fn live_cells(board: &Board) -> HashSet<(usize, usize)> {
    let mut result = HashSet::new();
    for (row, cells) in board.state().iter().enumerate() {
        for (col, &alive) in cells.iter().enumerate() {
            if alive {
                result.insert((row, col));
            }
        }
    }
    result
}

mod construction {
    use super::*;

    #[test]
    fn negative_size_is_rejected() {
        assert_eq!(Board::new(-1), Err(BoardError::InvalidSize { size: -1 }));
    }

    #[test]
    fn zero_size_yields_an_empty_board() {
        let board = Board::new(0).unwrap();
        assert_eq!(board.size(), 0);
        assert!(board.state().is_empty());
    }

    #[test]
    fn new_board_is_all_dead() {
        let board = Board::new(5).unwrap();
        assert_eq!(board.size(), 5);
        let state = board.state();
        assert_eq!(state.len(), 5);
        for row in &state {
            assert_eq!(row.len(), 5);
            assert!(row.iter().all(|&alive| !alive));
        }
    }

    #[test]
    fn board_equality_ignores_update_history() {
        let mut oscillated = Board::new(5).unwrap();
        oscillated.add_shape("blinker", 1, 0).unwrap();
        oscillated.update();
        oscillated.update();

        let mut fresh = Board::new(5).unwrap();
        fresh.add_shape("blinker", 1, 0).unwrap();
        assert_eq!(oscillated, fresh);
    }

    #[test]
    fn updating_an_empty_board_is_a_no_op() {
        let mut board = Board::new(0).unwrap();
        board.update();
        assert!(board.state().is_empty());
    }
}

mod update_rule {
    use super::*;

    #[test]
    fn block_is_a_still_life() {
        let mut board = Board::new(4).unwrap();
        board.add_shape("block", 0, 0).unwrap();
        let expected: HashSet<_> = [(0, 0), (0, 1), (1, 0), (1, 1)].into();

        for _ in 0..10 {
            board.update();
            assert_eq!(live_cells(&board), expected);
        }
    }

    #[test]
    fn blinker_oscillates_with_period_two() {
        let mut board = Board::new(5).unwrap();
        board.add_shape("blinker", 1, 0).unwrap();
        let vertical = live_cells(&board);

        board.update();
        let horizontal = live_cells(&board);
        assert_ne!(horizontal, vertical);
        assert_eq!(horizontal, [(2, 0), (2, 1), (2, 2)].into());

        board.update();
        assert_eq!(live_cells(&board), vertical);
    }

    #[test]
    fn dead_cell_with_three_neighbors_is_born() {
        let mut board = Board::new(5).unwrap();
        for (row, col) in [(0, 0), (0, 1), (1, 0)] {
            board.flip_cell(row, col).unwrap();
        }
        board.update();
        // The three survive on two neighbors each and complete a block.
        assert_eq!(live_cells(&board), [(0, 0), (0, 1), (1, 0), (1, 1)].into());
    }

    #[test]
    fn dead_cell_with_two_neighbors_stays_dead() {
        let mut board = Board::new(5).unwrap();
        board.flip_cell(0, 0).unwrap();
        board.flip_cell(0, 2).unwrap();
        board.update();
        assert!(!board.state()[0][1]);
    }

    #[test]
    fn dead_cell_with_four_neighbors_stays_dead() {
        let mut board = Board::new(5).unwrap();
        for (row, col) in [(0, 0), (0, 2), (2, 0), (2, 2)] {
            board.flip_cell(row, col).unwrap();
        }
        board.update();
        assert!(!board.state()[1][1]);
    }

    #[test]
    fn live_cell_with_one_neighbor_dies() {
        let mut board = Board::new(5).unwrap();
        board.flip_cell(2, 2).unwrap();
        board.flip_cell(2, 3).unwrap();
        board.update();
        assert!(live_cells(&board).is_empty());
    }

    #[test]
    fn glider_travels_one_cell_per_four_generations() {
        let mut board = Board::new(12).unwrap();
        board.add_shape("glider", 3, 3).unwrap();
        for _ in 0..4 {
            board.update();
        }

        let mut translated = Board::new(12).unwrap();
        translated.add_shape("glider", 4, 4).unwrap();
        assert_eq!(live_cells(&board), live_cells(&translated));
    }
}

mod cell_mutation {
    use super::*;

    #[test]
    fn flip_cell_toggles_both_ways() {
        let mut board = Board::new(3).unwrap();
        board.flip_cell(1, 2).unwrap();
        assert!(board.state()[1][2]);
        board.flip_cell(1, 2).unwrap();
        assert!(!board.state()[1][2]);
    }

    #[test]
    fn flip_cell_out_of_range_is_an_error() {
        let mut board = Board::new(3).unwrap();
        assert_eq!(
            board.flip_cell(3, 0),
            Err(BoardError::OutOfBounds {
                row: 3,
                col: 0,
                size: 3
            })
        );
    }
}

mod shapes {
    use super::*;

    const BUILT_IN_NAMES: [&str; 13] = [
        "block",
        "beehive",
        "loaf",
        "boat",
        "tub",
        "blinker",
        "toad",
        "beacon",
        "glider",
        "LWS",
        "r-pentomino",
        "diehard",
        "acorn",
    ];

    #[test]
    fn catalog_contains_exactly_the_built_in_names() {
        let board = Board::new(10).unwrap();
        let names: HashSet<_> = board.shape_names().into_iter().collect();
        assert_eq!(names, BUILT_IN_NAMES.into());
    }

    #[test]
    fn every_built_in_shape_can_be_placed() {
        let mut board = Board::new(20).unwrap();
        for name in BUILT_IN_NAMES {
            board.add_shape(name, 5, 5).unwrap();
        }
    }

    #[test]
    fn add_shape_sets_cells_without_toggling() {
        let mut board = Board::new(4).unwrap();
        board.flip_cell(0, 0).unwrap();
        board.add_shape("block", 0, 0).unwrap();
        assert_eq!(
            live_cells(&board),
            [(0, 0), (0, 1), (1, 0), (1, 1)].into()
        );
    }

    #[test]
    fn unknown_shape_is_an_error() {
        let mut board = Board::new(10).unwrap();
        assert_eq!(
            board.add_shape("pulsar", 0, 0),
            Err(BoardError::UnknownShape {
                name: "pulsar".to_owned()
            })
        );
    }

    #[test]
    fn add_shape_past_the_edge_mutates_nothing() {
        let mut board = Board::new(5).unwrap();
        // The anchor is in range but the block's lower-right cells are
        // not; the first offending offset, (0, 1), is the one reported.
        let result = board.add_shape("block", 4, 4);
        assert_eq!(
            result,
            Err(BoardError::OutOfBounds {
                row: 4,
                col: 5,
                size: 5
            })
        );
        assert!(live_cells(&board).is_empty());
    }

    #[test]
    fn add_shape_with_huge_anchor_is_out_of_bounds() {
        // The anchor plus an offset would overflow a usize; that must
        // surface as an error, not wrap back into the grid.
        let mut board = Board::new(5).unwrap();
        let result = board.add_shape("toad", usize::MAX, 0);
        assert!(matches!(result, Err(BoardError::OutOfBounds { .. })));
        assert!(live_cells(&board).is_empty());

        let result = board.add_shape("block", 0, usize::MAX);
        assert!(matches!(result, Err(BoardError::OutOfBounds { .. })));
        assert!(live_cells(&board).is_empty());
    }
}

mod snapshots {
    use super::*;

    #[test]
    fn state_returns_an_independent_copy() {
        let mut board = Board::new(3).unwrap();
        board.flip_cell(0, 0).unwrap();

        let mut snapshot = board.state();
        snapshot[0][0] = false;
        snapshot[2][2] = true;

        let fresh = board.state();
        assert!(fresh[0][0]);
        assert!(!fresh[2][2]);
    }

    #[test]
    fn mutated_snapshot_does_not_affect_update() {
        let mut board = Board::new(5).unwrap();
        board.add_shape("block", 1, 1).unwrap();

        let mut snapshot = board.state();
        for row in &mut snapshot {
            row.fill(true);
        }

        board.update();
        assert_eq!(
            live_cells(&board),
            [(1, 1), (1, 2), (2, 1), (2, 2)].into()
        );
    }
}
