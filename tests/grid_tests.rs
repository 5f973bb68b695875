use sea_battle::{
    BoardError, CellState, Coordinate, GameError, Grid, Orientation, ShotResult, Vessel,
};

fn at(row: i32, col: i32) -> Coordinate {
    Coordinate::new(row, col)
}

fn grid_with(vessels: &[Vessel]) -> Grid {
    let mut grid = Grid::new();
    for v in vessels {
        grid.place_vessel(*v).unwrap();
    }
    grid
}

#[test]
fn test_single_cell_vessel_sinks_and_defeats() {
    let mut grid = grid_with(&[Vessel::new(at(0, 0), 1, Orientation::Horizontal)]);
    assert_eq!(grid.resolve_shot(at(0, 0)).unwrap(), ShotResult::Sunk);
    assert!(grid.is_defeated());
}

#[test]
fn test_miss_leaves_grid_undefeated() {
    let mut grid = grid_with(&[Vessel::new(at(0, 0), 1, Orientation::Horizontal)]);
    assert_eq!(grid.resolve_shot(at(5, 5)).unwrap(), ShotResult::Miss);
    assert!(!grid.is_defeated());
    assert_eq!(grid.cell(at(5, 5)), Some(CellState::Miss));
}

#[test]
fn test_diagonal_neighbour_conflicts() {
    let mut grid = grid_with(&[Vessel::new(at(0, 0), 3, Orientation::Horizontal)]);
    let err = grid
        .place_vessel(Vessel::new(at(1, 1), 1, Orientation::Horizontal))
        .unwrap_err();
    assert_eq!(err, BoardError::CellConflict);
    assert_eq!(grid.vessels().len(), 1);
    assert_eq!(grid.occupied().len(), 3);
}

#[test]
fn test_gap_of_one_cell_is_allowed() {
    let mut grid = grid_with(&[Vessel::new(at(0, 0), 3, Orientation::Horizontal)]);
    grid.place_vessel(Vessel::new(at(2, 0), 2, Orientation::Horizontal))
        .unwrap();
    assert_eq!(grid.occupied().len(), 5);
}

#[test]
fn test_out_of_bounds_placement_changes_nothing() {
    let mut grid = Grid::new();
    let err = grid
        .place_vessel(Vessel::new(at(0, 4), 3, Orientation::Horizontal))
        .unwrap_err();
    assert_eq!(err, BoardError::OutOfBounds);
    assert!(grid.vessels().is_empty());
    assert!(grid.occupied().is_empty());
    assert_eq!(grid.cell(at(0, 4)), Some(CellState::Empty));

    // the rejected vessel left no halo behind
    grid.place_vessel(Vessel::new(at(1, 4), 1, Orientation::Horizontal))
        .unwrap();
}

#[test]
fn test_negative_bow_is_out_of_bounds() {
    let mut grid = Grid::new();
    let err = grid
        .place_vessel(Vessel::new(at(-1, 2), 2, Orientation::Vertical))
        .unwrap_err();
    assert_eq!(err, BoardError::OutOfBounds);
}

#[test]
fn test_oversized_vessel_never_fits() {
    let mut grid = Grid::new();
    for orientation in [Orientation::Horizontal, Orientation::Vertical] {
        let err = grid
            .place_vessel(Vessel::new(at(0, 0), usize::MAX / 2, orientation))
            .unwrap_err();
        assert_eq!(err, BoardError::OutOfBounds);
    }
    assert!(grid.vessels().is_empty());
    assert!(grid.occupied().is_empty());
}

#[test]
fn test_error_messages() {
    assert_eq!(
        BoardError::OutOfBounds.to_string(),
        "You are shooting off the board!"
    );
    assert_eq!(
        BoardError::AlreadyTargeted.to_string(),
        "You have already shot at this cell!"
    );
    assert_eq!(
        BoardError::UnableToPlaceFleet.to_string(),
        "Unable to place the fleet"
    );
    assert_eq!(GameError::MatchFinished.to_string(), "match is already finished");
    assert_eq!(GameError::InputClosed.to_string(), "input closed");
}

#[test]
fn test_second_shot_on_same_cell_is_rejected() {
    let mut grid = grid_with(&[Vessel::new(at(2, 2), 2, Orientation::Vertical)]);
    assert_eq!(grid.resolve_shot(at(2, 2)).unwrap(), ShotResult::Hit);
    assert_eq!(
        grid.resolve_shot(at(2, 2)).unwrap_err(),
        BoardError::AlreadyTargeted
    );
    assert_eq!(grid.vessels()[0].remaining_hits(), 1);

    assert_eq!(grid.resolve_shot(at(0, 0)).unwrap(), ShotResult::Miss);
    assert_eq!(
        grid.resolve_shot(at(0, 0)).unwrap_err(),
        BoardError::AlreadyTargeted
    );
    assert_eq!(grid.targeted().len(), 2);
}

#[test]
fn test_shots_off_the_board() {
    let mut grid = Grid::new();
    for p in [at(-1, 0), at(0, -1), at(6, 0), at(0, 6), at(6, 6)] {
        assert_eq!(grid.resolve_shot(p).unwrap_err(), BoardError::OutOfBounds);
    }
    assert!(grid.targeted().is_empty());
}

#[test]
fn test_hits_count_down_remaining() {
    let mut grid = grid_with(&[Vessel::new(at(3, 0), 2, Orientation::Vertical)]);
    assert_eq!(grid.resolve_shot(at(3, 0)).unwrap(), ShotResult::Hit);
    assert_eq!(grid.vessels()[0].remaining_hits(), 1);
    assert_eq!(grid.cell(at(3, 0)), Some(CellState::Hit));
    assert_eq!(grid.resolve_shot(at(4, 0)).unwrap(), ShotResult::Sunk);
    assert_eq!(grid.vessels()[0].remaining_hits(), 0);
}

#[test]
fn test_defeat_needs_every_vessel() {
    let mut grid = grid_with(&[
        Vessel::new(at(0, 0), 1, Orientation::Horizontal),
        Vessel::new(at(4, 4), 1, Orientation::Horizontal),
    ]);
    grid.resolve_shot(at(0, 0)).unwrap();
    assert!(!grid.is_defeated());
    assert_eq!(grid.vessels_afloat(), 1);
    grid.resolve_shot(at(4, 4)).unwrap();
    assert!(grid.is_defeated());
    assert_eq!(grid.vessels_afloat(), 0);
}

#[test]
fn test_sinking_outlines_only_open_water() {
    let mut grid = grid_with(&[Vessel::new(at(2, 2), 1, Orientation::Horizontal)]);
    grid.resolve_shot(at(1, 1)).unwrap();
    assert_eq!(grid.resolve_shot(at(2, 2)).unwrap(), ShotResult::Sunk);

    assert_eq!(grid.cell(at(1, 1)), Some(CellState::Miss));
    assert_eq!(grid.cell(at(2, 2)), Some(CellState::Hit));
    assert_eq!(grid.cell(at(1, 2)), Some(CellState::Contour));
    assert_eq!(grid.cell(at(3, 3)), Some(CellState::Contour));
    assert_eq!(grid.cell(at(0, 0)), Some(CellState::Empty));

    // contour cells can still be shot at
    assert_eq!(grid.resolve_shot(at(1, 2)).unwrap(), ShotResult::Miss);
}

#[test]
fn test_finalize_freezes_fleet() {
    let mut grid = grid_with(&[Vessel::new(at(0, 0), 2, Orientation::Horizontal)]);
    grid.finalize_placement();
    assert!(grid.is_placement_closed());
    assert_eq!(
        grid.place_vessel(Vessel::new(at(5, 5), 1, Orientation::Horizontal))
            .unwrap_err(),
        BoardError::PlacementClosed
    );
    assert_eq!(grid.occupied().len(), 2);
    assert_eq!(grid.resolve_shot(at(0, 1)).unwrap(), ShotResult::Hit);
}

#[test]
fn test_render_reveals_or_conceals_ships() {
    let mut grid = grid_with(&[Vessel::new(at(0, 0), 1, Orientation::Horizontal)]);
    let open = grid.to_string();
    let mut lines = open.lines();
    assert_eq!(lines.next(), Some("  | 1 | 2 | 3 | 4 | 5 | 6 |"));
    assert_eq!(lines.next(), Some("1 | ■ | O | O | O | O | O | "));
    assert_eq!(open.lines().count(), 7);

    grid.set_conceal_ships(true);
    let hidden = grid.to_string();
    assert_eq!(hidden.lines().nth(1), Some("1 | O | O | O | O | O | O | "));
    assert_eq!(grid.cell(at(0, 0)), Some(CellState::Ship));
    assert_eq!(grid.visible_cell(at(0, 0)), Some(CellState::Empty));
}

#[test]
fn test_render_shows_hits_misses_and_contour() {
    let mut grid = Grid::concealed();
    grid.place_vessel(Vessel::new(at(5, 5), 1, Orientation::Horizontal))
        .unwrap();
    grid.resolve_shot(at(0, 0)).unwrap();
    grid.resolve_shot(at(5, 5)).unwrap();
    let rendered = grid.to_string();
    let lines: Vec<_> = rendered.lines().collect();
    assert_eq!(lines[1], "1 | T | O | O | O | O | O | ");
    assert_eq!(lines[5], "5 | O | O | O | O | . | . | ");
    assert_eq!(lines[6], "6 | O | O | O | O | . | X | ");
}
