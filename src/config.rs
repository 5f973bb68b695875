/// Side length of the square board.
pub const BOARD_SIZE: usize = 6;

/// Vessel lengths, in placement order.
pub const FLEET: [usize; FLEET_SIZE] = [3, 2, 2, 1, 1, 1, 1];
pub const FLEET_SIZE: usize = 7;

/// Total number of ship cells in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 3 + 2 + 2 + 1 + 1 + 1 + 1;

/// Longest vessel the engine tracks: one cell more than fits on the board.
pub const MAX_VESSEL_LENGTH: usize = BOARD_SIZE + 1;

/// Placement attempts allowed across the whole fleet before a board is
/// abandoned and rebuilt from scratch.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 2000;
