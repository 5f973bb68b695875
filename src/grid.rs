//! One side's board: the fleet, the visible cell states and the shot history.

use alloc::vec::Vec;
use core::fmt;

use crate::cellset::CellSet;
use crate::common::{BoardError, ShotResult};
use crate::config::BOARD_SIZE;
use crate::coord::Coordinate;
use crate::vessel::Vessel;

/// Cell set sized for the game board.
pub type BoardCells = CellSet<u64, BOARD_SIZE>;

/// Visible state of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellState {
    #[default]
    Empty,
    Ship,
    Hit,
    Miss,
    /// Water next to a destroyed vessel. Purely cosmetic.
    Contour,
}

impl CellState {
    /// Glyph used in the text rendering of a board.
    pub fn glyph(self) -> char {
        match self {
            CellState::Empty => 'O',
            CellState::Ship => '■',
            CellState::Hit => 'X',
            CellState::Miss => 'T',
            CellState::Contour => '.',
        }
    }
}

/// A board holding one fleet.
///
/// Placement goes through [`Grid::place_vessel`] until
/// [`Grid::finalize_placement`] freezes the fleet; from then on the grid only
/// changes through [`Grid::resolve_shot`].
#[derive(Clone)]
pub struct Grid {
    cells: [[CellState; BOARD_SIZE]; BOARD_SIZE],
    vessels: Vec<Vessel>,
    /// Cells covered by a vessel.
    occupied: BoardCells,
    /// Vessel cells plus their halo; only consulted while placing.
    reserved: BoardCells,
    targeted: BoardCells,
    placement_closed: bool,
    conceal_ships: bool,
}

impl Grid {
    /// Empty grid with ships rendered openly.
    pub fn new() -> Self {
        Grid {
            cells: [[CellState::Empty; BOARD_SIZE]; BOARD_SIZE],
            vessels: Vec::new(),
            occupied: BoardCells::new(),
            reserved: BoardCells::new(),
            targeted: BoardCells::new(),
            placement_closed: false,
            conceal_ships: false,
        }
    }

    /// Empty grid whose ships render as open water.
    pub fn concealed() -> Self {
        let mut grid = Self::new();
        grid.conceal_ships = true;
        grid
    }

    pub fn dimension(&self) -> usize {
        BOARD_SIZE
    }

    pub fn conceal_ships(&self) -> bool {
        self.conceal_ships
    }

    pub fn set_conceal_ships(&mut self, conceal: bool) {
        self.conceal_ships = conceal;
    }

    /// Vessels in placement order.
    pub fn vessels(&self) -> &[Vessel] {
        &self.vessels
    }

    /// Number of vessels not yet destroyed.
    pub fn vessels_afloat(&self) -> usize {
        self.vessels.iter().filter(|v| !v.is_destroyed()).count()
    }

    /// Cells covered by vessels.
    pub fn occupied(&self) -> BoardCells {
        self.occupied
    }

    /// Cells the opponent has already shot at.
    pub fn targeted(&self) -> BoardCells {
        self.targeted
    }

    pub fn is_targeted(&self, p: Coordinate) -> bool {
        self.targeted.contains(p)
    }

    /// True state of the cell at `p`, or `None` off the board.
    pub fn cell(&self, p: Coordinate) -> Option<CellState> {
        p.within(BOARD_SIZE)
            .then(|| self.cells[p.row as usize][p.col as usize])
    }

    /// State of the cell as the board owner's opponent may see it.
    pub fn visible_cell(&self, p: Coordinate) -> Option<CellState> {
        self.cell(p).map(|state| match state {
            CellState::Ship if self.conceal_ships => CellState::Empty,
            other => other,
        })
    }

    fn mark(&mut self, p: Coordinate, state: CellState) {
        if p.within(BOARD_SIZE) {
            self.cells[p.row as usize][p.col as usize] = state;
        }
    }

    /// Place `vessel`. Every cell must be on the board and clear of other
    /// vessels and their halos; nothing changes unless all cells pass.
    pub fn place_vessel(&mut self, vessel: Vessel) -> Result<(), BoardError> {
        if self.placement_closed {
            return Err(BoardError::PlacementClosed);
        }
        for p in vessel.occupied_cells() {
            if !p.within(BOARD_SIZE) {
                return Err(BoardError::OutOfBounds);
            }
            if self.reserved.contains(p) {
                return Err(BoardError::CellConflict);
            }
        }
        for p in vessel.occupied_cells() {
            self.occupied.insert(p);
            self.mark(p, CellState::Ship);
        }
        // off-board neighbours are dropped by the cell set
        for p in vessel.occupied_cells() {
            for q in p.halo() {
                self.reserved.insert(q);
            }
        }
        self.vessels.push(vessel);
        Ok(())
    }

    /// Drop the placement buffer and freeze the fleet.
    pub fn finalize_placement(&mut self) {
        self.reserved.clear();
        self.placement_closed = true;
    }

    pub fn is_placement_closed(&self) -> bool {
        self.placement_closed
    }

    /// Fire at `p`.
    pub fn resolve_shot(&mut self, p: Coordinate) -> Result<ShotResult, BoardError> {
        if !p.within(BOARD_SIZE) {
            return Err(BoardError::OutOfBounds);
        }
        if !self.targeted.insert(p) {
            return Err(BoardError::AlreadyTargeted);
        }
        let Some(idx) = self.vessels.iter().position(|v| v.is_hit_by(p)) else {
            self.mark(p, CellState::Miss);
            log::trace!("shot at {:?}: miss", p);
            return Ok(ShotResult::Miss);
        };
        self.mark(p, CellState::Hit);
        if self.vessels[idx].register_hit() {
            let sunk = self.vessels[idx];
            self.outline(&sunk);
            log::trace!("shot at {:?}: vessel {} sunk", p, idx);
            Ok(ShotResult::Sunk)
        } else {
            log::trace!("shot at {:?}: vessel {} hit", p, idx);
            Ok(ShotResult::Hit)
        }
    }

    /// Mark untouched water around a destroyed vessel.
    fn outline(&mut self, vessel: &Vessel) {
        for p in vessel.occupied_cells() {
            for q in p.halo() {
                if self.cell(q) == Some(CellState::Empty) {
                    self.mark(q, CellState::Contour);
                }
            }
        }
    }

    /// `true` once every vessel is destroyed.
    pub fn is_defeated(&self) -> bool {
        self.vessels.iter().all(Vessel::is_destroyed)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid")
            .field("vessels", &self.vessels)
            .field("occupied", &self.occupied)
            .field("targeted", &self.targeted)
            .field("placement_closed", &self.placement_closed)
            .field("conceal_ships", &self.conceal_ships)
            .finish()
    }
}

/// Text rendering: a header of 1-based column numbers, then one line per row.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  |")?;
        for c in 1..=BOARD_SIZE {
            write!(f, " {} |", c)?;
        }
        for r in 0..BOARD_SIZE as i32 {
            write!(f, "\n{} | ", r + 1)?;
            for c in 0..BOARD_SIZE as i32 {
                let state = self
                    .visible_cell(Coordinate::new(r, c))
                    .unwrap_or_default();
                write!(f, "{} | ", state.glyph())?;
            }
        }
        Ok(())
    }
}
