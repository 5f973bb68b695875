//! Vessel geometry and damage tracking.

use crate::config::MAX_VESSEL_LENGTH;
use crate::coord::Coordinate;

/// Axis a vessel extends along from its bow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Extends towards increasing column.
    Horizontal,
    /// Extends towards increasing row.
    Vertical,
}

impl Orientation {
    fn step(self) -> (i32, i32) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        }
    }
}

/// A straight vessel of `length` cells anchored at its bow.
///
/// Geometry is fixed at construction; only the remaining hit points change.
/// A vessel may describe cells off the board, the grid rejects those on
/// placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vessel {
    bow: Coordinate,
    length: usize,
    orientation: Orientation,
    remaining_hits: usize,
}

impl Vessel {
    /// Create an undamaged vessel. The length is clamped to
    /// `1..=MAX_VESSEL_LENGTH`; a clamped long vessel never fits on the board.
    pub fn new(bow: Coordinate, length: usize, orientation: Orientation) -> Self {
        let length = length.clamp(1, MAX_VESSEL_LENGTH);
        Vessel {
            bow,
            length,
            orientation,
            remaining_hits: length,
        }
    }

    pub fn bow(&self) -> Coordinate {
        self.bow
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Hit points left before the vessel is destroyed.
    pub fn remaining_hits(&self) -> usize {
        self.remaining_hits
    }

    /// Cells covered by the vessel, starting at the bow.
    pub fn occupied_cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        let (dr, dc) = self.orientation.step();
        let bow = self.bow;
        (0..self.length as i32).map(move |i| bow.offset(dr * i, dc * i))
    }

    /// `true` if `shot` lands on one of the vessel's cells.
    pub fn is_hit_by(&self, shot: Coordinate) -> bool {
        self.occupied_cells().any(|p| p == shot)
    }

    /// Take one point of damage. Returns `true` if this hit destroyed the
    /// vessel. Damage on an already destroyed vessel is ignored.
    pub fn register_hit(&mut self) -> bool {
        if self.remaining_hits == 0 {
            return false;
        }
        self.remaining_hits -= 1;
        self.remaining_hits == 0
    }

    pub fn is_destroyed(&self) -> bool {
        self.remaining_hits == 0
    }
}
