//! Common types: shot results and the error kinds of the engine.

use core::fmt;

/// Outcome of a shot that landed on a fresh cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotResult {
    /// Only water.
    Miss,
    /// A vessel was damaged but is still afloat.
    Hit,
    /// The shot destroyed the vessel it hit.
    Sunk,
}

impl ShotResult {
    /// Any hit earns the shooter another shot.
    pub fn repeats_turn(self) -> bool {
        matches!(self, ShotResult::Hit | ShotResult::Sunk)
    }
}

/// Errors returned by grid operations. All of them are recoverable by
/// retrying with another coordinate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinate lies outside the board.
    OutOfBounds,
    /// Cell has already been shot at.
    AlreadyTargeted,
    /// Vessel would overlap or touch another vessel.
    CellConflict,
    /// Placement was finalized; the fleet is frozen.
    PlacementClosed,
    /// Random fleet generation ran out of attempts.
    UnableToPlaceFleet,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds => write!(f, "You are shooting off the board!"),
            BoardError::AlreadyTargeted => write!(f, "You have already shot at this cell!"),
            BoardError::CellConflict => write!(f, "Vessel overlaps or touches another vessel"),
            BoardError::PlacementClosed => write!(f, "Fleet placement is already finalized"),
            BoardError::UnableToPlaceFleet => write!(f, "Unable to place the fleet"),
        }
    }
}

/// Errors that end a turn or a match instead of being retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The interactive input source was closed or failed.
    InputClosed,
    /// Every cell of the target grid has been shot at.
    NoTargetsLeft,
    /// The match already has a winner.
    MatchFinished,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InputClosed => write!(f, "input closed"),
            GameError::NoTargetsLeft => write!(f, "no untried cells left to shoot at"),
            GameError::MatchFinished => write!(f, "match is already finished"),
        }
    }
}

/// Rejections of a typed target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    /// Not exactly two tokens.
    WrongTokenCount,
    /// A token is not a non-negative integer.
    NotANumber,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::WrongTokenCount => write!(f, "Enter 2 coordinates!"),
            InputError::NotANumber => write!(f, "Enter numbers!"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
#[cfg(feature = "std")]
impl std::error::Error for GameError {}
#[cfg(feature = "std")]
impl std::error::Error for InputError {}
