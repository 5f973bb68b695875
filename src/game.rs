//! Match setup and the turn loop.

use rand::Rng;

use crate::{
    common::{BoardError, GameError, ShotResult},
    config::{BOARD_SIZE, FLEET, MAX_PLACEMENT_ATTEMPTS},
    coord::Coordinate,
    grid::Grid,
    player::{Combatant, Player},
    vessel::{Orientation, Vessel},
};

/// Try to place the standard fleet at random on a fresh grid.
///
/// Bows are drawn anywhere on the board and rejected placements are simply
/// redrawn. Fails with `UnableToPlaceFleet` once `MAX_PLACEMENT_ATTEMPTS`
/// draws have been spent across the whole fleet.
pub fn try_fleet<R: Rng + ?Sized>(rng: &mut R) -> Result<Grid, BoardError> {
    let mut grid = Grid::new();
    let n = BOARD_SIZE as i32;
    let mut attempts = 0;
    for &length in FLEET.iter() {
        loop {
            attempts += 1;
            if attempts > MAX_PLACEMENT_ATTEMPTS {
                return Err(BoardError::UnableToPlaceFleet);
            }
            let bow = Coordinate::new(rng.random_range(0..n), rng.random_range(0..n));
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            match grid.place_vessel(Vessel::new(bow, length, orientation)) {
                Ok(()) => break,
                Err(BoardError::OutOfBounds | BoardError::CellConflict) => continue,
                Err(e) => return Err(e),
            }
        }
    }
    grid.finalize_placement();
    log::debug!("fleet placed after {} attempts", attempts);
    Ok(grid)
}

/// Build a fully placed grid, starting over whenever [`try_fleet`] gives up.
pub fn generate_fleet<R: Rng + ?Sized>(rng: &mut R) -> Grid {
    let mut restarts = 0usize;
    loop {
        match try_fleet(rng) {
            Ok(grid) => return grid,
            Err(e) => {
                restarts += 1;
                log::debug!("fleet generation restart {}: {}", restarts, e);
            }
        }
    }
}

/// The two sides of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    /// Moves on even turn indices.
    User,
    /// Moves on odd turn indices.
    Computer,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::User => Side::Computer,
            Side::Computer => Side::User,
        }
    }

    fn for_turn(turn: usize) -> Side {
        if turn % 2 == 0 {
            Side::User
        } else {
            Side::Computer
        }
    }
}

/// Where a match stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    Playing { turn: usize },
    Finished { winner: Side },
}

/// Everything that happened in one call to [`Match::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    pub side: Side,
    pub target: Coordinate,
    pub result: ShotResult,
    /// Set when this shot ended the match.
    pub winner: Option<Side>,
}

/// Final statistics of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchSummary {
    pub winner: Side,
    pub turns: usize,
    pub user_shots: usize,
    pub computer_shots: usize,
}

/// A match between a user-side and a computer-side player.
pub struct Match<U: Player, C: Player, R: Rng> {
    user: Combatant<U>,
    computer: Combatant<C>,
    rng: R,
    state: MatchState,
    user_shots: usize,
    computer_shots: usize,
}

impl<U: Player, C: Player, R: Rng> Match<U, C, R> {
    /// Set up both fleets at random and get ready for the first turn. The
    /// computer's ships are concealed.
    pub fn new(user: U, computer: C, mut rng: R) -> Self {
        let user_grid = generate_fleet(&mut rng);
        let mut computer_grid = generate_fleet(&mut rng);
        computer_grid.set_conceal_ships(true);
        Self::from_grids(user, user_grid, computer, computer_grid, rng)
    }

    /// Start a match on prepared grids.
    pub fn from_grids(user: U, user_grid: Grid, computer: C, computer_grid: Grid, rng: R) -> Self {
        Self {
            user: Combatant::new(user, user_grid),
            computer: Combatant::new(computer, computer_grid),
            rng,
            state: MatchState::Playing { turn: 0 },
            user_shots: 0,
            computer_shots: 0,
        }
    }

    pub fn state(&self) -> MatchState {
        self.state
    }

    pub fn winner(&self) -> Option<Side> {
        match self.state {
            MatchState::Finished { winner } => Some(winner),
            MatchState::Playing { .. } => None,
        }
    }

    /// Side to move next, or `None` once the match is over.
    pub fn active_side(&self) -> Option<Side> {
        match self.state {
            MatchState::Playing { turn } => Some(Side::for_turn(turn)),
            MatchState::Finished { .. } => None,
        }
    }

    pub fn user(&self) -> &Combatant<U> {
        &self.user
    }

    pub fn computer(&self) -> &Combatant<C> {
        &self.computer
    }

    /// Grid holding the fleet of `side`.
    pub fn grid(&self, side: Side) -> &Grid {
        match side {
            Side::User => self.user.fleet(),
            Side::Computer => self.computer.fleet(),
        }
    }

    /// Resolved shots fired by `side`.
    pub fn shots_fired(&self, side: Side) -> usize {
        match side {
            Side::User => self.user_shots,
            Side::Computer => self.computer_shots,
        }
    }

    /// Resolved shots fired by both sides.
    pub fn turns_played(&self) -> usize {
        self.user_shots + self.computer_shots
    }

    /// Let the side to move fire one shot. A hit keeps the turn with the same
    /// side.
    pub fn step(&mut self) -> Result<TurnReport, GameError> {
        let mut turn = match self.state {
            MatchState::Playing { turn } => turn,
            MatchState::Finished { .. } => return Err(GameError::MatchFinished),
        };
        let side = Side::for_turn(turn);
        let report = match side {
            Side::User => {
                let report = self
                    .user
                    .take_turn(&mut self.rng, self.computer.fleet_mut())?;
                self.user_shots += 1;
                report
            }
            Side::Computer => {
                let report = self
                    .computer
                    .take_turn(&mut self.rng, self.user.fleet_mut())?;
                self.computer_shots += 1;
                report
            }
        };
        if !report.repeats_turn() {
            turn += 1;
        }

        // the computer's fleet is checked first
        let winner = if self.computer.fleet().is_defeated() {
            Some(Side::User)
        } else if self.user.fleet().is_defeated() {
            Some(Side::Computer)
        } else {
            None
        };
        self.state = match winner {
            Some(winner) => {
                log::debug!("{:?} wins after {} shots", winner, self.turns_played());
                MatchState::Finished { winner }
            }
            None => MatchState::Playing { turn },
        };
        Ok(TurnReport {
            side,
            target: report.target,
            result: report.result,
            winner,
        })
    }

    /// Step until a side wins.
    pub fn play(&mut self) -> Result<Side, GameError> {
        loop {
            if let Some(winner) = self.winner() {
                return Ok(winner);
            }
            self.step()?;
        }
    }

    /// Statistics of a finished match.
    pub fn summary(&self) -> Option<MatchSummary> {
        self.winner().map(|winner| MatchSummary {
            winner,
            turns: self.turns_played(),
            user_shots: self.user_shots,
            computer_shots: self.computer_shots,
        })
    }
}
