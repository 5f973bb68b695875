use rand::Rng;

use crate::{
    common::{BoardError, GameError, ShotResult},
    coord::Coordinate,
    grid::Grid,
};

/// Interface implemented by the different player types.
pub trait Player {
    /// Choose the next cell to fire at on the opponent's grid.
    fn select_target<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        target: &Grid,
    ) -> Result<Coordinate, GameError>;

    /// Inform the player that the grid refused its shot at `at`.
    fn report_rejected(&mut self, _at: Coordinate, _err: &BoardError) {}

    /// Inform the player of the result of its shot at `at`.
    fn report_result(&mut self, _at: Coordinate, _result: ShotResult) {}
}

/// A resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShotReport {
    pub target: Coordinate,
    pub result: ShotResult,
}

impl ShotReport {
    pub fn repeats_turn(&self) -> bool {
        self.result.repeats_turn()
    }
}

/// A player together with the grid holding its own fleet.
pub struct Combatant<P: Player> {
    player: P,
    fleet: Grid,
}

impl<P: Player> Combatant<P> {
    pub fn new(player: P, fleet: Grid) -> Self {
        Self { player, fleet }
    }

    pub fn player(&self) -> &P {
        &self.player
    }

    pub fn into_player(self) -> P {
        self.player
    }

    /// Grid holding this combatant's fleet.
    pub fn fleet(&self) -> &Grid {
        &self.fleet
    }

    pub(crate) fn fleet_mut(&mut self) -> &mut Grid {
        &mut self.fleet
    }

    /// Fire one shot at `opponent`. Shots the grid refuses are reported to
    /// the player and a new target is requested; the turn only ends on a
    /// resolved shot or a [`GameError`].
    pub fn take_turn<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        opponent: &mut Grid,
    ) -> Result<ShotReport, GameError> {
        loop {
            let target = self.player.select_target(rng, opponent)?;
            match opponent.resolve_shot(target) {
                Ok(result) => {
                    self.player.report_result(target, result);
                    return Ok(ShotReport { target, result });
                }
                Err(err) => {
                    log::debug!("shot at {:?} rejected: {}", target, err);
                    self.player.report_rejected(target, &err);
                }
            }
        }
    }
}
