use rand::Rng;

use crate::{common::GameError, coord::Coordinate, grid::Grid, player::Player};

/// Computer player that fires at uniformly random untried cells.
#[derive(Debug, Default, Clone, Copy)]
pub struct AiPlayer;

impl AiPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Player for AiPlayer {
    fn select_target<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        target: &Grid,
    ) -> Result<Coordinate, GameError> {
        if target.targeted().is_full() {
            return Err(GameError::NoTargetsLeft);
        }
        let n = target.dimension() as i32;
        loop {
            let p = Coordinate::new(rng.random_range(0..n), rng.random_range(0..n));
            if !target.is_targeted(p) {
                return Ok(p);
            }
        }
    }
}
