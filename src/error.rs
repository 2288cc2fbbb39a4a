use thiserror::Error;

use crate::types::{Phase, Point};

/// Why an action was rejected. A rejected action leaves the board untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("illegal action: the game is over")]
    GameOver,
    #[error("illegal move: {0} is off the board")]
    OffBoard(Point),
    #[error("illegal move: {0} is not empty")]
    Occupied(Point),
    #[error("illegal move: {0} retakes ko")]
    Ko(Point),
    #[error("illegal move: {0} is suicide")]
    Suicide(Point),
    #[error("single placement needs the first phase, board is in the {0} phase")]
    WrongPhase(Phase),
}
