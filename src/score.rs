//! Area scoring (stones plus surrounded empty points).
//!
//! Scoring looks only at the stones on the board, never at move history, ko or
//! phase, so it can be called at any point in a game.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::constants::DEFAULT_KOMI;
use crate::grid::Grid;
use crate::types::{Color, Point};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub black_territory: usize,
    pub white_territory: usize,
    pub black_stones: usize,
    pub white_stones: usize,
    pub black_score: f64,
    pub white_score: f64,
}

impl ScoreResult {
    /// Black's lead; negative when White is ahead.
    pub fn margin(&self) -> f64 {
        self.black_score - self.white_score
    }

    /// The leading color, or `None` on a tie.
    pub fn winner(&self) -> Option<Color> {
        let margin = self.margin();
        if margin > 0.0 {
            Some(Color::Black)
        } else if margin < 0.0 {
            Some(Color::White)
        } else {
            None
        }
    }
}

/// Score `grid` with `komi` added to White.
///
/// Each maximal empty region counts for the one color it touches. Regions
/// touching both colors, or none (an empty board), count for nobody.
pub fn score(grid: &Grid, komi: f64) -> ScoreResult {
    let black_stones = grid.count(Color::Black);
    let white_stones = grid.count(Color::White);
    let mut black_territory = 0;
    let mut white_territory = 0;

    let size = grid.size();
    let mut visited = vec![false; size * size];
    let idx = |p: Point| p.row * size + p.col;

    for start in grid.points() {
        if visited[idx(start)] || grid.get(start) != Color::Empty {
            continue;
        }

        let mut region = 0;
        let mut borders_black = false;
        let mut borders_white = false;
        let mut stack = vec![start];
        visited[idx(start)] = true;
        while let Some(cur) = stack.pop() {
            region += 1;
            for n in grid.neighbors(cur) {
                match grid.get(n) {
                    Color::Empty if !visited[idx(n)] => {
                        visited[idx(n)] = true;
                        stack.push(n);
                    }
                    Color::Empty => {}
                    Color::Black => borders_black = true,
                    Color::White => borders_white = true,
                }
            }
        }

        match (borders_black, borders_white) {
            (true, false) => black_territory += region,
            (false, true) => white_territory += region,
            _ => {}
        }
    }

    ScoreResult {
        black_territory,
        white_territory,
        black_stones,
        white_stones,
        black_score: (black_stones + black_territory) as f64,
        white_score: (white_stones + white_territory) as f64 + komi,
    }
}

impl Board {
    pub fn score(&self, komi: f64) -> ScoreResult {
        score(self.grid(), komi)
    }

    /// Score with [`DEFAULT_KOMI`].
    pub fn score_default(&self) -> ScoreResult {
        self.score(DEFAULT_KOMI)
    }
}
