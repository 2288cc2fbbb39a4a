//! Zobrist keys for incremental position hashing.
//!
//! Every feature of a position that can be "active" gets an independent random
//! 64-bit key: a stone of either color on a point, the ko restriction on a
//! point, each phase value, and Black being the side to move. A position's hash
//! is the XOR of the keys of its active features, so a mutation only has to XOR
//! in what became active and XOR out what stopped being active.
//!
//! The table is built once per process from [`ZOBRIST_SEED`] and never mutated
//! afterwards, so any number of boards on any number of threads may read it.

use std::fmt;
use std::sync::LazyLock;

use crate::constants::{MAX_POINTS, MAX_SIZE, ZOBRIST_SEED};
use crate::types::{Color, Phase, Point};

static TABLE: LazyLock<ZobristTable> = LazyLock::new(|| ZobristTable::from_seed(ZOBRIST_SEED));

/// The process-wide key table.
pub fn table() -> &'static ZobristTable {
    &TABLE
}

/// Immutable set of random keys.
pub struct ZobristTable {
    stones: [[u64; MAX_POINTS]; 2],
    ko: [u64; MAX_POINTS],
    phases: [u64; 3],
    black_to_move: u64,
}

impl ZobristTable {
    /// Build a table whose keys are fully determined by `seed`.
    pub fn from_seed(seed: &str) -> Self {
        let mut rng = fastrand::Rng::with_seed(fold_seed(seed));

        let mut stones = [[0u64; MAX_POINTS]; 2];
        for key in stones.iter_mut().flatten() {
            *key = rng.u64(..);
        }
        let mut ko = [0u64; MAX_POINTS];
        for key in &mut ko {
            *key = rng.u64(..);
        }
        let mut phases = [0u64; 3];
        for key in &mut phases {
            *key = rng.u64(..);
        }
        let black_to_move = rng.u64(..);

        Self {
            stones,
            ko,
            phases,
            black_to_move,
        }
    }

    /// Key for a stone of `color` at `p`. `Empty` contributes nothing.
    #[inline]
    pub fn stone(&self, color: Color, p: Point) -> u64 {
        match color {
            Color::Black => self.stones[0][slot(p)],
            Color::White => self.stones[1][slot(p)],
            Color::Empty => 0,
        }
    }

    /// Key for the ko restriction sitting on `p`.
    #[inline]
    pub fn ko(&self, p: Point) -> u64 {
        self.ko[slot(p)]
    }

    #[inline]
    pub fn phase(&self, phase: Phase) -> u64 {
        self.phases[phase.index()]
    }

    #[inline]
    pub fn black_to_move(&self) -> u64 {
        self.black_to_move
    }
}

impl fmt::Debug for ZobristTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ZobristTable")
            .field("black_to_move", &format_args!("{:#018x}", self.black_to_move))
            .finish_non_exhaustive()
    }
}

#[inline]
fn slot(p: Point) -> usize {
    debug_assert!(p.row < MAX_SIZE && p.col < MAX_SIZE, "point {p} outside hash table");
    p.row * MAX_SIZE + p.col
}

/// FNV-1a over the seed text, giving the 64-bit RNG seed.
fn fold_seed(text: &str) -> u64 {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;
    text.bytes()
        .fold(OFFSET, |h, b| (h ^ u64::from(b)).wrapping_mul(PRIME))
}
