//! Constants for board dimensions, scoring, and hashing.
//!
//! Board size is chosen at runtime when a [`Board`](crate::board::Board) is
//! constructed; the values here bound it and provide the defaults.

// =============================================================================
// Board Geometry
// =============================================================================

/// Largest supported board size (NxN).
pub const MAX_SIZE: usize = 19;

/// Board size used by `Board::default()`.
pub const DEFAULT_SIZE: usize = 19;

/// Number of points on the largest board. Hash keys are laid out with this
/// stride so a point keeps the same key on every board size.
pub const MAX_POINTS: usize = MAX_SIZE * MAX_SIZE;

// =============================================================================
// Scoring
// =============================================================================

/// Compensation added to White's score when none is given explicitly.
pub const DEFAULT_KOMI: f64 = 6.5;

// =============================================================================
// Zobrist Hashing
// =============================================================================

/// Text the process-wide hash table is seeded from.
pub const ZOBRIST_SEED: &str = "the quick brown fox jumps over the lazy dog";
