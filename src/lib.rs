//! Double-Go: a rules engine for "double move" Go.
//!
//! On each turn a player places one or two stones. Taking the second stone
//! hands the opponent a single bonus stone before their own turn. Everything
//! else follows area-scored Go: captures, suicide is illegal, and simple ko.
//!
//! ## Modules
//!
//! - [`constants`] - Size bounds, default komi, hash seed
//! - [`types`] - `Color`, `Point`, `Phase`, `Action`
//! - [`grid`] - Stone grid with liberty and group flood-fills
//! - [`board`] - Turn/phase state machine, legality, captures, ko, hashing
//! - [`zobrist`] - Process-wide Zobrist key table
//! - [`score`] - Area scoring
//! - [`error`] - Why an action was rejected
//!
//! ## Example
//!
//! ```
//! use double_go::{Action, Board, Color, Phase};
//!
//! let mut board = Board::new(9);
//!
//! // Black takes a double move...
//! assert!(board.apply(Action::place(3, 3)));
//! assert!(board.apply(Action::place(4, 4)));
//!
//! // ...so White gets a bonus stone first.
//! assert_eq!(board.to_play(), Color::White);
//! assert_eq!(board.phase(), Phase::Bonus);
//!
//! let score = board.score(6.5);
//! assert_eq!(score.black_stones, 2);
//! ```

pub mod board;
pub mod constants;
pub mod error;
pub mod grid;
pub mod score;
pub mod types;
pub mod zobrist;

pub use board::Board;
pub use error::MoveError;
pub use score::ScoreResult;
pub use types::{Action, Color, Phase, Point};
