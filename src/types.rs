//! Value types shared by every part of the engine.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Contents of a board point, and the side to move when not `Empty`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    #[default]
    Empty,
    Black,
    White,
}

impl Color {
    /// The other player. `Empty` has no opponent and maps to itself.
    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
            Color::Empty => Color::Empty,
        }
    }

    /// Character used in board diagrams.
    pub fn symbol(self) -> char {
        match self {
            Color::Black => 'X',
            Color::White => 'O',
            Color::Empty => '.',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Color::Empty => "empty",
            Color::Black => "black",
            Color::White => "white",
        };
        f.write_str(name)
    }
}

/// A 0-based (row, col) coordinate.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Point {
    pub row: usize,
    pub col: usize,
}

impl Point {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Orthogonal neighbors that lie on a `size`x`size` board.
    ///
    /// Order is up, down, left, right.
    pub fn neighbors(self, size: usize) -> impl Iterator<Item = Point> {
        let Point { row, col } = self;
        [
            row.checked_sub(1).map(|r| Point::new(r, col)),
            (row + 1 < size).then(|| Point::new(row + 1, col)),
            col.checked_sub(1).map(|c| Point::new(row, c)),
            (col + 1 < size).then(|| Point::new(row, col + 1)),
        ]
        .into_iter()
        .flatten()
    }
}

impl From<(usize, usize)> for Point {
    fn from((row, col): (usize, usize)) -> Self {
        Point::new(row, col)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Where the side to move is within its turn.
///
/// A turn is `First` then optionally `Second`; completing a two-stone turn
/// hands the opponent a single `Bonus` placement before their own `First`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Bonus,
    First,
    Second,
}

impl Phase {
    pub const ALL: [Phase; 3] = [Phase::Bonus, Phase::First, Phase::Second];

    pub(crate) fn index(self) -> usize {
        match self {
            Phase::Bonus => 0,
            Phase::First => 1,
            Phase::Second => 2,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Bonus => "bonus",
            Phase::First => "first",
            Phase::Second => "second",
        };
        f.write_str(name)
    }
}

/// Something the side to move can do.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Pass,
    Place(Point),
}

impl Action {
    /// Shorthand for `Action::Place(Point::new(row, col))`.
    pub const fn place(row: usize, col: usize) -> Self {
        Action::Place(Point::new(row, col))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Pass => f.write_str("pass"),
            Action::Place(p) => write!(f, "place {p}"),
        }
    }
}
