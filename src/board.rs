//! Double-move Go position and rule enforcement.
//!
//! A [`Board`] owns the stones, the side to move, the turn [`Phase`], the ko
//! point, capture counts, the consecutive-pass counter and a running Zobrist
//! hash. It changes only through [`Board::apply`] (and the conveniences built
//! on it), and every change keeps the hash equal to [`Board::compute_hash`].
//!
//! ## Turn structure
//!
//! A turn starts in `First`. Placing a stone moves to `Second`, where the same
//! player may place again or pass to end the turn with one stone. Placing a
//! second stone ends the turn and gives the opponent one `Bonus` placement
//! before their own `First`:
//!
//! ```text
//! First --place--> Second --place--> Bonus (opponent) --place--> First
//!                    |
//!                    +--pass--> First (opponent)
//! ```
//!
//! Passing in `First` or `Bonus` is a voluntary pass; two in a row end the game.

use std::fmt;

use anyhow::Context;
use tracing::{debug, trace};

use crate::constants::{DEFAULT_SIZE, MAX_SIZE};
use crate::error::MoveError;
use crate::grid::Grid;
use crate::types::{Action, Color, Phase, Point};
use crate::zobrist;

#[derive(Clone, Debug)]
pub struct Board {
    grid: Grid,
    to_play: Color,
    ko_point: Option<Point>,
    /// Opponent stones removed, indexed black then white.
    captures: [usize; 2],
    phase: Phase,
    /// Voluntary passes only; a pass that ends a turn early resets it.
    consecutive_passes: u32,
    hash: u64,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE)
    }
}

impl Board {
    /// Create an empty `size`x`size` board with Black to play.
    ///
    /// # Panics
    /// If `size` is outside `1..=MAX_SIZE`.
    pub fn new(size: usize) -> Self {
        assert!(
            (1..=MAX_SIZE).contains(&size),
            "board size must be in 1..={MAX_SIZE}, got {size}"
        );
        let keys = zobrist::table();
        Self {
            grid: Grid::new(size),
            to_play: Color::Black,
            ko_point: None,
            captures: [0; 2],
            phase: Phase::First,
            consecutive_passes: 0,
            hash: keys.phase(Phase::First) ^ keys.black_to_move(),
        }
    }

    /// Play `actions` in order on a fresh board.
    ///
    /// Fails on the first rejected action, naming its index.
    pub fn replay(size: usize, actions: &[Action]) -> anyhow::Result<Board> {
        let mut board = Board::new(size);
        for (i, &action) in actions.iter().enumerate() {
            board
                .try_apply(action)
                .with_context(|| format!("action #{i} ({action}) was rejected"))?;
        }
        Ok(board)
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn size(&self) -> usize {
        self.grid.size()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn at(&self, p: Point) -> Color {
        self.grid.get(p)
    }

    pub fn to_play(&self) -> Color {
        self.to_play
    }

    pub fn ko_point(&self) -> Option<Point> {
        self.ko_point
    }

    /// Opponent stones captured by `color`.
    pub fn captures(&self, color: Color) -> usize {
        match color {
            Color::Black => self.captures[0],
            Color::White => self.captures[1],
            Color::Empty => 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn has_bonus_move(&self) -> bool {
        self.phase == Phase::Bonus
    }

    pub fn consecutive_passes(&self) -> u32 {
        self.consecutive_passes
    }

    pub fn game_over(&self) -> bool {
        self.consecutive_passes >= 2
    }

    pub fn hash(&self) -> u64 {
        self.hash
    }

    pub fn stone_count(&self, color: Color) -> usize {
        self.grid.count(color)
    }

    /// Hash of the current position computed from scratch.
    pub fn compute_hash(&self) -> u64 {
        let keys = zobrist::table();
        let mut h = self
            .grid
            .points()
            .fold(0, |h, p| h ^ keys.stone(self.grid.get(p), p));
        if let Some(ko) = self.ko_point {
            h ^= keys.ko(ko);
        }
        h ^= keys.phase(self.phase);
        if self.to_play == Color::Black {
            h ^= keys.black_to_move();
        }
        h
    }

    // -------------------------------------------------------------------------
    // Legality
    // -------------------------------------------------------------------------

    pub fn is_on_board(&self, p: Point) -> bool {
        self.grid.contains(p)
    }

    pub fn is_legal(&self, p: Point) -> bool {
        self.check_placement(p).is_ok()
    }

    /// Check whether the side to move may place a stone at `p`.
    ///
    /// The ko point is off limits except in `Second`, where the placement
    /// belongs to the same turn that created the ko.
    pub fn check_placement(&self, p: Point) -> Result<(), MoveError> {
        if !self.is_on_board(p) {
            return Err(MoveError::OffBoard(p));
        }
        if self.grid.get(p) != Color::Empty {
            return Err(MoveError::Occupied(p));
        }
        if self.ko_point == Some(p) && self.phase != Phase::Second {
            return Err(MoveError::Ko(p));
        }

        let me = self.to_play;
        let opp = me.opponent();
        let grid = &self.grid;

        // Immediate liberty
        if grid.neighbors(p).any(|n| grid.get(n) == Color::Empty) {
            return Ok(());
        }
        // Captures an opponent group in atari
        if grid
            .neighbors(p)
            .any(|n| grid.get(n) == opp && grid.group_liberties(n) == 1)
        {
            return Ok(());
        }
        // Joins a friendly group that keeps a liberty
        if grid
            .neighbors(p)
            .any(|n| grid.get(n) == me && grid.group_liberties(n) >= 2)
        {
            return Ok(());
        }
        Err(MoveError::Suicide(p))
    }

    pub fn legal_moves(&self) -> Vec<Point> {
        self.grid.points().filter(|&p| self.is_legal(p)).collect()
    }

    /// `Pass` followed by a placement for every legal point.
    pub fn legal_actions(&self) -> Vec<Action> {
        std::iter::once(Action::Pass)
            .chain(self.legal_moves().into_iter().map(Action::Place))
            .collect()
    }

    /// True when the side to move has no legal placement.
    pub fn must_pass(&self) -> bool {
        !self.grid.points().any(|p| self.is_legal(p))
    }

    // -------------------------------------------------------------------------
    // Mutation
    // -------------------------------------------------------------------------

    /// Apply `action`, returning whether it was accepted.
    pub fn apply(&mut self, action: Action) -> bool {
        match self.try_apply(action) {
            Ok(()) => true,
            Err(err) => {
                debug!(%action, %err, "action rejected");
                false
            }
        }
    }

    pub fn try_apply(&mut self, action: Action) -> Result<(), MoveError> {
        if self.game_over() {
            return Err(MoveError::GameOver);
        }
        match action {
            Action::Pass => self.resolve_pass(),
            Action::Place(p) => {
                self.check_placement(p)?;
                self.place_stone(p);
                self.consecutive_passes = 0;
                match self.phase {
                    Phase::Bonus => self.set_phase(Phase::First),
                    Phase::First => self.set_phase(Phase::Second),
                    Phase::Second => {
                        self.set_phase(Phase::Bonus);
                        self.flip_player();
                    }
                }
            }
        }
        debug_assert_eq!(self.hash, self.compute_hash(), "hash drifted after {action}");
        Ok(())
    }

    /// Play a traditional one-stone turn: place at `p`, then pass.
    ///
    /// Only valid in `First`; otherwise nothing changes.
    pub fn play_single(&mut self, p: Point) -> bool {
        match self.try_play_single(p) {
            Ok(()) => true,
            Err(err) => {
                debug!(point = %p, %err, "single placement rejected");
                false
            }
        }
    }

    pub fn try_play_single(&mut self, p: Point) -> Result<(), MoveError> {
        if self.game_over() {
            return Err(MoveError::GameOver);
        }
        if self.phase != Phase::First {
            return Err(MoveError::WrongPhase(self.phase));
        }
        self.check_placement(p)?;
        self.try_apply(Action::Place(p))?;
        self.try_apply(Action::Pass)
    }

    /// Pass. Does nothing once the game is over.
    pub fn pass(&mut self) {
        self.apply(Action::Pass);
    }

    fn resolve_pass(&mut self) {
        match self.phase {
            // Declines the optional second stone; the turn's ko survives.
            Phase::Second => {
                self.consecutive_passes = 0;
                trace!(player = %self.to_play, "turn ended after one placement");
            }
            Phase::First | Phase::Bonus => {
                self.consecutive_passes += 1;
                self.clear_ko();
            }
        }
        self.set_phase(Phase::First);
        self.flip_player();
        if self.game_over() {
            debug!(passes = self.consecutive_passes, "game over");
        }
    }

    fn place_stone(&mut self, p: Point) {
        let me = self.to_play;
        let opp = me.opponent();
        self.grid.set(p, me);
        self.hash ^= zobrist::table().stone(me, p);

        let mut captured = 0;
        let mut last_captured = None;
        let neighbors: Vec<Point> = self.grid.neighbors(p).collect();
        for n in neighbors {
            if self.grid.get(n) == opp && self.grid.group_liberties(n) == 0 {
                captured += self.remove_group(n);
                last_captured = Some(n);
            }
        }
        if captured > 0 {
            trace!(player = %me, point = %p, captured, "stones captured");
        }
        match me {
            Color::Black => self.captures[0] += captured,
            Color::White => self.captures[1] += captured,
            Color::Empty => unreachable!("side to move is never empty"),
        }

        self.clear_ko();
        if self.phase != Phase::Bonus
            && captured == 1
            && self.grid.group_size(p) == 1
            && self.grid.group_liberties(p) == 1
        {
            if let Some(ko) = last_captured {
                debug!(point = %ko, "ko created");
                self.set_ko(ko);
            }
        }
    }

    /// Clear the group at `p`, returning how many stones it had.
    fn remove_group(&mut self, p: Point) -> usize {
        let color = self.grid.get(p);
        let stones = self.grid.group(p);
        let keys = zobrist::table();
        for &s in &stones {
            self.grid.set(s, Color::Empty);
            self.hash ^= keys.stone(color, s);
        }
        stones.len()
    }

    fn set_ko(&mut self, p: Point) {
        self.clear_ko();
        self.ko_point = Some(p);
        self.hash ^= zobrist::table().ko(p);
    }

    fn clear_ko(&mut self) {
        if let Some(ko) = self.ko_point.take() {
            self.hash ^= zobrist::table().ko(ko);
        }
    }

    fn set_phase(&mut self, phase: Phase) {
        if phase == self.phase {
            return;
        }
        let keys = zobrist::table();
        self.hash ^= keys.phase(self.phase) ^ keys.phase(phase);
        trace!(from = %self.phase, to = %phase, "phase change");
        self.phase = phase;
    }

    fn flip_player(&mut self) {
        self.to_play = self.to_play.opponent();
        self.hash ^= zobrist::table().black_to_move();
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for p in self.grid.points() {
            let ch = if self.ko_point == Some(p) {
                '*'
            } else {
                self.grid.get(p).symbol()
            };
            write!(f, "{ch} ")?;
            if p.col + 1 == self.size() {
                writeln!(f)?;
            }
        }
        writeln!(
            f,
            "{} to play ({} phase), captures X:{} O:{}",
            self.to_play,
            self.phase,
            self.captures[0],
            self.captures[1]
        )
    }
}
