//! Row-major stone grid with group flood-fills.
//!
//! This is the geometry layer under [`Board`](crate::board::Board): it knows
//! which color sits on each point and how stones connect, but nothing about
//! turns, ko, or hashing.

use std::fmt;

use crate::types::{Color, Point};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Color>,
}

impl Grid {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Color::Empty; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn idx(&self, p: Point) -> usize {
        p.row * self.size + p.col
    }

    pub fn contains(&self, p: Point) -> bool {
        p.row < self.size && p.col < self.size
    }

    /// Color at `p`; off-board points read as `Empty`.
    pub fn get(&self, p: Point) -> Color {
        if !self.contains(p) {
            return Color::Empty;
        }
        self.cells[self.idx(p)]
    }

    pub(crate) fn set(&mut self, p: Point, color: Color) {
        let i = self.idx(p);
        self.cells[i] = color;
    }

    /// All points in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> + use<> {
        let size = self.size;
        (0..size * size).map(move |i| Point::new(i / size, i % size))
    }

    pub fn count(&self, color: Color) -> usize {
        self.cells.iter().filter(|&&c| c == color).count()
    }

    pub fn neighbors(&self, p: Point) -> impl Iterator<Item = Point> + use<> {
        p.neighbors(self.size)
    }

    /// Number of distinct empty points adjacent to the group containing `p`.
    ///
    /// Both group stones and liberties are marked visited, so a liberty shared
    /// by several stones is counted once. An empty `p` has no group and
    /// reports 0.
    pub fn group_liberties(&self, p: Point) -> usize {
        let color = self.get(p);
        if color == Color::Empty {
            return 0;
        }
        let mut visited = vec![false; self.cells.len()];
        let mut stack = vec![p];
        visited[self.idx(p)] = true;
        let mut liberties = 0;
        while let Some(cur) = stack.pop() {
            for n in self.neighbors(cur) {
                let ni = self.idx(n);
                if visited[ni] {
                    continue;
                }
                match self.cells[ni] {
                    Color::Empty => {
                        visited[ni] = true;
                        liberties += 1;
                    }
                    c if c == color => {
                        visited[ni] = true;
                        stack.push(n);
                    }
                    _ => {}
                }
            }
        }
        liberties
    }

    /// Every stone connected to `p` through same-colored orthogonal steps,
    /// `p` first. Empty for an empty `p`.
    pub fn group(&self, p: Point) -> Vec<Point> {
        let color = self.get(p);
        if color == Color::Empty {
            return Vec::new();
        }
        let mut visited = vec![false; self.cells.len()];
        let mut out = Vec::new();
        let mut stack = vec![p];
        visited[self.idx(p)] = true;
        while let Some(cur) = stack.pop() {
            out.push(cur);
            for n in self.neighbors(cur) {
                let ni = self.idx(n);
                if !visited[ni] && self.cells[ni] == color {
                    visited[ni] = true;
                    stack.push(n);
                }
            }
        }
        out
    }

    pub fn group_size(&self, p: Point) -> usize {
        self.group(p).len()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                let ch = self.get(Point::new(row, col)).symbol();
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
