//! Facelet colors, face identifiers, and the per-face 3x3 grid.
//!
//! Every grid is indexed `(row, col)` with row 0 at the top and col 0 at the
//! left, as seen looking straight at that face from outside the cube:
//! - front, right, back and left are viewed with up on top
//! - up is viewed from above with back at the top (row 2 borders front)
//! - down is viewed from below with front at the top (row 0 borders front)

use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Side length of a face grid.
pub const GRID_DIM: usize = 3;

/// Number of facelets on one face.
pub const FACELETS_PER_FACE: usize = GRID_DIM * GRID_DIM;

/// Sticker color.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Color {
    White,
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
}

impl Color {
    /// Single-letter code used by the text net.
    pub const fn letter(self) -> char {
        match self {
            Color::White => 'W',
            Color::Red => 'R',
            Color::Orange => 'O',
            Color::Yellow => 'Y',
            Color::Green => 'G',
            Color::Blue => 'B',
        }
    }
}

/// One of the six cube faces.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Face {
    Front,
    Back,
    Right,
    Left,
    Up,
    Down,
}

impl Face {
    /// The face on the other side of the cube.
    pub const fn opposite(self) -> Face {
        match self {
            Face::Front => Face::Back,
            Face::Back => Face::Front,
            Face::Right => Face::Left,
            Face::Left => Face::Right,
            Face::Up => Face::Down,
            Face::Down => Face::Up,
        }
    }

    /// Notation letter (`F`, `B`, `R`, `L`, `U`, `D`).
    pub const fn letter(self) -> char {
        match self {
            Face::Front => 'F',
            Face::Back => 'B',
            Face::Right => 'R',
            Face::Left => 'L',
            Face::Up => 'U',
            Face::Down => 'D',
        }
    }

    /// Inverse of [`Face::letter`]. Only uppercase letters are notation.
    pub const fn from_letter(letter: char) -> Option<Face> {
        match letter {
            'F' => Some(Face::Front),
            'B' => Some(Face::Back),
            'R' => Some(Face::Right),
            'L' => Some(Face::Left),
            'U' => Some(Face::Up),
            'D' => Some(Face::Down),
            _ => None,
        }
    }
}

/// A fully populated 3x3 grid of colors for one face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FaceletGrid {
    cells: [[Color; GRID_DIM]; GRID_DIM],
}

impl FaceletGrid {
    /// A grid with all nine cells set to `color`.
    pub const fn uniform(color: Color) -> Self {
        Self {
            cells: [[color; GRID_DIM]; GRID_DIM],
        }
    }

    pub const fn from_rows(cells: [[Color; GRID_DIM]; GRID_DIM]) -> Self {
        Self { cells }
    }

    pub const fn rows(&self) -> &[[Color; GRID_DIM]; GRID_DIM] {
        &self.cells
    }

    /// Returns the color at `(row, col)`, or `None` outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<Color> {
        self.cells.get(row)?.get(col).copied()
    }

    /// Whether all nine cells share one color.
    pub fn is_uniform(&self) -> bool {
        let first = self.cells[0][0];
        self.cells.iter().flatten().all(|&color| color == first)
    }

    /// Iterates over the cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Color> + '_ {
        self.cells.iter().flatten().copied()
    }
}

impl Index<(usize, usize)> for FaceletGrid {
    type Output = Color;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Color {
        &self.cells[row][col]
    }
}

impl IndexMut<(usize, usize)> for FaceletGrid {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Color {
        &mut self.cells[row][col]
    }
}
