//! Whole-cube state: six facelet grids and the predicates over them.

use std::ops::{Index, IndexMut};

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::error::{CubeError, Result};
use crate::facelet::{Color, Face, FaceletGrid, FACELETS_PER_FACE, GRID_DIM};

/// Placeholder cell in the text net for positions no face occupies.
const EMPTY_CELL: char = '.';

/// The color of each face on the reference solved cube.
pub const fn solved_color(face: Face) -> Color {
    match face {
        Face::Front => Color::Green,
        Face::Back => Color::Blue,
        Face::Right => Color::Red,
        Face::Left => Color::Orange,
        Face::Up => Color::White,
        Face::Down => Color::Yellow,
    }
}

/// The full sticker state of a cube.
///
/// A plain value: cloning yields an independent copy and every move produces
/// a fresh state. Serializes as an object keyed by lowercase face name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CubeState {
    pub front: FaceletGrid,
    pub back: FaceletGrid,
    pub right: FaceletGrid,
    pub left: FaceletGrid,
    pub up: FaceletGrid,
    pub down: FaceletGrid,
}

/// Returns the reference solved cube.
pub fn solved_cube() -> CubeState {
    CubeState::solved()
}

/// Whether every face is a single color.
pub fn is_solved(state: &CubeState) -> bool {
    state.is_solved()
}

impl Default for CubeState {
    fn default() -> Self {
        Self::solved()
    }
}

impl CubeState {
    /// Each face uniformly colored with [`solved_color`].
    pub const fn solved() -> Self {
        Self {
            front: FaceletGrid::uniform(solved_color(Face::Front)),
            back: FaceletGrid::uniform(solved_color(Face::Back)),
            right: FaceletGrid::uniform(solved_color(Face::Right)),
            left: FaceletGrid::uniform(solved_color(Face::Left)),
            up: FaceletGrid::uniform(solved_color(Face::Up)),
            down: FaceletGrid::uniform(solved_color(Face::Down)),
        }
    }

    /// Whether every face is uniform.
    ///
    /// Which color sits on which face does not matter, so a whole-cube
    /// rotation of the solved cube also counts.
    pub fn is_solved(&self) -> bool {
        Face::iter().all(|face| self[face].is_uniform())
    }

    /// Returns the color at `(row, col)` of `face`, or `None` outside the grid.
    pub fn facelet(&self, face: Face, row: usize, col: usize) -> Option<Color> {
        self[face].get(row, col)
    }

    /// Paints a single facelet.
    ///
    /// No reachability check is made: any pattern may be painted. Use
    /// [`CubeState::has_consistent_color_counts`] to spot obviously
    /// impossible states.
    pub fn set_facelet(&mut self, face: Face, row: usize, col: usize, color: Color) -> Result<()> {
        if row >= GRID_DIM || col >= GRID_DIM {
            return Err(CubeError::FaceletOutOfRange { face, row, col });
        }
        self[face][(row, col)] = color;
        Ok(())
    }

    /// Counts how many facelets carry each color.
    ///
    /// Colors that appear nowhere are absent from the map.
    pub fn color_counts(&self) -> FxHashMap<Color, usize> {
        let mut counts = FxHashMap::default();
        for face in Face::iter() {
            for color in self[face].iter() {
                *counts.entry(color).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Whether each of the six colors appears exactly nine times, as on any
    /// state reachable by turning.
    pub fn has_consistent_color_counts(&self) -> bool {
        let counts = self.color_counts();
        Color::iter().all(|color| counts.get(&color) == Some(&FACELETS_PER_FACE))
    }

    /// Formats the state as an unfolded cross.
    ///
    /// Up sits above front, then left, front, right and back side by side,
    /// then down below front. Each face is a 3x3 block of color letters and
    /// unused positions show as '.'.
    pub fn format_net(&self) -> String {
        const BLANK: [char; GRID_DIM] = [EMPTY_CELL; GRID_DIM];
        let band = |face: Face, row: usize| self[face].rows()[row].map(Color::letter);

        let mut output = String::new();
        let mut push_line = |blocks: [[char; GRID_DIM]; 4]| {
            let line: Vec<String> = blocks.iter().map(|b| b.iter().collect()).collect();
            output.push_str(&line.join(" "));
            output.push('\n');
        };

        for row in 0..GRID_DIM {
            push_line([BLANK, band(Face::Up, row), BLANK, BLANK]);
        }
        for row in 0..GRID_DIM {
            push_line([
                band(Face::Left, row),
                band(Face::Front, row),
                band(Face::Right, row),
                band(Face::Back, row),
            ]);
        }
        for row in 0..GRID_DIM {
            push_line([BLANK, band(Face::Down, row), BLANK, BLANK]);
        }

        output
    }
}

impl Index<Face> for CubeState {
    type Output = FaceletGrid;

    fn index(&self, face: Face) -> &FaceletGrid {
        match face {
            Face::Front => &self.front,
            Face::Back => &self.back,
            Face::Right => &self.right,
            Face::Left => &self.left,
            Face::Up => &self.up,
            Face::Down => &self.down,
        }
    }
}

impl IndexMut<Face> for CubeState {
    fn index_mut(&mut self, face: Face) -> &mut FaceletGrid {
        match face {
            Face::Front => &mut self.front,
            Face::Back => &mut self.back,
            Face::Right => &mut self.right,
            Face::Left => &mut self.left,
            Face::Up => &mut self.up,
            Face::Down => &mut self.down,
        }
    }
}
