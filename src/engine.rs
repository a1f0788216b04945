//! Face-turn transforms.
//!
//! A turn rotates the turned face's own grid and cycles the band: the strip
//! of three facelets on each of the four neighboring faces that touches the
//! turned face. Everything is expressed as a clockwise quarter turn, and the
//! other two turn amounts repeat it.

use crate::cube::CubeState;
use crate::error::Result;
use crate::facelet::{Face, FaceletGrid, GRID_DIM};
use crate::moves::Move;

/// A `(row, col)` position inside a face grid.
type Cell = (usize, usize);

/// Three cells of one neighboring face, ordered so that index `i` of one
/// strip travels to index `i` of the next strip.
type Strip = (Face, [Cell; GRID_DIM]);

/// The four strips around a face, in the order a clockwise turn carries
/// facelets: strip `k` moves onto strip `k + 1`.
type Band = [Strip; 4];

const fn row(face: Face, r: usize) -> Strip {
    (face, [(r, 0), (r, 1), (r, 2)])
}

const fn row_reversed(face: Face, r: usize) -> Strip {
    (face, [(r, 2), (r, 1), (r, 0)])
}

const fn col(face: Face, c: usize) -> Strip {
    (face, [(0, c), (1, c), (2, c)])
}

const fn col_reversed(face: Face, c: usize) -> Strip {
    (face, [(2, c), (1, c), (0, c)])
}

/// Band for each face. Back is mirrored relative to front when walking
/// around the cube, and up/down are seen from above/below, which is where
/// the reversed strips come from.
const fn band(face: Face) -> Band {
    match face {
        Face::Up => [
            row(Face::Front, 0),
            row(Face::Left, 0),
            row(Face::Back, 0),
            row(Face::Right, 0),
        ],
        Face::Down => [
            row(Face::Front, 2),
            row(Face::Right, 2),
            row(Face::Back, 2),
            row(Face::Left, 2),
        ],
        Face::Right => [
            col(Face::Front, 2),
            col(Face::Up, 2),
            col_reversed(Face::Back, 0),
            col(Face::Down, 2),
        ],
        Face::Left => [
            col(Face::Front, 0),
            col(Face::Down, 0),
            col_reversed(Face::Back, 2),
            col(Face::Up, 0),
        ],
        Face::Front => [
            row(Face::Up, 2),
            col(Face::Right, 0),
            row_reversed(Face::Down, 0),
            col_reversed(Face::Left, 2),
        ],
        Face::Back => [
            row(Face::Up, 0),
            col_reversed(Face::Left, 0),
            row_reversed(Face::Down, 2),
            col(Face::Right, 2),
        ],
    }
}

/// Rotates a grid 90 degrees clockwise: `output[col][2 - row] = input[row][col]`.
pub fn rotate_grid_clockwise(grid: &FaceletGrid) -> FaceletGrid {
    let mut rotated = *grid;
    for r in 0..GRID_DIM {
        for c in 0..GRID_DIM {
            rotated[(c, GRID_DIM - 1 - r)] = grid[(r, c)];
        }
    }
    rotated
}

/// Rotates a grid 90 degrees counter-clockwise as three clockwise rotations.
pub fn rotate_grid_counter_clockwise(grid: &FaceletGrid) -> FaceletGrid {
    rotate_grid_clockwise(&rotate_grid_clockwise(&rotate_grid_clockwise(grid)))
}

/// One clockwise quarter turn of `face`, applied in place to a private copy.
fn quarter_turn(state: &mut CubeState, face: Face) {
    state[face] = rotate_grid_clockwise(&state[face]);

    let band = band(face);
    let before = *state;
    for k in 0..band.len() {
        let (src_face, src_cells) = band[k];
        let (dst_face, dst_cells) = band[(k + 1) % band.len()];
        for (&src, &dst) in src_cells.iter().zip(&dst_cells) {
            state[dst_face][dst] = before[src_face][src];
        }
    }
}

/// Applies one move, returning the new state. The input is never modified.
pub fn apply_move(state: &CubeState, mv: Move) -> CubeState {
    let mut next = *state;
    for _ in 0..mv.turn.quarter_turns() {
        quarter_turn(&mut next, mv.face);
    }
    next
}

/// Parses `token` and applies it.
///
/// Anything outside the 18-move alphabet is rejected with
/// [`CubeError::UnsupportedMove`](crate::error::CubeError::UnsupportedMove)
/// rather than being skipped.
pub fn apply_move_token(state: &CubeState, token: &str) -> Result<CubeState> {
    let mv: Move = token.parse()?;
    Ok(apply_move(state, mv))
}
