//! Rubik's Cube kinematics library
//!
//! Models the sticker state of a 3x3 cube, applies the 18 face turns to it,
//! plays back move sequences step by step, and generates scrambles. Every
//! operation is a pure function over plain values: applying a move returns a
//! new state and never touches the old one.

pub mod algorithm;
pub mod cube;
pub mod engine;
pub mod error;
pub mod facelet;
pub mod moves;
pub mod persistence;
pub mod scramble;
pub mod timing;

pub use algorithm::{apply_algorithm, parse_algorithm, Algorithm, ParsedAlgorithm, Playback};
pub use cube::{is_solved, solved_cube, CubeState};
pub use engine::{apply_move, apply_move_token};
pub use error::{CubeError, Result};
pub use facelet::{Color, Face, FaceletGrid};
pub use moves::{parse_move, Move, Turn};
pub use scramble::{generate_scramble, generate_seeded, ScrambleParams};
pub use timing::format_time;
