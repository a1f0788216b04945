//! Move sequences: parsing, inversion, application and stepwise playback.

use std::fmt;
use std::str::FromStr;

use log::{trace, warn};
use serde::{Deserialize, Serialize};

use crate::cube::CubeState;
use crate::engine::apply_move;
use crate::error::{CubeError, Result};
use crate::moves::{parse_move, Move};

/// An ordered sequence of moves. The empty sequence is a valid no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Algorithm {
    moves: Vec<Move>,
}

impl Algorithm {
    pub const fn new() -> Self {
        Self { moves: Vec::new() }
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    /// The sequence that undoes this one: every move inverted, in reverse
    /// order.
    pub fn inverse(&self) -> Algorithm {
        self.moves.iter().rev().map(|mv| mv.inverse()).collect()
    }
}

impl From<Vec<Move>> for Algorithm {
    fn from(moves: Vec<Move>) -> Self {
        Self { moves }
    }
}

impl FromIterator<Move> for Algorithm {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        Self {
            moves: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Algorithm {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, mv) in self.moves.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{mv}")?;
        }
        Ok(())
    }
}

/// Strict parsing: the first token outside the move alphabet is an error.
impl FromStr for Algorithm {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_whitespace().map(str::parse::<Move>).collect()
    }
}

/// A token that [`parse_algorithm`] could not read as a move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedToken {
    /// Zero-based position among the whitespace-separated tokens.
    pub index: usize,
    pub token: String,
}

/// Result of lenient parsing: the moves that parsed plus a report of the
/// tokens that were dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedAlgorithm {
    pub algorithm: Algorithm,
    pub skipped: Vec<SkippedToken>,
}

impl ParsedAlgorithm {
    /// Whether every token parsed.
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Splits `text` on whitespace and parses each token, keeping the moves that
/// parse and reporting the ones that don't.
///
/// Use `text.parse::<Algorithm>()` instead to reject the whole input on the
/// first bad token.
pub fn parse_algorithm(text: &str) -> ParsedAlgorithm {
    let mut parsed = ParsedAlgorithm::default();
    for (index, token) in text.split_whitespace().enumerate() {
        match parse_move(token) {
            Some(mv) => parsed.algorithm.push(mv),
            None => {
                warn!("skipping unrecognized move token {token:?} at position {index}");
                parsed.skipped.push(SkippedToken {
                    index,
                    token: token.to_owned(),
                });
            }
        }
    }
    parsed
}

/// Applies each move left to right, starting from `state`.
pub fn apply_algorithm(state: &CubeState, algorithm: &Algorithm) -> CubeState {
    trace!("applying {} moves: {algorithm}", algorithm.len());
    algorithm
        .iter()
        .fold(*state, |current, &mv| apply_move(&current, mv))
}

/// Stepwise playback of an algorithm over a starting state.
///
/// Every intermediate state is computed up front, so stepping backward is a
/// lookup rather than a replay. The position is the number of moves applied
/// so far and always stays within `0..=len`.
#[derive(Debug, Clone)]
pub struct Playback {
    algorithm: Algorithm,
    /// `states[i]` is the state after the first `i` moves.
    states: Vec<CubeState>,
    position: usize,
}

impl Playback {
    pub fn new(start: CubeState, algorithm: Algorithm) -> Self {
        let mut states = Vec::with_capacity(algorithm.len() + 1);
        states.push(start);
        let mut current = start;
        for &mv in &algorithm {
            current = apply_move(&current, mv);
            states.push(current);
        }

        Self {
            algorithm,
            states,
            position: 0,
        }
    }

    pub fn algorithm(&self) -> &Algorithm {
        &self.algorithm
    }

    /// Number of moves in the algorithm.
    pub fn len(&self) -> usize {
        self.algorithm.len()
    }

    pub fn is_empty(&self) -> bool {
        self.algorithm.is_empty()
    }

    /// Number of moves applied so far.
    pub fn position(&self) -> usize {
        self.position
    }

    /// State after [`Playback::position`] moves.
    pub fn current(&self) -> &CubeState {
        &self.states[self.position]
    }

    /// State after every move has been applied.
    pub fn final_state(&self) -> &CubeState {
        &self.states[self.len()]
    }

    /// The move that [`Playback::step_forward`] would apply next.
    pub fn next_move(&self) -> Option<Move> {
        self.algorithm.moves().get(self.position).copied()
    }

    pub fn is_finished(&self) -> bool {
        self.position == self.len()
    }

    /// Applies the next move and returns it, or `None` at the end.
    pub fn step_forward(&mut self) -> Option<Move> {
        let mv = self.next_move()?;
        self.position += 1;
        Some(mv)
    }

    /// Takes back the last applied move and returns it, or `None` at the
    /// start.
    pub fn step_backward(&mut self) -> Option<Move> {
        self.position = self.position.checked_sub(1)?;
        Some(self.algorithm.moves()[self.position])
    }

    /// Jumps to the state after `position` moves.
    pub fn seek(&mut self, position: usize) -> Result<&CubeState> {
        if position > self.len() {
            return Err(CubeError::StepOutOfRange {
                requested: position,
                len: self.len(),
            });
        }
        self.position = position;
        Ok(self.current())
    }

    /// Returns to the starting state.
    pub fn reset(&mut self) {
        self.position = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube::solved_cube;
    use crate::facelet::Face;
    use crate::moves::Turn;

    fn alg(text: &str) -> Algorithm {
        text.parse().unwrap()
    }

    #[test]
    fn test_parse_algorithm() {
        let parsed = parse_algorithm("R U R' U'");
        assert!(parsed.is_clean());
        assert_eq!(
            parsed.algorithm.moves(),
            &[
                Move::new(Face::Right, Turn::Clockwise),
                Move::new(Face::Up, Turn::Clockwise),
                Move::new(Face::Right, Turn::CounterClockwise),
                Move::new(Face::Up, Turn::CounterClockwise),
            ]
        );
    }

    #[test]
    fn test_parse_algorithm_reports_skipped_tokens() {
        let parsed = parse_algorithm("R Q U");
        assert_eq!(parsed.algorithm, alg("R U"));
        assert_eq!(
            parsed.skipped,
            vec![SkippedToken {
                index: 1,
                token: "Q".to_owned()
            }]
        );
    }

    #[test]
    fn test_parse_algorithm_tolerates_extra_whitespace() {
        let parsed = parse_algorithm("  F2\tB'\n  D ");
        assert!(parsed.is_clean());
        assert_eq!(parsed.algorithm.to_string(), "F2 B' D");
        assert!(parse_algorithm("").algorithm.is_empty());
    }

    #[test]
    fn test_strict_parse_rejects_bad_token() {
        let err = "R Q U".parse::<Algorithm>().unwrap_err();
        assert!(matches!(err, CubeError::UnsupportedMove(ref token) if token == "Q"));
    }

    #[test]
    fn test_serializes_as_token_list() {
        let moves = alg("R U' F2");
        let json = serde_json::to_string(&moves).unwrap();
        assert_eq!(json, r#"["R","U'","F2"]"#);
        assert_eq!(serde_json::from_str::<Algorithm>(&json).unwrap(), moves);
        assert!(serde_json::from_str::<Algorithm>(r#"["R","Q"]"#).is_err());
    }

    #[test]
    fn test_inverse() {
        assert_eq!(alg("R U2 F'").inverse(), alg("F U2 R'"));
        assert!(Algorithm::new().inverse().is_empty());
    }

    #[test]
    fn test_empty_algorithm_is_identity() {
        let start = apply_algorithm(&solved_cube(), &alg("L D2 B"));
        assert_eq!(apply_algorithm(&start, &Algorithm::new()), start);
    }

    #[test]
    fn test_algorithm_then_inverse_restores_state() {
        let moves = alg("R U R' U' F2 L' D B2 U L2 R' F D' B");
        let scrambled = apply_algorithm(&solved_cube(), &moves);
        assert!(!scrambled.is_solved());
        assert_eq!(apply_algorithm(&scrambled, &moves.inverse()), solved_cube());
    }

    #[test]
    fn test_r_u_has_order_105() {
        let r_u = alg("R U");
        let mut state = solved_cube();
        let mut repetitions = 0;
        loop {
            state = apply_algorithm(&state, &r_u);
            repetitions += 1;
            if state == solved_cube() {
                break;
            }
            assert!(repetitions < 1000, "R U never returned to solved");
        }
        assert_eq!(repetitions, 105);
    }

    #[test]
    fn test_playback_steps_match_apply() {
        let moves = alg("R U R' U'");
        let mut playback = Playback::new(solved_cube(), moves.clone());
        assert_eq!(playback.len(), 4);
        assert_eq!(playback.current(), &solved_cube());

        let mut expected = solved_cube();
        while let Some(mv) = playback.step_forward() {
            expected = apply_move(&expected, mv);
            assert_eq!(playback.current(), &expected);
        }
        assert!(playback.is_finished());
        assert_eq!(playback.current(), &apply_algorithm(&solved_cube(), &moves));
        assert_eq!(playback.final_state(), playback.current());
    }

    #[test]
    fn test_playback_step_backward() {
        let mut playback = Playback::new(solved_cube(), alg("F R"));
        assert_eq!(playback.step_backward(), None);
        assert_eq!(playback.position(), 0);

        playback.step_forward();
        let after_f = *playback.current();
        playback.step_forward();
        assert_eq!(playback.step_forward(), None);
        assert_eq!(playback.position(), 2);

        assert_eq!(playback.step_backward().map(|mv| mv.to_string()), Some("R".to_owned()));
        assert_eq!(playback.current(), &after_f);
        assert_eq!(playback.next_move().map(|mv| mv.to_string()), Some("R".to_owned()));
    }

    #[test]
    fn test_playback_seek() {
        let moves = alg("U D' F2");
        let mut playback = Playback::new(solved_cube(), moves);
        let state = *playback.seek(3).unwrap();
        assert!(playback.is_finished());
        assert_eq!(state, *playback.final_state());

        let err = playback.seek(4).unwrap_err();
        assert!(matches!(err, CubeError::StepOutOfRange { requested: 4, len: 3 }));
        assert_eq!(playback.position(), 3);

        playback.reset();
        assert_eq!(playback.current(), &solved_cube());
    }

    #[test]
    fn test_empty_playback() {
        let mut playback = Playback::new(solved_cube(), Algorithm::new());
        assert!(playback.is_empty());
        assert!(playback.is_finished());
        assert_eq!(playback.step_forward(), None);
        assert_eq!(playback.seek(0).unwrap(), &solved_cube());
    }
}
