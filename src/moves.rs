//! Face-turn notation: the 18 moves of the 3x3 cube.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CubeError;
use crate::facelet::Face;

/// Direction and amount of a face turn, as seen looking at the face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Turn {
    /// 90 degrees clockwise, written as the bare face letter.
    Clockwise,
    /// 90 degrees counter-clockwise, written with a trailing `'`.
    CounterClockwise,
    /// 180 degrees, written with a trailing `2`.
    Double,
}

impl Turn {
    /// Number of clockwise quarter turns this turn amounts to.
    pub const fn quarter_turns(self) -> usize {
        match self {
            Turn::Clockwise => 1,
            Turn::Double => 2,
            Turn::CounterClockwise => 3,
        }
    }

    pub const fn inverse(self) -> Turn {
        match self {
            Turn::Clockwise => Turn::CounterClockwise,
            Turn::CounterClockwise => Turn::Clockwise,
            Turn::Double => Turn::Double,
        }
    }

    const fn suffix(self) -> &'static str {
        match self {
            Turn::Clockwise => "",
            Turn::CounterClockwise => "'",
            Turn::Double => "2",
        }
    }
}

/// A single face turn such as `R`, `U'` or `F2`.
///
/// Serializes as its notation token, so an [`Algorithm`](crate::Algorithm)
/// becomes a JSON array like `["R", "U'"]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Move {
    pub face: Face,
    pub turn: Turn,
}

/// Number of distinct moves.
pub const NUM_MOVES: usize = 18;

/// The full move alphabet, grouped by face in `U D R L F B` order.
pub const ALL_MOVES: [Move; NUM_MOVES] = {
    const FACES: [Face; 6] = [Face::Up, Face::Down, Face::Right, Face::Left, Face::Front, Face::Back];
    const TURNS: [Turn; 3] = [Turn::Clockwise, Turn::CounterClockwise, Turn::Double];

    let mut moves = [Move::new(Face::Up, Turn::Clockwise); NUM_MOVES];
    let mut i = 0;
    while i < NUM_MOVES {
        moves[i] = Move::new(FACES[i / 3], TURNS[i % 3]);
        i += 1;
    }
    moves
};

impl Move {
    pub const fn new(face: Face, turn: Turn) -> Self {
        Self { face, turn }
    }

    /// The move that undoes this one.
    pub const fn inverse(self) -> Move {
        Move::new(self.face, self.turn.inverse())
    }

    /// Whether this is a 90 degree turn (as opposed to a half turn).
    pub const fn is_quarter_turn(self) -> bool {
        !matches!(self.turn, Turn::Double)
    }
}

/// Parses a single move token, returning `None` for anything outside the
/// 18-symbol alphabet.
///
/// Surrounding whitespace is ignored; the token itself is case sensitive.
pub fn parse_move(text: &str) -> Option<Move> {
    let mut chars = text.trim().chars();
    let face = Face::from_letter(chars.next()?)?;
    let turn = match (chars.next(), chars.next()) {
        (None, _) => Turn::Clockwise,
        (Some('\''), None) => Turn::CounterClockwise,
        (Some('2'), None) => Turn::Double,
        _ => return None,
    };
    Some(Move::new(face, turn))
}

impl FromStr for Move {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_move(s).ok_or_else(|| CubeError::UnsupportedMove(s.to_owned()))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.face.letter(), self.turn.suffix())
    }
}

impl From<Move> for String {
    fn from(mv: Move) -> Self {
        mv.to_string()
    }
}

impl TryFrom<String> for Move {
    type Error = CubeError;

    fn try_from(token: String) -> Result<Self, Self::Error> {
        token.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_is_complete_and_distinct() {
        let tokens: Vec<String> = ALL_MOVES.iter().map(Move::to_string).collect();
        assert_eq!(
            tokens.join(" "),
            "U U' U2 D D' D2 R R' R2 L L' L2 F F' F2 B B' B2"
        );
    }

    #[test]
    fn test_every_token_parses_back() {
        for mv in ALL_MOVES {
            assert_eq!(parse_move(&mv.to_string()), Some(mv));
            assert_eq!(mv.to_string().parse::<Move>().ok(), Some(mv));
        }
    }

    #[test]
    fn test_rejects_unknown_tokens() {
        for token in ["", "Q", "r", "R3", "R'2", "R2'", "M", "x", "RR", "U''"] {
            assert_eq!(parse_move(token), None, "{token:?} should not parse");
        }
        let err = "Q".parse::<Move>().unwrap_err();
        assert!(matches!(err, CubeError::UnsupportedMove(ref token) if token == "Q"));
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(parse_move("  F' "), Some(Move::new(Face::Front, Turn::CounterClockwise)));
    }

    #[test]
    fn test_inverse() {
        let r = Move::new(Face::Right, Turn::Clockwise);
        assert_eq!(r.inverse().to_string(), "R'");
        assert_eq!(r.inverse().inverse(), r);
        let d2 = Move::new(Face::Down, Turn::Double);
        assert_eq!(d2.inverse(), d2);
        assert!(!d2.is_quarter_turn());
    }

    #[test]
    fn test_serializes_as_token() {
        let moves = vec![
            Move::new(Face::Right, Turn::Clockwise),
            Move::new(Face::Up, Turn::CounterClockwise),
            Move::new(Face::Front, Turn::Double),
        ];
        let json = serde_json::to_string(&moves).unwrap();
        assert_eq!(json, r#"["R","U'","F2"]"#);
        assert_eq!(serde_json::from_str::<Vec<Move>>(&json).unwrap(), moves);

        assert!(serde_json::from_str::<Move>(r#""Q""#).is_err());
        assert!(serde_json::from_str::<Move>(r#"{"face":"up","turn":"Clockwise"}"#).is_err());
    }
}
