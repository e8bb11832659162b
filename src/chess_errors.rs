//! Errors used throughout the crate.
//!
//! `ChessErrors` is the single error type returned by notation parsing and
//! board queries. Each variant carries the offending input so callers can
//! report precise diagnostics.
//!
//! Usage guidelines:
//! - Functions return `ChessResult<T>` for expected failure modes (bad
//!   notation, a piece handle the board never issued).
//! - Off-board coordinates produced while walking a ray are not errors; the
//!   walk filters them before they reach a caller.

use std::error::Error;
use std::fmt;

use crate::board::PieceId;

pub type ChessResult<T> = Result<T, ChessErrors>;

/// Unified error type for notation parsing and board queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// A square string did not have a recognised shape (for example the wrong
    /// length).
    ///
    /// Payload: the original string.
    InvalidAlgebraicString(String),

    /// A single character in a square string was invalid.
    ///
    /// Payload: the offending character (a file letter outside 'A'..'H' or a
    /// character that is not a digit).
    InvalidAlgebraicChar(char),

    /// A file or rank fell outside `1..=8`.
    ///
    /// Payload: (file, rank) one-based.
    InvalidFileOrRank((i8, i8)),

    /// A move query used a piece handle this board never issued.
    UnknownPiece(PieceId),
}

impl fmt::Display for ChessErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessErrors::InvalidAlgebraicString(s) => write!(f, "invalid square notation: {s:?}"),
            ChessErrors::InvalidAlgebraicChar(c) => {
                write!(f, "invalid character in square notation: {c:?}")
            }
            ChessErrors::InvalidFileOrRank((file, rank)) => {
                write!(f, "file/rank out of range 1..=8: ({file}, {rank})")
            }
            ChessErrors::UnknownPiece(id) => write!(f, "piece {id} is not on this board"),
        }
    }
}

impl Error for ChessErrors {}
