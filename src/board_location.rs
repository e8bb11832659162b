//! Board coordinates and their textual forms.
//!
//! A `BoardLocation` is a one-based (file, rank) pair. On-board values lie in
//! `1..=8` on both axes; `offset` may step outside that range while a ray is
//! being walked, and callers filter with `is_on_board` before exposing a
//! location.
//!
//! Two textual forms are accepted at input boundaries:
//! - algebraic, a file letter and a rank digit (`"C4"`, case-insensitive);
//! - numeric, two digits taken as file then rank (`"34"`).
//!
//! Output is always uppercase algebraic.

use std::fmt;
use std::str::FromStr;

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::move_directions::StepVector;

pub const BOARD_LOWER_BOUND: i8 = 1;
pub const BOARD_UPPER_BOUND: i8 = 8;

const FILE_LETTERS: [char; 8] = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H'];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardLocation {
    file: i8,
    rank: i8,
}

impl BoardLocation {
    /// Checked constructor from one-based file and rank.
    pub fn from_file_rank(file: i8, rank: i8) -> ChessResult<Self> {
        let location = BoardLocation { file, rank };
        if location.is_on_board() {
            Ok(location)
        } else {
            Err(ChessErrors::InvalidFileOrRank((file, rank)))
        }
    }

    /// Parse either the algebraic (`"C4"`) or the numeric (`"34"`) form.
    pub fn parse(text: &str) -> ChessResult<Self> {
        let (first, second) = split_pair(text)?;
        if first.is_ascii_digit() {
            Self::from_digits(first, second)
        } else {
            Self::from_digits(file_letter_to_digit(first)?, second)
        }
    }

    /// Parse the algebraic form only.
    pub fn from_algebraic(text: &str) -> ChessResult<Self> {
        let (first, second) = split_pair(text)?;
        Self::from_digits(file_letter_to_digit(first)?, second)
    }

    /// Parse the numeric form only.
    pub fn from_numeric(text: &str) -> ChessResult<Self> {
        let (first, second) = split_pair(text)?;
        Self::from_digits(first, second)
    }

    fn from_digits(file: char, rank: char) -> ChessResult<Self> {
        let file = digit_value(file)?;
        let rank = digit_value(rank)?;
        Self::from_file_rank(file, rank)
    }

    #[inline]
    pub fn file(&self) -> i8 {
        self.file
    }

    #[inline]
    pub fn rank(&self) -> i8 {
        self.rank
    }

    #[inline]
    pub fn is_on_board(&self) -> bool {
        (BOARD_LOWER_BOUND..=BOARD_UPPER_BOUND).contains(&self.file)
            && (BOARD_LOWER_BOUND..=BOARD_UPPER_BOUND).contains(&self.rank)
    }

    /// The location displaced by `step`. No bounds check.
    #[inline]
    pub fn offset(&self, step: StepVector) -> Self {
        BoardLocation {
            file: self.file + step.d_file,
            rank: self.rank + step.d_rank,
        }
    }

    /// Render as uppercase algebraic notation, e.g. `"C4"`.
    pub fn to_algebraic(&self) -> ChessResult<String> {
        if !self.is_on_board() {
            return Err(ChessErrors::InvalidFileOrRank((self.file, self.rank)));
        }
        let letter = FILE_LETTERS[(self.file - 1) as usize];
        Ok(format!("{letter}{}", self.rank))
    }

    /// Render as two digits, file then rank, e.g. `"34"`.
    pub fn to_numeric(&self) -> ChessResult<String> {
        if !self.is_on_board() {
            return Err(ChessErrors::InvalidFileOrRank((self.file, self.rank)));
        }
        Ok(format!("{}{}", self.file, self.rank))
    }
}

fn split_pair(text: &str) -> ChessResult<(char, char)> {
    let mut chars = text.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(first), Some(second), None) => Ok((first, second)),
        _ => Err(ChessErrors::InvalidAlgebraicString(text.to_owned())),
    }
}

fn file_letter_to_digit(letter: char) -> ChessResult<char> {
    let upper = letter.to_ascii_uppercase();
    FILE_LETTERS
        .iter()
        .position(|&l| l == upper)
        .map(|idx| char::from(b'1' + idx as u8))
        .ok_or(ChessErrors::InvalidAlgebraicChar(letter))
}

fn digit_value(c: char) -> ChessResult<i8> {
    c.to_digit(10)
        .map(|d| d as i8)
        .ok_or(ChessErrors::InvalidAlgebraicChar(c))
}

impl FromStr for BoardLocation {
    type Err = ChessErrors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BoardLocation::parse(s)
    }
}

impl fmt::Display for BoardLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_algebraic() {
            Ok(s) => f.write_str(&s),
            Err(_) => write!(f, "({}, {})", self.file, self.rank),
        }
    }
}
