use crate::move_directions::{
    StepVector, BISHOP_DIRECTIONS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS,
};

/// Represents the kind of a sliding piece.
/// Each kind is fully described by the step vectors it slides along.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PieceClass {
    /// Slides along files and ranks.
    Rook,
    /// Slides along diagonals.
    Bishop,
    /// Slides along files, ranks and diagonals.
    Queen,
}

impl PieceClass {
    /// Step vectors walked by move generation, in output order.
    #[inline]
    pub fn directions(self) -> &'static [StepVector] {
        match self {
            PieceClass::Rook => &ROOK_DIRECTIONS,
            PieceClass::Bishop => &BISHOP_DIRECTIONS,
            PieceClass::Queen => &QUEEN_DIRECTIONS,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PieceClass::Rook => "rook",
            PieceClass::Bishop => "bishop",
            PieceClass::Queen => "queen",
        }
    }
}
