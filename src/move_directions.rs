//! Step vectors for sliding pieces.
//!
//! Each piece kind is described by a list of step vectors; move generation
//! walks every vector outward from the piece until it leaves the board.

/// A single step as (file delta, rank delta).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StepVector {
    pub d_file: i8,
    pub d_rank: i8,
}

impl StepVector {
    #[inline]
    pub const fn new(d_file: i8, d_rank: i8) -> Self {
        Self { d_file, d_rank }
    }
}

pub const UP: StepVector = StepVector::new(0, 1);
pub const DOWN: StepVector = StepVector::new(0, -1);
pub const LEFT: StepVector = StepVector::new(-1, 0);
pub const RIGHT: StepVector = StepVector::new(1, 0);
pub const DIAGONAL_UP_RIGHT: StepVector = StepVector::new(1, 1);
pub const DIAGONAL_UP_LEFT: StepVector = StepVector::new(-1, 1);
pub const DIAGONAL_DOWN_RIGHT: StepVector = StepVector::new(1, -1);
pub const DIAGONAL_DOWN_LEFT: StepVector = StepVector::new(-1, -1);

pub const ROOK_DIRECTIONS: [StepVector; 4] = [RIGHT, UP, LEFT, DOWN];

pub const BISHOP_DIRECTIONS: [StepVector; 4] = [
    DIAGONAL_UP_RIGHT,
    DIAGONAL_DOWN_LEFT,
    DIAGONAL_UP_LEFT,
    DIAGONAL_DOWN_RIGHT,
];

pub const QUEEN_DIRECTIONS: [StepVector; 8] = generate_queen_directions();

const fn generate_queen_directions() -> [StepVector; 8] {
    let mut table = [UP; 8];
    let mut i = 0usize;

    while i < 4 {
        table[i] = ROOK_DIRECTIONS[i];
        table[i + 4] = BISHOP_DIRECTIONS[i];
        i += 1;
    }

    table
}
