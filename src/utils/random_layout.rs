//! Seeded random board layouts for property tests and benchmarks.
//!
//! Layouts never put two pieces on the same square, so results depend only on
//! the seed and the requested piece count.

use rand::prelude::IndexedRandom;
use rand::seq::SliceRandom;
use rand::{rngs::StdRng, SeedableRng};

use crate::board::{Board, BoardConfig, PieceId};
use crate::board_location::BoardLocation;
use crate::chess_errors::ChessResult;
use crate::piece_class::PieceClass;
use crate::piece_record::PieceRecord;
use crate::piece_team::PieceTeam;

const CLASSES: [PieceClass; 3] = [PieceClass::Rook, PieceClass::Bishop, PieceClass::Queen];
const TEAMS: [PieceTeam; 2] = [PieceTeam::Light, PieceTeam::Dark];

#[derive(Debug, Clone, Copy)]
pub struct LayoutConfig {
    pub pieces: usize,
    pub seed: u64,
    pub board: BoardConfig,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            pieces: 6,
            seed: 0,
            board: BoardConfig::default(),
        }
    }
}

/// Every on-board square, a1 first, file-major.
pub fn all_squares() -> ChessResult<Vec<BoardLocation>> {
    let mut squares = Vec::with_capacity(64);
    for file in 1..=8 {
        for rank in 1..=8 {
            squares.push(BoardLocation::from_file_rank(file, rank)?);
        }
    }
    Ok(squares)
}

/// Build a board with `config.pieces` pieces (capped at 64) on distinct
/// random squares. Returns the board and the handles in placement order.
pub fn random_board(config: LayoutConfig) -> ChessResult<(Board, Vec<PieceId>)> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut squares = all_squares()?;
    squares.shuffle(&mut rng);

    let mut board = Board::with_config(config.board);
    let mut ids = Vec::with_capacity(config.pieces.min(64));
    for &location in squares.iter().take(config.pieces) {
        let class = *CLASSES.choose(&mut rng).unwrap_or(&PieceClass::Rook);
        let team = *TEAMS.choose(&mut rng).unwrap_or(&PieceTeam::Dark);
        ids.push(board.add(PieceRecord::new(class, location, team)));
    }
    Ok((board, ids))
}
