//! Board of placed pieces and blocking-aware move queries.
//!
//! `Board` keeps pieces in insertion order and answers "where can this piece
//! go" by taking the piece's raw ray reach and dropping every candidate the
//! configured [`LineOfSight`] test reports as blocked.
//!
//! Pieces are looked up by the `PieceId` returned from `add`, not by square,
//! so two pieces placed on the same square stay distinct (placing them is a
//! caller error that is not checked). Lookups scan a `Vec`; with at most a few
//! dozen pieces there is no square index.
//!
//! The board holds only owned `Copy` data and is `Send + Sync`. `add` takes
//! `&mut self`, so a host sharing a board across threads wraps it in a lock.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::board_location::BoardLocation;
use crate::chess_errors::{ChessErrors, ChessResult};
use crate::line_of_sight::LineOfSight;
use crate::piece_record::PieceRecord;

static NEXT_BOARD_SERIAL: AtomicU64 = AtomicU64::new(0);

/// Handle to a piece placed on a specific board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceId {
    board: u64,
    index: usize,
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.index)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoardConfig {
    pub line_of_sight: LineOfSight,
}

#[derive(Debug)]
pub struct Board {
    serial: u64,
    config: BoardConfig,
    pieces: Vec<PieceRecord>,
}

impl Default for Board {
    fn default() -> Self {
        Self::with_config(BoardConfig::default())
    }
}

impl Board {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: BoardConfig) -> Self {
        Board {
            serial: NEXT_BOARD_SERIAL.fetch_add(1, Ordering::Relaxed),
            config,
            pieces: Vec::new(),
        }
    }

    #[inline]
    pub fn config(&self) -> BoardConfig {
        self.config
    }

    /// Place a piece. The square is not checked for an existing occupant.
    pub fn add(&mut self, piece: PieceRecord) -> PieceId {
        self.pieces.push(piece);
        PieceId {
            board: self.serial,
            index: self.pieces.len() - 1,
        }
    }

    pub fn piece(&self, id: PieceId) -> ChessResult<&PieceRecord> {
        if id.board != self.serial {
            return Err(ChessErrors::UnknownPiece(id));
        }
        self.pieces.get(id.index).ok_or(ChessErrors::UnknownPiece(id))
    }

    /// Placed pieces in insertion order.
    pub fn pieces(&self) -> impl Iterator<Item = &PieceRecord> + '_ {
        self.pieces.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Unblocked destinations for the piece, in the piece's candidate order.
    pub fn get_valid_locations(&self, id: PieceId) -> ChessResult<Vec<BoardLocation>> {
        let piece = self.piece(id)?;
        Ok(piece
            .candidate_locations()
            .into_iter()
            .filter(|&destination| !self.is_blocked(piece.location, destination))
            .collect())
    }

    /// `get_valid_locations` in algebraic notation.
    pub fn get_valid_moves(&self, id: PieceId) -> ChessResult<Vec<String>> {
        Ok(self
            .get_valid_locations(id)?
            .iter()
            .map(|l| l.to_string())
            .collect())
    }

    /// Whether another piece obstructs `origin -> destination` under this
    /// board's line-of-sight rule. Pieces standing on `origin` are ignored.
    pub fn is_blocked(&self, origin: BoardLocation, destination: BoardLocation) -> bool {
        self.config.line_of_sight.is_blocked(
            origin,
            destination,
            self.pieces.iter().map(|p| p.location),
        )
    }

    /// One-line summary for diagnostics.
    pub fn report(&self) -> String {
        let placed: Vec<String> = self
            .pieces
            .iter()
            .map(|p| format!("{}@{}", p.class.name(), p.location))
            .collect();
        format!(
            "pieces={} line_of_sight={} placed=[{}]",
            self.pieces.len(),
            self.config.line_of_sight.name(),
            placed.join(",")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{Board, BoardConfig};
    use crate::board_location::BoardLocation;
    use crate::chess_errors::{ChessErrors, ChessResult};
    use crate::line_of_sight::LineOfSight;
    use crate::piece_record::PieceRecord;

    fn loc(s: &str) -> BoardLocation {
        BoardLocation::parse(s).expect("test square should parse")
    }

    #[test]
    fn lone_bishop_keeps_every_candidate() -> ChessResult<()> {
        let mut board = Board::new();
        let bishop = PieceRecord::bishop(loc("C4"));
        let id = board.add(bishop);
        assert_eq!(board.get_valid_moves(id)?, bishop.valid_moves());
        assert_eq!(board.piece(id)?.location.to_string(), "C4");
        Ok(())
    }

    #[test]
    fn rook_blocked_by_bishop_on_shared_rank() -> ChessResult<()> {
        let mut board = Board::new();
        let rook = board.add(PieceRecord::rook(loc("A1")));
        board.add(PieceRecord::bishop(loc("B1")));
        let moves = board.get_valid_moves(rook)?;
        assert!(!moves.contains(&"C1".to_owned()));
        // The whole rank is lost, the file is untouched.
        assert_eq!(moves, ["A2", "A3", "A4", "A5", "A6", "A7", "A8"]);
        Ok(())
    }

    #[test]
    fn segment_mode_keeps_squares_before_the_blocker() -> ChessResult<()> {
        let mut board = Board::with_config(BoardConfig {
            line_of_sight: LineOfSight::Segment,
        });
        let rook = board.add(PieceRecord::rook(loc("A1")));
        board.add(PieceRecord::bishop(loc("D1")));
        let moves = board.get_valid_moves(rook)?;
        assert!(moves.contains(&"B1".to_owned()));
        assert!(moves.contains(&"C1".to_owned()));
        assert!(moves.contains(&"D1".to_owned()));
        assert!(!moves.contains(&"E1".to_owned()));
        assert!(!moves.contains(&"H1".to_owned()));
        Ok(())
    }

    #[test]
    fn handle_from_another_board_is_rejected() {
        let mut first = Board::new();
        let mut second = Board::new();
        first.add(PieceRecord::rook(loc("A1")));
        let foreign = second.add(PieceRecord::rook(loc("H8")));
        assert_eq!(first.get_valid_moves(foreign), Err(ChessErrors::UnknownPiece(foreign)));
        assert!(first.piece(foreign).is_err());
    }

    #[test]
    fn duplicate_square_pieces_stay_distinct() -> ChessResult<()> {
        let mut board = Board::new();
        let a = board.add(PieceRecord::rook(loc("D4")));
        let b = board.add(PieceRecord::bishop(loc("D4")));
        assert_ne!(a, b);
        assert_eq!(board.len(), 2);
        // Neither blocks the other: both stand on the origin.
        assert_eq!(board.get_valid_moves(a)?.len(), 14);
        assert_eq!(board.get_valid_moves(b)?.len(), 13);
        Ok(())
    }

    #[test]
    fn queries_are_idempotent() -> ChessResult<()> {
        let mut board = Board::new();
        let queen = board.add(PieceRecord::queen(loc("D4")));
        board.add(PieceRecord::rook(loc("F6")));
        board.add(PieceRecord::bishop(loc("B4")));
        assert_eq!(board.get_valid_moves(queen)?, board.get_valid_moves(queen)?);
        Ok(())
    }

    #[test]
    fn report_lists_pieces_and_mode() {
        let mut board = Board::new();
        assert!(board.is_empty());
        board.add(PieceRecord::rook(loc("A1")));
        board.add(PieceRecord::bishop(loc("c4")));
        assert_eq!(
            board.report(),
            "pieces=2 line_of_sight=infinite-line placed=[rook@A1,bishop@C4]"
        );
    }
}
