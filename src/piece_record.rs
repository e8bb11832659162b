use crate::{
    board_location::BoardLocation, piece_class::PieceClass, piece_team::PieceTeam,
    ray_walk::trace_rays,
};

/// Represents a chess piece with its class, location and team.
/// A piece never moves; the board only queries where it could go.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PieceRecord {
    /// The class (kind) of the piece.
    pub class: PieceClass,
    /// Piece location
    pub location: BoardLocation,
    /// Piece team
    pub team: PieceTeam,
}

impl PieceRecord {
    pub fn new(class: PieceClass, location: BoardLocation, team: PieceTeam) -> Self {
        PieceRecord {
            class,
            location,
            team,
        }
    }

    pub fn rook(location: BoardLocation) -> Self {
        Self::new(PieceClass::Rook, location, PieceTeam::default())
    }

    pub fn bishop(location: BoardLocation) -> Self {
        Self::new(PieceClass::Bishop, location, PieceTeam::default())
    }

    pub fn queen(location: BoardLocation) -> Self {
        Self::new(PieceClass::Queen, location, PieceTeam::default())
    }

    pub fn with_team(self, team: PieceTeam) -> Self {
        PieceRecord { team, ..self }
    }

    /// Maximal ray reach from this piece, ignoring every other piece.
    ///
    /// Ordered by the class's direction list, then by distance.
    pub fn candidate_locations(&self) -> Vec<BoardLocation> {
        trace_rays(self.location, self.class.directions())
    }

    /// `candidate_locations` in algebraic notation.
    pub fn valid_moves(&self) -> Vec<String> {
        self.candidate_locations()
            .iter()
            .map(|l| l.to_string())
            .collect()
    }
}
