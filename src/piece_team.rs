/// Represents the team (color) of a chess piece.
/// Informational only; it does not take part in blocking decisions.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum PieceTeam {
    /// The dark (black) side.
    #[default]
    Dark,
    /// The light (white) side.
    Light,
}
