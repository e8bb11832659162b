//! Crate root module declarations for the chess kata.
//!
//! Sliding-piece move generation on an 8x8 board: notation parsing, per-kind
//! step vectors, bounds-limited ray walking, and the board's line-of-sight
//! filter that removes blocked destinations.

pub mod board;
pub mod board_location;
pub mod chess_errors;
pub mod line_of_sight;
pub mod move_directions;
pub mod piece_class;
pub mod piece_record;
pub mod piece_team;
pub mod ray_walk;

pub mod utils {
    pub mod random_layout;
}
