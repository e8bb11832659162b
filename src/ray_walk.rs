//! Bounds-limited ray walking shared by every piece kind.
//!
//! These rays ignore other pieces; blocking is applied by the board.

use crate::board_location::BoardLocation;
use crate::move_directions::StepVector;

/// Every on-board square reached by repeatedly stepping from `origin`,
/// nearest first. The origin itself is not included.
pub fn trace_ray(origin: BoardLocation, step: StepVector) -> Vec<BoardLocation> {
    let mut squares = Vec::new();
    let mut next = origin.offset(step);

    while next.is_on_board() {
        squares.push(next);
        next = next.offset(step);
    }

    squares
}

/// Concatenate the rays for `directions` in list order.
pub fn trace_rays(origin: BoardLocation, directions: &[StepVector]) -> Vec<BoardLocation> {
    let mut squares = Vec::with_capacity(27);
    for &step in directions {
        squares.extend(trace_ray(origin, step));
    }
    squares
}

#[cfg(test)]
mod tests {
    use super::{trace_ray, trace_rays};
    use crate::board_location::BoardLocation;
    use crate::move_directions::{BISHOP_DIRECTIONS, DIAGONAL_UP_RIGHT, LEFT, ROOK_DIRECTIONS};

    fn loc(s: &str) -> BoardLocation {
        BoardLocation::parse(s).expect("test square should parse")
    }

    #[test]
    fn ray_stops_at_board_edge() {
        let ray = trace_ray(loc("C4"), DIAGONAL_UP_RIGHT);
        let names: Vec<String> = ray.iter().map(|l| l.to_string()).collect();
        assert_eq!(names, ["D5", "E6", "F7", "G8"]);
    }

    #[test]
    fn ray_from_edge_square_is_empty() {
        assert!(trace_ray(loc("A5"), LEFT).is_empty());
    }

    #[test]
    fn rook_rays_from_d4_have_fourteen_squares() {
        assert_eq!(trace_rays(loc("D4"), &ROOK_DIRECTIONS).len(), 14);
    }

    #[test]
    fn bishop_rays_from_d4_have_thirteen_squares() {
        assert_eq!(trace_rays(loc("D4"), &BISHOP_DIRECTIONS).len(), 13);
    }

    #[test]
    fn every_ray_square_is_on_board() {
        for file in 1..=8 {
            for rank in 1..=8 {
                let origin = BoardLocation::from_file_rank(file, rank).expect("on board");
                for square in trace_rays(origin, &ROOK_DIRECTIONS)
                    .into_iter()
                    .chain(trace_rays(origin, &BISHOP_DIRECTIONS))
                {
                    assert!(square.is_on_board());
                    assert_ne!(square, origin);
                }
            }
        }
    }
}
