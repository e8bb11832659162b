//! Blocking tests between an origin square and a candidate destination.
//!
//! Two tests are provided:
//!
//! - [`LineOfSight::InfiniteLine`] treats any other piece on the infinite line
//!   through origin and destination as blocking, including pieces beyond the
//!   destination or behind the origin. On a shared rank or file this means a
//!   single piece anywhere on that rank or file blocks every candidate along it.
//!   This is the default and matches the established kata results.
//! - [`LineOfSight::Segment`] only counts pieces strictly between origin and
//!   destination.

use crate::board_location::BoardLocation;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineOfSight {
    #[default]
    InfiniteLine,
    Segment,
}

impl LineOfSight {
    pub fn name(self) -> &'static str {
        match self {
            LineOfSight::InfiniteLine => "infinite-line",
            LineOfSight::Segment => "segment",
        }
    }

    /// True when any location in `others` blocks the path `origin -> destination`.
    ///
    /// Locations equal to `origin` are ignored, so the moving piece may be
    /// passed in along with everything else.
    pub fn is_blocked<I>(self, origin: BoardLocation, destination: BoardLocation, others: I) -> bool
    where
        I: IntoIterator<Item = BoardLocation>,
    {
        others
            .into_iter()
            .filter(|other| *other != origin)
            .any(|other| match self {
                LineOfSight::InfiniteLine => on_infinite_line(origin, destination, other),
                LineOfSight::Segment => strictly_between(origin, destination, other),
            })
    }
}

fn deltas(from: BoardLocation, to: BoardLocation) -> (i32, i32) {
    (
        (to.file() - from.file()) as i32,
        (to.rank() - from.rank()) as i32,
    )
}

fn on_infinite_line(origin: BoardLocation, destination: BoardLocation, other: BoardLocation) -> bool {
    let (dx, dy) = deltas(origin, destination);
    if dy == 0 && other.rank() == origin.rank() {
        return true;
    }
    if dx == 0 && other.file() == origin.file() {
        return true;
    }
    if dx == 0 || dy == 0 {
        return false;
    }
    // rank = m * file + c, compared without division.
    let (px, py) = deltas(origin, other);
    py * dx == px * dy
}

fn strictly_between(origin: BoardLocation, destination: BoardLocation, other: BoardLocation) -> bool {
    let (dx, dy) = deltas(origin, destination);
    let (px, py) = deltas(origin, other);
    if px * dy != py * dx {
        return false;
    }
    let along = px * dx + py * dy;
    let length_sq = dx * dx + dy * dy;
    0 < along && along < length_sq
}
