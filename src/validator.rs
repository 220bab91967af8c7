use crate::{
    adjacent_coordinates, batch_continuous_increasing_range,
    find_component_minimums_and_maximums, BoardState, Coordinate, Direction, MovePlacement,
    SquareOccupied, CENTER,
};
use derive_more::Display;
use itertools::Itertools;
use std::collections::BTreeSet;

/// Describes the reason why a [placement](MovePlacement) is not a legal move.
/// Detected before any board is changed.
///
/// # See Also
///
/// * [validate_placement]
/// * [build_words](crate::build_words)
#[derive(Debug, Clone, Eq, PartialEq, Hash, Display)]
pub enum IllegalMove {
    /// Attempting to place a [tile](crate::PlacedTile) on an occupied square.
    #[display("square {coordinate} is already occupied")]
    SquareOccupied {
        /// The first occupied square found.
        coordinate: Coordinate,
    },
    /// Attempting to place [tiles](crate::PlacedTile) that share neither a row nor a column.
    #[display("tiles must be placed in one row or one column")]
    NotCollinear,
    /// Attempting to open the game with fewer than `2` [tiles](crate::PlacedTile).
    #[display("the opening move must place at least 2 tiles, not {placed}")]
    OpeningTooShort {
        /// The number of [tiles](crate::PlacedTile) placed.
        placed: usize,
    },
    /// Attempting to open the game without covering the [center](CENTER).
    #[display("the opening move must cover the center square")]
    OpeningMissesCenter,
    /// Attempting to place [tiles](crate::PlacedTile) that touch no existing tile.
    #[display("the placement must touch an existing tile")]
    NotConnected,
    /// Attempting to place [tiles](crate::PlacedTile) with empty squares between them.
    #[display("the placement leaves holes: {holes:?}")]
    Holes {
        /// An ordered set of the first and last [coordinates](Coordinate) of each
        /// run of empty squares inside the placement.
        holes: BTreeSet<(Coordinate, Coordinate)>,
    },
    /// Attempting to place a single [tile](crate::PlacedTile) with no neighbour in either
    /// [direction](Direction).
    #[display("cannot determine the direction of the placement")]
    DirectionUndetermined,
    /// Attempting to form a main word of a single letter.
    #[display("the word through {coordinate} is shorter than 2 letters")]
    WordTooShort {
        /// The placed square the word was read through.
        coordinate: Coordinate,
    },
}

impl std::error::Error for IllegalMove {}

impl From<SquareOccupied> for IllegalMove {
    fn from(SquareOccupied { coordinate }: SquareOccupied) -> Self {
        IllegalMove::SquareOccupied { coordinate }
    }
}

/// Checks that `placement` is a legal move on `board`. Checks are made in order and the
/// first failure is returned:
///
/// 1. Every target square is empty.
/// 2. Every placed [coordinate](Coordinate) shares a row or a column. A single
/// [tile](crate::PlacedTile) always passes.
/// 3. On an empty board, at least `2` [tiles](crate::PlacedTile) are placed and one covers
/// the [center](CENTER). Otherwise some placed square is adjacent to an occupied square.
/// 4. Every square between the first and last placed [coordinates](Coordinate) is
/// either placed or occupied.
///
/// # Arguments
///
/// * `board`: The board before the move.
/// * `placement`: The [tiles](crate::PlacedTile) to place.
///
/// # Errors
///
/// * [IllegalMove::SquareOccupied]
/// * [IllegalMove::NotCollinear]
/// * [IllegalMove::OpeningTooShort]
/// * [IllegalMove::OpeningMissesCenter]
/// * [IllegalMove::NotConnected]
/// * [IllegalMove::Holes]
///
/// # See Also
///
/// * [build_words](crate::build_words)
/// * [score](crate::score)
pub fn validate_placement(board: &BoardState, placement: &MovePlacement) -> Result<(), IllegalMove> {
    if let Some(coordinate) = placement
        .coordinates()
        .find(|&coordinate| board.has_tile(coordinate))
    {
        return Err(IllegalMove::SquareOccupied { coordinate });
    }

    let direction = if placement.len() == 1 {
        None
    } else if placement.same_row() {
        Some(Direction::Horizontal)
    } else if placement.same_col() {
        Some(Direction::Vertical)
    } else {
        return Err(IllegalMove::NotCollinear);
    };

    if board.is_empty() {
        if placement.len() < 2 {
            return Err(IllegalMove::OpeningTooShort {
                placed: placement.len(),
            });
        }
        if placement.get(CENTER).is_none() {
            return Err(IllegalMove::OpeningMissesCenter);
        }
    } else if !placement
        .coordinates()
        .flat_map(adjacent_coordinates)
        .any(|coordinate| board.has_tile(coordinate))
    {
        return Err(IllegalMove::NotConnected);
    }

    let Some(direction) = direction else {
        return Ok(());
    };
    let holes = find_holes(board, placement, direction);
    if !holes.is_empty() {
        return Err(IllegalMove::Holes { holes });
    }

    Ok(())
}

/// Finds the runs of squares between the first and last placed [coordinates](Coordinate)
/// that are neither placed nor occupied.
fn find_holes(
    board: &BoardState,
    placement: &MovePlacement,
    direction: Direction,
) -> BTreeSet<(Coordinate, Coordinate)> {
    let Some((min_row, min_col, max_row, max_col)) =
        find_component_minimums_and_maximums(placement.coordinates())
    else {
        return BTreeSet::new();
    };
    let line = direction.line_of(placement.first_coordinate());
    let (first, last) = match direction {
        Direction::Horizontal => (min_col, max_col),
        Direction::Vertical => (min_row, max_row),
    };

    (first..=last)
        .filter(|&index| {
            direction
                .coordinate_on_line(line, index)
                .is_some_and(|coordinate| {
                    !board.has_tile(coordinate) && placement.get(coordinate).is_none()
                })
        })
        .peekable()
        .batching(batch_continuous_increasing_range)
        .filter_map(|(first, last)| {
            Some((
                direction.coordinate_on_line(line, first)?,
                direction.coordinate_on_line(line, last)?,
            ))
        })
        .collect()
}
