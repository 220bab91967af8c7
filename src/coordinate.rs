use crate::BOARD_SIZE;
use derive_more::Display;
use std::cmp;
use std::fmt;
use std::iter::Peekable;
use std::str::FromStr;

/// A square on the board identified by a zero based row and column, both
/// in the range `0..`[BOARD_SIZE].
///
/// The textual form is a row letter `A`..`O` followed by a one based column `1`..`15`,
/// e.g. `H8` for the [center](CENTER). Ordering is row major, which keeps
/// [placements](crate::Placements) sorted in reading order.
///
/// # See Also
///
/// * [Direction]
/// * [BoardState](crate::BoardState)
/// * [MovePlacement](crate::MovePlacement)
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Coordinate {
    row: usize,
    col: usize,
}

/// The center square, `H8`. The opening move must cover it.
pub const CENTER: Coordinate = Coordinate {
    row: BOARD_SIZE / 2,
    col: BOARD_SIZE / 2,
};

/// Describes the reason why a [coordinate](Coordinate) could not be created.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Display)]
pub enum CoordinateError {
    /// Attempting to create a [coordinate](Coordinate) outside of the board.
    #[display("coordinate ({row}, {col}) is outside of the board")]
    OutOfBounds {
        /// The requested zero based row.
        row: usize,
        /// The requested zero based column.
        col: usize,
    },
    /// Attempting to parse an empty or whitespace only string.
    #[display("coordinate is blank")]
    Blank,
    /// Attempting to parse a string whose row letter is not in `A`..`O`.
    #[display("row must be A-O: {value}")]
    BadRow {
        /// The rejected input.
        value: String,
    },
    /// Attempting to parse a string whose column is not an integer in `1`..`15`.
    #[display("column must be 1-15: {value}")]
    BadColumn {
        /// The rejected input.
        value: String,
    },
}

impl std::error::Error for CoordinateError {}

impl Coordinate {
    /// # Errors
    ///
    /// * [CoordinateError::OutOfBounds] When either `row` or `col` is not less
    /// than [BOARD_SIZE].
    ///
    /// # Returns
    ///
    /// The [coordinate](Coordinate) at zero based `row` and `col`.
    pub fn new(row: usize, col: usize) -> Result<Coordinate, CoordinateError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(CoordinateError::OutOfBounds { row, col });
        }
        Ok(Coordinate { row, col })
    }

    /// Parses the textual form, a case insensitive row letter followed by a one based column.
    /// Surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// * [CoordinateError::Blank] When `value` is empty after trimming.
    /// * [CoordinateError::BadRow] When the first character is not a row letter.
    /// * [CoordinateError::BadColumn] When the rest is not a column in range.
    pub fn parse(value: &str) -> Result<Coordinate, CoordinateError> {
        let trimmed = value.trim();
        let Some(row_char) = trimmed.chars().next() else {
            return Err(CoordinateError::Blank);
        };

        let row_char = row_char.to_ascii_uppercase();
        let last_row = (b'A' + (BOARD_SIZE - 1) as u8) as char;
        if !('A'..=last_row).contains(&row_char) {
            return Err(CoordinateError::BadRow {
                value: value.to_owned(),
            });
        }

        let col = trimmed[row_char.len_utf8()..]
            .parse::<usize>()
            .ok()
            .filter(|col| (1..=BOARD_SIZE).contains(col))
            .ok_or_else(|| CoordinateError::BadColumn {
                value: value.to_owned(),
            })?;

        Coordinate::new((row_char as u8 - b'A') as usize, col - 1)
    }

    /// The zero based row.
    #[inline]
    pub fn row(&self) -> usize {
        self.row
    }

    /// The zero based column.
    #[inline]
    pub fn col(&self) -> usize {
        self.col
    }

    /// Moves `steps` squares along `direction`, backwards when `steps` is negative.
    ///
    /// # Returns
    ///
    /// The [coordinate](Coordinate) reached or [None] if it would leave the board.
    pub fn offset(&self, direction: Direction, steps: isize) -> Option<Coordinate> {
        let (row_delta, col_delta) = direction.deltas();
        let row = self.row.checked_add_signed(row_delta * steps)?;
        let col = self.col.checked_add_signed(col_delta * steps)?;
        Coordinate::new(row, col).ok()
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'A' + self.row as u8) as char, self.col + 1)
    }
}

impl FromStr for Coordinate {
    type Err = CoordinateError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Coordinate::parse(value)
    }
}

/// The axis along which a word is read.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Direction {
    /// Left to right along a row.
    Horizontal,
    /// Top to bottom along a column.
    Vertical,
}

impl Direction {
    /// # Returns
    ///
    /// Both directions, horizontal first.
    #[inline]
    pub fn directions() -> [Direction; 2] {
        [Direction::Horizontal, Direction::Vertical]
    }

    /// # Returns
    ///
    /// The row and column change of one step forward.
    #[inline]
    pub fn deltas(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
        }
    }

    /// # Returns
    ///
    /// The other [direction](Direction).
    #[inline]
    pub fn perpendicular(self) -> Direction {
        match self {
            Direction::Horizontal => Direction::Vertical,
            Direction::Vertical => Direction::Horizontal,
        }
    }

    /// # Returns
    ///
    /// The index of the line (row for horizontal, column for vertical) that
    /// contains `coordinate`.
    #[inline]
    pub fn line_of(self, coordinate: Coordinate) -> usize {
        match self {
            Direction::Horizontal => coordinate.row,
            Direction::Vertical => coordinate.col,
        }
    }

    /// # Returns
    ///
    /// The [coordinate](Coordinate) at position `index` of line `line`, or [None]
    /// when either is off the board.
    #[inline]
    pub fn coordinate_on_line(self, line: usize, index: usize) -> Option<Coordinate> {
        match self {
            Direction::Horizontal => Coordinate::new(line, index).ok(),
            Direction::Vertical => Coordinate::new(index, line).ok(),
        }
    }
}

/// Finds the minimum and maximum components from [coordinates](Coordinate) for each component.
/// If `coordinates` is empty, [None] is returned.
///
/// # Arguments
///
/// * `coordinates`: An [iterator](Iterator) of [coordinates](Coordinate).
///
/// # See Also
///
/// * [validate_placement](crate::validate_placement)
///
/// # Returns
///
/// A tuple with `4` different bounds in the following order:
///
/// * The minimum row
/// * The minimum column
/// * The maximum row
/// * The maximum column
pub fn find_component_minimums_and_maximums(
    mut coordinates: impl Iterator<Item = Coordinate>,
) -> Option<(usize, usize, usize, usize)> {
    let first = coordinates.next()?;

    let (mut min_row, mut min_col, mut max_row, mut max_col) =
        (first.row, first.col, first.row, first.col);

    for Coordinate { row, col } in coordinates {
        (min_row, min_col) = (cmp::min(min_row, row), cmp::min(min_col, col));
        (max_row, max_col) = (cmp::max(max_row, row), cmp::max(max_col, col));
    }

    Some((min_row, min_col, max_row, max_col))
}

/// Finds the adjacent [coordinates](Coordinate) that are on the board, where adjacent
/// is 4 directional and not diagonal.
///
/// # See Also
///
/// * [validate_placement](crate::validate_placement)
/// * [AiMoveGenerator](crate::AiMoveGenerator)
///
/// # Returns
///
/// Up to 4 [coordinates](Coordinate) in natural lexicographic order.
pub fn adjacent_coordinates(coordinate: Coordinate) -> impl Iterator<Item = Coordinate> {
    [
        coordinate.offset(Direction::Vertical, -1),
        coordinate.offset(Direction::Horizontal, -1),
        coordinate.offset(Direction::Horizontal, 1),
        coordinate.offset(Direction::Vertical, 1),
    ]
    .into_iter()
    .flatten()
}

/// An ordered tuple where the first item is next value from `peekable` and the second item is
/// the last value in a continuous, increasing range from the first to the last value.
/// It is possible for the first and last values to be the same when the next value after first
/// is not continuous or increasing. If the `peekable` iteration is finished before the first value,
/// returns [None]. Otherwise, returns [Some].
///
/// # See Also
///
/// * [Itertools::batching](itertools::Itertools::batching)
/// * [validate_placement](crate::validate_placement)
///
/// # Returns
///
/// An tuple containing the next range from `peekable`.
pub fn batch_continuous_increasing_range<I>(peekable: &mut Peekable<I>) -> Option<(usize, usize)>
where
    I: Iterator<Item = usize>,
{
    let first = peekable.next()?;

    let mut last = first;
    while let Some(next) = peekable.next_if_eq(&(last + 1)) {
        last = next;
    }
    Some((first, last))
}
