use crate::{BoardState, Coordinate, Direction, IllegalMove, MovePlacement, Words};
use itertools::Itertools;
use std::fmt;

/// A contiguous run of occupied squares read along one [direction](Direction) together
/// with the text it spells.
///
/// # See Also
///
/// * [build_words]
/// * [ScoringResult](crate::ScoringResult)
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Word {
    text: String,
    coordinates: Vec<Coordinate>,
}

impl Word {
    /// The spelled letters.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The squares of the word in reading order.
    #[inline]
    pub fn coordinates(&self) -> &[Coordinate] {
        &self.coordinates
    }

    /// The number of letters.
    #[inline]
    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    /// Whether the word has no letters.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.coordinates.first() {
            Some(first) => write!(f, "{} at {first}", self.text),
            None => write!(f, "{}", self.text),
        }
    }
}

/// Derives every [word](Word) formed by merging `placement` into `board`.
///
/// The main word is read through the first placed square along the direction of the
/// placement. A single [tile](crate::PlacedTile) takes the direction of its neighbours,
/// horizontal first. Each placed square also contributes the perpendicular word through it
/// when that word is at least `2` letters long.
///
/// # Arguments
///
/// * `board`: The board before the move.
/// * `placement`: The [tiles](crate::PlacedTile) to place.
///
/// # Errors
///
/// * [IllegalMove::SquareOccupied] When some placed square is occupied on `board`.
/// * [IllegalMove::NotCollinear] When the placed squares share neither a row nor a column.
/// * [IllegalMove::DirectionUndetermined] When a single placed [tile](crate::PlacedTile)
/// has no neighbour.
/// * [IllegalMove::WordTooShort] When the main word has a single letter.
///
/// # Returns
///
/// The deduplicated [words](Word), main word first.
pub fn build_words(board: &BoardState, placement: &MovePlacement) -> Result<Words, IllegalMove> {
    let after = board.with_placed(placement.placements())?;
    build_words_on(&after, placement)
}

/// Same as [build_words] when the board after the move has already been merged.
pub(crate) fn build_words_on(
    after: &BoardState,
    placement: &MovePlacement,
) -> Result<Words, IllegalMove> {
    let direction = main_direction(after, placement)?;
    let start = placement.first_coordinate();

    let main = read_word(after, start, direction);
    if main.len() < 2 {
        return Err(IllegalMove::WordTooShort { coordinate: start });
    }

    let cross = placement
        .coordinates()
        .map(|coordinate| read_word(after, coordinate, direction.perpendicular()))
        .filter(|word| word.len() >= 2);

    Ok(std::iter::once(main).chain(cross).unique().collect())
}

fn main_direction(after: &BoardState, placement: &MovePlacement) -> Result<Direction, IllegalMove> {
    if placement.len() > 1 {
        return if placement.same_row() {
            Ok(Direction::Horizontal)
        } else if placement.same_col() {
            Ok(Direction::Vertical)
        } else {
            Err(IllegalMove::NotCollinear)
        };
    }

    let coordinate = placement.first_coordinate();
    Direction::directions()
        .into_iter()
        .find(|&direction| {
            after.has_tile_at_offset(coordinate, direction, -1)
                || after.has_tile_at_offset(coordinate, direction, 1)
        })
        .ok_or(IllegalMove::DirectionUndetermined)
}

/// Reads the run of occupied squares through `through` along `direction`.
fn read_word(after: &BoardState, through: Coordinate, direction: Direction) -> Word {
    let mut start = through;
    while let Some(previous) = start
        .offset(direction, -1)
        .filter(|&previous| after.has_tile(previous))
    {
        start = previous;
    }

    let mut text = String::new();
    let mut coordinates = Vec::new();
    let mut next = Some(start);
    while let Some((coordinate, tile)) =
        next.and_then(|coordinate| Some((coordinate, after.tile_at(coordinate)?)))
    {
        text.push(tile.letter());
        coordinates.push(coordinate);
        next = coordinate.offset(direction, 1);
    }

    Word { text, coordinates }
}
