use crate::word::build_words_on;
use crate::{Board, BoardState, IllegalMove, MovePlacement, Word, Words, BINGO_BONUS, RACK_CAPACITY};

/// The points earned by a [placement](MovePlacement) and the [words](Word) they were
/// earned for.
///
/// # See Also
///
/// * [score]
/// * [PendingMove](crate::PendingMove)
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ScoringResult {
    total: u32,
    words: Words,
}

impl ScoringResult {
    /// The points earned, including any [bingo bonus](BINGO_BONUS).
    #[inline]
    pub fn total(&self) -> u32 {
        self.total
    }

    /// The [words](Word) formed, main word first.
    #[inline]
    pub fn words(&self) -> &Words {
        &self.words
    }
}

/// Scores `placement` on `board` under the premiums of `layout`.
///
/// Each [word](Word) is the sum of its letter values times the product of the word
/// [premiums](crate::Premium) it covers. Letter and word premiums only count on squares
/// placed this turn. A [blank](crate::Tile::Blank) adds nothing to the letter sum but
/// still takes the word premium of its square. Placing exactly [RACK_CAPACITY]
/// [tiles](crate::PlacedTile) adds the [bingo bonus](BINGO_BONUS).
///
/// Legality beyond word formation is not checked; see
/// [validate_placement](crate::validate_placement).
///
/// # Arguments
///
/// * `board`: The board before the move.
/// * `placement`: The [tiles](crate::PlacedTile) to place.
/// * `layout`: The premium layout, usually [Board::standard].
///
/// # Errors
///
/// Propagates the errors of [build_words](crate::build_words).
pub fn score(
    board: &BoardState,
    placement: &MovePlacement,
    layout: &Board,
) -> Result<ScoringResult, IllegalMove> {
    let after = board.with_placed(placement.placements())?;
    score_on(&after, placement, layout)
}

/// Same as [score] when the board after the move has already been merged.
pub(crate) fn score_on(
    after: &BoardState,
    placement: &MovePlacement,
    layout: &Board,
) -> Result<ScoringResult, IllegalMove> {
    let words = build_words_on(after, placement)?;

    let mut total = words
        .iter()
        .map(|word| score_word(after, placement, layout, word))
        .sum::<u32>();
    if placement.len() == RACK_CAPACITY {
        total += BINGO_BONUS;
    }

    Ok(ScoringResult { total, words })
}

fn score_word(after: &BoardState, placement: &MovePlacement, layout: &Board, word: &Word) -> u32 {
    let mut letters = 0;
    let mut multiplier = 1;
    for &coordinate in word.coordinates() {
        let Some(tile) = after.tile_at(coordinate) else {
            continue;
        };
        let premium = placement
            .get(coordinate)
            .and_then(|_| layout.premium_at(coordinate));
        match premium {
            Some(premium) => {
                letters += tile.points() * premium.letter_multiplier();
                multiplier *= premium.word_multiplier();
            }
            None => letters += tile.points(),
        }
    }
    letters * multiplier
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Coordinate, PlacedTile, Placements, Tile};

    fn placed(square: &str, letter: char, points: u32) -> (Coordinate, PlacedTile) {
        (
            Coordinate::parse(square).unwrap(),
            PlacedTile::from_tile(Tile::letter(letter, points).unwrap()).unwrap(),
        )
    }

    fn placement(tiles: impl IntoIterator<Item = (Coordinate, PlacedTile)>) -> MovePlacement {
        MovePlacement::new(tiles.into_iter().collect::<Placements>()).unwrap()
    }

    #[test]
    fn opening_on_double_word() {
        let placement = placement([placed("H8", 'H', 3), placed("H9", 'I', 1)]);
        let result = score(&BoardState::empty(), &placement, Board::standard()).unwrap();

        assert_eq!(8, result.total());
        assert_eq!("HI", result.words()[0].text());
    }

    #[test]
    fn double_letter() {
        let placement = placement([placed("A4", 'A', 1), placed("A5", 'B', 3)]);
        let result = score(&BoardState::empty(), &placement, Board::standard()).unwrap();

        assert_eq!(5, result.total());
    }

    #[test]
    fn bingo() {
        let placement = placement([
            placed("H8", 'A', 1),
            placed("H9", 'B', 3),
            placed("H10", 'C', 2),
            placed("H11", 'D', 2),
            placed("H12", 'E', 1),
            placed("H13", 'F', 5),
            placed("H14", 'G', 3),
        ]);
        let result = score(&BoardState::empty(), &placement, Board::standard()).unwrap();

        // H12 doubles E, H8 doubles the word.
        assert_eq!((1 + 3 + 2 + 2 + 2 + 5 + 3) * 2 + BINGO_BONUS, result.total());
    }

    #[test]
    fn bingo_without_premiums() {
        let placement = placement([
            placed("A2", 'A', 1),
            placed("A3", 'B', 3),
            placed("A4", 'C', 2),
            placed("A5", 'D', 2),
            placed("A6", 'E', 1),
            placed("A7", 'F', 5),
            placed("A8", 'G', 3),
        ]);
        let result = score(&BoardState::empty(), &placement, &Board::plain()).unwrap();

        assert_eq!(17 + BINGO_BONUS, result.total());
    }

    #[test]
    fn blank_takes_word_premium() {
        let placement = placement([
            (
                Coordinate::parse("H8").unwrap(),
                PlacedTile::new(Tile::Blank, 'A').unwrap(),
            ),
            placed("H9", 'B', 3),
        ]);
        let result = score(&BoardState::empty(), &placement, Board::standard()).unwrap();

        assert_eq!(6, result.total());
    }

    #[test]
    fn premiums_only_under_new_tiles() {
        let board = BoardState::empty()
            .with_placed(placement([placed("H8", 'H', 3), placed("H9", 'I', 1)]).placements())
            .unwrap();
        let placement = placement([placed("H10", 'T', 2)]);
        let result = score(&board, &placement, Board::standard()).unwrap();

        assert_eq!(6, result.total());
    }

    #[test]
    fn cross_words_are_summed() {
        let board = BoardState::empty()
            .with_placed(placement([placed("H8", 'K', 2), placed("H9", 'O', 1)]).placements())
            .unwrap();
        let placement = placement([placed("I8", 'A', 1), placed("I9", 'D', 2)]);
        let result = score(&board, &placement, &Board::plain()).unwrap();

        assert_eq!(3 + 3 + 3, result.total());
        assert_eq!(3, result.words().len());
    }

    #[test]
    fn compounding_word_premiums() {
        let placement = placement((1..=8).map(|col| placed(&format!("A{col}"), 'A', 1)));
        let result = score(&BoardState::empty(), &placement, Board::standard()).unwrap();

        // A1 and A8 are triple word squares, A4 is a double letter.
        assert_eq!((8 + 1) * 3 * 3, result.total());
    }
}
