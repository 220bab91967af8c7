use crate::{
    adjacent_coordinates, letters, score, validate_placement, Board, BoardState, Coordinate,
    Direction, MovePlacement, PlacedTile, Placements, Player, Plays, RackTiles, ScoringResult,
    Tile, BOARD_SIZE, CENTER, DEFAULT_MAX_CANDIDATES,
};
use either::Either;
use itertools::Itertools;
use line_profile::{LineProfile, Square};
use std::collections::HashSet;
use std::iter;
use tracing::{debug, instrument, trace};

pub use dictionary::*;

mod dictionary;
mod line_profile;

/// A move found by the [search](AiMoveGenerator). It passed the same
/// [validation](validate_placement) and [scoring](score) as any other move, and every
/// [word](crate::Word) it forms is in the dictionary.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct AiMove {
    placement: MovePlacement,
    scoring: ScoringResult,
    plays: Plays,
}

impl AiMove {
    /// The [tiles](PlacedTile) to place.
    #[inline]
    pub fn placement(&self) -> &MovePlacement {
        &self.placement
    }

    /// The points the move earns.
    #[inline]
    pub fn scoring(&self) -> &ScoringResult {
        &self.scoring
    }

    /// A bimap of indexes of [tiles](Tile) in the searched rack to the
    /// [coordinates](Coordinate) they are placed at.
    ///
    /// # See Also
    ///
    /// * [Rack::take_plays](crate::Rack::take_plays)
    #[inline]
    pub fn plays(&self) -> &Plays {
        &self.plays
    }

    /// Takes the move apart.
    #[inline]
    pub fn into_parts(self) -> (MovePlacement, ScoringResult, Plays) {
        (self.placement, self.scoring, self.plays)
    }
}

/// Run-time settings of the [search](AiMoveGenerator).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct SearchConfig {
    /// The number of valid candidates evaluated before the search stops and returns the
    /// best move found so far.
    pub max_candidates: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            max_candidates: DEFAULT_MAX_CANDIDATES,
        }
    }
}

/// Finds a high scoring move for a rack with a bounded, prefix-pruned search.
///
/// Every row and column is scanned. For each empty square the letters allowed by the
/// perpendicular word through it are computed once per line. Then every window of the line
/// holding between `1` and the rack length of empty squares is filled left to right with
/// rack [tiles](Tile), a [blank](Tile::Blank) trying every letter the square allows. A
/// branch is cut as soon as the letters so far are not a
/// [dictionary prefix](WordDictionary::contains_prefix).
///
/// A filled window is a candidate when it covers an anchor: an empty square next to a
/// [tile](PlacedTile), or the [center](CENTER) on an empty board. Candidates are
/// deduplicated by their squares and letters, then [validated](validate_placement),
/// [scored](score) and kept only if every word they form is in the dictionary. The highest
/// total wins, more [tiles](Tile) breaking ties.
///
/// # See Also
///
/// * [SearchConfig]
/// * [AiMove]
#[derive(Debug, Clone, Default)]
pub struct AiMoveGenerator {
    config: SearchConfig,
}

impl AiMoveGenerator {
    /// # Returns
    ///
    /// A generator searching with `config`.
    #[inline]
    pub fn new(config: SearchConfig) -> AiMoveGenerator {
        AiMoveGenerator { config }
    }

    /// The settings searched with.
    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Searches with the [configured](SearchConfig) candidate budget.
    ///
    /// # Arguments
    ///
    /// * `board`: The board to move on.
    /// * `player`: The player to move, whose rack is searched.
    /// * `layout`: The premium layout scores are computed with.
    /// * `dictionary`: Decides which words and prefixes exist.
    ///
    /// # Returns
    ///
    /// The best move found, or [None] when the rack is empty or no legal move was found
    /// within the budget. The two are not distinguished.
    pub fn best_move<D>(
        &self,
        board: &BoardState,
        player: &Player,
        layout: &Board,
        dictionary: &D,
    ) -> Option<AiMove>
    where
        D: WordDictionary + ?Sized,
    {
        self.best_move_with_budget(board, player, layout, dictionary, self.config.max_candidates)
    }

    /// Same as [AiMoveGenerator::best_move] with a budget of `max_candidates` valid
    /// candidates for this call only.
    #[instrument(
        skip(self, board, player, layout, dictionary),
        fields(player = player.name(), rack = player.rack().len())
    )]
    pub fn best_move_with_budget<D>(
        &self,
        board: &BoardState,
        player: &Player,
        layout: &Board,
        dictionary: &D,
        max_candidates: usize,
    ) -> Option<AiMove>
    where
        D: WordDictionary + ?Sized,
    {
        let rack = player.rack().tiles();
        if rack.is_empty() {
            debug!("empty rack");
            return None;
        }

        Search::new(board, layout, dictionary, rack, max_candidates).run()
    }
}

/// Marks the squares a candidate must cover.
fn find_anchors(board: &BoardState) -> [[bool; BOARD_SIZE]; BOARD_SIZE] {
    let mut anchors = [[false; BOARD_SIZE]; BOARD_SIZE];
    if board.is_empty() {
        anchors[CENTER.row()][CENTER.col()] = true;
        return anchors;
    }

    for coordinate in board
        .tiles()
        .flat_map(|(coordinate, _)| adjacent_coordinates(coordinate))
        .filter(|&coordinate| !board.has_tile(coordinate))
    {
        anchors[coordinate.row()][coordinate.col()] = true;
    }
    anchors
}

/// The letters `tile` may spell on `square`.
fn candidate_letters(tile: Tile, square: &Square) -> impl Iterator<Item = char> + '_ {
    let pool = match tile.printed_letter() {
        Some(letter) => Either::Left(iter::once(letter)),
        None => Either::Right(letters()),
    };
    pool.filter(move |&letter| square.allows(letter))
}

struct Search<'a, D: ?Sized> {
    board: &'a BoardState,
    layout: &'a Board,
    dictionary: &'a D,
    rack: &'a [Tile],
    anchors: [[bool; BOARD_SIZE]; BOARD_SIZE],
    max_candidates: usize,
    /// The number of valid candidates evaluated.
    accepted: usize,
    seen: HashSet<Vec<(Coordinate, char)>>,
    best: Option<AiMove>,
    /// Rack indexes taken by the window being filled.
    used: Vec<bool>,
    /// Rack index, square and [tile](PlacedTile) of every placement in the window.
    placed: Vec<(usize, Coordinate, PlacedTile)>,
    /// The letters of the window so far.
    word: String,
}

impl<'a, D> Search<'a, D>
where
    D: WordDictionary + ?Sized,
{
    fn new(
        board: &'a BoardState,
        layout: &'a Board,
        dictionary: &'a D,
        rack: &'a [Tile],
        max_candidates: usize,
    ) -> Self {
        Search {
            board,
            layout,
            dictionary,
            rack,
            anchors: find_anchors(board),
            max_candidates,
            accepted: 0,
            seen: HashSet::new(),
            best: None,
            used: vec![false; rack.len()],
            placed: Vec::with_capacity(rack.len()),
            word: String::with_capacity(BOARD_SIZE * 2),
        }
    }

    fn run(mut self) -> Option<AiMove> {
        self.search_lines();

        if self.exhausted() {
            debug!(accepted = self.accepted, "candidate budget exhausted");
        }
        match &self.best {
            Some(best) => debug!(
                total = best.scoring.total(),
                tiles = best.placement.len(),
                accepted = self.accepted,
                "best move chosen"
            ),
            None => debug!(accepted = self.accepted, "no move found"),
        }
        self.best
    }

    /// Scans every row, then every column, until the budget runs out.
    fn search_lines(&mut self) {
        for direction in Direction::directions() {
            for line in 0..BOARD_SIZE {
                if self.exhausted() {
                    return;
                }
                let profile = LineProfile::new(self.board, direction, line, self.dictionary);
                self.search_line(&profile);
            }
        }
    }

    #[inline]
    fn exhausted(&self) -> bool {
        self.accepted >= self.max_candidates
    }

    fn search_line(&mut self, profile: &LineProfile) {
        for start in 0..profile.len() {
            for end in start..profile.len() {
                if self.exhausted() {
                    return;
                }
                let open = profile.open_count(start, end);
                if open == 0 || open > self.rack.len() {
                    continue;
                }
                self.fill(profile, start, end, false);
            }
        }
    }

    fn fill(&mut self, profile: &LineProfile, position: usize, end: usize, anchored: bool) {
        if self.exhausted() {
            return;
        }
        if position > end {
            self.evaluate(anchored);
            return;
        }
        let Some(square) = profile.square(position) else {
            return;
        };

        match *square {
            Square::Fixed(letter) => {
                self.word.push(letter);
                if self.dictionary.contains_prefix(&self.word) {
                    self.fill(profile, position + 1, end, anchored);
                }
                self.word.pop();
            }
            Square::Open { coordinate, .. } => {
                let anchored = anchored || self.anchors[coordinate.row()][coordinate.col()];
                // Identical tiles lead to identical candidates.
                let mut tried = RackTiles::new();
                for index in 0..self.rack.len() {
                    if self.exhausted() {
                        break;
                    }
                    let tile = self.rack[index];
                    if self.used[index] || tried.contains(&tile) {
                        continue;
                    }
                    tried.push(tile);

                    self.used[index] = true;
                    for letter in candidate_letters(tile, square) {
                        let Ok(placed) = PlacedTile::new(tile, letter) else {
                            continue;
                        };
                        self.word.push(letter);
                        if self.dictionary.contains_prefix(&self.word) {
                            self.placed.push((index, coordinate, placed));
                            self.fill(profile, position + 1, end, anchored);
                            self.placed.pop();
                        }
                        self.word.pop();
                        if self.exhausted() {
                            break;
                        }
                    }
                    self.used[index] = false;
                }
            }
        }
    }

    fn evaluate(&mut self, anchored: bool) {
        if self.placed.is_empty() || !anchored {
            return;
        }

        let key = self
            .placed
            .iter()
            .map(|&(_, coordinate, placed)| (coordinate, placed.letter()))
            .sorted()
            .collect_vec();
        if !self.seen.insert(key) {
            return;
        }

        let placements: Placements = self
            .placed
            .iter()
            .map(|&(_, coordinate, placed)| (coordinate, placed))
            .collect();
        let Ok(placement) = MovePlacement::new(placements) else {
            return;
        };
        if let Err(reason) = validate_placement(self.board, &placement) {
            trace!(%reason, "illegal candidate");
            return;
        }
        let scoring = match score(self.board, &placement, self.layout) {
            Ok(scoring) => scoring,
            Err(reason) => {
                trace!(%reason, "unscorable candidate");
                return;
            }
        };
        if let Some(word) = scoring
            .words()
            .iter()
            .find(|word| !self.dictionary.contains(word.text()))
        {
            trace!(%word, "candidate forms an unknown word");
            return;
        }

        self.accepted += 1;
        let better = self.best.as_ref().map_or(true, |best| {
            (scoring.total(), placement.len()) > (best.scoring.total(), best.placement.len())
        });
        if better {
            trace!(total = scoring.total(), tiles = placement.len(), "new best candidate");
            let plays = self
                .placed
                .iter()
                .map(|&(index, coordinate, _)| (index, coordinate))
                .collect();
            self.best = Some(AiMove {
                placement,
                scoring,
                plays,
            });
        }
    }
}
