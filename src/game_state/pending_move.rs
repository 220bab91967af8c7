use crate::{BoardState, MovePlacement, ScoringResult, Word, WordDictionary};

/// A move applied speculatively and awaiting challenge resolution. Pairs the board before
/// the move with the board it would produce. At most one exists per [game](crate::GameState).
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PendingMove {
    player: usize,
    before: BoardState,
    after: BoardState,
    placement: MovePlacement,
    scoring: ScoringResult,
}

impl PendingMove {
    pub(super) fn new(
        player: usize,
        before: BoardState,
        after: BoardState,
        placement: MovePlacement,
        scoring: ScoringResult,
    ) -> PendingMove {
        PendingMove {
            player,
            before,
            after,
            placement,
            scoring,
        }
    }

    /// The index of the player who made the move.
    #[inline]
    pub fn player(&self) -> usize {
        self.player
    }

    /// The board before the move.
    #[inline]
    pub fn before(&self) -> &BoardState {
        &self.before
    }

    /// The board the move would produce.
    #[inline]
    pub fn after(&self) -> &BoardState {
        &self.after
    }

    /// The placed [tiles](crate::PlacedTile).
    #[inline]
    pub fn placement(&self) -> &MovePlacement {
        &self.placement
    }

    /// The points the move earns if committed.
    #[inline]
    pub fn scoring(&self) -> &ScoringResult {
        &self.scoring
    }

    /// Judges a challenge against `dictionary`. The challenge succeeds, and the move
    /// should be resolved as invalid, when this is not empty.
    ///
    /// # Returns
    ///
    /// The [words](Word) of the move that `dictionary` does not contain.
    pub fn invalid_words<D>(&self, dictionary: &D) -> Vec<&Word>
    where
        D: WordDictionary + ?Sized,
    {
        self.scoring
            .words()
            .iter()
            .filter(|word| !dictionary.contains(word.text()))
            .collect()
    }
}
