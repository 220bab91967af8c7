use crate::{
    BoardState, Coordinate, MovePlacement, Player, Players, ScoringResult, SquareOccupied, TileBag,
};
use derive_more::Display;
use rand::Rng;
use tracing::{debug, instrument};

pub use pending_move::*;

mod pending_move;
#[cfg(test)]
mod test_setup;

/// Owns every piece of data of one match and funnels every change through its methods.
///
/// A match alternates between two states. Without a [pending move](PendingMove) a
/// placement may be [applied](GameState::apply_pending_move). With one, nothing may be
/// applied until the challenge is [resolved](GameState::resolve_challenge).
///
/// Concurrent access to one match must be serialized by the caller; separate matches
/// share nothing.
///
/// # See Also
///
/// * [PendingMove]
/// * [apply_final_adjustments](crate::apply_final_adjustments)
#[derive(Debug, Clone)]
pub struct GameState {
    /// The [tiles](crate::PlacedTile) permanently on the board.
    board: BoardState,
    /// The players in turn order.
    players: Players,
    /// This is a bag of all the [tiles](crate::Tile) that haven't been drawn yet.
    bag: TileBag,
    /// The index of the player whose turn it is.
    current_player: usize,
    /// The move awaiting challenge resolution, if any.
    pending_move: Option<PendingMove>,
}

/// Describes the reason why [GameState] could not be created.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Display)]
pub enum NewError {
    /// Attempting [to start](GameState::new) with empty players.
    #[display("a game requires at least one player")]
    EmptyPlayers,
}

impl std::error::Error for NewError {}

/// Describes a call made in the wrong state of the challenge protocol. Always a bug in
/// the caller; the [game](GameState) is left unchanged.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Display)]
pub enum ProtocolError {
    /// Attempting [to apply](GameState::apply_pending_move) a move while another
    /// is pending.
    #[display("a move is already pending")]
    MovePending,
    /// Attempting [to resolve](GameState::resolve_challenge) a challenge without a
    /// pending move.
    #[display("there is no pending move")]
    NoPendingMove,
    /// Attempting [to apply](GameState::apply_pending_move) a move onto an occupied square.
    #[display("square {coordinate} is already occupied")]
    SquareOccupied {
        /// The first occupied square found.
        coordinate: Coordinate,
    },
}

impl std::error::Error for ProtocolError {}

impl From<SquareOccupied> for ProtocolError {
    fn from(SquareOccupied { coordinate }: SquareOccupied) -> Self {
        ProtocolError::SquareOccupied { coordinate }
    }
}

impl GameState {
    /// Starts a match on an empty board. The first player moves first.
    ///
    /// # Arguments
    ///
    /// * `players`: The players in turn order, racks as dealt.
    /// * `bag`: The [tiles](crate::Tile) not yet dealt.
    ///
    /// # Errors
    ///
    /// * [NewError::EmptyPlayers] When `players` is empty.
    pub fn new(players: Players, bag: TileBag) -> Result<GameState, NewError> {
        if players.is_empty() {
            return Err(NewError::EmptyPlayers);
        }
        Ok(GameState {
            board: BoardState::empty(),
            players,
            bag,
            current_player: 0,
            pending_move: None,
        })
    }

    /// Starts a match with a [standard bag](TileBag::standard) and a full rack for every
    /// player named in `names`.
    ///
    /// # Errors
    ///
    /// * [NewError::EmptyPlayers] When `names` is empty.
    pub fn new_standard<R>(
        names: impl IntoIterator<Item = impl Into<String>>,
        rng: &mut R,
    ) -> Result<GameState, NewError>
    where
        R: Rng + ?Sized,
    {
        let mut bag = TileBag::standard(rng);
        let players = names
            .into_iter()
            .map(|name| {
                let mut player = Player::new(name);
                player.rack_mut().refill_from(&mut bag);
                player
            })
            .collect();
        GameState::new(players, bag)
    }

    /// The [tiles](crate::PlacedTile) permanently on the board. A pending move is not
    /// included until it is committed.
    #[inline]
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    /// The players in turn order.
    #[inline]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The players in turn order, mutably. Used for rack bookkeeping and
    /// [final adjustments](crate::apply_final_adjustments).
    #[inline]
    pub fn players_mut(&mut self) -> &mut [Player] {
        &mut self.players
    }

    /// The undrawn [tiles](crate::Tile).
    #[inline]
    pub fn bag(&self) -> &TileBag {
        &self.bag
    }

    /// The undrawn [tiles](crate::Tile), mutably.
    #[inline]
    pub fn bag_mut(&mut self) -> &mut TileBag {
        &mut self.bag
    }

    /// The index of the player whose turn it is.
    #[inline]
    pub fn current_player(&self) -> usize {
        self.current_player
    }

    /// The move awaiting challenge resolution, if any.
    #[inline]
    pub fn pending_move(&self) -> Option<&PendingMove> {
        self.pending_move.as_ref()
    }

    /// Whether a move awaits challenge resolution.
    #[inline]
    pub fn has_pending_move(&self) -> bool {
        self.pending_move.is_some()
    }

    /// Refills the rack of the player at `index` from the bag.
    ///
    /// # Returns
    ///
    /// The number of [tiles](crate::Tile) drawn, or [None] if there is no player at `index`.
    pub fn refill_rack(&mut self, index: usize) -> Option<usize> {
        let player = self.players.get_mut(index)?;
        Some(player.rack_mut().refill_from(&mut self.bag))
    }

    /// Records `placement` as the current player's pending move. The live board is not
    /// changed until the challenge is [resolved](GameState::resolve_challenge).
    ///
    /// Neither legality nor racks are checked here; see
    /// [validate_placement](crate::validate_placement) and
    /// [Rack::take_placed](crate::Rack::take_placed).
    ///
    /// # Errors
    ///
    /// * [ProtocolError::MovePending] When a move is already pending.
    /// * [ProtocolError::SquareOccupied] When some placed square is occupied.
    #[instrument(
        skip(self, placement, scoring),
        fields(player = self.current_player, tiles = placement.len(), total = scoring.total())
    )]
    pub fn apply_pending_move(
        &mut self,
        placement: MovePlacement,
        scoring: ScoringResult,
    ) -> Result<(), ProtocolError> {
        if self.pending_move.is_some() {
            return Err(ProtocolError::MovePending);
        }

        let after = self.board.with_placed(placement.placements())?;
        self.pending_move = Some(PendingMove::new(
            self.current_player,
            self.board.clone(),
            after,
            placement,
            scoring,
        ));
        debug!("move pending");
        Ok(())
    }

    /// Resolves the pending move and advances the turn.
    ///
    /// When `valid`, the pending board becomes the live board and the mover is credited
    /// with the pending total. Otherwise the board and scores are left as they were and
    /// the caller returns the placed [tiles](crate::Tile) to the mover's rack.
    ///
    /// # Errors
    ///
    /// * [ProtocolError::NoPendingMove] When no move is pending.
    ///
    /// # Returns
    ///
    /// The resolved move.
    #[instrument(skip(self), fields(player = self.current_player))]
    pub fn resolve_challenge(&mut self, valid: bool) -> Result<PendingMove, ProtocolError> {
        let pending_move = self
            .pending_move
            .take()
            .ok_or(ProtocolError::NoPendingMove)?;

        if valid {
            self.board = pending_move.after().clone();
            let points = i64::from(pending_move.scoring().total());
            if let Some(player) = self.players.get_mut(pending_move.player()) {
                player.add_score(points);
            }
            debug!(points, "move committed");
        } else {
            debug!("move rejected");
        }

        self.advance_turn();
        Ok(pending_move)
    }

    /// Applies `placement` and immediately resolves it as valid. This is the path taken
    /// by moves whose words are already known to be in the dictionary.
    ///
    /// # Errors
    ///
    /// * [ProtocolError::MovePending] When a move is already pending.
    /// * [ProtocolError::SquareOccupied] When some placed square is occupied.
    #[instrument(skip(self, placement, scoring), fields(player = self.current_player))]
    pub fn commit_move(
        &mut self,
        placement: MovePlacement,
        scoring: ScoringResult,
    ) -> Result<(), ProtocolError> {
        self.apply_pending_move(placement, scoring)?;
        self.resolve_challenge(true)?;
        Ok(())
    }

    /// Moves the turn to the next player, wrapping around to the first. Used for passes,
    /// exchanges and rejected moves.
    #[instrument(skip(self), fields(player = self.current_player))]
    pub fn advance_turn(&mut self) {
        self.current_player = (self.current_player + 1)
            .checked_rem(self.players.len())
            .unwrap_or(0);
        debug!(next = self.current_player, "turn advanced");
    }
}
