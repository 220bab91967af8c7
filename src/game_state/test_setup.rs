use crate::{random_current_player, random_players, BoardState, GameState, Players, TileBag};
use rand::Rng;

impl GameState {
    /// Generates an empty [GameState] with no players.
    ///
    /// # Returns
    ///
    /// A [GameState] struct with the properties set to the following:
    /// * `board`: An empty board.
    /// * `players`: An empty players vector.
    /// * `bag`: An empty bag.
    /// * `current_player`: `0`.
    /// * `pending_move`: [None].
    pub fn empty_game_state() -> GameState {
        GameState {
            board: BoardState::empty(),
            players: Players::new(),
            bag: TileBag::default(),
            current_player: 0,
            pending_move: None,
        }
    }

    /// A mutable reference to `self.board`.
    pub fn mut_board(&mut self) -> &mut BoardState {
        &mut self.board
    }

    /// A mutable reference to `self.bag`.
    pub fn mut_bag(&mut self) -> &mut TileBag {
        &mut self.bag
    }

    /// It pushes a random, small, non-zero number of players with empty racks and
    /// `0` points.
    ///
    /// # Returns
    ///
    /// The number of additional players.
    pub fn random_players<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        random_players(rng, &mut self.players)
    }

    /// Sets the current player to a random number between `0` inclusive and the number of
    /// players exclusive.
    ///
    /// # Panics
    ///
    /// If there are no players.
    ///
    /// # Returns
    ///
    /// The index of the player whose turn it is.
    pub fn random_current_player<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        random_current_player(rng, &mut self.current_player, self.players.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_game_state() {
        let game = GameState::empty_game_state();

        assert!(game.board.is_empty());
        assert!(game.players.is_empty());
        assert!(game.bag.is_empty());
        assert_eq!(0, game.current_player);
        assert!(game.pending_move.is_none());
    }

    #[test]
    fn random_players() {
        let mut rng = rand::thread_rng();
        let mut game = GameState::empty_game_state();
        let players_len = game.random_players(&mut rng);

        assert_eq!(players_len, game.players.len());
        assert!(players_len > 0);
        let current_player = game.random_current_player(&mut rng);
        assert!(current_player < players_len);
    }
}
