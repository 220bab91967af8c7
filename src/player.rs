use crate::Rack;

/// A participant with a cumulative score and a [rack](Rack). The score is signed because
/// final [adjustments](crate::apply_final_adjustments) may take it below zero.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Player {
    name: String,
    score: i64,
    rack: Rack,
}

impl Player {
    /// # Returns
    ///
    /// A player named `name` with a score of `0` and an empty [rack](Rack).
    pub fn new(name: impl Into<String>) -> Player {
        Player {
            name: name.into(),
            score: 0,
            rack: Rack::new(),
        }
    }

    /// The display name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The cumulative score.
    #[inline]
    pub fn score(&self) -> i64 {
        self.score
    }

    /// Adds `points`, which may be negative, to the score.
    #[inline]
    pub fn add_score(&mut self, points: i64) {
        self.score += points;
    }

    /// The held [tiles](crate::Tile).
    #[inline]
    pub fn rack(&self) -> &Rack {
        &self.rack
    }

    /// The held [tiles](crate::Tile), mutably.
    #[inline]
    pub fn rack_mut(&mut self) -> &mut Rack {
        &mut self.rack
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new() {
        let player = Player::new("Ala");
        assert_eq!("Ala", player.name());
        assert_eq!(0, player.score());
        assert!(player.rack().is_empty());
    }

    #[test]
    fn add_score() {
        let mut player = Player::new("Ola");
        player.add_score(12);
        player.add_score(-20);
        assert_eq!(-8, player.score());
    }
}
