//! Game session with move history, used by the interactive shell

use serde::{Deserialize, Serialize};

use super::{
    board::{Action, Board, Player},
    engine::Outcome,
};

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub action: Action,
    pub player: Player,
}

/// A game with history.
///
/// The engine itself is stateless; the log lives here so the shell can show
/// and replay how a position was reached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub initial: Board,
    pub moves: Vec<Move>,
}

impl Game {
    /// Create a new game from the empty board
    pub fn new() -> Self {
        Self::from_board(Board::new())
    }

    /// Start from an arbitrary position
    pub fn from_board(initial: Board) -> Self {
        Game {
            initial,
            moves: Vec::new(),
        }
    }

    /// Play a move for the side to move
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::GameOver`] once the position is terminal and
    /// [`crate::Error::InvalidAction`] for an illegal coordinate.
    pub fn play(&mut self, action: Action) -> Result<Board, crate::Error> {
        let current = self.current()?;
        if current.is_terminal() {
            return Err(crate::Error::GameOver);
        }

        let next = current.apply(action)?;
        self.moves.push(Move {
            action,
            player: current.current_player(),
        });
        Ok(next)
    }

    /// Current board, replayed from the log
    ///
    /// # Errors
    ///
    /// Returns error if a logged move no longer applies, which means the
    /// history was edited by hand.
    pub fn current(&self) -> Result<Board, crate::Error> {
        self.moves
            .iter()
            .try_fold(self.initial, |board, mv| board.apply(mv.action))
    }

    /// Outcome of the current position
    ///
    /// # Errors
    ///
    /// See [`Game::current`].
    pub fn outcome(&self) -> Result<Outcome, crate::Error> {
        Ok(self.current()?.outcome())
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_records_players() {
        let mut game = Game::new();
        game.play(Action::new(1, 1)).unwrap();
        game.play(Action::new(0, 0)).unwrap();

        assert_eq!(game.moves.len(), 2);
        assert_eq!(game.moves[0].player, Player::X);
        assert_eq!(game.moves[1].player, Player::O);
        assert_eq!(game.outcome().unwrap(), Outcome::Ongoing);
    }

    #[test]
    fn test_rejected_move_is_not_logged() {
        let mut game = Game::new();
        game.play(Action::new(1, 1)).unwrap();
        assert!(game.play(Action::new(1, 1)).is_err());
        assert_eq!(game.moves.len(), 1);
    }

    #[test]
    fn test_no_moves_after_win() {
        let mut game = Game::new();
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            game.play(Action::new(row, col)).unwrap();
        }
        assert_eq!(game.outcome().unwrap(), Outcome::Win(Player::X));

        let err = game.play(Action::new(2, 2)).unwrap_err();
        assert!(matches!(err, crate::Error::GameOver));
    }

    #[test]
    fn test_current_replays_log() {
        let mut game = Game::new();
        game.play(Action::new(0, 0)).unwrap();
        let after_second = game.play(Action::new(2, 2)).unwrap();

        assert_eq!(game.current().unwrap(), after_second);
        assert_eq!(Game::new().current().unwrap(), Board::new());
    }

    #[test]
    fn test_edited_log_fails_to_replay() {
        let mut game = Game::new();
        game.play(Action::new(0, 0)).unwrap();
        game.moves.push(Move {
            action: Action::new(0, 0),
            player: Player::O,
        });
        assert!(matches!(
            game.current(),
            Err(crate::Error::InvalidAction { .. })
        ));
    }
}
