//! Game rules: turn order, legal actions, transitions and terminal detection

use serde::{Deserialize, Serialize};

use super::{
    board::{Action, Board, Cell, Player},
    lines::LineAnalyzer,
};

/// Result of a position, derived from the board on demand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win(Player),
    Draw,
    Ongoing,
}

/// Starting position: all nine cells empty, X to move
pub fn initial_state() -> Board {
    Board::new()
}

impl Board {
    /// Player whose turn it is.
    ///
    /// X when both marks occur equally often, O otherwise. Only meaningful for
    /// boards reached by alternating play; a board with a larger skew gets an
    /// answer, but not a meaningful one.
    pub fn current_player(&self) -> Player {
        let count = self.count_pieces();
        if count.x == count.o {
            Player::X
        } else {
            Player::O
        }
    }

    /// All empty coordinates in row-major order.
    ///
    /// Search ties are resolved by this order, so it must stay stable.
    pub fn legal_actions(&self) -> Vec<Action> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| Action::from_index(i))
            .collect()
    }

    /// Place the current player's mark and return the new board
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidAction`] if the coordinate is off the
    /// board or the cell is already taken.
    #[must_use = "apply returns a new board; the original is unchanged"]
    pub fn apply(&self, action: Action) -> Result<Board, crate::Error> {
        let idx = action.index().ok_or(crate::Error::InvalidAction {
            row: action.row,
            col: action.col,
            reason: "coordinate is outside the 3x3 board",
        })?;

        if self.cells[idx] != Cell::Empty {
            return Err(crate::Error::InvalidAction {
                row: action.row,
                col: action.col,
                reason: "cell is already occupied",
            });
        }

        Ok(self.place(idx, self.current_player()))
    }

    /// Every legal action paired with the board it leads to, in the order of
    /// [`Board::legal_actions`]
    pub fn successors(&self) -> impl Iterator<Item = (Action, Board)> + '_ {
        let player = self.current_player();
        self.legal_actions()
            .into_iter()
            .map(move |action| (action, self.place(action.row * 3 + action.col, player)))
    }

    fn place(&self, idx: usize, player: Player) -> Board {
        let mut next = *self;
        next.cells[idx] = player.to_cell();
        next
    }

    /// Check if a player has three in a row
    pub fn has_won(&self, player: Player) -> bool {
        LineAnalyzer::has_won(&self.cells, player)
    }

    /// Get the winner if there is one. X is checked first.
    pub fn winner(&self) -> Option<Player> {
        if self.has_won(Player::X) {
            Some(Player::X)
        } else if self.has_won(Player::O) {
            Some(Player::O)
        } else {
            None
        }
    }

    /// Check if the game is over (win or full board)
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || !self.cells.contains(&Cell::Empty)
    }

    /// Payoff from X's perspective: +1 X won, -1 O won, 0 otherwise.
    ///
    /// Only a true game value once [`Board::is_terminal`] holds.
    pub fn utility(&self) -> i32 {
        match self.winner() {
            Some(Player::X) => 1,
            Some(Player::O) => -1,
            None => 0,
        }
    }

    pub fn outcome(&self) -> Outcome {
        match self.winner() {
            Some(player) => Outcome::Win(player),
            None if self.is_terminal() => Outcome::Draw,
            None => Outcome::Ongoing,
        }
    }
}
