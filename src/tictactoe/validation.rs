//! Reachability checks for boards entered from outside the engine

use super::board::{Board, Player};

impl Board {
    /// Check if the board can arise from X-first alternating play
    pub fn is_reachable(&self) -> bool {
        self.check_reachable().is_ok()
    }

    /// Like [`Board::is_reachable`], naming the first violated rule.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::UnreachableBoard`] describing the violation.
    pub fn check_reachable(&self) -> Result<(), crate::Error> {
        let reject = |reason: String| Err(crate::Error::UnreachableBoard { reason });
        let count = self.count_pieces();

        if !(count.x == count.o || count.x == count.o + 1) {
            return reject(format!(
                "X must have as many marks as O or one more (X={}, O={})",
                count.x, count.o
            ));
        }

        let x_wins = self.has_won(Player::X);
        let o_wins = self.has_won(Player::O);

        if x_wins && o_wins {
            return reject("both players have three in a row".to_string());
        }

        // The winner moved last, so play stopped right after their mark.
        if x_wins && count.x != count.o + 1 {
            return reject("X has won but O moved afterwards".to_string());
        }
        if o_wins && count.x != count.o {
            return reject("O has won but X moved afterwards".to_string());
        }

        Ok(())
    }
}
