//! Heuristic position evaluation for truncated search
//!
//! Invoked only when the search hits its depth or time limit without
//! reaching a terminal state; terminal positions are always scored exactly
//! by the search engine. Scores are from the maximizing player's
//! perspective: positive favors that player, negative the opponent.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Player};
use crate::lines::{Line, LineTally};

/// Tuning weights for the cutoff heuristic.
///
/// These are tuning parameters, not structural contracts; callers vary them
/// through [`crate::SearchConfig`] rather than editing constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeuristicWeights {
    /// Per-line credit for opponent-free lines, multiplied by the square of
    /// the mark count so near-complete lines dwarf barely-started ones.
    pub open_line_scale: i32,
    /// Flat penalty for each line the opponent is one move from completing.
    /// Must outweigh ordinary positional credit.
    pub threat_penalty: i32,
}

impl Default for HeuristicWeights {
    fn default() -> Self {
        HeuristicWeights {
            open_line_scale: 10,
            threat_penalty: 1_000,
        }
    }
}

/// Score a non-terminal position for `player` by summing per-line
/// contributions over all rows, columns, and both diagonals.
pub fn evaluate(board: &Board, player: Player, weights: &HeuristicWeights) -> i32 {
    let size = board.size();
    Line::all(size)
        .map(|line| line_score(&LineTally::scan(board, line), size, player, weights))
        .sum()
}

/// Contribution of a single line.
///
/// Lines the opponent has reached are worthless to the player (and vice
/// versa); only uncontested lines carry growing potential.
fn line_score(tally: &LineTally, size: usize, player: Player, weights: &HeuristicWeights) -> i32 {
    let own = tally.count(player) as i32;
    let opp = tally.count(player.opponent()) as i32;

    let mut score = 0;
    if opp == 0 {
        score += weights.open_line_scale * own * own;
    }
    if own == 0 {
        score -= weights.open_line_scale * opp * opp;
        if opp as usize == size - 1 && tally.empty == 1 {
            score -= weights.threat_penalty;
        }
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval_str(s: &str, player: Player) -> i32 {
        let board = Board::from_string(s).unwrap();
        evaluate(&board, player, &HeuristicWeights::default())
    }

    #[test]
    fn test_empty_board_is_neutral() {
        let board = Board::new(4).unwrap();
        assert_eq!(
            evaluate(&board, Player::X, &HeuristicWeights::default()),
            0
        );
    }

    #[test]
    fn test_relabeling_marks_relabels_the_score() {
        // Swapping every mark and the evaluated player leaves the score
        // unchanged
        let board = "XX. ..O ...";
        let mirrored = "OO. ..X ...";
        assert_eq!(eval_str(board, Player::X), eval_str(mirrored, Player::O));
        assert_eq!(eval_str(board, Player::O), eval_str(mirrored, Player::X));
    }

    #[test]
    fn test_uncontested_marks_score_higher() {
        // X holds the top row uncontested vs O holding it
        let x_ahead = eval_str("XX. ..O ...", Player::X);
        let o_ahead = eval_str("OO. ..X ...", Player::X);
        assert!(
            x_ahead > o_ahead,
            "position favoring X should score higher for X: {x_ahead} vs {o_ahead}"
        );
    }

    #[test]
    fn test_more_marks_score_superlinearly() {
        let weights = HeuristicWeights::default();
        let one = LineTally {
            x: 1,
            o: 0,
            empty: 2,
        };
        let two = LineTally {
            x: 2,
            o: 0,
            empty: 1,
        };
        let single = line_score(&one, 3, Player::X, &weights);
        let double = line_score(&two, 3, Player::X, &weights);
        assert!(
            double > 2 * single,
            "a near-complete open line should be worth more than twice a started one: {double} vs {single}"
        );
    }

    #[test]
    fn test_immediate_threat_penalty_dominates() {
        let weights = HeuristicWeights::default();
        let threat = LineTally {
            x: 0,
            o: 2,
            empty: 1,
        };
        let own_best = LineTally {
            x: 2,
            o: 0,
            empty: 1,
        };
        let penalty = line_score(&threat, 3, Player::X, &weights);
        let credit = line_score(&own_best, 3, Player::X, &weights);
        assert!(
            penalty + credit < 0,
            "an unanswered threat must outweigh the best positional credit: {penalty} + {credit}"
        );
    }

    #[test]
    fn test_blocking_a_threat_does_not_hurt() {
        // O threatens the top row at (0, 0); X blocking it should not
        // lower X's evaluation.
        let open = eval_str(".OO .X. ...", Player::X);
        let blocked = eval_str("XOO .X. ...", Player::X);
        assert!(
            blocked >= open,
            "blocking should score at least as well as leaving the threat: {blocked} vs {open}"
        );
    }

    #[test]
    fn test_contested_lines_are_worthless() {
        // Every line containing both marks contributes nothing
        let weights = HeuristicWeights::default();
        let contested = LineTally {
            x: 2,
            o: 1,
            empty: 0,
        };
        assert_eq!(line_score(&contested, 3, Player::X, &weights), 0);
        assert_eq!(line_score(&contested, 3, Player::O, &weights), 0);
    }
}
