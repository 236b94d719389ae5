//! Alpha-beta minimax search
//!
//! The engine explores the game tree by mutating a single shared board in
//! place (place, recurse, undo), scoring terminal states exactly and falling
//! back to the cutoff heuristic when a depth or time limit interrupts the
//! recursion. Pruning and move ordering are independently toggleable so
//! their effect on nodes visited can be measured without code changes.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::board::{Board, Coord, Player};
use crate::eval::{evaluate, HeuristicWeights};
use crate::ordering::center_ordered;

/// Base magnitude of a terminal win/loss score.
///
/// Dominates any heuristic score by several orders of magnitude. The number
/// of empty cells remaining is added on top, so a faster win scores strictly
/// higher than a slower one and a delayed loss scores strictly higher than
/// an immediate one.
pub const WIN_SCORE: i32 = 1_000_000_000;

/// Parameters for one search call.
///
/// Defaults are fully unbounded (exhaustive search, no time cap) with both
/// optimizations enabled. There is no module-level default state; benchmark
/// and test code vary settings per call without cross-test interference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Maximum recursion depth in plies below the root; `None` searches to
    /// terminal states
    pub max_depth: Option<u32>,
    /// Soft wall-clock budget; checked at node boundaries only, so a single
    /// evaluation is never interrupted
    pub time_budget: Option<Duration>,
    /// Alpha-beta pruning toggle (off = plain minimax, for benchmarking)
    pub pruning: bool,
    /// Center-first move ordering toggle (off = row-major order)
    pub move_ordering: bool,
    /// Cutoff heuristic weights
    pub weights: HeuristicWeights,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            max_depth: None,
            time_budget: None,
            pruning: true,
            move_ordering: true,
            weights: HeuristicWeights::default(),
        }
    }
}

impl SearchConfig {
    /// Depth and time limits matched to the board size: exhaustive on 3x3,
    /// where full search is cheap and provably optimal, and a shallow
    /// 200 ms-capped search on anything larger.
    pub fn tuned_for(size: usize) -> Self {
        if size == 3 {
            SearchConfig::default()
        } else {
            SearchConfig::default()
                .with_max_depth(3)
                .with_time_budget(Duration::from_millis(200))
        }
    }

    /// Set the maximum search depth.
    pub fn with_max_depth(mut self, depth: u32) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Set the soft wall-clock budget.
    pub fn with_time_budget(mut self, budget: Duration) -> Self {
        self.time_budget = Some(budget);
        self
    }

    /// Enable or disable alpha-beta pruning.
    pub fn with_pruning(mut self, enabled: bool) -> Self {
        self.pruning = enabled;
        self
    }

    /// Enable or disable center-first move ordering.
    pub fn with_move_ordering(mut self, enabled: bool) -> Self {
        self.move_ordering = enabled;
        self
    }

    /// Set the cutoff heuristic weights.
    pub fn with_weights(mut self, weights: HeuristicWeights) -> Self {
        self.weights = weights;
        self
    }
}

/// Outcome of one top-level search call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Best move found; always present for a valid non-terminal board
    pub best_move: Option<Coord>,
    /// Minimax score of the position from the searched player's perspective
    pub score: i32,
    /// Nodes visited, for instrumentation
    pub nodes: u64,
}

/// Pick the best move for `player` on a non-terminal board.
///
/// The board is mutated during the search and restored to its pre-call
/// state before returning. Ties between equally-scored moves are broken by
/// candidate order (first seen wins), so results are deterministic for a
/// fixed configuration. When the time budget expires the best move found so
/// far is returned; if it expires before any node completes, the first
/// ordered candidate is. The engine never returns without a legal move.
///
/// # Errors
///
/// Returns [`crate::Error::GameOver`] if the board is already won or full.
pub fn choose_move(
    board: &mut Board,
    player: Player,
    config: &SearchConfig,
) -> Result<SearchResult, crate::Error> {
    if board.winner().is_some() || board.is_full() {
        return Err(crate::Error::GameOver);
    }

    let deadline = config.time_budget.map(|budget| Instant::now() + budget);
    let prior_last = board.last_move();
    let candidates = candidate_moves(board, config);
    let Some(&fallback) = candidates.first() else {
        return Err(crate::Error::NoValidMoves);
    };

    let mut search = Minimax {
        config,
        max_player: player,
        deadline,
        nodes: 1,
    };

    let mut alpha = i32::MIN;
    let beta = i32::MAX;
    let mut best_move = fallback;
    let mut best_score = i32::MIN;

    for &mv in &candidates {
        board
            .place(mv, player)
            .expect("legal move generation should not fail");
        let score = search.node_score(board, mv, 1, alpha, beta, player.opponent());
        board.undo(mv);

        if score > best_score {
            best_score = score;
            best_move = mv;
        }
        if config.pruning {
            alpha = alpha.max(best_score);
        }
        if search.past_deadline() {
            break;
        }
    }

    board.restore_last_move(prior_last);

    Ok(SearchResult {
        best_move: Some(best_move),
        score: best_score,
        nodes: search.nodes,
    })
}

fn candidate_moves(board: &Board, config: &SearchConfig) -> Vec<Coord> {
    if config.move_ordering {
        center_ordered(board)
    } else {
        board.legal_moves().collect()
    }
}

struct Minimax<'a> {
    config: &'a SearchConfig,
    max_player: Player,
    deadline: Option<Instant>,
    nodes: u64,
}

impl Minimax<'_> {
    fn past_deadline(&self) -> bool {
        self.deadline.is_some_and(|deadline| Instant::now() >= deadline)
    }

    fn depth_exhausted(&self, depth: u32) -> bool {
        self.config.max_depth.is_some_and(|limit| depth >= limit)
    }

    fn terminal_score(&self, winner: Player, board: &Board) -> i32 {
        // More empties remaining means the win came sooner
        let remaining = board.empty_count() as i32;
        if winner == self.max_player {
            WIN_SCORE + remaining
        } else {
            -(WIN_SCORE + remaining)
        }
    }

    /// Score the position reached by `just_moved`, with `to_move` to play.
    fn node_score(
        &mut self,
        board: &mut Board,
        just_moved: Coord,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        to_move: Player,
    ) -> i32 {
        self.nodes += 1;

        // Terminal outcomes are always evaluated exactly, before any cutoff
        if let Some(winner) = board.check_win(just_moved) {
            return self.terminal_score(winner, board);
        }
        if board.is_full() {
            return 0;
        }

        if self.depth_exhausted(depth) || self.past_deadline() {
            return evaluate(board, self.max_player, &self.config.weights);
        }

        let candidates = candidate_moves(board, self.config);
        let maximizing = to_move == self.max_player;
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for mv in candidates {
            board
                .place(mv, to_move)
                .expect("legal move generation should not fail");
            let score = self.node_score(board, mv, depth + 1, alpha, beta, to_move.opponent());
            board.undo(mv);

            if maximizing {
                best = best.max(score);
                if self.config.pruning {
                    alpha = alpha.max(best);
                    if beta <= alpha {
                        break;
                    }
                }
            } else {
                best = best.min(score);
                if self.config.pruning {
                    beta = beta.min(best);
                    if beta <= alpha {
                        break;
                    }
                }
            }

            // Honor the budget between siblings as well as at node entry
            if self.past_deadline() {
                break;
            }
        }

        best
    }
}
