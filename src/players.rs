//! Move-selection agents
//!
//! Agents wrap a move-selection strategy behind one trait so the turn loop
//! and the benchmark drivers can mix strategies freely.

use std::time::{Duration, Instant};

use rand::{prelude::IndexedRandom, random, rngs::StdRng, SeedableRng};

use crate::board::{Board, Coord, Player};
use crate::search::{choose_move, SearchConfig};

/// A strategy that picks the next move for `player` on `board`
pub trait Agent {
    /// Choose a legal move. The board is only mutated transiently (search
    /// agents restore it before returning).
    fn choose(&mut self, board: &mut Board, player: Player) -> Result<Coord, crate::Error>;
}

/// Agent that plays uniformly at random among legal moves
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    /// Create with a randomly drawn seed
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(random()),
        }
    }

    /// Create with a fixed seed for reproducible games
    pub fn seeded(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn choose(&mut self, board: &mut Board, _player: Player) -> Result<Coord, crate::Error> {
        let moves: Vec<Coord> = board.legal_moves().collect();
        moves
            .choose(&mut self.rng)
            .copied()
            .ok_or(crate::Error::NoValidMoves)
    }
}

/// Agent backed by the minimax search engine.
///
/// Keeps per-move nodes-visited and wall-time histories so benchmark
/// drivers can report search effort without reaching into the engine.
pub struct SearchAgent {
    config: SearchConfig,
    nodes_history: Vec<u64>,
    move_times: Vec<Duration>,
}

impl SearchAgent {
    pub fn new(config: SearchConfig) -> Self {
        SearchAgent {
            config,
            nodes_history: Vec::new(),
            move_times: Vec::new(),
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Nodes visited by each move made so far
    pub fn nodes_history(&self) -> &[u64] {
        &self.nodes_history
    }

    /// Wall time spent on each move made so far
    pub fn move_times(&self) -> &[Duration] {
        &self.move_times
    }
}

impl Agent for SearchAgent {
    fn choose(&mut self, board: &mut Board, player: Player) -> Result<Coord, crate::Error> {
        let start = Instant::now();
        let result = choose_move(board, player, &self.config)?;
        self.move_times.push(start.elapsed());
        self.nodes_history.push(result.nodes);
        result.best_move.ok_or(crate::Error::NoValidMoves)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_agent_picks_legal_moves() {
        let mut board = Board::new(3).unwrap();
        let mut agent = RandomAgent::seeded(7);
        for _ in 0..5 {
            let mv = agent.choose(&mut board, Player::X).unwrap();
            board.place(mv, Player::X).unwrap();
        }
        assert_eq!(board.empty_count(), 4);
    }

    #[test]
    fn test_seeded_random_agents_agree() {
        let mut first = RandomAgent::seeded(42);
        let mut second = RandomAgent::seeded(42);
        let mut board = Board::new(4).unwrap();

        for _ in 0..6 {
            let a = first.choose(&mut board, Player::X).unwrap();
            let b = second.choose(&mut board, Player::X).unwrap();
            assert_eq!(a, b, "same seed must yield the same move sequence");
            board.place(a, Player::X).unwrap();
        }
    }

    #[test]
    fn test_random_agent_fails_on_full_board() {
        let mut board = Board::from_string("XOX XOO OXX").unwrap();
        let mut agent = RandomAgent::seeded(0);
        assert!(matches!(
            agent.choose(&mut board, Player::X),
            Err(crate::Error::NoValidMoves)
        ));
    }

    #[test]
    fn test_search_agent_records_histories() {
        let mut board = Board::new(3).unwrap();
        let mut agent = SearchAgent::new(SearchConfig::default().with_max_depth(2));

        let mv = agent.choose(&mut board, Player::X).unwrap();
        board.place(mv, Player::X).unwrap();
        let mv = agent.choose(&mut board, Player::O).unwrap();
        board.place(mv, Player::O).unwrap();

        assert_eq!(agent.nodes_history().len(), 2);
        assert_eq!(agent.move_times().len(), 2);
        assert!(agent.nodes_history().iter().all(|&n| n > 0));
    }
}
