//! Generalized n-in-a-row game engine
//!
//! This crate provides:
//! - Mutable nxn board with incremental last-move win detection
//! - Alpha-beta minimax search with depth and soft time cutoffs
//! - Center-first move ordering and a configurable cutoff heuristic
//! - Random and search-backed agents with a simple turn loop

pub mod board;
pub mod error;
pub mod eval;
pub mod game;
pub mod lines;
pub mod ordering;
pub mod players;
pub mod search;

pub use board::{Board, Cell, Coord, Player};
pub use error::{Error, Result};
pub use eval::{evaluate, HeuristicWeights};
pub use game::{play_match, Game, GameOutcome, Move};
pub use lines::{Line, LineTally};
pub use ordering::{center_distance, center_ordered};
pub use players::{Agent, RandomAgent, SearchAgent};
pub use search::{choose_move, SearchConfig, SearchResult, WIN_SCORE};
