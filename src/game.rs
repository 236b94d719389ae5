//! High-level game management
//!
//! The turn loop here consumes no I/O; console rendering, pacing, and
//! prompts live in the binary.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Coord, Player};
use crate::players::Agent;

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub coord: Coord,
    pub player: Player,
}

/// Outcome of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

impl GameOutcome {
    /// The winning player, if the game was not drawn
    pub fn winner(self) -> Option<Player> {
        match self {
            GameOutcome::Win(player) => Some(player),
            GameOutcome::Draw => None,
        }
    }
}

/// A complete game record with history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub size: usize,
    pub moves: Vec<Move>,
    pub outcome: Option<GameOutcome>,
}

impl Game {
    /// Create an empty game record on an nxn board.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidSize`] if `size < 3`.
    pub fn new(size: usize) -> Result<Self, crate::Error> {
        Board::new(size)?;
        Ok(Game {
            size,
            moves: Vec::new(),
            outcome: None,
        })
    }

    /// The player to move next; X opens and turns alternate.
    pub fn to_move(&self) -> Player {
        if self.moves.len() % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// Board state after the recorded moves, rebuilt by replay.
    ///
    /// # Errors
    ///
    /// Returns an error if any recorded move is invalid for the state it was
    /// played from, which indicates a corrupted record.
    pub fn current_board(&self) -> Result<Board, crate::Error> {
        let mut board = Board::new(self.size)?;
        for m in &self.moves {
            board.place(m.coord, m.player)?;
        }
        Ok(board)
    }

    /// Apply one move for the side to move, recording it and detecting a
    /// terminal state.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::GameOver`] once the game has an outcome, or
    /// the placement error for an occupied or out-of-range cell.
    pub fn play(&mut self, coord: Coord) -> Result<(), crate::Error> {
        if self.outcome.is_some() {
            return Err(crate::Error::GameOver);
        }

        let mut board = self.current_board()?;
        let player = self.to_move();
        board.place(coord, player)?;
        self.moves.push(Move { coord, player });

        if let Some(winner) = board.check_win(coord) {
            self.outcome = Some(GameOutcome::Win(winner));
        } else if board.is_full() {
            self.outcome = Some(GameOutcome::Draw);
        }
        Ok(())
    }
}

/// Play a full game on `board`, X moving first, alternating agents until a
/// win or draw. Returns the completed game record.
///
/// # Errors
///
/// Returns [`crate::Error::GameOver`] if the board is already terminal, or
/// any error an agent raises while choosing a move.
pub fn play_match(
    board: &mut Board,
    x_agent: &mut dyn Agent,
    o_agent: &mut dyn Agent,
) -> Result<Game, crate::Error> {
    if board.winner().is_some() || board.is_full() {
        return Err(crate::Error::GameOver);
    }

    let mut game = Game {
        size: board.size(),
        moves: Vec::new(),
        outcome: None,
    };
    let mut to_move = Player::X;

    loop {
        let agent: &mut dyn Agent = match to_move {
            Player::X => &mut *x_agent,
            Player::O => &mut *o_agent,
        };
        let coord = agent.choose(board, to_move)?;
        board.place(coord, to_move)?;
        game.moves.push(Move {
            coord,
            player: to_move,
        });

        if let Some(winner) = board.check_win(coord) {
            game.outcome = Some(GameOutcome::Win(winner));
            break;
        }
        if board.is_full() {
            game.outcome = Some(GameOutcome::Draw);
            break;
        }
        to_move = to_move.opponent();
    }

    Ok(game)
}
