//! A computer opponent for three-player Connect 4 on a 10x10 board
//!
//! Two humans and the computer take turns dropping pieces into columns;
//! the first to connect four in a line wins. The computer picks its
//! moves with a depth-limited minimax search using alpha-beta pruning
//! and a windowed pattern heuristic.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_three::{board::*, solver::choose_computer_move};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let mut board = Board::new();
//! for _ in 0..3 {
//!     board.drop(5, Marker::Computer)?;
//! }
//!
//! assert_eq!(choose_computer_move(&mut board), 5);
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

pub mod evaluator;

pub mod solver;

pub mod turns;


pub use board::{Board, Marker, MoveError, Window};
pub use solver::{choose_computer_move, dynamic_depth, SearchResult, Solver};
pub use turns::{ConstrainedRandom, FixedRotation, TurnMode, TurnOrder};

/// The width and height of the game board in tiles
pub const SIZE: usize = 10;

/// The number of tiles in a line needed to win
pub const WINDOW: usize = 4;

/// The middle column, favoured by move ordering and the heuristic
pub const CENTER: usize = SIZE / 2;

/// Payoff of a position the computer has already won
pub const COMPUTER_WIN: i32 = 1_000_000;

/// Payoff of a position either human has already won
pub const HUMAN_WIN: i32 = -1_000_000;

/// Search depth while more than `OPENING_THRESHOLD` cells are empty
pub const OPENING_DEPTH: usize = 3;
pub const OPENING_THRESHOLD: usize = 60;

/// Search depth while more than `MIDDLEGAME_THRESHOLD` cells are empty
pub const MIDDLEGAME_DEPTH: usize = 4;
pub const MIDDLEGAME_THRESHOLD: usize = 30;

/// Search depth for the rest of the game
pub const ENDGAME_DEPTH: usize = 5;

// a line must fit on the board
const_assert!(WINDOW <= SIZE);
const_assert!(CENTER < SIZE);
const_assert!(MIDDLEGAME_THRESHOLD < OPENING_THRESHOLD);
const_assert!(OPENING_THRESHOLD < SIZE * SIZE);
