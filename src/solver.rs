//! Depth-limited minimax search for the computer's move

use log::{debug, trace};

use crate::{
    board::*, evaluator::*, CENTER, COMPUTER_WIN, ENDGAME_DEPTH, HUMAN_WIN, MIDDLEGAME_DEPTH,
    MIDDLEGAME_THRESHOLD, OPENING_DEPTH, OPENING_THRESHOLD, SIZE,
};

/// Returns the columns ordered from the middle outwards, as the middle
/// columns are usually better moves. Columns equally far from the
/// middle keep their left-to-right order.
pub const fn move_order() -> [usize; SIZE] {
    let mut move_order = [0; SIZE];
    let mut i = 0;
    while i < SIZE {
        move_order[i] = CENTER + (1 - i % 2) * (i / 2) - (i % 2) * (i / 2 + 1);
        i += 1;
    }
    move_order
}

/// Search depth for the current phase of the game
///
/// The fewer empty cells remain, the cheaper a full-width search
/// becomes, so later phases search deeper.
pub fn dynamic_depth(board: &Board) -> usize {
    let empty = board.empty_cells();
    if empty > OPENING_THRESHOLD {
        OPENING_DEPTH
    } else if empty > MIDDLEGAME_THRESHOLD {
        MIDDLEGAME_DEPTH
    } else {
        ENDGAME_DEPTH
    }
}

/// The column picked by a search and its backed-up score
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct SearchResult {
    pub column: Option<usize>,
    pub score: i32,
}

/// Minimax search with alpha-beta pruning over a borrowed board
///
/// # Position Scoring
/// Positions are always scored from the computer's point of view. A board the
/// computer has won scores [`COMPUTER_WIN`], a board either human has won scores
/// [`HUMAN_WIN`] and a full board without a winner scores 0. Any other position
/// at the depth limit is scored with [`score_position`].
///
/// Every speculative move is undone before the call that made it returns,
/// so the board is left exactly as it was found.
pub struct Solver<'a> {
    board: &'a mut Board,

    /// The number of nodes searched by this `Solver` so far (for diagnostics only)
    pub node_count: usize,
    /// Backed-up score of each root column searched, in search order (for diagnostics only)
    pub root_scores: Vec<(usize, i32)>,
    pruning: bool,
}

impl<'a> Solver<'a> {
    pub fn new(board: &'a mut Board) -> Self {
        Self {
            board,
            node_count: 0,
            root_scores: Vec::new(),
            pruning: true,
        }
    }

    /// Disables alpha-beta pruning, searching every node to full width
    pub fn without_pruning(mut self) -> Self {
        self.pruning = false;
        self
    }

    /// Searches to the depth given by [`dynamic_depth`]
    pub fn solve(&mut self) -> SearchResult {
        let depth = dynamic_depth(&*self.board);
        self.solve_depth(depth)
    }

    /// Searches `depth` plies ahead with the computer to move
    pub fn solve_depth(&mut self, depth: usize) -> SearchResult {
        self.root_scores.clear();
        let mut result = self.minimax(depth, i32::MIN, i32::MAX, true, true);
        // a terminal or depth 0 root still needs a playable column
        if result.column.is_none() {
            result.column = move_order().iter().copied().find(|&column| self.board.is_legal(column));
        }
        debug!(
            "searched {} nodes at depth {}: column {:?}, score {}",
            self.node_count, depth, result.column, result.score
        );
        result
    }

    // the terminal payoff of the current position, if it has one
    fn terminal_score(&self, legal: &[usize]) -> Option<i32> {
        if self.board.has_won(Marker::Computer) {
            Some(COMPUTER_WIN)
        } else if self.board.has_won(Marker::PlayerOne) || self.board.has_won(Marker::PlayerTwo) {
            Some(HUMAN_WIN)
        } else if legal.is_empty() {
            Some(0)
        } else {
            None
        }
    }

    // the human modelled as moving next: whichever is ahead, player two on a tie
    fn acting_human(&self) -> Marker {
        let board = &*self.board;
        if score_position(board, Marker::PlayerOne) > score_position(board, Marker::PlayerTwo) {
            Marker::PlayerOne
        } else {
            Marker::PlayerTwo
        }
    }

    fn minimax(
        &mut self,
        depth: usize,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
        root: bool,
    ) -> SearchResult {
        self.node_count += 1;

        let legal = self.board.legal_columns();
        if let Some(score) = self.terminal_score(&legal) {
            return SearchResult { column: None, score };
        }
        if depth == 0 {
            return SearchResult {
                column: None,
                score: score_position(&*self.board, Marker::Computer),
            };
        }

        let moves: Vec<usize> = move_order()
            .iter()
            .copied()
            .filter(|column| legal.contains(column))
            .collect();

        let marker = if maximizing {
            Marker::Computer
        } else {
            self.acting_human()
        };

        let mut best = SearchResult {
            column: Some(moves[0]),
            score: if maximizing { i32::MIN } else { i32::MAX },
        };

        for column in moves {
            let row = match self.board.drop(column, marker) {
                Ok(row) => row,
                Err(err) => unreachable!("move ordering yielded an unplayable column: {}", err),
            };
            let score = self.minimax(depth - 1, alpha, beta, !maximizing, false).score;
            self.board.clear(row, column);

            if root {
                trace!("column {}: score {}", column, score);
                self.root_scores.push((column, score));
            }

            if maximizing {
                if score > best.score {
                    best = SearchResult { column: Some(column), score };
                }
                alpha = alpha.max(best.score);
            } else {
                if score < best.score {
                    best = SearchResult { column: Some(column), score };
                }
                beta = beta.min(best.score);
            }

            if self.pruning && alpha >= beta {
                break;
            }
        }
        best
    }
}

/// Picks the computer's column for the current position
///
/// # Panics
/// Panics if the board has no legal columns. Callers must check for a
/// draw before asking for a move.
pub fn choose_computer_move(board: &mut Board) -> usize {
    assert!(
        !board.legal_columns().is_empty(),
        "choose_computer_move called on a board with no legal columns"
    );

    let result = Solver::new(board).solve();

    match result.column {
        Some(column) => column,
        None => unreachable!("search of a playable board always yields a column"),
    }
}
