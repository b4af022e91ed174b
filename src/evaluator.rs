//! Heuristic scoring of board positions

use crate::{board::*, CENTER, SIZE, WINDOW};

/// Weight of each piece a marker holds in the center column
pub const CENTER_WEIGHT: i32 = 6;

/// The single opposing marker considered when scoring `marker`
///
/// Only the two human markers are ever chosen, so the computer is
/// measured against player one and never against player two.
pub fn opponent(marker: Marker) -> Marker {
    if marker != Marker::PlayerOne {
        Marker::PlayerOne
    } else {
        Marker::PlayerTwo
    }
}

/// Scores a single window from the point of view of `marker`
pub fn evaluate_window(window: &Window, marker: Marker) -> i32 {
    let mut score = 0;
    let own = window.count(marker);
    let empty = window.count(Marker::Empty);

    if own == WINDOW {
        score += 100;
    } else if own == 3 && empty == 1 {
        score += 10;
    } else if own == 2 && empty == 2 {
        score += 5;
    }

    // penalise an opponent one move away from a line
    if window.count(opponent(marker)) == 3 && empty == 1 {
        score -= 8;
    }

    score
}

/// Scores the whole board for `marker` without modifying it
pub fn score_position(board: &Board, marker: Marker) -> i32 {
    let center = (0..SIZE)
        .filter(|&row| board.get(row, CENTER) == marker)
        .count() as i32;

    center * CENTER_WEIGHT
        + board
            .windows()
            .map(|window| evaluate_window(&window, marker))
            .sum::<i32>()
}
