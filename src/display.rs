use anyhow::Result;
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use connect4_three::{Board, Marker, SIZE};

pub fn marker_color(marker: Marker) -> Color {
    match marker {
        Marker::PlayerOne => Color::Red,
        Marker::PlayerTwo => Color::Blue,
        Marker::Computer => Color::Yellow,
        Marker::Empty => Color::DarkGrey,
    }
}

pub fn marker_name(marker: Marker) -> &'static str {
    match marker {
        Marker::PlayerOne => "Player 1",
        Marker::PlayerTwo => "Player 2",
        Marker::Computer => "Computer",
        Marker::Empty => "Nobody",
    }
}

/// Prints the name of `marker` in the colour of its pieces
pub fn print_name(marker: Marker) -> Result<()> {
    let mut stdout = stdout();
    stdout.queue(PrintStyledContent(
        style(marker_name(marker))
            .attribute(Attribute::Bold)
            .with(marker_color(marker)),
    ))?;
    stdout.flush()?;
    Ok(())
}

pub fn display(board: &Board) -> Result<()> {
    let mut stdout = stdout();

    let cols: String = (1..=SIZE).map(|x| format!("{:>2} ", x)).collect();
    stdout.queue(PrintStyledContent(style(cols + "\n")))?;

    for row in 0..SIZE {
        for column in 0..SIZE {
            stdout.queue(PrintStyledContent(
                style(" O ")
                    .attribute(Attribute::Bold)
                    .on(Color::Black)
                    .with(marker_color(board.get(row, column))),
            ))?;
        }
        stdout.queue(PrintStyledContent(style("\n")))?;
    }
    stdout.flush()?;
    Ok(())
}
