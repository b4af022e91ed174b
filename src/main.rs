use anyhow::{anyhow, Result};
use log::info;

use std::io::{stdin, stdout, Write};

use connect4_three::*;

mod display;
use display::*;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // an optional seed makes random turn order reproducible
    let seed = match std::env::args().nth(1) {
        Some(arg) => Some(
            arg.parse::<u64>()
                .map_err(|_| anyhow!("could not parse '{}' as a seed", arg))?,
        ),
        None => None,
    };

    let mut board = Board::new();
    let stdin = stdin();

    println!("Welcome to Connect 4!");
    for &marker in Marker::PARTICIPANTS.iter() {
        print_name(marker)?;
        println!();
    }

    print!("Choose turn order mode: [1] Random, [2] Normal: ");
    stdout().flush()?;
    let mut buffer = String::new();
    stdin.read_line(&mut buffer)?;
    let mode = match buffer.trim() {
        "2" => TurnMode::Normal,
        _ => TurnMode::Random,
    };
    info!("playing with {:?} turn order, seed {:?}", mode, seed);
    let mut turns = mode.sequencer(seed);

    // game loop
    loop {
        display(&board)?;

        let player = turns.next_actor();
        println!();
        print_name(player)?;
        println!("'s turn");

        if player == Marker::Computer {
            println!("Computer is thinking...");
            stdout().flush()?;

            let column = choose_computer_move(&mut board);
            board.drop(column, Marker::Computer)?;
            println!("Computer chose column {}", column + 1);
        } else {
            loop {
                print!("Enter a column (1-{}): ", SIZE);
                stdout().flush()?;
                let mut input_str = String::new();
                if stdin.read_line(&mut input_str)? == 0 {
                    return Err(anyhow!("input closed before the game finished"));
                }

                let column = match input_str.trim().parse::<usize>() {
                    Ok(column @ 1..=SIZE) => column - 1,
                    _ => {
                        println!("Please enter a number between 1 and {}", SIZE);
                        continue;
                    }
                };
                match board.drop(column, player) {
                    Ok(_) => break,
                    // try the move again
                    Err(err) => println!("{}", err),
                }
            }
        }

        // end states
        if board.has_won(player) {
            display(&board)?;
            println!();
            print_name(player)?;
            println!(" wins!");
            break;
        }
        if board.is_draw() {
            display(&board)?;
            println!("\nIt's a tie!");
            break;
        }
    }
    Ok(())
}
