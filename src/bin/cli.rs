use std::error::Error;
use std::io::Read;

use clap::Parser;

use connect_four::game::connect_four::{ConnectFour, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use connect_four::game::error::GameError;
use connect_four::game::game::{FinishedState, Game, GameState};
use connect_four::game::grid::{Grid, GridIndex};
use connect_four::game::player_pair::PlayerSlot;

/// Plays a two-player Connect Four session from a list of column indices.
#[derive(Parser)]
struct Args {
    /// Board height in rows.
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: usize,
    /// Board width in columns.
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: usize,
    /// 0-based columns to play in turn order; read from stdin when empty.
    columns: Vec<usize>,
}

fn render(board: &Grid<Option<PlayerSlot>>) -> String {
    let mut out = String::new();
    for row in 0..board.rows() {
        for col in 0..board.cols() {
            out.push(match board[GridIndex::new(row, col)] {
                None => '.',
                Some(PlayerSlot::First) => 'x',
                Some(PlayerSlot::Second) => 'o',
            });
        }
        out.push('\n');
    }
    out
}

fn read_columns_from_stdin() -> Result<Vec<usize>, Box<dyn Error>> {
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    input
        .split_whitespace()
        .map(|token| Ok(token.parse()?))
        .collect()
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let columns = if args.columns.is_empty() {
        read_columns_from_stdin()?
    } else {
        args.columns
    };

    let mut game = ConnectFour::with_dimensions("red", "gold", args.height, args.width)?;
    for col in columns {
        match game.update(col) {
            Ok(outcome) => {
                println!(
                    "{} ({}) dropped into column {}, landed at {}",
                    outcome.player,
                    game.player(outcome.player),
                    col,
                    outcome.cell
                );
                print!("{}", render(game.board()));
                match outcome.state {
                    GameState::Turn(_) => {}
                    GameState::Finished(FinishedState::Win(winner)) => {
                        println!("the {} player won!", game.player(winner));
                        break;
                    }
                    GameState::Finished(FinishedState::Draw) => {
                        println!("tie!");
                        break;
                    }
                }
            }
            Err(err @ (GameError::InvalidColumn { .. } | GameError::ColumnIsFull { .. })) => {
                println!("move rejected: {}", err);
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}
