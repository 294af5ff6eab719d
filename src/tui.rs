//! The textual user interface: a human plays White against the engine.

use std::io::{self, Write};

use crossterm::style::{Color as TermColor, Stylize};
use rand::seq::SliceRandom;

use crate::config::{Settings, SettingsError};
use crate::constants::Color;
use crate::engine::Engine;
use crate::game::{Game, GameStatus};
use crate::r#move::{Move, Position};

const ENGINE_DEPTH: i32 = 4;

/// Runs the main game loop for the text-based UI.
pub fn run() -> Result<(), SettingsError> {
    let mut game = Game::new(Settings::international())?;
    let mut engine = Engine::new(ENGINE_DEPTH);

    println!("--- Draughts Engine in Rust ---");
    println!("Enter moves as origin-destination (e.g. b4-c5), 'random' to let");
    println!("the crate pick for you, or 'exit' to quit.");

    loop {
        println!();
        print_board(&game);

        if let GameStatus::Won(winner) = game.status() {
            println!("{:?} has no moves left. {winner:?} wins!", game.current_player());
            break;
        }
        let legal_moves = game.legal_moves();

        if game.current_player() == Color::White {
            print!("Your move: ");
            io::stdout().flush().expect("flush failed!");

            let mut input = String::new();
            io::stdin().read_line(&mut input).expect("stdin closed");
            let input = input.trim();

            if input == "exit" {
                break;
            }
            if input == "random" {
                // The driver picks for the player, like the original
                // simulation loop did.
                let mv = legal_moves
                    .choose(&mut rand::thread_rng())
                    .expect("checked non-empty above");
                println!("Random move: {}", notation(mv));
                let mv = mv.clone();
                game.make_move(&mv);
                continue;
            }

            match parse_move_string(input, &legal_moves) {
                Some(mv) => game.make_move(&mv),
                None => {
                    println!("Invalid or illegal move. Please try again.");
                    continue;
                }
            }
        } else {
            println!("Computer is thinking...");
            let (best_move, score) = engine.search(&mut game);
            match best_move {
                Some(mv) => {
                    println!("Computer moves: {} (score: {score})", notation(&mv));
                    game.make_move(&mv);
                }
                None => {
                    println!("Computer has no move. Game over?");
                    break;
                }
            }
        }
    }
    Ok(())
}

/// Prints the board with crossterm styling, honoring the configured
/// light-square orientation.
fn print_board(game: &Game) {
    let board = game.board();
    let settings = game.settings();
    for y in (0..board.height()).rev() {
        print!("{:>2} ", y + 1);
        for x in 0..board.width() {
            let pos = Position::new(x, y);
            let bg = if is_light_square(settings, pos) {
                TermColor::Grey
            } else {
                TermColor::DarkGrey
            };
            let glyph = format!("{} ", board.get(pos).to_char());
            let styled = match board.get(pos).color() {
                Some(Color::White) => glyph.with(TermColor::White).bold(),
                Some(Color::Black) => glyph.with(TermColor::Blue).bold(),
                None => glyph.with(bg),
            };
            print!("{}", styled.on(bg));
        }
        println!();
    }
    print!("   ");
    for x in 0..board.width() {
        print!("{} ", (b'a' + x as u8) as char);
    }
    println!();
    println!("To move: {:?}", game.current_player());
}

fn is_light_square(settings: &Settings, pos: Position) -> bool {
    let same_parity = (pos.x + pos.y) % 2 == (settings.width - 1) % 2;
    same_parity == settings.bottom_right_light
}

/// Parses "b4-c5" style input and looks the move up in the legal list, so
/// only generator-approved moves ever reach the game.
fn parse_move_string(move_str: &str, legal_moves: &[Move]) -> Option<Move> {
    let (from_str, to_str) = move_str.split_once('-')?;
    let from = parse_square(from_str)?;
    let to = parse_square(to_str)?;

    legal_moves
        .iter()
        .find(|mv| mv.origin == from && mv.dest == to)
        .cloned()
}

fn parse_square(sq: &str) -> Option<Position> {
    let mut chars = sq.chars();
    let file = chars.next()?;
    if !file.is_ascii_lowercase() {
        return None;
    }
    let rank: i32 = chars.as_str().parse().ok()?;
    if rank < 1 {
        return None;
    }
    Some(Position::new((file as u8 - b'a') as i32, rank - 1))
}

fn notation(mv: &Move) -> String {
    let sq = |pos: Position| format!("{}{}", (b'a' + pos.x as u8) as char, pos.y + 1);
    if mv.is_capture() {
        format!("{}x{} ({} taken)", sq(mv.origin), sq(mv.dest), mv.takes.len())
    } else {
        format!("{}-{}", sq(mv.origin), sq(mv.dest))
    }
}
