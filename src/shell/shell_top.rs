//! Piece query shell: a line-oriented front end for the piece rules.
//!
//! Reads one command per line, keeps a table of named pieces, and answers
//! movement/capture questions about them. Replies are single protocol lines
//! (`placed`, `canmove`, `cankill`, `moves`, `piece`, `readyok`); anything
//! diagnostic goes out as `info string ...` so a driving program can skip it.
//! The piece table is not a board: pieces may share a square and nothing
//! blocks anything.

use std::collections::BTreeMap;
use std::io::{self, BufRead, Write};

use tracing::{debug, info};

use crate::pieces::any_piece::AnyPiece;
use crate::pieces::board_location::BoardLocation;
use crate::pieces::chess_piece::ChessPiece;
use crate::pieces::piece_class::PieceClass;
use crate::pieces::piece_color::Color;
use crate::utils::algebraic::{algebraic_to_location, location_to_algebraic};
use crate::utils::movement_map::{reachable_squares, render_movement_map};

pub fn run_stdio_loop() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut shell = ShellState::new();

    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = shell.handle_command(&line, &mut stdout)?;
        stdout.flush()?;
        if should_quit {
            break;
        }
    }

    info!(pieces = shell.pieces.len(), "shell loop finished");
    Ok(())
}

#[derive(Debug, Default)]
pub struct ShellState {
    pieces: BTreeMap<String, AnyPiece>,
    debug_mode: bool,
}

impl ShellState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handles one command line. Returns `Ok(true)` when the shell should exit.
    pub fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        if self.debug_mode {
            writeln!(out, "info string debug received '{}'", trimmed)?;
        }
        debug!(command = trimmed, "shell command");

        let parts: Vec<&str> = trimmed.split_whitespace().collect();
        let args = &parts[1..];

        match parts[0] {
            "place" => match self.handle_place(args) {
                Ok(name) => writeln!(out, "placed {}", name)?,
                Err(err) => writeln!(out, "info string placement error: {}", err)?,
            },
            "canmove" => match self.handle_can_move(args) {
                Ok(answer) => writeln!(out, "canmove {}", answer)?,
                Err(err) => writeln!(out, "info string canmove error: {}", err)?,
            },
            "cankill" => match self.handle_can_kill(args) {
                Ok(answer) => writeln!(out, "cankill {}", answer)?,
                Err(err) => writeln!(out, "info string cankill error: {}", err)?,
            },
            "moves" => match self.handle_moves(args) {
                Ok(squares) => {
                    if squares.is_empty() {
                        writeln!(out, "moves")?;
                    } else {
                        writeln!(out, "moves {}", squares.join(" "))?;
                    }
                }
                Err(err) => writeln!(out, "info string moves error: {}", err)?,
            },
            "show" => match self.lookup_single(args) {
                Ok(piece) => writeln!(out, "{}", render_movement_map(piece, piece.class()))?,
                Err(err) => writeln!(out, "info string show error: {}", err)?,
            },
            "pieces" => {
                for (name, piece) in &self.pieces {
                    writeln!(out, "{}", describe_piece(name, piece))?;
                }
            }
            "remove" => match args {
                [name] => {
                    if self.pieces.remove(*name).is_none() {
                        writeln!(out, "info string remove error: unknown piece {}", name)?;
                    }
                }
                _ => writeln!(out, "info string remove error: expected remove <name>")?,
            },
            "clear" => self.pieces.clear(),
            "isready" => writeln!(out, "readyok")?,
            "debug" => match args {
                ["on"] => self.debug_mode = true,
                ["off"] => self.debug_mode = false,
                _ => writeln!(out, "info string debug error: expected debug on|off")?,
            },
            "quit" => return Ok(true),
            other => writeln!(out, "info string unknown command: {}", other)?,
        }

        Ok(false)
    }

    fn handle_place(&mut self, args: &[&str]) -> Result<String, String> {
        if args.len() < 4 {
            return Err("expected place <name> <kind> <color> <square>".to_owned());
        }
        let name = args[0];
        let class = PieceClass::from_name(args[1])?;
        let color = Color::from_name(args[2])?;
        let (row, column) = parse_square(&args[3..])?;
        let piece = AnyPiece::new(class, row, column, color).map_err(|e| e.to_string())?;
        self.pieces.insert(name.to_owned(), piece);
        Ok(name.to_owned())
    }

    fn handle_can_move(&self, args: &[&str]) -> Result<bool, String> {
        let Some((name, square)) = args.split_first() else {
            return Err("expected canmove <name> <square>".to_owned());
        };
        let piece = self.lookup(name)?;
        let (row, column) = parse_square(square)?;
        Ok(piece.can_move(row, column))
    }

    fn handle_can_kill(&self, args: &[&str]) -> Result<bool, String> {
        match args {
            [attacker, target] => {
                let attacker = self.lookup(attacker)?;
                let target = self.lookup(target)?;
                Ok(attacker.can_kill(target))
            }
            _ => Err("expected cankill <name> <other>".to_owned()),
        }
    }

    fn handle_moves(&self, args: &[&str]) -> Result<Vec<String>, String> {
        let piece = self.lookup_single(args)?;
        reachable_squares(piece)
            .into_iter()
            .map(|(row, column)| location_to_algebraic(row, column))
            .collect()
    }

    fn lookup_single(&self, args: &[&str]) -> Result<&AnyPiece, String> {
        match args {
            [name] => self.lookup(name),
            _ => Err("expected a single piece name".to_owned()),
        }
    }

    fn lookup(&self, name: &str) -> Result<&AnyPiece, String> {
        self.pieces
            .get(name)
            .ok_or_else(|| format!("unknown piece {name}"))
    }
}

/// Accepts either one algebraic token (`e4`) or two integers (`3 4`).
/// Integers are not range-checked so off-board queries can be asked.
fn parse_square(args: &[&str]) -> Result<BoardLocation, String> {
    match args {
        [square] => algebraic_to_location(square),
        [row, column] => {
            let row = row
                .parse::<i32>()
                .map_err(|e| format!("invalid row {row}: {e}"))?;
            let column = column
                .parse::<i32>()
                .map_err(|e| format!("invalid column {column}: {e}"))?;
            Ok((row, column))
        }
        _ => Err("expected <square> or <row> <column>".to_owned()),
    }
}

fn describe_piece(name: &str, piece: &AnyPiece) -> String {
    let square = location_to_algebraic(piece.row(), piece.column())
        .unwrap_or_else(|_| format!("{} {}", piece.row(), piece.column()));
    format!(
        "piece {} {} {} {}",
        name,
        piece.class(),
        piece.color().to_string().to_lowercase(),
        square
    )
}

#[cfg(test)]
mod tests {
    use super::ShellState;

    fn run(shell: &mut ShellState, script: &[&str]) -> String {
        let mut out = Vec::new();
        for line in script {
            shell
                .handle_command(line, &mut out)
                .expect("writing to a Vec never fails");
        }
        String::from_utf8(out).expect("shell output is UTF-8")
    }

    #[test]
    fn answers_movement_queries() {
        let mut shell = ShellState::new();
        let out = run(
            &mut shell,
            &[
                "place q queen white e4",
                "canmove q h7",
                "canmove q 7 5",
                "canmove q 8 8",
                "isready",
            ],
        );
        assert_eq!(out, "placed q\ncanmove true\ncanmove false\ncanmove false\nreadyok\n");
    }

    #[test]
    fn reports_placement_errors_without_exiting() {
        let mut shell = ShellState::new();
        let out = run(
            &mut shell,
            &["place p pawn white 0 4", "place k king black 8 8", "pieces"],
        );
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("info string placement error: White pawn"));
        assert!(lines[1].contains("out of bounds"));
    }

    #[test]
    fn pawn_capture_follows_override() {
        let mut shell = ShellState::new();
        let out = run(
            &mut shell,
            &[
                "place w pawn white 4 4",
                "place front pawn black 5 4",
                "place diag pawn black 5 5",
                "cankill w front",
                "cankill w diag",
                "moves w",
            ],
        );
        assert!(out.ends_with("cankill false\ncankill true\nmoves e6\n"));
    }

    #[test]
    fn lists_removes_and_quits() {
        let mut shell = ShellState::new();
        let out = run(
            &mut shell,
            &[
                "place b bishop black c8",
                "place n knight w b1",
                "remove b",
                "remove b",
                "pieces",
                "bogus",
            ],
        );
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[2], "info string remove error: unknown piece b");
        assert_eq!(lines[3], "piece n knight white b1");
        assert_eq!(lines[4], "info string unknown command: bogus");

        let mut out = Vec::new();
        assert!(shell.handle_command("quit", &mut out).expect("write"));
    }

    #[test]
    fn debug_mode_echoes_commands() {
        let mut shell = ShellState::new();
        let out = run(&mut shell, &["debug on", "isready", "debug off", "isready"]);
        assert_eq!(
            out,
            "info string debug received 'isready'\nreadyok\ninfo string debug received 'debug off'\nreadyok\n"
        );
    }
}
