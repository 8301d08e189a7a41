//! Game orchestration between two seats.
//!
//! Drives a [`Game`] round after round, asking humans for moves through the
//! console and the oracle for the computer's, then reports statistics.

use crate::console::Console;
use crate::interrupt::Interrupt;
use crate::players::{self, Seat};
use anyhow::{Context, Result, ensure};
use rand::rngs::StdRng;
use std::io::{BufRead, Write};
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument};
use xo::{Conclusion, Event, Game, InvalidMoveReason, Mark, Statistics};

const PROMPT: &str = "> ";

/// How a session of play came to an end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Ending {
    /// The requested rounds were played, or the human declined another.
    Finished,
    /// Input ran out or Ctrl-C was pressed mid-session.
    Interrupted,
}

/// Plays rounds between two seats over a console.
pub struct Orchestrator<R, W> {
    first: Seat,
    second: Seat,
    console: Console<R, W>,
    rng: StdRng,
    interrupt: Interrupt,
    humans: usize,
}

impl<R: BufRead, W: Write> Orchestrator<R, W> {
    /// Creates an orchestrator; `first` moves first in the opening round.
    ///
    /// # Errors
    ///
    /// Fails if both seats play the same mark.
    pub fn new(first: Seat, second: Seat, console: Console<R, W>, rng: StdRng) -> Result<Self> {
        ensure!(
            first.mark != second.mark,
            "both players cannot play with the same mark: {}",
            first.mark
        );
        let humans = [first, second]
            .iter()
            .filter(|seat| seat.controller.is_human())
            .count();

        Ok(Self {
            first,
            second,
            console,
            rng,
            interrupt: Interrupt::new(),
            humans,
        })
    }

    /// Stops play at the next turn or prompt once `interrupt` is raised.
    pub fn with_interrupt(mut self, interrupt: Interrupt) -> Self {
        self.interrupt = interrupt;
        self
    }

    fn seat(&self, mark: Mark) -> Seat {
        if self.first.mark == mark {
            self.first
        } else {
            self.second
        }
    }

    /// Runs the session and prints statistics.
    ///
    /// Computer-only sessions play `rounds` games; sessions with a human
    /// continue until the human stops or input ends.
    #[instrument(skip(self))]
    pub fn run(&mut self, rounds: u32) -> Result<Statistics> {
        info!(humans = self.humans, "starting session");
        let started = Instant::now();

        let mut game = Game::new();
        game.start(self.first.mark)?;

        if self.play(&mut game, rounds)? == Ending::Interrupted {
            self.console.writeln("")?;
            if self.humans > 0 {
                self.console
                    .writeln("We're deeply saddened to see you go, ;(.")?;
            }
        }

        let stats = *game.statistics();
        self.show_statistics(&stats, started.elapsed())?;

        if self.humans > 0 {
            self.console.writeln("")?;
            self.console
                .writeln("Thank you for playing. Please come back anytime.")?;
        }

        Ok(stats)
    }

    fn play(&mut self, game: &mut Game, mut rounds: u32) -> Result<Ending> {
        let mut playing = if self.humans == 0 {
            rounds > 0
        } else {
            self.console.writeln("Welcome to Tic-tac-toe")?;
            self.console.writeln("Play as many games as you want")?;
            self.console.writeln("Press Ctrl-C to exit at any time")?;
            self.console.writeln("")?;
            true
        };

        while playing {
            if self.interrupt.is_raised() {
                return Ok(Ending::Interrupted);
            }
            let Some(event) = self.play_turn(game)? else {
                return Ok(Ending::Interrupted);
            };
            debug!(last_move = ?event.last_move(), "turn played");

            if let Event::GameOver { conclusion, .. } = &event {
                self.announce(game, conclusion)?;

                if self.humans == 0 {
                    rounds -= 1;
                    playing = rounds > 0;
                    if !playing {
                        self.console.writeln("")?;
                    }
                } else {
                    match self.ask_to_play_again()? {
                        Some(again) => playing = again,
                        None => return Ok(Ending::Interrupted),
                    }
                }

                if playing {
                    game.restart()?;
                }
            }
        }

        Ok(Ending::Finished)
    }

    /// Plays one move. `None` means input ended while waiting for a human.
    fn play_turn(&mut self, game: &mut Game) -> Result<Option<Event>> {
        let mark = game.turn().context("game has not started")?;
        let seat = self.seat(mark);

        if seat.controller.is_human() {
            if self.humans == 2 {
                self.console.writeln(&format!("{}'s turn", mark))?;
            } else {
                self.console.writeln(&format!("Your turn ({})", mark))?;
            }
            let board = game.board().context("game has not started")?.to_ascii();
            self.console.writeln(&board)?;

            loop {
                let Some((row, col)) = self.read_move(game)? else {
                    return Ok(None);
                };

                // negative input can only be off the board
                let event = match (usize::try_from(row), usize::try_from(col)) {
                    (Ok(row), Ok(col)) => game.moveto(row, col)?,
                    _ => Event::InvalidMove {
                        reason: InvalidMoveReason::OutOfBounds,
                    },
                };

                match event {
                    Event::InvalidMove { reason } => {
                        debug!(row, col, %reason, "rejected move");
                        let message = match reason {
                            InvalidMoveReason::OutOfBounds => {
                                "Sorry, but that move was not on the board"
                            }
                            InvalidMoveReason::Occupied => {
                                "Sorry, but that position is already taken"
                            }
                        };
                        self.console.writeln(message)?;
                        self.console.writeln("Please, try again")?;
                    }
                    event => return Ok(Some(event)),
                }
            }
        } else {
            let board = game.board().context("game has not started")?;
            let choice = players::computer_move(board, mark, &mut self.rng)?;
            let event = game.moveto(choice.row, choice.col)?;

            if self.humans == 1 {
                self.console
                    .writeln(&format!("The computer played at {}", choice))?;
            }

            Ok(Some(event))
        }
    }

    fn announce(&mut self, game: &Game, conclusion: &Conclusion) -> Result<()> {
        let mark = game.turn().context("game has not started")?;
        let seat = self.seat(mark);

        match conclusion {
            Conclusion::Winner { .. } => match self.humans {
                2 => self
                    .console
                    .writeln(&format!("Congratulations! {} won.", mark))?,
                1 if seat.controller.is_human() => {
                    self.console.writeln("Congratulations! You won.")?
                }
                1 => self
                    .console
                    .writeln("The computer won. Better luck next time.")?,
                _ => self.console.write(&mark.to_string())?,
            },
            Conclusion::Squashed => {
                if self.humans > 0 {
                    self.console.writeln("Game squashed.")?;
                } else {
                    self.console.write(".")?;
                }
            }
        }

        if self.humans > 0 {
            let board = game.board().context("game has not started")?.to_ascii();
            self.console.writeln(&board)?;
        }
        Ok(())
    }

    /// Reads `"r c"` from the console. `None` means input ended.
    fn read_move(&mut self, game: &Game) -> Result<Option<(i64, i64)>> {
        let mut show_help = true;

        loop {
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            if let Some(mv) = players::parse_move(&line) {
                return Ok(Some(mv));
            }

            if show_help {
                show_help = false;
                self.console.writeln(
                    "Please enter a move in the format \"r c\", where r and c are numbers for e.g.",
                )?;
                if let Some((row, col)) = game.board().and_then(players::first_open_position) {
                    self.console.writeln(&format!("{}{} {}", PROMPT, row, col))?;
                }
            }
        }
    }

    /// Prompts for a line. `None` means input ended or play was interrupted.
    fn read_line(&mut self) -> Result<Option<String>> {
        let line = self.console.getln(PROMPT)?;
        if self.interrupt.is_raised() {
            return Ok(None);
        }
        Ok(line)
    }

    fn ask_to_play_again(&mut self) -> Result<Option<bool>> {
        self.console.writeln("Do you want to play again? (Y/n)")?;

        loop {
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match line.trim().to_lowercase().as_str() {
                "" | "y" | "yes" => return Ok(Some(true)),
                "n" | "no" => return Ok(Some(false)),
                _ => {}
            }
        }
    }

    fn show_statistics(&mut self, stats: &Statistics, elapsed: Duration) -> Result<()> {
        self.console.writeln("")?;
        self.console.writeln("Game statistics")?;
        self.console.writeln("---------------")?;
        if self.humans == 0 {
            self.console.writeln(&format!(
                "Total games played: {} ({:.3} secs)",
                stats.total(),
                elapsed.as_secs_f64()
            ))?;
        } else {
            self.console
                .writeln(&format!("Total games played: {}", stats.total()))?;
        }
        self.console
            .writeln(&format!("Number of times x won: {}", stats.x_wins()))?;
        self.console
            .writeln(&format!("Number of times o won: {}", stats.o_wins()))?;
        self.console
            .writeln(&format!("Number of squashed games: {}", stats.squashed()))?;
        Ok(())
    }
}
