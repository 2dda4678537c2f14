//! Simple interactive CLI mode
//!
//! Text-based game without the TUI. The loop itself only talks to a
//! [`Renderer`] and a `BufRead`, so it runs headless in tests.

use crate::catalog::Catalog;
use crate::game::{Difficulty, MAX_ATTEMPTS, Session, SessionStatus, select_secret};
use crate::output::{Page, Renderer, TerminalRenderer};
use anyhow::Result;
use std::io::{self, BufRead, Write};
use std::time::Duration;

/// How a single game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum GameOutcome {
    Won,
    Lost,
    Quit,
}

/// Run the simple interactive CLI mode
///
/// # Errors
/// Returns an error on I/O failure or when the chosen difficulty has no
/// eligible country in the catalog.
pub fn run_simple(catalog: &Catalog, win_delay: Duration) -> Result<()> {
    let mut renderer = TerminalRenderer::new(win_delay);
    let mut rng = rand::rng();

    loop {
        renderer.show_page(Page::Landing);
        println!("Guess the secret country name, one letter per cell.");
        println!("Green = right letter, right spot. Yellow = right letter, wrong spot.\n");

        let Some(name) = read_player_name(&mut renderer)? else {
            return Ok(());
        };

        renderer.show_page(Page::Difficulty);
        for (i, difficulty) in Difficulty::ALL.iter().enumerate() {
            println!(
                "  {}. {:<13} ({})",
                i + 1,
                difficulty.to_string(),
                difficulty.bounds_label()
            );
        }

        let difficulty = loop {
            let Some(input) = get_user_input("Difficulty (1/2/3)")? else {
                return Ok(());
            };
            if let Some(difficulty) = Difficulty::from_name(&input) {
                break difficulty;
            }
            renderer.show_message("Please pick 1, 2, or 3.");
        };

        let record = select_secret(catalog, difficulty, &mut rng)?.clone();
        let mut session = Session::new(&name, record, difficulty)?;

        renderer.show_page(Page::Game);
        println!(
            "The country has {} letters. You have {MAX_ATTEMPTS} attempts.",
            session.secret().len()
        );
        println!("Type 'hint' for a hint, 'quit' to exit.");
        renderer.render_grid(MAX_ATTEMPTS, session.secret().len());

        let outcome = run_game(&mut session, &mut renderer, &mut io::stdin().lock())?;
        if outcome == GameOutcome::Quit {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        }

        renderer.show_page(Page::GameOver);
        let Some(again) = get_user_input("Play again? (yes/no)")? else {
            return Ok(());
        };
        match again.to_lowercase().as_str() {
            "yes" | "y" => {}
            _ => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
        }
    }
}

/// Drive one session to its end
///
/// Reads guesses from `input` until the session reaches a terminal state or
/// the player quits. Rejected guesses surface as renderer messages and do not
/// consume attempts.
pub(crate) fn run_game<R: Renderer>(
    session: &mut Session,
    renderer: &mut R,
    input: &mut dyn BufRead,
) -> io::Result<GameOutcome> {
    while !session.is_over() {
        print!(
            "Guess {}/{MAX_ATTEMPTS} ({} letters): ",
            session.attempts_used() + 1,
            session.secret().len()
        );
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(GameOutcome::Quit);
        }
        let line = line.trim();

        match line {
            "quit" | "q" | "exit" => return Ok(GameOutcome::Quit),
            "hint" | "h" => {
                if let Some(hint) = session.reveal_hint() {
                    renderer.show_hint(&hint);
                } else {
                    renderer.show_message("The hint was already revealed.");
                }
            }
            guess => {
                let scored = session.submit(guess).map(|a| a.feedback.clone());
                match scored {
                    Ok(feedback) => {
                        let row = session.attempts_used() - 1;
                        renderer.update_row(row, &feedback);
                    }
                    Err(err) => renderer.show_message(&err.to_string()),
                }
            }
        }
    }

    match session.status() {
        SessionStatus::Won => {
            renderer.show_win(session);
            Ok(GameOutcome::Won)
        }
        SessionStatus::Lost => {
            renderer.show_loss(session);
            Ok(GameOutcome::Lost)
        }
        SessionStatus::InProgress => unreachable!("loop exits only on terminal state"),
    }
}

/// Prompt for the player name until it is non-empty
///
/// Returns `None` on end of input.
fn read_player_name(renderer: &mut impl Renderer) -> io::Result<Option<String>> {
    loop {
        let Some(name) = get_user_input("Your name")? else {
            return Ok(None);
        };
        if name.trim().is_empty() {
            renderer.show_message("Please enter your name.");
        } else {
            return Ok(Some(name));
        }
    }
}

/// Get user input with a prompt; `None` means end of input
fn get_user_input(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}
