//! Text-mode rounds
//!
//! Plays a practice or daily round on stdin/stdout, or from a scripted string of
//! letters for non-interactive use.

use crate::error::{GameError, Result};
use crate::game::{Clock, PlaySessionCoordinator, RoundSummary, SoundEvent};
use crate::output::{print_board, print_guess_feedback, print_round_summary};
use chrono::NaiveDate;
use colored::Colorize;
use rand::Rng;
use std::io::{self, Write};

/// Where guesses come from
#[derive(Debug, Clone, Copy)]
pub enum RoundInput<'a> {
    /// Every character is one guess, in order
    Scripted(&'a str),
    /// Read lines from stdin until the round ends or the player quits
    Interactive,
}

/// One line of interactive input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Line<'a> {
    Empty,
    NewWord,
    Quit,
    Guesses(&'a str),
}

impl<'a> Line<'a> {
    /// Commands start with `:` so plain letter runs such as `new` stay guesses
    fn parse(line: &'a str) -> Self {
        match line.trim() {
            "" => Self::Empty,
            ":new" | ":n" => Self::NewWord,
            ":quit" | ":q" | ":exit" => Self::Quit,
            letters => Self::Guesses(letters),
        }
    }
}

/// Start a practice round and play it
///
/// Returns the summary if the round reached an end, `None` if it was abandoned.
///
/// # Errors
///
/// Returns an error for an unknown category, an empty catalog, a storage failure or
/// an I/O error on stdin.
pub fn run_practice<C: Clock, R: Rng>(
    coordinator: &mut PlaySessionCoordinator<C, R>,
    category: Option<&str>,
    input: RoundInput<'_>,
    sound: bool,
) -> Result<Option<RoundSummary>> {
    let round = coordinator.start_practice(category)?;
    let label = round.category().unwrap_or("all categories").to_string();
    ring(&[SoundEvent::Start], sound);

    print_banner("Practice");
    println!("Category: {}", label.bright_cyan());
    drive_round(coordinator, input, sound)
}

/// Start the daily round for `today` and play it
///
/// # Errors
///
/// Returns `GameError::AlreadyPlayedToday` if today's round was already started,
/// or any error from the round itself.
pub fn run_daily<C: Clock, R: Rng>(
    coordinator: &mut PlaySessionCoordinator<C, R>,
    today: NaiveDate,
    input: RoundInput<'_>,
    sound: bool,
) -> Result<Option<RoundSummary>> {
    coordinator.start_daily(today)?;
    ring(&[SoundEvent::Start], sound);

    print_banner("Daily Challenge");
    println!("Date: {}", today.to_string().bright_cyan());
    drive_round(coordinator, input, sound)
}

fn print_banner(title: &str) {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║{:^62}║", format!("Western Armenian Hangman - {title}"));
    println!("╚══════════════════════════════════════════════════════════════╝");
}

fn drive_round<C: Clock, R: Rng>(
    coordinator: &mut PlaySessionCoordinator<C, R>,
    input: RoundInput<'_>,
    sound: bool,
) -> Result<Option<RoundSummary>> {
    if let Some(session) = coordinator.session() {
        print_board(session);
    }

    match input {
        RoundInput::Scripted(letters) => {
            if let Some(summary) = guess_all(coordinator, letters, sound)? {
                return Ok(Some(summary));
            }
            if let Some(session) = coordinator.session() {
                print_board(session);
            }
            println!("\n{}", "Round not finished, nothing recorded.".yellow());
            coordinator.abandon();
            Ok(None)
        }
        RoundInput::Interactive => {
            println!("\nType letters to guess. Commands: ':new' for a new word, ':quit' to exit\n");
            loop {
                let Some(line) = get_user_input("Guess")? else {
                    coordinator.abandon();
                    return Ok(None);
                };

                match Line::parse(&line) {
                    Line::Empty => {}
                    Line::Quit => {
                        coordinator.abandon();
                        println!("\n👋 Thanks for playing!\n");
                        return Ok(None);
                    }
                    Line::NewWord => match coordinator.restart() {
                        Ok(_) => {
                            ring(&[SoundEvent::Start], sound);
                            println!("\n🔄 New word!");
                            if let Some(session) = coordinator.session() {
                                print_board(session);
                            }
                        }
                        Err(GameError::UnsupportedInDailyMode) => {
                            println!("{}", "The daily word cannot be changed.".yellow());
                        }
                        Err(e) => return Err(e),
                    },
                    Line::Guesses(letters) => {
                        if let Some(summary) = guess_all(coordinator, letters, sound)? {
                            return Ok(Some(summary));
                        }
                        if let Some(session) = coordinator.session() {
                            print_board(session);
                        }
                    }
                }
            }
        }
    }
}

/// Submit each character; stops at the guess that ends the round
fn guess_all<C: Clock, R: Rng>(
    coordinator: &mut PlaySessionCoordinator<C, R>,
    letters: &str,
    sound: bool,
) -> Result<Option<RoundSummary>> {
    for letter in letters.chars().filter(|c| !c.is_whitespace()) {
        let report = coordinator.submit_guess(letter)?;
        print_guess_feedback(&report);
        ring(&report.sounds, sound);

        if let Some(summary) = report.summary {
            if let Some(session) = coordinator.session() {
                print_board(session);
            }
            print_round_summary(&summary);
            return Ok(Some(summary));
        }
    }
    Ok(None)
}

/// Terminal bell for the sounds that matter in text mode
fn ring(sounds: &[SoundEvent], enabled: bool) {
    if !enabled {
        return;
    }
    if sounds
        .iter()
        .any(|s| matches!(s, SoundEvent::Wrong | SoundEvent::Win | SoundEvent::Lose))
    {
        print!("\x07");
        let _ = io::stdout().flush();
    }
}

/// Read one trimmed line; `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SessionStatus;
    use crate::game::ManualClock;
    use crate::storage::MemoryStore;
    use crate::wordlists::WordCatalog;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    // Anagrams, so the same letters win whichever word is drawn
    fn coordinator() -> PlaySessionCoordinator<ManualClock, StdRng> {
        let catalog = WordCatalog::from_categories([("animals", words_from_slice(&["cat", "act"]))]);
        PlaySessionCoordinator::with_parts(
            catalog,
            MemoryStore::shared(),
            ManualClock::new(today()),
            StdRng::seed_from_u64(3),
        )
    }

    #[test]
    fn scripted_practice_win() {
        let mut c = coordinator();
        let summary = run_practice(&mut c, None, RoundInput::Scripted("c a t"), false)
            .unwrap()
            .unwrap();
        assert_eq!(summary.status, SessionStatus::Won);
        assert_eq!(c.statistics().statistics().games_won, 1);
    }

    #[test]
    fn scripted_round_stops_at_the_end() {
        let mut c = coordinator();
        let summary = run_daily(&mut c, today(), RoundInput::Scripted("qwrzyuiop"), false)
            .unwrap()
            .unwrap();
        assert_eq!(summary.status, SessionStatus::Lost);
        assert_eq!(summary.attempts_used, 6);
    }

    #[test]
    fn unfinished_script_records_nothing() {
        let mut c = coordinator();
        let result = run_practice(&mut c, None, RoundInput::Scripted("c"), false).unwrap();
        assert!(result.is_none());
        assert!(c.round().is_none());
        assert_eq!(c.statistics().statistics().games_played, 0);
    }

    #[test]
    fn commands_need_a_colon() {
        assert_eq!(Line::parse("  "), Line::Empty);
        assert_eq!(Line::parse(":new"), Line::NewWord);
        assert_eq!(Line::parse(":q"), Line::Quit);
        assert_eq!(Line::parse("new"), Line::Guesses("new"));
        assert_eq!(Line::parse("quit"), Line::Guesses("quit"));
        assert_eq!(Line::parse(" exit "), Line::Guesses("exit"));
    }

    #[test]
    fn daily_twice_is_rejected() {
        let mut c = coordinator();
        run_daily(&mut c, today(), RoundInput::Scripted("cat"), false).unwrap();
        let err = run_daily(&mut c, today(), RoundInput::Scripted("cat"), false).unwrap_err();
        assert!(matches!(err, GameError::AlreadyPlayedToday(_)));
    }
}
