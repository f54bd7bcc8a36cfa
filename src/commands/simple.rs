//! Simple interactive CLI mode
//!
//! Text-based hangman game without the TUI.

use crate::commands::resume_or_new;
use crate::engine::GameSession;
use crate::output::{print_instruction, print_statistics};
use crate::shell::{gallows, mask_display, render};
use crate::store::{FileStorage, PreferenceStore, SessionStore, StatisticsTracker};
use crate::words::random_secret;
use colored::Colorize;
use std::io::{self, Write};
use std::path::Path;

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if the data directory cannot be prepared or reading
/// user input fails.
pub fn run_simple(data_dir: &Path) -> Result<(), String> {
    let mut session_store =
        SessionStore::new(FileStorage::new(data_dir).map_err(|e| e.to_string())?);
    let mut stats =
        StatisticsTracker::new(FileStorage::new(data_dir).map_err(|e| e.to_string())?);
    let mut prefs = PreferenceStore::new(FileStorage::new(data_dir).map_err(|e| e.to_string())?);

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                   Hangman - Interactive Mode                 ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Guess the word one letter at a time; {} wrong guesses and", crate::engine::MAX_WRONG_GUESSES);
    println!("the man hangs. Commands: 'new' for a new game, 'sound' to");
    println!("toggle sound cues, 'quit' to exit.\n");

    let mut rng = rand::rng();
    let (mut session, resumed) = resume_or_new(&mut session_store, &mut rng);

    if resumed {
        println!("{}", "↩ Resuming your saved game\n".cyan());
    }
    print_board(&session);

    loop {
        let input = get_user_input("Guess a letter")?;

        match input.to_lowercase().as_str() {
            // No single-letter aliases: every letter is a legal guess
            "quit" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" => {
                session = new_game(&mut session_store, &mut rng);
                print_board(&session);
                continue;
            }
            "sound" => {
                prefs.toggle_sound();
                let state = if prefs.sound_enabled() { "on" } else { "off" };
                println!("🔔 Sound cues {state}\n");
                continue;
            }
            _ => {}
        }

        let outcome = session.run(&input);
        session_store.save(&session);
        stats.update(outcome);

        let instruction = render(outcome, &input, &session);
        println!();
        print_instruction(&instruction, prefs.sound_enabled());
        println!();

        if instruction.game_over {
            if !session.revealed().iter().all(Option::is_some) {
                println!(
                    "  The word was: {}\n",
                    session.secret_word().text().bright_yellow().bold()
                );
            }
            print_statistics(stats.record());

            match get_user_input("Play again? (yes/no)")?.to_lowercase().as_str() {
                "yes" | "y" => {
                    session = new_game(&mut session_store, &mut rng);
                    print_board(&session);
                }
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
        }
    }
}

fn new_game(store: &mut SessionStore<FileStorage>, rng: &mut impl rand::Rng) -> GameSession {
    let session = GameSession::new(random_secret(rng));
    store.remove();
    store.save(&session);
    println!("\n🔄 New game started!\n");
    session
}

fn print_board(session: &GameSession) {
    println!("{}", gallows(session.wrong_guesses()).cyan());
    println!();
    println!("  {}", mask_display(&session.revealed()).bold());
    if !session.guessed_letters().is_empty() {
        println!("  Guessed: {}", session.guessed_display().dimmed());
    }
    println!();
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
