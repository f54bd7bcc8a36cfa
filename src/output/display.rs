//! Display functions for the plain CLI mode

use crate::shell::{MessageKind, RenderInstruction, gallows, sound_label};
use crate::store::StatisticsRecord;
use colored::Colorize;

/// Print the result of one guess: gallows, word mask, guessed letters, message
pub fn print_instruction(instruction: &RenderInstruction, sound_enabled: bool) {
    println!("{}", gallows(instruction.hangman_stage).cyan());
    println!();
    println!("  {}", instruction.word_display().bold());

    if !instruction.guessed.is_empty() {
        println!("  Guessed: {}", instruction.guessed.dimmed());
    }
    println!();

    let message = match instruction.message.kind {
        MessageKind::Error => instruction.message.text.yellow().bold(),
        MessageKind::Wrong => instruction.message.text.red().bold(),
        MessageKind::Right => instruction.message.text.green().bold(),
    };
    println!("  {message}");

    if sound_enabled {
        println!("  {}", sound_label(instruction.sound).dimmed());
    }
}

/// Print the lifetime statistics record as a table
pub fn print_statistics(record: &StatisticsRecord) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(" {}", "Hangman Statistics".bright_yellow().bold());
    println!("{}", "─".repeat(40).cyan());

    println!(" Games played:        {}", record.total_games());
    println!(" Victories:           {}", record.victories.to_string().green());
    println!(" Defeats:             {}", record.defeats.to_string().red());
    println!(" Current win streak:  {}", record.victories_in_row);
    println!(" Current loss streak: {}", record.defeats_in_row);
    println!(" Best win streak:     {}", record.max_victories_in_row);
    println!(" Worst loss streak:   {}", record.max_defeats_in_row);
    println!("{}", "─".repeat(40).cyan());
}
