//! Outcome rendering
//!
//! Pure function from `(outcome, input token, session)` to a
//! [`RenderInstruction`]. Message texts and sound-cue categories are fixed
//! per outcome tag; the match is exhaustive, so adding an outcome variant
//! fails to compile until every table here is extended.

use crate::core::Outcome;
use crate::engine::{GameSession, MAX_WRONG_GUESSES};

/// Visual category of a message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    /// Input problem: invalid or repeated letter
    Error,
    /// Bad news: wrong guess or loss
    Wrong,
    /// Good news: right guess or win
    Right,
}

/// Sound cue accompanying an outcome
///
/// Cues are advisory; the shell shows or skips them based on the persisted
/// sound preference. No audio is played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    Alert,
    RightGuess,
    Victory,
    Defeat,
}

/// User-visible message for an outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub kind: MessageKind,
}

/// Everything a shell needs to draw one guess result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderInstruction {
    pub message: Message,
    /// Hangman progression stage, `0..=MAX_WRONG_GUESSES`
    pub hangman_stage: u8,
    /// Guessed letters joined for display
    pub guessed: String,
    /// Per-position word mask; `None` renders as a blank
    pub revealed: Vec<Option<char>>,
    /// Terminal outcome: the shell stops accepting guesses
    pub game_over: bool,
    pub sound: SoundCue,
}

impl RenderInstruction {
    /// The word mask as display text, e.g. `"z _ p _ y _"`
    #[must_use]
    pub fn word_display(&self) -> String {
        mask_display(&self.revealed)
    }
}

/// Join a word mask for display, blanking hidden positions
#[must_use]
pub fn mask_display(revealed: &[Option<char>]) -> String {
    revealed
        .iter()
        .map(|slot| slot.unwrap_or('_').to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Build the render instruction for one resolved guess
#[must_use]
pub fn render(outcome: Outcome, token: &str, session: &GameSession) -> RenderInstruction {
    RenderInstruction {
        message: message_for(outcome, token),
        hangman_stage: session.wrong_guesses(),
        guessed: session.guessed_display(),
        revealed: session.revealed(),
        game_over: outcome.is_terminal(),
        sound: sound_for(outcome),
    }
}

fn message_for(outcome: Outcome, token: &str) -> Message {
    let (text, kind) = match outcome {
        Outcome::InvalidInput => (
            format!("‼ '{token}' is not a valid letter"),
            MessageKind::Error,
        ),
        Outcome::AlreadyGuessed => (
            format!("‼ Letter '{token}' has already been guessed"),
            MessageKind::Error,
        ),
        Outcome::WrongGuess => ("❌ Wrong Guess".to_string(), MessageKind::Wrong),
        Outcome::Won => ("🏆 You saved the man! 🏆".to_string(), MessageKind::Right),
        Outcome::RightGuess => ("✔ Right Guess".to_string(), MessageKind::Right),
        Outcome::Lost => ("😭 The man is dead! 😭".to_string(), MessageKind::Wrong),
    };
    Message { text, kind }
}

const fn sound_for(outcome: Outcome) -> SoundCue {
    match outcome {
        Outcome::InvalidInput | Outcome::AlreadyGuessed | Outcome::WrongGuess => SoundCue::Alert,
        Outcome::RightGuess => SoundCue::RightGuess,
        Outcome::Won => SoundCue::Victory,
        Outcome::Lost => SoundCue::Defeat,
    }
}

/// Display label for a sound cue, shared by the CLI and TUI shells
#[must_use]
pub const fn sound_label(cue: SoundCue) -> &'static str {
    match cue {
        SoundCue::Alert => "🔔 alert",
        SoundCue::RightGuess => "🔔 ding",
        SoundCue::Victory => "🔔 fanfare",
        SoundCue::Defeat => "🔔 trombone",
    }
}

/// Number of gallows drawings, one per wrong-guess count
pub const GALLOWS_STAGES: usize = MAX_WRONG_GUESSES as usize + 1;

const GALLOWS: [&str; GALLOWS_STAGES] = [
    r"
  +---+
  |   |
      |
      |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
      |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
  |   |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
 /|   |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
 /|\  |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
 /|\  |
 /    |
      |
=========",
    r"
  +---+
  |   |
  O   |
 /|\  |
 / \  |
      |
=========",
];

/// Gallows drawing for a wrong-guess count, clamped to the final stage
#[must_use]
pub fn gallows(stage: u8) -> &'static str {
    GALLOWS[(stage as usize).min(GALLOWS_STAGES - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SecretWord;

    fn session_after(word: &str, guesses: &[&str]) -> (GameSession, Outcome) {
        let mut game = GameSession::new(SecretWord::new(word).unwrap());
        let mut last = Outcome::InvalidInput;
        for g in guesses {
            last = game.run(g);
        }
        (game, last)
    }

    #[test]
    fn invalid_input_message_names_the_token() {
        let (game, outcome) = session_after("zephyr", &["!?"]);
        let instruction = render(outcome, "!?", &game);

        assert_eq!(instruction.message.text, "‼ '!?' is not a valid letter");
        assert_eq!(instruction.message.kind, MessageKind::Error);
        assert_eq!(instruction.sound, SoundCue::Alert);
        assert!(!instruction.game_over);
    }

    #[test]
    fn already_guessed_message_names_the_letter() {
        let (game, outcome) = session_after("zephyr", &["z", "z"]);
        let instruction = render(outcome, "z", &game);

        assert_eq!(
            instruction.message.text,
            "‼ Letter 'z' has already been guessed"
        );
        assert_eq!(instruction.message.kind, MessageKind::Error);
    }

    #[test]
    fn outcome_to_cue_mapping() {
        let (mut game, _) = session_after("abba", &[]);

        let wrong = game.run("z");
        assert_eq!(sound_for(wrong), SoundCue::Alert);

        let right = game.run("a");
        assert_eq!(sound_for(right), SoundCue::RightGuess);

        let won = game.run("b");
        assert_eq!(sound_for(won), SoundCue::Victory);
        assert_eq!(sound_for(Outcome::Lost), SoundCue::Defeat);
    }

    #[test]
    fn terminal_outcomes_set_game_over() {
        let (game, outcome) = session_after("abba", &["a", "b"]);
        let instruction = render(outcome, "b", &game);

        assert!(instruction.game_over);
        assert_eq!(instruction.message.kind, MessageKind::Right);
        assert_eq!(instruction.word_display(), "a b b a");
    }

    #[test]
    fn stage_follows_wrong_guesses() {
        let (game, outcome) = session_after("zephyr", &["q", "w"]);
        let instruction = render(outcome, "w", &game);
        assert_eq!(instruction.hangman_stage, 2);
    }

    #[test]
    fn word_display_blanks_hidden_letters() {
        let (game, outcome) = session_after("zephyr", &["e"]);
        let instruction = render(outcome, "e", &game);
        assert_eq!(instruction.word_display(), "_ e _ _ _ _");
        assert_eq!(instruction.guessed, "e");
    }

    #[test]
    fn sound_labels_are_distinct_per_cue() {
        let cues = [
            SoundCue::Alert,
            SoundCue::RightGuess,
            SoundCue::Victory,
            SoundCue::Defeat,
        ];
        let labels: Vec<&str> = cues.iter().map(|&c| sound_label(c)).collect();
        for (i, label) in labels.iter().enumerate() {
            assert!(!label.is_empty());
            assert!(!labels[i + 1..].contains(label));
        }
    }

    #[test]
    fn gallows_has_a_drawing_per_stage() {
        for stage in 0..=MAX_WRONG_GUESSES {
            assert!(!gallows(stage).is_empty());
        }
        // Out-of-range stages clamp instead of panicking
        assert_eq!(gallows(200), gallows(MAX_WRONG_GUESSES));
    }

    #[test]
    fn gallows_stages_are_distinct() {
        for window in GALLOWS.windows(2) {
            assert_ne!(window[0], window[1]);
        }
    }
}
