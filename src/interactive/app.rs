//! TUI application state and logic

use crate::commands::resume_or_new;
use crate::engine::GameSession;
use crate::shell::{Message, MessageKind, SoundCue, render};
use crate::store::{
    FileStorage, PreferenceStore, SessionStore, StatisticsTracker, StorageError,
};
use crate::words::random_secret;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::ThreadRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::path::Path;

/// What the input line currently feeds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Letters go into the guess buffer
    Playing,
    /// Game finished; Enter starts a new game
    GameOver,
}

/// Application state
pub struct App {
    pub session: GameSession,
    pub session_store: SessionStore<FileStorage>,
    pub stats: StatisticsTracker<FileStorage>,
    pub prefs: PreferenceStore<FileStorage>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub last_sound: Option<SoundCue>,
    pub input_mode: InputMode,
    pub should_quit: bool,
    rng: ThreadRng,
}

impl App {
    /// Open the stores under `data_dir` and resume or start a game
    ///
    /// # Errors
    /// Returns `StorageError` if the data directory cannot be prepared.
    pub fn new(data_dir: &Path) -> Result<Self, StorageError> {
        let mut session_store = SessionStore::new(FileStorage::new(data_dir)?);
        let stats = StatisticsTracker::new(FileStorage::new(data_dir)?);
        let prefs = PreferenceStore::new(FileStorage::new(data_dir)?);

        let mut rng = rand::rng();
        let (session, resumed) = resume_or_new(&mut session_store, &mut rng);

        let mut app = Self {
            session,
            session_store,
            stats,
            prefs,
            input_buffer: String::new(),
            messages: Vec::new(),
            last_sound: None,
            input_mode: InputMode::Playing,
            should_quit: false,
            rng,
        };

        if resumed {
            app.add_message("↩ Resuming your saved game", MessageKind::Right);
        } else {
            app.add_message("A new word has been chosen. Good luck!", MessageKind::Right);
        }
        app.add_message("Type a letter and press Enter to guess.", MessageKind::Right);
        Ok(app)
    }

    /// Resolve the buffered input as a guess
    pub fn submit_guess(&mut self) {
        let token = self.input_buffer.trim().to_string();
        self.input_buffer.clear();
        if token.is_empty() {
            return;
        }

        let outcome = self.session.run(&token);
        self.session_store.save(&self.session);
        self.stats.update(outcome);

        let instruction = render(outcome, &token, &self.session);
        self.last_sound = self.prefs.sound_enabled().then_some(instruction.sound);
        self.add_message(&instruction.message.text, instruction.message.kind);

        if instruction.game_over {
            self.input_mode = InputMode::GameOver;
            if !self.session.revealed().iter().all(Option::is_some) {
                let reveal = format!("The word was '{}'", self.session.secret_word().text());
                self.add_message(&reveal, MessageKind::Wrong);
            }
            self.add_message("Press Enter for a new game, Esc to quit.", MessageKind::Right);
        }
    }

    /// Replace the finished session with a fresh one
    pub fn new_game(&mut self) {
        self.session = GameSession::new(random_secret(&mut self.rng));
        self.session_store.remove();
        self.session_store.save(&self.session);

        self.input_buffer.clear();
        self.messages.clear();
        self.last_sound = None;
        self.input_mode = InputMode::Playing;
        self.add_message("New game started!", MessageKind::Right);
    }

    /// Flip and persist the sound-cue preference
    pub fn toggle_sound(&mut self) {
        self.prefs.toggle_sound();
        let text = if self.prefs.sound_enabled() {
            "🔔 Sound cues on"
        } else {
            "🔕 Sound cues off"
        };
        self.add_message(text, MessageKind::Right);
    }

    fn add_message(&mut self, text: &str, kind: MessageKind) {
        self.messages.push(Message {
            text: text.to_string(),
            kind,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.toggle_sound();
                }
                KeyCode::Esc => {
                    app.should_quit = true;
                }
                _ => match app.input_mode {
                    InputMode::GameOver => {
                        if key.code == KeyCode::Enter {
                            app.new_game();
                        }
                        // Other keys are ignored once the game is over
                    }
                    InputMode::Playing => match key.code {
                        KeyCode::Char(c) => {
                            app.input_buffer.push(c);
                        }
                        KeyCode::Backspace => {
                            app.input_buffer.pop();
                        }
                        KeyCode::Enter => {
                            app.submit_guess();
                        }
                        _ => {}
                    },
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
