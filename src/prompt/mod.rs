//! Interactive raw-mode autocomplete prompt
//!
//! The keystroke logic lives in [`state`]; this module owns the terminal:
//! raw mode as a scoped resource, key decoding, and explicit echoing. Each
//! keystroke is echoed by the prompt itself, never by the terminal.

pub mod state;

use std::io::{self, Write};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use tracing::debug;

use crate::constants::{PROMPT_DISPLAY_WIDTH, PROMPT_INSTRUCTION};
use crate::error::{AqsError, Result};
use state::{Action, Key, PromptState};

/// Scoped raw-mode session.
///
/// The terminal is restored when the guard drops, covering normal return,
/// error return, and unwinds alike; a prompt that leaves the terminal raw
/// breaks the user's shell.
struct RawModeGuard;

impl RawModeGuard {
    fn new() -> Result<Self> {
        enable_raw_mode()
            .map_err(|source| AqsError::terminal("failed to enable raw mode", source))?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

/// Run the autocomplete prompt over `candidates` and return the accepted
/// value.
///
/// Candidates are matched by prefix against what the user types; Tab and
/// Shift+Tab cycle through the matches with wrap-around. Enter accepts the
/// displayed value, which is empty if nothing was typed. Ctrl+C maps to
/// [`AqsError::Interrupted`] since raw mode swallows the signal itself.
pub fn read_parameter(candidates: &[String]) -> Result<String> {
    println!("{}", PROMPT_INSTRUCTION);

    let _raw = RawModeGuard::new()?;
    let mut stdout = io::stdout();
    let mut prompt = PromptState::new(candidates);

    loop {
        let key = match next_key()? {
            Some(key) => key,
            None => continue,
        };

        match prompt.apply(key) {
            Action::None => {}
            Action::Echo(c) => {
                write!(stdout, "{}", c)?;
                stdout.flush()?;
            }
            Action::Erase => {
                write!(stdout, "\x08 \x08")?;
                stdout.flush()?;
            }
            Action::Rewrite => {
                write!(
                    stdout,
                    "\r{:<width$}",
                    prompt.buffer(),
                    width = PROMPT_DISPLAY_WIDTH
                )?;
                stdout.flush()?;
            }
            Action::Accept => {
                write!(stdout, "\r\n")?;
                stdout.flush()?;
                debug!("prompt accepted '{}'", prompt.buffer());
                return Ok(prompt.buffer().to_string());
            }
            Action::Interrupt => return Err(AqsError::Interrupted),
        }
    }
}

/// Decode the next terminal event into a prompt key, if it maps to one.
fn next_key() -> Result<Option<Key>> {
    let event = event::read().map_err(|source| AqsError::terminal("failed to read key", source))?;

    let Event::Key(KeyEvent {
        code,
        modifiers,
        kind: KeyEventKind::Press,
        ..
    }) = event
    else {
        return Ok(None);
    };

    Ok(match code {
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Backspace => Some(Key::Backspace),
        KeyCode::Tab => Some(Key::Tab),
        KeyCode::BackTab => Some(Key::BackTab),
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Some(Key::Interrupt),
        KeyCode::Char(c) if !modifiers.contains(KeyModifiers::CONTROL) => Some(Key::Char(c)),
        _ => None,
    })
}
