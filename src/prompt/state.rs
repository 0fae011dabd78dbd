//! Keystroke state machine for the autocomplete prompt
//!
//! Pure state, no terminal IO: every keystroke maps to an [`Action`] that
//! the caller renders. This keeps the editing and cycling rules unit
//! testable without a terminal.

use crate::constants::PROMPT_BUFFER_CAPACITY;

/// A decoded keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Backspace,
    Tab,
    BackTab,
    Char(char),
    Interrupt,
}

/// What the renderer should do after a keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Nothing changed
    None,
    /// Echo the character just inserted
    Echo(char),
    /// Rub out one echoed character
    Erase,
    /// Redraw the whole line from the buffer
    Rewrite,
    /// Enter pressed; the buffer is the accepted value
    Accept,
    /// The user interrupted the prompt
    Interrupt,
}

/// An active tab-completion cycle: the candidate indices matching the typed
/// prefix, and the rank currently shown.
#[derive(Debug)]
struct CompletionCycle {
    matches: Vec<usize>,
    rank: usize,
}

/// Prompt editing state over a fixed candidate list.
///
/// The display buffer and the typed prefix are tracked separately: a
/// completion replaces the buffer but matching always runs against what the
/// user actually typed, so repeated Tab presses advance through the matches
/// with wrap-around instead of re-matching against the completed value.
pub struct PromptState<'a> {
    candidates: &'a [String],
    buffer: String,
    typed: String,
    completion: Option<CompletionCycle>,
}

impl<'a> PromptState<'a> {
    pub fn new(candidates: &'a [String]) -> Self {
        Self {
            candidates,
            buffer: String::with_capacity(PROMPT_BUFFER_CAPACITY),
            typed: String::new(),
            completion: None,
        }
    }

    /// Current display content; on [`Action::Accept`] this is the accepted
    /// value.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Apply one keystroke and report what the renderer should do.
    pub fn apply(&mut self, key: Key) -> Action {
        match key {
            Key::Enter => Action::Accept,
            Key::Interrupt => Action::Interrupt,
            Key::Backspace => self.backspace(),
            Key::Tab => self.cycle(1),
            Key::BackTab => self.cycle(-1),
            Key::Char(c) => self.insert(c),
        }
    }

    fn insert(&mut self, c: char) -> Action {
        if !('\x20'..='\x7e').contains(&c) {
            return Action::None;
        }
        if self.completion.take().is_some() {
            // Editing after a completion restarts the input rather than
            // extending the completed value.
            self.buffer.clear();
            self.typed.clear();
            self.buffer.push(c);
            self.typed.push(c);
            return Action::Rewrite;
        }
        if self.buffer.len() >= PROMPT_BUFFER_CAPACITY {
            return Action::None;
        }
        self.buffer.push(c);
        self.typed.push(c);
        Action::Echo(c)
    }

    fn backspace(&mut self) -> Action {
        if self.completion.take().is_some() {
            // Drop the completion and fall back to what was typed.
            self.buffer = self.typed.clone();
            return Action::Rewrite;
        }
        if self.buffer.is_empty() {
            return Action::None;
        }
        self.buffer.pop();
        self.typed.pop();
        Action::Erase
    }

    /// Advance the completion cycle by `step` (1 = Tab, -1 = Shift+Tab),
    /// starting a new cycle from the typed prefix when none is active.
    /// Cycling wraps at both ends.
    fn cycle(&mut self, step: i32) -> Action {
        match self.completion.as_mut() {
            Some(cycle) => {
                let len = cycle.matches.len() as i32;
                cycle.rank = (cycle.rank as i32 + step).rem_euclid(len) as usize;
                self.buffer = self.candidates[cycle.matches[cycle.rank]].clone();
                Action::Rewrite
            }
            None => {
                let matches: Vec<usize> = self
                    .candidates
                    .iter()
                    .enumerate()
                    .filter(|(_, candidate)| candidate.starts_with(&self.typed))
                    .map(|(i, _)| i)
                    .collect();
                if matches.is_empty() {
                    return Action::None;
                }
                let rank = if step < 0 { matches.len() - 1 } else { 0 };
                self.buffer = self.candidates[matches[rank]].clone();
                self.completion = Some(CompletionCycle { matches, rank });
                Action::Rewrite
            }
        }
    }
}
