//! Keystroke input handling using crossterm
//!
//! Features:
//! - Non-blocking keystroke capture
//! - Translation of raw key events into viewer events
//! - Ctrl+C / Escape graceful exit

use crossterm::event::{self, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io::Result as IoResult;
use std::time::Duration;

/// Discrete input events consumed by the viewer loop
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewerEvent {
    /// Flip a letter in the allowed set
    ToggleLetter(char),
    /// Lower the minimum word length by one
    DecreaseMin,
    /// Raise the minimum word length by one
    IncreaseMin,
    /// Lower the maximum word length by one
    DecreaseMax,
    /// Raise the maximum word length by one
    IncreaseMax,
    /// Draw the next word
    NextWord,
    /// Cycle the case mode (lower → UPPER → Title)
    CycleCase,
    /// Toggle syllable hyphenation
    ToggleHyphenation,
    /// Leave the viewer
    Quit,
}

impl ViewerEvent {
    /// Whether this event calls for a fresh word draw
    ///
    /// Letter and length events change what can match, and next-word asks
    /// for a draw outright. Case and hyphenation are display options: they
    /// restyle the current word and must not replace it.
    pub fn requests_selection(self) -> bool {
        matches!(
            self,
            ViewerEvent::ToggleLetter(_)
                | ViewerEvent::DecreaseMin
                | ViewerEvent::IncreaseMin
                | ViewerEvent::DecreaseMax
                | ViewerEvent::IncreaseMax
                | ViewerEvent::NextWord
        )
    }
}

/// Handles user input from the terminal
pub struct InputHandler {
    /// Timeout for poll operations
    poll_timeout: Duration,
}

impl InputHandler {
    /// Create new input handler with default timeout (50ms for responsive input)
    pub fn new() -> Self {
        InputHandler {
            poll_timeout: Duration::from_millis(50),
        }
    }

    /// Enable raw mode for terminal input
    pub fn enable_raw_mode() -> IoResult<()> {
        crossterm::terminal::enable_raw_mode()
    }

    /// Disable raw mode and restore terminal
    pub fn disable_raw_mode() -> IoResult<()> {
        crossterm::terminal::disable_raw_mode()
    }

    /// Poll for a key press with timeout (non-blocking)
    ///
    /// Returns Some(KeyEvent) on a press, None on timeout. Release and
    /// repeat events are swallowed so a toggle fires once per keystroke.
    pub fn read_key(&self) -> Result<Option<KeyEvent>, Box<dyn std::error::Error>> {
        if event::poll(self.poll_timeout)? {
            match event::read()? {
                event::Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    Ok(Some(key_event))
                }
                _ => Ok(None),
            }
        } else {
            Ok(None)
        }
    }

    /// Translate a key press into a viewer event
    ///
    /// Letters toggle the allowed set; arrows drag the length bounds;
    /// Enter/Space request the next word; Tab cycles case; '-' flips
    /// hyphenation; Esc or Ctrl+C quits.
    pub fn translate(key: &KeyEvent) -> Option<ViewerEvent> {
        if Self::is_exit(key) {
            return Some(ViewerEvent::Quit);
        }

        match key.code {
            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                if key.modifiers.contains(KeyModifiers::CONTROL)
                    || key.modifiers.contains(KeyModifiers::ALT)
                {
                    None
                } else {
                    Some(ViewerEvent::ToggleLetter(c.to_ascii_lowercase()))
                }
            }
            KeyCode::Char(' ') | KeyCode::Enter => Some(ViewerEvent::NextWord),
            KeyCode::Char('-') => Some(ViewerEvent::ToggleHyphenation),
            KeyCode::Tab => Some(ViewerEvent::CycleCase),
            KeyCode::Left => Some(ViewerEvent::DecreaseMin),
            KeyCode::Right => Some(ViewerEvent::IncreaseMin),
            KeyCode::Down => Some(ViewerEvent::DecreaseMax),
            KeyCode::Up => Some(ViewerEvent::IncreaseMax),
            _ => None,
        }
    }

    /// Check if a key event is an exit signal (Ctrl+C or Escape)
    pub fn is_exit(key: &KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => true,
            KeyCode::Esc => true,
            _ => false,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_letters_toggle_lowercased() {
        assert_eq!(
            InputHandler::translate(&press(KeyCode::Char('a'))),
            Some(ViewerEvent::ToggleLetter('a'))
        );
        assert_eq!(
            InputHandler::translate(&KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            Some(ViewerEvent::ToggleLetter('a'))
        );
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(
            InputHandler::translate(&press(KeyCode::Enter)),
            Some(ViewerEvent::NextWord)
        );
        assert_eq!(
            InputHandler::translate(&press(KeyCode::Tab)),
            Some(ViewerEvent::CycleCase)
        );
        assert_eq!(
            InputHandler::translate(&press(KeyCode::Char('-'))),
            Some(ViewerEvent::ToggleHyphenation)
        );
        assert_eq!(
            InputHandler::translate(&press(KeyCode::Up)),
            Some(ViewerEvent::IncreaseMax)
        );
    }

    #[test]
    fn test_display_events_do_not_request_selection() {
        // Changing case or hyphenation keeps the current word on screen
        assert!(!ViewerEvent::CycleCase.requests_selection());
        assert!(!ViewerEvent::ToggleHyphenation.requests_selection());
        assert!(!ViewerEvent::Quit.requests_selection());

        // Filter changes and next-word trigger a fresh draw
        assert!(ViewerEvent::ToggleLetter('a').requests_selection());
        assert!(ViewerEvent::DecreaseMin.requests_selection());
        assert!(ViewerEvent::IncreaseMin.requests_selection());
        assert!(ViewerEvent::DecreaseMax.requests_selection());
        assert!(ViewerEvent::IncreaseMax.requests_selection());
        assert!(ViewerEvent::NextWord.requests_selection());
    }

    #[test]
    fn test_exit_keys() {
        assert_eq!(
            InputHandler::translate(&press(KeyCode::Esc)),
            Some(ViewerEvent::Quit)
        );
        assert_eq!(
            InputHandler::translate(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(ViewerEvent::Quit)
        );
    }
}
