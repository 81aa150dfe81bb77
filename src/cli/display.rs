//! Terminal display and UI rendering
//!
//! Features:
//! - Current flashcard word on its own line
//! - Letter toggle row with color coding
//! - Length range, case mode and hyphenation status line
//! - Key binding help

use crate::cli::format::{CaseMode, NO_MATCH_PLACEHOLDER};
use crate::engine::FilterState;
use crossterm::{
    cursor, execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, ClearType},
};
use std::io::{stdout, Write};

/// Terminal display manager
pub struct Display;

impl Display {
    /// Create a display writing to the main screen
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        Ok(Display)
    }

    /// Clear screen
    pub fn clear(&self) -> Result<(), Box<dyn std::error::Error>> {
        let mut stdout = stdout();
        execute!(
            stdout,
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0)
        )?;
        Ok(())
    }

    /// Render the current flashcard word
    ///
    /// The no-match placeholder is dimmed so an empty result reads as a
    /// state, not as a vocabulary word.
    pub fn show_word(&self, display_word: &str) -> Result<(), Box<dyn std::error::Error>> {
        let mut stdout = stdout();
        let color = if display_word == NO_MATCH_PLACEHOLDER {
            Color::DarkGrey
        } else {
            Color::Cyan
        };

        execute!(
            stdout,
            cursor::MoveTo(0, 1),
            SetForegroundColor(color),
            Print(format!("    {}", display_word)),
            ResetColor,
            Print("\n")
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// Render the letter toggle row: active letters green, inactive dimmed
    pub fn show_letters(&self, state: &FilterState) -> Result<(), Box<dyn std::error::Error>> {
        let mut stdout = stdout();

        execute!(
            stdout,
            cursor::MoveTo(0, 3),
            SetForegroundColor(Color::Magenta),
            Print("Letters: "),
            ResetColor
        )?;

        for c in "abcdefghijklmnopqrstuvwxyz".chars() {
            let color = if state.is_letter_allowed(c) {
                Color::Green
            } else {
                Color::DarkGrey
            };
            execute!(
                stdout,
                SetForegroundColor(color),
                Print(c),
                ResetColor,
                Print(" ")
            )?;
        }

        execute!(stdout, Print("\n"))?;
        stdout.flush()?;
        Ok(())
    }

    /// Render length range, case mode, hyphenation flag and match count
    pub fn show_status(
        &self,
        state: &FilterState,
        case_mode: CaseMode,
        hyphenate: bool,
        matching_words: usize,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let mut stdout = stdout();

        execute!(
            stdout,
            cursor::MoveTo(0, 4),
            SetForegroundColor(Color::Magenta),
            Print("Length: "),
            ResetColor,
            Print(format!("{}-{}", state.min_length(), state.max_length())),
            Print("  |  Case: "),
            Print(case_mode.label()),
            Print("  |  Hyphenate: "),
            Print(if hyphenate { "on" } else { "off" }),
            Print("  |  Matches: "),
            SetForegroundColor(if matching_words > 0 {
                Color::Green
            } else {
                Color::Red
            }),
            Print(format!("{}", matching_words)),
            ResetColor,
            Print("\n"),
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// Show key binding help
    pub fn show_help(&self) -> Result<(), Box<dyn std::error::Error>> {
        let mut stdout = stdout();

        execute!(
            stdout,
            cursor::MoveTo(0, 6),
            SetForegroundColor(Color::DarkGrey),
            Print("a-z toggle letter  |  Left/Right min length  |  Down/Up max length\n"),
            cursor::MoveTo(0, 7),
            Print("ENTER next word  |  TAB case  |  '-' hyphenate  |  ESC quit\n"),
            ResetColor
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// Reset terminal state and cleanup
    pub fn shutdown(&self) -> Result<(), Box<dyn std::error::Error>> {
        terminal::disable_raw_mode()?;
        Ok(())
    }
}

impl Drop for Display {
    fn drop(&mut self) {
        // Best effort cleanup
        let _ = self.shutdown();
    }
}
