//! Terminal rendering of the markdown produced by `cadence-core`.
//!
//! Rich mode styles each line with termimad and colors headers and status
//! markers; plain mode prints the markdown untouched.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Cyan);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// ANSI color for a line, if it should be highlighted as a whole.
    fn line_color(line: &str) -> Option<&'static str> {
        if line.starts_with('#') {
            Some("\x1b[36m")
        } else if line.starts_with("Error:") {
            Some("\x1b[31m")
        } else if line.starts_with("**Happening now**") {
            Some("\x1b[32m")
        } else {
            None
        }
    }

    /// Render markdown text to the terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        if !self.rich_enabled {
            print!("{markdown}");
            return Ok(());
        }

        for line in markdown.lines() {
            match Self::line_color(line) {
                Some(color) => println!("{color}{line}\x1b[0m"),
                None => {
                    self.skin.print_inline(line);
                    println!();
                }
            }
        }
        Ok(())
    }

    /// Clears the screen before a redraw. Plain output is append-only.
    pub fn clear(&self) {
        if self.rich_enabled {
            print!("{CLEAR_SCREEN}");
        }
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
