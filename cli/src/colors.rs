use colored::*;
use gridpath_core::CellKind;

pub struct ColorScheme;

impl ColorScheme {
    pub fn new(use_colors: bool) -> Self {
        if !use_colors {
            colored::control::set_override(false);
        }
        Self
    }

    /// Glyph for one cell of the rendered grid.
    pub fn cell(&self, kind: CellKind) -> ColoredString {
        let glyph = kind.glyph().to_string();
        let glyph = glyph.as_str();
        match kind {
            CellKind::Empty => glyph.dimmed(),
            CellKind::Obstacle => glyph.bright_black(),
            CellKind::Start => glyph.green().bold(),
            CellKind::End => glyph.red().bold(),
            CellKind::Path => glyph.yellow(),
        }
    }

    pub fn position(&self, text: &str) -> ColoredString {
        text.yellow()
    }

    pub fn success(&self, text: &str) -> ColoredString {
        text.green()
    }

    pub fn error(&self, text: &str) -> ColoredString {
        text.red()
    }

    pub fn number(&self, text: &str) -> ColoredString {
        text.green()
    }

    pub fn stats(&self, text: &str) -> ColoredString {
        text.blue()
    }
}
