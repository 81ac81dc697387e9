//! Terminal session and line drawing
//!
//! Raw mode + alternate screen for the program's lifetime, restored on drop.
//! Views produce styled [`Line`]s and the whole frame is redrawn per event; a
//! form's worth of lines does not warrant cell diffing.

use std::io::{self, Stdout, Write};

use crossterm::event::{self, Event as CrosstermEvent};
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::{cursor, execute, queue, terminal};
use unicode_width::UnicodeWidthStr;

/// Text styling for a span.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Style {
    pub fg: Option<Color>,
    pub bold: bool,
    pub dim: bool,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn dim(mut self) -> Self {
        self.dim = true;
        self
    }
}

/// A run of text with one style.
#[derive(Debug, Clone)]
pub struct Span {
    pub text: String,
    pub style: Style,
}

impl Span {
    pub fn raw(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: Style::default(),
        }
    }

    pub fn styled(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    /// Display width in terminal columns.
    pub fn width(&self) -> usize {
        self.text.width()
    }
}

/// One terminal row of spans.
#[derive(Debug, Clone, Default)]
pub struct Line {
    pub spans: Vec<Span>,
}

impl Line {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn raw(text: impl Into<String>) -> Self {
        Self {
            spans: vec![Span::raw(text)],
        }
    }

    pub fn styled(text: impl Into<String>, style: Style) -> Self {
        Self {
            spans: vec![Span::styled(text, style)],
        }
    }

    pub fn push(&mut self, span: Span) {
        self.spans.push(span);
    }

    /// Concatenated text without styling, for tests and logging.
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    pub fn width(&self) -> usize {
        self.spans.iter().map(Span::width).sum()
    }
}

impl From<Vec<Span>> for Line {
    fn from(spans: Vec<Span>) -> Self {
        Self { spans }
    }
}

/// An active terminal session.
pub struct Screen {
    stdout: Stdout,
}

impl Screen {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;
        Ok(Self { stdout })
    }

    /// Block until the next terminal event.
    pub fn next_event(&self) -> io::Result<CrosstermEvent> {
        event::read()
    }

    /// Redraw the frame. `cursor` places a visible cursor at (column, row),
    /// for the focused text input; `None` keeps it hidden.
    pub fn draw(&mut self, lines: &[Line], cursor_pos: Option<(u16, u16)>) -> io::Result<()> {
        queue!(
            self.stdout,
            cursor::Hide,
            terminal::Clear(terminal::ClearType::All)
        )?;

        let (_, rows) = terminal::size()?;
        for (y, line) in lines.iter().enumerate().take(rows as usize) {
            queue!(self.stdout, cursor::MoveTo(0, y as u16))?;
            for span in &line.spans {
                if let Some(color) = span.style.fg {
                    queue!(self.stdout, SetForegroundColor(color))?;
                }
                if span.style.bold {
                    queue!(self.stdout, SetAttribute(Attribute::Bold))?;
                }
                if span.style.dim {
                    queue!(self.stdout, SetAttribute(Attribute::Dim))?;
                }
                queue!(self.stdout, Print(span.text.as_str()))?;
                queue!(self.stdout, ResetColor, SetAttribute(Attribute::Reset))?;
            }
        }

        if let Some((x, y)) = cursor_pos {
            queue!(self.stdout, cursor::MoveTo(x, y), cursor::Show)?;
        }

        self.stdout.flush()
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        let _ = execute!(self.stdout, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_text_concatenates_spans() {
        let line = Line::from(vec![
            Span::raw("city: "),
            Span::styled("Mumbai", Style::new().bold()),
        ]);
        assert_eq!(line.text(), "city: Mumbai");
    }

    #[test]
    fn test_width_counts_display_columns() {
        assert_eq!(Span::raw("abc").width(), 3);
        // Devanagari combining marks occupy no extra columns.
        let line = Line::raw("नाम");
        assert!(line.width() <= 3);
    }
}
