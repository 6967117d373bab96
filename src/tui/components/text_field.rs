//! # TextField Component
//!
//! A single-line labelled text input. Three of these make up the address
//! form. The buffer is internal state; the focus flag is a prop from the
//! form, which owns the focus order.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Paragraph};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// High-level events emitted by a TextField
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEvent {
    /// Text content changed
    ContentChanged,
}

/// Largest byte offset <= `pos` that sits on a char boundary, moving back
/// at least one char. `pos` must be > 0.
fn prev_char_boundary(s: &str, pos: usize) -> usize {
    let mut p = pos - 1;
    while p > 0 && !s.is_char_boundary(p) {
        p -= 1;
    }
    p
}

/// Smallest byte offset > `pos` that sits on a char boundary.
/// `pos` must be < `s.len()`.
fn next_char_boundary(s: &str, pos: usize) -> usize {
    let mut p = pos + 1;
    while p < s.len() && !s.is_char_boundary(p) {
        p += 1;
    }
    p
}

/// Single-line text input with a bordered label.
///
/// # Props
///
/// - `focused`: whether this field currently receives keyboard input
///
/// # State
///
/// - `buffer`: current text
/// - `cursor`: byte offset into the buffer
pub struct TextField {
    pub label: &'static str,
    pub placeholder: &'static str,
    pub buffer: String,
    pub focused: bool,
    cursor: usize,
}

impl TextField {
    pub fn new(label: &'static str, placeholder: &'static str) -> Self {
        Self {
            label,
            placeholder,
            buffer: String::new(),
            focused: false,
            cursor: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.trim().is_empty()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    /// Column of the cursor in chars (what the terminal needs, not bytes).
    fn cursor_col(&self) -> u16 {
        self.buffer[..self.cursor].chars().count() as u16
    }

    /// First visible column when the buffer is wider than the field.
    /// Keeps the cursor inside the window.
    fn scroll_start(&self, inner_width: u16) -> u16 {
        if inner_width == 0 {
            return 0;
        }
        self.cursor_col().saturating_sub(inner_width - 1)
    }
}

impl Component for TextField {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::bordered()
            .border_type(ratatui::widgets::BorderType::Rounded)
            .border_style(border_style)
            .title_style(border_style)
            .title(self.label);

        let inner_width = area.width.saturating_sub(2);
        let scroll = self.scroll_start(inner_width);

        let paragraph = if self.buffer.is_empty() {
            Paragraph::new(self.placeholder)
                .style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM))
        } else {
            let visible: String = self
                .buffer
                .chars()
                .skip(scroll as usize)
                .take(inner_width as usize)
                .collect();
            Paragraph::new(visible).style(Style::default().fg(Color::White))
        };

        frame.render_widget(paragraph.block(block), area);

        if self.focused {
            let cursor_x = area.x + 1 + (self.cursor_col() - scroll);
            frame.set_cursor_position((cursor_x, area.y + 1));
        }
    }
}

impl EventHandler for TextField {
    type Event = FieldEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) if *c != '\n' => {
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                Some(FieldEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                // Single-line field: drop any pasted line breaks
                let text: String = text.chars().filter(|c| *c != '\n' && *c != '\r').collect();
                self.buffer.insert_str(self.cursor, &text);
                self.cursor += text.len();
                Some(FieldEvent::ContentChanged)
            }
            TuiEvent::Backspace => {
                if self.cursor > 0 {
                    let prev = prev_char_boundary(&self.buffer, self.cursor);
                    self.buffer.drain(prev..self.cursor);
                    self.cursor = prev;
                    Some(FieldEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::Delete => {
                if self.cursor < self.buffer.len() {
                    let next = next_char_boundary(&self.buffer, self.cursor);
                    self.buffer.drain(self.cursor..next);
                    Some(FieldEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorLeft => {
                if self.cursor > 0 {
                    self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                }
                None
            }
            TuiEvent::CursorRight => {
                if self.cursor < self.buffer.len() {
                    self.cursor = next_char_boundary(&self.buffer, self.cursor);
                }
                None
            }
            TuiEvent::CursorHome => {
                self.cursor = 0;
                None
            }
            TuiEvent::CursorEnd => {
                self.cursor = self.buffer.len();
                None
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_text_field_new() {
        let field = TextField::new("Zone Number", "Enter zone number");
        assert!(field.buffer.is_empty());
        assert!(field.is_empty());
        assert!(!field.focused);
    }

    #[test]
    fn test_handle_input() {
        let mut field = TextField::new("Zone Number", "");

        let res = field.handle_event(&TuiEvent::InputChar('5'));
        assert_eq!(res, Some(FieldEvent::ContentChanged));
        assert_eq!(field.buffer, "5");

        let res = field.handle_event(&TuiEvent::InputChar('0'));
        assert_eq!(res, Some(FieldEvent::ContentChanged));
        assert_eq!(field.buffer, "50");

        let res = field.handle_event(&TuiEvent::Backspace);
        assert_eq!(res, Some(FieldEvent::ContentChanged));
        assert_eq!(field.buffer, "5");
    }

    #[test]
    fn test_paste_strips_line_breaks() {
        let mut field = TextField::new("Zone Number", "");
        field.handle_event(&TuiEvent::Paste("3\r\n20".to_string()));
        assert_eq!(field.buffer, "320");
    }

    #[test]
    fn test_cursor_editing_mid_buffer() {
        let mut field = TextField::new("Zone Number", "");
        for c in "120".chars() {
            field.handle_event(&TuiEvent::InputChar(c));
        }
        field.handle_event(&TuiEvent::CursorLeft);
        field.handle_event(&TuiEvent::CursorLeft);
        field.handle_event(&TuiEvent::InputChar('5'));
        assert_eq!(field.buffer, "1520");

        field.handle_event(&TuiEvent::Delete);
        assert_eq!(field.buffer, "150");
    }

    #[test]
    fn test_whitespace_only_counts_as_empty() {
        let mut field = TextField::new("Zone Number", "");
        field.handle_event(&TuiEvent::InputChar(' '));
        assert!(field.is_empty());
    }

    #[test]
    fn test_render_shows_label_and_placeholder() {
        let backend = TestBackend::new(40, 3);
        let mut terminal = Terminal::new(backend).unwrap();

        let mut field = TextField::new("Zone Number", "Enter zone number");

        terminal
            .draw(|f| {
                field.render(f, f.area());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer.content().iter().map(|c| c.symbol()).collect::<String>();

        assert!(text.contains("Zone Number"));
        assert!(text.contains("Enter zone number"));
    }
}
