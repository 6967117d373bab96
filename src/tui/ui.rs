use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::FORM_HEIGHT;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

/// Width of the centered form column (the page is a narrow card).
const FORM_WIDTH: u16 = 48;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};

    // Center the form column horizontally
    let [column] = Layout::horizontal([Length(FORM_WIDTH.min(frame.area().width))])
        .flex(Flex::Center)
        .areas(frame.area());

    let layout = Layout::vertical([
        Length(3), // title + subtitle
        Length(1),
        Length(FORM_HEIGHT),
        Length(3), // submit row
        Length(1), // error line
        Min(0),
        Length(1), // status line
    ]);
    let [title_area, _, form_area, submit_area, error_area, _, status_area] =
        layout.areas(column);

    draw_title(frame, title_area);
    tui.form.render(frame, form_area);
    draw_submit_row(frame, submit_area, app.is_loading, spinner_frame);
    if let Some(error_msg) = &app.error {
        draw_error_line(frame, error_area, error_msg);
    }
    draw_status_line(frame, status_area, &app.status_message);
}

fn draw_title(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "Qatar Location Finder",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Enter your address details to find the location",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// The submit control. Label toggles between the action hint and a
/// spinner while a lookup is in flight (resubmission is disabled then,
/// so the hint disappears with it).
fn draw_submit_row(frame: &mut Frame, area: Rect, is_loading: bool, spinner_frame: usize) {
    let (label, style) = if is_loading {
        let spinner = SPINNER_FRAMES[spinner_frame % SPINNER_FRAMES.len()];
        (
            format!("{spinner} Loading..."),
            Style::default().fg(Color::DarkGray),
        )
    } else {
        (
            "Find Location (Enter)".to_string(),
            Style::default().fg(Color::Green),
        )
    };

    let button = Paragraph::new(label)
        .alignment(Alignment::Center)
        .style(style)
        .block(
            Block::bordered()
                .border_type(ratatui::widgets::BorderType::Rounded)
                .border_style(style),
        );
    frame.render_widget(button, area);
}

fn draw_error_line(frame: &mut Frame, area: Rect, error_msg: &str) {
    let error = Paragraph::new(error_msg)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Red));
    frame.render_widget(error, area);
}

fn draw_status_line(frame: &mut Frame, area: Rect, status: &str) {
    let line = Line::from(vec![
        Span::styled(status.to_string(), Style::default().fg(Color::DarkGray)),
        Span::styled(
            "  Tab: next · Enter: find · Esc: quit",
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;
    use crate::tui::TuiState;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_text(app: &App, tui: &mut TuiState) -> String {
        let backend = TestBackend::new(60, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                draw_ui(f, app, tui, 0);
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_draw_ui_idle() {
        let app = test_app();
        let mut tui = TuiState::new();
        let text = render_to_text(&app, &mut tui);

        assert!(text.contains("Qatar Location Finder"));
        assert!(text.contains("Find Location"));
        assert!(!text.contains("Loading..."));
    }

    #[test]
    fn test_draw_ui_loading_replaces_submit_label() {
        let mut app = test_app();
        app.is_loading = true;
        let mut tui = TuiState::new();
        let text = render_to_text(&app, &mut tui);

        assert!(text.contains("Loading..."));
        assert!(!text.contains("Find Location"));
    }

    #[test]
    fn test_draw_ui_shows_error_only_when_set() {
        let mut app = test_app();
        let mut tui = TuiState::new();

        let text = render_to_text(&app, &mut tui);
        assert!(!text.contains("Invalid address entered."));

        app.error = Some("Invalid address entered.".to_string());
        let text = render_to_text(&app, &mut tui);
        assert!(text.contains("Invalid address entered."));
    }
}
