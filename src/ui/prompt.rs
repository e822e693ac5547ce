use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::status_bar::render_status_bar;

pub struct PromptState {
    pub input: String,
}

impl PromptState {
    pub fn new() -> Self {
        Self {
            input: String::new(),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> PromptAction {
        match key.code {
            KeyCode::Char(c) => {
                self.input.push(c);
                PromptAction::None
            }
            KeyCode::Backspace => {
                self.input.pop();
                PromptAction::None
            }
            KeyCode::Enter => PromptAction::Submit,
            KeyCode::Esc => PromptAction::Quit,
            _ => PromptAction::None,
        }
    }
}

pub enum PromptAction {
    None,
    Submit,
    Quit,
}

pub fn render_prompt(frame: &mut Frame, state: &PromptState) {
    let area = frame.area();

    let form_width = 52u16.min(area.width.saturating_sub(4));
    let form_height = 9u16.min(area.height.saturating_sub(2));
    let form_area = centered_rect(form_width, form_height, area);

    let block = Block::default()
        .title(" atcgen — new contest ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    frame.render_widget(Clear, form_area);
    frame.render_widget(block, form_area);

    let inner = form_area.inner(Margin::new(2, 1));
    let layout = Layout::vertical([
        Constraint::Length(1), // label
        Constraint::Length(1), // hint
        Constraint::Length(1), // spacer
        Constraint::Length(1), // input
        Constraint::Length(1), // spacer
        Constraint::Length(1), // status bar
    ])
    .split(inner);

    let label = Paragraph::new(Span::styled(
        "Contest name",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(label, layout[0]);

    let hint = Paragraph::new(Span::styled(
        "abcXXX — three-letter family plus the contest number",
        Style::default().fg(Color::DarkGray),
    ));
    frame.render_widget(hint, layout[1]);

    let input = Line::from(vec![
        Span::styled(
            format!(" {}", state.input),
            Style::default().fg(Color::White),
        ),
        Span::styled("▎", Style::default().fg(Color::Cyan)),
    ]);
    frame.render_widget(
        Paragraph::new(input).style(Style::default().bg(Color::DarkGray)),
        layout[3],
    );

    render_status_bar(frame, layout[5], &[("Enter", "Scaffold"), ("Esc", "Quit")]);
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
