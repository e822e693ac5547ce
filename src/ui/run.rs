use ratatui::{
    Frame,
    layout::{Constraint, Layout, Margin},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::status_bar::render_status_bar;

const SPINNER: [&str; 10] = [
    "\u{280b}", "\u{2819}", "\u{2839}", "\u{2838}", "\u{283c}", "\u{2834}", "\u{2826}",
    "\u{2827}", "\u{2807}", "\u{280f}",
];

pub struct RunState {
    pub contest_name: String,
    pub lines: Vec<String>,
    pub spinner_tick: usize,
    pub outcome: Option<RunOutcome>,
}

pub enum RunOutcome {
    Success(String),
    Failure(String),
}

impl RunState {
    pub fn new(contest_name: String) -> Self {
        Self {
            contest_name,
            lines: Vec::new(),
            spinner_tick: 0,
            outcome: None,
        }
    }

    pub fn push(&mut self, line: String) {
        self.lines.push(line);
    }

    pub fn is_running(&self) -> bool {
        self.outcome.is_none()
    }
}

pub fn render_run(frame: &mut Frame, state: &RunState) {
    let area = frame.area();

    let block = Block::default()
        .title(format!(" scaffolding {} ", state.contest_name))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let inner = area.inner(Margin::new(2, 1));
    let layout =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1), Constraint::Length(1)])
            .split(inner);

    let mut lines: Vec<Line> = state
        .lines
        .iter()
        .map(|l| Line::from(Span::styled(l.clone(), Style::default().fg(Color::Gray))))
        .collect();

    match &state.outcome {
        None => {
            let spinner = SPINNER[state.spinner_tick % SPINNER.len()];
            lines.push(Line::from(Span::styled(
                format!("{spinner} working..."),
                Style::default().fg(Color::Yellow),
            )));
        }
        Some(RunOutcome::Success(msg)) => {
            lines.push(Line::from(Span::styled(
                format!("\u{2714} {msg}"),
                Style::default().fg(Color::Green),
            )));
        }
        Some(RunOutcome::Failure(msg)) => {
            lines.push(Line::from(Span::styled(
                format!("\u{2718} {msg}"),
                Style::default().fg(Color::Red),
            )));
        }
    }

    // keep the tail visible when the log outgrows the pane
    let visible = layout[0].height as usize;
    let scroll = lines.len().saturating_sub(visible) as u16;
    frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), layout[0]);

    let hints: &[(&str, &str)] = if state.is_running() {
        &[]
    } else {
        &[("Enter", "New contest"), ("q/Esc", "Quit")]
    };
    if !hints.is_empty() {
        render_status_bar(frame, layout[2], hints);
    }
}
