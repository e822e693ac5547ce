use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Result, anyhow};
use crossterm::event::{Event as CrosstermEvent, EventStream, KeyCode, KeyEvent};
use futures::StreamExt;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use tokio::sync::mpsc;

use crate::atcoder::client::AtCoderClient;
use crate::atcoder::types::ContestData;
use crate::config::Config;
use crate::scaffold::{self, Language, ScaffoldSummary, naming};
use crate::ui::prompt::{self, PromptAction, PromptState};
use crate::ui::run::{self, RunOutcome, RunState};

const TICK_RATE: Duration = Duration::from_millis(100);

pub enum Screen {
    Prompt(PromptState),
    Run(RunState),
}

pub enum WorkEvent {
    Progress(String),
    Finished(Result<ScaffoldSummary>),
}

pub struct App {
    pub screen: Screen,
    pub config: Config,
    pub should_quit: bool,
    pub error_overlay: Option<String>,
    pub last_summary: Option<ScaffoldSummary>,
    client: AtCoderClient,
    work_tx: mpsc::UnboundedSender<WorkEvent>,
    work_rx: mpsc::UnboundedReceiver<WorkEvent>,
}

impl App {
    pub fn new(config: Config) -> Result<Self> {
        let (work_tx, work_rx) = mpsc::unbounded_channel();
        Ok(Self {
            screen: Screen::Prompt(PromptState::new()),
            config,
            should_quit: false,
            error_overlay: None,
            last_summary: None,
            client: AtCoderClient::new()?,
            work_tx,
            work_rx,
        })
    }

    pub async fn run(&mut self, terminal: &mut ratatui::DefaultTerminal) -> Result<()> {
        let mut events = EventStream::new();
        let mut tick = tokio::time::interval(TICK_RATE);

        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            tokio::select! {
                _ = tick.tick() => self.handle_tick(),
                Some(Ok(event)) = events.next() => {
                    if let CrosstermEvent::Key(key) = event {
                        self.handle_key(key);
                    }
                }
                Some(work) = self.work_rx.recv() => self.handle_work_event(work),
            }
        }

        Ok(())
    }

    fn render(&mut self, frame: &mut Frame) {
        match &self.screen {
            Screen::Prompt(state) => prompt::render_prompt(frame, state),
            Screen::Run(state) => run::render_run(frame, state),
        }

        if let Some(ref msg) = self.error_overlay {
            let area = frame.area();
            let overlay_width = 50u16.min(area.width.saturating_sub(4));
            let overlay_height = 8u16.min(area.height.saturating_sub(4));
            let x = area.x + (area.width.saturating_sub(overlay_width)) / 2;
            let y = area.y + (area.height.saturating_sub(overlay_height)) / 2;
            let overlay_area = Rect::new(x, y, overlay_width, overlay_height);

            frame.render_widget(Clear, overlay_area);
            let error_block = Paragraph::new(format!("\n{msg}\n\nPress Esc to dismiss"))
                .block(
                    Block::default()
                        .title(" Error ")
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::Red)),
                )
                .style(Style::default().fg(Color::Red))
                .wrap(Wrap { trim: true });
            frame.render_widget(error_block, overlay_area);
        }
    }

    fn handle_tick(&mut self) {
        if let Screen::Run(state) = &mut self.screen {
            if state.is_running() {
                state.spinner_tick = state.spinner_tick.wrapping_add(1);
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if self.error_overlay.is_some() {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
                self.error_overlay = None;
            }
            return;
        }

        match &mut self.screen {
            Screen::Prompt(state) => match state.handle_key(key) {
                PromptAction::Submit => self.submit_contest(),
                PromptAction::Quit => self.should_quit = true,
                PromptAction::None => {}
            },
            Screen::Run(state) => {
                // no cancellation mid-run; keys only act on a finished run
                if state.is_running() {
                    return;
                }
                match key.code {
                    KeyCode::Enter => self.screen = Screen::Prompt(PromptState::new()),
                    KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
                    _ => {}
                }
            }
        }
    }

    fn submit_contest(&mut self) {
        let Screen::Prompt(state) = &self.screen else {
            return;
        };
        let contest_name = state.input.trim().to_string();

        if contest_name.is_empty() {
            self.error_overlay = Some("Enter a contest name first.".to_string());
            return;
        }
        if !naming::is_supported_contest_name(&contest_name) {
            self.error_overlay = Some(format!(
                "\"{contest_name}\" is not a recognized contest name.\nExpected a 3-letter family plus a number, e.g. abc402."
            ));
            return;
        }

        let project_dir = self.config.expanded_project_dir();
        let language = match self.config.resolve_language(&project_dir) {
            Ok(language) => language,
            Err(err) => {
                self.error_overlay = Some(format!("{err:#}"));
                return;
            }
        };

        let mut state = RunState::new(contest_name.clone());
        state.push(format!(
            "language: {language}, project: {}",
            project_dir.display()
        ));
        self.screen = Screen::Run(state);

        let client = self.client.clone();
        let tx = self.work_tx.clone();
        tokio::spawn(async move {
            run_scaffold_job(client, contest_name, language, project_dir, tx).await;
        });
    }

    fn handle_work_event(&mut self, event: WorkEvent) {
        match event {
            WorkEvent::Progress(line) => {
                if let Screen::Run(state) = &mut self.screen {
                    state.push(line);
                }
            }
            WorkEvent::Finished(Ok(summary)) => {
                if let Screen::Run(state) = &mut self.screen {
                    state.outcome = Some(RunOutcome::Success(summary.to_string()));
                }
                self.last_summary = Some(summary);
            }
            WorkEvent::Finished(Err(err)) => {
                log::error!("scaffold failed: {err:#}");
                if let Screen::Run(state) = &mut self.screen {
                    state.outcome = Some(RunOutcome::Failure(format!("{err:#}")));
                }
            }
        }
    }
}

/// The fetch → fallback → update → report pipeline, run off the UI loop.
/// Fetch-layer failures are absorbed into the default dataset here; update
/// failures pass through unchanged and end the run.
async fn run_scaffold_job(
    client: AtCoderClient,
    contest_name: String,
    language: Language,
    project_dir: PathBuf,
    tx: mpsc::UnboundedSender<WorkEvent>,
) {
    let _ = tx.send(WorkEvent::Progress(format!(
        "fetching task list for {contest_name}"
    )));

    let fetched = client.fetch_contest(&contest_name).await;
    let (contest, fallback_notice) = resolve_contest_data(fetched, &contest_name);
    if let Some(notice) = fallback_notice {
        log::warn!("{notice}");
        let _ = tx.send(WorkEvent::Progress(notice));
    } else {
        let _ = tx.send(WorkEvent::Progress(format!(
            "fetched {} tasks",
            contest.tasks.len()
        )));
    }

    let _ = tx.send(WorkEvent::Progress(format!("updating {language} project")));
    let result = tokio::task::spawn_blocking(move || {
        scaffold::updater_for(language).execute(&project_dir, &contest)
    })
    .await
    .unwrap_or_else(|err| Err(anyhow!("scaffold task aborted: {err}")));
    let _ = tx.send(WorkEvent::Finished(result));
}

/// A failed or empty fetch never reaches an updater: both are replaced by
/// the canonical A-F default dataset, with a notice for the run log.
fn resolve_contest_data(
    fetched: Result<ContestData>,
    contest_name: &str,
) -> (ContestData, Option<String>) {
    match fetched {
        Ok(data) if data.tasks.is_empty() => (
            ContestData::fallback(contest_name),
            Some("fetch returned no tasks; scaffolding default tasks A-F".to_string()),
        ),
        Ok(data) => (data, None),
        Err(err) => (
            ContestData::fallback(contest_name),
            Some(format!("fetch failed ({err:#}); scaffolding default tasks A-F")),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atcoder::types::TaskData;

    #[test]
    fn fetch_error_falls_back_to_default_tasks() {
        let (contest, notice) = resolve_contest_data(Err(anyhow!("boom")), "abc402");
        assert_eq!(contest.tasks.len(), 6);
        assert!(notice.unwrap().contains("fetch failed"));
    }

    #[test]
    fn empty_result_falls_back_to_default_tasks() {
        let empty = ContestData {
            name: "abc402".to_string(),
            tasks: vec![],
        };
        let (contest, notice) = resolve_contest_data(Ok(empty), "abc402");
        assert_eq!(contest.tasks.len(), 6);
        assert!(notice.unwrap().contains("no tasks"));
    }

    #[test]
    fn fetched_data_passes_through_untouched() {
        let data = ContestData {
            name: "abc402".to_string(),
            tasks: vec![TaskData {
                name: "A".to_string(),
                href: None,
                samples: vec![],
            }],
        };
        let (contest, notice) = resolve_contest_data(Ok(data), "abc402");
        assert_eq!(contest.tasks.len(), 1);
        assert!(notice.is_none());
    }
}
