use std::time::Duration;

use anyhow::{Context, Result, bail};
use reqwest::Client;

use super::parse;
use super::types::{ContestData, TaskData};

const ATCODER_BASE: &str = "https://atcoder.jp";

/// Delay step between detail-page requests. Task i waits i steps before its
/// request goes out, which keeps the burst off AtCoder without changing the
/// order of the assembled result.
const FETCH_STAGGER: Duration = Duration::from_millis(1000);

#[derive(Clone)]
pub struct AtCoderClient {
    client: Client,
}

impl AtCoderClient {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self { client })
    }

    /// Fetches the task listing for a contest and the sample test cases of
    /// every listed task. Fails if the listing is unreachable or contains no
    /// tasks; the caller decides whether to fall back to default data.
    pub async fn fetch_contest(&self, contest_name: &str) -> Result<ContestData> {
        let url = format!("{ATCODER_BASE}/contests/{contest_name}/tasks");
        log::info!("fetching task listing from {url}");

        let listing = self.get_text(&url).await?;
        let tasks = parse::task_list(&listing);
        if tasks.is_empty() {
            bail!("task listing for {contest_name} contained no tasks");
        }
        log::info!("{contest_name}: {} tasks listed", tasks.len());

        let fetches = tasks
            .into_iter()
            .enumerate()
            .map(|(index, task)| self.fetch_task_samples(index, task));
        // join_all keeps the listing order no matter which request
        // completes first
        let tasks = futures::future::join_all(fetches)
            .await
            .into_iter()
            .collect::<Result<Vec<TaskData>>>()?;

        Ok(ContestData {
            name: contest_name.to_string(),
            tasks,
        })
    }

    async fn fetch_task_samples(&self, index: usize, mut task: TaskData) -> Result<TaskData> {
        let Some(href) = task.href.clone() else {
            return Ok(task);
        };

        tokio::time::sleep(FETCH_STAGGER * index as u32).await;

        let url = format!("{ATCODER_BASE}{href}");
        let detail = self.get_text(&url).await?;
        task.samples = parse::sample_cases(&detail);
        log::info!("task {}: {} samples", task.name, task.samples.len());
        Ok(task)
    }

    async fn get_text(&self, url: &str) -> Result<String> {
        self.client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Failed to request {url}"))?
            .error_for_status()
            .with_context(|| format!("Request to {url} was rejected"))?
            .text()
            .await
            .with_context(|| format!("Failed to read response body from {url}"))
    }
}
