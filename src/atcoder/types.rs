/// Task labels used when a contest could not be fetched. Every fallback task
/// carries three blank sample pairs so the generated test files still have
/// slots to fill in by hand.
pub const DEFAULT_TASK_NAMES: [&str; 6] = ["A", "B", "C", "D", "E", "F"];

#[derive(Debug, Clone)]
pub struct ContestData {
    /// Contest identifier as typed by the user (e.g. "abc402").
    pub name: String,
    /// Tasks in listing order. Never empty by the time an updater sees it.
    pub tasks: Vec<TaskData>,
}

#[derive(Debug, Clone)]
pub struct TaskData {
    /// Short label, e.g. "A". Case folding is a per-language concern.
    pub name: String,
    /// Detail-page path relative to the site root. None means no samples
    /// can be fetched for this task.
    pub href: Option<String>,
    pub samples: Vec<SampleCase>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleCase {
    pub input: String,
    pub output: String,
}

impl SampleCase {
    pub fn blank() -> Self {
        Self {
            input: String::new(),
            output: String::new(),
        }
    }
}

impl ContestData {
    /// The canonical default dataset: tasks A-F, three blank samples each.
    pub fn fallback(contest_name: &str) -> Self {
        Self {
            name: contest_name.to_string(),
            tasks: DEFAULT_TASK_NAMES
                .iter()
                .map(|name| TaskData {
                    name: (*name).to_string(),
                    href: None,
                    samples: vec![SampleCase::blank(); 3],
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_has_six_tasks_with_three_blank_samples() {
        let contest = ContestData::fallback("abc402");
        assert_eq!(contest.name, "abc402");
        let names: Vec<&str> = contest.tasks.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["A", "B", "C", "D", "E", "F"]);
        for task in &contest.tasks {
            assert!(task.href.is_none());
            assert_eq!(task.samples.len(), 3);
            assert!(task.samples.iter().all(|s| s == &SampleCase::blank()));
        }
    }
}
