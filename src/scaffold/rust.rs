use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use super::template::render;
use super::{Language, ProjectUpdater, ScaffoldSummary, naming};
use crate::atcoder::types::{ContestData, TaskData};

pub struct RustProjectUpdater;

impl ProjectUpdater for RustProjectUpdater {
    fn language(&self) -> Language {
        Language::Rust
    }

    fn execute(&self, project_root: &Path, contest: &ContestData) -> Result<ScaffoldSummary> {
        // Rust folds both the contest and the task names
        let contest_name = contest.name.to_lowercase();
        let segments = naming::contest_segments(&contest_name);

        let src_dir = segments
            .iter()
            .fold(project_root.join("src"), |dir, seg| dir.join(seg));
        let test_dir = project_root.join("tests");
        fs::create_dir_all(&src_dir)
            .with_context(|| format!("Failed to create {}", src_dir.display()))?;
        fs::create_dir_all(&test_dir)
            .with_context(|| format!("Failed to create {}", test_dir.display()))?;

        let mut summary = ScaffoldSummary {
            language: Language::Rust,
            project_dir: project_root.to_path_buf(),
            sources_written: 0,
            tests_written: 0,
            targets_declared: 0,
        };
        let mut manifest_addition = String::new();

        for task in &contest.tasks {
            let task_name = task.name.to_lowercase();
            let target_name = format!("{contest_name}{task_name}");
            // manifest paths stay relative to the project root
            let source_rel: String = {
                let mut parts = vec!["src".to_string()];
                parts.extend(segments.iter().cloned());
                parts.push(format!("{task_name}.rs"));
                parts.join("/")
            };

            let source_path = src_dir.join(format!("{task_name}.rs"));
            fs::write(&source_path, "")
                .with_context(|| format!("Failed to write {}", source_path.display()))?;
            summary.sources_written += 1;

            let test_path = test_dir.join(format!("test_{target_name}.rs"));
            fs::write(&test_path, test_code(&target_name, task))
                .with_context(|| format!("Failed to write {}", test_path.display()))?;
            summary.tests_written += 1;

            manifest_addition.push_str(&render(
                BIN_TARGET,
                &[("{{target_name}}", &target_name), ("{{source_path}}", &source_rel)],
            ));
            summary.targets_declared += 1;
        }

        // Append-only: the existing manifest text is preserved verbatim.
        // Re-running the scaffold duplicates the [[bin]] entries; known gap.
        let manifest_path = project_root.join("Cargo.toml");
        let manifest = fs::read_to_string(&manifest_path)
            .with_context(|| format!("Failed to read {}", manifest_path.display()))?;
        fs::write(&manifest_path, manifest + &manifest_addition)
            .with_context(|| format!("Failed to write {}", manifest_path.display()))?;

        log::info!(
            "rust scaffold for {contest_name}: {} tasks into {}",
            contest.tasks.len(),
            project_root.display()
        );
        Ok(summary)
    }
}

fn test_code(target_name: &str, task: &TaskData) -> String {
    let bodies: Vec<String> = task
        .samples
        .iter()
        .enumerate()
        .map(|(index, sample)| {
            render(
                TEST_BODY,
                &[
                    ("{{test_id}}", target_name),
                    ("{{test_number}}", &index.to_string()),
                    ("{{input_raw}}", &sample.input),
                    ("{{output_raw}}", &sample.output),
                ],
            )
        })
        .collect();
    format!("{TEST_HEAD}\n{}", bodies.join("\n"))
}

const TEST_HEAD: &str = "use std::process::Command;\n";

const TEST_BODY: &str = r##"#[test]
fn test_{{test_id}}_{{test_number}}() {
    let input_raw = r#"{{input_raw}}"#;
    let output_raw = r#"{{output_raw}}"#;

    let mut cmd = Command::new("cargo");
    cmd.args(["run", "--bin", "{{test_id}}"])
        .stdin(std::process::Stdio::piped())
        .stdout(std::process::Stdio::piped());

    let mut child = cmd.spawn().expect("Failed to spawn process");

    use std::io::Write;
    let stdin = child.stdin.as_mut().expect("Failed to open stdin");
    stdin
        .write_all(input_raw.as_bytes())
        .expect("Failed to write to stdin");

    let output = child.wait_with_output().expect("Failed to read stdout");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(stdout, output_raw);
}
"##;

const BIN_TARGET: &str = "\n[[bin]]\nname = \"{{target_name}}\"\npath = \"{{source_path}}\"\n";
