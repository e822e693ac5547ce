use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use super::template::render;
use super::{Language, ProjectUpdater, ScaffoldSummary, naming};
use crate::atcoder::types::{ContestData, TaskData};

pub struct ScalaProjectUpdater;

impl ProjectUpdater for ScalaProjectUpdater {
    fn language(&self) -> Language {
        Language::Scala
    }

    fn execute(&self, project_root: &Path, contest: &ContestData) -> Result<ScaffoldSummary> {
        // Scala folds the contest name only; task names keep their case so
        // the generated objects are A, B, ... as on the judge
        let contest_name = contest.name.to_lowercase();
        let segments = naming::contest_segments(&contest_name);
        let package_name = naming::scala_package_name(&segments);

        let src_dir = segments
            .iter()
            .fold(project_root.join("src/main/scala"), |dir, seg| dir.join(seg));
        let test_dir = segments
            .iter()
            .fold(project_root.join("src/test/scala"), |dir, seg| dir.join(seg));
        fs::create_dir_all(&src_dir)
            .with_context(|| format!("Failed to create {}", src_dir.display()))?;
        fs::create_dir_all(&test_dir)
            .with_context(|| format!("Failed to create {}", test_dir.display()))?;

        let mut summary = ScaffoldSummary {
            language: Language::Scala,
            project_dir: project_root.to_path_buf(),
            sources_written: 0,
            tests_written: 0,
            targets_declared: 0,
        };

        for task in &contest.tasks {
            let source_path = src_dir.join(format!("{}.scala", task.name));
            fs::write(&source_path, main_code(&package_name))
                .with_context(|| format!("Failed to write {}", source_path.display()))?;
            summary.sources_written += 1;

            let test_path = test_dir.join(format!("Test{}.scala", task.name));
            fs::write(&test_path, test_code(&contest_name, &package_name, task))
                .with_context(|| format!("Failed to write {}", test_path.display()))?;
            summary.tests_written += 1;
        }

        log::info!(
            "scala scaffold for {contest_name}: {} tasks into {}",
            contest.tasks.len(),
            project_root.display()
        );
        Ok(summary)
    }
}

fn main_code(package_name: &str) -> String {
    render(MAIN_HEAD, &[("{{package_name}}", package_name)])
}

fn test_code(contest_name: &str, package_name: &str, task: &TaskData) -> String {
    let head = render(
        TEST_HEAD,
        &[
            ("{{package_name}}", package_name),
            ("{{task_name}}", &task.name),
        ],
    );
    let test_id = format!("{contest_name}{}", task.name);
    let bodies: Vec<String> = task
        .samples
        .iter()
        .enumerate()
        .map(|(index, sample)| {
            render(
                TEST_BODY,
                &[
                    ("{{test_id}}", &test_id),
                    ("{{test_number}}", &index.to_string()),
                    ("{{input_raw}}", &sample.input),
                    ("{{output_raw}}", &sample.output),
                ],
            )
        })
        .collect();
    format!("{head}\n{}{TEST_FOOT}", bodies.join("\n"))
}

const MAIN_HEAD: &str = "package {{package_name}}\n";

const TEST_HEAD: &str = r#"package {{package_name}}

import java.io.{ByteArrayInputStream, ByteArrayOutputStream, PrintStream}

class Test{{task_name}} extends munit.FunSuite {
  def runWithIO(input: String): String = {
    val inputStream = new ByteArrayInputStream(input.getBytes)
    val outputStream = new ByteArrayOutputStream()
    Console.withIn(inputStream) {
      Console.withOut(new PrintStream(outputStream)) {
        {{task_name}}.main(args = Array.empty[String])
      }
    }
    outputStream.toString
  }
"#;

const TEST_BODY: &str = r#"  test("{{test_id}}_{{test_number}}") {
    val input = """{{input_raw}}"""
    val expectedOutput = """{{output_raw}}"""
    val actualOutput = runWithIO(input)
    assertEquals(actualOutput, expectedOutput)
  }
"#;

const TEST_FOOT: &str = "}\n";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atcoder::types::SampleCase;
    use tempfile::TempDir;

    fn one_task_contest() -> ContestData {
        ContestData {
            name: "abc402".to_string(),
            tasks: vec![TaskData {
                name: "A".to_string(),
                href: Some("/contests/abc402/tasks/abc402_a".to_string()),
                samples: vec![SampleCase {
                    input: "1 2\n".to_string(),
                    output: "3\n".to_string(),
                }],
            }],
        }
    }

    #[test]
    fn scaffolds_package_stub_and_test_class() {
        let dir = TempDir::new().unwrap();
        let summary = ScalaProjectUpdater
            .execute(dir.path(), &one_task_contest())
            .unwrap();
        assert_eq!(summary.sources_written, 1);
        assert_eq!(summary.targets_declared, 0);

        let stub =
            std::fs::read_to_string(dir.path().join("src/main/scala/abc/402/A.scala")).unwrap();
        assert_eq!(stub, "package abc.`402`\n");

        let test_file =
            std::fs::read_to_string(dir.path().join("src/test/scala/abc/402/TestA.scala"))
                .unwrap();
        assert!(test_file.starts_with("package abc.`402`\n"));
        assert!(test_file.contains("class TestA extends munit.FunSuite"));
        assert!(test_file.contains("A.main(args = Array.empty[String])"));
        assert!(test_file.trim_end().ends_with('}'));
    }

    #[test]
    fn test_labels_and_samples_render_verbatim() {
        let dir = TempDir::new().unwrap();
        ScalaProjectUpdater
            .execute(dir.path(), &one_task_contest())
            .unwrap();
        let test_file =
            std::fs::read_to_string(dir.path().join("src/test/scala/abc/402/TestA.scala"))
                .unwrap();
        // contest name folded, task name untouched, sample index 0-based
        assert!(test_file.contains(r#"test("abc402A_0")"#));
        assert!(test_file.contains("val input = \"\"\"1 2\n\"\"\""));
        assert!(test_file.contains("val expectedOutput = \"\"\"3\n\"\"\""));
    }

    #[test]
    fn every_task_gets_its_own_files() {
        let dir = TempDir::new().unwrap();
        let contest = ContestData::fallback("xyz999");
        ScalaProjectUpdater.execute(dir.path(), &contest).unwrap();
        for name in ["A", "B", "C", "D", "E", "F"] {
            assert!(
                dir.path()
                    .join(format!("src/main/scala/xyz/999/{name}.scala"))
                    .exists()
            );
            assert!(
                dir.path()
                    .join(format!("src/test/scala/xyz/999/Test{name}.scala"))
                    .exists()
            );
        }
    }
}
