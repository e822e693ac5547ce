//! Selector-based extraction of task listings and sample test cases from
//! AtCoder contest pages. Pure string-in, data-out; all fetching lives in
//! [`super::client`].

use std::sync::OnceLock;

use scraper::{ElementRef, Html, Selector};

use super::types::{SampleCase, TaskData};

static SELECTOR_TASK_CELL: OnceLock<Selector> = OnceLock::new();
static SELECTOR_TASK_LINK: OnceLock<Selector> = OnceLock::new();
static SELECTOR_PART: OnceLock<Selector> = OnceLock::new();
static SELECTOR_PART_HEADING: OnceLock<Selector> = OnceLock::new();
static SELECTOR_PART_PRE: OnceLock<Selector> = OnceLock::new();

/// Extracts `{name, href}` pairs from a contest's task-listing page, in
/// listing order. Cells without a link are skipped; samples start empty.
pub fn task_list(html: &str) -> Vec<TaskData> {
    let document = Html::parse_document(html);

    let cell_selector = SELECTOR_TASK_CELL
        .get_or_init(|| Selector::parse("td.text-center.no-break").unwrap());
    let link_selector = SELECTOR_TASK_LINK.get_or_init(|| Selector::parse("a").unwrap());

    document
        .select(cell_selector)
        .filter_map(|cell| {
            let href = cell
                .select(link_selector)
                .next()
                .and_then(|a| a.attr("href"))?;
            Some(TaskData {
                name: text_of(cell).trim().to_string(),
                href: Some(href.to_string()),
                samples: Vec::new(),
            })
        })
        .collect()
}

/// Extracts ordered sample input/output pairs from a task's detail page.
///
/// The page has no stable ids for samples, so the `div.part` blocks are
/// walked in document order and matched against the next expected heading,
/// "Sample Input N" / "Sample Output N" with N starting at 1. The walk stops
/// growing at the first missing index; a page without "Sample Input 1"
/// yields no pairs.
pub fn sample_cases(html: &str) -> Vec<SampleCase> {
    let document = Html::parse_document(html);

    let part_selector = SELECTOR_PART.get_or_init(|| Selector::parse("div.part").unwrap());
    let heading_selector = SELECTOR_PART_HEADING.get_or_init(|| Selector::parse("h3").unwrap());
    let pre_selector = SELECTOR_PART_PRE.get_or_init(|| Selector::parse("pre").unwrap());

    let mut inputs: Vec<String> = Vec::new();
    let mut outputs: Vec<String> = Vec::new();

    for part in document.select(part_selector) {
        let Some(heading) = part.select(heading_selector).next() else {
            continue;
        };
        let heading = text_of(heading);
        let heading = heading.trim();
        let Some(pre) = part.select(pre_selector).next() else {
            continue;
        };

        if heading == format!("Sample Input {}", inputs.len() + 1) {
            inputs.push(text_of(pre));
        } else if heading == format!("Sample Output {}", outputs.len() + 1) {
            outputs.push(text_of(pre));
        }
    }

    inputs
        .into_iter()
        .zip(outputs)
        .map(|(input, output)| SampleCase { input, output })
        .collect()
}

fn text_of(element: ElementRef) -> String {
    element.text().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TASK_LISTING: &str = r#"
        <table><tbody>
            <tr>
                <td class="text-center no-break"><a href="/contests/abc402/tasks/abc402_a">A</a></td>
                <td><a href="/contests/abc402/tasks/abc402_a">CBC</a></td>
            </tr>
            <tr>
                <td class="text-center no-break"><a href="/contests/abc402/tasks/abc402_b">B</a></td>
                <td><a href="/contests/abc402/tasks/abc402_b">Restaurant Queue</a></td>
            </tr>
            <tr>
                <td class="text-center no-break">no link here</td>
            </tr>
        </tbody></table>
    "#;

    #[test]
    fn task_list_keeps_listing_order_and_hrefs() {
        let tasks = task_list(TASK_LISTING);
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].name, "A");
        assert_eq!(
            tasks[0].href.as_deref(),
            Some("/contests/abc402/tasks/abc402_a")
        );
        assert_eq!(tasks[1].name, "B");
        assert!(tasks.iter().all(|t| t.samples.is_empty()));
    }

    #[test]
    fn task_list_of_empty_page_is_empty() {
        assert!(task_list("<html><body></body></html>").is_empty());
    }

    fn sample_part(kind: &str, index: usize, body: &str) -> String {
        format!("<div class=\"part\"><section><h3>Sample {kind} {index}</h3><pre>{body}</pre></section></div>")
    }

    #[test]
    fn sample_cases_pairs_inputs_with_outputs_in_order() {
        let html = format!(
            "<html><body>{}{}{}{}</body></html>",
            sample_part("Input", 1, "1 2\n"),
            sample_part("Output", 1, "3\n"),
            sample_part("Input", 2, "10 20\n"),
            sample_part("Output", 2, "30\n"),
        );
        let samples = sample_cases(&html);
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].input, "1 2\n");
        assert_eq!(samples[0].output, "3\n");
        assert_eq!(samples[1].input, "10 20\n");
        assert_eq!(samples[1].output, "30\n");
    }

    #[test]
    fn sample_cases_stops_at_first_missing_index() {
        // index 2 is missing, so the later "Sample Input 3" must not count
        let html = format!(
            "<html><body>{}{}{}{}</body></html>",
            sample_part("Input", 1, "a\n"),
            sample_part("Output", 1, "b\n"),
            sample_part("Input", 3, "c\n"),
            sample_part("Output", 3, "d\n"),
        );
        let samples = sample_cases(&html);
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].input, "a\n");
    }

    #[test]
    fn sample_cases_without_first_label_yield_nothing() {
        let html = format!(
            "<html><body>{}</body></html>",
            sample_part("Input", 2, "orphan\n")
        );
        assert!(sample_cases(&html).is_empty());
    }

    #[test]
    fn unrelated_parts_are_ignored() {
        let html = format!(
            "<html><body><div class=\"part\"><h3>Constraints</h3><pre>1 &lt;= N</pre></div>{}{}</body></html>",
            sample_part("Input", 1, "5\n"),
            sample_part("Output", 1, "25\n"),
        );
        let samples = sample_cases(&html);
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].output, "25\n");
    }
}
