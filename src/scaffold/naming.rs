//! Naming rules shared by the project updaters. Pure functions, no I/O.

use std::sync::OnceLock;

use regex::Regex;

static CONTEST_CODE: OnceLock<Regex> = OnceLock::new();
static SUPPORTED_NAME: OnceLock<Regex> = OnceLock::new();

/// Splits a case-folded contest name into directory segments.
///
/// A name shaped like three letters followed by exactly three digits
/// ("abc402") nests two levels deep (`abc/402/`); anything else stays a
/// single segment (`abc_402/`).
pub fn contest_segments(folded_name: &str) -> Vec<String> {
    let code = CONTEST_CODE.get_or_init(|| Regex::new(r"^[a-z]{3}[0-9]{3}$").unwrap());
    if code.is_match(folded_name) {
        vec![folded_name[..3].to_string(), folded_name[3..].to_string()]
    } else {
        vec![folded_name.to_string()]
    }
}

/// Joins path segments into a Scala package name. A segment of digits alone
/// is not a legal identifier, so it is wrapped in backticks: `abc.`402``.
pub fn scala_package_name(segments: &[String]) -> String {
    segments
        .iter()
        .map(|segment| {
            if segment.chars().all(|c| c.is_ascii_digit()) {
                format!("`{segment}`")
            } else {
                segment.clone()
            }
        })
        .collect::<Vec<String>>()
        .join(".")
}

/// Input gate for the contest prompt: three ASCII letters naming the contest
/// family, followed by at least one word character.
pub fn is_supported_contest_name(raw: &str) -> bool {
    let pattern =
        SUPPORTED_NAME.get_or_init(|| Regex::new(r"^[A-Za-z]{3}[A-Za-z0-9_]+$").unwrap());
    pattern.is_match(raw)
}
