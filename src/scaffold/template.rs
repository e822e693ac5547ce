//! Minimal text templating for the generated files. Each template is a
//! constant owned by its updater; placeholders are fixed tokens like
//! `{{test_id}}`.

/// Replaces every occurrence of each token, in slice order. A single pass
/// per token: substituted values are never expanded again for a token that
/// was already applied, and the renderer does no escaping of the values.
pub fn render(template: &str, substitutions: &[(&str, &str)]) -> String {
    let mut rendered = template.to_string();
    for (token, value) in substitutions {
        rendered = rendered.replace(token, value);
    }
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_every_occurrence() {
        let out = render(
            "fn test_{{id}}() { run(\"{{id}}\") }",
            &[("{{id}}", "abc402a")],
        );
        assert_eq!(out, "fn test_abc402a() { run(\"abc402a\") }");
    }

    #[test]
    fn substitutions_apply_in_declared_order() {
        // a value containing an already-applied token is left alone
        let out = render(
            "{{first}} {{second}}",
            &[("{{first}}", "1"), ("{{second}}", "{{first}}")],
        );
        assert_eq!(out, "1 {{first}}");
    }

    #[test]
    fn values_round_trip_verbatim() {
        let input = "1 2\n";
        let output = "3\n";
        let rendered = render(
            "in:{{input_raw}};out:{{output_raw}}",
            &[("{{input_raw}}", input), ("{{output_raw}}", output)],
        );
        assert_eq!(rendered, "in:1 2\n;out:3\n");
    }
}
