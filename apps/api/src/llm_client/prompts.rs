// Shared prompt constants and prompt-building utilities.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Fills `{name}` placeholders in `template` in a single left-to-right pass.
///
/// Substituted values are never rescanned, so caller text containing something
/// that looks like a placeholder is inserted verbatim. Braces that do not form a
/// known placeholder (JSON examples in the template) are left untouched.
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let hit = values.iter().find_map(|(key, value)| {
            after
                .strip_prefix(*key)
                .and_then(|tail| tail.strip_prefix('}'))
                .map(|tail| (*value, tail))
        });

        match hit {
            Some((value, tail)) => {
                out.push_str(value);
                rest = tail;
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_template_replaces_all_occurrences() {
        let out = fill_template("{a} and {b} and {a}", &[("a", "x"), ("b", "y")]);
        assert_eq!(out, "x and y and x");
    }

    #[test]
    fn test_fill_template_leaves_json_braces_alone() {
        let out = fill_template(r#"{"score": 1, "name": "{name}"}"#, &[("name", "Ada")]);
        assert_eq!(out, r#"{"score": 1, "name": "Ada"}"#);
    }

    #[test]
    fn test_fill_template_does_not_rescan_values() {
        let out = fill_template("Q: {question}\nA: {answer}", &[
            ("question", "what is {answer}?"),
            ("answer", "42"),
        ]);
        assert_eq!(out, "Q: what is {answer}?\nA: 42");
    }

    #[test]
    fn test_fill_template_unknown_placeholder_kept() {
        assert_eq!(fill_template("{unknown}", &[("a", "x")]), "{unknown}");
    }

    #[test]
    fn test_fill_template_trailing_open_brace() {
        assert_eq!(fill_template("end {", &[("a", "x")]), "end {");
    }
}
