//! Cleans raw model text so it can be parsed as JSON
//!
//! Models wrap JSON in Markdown code fences more often than not, sometimes more
//! than once and sometimes unbalanced. Rather than parse fences, every line that
//! mentions the fence marker is dropped.

use tracing::debug;

pub const FENCE: &str = "```";

/// Strips surrounding whitespace and every line containing [`FENCE`].
///
/// Returns an empty string for empty or whitespace-only input. The raw text is
/// logged at debug level before cleaning to make model drift visible.
pub fn sanitize(raw: &str) -> String {
    debug!("--- MODEL RESPONSE ---\n{}\n----------------------", raw);

    let cleaned = raw.trim();
    if !cleaned.contains(FENCE) {
        return cleaned.to_string();
    }

    cleaned
        .split('\n')
        .filter(|line| !line.contains(FENCE))
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(sanitize(""), "");
        assert_eq!(sanitize("  \n\t "), "");
    }

    #[test]
    fn test_plain_json_is_trimmed() {
        assert_eq!(sanitize("  {\"a\": 1}\n"), "{\"a\": 1}");
    }

    #[test]
    fn test_fenced_json() {
        let raw = "```json\n{\n  \"step1\": \"a\"\n}\n```";
        assert_eq!(sanitize(raw), "{\n  \"step1\": \"a\"\n}");
    }

    #[test]
    fn test_every_fence_line_removed() {
        let raw = "Oto wynik:\n```json\n{\"a\": 1}\n```\n```\ntrailing";
        assert_eq!(sanitize(raw), "Oto wynik:\n{\"a\": 1}\ntrailing");
    }

    #[test]
    fn test_unbalanced_fence() {
        assert_eq!(sanitize("```json\n{\"a\": 1}"), "{\"a\": 1}");
    }

    #[test]
    fn test_inline_fence_drops_whole_line() {
        assert_eq!(sanitize("{\"a\": 1}\nsee ```code``` here"), "{\"a\": 1}");
    }

    #[test]
    fn test_only_fences() {
        assert_eq!(sanitize("```\n```"), "");
    }

    proptest! {
        #[test]
        fn test_sanitize_is_idempotent(raw in ".*") {
            let once = sanitize(&raw);
            prop_assert_eq!(sanitize(&once), once);
        }

        #[test]
        fn test_fenced_input_is_idempotent(
            lines in prop::collection::vec(prop_oneof![
                Just("```".to_string()),
                Just("```json".to_string()),
                Just("  ".to_string()),
                "[ a-z{}\":,`]{0,12}",
            ], 0..12),
        ) {
            let raw = lines.join("\n");
            let once = sanitize(&raw);
            prop_assert_eq!(sanitize(&once), once);
        }

        #[test]
        fn test_content_lines_survive_in_order(
            entries in prop::collection::vec(
                prop_oneof![
                    "[a-z{}:,]{1,16}".prop_map(Some),
                    Just(None),
                ],
                1..16,
            ),
        ) {
            let content: Vec<String> = entries.iter().flatten().cloned().collect();
            let raw = entries
                .iter()
                .map(|e| e.clone().unwrap_or_else(|| "```json".to_string()))
                .collect::<Vec<_>>()
                .join("\n");

            let cleaned = sanitize(&raw);
            let lines: Vec<String> = if cleaned.is_empty() {
                Vec::new()
            } else {
                cleaned.split('\n').map(str::to_string).collect()
            };
            prop_assert_eq!(lines, content);
        }
    }
}
