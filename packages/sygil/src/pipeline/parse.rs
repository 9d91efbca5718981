//! Parsers for raw model output.
//!
//! Both entry points are pure and total: whatever the model emits, they
//! return a usable value. The synthesis stage is instructed to produce
//! strict JSON but routinely wraps it in code fences or commentary, so
//! [`parse_synthesis`] runs an ordered chain of salvage strategies and
//! takes the first that succeeds, ending in a safe default that never
//! shows the caller raw broken output.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::types::{Confidence, FactSpine, Lenses, Source, Synthesis};

/// Literal separating the fact summary from its trailing sources block.
pub const SOURCES_MARKER: &str = "---SOURCES---";

/// Main text used when nothing in the synthesis output is salvageable.
pub const FALLBACK_MAIN_TEXT: &str =
    "I couldn't structure that response clearly. Please try again.";

/// Uncertainty note attached when structured extraction failed.
pub const PARSE_FAILURE_NOTE: &str = "Response could not be parsed into structured format.";

// First balanced brace-delimited substring, tolerating one level of
// nested objects.
static JSON_OBJECT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\{[^{}]*(?:\{[^{}]*\}[^{}]*)*\}").expect("valid regex")
});

/// Split fact-stage output into the summary text and its citations.
///
/// The portion before the first `---SOURCES---` (trimmed) becomes the
/// fact text; the portion after is expected to be a JSON array of
/// `{title, url}` objects. A missing marker or a malformed trailing
/// block degrades to empty sources, never to a failure.
pub fn parse_fact_spine(raw: &str) -> FactSpine {
    match raw.split_once(SOURCES_MARKER) {
        Some((head, tail)) => FactSpine {
            fact_text: head.trim().to_string(),
            sources: parse_sources_block(tail),
        },
        None => FactSpine {
            fact_text: raw.to_string(),
            sources: Vec::new(),
        },
    }
}

fn parse_sources_block(tail: &str) -> Vec<Source> {
    let Ok(value) = serde_json::from_str::<Value>(tail.trim()) else {
        return Vec::new();
    };
    let Value::Array(items) = value else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(|item| {
            // Skip array elements that are not key-value objects.
            item.as_object().map(|_| Source {
                title: str_field(item, "title"),
                url: str_field(item, "url"),
            })
        })
        .collect()
}

/// Parse synthesis-stage output into its structured form.
///
/// Strategies, in order:
/// 1. Strip a wrapping code fence, parse the remainder as a JSON object.
/// 2. Find the first balanced brace-delimited substring and parse that,
///    accepted only when it carries a string `main_text`.
/// 3. Terminal fallback: first non-empty line that doesn't open a JSON
///    object becomes the main text (or a fixed apology), lenses empty,
///    and one explicit note that structured extraction failed.
///
/// After a structural parse succeeds, each nested field is defaulted
/// individually, so one ill-typed key never rejects the whole object.
pub fn parse_synthesis(raw: &str) -> Synthesis {
    let text = strip_code_fence(raw.trim());
    parse_direct(&text)
        .or_else(|| parse_embedded(&text))
        .unwrap_or_else(|| fallback(&text))
}

/// Drop fence lines (```` ``` ```` with or without a language tag),
/// keeping everything between them.
fn strip_code_fence(text: &str) -> String {
    if !text.starts_with("```") {
        return text.to_string();
    }
    text.lines()
        .filter(|line| !line.trim().starts_with("```"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn parse_direct(text: &str) -> Option<Synthesis> {
    let value: Value = serde_json::from_str(text).ok()?;
    value.as_object()?;
    Some(synthesis_from_value(&value))
}

fn parse_embedded(text: &str) -> Option<Synthesis> {
    let candidate = JSON_OBJECT_RE.find(text)?;
    let value: Value = serde_json::from_str(candidate.as_str()).ok()?;
    // Accept only when the candidate looks like a real synthesis
    // object, not some incidental braces in prose.
    if !value.get("main_text").map_or(false, Value::is_string) {
        return None;
    }
    Some(synthesis_from_value(&value))
}

fn fallback(text: &str) -> Synthesis {
    let main_text = text
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty() && !line.starts_with('{'))
        .unwrap_or(FALLBACK_MAIN_TEXT)
        .to_string();

    Synthesis {
        main_text,
        lenses: Lenses::default(),
        confidence: Confidence {
            confident: Vec::new(),
            uncertain: vec![PARSE_FAILURE_NOTE.to_string()],
        },
    }
}

fn synthesis_from_value(value: &Value) -> Synthesis {
    let lenses = &value["lenses"];
    let confidence = &value["confidence"];
    Synthesis {
        main_text: str_field(value, "main_text"),
        lenses: Lenses {
            physics: str_field(lenses, "physics"),
            math: str_field(lenses, "math"),
            human: str_field(lenses, "human"),
            contemplative: str_field(lenses, "contemplative"),
        },
        confidence: Confidence {
            confident: list_field(confidence, "confident"),
            uncertain: list_field(confidence, "uncertain"),
        },
    }
}

fn str_field(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn list_field(value: &Value, key: &str) -> Vec<String> {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // -------------------------------------------------------------------------
    // Fact spine
    // -------------------------------------------------------------------------

    #[test]
    fn test_fact_spine_with_sources() {
        let raw = "Rayleigh scattering explains it.\n---SOURCES---\n[{\"title\":\"Rayleigh scattering\",\"url\":\"https://example.org/r\"}]";
        let spine = parse_fact_spine(raw);

        assert_eq!(spine.fact_text, "Rayleigh scattering explains it.");
        assert_eq!(
            spine.sources,
            vec![Source {
                title: "Rayleigh scattering".to_string(),
                url: "https://example.org/r".to_string(),
            }]
        );
    }

    #[test]
    fn test_fact_spine_without_marker() {
        let raw = "  Just a summary, no citations.\n";
        let spine = parse_fact_spine(raw);

        // Untrimmed: only the marker path trims.
        assert_eq!(spine.fact_text, raw);
        assert!(spine.sources.is_empty());
    }

    #[test]
    fn test_fact_spine_malformed_json_degrades() {
        let raw = "Summary.\n---SOURCES---\n[{not json";
        let spine = parse_fact_spine(raw);

        assert_eq!(spine.fact_text, "Summary.");
        assert!(spine.sources.is_empty());
    }

    #[test]
    fn test_fact_spine_skips_non_object_elements() {
        let raw = r#"Summary.
---SOURCES---
["stray string", {"title": "A", "url": ""}, 42, {"title": "B"}]"#;
        let spine = parse_fact_spine(raw);

        assert_eq!(
            spine.sources,
            vec![
                Source {
                    title: "A".to_string(),
                    url: String::new()
                },
                Source {
                    title: "B".to_string(),
                    url: String::new()
                },
            ]
        );
    }

    #[test]
    fn test_fact_spine_non_array_sources_block() {
        let raw = "Summary.\n---SOURCES---\n{\"title\": \"not an array\"}";
        let spine = parse_fact_spine(raw);
        assert!(spine.sources.is_empty());
    }

    #[test]
    fn test_fact_spine_splits_on_first_marker() {
        let raw = "Head.\n---SOURCES---\n[]\n---SOURCES---\ntrailing";
        let spine = parse_fact_spine(raw);
        assert_eq!(spine.fact_text, "Head.");
        // Second marker makes the tail invalid JSON; degrade to empty.
        assert!(spine.sources.is_empty());
    }

    // -------------------------------------------------------------------------
    // Synthesis: direct parse
    // -------------------------------------------------------------------------

    fn full_synthesis_json() -> String {
        serde_json::json!({
            "main_text": "A short weave.",
            "lenses": {
                "physics": "Scattering.",
                "math": "Inverse fourth power.",
                "human": "Wonder.",
                "contemplative": "A metaphor.",
            },
            "confidence": {
                "confident": ["a"],
                "uncertain": [],
            },
        })
        .to_string()
    }

    #[test]
    fn test_synthesis_direct_parse_verbatim() {
        let parsed = parse_synthesis(&full_synthesis_json());

        assert_eq!(parsed.main_text, "A short weave.");
        assert_eq!(parsed.lenses.physics, "Scattering.");
        assert_eq!(parsed.lenses.math, "Inverse fourth power.");
        assert_eq!(parsed.lenses.human, "Wonder.");
        assert_eq!(parsed.lenses.contemplative, "A metaphor.");
        assert_eq!(parsed.confidence.confident, vec!["a".to_string()]);
        assert!(parsed.confidence.uncertain.is_empty());
    }

    #[test]
    fn test_synthesis_fenced_equals_unfenced() {
        let json = full_synthesis_json();
        let fenced = format!("```json\n{}\n```", json);

        assert_eq!(parse_synthesis(&fenced), parse_synthesis(&json));
    }

    #[test]
    fn test_synthesis_fence_without_language_tag() {
        let fenced = format!("```\n{}\n```", full_synthesis_json());
        assert_eq!(parse_synthesis(&fenced).main_text, "A short weave.");
    }

    #[test]
    fn test_synthesis_missing_nested_keys_default_individually() {
        let parsed = parse_synthesis(r#"{"main_text": "only this"}"#);

        assert_eq!(parsed.main_text, "only this");
        assert_eq!(parsed.lenses, Lenses::default());
        assert!(parsed.confidence.confident.is_empty());
        assert!(parsed.confidence.uncertain.is_empty());
    }

    #[test]
    fn test_synthesis_ill_typed_sibling_does_not_reject() {
        let parsed = parse_synthesis(r#"{"main_text": "ok", "lenses": 5}"#);

        assert_eq!(parsed.main_text, "ok");
        assert_eq!(parsed.lenses, Lenses::default());
    }

    // -------------------------------------------------------------------------
    // Synthesis: embedded object salvage
    // -------------------------------------------------------------------------

    #[test]
    fn test_synthesis_object_embedded_in_commentary() {
        let raw = format!(
            "Sure! Here is the structured answer you asked for:\n\n{}\n\nHope that helps.",
            full_synthesis_json()
        );
        let parsed = parse_synthesis(&raw);

        assert_eq!(parsed.main_text, "A short weave.");
        assert_eq!(parsed.lenses.contemplative, "A metaphor.");
    }

    #[test]
    fn test_synthesis_embedded_requires_string_main_text() {
        // Braces in prose without a usable main_text fall through to the
        // line-based fallback.
        let raw = "The set {1, 2} is small.\nA plain explanation line.";
        let parsed = parse_synthesis(raw);

        assert_eq!(parsed.main_text, "The set {1, 2} is small.");
        assert_eq!(parsed.confidence.uncertain, vec![PARSE_FAILURE_NOTE.to_string()]);
    }

    // -------------------------------------------------------------------------
    // Synthesis: terminal fallback
    // -------------------------------------------------------------------------

    #[test]
    fn test_synthesis_fallback_uses_first_prose_line() {
        let raw = "I'm not sure how to structure this.\nMore rambling.";
        let parsed = parse_synthesis(raw);

        assert_eq!(parsed.main_text, "I'm not sure how to structure this.");
        assert_eq!(parsed.lenses, Lenses::default());
        assert!(parsed.confidence.confident.is_empty());
        assert_eq!(parsed.confidence.uncertain, vec![PARSE_FAILURE_NOTE.to_string()]);
    }

    #[test]
    fn test_synthesis_fallback_skips_brace_lines() {
        let raw = "{\"half\": \"broken\"\nActual prose here.";
        let parsed = parse_synthesis(raw);

        assert_eq!(parsed.main_text, "Actual prose here.");
    }

    #[test]
    fn test_synthesis_fallback_apology_when_nothing_usable() {
        let parsed = parse_synthesis("   \n  \n");

        assert_eq!(parsed.main_text, FALLBACK_MAIN_TEXT);
        assert_eq!(parsed.confidence.uncertain.len(), 1);
        assert_eq!(parsed.lenses, Lenses::default());
    }

    #[test]
    fn test_synthesis_idempotent_over_serialization() {
        let original = Synthesis {
            main_text: "A short weave.".to_string(),
            lenses: Lenses {
                physics: "p".to_string(),
                math: "m".to_string(),
                human: "h".to_string(),
                contemplative: "c".to_string(),
            },
            confidence: Confidence {
                confident: vec!["sure".to_string()],
                uncertain: vec!["maybe".to_string()],
            },
        };
        let json = serde_json::json!({
            "main_text": original.main_text,
            "lenses": original.lenses,
            "confidence": original.confidence,
        })
        .to_string();

        assert_eq!(parse_synthesis(&json), original);
    }

    // -------------------------------------------------------------------------
    // Totality
    // -------------------------------------------------------------------------

    proptest! {
        #[test]
        fn prop_parse_fact_spine_never_panics(raw in ".*") {
            let _ = parse_fact_spine(&raw);
        }

        #[test]
        fn prop_parse_synthesis_never_panics(raw in ".*") {
            let _ = parse_synthesis(&raw);
        }

        #[test]
        fn prop_no_marker_means_no_sources(raw in "[^-]*") {
            let spine = parse_fact_spine(&raw);
            prop_assert_eq!(spine.fact_text, raw);
            prop_assert!(spine.sources.is_empty());
        }

        #[test]
        fn prop_synthesis_always_has_uncertainty_note_on_garbage(
            raw in "[a-zA-Z ,.]+"
        ) {
            // Pure prose with no braces can never parse structurally.
            let parsed = parse_synthesis(&raw);
            prop_assert_eq!(
                parsed.confidence.uncertain,
                vec![PARSE_FAILURE_NOTE.to_string()]
            );
        }
    }
}
