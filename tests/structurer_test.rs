//! Integration tests for letter structuring.

use coverletter::parser::{structure, structure_with_options, LetterStructurer, LineKind};
use coverletter::ParseOptions;
use regex::Regex;

/// Count maximal runs of non-blank lines before the first closing line,
/// working from the raw text alone. A date line at the top (blank lines
/// allowed before it) is not body text.
fn expected_paragraphs(text: &str) -> usize {
    let date = Regex::new(r"^[A-Z][a-z]+ \d{1,2}, \d{4}").unwrap();
    let mut seen_text = false;
    let mut runs = 0;
    let mut in_run = false;

    for line in text.split('\n') {
        let trimmed = line.trim();
        if !seen_text && date.is_match(trimmed) {
            seen_text = true;
            continue;
        }
        if line.contains("Sincerely") || line.contains("Regards") {
            break;
        }
        if trimmed.is_empty() {
            in_run = false;
            continue;
        }
        seen_text = true;
        if !in_run {
            runs += 1;
            in_run = true;
        }
    }
    runs
}

#[test]
fn test_scenario_full_letter() {
    let doc = structure(
        "March 03, 2025\n\nDear Hiring Manager,\n\nI am excited to apply.\n\nSincerely,\nJane Doe",
    );
    assert_eq!(doc.date_line(), "March 03, 2025");
    assert_eq!(
        doc.paragraphs(),
        ["Dear Hiring Manager,", "I am excited to apply."]
    );
    assert_eq!(doc.signature_lines(), ["Sincerely,", "Jane Doe"]);
}

#[test]
fn test_scenario_no_date_no_signature() {
    let doc = structure("Hello there\n\nContinuing thought.");
    assert_eq!(doc.date_line(), "");
    assert_eq!(doc.paragraphs(), ["Hello there", "Continuing thought."]);
    assert!(doc.signature_lines().is_empty());
}

#[test]
fn test_scenario_empty_input() {
    let doc = structure("");
    assert_eq!(doc.date_line(), "");
    assert!(doc.paragraphs().is_empty());
    assert!(doc.signature_lines().is_empty());
}

#[test]
fn test_single_block_is_one_paragraph() {
    let doc = structure("one\ntwo\nthree");
    assert_eq!(doc.paragraphs(), ["one two three"]);
}

#[test]
fn test_paragraph_count_matches_line_runs() {
    let inputs = [
        "",
        "\n\n\n",
        "a\nb\n\n\nc",
        "March 03, 2025\nfirst\n\nsecond\nSincerely,\nName\n\nmore",
        "x\n \n\t\ny\n\nRegards\n\nz",
        "Dear team,\n\nMarch 03, 2025\n\nBody\n",
        "Regards here\nMarch 03, 2025",
        "\n\n  \nMarch 03, 2025\nfirst\nsecond\n\nthird",
        "March 03, 2025\nMarch 04, 2025\n\nbody",
        "opening\nkind regards,\nBest Regards,\nname",
        "one\n\ntwo\n\nthree\n\n",
    ];

    for input in inputs {
        let doc = structure(input);
        assert_eq!(
            doc.paragraph_count(),
            expected_paragraphs(input),
            "input: {:?}",
            input
        );
    }
}

#[test]
fn test_line_run_counts() {
    assert_eq!(expected_paragraphs("Regards here\nMarch 03, 2025"), 0);
    assert_eq!(expected_paragraphs("\n\nMarch 03, 2025\nfirst\n\nsecond"), 2);
    assert_eq!(expected_paragraphs("Dear team,\n\nMarch 03, 2025"), 2);
    assert_eq!(structure("\n\nMarch 03, 2025\nfirst\n\nsecond").paragraph_count(), 2);
    assert_eq!(structure("Regards here\nMarch 03, 2025").paragraph_count(), 0);
}

#[test]
fn test_every_line_classified_once() {
    let text = "\nMarch 03, 2025\n\nBody one\nBody two\n\nBest Regards,\nJane\n";
    let kinds = LetterStructurer::default().classify(text);
    assert_eq!(kinds.len(), text.split('\n').count());
    assert_eq!(kinds.iter().filter(|k| **k == LineKind::Date).count(), 1);
}

#[test]
fn test_date_after_body_not_captured() {
    let doc = structure("Dear Hiring Manager,\n\nMarch 03, 2025\n\nBody");
    assert_eq!(doc.date_line(), "");
    assert_eq!(
        doc.paragraphs(),
        ["Dear Hiring Manager,", "March 03, 2025", "Body"]
    );
}

#[test]
fn test_signature_mode_is_sticky() {
    let doc = structure(
        "Intro\n\nSincerely,\n\nJane Doe\n\nThis looks like a paragraph.\nMarch 03, 2025",
    );
    assert_eq!(doc.paragraphs(), ["Intro"]);
    assert_eq!(
        doc.signature_lines(),
        [
            "Sincerely,",
            "Jane Doe",
            "This looks like a paragraph.",
            "March 03, 2025"
        ]
    );
}

#[test]
fn test_repeated_closing_tokens() {
    let doc = structure("Body\n\nRegards,\nSincerely,\nJane");
    assert_eq!(doc.signature_lines(), ["Regards,", "Sincerely,", "Jane"]);
}

#[test]
fn test_structure_with_options() {
    let options = ParseOptions::new().with_closing_tokens(["Warmly"]);
    let doc = structure_with_options("Body\n\nSincerely\n\nWarmly,\nJane", options);
    assert_eq!(doc.paragraphs(), ["Body", "Sincerely"]);
    assert_eq!(doc.signature_lines(), ["Warmly,", "Jane"]);
}

#[test]
fn test_structuring_is_deterministic() {
    let text = "March 03, 2025\n\nA\nB\n\nC\n\nRegards,\nD";
    let structurer = LetterStructurer::default();
    assert_eq!(structurer.structure(text), structurer.structure(text));
}
