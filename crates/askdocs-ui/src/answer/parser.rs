//! Answer body parsing: citation markers, follow-up cleanup, copy text.

use std::sync::LazyLock;

use askdocs_types::ChatResponse;
use regex::Regex;

/// `[citation]` token in the answer body.
static CITATION_TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[([^\]]+)\]").unwrap());

/// `<<follow-up question>>` marker sometimes left inline by the model.
static FOLLOWUP_MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<<[^>]+>>").unwrap());

/// Citation anchors whole (superscript number included), then any other tag.
static COPY_STRIP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<a [^>]*><sup>\d+</sup></a>|<[^>]+>").unwrap());

/// Answer body with citation tokens replaced by marker anchors, plus the
/// unique citations in first-occurrence order.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedAnswer {
    pub answer_html: String,
    pub citations: Vec<String>,
}

/// Resolve a citation id to the path the citation viewer fetches.
pub fn citation_content_path(citation: &str) -> String {
    format!("content/{citation}")
}

/// Parse an answer body into markup ready for sanitizing and rendering.
///
/// Each `[citation]` token becomes a superscript anchor numbered by first
/// occurrence; repeats reuse their original number. While streaming, a
/// citation bracket still being typed is held back until it closes.
pub fn parse_answer_to_html(answer: &ChatResponse, is_streaming: bool) -> ParsedAnswer {
    let body = FOLLOWUP_MARKER.replace_all(answer.content(), "");
    let mut body = body.trim();

    if is_streaming {
        body = truncate_open_citation(body);
    }

    let mut citations: Vec<String> = Vec::new();
    let mut answer_html = String::with_capacity(body.len());
    let mut last_end = 0;

    for caps in CITATION_TOKEN.captures_iter(body) {
        let (Some(token), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        answer_html.push_str(&body[last_end..token.start()]);

        let citation = name.as_str();
        let number = match citations.iter().position(|c| c == citation) {
            Some(seen) => seen + 1,
            None => {
                citations.push(citation.to_string());
                citations.len()
            }
        };

        let path = citation_content_path(citation);
        answer_html.push_str(&format!(
            r#"<a class="answer-citation-marker" title="{}" data-path="{}"><sup>{number}</sup></a>"#,
            escape_attr(citation),
            escape_attr(&path),
        ));
        last_end = token.end();
    }
    answer_html.push_str(&body[last_end..]);

    ParsedAnswer {
        answer_html,
        citations,
    }
}

/// Drop a trailing `[partial-citation` that has not closed yet.
fn truncate_open_citation(text: &str) -> &str {
    for (i, byte) in text.bytes().enumerate().rev() {
        match byte {
            b']' => break,
            b'[' => return &text[..i],
            _ => {}
        }
    }
    text
}

/// Reduce sanitized answer markup to plain text for the clipboard.
///
/// A single pass: citation anchors vanish whole so their superscript
/// numbers do not leak into the text, then every remaining tag is
/// dropped while its inner text stays.
pub fn plain_text_for_copy(html: &str) -> String {
    COPY_STRIP.replace_all(html, "").to_string()
}

fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer(content: &str) -> ChatResponse {
        ChatResponse::from_content(content)
    }

    #[test]
    fn test_citations_numbered_in_first_occurrence_order() {
        let parsed = parse_answer_to_html(
            &answer("See [alpha.pdf] then [beta.pdf] then [alpha.pdf] again."),
            false,
        );

        assert_eq!(parsed.citations, ["alpha.pdf", "beta.pdf"]);
        let first = parsed.answer_html.find("<sup>1</sup>").unwrap();
        let second = parsed.answer_html.find("<sup>2</sup>").unwrap();
        assert!(first < second);
        // the repeat reuses number 1
        assert_eq!(parsed.answer_html.matches("<sup>1</sup>").count(), 2);
        assert_eq!(parsed.answer_html.matches("<sup>2</sup>").count(), 1);
    }

    #[test]
    fn test_marker_carries_title_and_path() {
        let parsed = parse_answer_to_html(&answer("Fact [facts.pdf]."), false);

        assert!(parsed.answer_html.contains(r#"class="answer-citation-marker""#));
        assert!(parsed.answer_html.contains(r#"title="facts.pdf""#));
        assert!(parsed.answer_html.contains(r#"data-path="content/facts.pdf""#));
    }

    #[test]
    fn test_marker_attributes_escaped() {
        let parsed = parse_answer_to_html(&answer(r#"Margin [p&l "q1".pdf]."#), false);

        assert!(parsed.answer_html.contains(r#"title="p&amp;l &quot;q1&quot;.pdf""#));
        assert_eq!(parsed.citations, [r#"p&l "q1".pdf"#]);
    }

    #[test]
    fn test_streaming_truncates_open_citation() {
        let parsed = parse_answer_to_html(&answer("Done [a.pdf] and now [half"), true);

        assert_eq!(parsed.citations, ["a.pdf"]);
        assert!(parsed.answer_html.trim_end().ends_with("and now"));
        assert!(!parsed.answer_html.contains("half"));
        assert!(!parsed.answer_html.contains('['));
    }

    #[test]
    fn test_streaming_keeps_closed_citation() {
        let parsed = parse_answer_to_html(&answer("All cited [a.pdf]"), true);

        assert_eq!(parsed.citations, ["a.pdf"]);
        assert!(parsed.answer_html.contains("<sup>1</sup>"));
    }

    #[test]
    fn test_finished_answer_keeps_unclosed_bracket_as_text() {
        let parsed = parse_answer_to_html(&answer("An array slice [0..n"), false);

        assert!(parsed.citations.is_empty());
        assert!(parsed.answer_html.contains("[0..n"));
    }

    #[test]
    fn test_followup_markers_stripped() {
        let parsed = parse_answer_to_html(
            &answer("Plans are in [plan.pdf]. <<What about 2025?>> <<Any risks?>>"),
            false,
        );

        assert!(!parsed.answer_html.contains("<<"));
        assert!(!parsed.answer_html.contains("What about 2025?"));
        assert!(parsed.answer_html.ends_with("</a>."));
    }

    #[test]
    fn test_whitespace_only_answer() {
        let parsed = parse_answer_to_html(&answer("  \n  "), false);

        assert!(parsed.answer_html.is_empty());
        assert!(parsed.citations.is_empty());
    }

    #[test]
    fn test_citation_content_path() {
        assert_eq!(citation_content_path("facts.pdf"), "content/facts.pdf");
        assert_eq!(
            citation_content_path("guides/setup.md"),
            "content/guides/setup.md"
        );
    }

    #[test]
    fn test_copy_strips_tags_and_citation_numbers() {
        let text = plain_text_for_copy("<a href=x><sup>1</sup></a>Hello <b>world</b>");
        assert_eq!(text, "Hello world");
    }

    #[test]
    fn test_copy_strips_parsed_markers_whole() {
        let parsed = parse_answer_to_html(&answer("Fact [f.pdf], more [g.pdf]."), false);
        let text = plain_text_for_copy(&parsed.answer_html);

        assert_eq!(text, "Fact , more .");
    }
}
