//! Markdown rendering and HTML sanitization.

use std::sync::LazyLock;

/// Sanitizer allowlist shared by every render. Citation markers survive
/// because `<a>`/`<sup>` keep their `title`, `class`, and `data-` attributes;
/// scripts, event handlers, and unknown tags are stripped.
static SANITIZER: LazyLock<ammonia::Builder<'static>> = LazyLock::new(|| {
    let mut builder = ammonia::Builder::default();
    builder
        .add_tag_attributes("a", ["title", "data-path"])
        .add_generic_attributes(["class"])
        .add_generic_attribute_prefixes(["data-"])
        .link_rel(None);
    builder
});

/// Render markdown to HTML.
pub fn render_markdown_to_html(markdown: &str) -> String {
    use pulldown_cmark::{Options, Parser, html};
    let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS;
    let parser = Parser::new_ext(markdown, options);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

/// Strip dangerous markup from HTML destined for `dangerous_inner_html`.
pub fn sanitize_html(html: &str) -> String {
    SANITIZER.clean(html).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_basic_markdown() {
        let html = render_markdown_to_html("**bold** and *italic*");
        assert!(html.contains("<strong>bold</strong>"));
        assert!(html.contains("<em>italic</em>"));
    }

    #[test]
    fn test_render_table() {
        let html = render_markdown_to_html("| a | b |\n|---|---|\n| 1 | 2 |");
        assert!(html.contains("<table>"));
    }

    #[test]
    fn test_render_strikethrough() {
        let html = render_markdown_to_html("~~deprecated~~");
        assert!(html.contains("<del>deprecated</del>"));
    }

    #[test]
    fn test_sanitize_strips_script() {
        let clean = sanitize_html("<p>hi</p><script>alert(1)</script>");
        assert!(clean.contains("<p>hi</p>"));
        assert!(!clean.contains("script"));
        assert!(!clean.contains("alert"));
    }

    #[test]
    fn test_sanitize_strips_event_handlers() {
        let clean = sanitize_html(r#"<img src="x" onerror="alert(1)">"#);
        assert!(!clean.contains("onerror"));
    }

    #[test]
    fn test_sanitize_strips_iframe() {
        let clean = sanitize_html(r#"<iframe src="https://evil.example"></iframe>ok"#);
        assert!(!clean.contains("iframe"));
        assert!(clean.contains("ok"));
    }

    #[test]
    fn test_sanitize_keeps_citation_marker() {
        let marker = r#"<a class="answer-citation-marker" title="facts.pdf" data-path="content/facts.pdf"><sup>1</sup></a>"#;
        let clean = sanitize_html(marker);
        assert!(clean.contains("answer-citation-marker"));
        assert!(clean.contains(r#"title="facts.pdf""#));
        assert!(clean.contains(r#"data-path="content/facts.pdf""#));
        assert!(clean.contains("<sup>1</sup>"));
    }
}
