//! Markdown to HTML.
//!
//! CommonMark plus pipe tables and strikethrough. Fenced code blocks are part
//! of CommonMark itself and come out as `<pre><code>` with the contents kept
//! verbatim (HTML-escaped). Rendering never fails: malformed markup degrades
//! to paragraphs of text.

use pulldown_cmark::{html, Options, Parser};

fn options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options
}

pub fn render_markdown(raw: &str) -> String {
    let parser = Parser::new_ext(raw, options());
    let mut out = String::with_capacity(raw.len() + raw.len() / 2);
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_headings_and_paragraphs() {
        let html = render_markdown("# Title\n\nSome *text*.");
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<p>Some <em>text</em>.</p>"));
    }

    #[test]
    fn fenced_code_is_kept_verbatim() {
        let raw = "```python\ndef f():\n    return 1 < 2\n\n\n  # spaced\n```\n";
        let html = render_markdown(raw);
        assert!(html.contains("<pre><code class=\"language-python\">"));
        assert!(html.contains("def f():\n    return 1 &lt; 2\n\n\n  # spaced\n</code></pre>"));
    }

    #[test]
    fn fenced_code_without_language() {
        let html = render_markdown("```\n| not | a | table |\n```");
        assert!(html.contains("<pre><code>| not | a | table |\n</code></pre>"));
        assert!(!html.contains("<table>"));
    }

    #[test]
    fn pipe_tables_map_rows_and_cells() {
        let raw = "| a | b |\n|---|---|\n| 1 | 2 |\n| 3 | 4 |\n";
        let html = render_markdown(raw);
        assert!(html.contains("<table>"));
        assert_eq!(html.matches("<tr>").count(), 3);
        assert_eq!(html.matches("<th>").count(), 2);
        assert_eq!(html.matches("<td>").count(), 4);
        assert!(html.contains("<td>3</td>"));
    }

    #[test]
    fn malformed_input_does_not_fail() {
        let raw = "```\nunterminated fence\n| broken | table\n|--\n<div";
        let html = render_markdown(raw);
        assert!(html.contains("unterminated fence"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let raw = "# a\n\n| x |\n|---|\n| y |\n\n~~gone~~";
        assert_eq!(render_markdown(raw), render_markdown(raw));
        assert!(render_markdown(raw).contains("<del>gone</del>"));
    }

    #[test]
    fn empty_input_renders_empty() {
        assert_eq!(render_markdown(""), "");
    }
}
