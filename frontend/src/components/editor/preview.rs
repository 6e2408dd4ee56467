//! Markdown preview pipeline.
//!
//! CommonMark folds any run of blank lines between blocks into one break. To
//! keep the extra vertical space the user typed, every top-level block is
//! preceded by one `<br>` per surplus blank line, counted from the source
//! offsets of the parsed blocks (capped at [`MAX_EXTRA_BREAKS`]). Raw HTML is
//! rendered as text except for the `<u>` tags the underline button inserts.

use pulldown_cmark::{html, Event, Options, Parser};

pub const MAX_EXTRA_BREAKS: usize = 20;

/// Converts CRLF/CR to LF and drops a leading BOM or zero-width space.
fn normalize_text(input: &str) -> String {
    input
        .replace("\r\n", "\n")
        .replace('\r', "\n")
        .trim_start_matches(['\u{feff}', '\u{200b}'])
        .to_string()
}

fn is_underline_tag(html: &str) -> bool {
    matches!(html.trim(), "<u>" | "</u>")
}

/// Number of `<br>` tags owed for the gap between the end of one top-level
/// block and the start of the next. One blank line is the normal paragraph
/// separator and owes nothing.
fn extra_breaks(source: &str, prev_end: usize, next_start: usize) -> usize {
    let Some(gap) = source.get(prev_end..next_start) else {
        return 0;
    };
    let trailing = usize::from(source[..prev_end].ends_with('\n'));
    let blank_lines = (gap.matches('\n').count() + trailing).saturating_sub(1);
    blank_lines.saturating_sub(1).min(MAX_EXTRA_BREAKS)
}

fn parse_markdown_to_html(input: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let mut events = Vec::new();
    let mut depth = 0usize;
    let mut prev_block_end: Option<usize> = None;

    for (event, range) in Parser::new_ext(input, options).into_offset_iter() {
        match &event {
            Event::End(_) => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    prev_block_end = Some(range.end);
                }
            }
            _ if depth == 0 => {
                if let Some(prev_end) = prev_block_end {
                    let breaks = extra_breaks(input, prev_end, range.start);
                    events.extend((0..breaks).map(|_| Event::Html("<br>".into())));
                }
                if matches!(event, Event::Start(_)) {
                    depth += 1;
                } else {
                    prev_block_end = Some(range.end);
                }
            }
            Event::Start(_) => depth += 1,
            _ => {}
        }

        events.push(match event {
            Event::Html(raw) | Event::InlineHtml(raw) if !is_underline_tag(&raw) => {
                Event::Text(raw)
            }
            other => other,
        });
    }

    let mut html_output = String::new();
    html::push_html(&mut html_output, events.into_iter());
    html_output
}

pub fn render_preview_html(text: &str) -> String {
    parse_markdown_to_html(&normalize_text(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_basic_markdown() {
        let html = render_preview_html("# Title\n\n**bold** and ~~gone~~");
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<strong>bold</strong>"));
        assert!(html.contains("<del>gone</del>"));
    }

    #[test]
    fn renders_tables() {
        let html = render_preview_html("| a | b |\n| --- | --- |\n| 1 | 2 |\n");
        assert!(html.contains("<table>"));
        assert!(html.contains("<th>a</th>"));
        assert!(html.contains("<td>2</td>"));
    }

    #[test]
    fn keeps_underline_and_escapes_other_html() {
        let html = render_preview_html("<u>under</u> <script>alert(1)</script>");
        assert!(html.contains("<u>under</u>"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn extra_blank_lines_become_breaks() {
        let html = render_preview_html("first\n\n\n\nsecond");
        assert_eq!(html.matches("<br>").count(), 2);
        assert!(html.starts_with("<p>first</p>\n<br><br>"));
        assert!(html.contains("<p>second</p>"));
    }

    #[test]
    fn single_blank_line_is_a_plain_paragraph_break() {
        let html = render_preview_html("first\n\nsecond\n");
        assert_eq!(html, "<p>first</p>\n<p>second</p>\n");
    }

    #[test]
    fn whitespace_only_lines_count_as_blank() {
        let html = render_preview_html("first\n  \n\t\nsecond");
        assert_eq!(html.matches("<br>").count(), 1);
    }

    #[test]
    fn break_count_is_capped() {
        let text = format!("top{}bottom", "\n".repeat(10_000));
        let html = render_preview_html(&text);
        assert_eq!(html.matches("<br>").count(), MAX_EXTRA_BREAKS);
        assert!(html.contains("<p>bottom</p>"));
    }

    #[test]
    fn marker_like_user_text_stays_literal() {
        let html = render_preview_html("Code BR_MARKER3 here");
        assert_eq!(html, "<p>Code BR_MARKER3 here</p>\n");

        let huge = render_preview_html("BR_MARKER99999999999999999");
        assert_eq!(huge, "<p>BR_MARKER99999999999999999</p>\n");
    }

    #[test]
    fn blank_lines_inside_code_blocks_are_untouched() {
        let html = render_preview_html("```\na\n\n\n\nb\n```\n");
        assert!(!html.contains("<br>"));
        assert!(html.contains("<pre><code>a\n\n\n\nb\n</code></pre>"));
    }

    #[test]
    fn normalizes_line_endings_and_bom() {
        assert_eq!(normalize_text("\u{feff}a\r\nb\rc"), "a\nb\nc");
        assert_eq!(render_preview_html("a\r\n\r\n\r\nb").matches("<br>").count(), 1);
    }
}
