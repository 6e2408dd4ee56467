//! Text helpers for the editor: markdown snippet insertion, table editing,
//! toolbar active states and conversions between the UTF-16 offsets used by
//! textarea selection APIs and Rust's UTF-8 byte offsets.

use std::sync::LazyLock;

use num_format::{Locale, ToFormattedString};
use regex::Regex;

use super::messages::{Style, TableEdit};

static DELIMITER_ROW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*\|?(\s*:?-+:?\s*\|)*\s*:?-+:?\s*\|?\s*$").expect("static pattern compiles")
});

static ORDERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\d+[.)]\s").expect("static pattern compiles"));

/// Word used in a snippet when nothing is selected; it is selected after
/// insertion so the user can type over it.
const PLACEHOLDER: &str = "text";

const TABLE_SNIPPET: &str = "| text | Column 2 | Column 3 |\n\
                             | --- | --- | --- |\n\
                             |  |  |  |\n\
                             |  |  |  |\n";

impl Style {
    fn wrappers(self) -> (&'static str, &'static str) {
        match self {
            Style::Bold => ("**", "**"),
            Style::Italic => ("*", "*"),
            Style::Underline => ("<u>", "</u>"),
            Style::Strikethrough => ("~~", "~~"),
            Style::Heading(1) => ("# ", ""),
            Style::Heading(2) => ("## ", ""),
            Style::Heading(_) => ("### ", ""),
            Style::BulletList => ("- ", ""),
            Style::OrderedList => ("1. ", ""),
            Style::Quote => ("> ", ""),
            Style::HorizontalRule | Style::Table => ("", ""),
        }
    }

    /// Block snippets always start on their own line.
    fn is_block(self) -> bool {
        !matches!(
            self,
            Style::Bold | Style::Italic | Style::Underline | Style::Strikethrough
        )
    }
}

/// Result of inserting a snippet: the new text and the byte range to select.
#[derive(Debug, PartialEq, Eq)]
pub struct Insertion {
    pub text: String,
    pub select: (usize, usize),
}

/// Applies `style` to `text[start..end]`.
///
/// A non-empty selection is wrapped; an empty one gets the placeholder word.
/// Offsets are byte indexes and are clamped to char boundaries.
pub fn apply_style(text: &str, start: usize, end: usize, style: Style) -> Insertion {
    let start = floor_char_boundary(text, start.min(end));
    let end = floor_char_boundary(text, end.max(start));

    let mut prefix = String::new();
    if style.is_block() && start > 0 && !text[..start].ends_with('\n') {
        prefix.push('\n');
    }

    let (snippet, inner_offset, inner_len) = match style {
        Style::HorizontalRule => ("---\n".to_string(), 4, 0),
        Style::Table => {
            let offset = TABLE_SNIPPET.find(PLACEHOLDER).unwrap_or(0);
            (TABLE_SNIPPET.to_string(), offset, PLACEHOLDER.len())
        }
        _ => {
            let selected = &text[start..end];
            let inner = if selected.is_empty() { PLACEHOLDER } else { selected };
            let (open, close) = style.wrappers();
            (format!("{open}{inner}{close}"), open.len(), inner.len())
        }
    };

    let mut new_text = String::with_capacity(text.len() + prefix.len() + snippet.len());
    new_text.push_str(&text[..start]);
    new_text.push_str(&prefix);
    new_text.push_str(&snippet);
    new_text.push_str(&text[end..]);

    let select_start = start + prefix.len() + inner_offset;
    Insertion {
        text: new_text,
        select: (select_start, select_start + inner_len),
    }
}

fn floor_char_boundary(s: &str, idx: usize) -> usize {
    let mut idx = idx.min(s.len());
    while !s.is_char_boundary(idx) {
        idx -= 1;
    }
    idx
}

/// Converts a UTF-8 byte index to the UTF-16 offset a textarea expects.
pub fn byte_to_utf16_idx(s: &str, byte_idx: usize) -> u32 {
    s[..floor_char_boundary(s, byte_idx)].encode_utf16().count() as u32
}

/// Converts a textarea UTF-16 offset to a UTF-8 byte index.
pub fn utf16_to_byte_idx(s: &str, utf16_idx: usize) -> usize {
    let mut units = 0;
    for (byte_idx, ch) in s.char_indices() {
        if units >= utf16_idx {
            return byte_idx;
        }
        units += ch.len_utf16();
    }
    s.len()
}

/// "1,234 words · 5,678 characters"
pub fn word_count_label(text: &str) -> String {
    let words = text.split_whitespace().count();
    let chars = text.chars().count();
    format!(
        "{} {} \u{b7} {} {}",
        words.to_formatted_string(&Locale::en),
        if words == 1 { "word" } else { "words" },
        chars.to_formatted_string(&Locale::en),
        if chars == 1 { "character" } else { "characters" },
    )
}

/// Byte range of one line, newline excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LineSpan {
    start: usize,
    end: usize,
}

impl LineSpan {
    fn of(self, text: &str) -> &str {
        &text[self.start..self.end]
    }
}

fn line_spans(text: &str) -> Vec<LineSpan> {
    let mut spans = Vec::new();
    let mut start = 0;
    for (idx, ch) in text.char_indices() {
        if ch == '\n' {
            spans.push(LineSpan { start, end: idx });
            start = idx + 1;
        }
    }
    spans.push(LineSpan { start, end: text.len() });
    spans
}

fn is_table_line(line: &str) -> bool {
    line.trim_start().starts_with('|')
}

/// Cells of a pipe table row, trimmed. Escaped pipes are not supported.
fn split_cells(line: &str) -> Vec<String> {
    let trimmed = line.trim();
    let inner = trimmed.strip_prefix('|').unwrap_or(trimmed);
    let inner = inner.strip_suffix('|').unwrap_or(inner);
    inner.split('|').map(|cell| cell.trim().to_string()).collect()
}

fn format_row(cells: &[String]) -> String {
    format!("| {} |", cells.join(" | "))
}

/// Pipe table containing the cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableAt {
    /// Byte range of the whole table, trailing newline excluded.
    pub start: usize,
    pub end: usize,
    /// Row under the cursor; 0 is the header, 1 the delimiter row.
    pub row: usize,
    /// Cell under the cursor, clamped to the header width.
    pub column: usize,
    pub rows: Vec<Vec<String>>,
}

/// Finds the pipe table (header, delimiter row, body) the cursor is in.
pub fn table_at(text: &str, cursor: usize) -> Option<TableAt> {
    let cursor = floor_char_boundary(text, cursor);
    let spans = line_spans(text);
    let line_of_cursor = spans.iter().rposition(|span| span.start <= cursor)?;
    let line = |idx: usize| spans[idx].of(text);
    if !is_table_line(line(line_of_cursor)) {
        return None;
    }

    let mut first = line_of_cursor;
    while first > 0 && is_table_line(line(first - 1)) {
        first -= 1;
    }
    let mut last = line_of_cursor;
    while last + 1 < spans.len() && is_table_line(line(last + 1)) {
        last += 1;
    }
    if last == first || !DELIMITER_ROW.is_match(line(first + 1)) {
        return None;
    }

    let rows: Vec<Vec<String>> = (first..=last).map(|idx| split_cells(line(idx))).collect();
    let width = rows[0].len();
    let cursor_span = spans[line_of_cursor];
    let pipes_before = text[cursor_span.start..cursor].matches('|').count();

    Some(TableAt {
        start: spans[first].start,
        end: spans[last].end,
        row: line_of_cursor - first,
        column: pipes_before.saturating_sub(1).min(width.saturating_sub(1)),
        rows,
    })
}

/// Applies a table edit at `cursor`. Returns `None` when the cursor is not in
/// a table. The cursor lands in the first new cell, or where the table was.
pub fn edit_table(text: &str, cursor: usize, edit: TableEdit) -> Option<Insertion> {
    let table = table_at(text, cursor)?;
    let mut rows = table.rows;
    let width = rows[0].len();

    let (replacement, caret) = match edit {
        TableEdit::AddRowAfter => {
            let at = table.row.max(1) + 1;
            rows.insert(at, vec![String::new(); width]);
            let lines: Vec<String> = rows.iter().map(|row| format_row(row)).collect();
            let offset: usize = lines[..at].iter().map(|line| line.len() + 1).sum();
            (lines.join("\n"), offset + 2)
        }
        TableEdit::AddColumnAfter => {
            let at = table.column + 1;
            for (idx, row) in rows.iter_mut().enumerate() {
                let cell = if idx == 1 { "---" } else { "" };
                row.insert(at.min(row.len()), cell.to_string());
            }
            let caret = format!("| {} | ", rows[0][..at].join(" | ")).len();
            let lines: Vec<String> = rows.iter().map(|row| format_row(row)).collect();
            (lines.join("\n"), caret)
        }
        TableEdit::DeleteTable => (String::new(), 0),
    };

    let end = if replacement.is_empty() && text[table.end..].starts_with('\n') {
        table.end + 1
    } else {
        table.end
    };

    let mut new_text = String::with_capacity(text.len() + replacement.len());
    new_text.push_str(&text[..table.start]);
    new_text.push_str(&replacement);
    new_text.push_str(&text[end..]);

    let caret = table.start + caret;
    Some(Insertion {
        text: new_text,
        select: (caret, caret),
    })
}

fn heading_level(line: &str) -> Option<u8> {
    let hashes = line.bytes().take_while(|b| *b == b'#').count();
    ((1..=6).contains(&hashes) && line[hashes..].starts_with(' ')).then_some(hashes as u8)
}

/// Whether the toolbar should show `style` as active for the cursor position.
///
/// Inline styles are active when the cursor sits between an opening and a
/// closing marker on its line; block styles look at the line prefix.
pub fn is_style_active(text: &str, cursor: usize, style: Style) -> bool {
    let cursor = floor_char_boundary(text, cursor);
    let line_start = text[..cursor].rfind('\n').map_or(0, |idx| idx + 1);
    let line_end = text[cursor..].find('\n').map_or(text.len(), |idx| cursor + idx);
    let line = &text[line_start..line_end];
    let before = &text[line_start..cursor];
    let inline_before = before
        .trim_start()
        .strip_prefix("* ")
        .unwrap_or(before);

    match style {
        Style::Bold => inline_before.matches("**").count() % 2 == 1,
        Style::Italic => inline_before.replace("**", "").matches('*').count() % 2 == 1,
        Style::Strikethrough => inline_before.matches("~~").count() % 2 == 1,
        Style::Underline => before.matches("<u>").count() > before.matches("</u>").count(),
        Style::Heading(level) => heading_level(line) == Some(level),
        Style::BulletList => {
            let trimmed = line.trim_start();
            trimmed.starts_with("- ") || trimmed.starts_with("* ")
        }
        Style::OrderedList => ORDERED_ITEM.is_match(line),
        Style::Quote => line.trim_start().starts_with('>'),
        Style::Table => table_at(text, cursor).is_some(),
        Style::HorizontalRule => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bold_without_selection_inserts_placeholder() {
        let insertion = apply_style("Hello ", 6, 6, Style::Bold);
        assert_eq!(insertion.text, "Hello **text**");
        assert_eq!(&insertion.text[insertion.select.0..insertion.select.1], "text");
    }

    #[test]
    fn inline_style_wraps_selection() {
        let insertion = apply_style("make this loud", 5, 9, Style::Underline);
        assert_eq!(insertion.text, "make <u>this</u> loud");
        assert_eq!(&insertion.text[insertion.select.0..insertion.select.1], "this");
    }

    #[test]
    fn block_style_starts_new_line() {
        let insertion = apply_style("Intro", 5, 5, Style::Heading(2));
        assert_eq!(insertion.text, "Intro\n## text");

        let at_line_start = apply_style("Intro\n", 6, 6, Style::BulletList);
        assert_eq!(at_line_start.text, "Intro\n- text");
    }

    #[test]
    fn table_selects_first_header_cell() {
        let insertion = apply_style("", 0, 0, Style::Table);
        assert!(insertion.text.starts_with("| text | Column 2 | Column 3 |\n| --- |"));
        assert_eq!(insertion.text.lines().count(), 4);
        assert_eq!(&insertion.text[insertion.select.0..insertion.select.1], "text");
    }

    #[test]
    fn horizontal_rule_places_cursor_after() {
        let insertion = apply_style("a", 1, 1, Style::HorizontalRule);
        assert_eq!(insertion.text, "a\n---\n");
        assert_eq!(insertion.select, (6, 6));
    }

    #[test]
    fn utf16_round_trip_with_multibyte_text() {
        let s = "a\u{e9}\u{1f600}b";
        assert_eq!(utf16_to_byte_idx(s, 0), 0);
        assert_eq!(utf16_to_byte_idx(s, 2), 3);
        assert_eq!(utf16_to_byte_idx(s, 4), 7);
        assert_eq!(utf16_to_byte_idx(s, 99), s.len());
        assert_eq!(byte_to_utf16_idx(s, 7), 4);
    }

    #[test]
    fn word_count_uses_thousands_separators() {
        let text = "word ".repeat(1234);
        assert_eq!(word_count_label(&text), "1,234 words \u{b7} 6,170 characters");
        assert_eq!(word_count_label("one"), "1 word \u{b7} 3 characters");
    }
    const TABLE: &str = "Intro\n| Name | Role |\n| --- | --- |\n| Asha | Lead |\nOutro";

    fn caret_at(text: &str, needle: &str) -> usize {
        text.find(needle).unwrap() + 1
    }

    #[test]
    fn finds_table_under_cursor() {
        let table = table_at(TABLE, caret_at(TABLE, "Asha")).unwrap();
        assert_eq!(table.row, 2);
        assert_eq!(table.column, 0);
        assert_eq!(&TABLE[table.start..table.end], "| Name | Role |\n| --- | --- |\n| Asha | Lead |");

        let on_role = table_at(TABLE, caret_at(TABLE, "Role")).unwrap();
        assert_eq!((on_role.row, on_role.column), (0, 1));

        assert!(table_at(TABLE, 2).is_none());
        assert!(table_at(TABLE, TABLE.len()).is_none());
    }

    #[test]
    fn pipes_without_delimiter_row_are_not_a_table() {
        let text = "| just | pipes |\n| more | pipes |";
        assert!(table_at(text, 3).is_none());
        assert!(edit_table(text, 3, TableEdit::DeleteTable).is_none());
    }

    #[test]
    fn add_row_inserts_empty_row_after_cursor_row() {
        let edit = edit_table(TABLE, caret_at(TABLE, "Asha"), TableEdit::AddRowAfter).unwrap();
        assert_eq!(
            edit.text,
            "Intro\n| Name | Role |\n| --- | --- |\n| Asha | Lead |\n|  |  |\nOutro"
        );
        assert_eq!(&edit.text[edit.select.0 - 2..edit.select.0], "| ");
        assert!(edit.text[edit.select.0..].starts_with(" |  |\nOutro"));
    }

    #[test]
    fn add_row_from_header_goes_below_delimiter() {
        let edit = edit_table(TABLE, caret_at(TABLE, "Name"), TableEdit::AddRowAfter).unwrap();
        assert_eq!(
            edit.text,
            "Intro\n| Name | Role |\n| --- | --- |\n|  |  |\n| Asha | Lead |\nOutro"
        );
    }

    #[test]
    fn add_column_after_cursor_cell() {
        let edit = edit_table(TABLE, caret_at(TABLE, "Name"), TableEdit::AddColumnAfter).unwrap();
        assert_eq!(
            edit.text,
            "Intro\n| Name |  | Role |\n| --- | --- | --- |\n| Asha |  | Lead |\nOutro"
        );
        assert_eq!(&edit.text[..edit.select.0], "Intro\n| Name | ");
    }

    #[test]
    fn delete_table_removes_all_rows() {
        let edit = edit_table(TABLE, caret_at(TABLE, "Lead"), TableEdit::DeleteTable).unwrap();
        assert_eq!(edit.text, "Intro\nOutro");
        assert_eq!(edit.select, (6, 6));
    }

    #[test]
    fn inserted_table_is_editable() {
        let inserted = apply_style("", 0, 0, Style::Table);
        let edit = edit_table(&inserted.text, inserted.select.0, TableEdit::AddColumnAfter).unwrap();
        assert!(edit.text.starts_with("| text |  | Column 2 | Column 3 |\n| --- | --- | --- | --- |"));
    }

    #[test]
    fn active_states_follow_cursor() {
        let text = "## Agenda\nSome **bold** and *it* with <u>under</u>\n- item\n3. third\n> quoted";
        let at = |needle: &str| caret_at(text, needle);

        assert!(is_style_active(text, at("Agenda"), Style::Heading(2)));
        assert!(!is_style_active(text, at("Agenda"), Style::Heading(1)));
        assert!(is_style_active(text, at("bold"), Style::Bold));
        assert!(!is_style_active(text, at("bold"), Style::Italic));
        assert!(is_style_active(text, at("it*"), Style::Italic));
        assert!(!is_style_active(text, at(" and"), Style::Bold));
        assert!(is_style_active(text, at("under"), Style::Underline));
        assert!(!is_style_active(text, at("item"), Style::Underline));
        assert!(is_style_active(text, at("item"), Style::BulletList));
        assert!(is_style_active(text, at("third"), Style::OrderedList));
        assert!(is_style_active(text, at("quoted"), Style::Quote));
        assert!(!is_style_active(text, at("quoted"), Style::HorizontalRule));
        assert!(is_style_active(TABLE, caret_at(TABLE, "Lead"), Style::Table));
    }
}
