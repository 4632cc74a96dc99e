//! # Diff Builder
//!
//! Compares two text buffers line by line and renders the result as a
//! side-by-side HTML table, next to each side rendered through
//! [`crate::render`].
//!
//! The work is split in two passes so that presentation never feeds back into
//! the alignment:
//!
//! 1. [`diff_rows`] aligns the lines (Myers via `similar`) and flattens the
//!    edit script into [`DiffRow`]s. In context mode unchanged runs longer than
//!    the window are replaced by a [`DiffRow::Skip`]; full-context mode keeps
//!    every row of the same alignment.
//! 2. [`render_table`] turns rows into markup. Paired changed lines get a
//!    character-level diff so the edited spans stand out.
//!
//! Everything here is a pure function of its arguments. The stored-file diff
//! and the unsaved-buffer preview go through the same [`build_diff_with`].

use crate::model::{DiffPayload, Document};
use crate::render::render_markdown;
use similar::{capture_diff_deadline, capture_diff_slices, group_diff_ops, Algorithm, DiffOp};
use std::time::{Duration, Instant};

/// Unchanged lines kept around each change in context mode.
pub const CONTEXT_LINES: usize = 3;

/// Time allowed for line alignment before falling back to a coarser diff.
pub const DIFF_DEADLINE: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffOptions {
    pub context_lines: usize,
    /// Show every line instead of collapsing unchanged runs.
    pub full_context: bool,
    /// `None` aligns without a time limit.
    pub deadline: Option<Duration>,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            context_lines: CONTEXT_LINES,
            full_context: false,
            deadline: Some(DIFF_DEADLINE),
        }
    }
}

impl DiffOptions {
    pub fn full() -> Self {
        Self {
            full_context: true,
            ..Self::default()
        }
    }
}

/// One row of the side-by-side view. Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffRow<'a> {
    Equal {
        old_no: usize,
        new_no: usize,
        text: &'a str,
    },
    Changed {
        old_no: usize,
        old: &'a str,
        new_no: usize,
        new: &'a str,
    },
    Removed {
        old_no: usize,
        text: &'a str,
    },
    Added {
        new_no: usize,
        text: &'a str,
    },
    /// A run of unchanged lines hidden by context mode.
    Skip { lines: usize },
}

impl DiffRow<'_> {
    pub fn is_change(&self) -> bool {
        !matches!(self, DiffRow::Equal { .. } | DiffRow::Skip { .. })
    }
}

/// Build the full diff payload with the default context window.
pub fn build_diff(
    before_raw: &str,
    after_raw: &str,
    before_name: &str,
    after_name: &str,
) -> DiffPayload {
    build_diff_with(
        before_raw,
        after_raw,
        before_name,
        after_name,
        DiffOptions::default(),
    )
}

pub fn build_diff_with(
    before_raw: &str,
    after_raw: &str,
    before_name: &str,
    after_name: &str,
    options: DiffOptions,
) -> DiffPayload {
    let rows = diff_rows(before_raw, after_raw, options);
    let raw_diff_html = render_table(&rows, before_name, after_name);

    DiffPayload {
        before: Document {
            name: before_name.to_string(),
            raw_content: before_raw.to_string(),
            html_content: render_markdown(before_raw),
        },
        after: Document {
            name: after_name.to_string(),
            raw_content: after_raw.to_string(),
            html_content: render_markdown(after_raw),
        },
        raw_diff_html,
    }
}

/// Align `before` and `after` line by line.
pub fn diff_rows<'a>(before: &'a str, after: &'a str, options: DiffOptions) -> Vec<DiffRow<'a>> {
    let old: Vec<&str> = before.lines().collect();
    let new: Vec<&str> = after.lines().collect();
    let deadline = options.deadline.map(|limit| Instant::now() + limit);
    let ops = capture_diff_deadline(
        Algorithm::Myers,
        &old,
        0..old.len(),
        &new,
        0..new.len(),
        deadline,
    );

    let groups = if options.full_context {
        vec![ops]
    } else {
        group_diff_ops(ops, options.context_lines)
    };

    let mut rows = Vec::new();
    let mut cursor = 0;
    for group in &groups {
        if let Some(first) = group.first() {
            let start = first.old_range().start;
            if start > cursor {
                rows.push(DiffRow::Skip {
                    lines: start - cursor,
                });
            }
        }
        for op in group {
            push_op(&mut rows, op, &old, &new);
            cursor = op.old_range().end;
        }
    }
    if !groups.is_empty() && cursor < old.len() {
        rows.push(DiffRow::Skip {
            lines: old.len() - cursor,
        });
    }
    rows
}

fn push_op<'a>(rows: &mut Vec<DiffRow<'a>>, op: &DiffOp, old: &[&'a str], new: &[&'a str]) {
    match *op {
        DiffOp::Equal {
            old_index,
            new_index,
            len,
        } => {
            for i in 0..len {
                rows.push(DiffRow::Equal {
                    old_no: old_index + i + 1,
                    new_no: new_index + i + 1,
                    text: old[old_index + i],
                });
            }
        }
        DiffOp::Delete {
            old_index, old_len, ..
        } => {
            for i in old_index..old_index + old_len {
                rows.push(DiffRow::Removed {
                    old_no: i + 1,
                    text: old[i],
                });
            }
        }
        DiffOp::Insert {
            new_index, new_len, ..
        } => {
            for i in new_index..new_index + new_len {
                rows.push(DiffRow::Added {
                    new_no: i + 1,
                    text: new[i],
                });
            }
        }
        DiffOp::Replace {
            old_index,
            old_len,
            new_index,
            new_len,
        } => {
            let common = old_len.min(new_len);
            for i in 0..common {
                rows.push(DiffRow::Changed {
                    old_no: old_index + i + 1,
                    old: old[old_index + i],
                    new_no: new_index + i + 1,
                    new: new[new_index + i],
                });
            }
            for i in common..old_len {
                rows.push(DiffRow::Removed {
                    old_no: old_index + i + 1,
                    text: old[old_index + i],
                });
            }
            for i in common..new_len {
                rows.push(DiffRow::Added {
                    new_no: new_index + i + 1,
                    text: new[new_index + i],
                });
            }
        }
    }
}

/// Render rows as a four-column table: line number and text for each side.
pub fn render_table(rows: &[DiffRow<'_>], before_name: &str, after_name: &str) -> String {
    let mut out = String::from("<table class=\"diff\">\n");
    out.push_str(&format!(
        "<thead><tr><th class=\"diff_header\" colspan=\"2\">{}</th>\
         <th class=\"diff_header\" colspan=\"2\">{}</th></tr></thead>\n<tbody>\n",
        html_escape(before_name),
        html_escape(after_name)
    ));

    if rows.is_empty() {
        out.push_str(
            "<tr class=\"diff_empty\"><td colspan=\"4\">No differences found</td></tr>\n",
        );
    }

    for row in rows {
        match row {
            DiffRow::Equal {
                old_no,
                new_no,
                text,
            } => {
                let escaped = html_escape(text);
                push_row(
                    &mut out,
                    "diff_equal",
                    Some(*old_no),
                    &escaped,
                    Some(*new_no),
                    &escaped,
                );
            }
            DiffRow::Changed {
                old_no,
                old,
                new_no,
                new,
            } => {
                let (left, right) = inline_changes(old, new);
                push_row(
                    &mut out,
                    "diff_changed",
                    Some(*old_no),
                    &left,
                    Some(*new_no),
                    &right,
                );
            }
            DiffRow::Removed { old_no, text } => {
                let left = format!("<span class=\"diff_sub\">{}</span>", html_escape(text));
                push_row(&mut out, "diff_removed", Some(*old_no), &left, None, "");
            }
            DiffRow::Added { new_no, text } => {
                let right = format!("<span class=\"diff_add\">{}</span>", html_escape(text));
                push_row(&mut out, "diff_added", None, "", Some(*new_no), &right);
            }
            DiffRow::Skip { lines } => {
                let noun = if *lines == 1 { "line" } else { "lines" };
                out.push_str(&format!(
                    "<tr class=\"diff_skip\"><td colspan=\"4\">&hellip; {} unchanged {} &hellip;</td></tr>\n",
                    lines, noun
                ));
            }
        }
    }

    out.push_str("</tbody>\n</table>");
    out
}

fn push_row(
    out: &mut String,
    class: &str,
    old_no: Option<usize>,
    left: &str,
    new_no: Option<usize>,
    right: &str,
) {
    let number = |n: Option<usize>| n.map(|n| n.to_string()).unwrap_or_default();
    out.push_str(&format!(
        "<tr class=\"{}\"><td class=\"diff_line_no\">{}</td><td class=\"diff_text\">{}</td>\
         <td class=\"diff_line_no\">{}</td><td class=\"diff_text\">{}</td></tr>\n",
        class,
        number(old_no),
        left,
        number(new_no),
        right
    ));
}

/// Character-level markup for a pair of changed lines.
fn inline_changes(old: &str, new: &str) -> (String, String) {
    let old_chars: Vec<char> = old.chars().collect();
    let new_chars: Vec<char> = new.chars().collect();
    let ops = capture_diff_slices(Algorithm::Myers, &old_chars, &new_chars);

    let mut left = String::new();
    let mut right = String::new();
    for op in ops {
        let old_part: String = old_chars[op.old_range()].iter().collect();
        let new_part: String = new_chars[op.new_range()].iter().collect();
        match op {
            DiffOp::Equal { .. } => {
                left.push_str(&html_escape(&old_part));
                right.push_str(&html_escape(&new_part));
            }
            DiffOp::Delete { .. } => push_span(&mut left, "diff_sub", &old_part),
            DiffOp::Insert { .. } => push_span(&mut right, "diff_add", &new_part),
            DiffOp::Replace { .. } => {
                push_span(&mut left, "diff_chg", &old_part);
                push_span(&mut right, "diff_chg", &new_part);
            }
        }
    }
    (left, right)
}

fn push_span(out: &mut String, class: &str, text: &str) {
    out.push_str(&format!("<span class=\"{}\">{}</span>", class, html_escape(text)));
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
