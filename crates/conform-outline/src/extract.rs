//! Outline extraction: one pass over the normalized text.
//!
//! Headings are ATX style: a run of `#` at the start of a line followed by
//! whitespace. Lines inside fenced code blocks are never headings, so the
//! scanner carries fence state across the whole pass.

use crate::document::{ParseWarning, Section};

/// The extraction result: ordered sections plus non-fatal warnings.
#[derive(Debug, Clone, Default)]
pub struct Outline {
    pub sections: Vec<Section>,
    pub warnings: Vec<ParseWarning>,
}

#[derive(Debug, Clone, Copy)]
struct Fence {
    marker: char,
    len: usize,
    line: usize,
}

struct HeadingLine {
    level: usize,
    title: String,
    line: usize,
    line_start: usize,
    line_end: usize,
}

/// Extract the ordered section list from normalized document text.
///
/// A document with zero headings yields an empty list; that is not an
/// error here (the comparator reports every schema entry as missing).
pub fn extract_outline(text: &str) -> Outline {
    let mut headings: Vec<HeadingLine> = Vec::new();
    let mut warnings: Vec<ParseWarning> = Vec::new();
    let mut fence: Option<Fence> = None;
    let mut prev_level = 0usize;

    let mut offset = 0usize;
    for (idx, raw_line) in text.split_inclusive('\n').enumerate() {
        let line_no = idx + 1;
        let line_start = offset;
        let line_end = offset + raw_line.len();
        offset = line_end;
        let content = raw_line.strip_suffix('\n').unwrap_or(raw_line);

        if let Some(open) = fence {
            if closes_fence(content, open) {
                fence = None;
            }
            continue;
        }
        if let Some(opened) = opens_fence(content, line_no) {
            fence = Some(opened);
            continue;
        }

        let Some((level, title)) = parse_heading(content) else {
            continue;
        };
        if level > prev_level + 1 {
            let detail = if prev_level == 0 {
                format!("document opens at heading level {level}")
            } else {
                format!("heading level jumps from {prev_level} to {level}")
            };
            warnings.push(ParseWarning {
                line: line_no,
                detail,
            });
        }
        prev_level = level;
        headings.push(HeadingLine {
            level,
            title,
            line: line_no,
            line_start,
            line_end,
        });
    }

    if let Some(open) = fence {
        warnings.push(ParseWarning {
            line: open.line,
            detail: "code fence is never closed; headings after it are suppressed".to_string(),
        });
    }

    let sections = headings
        .iter()
        .enumerate()
        .map(|(ordinal, h)| {
            let body_end = headings[ordinal + 1..]
                .iter()
                .find(|next| next.level <= h.level)
                .map(|next| next.line_start)
                .unwrap_or(text.len());
            Section {
                title: h.title.clone(),
                level: h.level,
                ordinal,
                line: h.line,
                body_start: h.line_end.min(body_end),
                body_end,
            }
        })
        .collect();

    Outline { sections, warnings }
}

fn opens_fence(content: &str, line_no: usize) -> Option<Fence> {
    let marker = match content.chars().next() {
        Some(c @ ('`' | '~')) => c,
        _ => return None,
    };
    let len = content.chars().take_while(|&c| c == marker).count();
    if len < 3 {
        return None;
    }
    Some(Fence {
        marker,
        len,
        line: line_no,
    })
}

fn closes_fence(content: &str, open: Fence) -> bool {
    let run = content.chars().take_while(|&c| c == open.marker).count();
    run >= open.len && content[run..].trim().is_empty()
}

fn parse_heading(content: &str) -> Option<(usize, String)> {
    if !content.starts_with('#') {
        return None;
    }
    let level = content.chars().take_while(|&c| c == '#').count();
    let rest = &content[level..];
    if !rest.starts_with([' ', '\t']) {
        return None;
    }
    Some((level, trim_closing_hashes(rest.trim()).to_string()))
}

// ATX closing sequence: a trailing run of `#` preceded by whitespace.
fn trim_closing_hashes(title: &str) -> &str {
    let stripped = title.trim_end_matches('#');
    if stripped.len() == title.len() {
        return title;
    }
    if stripped.is_empty() || stripped.ends_with([' ', '\t']) {
        stripped.trim_end()
    } else {
        title
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(outline: &Outline) -> Vec<(usize, &str)> {
        outline
            .sections
            .iter()
            .map(|s| (s.level, s.title.as_str()))
            .collect()
    }

    #[test]
    fn basic_extraction() {
        let text = "# One\nbody\n## One A\n# Two\n";
        let outline = extract_outline(text);
        assert_eq!(
            titles(&outline),
            vec![(1, "One"), (2, "One A"), (1, "Two")]
        );
        assert!(outline.warnings.is_empty());

        let one = &outline.sections[0];
        assert_eq!(&text[one.body_start..one.body_end], "body\n## One A\n");
        let one_a = &outline.sections[1];
        assert_eq!(&text[one_a.body_start..one_a.body_end], "");
        let two = &outline.sections[2];
        assert_eq!(&text[two.body_start..two.body_end], "");
    }

    #[test]
    fn ordinals_increase_and_lines_match() {
        let text = "# A\n\n# B\n\n# C\n";
        let outline = extract_outline(text);
        let ordinals: Vec<_> = outline.sections.iter().map(|s| s.ordinal).collect();
        assert_eq!(ordinals, vec![0, 1, 2]);
        let lines: Vec<_> = outline.sections.iter().map(|s| s.line).collect();
        assert_eq!(lines, vec![1, 3, 5]);
    }

    #[test]
    fn zero_headings_is_empty_not_error() {
        let outline = extract_outline("just prose\nno markers here\n");
        assert!(outline.sections.is_empty());
        assert!(outline.warnings.is_empty());
    }

    #[test]
    fn empty_document() {
        let outline = extract_outline("");
        assert!(outline.sections.is_empty());
    }

    #[test]
    fn fenced_headings_are_suppressed() {
        let text = "# Real\n```\n# not a heading\n```\n# Also Real\n";
        let outline = extract_outline(text);
        assert_eq!(titles(&outline), vec![(1, "Real"), (1, "Also Real")]);
    }

    #[test]
    fn tilde_fences_are_suppressed_too() {
        let text = "~~~text\n# inside\n~~~\n# After\n";
        let outline = extract_outline(text);
        assert_eq!(titles(&outline), vec![(1, "After")]);
    }

    #[test]
    fn fence_close_requires_same_marker() {
        let text = "```\n~~~\n# still inside\n```\n# Out\n";
        let outline = extract_outline(text);
        assert_eq!(titles(&outline), vec![(1, "Out")]);
    }

    #[test]
    fn fence_close_requires_at_least_opening_length() {
        let text = "````\n```\n# still inside\n````\n# Out\n";
        let outline = extract_outline(text);
        assert_eq!(titles(&outline), vec![(1, "Out")]);
    }

    #[test]
    fn unclosed_fence_suppresses_to_end_and_warns() {
        let text = "# Before\n```\n# swallowed\n";
        let outline = extract_outline(text);
        assert_eq!(titles(&outline), vec![(1, "Before")]);
        assert_eq!(outline.warnings.len(), 1);
        assert_eq!(outline.warnings[0].line, 2);
    }

    #[test]
    fn marker_without_whitespace_is_not_a_heading() {
        let outline = extract_outline("#Introduction\n#!shebang-ish\n");
        assert!(outline.sections.is_empty());
    }

    #[test]
    fn closing_hashes_are_trimmed() {
        let outline = extract_outline("# Title ##\n# Issue #42\n# C#\n");
        let got: Vec<_> = outline.sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(got, vec!["Title", "Issue #42", "C#"]);
    }

    #[test]
    fn level_skip_warns_but_extracts() {
        let text = "# One\n### Deep\n";
        let outline = extract_outline(text);
        assert_eq!(titles(&outline), vec![(1, "One"), (3, "Deep")]);
        assert_eq!(outline.warnings.len(), 1);
        assert_eq!(outline.warnings[0].line, 2);
        assert!(outline.warnings[0].detail.contains("jumps from 1 to 3"));
    }

    #[test]
    fn document_opening_below_top_level_warns() {
        let outline = extract_outline("## Starts Deep\n");
        assert_eq!(outline.warnings.len(), 1);
        assert!(outline.warnings[0].detail.contains("opens at heading level 2"));
    }

    #[test]
    fn body_span_covers_nested_subsections() {
        let text = "# Top\nintro\n## Sub\nsub body\n### Deeper\ndeep\n# Next\n";
        let outline = extract_outline(text);
        let top = &outline.sections[0];
        assert_eq!(
            &text[top.body_start..top.body_end],
            "intro\n## Sub\nsub body\n### Deeper\ndeep\n"
        );
        let sub = &outline.sections[1];
        assert_eq!(&text[sub.body_start..sub.body_end], "sub body\n### Deeper\ndeep\n");
    }

    #[test]
    fn final_section_body_runs_to_document_end() {
        let text = "# Only\nlast line without newline";
        let outline = extract_outline(text);
        let only = &outline.sections[0];
        assert_eq!(
            &text[only.body_start..only.body_end],
            "last line without newline"
        );
    }
}
