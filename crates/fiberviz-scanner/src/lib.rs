//! Splits element content into top-level tag and text fragments.

mod cursor;

use cursor::Cursor;
use fiberviz_errors::Diagnostic;
use text_size::{TextRange, TextSize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentKind {
    Tag,
    Text,
}

/// A complete tag (self-closing, or opening through its matching close) or a
/// trimmed run of text. `range` is absolute in the text handed to the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fragment<'a> {
    pub kind: FragmentKind,
    pub text: &'a str,
    pub range: TextRange,
}

#[derive(Debug, Default)]
pub struct Scan<'a> {
    pub fragments: Vec<Fragment<'a>>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Returns the top-level fragments of `content` as plain strings.
pub fn extract_child_tags(content: &str) -> Vec<&str> {
    scan(content, TextSize::new(0)).fragments.into_iter().map(|fragment| fragment.text).collect()
}

/// Scans `content`, which starts at `offset` in the surrounding source.
pub fn scan(content: &str, offset: TextSize) -> Scan<'_> {
    Scanner::new(content, offset).run()
}

pub fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Name of the tag opening at the start of `text`, if `text` starts with `<`
/// followed by at least one name character.
pub fn tag_name(text: &str) -> Option<&str> {
    let rest = text.strip_prefix('<')?;
    let len = rest.find(|c: char| !is_name_char(c)).unwrap_or(rest.len());
    (len > 0).then(|| &rest[..len])
}

struct Scanner<'a> {
    text: &'a str,
    offset: TextSize,
    cursor: Cursor<'a>,
    text_start: usize,
    /// Offset of the first `>` at or after each byte offset.
    next_gt: Vec<Option<usize>>,
    scan: Scan<'a>,
}

impl<'a> Scanner<'a> {
    fn new(text: &'a str, offset: TextSize) -> Self {
        let mut next_gt = vec![None; text.len() + 1];
        for (at, byte) in text.bytes().enumerate().rev() {
            next_gt[at] = if byte == b'>' { Some(at) } else { next_gt[at + 1] };
        }

        Self {
            text,
            offset,
            cursor: Cursor::new(text),
            text_start: 0,
            next_gt,
            scan: Scan::default(),
        }
    }

    fn run(mut self) -> Scan<'a> {
        while !self.cursor.is_eof() {
            if self.cursor.peek() == '<'
                && let Some(name) = tag_name(self.cursor.rest())
            {
                self.tag(name);
                continue;
            }
            self.cursor.advance();
        }

        self.flush_text(self.text.len());
        self.scan
    }

    fn tag(&mut self, name: &'a str) {
        let start = self.cursor.pos();

        let end = self.self_closing_end(start).or_else(|| self.matching_close(name));

        self.flush_text(start);

        match end {
            Some(end) => {
                self.cursor.bump(end - start);
                self.push(FragmentKind::Tag, start, end);
                self.text_start = end;
            }
            None => {
                let range = self.range(start, start + 1 + name.len());
                tracing::debug!(tag = name, ?range, "skipping unclosed tag");
                let message = format!("unclosed `<{name}>`");
                self.scan.diagnostics.push(Diagnostic::warning(message, range));

                self.cursor.advance();
                self.text_start = self.cursor.pos();
            }
        }
    }

    /// Finds the end of the closing tag that balances the `<name` under the
    /// cursor. Only tags named `name` change the depth.
    fn matching_close(&self, name: &str) -> Option<usize> {
        let close = format!("</{name}>");
        let mut probe = self.cursor.clone();
        probe.bump(1 + name.len());
        let mut depth = 1usize;

        while !probe.is_eof() {
            let rest = probe.rest();

            if rest.starts_with(&close) {
                probe.bump(close.len());
                depth -= 1;
                if depth == 0 {
                    return Some(probe.pos());
                }
            } else if let Some(end) = self.self_closing_end(probe.pos()) {
                probe.bump(end - probe.pos());
            } else {
                if opens(rest, name) {
                    depth += 1;
                }
                probe.advance();
            }
        }

        None
    }

    /// End of the self-closing tag at `start`: a named tag whose first `>` is
    /// directly preceded by `/`.
    fn self_closing_end(&self, start: usize) -> Option<usize> {
        let name = tag_name(&self.text[start..])?;
        let gt = self.next_gt[start]?;

        (gt > start + 1 + name.len() && self.text.as_bytes()[gt - 1] == b'/').then_some(gt + 1)
    }

    fn flush_text(&mut self, end: usize) {
        if self.text_start >= end {
            return;
        }

        let raw = &self.text[self.text_start..end];
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            let start = self.text_start + (raw.len() - raw.trim_start().len());
            self.push(FragmentKind::Text, start, start + trimmed.len());
        }
    }

    fn push(&mut self, kind: FragmentKind, start: usize, end: usize) {
        let range = self.range(start, end);
        tracing::trace!(?kind, ?range, "fragment");
        self.scan.fragments.push(Fragment { kind, text: &self.text[start..end], range });
    }

    fn range(&self, start: usize, end: usize) -> TextRange {
        TextRange::new(TextSize::new(start as u32), TextSize::new(end as u32)) + self.offset
    }
}

/// `<name` followed by whitespace or `>`.
fn opens(text: &str, name: &str) -> bool {
    text.strip_prefix('<')
        .and_then(|rest| rest.strip_prefix(name))
        .and_then(|rest| rest.chars().next())
        .is_some_and(|c| c.is_whitespace() || c == '>')
}

#[cfg(test)]
mod tests {
    use expect_test::{Expect, expect};

    use super::*;

    fn check(content: &str, expect: Expect) {
        let actual = scan(content, TextSize::new(0))
            .fragments
            .iter()
            .map(|fragment| format!("{:?}@{:?} {}\n", fragment.kind, fragment.range, fragment.text))
            .collect::<String>();
        expect.assert_eq(&actual);
    }

    #[test]
    fn siblings_in_source_order() {
        check(
            r#"<li key="a">A</li> <li key="b">B</li>"#,
            expect![[r#"
                Tag@0..18 <li key="a">A</li>
                Tag@19..37 <li key="b">B</li>
            "#]],
        );
    }

    #[test]
    fn nested_same_name_tags_balance() {
        assert_eq!(
            extract_child_tags("<div><div>x</div></div><div>y</div>"),
            ["<div><div>x</div></div>", "<div>y</div>"]
        );
    }

    #[test]
    fn self_closing_tags_are_whole_fragments() {
        assert_eq!(
            extract_child_tags("<input /><br/><button>Go</button>"),
            ["<input />", "<br/>", "<button>Go</button>"]
        );
    }

    #[test]
    fn self_closing_same_name_does_not_open() {
        assert_eq!(extract_child_tags("<li><li /></li>tail"), ["<li><li /></li>", "tail"]);
    }

    #[test]
    fn text_runs_are_trimmed_and_blank_runs_dropped() {
        check(
            "  Hello <b>world</b>  \n  ",
            expect![[r#"
                Text@2..7 Hello
                Tag@8..20 <b>world</b>
            "#]],
        );
        assert!(extract_child_tags(" \n\t ").is_empty());
        assert!(extract_child_tags("").is_empty());
    }

    #[test]
    fn stray_angle_bracket_stays_in_text() {
        assert_eq!(extract_child_tags("a < b <i>c</i>"), ["a < b", "<i>c</i>"]);
        assert_eq!(extract_child_tags("</p> after"), ["</p> after"]);
    }

    #[test]
    fn unclosed_tag_is_skipped_and_scanning_resumes() {
        let result = scan("<span>unclosed", TextSize::new(5));

        let texts: Vec<_> = result.fragments.iter().map(|fragment| fragment.text).collect();
        assert_eq!(texts, ["span>unclosed"]);
        assert_eq!(result.fragments[0].range, TextRange::new(6.into(), 19.into()));

        assert_eq!(result.diagnostics.len(), 1);
        assert_eq!(result.diagnostics[0].message(), "unclosed `<span>`");
        assert_eq!(result.diagnostics[0].range(), TextRange::new(5.into(), 10.into()));
    }

    #[test]
    fn self_closing_ends_at_the_first_gt() {
        assert_eq!(extract_child_tags("<input />rest"), ["<input />", "rest"]);
        assert_eq!(extract_child_tags("<a<b/>"), ["<a<b/>"]);
        assert_eq!(extract_child_tags("<a>b/>"), ["a>b/>"]);
        assert_eq!(extract_child_tags("<img"), ["img"]);
    }

    #[test]
    fn long_run_of_unclosed_tags() {
        let content = "<a".repeat(4_000);
        let result = scan(&content, TextSize::new(0));

        assert_eq!(result.diagnostics.len(), 4_000);
        assert_eq!(result.fragments.len(), 4_000);
        assert!(result.fragments.iter().all(|fragment| fragment.text == "a"));
        assert_eq!(result.fragments[3_999].range, TextRange::new(7_999.into(), 8_000.into()));
    }

    #[test]
    fn text_before_unclosed_tag_is_kept() {
        assert_eq!(extract_child_tags("head <p>x <b>y</b>"), ["head", "p>x", "<b>y</b>"]);
    }

    #[test]
    fn tag_shapes() {
        assert_eq!(tag_name("<div class=\"x\">"), Some("div"));
        assert_eq!(tag_name("</div>"), None);
        assert_eq!(tag_name("< div>"), None);
        assert!(opens("<li key=\"a\">", "li"));
        assert!(!opens("<link>", "li"));
    }
}
