use std::mem;
use std::vec;

use fiberviz_errors::Diagnostic;
use fiberviz_scanner::{Fragment, FragmentKind, scan, tag_name};
use text_size::{TextRange, TextSize};

use crate::{MAX_NESTING_DEPTH, Node, Parse};

/// Unwinds the whole parse; only [`Parser::parse_root`] turns it into a result.
pub(crate) struct Abort;

pub(crate) struct Parser<'a> {
    text: &'a str,
    diagnostics: Vec<Diagnostic>,
}

/// An element whose head matched and whose content fragments are still being
/// turned into children.
struct Open<'a> {
    name: &'a str,
    key: Option<String>,
    fragments: vec::IntoIter<Fragment<'a>>,
    children: Vec<Node>,
}

impl Open<'_> {
    fn finish(self) -> Node {
        Node::element(self.name, self.key, self.children)
    }
}

impl<'a> Parser<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Self { text, diagnostics: Vec::new() }
    }

    pub(crate) fn parse_root(mut self) -> Parse {
        let range = trimmed(self.text, TextRange::up_to(TextSize::of(self.text)));

        let tree = match self.tag(range) {
            Ok(Some(node)) => {
                tracing::debug!(nodes = node.node_count(), height = node.height(), "parsed tree");
                Some(node)
            }
            Ok(None) => {
                self.diagnostics
                    .push(Diagnostic::error("input is not a single well-formed tag", range));
                None
            }
            Err(Abort) => None,
        };

        Parse { tree, diagnostics: self.diagnostics }
    }

    pub(crate) fn parse_fragment(mut self) -> Option<Node> {
        let range = trimmed(self.text, TextRange::up_to(TextSize::of(self.text)));
        self.tag(range).ok().flatten()
    }

    /// `<name attrs/>` or `<name attrs>content</name>`; anything else is `None`.
    /// Descends with an explicit stack of open elements.
    fn tag(&mut self, range: TextRange) -> Result<Option<Node>, Abort> {
        let Some(mut open) = self.head(range, 0)? else { return Ok(None) };
        let mut ancestors: Vec<Open<'a>> = Vec::new();

        loop {
            match open.fragments.next() {
                Some(fragment) if fragment.kind == FragmentKind::Text => {
                    open.children.push(Node::text(fragment.text));
                }
                Some(fragment) => match self.head(fragment.range, ancestors.len() + 1)? {
                    Some(child) => ancestors.push(mem::replace(&mut open, child)),
                    None => {
                        tracing::debug!(range = ?fragment.range, "dropping malformed fragment");
                        self.diagnostics.push(Diagnostic::warning(
                            "fragment is not a well-formed tag",
                            fragment.range,
                        ));
                    }
                },
                None => {
                    let node = open.finish();
                    let Some(parent) = ancestors.pop() else { return Ok(Some(node)) };
                    open = parent;
                    open.children.push(node);
                }
            }
        }
    }

    /// Matches the head of the tag at `range` and splits a paired tag's
    /// content into fragments. A self-closing tag has no fragments.
    fn head(&mut self, range: TextRange, depth: usize) -> Result<Option<Open<'a>>, Abort> {
        if depth > MAX_NESTING_DEPTH {
            tracing::debug!(?range, "nesting limit reached");
            self.diagnostics.push(Diagnostic::error(
                format!("elements nested deeper than {MAX_NESTING_DEPTH} levels"),
                range,
            ));
            return Err(Abort);
        }

        let text = self.text;
        let fragment = &text[range];
        let Some(name) = tag_name(fragment) else { return Ok(None) };
        let Some(head_end) = fragment.find('>') else { return Ok(None) };
        let attrs = &fragment[1 + name.len()..head_end];

        if head_end + 1 == fragment.len()
            && let Some(attrs) = attrs.strip_suffix('/')
        {
            return Ok(Some(Open {
                name,
                key: key_attr(attrs),
                fragments: Vec::new().into_iter(),
                children: Vec::new(),
            }));
        }

        let close = format!("</{name}>");
        let content_start = head_end + 1;
        let content_end = fragment.len().checked_sub(close.len());
        let Some(content_end) =
            content_end.filter(|&end| end >= content_start && fragment.ends_with(&close))
        else {
            return Ok(None);
        };

        let content = trimmed(
            text,
            TextRange::new(
                range.start() + TextSize::new(content_start as u32),
                range.start() + TextSize::new(content_end as u32),
            ),
        );
        let fragments = if content.is_empty() {
            Vec::new()
        } else {
            let scan = scan(&text[content], content.start());
            self.diagnostics.extend(scan.diagnostics);
            scan.fragments
        };

        Ok(Some(Open {
            name,
            key: key_attr(attrs),
            fragments: fragments.into_iter(),
            children: Vec::new(),
        }))
    }
}

/// Value of the first non-empty `key="..."` attribute.
fn key_attr(attrs: &str) -> Option<String> {
    const PATTERN: &str = "key=\"";

    attrs.match_indices(PATTERN).find_map(|(at, _)| {
        let starts_attribute = attrs[..at].chars().next_back().is_none_or(char::is_whitespace);
        let value = &attrs[at + PATTERN.len()..];
        let len = value.find('"')?;
        (starts_attribute && len > 0).then(|| value[..len].to_owned())
    })
}

fn trimmed(text: &str, range: TextRange) -> TextRange {
    let slice = &text[range];
    let leading = slice.len() - slice.trim_start().len();
    TextRange::at(range.start() + TextSize::new(leading as u32), TextSize::of(slice.trim()))
}
