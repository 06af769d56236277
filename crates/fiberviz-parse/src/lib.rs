use std::fmt;

pub use fiberviz_errors::Diagnostic;
use serde::Serialize;

mod parser;

/// Elements nested deeper than this abort the parse.
pub const MAX_NESTING_DEPTH: usize = 1024;

/// `type` of the leaves holding plain text.
pub const TEXT: &str = "text";

/// One parsed element or text leaf. Trees are built once and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub children: Vec<Node>,
}

impl Node {
    pub fn element(kind: impl Into<String>, key: Option<String>, children: Vec<Self>) -> Self {
        Self { kind: kind.into(), key, content: None, children }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            kind: TEXT.to_owned(),
            key: None,
            content: Some(content.into()),
            children: Vec::new(),
        }
    }

    pub fn is_text(&self) -> bool {
        self.content.is_some()
    }

    /// `type`, or `type[key]` for keyed nodes.
    pub fn label(&self) -> String {
        match &self.key {
            Some(key) => format!("{}[{key}]", self.kind),
            None => self.kind.clone(),
        }
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Self::node_count).sum::<usize>()
    }

    /// Number of levels in this subtree; a leaf has height 1.
    pub fn height(&self) -> usize {
        1 + self.children.iter().map(Self::height).max().unwrap_or(0)
    }

    fn write_outline(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        write!(f, "{:indent$}{}", "", self.kind, indent = depth * 2)?;
        if let Some(key) = &self.key {
            write!(f, " key={key:?}")?;
        }
        if let Some(content) = &self.content {
            write!(f, " {content:?}")?;
        }
        writeln!(f)?;

        for child in &self.children {
            child.write_outline(f, depth + 1)?;
        }
        Ok(())
    }
}

/// Indented outline, one node per line.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_outline(f, 0)
    }
}

#[derive(Debug, Default)]
pub struct Parse {
    pub tree: Option<Node>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Parses `text` into a single-rooted tree, or `None` when the outermost
/// markup is not one well-formed tag. Never panics on malformed input.
pub fn parse_jsx(text: &str) -> Option<Node> {
    parse_jsx_with_diagnostics(text).tree
}

/// Like [`parse_jsx`], also returning what was skipped along the way.
/// Diagnostic ranges are offsets into `text`.
pub fn parse_jsx_with_diagnostics(text: &str) -> Parse {
    parser::Parser::new(text).parse_root()
}

/// Parses one fragment that starts with `<`.
pub fn parse_tag(fragment: &str) -> Option<Node> {
    parser::Parser::new(fragment).parse_fragment()
}
