use std::fmt;

use fiberviz_parse::Node;

/// The pointers a fiber would hold, derived from tree position alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FiberLinks<'a> {
    /// `return`: type of the parent, `None` for the root.
    pub parent: Option<&'a str>,
    /// `child`: the first child.
    pub child: Option<&'a Node>,
    /// `sibling`: the next child of the same parent.
    pub sibling: Option<&'a Node>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FiberEntry<'a> {
    pub node: &'a Node,
    pub depth: usize,
    pub links: FiberLinks<'a>,
}

/// Every node of `root` in pre-order, with its pointers.
pub fn fiber_links(root: &Node) -> Vec<FiberEntry<'_>> {
    let mut entries = Vec::with_capacity(root.node_count());
    push_entries(root, None, None, 0, &mut entries);
    entries
}

fn push_entries<'a>(
    node: &'a Node,
    parent: Option<&'a str>,
    sibling: Option<&'a Node>,
    depth: usize,
    entries: &mut Vec<FiberEntry<'a>>,
) {
    let links = FiberLinks { parent, child: node.children.first(), sibling };
    entries.push(FiberEntry { node, depth, links });

    for (index, child) in node.children.iter().enumerate() {
        push_entries(child, Some(&node.kind), node.children.get(index + 1), depth + 1, entries);
    }
}

impl FiberEntry<'_> {
    /// The node's header line followed by its pointer line.
    fn write_fiber(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { node, depth, links } = self;
        let indent = depth * 2;

        write!(f, "{:indent$}{}", "", node.kind)?;
        if let Some(key) = &node.key {
            write!(f, " key={key:?}")?;
        }
        if let Some(content) = &node.content {
            write!(f, " {content:?}")?;
        }
        writeln!(f)?;

        write!(f, "{:indent$}  return: ", "")?;
        match links.parent {
            Some(parent) => write!(f, "↑ {parent}")?,
            None => f.write_str("null (FiberRoot)")?,
        }

        f.write_str(" | child: ")?;
        match links.child {
            Some(child) => write!(f, "↓ {}", child.kind)?,
            None => f.write_str("null")?,
        }

        f.write_str(" | sibling: ")?;
        match links.sibling {
            Some(sibling) => {
                write!(f, "→ {}", sibling.kind)?;
                if let Some(key) = &sibling.key {
                    write!(f, " [{key}]")?;
                }
            }
            None => f.write_str("null")?,
        }
        writeln!(f)
    }
}

struct FiberTree<'a>(&'a Node);

impl fmt::Display for FiberTree<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fiber_links(self.0).iter().try_for_each(|entry| entry.write_fiber(f))
    }
}

pub fn render_tree(root: &Node) -> String {
    FiberTree(root).to_string()
}
