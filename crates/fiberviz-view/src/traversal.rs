use std::fmt;
use std::str::FromStr;

use fiberviz_parse::Node;

use crate::Playback;

/// Direction of the scripted walk over the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Begin-work order: parent before children, pre-order.
    #[default]
    Descend,
    /// Complete-work order, replayed as the descend walk in reverse.
    Return,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Descend => "descend",
            Self::Return => "return",
        })
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "descend" => Ok(Self::Descend),
            "return" => Ok(Self::Return),
            other => Err(format!("unknown traversal mode `{other}`")),
        }
    }
}

/// Pre-order paths of `node` and its subtree, each prefixed by `prefix`.
pub fn collect(node: &Node, prefix: &str) -> Vec<String> {
    let mut paths = Vec::new();
    collect_into(node, prefix, &mut paths);
    paths
}

fn collect_into(node: &Node, prefix: &str, paths: &mut Vec<String>) {
    let path = if prefix.is_empty() { node.label() } else { format!("{prefix}/{}", node.label()) };
    paths.push(path.clone());

    for child in &node.children {
        collect_into(child, &path, paths);
    }
}

pub fn traversal(root: &Node, mode: Mode) -> Vec<String> {
    let mut paths = collect(root, "");
    if mode == Mode::Return {
        paths.reverse();
    }
    paths
}

/// A traversal paired with the playback that steps through it.
#[derive(Debug, Clone)]
pub struct Walk {
    mode: Mode,
    steps: Vec<String>,
    playback: Playback,
}

impl Walk {
    pub fn new(root: &Node, mode: Mode) -> Self {
        let steps = traversal(root, mode);
        let playback = Playback::new(steps.len());
        Self { mode, steps, playback }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    pub fn current(&self) -> Option<&str> {
        self.steps.get(self.playback.current_step()).map(String::as_str)
    }

    pub fn playback(&self) -> &Playback {
        &self.playback
    }

    pub fn playback_mut(&mut self) -> &mut Playback {
        &mut self.playback
    }
}
