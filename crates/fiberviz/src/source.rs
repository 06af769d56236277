use std::fs;
use std::io::{self, IsTerminal as _};

use anyhow::Context;
use camino::Utf8PathBuf;
use fiberviz_errors::{Diagnostic, Renderer};
use fiberviz_parse::{Node, parse_jsx_with_diagnostics};

pub(crate) struct Source {
    path: Utf8PathBuf,
    text: String,
}

impl Source {
    /// Reads `path`, or stdin when `path` is `-`.
    pub(crate) fn read(path: Utf8PathBuf) -> anyhow::Result<Self> {
        let text = if path.as_str() == "-" {
            io::read_to_string(io::stdin()).context("failed to read stdin")?
        } else {
            fs::read_to_string(&path).with_context(|| format!("failed to read `{path}`"))?
        };

        Ok(Self { path, text })
    }

    /// Parses the text, reporting anything skipped to stderr.
    pub(crate) fn parse(&self) -> anyhow::Result<Node> {
        let parse = parse_jsx_with_diagnostics(&self.text);
        self.report(&parse.diagnostics);

        parse.tree.with_context(|| format!("`{}` is not a single well-formed tag", self.path))
    }

    fn report(&self, diagnostics: &[Diagnostic]) {
        let renderer =
            if io::stderr().is_terminal() { Renderer::styled() } else { Renderer::plain() };

        for diagnostic in diagnostics {
            tracing::debug!(
                at = %diagnostic.position(&self.text),
                severity = ?diagnostic.severity(),
                "{}",
                diagnostic.message()
            );
            eprintln!("{}", diagnostic.render(&renderer, self.path.as_str(), &self.text));
        }
    }
}
