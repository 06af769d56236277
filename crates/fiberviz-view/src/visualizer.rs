use fiberviz_parse::{Node, parse_jsx};

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum VisualizerError {
    #[error("input required: enter some markup to parse")]
    InputRequired,
    #[error("parse failed: check the markup syntax")]
    ParseFailed,
}

/// Editable source text, the last tree parsed from it, and the last error.
///
/// A failed parse never discards the previous tree.
#[derive(Debug, Clone, Default)]
pub struct Visualizer {
    input: String,
    tree: Option<Node>,
    error: Option<VisualizerError>,
}

impl Visualizer {
    pub fn new(initial_input: impl Into<String>) -> Self {
        Self { input: initial_input.into(), ..Self::default() }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn tree(&self) -> Option<&Node> {
        self.tree.as_ref()
    }

    pub fn error(&self) -> Option<VisualizerError> {
        self.error
    }

    /// Replaces the source text without reparsing.
    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    pub fn parse(&mut self) -> Result<&Node, VisualizerError> {
        if self.input.trim().is_empty() {
            return Err(self.fail(VisualizerError::InputRequired));
        }

        match parse_jsx(&self.input) {
            Some(tree) => {
                self.error = None;
                Ok(&*self.tree.insert(tree))
            }
            None => Err(self.fail(VisualizerError::ParseFailed)),
        }
    }

    /// Sets the source text and parses it. A failure leaves the tree and
    /// error as they were.
    pub fn load_example(&mut self, source: impl Into<String>) -> Option<&Node> {
        self.input = source.into();

        let Some(tree) = parse_jsx(&self.input) else {
            tracing::debug!("example did not parse");
            return None;
        };
        self.error = None;
        Some(&*self.tree.insert(tree))
    }

    pub fn clear(&mut self) {
        self.input.clear();
        self.tree = None;
        self.error = None;
    }

    fn fail(&mut self, error: VisualizerError) -> VisualizerError {
        tracing::debug!(%error, "parse rejected");
        self.error = Some(error);
        error
    }
}
