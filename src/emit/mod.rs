//! Name sink: collects emitted qualified names into the extern artifact.

/// Output seam between the walker and the artifact writer.
pub trait NameSink {
    /// Record one fully-qualified name.
    fn record(&mut self, qualified: &str);
}

/// Accumulates extern names, one newline-terminated line per name, in
/// emission order.
///
/// Nothing touches the filesystem here: the accumulated text is handed to
/// the output collaborator in a single write after the walk completes, so
/// a run that fails mid-walk leaves no truncated artifact behind.
#[derive(Debug, Default)]
pub struct ExternWriter {
    output: String,
    lines: usize,
}

impl ExternWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// The accumulated artifact text.
    pub fn text(&self) -> &str {
        &self.output
    }

    pub fn into_text(self) -> String {
        self.output
    }

    /// Number of recorded names.
    pub fn len(&self) -> usize {
        self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines == 0
    }
}

impl NameSink for ExternWriter {
    fn record(&mut self, qualified: &str) {
        self.output.push_str(qualified);
        self.output.push('\n');
        self.lines += 1;
    }
}

/// Collecting sink for tests and programmatic callers.
impl NameSink for Vec<String> {
    fn record(&mut self, qualified: &str) {
        self.push(qualified.to_string());
    }
}
