//! Export configuration.

/// Configuration for record exports.
/// Controls which fields are written and how bodies are rendered.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    /// Include timestamps in output
    pub include_timestamps: bool,
    /// Strip the trailing line break from each body
    pub trim_body: bool,
}

impl OutputConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timestamps(mut self) -> Self {
        self.include_timestamps = true;
        self
    }

    pub fn with_trimmed_body(mut self) -> Self {
        self.trim_body = true;
        self
    }

    /// Body of `msg` as it should appear in an export.
    pub fn body<'a>(&self, msg: &'a crate::Message) -> &'a str {
        if self.trim_body { msg.text() } else { msg.body() }
    }
}
