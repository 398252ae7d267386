//! Console sink - room output straight to stdout

use crate::domain::traits::Sink;

/// Prints every line to stdout, in emission order
#[derive(Debug, Clone, Default)]
pub struct ConsoleSink {
    prefix: Option<String>,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }
}

impl Sink for ConsoleSink {
    fn emit(&self, line: &str) {
        match &self.prefix {
            Some(prefix) => println!("{} {}", prefix, line),
            None => println!("{}", line),
        }
    }
}
