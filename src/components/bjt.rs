//! Bipolar junction transistor.

use serde::Serialize;

use super::Terminals;

/// Default model when a `Q` line omits one.
pub const DEFAULT_BJT_MODEL: &str = "2N2222";

/// A three-terminal BJT.
///
/// Current is walked from collector to emitter; the base is a side terminal
/// and never used for traversal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bjt {
    pub name: String,
    pub collector: String,
    pub base: String,
    pub emitter: String,
    pub model: String,
}

impl Bjt {
    /// Create a new transistor.
    pub fn new(
        name: impl Into<String>,
        collector: impl Into<String>,
        base: impl Into<String>,
        emitter: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            collector: collector.into(),
            base: base.into(),
            emitter: emitter.into(),
            model: model.into(),
        }
    }
}

impl Terminals for Bjt {
    fn terminals(&self) -> Option<(&str, &str)> {
        Some((self.collector.as_str(), self.emitter.as_str()))
    }

    fn next_node(&self, _current: &str) -> Option<&str> {
        Some(self.emitter.as_str())
    }

    fn pin_count(&self) -> usize {
        3
    }
}
