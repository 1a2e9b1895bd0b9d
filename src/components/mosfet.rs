//! MOSFET.

use serde::Serialize;

use super::Terminals;

/// Default model when an `M` line omits one.
pub const DEFAULT_MOSFET_MODEL: &str = "IRF530";

/// A four-terminal MOSFET, walked from drain to source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mosfet {
    pub name: String,
    pub drain: String,
    pub gate: String,
    pub source: String,
    pub body: String,
    pub model: String,
}

impl Mosfet {
    /// Create a new MOSFET.
    pub fn new(
        name: impl Into<String>,
        drain: impl Into<String>,
        gate: impl Into<String>,
        source: impl Into<String>,
        body: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            drain: drain.into(),
            gate: gate.into(),
            source: source.into(),
            body: body.into(),
            model: model.into(),
        }
    }
}

impl Terminals for Mosfet {
    fn terminals(&self) -> Option<(&str, &str)> {
        Some((self.drain.as_str(), self.source.as_str()))
    }

    fn next_node(&self, _current: &str) -> Option<&str> {
        Some(self.source.as_str())
    }

    fn pin_count(&self) -> usize {
        4
    }
}
