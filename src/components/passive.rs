//! Two-terminal parts: resistors, capacitors, inductors, sources, diodes.

use serde::Serialize;

use super::Terminals;

/// A part with exactly two terminals.
///
/// For diodes `node1` is the anode and `node2` the cathode; for voltage
/// sources `node1` is the positive terminal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TwoTerminal {
    pub name: String,
    pub node1: String,
    pub node2: String,
    /// Resistance, capacitance, source value or diode model, as written
    pub value: String,
}

impl TwoTerminal {
    /// Create a new two-terminal part.
    pub fn new(
        name: impl Into<String>,
        node1: impl Into<String>,
        node2: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            node1: node1.into(),
            node2: node2.into(),
            value: value.into(),
        }
    }

    /// Whether both terminals sit on the same node.
    pub fn is_shorted(&self) -> bool {
        self.node1 == self.node2
    }
}

impl Terminals for TwoTerminal {
    fn terminals(&self) -> Option<(&str, &str)> {
        Some((self.node1.as_str(), self.node2.as_str()))
    }

    fn next_node(&self, current: &str) -> Option<&str> {
        if self.node1 == current {
            Some(self.node2.as_str())
        } else {
            Some(self.node1.as_str())
        }
    }

    fn pin_count(&self) -> usize {
        2
    }
}
