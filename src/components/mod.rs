//! Component records produced by the netlist parser.
//!
//! This module provides one record type per family of parts:
//! - Two-terminal: Resistor, Capacitor, Inductor, Voltage Source, Diode
//! - Transistors: BJT, MOSFET
//! - Integrated circuits: op-amps and generic ICs
//!
//! Each record implements [`Terminals`], which tells the path finder where
//! current enters a part and where it leaves.

mod bjt;
mod ic;
mod mosfet;
mod passive;

pub use bjt::{Bjt, DEFAULT_BJT_MODEL};
pub use ic::IntegratedCircuit;
pub use mosfet::{Mosfet, DEFAULT_MOSFET_MODEL};
pub use passive::TwoTerminal;

use std::fmt;

use serde::Serialize;

/// Default model when a `D` line omits one.
pub const DEFAULT_DIODE_MODEL: &str = "1N4148";

/// Traversal capability shared by every part.
pub trait Terminals {
    /// The `(primary_in, primary_out)` node pair, if the part has one.
    fn terminals(&self) -> Option<(&str, &str)>;

    /// The node reached by walking through this part from `current`.
    fn next_node(&self, current: &str) -> Option<&str>;

    /// Number of pins, informational only.
    fn pin_count(&self) -> usize;
}

/// The kind of a component, read from its reference designator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    /// Resistor
    Resistor,
    /// Capacitor
    Capacitor,
    /// Inductor
    Inductor,
    /// Voltage Source
    VoltageSource,
    /// Diode
    Diode,
    /// Bipolar Junction Transistor
    Bjt,
    /// MOSFET
    Mosfet,
    /// Op-amp or generic IC
    IntegratedCircuit,
    /// Unrecognized designator, handled as a two-terminal part
    Other(char),
}

impl ComponentKind {
    /// Classify a reference designator by its first letter.
    pub fn from_designator(designator: &str) -> Self {
        let letter = designator
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('?');
        match letter {
            'R' => Self::Resistor,
            'C' => Self::Capacitor,
            'L' => Self::Inductor,
            'V' => Self::VoltageSource,
            'D' => Self::Diode,
            'Q' => Self::Bjt,
            'M' => Self::Mosfet,
            'U' | 'X' => Self::IntegratedCircuit,
            other => Self::Other(other),
        }
    }

    /// Get the expected number of tokens (name included) for this kind.
    pub fn min_tokens(&self) -> usize {
        match self {
            Self::Diode => 3,
            Self::Mosfet => 5,
            // Bjt: name C B E; IC: name, at least two nodes and the model;
            // two-terminal: name N1 N2 value
            _ => 4,
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resistor => write!(f, "resistor"),
            Self::Capacitor => write!(f, "capacitor"),
            Self::Inductor => write!(f, "inductor"),
            Self::VoltageSource => write!(f, "voltage source"),
            Self::Diode => write!(f, "diode"),
            Self::Bjt => write!(f, "transistor"),
            Self::Mosfet => write!(f, "MOSFET"),
            Self::IntegratedCircuit => write!(f, "IC"),
            Self::Other(letter) => write!(f, "part '{}'", letter),
        }
    }
}

/// A parsed circuit component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Component {
    Resistor(TwoTerminal),
    Capacitor(TwoTerminal),
    Inductor(TwoTerminal),
    VoltageSource(TwoTerminal),
    Diode(TwoTerminal),
    Bjt(Bjt),
    Mosfet(Mosfet),
    IntegratedCircuit(IntegratedCircuit),
    Other { designator: char, part: TwoTerminal },
}

impl Component {
    /// Component kind.
    pub fn kind(&self) -> ComponentKind {
        match self {
            Self::Resistor(_) => ComponentKind::Resistor,
            Self::Capacitor(_) => ComponentKind::Capacitor,
            Self::Inductor(_) => ComponentKind::Inductor,
            Self::VoltageSource(_) => ComponentKind::VoltageSource,
            Self::Diode(_) => ComponentKind::Diode,
            Self::Bjt(_) => ComponentKind::Bjt,
            Self::Mosfet(_) => ComponentKind::Mosfet,
            Self::IntegratedCircuit(_) => ComponentKind::IntegratedCircuit,
            Self::Other { designator, .. } => ComponentKind::Other(*designator),
        }
    }

    /// Reference designator, e.g. `R1`.
    pub fn name(&self) -> &str {
        match self {
            Self::Resistor(p)
            | Self::Capacitor(p)
            | Self::Inductor(p)
            | Self::VoltageSource(p)
            | Self::Diode(p)
            | Self::Other { part: p, .. } => &p.name,
            Self::Bjt(q) => &q.name,
            Self::Mosfet(m) => &m.name,
            Self::IntegratedCircuit(u) => &u.name,
        }
    }

    /// Value or model string, exactly as written in the netlist.
    pub fn value(&self) -> &str {
        match self {
            Self::Resistor(p)
            | Self::Capacitor(p)
            | Self::Inductor(p)
            | Self::VoltageSource(p)
            | Self::Diode(p)
            | Self::Other { part: p, .. } => &p.value,
            Self::Bjt(q) => &q.model,
            Self::Mosfet(m) => &m.model,
            Self::IntegratedCircuit(u) => &u.model,
        }
    }

    /// Two-terminal view of this part, if it is one.
    pub fn as_two_terminal(&self) -> Option<&TwoTerminal> {
        match self {
            Self::Resistor(p)
            | Self::Capacitor(p)
            | Self::Inductor(p)
            | Self::VoltageSource(p)
            | Self::Diode(p)
            | Self::Other { part: p, .. } => Some(p),
            _ => None,
        }
    }

    /// Check if this is a voltage source.
    pub fn is_voltage_source(&self) -> bool {
        matches!(self, Self::VoltageSource(_))
    }

    /// Label used on the drawing: name and value on two lines.
    pub fn label(&self) -> String {
        format!("{}\n{}", self.name(), self.value())
    }

    fn as_terminals(&self) -> &dyn Terminals {
        match self {
            Self::Resistor(p)
            | Self::Capacitor(p)
            | Self::Inductor(p)
            | Self::VoltageSource(p)
            | Self::Diode(p)
            | Self::Other { part: p, .. } => p,
            Self::Bjt(q) => q,
            Self::Mosfet(m) => m,
            Self::IntegratedCircuit(u) => u,
        }
    }

    /// Node where traversal enters this part.
    pub fn primary_in_node(&self) -> Option<&str> {
        self.terminals().map(|(input, _)| input)
    }

    /// Node where traversal leaves this part.
    pub fn primary_out_node(&self) -> Option<&str> {
        self.terminals().map(|(_, output)| output)
    }
}

impl Terminals for Component {
    fn terminals(&self) -> Option<(&str, &str)> {
        self.as_terminals().terminals()
    }

    fn next_node(&self, current: &str) -> Option<&str> {
        self.as_terminals().next_node(current)
    }

    fn pin_count(&self) -> usize {
        self.as_terminals().pin_count()
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.kind(), self.name(), self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_designator() {
        assert_eq!(ComponentKind::from_designator("r12"), ComponentKind::Resistor);
        assert_eq!(ComponentKind::from_designator("X3"), ComponentKind::IntegratedCircuit);
        assert_eq!(ComponentKind::from_designator("U3"), ComponentKind::IntegratedCircuit);
        assert_eq!(ComponentKind::from_designator("K1"), ComponentKind::Other('K'));
    }

    #[test]
    fn test_primary_nodes_per_kind() {
        let r = Component::Resistor(TwoTerminal::new("R1", "1", "2", "100"));
        assert_eq!(r.primary_in_node(), Some("1"));
        assert_eq!(r.primary_out_node(), Some("2"));

        let m = Component::Mosfet(Mosfet::new("M1", "2", "3", "0", "0", DEFAULT_MOSFET_MODEL));
        assert_eq!(m.terminals(), Some(("2", "0")));
        assert_eq!(m.pin_count(), 4);
        assert_eq!(m.value(), "IRF530");
    }

    #[test]
    fn test_label_and_display() {
        let d = Component::Diode(TwoTerminal::new("D1", "2", "3", DEFAULT_DIODE_MODEL));
        assert_eq!(d.label(), "D1\n1N4148");
        assert_eq!(d.to_string(), "diode D1 (1N4148)");
    }
}
