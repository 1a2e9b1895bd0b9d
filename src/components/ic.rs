//! Integrated circuits and op-amps (`U`/`X` lines).
//!
//! Pins are listed positionally. With three or more nodes the first three are
//! read as an op-amp's `out in+ in-`; with five or more the next two are the
//! supply rails `vcc vee`.

use serde::Serialize;

use super::Terminals;

/// A generic IC with an ordered node list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntegratedCircuit {
    pub name: String,
    /// Every node between the name and the model, in source order
    pub all_nodes: Vec<String>,
    pub model: String,
}

impl IntegratedCircuit {
    /// Create a new IC.
    pub fn new(name: impl Into<String>, all_nodes: Vec<String>, model: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            all_nodes,
            model: model.into(),
        }
    }

    fn named_pin(&self, min_nodes: usize, idx: usize) -> Option<&str> {
        if self.all_nodes.len() >= min_nodes {
            self.all_nodes.get(idx).map(String::as_str)
        } else {
            None
        }
    }

    /// Output node.
    pub fn output(&self) -> Option<&str> {
        self.named_pin(3, 0)
    }

    /// Non-inverting input node.
    pub fn in_plus(&self) -> Option<&str> {
        self.named_pin(3, 1)
    }

    /// Inverting input node.
    pub fn in_minus(&self) -> Option<&str> {
        self.named_pin(3, 2)
    }

    /// Positive supply node.
    pub fn vcc(&self) -> Option<&str> {
        self.named_pin(5, 3)
    }

    /// Negative supply node.
    pub fn vee(&self) -> Option<&str> {
        self.named_pin(5, 4)
    }

    /// Whether the model string names a known op-amp family.
    pub fn is_opamp(&self) -> bool {
        let model = self.model.to_lowercase();
        ["opamp", "741", "lm", "tl"]
            .iter()
            .any(|hint| model.contains(hint))
    }
}

impl Terminals for IntegratedCircuit {
    fn terminals(&self) -> Option<(&str, &str)> {
        let input = self
            .in_plus()
            .or_else(|| self.all_nodes.get(1).map(String::as_str))?;
        let output = self
            .output()
            .or_else(|| self.all_nodes.first().map(String::as_str))?;
        Some((input, output))
    }

    fn next_node(&self, _current: &str) -> Option<&str> {
        self.output()
            .or_else(|| self.all_nodes.first().map(String::as_str))
    }

    fn pin_count(&self) -> usize {
        self.all_nodes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nodes(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_opamp_pins() {
        let u = IntegratedCircuit::new("U1", nodes(&["3", "2", "4", "1", "0"]), "LM741");
        assert_eq!(u.output(), Some("3"));
        assert_eq!(u.in_plus(), Some("2"));
        assert_eq!(u.in_minus(), Some("4"));
        assert_eq!(u.vcc(), Some("1"));
        assert_eq!(u.vee(), Some("0"));
        assert_eq!(u.terminals(), Some(("2", "3")));
        assert!(u.is_opamp());
    }

    #[test]
    fn test_two_node_ic_falls_back_to_positions() {
        let u = IntegratedCircuit::new("X1", nodes(&["5", "6"]), "CD4049");
        assert_eq!(u.output(), None);
        assert_eq!(u.vcc(), None);
        assert_eq!(u.terminals(), Some(("6", "5")));
        assert_eq!(u.next_node("6"), Some("5"));
        assert!(!u.is_opamp());
    }

    #[test]
    fn test_timer_is_not_an_opamp() {
        let u = IntegratedCircuit::new("U1", nodes(&["4", "3", "2", "1", "0"]), "555");
        assert!(!u.is_opamp());
        assert_eq!(u.pin_count(), 5);
    }
}
