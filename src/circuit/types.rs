//! Core types for circuit traversal.

use std::fmt;

use serde::Serialize;

use crate::components::Component;

/// Label of the ground/reference node.
pub const GROUND: &str = "0";

/// Hard cap on traversal steps, and so on the number of branch-groups.
pub const MAX_PATH_STEPS: usize = 20;

/// Check if a node label is ground.
pub fn is_ground(node: &str) -> bool {
    node == GROUND
}

/// One slot of the circuit path.
///
/// Every member leaves `from_node` and arrives at `to_node`. Several members
/// mean the parts are drawn as parallel branches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BranchGroup {
    /// Node the group was reached from
    pub from_node: String,
    /// Node every member leads to
    pub to_node: String,
    /// Members in netlist order
    pub members: Vec<Component>,
}

impl BranchGroup {
    /// Whether the group holds more than one branch.
    pub fn is_parallel(&self) -> bool {
        self.members.len() > 1
    }

    /// Member names in order.
    pub fn names(&self) -> Vec<&str> {
        self.members.iter().map(|c| c.name()).collect()
    }
}

impl fmt::Display for BranchGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} -> {}",
            self.names().join(" || "),
            self.from_node,
            self.to_node
        )
    }
}

/// Ordered sequence of branch-groups, from the source's positive node on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CircuitPath {
    pub groups: Vec<BranchGroup>,
}

impl CircuitPath {
    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Check if the path is empty.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Group member names, one inner list per group.
    pub fn names(&self) -> Vec<Vec<&str>> {
        self.groups.iter().map(BranchGroup::names).collect()
    }

    /// Every component on the path, in drawing order.
    pub fn components(&self) -> impl Iterator<Item = &Component> {
        self.groups.iter().flat_map(|g| g.members.iter())
    }

    /// Whether the last group ends on ground.
    pub fn reaches_ground(&self) -> bool {
        self.groups
            .last()
            .map(|g| is_ground(&g.to_node))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::TwoTerminal;

    #[test]
    fn test_group_display() {
        let group = BranchGroup {
            from_node: "1".to_string(),
            to_node: "2".to_string(),
            members: vec![
                Component::Resistor(TwoTerminal::new("R1", "1", "2", "100")),
                Component::Resistor(TwoTerminal::new("R2", "1", "2", "200")),
            ],
        };
        assert!(group.is_parallel());
        assert_eq!(group.to_string(), "[R1 || R2] 1 -> 2");
    }

    #[test]
    fn test_empty_path() {
        let path = CircuitPath::default();
        assert!(path.is_empty());
        assert!(!path.reaches_ground());
        assert_eq!(path.components().count(), 0);
    }
}
