//! Node adjacency used for traversal.

use std::collections::HashMap;

use crate::components::Component;

/// Components indexed by the node where traversal enters them.
///
/// Voltage sources are left out: the source anchors the traversal rather
/// than being walked through. Parts without a defined in/out pair are left
/// out as well.
#[derive(Debug, Clone, Default)]
pub struct NodeGraph<'a> {
    edges: HashMap<&'a str, Vec<&'a Component>>,
}

impl<'a> NodeGraph<'a> {
    /// Build the graph from a component list.
    ///
    /// Two-terminal parts are keyed by `node1` even when `node2` is ground;
    /// ground only matters to the traversal's stop test.
    pub fn build(components: &'a [Component]) -> Self {
        let mut edges: HashMap<&'a str, Vec<&'a Component>> = HashMap::new();

        for component in components {
            if component.is_voltage_source() {
                continue;
            }
            if let Some(node) = component.primary_in_node() {
                edges.entry(node).or_default().push(component);
            }
        }

        Self { edges }
    }

    /// Components entered at `node`, in netlist order.
    pub fn components_at(&self, node: &str) -> &[&'a Component] {
        self.edges.get(node).map(Vec::as_slice).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::netlist::parse;

    fn names<'a>(graph: &NodeGraph<'a>, node: &str) -> Vec<&'a str> {
        graph.components_at(node).iter().map(|c| c.name()).collect()
    }

    #[test]
    fn test_keys_by_primary_in_node() {
        let components = parse(
            "V1 1 0 12V\nR1 1 2 10k\nU1 3 2 4 1 0 LM741\nQ1 3 5 0\nM1 3 6 0 0\nR2 3 0 1k",
        );
        let graph = NodeGraph::build(&components);

        assert_eq!(names(&graph, "1"), vec!["R1"]);
        assert_eq!(names(&graph, "2"), vec!["U1"]);
        assert_eq!(names(&graph, "3"), vec!["Q1", "M1", "R2"]);
        assert!(names(&graph, "0").is_empty());
    }

    #[test]
    fn test_voltage_source_excluded() {
        let components = parse("V1 1 0 5V\nV2 1 0 9V");
        let graph = NodeGraph::build(&components);
        assert!(graph.components_at("1").is_empty());
        assert!(graph.components_at("0").is_empty());
    }

    #[test]
    fn test_ground_return_keyed_by_node1() {
        let components = parse("R1 0 4 1k\nC1 4 0 1u");
        let graph = NodeGraph::build(&components);
        assert_eq!(names(&graph, "0"), vec!["R1"]);
        assert_eq!(names(&graph, "4"), vec!["C1"]);
    }
}
