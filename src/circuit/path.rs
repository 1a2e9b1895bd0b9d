//! Circuit path finding.
//!
//! Walks from the voltage source's positive node towards ground, one node at
//! a time. At each node the first unvisited part fixes the target node, and
//! every other unvisited part at that node leading to the same target joins
//! it as a parallel branch. Parts leading elsewhere are deferred: they are only
//! picked up if the walk later reaches their node again, so at most one group
//! is emitted per step.
//!
//! This is a heuristic for series/parallel ladders, not a general graph
//! reduction. Feedback loops and meshes lose parts silently.

use std::collections::HashSet;

use tracing::debug;

use super::graph::NodeGraph;
use super::types::{is_ground, BranchGroup, CircuitPath, MAX_PATH_STEPS};
use crate::components::{Component, Terminals};

/// Find the drawing order of `components`, starting at `start_node`.
///
/// Stops on ground, at a node with nothing left to walk, or after
/// [`MAX_PATH_STEPS`] groups. Parts that are never reached are left out.
pub fn find_path(components: &[Component], start_node: &str) -> CircuitPath {
    let graph = NodeGraph::build(components);
    let mut visited: HashSet<&str> = HashSet::new();
    let mut path = CircuitPath::default();
    let mut current_node: &str = start_node;

    while path.len() < MAX_PATH_STEPS {
        if is_ground(current_node) {
            debug!("path reached ground");
            break;
        }

        let available: Vec<&Component> = graph
            .components_at(current_node)
            .iter()
            .copied()
            .filter(|c| !visited.contains(c.name()))
            .collect();

        let Some(first) = available.first() else {
            debug!(node = current_node, "path dead-ends");
            break;
        };

        let Some(target) = first.next_node(current_node) else {
            debug!(node = current_node, part = first.name(), "no next node");
            break;
        };

        let members: Vec<Component> = available
            .iter()
            .filter(|c| c.next_node(current_node) == Some(target))
            .map(|c| {
                visited.insert(c.name());
                (*c).clone()
            })
            .collect();

        path.groups.push(BranchGroup {
            from_node: current_node.to_string(),
            to_node: target.to_string(),
            members,
        });
        current_node = target;
    }

    if path.len() == MAX_PATH_STEPS {
        debug!(limit = MAX_PATH_STEPS, "path step limit reached");
    }

    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::netlist::parse;

    fn path_names(netlist: &str, start: &str) -> Vec<Vec<String>> {
        let components = parse(netlist);
        find_path(&components, start)
            .names()
            .into_iter()
            .map(|g| g.into_iter().map(str::to_string).collect())
            .collect()
    }

    #[test]
    fn test_parallel_group() {
        let names = path_names("V1 1 0 10V\nR1 1 2 100\nR2 1 2 200\nR3 2 0 300", "1");
        assert_eq!(names, vec![vec!["R1", "R2"], vec!["R3"]]);
    }

    #[test]
    fn test_series_through_transistor() {
        let components = parse("V1 1 0 5V\nR1 1 2 10\nQ1 2 3 0 2N2222");
        let path = find_path(&components, "1");
        assert_eq!(path.names(), vec![vec!["R1"], vec!["Q1"]]);
        assert!(path.reaches_ground());
        assert_eq!(path.groups[1].from_node, "2");
        assert_eq!(path.groups[1].to_node, "0");
    }

    #[test]
    fn test_diode_chain() {
        let names = path_names("V1 1 0 12V\nR1 1 2 1k\nD1 2 3 1N4148\nR2 3 0 1k", "1");
        assert_eq!(names, vec![vec!["R1"], vec!["D1"], vec!["R2"]]);
    }

    #[test]
    fn test_opamp_continues_from_output() {
        let names = path_names("V1 1 0 12V\nR1 1 2 10k\nU1 3 2 4 1 0 LM741\nR2 3 0 1k", "1");
        assert_eq!(names, vec![vec!["R1"], vec!["U1"], vec!["R2"]]);
    }

    #[test]
    fn test_mosfet_exits_through_source() {
        // M1's source is ground, so R2 (entered at node 3) is never reached
        let names = path_names("V1 1 0 12V\nR1 1 2 100\nM1 2 3 0 0 IRF530\nR2 3 0 1k", "1");
        assert_eq!(names, vec![vec!["R1"], vec!["M1"]]);
    }

    #[test]
    fn test_divergent_branches_are_deferred() {
        // R2 leads to node 3, not R1's target 2; it is skipped in this pass and
        // never revisited because the walk does not come back to node 1.
        let names = path_names("V1 1 0 9V\nR1 1 2 1k\nR2 1 3 1k\nR3 1 2 2k\nR4 2 0 1k", "1");
        assert_eq!(names, vec![vec!["R1", "R3"], vec!["R4"]]);
    }

    #[test]
    fn test_parallel_to_ground() {
        let names = path_names("V1 1 0 9V\nR1 1 4 1k\nC1 4 0 10u\nR3 4 0 10k", "1");
        assert_eq!(names, vec![vec!["R1"], vec!["C1", "R3"]]);
    }

    #[test]
    fn test_start_at_ground_is_empty() {
        assert!(path_names("V1 0 1 5V\nR1 0 1 1k", "0").is_empty());
    }

    #[test]
    fn test_unknown_start_node_is_empty() {
        assert!(path_names("V1 1 0 5V\nR1 1 0 1k", "42").is_empty());
    }

    #[test]
    fn test_cycle_is_bounded_and_visits_once() {
        // 1 -> 2 -> 1 loop: each part can be walked only once
        let components = parse("V1 1 0 5V\nR1 1 2 1k\nR2 2 1 1k");
        let path = find_path(&components, "1");
        assert_eq!(path.names(), vec![vec!["R1"], vec!["R2"]]);
    }

    #[test]
    fn test_step_limit() {
        let mut netlist = String::from("V1 n0 0 5V\n");
        for i in 0..30 {
            netlist.push_str(&format!("R{} n{} n{} 1k\n", i, i, i + 1));
        }
        let components = parse(&netlist);
        let path = find_path(&components, "n0");
        assert_eq!(path.len(), MAX_PATH_STEPS);
        assert!(!path.reaches_ground());
    }

    #[test]
    fn test_no_duplicate_members() {
        let netlists = [
            "V1 1 0 9V\nR1 1 2 1k\nR2 2 1 1k\nR3 1 2 1k\nR4 2 0 1k",
            "V1 1 0 15V\nR1 1 2 1k\nD1 2 3 1N4007\nC1 3 4 100u\nU1 5 4 6 1 0 LM741\nR2 5 0 2k",
            "V1 1 0 9V\nR1 1 2 1k\nR2 2 3 1k\nU1 4 3 2 1 0 555\nC1 4 0 10u\nR3 4 0 10k",
        ];
        for netlist in netlists {
            let components = parse(netlist);
            let path = find_path(&components, "1");
            let mut seen = HashSet::new();
            for c in path.components() {
                assert!(seen.insert(c.name().to_string()), "{} visited twice", c.name());
            }
        }
    }
}
