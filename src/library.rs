//! Built-in example netlists.
//!
//! Each one exercises a different part kind or path shape. Example 1 is
//! deliberately broken (negative resistance) to show a blocked drawing.

use serde::Serialize;

use crate::error::{NetsketchError, Result};

/// A named netlist shipped with the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Example {
    pub id: &'static str,
    pub name: &'static str,
    pub netlist: &'static str,
}

const EXAMPLES: &[Example] = &[
    Example {
        id: "1",
        name: "Simple RC (invalid resistor)",
        netlist: "V1 1 0 12V\nR1 1 2 -100\nC1 2 0 100u\n",
    },
    Example {
        id: "2",
        name: "Transistor",
        netlist: "V1 1 0 5V\nR1 1 2 10\nQ1 2 3 0 2N2222\n",
    },
    Example {
        id: "3",
        name: "Parallel resistors",
        netlist: "V1 1 0 10V\nR1 1 2 100\nR2 1 2 200\nR3 2 0 300\n",
    },
    Example {
        id: "4",
        name: "Diode",
        netlist: "V1 1 0 12V\nR1 1 2 1k\nD1 2 3 1N4148\nR2 3 0 1k\n",
    },
    Example {
        id: "5",
        name: "Op-amp",
        netlist: "V1 1 0 12V\nR1 1 2 10k\nU1 3 2 4 1 0 LM741\nR2 3 0 1k\n",
    },
    Example {
        id: "6",
        name: "555 timer",
        netlist: "V1 1 0 9V\nR1 1 2 1k\nR2 2 3 1k\nU1 4 3 2 1 0 555\nC1 4 0 10u\nR3 4 0 10k\n",
    },
    Example {
        id: "7",
        name: "MOSFET",
        netlist: "V1 1 0 12V\nR1 1 2 100\nM1 2 3 0 0 IRF530\nR2 3 0 1k\n",
    },
    Example {
        id: "8",
        name: "Mixed chain",
        netlist: "V1 1 0 15V\nR1 1 2 1k\nD1 2 3 1N4007\nC1 3 4 100u\nU1 5 4 6 1 0 LM741\nR2 5 0 2k\n",
    },
];

/// All built-in examples, ordered by id.
pub fn examples() -> &'static [Example] {
    EXAMPLES
}

/// Look up an example by id.
pub fn example(id: &str) -> Result<&'static Example> {
    EXAMPLES
        .iter()
        .find(|e| e.id == id.trim())
        .ok_or_else(|| NetsketchError::UnknownExample { id: id.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::LayoutConfig;
    use crate::schematic::draw_schematic;

    fn draw(id: &str) -> crate::schematic::Schematic {
        draw_schematic(example(id).unwrap().netlist, &LayoutConfig::default()).unwrap()
    }

    #[test]
    fn test_ids_are_unique_and_ordered() {
        let ids: Vec<&str> = examples().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5", "6", "7", "8"]);
    }

    #[test]
    fn test_unknown_example() {
        let err = example("42").unwrap_err();
        assert!(matches!(err, NetsketchError::UnknownExample { ref id } if id == "42"));
    }

    #[test]
    fn test_example_one_is_blocked() {
        let err = draw_schematic(example("1").unwrap().netlist, &LayoutConfig::default())
            .unwrap_err();
        assert!(matches!(err, NetsketchError::ValidationFailed { .. }));
    }

    #[test]
    fn test_parallel_example() {
        assert_eq!(draw("3").path.names(), vec![vec!["R1", "R2"], vec!["R3"]]);
    }

    #[test]
    fn test_timer_example() {
        let schematic = draw("6");
        assert_eq!(
            schematic.path.names(),
            vec![vec!["R1"], vec!["R2"], vec!["U1"], vec!["C1", "R3"]]
        );
        assert_eq!(schematic.warnings.len(), 1);
        // Four groups fit one row: the last never wraps alone
        assert_eq!(schematic.layout.rows, 1);
    }

    #[test]
    fn test_mosfet_example_leaves_drain_load_undrawn() {
        let schematic = draw("7");
        assert_eq!(schematic.path.names(), vec![vec!["R1"], vec!["M1"]]);
        assert_eq!(schematic.unreachable, vec!["R2"]);
    }

    #[test]
    fn test_mixed_chain_wraps() {
        let schematic = draw("8");
        assert_eq!(schematic.path.len(), 5);
        assert_eq!(schematic.layout.rows, 2);
        assert!(schematic.unreachable.is_empty());
    }

    #[test]
    fn test_every_valid_example_draws() {
        for e in examples().iter().filter(|e| e.id != "1") {
            let schematic = draw(e.id);
            assert!(!schematic.path.is_empty(), "example {} has no path", e.id);
        }
    }
}
