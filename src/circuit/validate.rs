//! Circuit sanity checks.

use serde::Serialize;

use crate::components::{Component, Terminals};

/// Findings from [`validate_circuit`].
///
/// Errors must stop layout; warnings are advisory only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// True when nothing blocks layout.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Validate a component list.
///
/// Checks:
/// - Resistor values that read as a number must be positive
/// - Capacitors with a micro suffix are flagged as probable electrolytics
/// - No part may have its in and out terminals on the same node
pub fn validate_circuit(components: &[Component]) -> ValidationReport {
    let mut report = ValidationReport::default();

    for component in components {
        let name = component.name();
        let value = component.value();

        if let Component::Resistor(_) = component {
            if let Some(r) = parse_resistance(value) {
                if r <= 0.0 {
                    report
                        .errors
                        .push(format!("Resistor {} has an unrealistic resistance: {}", name, value));
                }
            }
        }

        if let Component::Capacitor(_) = component {
            if is_micro_farad(value) {
                report.warnings.push(format!(
                    "Capacitor {} ({}) is probably electrolytic; polarity was not checked",
                    name, value
                ));
            }
        }

        if let Some((node1, node2)) = short_check_pair(component) {
            if node1 == node2 {
                report.errors.push(format!(
                    "{} is tied to a single node '{}' (short circuit)",
                    name, node1
                ));
            }
        }
    }

    report
}

/// In/out pair checked for shorts.
///
/// ICs only have named pins with three or more nodes; the positional
/// fallback used for traversal is not checked.
fn short_check_pair(component: &Component) -> Option<(&str, &str)> {
    match component {
        Component::IntegratedCircuit(u) => u.in_plus().zip(u.output()),
        other => other.terminals(),
    }
}

/// Read a resistor value with only the `k` and `m` suffixes understood.
///
/// Anything else (`1K`, `4k7`, `10Ω`) does not parse and is left alone.
fn parse_resistance(value: &str) -> Option<f64> {
    value
        .replace('k', "e3")
        .replace('m', "e-3")
        .parse::<f64>()
        .ok()
}

fn is_micro_farad(value: &str) -> bool {
    let value = value.to_lowercase();
    value.ends_with('u') || value.ends_with('µ') || value.ends_with('μ')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::netlist::parse;

    #[test]
    fn test_clean_circuit() {
        let report = validate_circuit(&parse("V1 1 0 12V\nR1 1 2 1k\nD1 2 3\nR2 3 0 1k"));
        assert!(report.is_ok());
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_negative_resistance() {
        let report = validate_circuit(&parse("V1 1 0 12V\nR1 1 2 -100\nC1 2 0 100u"));
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].contains("R1"));
        assert!(report.errors[0].contains("unrealistic resistance"));
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("C1"));
    }

    #[test]
    fn test_zero_resistance_with_suffix() {
        for value in ["0", "0k", "-1k", "-2.2m", "-1e3"] {
            let report = validate_circuit(&parse(&format!("R9 1 2 {}", value)));
            assert_eq!(report.errors.len(), 1, "value {}", value);
        }
    }

    #[test]
    fn test_unparseable_resistance_is_ignored() {
        for value in ["-10Ω", "1K", "abc", "4k7", "-1meg"] {
            let report = validate_circuit(&parse(&format!("R1 1 2 {}", value)));
            assert!(report.is_ok(), "value {}", value);
        }
    }

    #[test]
    fn test_resistance_only_checked_on_resistors() {
        let report = validate_circuit(&parse("C1 1 2 -5\nL1 2 3 0"));
        assert!(report.is_ok());
    }

    #[test]
    fn test_electrolytic_suffixes() {
        let report = validate_circuit(&parse("C1 1 0 10u\nC2 1 0 47U\nC3 1 0 1µ\nC4 1 0 100n"));
        assert_eq!(report.warnings.len(), 3);
        assert!(report.is_ok());
    }

    #[test]
    fn test_short_circuit_once_per_part() {
        let report = validate_circuit(&parse("R1 2 2 -5\nD1 4 4\nQ1 3 1 3\nC1 1 0 1n"));
        let shorts: Vec<&String> = report
            .errors
            .iter()
            .filter(|e| e.contains("short circuit"))
            .collect();
        assert_eq!(shorts.len(), 3);
        assert_eq!(report.errors.iter().filter(|e| e.contains("R1")).count(), 2);
        assert_eq!(report.errors.iter().filter(|e| e.contains("D1")).count(), 1);
        assert_eq!(report.errors.iter().filter(|e| e.contains("Q1")).count(), 1);
    }

    #[test]
    fn test_ic_short_needs_named_pins() {
        let report = validate_circuit(&parse("X1 5 5 CD4049"));
        assert!(report.is_ok());

        let report = validate_circuit(&parse("U1 3 3 4 1 0 LM741"));
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].contains("U1 is tied to a single node '3'"));
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(validate_circuit(&[]), ValidationReport::default());
    }
}
