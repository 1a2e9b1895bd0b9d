//! Parser for netlist records.

use tracing::debug;

use super::lexer::{Lexer, LineKind, SourceLine};
use crate::components::{
    Bjt, Component, ComponentKind, IntegratedCircuit, Mosfet, TwoTerminal, DEFAULT_BJT_MODEL,
    DEFAULT_DIODE_MODEL, DEFAULT_MOSFET_MODEL,
};

/// Fewest tokens any record may have before kind-specific checks.
const MIN_RECORD_TOKENS: usize = 3;

/// Output of a parse: the usable components plus the lines that were dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedNetlist {
    /// Components in source-line order
    pub components: Vec<Component>,
    /// 1-indexed line numbers of records with too few tokens
    pub skipped_lines: Vec<usize>,
}

impl ParsedNetlist {
    /// Check if nothing usable was found.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

/// Parser for netlist text.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
}

impl<'a> Parser<'a> {
    /// Create a new parser with the given lexer.
    pub fn new(lexer: Lexer<'a>) -> Self {
        Self { lexer }
    }

    /// Parse every line. Malformed records are dropped, never reported as errors.
    pub fn parse(&mut self) -> ParsedNetlist {
        let mut netlist = ParsedNetlist::default();

        for line in self.lexer.by_ref() {
            if line.kind != LineKind::Record {
                continue;
            }

            match parse_record(&line) {
                Some(component) => netlist.components.push(component),
                None => {
                    debug!(line = line.line, record = ?line.tokens, "skipping malformed record");
                    netlist.skipped_lines.push(line.line);
                }
            }
        }

        netlist
    }
}

fn parse_record(line: &SourceLine<'_>) -> Option<Component> {
    let tokens = &line.tokens;
    if tokens.len() < MIN_RECORD_TOKENS {
        return None;
    }

    let name = tokens[0];
    let kind = ComponentKind::from_designator(name);
    if tokens.len() < kind.min_tokens() {
        return None;
    }

    // Optional trailing model token, with a per-kind default
    let model_at = |idx: usize, default: &str| -> String {
        tokens.get(idx).copied().unwrap_or(default).to_string()
    };

    let component = match kind {
        ComponentKind::Diode => Component::Diode(TwoTerminal::new(
            name,
            tokens[1],
            tokens[2],
            model_at(3, DEFAULT_DIODE_MODEL),
        )),
        ComponentKind::Bjt => Component::Bjt(Bjt::new(
            name,
            tokens[1],
            tokens[2],
            tokens[3],
            model_at(4, DEFAULT_BJT_MODEL),
        )),
        ComponentKind::Mosfet => Component::Mosfet(Mosfet::new(
            name,
            tokens[1],
            tokens[2],
            tokens[3],
            tokens[4],
            model_at(5, DEFAULT_MOSFET_MODEL),
        )),
        ComponentKind::IntegratedCircuit => {
            // Last token is always the model; everything between is a node
            let (model, rest) = tokens.split_last()?;
            let all_nodes = rest[1..].iter().map(|s| s.to_string()).collect();
            Component::IntegratedCircuit(IntegratedCircuit::new(name, all_nodes, *model))
        }
        ComponentKind::Resistor => Component::Resistor(two_terminal(tokens)),
        ComponentKind::Capacitor => Component::Capacitor(two_terminal(tokens)),
        ComponentKind::Inductor => Component::Inductor(two_terminal(tokens)),
        ComponentKind::VoltageSource => Component::VoltageSource(two_terminal(tokens)),
        ComponentKind::Other(designator) => Component::Other {
            designator,
            part: two_terminal(tokens),
        },
    };

    Some(component)
}

/// `<name> <node1> <node2> <value>`; caller has checked the token count.
fn two_terminal(tokens: &[&str]) -> TwoTerminal {
    TwoTerminal::new(tokens[0], tokens[1], tokens[2], tokens[3])
}
