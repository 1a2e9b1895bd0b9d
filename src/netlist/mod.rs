//! Parser for SPICE-like netlists.
//!
//! The format is line-oriented and whitespace-tokenized. Only component
//! records are interpreted; analysis cards, subcircuits and models are not.
//!
//! # Grammar Overview
//!
//! ```text
//! netlist   = { line }
//! line      = comment | directive | record | empty
//! comment   = '*' { any_char }
//! directive = '.' { any_char }                  (ignored)
//! record    = name node+ [value | model]
//! ```
//!
//! # Component Types
//!
//! | Type | Description | Syntax |
//! |------|-------------|--------|
//! | R | Resistor | `R<name> <n1> <n2> <value>` |
//! | C | Capacitor | `C<name> <n1> <n2> <value>` |
//! | L | Inductor | `L<name> <n1> <n2> <value>` |
//! | V | Voltage Source | `V<name> <n+> <n-> <value>` |
//! | D | Diode | `D<name> <anode> <cathode> [model]` (default `1N4148`) |
//! | Q | BJT | `Q<name> <collector> <base> <emitter> [model]` (default `2N2222`) |
//! | M | MOSFET | `M<name> <drain> <gate> <source> <body> [model]` (default `IRF530`) |
//! | U, X | IC / Op-Amp | `U<name> <node>... <model>` |
//!
//! Any other designator letter is read as a two-terminal part. Node `0` is
//! ground.
//!
//! Parsing is total: records with too few tokens are dropped rather than
//! reported, and [`parse_with_diagnostics`] exposes which lines were dropped.
//!
//! # Example
//!
//! ```text
//! * Parallel resistors
//! V1 1 0 10V
//! R1 1 2 100
//! R2 1 2 200
//! R3 2 0 300
//! ```

mod lexer;
mod parser;

pub use lexer::{Lexer, LineKind, SourceLine};
pub use parser::{ParsedNetlist, Parser};

use crate::components::Component;

/// Parse netlist text into components, in source order.
pub fn parse(input: &str) -> Vec<Component> {
    parse_with_diagnostics(input).components
}

/// Parse netlist text, also reporting which record lines were dropped.
pub fn parse_with_diagnostics(input: &str) -> ParsedNetlist {
    let lexer = Lexer::new(input);
    let mut parser = Parser::new(lexer);
    parser.parse()
}

/// Read and parse a netlist file.
pub fn parse_file(path: &std::path::Path) -> crate::error::Result<Vec<Component>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| crate::error::NetsketchError::file_read(path.display().to_string(), e))?;
    Ok(parse(&content))
}
