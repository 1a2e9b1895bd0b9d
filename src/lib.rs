//! # Netsketch Core
//!
//! Turns SPICE-style netlists into schematic drawing plans.
//!
//! This library provides:
//! - A forgiving line-oriented netlist parser
//! - Design-rule validation (value sanity, polarity hints, short circuits)
//! - A greedy traversal from the supply towards ground that groups parallel
//!   branches
//! - A row-wrapping layout planner with an SVG renderer
//! - JSON records for saving and reloading netlists
//!
//! ## Architecture
//!
//! - [`netlist`] - Netlist lexing and parsing
//! - [`components`] - Part records (two-terminal, BJT, MOSFET, IC)
//! - [`circuit`] - Validation, node graph and path finding
//! - [`layout`] - Drawing plan and SVG output
//! - [`schematic`] - The end-to-end pipeline
//! - [`storage`] - Saved circuit records
//! - [`library`] - Built-in example netlists
//!
//! ## Usage
//!
//! ### Native CLI
//!
//! ```bash
//! netsketch draw circuit.cir --svg circuit.svg
//! netsketch examples 3
//! ```
//!
//! ### Library
//!
//! ```
//! use netsketch_core::{draw_schematic, LayoutConfig};
//!
//! let schematic = draw_schematic(
//!     "V1 1 0 10V\nR1 1 2 100\nR2 1 2 200\nR3 2 0 300",
//!     &LayoutConfig::default(),
//! )
//! .unwrap();
//! assert_eq!(schematic.path.names(), vec![vec!["R1", "R2"], vec!["R3"]]);
//! ```
//!
//! ### WASM
//!
//! ```javascript
//! import { draw_svg } from 'netsketch_core';
//!
//! const svg = draw_svg(netlistText);
//! ```

pub mod circuit;
pub mod components;
pub mod error;
pub mod layout;
pub mod library;
pub mod netlist;
pub mod schematic;
pub mod storage;

// Re-export main types for convenience
pub use circuit::{find_path, validate_circuit, CircuitPath, ValidationReport};
pub use components::Component;
pub use error::{NetsketchError, Result};
pub use layout::{render_svg, LayoutConfig, LayoutPlan};
pub use schematic::{check_netlist, draw_schematic, Schematic};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::{check, draw_plan, draw_svg, version};
