//! End-to-end drawing pipeline.
//!
//! parse → validate → find the source → find the path → plan the layout.
//! The two hard preconditions (something parsed, a voltage source present)
//! and blocking validation errors are checked before any graph work.

use serde::Serialize;
use tracing::{info, warn};

use crate::circuit::{find_path, validate_circuit, CircuitPath, ValidationReport};
use crate::components::Component;
use crate::error::{NetsketchError, Result};
use crate::layout::{plan_layout, LayoutConfig, LayoutPlan};
use crate::netlist::{parse_with_diagnostics, ParsedNetlist};

/// Everything produced for one netlist.
#[derive(Debug, Clone, Serialize)]
pub struct Schematic {
    /// All parsed components, source included
    pub components: Vec<Component>,
    /// 1-indexed lines dropped by the parser
    pub skipped_lines: Vec<usize>,
    /// Advisory findings; errors never reach this point
    pub warnings: Vec<String>,
    /// Name of the source anchoring the drawing
    pub source: String,
    pub path: CircuitPath,
    /// Parts the traversal never reached, in netlist order
    pub unreachable: Vec<String>,
    pub layout: LayoutPlan,
}

/// Parse and validate only.
///
/// Fails with [`NetsketchError::NoComponents`] on an empty netlist; findings
/// are returned, not raised.
pub fn check_netlist(text: &str) -> Result<(ParsedNetlist, ValidationReport)> {
    let parsed = parse_with_diagnostics(text);
    if parsed.is_empty() {
        return Err(NetsketchError::NoComponents);
    }
    let report = validate_circuit(&parsed.components);
    Ok((parsed, report))
}

/// Run the full pipeline on netlist text.
pub fn draw_schematic(text: &str, config: &LayoutConfig) -> Result<Schematic> {
    let (parsed, report) = check_netlist(text)?;

    if !report.is_ok() {
        return Err(NetsketchError::ValidationFailed {
            errors: report.errors,
        });
    }
    for warning in &report.warnings {
        warn!("{}", warning);
    }

    let ParsedNetlist {
        components,
        skipped_lines,
    } = parsed;

    let source = components
        .iter()
        .find(|c| c.is_voltage_source())
        .ok_or(NetsketchError::MissingVoltageSource)?;
    let start_node = source
        .primary_in_node()
        .ok_or(NetsketchError::MissingVoltageSource)?;

    let others: Vec<Component> = components
        .iter()
        .filter(|c| !c.is_voltage_source())
        .cloned()
        .collect();
    let path = find_path(&others, start_node);

    let unreachable: Vec<String> = others
        .iter()
        .map(Component::name)
        .filter(|name| !path.components().any(|c| c.name() == *name))
        .map(str::to_string)
        .collect();
    if !unreachable.is_empty() {
        info!(parts = ?unreachable, "parts not on the traversal path");
    }

    let layout = plan_layout(source, &path, config);
    info!(
        components = components.len(),
        groups = path.len(),
        rows = layout.rows,
        "schematic planned"
    );

    let source = source.name().to_string();
    Ok(Schematic {
        source,
        components,
        skipped_lines,
        warnings: report.warnings,
        path,
        unreachable,
        layout,
    })
}
